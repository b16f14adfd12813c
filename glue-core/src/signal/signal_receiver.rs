/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Emulates variadic argument lists (via tuples) for functions connected to signals.

use std::marker::PhantomData;

use crate::meta::{FromGodot, InParamTuple};

/// Trait that is implemented for functions that can be connected to signals.
///
/// Any `FnMut(P0, P1, ...) -> R` closure or function with up to 7 parameters qualifies, as long as each parameter implements
/// [`FromGodot`]. The return value is ignored.
pub trait SignalReceiver<Ps>: 'static {
    /// Invoke the receiver with `params`.
    fn call(&mut self, params: Ps);
}

/// Identity view on a receiver, which lets rustc infer closure parameter types from the signal signature.
///
/// Without it, connecting `|index| ...` would require spelling out `|index: i64| ...`, since inference does not look
/// through the `SignalReceiver` bound into the `FnMut` impls.
pub struct IndirectSignalReceiver<'view, Ps, F>
where
    Ps: InParamTuple,
    F: SignalReceiver<Ps> + 'static,
{
    inner: &'view mut F,
    _phantoms: PhantomData<Ps>,
}

impl<'view, Ps, F> IndirectSignalReceiver<'view, Ps, F>
where
    Ps: InParamTuple,
    F: SignalReceiver<Ps> + 'static,
{
    /// Retrieves inner `&mut F` function ready to be used as [`SignalReceiver`].
    pub fn function(&'view mut self) -> &'view mut F {
        self.inner
    }

    fn new(inner: &'view mut F) -> Self {
        Self {
            inner,
            _phantoms: PhantomData,
        }
    }
}

macro_rules! impl_signal_receiver {
    ($( #[$attr:meta] )? $( $args:ident : $Ps:ident ),*) => {
        $( #[$attr] )?
        impl<F, R, $($Ps: std::fmt::Debug + FromGodot + 'static),*> SignalReceiver<( $($Ps,)* )> for F
            where F: FnMut( $($Ps,)* ) -> R + 'static
        {
            fn call(&mut self, ($($args,)*): ( $($Ps,)* )) {
                self($($args,)*);
            }
        }

        $( #[$attr] )?
        impl<'c_view, F, R, $($Ps: std::fmt::Debug + FromGodot + 'static),*>
            From<&'c_view mut F> for IndirectSignalReceiver<'c_view, ($($Ps,)*), F>
            where F: FnMut( $($Ps,)* ) -> R + 'static
        {
            fn from(value: &'c_view mut F) -> Self {
                IndirectSignalReceiver::new(value)
            }
        }
    };
}

impl_signal_receiver!(#[doc(hidden)] );
impl_signal_receiver!(#[doc(hidden)] arg0: P0);
impl_signal_receiver!(#[doc(hidden)] arg0: P0, arg1: P1);
impl_signal_receiver!(               arg0: P0, arg1: P1, arg2: P2);
impl_signal_receiver!(#[doc(hidden)] arg0: P0, arg1: P1, arg2: P2, arg3: P3);
impl_signal_receiver!(#[doc(hidden)] arg0: P0, arg1: P1, arg2: P2, arg3: P3, arg4: P4);
impl_signal_receiver!(#[doc(hidden)] arg0: P0, arg1: P1, arg2: P2, arg3: P3, arg4: P4, arg5: P5);
impl_signal_receiver!(#[doc(hidden)] arg0: P0, arg1: P1, arg2: P2, arg3: P3, arg4: P4, arg5: P5, arg6: P6);

#[cfg(test)]
mod tests {
    use super::*;

    fn invoke<Ps, F>(mut function: F, params: Ps)
    where
        Ps: InParamTuple,
        F: SignalReceiver<Ps>,
        for<'v> IndirectSignalReceiver<'v, Ps, F>: From<&'v mut F>,
    {
        IndirectSignalReceiver::from(&mut function).function().call(params);
    }

    #[test]
    fn closures_receive_params_in_order() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();

        invoke(move |a: i64, b: bool| sink.borrow_mut().push(format!("{a}/{b}")), (7_i64, true));
        assert_eq!(*seen.borrow(), ["7/true"]);
    }

    #[test]
    fn return_value_is_ignored() {
        invoke(|| 42, ());
    }
}
