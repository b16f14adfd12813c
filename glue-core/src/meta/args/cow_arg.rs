/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;
use std::ops::Deref;

use crate::meta::{GodotConvert, ToGodot};

/// Owned or borrowed value, used when passing arguments through `impl AsArg` or `&T` parameters to engine APIs.
///
/// Only passed _to_ the engine, so there is no `FromGodot` impl.
#[doc(hidden)]
#[derive(PartialEq)]
pub enum CowArg<'r, T> {
    Owned(T),
    Borrowed(&'r T),
}

impl<T> CowArg<'_, T> {
    pub fn cow_into_owned(self) -> T
    where
        T: Clone,
    {
        match self {
            CowArg::Owned(v) => v,
            CowArg::Borrowed(r) => r.clone(),
        }
    }

    pub fn cow_as_ref(&self) -> &T {
        match self {
            CowArg::Owned(v) => v,
            CowArg::Borrowed(r) => r,
        }
    }
}

impl<T> GodotConvert for CowArg<'_, T>
where
    T: GodotConvert,
{
    type Via = T::Via;
}

impl<T> ToGodot for CowArg<'_, T>
where
    T: ToGodot,
{
    fn to_godot(&self) -> Self::Via {
        self.cow_as_ref().to_godot()
    }
}

impl<T> fmt::Debug for CowArg<'_, T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CowArg::Owned(v) => write!(f, "CowArg::Owned({v:?})"),
            CowArg::Borrowed(r) => write!(f, "CowArg::Borrowed({r:?})"),
        }
    }
}

impl<T> Deref for CowArg<'_, T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        self.cow_as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owned_and_borrowed_compare_by_value() {
        let owned = CowArg::Owned(5_i64);
        let five = 5_i64;
        let borrowed = CowArg::Borrowed(&five);

        assert_eq!(*owned.cow_as_ref(), *borrowed);
        assert_eq!(owned.to_godot(), 5);
        assert_eq!(format!("{borrowed:?}"), "CowArg::Borrowed(5)");
        assert_eq!(borrowed.cow_into_owned(), 5);
    }
}
