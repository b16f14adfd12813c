/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Typed signal collections: `SignalsOfItemList` with one accessor per signal, deref'ing to the nearest base collection.

use proc_macro2::{Ident, TokenStream};
use quote::{format_ident, quote};

use crate::context::Context;
use crate::conv;
use crate::models::domain::{Class, ClassSignal, FnParam, ModName, RustTy, TyName};
use crate::util::safe_ident;

pub struct SignalCodegen {
    /// Collection and individual signal types, placed in the sidecar module.
    pub signal_code: TokenStream,

    /// `signals()` accessor inside the class `impl`; empty if the class inherits all its signals.
    pub accessor: TokenStream,
}

pub fn make_class_signals(class: &Class, ctx: &Context) -> SignalCodegen {
    let signals = &class.signals;

    // Classes without own signals reach the base accessor through Deref.
    if signals.is_empty() {
        return SignalCodegen {
            signal_code: TokenStream::new(),
            accessor: TokenStream::new(),
        };
    }

    let class_name = class.name();
    let collection_struct_name = make_collection_name(class_name);
    let nearest_base = ctx.find_nearest_base_with_signals(class_name);

    let all_params: Vec<SignalParams> = signals.iter().map(|s| SignalParams::new(&s.params)).collect();

    let collection = make_signal_collection(class_name, signals, &all_params, nearest_base.as_ref());
    let signal_types = signals
        .iter()
        .zip(all_params.iter())
        .map(|(signal, params)| make_signal_individual_struct(signal, params));

    let signal_code = quote! {
        #collection
        #( #signal_types )*
    };

    let accessor_doc = format!(
        "Typed signals of this class and its bases; see [`{collection_struct_name}`][super::{module}::{collection_struct_name}].",
        module = class.mod_name().rust_mod,
    );

    let accessor = quote! {
        #[doc = #accessor_doc]
        pub fn signals(&mut self) -> super::#collection_struct_name<'_> {
            super::#collection_struct_name::__new(crate::signal::SignalObject::__new(self.object_ptr))
        }
    };

    SignalCodegen { signal_code, accessor }
}

// Used outside, to document class with links to this type.
pub fn make_collection_name(class_name: &TyName) -> Ident {
    format_ident!("SignalsOf{}", class_name.rust_ty)
}

fn make_individual_struct_name(signal_name: &str) -> Ident {
    let signal_pascal_name = conv::to_pascal_case(signal_name);
    format_ident!("Sig{}", signal_pascal_name)
}

fn make_signal_collection(
    class_name: &TyName,
    signals: &[ClassSignal],
    params: &[SignalParams],
    nearest_base: Option<&TyName>,
) -> TokenStream {
    let collection_struct_name = make_collection_name(class_name);

    let provider_methods = signals.iter().zip(params).map(|(sig, params)| {
        let signal_name_str = &sig.name;
        let signal_name = safe_ident(&sig.name);
        let individual_struct_name = make_individual_struct_name(&sig.name);
        let provider_docs = format!("Signature: `({})`", params.formatted_types);

        quote! {
            // Important to return lifetime 'c here, not '_.
            #[doc = #provider_docs]
            pub fn #signal_name(&mut self) -> #individual_struct_name<'c> {
                #individual_struct_name {
                    typed: TypedSignal::__new(self.__object(), #signal_name_str),
                }
            }
        }
    });

    let collection_docs = format!(
        "A collection of signals for the [`{c}`][crate::classes::{c}] class.",
        c = class_name.rust_ty
    );

    // Root of the hierarchy stores the object; derived collections wrap their nearest base.
    let (field, constructor, object_access, deref_impl) = match nearest_base {
        None => (
            quote! { __object: SignalObject<'c> },
            quote! { Self { __object: object } },
            quote! { self.__object },
            TokenStream::new(),
        ),
        Some(base) => {
            let base_module = ModName::from_godot(&base.godot_ty);
            let base_collection = make_collection_name(base);
            let base_path = quote! { crate::classes::#base_module::#base_collection };

            let deref_impl = quote! {
                impl<'c> std::ops::Deref for #collection_struct_name<'c> {
                    type Target = #base_path<'c>;

                    fn deref(&self) -> &Self::Target {
                        &self.__base
                    }
                }

                impl std::ops::DerefMut for #collection_struct_name<'_> {
                    fn deref_mut(&mut self) -> &mut Self::Target {
                        &mut self.__base
                    }
                }
            };

            (
                quote! { __base: #base_path<'c> },
                quote! { Self { __base: #base_path::__new(object) } },
                quote! { self.__base.__object() },
                deref_impl,
            )
        }
    };

    quote! {
        #[doc = #collection_docs]
        pub struct #collection_struct_name<'c> {
            #field,
        }

        impl<'c> #collection_struct_name<'c> {
            #[doc(hidden)]
            pub fn __new(object: SignalObject<'c>) -> Self {
                #constructor
            }

            #[doc(hidden)]
            pub fn __object(&self) -> SignalObject<'c> {
                #object_access
            }

            #( #provider_methods )*
        }

        #deref_impl
    }
}

fn make_signal_individual_struct(signal: &ClassSignal, params: &SignalParams) -> TokenStream {
    let individual_struct_name = make_individual_struct_name(&signal.name);

    let SignalParams {
        param_list,
        type_list,
        name_list,
        ..
    } = params;

    let param_tuple = quote! { ( #type_list ) };
    let typed_name = format_ident!("Typed{}", individual_struct_name);

    quote! {
        // Reduce tokens to parse by reusing this type definitions.
        type #typed_name<'c> = TypedSignal<'c, #param_tuple>;

        pub struct #individual_struct_name<'c> {
           typed: #typed_name<'c>,
        }

        impl #individual_struct_name<'_> {
            pub fn emit(&mut self, #param_list) {
                self.typed.emit_tuple( (#name_list) );
            }
        }

        impl<'c> std::ops::Deref for #individual_struct_name<'c> {
            type Target = #typed_name<'c>;

            fn deref(&self) -> &Self::Target {
                &self.typed
            }
        }

        impl std::ops::DerefMut for #individual_struct_name<'_> {
            fn deref_mut(&mut self) -> &mut Self::Target {
                &mut self.typed
            }
        }
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------

struct SignalParams {
    /// `name: Type, ...`
    param_list: TokenStream,

    /// `Type, ...` -- for example inside a tuple type.
    type_list: TokenStream,

    /// `name, ...` -- for example inside a tuple value.
    name_list: TokenStream,

    /// `"name: Type, ..."` in nice format.
    formatted_types: String,
}

impl SignalParams {
    fn new(params: &[FnParam]) -> Self {
        let mut param_list = TokenStream::new();
        let mut type_list = TokenStream::new();
        let mut name_list = TokenStream::new();
        let mut formatted = Vec::with_capacity(params.len());

        for param in params.iter() {
            let param_name = &param.name;
            let param_ty = &param.type_;

            param_list.extend(quote! { #param_name: #param_ty, });
            type_list.extend(quote! { #param_ty, });
            name_list.extend(quote! { #param_name, });

            let formatted_ty = match param_ty {
                RustTy::EngineClass { inner_class, .. } => format!("Option<Gd<{inner_class}>>"),
                other => other.to_string(),
            };

            formatted.push(format!("{param_name}: {formatted_ty}"));
        }

        Self {
            param_list,
            type_list,
            name_list,
            formatted_types: formatted.join(", "),
        }
    }
}
