/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Engine enums and bitfields.
//!
//! Both become newtypes over their ordinal with one associated constant per enumerator. Ordinals unknown at generation
//! time stay representable for bitfields; enums reject them in `try_from_ord()`.

use std::path::Path;

use proc_macro2::{Literal, TokenStream};
use quote::quote;

use crate::models::domain::{Enum, Enumerator, ExtensionApi};
use crate::SubmitFn;

pub fn generate_global_enums_file(api: &ExtensionApi, gen_path: &Path, submit_fn: &mut SubmitFn) {
    let definitions = make_enums(&api.global_enums);

    let code = quote! {
        //! Global enums and bitfields of `@GlobalScope`.

        #definitions
    };

    submit_fn(gen_path.join("global.rs"), code);
}

pub fn make_enums(enums: &[Enum]) -> TokenStream {
    enums.iter().map(make_enum_definition).collect()
}

pub fn make_enum_definition(enum_: &Enum) -> TokenStream {
    let name = &enum_.name;
    let ord_type = enum_.ord_type();
    let engine_trait = enum_.engine_trait();

    let default_derive = enum_.is_bitfield.then(|| quote! { Default, });
    let type_doc = (name != enum_.godot_name.as_str()).then(|| {
        let doc = format!("Godot enum name: `{}`.", enum_.godot_name);
        quote! { #[doc = #doc] }
    });

    let constants = enum_.enumerators.iter().map(make_enumerator_constant);
    let name_lookup = make_name_lookup(enum_);
    let engine_trait_impl = if enum_.is_bitfield {
        make_bitfield_impls(enum_)
    } else {
        make_enum_impl(enum_)
    };

    quote! {
        #type_doc
        #[repr(transparent)]
        #[derive(Copy, Clone, Eq, PartialEq, Hash, #default_derive)]
        pub struct #name {
            ord: #ord_type
        }

        impl #name {
            #( #constants )*

            #name_lookup
        }

        impl std::fmt::Debug for #name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self.enumerator_name() {
                    Some(enumerator) => f.write_str(enumerator),
                    None => f.debug_struct(stringify!(#name)).field("ord", &self.ord).finish(),
                }
            }
        }

        #engine_trait_impl

        impl crate::meta::GodotConvert for #name {
            type Via = #ord_type;
        }

        impl crate::meta::ToGodot for #name {
            fn to_godot(&self) -> Self::Via {
                <Self as #engine_trait>::ord(*self)
            }
        }

        impl crate::meta::FromGodot for #name {
            fn try_from_godot(via: Self::Via) -> std::result::Result<Self, crate::meta::ConvertError> {
                Ok(Self { ord: via })
            }
        }
    }
}

/// `pub const CAPTURED: MouseMode = MouseMode { ord: 2 };`
fn make_enumerator_constant(enumerator: &Enumerator) -> TokenStream {
    let Enumerator { name, godot_name, ord } = enumerator;
    let ord = Literal::i64_unsuffixed(*ord);

    let alias = (name != godot_name.as_str()).then(|| {
        let doc = format!("Godot enumerator name: `{godot_name}`");
        quote! {
            #[doc(alias = #godot_name)]
            #[doc = #doc]
        }
    });

    quote! {
        #alias
        pub const #name: Self = Self { ord: #ord };
    }
}

/// First enumerator declared for the ordinal; later aliases are unreachable.
fn make_name_lookup(enum_: &Enum) -> TokenStream {
    let arms = enum_.enumerators.iter().map(|Enumerator { name, .. }| {
        let name_str = name.to_string();
        quote! { Self::#name => Some(#name_str), }
    });

    quote! {
        #[allow(unreachable_patterns)]
        fn enumerator_name(self) -> Option<&'static str> {
            match self {
                #( #arms )*
                _ => None,
            }
        }
    }
}

fn make_enum_impl(enum_: &Enum) -> TokenStream {
    let name = &enum_.name;
    let ords: Vec<Literal> = enum_.distinct_ords().into_iter().map(Literal::i64_unsuffixed).collect();
    let known_arm = (!ords.is_empty()).then(|| quote! { #( #ords )|* => Some(Self { ord }), });

    quote! {
        impl crate::obj::EngineEnum for #name {
            fn try_from_ord(ord: i32) -> Option<Self> {
                match ord {
                    #known_arm
                    _ => None,
                }
            }

            fn ord(self) -> i32 {
                self.ord
            }
        }
    }
}

/// Any combination of bits is valid; bitwise or composes flags.
fn make_bitfield_impls(enum_: &Enum) -> TokenStream {
    let name = &enum_.name;

    quote! {
        impl crate::obj::EngineBitfield for #name {
            fn try_from_ord(ord: u64) -> Option<Self> {
                Some(Self { ord })
            }

            fn ord(self) -> u64 {
                self.ord
            }
        }

        impl std::ops::BitOr for #name {
            type Output = Self;

            fn bitor(self, rhs: Self) -> Self::Output {
                Self { ord: self.ord | rhs.ord }
            }
        }

        impl std::ops::BitOrAssign for #name {
            fn bitor_assign(&mut self, rhs: Self) {
                *self = *self | rhs;
            }
        }
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::ident;

    fn enum_with(is_bitfield: bool, values: &[(&str, i64)]) -> Enum {
        Enum {
            name: ident("Sample"),
            godot_name: "Sample".to_string(),
            is_bitfield,
            enumerators: values
                .iter()
                .map(|&(name, ord)| Enumerator {
                    name: ident(name),
                    godot_name: name.to_string(),
                    ord,
                })
                .collect(),
        }
    }

    fn compact(tokens: TokenStream) -> String {
        tokens.to_string().replace(' ', "")
    }

    #[test]
    fn empty_enum_rejects_every_ord() {
        let code = compact(make_enum_definition(&enum_with(false, &[])));

        assert!(code.contains("fntry_from_ord(ord:i32)->Option<Self>"));
        assert!(code.contains("matchord{_=>None,}"), "{code}");
    }

    #[test]
    fn only_bitfields_derive_default() {
        let bitfield = compact(make_enum_definition(&enum_with(true, &[("LEFT", 1)])));
        let enum_ = compact(make_enum_definition(&enum_with(false, &[("LEFT", 1)])));

        assert!(bitfield.contains("Hash,Default,"));
        assert!(bitfield.contains("implstd::ops::BitOrforSample"));
        assert!(!enum_.contains("Default"));
        assert!(!enum_.contains("BitOr"));
    }
}
