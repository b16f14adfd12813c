/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Interned name tables `PropertyName`, `MethodName` and `SignalName`, placed in each class' sidecar module.
//!
//! Every table only lists the names declared by its own class; inherited names are found in the base class' module.

use std::collections::HashSet;

use proc_macro2::{Ident, TokenStream};
use quote::quote;

use crate::models::domain::Class;
use crate::util::ident;

pub fn make_name_tables(class: &Class) -> TokenStream {
    let class_name = &class.name().rust_ty;

    let properties = class.property_names.iter().map(String::as_str);
    let methods = class.methods.iter().map(|m| m.godot_name.as_str());
    let signals = class.signals.iter().map(|s| s.name.as_str());

    let property_table = make_name_table("PropertyName", "Properties", class_name, properties);
    let method_table = make_name_table("MethodName", "Methods", class_name, methods);
    let signal_table = make_name_table("SignalName", "Signals", class_name, signals);

    quote! {
        #property_table
        #method_table
        #signal_table
    }
}

/// Constant identifier of a Godot name inside a table: `item_count` -> `ITEM_COUNT`, `layer_0/name` -> `LAYER_0_NAME`.
pub fn make_name_const(godot_name: &str) -> Ident {
    let mut constant: String = godot_name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_uppercase() } else { '_' })
        .collect();

    if constant.starts_with(|c: char| c.is_ascii_digit()) {
        constant.insert(0, '_');
    }

    ident(&constant)
}

fn make_name_table<'a>(
    table_name: &str,
    kind: &str,
    class_name: &Ident,
    names: impl Iterator<Item = &'a str>,
) -> TokenStream {
    let table = ident(table_name);
    let doc = format!("{kind} declared by [`{class_name}`][super::{class_name}], as interned engine names.");

    // First name wins if two sanitize to the same constant.
    let mut seen = HashSet::new();
    let constants = names
        .map(|name| (make_name_const(name), name))
        .filter(|(constant, _)| seen.insert(constant.to_string()))
        .map(|(constant, name)| {
            quote! {
                pub const #constant: InternedName = InternedName::new(#name);
            }
        });

    quote! {
        #[doc = #doc]
        pub struct #table;

        impl #table {
            #( #constants )*
        }
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn property_paths_become_identifiers() {
        assert_eq!(make_name_const("item_count"), "ITEM_COUNT");
        assert_eq!(make_name_const("layer_0/tile_data"), "LAYER_0_TILE_DATA");
        assert_eq!(make_name_const("3d_mode"), "_3D_MODE");
    }

    #[test]
    fn colliding_constants_are_emitted_once() {
        let names = ["text", "TEXT", "text/x"].into_iter();
        let code = make_name_table("PropertyName", "Properties", &ident("Label3D"), names).to_string();

        assert_eq!(code.matches("pub const TEXT :").count(), 1);
        assert!(code.contains("pub const TEXT_X :"));
    }
}
