/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Central file of `glue-core`: registry of bound classes and the hooks run on (de)initialization.

use std::path::Path;

use proc_macro2::TokenStream;
use quote::quote;

use crate::models::domain::ExtensionApi;
use crate::SubmitFn;

pub fn generate_core_central_file(api: &ExtensionApi, gen_path: &Path, submit_fn: &mut SubmitFn) {
    let code = make_core_central_code(api);

    submit_fn(gen_path.join("central.rs"), code);
}

pub(crate) fn make_core_central_code(api: &ExtensionApi) -> TokenStream {
    let class_entries = api.classes.iter().map(|class| {
        let godot_name = &class.name().godot_ty;
        let init_level = class.api_level.to_init_level();

        quote! {
            (#godot_name, #init_level),
        }
    });

    let singleton_resets = api.singletons.iter().map(|singleton| {
        let class = &singleton.rust_ty;

        quote! {
            crate::classes::#class::__singleton_cell().reset();
        }
    });

    let class_count = api.classes.len();

    quote! {
        /// Godot name and initialization level of every bound engine class, in declaration order.
        pub const ENGINE_CLASS_NAMES: [(&str, crate::init::InitLevel); #class_count] = [
            #( #class_entries )*
        ];

        /// Initialization level at which the method binds of `class_name` are available; `None` if the class is not bound.
        pub fn class_init_level(class_name: &str) -> Option<crate::init::InitLevel> {
            ENGINE_CLASS_NAMES
                .iter()
                .find(|(name, _)| *name == class_name)
                .map(|(_, level)| *level)
        }

        /// Forgets all cached singleton pointers; they are looked up again after re-initialization.
        pub(crate) fn reset_singletons() {
            #( #singleton_resets )*
        }
    }
}
