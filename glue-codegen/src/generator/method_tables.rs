/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Method-bind tables, one per init level.
//!
//! Eager tables resolve every bind when the level is loaded and store them in index order. Lazy tables
//! (`codegen-lazy-fptrs`) resolve a bind on its first call and cache it by class, method and hash.

use proc_macro2::{Ident, TokenStream};
use quote::{format_ident, quote};

use crate::models::domain::{Class, ClassCodegenLevel, ClassMethod, ExtensionApi};

pub fn make_class_method_table(api: &ExtensionApi, api_level: ClassCodegenLevel) -> TokenStream {
    let classes: Vec<&Class> = api
        .classes
        .iter()
        .filter(|class| class.api_level == api_level && !class.methods.is_empty())
        .collect();

    let method_count = verify_dense_indices(&classes, api_level);
    make_method_table(api_level.table_struct(), &classes, method_count)
}

/// Checks that the methods of all `classes`, in order, occupy indices `0..n`. Returns `n`.
fn verify_dense_indices(classes: &[&Class], api_level: ClassCodegenLevel) -> usize {
    let methods = classes.iter().flat_map(|class| &class.methods);

    let mut count = 0;
    for (expected, method) in methods.enumerate() {
        assert_eq!(
            method.table_index, expected,
            "gap in {} method table at {}",
            api_level.lower(),
            method.godot_name
        );
        count += 1;
    }

    count
}

#[cfg(not(feature = "codegen-lazy-fptrs"))]
fn make_method_table(table_name: Ident, classes: &[&Class], method_count: usize) -> TokenStream {
    let class_count = classes.len();

    let loader_fns = classes.iter().map(|class| make_class_loader(class));
    let loader_calls = classes.iter().map(|class| {
        let loader = loader_fn_name(class);
        quote! {
            #loader(&mut function_pointers, string_names, fetch_fptr);
        }
    });

    // Levels without bound classes load nothing.
    let (unused_attr, load_body) = if method_count == 0 {
        (
            Some(quote! { #[allow(unused_variables)] }),
            quote! { let function_pointers = Vec::new(); },
        )
    } else {
        let body = quote! {
            let fetch_fptr = interface.classdb_get_method_bind;

            let mut function_pointers = Vec::with_capacity(#method_count);
            #( #loader_calls )*
        };
        (None, body)
    };

    quote! {
        pub struct #table_name {
            function_pointers: Vec<crate::ClassMethodBind>,
        }

        impl #table_name {
            pub const CLASS_COUNT: usize = #class_count;
            pub const METHOD_COUNT: usize = #method_count;

            #[allow(clippy::missing_safety_doc)]
            #unused_attr
            pub unsafe fn load(
                interface: &crate::GDExtensionInterface,
                string_names: &mut crate::StringCache,
            ) -> Self {
                #load_body

                Self { function_pointers }
            }

            #[inline(always)]
            pub fn fptr_by_index(&self, index: usize) -> crate::ClassMethodBind {
                // SAFETY: indices are generated together with the table and are below METHOD_COUNT.
                unsafe { *self.function_pointers.get_unchecked(index) }
            }
        }

        #( #loader_fns )*
    }
}

#[cfg(feature = "codegen-lazy-fptrs")]
fn make_method_table(table_name: Ident, classes: &[&Class], method_count: usize) -> TokenStream {
    let class_count = classes.len();

    quote! {
        use std::cell::RefCell;
        use std::collections::HashMap;

        use crate::lazy_keys::ClassMethodKey;
        use crate::StringCache;

        struct ResolvedBinds {
            // Interface and lifecycle tables live for the rest of the program once tables are loaded.
            string_cache: StringCache<'static>,
            binds: HashMap<ClassMethodKey, crate::ClassMethodBind>,
        }

        pub struct #table_name {
            resolved: RefCell<ResolvedBinds>,
        }

        impl #table_name {
            pub const CLASS_COUNT: usize = #class_count;
            pub const METHOD_COUNT: usize = #method_count;

            #[allow(clippy::missing_safety_doc)]
            pub unsafe fn load() -> Self {
                // SAFETY: only called after the interface and lifecycle tables are initialized.
                let (interface, lifecycle) = unsafe { (crate::get_interface(), crate::builtin_lifecycle_api()) };

                Self {
                    resolved: RefCell::new(ResolvedBinds {
                        string_cache: StringCache::new(interface, lifecycle),
                        binds: HashMap::new(),
                    }),
                }
            }

            pub fn fptr_by_key(&self, key: ClassMethodKey) -> crate::ClassMethodBind {
                let mut guard = self.resolved.borrow_mut();
                let resolved = &mut *guard;

                if let Some(bind) = resolved.binds.get(&key) {
                    return *bind;
                }

                let bind = crate::load_class_method(
                    crate::interface_fn!(classdb_get_method_bind),
                    &mut resolved.string_cache,
                    None,
                    key.class_name,
                    key.method_name,
                    key.hash,
                );
                resolved.binds.insert(key, bind);
                bind
            }
        }
    }
}

#[cfg_attr(feature = "codegen-lazy-fptrs", allow(dead_code))]
fn loader_fn_name(class: &Class) -> Ident {
    format_ident!("load_{}_methods", class.mod_name().rust_mod)
}

/// `fn load_item_list_methods(..)`, pushing the binds of one class in index order.
#[cfg_attr(feature = "codegen-lazy-fptrs", allow(dead_code))]
fn make_class_loader(class: &Class) -> TokenStream {
    let loader = loader_fn_name(class);
    let class_var = format_ident!("sname_{}", class.mod_name().rust_mod);
    let godot_class = class.name().godot_ty.as_str();

    let method_inits = class
        .methods
        .iter()
        .map(|method| make_class_method_init(godot_class, method, &class_var));

    quote! {
        fn #loader(
            function_pointers: &mut Vec<crate::ClassMethodBind>,
            string_names: &mut crate::StringCache,
            fetch_fptr: crate::GDExtensionInterfaceClassdbGetMethodBind,
        ) {
            let #class_var = string_names.fetch(#godot_class);

            #(
                function_pointers.push(#method_inits);
            )*
        }
    }
}

#[cfg_attr(feature = "codegen-lazy-fptrs", allow(dead_code))]
fn make_class_method_init(godot_class: &str, method: &ClassMethod, class_var: &Ident) -> TokenStream {
    let method_name = method.godot_name.as_str();
    let hash = method.hash;

    quote! {
        crate::load_class_method(
            fetch_fptr,
            string_names,
            Some(#class_var),
            #godot_class,
            #method_name,
            #hash
        )
    }
}
