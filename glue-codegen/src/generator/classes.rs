/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::path::Path;

use proc_macro2::{Ident, TokenStream};
use quote::quote;

use crate::context::Context;
use crate::generator::functions_common::{FnCode, FnDefinition, FnReceiver};
use crate::generator::signals::SignalCodegen;
use crate::generator::{constants, enums, functions_common, name_tables, signals};
use crate::models::domain::{Class, ClassMethod, ExtensionApi, ModName, TyName};
use crate::{util, SubmitFn};

pub fn generate_class_files(api: &ExtensionApi, ctx: &mut Context, gen_path: &Path, submit_fn: &mut SubmitFn) {
    let _ = std::fs::remove_dir_all(gen_path);
    std::fs::create_dir_all(gen_path).expect("create classes directory");

    let mut modules = vec![];
    for class in api.classes.iter() {
        let file_contents = make_class(class, ctx);
        let out_path = gen_path.join(format!("{}.rs", class.mod_name().rust_mod));

        submit_fn(out_path, file_contents);

        modules.push(GeneratedClassModule {
            class_name: class.name().clone(),
            module_name: class.mod_name().clone(),
        });
    }

    let out_path = gen_path.join("mod.rs");
    let mod_contents = make_class_module_file(modules);

    submit_fn(out_path, mod_contents);
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Implementation

struct GeneratedClassModule {
    class_name: TyName,
    module_name: ModName,
}

pub(crate) fn make_class(class: &Class, ctx: &Context) -> TokenStream {
    let class_name = class.name();
    let godot_class_str = &class_name.godot_ty;

    let base_ty = match class.base_class.as_ref() {
        Some(base) => {
            let base = &base.rust_ty;
            quote! { crate::classes::#base }
        }
        None => quote! { () },
    };

    let constructor = make_constructor(class, ctx);
    let init_level = class.api_level.to_init_level();

    let FnDefinition {
        functions: methods,
        builders,
    } = make_class_methods(class, &class.methods);

    let SignalCodegen {
        signal_code,
        accessor: signals_accessor,
    } = signals::make_class_signals(class, ctx);

    let enums = enums::make_enums(&class.enums);
    let constants = constants::make_constants(&class.constants);
    let name_tables = name_tables::make_name_tables(class);
    let deref_impl = make_deref_impl(class_name, &base_ty);
    let memory = make_memory(class);

    let all_bases = ctx.inheritance_tree().collect_all_bases(class_name);
    let all_base_idents = all_bases.iter().map(|base| &base.rust_ty);

    let class_doc = make_class_doc(class_name, class.base_class.as_ref(), class.mod_name());
    let module_doc = format!("Sidecar module for class [`{0}`][crate::classes::{0}].", class_name.rust_ty);

    let instantiable_impl = class.is_instantiable.then(|| {
        quote! {
            impl crate::obj::Instantiable for #class_name {}
        }
    });

    // mod re_export needed, because class should not appear inside the file module, and we can't re-export private struct as pub.
    let imports = util::make_imports();
    quote! {
        #![doc = #module_doc]

        #imports

        pub(super) mod re_export {
            use super::*;

            #[doc = #class_doc]
            #[derive(Debug)]
            #[repr(C)]
            pub struct #class_name {
                object_ptr: sys::GDExtensionObjectPtr,
            }

            impl #class_name {
                #constructor
                #methods
                #signals_accessor
                #constants
            }

            impl crate::obj::GodotClass for #class_name {
                const CLASS_NAME: &'static str = #godot_class_str;
                type Base = #base_ty;
                type Memory = crate::obj::#memory;
                const INIT_LEVEL: crate::init::InitLevel = #init_level;
            }

            impl crate::obj::EngineClass for #class_name {
                fn as_object_ptr(&self) -> sys::GDExtensionObjectPtr {
                    self.object_ptr
                }
            }

            // SAFETY: all engine classes share the same layout, and the bases are taken from the JSON inheritance chain.
            #(
                unsafe impl crate::obj::Inherits<crate::classes::#all_base_idents> for #class_name {}
            )*

            #instantiable_impl
            #deref_impl
        }

        #builders
        #enums
        #name_tables
        #signal_code
    }
}

fn make_class_module_file(classes_and_modules: Vec<GeneratedClassModule>) -> TokenStream {
    let class_decls = classes_and_modules.iter().map(|m| {
        let GeneratedClassModule {
            module_name,
            class_name,
        } = m;

        quote! {
            pub mod #module_name;
            pub use #module_name::re_export::#class_name;
        }
    });

    quote! {
        #( #class_decls )*
    }
}

fn make_constructor(class: &Class, ctx: &Context) -> TokenStream {
    let godot_class_name = &class.name().godot_ty;

    if !ctx.is_singleton(class.name()) {
        // Instantiable classes are constructed through `Gd::new_alloc()` / `Gd::new_gd()`.
        return TokenStream::new();
    }

    let panic_msg = format!("engine singleton `{godot_class_name}` is not available");

    // Singletons are never reference-counted by the extension; the engine owns them for its whole lifetime.
    quote! {
        /// Returns the engine singleton, looked up once and cached afterwards.
        ///
        /// # Panics
        /// If the engine does not provide the singleton.
        pub fn singleton() -> Gd<Self> {
            let object_ptr = Self::__singleton_cell()
                .get_or_lookup(|| {
                    let class_name = InternedName::new(#godot_class_name);
                    // SAFETY: interface is loaded; the name is alive for the duration of the call.
                    unsafe { sys::interface_fn!(global_get_singleton)(class_name.string_sys()) }
                })
                .unwrap_or_else(|| panic!(#panic_msg));

            // SAFETY: the engine returned a live object of this class.
            unsafe { Gd::from_obj_sys_weak(object_ptr) }
        }

        #[doc(hidden)]
        pub fn __singleton_cell() -> &'static sys::SingletonCell {
            static SINGLETON: sys::SingletonCell = sys::SingletonCell::new();
            &SINGLETON
        }
    }
}

fn make_deref_impl(class_name: &TyName, base_ty: &TokenStream) -> TokenStream {
    // The base_ty of `Object` is `()`, and we dont want every engine class to deref to `()`.
    if class_name.rust_ty == "Object" {
        return TokenStream::new();
    }

    quote! {
        impl std::ops::Deref for #class_name {
            type Target = #base_ty;

            fn deref(&self) -> &Self::Target {
                // SAFETY: all engine classes are #[repr(C)] structs with the same single field.
                unsafe { std::mem::transmute::<&Self, &Self::Target>(self) }
            }
        }
        impl std::ops::DerefMut for #class_name {
            fn deref_mut(&mut self) -> &mut Self::Target {
                // SAFETY: see above
                unsafe { std::mem::transmute::<&mut Self, &mut Self::Target>(self) }
            }
        }
    }
}

fn make_memory(class: &Class) -> Ident {
    if class.is_refcounted {
        util::ident("MemRefCounted")
    } else {
        util::ident("MemManual")
    }
}

fn make_class_doc(class_name: &TyName, base: Option<&TyName>, module: &ModName) -> String {
    let inherits_line = match base {
        Some(base) => format!("\n\nInherits [`{0}`][crate::classes::{0}].", base.rust_ty),
        None => String::new(),
    };

    format!(
        "Godot class `{godot}`.{inherits_line}\n\n\
        Related symbols (default-param builders, enums, interned names, signals) are in [`{module}`][crate::classes::{module}].",
        godot = class_name.godot_ty,
        module = module.rust_mod,
    )
}

fn make_class_methods(class: &Class, methods: &[ClassMethod]) -> FnDefinition {
    methods
        .iter()
        .map(|method| make_class_method_definition(class, method))
        .collect()
}

fn make_class_method_definition(class: &Class, method: &ClassMethod) -> FnDefinition {
    let get_method_table = class.api_level.table_global_getter();

    let rust_class_name = class.name().rust_ty.to_string();
    let rust_method_name = method.name.as_str();
    let godot_method_name = method.godot_name.as_str();
    let hash = method.hash;

    let receiver = FnReceiver::new(method.qualifier, quote! { self.object_ptr });

    let fptr_access = if cfg!(feature = "codegen-lazy-fptrs") {
        let godot_class_name = &class.name().godot_ty;
        quote! {
            fptr_by_key(sys::lazy_keys::ClassMethodKey {
                class_name: #godot_class_name,
                method_name: #godot_method_name,
                hash: #hash,
            })
        }
    } else {
        let table_index = method.table_index;
        quote! { fptr_by_index(#table_index) }
    };

    let object_ptr = &receiver.ffi_arg;
    let ptrcall_invocation = quote! {
        let method_bind = sys::#get_method_table().#fptr_access;

        Signature::<CallParams, CallRet>::out_class_ptrcall(
            method_bind,
            #rust_class_name,
            #rust_method_name,
            #object_ptr,
            args,
        )
    };

    let varcall_invocation = quote! {
        let method_bind = sys::#get_method_table().#fptr_access;

        Signature::<CallParams, CallRet>::out_class_varcall(
            method_bind,
            #rust_class_name,
            #rust_method_name,
            #object_ptr,
            args,
            varargs,
        )
    };

    functions_common::make_function_definition(
        class.name(),
        method,
        &FnCode {
            receiver,
            varcall_invocation,
            ptrcall_invocation,
        },
    )
}
