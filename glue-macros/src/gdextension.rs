/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use proc_macro2::TokenStream;
use quote::quote;

use crate::util::{bail, ident, path_is_single, validate_trait_impl, KvParser};
use crate::ParseResult;

const DEFAULT_ENTRY_SYMBOL: &str = "gdext_rust_init";

pub fn attribute_gdextension(item: venial::Item) -> ParseResult<TokenStream> {
    let mut impl_decl = match item {
        venial::Item::Impl(decl) => decl,
        _ => {
            return bail!(
                item,
                "#[gdextension] can only be applied to `unsafe impl ExtensionLibrary` blocks",
            )
        }
    };

    validate_trait_impl(&impl_decl, "ExtensionLibrary", "gdextension")?;
    if impl_decl.tk_unsafe.is_none() {
        return bail!(
            &impl_decl.tk_impl,
            "`impl ExtensionLibrary` must be marked unsafe, to confirm your opt-in to the binding's safety model",
        );
    }

    let (own_attrs, other_attrs) = std::mem::take(&mut impl_decl.attributes)
        .into_iter()
        .partition::<Vec<_>, _>(|attr| path_is_single(&attr.path, "gdextension"));
    impl_decl.attributes = other_attrs;

    let mut parser = KvParser::parse_required(&own_attrs, "gdextension", &impl_decl)?;
    let entry_symbol = parser.handle_ident("entry_symbol")?;
    parser.finish()?;

    let entry_symbol = entry_symbol.unwrap_or_else(|| ident(DEFAULT_ENTRY_SYMBOL));
    let impl_ty = &impl_decl.self_ty;
    let sys = quote! { ::glue::sys };

    Ok(quote! {
        #impl_decl

        #[no_mangle]
        unsafe extern "C" fn #entry_symbol(
            get_proc_address: #sys::GDExtensionInterfaceGetProcAddress,
            library: #sys::GDExtensionClassLibraryPtr,
            init: *mut #sys::GDExtensionInitialization,
        ) -> #sys::GDExtensionBool {
            ::glue::private::__gdext_load_library::<#impl_ty>(
                get_proc_address,
                library,
                init
            )
        }

        const _: () = {
            // Ensures that the entry point matches the signature advertised in the FFI header.
            let _unused: #sys::GDExtensionInitializationFunction = Some(#entry_symbol);
        };
    })
}

// ----------------------------------------------------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::venial_parse_meta;

    fn expand(meta: TokenStream, input: TokenStream) -> ParseResult<String> {
        let item = venial_parse_meta(&meta, ident("gdextension"), &input)?;
        attribute_gdextension(item).map(|tokens| tokens.to_string())
    }

    #[test]
    fn default_entry_symbol() {
        let code = expand(
            quote! {},
            quote! { unsafe impl ExtensionLibrary for MyExtension {} },
        )
        .expect("valid input");

        assert!(code.contains("fn gdext_rust_init"));
        assert!(code.contains("__gdext_load_library :: < MyExtension >"));
        assert!(!code.contains("# [gdextension"));
    }

    #[test]
    fn custom_entry_symbol() {
        let code = expand(
            quote! { entry_symbol = custom_init },
            quote! {
                #[allow(unused)]
                unsafe impl glue::init::ExtensionLibrary for MyExtension {}
            },
        )
        .expect("valid input");

        assert!(code.contains("fn custom_init"));
        assert!(!code.contains("gdext_rust_init"));
        assert!(code.contains("# [allow (unused)]"));
    }

    #[test]
    fn rejects_safe_impl() {
        let result = expand(quote! {}, quote! { impl ExtensionLibrary for MyExtension {} });
        assert!(result.is_err());
    }

    #[test]
    fn rejects_other_items() {
        assert!(expand(quote! {}, quote! { unsafe impl OtherTrait for MyExtension {} }).is_err());
        assert!(expand(quote! {}, quote! { impl MyExtension {} }).is_err());
        assert!(expand(quote! {}, quote! { struct MyExtension; }).is_err());
    }

    #[test]
    fn rejects_unknown_keys() {
        let result = expand(
            quote! { entry_point = init },
            quote! { unsafe impl ExtensionLibrary for MyExtension {} },
        );
        assert!(result.is_err());
    }
}
