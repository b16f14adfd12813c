/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

// Note: some code duplication with codegen crate

mod kv_parser;

pub(crate) use kv_parser::KvParser;

use proc_macro2::{Ident, TokenStream, TokenTree};
use quote::{format_ident, quote, ToTokens};

use crate::ParseResult;

pub fn ident(s: &str) -> Ident {
    format_ident!("{}", s)
}

/// Constructs a `venial::Error` at the location of `tokens`.
macro_rules! error {
    ($tokens:expr, $format_string:literal $($rest:tt)*) => {
        $crate::util::error_fn(format!($format_string $($rest)*), $tokens)
    }
}

/// Returns `Err` with a `venial::Error` at the location of `tokens`.
macro_rules! bail {
    ($tokens:expr, $format_string:literal $($rest:tt)*) => {
        Err($crate::util::error!($tokens, $format_string $($rest)*))
    }
}

pub(crate) use bail;
pub(crate) use error;

pub fn error_fn(msg: impl AsRef<str>, tokens: impl ToTokens) -> venial::Error {
    venial::Error::new_at_tokens(tokens, msg.as_ref())
}

/// Re-parses the item with the attribute that was consumed by the compiler, so that `KvParser` can read its arguments
/// like those of any other attribute.
pub fn venial_parse_meta(
    meta: &TokenStream,
    self_name: Ident,
    content: &TokenStream,
) -> ParseResult<venial::Item> {
    let input = quote! {
        #[#self_name(#meta)]
        #content
    };

    venial::parse_item(input)
}

pub(crate) fn is_punct(tt: &TokenTree, c: char) -> bool {
    match tt {
        TokenTree::Punct(punct) => punct.as_char() == c,
        _ => false,
    }
}

pub(crate) fn path_is_single(path: &[TokenTree], expected: &str) -> bool {
    path.len() == 1 && path[0].to_string() == expected
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Validation for trait/impl

/// Whether `original_impl` is of the form `impl <name> for SomeType`, ignoring any path qualification of the trait.
pub(crate) fn is_impl_named(original_impl: &venial::Impl, name: &str) -> bool {
    original_impl
        .trait_ty
        .as_ref()
        .and_then(|trait_ty| trait_ty.as_path())
        .and_then(|mut path| path.segments.pop())
        .is_some_and(|segment| segment.ident == name)
}

/// Validates that the declaration is `impl Trait for SomeType`, without generic parameters.
pub(crate) fn validate_trait_impl(
    original_impl: &venial::Impl,
    expected_trait: &str,
    attr: &str,
) -> ParseResult<()> {
    if original_impl.impl_generic_params.is_some() {
        return bail!(
            original_impl,
            "#[{attr}] does not support lifetimes or generic parameters",
        );
    }

    if original_impl.trait_ty.is_none() || !is_impl_named(original_impl, expected_trait) {
        return bail!(
            original_impl,
            "#[{attr}] can only be applied on `impl {expected_trait} for T` blocks",
        );
    }

    Ok(())
}
