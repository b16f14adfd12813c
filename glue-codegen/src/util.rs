/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use proc_macro2::{Ident, Punct, Spacing, TokenStream};
use quote::{format_ident, quote};

pub fn ident(s: &str) -> Ident {
    format_ident!("{}", s)
}

/// Escapes Rust keywords by appending `_`, e.g. `type` -> `type_`.
#[rustfmt::skip]
pub fn safe_ident(s: &str) -> Ident {
    // See also: https://doc.rust-lang.org/reference/keywords.html
    match s {
        // Lexer
        | "as" | "break" | "const" | "continue" | "crate" | "else" | "enum" | "extern" | "false" | "fn" | "for" | "if"
        | "impl" | "in" | "let" | "loop" | "match" | "mod" | "move" | "mut" | "pub" | "ref" | "return" | "self" | "Self"
        | "static" | "struct" | "super" | "trait" | "true" | "type" | "unsafe" | "use" | "where" | "while"

        // Lexer 2018+
        | "async" | "await" | "dyn"

        // Reserved
        | "abstract" | "become" | "box" | "do" | "final" | "macro" | "override" | "priv" | "typeof" | "unsized" | "virtual" | "yield"

        // Reserved 2018+
        | "try"
           => format_ident!("{}_", s),

         _ => ident(s)
    }
}

/// Lifetime token `'name`; `proc_macro2::Ident` cannot hold the apostrophe.
pub fn lifetime(s: &str) -> TokenStream {
    let tk = Punct::new('\'', Spacing::Joint);
    let ident = ident(s);

    quote! { #tk #ident }
}

/// Imports shared by all generated class files.
pub fn make_imports() -> TokenStream {
    quote! {
        #[allow(unused_imports)]
        use crate::builtin::*;
        #[allow(unused_imports)]
        use crate::meta::{AsArg, AsObjectArg, CowArg, InternedName, ObjectArg, Signature};
        #[allow(unused_imports)]
        use crate::obj::Gd;
        #[allow(unused_imports)]
        use crate::signal::{SignalObject, TypedSignal};
        use crate::sys;
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_are_escaped() {
        assert_eq!(safe_ident("type").to_string(), "type_");
        assert_eq!(safe_ident("mod").to_string(), "mod_");
        assert_eq!(safe_ident("layer").to_string(), "layer");
    }

    #[test]
    fn lifetime_tokens() {
        assert_eq!(lifetime("a0").to_string(), "'a0");
    }
}
