/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use proc_macro2::{Ident, TokenStream};
use quote::quote;

use crate::util::ident;

/// Engine enum or bitfield, global or declared by a class.
pub struct Enum {
    pub name: Ident,
    pub godot_name: String,
    pub is_bitfield: bool,
    pub enumerators: Vec<Enumerator>,
}

/// Named value. `ord` fits `i32` for enums and is non-negative for bitfields.
pub struct Enumerator {
    pub name: Ident,
    pub godot_name: String,
    pub ord: i64,
}

impl Enum {
    /// Field type of the newtype.
    pub fn ord_type(&self) -> Ident {
        ident(if self.is_bitfield { "u64" } else { "i32" })
    }

    pub fn engine_trait(&self) -> TokenStream {
        if self.is_bitfield {
            quote! { crate::obj::EngineBitfield }
        } else {
            quote! { crate::obj::EngineEnum }
        }
    }

    /// Ordinals accepted by `try_from_ord()`, ascending and without aliases.
    pub fn distinct_ords(&self) -> Vec<i64> {
        let mut ords: Vec<i64> = self.enumerators.iter().map(|e| e.ord).collect();
        ords.sort_unstable();
        ords.dedup();
        ords
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enumerator(name: &str, ord: i64) -> Enumerator {
        Enumerator {
            name: ident(name),
            godot_name: name.to_string(),
            ord,
        }
    }

    #[test]
    fn aliases_share_one_ord() {
        let enum_ = Enum {
            name: ident("DrawFlags"),
            godot_name: "DrawFlags".to_string(),
            is_bitfield: false,
            enumerators: vec![enumerator("SHADED", 0), enumerator("MAX", 5), enumerator("DOUBLE_SIDED", 1), enumerator("FIRST", 0)],
        };

        assert_eq!(enum_.distinct_ords(), [0, 1, 5]);
        assert_eq!(enum_.ord_type(), "i32");
    }
}
