/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! The three engine string types and conversions between them.
//!
//! | Intended use case | String type      |
//! |-------------------|------------------|
//! | General purpose   | [`GString`]      |
//! | Interned names    | [`StringName`]   |
//! | Scene-node paths  | [`NodePath`]     |

mod gstring;
mod node_path;
mod string_name;

pub use gstring::*;
pub use node_path::*;
pub use string_name::*;

macro_rules! impl_rust_string_conv {
    ($Ty:ty) => {
        impl From<String> for $Ty {
            fn from(s: String) -> Self {
                Self::from(s.as_str())
            }
        }

        impl From<&String> for $Ty {
            fn from(s: &String) -> Self {
                Self::from(s.as_str())
            }
        }

        impl From<&$Ty> for String {
            fn from(s: &$Ty) -> Self {
                s.to_string()
            }
        }

        impl From<$Ty> for String {
            fn from(s: $Ty) -> Self {
                s.to_string()
            }
        }

        impl std::str::FromStr for $Ty {
            type Err = std::convert::Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self::from(s))
            }
        }
    };
}

impl_rust_string_conv!(GString);
impl_rust_string_conv!(StringName);
impl_rust_string_conv!(NodePath);
