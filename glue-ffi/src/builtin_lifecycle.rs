/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Function tables for builtin types: construction, destruction, variant conversion, and a few builtin methods.

use crate as sys;
use crate::toolbox::{load_builtin_method, load_utility_function, validate_builtin_lifecycle};
use crate::{BuiltinMethodBind, UtilityFunctionBind, VariantType};

pub type ToVariantFn = unsafe extern "C" fn(sys::GDExtensionUninitializedVariantPtr, sys::GDExtensionTypePtr);
pub type FromVariantFn = unsafe extern "C" fn(sys::GDExtensionUninitializedTypePtr, sys::GDExtensionVariantPtr);
pub type ConstructFn = unsafe extern "C" fn(sys::GDExtensionUninitializedTypePtr, *const sys::GDExtensionConstTypePtr);
pub type DestroyFn = unsafe extern "C" fn(sys::GDExtensionTypePtr);

// Constructor indices, in the order of `constructors` in extension_api.json.
const CTOR_DEFAULT: i32 = 0;
const CTOR_COPY: i32 = 1;
const CTOR_STRING_FROM_STRING_NAME: i32 = 2;
const CTOR_STRING_FROM_NODE_PATH: i32 = 3;
const CTOR_STRING_NAME_FROM_STRING: i32 = 2;
const CTOR_NODE_PATH_FROM_STRING: i32 = 2;

macro_rules! variant_conversions {
    ( $( $to_variant:ident, $from_variant:ident => $Variant:ident; )* ) => {
        /// Conversions between builtin values and `Variant`.
        pub struct VariantConversions {
            $(
                pub $to_variant: ToVariantFn,
                pub $from_variant: FromVariantFn,
            )*
        }

        impl VariantConversions {
            unsafe fn load(interface: &sys::GDExtensionInterface) -> Self {
                let get_to_variant_fn = interface.get_variant_from_type_constructor;
                let get_from_variant_fn = interface.get_variant_to_type_constructor;

                Self {
                    $(
                        $to_variant: validate_builtin_lifecycle(
                            get_to_variant_fn(VariantType::$Variant.sys()),
                            concat!(stringify!($Variant), " -> Variant"),
                        ),
                        $from_variant: validate_builtin_lifecycle(
                            get_from_variant_fn(VariantType::$Variant.sys()),
                            concat!("Variant -> ", stringify!($Variant)),
                        ),
                    )*
                }
            }
        }
    };
}

variant_conversions! {
    bool_to_variant, bool_from_variant => Bool;
    int_to_variant, int_from_variant => Int;
    float_to_variant, float_from_variant => Float;
    string_to_variant, string_from_variant => String;
    vector2_to_variant, vector2_from_variant => Vector2;
    vector2i_to_variant, vector2i_from_variant => Vector2i;
    rect2_to_variant, rect2_from_variant => Rect2;
    rect2i_to_variant, rect2i_from_variant => Rect2i;
    vector3_to_variant, vector3_from_variant => Vector3;
    color_to_variant, color_from_variant => Color;
    string_name_to_variant, string_name_from_variant => StringName;
    node_path_to_variant, node_path_from_variant => NodePath;
    rid_to_variant, rid_from_variant => Rid;
    object_to_variant, object_from_variant => Object;
    callable_to_variant, callable_from_variant => Callable;
    packed_int32_array_to_variant, packed_int32_array_from_variant => PackedInt32Array;
}

/// Constructors, destructors and variant conversions of the builtin types in use.
pub struct BuiltinLifecycleTable {
    pub conversions: VariantConversions,

    pub string_construct_default: ConstructFn,
    pub string_construct_copy: ConstructFn,
    pub string_from_string_name: ConstructFn,
    pub string_from_node_path: ConstructFn,
    pub string_destroy: DestroyFn,

    pub string_name_construct_default: ConstructFn,
    pub string_name_construct_copy: ConstructFn,
    pub string_name_from_string: ConstructFn,
    pub string_name_destroy: DestroyFn,

    pub node_path_construct_default: ConstructFn,
    pub node_path_construct_copy: ConstructFn,
    pub node_path_from_string: ConstructFn,
    pub node_path_destroy: DestroyFn,

    pub callable_construct_default: ConstructFn,
    pub callable_construct_copy: ConstructFn,
    pub callable_destroy: DestroyFn,

    pub packed_int32_array_construct_default: ConstructFn,
    pub packed_int32_array_construct_copy: ConstructFn,
    pub packed_int32_array_destroy: DestroyFn,
}

impl BuiltinLifecycleTable {
    /// # Safety
    /// `interface` must have been loaded from a running engine.
    pub unsafe fn load(interface: &sys::GDExtensionInterface) -> Self {
        let get_construct_fn = interface.variant_get_ptr_constructor;
        let get_destroy_fn = interface.variant_get_ptr_destructor;

        let ctor = |ty: VariantType, index: i32, what: &str| {
            validate_builtin_lifecycle(get_construct_fn(ty.sys(), index), what)
        };
        let dtor = |ty: VariantType, what: &str| validate_builtin_lifecycle(get_destroy_fn(ty.sys()), what);

        Self {
            conversions: VariantConversions::load(interface),

            string_construct_default: ctor(VariantType::String, CTOR_DEFAULT, "String()"),
            string_construct_copy: ctor(VariantType::String, CTOR_COPY, "String(String)"),
            string_from_string_name: ctor(VariantType::String, CTOR_STRING_FROM_STRING_NAME, "String(StringName)"),
            string_from_node_path: ctor(VariantType::String, CTOR_STRING_FROM_NODE_PATH, "String(NodePath)"),
            string_destroy: dtor(VariantType::String, "~String"),

            string_name_construct_default: ctor(VariantType::StringName, CTOR_DEFAULT, "StringName()"),
            string_name_construct_copy: ctor(VariantType::StringName, CTOR_COPY, "StringName(StringName)"),
            string_name_from_string: ctor(VariantType::StringName, CTOR_STRING_NAME_FROM_STRING, "StringName(String)"),
            string_name_destroy: dtor(VariantType::StringName, "~StringName"),

            node_path_construct_default: ctor(VariantType::NodePath, CTOR_DEFAULT, "NodePath()"),
            node_path_construct_copy: ctor(VariantType::NodePath, CTOR_COPY, "NodePath(NodePath)"),
            node_path_from_string: ctor(VariantType::NodePath, CTOR_NODE_PATH_FROM_STRING, "NodePath(String)"),
            node_path_destroy: dtor(VariantType::NodePath, "~NodePath"),

            callable_construct_default: ctor(VariantType::Callable, CTOR_DEFAULT, "Callable()"),
            callable_construct_copy: ctor(VariantType::Callable, CTOR_COPY, "Callable(Callable)"),
            callable_destroy: dtor(VariantType::Callable, "~Callable"),

            packed_int32_array_construct_default: ctor(
                VariantType::PackedInt32Array,
                CTOR_DEFAULT,
                "PackedInt32Array()",
            ),
            packed_int32_array_construct_copy: ctor(
                VariantType::PackedInt32Array,
                CTOR_COPY,
                "PackedInt32Array(PackedInt32Array)",
            ),
            packed_int32_array_destroy: dtor(VariantType::PackedInt32Array, "~PackedInt32Array"),
        }
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------

/// Builtin-type methods that are called through method binds rather than dedicated interface functions.
pub struct BuiltinMethodTable {
    pub packed_int32_array_size: BuiltinMethodBind,
}

impl BuiltinMethodTable {
    pub const METHOD_COUNT: usize = 1;

    /// # Safety
    /// `interface` must have been loaded from a running engine.
    pub unsafe fn load(interface: &sys::GDExtensionInterface, string_names: &mut sys::StringCache) -> Self {
        let fetch_fptr = interface.variant_get_ptr_builtin_method;

        Self {
            packed_int32_array_size: load_builtin_method(
                fetch_fptr,
                string_names,
                VariantType::PackedInt32Array,
                "size",
                3173160232,
            ),
        }
    }
}

/// Global utility functions (`@GlobalScope`).
pub struct UtilityFunctionTable {
    pub print: UtilityFunctionBind,
}

impl UtilityFunctionTable {
    /// # Safety
    /// `interface` must have been loaded from a running engine.
    pub unsafe fn load(interface: &sys::GDExtensionInterface, string_names: &mut sys::StringCache) -> Self {
        let get_utility_fn = interface.variant_get_ptr_utility_function;

        Self {
            print: load_utility_function(get_utility_fn, string_names, "print", 2648703342),
        }
    }
}
