/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Subset of `gdextension_interface.h` that the bindings use.
//!
//! Names follow the C header, so that the upstream documentation applies one-to-one.

#![allow(non_camel_case_types, non_upper_case_globals, non_snake_case)]

use std::ffi::{c_char, c_int, c_void};

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Scalar and pointer typedefs

pub type GDExtensionInt = i64;
pub type GDExtensionBool = u8;
pub type GDObjectInstanceID = u64;

pub type GDExtensionVariantType = u32;
pub type GDExtensionCallErrorType = u32;
pub type GDExtensionInitializationLevel = u32;

pub type GDExtensionVariantPtr = *mut c_void;
pub type GDExtensionConstVariantPtr = *const c_void;
pub type GDExtensionUninitializedVariantPtr = *mut c_void;
pub type GDExtensionStringNamePtr = *mut c_void;
pub type GDExtensionConstStringNamePtr = *const c_void;
pub type GDExtensionUninitializedStringNamePtr = *mut c_void;
pub type GDExtensionStringPtr = *mut c_void;
pub type GDExtensionConstStringPtr = *const c_void;
pub type GDExtensionUninitializedStringPtr = *mut c_void;
pub type GDExtensionObjectPtr = *mut c_void;
pub type GDExtensionConstObjectPtr = *const c_void;
pub type GDExtensionTypePtr = *mut c_void;
pub type GDExtensionConstTypePtr = *const c_void;
pub type GDExtensionUninitializedTypePtr = *mut c_void;
pub type GDExtensionMethodBindPtr = *const c_void;
pub type GDExtensionClassLibraryPtr = *mut c_void;

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Enum constants

pub const GDEXTENSION_VARIANT_TYPE_NIL: GDExtensionVariantType = 0;
pub const GDEXTENSION_VARIANT_TYPE_BOOL: GDExtensionVariantType = 1;
pub const GDEXTENSION_VARIANT_TYPE_INT: GDExtensionVariantType = 2;
pub const GDEXTENSION_VARIANT_TYPE_FLOAT: GDExtensionVariantType = 3;
pub const GDEXTENSION_VARIANT_TYPE_STRING: GDExtensionVariantType = 4;
pub const GDEXTENSION_VARIANT_TYPE_VECTOR2: GDExtensionVariantType = 5;
pub const GDEXTENSION_VARIANT_TYPE_VECTOR2I: GDExtensionVariantType = 6;
pub const GDEXTENSION_VARIANT_TYPE_RECT2: GDExtensionVariantType = 7;
pub const GDEXTENSION_VARIANT_TYPE_RECT2I: GDExtensionVariantType = 8;
pub const GDEXTENSION_VARIANT_TYPE_VECTOR3: GDExtensionVariantType = 9;
pub const GDEXTENSION_VARIANT_TYPE_COLOR: GDExtensionVariantType = 20;
pub const GDEXTENSION_VARIANT_TYPE_STRING_NAME: GDExtensionVariantType = 21;
pub const GDEXTENSION_VARIANT_TYPE_NODE_PATH: GDExtensionVariantType = 22;
pub const GDEXTENSION_VARIANT_TYPE_RID: GDExtensionVariantType = 23;
pub const GDEXTENSION_VARIANT_TYPE_OBJECT: GDExtensionVariantType = 24;
pub const GDEXTENSION_VARIANT_TYPE_CALLABLE: GDExtensionVariantType = 25;
pub const GDEXTENSION_VARIANT_TYPE_SIGNAL: GDExtensionVariantType = 26;
pub const GDEXTENSION_VARIANT_TYPE_DICTIONARY: GDExtensionVariantType = 27;
pub const GDEXTENSION_VARIANT_TYPE_ARRAY: GDExtensionVariantType = 28;
pub const GDEXTENSION_VARIANT_TYPE_PACKED_BYTE_ARRAY: GDExtensionVariantType = 29;
pub const GDEXTENSION_VARIANT_TYPE_PACKED_INT32_ARRAY: GDExtensionVariantType = 30;

pub const GDEXTENSION_CALL_OK: GDExtensionCallErrorType = 0;
pub const GDEXTENSION_CALL_ERROR_INVALID_METHOD: GDExtensionCallErrorType = 1;
pub const GDEXTENSION_CALL_ERROR_INVALID_ARGUMENT: GDExtensionCallErrorType = 2;
pub const GDEXTENSION_CALL_ERROR_TOO_MANY_ARGUMENTS: GDExtensionCallErrorType = 3;
pub const GDEXTENSION_CALL_ERROR_TOO_FEW_ARGUMENTS: GDExtensionCallErrorType = 4;
pub const GDEXTENSION_CALL_ERROR_INSTANCE_IS_NULL: GDExtensionCallErrorType = 5;
pub const GDEXTENSION_CALL_ERROR_METHOD_NOT_CONST: GDExtensionCallErrorType = 6;

pub const GDEXTENSION_INITIALIZATION_CORE: GDExtensionInitializationLevel = 0;
pub const GDEXTENSION_INITIALIZATION_SERVERS: GDExtensionInitializationLevel = 1;
pub const GDEXTENSION_INITIALIZATION_SCENE: GDExtensionInitializationLevel = 2;
pub const GDEXTENSION_INITIALIZATION_EDITOR: GDExtensionInitializationLevel = 3;

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Structs

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct GDExtensionGodotVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    pub string: *const c_char,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct GDExtensionCallError {
    pub error: GDExtensionCallErrorType,
    pub argument: i32,
    pub expected: i32,
}

#[repr(C)]
#[derive(Copy, Clone)]
pub struct GDExtensionInitialization {
    pub minimum_initialization_level: GDExtensionInitializationLevel,
    pub userdata: *mut c_void,
    pub initialize:
        Option<unsafe extern "C" fn(userdata: *mut c_void, p_level: GDExtensionInitializationLevel)>,
    pub deinitialize:
        Option<unsafe extern "C" fn(userdata: *mut c_void, p_level: GDExtensionInitializationLevel)>,
}

pub type GDExtensionCallableCustomCall = Option<
    unsafe extern "C" fn(
        callable_userdata: *mut c_void,
        p_args: *const GDExtensionConstVariantPtr,
        p_argument_count: GDExtensionInt,
        r_return: GDExtensionVariantPtr,
        r_error: *mut GDExtensionCallError,
    ),
>;
pub type GDExtensionCallableCustomIsValid =
    Option<unsafe extern "C" fn(callable_userdata: *mut c_void) -> GDExtensionBool>;
pub type GDExtensionCallableCustomFree = Option<unsafe extern "C" fn(callable_userdata: *mut c_void)>;
pub type GDExtensionCallableCustomHash = Option<unsafe extern "C" fn(callable_userdata: *mut c_void) -> u32>;
pub type GDExtensionCallableCustomEqual = Option<
    unsafe extern "C" fn(callable_userdata_a: *mut c_void, callable_userdata_b: *mut c_void) -> GDExtensionBool,
>;
pub type GDExtensionCallableCustomLessThan = GDExtensionCallableCustomEqual;
pub type GDExtensionCallableCustomToString = Option<
    unsafe extern "C" fn(
        callable_userdata: *mut c_void,
        r_is_valid: *mut GDExtensionBool,
        r_out: GDExtensionStringPtr,
    ),
>;
pub type GDExtensionCallableCustomGetArgumentCount = Option<
    unsafe extern "C" fn(callable_userdata: *mut c_void, r_is_valid: *mut GDExtensionBool) -> GDExtensionInt,
>;

#[repr(C)]
#[derive(Copy, Clone)]
pub struct GDExtensionCallableCustomInfo2 {
    pub callable_userdata: *mut c_void,
    pub token: *mut c_void,
    pub object_id: GDObjectInstanceID,
    pub call_func: GDExtensionCallableCustomCall,
    pub is_valid_func: GDExtensionCallableCustomIsValid,
    pub free_func: GDExtensionCallableCustomFree,
    pub hash_func: GDExtensionCallableCustomHash,
    pub equal_func: GDExtensionCallableCustomEqual,
    pub less_than_func: GDExtensionCallableCustomLessThan,
    pub to_string_func: GDExtensionCallableCustomToString,
    pub get_argument_count_func: GDExtensionCallableCustomGetArgumentCount,
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Function pointer typedefs returned by interface functions

pub type GDExtensionVariantFromTypeConstructorFunc =
    Option<unsafe extern "C" fn(r_dest: GDExtensionUninitializedVariantPtr, p_src: GDExtensionTypePtr)>;
pub type GDExtensionTypeFromVariantConstructorFunc =
    Option<unsafe extern "C" fn(r_dest: GDExtensionUninitializedTypePtr, p_src: GDExtensionVariantPtr)>;
pub type GDExtensionPtrConstructor =
    Option<unsafe extern "C" fn(p_base: GDExtensionUninitializedTypePtr, p_args: *const GDExtensionConstTypePtr)>;
pub type GDExtensionPtrDestructor = Option<unsafe extern "C" fn(p_base: GDExtensionTypePtr)>;
pub type GDExtensionPtrBuiltInMethod = Option<
    unsafe extern "C" fn(
        p_base: GDExtensionTypePtr,
        p_args: *const GDExtensionConstTypePtr,
        r_return: GDExtensionTypePtr,
        p_argument_count: c_int,
    ),
>;
pub type GDExtensionPtrUtilityFunction = Option<
    unsafe extern "C" fn(r_return: GDExtensionTypePtr, p_args: *const GDExtensionConstTypePtr, p_argument_count: c_int),
>;

pub type GDExtensionInterfaceFunctionPtr = Option<unsafe extern "C" fn()>;
pub type GDExtensionInterfaceGetProcAddress =
    Option<unsafe extern "C" fn(p_function_name: *const c_char) -> GDExtensionInterfaceFunctionPtr>;

pub type GDExtensionInitializationFunction = Option<
    unsafe extern "C" fn(
        p_get_proc_address: GDExtensionInterfaceGetProcAddress,
        p_library: GDExtensionClassLibraryPtr,
        r_initialization: *mut GDExtensionInitialization,
    ) -> GDExtensionBool,
>;

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Interface functions, loaded by name

pub type GDExtensionInterfaceGetGodotVersion = unsafe extern "C" fn(r_godot_version: *mut GDExtensionGodotVersion);
pub type GDExtensionInterfacePrintError = unsafe extern "C" fn(
    p_description: *const c_char,
    p_function: *const c_char,
    p_file: *const c_char,
    p_line: i32,
    p_editor_notify: GDExtensionBool,
);
pub type GDExtensionInterfacePrintWarning = GDExtensionInterfacePrintError;
pub type GDExtensionInterfaceVariantNewCopy =
    unsafe extern "C" fn(r_dest: GDExtensionUninitializedVariantPtr, p_src: GDExtensionConstVariantPtr);
pub type GDExtensionInterfaceVariantNewNil = unsafe extern "C" fn(r_dest: GDExtensionUninitializedVariantPtr);
pub type GDExtensionInterfaceVariantDestroy = unsafe extern "C" fn(p_self: GDExtensionVariantPtr);
pub type GDExtensionInterfaceVariantGetType =
    unsafe extern "C" fn(p_self: GDExtensionConstVariantPtr) -> GDExtensionVariantType;
pub type GDExtensionInterfaceVariantStringify =
    unsafe extern "C" fn(p_self: GDExtensionConstVariantPtr, r_ret: GDExtensionStringPtr);
pub type GDExtensionInterfaceGetVariantFromTypeConstructor =
    unsafe extern "C" fn(p_type: GDExtensionVariantType) -> GDExtensionVariantFromTypeConstructorFunc;
pub type GDExtensionInterfaceGetVariantToTypeConstructor =
    unsafe extern "C" fn(p_type: GDExtensionVariantType) -> GDExtensionTypeFromVariantConstructorFunc;
pub type GDExtensionInterfaceVariantGetPtrConstructor =
    unsafe extern "C" fn(p_type: GDExtensionVariantType, p_constructor: i32) -> GDExtensionPtrConstructor;
pub type GDExtensionInterfaceVariantGetPtrDestructor =
    unsafe extern "C" fn(p_type: GDExtensionVariantType) -> GDExtensionPtrDestructor;
pub type GDExtensionInterfaceVariantGetPtrBuiltinMethod = unsafe extern "C" fn(
    p_type: GDExtensionVariantType,
    p_method: GDExtensionConstStringNamePtr,
    p_hash: GDExtensionInt,
) -> GDExtensionPtrBuiltInMethod;
pub type GDExtensionInterfaceVariantGetPtrUtilityFunction =
    unsafe extern "C" fn(p_function: GDExtensionConstStringNamePtr, p_hash: GDExtensionInt) -> GDExtensionPtrUtilityFunction;
pub type GDExtensionInterfaceStringNewWithUtf8CharsAndLen = unsafe extern "C" fn(
    r_dest: GDExtensionUninitializedStringPtr,
    p_contents: *const c_char,
    p_size: GDExtensionInt,
);
pub type GDExtensionInterfaceStringToUtf8Chars = unsafe extern "C" fn(
    p_self: GDExtensionConstStringPtr,
    r_text: *mut c_char,
    p_max_write_length: GDExtensionInt,
) -> GDExtensionInt;
pub type GDExtensionInterfaceStringNameNewWithUtf8CharsAndLen = unsafe extern "C" fn(
    r_dest: GDExtensionUninitializedStringNamePtr,
    p_contents: *const c_char,
    p_size: GDExtensionInt,
);
pub type GDExtensionInterfacePackedInt32ArrayOperatorIndexConst =
    unsafe extern "C" fn(p_self: GDExtensionConstTypePtr, p_index: GDExtensionInt) -> *const i32;
pub type GDExtensionInterfaceObjectMethodBindCall = unsafe extern "C" fn(
    p_method_bind: GDExtensionMethodBindPtr,
    p_instance: GDExtensionObjectPtr,
    p_args: *const GDExtensionConstVariantPtr,
    p_arg_count: GDExtensionInt,
    r_ret: GDExtensionUninitializedVariantPtr,
    r_error: *mut GDExtensionCallError,
);
pub type GDExtensionInterfaceObjectMethodBindPtrcall = unsafe extern "C" fn(
    p_method_bind: GDExtensionMethodBindPtr,
    p_instance: GDExtensionObjectPtr,
    p_args: *const GDExtensionConstTypePtr,
    r_ret: GDExtensionTypePtr,
);
pub type GDExtensionInterfaceObjectDestroy = unsafe extern "C" fn(p_o: GDExtensionObjectPtr);
pub type GDExtensionInterfaceGlobalGetSingleton =
    unsafe extern "C" fn(p_name: GDExtensionConstStringNamePtr) -> GDExtensionObjectPtr;
pub type GDExtensionInterfaceObjectGetInstanceId =
    unsafe extern "C" fn(p_object: GDExtensionConstObjectPtr) -> GDObjectInstanceID;
pub type GDExtensionInterfaceObjectGetInstanceFromId =
    unsafe extern "C" fn(p_instance_id: GDObjectInstanceID) -> GDExtensionObjectPtr;
pub type GDExtensionInterfaceObjectGetClassName = unsafe extern "C" fn(
    p_object: GDExtensionConstObjectPtr,
    p_library: GDExtensionClassLibraryPtr,
    r_class_name: GDExtensionUninitializedStringNamePtr,
) -> GDExtensionBool;
pub type GDExtensionInterfaceCallableCustomCreate2 = unsafe extern "C" fn(
    r_callable: GDExtensionUninitializedTypePtr,
    p_callable_custom_info: *mut GDExtensionCallableCustomInfo2,
);
pub type GDExtensionInterfaceClassdbConstructObject =
    unsafe extern "C" fn(p_classname: GDExtensionConstStringNamePtr) -> GDExtensionObjectPtr;
pub type GDExtensionInterfaceClassdbConstructObject2 =
    unsafe extern "C" fn(p_classname: GDExtensionConstStringNamePtr) -> GDExtensionObjectPtr;
pub type GDExtensionInterfaceClassdbGetMethodBind = unsafe extern "C" fn(
    p_classname: GDExtensionConstStringNamePtr,
    p_methodname: GDExtensionConstStringNamePtr,
    p_hash: GDExtensionInt,
) -> GDExtensionMethodBindPtr;

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Interface table

macro_rules! interface_table {
    ( $( $(#[$attr:meta])* $name:ident: $Fn:ty; )* ) => {
        /// Function pointers of the GDExtension interface, resolved through `get_proc_address`.
        pub struct GDExtensionInterface {
            $(
                $(#[$attr])*
                pub $name: $Fn,
            )*
        }

        impl GDExtensionInterface {
            /// Loads every function by name.
            ///
            /// # Panics
            /// If the engine does not provide one of them, naming the missing function.
            ///
            /// # Safety
            /// `get_proc_address` must be the pointer passed by the engine to the entry point.
            pub unsafe fn load(get_proc_address: GDExtensionInterfaceGetProcAddress) -> Self {
                let get_proc_address = get_proc_address.expect("get_proc_address unexpectedly null");

                Self {
                    $(
                        $(#[$attr])*
                        $name: {
                            let c_name = concat!(stringify!($name), "\0");
                            let fptr = get_proc_address(c_name.as_ptr() as *const c_char)
                                .unwrap_or_else(|| panic!(
                                    "failed to load GDExtension interface function `{}`",
                                    stringify!($name)
                                ));

                            std::mem::transmute::<unsafe extern "C" fn(), $Fn>(fptr)
                        },
                    )*
                }
            }
        }
    };
}

interface_table! {
    get_godot_version: GDExtensionInterfaceGetGodotVersion;
    print_error: GDExtensionInterfacePrintError;
    print_warning: GDExtensionInterfacePrintWarning;
    variant_new_copy: GDExtensionInterfaceVariantNewCopy;
    variant_new_nil: GDExtensionInterfaceVariantNewNil;
    variant_destroy: GDExtensionInterfaceVariantDestroy;
    variant_get_type: GDExtensionInterfaceVariantGetType;
    variant_stringify: GDExtensionInterfaceVariantStringify;
    get_variant_from_type_constructor: GDExtensionInterfaceGetVariantFromTypeConstructor;
    get_variant_to_type_constructor: GDExtensionInterfaceGetVariantToTypeConstructor;
    variant_get_ptr_constructor: GDExtensionInterfaceVariantGetPtrConstructor;
    variant_get_ptr_destructor: GDExtensionInterfaceVariantGetPtrDestructor;
    variant_get_ptr_builtin_method: GDExtensionInterfaceVariantGetPtrBuiltinMethod;
    variant_get_ptr_utility_function: GDExtensionInterfaceVariantGetPtrUtilityFunction;
    string_new_with_utf8_chars_and_len: GDExtensionInterfaceStringNewWithUtf8CharsAndLen;
    string_to_utf8_chars: GDExtensionInterfaceStringToUtf8Chars;
    string_name_new_with_utf8_chars_and_len: GDExtensionInterfaceStringNameNewWithUtf8CharsAndLen;
    packed_int32_array_operator_index_const: GDExtensionInterfacePackedInt32ArrayOperatorIndexConst;
    object_method_bind_call: GDExtensionInterfaceObjectMethodBindCall;
    object_method_bind_ptrcall: GDExtensionInterfaceObjectMethodBindPtrcall;
    object_destroy: GDExtensionInterfaceObjectDestroy;
    global_get_singleton: GDExtensionInterfaceGlobalGetSingleton;
    object_get_instance_id: GDExtensionInterfaceObjectGetInstanceId;
    object_get_instance_from_id: GDExtensionInterfaceObjectGetInstanceFromId;
    object_get_class_name: GDExtensionInterfaceObjectGetClassName;
    callable_custom_create2: GDExtensionInterfaceCallableCustomCreate2;
    #[cfg(before_api = "4.4")]
    classdb_construct_object: GDExtensionInterfaceClassdbConstructObject;
    #[cfg(since_api = "4.4")]
    classdb_construct_object2: GDExtensionInterfaceClassdbConstructObject2;
    classdb_get_method_bind: GDExtensionInterfaceClassdbGetMethodBind;
}
