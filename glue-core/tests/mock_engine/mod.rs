/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! In-process stand-in for the engine side of the GDExtension interface.
//!
//! Implements just enough of the C API to load the bindings and run a handful of engine classes (`Object`, `RefCounted`,
//! `Resource`, `ItemList`, `TileMap`, `Label3D`, `Input`). Every call that reaches the fake engine is recorded, so tests
//! can assert on what the bindings sent.
//!
//! Memory layout of builtin values:
//! - `String`, `StringName`, `NodePath`: word 0 holds a `Box<String>`.
//! - `Callable`: word 0 holds an `Rc<CustomCallable>` (null for the default callable).
//! - `PackedInt32Array`: word 0 holds a `Box<Vec<i32>>`.
//! - `Vector2i`, `Rect2i`, `Color`: the engine's plain layout, read and written in place.
//! - Objects: pointer to a leaked `ObjectHandle`, which keeps reporting its ID after the object is destroyed.
//!
//! Boxed payloads are tracked while alive. Ptrcalls that return strings or arrays assign to the return slot like the
//! engine does, so they require a constructed value there; object return slots must be null.
//!
//! State lives in a thread-local. It is never borrowed while calling back into Rust callables, and values that may run
//! Rust code on drop are dropped only after the borrow ends.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};
use std::ffi::{c_char, c_int, c_void, CStr};
use std::mem::MaybeUninit;
use std::rc::Rc;

use glue_core::init::{ExtensionLibrary, InitLevel};
use glue_core::sys;

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Recorded data

/// Decoded argument of a recorded ptrcall.
#[derive(Clone, PartialEq, Debug)]
pub enum Arg {
    Int(i64),
    Bool(bool),
    Str(String),
    Object(Option<u64>),
    Callable,
    Vector2i(i32, i32),
    Color([f32; 4]),
}

impl Arg {
    pub fn str(s: &str) -> Self {
        Arg::Str(s.to_string())
    }
}

#[derive(Clone, Debug)]
struct Call {
    class: String,
    method: String,
    args: Vec<Arg>,
}

#[derive(Clone, Debug)]
struct BindLookup {
    class: String,
    method: String,
    hash: i64,
}

/// `(error, argument, expected)` as reported by a custom callable.
pub type CallableError = (u32, i32, i32);

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Engine state

// Class hierarchy of the fake ClassDB.
const CLASSES: &[(&str, Option<&str>)] = &[
    ("Object", None),
    ("RefCounted", Some("Object")),
    ("Resource", Some("RefCounted")),
    ("Texture", Some("Resource")),
    ("Texture2D", Some("Texture")),
    ("Node", Some("Object")),
    ("CanvasItem", Some("Node")),
    ("Control", Some("CanvasItem")),
    ("ItemList", Some("Control")),
    ("Node2D", Some("CanvasItem")),
    ("TileMap", Some("Node2D")),
    ("Node3D", Some("Node")),
    ("VisualInstance3D", Some("Node3D")),
    ("GeometryInstance3D", Some("VisualInstance3D")),
    ("Label3D", Some("GeometryInstance3D")),
    ("Input", Some("Object")),
];

const REF_COUNTED_BIT: u64 = 1 << 63;

const TY_NIL: u32 = sys::GDEXTENSION_VARIANT_TYPE_NIL;
const TY_BOOL: u32 = sys::GDEXTENSION_VARIANT_TYPE_BOOL;
const TY_INT: u32 = sys::GDEXTENSION_VARIANT_TYPE_INT;
const TY_FLOAT: u32 = sys::GDEXTENSION_VARIANT_TYPE_FLOAT;
const TY_STRING: u32 = sys::GDEXTENSION_VARIANT_TYPE_STRING;
const TY_VECTOR2: u32 = sys::GDEXTENSION_VARIANT_TYPE_VECTOR2;
const TY_VECTOR2I: u32 = sys::GDEXTENSION_VARIANT_TYPE_VECTOR2I;
const TY_RECT2: u32 = sys::GDEXTENSION_VARIANT_TYPE_RECT2;
const TY_RECT2I: u32 = sys::GDEXTENSION_VARIANT_TYPE_RECT2I;
const TY_VECTOR3: u32 = sys::GDEXTENSION_VARIANT_TYPE_VECTOR3;
const TY_COLOR: u32 = sys::GDEXTENSION_VARIANT_TYPE_COLOR;
const TY_STRING_NAME: u32 = sys::GDEXTENSION_VARIANT_TYPE_STRING_NAME;
const TY_NODE_PATH: u32 = sys::GDEXTENSION_VARIANT_TYPE_NODE_PATH;
const TY_RID: u32 = sys::GDEXTENSION_VARIANT_TYPE_RID;
const TY_OBJECT: u32 = sys::GDEXTENSION_VARIANT_TYPE_OBJECT;
const TY_CALLABLE: u32 = sys::GDEXTENSION_VARIANT_TYPE_CALLABLE;
const TY_PACKED_INT32_ARRAY: u32 = sys::GDEXTENSION_VARIANT_TYPE_PACKED_INT32_ARRAY;

struct ObjectHandle {
    id: u64,
}

struct RefCount {
    count: i64,
    // Set between construction and the first `init_ref()`.
    init_pending: bool,
}

/// Tile placed by `TileMap::set_cell()`.
#[derive(Clone, Copy, Debug)]
struct TileCell {
    source_id: i32,
    atlas_coords: (i32, i32),
    alternative_tile: i32,
}

struct MockObject {
    class: &'static str,
    handle: *mut ObjectHandle,
    refcount: Option<RefCount>,
    name: String,
    items: Vec<String>,
    selected: Vec<i32>,
    // (layer, x, y)
    cells: HashMap<(i32, i32, i32), TileCell>,
    modulate: [f32; 4],
    connections: Vec<(String, Rc<CustomCallable>)>,
}

struct MethodBind {
    class: String,
    method: String,
}

struct CustomCallable {
    info: sys::GDExtensionCallableCustomInfo2,
}

impl Drop for CustomCallable {
    fn drop(&mut self) {
        if let Some(free_func) = self.info.free_func {
            // SAFETY: the userdata was handed over on creation and is released exactly once.
            unsafe { free_func(self.info.callable_userdata) };
        }
    }
}

#[derive(Default)]
struct Engine {
    next_id: u64,
    objects: HashMap<u64, MockObject>,
    binds: HashMap<(String, String), usize>,
    bind_lookups: Vec<BindLookup>,
    calls: Vec<Call>,
    singletons: HashMap<String, u64>,
    singleton_lookups: Vec<String>,
    callable_errors: Vec<CallableError>,
    printed: Vec<String>,
    errors: Vec<String>,
    warnings: Vec<String>,
}

thread_local! {
    static ENGINE: RefCell<Engine> = RefCell::new(Engine::default());
    static STRING_NAMES_CREATED: Cell<usize> = const { Cell::new(0) };
    static LIVE_STRING_NAMES: Cell<i64> = const { Cell::new(0) };
    static LIVE_BOXES: RefCell<HashSet<usize>> = RefCell::new(HashSet::new());
}

fn with_engine<R>(f: impl FnOnce(&mut Engine) -> R) -> R {
    ENGINE.with(|engine| f(&mut engine.borrow_mut()))
}

fn inherits(class: &str, base: &str) -> bool {
    let mut current = Some(class);
    while let Some(name) = current {
        if name == base {
            return true;
        }
        current = CLASSES.iter().find(|(c, _)| *c == name).and_then(|(_, parent)| *parent);
    }
    false
}

impl Engine {
    fn create_object(&mut self, class: &str, initial_refcount: Option<RefCount>) -> *mut ObjectHandle {
        let (class, _) = CLASSES
            .iter()
            .find(|(c, _)| *c == class)
            .unwrap_or_else(|| panic!("mock engine: unknown class `{class}`"));

        self.next_id += 1;
        let ref_counted = inherits(class, "RefCounted");
        let id = if ref_counted {
            self.next_id | REF_COUNTED_BIT
        } else {
            self.next_id
        };

        let handle = Box::into_raw(Box::new(ObjectHandle { id }));
        let refcount = if ref_counted {
            Some(initial_refcount.unwrap_or(RefCount {
                count: 1,
                init_pending: true,
            }))
        } else {
            None
        };

        self.objects.insert(
            id,
            MockObject {
                class,
                handle,
                refcount,
                name: String::new(),
                items: Vec::new(),
                selected: Vec::new(),
                cells: HashMap::new(),
                modulate: [1.0; 4],
                connections: Vec::new(),
            },
        );

        handle
    }

    fn object_mut(&mut self, id: u64) -> &mut MockObject {
        self.objects
            .get_mut(&id)
            .unwrap_or_else(|| panic!("mock engine: use of dead object {id}"))
    }

    fn refcount_mut(&mut self, id: u64) -> &mut RefCount {
        let object = self.object_mut(id);
        let class = object.class;

        object
            .refcount
            .as_mut()
            .unwrap_or_else(|| panic!("mock engine: {class} is not reference-counted"))
    }
}

unsafe fn id_of(object_ptr: *const c_void) -> u64 {
    (*(object_ptr as *const ObjectHandle)).id
}

fn retain(id: u64) {
    with_engine(|e| {
        if let Some(RefCount { count, .. }) = e.objects.get_mut(&id).and_then(|o| o.refcount.as_mut()) {
            *count += 1;
        }
    });
}

fn release(id: u64) {
    let removed = with_engine(|e| {
        let rc = e.objects.get_mut(&id).and_then(|o| o.refcount.as_mut())?;
        rc.count -= 1;

        if rc.count <= 0 {
            e.objects.remove(&id)
        } else {
            None
        }
    });

    drop(removed);
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Builtin value storage

fn track_box(ptr: *mut c_void) {
    LIVE_BOXES.with(|boxes| boxes.borrow_mut().insert(ptr as usize));
}

fn untrack_box(ptr: *mut c_void) {
    let was_live = LIVE_BOXES.with(|boxes| boxes.borrow_mut().remove(&(ptr as usize)));
    assert!(was_live, "mock engine: double free of {ptr:?}");
}

/// The engine assigns ptrcall results: it destroys the slot's previous value, which must exist.
unsafe fn assert_slot_constructed(slot: *const c_void, what: &str) {
    let payload = *(slot as *const usize);
    let live = LIVE_BOXES.with(|boxes| boxes.borrow().contains(&payload));
    assert!(live, "mock engine: {what} return slot was not constructed");
}

unsafe fn write_str(dst: *mut c_void, ty: u32, value: String) {
    if ty == TY_STRING_NAME {
        LIVE_STRING_NAMES.with(|live| live.set(live.get() + 1));
    }

    let boxed = Box::into_raw(Box::new(value));
    track_box(boxed as *mut c_void);
    *(dst as *mut *mut String) = boxed;
}

unsafe fn read_str(src: *const c_void) -> String {
    let boxed = *(src as *const *mut String);
    if boxed.is_null() {
        String::new()
    } else {
        (*boxed).clone()
    }
}

unsafe fn free_str(dst: *mut c_void, ty: u32) {
    let slot = dst as *mut *mut String;
    if (*slot).is_null() {
        return;
    }

    if ty == TY_STRING_NAME {
        LIVE_STRING_NAMES.with(|live| live.set(live.get() - 1));
    }

    untrack_box(*slot as *mut c_void);
    drop(Box::from_raw(*slot));
    *slot = std::ptr::null_mut();
}

unsafe fn read_callable(src: *const c_void) -> *const CustomCallable {
    *(src as *const *const CustomCallable)
}

unsafe fn read_packed(src: *const c_void) -> &'static Vec<i32> {
    &**(src as *const *mut Vec<i32>)
}

unsafe fn write_packed(dst: *mut c_void, values: Vec<i32>) {
    let boxed = Box::into_raw(Box::new(values));
    track_box(boxed as *mut c_void);
    *(dst as *mut *mut Vec<i32>) = boxed;
}

unsafe fn free_packed(slot: *mut c_void) {
    let boxed = *(slot as *mut *mut Vec<i32>);
    untrack_box(boxed as *mut c_void);
    drop(Box::from_raw(boxed));
}

/// Copies a builtin value of type `ty` from `src` to uninitialized `dst`.
///
/// Objects gain a reference if `retain_object` is set.
unsafe fn copy_value(ty: u32, dst: *mut c_void, src: *const c_void, retain_object: bool) {
    let pod_size = match ty {
        TY_BOOL => 1,
        TY_INT | TY_FLOAT | TY_VECTOR2 | TY_VECTOR2I | TY_RID => 8,
        TY_VECTOR3 => 12,
        TY_RECT2 | TY_RECT2I | TY_COLOR => 16,
        _ => 0,
    };

    if pod_size > 0 {
        std::ptr::copy_nonoverlapping(src as *const u8, dst as *mut u8, pod_size);
        return;
    }

    match ty {
        TY_STRING | TY_STRING_NAME | TY_NODE_PATH => write_str(dst, ty, read_str(src)),
        TY_CALLABLE => {
            let callable = read_callable(src);
            if !callable.is_null() {
                Rc::increment_strong_count(callable);
            }
            std::ptr::copy_nonoverlapping(src as *const [usize; 2], dst as *mut [usize; 2], 1);
        }
        TY_PACKED_INT32_ARRAY => write_packed(dst, read_packed(src).clone()),
        TY_OBJECT => {
            let object_ptr = *(src as *const *mut c_void);
            *(dst as *mut *mut c_void) = object_ptr;

            if retain_object && !object_ptr.is_null() {
                retain(id_of(object_ptr));
            }
        }
        _ => panic!("mock engine: cannot copy variant type {ty}"),
    }
}

unsafe fn destroy_value(ty: u32, slot: *mut c_void) {
    match ty {
        TY_STRING | TY_STRING_NAME | TY_NODE_PATH => free_str(slot, ty),
        TY_CALLABLE => {
            let callable = read_callable(slot);
            if !callable.is_null() {
                *(slot as *mut [usize; 2]) = [0, 0];
                drop(Rc::from_raw(callable));
            }
        }
        TY_PACKED_INT32_ARRAY => free_packed(slot),
        TY_OBJECT => {
            let object_ptr = *(slot as *const *mut c_void);
            if !object_ptr.is_null() {
                release(id_of(object_ptr));
            }
        }
        _ => {}
    }
}

#[repr(C)]
struct MockVariant {
    ty: u32,
    payload: [u64; 2],
}

const _: () = assert!(std::mem::size_of::<MockVariant>() <= std::mem::size_of::<sys::types::OpaqueVariant>());

impl MockVariant {
    fn nil() -> Self {
        Self {
            ty: TY_NIL,
            payload: [0; 2],
        }
    }

    fn payload_ptr(&self) -> *const c_void {
        self.payload.as_ptr() as *const c_void
    }

    fn payload_mut(&mut self) -> *mut c_void {
        self.payload.as_mut_ptr() as *mut c_void
    }

    unsafe fn to_text(&self) -> String {
        match self.ty {
            TY_NIL => "<null>".to_string(),
            TY_BOOL => (*(self.payload_ptr() as *const u8) != 0).to_string(),
            TY_INT => (*(self.payload_ptr() as *const i64)).to_string(),
            TY_FLOAT => (*(self.payload_ptr() as *const f64)).to_string(),
            TY_STRING | TY_STRING_NAME | TY_NODE_PATH => read_str(self.payload_ptr()),
            TY_OBJECT => {
                let object_ptr = *(self.payload_ptr() as *const *mut c_void);
                object_text(id_of(object_ptr))
            }
            TY_CALLABLE => "Callable".to_string(),
            ty => format!("<variant type {ty}>"),
        }
    }
}

fn object_text(id: u64) -> String {
    with_engine(|e| match e.objects.get(&id) {
        Some(object) => format!("<{}#{}>", object.class, id as i64),
        None => "<Freed Object>".to_string(),
    })
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Builtin lifecycle

unsafe extern "C" fn str_default<const TY: u32>(dst: *mut c_void, _args: *const *const c_void) {
    write_str(dst, TY, String::new());
}

// Copy and conversion between string types are the same operation here.
unsafe extern "C" fn str_copy<const TY: u32>(dst: *mut c_void, args: *const *const c_void) {
    write_str(dst, TY, read_str(*args));
}

unsafe extern "C" fn str_destroy<const TY: u32>(slot: *mut c_void) {
    free_str(slot, TY);
}

unsafe extern "C" fn callable_default(dst: *mut c_void, _args: *const *const c_void) {
    *(dst as *mut [usize; 2]) = [0, 0];
}

unsafe extern "C" fn callable_copy(dst: *mut c_void, args: *const *const c_void) {
    copy_value(TY_CALLABLE, dst, *args, false);
}

unsafe extern "C" fn callable_destroy(slot: *mut c_void) {
    destroy_value(TY_CALLABLE, slot);
}

unsafe extern "C" fn packed_default(dst: *mut c_void, _args: *const *const c_void) {
    write_packed(dst, Vec::new());
}

unsafe extern "C" fn packed_copy(dst: *mut c_void, args: *const *const c_void) {
    copy_value(TY_PACKED_INT32_ARRAY, dst, *args, false);
}

unsafe extern "C" fn packed_destroy(slot: *mut c_void) {
    destroy_value(TY_PACKED_INT32_ARRAY, slot);
}

unsafe extern "C" fn packed_size(
    base: *mut c_void,
    _args: *const *const c_void,
    r_return: *mut c_void,
    _argument_count: c_int,
) {
    *(r_return as *mut i64) = read_packed(base).len() as i64;
}

unsafe extern "C" fn to_variant<const TY: u32>(dst: *mut c_void, src: *mut c_void) {
    let mut variant = MockVariant {
        ty: TY,
        payload: [0; 2],
    };
    copy_value(TY, variant.payload_mut(), src, true);

    std::ptr::write(dst as *mut MockVariant, variant);
}

unsafe extern "C" fn from_variant<const TY: u32>(dst: *mut c_void, src: *mut c_void) {
    let variant = &*(src as *const MockVariant);
    assert_eq!(variant.ty, TY, "mock engine: variant type mismatch");

    // Objects: the caller takes its own reference.
    copy_value(TY, dst, variant.payload_ptr(), false);
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Interface functions, named like their C counterparts

unsafe extern "C" fn get_godot_version(r_godot_version: *mut sys::GDExtensionGodotVersion) {
    let (major, minor, patch) = sys::GODOT_API_VERSION;

    *r_godot_version = sys::GDExtensionGodotVersion {
        major: major as u32,
        minor: minor as u32,
        patch: patch as u32,
        string: c"Godot Engine (mock)".as_ptr(),
    };
}

unsafe extern "C" fn print_error(
    p_description: *const c_char,
    _p_function: *const c_char,
    _p_file: *const c_char,
    _p_line: i32,
    _p_editor_notify: sys::GDExtensionBool,
) {
    let message = CStr::from_ptr(p_description).to_string_lossy().into_owned();
    with_engine(|e| e.errors.push(message));
}

unsafe extern "C" fn print_warning(
    p_description: *const c_char,
    _p_function: *const c_char,
    _p_file: *const c_char,
    _p_line: i32,
    _p_editor_notify: sys::GDExtensionBool,
) {
    let message = CStr::from_ptr(p_description).to_string_lossy().into_owned();
    with_engine(|e| e.warnings.push(message));
}

unsafe extern "C" fn variant_new_copy(r_dest: *mut c_void, p_src: *const c_void) {
    let src = &*(p_src as *const MockVariant);
    let mut copy = MockVariant {
        ty: src.ty,
        payload: [0; 2],
    };

    if src.ty != TY_NIL {
        copy_value(src.ty, copy.payload_mut(), src.payload_ptr(), true);
    }

    std::ptr::write(r_dest as *mut MockVariant, copy);
}

unsafe extern "C" fn variant_new_nil(r_dest: *mut c_void) {
    std::ptr::write(r_dest as *mut MockVariant, MockVariant::nil());
}

unsafe extern "C" fn variant_destroy(p_self: *mut c_void) {
    let variant = &mut *(p_self as *mut MockVariant);
    destroy_value(variant.ty, variant.payload_mut());
    variant.ty = TY_NIL;
}

unsafe extern "C" fn variant_get_type(p_self: *const c_void) -> sys::GDExtensionVariantType {
    (*(p_self as *const MockVariant)).ty
}

unsafe extern "C" fn variant_stringify(p_self: *const c_void, r_ret: *mut c_void) {
    let text = (*(p_self as *const MockVariant)).to_text();

    ret_str(r_ret, TY_STRING, text);
}

unsafe extern "C" fn get_variant_from_type_constructor(
    p_type: sys::GDExtensionVariantType,
) -> sys::GDExtensionVariantFromTypeConstructorFunc {
    let converter: sys::ToVariantFn = match p_type {
        TY_BOOL => to_variant::<TY_BOOL>,
        TY_INT => to_variant::<TY_INT>,
        TY_FLOAT => to_variant::<TY_FLOAT>,
        TY_STRING => to_variant::<TY_STRING>,
        TY_VECTOR2 => to_variant::<TY_VECTOR2>,
        TY_VECTOR2I => to_variant::<TY_VECTOR2I>,
        TY_RECT2 => to_variant::<TY_RECT2>,
        TY_RECT2I => to_variant::<TY_RECT2I>,
        TY_VECTOR3 => to_variant::<TY_VECTOR3>,
        TY_COLOR => to_variant::<TY_COLOR>,
        TY_STRING_NAME => to_variant::<TY_STRING_NAME>,
        TY_NODE_PATH => to_variant::<TY_NODE_PATH>,
        TY_RID => to_variant::<TY_RID>,
        TY_OBJECT => to_variant::<TY_OBJECT>,
        TY_CALLABLE => to_variant::<TY_CALLABLE>,
        TY_PACKED_INT32_ARRAY => to_variant::<TY_PACKED_INT32_ARRAY>,
        _ => return None,
    };

    Some(converter)
}

unsafe extern "C" fn get_variant_to_type_constructor(
    p_type: sys::GDExtensionVariantType,
) -> sys::GDExtensionTypeFromVariantConstructorFunc {
    let converter: sys::FromVariantFn = match p_type {
        TY_BOOL => from_variant::<TY_BOOL>,
        TY_INT => from_variant::<TY_INT>,
        TY_FLOAT => from_variant::<TY_FLOAT>,
        TY_STRING => from_variant::<TY_STRING>,
        TY_VECTOR2 => from_variant::<TY_VECTOR2>,
        TY_VECTOR2I => from_variant::<TY_VECTOR2I>,
        TY_RECT2 => from_variant::<TY_RECT2>,
        TY_RECT2I => from_variant::<TY_RECT2I>,
        TY_VECTOR3 => from_variant::<TY_VECTOR3>,
        TY_COLOR => from_variant::<TY_COLOR>,
        TY_STRING_NAME => from_variant::<TY_STRING_NAME>,
        TY_NODE_PATH => from_variant::<TY_NODE_PATH>,
        TY_RID => from_variant::<TY_RID>,
        TY_OBJECT => from_variant::<TY_OBJECT>,
        TY_CALLABLE => from_variant::<TY_CALLABLE>,
        TY_PACKED_INT32_ARRAY => from_variant::<TY_PACKED_INT32_ARRAY>,
        _ => return None,
    };

    Some(converter)
}

unsafe extern "C" fn variant_get_ptr_constructor(
    p_type: sys::GDExtensionVariantType,
    p_constructor: i32,
) -> sys::GDExtensionPtrConstructor {
    let ctor: sys::ConstructFn = match (p_type, p_constructor) {
        (TY_STRING, 0) => str_default::<TY_STRING>,
        (TY_STRING, 1..=3) => str_copy::<TY_STRING>,
        (TY_STRING_NAME, 0) => str_default::<TY_STRING_NAME>,
        (TY_STRING_NAME, 1 | 2) => str_copy::<TY_STRING_NAME>,
        (TY_NODE_PATH, 0) => str_default::<TY_NODE_PATH>,
        (TY_NODE_PATH, 1 | 2) => str_copy::<TY_NODE_PATH>,
        (TY_CALLABLE, 0) => callable_default,
        (TY_CALLABLE, 1) => callable_copy,
        (TY_PACKED_INT32_ARRAY, 0) => packed_default,
        (TY_PACKED_INT32_ARRAY, 1) => packed_copy,
        _ => return None,
    };

    Some(ctor)
}

unsafe extern "C" fn variant_get_ptr_destructor(p_type: sys::GDExtensionVariantType) -> sys::GDExtensionPtrDestructor {
    let dtor: sys::DestroyFn = match p_type {
        TY_STRING => str_destroy::<TY_STRING>,
        TY_STRING_NAME => str_destroy::<TY_STRING_NAME>,
        TY_NODE_PATH => str_destroy::<TY_NODE_PATH>,
        TY_CALLABLE => callable_destroy,
        TY_PACKED_INT32_ARRAY => packed_destroy,
        _ => return None,
    };

    Some(dtor)
}

unsafe extern "C" fn variant_get_ptr_builtin_method(
    p_type: sys::GDExtensionVariantType,
    p_method: *const c_void,
    _p_hash: sys::GDExtensionInt,
) -> sys::GDExtensionPtrBuiltInMethod {
    match (p_type, read_str(p_method).as_str()) {
        (TY_PACKED_INT32_ARRAY, "size") => Some(packed_size),
        _ => None,
    }
}

unsafe extern "C" fn utility_print(_r_return: *mut c_void, p_args: *const *const c_void, p_argument_count: c_int) {
    let args = std::slice::from_raw_parts(p_args, p_argument_count as usize);

    let line: String = args
        .iter()
        .map(|&arg| (*(arg as *const MockVariant)).to_text())
        .collect();

    with_engine(|e| e.printed.push(line));
}

unsafe extern "C" fn variant_get_ptr_utility_function(
    p_function: *const c_void,
    _p_hash: sys::GDExtensionInt,
) -> sys::GDExtensionPtrUtilityFunction {
    match read_str(p_function).as_str() {
        "print" => Some(utility_print),
        _ => None,
    }
}

unsafe extern "C" fn string_new_with_utf8_chars_and_len(
    r_dest: *mut c_void,
    p_contents: *const c_char,
    p_size: sys::GDExtensionInt,
) {
    let bytes = std::slice::from_raw_parts(p_contents as *const u8, p_size as usize);
    write_str(r_dest, TY_STRING, String::from_utf8_lossy(bytes).into_owned());
}

unsafe extern "C" fn string_to_utf8_chars(
    p_self: *const c_void,
    r_text: *mut c_char,
    p_max_write_length: sys::GDExtensionInt,
) -> sys::GDExtensionInt {
    let text = read_str(p_self);
    if r_text.is_null() {
        return text.len() as i64;
    }

    let written = text.len().min(p_max_write_length.max(0) as usize);
    std::ptr::copy_nonoverlapping(text.as_ptr(), r_text as *mut u8, written);
    written as i64
}

unsafe extern "C" fn string_name_new_with_utf8_chars_and_len(
    r_dest: *mut c_void,
    p_contents: *const c_char,
    p_size: sys::GDExtensionInt,
) {
    let bytes = std::slice::from_raw_parts(p_contents as *const u8, p_size as usize);
    STRING_NAMES_CREATED.with(|created| created.set(created.get() + 1));

    write_str(r_dest, TY_STRING_NAME, String::from_utf8_lossy(bytes).into_owned());
}

unsafe extern "C" fn packed_int32_array_operator_index_const(
    p_self: *const c_void,
    p_index: sys::GDExtensionInt,
) -> *const i32 {
    let values = read_packed(p_self);
    assert!((p_index as usize) < values.len(), "mock engine: index {p_index} out of bounds");

    values.as_ptr().add(p_index as usize)
}

unsafe extern "C" fn object_destroy(p_o: *mut c_void) {
    let id = id_of(p_o);
    let removed = with_engine(|e| e.objects.remove(&id));

    assert!(removed.is_some(), "mock engine: double destroy of object {id}");
    drop(removed);
}

unsafe extern "C" fn global_get_singleton(p_name: *const c_void) -> *mut c_void {
    let name = read_str(p_name);

    with_engine(|e| {
        e.singleton_lookups.push(name.clone());
        if name != "Input" {
            return std::ptr::null_mut();
        }

        if let Some(handle) = e.singletons.get(&name).and_then(|id| e.objects.get(id)).map(|o| o.handle) {
            return handle as *mut c_void;
        }

        let handle = e.create_object("Input", None);
        e.singletons.insert(name, (*handle).id);
        handle as *mut c_void
    })
}

unsafe extern "C" fn object_get_instance_id(p_object: *const c_void) -> sys::GDObjectInstanceID {
    id_of(p_object)
}

unsafe extern "C" fn object_get_instance_from_id(p_instance_id: sys::GDObjectInstanceID) -> *mut c_void {
    with_engine(|e| {
        e.objects
            .get(&p_instance_id)
            .map_or(std::ptr::null_mut(), |o| o.handle as *mut c_void)
    })
}

unsafe extern "C" fn object_get_class_name(
    p_object: *const c_void,
    _p_library: *mut c_void,
    r_class_name: *mut c_void,
) -> sys::GDExtensionBool {
    let id = id_of(p_object);
    let class = with_engine(|e| e.objects.get(&id).map(|o| o.class));

    match class {
        Some(class) => {
            write_str(r_class_name, TY_STRING_NAME, class.to_string());
            1
        }
        None => 0,
    }
}

unsafe extern "C" fn callable_custom_create2(
    r_callable: *mut c_void,
    p_callable_custom_info: *mut sys::GDExtensionCallableCustomInfo2,
) {
    let callable = Rc::new(CustomCallable {
        info: *p_callable_custom_info,
    });

    *(r_callable as *mut [usize; 2]) = [Rc::into_raw(callable) as usize, 0];
}

unsafe extern "C" fn classdb_construct_object(p_classname: *const c_void) -> *mut c_void {
    let class = read_str(p_classname);
    with_engine(|e| e.create_object(&class, None)) as *mut c_void
}

unsafe extern "C" fn classdb_construct_object2(p_classname: *const c_void) -> *mut c_void {
    classdb_construct_object(p_classname)
}

unsafe extern "C" fn classdb_get_method_bind(
    p_classname: *const c_void,
    p_methodname: *const c_void,
    p_hash: sys::GDExtensionInt,
) -> sys::GDExtensionMethodBindPtr {
    let class = read_str(p_classname);
    let method = read_str(p_methodname);

    with_engine(|e| {
        e.bind_lookups.push(BindLookup {
            class: class.clone(),
            method: method.clone(),
            hash: p_hash,
        });

        let key = (class.clone(), method.clone());
        let bind = *e
            .binds
            .entry(key)
            .or_insert_with(|| Box::into_raw(Box::new(MethodBind { class, method })) as usize);

        bind as sys::GDExtensionMethodBindPtr
    })
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Method calls

unsafe fn int_arg(args: *const *const c_void, index: usize) -> i64 {
    *(*args.add(index) as *const i64)
}

unsafe fn bool_arg(args: *const *const c_void, index: usize) -> bool {
    *(*args.add(index) as *const u8) != 0
}

unsafe fn str_arg(args: *const *const c_void, index: usize) -> String {
    read_str(*args.add(index))
}

unsafe fn object_arg(args: *const *const c_void, index: usize) -> Option<u64> {
    let object_ptr = *(*args.add(index) as *const *mut c_void);
    if object_ptr.is_null() {
        None
    } else {
        Some(id_of(object_ptr))
    }
}

unsafe fn callable_arg(args: *const *const c_void, index: usize) -> *const CustomCallable {
    read_callable(*args.add(index))
}

unsafe fn ret_int(r_ret: *mut c_void, value: i64) {
    *(r_ret as *mut i64) = value;
}

unsafe fn ret_bool(r_ret: *mut c_void, value: bool) {
    *(r_ret as *mut u8) = value as u8;
}

unsafe fn ret_str(r_ret: *mut c_void, ty: u32, value: String) {
    assert_slot_constructed(r_ret, "string");
    free_str(r_ret, ty);
    write_str(r_ret, ty, value);
}

unsafe fn ret_packed(r_ret: *mut c_void, values: Vec<i32>) {
    assert_slot_constructed(r_ret, "packed array");
    free_packed(r_ret);
    write_packed(r_ret, values);
}

/// Returned objects carry one reference for the caller; the slot starts out as a null object.
unsafe fn ret_object(r_ret: *mut c_void, handle: *mut ObjectHandle) {
    let slot = r_ret as *mut *mut c_void;
    assert!((*slot).is_null(), "mock engine: object return slot is not null");
    *slot = handle as *mut c_void;
}

unsafe fn vector2i_arg(args: *const *const c_void, index: usize) -> (i32, i32) {
    let [x, y] = *(*args.add(index) as *const [i32; 2]);
    (x, y)
}

fn min_max(values: impl Iterator<Item = i32> + Clone) -> (i32, i32) {
    let min = values.clone().min().unwrap_or(0);
    let max = values.max().unwrap_or(0);
    (min, max)
}

unsafe fn color_arg(args: *const *const c_void, index: usize) -> [f32; 4] {
    *(*args.add(index) as *const [f32; 4])
}

unsafe extern "C" fn object_method_bind_ptrcall(
    p_method_bind: sys::GDExtensionMethodBindPtr,
    p_instance: *mut c_void,
    p_args: *const *const c_void,
    r_ret: *mut c_void,
) {
    let bind = &*(p_method_bind as *const MethodBind);
    let id = id_of(p_instance);

    // Callables removed from a connection list are dropped after the engine borrow ends.
    let mut garbage: Vec<Rc<CustomCallable>> = Vec::new();

    let args = with_engine(|e| {
        let method = bind.method.as_str();
        let args = match method {
            "init_ref" => {
                let rc = e.refcount_mut(id);
                if rc.init_pending {
                    rc.init_pending = false;
                } else {
                    rc.count += 1;
                }
                ret_bool(r_ret, true);
                vec![]
            }
            "reference" => {
                e.refcount_mut(id).count += 1;
                ret_bool(r_ret, true);
                vec![]
            }
            "unreference" => {
                let rc = e.refcount_mut(id);
                rc.count -= 1;
                ret_bool(r_ret, rc.count == 0);
                vec![]
            }
            "get_reference_count" => {
                ret_int(r_ret, e.refcount_mut(id).count);
                vec![]
            }
            "get_class" => {
                ret_str(r_ret, TY_STRING, e.object_mut(id).class.to_string());
                vec![]
            }
            "is_class" => {
                let class = str_arg(p_args, 0);
                ret_bool(r_ret, inherits(e.object_mut(id).class, &class));
                vec![Arg::Str(class)]
            }
            "to_string" => {
                ret_str(r_ret, TY_STRING, format!("<{}#{}>", e.object_mut(id).class, id as i64));
                vec![]
            }
            "connect" => {
                let signal = str_arg(p_args, 0);
                let callable = callable_arg(p_args, 1);
                let flags = int_arg(p_args, 2);

                Rc::increment_strong_count(callable);
                let callable = Rc::from_raw(callable);
                e.object_mut(id).connections.push((signal.clone(), callable));

                ret_int(r_ret, 0);
                vec![Arg::Str(signal), Arg::Callable, Arg::Int(flags)]
            }
            "disconnect" => {
                let signal = str_arg(p_args, 0);
                let callable = callable_arg(p_args, 1);

                let connections = &mut e.object_mut(id).connections;
                let position = connections
                    .iter()
                    .position(|(name, c)| *name == signal && Rc::as_ptr(c) == callable);
                if let Some(position) = position {
                    garbage.push(connections.remove(position).1);
                }

                vec![Arg::Str(signal), Arg::Callable]
            }
            "is_connected" => {
                let signal = str_arg(p_args, 0);
                let callable = callable_arg(p_args, 1);

                let connected = e
                    .object_mut(id)
                    .connections
                    .iter()
                    .any(|(name, c)| *name == signal && Rc::as_ptr(c) == callable);
                ret_bool(r_ret, connected);

                vec![Arg::Str(signal), Arg::Callable]
            }
            "add_item" => {
                let text = str_arg(p_args, 0);
                let icon = object_arg(p_args, 1);
                let selectable = bool_arg(p_args, 2);

                let items = &mut e.object_mut(id).items;
                items.push(text.clone());
                ret_int(r_ret, items.len() as i64 - 1);

                vec![Arg::Str(text), Arg::Object(icon), Arg::Bool(selectable)]
            }
            "get_item_count" => {
                ret_int(r_ret, e.object_mut(id).items.len() as i64);
                vec![]
            }
            "get_item_text" => {
                let index = int_arg(p_args, 0);
                let text = e.object_mut(id).items.get(index as usize).cloned().unwrap_or_default();
                ret_str(r_ret, TY_STRING, text);
                vec![Arg::Int(index)]
            }
            "select" => {
                let index = int_arg(p_args, 0);
                let single = bool_arg(p_args, 1);

                let selected = &mut e.object_mut(id).selected;
                if single {
                    selected.clear();
                }
                selected.push(index as i32);

                vec![Arg::Int(index), Arg::Bool(single)]
            }
            "get_selected_items" => {
                ret_packed(r_ret, e.object_mut(id).selected.clone());
                vec![]
            }
            "is_action_pressed" => {
                let action = str_arg(p_args, 0);
                let exact_match = bool_arg(p_args, 1);
                ret_bool(r_ret, action == "ui_accept");
                vec![Arg::Str(action), Arg::Bool(exact_match)]
            }
            "set_name" => {
                let name = str_arg(p_args, 0);
                e.object_mut(id).name = name.clone();
                vec![Arg::Str(name)]
            }
            "get_name" => {
                let object = e.object_mut(id);
                // Node names are StringNames, resource names Strings.
                let ty = if inherits(object.class, "Node") {
                    TY_STRING_NAME
                } else {
                    TY_STRING
                };
                ret_str(r_ret, ty, object.name.clone());
                vec![]
            }
            "duplicate" => {
                let subresources = bool_arg(p_args, 0);
                let (class, name) = {
                    let original = e.object_mut(id);
                    (original.class, original.name.clone())
                };

                let handle = e.create_object(
                    class,
                    Some(RefCount {
                        count: 1,
                        init_pending: false,
                    }),
                );
                e.object_mut((*handle).id).name = name;
                ret_object(r_ret, handle);

                vec![Arg::Bool(subresources)]
            }
            "set_cell" => {
                let layer = int_arg(p_args, 0) as i32;
                let (x, y) = vector2i_arg(p_args, 1);
                let source_id = int_arg(p_args, 2) as i32;
                let atlas_coords = vector2i_arg(p_args, 3);
                let alternative_tile = int_arg(p_args, 4) as i32;

                let cell = TileCell {
                    source_id,
                    atlas_coords,
                    alternative_tile,
                };
                e.object_mut(id).cells.insert((layer, x, y), cell);

                vec![
                    Arg::Int(layer.into()),
                    Arg::Vector2i(x, y),
                    Arg::Int(source_id.into()),
                    Arg::Vector2i(atlas_coords.0, atlas_coords.1),
                    Arg::Int(alternative_tile.into()),
                ]
            }
            "get_used_rect" => {
                let coords: Vec<(i32, i32)> = e.object_mut(id).cells.keys().map(|&(_, x, y)| (x, y)).collect();
                let rect = if coords.is_empty() {
                    [0; 4]
                } else {
                    let (min_x, max_x) = min_max(coords.iter().map(|c| c.0));
                    let (min_y, max_y) = min_max(coords.iter().map(|c| c.1));
                    [min_x, min_y, max_x - min_x + 1, max_y - min_y + 1]
                };
                *(r_ret as *mut [i32; 4]) = rect;
                vec![]
            }
            "set_modulate" => {
                let modulate = color_arg(p_args, 0);
                e.object_mut(id).modulate = modulate;
                vec![Arg::Color(modulate)]
            }
            "get_modulate" => {
                *(r_ret as *mut [f32; 4]) = e.object_mut(id).modulate;
                vec![]
            }
            _ => panic!("mock engine: unsupported ptrcall {}::{}", bind.class, bind.method),
        };

        e.calls.push(Call {
            class: bind.class.clone(),
            method: bind.method.clone(),
            args: args.clone(),
        });
        args
    });

    drop(args);
    drop(garbage);
}

unsafe extern "C" fn object_method_bind_call(
    p_method_bind: sys::GDExtensionMethodBindPtr,
    p_instance: *mut c_void,
    p_args: *const *const c_void,
    p_arg_count: sys::GDExtensionInt,
    r_ret: *mut c_void,
    r_error: *mut sys::GDExtensionCallError,
) {
    let bind = &*(p_method_bind as *const MethodBind);
    assert_eq!(bind.method, "emit_signal", "mock engine: unsupported varcall {}", bind.method);

    let args = std::slice::from_raw_parts(p_args, p_arg_count as usize);
    let signal_variant = &*(args[0] as *const MockVariant);
    assert_eq!(signal_variant.ty, TY_STRING_NAME, "emit_signal() expects a StringName");

    let signal = read_str(signal_variant.payload_ptr());
    let id = id_of(p_instance);

    let receivers: Vec<Rc<CustomCallable>> = with_engine(|e| {
        e.calls.push(Call {
            class: bind.class.clone(),
            method: bind.method.clone(),
            args: vec![Arg::Str(signal.clone())],
        });

        e.objects.get(&id).map_or_else(Vec::new, |o| {
            o.connections
                .iter()
                .filter(|(name, _)| *name == signal)
                .map(|(_, c)| c.clone())
                .collect()
        })
    });

    let signal_args = &args[1..];
    for receiver in receivers.iter() {
        let Some(call_func) = receiver.info.call_func else {
            continue;
        };

        let mut ret = MockVariant::nil();
        let mut error = sys::default_call_error();
        call_func(
            receiver.info.callable_userdata,
            signal_args.as_ptr(),
            signal_args.len() as i64,
            &mut ret as *mut MockVariant as *mut c_void,
            &mut error,
        );
        variant_destroy(&mut ret as *mut MockVariant as *mut c_void);

        if error.error != sys::GDEXTENSION_CALL_OK {
            with_engine(|e| e.callable_errors.push((error.error, error.argument, error.expected)));
        }
    }
    drop(receivers);

    let mut ok = MockVariant {
        ty: TY_INT,
        payload: [0; 2],
    };
    ret_int(ok.payload_mut(), 0);
    std::ptr::write(r_ret as *mut MockVariant, ok);

    *r_error = sys::default_call_error();
    (*r_error).error = sys::GDEXTENSION_CALL_OK;
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Loading

macro_rules! lookup_functions {
    ($name:expr; $( $function:ident ),* $(,)?) => {
        match $name {
            $(
                stringify!($function) => Some(std::mem::transmute::<*const (), unsafe extern "C" fn()>(
                    $function as *const (),
                )),
            )*
            _ => None,
        }
    };
}

unsafe extern "C" fn get_proc_address(p_function_name: *const c_char) -> sys::GDExtensionInterfaceFunctionPtr {
    let name = CStr::from_ptr(p_function_name).to_str().unwrap_or_default();

    lookup_functions!(name;
        get_godot_version,
        print_error,
        print_warning,
        variant_new_copy,
        variant_new_nil,
        variant_destroy,
        variant_get_type,
        variant_stringify,
        get_variant_from_type_constructor,
        get_variant_to_type_constructor,
        variant_get_ptr_constructor,
        variant_get_ptr_destructor,
        variant_get_ptr_builtin_method,
        variant_get_ptr_utility_function,
        string_new_with_utf8_chars_and_len,
        string_to_utf8_chars,
        string_name_new_with_utf8_chars_and_len,
        packed_int32_array_operator_index_const,
        object_method_bind_call,
        object_method_bind_ptrcall,
        object_destroy,
        global_get_singleton,
        object_get_instance_id,
        object_get_instance_from_id,
        object_get_class_name,
        callable_custom_create2,
        classdb_construct_object,
        classdb_construct_object2,
        classdb_get_method_bind,
    )
}

static LIBRARY_TOKEN: u8 = 0;

/// Runs the extension entry point of `E` against the mock engine, returning the init callbacks it registered.
pub fn load_library<E: ExtensionLibrary>() -> sys::GDExtensionInitialization {
    let mut init = MaybeUninit::<sys::GDExtensionInitialization>::zeroed();
    let library = &LIBRARY_TOKEN as *const u8 as sys::GDExtensionClassLibraryPtr;

    // SAFETY: the mock provides every interface function the bindings load; `init` is a valid out-parameter.
    let success =
        unsafe { glue_core::init::__gdext_load_library::<E>(Some(get_proc_address), library, init.as_mut_ptr()) };
    assert_eq!(success, 1, "entry point reported failure");

    // SAFETY: zeroed is a valid bit pattern, and the entry point wrote all fields.
    unsafe { init.assume_init() }
}

pub fn initialize_level(init: &sys::GDExtensionInitialization, level: InitLevel) {
    let initialize = init.initialize.expect("initialize callback registered");

    // SAFETY: callback registered by the entry point, called in ascending level order.
    unsafe { initialize(init.userdata, level.to_sys()) };
}

pub fn deinitialize_level(init: &sys::GDExtensionInitialization, level: InitLevel) {
    let deinitialize = init.deinitialize.expect("deinitialize callback registered");

    // SAFETY: callback registered by the entry point, called in descending level order.
    unsafe { deinitialize(init.userdata, level.to_sys()) };
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Queries

/// Hashes passed to each `classdb_get_method_bind` call for `class::method`.
pub fn bind_lookups(class: &str, method: &str) -> Vec<i64> {
    with_engine(|e| {
        e.bind_lookups
            .iter()
            .filter(|l| l.class == class && l.method == method)
            .map(|l| l.hash)
            .collect()
    })
}

pub fn singleton_lookups() -> Vec<String> {
    with_engine(|e| e.singleton_lookups.clone())
}

/// Arguments of the most recent call of `method` (on any class).
pub fn last_call(method: &str) -> Vec<Arg> {
    with_engine(|e| {
        e.calls
            .iter()
            .rev()
            .find(|c| c.method == method)
            .map(|c| c.args.clone())
            .unwrap_or_else(|| panic!("mock engine: `{method}` was never called"))
    })
}

pub fn call_count(method: &str) -> usize {
    with_engine(|e| e.calls.iter().filter(|c| c.method == method).count())
}

pub fn take_callable_errors() -> Vec<CallableError> {
    with_engine(|e| std::mem::take(&mut e.callable_errors))
}

pub fn printed() -> Vec<String> {
    with_engine(|e| e.printed.clone())
}

pub fn errors() -> Vec<String> {
    with_engine(|e| e.errors.clone())
}

pub fn is_alive(id: i64) -> bool {
    with_engine(|e| e.objects.contains_key(&(id as u64)))
}

pub fn reference_count(id: i64) -> Option<i64> {
    with_engine(|e| e.objects.get(&(id as u64)).and_then(|o| o.refcount.as_ref()).map(|rc| rc.count))
}

pub fn string_names_created() -> usize {
    STRING_NAMES_CREATED.with(Cell::get)
}

pub fn live_string_names() -> i64 {
    LIVE_STRING_NAMES.with(Cell::get)
}
