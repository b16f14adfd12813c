/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Runs the bindings against an in-process fake engine: library loading, method binds, marshalling, object lifetimes
//! and signals.
//!
//! The binding is process-global and can be loaded only once per level, so all scenarios share a single test.

mod mock_engine;

use std::cell::RefCell;
use std::rc::Rc;

use glue_core::builtin::{Color, GString, Rect2i, Variant, Vector2i};
use glue_core::classes::{Input, ItemList, Label3D, Node, Object, Resource, TileMap};
use glue_core::init::{ExtensionLibrary, InitLevel};
use glue_core::meta::InternedName;
use glue_core::obj::{Gd, NewAlloc, NewGd};
use glue_core::sys;

use mock_engine::Arg;

thread_local! {
    static LEVEL_EVENTS: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
}

struct MockExtension;

unsafe impl ExtensionLibrary for MockExtension {
    fn min_level() -> InitLevel {
        InitLevel::Core
    }

    fn on_level_init(level: InitLevel) {
        LEVEL_EVENTS.with(|events| events.borrow_mut().push(format!("init {level:?}")));
    }

    fn on_level_deinit(level: InitLevel) {
        LEVEL_EVENTS.with(|events| events.borrow_mut().push(format!("deinit {level:?}")));
    }
}

fn take_level_events() -> Vec<String> {
    LEVEL_EVENTS.with(|events| std::mem::take(&mut *events.borrow_mut()))
}

#[test]
fn extension_against_mock_engine() {
    let init = mock_engine::load_library::<MockExtension>();
    assert_eq!(init.minimum_initialization_level, sys::GDEXTENSION_INITIALIZATION_CORE);
    assert!(sys::is_initialized());

    for level in [InitLevel::Core, InitLevel::Servers, InitLevel::Scene] {
        mock_engine::initialize_level(&init, level);
    }
    assert_eq!(take_level_events(), ["init Core", "init Servers", "init Scene"]);

    method_binds_are_resolved_once();
    results_overwrite_constructed_slots();
    default_arguments_are_filled_in();
    struct_values_cross_by_address();
    singleton_is_looked_up_once();
    interned_names_are_created_once();
    refcounted_objects_follow_handles();
    casts_check_dynamic_class();
    typed_signals_emit_and_disconnect();
    godot_print_reaches_engine();

    for level in [InitLevel::Scene, InitLevel::Servers, InitLevel::Core] {
        mock_engine::deinitialize_level(&init, level);
    }
    assert_eq!(take_level_events(), ["deinit Scene", "deinit Servers", "deinit Core"]);

    assert!(!sys::is_initialized());
    assert_eq!(mock_engine::live_string_names(), 0, "cached StringNames must be released on unload");
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Scenarios

fn method_binds_are_resolved_once() {
    let mut list = ItemList::new_alloc();

    assert_eq!(list.add_item("first"), 0);
    assert_eq!(list.add_item("second"), 1);

    assert_eq!(mock_engine::bind_lookups("ItemList", "add_item").len(), 1);
    assert_eq!(mock_engine::call_count("add_item"), 2);

    assert_eq!(list.get_item_count(), 2);
    assert_eq!(list.get_item_text(1), GString::from("second"));

    list.free();
}

fn results_overwrite_constructed_slots() {
    let mut list = ItemList::new_alloc();
    list.add_item("one");
    list.add_item("two");

    // Each call assigns into a default-constructed return value; the mock rejects anything else.
    for _ in 0..3 {
        assert_eq!(list.get_item_text(0), GString::from("one"));
        assert_eq!(list.get_class(), GString::from("ItemList"));
    }

    list.select(1);
    assert_eq!(list.get_selected_items().to_vec(), [1]);
    assert_eq!(list.get_selected_items().to_vec(), [1]);
    list.free();

    let names_before = mock_engine::live_string_names();
    let mut node = Node::new_alloc();
    node.set_name("hero");
    for _ in 0..3 {
        assert_eq!(node.get_name().to_string(), "hero");
    }
    node.free();
    assert_eq!(mock_engine::live_string_names(), names_before);
}

fn default_arguments_are_filled_in() {
    let mut list = ItemList::new_alloc();

    list.add_item("alpha");
    assert_eq!(
        mock_engine::last_call("add_item"),
        [Arg::str("alpha"), Arg::Object(None), Arg::Bool(true)]
    );

    list.add_item_ex("beta").selectable(false).done();
    assert_eq!(
        mock_engine::last_call("add_item"),
        [Arg::str("beta"), Arg::Object(None), Arg::Bool(false)]
    );

    list.select(1);
    assert_eq!(mock_engine::last_call("select"), [Arg::Int(1), Arg::Bool(true)]);

    list.select_ex(0).single(false).done();
    assert_eq!(mock_engine::last_call("select"), [Arg::Int(0), Arg::Bool(false)]);

    let selected = list.get_selected_items();
    assert_eq!(selected.len(), 2);
    assert_eq!(selected.to_vec(), [1, 0]);
    assert_eq!(selected.get(2), None);

    list.free();
}

fn struct_values_cross_by_address() {
    let mut map = TileMap::new_alloc();
    assert_eq!(map.get_used_rect(), Rect2i::default());

    map.set_cell(0, Vector2i::new(2, 3));
    assert_eq!(
        mock_engine::last_call("set_cell"),
        [
            Arg::Int(0),
            Arg::Vector2i(2, 3),
            Arg::Int(-1),
            Arg::Vector2i(-1, -1),
            Arg::Int(0)
        ]
    );

    map.set_cell_ex(1, Vector2i::new(-1, 5))
        .source_id(4)
        .atlas_coords(Vector2i::new(3, 0))
        .done();
    assert_eq!(
        mock_engine::last_call("set_cell"),
        [
            Arg::Int(1),
            Arg::Vector2i(-1, 5),
            Arg::Int(4),
            Arg::Vector2i(3, 0),
            Arg::Int(0)
        ]
    );

    assert_eq!(map.get_used_rect(), Rect2i::from_components(-1, 3, 4, 3));
    map.free();

    let mut label = Label3D::new_alloc();
    assert_eq!(label.get_modulate(), Color::WHITE);

    let tint = Color::from_rgba(0.25, 0.5, 0.75, 1.0);
    label.set_modulate(tint);
    assert_eq!(mock_engine::last_call("set_modulate"), [Arg::Color([0.25, 0.5, 0.75, 1.0])]);
    assert_eq!(label.get_modulate(), tint);
    label.free();
}

fn singleton_is_looked_up_once() {
    let input = Input::singleton();
    let again = Input::singleton();

    assert_eq!(mock_engine::singleton_lookups(), ["Input"]);
    assert_eq!(input, again);

    assert!(input.is_action_pressed("ui_accept"));
    assert_eq!(
        mock_engine::last_call("is_action_pressed"),
        [Arg::str("ui_accept"), Arg::Bool(false)]
    );

    assert!(!input.is_action_pressed_ex("ui_cancel").exact_match(true).done());
    assert_eq!(
        mock_engine::last_call("is_action_pressed"),
        [Arg::str("ui_cancel"), Arg::Bool(true)]
    );
}

fn interned_names_are_created_once() {
    use glue_core::classes::item_list::SignalName;

    let before = mock_engine::string_names_created();
    let first = SignalName::ITEM_SELECTED.string_sys();
    let after_first = mock_engine::string_names_created();

    let second = InternedName::new("item_selected").string_sys();
    let third = SignalName::ITEM_SELECTED.string_sys();

    assert_eq!(first, second);
    assert_eq!(first, third);
    assert!(after_first - before <= 1);
    assert_eq!(mock_engine::string_names_created(), after_first);

    assert_eq!(SignalName::ITEM_SELECTED.to_string_name().to_string(), "item_selected");
}

fn refcounted_objects_follow_handles() {
    let mut res = Resource::new_gd();
    let id = res.instance_id();
    assert!(id.is_ref_counted());
    assert_eq!(res.get_reference_count(), 1);

    let copy = res.clone();
    assert_eq!(res.get_reference_count(), 2);

    let variant = Variant::from(&res);
    assert_eq!(res.get_reference_count(), 3);

    let back: Gd<Resource> = variant.to();
    assert_eq!(back, res);
    assert_eq!(res.get_reference_count(), 4);

    drop(back);
    drop(variant);
    drop(copy);
    assert_eq!(res.get_reference_count(), 1);

    res.set_name("hero");
    let duplicate = res.duplicate().expect("duplicate() returns an object");
    let duplicate_id = duplicate.instance_id();
    assert_ne!(duplicate_id, id);
    assert_eq!(duplicate.get_reference_count(), 1);
    assert_eq!(duplicate.get_name(), GString::from("hero"));

    // Upcast handles keep counting references.
    let as_object: Gd<Object> = duplicate.upcast();
    assert_eq!(mock_engine::reference_count(duplicate_id.to_i64()), Some(1));

    drop(as_object);
    assert!(!mock_engine::is_alive(duplicate_id.to_i64()));

    drop(res);
    assert!(!mock_engine::is_alive(id.to_i64()));
}

fn casts_check_dynamic_class() {
    let list = ItemList::new_alloc();
    let id = list.instance_id();
    assert!(!id.is_ref_counted());

    let object: Gd<Object> = list.upcast();
    assert_eq!(object.get_class(), GString::from("ItemList"));

    let object = match object.try_cast::<Resource>() {
        Ok(resource) => panic!("ItemList must not cast to Resource: {resource:?}"),
        Err(object) => object,
    };
    assert_eq!(mock_engine::last_call("is_class"), [Arg::str("Resource")]);

    let node: Gd<Node> = object.cast::<Node>();
    let list: Gd<ItemList> = node.cast::<ItemList>();
    assert_eq!(list.instance_id(), id);
    assert_eq!(list.to_string(), format!("<ItemList#{}>", id.to_i64()));

    let stale = list.clone();
    list.free();
    assert!(!stale.is_instance_valid());
    assert_eq!(stale.instance_id_or_none(), None);
    assert_eq!(stale.to_string(), "<Freed Object>");
}

fn typed_signals_emit_and_disconnect() {
    let mut list = ItemList::new_alloc();

    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    let handle = list
        .signals()
        .item_selected()
        .connect(move |index: i64| sink.borrow_mut().push(index));

    assert_eq!(
        mock_engine::last_call("connect"),
        [Arg::str("item_selected"), Arg::Callable, Arg::Int(0)]
    );
    assert!(handle.is_connected());

    list.signals().item_selected().emit(3);
    assert_eq!(mock_engine::last_call("emit_signal"), [Arg::str("item_selected")]);
    assert_eq!(*seen.borrow(), [3]);
    assert!(mock_engine::take_callable_errors().is_empty());

    // Argument mismatches are reported back to the engine instead of reaching the closure.
    list.emit_signal("item_selected", &[]);
    assert_eq!(
        mock_engine::take_callable_errors(),
        [(sys::GDEXTENSION_CALL_ERROR_TOO_FEW_ARGUMENTS, 0, 1)]
    );

    list.emit_signal("item_selected", &[Variant::from(GString::from("oops"))]);
    assert_eq!(
        mock_engine::take_callable_errors(),
        [(sys::GDEXTENSION_CALL_ERROR_INVALID_ARGUMENT, 0, sys::GDEXTENSION_VARIANT_TYPE_INT as i32)]
    );
    assert_eq!(*seen.borrow(), [3]);
    assert!(!mock_engine::errors().is_empty());

    handle.disconnect();
    list.signals().item_selected().emit(5);
    assert_eq!(*seen.borrow(), [3]);

    list.free();
}

fn godot_print_reaches_engine() {
    glue_core::godot_print!("selected {} of {}", 2, 5);

    assert_eq!(mock_engine::printed().last().map(String::as_str), Some("selected 2 of 5"));
}
