/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::collections::{HashMap, HashSet};

use crate::models::domain::{ClassCodegenLevel, GodotTy, RustTy, TyName};
use crate::models::json::JsonApi;
use crate::special_cases;

#[derive(Default)]
pub struct Context<'a> {
    engine_classes: HashSet<&'a str>,
    global_enums: HashSet<&'a str>,
    singletons: HashSet<&'a str>,
    classes_with_signals: HashSet<TyName>,
    inheritance_tree: InheritanceTree,
    cached_rust_types: HashMap<GodotTy, RustTy>,
    method_table_indices: HashMap<ClassCodegenLevel, usize>,
}

impl<'a> Context<'a> {
    pub fn build_from_api(api: &'a JsonApi) -> Self {
        let mut ctx = Context::default();

        // `Variant.Type` and `Variant.Operator` are listed among global enums, but belong to a builtin.
        for global_enum in api.global_enums.iter() {
            if !global_enum.name.contains('.') {
                ctx.global_enums.insert(global_enum.name.as_str());
            }
        }

        for class in api.classes.iter() {
            let class_name = TyName::from_godot(&class.name);
            if special_cases::is_class_deleted(&class_name) {
                continue;
            }

            if !class.signals().is_empty() {
                ctx.classes_with_signals.insert(class_name.clone());
            }

            if let Some(base) = class.inherits.as_ref() {
                ctx.inheritance_tree.insert(class_name, TyName::from_godot(base));
            }

            ctx.engine_classes.insert(class.name.as_str());
        }

        for singleton in api.singletons.iter() {
            if ctx.engine_classes.contains(singleton.name.as_str()) {
                ctx.singletons.insert(singleton.name.as_str());
            }
        }

        // Wrappers deref to their base, so every base of a bound class must be bound.
        for class_name in ctx.engine_classes.iter().map(|name| TyName::from_godot(name)) {
            for base in ctx.inheritance_tree.collect_all_bases(&class_name) {
                assert!(
                    ctx.engine_classes.contains(base.godot_ty.as_str()),
                    "class `{}` is bound, but its base `{}` is not",
                    class_name.godot_ty,
                    base.godot_ty
                );
            }
        }

        ctx
    }

    pub fn is_engine_class(&self, class_name: &str) -> bool {
        self.engine_classes.contains(class_name)
    }

    pub fn is_global_enum(&self, enum_name: &str) -> bool {
        self.global_enums.contains(enum_name)
    }

    pub fn is_singleton(&self, class_name: &TyName) -> bool {
        self.singletons.contains(class_name.godot_ty.as_str())
    }

    pub fn inheritance_tree(&self) -> &InheritanceTree {
        &self.inheritance_tree
    }

    /// Closest base class (not `class_name` itself) that declares signals.
    pub fn find_nearest_base_with_signals(&self, class_name: &TyName) -> Option<TyName> {
        self.inheritance_tree
            .collect_all_bases(class_name)
            .into_iter()
            .find(|base| self.classes_with_signals.contains(base))
    }

    /// Next free slot in the method table of `level`.
    ///
    /// Classes and methods are visited in JSON order, so every build script that maps the API arrives at the same indices.
    pub fn next_table_index(&mut self, level: ClassCodegenLevel) -> usize {
        let slot = self.method_table_indices.entry(level).or_insert(0);
        let index = *slot;
        *slot += 1;
        index
    }

    pub fn find_rust_type(&self, ty: &GodotTy) -> Option<&RustTy> {
        self.cached_rust_types.get(ty)
    }

    pub fn insert_rust_type(&mut self, ty: GodotTy, resolved: RustTy) {
        let prev = self.cached_rust_types.insert(ty, resolved);
        assert!(prev.is_none(), "no overwrites of RustTy");
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------

#[derive(Default)]
pub struct InheritanceTree {
    derived_to_base: HashMap<TyName, TyName>,
}

impl InheritanceTree {
    pub fn insert(&mut self, derived_name: TyName, base_name: TyName) {
        let existing = self.derived_to_base.insert(derived_name, base_name);
        assert!(existing.is_none(), "Duplicate inheritance insert");
    }

    /// Returns all base classes, without the class itself, in order from nearest to furthest (object).
    pub fn collect_all_bases(&self, derived_name: &TyName) -> Vec<TyName> {
        let mut upgoing_bases = vec![];
        let mut current = derived_name;

        while let Some(base) = self.derived_to_base.get(current) {
            upgoing_bases.push(base.clone());
            current = base;
        }

        upgoing_bases
    }
}
