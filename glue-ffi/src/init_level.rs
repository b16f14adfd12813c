/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

/// Step in the Godot initialization process.
///
/// Godot's initialization and deinitialization processes are split into multiple stages, like a stack. At each level,
/// a different amount of engine functionality is available. Deinitialization happens in reverse order.
///
/// Every generated class belongs to one level; its method binds are loaded when that level initializes.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum InitLevel {
    /// First level loaded by Godot. Builtin types and core classes (`Object`, `RefCounted`, resources) are available.
    Core,

    /// Second level loaded by Godot. Server classes and singletons such as `Input` become available.
    Servers,

    /// Third level loaded by Godot. Most classes are available.
    Scene,

    /// Fourth level loaded by Godot, only in the editor. All classes are available.
    Editor,
}

impl InitLevel {
    #[doc(hidden)]
    pub fn from_sys(level: crate::GDExtensionInitializationLevel) -> Self {
        match level {
            crate::GDEXTENSION_INITIALIZATION_CORE => Self::Core,
            crate::GDEXTENSION_INITIALIZATION_SERVERS => Self::Servers,
            crate::GDEXTENSION_INITIALIZATION_SCENE => Self::Scene,
            crate::GDEXTENSION_INITIALIZATION_EDITOR => Self::Editor,
            _ => {
                eprintln!("WARNING: unknown initialization level {level}");
                Self::Scene
            }
        }
    }

    #[doc(hidden)]
    pub fn to_sys(self) -> crate::GDExtensionInitializationLevel {
        match self {
            Self::Core => crate::GDEXTENSION_INITIALIZATION_CORE,
            Self::Servers => crate::GDEXTENSION_INITIALIZATION_SERVERS,
            Self::Scene => crate::GDEXTENSION_INITIALIZATION_SCENE,
            Self::Editor => crate::GDEXTENSION_INITIALIZATION_EDITOR,
        }
    }

    /// All levels up to and including `self`, in initialization order.
    pub fn up_to(self) -> impl Iterator<Item = InitLevel> {
        [Self::Core, Self::Servers, Self::Scene, Self::Editor]
            .into_iter()
            .filter(move |level| *level <= self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_are_ordered_like_engine_init() {
        assert!(InitLevel::Core < InitLevel::Servers);
        assert!(InitLevel::Scene < InitLevel::Editor);

        let levels: Vec<_> = InitLevel::Scene.up_to().collect();
        assert_eq!(levels, [InitLevel::Core, InitLevel::Servers, InitLevel::Scene]);

        for level in InitLevel::Editor.up_to() {
            assert_eq!(InitLevel::from_sys(level.to_sys()), level);
        }
    }
}
