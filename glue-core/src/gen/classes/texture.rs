# ! [doc = "Sidecar module for class [`Texture`][crate::classes::Texture]."] # [allow (unused_imports)] use crate :: builtin :: * ; # [allow (unused_imports)] use crate :: meta :: { AsArg , AsObjectArg , CowArg , InternedName , ObjectArg , Signature } ; # [allow (unused_imports)] use crate :: obj :: Gd ; # [allow (unused_imports)] use crate :: signal :: { SignalObject , TypedSignal } ; use crate :: sys ; pub (super) mod re_export { use super :: * ; # [doc = "Godot class `Texture`.\n\nInherits [`Resource`][crate::classes::Resource].\n\nRelated symbols (default-param builders, enums, interned names, signals) are in [`texture`][crate::classes::texture]."] # [derive (Debug)] # [repr (C)] pub struct Texture { object_ptr : sys :: GDExtensionObjectPtr , } impl Texture { } impl crate :: obj :: GodotClass for Texture { const CLASS_NAME : & 'static str = "Texture" ; type Base = crate :: classes :: Resource ; type Memory = crate :: obj :: MemRefCounted ; const INIT_LEVEL : crate :: init :: InitLevel = crate :: init :: InitLevel :: Scene ; } impl crate :: obj :: EngineClass for Texture { fn as_object_ptr (& self) -> sys :: GDExtensionObjectPtr { self . object_ptr } } unsafe impl crate :: obj :: Inherits < crate :: classes :: Resource > for Texture { } unsafe impl crate :: obj :: Inherits < crate :: classes :: RefCounted > for Texture { } unsafe impl crate :: obj :: Inherits < crate :: classes :: Object > for Texture { } impl std :: ops :: Deref for Texture { type Target = crate :: classes :: Resource ; fn deref (& self) -> & Self :: Target { unsafe { std :: mem :: transmute :: < & Self , & Self :: Target > (self) } } } impl std :: ops :: DerefMut for Texture { fn deref_mut (& mut self) -> & mut Self :: Target { unsafe { std :: mem :: transmute :: < & mut Self , & mut Self :: Target > (self) } } } } # [doc = "Properties declared by [`Texture`][super::Texture], as interned engine names."] pub struct PropertyName ; impl PropertyName { } # [doc = "Methods declared by [`Texture`][super::Texture], as interned engine names."] pub struct MethodName ; impl MethodName { } # [doc = "Signals declared by [`Texture`][super::Texture], as interned engine names."] pub struct SignalName ; impl SignalName { }