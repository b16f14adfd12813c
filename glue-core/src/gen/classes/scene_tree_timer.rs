# ! [doc = "Sidecar module for class [`SceneTreeTimer`][crate::classes::SceneTreeTimer]."] # [allow (unused_imports)] use crate :: builtin :: * ; # [allow (unused_imports)] use crate :: meta :: { AsArg , AsObjectArg , CowArg , InternedName , ObjectArg , Signature } ; # [allow (unused_imports)] use crate :: obj :: Gd ; # [allow (unused_imports)] use crate :: signal :: { SignalObject , TypedSignal } ; use crate :: sys ; pub (super) mod re_export { use super :: * ; # [doc = "Godot class `SceneTreeTimer`.\n\nInherits [`RefCounted`][crate::classes::RefCounted].\n\nRelated symbols (default-param builders, enums, interned names, signals) are in [`scene_tree_timer`][crate::classes::scene_tree_timer]."] # [derive (Debug)] # [repr (C)] pub struct SceneTreeTimer { object_ptr : sys :: GDExtensionObjectPtr , } impl SceneTreeTimer { pub fn set_time_left (& mut self , time : f64 ,) { type CallRet = () ; type CallParams = (f64 ,) ; let args = (time ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (590usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "SceneTreeTimer" , "set_time_left" , self . object_ptr , args ,) } } pub fn get_time_left (& self ,) -> f64 { type CallRet = f64 ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (591usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "SceneTreeTimer" , "get_time_left" , self . object_ptr , args ,) } } # [doc = "Typed signals of this class and its bases; see [`SignalsOfSceneTreeTimer`][super::scene_tree_timer::SignalsOfSceneTreeTimer]."] pub fn signals (& mut self) -> super :: SignalsOfSceneTreeTimer < '_ > { super :: SignalsOfSceneTreeTimer :: __new (crate :: signal :: SignalObject :: __new (self . object_ptr)) } } impl crate :: obj :: GodotClass for SceneTreeTimer { const CLASS_NAME : & 'static str = "SceneTreeTimer" ; type Base = crate :: classes :: RefCounted ; type Memory = crate :: obj :: MemRefCounted ; const INIT_LEVEL : crate :: init :: InitLevel = crate :: init :: InitLevel :: Scene ; } impl crate :: obj :: EngineClass for SceneTreeTimer { fn as_object_ptr (& self) -> sys :: GDExtensionObjectPtr { self . object_ptr } } unsafe impl crate :: obj :: Inherits < crate :: classes :: RefCounted > for SceneTreeTimer { } unsafe impl crate :: obj :: Inherits < crate :: classes :: Object > for SceneTreeTimer { } impl std :: ops :: Deref for SceneTreeTimer { type Target = crate :: classes :: RefCounted ; fn deref (& self) -> & Self :: Target { unsafe { std :: mem :: transmute :: < & Self , & Self :: Target > (self) } } } impl std :: ops :: DerefMut for SceneTreeTimer { fn deref_mut (& mut self) -> & mut Self :: Target { unsafe { std :: mem :: transmute :: < & mut Self , & mut Self :: Target > (self) } } } } # [doc = "Properties declared by [`SceneTreeTimer`][super::SceneTreeTimer], as interned engine names."] pub struct PropertyName ; impl PropertyName { pub const TIME_LEFT : InternedName = InternedName :: new ("time_left") ; } # [doc = "Methods declared by [`SceneTreeTimer`][super::SceneTreeTimer], as interned engine names."] pub struct MethodName ; impl MethodName { pub const SET_TIME_LEFT : InternedName = InternedName :: new ("set_time_left") ; pub const GET_TIME_LEFT : InternedName = InternedName :: new ("get_time_left") ; } # [doc = "Signals declared by [`SceneTreeTimer`][super::SceneTreeTimer], as interned engine names."] pub struct SignalName ; impl SignalName { pub const TIMEOUT : InternedName = InternedName :: new ("timeout") ; } # [doc = "A collection of signals for the [`SceneTreeTimer`][crate::classes::SceneTreeTimer] class."] pub struct SignalsOfSceneTreeTimer < 'c > { __base : crate :: classes :: object :: SignalsOfObject < 'c > , } impl < 'c > SignalsOfSceneTreeTimer < 'c > { # [doc (hidden)] pub fn __new (object : SignalObject < 'c >) -> Self { Self { __base : crate :: classes :: object :: SignalsOfObject :: __new (object) } } # [doc (hidden)] pub fn __object (& self) -> SignalObject < 'c > { self . __base . __object () } # [doc = "Signature: `()`"] pub fn timeout (& mut self) -> SigTimeout < 'c > { SigTimeout { typed : TypedSignal :: __new (self . __object () , "timeout") , } } } impl < 'c > std :: ops :: Deref for SignalsOfSceneTreeTimer < 'c > { type Target = crate :: classes :: object :: SignalsOfObject < 'c > ; fn deref (& self) -> & Self :: Target { & self . __base } } impl std :: ops :: DerefMut for SignalsOfSceneTreeTimer < '_ > { fn deref_mut (& mut self) -> & mut Self :: Target { & mut self . __base } } type TypedSigTimeout < 'c > = TypedSignal < 'c , () > ; pub struct SigTimeout < 'c > { typed : TypedSigTimeout < 'c > , } impl SigTimeout < '_ > { pub fn emit (& mut self ,) { self . typed . emit_tuple (()) ; } } impl < 'c > std :: ops :: Deref for SigTimeout < 'c > { type Target = TypedSigTimeout < 'c > ; fn deref (& self) -> & Self :: Target { & self . typed } } impl std :: ops :: DerefMut for SigTimeout < '_ > { fn deref_mut (& mut self) -> & mut Self :: Target { & mut self . typed } }