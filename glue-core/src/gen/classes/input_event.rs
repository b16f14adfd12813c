# ! [doc = "Sidecar module for class [`InputEvent`][crate::classes::InputEvent]."] # [allow (unused_imports)] use crate :: builtin :: * ; # [allow (unused_imports)] use crate :: meta :: { AsArg , AsObjectArg , CowArg , InternedName , ObjectArg , Signature } ; # [allow (unused_imports)] use crate :: obj :: Gd ; # [allow (unused_imports)] use crate :: signal :: { SignalObject , TypedSignal } ; use crate :: sys ; pub (super) mod re_export { use super :: * ; # [doc = "Godot class `InputEvent`.\n\nInherits [`Resource`][crate::classes::Resource].\n\nRelated symbols (default-param builders, enums, interned names, signals) are in [`input_event`][crate::classes::input_event]."] # [derive (Debug)] # [repr (C)] pub struct InputEvent { object_ptr : sys :: GDExtensionObjectPtr , } impl InputEvent { pub fn set_device (& mut self , device : i32 ,) { type CallRet = () ; type CallParams = (i32 ,) ; let args = (device ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (232usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "InputEvent" , "set_device" , self . object_ptr , args ,) } } pub fn get_device (& self ,) -> i32 { type CallRet = i32 ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (233usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "InputEvent" , "get_device" , self . object_ptr , args ,) } } pub (crate) fn is_action_full (& self , action : CowArg < '_ , StringName > , exact_match : bool ,) -> bool { type CallRet = bool ; type CallParams < 'a0 , > = (CowArg < 'a0 , StringName > , bool ,) ; let args = (action , exact_match ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (234usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "InputEvent" , "is_action" , self . object_ptr , args ,) } } # [inline] pub fn is_action (& self , action : impl AsArg < StringName > ,) -> bool { self . is_action_ex (action ,) . done () } # [inline] pub fn is_action_ex < 'ex > (& 'ex self , action : impl AsArg < StringName > + 'ex ,) -> super :: ExIsAction < 'ex > { super :: ExIsAction :: new (self , action . into_arg () ,) } pub (crate) fn is_action_pressed_full (& self , action : CowArg < '_ , StringName > , allow_echo : bool , exact_match : bool ,) -> bool { type CallRet = bool ; type CallParams < 'a0 , > = (CowArg < 'a0 , StringName > , bool , bool ,) ; let args = (action , allow_echo , exact_match ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (235usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "InputEvent" , "is_action_pressed" , self . object_ptr , args ,) } } # [inline] pub fn is_action_pressed (& self , action : impl AsArg < StringName > ,) -> bool { self . is_action_pressed_ex (action ,) . done () } # [inline] pub fn is_action_pressed_ex < 'ex > (& 'ex self , action : impl AsArg < StringName > + 'ex ,) -> super :: ExIsActionPressed < 'ex > { super :: ExIsActionPressed :: new (self , action . into_arg () ,) } pub (crate) fn is_action_released_full (& self , action : CowArg < '_ , StringName > , exact_match : bool ,) -> bool { type CallRet = bool ; type CallParams < 'a0 , > = (CowArg < 'a0 , StringName > , bool ,) ; let args = (action , exact_match ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (236usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "InputEvent" , "is_action_released" , self . object_ptr , args ,) } } # [inline] pub fn is_action_released (& self , action : impl AsArg < StringName > ,) -> bool { self . is_action_released_ex (action ,) . done () } # [inline] pub fn is_action_released_ex < 'ex > (& 'ex self , action : impl AsArg < StringName > + 'ex ,) -> super :: ExIsActionReleased < 'ex > { super :: ExIsActionReleased :: new (self , action . into_arg () ,) } pub (crate) fn get_action_strength_full (& self , action : CowArg < '_ , StringName > , exact_match : bool ,) -> f32 { type CallRet = f32 ; type CallParams < 'a0 , > = (CowArg < 'a0 , StringName > , bool ,) ; let args = (action , exact_match ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (237usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "InputEvent" , "get_action_strength" , self . object_ptr , args ,) } } # [inline] pub fn get_action_strength (& self , action : impl AsArg < StringName > ,) -> f32 { self . get_action_strength_ex (action ,) . done () } # [inline] pub fn get_action_strength_ex < 'ex > (& 'ex self , action : impl AsArg < StringName > + 'ex ,) -> super :: ExGetActionStrength < 'ex > { super :: ExGetActionStrength :: new (self , action . into_arg () ,) } pub fn is_canceled (& self ,) -> bool { type CallRet = bool ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (238usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "InputEvent" , "is_canceled" , self . object_ptr , args ,) } } pub fn is_pressed (& self ,) -> bool { type CallRet = bool ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (239usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "InputEvent" , "is_pressed" , self . object_ptr , args ,) } } pub fn is_released (& self ,) -> bool { type CallRet = bool ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (240usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "InputEvent" , "is_released" , self . object_ptr , args ,) } } pub fn is_echo (& self ,) -> bool { type CallRet = bool ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (241usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "InputEvent" , "is_echo" , self . object_ptr , args ,) } } pub fn as_text (& self ,) -> GString { type CallRet = GString ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (242usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "InputEvent" , "as_text" , self . object_ptr , args ,) } } pub (crate) fn is_match_full (& self , event : ObjectArg < crate :: classes :: InputEvent > , exact_match : bool ,) -> bool { type CallRet = bool ; type CallParams = (ObjectArg < crate :: classes :: InputEvent > , bool ,) ; let args = (event , exact_match ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (243usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "InputEvent" , "is_match" , self . object_ptr , args ,) } } # [inline] pub fn is_match (& self , event : impl AsObjectArg < crate :: classes :: InputEvent > ,) -> bool { self . is_match_ex (event ,) . done () } # [inline] pub fn is_match_ex < 'ex > (& 'ex self , event : impl AsObjectArg < crate :: classes :: InputEvent > ,) -> super :: ExIsMatch < 'ex > { super :: ExIsMatch :: new (self , event . as_object_arg () ,) } pub fn is_action_type (& self ,) -> bool { type CallRet = bool ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (244usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "InputEvent" , "is_action_type" , self . object_ptr , args ,) } } pub fn accumulate (& mut self , with_event : impl AsObjectArg < crate :: classes :: InputEvent > ,) -> bool { type CallRet = bool ; type CallParams = (ObjectArg < crate :: classes :: InputEvent > ,) ; let args = (with_event . as_object_arg () ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (245usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "InputEvent" , "accumulate" , self . object_ptr , args ,) } } pub const DEVICE_ID_EMULATION : i32 = - 1i32 ; } impl crate :: obj :: GodotClass for InputEvent { const CLASS_NAME : & 'static str = "InputEvent" ; type Base = crate :: classes :: Resource ; type Memory = crate :: obj :: MemRefCounted ; const INIT_LEVEL : crate :: init :: InitLevel = crate :: init :: InitLevel :: Scene ; } impl crate :: obj :: EngineClass for InputEvent { fn as_object_ptr (& self) -> sys :: GDExtensionObjectPtr { self . object_ptr } } unsafe impl crate :: obj :: Inherits < crate :: classes :: Resource > for InputEvent { } unsafe impl crate :: obj :: Inherits < crate :: classes :: RefCounted > for InputEvent { } unsafe impl crate :: obj :: Inherits < crate :: classes :: Object > for InputEvent { } impl std :: ops :: Deref for InputEvent { type Target = crate :: classes :: Resource ; fn deref (& self) -> & Self :: Target { unsafe { std :: mem :: transmute :: < & Self , & Self :: Target > (self) } } } impl std :: ops :: DerefMut for InputEvent { fn deref_mut (& mut self) -> & mut Self :: Target { unsafe { std :: mem :: transmute :: < & mut Self , & mut Self :: Target > (self) } } } } # [doc = "Default-param extender for [`InputEvent::is_action_ex`][super::InputEvent::is_action_ex]."] # [must_use] pub struct ExIsAction < 'ex > { surround_object : & 'ex re_export :: InputEvent , action : CowArg < 'ex , StringName > , exact_match : bool , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExIsAction < 'ex > { fn new (surround_object : & 'ex re_export :: InputEvent , action : CowArg < 'ex , StringName > ,) -> Self { Self { surround_object , action , exact_match : false , } } # [inline] pub fn exact_match (self , value : bool) -> Self { Self { exact_match : value , .. self } } # [inline] pub fn done (self) -> bool { re_export :: InputEvent :: is_action_full (self . surround_object , self . action , self . exact_match ,) } } # [doc = "Default-param extender for [`InputEvent::is_action_pressed_ex`][super::InputEvent::is_action_pressed_ex]."] # [must_use] pub struct ExIsActionPressed < 'ex > { surround_object : & 'ex re_export :: InputEvent , action : CowArg < 'ex , StringName > , allow_echo : bool , exact_match : bool , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExIsActionPressed < 'ex > { fn new (surround_object : & 'ex re_export :: InputEvent , action : CowArg < 'ex , StringName > ,) -> Self { Self { surround_object , action , allow_echo : false , exact_match : false , } } # [inline] pub fn allow_echo (self , value : bool) -> Self { Self { allow_echo : value , .. self } } # [inline] pub fn exact_match (self , value : bool) -> Self { Self { exact_match : value , .. self } } # [inline] pub fn done (self) -> bool { re_export :: InputEvent :: is_action_pressed_full (self . surround_object , self . action , self . allow_echo , self . exact_match ,) } } # [doc = "Default-param extender for [`InputEvent::is_action_released_ex`][super::InputEvent::is_action_released_ex]."] # [must_use] pub struct ExIsActionReleased < 'ex > { surround_object : & 'ex re_export :: InputEvent , action : CowArg < 'ex , StringName > , exact_match : bool , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExIsActionReleased < 'ex > { fn new (surround_object : & 'ex re_export :: InputEvent , action : CowArg < 'ex , StringName > ,) -> Self { Self { surround_object , action , exact_match : false , } } # [inline] pub fn exact_match (self , value : bool) -> Self { Self { exact_match : value , .. self } } # [inline] pub fn done (self) -> bool { re_export :: InputEvent :: is_action_released_full (self . surround_object , self . action , self . exact_match ,) } } # [doc = "Default-param extender for [`InputEvent::get_action_strength_ex`][super::InputEvent::get_action_strength_ex]."] # [must_use] pub struct ExGetActionStrength < 'ex > { surround_object : & 'ex re_export :: InputEvent , action : CowArg < 'ex , StringName > , exact_match : bool , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExGetActionStrength < 'ex > { fn new (surround_object : & 'ex re_export :: InputEvent , action : CowArg < 'ex , StringName > ,) -> Self { Self { surround_object , action , exact_match : false , } } # [inline] pub fn exact_match (self , value : bool) -> Self { Self { exact_match : value , .. self } } # [inline] pub fn done (self) -> f32 { re_export :: InputEvent :: get_action_strength_full (self . surround_object , self . action , self . exact_match ,) } } # [doc = "Default-param extender for [`InputEvent::is_match_ex`][super::InputEvent::is_match_ex]."] # [must_use] pub struct ExIsMatch < 'ex > { surround_object : & 'ex re_export :: InputEvent , event : ObjectArg < crate :: classes :: InputEvent > , exact_match : bool , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExIsMatch < 'ex > { fn new (surround_object : & 'ex re_export :: InputEvent , event : ObjectArg < crate :: classes :: InputEvent > ,) -> Self { Self { surround_object , event , exact_match : true , } } # [inline] pub fn exact_match (self , value : bool) -> Self { Self { exact_match : value , .. self } } # [inline] pub fn done (self) -> bool { re_export :: InputEvent :: is_match_full (self . surround_object , self . event , self . exact_match ,) } } # [doc = "Properties declared by [`InputEvent`][super::InputEvent], as interned engine names."] pub struct PropertyName ; impl PropertyName { pub const DEVICE : InternedName = InternedName :: new ("device") ; } # [doc = "Methods declared by [`InputEvent`][super::InputEvent], as interned engine names."] pub struct MethodName ; impl MethodName { pub const SET_DEVICE : InternedName = InternedName :: new ("set_device") ; pub const GET_DEVICE : InternedName = InternedName :: new ("get_device") ; pub const IS_ACTION : InternedName = InternedName :: new ("is_action") ; pub const IS_ACTION_PRESSED : InternedName = InternedName :: new ("is_action_pressed") ; pub const IS_ACTION_RELEASED : InternedName = InternedName :: new ("is_action_released") ; pub const GET_ACTION_STRENGTH : InternedName = InternedName :: new ("get_action_strength") ; pub const IS_CANCELED : InternedName = InternedName :: new ("is_canceled") ; pub const IS_PRESSED : InternedName = InternedName :: new ("is_pressed") ; pub const IS_RELEASED : InternedName = InternedName :: new ("is_released") ; pub const IS_ECHO : InternedName = InternedName :: new ("is_echo") ; pub const AS_TEXT : InternedName = InternedName :: new ("as_text") ; pub const IS_MATCH : InternedName = InternedName :: new ("is_match") ; pub const IS_ACTION_TYPE : InternedName = InternedName :: new ("is_action_type") ; pub const ACCUMULATE : InternedName = InternedName :: new ("accumulate") ; } # [doc = "Signals declared by [`InputEvent`][super::InputEvent], as interned engine names."] pub struct SignalName ; impl SignalName { }