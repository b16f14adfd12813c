# ! [doc = "Sidecar module for class [`VisualInstance3D`][crate::classes::VisualInstance3D]."] # [allow (unused_imports)] use crate :: builtin :: * ; # [allow (unused_imports)] use crate :: meta :: { AsArg , AsObjectArg , CowArg , InternedName , ObjectArg , Signature } ; # [allow (unused_imports)] use crate :: obj :: Gd ; # [allow (unused_imports)] use crate :: signal :: { SignalObject , TypedSignal } ; use crate :: sys ; pub (super) mod re_export { use super :: * ; # [doc = "Godot class `VisualInstance3D`.\n\nInherits [`Node3D`][crate::classes::Node3D].\n\nRelated symbols (default-param builders, enums, interned names, signals) are in [`visual_instance_3d`][crate::classes::visual_instance_3d]."] # [derive (Debug)] # [repr (C)] pub struct VisualInstance3D { object_ptr : sys :: GDExtensionObjectPtr , } impl VisualInstance3D { pub fn set_base (& mut self , base : Rid ,) { type CallRet = () ; type CallParams = (Rid ,) ; let args = (base ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (871usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "VisualInstance3D" , "set_base" , self . object_ptr , args ,) } } pub fn get_base (& self ,) -> Rid { type CallRet = Rid ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (872usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "VisualInstance3D" , "get_base" , self . object_ptr , args ,) } } pub fn get_instance (& self ,) -> Rid { type CallRet = Rid ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (873usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "VisualInstance3D" , "get_instance" , self . object_ptr , args ,) } } pub fn set_layer_mask (& mut self , mask : u32 ,) { type CallRet = () ; type CallParams = (u32 ,) ; let args = (mask ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (874usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "VisualInstance3D" , "set_layer_mask" , self . object_ptr , args ,) } } pub fn get_layer_mask (& self ,) -> u32 { type CallRet = u32 ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (875usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "VisualInstance3D" , "get_layer_mask" , self . object_ptr , args ,) } } pub fn set_layer_mask_value (& mut self , layer_number : i32 , value : bool ,) { type CallRet = () ; type CallParams = (i32 , bool ,) ; let args = (layer_number , value ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (876usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "VisualInstance3D" , "set_layer_mask_value" , self . object_ptr , args ,) } } pub fn get_layer_mask_value (& self , layer_number : i32 ,) -> bool { type CallRet = bool ; type CallParams = (i32 ,) ; let args = (layer_number ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (877usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "VisualInstance3D" , "get_layer_mask_value" , self . object_ptr , args ,) } } pub fn set_sorting_offset (& mut self , offset : f32 ,) { type CallRet = () ; type CallParams = (f32 ,) ; let args = (offset ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (878usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "VisualInstance3D" , "set_sorting_offset" , self . object_ptr , args ,) } } pub fn get_sorting_offset (& self ,) -> f32 { type CallRet = f32 ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (879usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "VisualInstance3D" , "get_sorting_offset" , self . object_ptr , args ,) } } pub fn set_sorting_use_aabb_center (& mut self , enabled : bool ,) { type CallRet = () ; type CallParams = (bool ,) ; let args = (enabled ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (880usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "VisualInstance3D" , "set_sorting_use_aabb_center" , self . object_ptr , args ,) } } pub fn is_sorting_use_aabb_center (& self ,) -> bool { type CallRet = bool ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (881usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "VisualInstance3D" , "is_sorting_use_aabb_center" , self . object_ptr , args ,) } } } impl crate :: obj :: GodotClass for VisualInstance3D { const CLASS_NAME : & 'static str = "VisualInstance3D" ; type Base = crate :: classes :: Node3D ; type Memory = crate :: obj :: MemManual ; const INIT_LEVEL : crate :: init :: InitLevel = crate :: init :: InitLevel :: Scene ; } impl crate :: obj :: EngineClass for VisualInstance3D { fn as_object_ptr (& self) -> sys :: GDExtensionObjectPtr { self . object_ptr } } unsafe impl crate :: obj :: Inherits < crate :: classes :: Node3D > for VisualInstance3D { } unsafe impl crate :: obj :: Inherits < crate :: classes :: Node > for VisualInstance3D { } unsafe impl crate :: obj :: Inherits < crate :: classes :: Object > for VisualInstance3D { } impl crate :: obj :: Instantiable for VisualInstance3D { } impl std :: ops :: Deref for VisualInstance3D { type Target = crate :: classes :: Node3D ; fn deref (& self) -> & Self :: Target { unsafe { std :: mem :: transmute :: < & Self , & Self :: Target > (self) } } } impl std :: ops :: DerefMut for VisualInstance3D { fn deref_mut (& mut self) -> & mut Self :: Target { unsafe { std :: mem :: transmute :: < & mut Self , & mut Self :: Target > (self) } } } } # [doc = "Properties declared by [`VisualInstance3D`][super::VisualInstance3D], as interned engine names."] pub struct PropertyName ; impl PropertyName { pub const LAYERS : InternedName = InternedName :: new ("layers") ; pub const SORTING_OFFSET : InternedName = InternedName :: new ("sorting_offset") ; pub const SORTING_USE_AABB_CENTER : InternedName = InternedName :: new ("sorting_use_aabb_center") ; } # [doc = "Methods declared by [`VisualInstance3D`][super::VisualInstance3D], as interned engine names."] pub struct MethodName ; impl MethodName { pub const SET_BASE : InternedName = InternedName :: new ("set_base") ; pub const GET_BASE : InternedName = InternedName :: new ("get_base") ; pub const GET_INSTANCE : InternedName = InternedName :: new ("get_instance") ; pub const SET_LAYER_MASK : InternedName = InternedName :: new ("set_layer_mask") ; pub const GET_LAYER_MASK : InternedName = InternedName :: new ("get_layer_mask") ; pub const SET_LAYER_MASK_VALUE : InternedName = InternedName :: new ("set_layer_mask_value") ; pub const GET_LAYER_MASK_VALUE : InternedName = InternedName :: new ("get_layer_mask_value") ; pub const SET_SORTING_OFFSET : InternedName = InternedName :: new ("set_sorting_offset") ; pub const GET_SORTING_OFFSET : InternedName = InternedName :: new ("get_sorting_offset") ; pub const SET_SORTING_USE_AABB_CENTER : InternedName = InternedName :: new ("set_sorting_use_aabb_center") ; pub const IS_SORTING_USE_AABB_CENTER : InternedName = InternedName :: new ("is_sorting_use_aabb_center") ; } # [doc = "Signals declared by [`VisualInstance3D`][super::VisualInstance3D], as interned engine names."] pub struct SignalName ; impl SignalName { }