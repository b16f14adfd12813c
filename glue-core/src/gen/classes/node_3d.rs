# ! [doc = "Sidecar module for class [`Node3D`][crate::classes::Node3D]."] # [allow (unused_imports)] use crate :: builtin :: * ; # [allow (unused_imports)] use crate :: meta :: { AsArg , AsObjectArg , CowArg , InternedName , ObjectArg , Signature } ; # [allow (unused_imports)] use crate :: obj :: Gd ; # [allow (unused_imports)] use crate :: signal :: { SignalObject , TypedSignal } ; use crate :: sys ; pub (super) mod re_export { use super :: * ; # [doc = "Godot class `Node3D`.\n\nInherits [`Node`][crate::classes::Node].\n\nRelated symbols (default-param builders, enums, interned names, signals) are in [`node_3d`][crate::classes::node_3d]."] # [derive (Debug)] # [repr (C)] pub struct Node3D { object_ptr : sys :: GDExtensionObjectPtr , } impl Node3D { pub fn set_position (& mut self , position : Vector3 ,) { type CallRet = () ; type CallParams = (Vector3 ,) ; let args = (position ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (496usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node3D" , "set_position" , self . object_ptr , args ,) } } pub fn get_position (& self ,) -> Vector3 { type CallRet = Vector3 ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (497usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node3D" , "get_position" , self . object_ptr , args ,) } } pub fn set_rotation (& mut self , euler_radians : Vector3 ,) { type CallRet = () ; type CallParams = (Vector3 ,) ; let args = (euler_radians ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (498usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node3D" , "set_rotation" , self . object_ptr , args ,) } } pub fn get_rotation (& self ,) -> Vector3 { type CallRet = Vector3 ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (499usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node3D" , "get_rotation" , self . object_ptr , args ,) } } pub fn set_rotation_degrees (& mut self , euler_degrees : Vector3 ,) { type CallRet = () ; type CallParams = (Vector3 ,) ; let args = (euler_degrees ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (500usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node3D" , "set_rotation_degrees" , self . object_ptr , args ,) } } pub fn get_rotation_degrees (& self ,) -> Vector3 { type CallRet = Vector3 ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (501usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node3D" , "get_rotation_degrees" , self . object_ptr , args ,) } } pub fn set_rotation_order (& mut self , order : crate :: global :: EulerOrder ,) { type CallRet = () ; type CallParams = (crate :: global :: EulerOrder ,) ; let args = (order ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (502usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node3D" , "set_rotation_order" , self . object_ptr , args ,) } } pub fn get_rotation_order (& self ,) -> crate :: global :: EulerOrder { type CallRet = crate :: global :: EulerOrder ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (503usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node3D" , "get_rotation_order" , self . object_ptr , args ,) } } pub fn set_rotation_edit_mode (& mut self , edit_mode : crate :: classes :: node_3d :: RotationEditMode ,) { type CallRet = () ; type CallParams = (crate :: classes :: node_3d :: RotationEditMode ,) ; let args = (edit_mode ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (504usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node3D" , "set_rotation_edit_mode" , self . object_ptr , args ,) } } pub fn get_rotation_edit_mode (& self ,) -> crate :: classes :: node_3d :: RotationEditMode { type CallRet = crate :: classes :: node_3d :: RotationEditMode ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (505usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node3D" , "get_rotation_edit_mode" , self . object_ptr , args ,) } } pub fn set_scale (& mut self , scale : Vector3 ,) { type CallRet = () ; type CallParams = (Vector3 ,) ; let args = (scale ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (506usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node3D" , "set_scale" , self . object_ptr , args ,) } } pub fn get_scale (& self ,) -> Vector3 { type CallRet = Vector3 ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (507usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node3D" , "get_scale" , self . object_ptr , args ,) } } pub fn set_global_position (& mut self , position : Vector3 ,) { type CallRet = () ; type CallParams = (Vector3 ,) ; let args = (position ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (508usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node3D" , "set_global_position" , self . object_ptr , args ,) } } pub fn get_global_position (& self ,) -> Vector3 { type CallRet = Vector3 ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (509usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node3D" , "get_global_position" , self . object_ptr , args ,) } } pub fn set_global_rotation (& mut self , euler_radians : Vector3 ,) { type CallRet = () ; type CallParams = (Vector3 ,) ; let args = (euler_radians ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (510usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node3D" , "set_global_rotation" , self . object_ptr , args ,) } } pub fn get_global_rotation (& self ,) -> Vector3 { type CallRet = Vector3 ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (511usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node3D" , "get_global_rotation" , self . object_ptr , args ,) } } pub fn set_global_rotation_degrees (& mut self , euler_degrees : Vector3 ,) { type CallRet = () ; type CallParams = (Vector3 ,) ; let args = (euler_degrees ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (512usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node3D" , "set_global_rotation_degrees" , self . object_ptr , args ,) } } pub fn get_global_rotation_degrees (& self ,) -> Vector3 { type CallRet = Vector3 ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (513usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node3D" , "get_global_rotation_degrees" , self . object_ptr , args ,) } } pub fn get_parent_node_3d (& self ,) -> Option < Gd < crate :: classes :: Node3D > > { type CallRet = Option < Gd < crate :: classes :: Node3D > > ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (514usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node3D" , "get_parent_node_3d" , self . object_ptr , args ,) } } pub fn set_ignore_transform_notification (& mut self , enabled : bool ,) { type CallRet = () ; type CallParams = (bool ,) ; let args = (enabled ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (515usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node3D" , "set_ignore_transform_notification" , self . object_ptr , args ,) } } pub fn set_as_top_level (& mut self , enable : bool ,) { type CallRet = () ; type CallParams = (bool ,) ; let args = (enable ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (516usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node3D" , "set_as_top_level" , self . object_ptr , args ,) } } pub fn is_set_as_top_level (& self ,) -> bool { type CallRet = bool ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (517usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node3D" , "is_set_as_top_level" , self . object_ptr , args ,) } } pub fn set_disable_scale (& mut self , disable : bool ,) { type CallRet = () ; type CallParams = (bool ,) ; let args = (disable ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (518usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node3D" , "set_disable_scale" , self . object_ptr , args ,) } } pub fn is_scale_disabled (& self ,) -> bool { type CallRet = bool ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (519usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node3D" , "is_scale_disabled" , self . object_ptr , args ,) } } pub fn force_update_transform (& mut self ,) { type CallRet = () ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (520usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node3D" , "force_update_transform" , self . object_ptr , args ,) } } pub fn set_visibility_parent (& mut self , path : impl AsArg < NodePath > ,) { type CallRet = () ; type CallParams < 'a0 , > = (CowArg < 'a0 , NodePath > ,) ; let args = (path . into_arg () ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (521usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node3D" , "set_visibility_parent" , self . object_ptr , args ,) } } pub fn get_visibility_parent (& self ,) -> NodePath { type CallRet = NodePath ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (522usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node3D" , "get_visibility_parent" , self . object_ptr , args ,) } } pub fn update_gizmos (& mut self ,) { type CallRet = () ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (523usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node3D" , "update_gizmos" , self . object_ptr , args ,) } } pub fn clear_gizmos (& mut self ,) { type CallRet = () ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (524usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node3D" , "clear_gizmos" , self . object_ptr , args ,) } } pub fn clear_subgizmo_selection (& mut self ,) { type CallRet = () ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (525usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node3D" , "clear_subgizmo_selection" , self . object_ptr , args ,) } } pub fn set_visible (& mut self , visible : bool ,) { type CallRet = () ; type CallParams = (bool ,) ; let args = (visible ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (526usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node3D" , "set_visible" , self . object_ptr , args ,) } } pub fn is_visible (& self ,) -> bool { type CallRet = bool ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (527usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node3D" , "is_visible" , self . object_ptr , args ,) } } pub fn is_visible_in_tree (& self ,) -> bool { type CallRet = bool ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (528usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node3D" , "is_visible_in_tree" , self . object_ptr , args ,) } } pub fn show (& mut self ,) { type CallRet = () ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (529usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node3D" , "show" , self . object_ptr , args ,) } } pub fn hide (& mut self ,) { type CallRet = () ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (530usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node3D" , "hide" , self . object_ptr , args ,) } } pub fn set_notify_local_transform (& mut self , enable : bool ,) { type CallRet = () ; type CallParams = (bool ,) ; let args = (enable ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (531usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node3D" , "set_notify_local_transform" , self . object_ptr , args ,) } } pub fn is_local_transform_notification_enabled (& self ,) -> bool { type CallRet = bool ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (532usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node3D" , "is_local_transform_notification_enabled" , self . object_ptr , args ,) } } pub fn set_notify_transform (& mut self , enable : bool ,) { type CallRet = () ; type CallParams = (bool ,) ; let args = (enable ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (533usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node3D" , "set_notify_transform" , self . object_ptr , args ,) } } pub fn is_transform_notification_enabled (& self ,) -> bool { type CallRet = bool ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (534usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node3D" , "is_transform_notification_enabled" , self . object_ptr , args ,) } } pub fn rotate (& mut self , axis : Vector3 , angle : f32 ,) { type CallRet = () ; type CallParams = (Vector3 , f32 ,) ; let args = (axis , angle ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (535usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node3D" , "rotate" , self . object_ptr , args ,) } } pub fn global_rotate (& mut self , axis : Vector3 , angle : f32 ,) { type CallRet = () ; type CallParams = (Vector3 , f32 ,) ; let args = (axis , angle ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (536usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node3D" , "global_rotate" , self . object_ptr , args ,) } } pub fn global_scale (& mut self , scale : Vector3 ,) { type CallRet = () ; type CallParams = (Vector3 ,) ; let args = (scale ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (537usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node3D" , "global_scale" , self . object_ptr , args ,) } } pub fn global_translate (& mut self , offset : Vector3 ,) { type CallRet = () ; type CallParams = (Vector3 ,) ; let args = (offset ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (538usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node3D" , "global_translate" , self . object_ptr , args ,) } } pub fn rotate_object_local (& mut self , axis : Vector3 , angle : f32 ,) { type CallRet = () ; type CallParams = (Vector3 , f32 ,) ; let args = (axis , angle ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (539usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node3D" , "rotate_object_local" , self . object_ptr , args ,) } } pub fn scale_object_local (& mut self , scale : Vector3 ,) { type CallRet = () ; type CallParams = (Vector3 ,) ; let args = (scale ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (540usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node3D" , "scale_object_local" , self . object_ptr , args ,) } } pub fn translate_object_local (& mut self , offset : Vector3 ,) { type CallRet = () ; type CallParams = (Vector3 ,) ; let args = (offset ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (541usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node3D" , "translate_object_local" , self . object_ptr , args ,) } } pub fn rotate_x (& mut self , angle : f32 ,) { type CallRet = () ; type CallParams = (f32 ,) ; let args = (angle ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (542usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node3D" , "rotate_x" , self . object_ptr , args ,) } } pub fn rotate_y (& mut self , angle : f32 ,) { type CallRet = () ; type CallParams = (f32 ,) ; let args = (angle ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (543usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node3D" , "rotate_y" , self . object_ptr , args ,) } } pub fn rotate_z (& mut self , angle : f32 ,) { type CallRet = () ; type CallParams = (f32 ,) ; let args = (angle ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (544usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node3D" , "rotate_z" , self . object_ptr , args ,) } } pub fn translate (& mut self , offset : Vector3 ,) { type CallRet = () ; type CallParams = (Vector3 ,) ; let args = (offset ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (545usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node3D" , "translate" , self . object_ptr , args ,) } } pub fn orthonormalize (& mut self ,) { type CallRet = () ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (546usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node3D" , "orthonormalize" , self . object_ptr , args ,) } } pub fn set_identity (& mut self ,) { type CallRet = () ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (547usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node3D" , "set_identity" , self . object_ptr , args ,) } } pub (crate) fn look_at_full (& mut self , target : Vector3 , up : Vector3 , use_model_front : bool ,) { type CallRet = () ; type CallParams = (Vector3 , Vector3 , bool ,) ; let args = (target , up , use_model_front ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (548usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node3D" , "look_at" , self . object_ptr , args ,) } } # [inline] pub fn look_at (& mut self , target : Vector3 ,) { self . look_at_ex (target ,) . done () } # [inline] pub fn look_at_ex < 'ex > (& 'ex mut self , target : Vector3 ,) -> super :: ExLookAt < 'ex > { super :: ExLookAt :: new (self , target ,) } pub (crate) fn look_at_from_position_full (& mut self , position : Vector3 , target : Vector3 , up : Vector3 , use_model_front : bool ,) { type CallRet = () ; type CallParams = (Vector3 , Vector3 , Vector3 , bool ,) ; let args = (position , target , up , use_model_front ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (549usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node3D" , "look_at_from_position" , self . object_ptr , args ,) } } # [inline] pub fn look_at_from_position (& mut self , position : Vector3 , target : Vector3 ,) { self . look_at_from_position_ex (position , target ,) . done () } # [inline] pub fn look_at_from_position_ex < 'ex > (& 'ex mut self , position : Vector3 , target : Vector3 ,) -> super :: ExLookAtFromPosition < 'ex > { super :: ExLookAtFromPosition :: new (self , position , target ,) } pub fn to_local (& self , global_point : Vector3 ,) -> Vector3 { type CallRet = Vector3 ; type CallParams = (Vector3 ,) ; let args = (global_point ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (550usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node3D" , "to_local" , self . object_ptr , args ,) } } pub fn to_global (& self , local_point : Vector3 ,) -> Vector3 { type CallRet = Vector3 ; type CallParams = (Vector3 ,) ; let args = (local_point ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (551usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node3D" , "to_global" , self . object_ptr , args ,) } } # [doc = "Typed signals of this class and its bases; see [`SignalsOfNode3D`][super::node_3d::SignalsOfNode3D]."] pub fn signals (& mut self) -> super :: SignalsOfNode3D < '_ > { super :: SignalsOfNode3D :: __new (crate :: signal :: SignalObject :: __new (self . object_ptr)) } pub const NOTIFICATION_TRANSFORM_CHANGED : i32 = 2000i32 ; pub const NOTIFICATION_ENTER_WORLD : i32 = 41i32 ; pub const NOTIFICATION_EXIT_WORLD : i32 = 42i32 ; pub const NOTIFICATION_VISIBILITY_CHANGED : i32 = 43i32 ; pub const NOTIFICATION_LOCAL_TRANSFORM_CHANGED : i32 = 44i32 ; } impl crate :: obj :: GodotClass for Node3D { const CLASS_NAME : & 'static str = "Node3D" ; type Base = crate :: classes :: Node ; type Memory = crate :: obj :: MemManual ; const INIT_LEVEL : crate :: init :: InitLevel = crate :: init :: InitLevel :: Scene ; } impl crate :: obj :: EngineClass for Node3D { fn as_object_ptr (& self) -> sys :: GDExtensionObjectPtr { self . object_ptr } } unsafe impl crate :: obj :: Inherits < crate :: classes :: Node > for Node3D { } unsafe impl crate :: obj :: Inherits < crate :: classes :: Object > for Node3D { } impl crate :: obj :: Instantiable for Node3D { } impl std :: ops :: Deref for Node3D { type Target = crate :: classes :: Node ; fn deref (& self) -> & Self :: Target { unsafe { std :: mem :: transmute :: < & Self , & Self :: Target > (self) } } } impl std :: ops :: DerefMut for Node3D { fn deref_mut (& mut self) -> & mut Self :: Target { unsafe { std :: mem :: transmute :: < & mut Self , & mut Self :: Target > (self) } } } } # [doc = "Default-param extender for [`Node3D::look_at_ex`][super::Node3D::look_at_ex]."] # [must_use] pub struct ExLookAt < 'ex > { surround_object : & 'ex mut re_export :: Node3D , target : Vector3 , up : Vector3 , use_model_front : bool , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExLookAt < 'ex > { fn new (surround_object : & 'ex mut re_export :: Node3D , target : Vector3 ,) -> Self { Self { surround_object , target , up : Vector3 :: new (0 as _ , 1 as _ , 0 as _) , use_model_front : false , } } # [inline] pub fn up (self , value : Vector3) -> Self { Self { up : value , .. self } } # [inline] pub fn use_model_front (self , value : bool) -> Self { Self { use_model_front : value , .. self } } # [inline] pub fn done (self) { re_export :: Node3D :: look_at_full (self . surround_object , self . target , self . up , self . use_model_front ,) } } # [doc = "Default-param extender for [`Node3D::look_at_from_position_ex`][super::Node3D::look_at_from_position_ex]."] # [must_use] pub struct ExLookAtFromPosition < 'ex > { surround_object : & 'ex mut re_export :: Node3D , position : Vector3 , target : Vector3 , up : Vector3 , use_model_front : bool , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExLookAtFromPosition < 'ex > { fn new (surround_object : & 'ex mut re_export :: Node3D , position : Vector3 , target : Vector3 ,) -> Self { Self { surround_object , position , target , up : Vector3 :: new (0 as _ , 1 as _ , 0 as _) , use_model_front : false , } } # [inline] pub fn up (self , value : Vector3) -> Self { Self { up : value , .. self } } # [inline] pub fn use_model_front (self , value : bool) -> Self { Self { use_model_front : value , .. self } } # [inline] pub fn done (self) { re_export :: Node3D :: look_at_from_position_full (self . surround_object , self . position , self . target , self . up , self . use_model_front ,) } } # [repr (transparent)] # [derive (Copy , Clone , Eq , PartialEq , Hash ,)] pub struct RotationEditMode { ord : i32 } impl RotationEditMode { # [doc (alias = "ROTATION_EDIT_MODE_EULER")] # [doc = "Godot enumerator name: `ROTATION_EDIT_MODE_EULER`"] pub const EULER : Self = Self { ord : 0 } ; # [doc (alias = "ROTATION_EDIT_MODE_QUATERNION")] # [doc = "Godot enumerator name: `ROTATION_EDIT_MODE_QUATERNION`"] pub const QUATERNION : Self = Self { ord : 1 } ; # [doc (alias = "ROTATION_EDIT_MODE_BASIS")] # [doc = "Godot enumerator name: `ROTATION_EDIT_MODE_BASIS`"] pub const BASIS : Self = Self { ord : 2 } ; # [allow (unreachable_patterns)] fn enumerator_name (self) -> Option < & 'static str > { match self { Self :: EULER => Some ("EULER") , Self :: QUATERNION => Some ("QUATERNION") , Self :: BASIS => Some ("BASIS") , _ => None , } } } impl std :: fmt :: Debug for RotationEditMode { fn fmt (& self , f : & mut std :: fmt :: Formatter < '_ >) -> std :: fmt :: Result { match self . enumerator_name () { Some (enumerator) => f . write_str (enumerator) , None => f . debug_struct (stringify ! (RotationEditMode)) . field ("ord" , & self . ord) . finish () , } } } impl crate :: obj :: EngineEnum for RotationEditMode { fn try_from_ord (ord : i32) -> Option < Self > { match ord { 0 | 1 | 2 => Some (Self { ord }) , _ => None , } } fn ord (self) -> i32 { self . ord } } impl crate :: meta :: GodotConvert for RotationEditMode { type Via = i32 ; } impl crate :: meta :: ToGodot for RotationEditMode { fn to_godot (& self) -> Self :: Via { < Self as crate :: obj :: EngineEnum > :: ord (* self) } } impl crate :: meta :: FromGodot for RotationEditMode { fn try_from_godot (via : Self :: Via) -> std :: result :: Result < Self , crate :: meta :: ConvertError > { Ok (Self { ord : via }) } } # [doc = "Properties declared by [`Node3D`][super::Node3D], as interned engine names."] pub struct PropertyName ; impl PropertyName { pub const TRANSFORM : InternedName = InternedName :: new ("transform") ; pub const GLOBAL_TRANSFORM : InternedName = InternedName :: new ("global_transform") ; pub const POSITION : InternedName = InternedName :: new ("position") ; pub const ROTATION : InternedName = InternedName :: new ("rotation") ; pub const ROTATION_DEGREES : InternedName = InternedName :: new ("rotation_degrees") ; pub const QUATERNION : InternedName = InternedName :: new ("quaternion") ; pub const BASIS : InternedName = InternedName :: new ("basis") ; pub const SCALE : InternedName = InternedName :: new ("scale") ; pub const ROTATION_EDIT_MODE : InternedName = InternedName :: new ("rotation_edit_mode") ; pub const ROTATION_ORDER : InternedName = InternedName :: new ("rotation_order") ; pub const TOP_LEVEL : InternedName = InternedName :: new ("top_level") ; pub const GLOBAL_POSITION : InternedName = InternedName :: new ("global_position") ; pub const GLOBAL_BASIS : InternedName = InternedName :: new ("global_basis") ; pub const GLOBAL_ROTATION : InternedName = InternedName :: new ("global_rotation") ; pub const GLOBAL_ROTATION_DEGREES : InternedName = InternedName :: new ("global_rotation_degrees") ; pub const VISIBLE : InternedName = InternedName :: new ("visible") ; pub const VISIBILITY_PARENT : InternedName = InternedName :: new ("visibility_parent") ; } # [doc = "Methods declared by [`Node3D`][super::Node3D], as interned engine names."] pub struct MethodName ; impl MethodName { pub const SET_POSITION : InternedName = InternedName :: new ("set_position") ; pub const GET_POSITION : InternedName = InternedName :: new ("get_position") ; pub const SET_ROTATION : InternedName = InternedName :: new ("set_rotation") ; pub const GET_ROTATION : InternedName = InternedName :: new ("get_rotation") ; pub const SET_ROTATION_DEGREES : InternedName = InternedName :: new ("set_rotation_degrees") ; pub const GET_ROTATION_DEGREES : InternedName = InternedName :: new ("get_rotation_degrees") ; pub const SET_ROTATION_ORDER : InternedName = InternedName :: new ("set_rotation_order") ; pub const GET_ROTATION_ORDER : InternedName = InternedName :: new ("get_rotation_order") ; pub const SET_ROTATION_EDIT_MODE : InternedName = InternedName :: new ("set_rotation_edit_mode") ; pub const GET_ROTATION_EDIT_MODE : InternedName = InternedName :: new ("get_rotation_edit_mode") ; pub const SET_SCALE : InternedName = InternedName :: new ("set_scale") ; pub const GET_SCALE : InternedName = InternedName :: new ("get_scale") ; pub const SET_GLOBAL_POSITION : InternedName = InternedName :: new ("set_global_position") ; pub const GET_GLOBAL_POSITION : InternedName = InternedName :: new ("get_global_position") ; pub const SET_GLOBAL_ROTATION : InternedName = InternedName :: new ("set_global_rotation") ; pub const GET_GLOBAL_ROTATION : InternedName = InternedName :: new ("get_global_rotation") ; pub const SET_GLOBAL_ROTATION_DEGREES : InternedName = InternedName :: new ("set_global_rotation_degrees") ; pub const GET_GLOBAL_ROTATION_DEGREES : InternedName = InternedName :: new ("get_global_rotation_degrees") ; pub const GET_PARENT_NODE_3D : InternedName = InternedName :: new ("get_parent_node_3d") ; pub const SET_IGNORE_TRANSFORM_NOTIFICATION : InternedName = InternedName :: new ("set_ignore_transform_notification") ; pub const SET_AS_TOP_LEVEL : InternedName = InternedName :: new ("set_as_top_level") ; pub const IS_SET_AS_TOP_LEVEL : InternedName = InternedName :: new ("is_set_as_top_level") ; pub const SET_DISABLE_SCALE : InternedName = InternedName :: new ("set_disable_scale") ; pub const IS_SCALE_DISABLED : InternedName = InternedName :: new ("is_scale_disabled") ; pub const FORCE_UPDATE_TRANSFORM : InternedName = InternedName :: new ("force_update_transform") ; pub const SET_VISIBILITY_PARENT : InternedName = InternedName :: new ("set_visibility_parent") ; pub const GET_VISIBILITY_PARENT : InternedName = InternedName :: new ("get_visibility_parent") ; pub const UPDATE_GIZMOS : InternedName = InternedName :: new ("update_gizmos") ; pub const CLEAR_GIZMOS : InternedName = InternedName :: new ("clear_gizmos") ; pub const CLEAR_SUBGIZMO_SELECTION : InternedName = InternedName :: new ("clear_subgizmo_selection") ; pub const SET_VISIBLE : InternedName = InternedName :: new ("set_visible") ; pub const IS_VISIBLE : InternedName = InternedName :: new ("is_visible") ; pub const IS_VISIBLE_IN_TREE : InternedName = InternedName :: new ("is_visible_in_tree") ; pub const SHOW : InternedName = InternedName :: new ("show") ; pub const HIDE : InternedName = InternedName :: new ("hide") ; pub const SET_NOTIFY_LOCAL_TRANSFORM : InternedName = InternedName :: new ("set_notify_local_transform") ; pub const IS_LOCAL_TRANSFORM_NOTIFICATION_ENABLED : InternedName = InternedName :: new ("is_local_transform_notification_enabled") ; pub const SET_NOTIFY_TRANSFORM : InternedName = InternedName :: new ("set_notify_transform") ; pub const IS_TRANSFORM_NOTIFICATION_ENABLED : InternedName = InternedName :: new ("is_transform_notification_enabled") ; pub const ROTATE : InternedName = InternedName :: new ("rotate") ; pub const GLOBAL_ROTATE : InternedName = InternedName :: new ("global_rotate") ; pub const GLOBAL_SCALE : InternedName = InternedName :: new ("global_scale") ; pub const GLOBAL_TRANSLATE : InternedName = InternedName :: new ("global_translate") ; pub const ROTATE_OBJECT_LOCAL : InternedName = InternedName :: new ("rotate_object_local") ; pub const SCALE_OBJECT_LOCAL : InternedName = InternedName :: new ("scale_object_local") ; pub const TRANSLATE_OBJECT_LOCAL : InternedName = InternedName :: new ("translate_object_local") ; pub const ROTATE_X : InternedName = InternedName :: new ("rotate_x") ; pub const ROTATE_Y : InternedName = InternedName :: new ("rotate_y") ; pub const ROTATE_Z : InternedName = InternedName :: new ("rotate_z") ; pub const TRANSLATE : InternedName = InternedName :: new ("translate") ; pub const ORTHONORMALIZE : InternedName = InternedName :: new ("orthonormalize") ; pub const SET_IDENTITY : InternedName = InternedName :: new ("set_identity") ; pub const LOOK_AT : InternedName = InternedName :: new ("look_at") ; pub const LOOK_AT_FROM_POSITION : InternedName = InternedName :: new ("look_at_from_position") ; pub const TO_LOCAL : InternedName = InternedName :: new ("to_local") ; pub const TO_GLOBAL : InternedName = InternedName :: new ("to_global") ; } # [doc = "Signals declared by [`Node3D`][super::Node3D], as interned engine names."] pub struct SignalName ; impl SignalName { pub const VISIBILITY_CHANGED : InternedName = InternedName :: new ("visibility_changed") ; } # [doc = "A collection of signals for the [`Node3D`][crate::classes::Node3D] class."] pub struct SignalsOfNode3D < 'c > { __base : crate :: classes :: node :: SignalsOfNode < 'c > , } impl < 'c > SignalsOfNode3D < 'c > { # [doc (hidden)] pub fn __new (object : SignalObject < 'c >) -> Self { Self { __base : crate :: classes :: node :: SignalsOfNode :: __new (object) } } # [doc (hidden)] pub fn __object (& self) -> SignalObject < 'c > { self . __base . __object () } # [doc = "Signature: `()`"] pub fn visibility_changed (& mut self) -> SigVisibilityChanged < 'c > { SigVisibilityChanged { typed : TypedSignal :: __new (self . __object () , "visibility_changed") , } } } impl < 'c > std :: ops :: Deref for SignalsOfNode3D < 'c > { type Target = crate :: classes :: node :: SignalsOfNode < 'c > ; fn deref (& self) -> & Self :: Target { & self . __base } } impl std :: ops :: DerefMut for SignalsOfNode3D < '_ > { fn deref_mut (& mut self) -> & mut Self :: Target { & mut self . __base } } type TypedSigVisibilityChanged < 'c > = TypedSignal < 'c , () > ; pub struct SigVisibilityChanged < 'c > { typed : TypedSigVisibilityChanged < 'c > , } impl SigVisibilityChanged < '_ > { pub fn emit (& mut self ,) { self . typed . emit_tuple (()) ; } } impl < 'c > std :: ops :: Deref for SigVisibilityChanged < 'c > { type Target = TypedSigVisibilityChanged < 'c > ; fn deref (& self) -> & Self :: Target { & self . typed } } impl std :: ops :: DerefMut for SigVisibilityChanged < '_ > { fn deref_mut (& mut self) -> & mut Self :: Target { & mut self . typed } }