# ! [doc = "Sidecar module for class [`Node2D`][crate::classes::Node2D]."] # [allow (unused_imports)] use crate :: builtin :: * ; # [allow (unused_imports)] use crate :: meta :: { AsArg , AsObjectArg , CowArg , InternedName , ObjectArg , Signature } ; # [allow (unused_imports)] use crate :: obj :: Gd ; # [allow (unused_imports)] use crate :: signal :: { SignalObject , TypedSignal } ; use crate :: sys ; pub (super) mod re_export { use super :: * ; # [doc = "Godot class `Node2D`.\n\nInherits [`CanvasItem`][crate::classes::CanvasItem].\n\nRelated symbols (default-param builders, enums, interned names, signals) are in [`node_2d`][crate::classes::node_2d]."] # [derive (Debug)] # [repr (C)] pub struct Node2D { object_ptr : sys :: GDExtensionObjectPtr , } impl Node2D { pub fn set_position (& mut self , position : Vector2 ,) { type CallRet = () ; type CallParams = (Vector2 ,) ; let args = (position ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (466usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node2D" , "set_position" , self . object_ptr , args ,) } } pub fn set_rotation (& mut self , radians : f32 ,) { type CallRet = () ; type CallParams = (f32 ,) ; let args = (radians ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (467usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node2D" , "set_rotation" , self . object_ptr , args ,) } } pub fn set_rotation_degrees (& mut self , degrees : f32 ,) { type CallRet = () ; type CallParams = (f32 ,) ; let args = (degrees ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (468usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node2D" , "set_rotation_degrees" , self . object_ptr , args ,) } } pub fn set_skew (& mut self , radians : f32 ,) { type CallRet = () ; type CallParams = (f32 ,) ; let args = (radians ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (469usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node2D" , "set_skew" , self . object_ptr , args ,) } } pub fn set_scale (& mut self , scale : Vector2 ,) { type CallRet = () ; type CallParams = (Vector2 ,) ; let args = (scale ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (470usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node2D" , "set_scale" , self . object_ptr , args ,) } } pub fn get_position (& self ,) -> Vector2 { type CallRet = Vector2 ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (471usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node2D" , "get_position" , self . object_ptr , args ,) } } pub fn get_rotation (& self ,) -> f32 { type CallRet = f32 ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (472usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node2D" , "get_rotation" , self . object_ptr , args ,) } } pub fn get_rotation_degrees (& self ,) -> f32 { type CallRet = f32 ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (473usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node2D" , "get_rotation_degrees" , self . object_ptr , args ,) } } pub fn get_skew (& self ,) -> f32 { type CallRet = f32 ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (474usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node2D" , "get_skew" , self . object_ptr , args ,) } } pub fn get_scale (& self ,) -> Vector2 { type CallRet = Vector2 ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (475usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node2D" , "get_scale" , self . object_ptr , args ,) } } pub fn rotate (& mut self , radians : f32 ,) { type CallRet = () ; type CallParams = (f32 ,) ; let args = (radians ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (476usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node2D" , "rotate" , self . object_ptr , args ,) } } pub (crate) fn move_local_x_full (& mut self , delta : f32 , scaled : bool ,) { type CallRet = () ; type CallParams = (f32 , bool ,) ; let args = (delta , scaled ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (477usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node2D" , "move_local_x" , self . object_ptr , args ,) } } # [inline] pub fn move_local_x (& mut self , delta : f32 ,) { self . move_local_x_ex (delta ,) . done () } # [inline] pub fn move_local_x_ex < 'ex > (& 'ex mut self , delta : f32 ,) -> super :: ExMoveLocalX < 'ex > { super :: ExMoveLocalX :: new (self , delta ,) } pub (crate) fn move_local_y_full (& mut self , delta : f32 , scaled : bool ,) { type CallRet = () ; type CallParams = (f32 , bool ,) ; let args = (delta , scaled ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (478usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node2D" , "move_local_y" , self . object_ptr , args ,) } } # [inline] pub fn move_local_y (& mut self , delta : f32 ,) { self . move_local_y_ex (delta ,) . done () } # [inline] pub fn move_local_y_ex < 'ex > (& 'ex mut self , delta : f32 ,) -> super :: ExMoveLocalY < 'ex > { super :: ExMoveLocalY :: new (self , delta ,) } pub fn translate (& mut self , offset : Vector2 ,) { type CallRet = () ; type CallParams = (Vector2 ,) ; let args = (offset ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (479usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node2D" , "translate" , self . object_ptr , args ,) } } pub fn global_translate (& mut self , offset : Vector2 ,) { type CallRet = () ; type CallParams = (Vector2 ,) ; let args = (offset ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (480usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node2D" , "global_translate" , self . object_ptr , args ,) } } pub fn apply_scale (& mut self , ratio : Vector2 ,) { type CallRet = () ; type CallParams = (Vector2 ,) ; let args = (ratio ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (481usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node2D" , "apply_scale" , self . object_ptr , args ,) } } pub fn set_global_position (& mut self , position : Vector2 ,) { type CallRet = () ; type CallParams = (Vector2 ,) ; let args = (position ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (482usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node2D" , "set_global_position" , self . object_ptr , args ,) } } pub fn get_global_position (& self ,) -> Vector2 { type CallRet = Vector2 ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (483usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node2D" , "get_global_position" , self . object_ptr , args ,) } } pub fn set_global_rotation (& mut self , radians : f32 ,) { type CallRet = () ; type CallParams = (f32 ,) ; let args = (radians ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (484usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node2D" , "set_global_rotation" , self . object_ptr , args ,) } } pub fn set_global_rotation_degrees (& mut self , degrees : f32 ,) { type CallRet = () ; type CallParams = (f32 ,) ; let args = (degrees ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (485usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node2D" , "set_global_rotation_degrees" , self . object_ptr , args ,) } } pub fn get_global_rotation (& self ,) -> f32 { type CallRet = f32 ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (486usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node2D" , "get_global_rotation" , self . object_ptr , args ,) } } pub fn get_global_rotation_degrees (& self ,) -> f32 { type CallRet = f32 ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (487usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node2D" , "get_global_rotation_degrees" , self . object_ptr , args ,) } } pub fn set_global_skew (& mut self , radians : f32 ,) { type CallRet = () ; type CallParams = (f32 ,) ; let args = (radians ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (488usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node2D" , "set_global_skew" , self . object_ptr , args ,) } } pub fn get_global_skew (& self ,) -> f32 { type CallRet = f32 ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (489usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node2D" , "get_global_skew" , self . object_ptr , args ,) } } pub fn set_global_scale (& mut self , scale : Vector2 ,) { type CallRet = () ; type CallParams = (Vector2 ,) ; let args = (scale ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (490usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node2D" , "set_global_scale" , self . object_ptr , args ,) } } pub fn get_global_scale (& self ,) -> Vector2 { type CallRet = Vector2 ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (491usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node2D" , "get_global_scale" , self . object_ptr , args ,) } } pub fn look_at (& mut self , point : Vector2 ,) { type CallRet = () ; type CallParams = (Vector2 ,) ; let args = (point ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (492usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node2D" , "look_at" , self . object_ptr , args ,) } } pub fn get_angle_to (& self , point : Vector2 ,) -> f32 { type CallRet = f32 ; type CallParams = (Vector2 ,) ; let args = (point ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (493usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node2D" , "get_angle_to" , self . object_ptr , args ,) } } pub fn to_local (& self , global_point : Vector2 ,) -> Vector2 { type CallRet = Vector2 ; type CallParams = (Vector2 ,) ; let args = (global_point ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (494usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node2D" , "to_local" , self . object_ptr , args ,) } } pub fn to_global (& self , local_point : Vector2 ,) -> Vector2 { type CallRet = Vector2 ; type CallParams = (Vector2 ,) ; let args = (local_point ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (495usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node2D" , "to_global" , self . object_ptr , args ,) } } } impl crate :: obj :: GodotClass for Node2D { const CLASS_NAME : & 'static str = "Node2D" ; type Base = crate :: classes :: CanvasItem ; type Memory = crate :: obj :: MemManual ; const INIT_LEVEL : crate :: init :: InitLevel = crate :: init :: InitLevel :: Scene ; } impl crate :: obj :: EngineClass for Node2D { fn as_object_ptr (& self) -> sys :: GDExtensionObjectPtr { self . object_ptr } } unsafe impl crate :: obj :: Inherits < crate :: classes :: CanvasItem > for Node2D { } unsafe impl crate :: obj :: Inherits < crate :: classes :: Node > for Node2D { } unsafe impl crate :: obj :: Inherits < crate :: classes :: Object > for Node2D { } impl crate :: obj :: Instantiable for Node2D { } impl std :: ops :: Deref for Node2D { type Target = crate :: classes :: CanvasItem ; fn deref (& self) -> & Self :: Target { unsafe { std :: mem :: transmute :: < & Self , & Self :: Target > (self) } } } impl std :: ops :: DerefMut for Node2D { fn deref_mut (& mut self) -> & mut Self :: Target { unsafe { std :: mem :: transmute :: < & mut Self , & mut Self :: Target > (self) } } } } # [doc = "Default-param extender for [`Node2D::move_local_x_ex`][super::Node2D::move_local_x_ex]."] # [must_use] pub struct ExMoveLocalX < 'ex > { surround_object : & 'ex mut re_export :: Node2D , delta : f32 , scaled : bool , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExMoveLocalX < 'ex > { fn new (surround_object : & 'ex mut re_export :: Node2D , delta : f32 ,) -> Self { Self { surround_object , delta , scaled : false , } } # [inline] pub fn scaled (self , value : bool) -> Self { Self { scaled : value , .. self } } # [inline] pub fn done (self) { re_export :: Node2D :: move_local_x_full (self . surround_object , self . delta , self . scaled ,) } } # [doc = "Default-param extender for [`Node2D::move_local_y_ex`][super::Node2D::move_local_y_ex]."] # [must_use] pub struct ExMoveLocalY < 'ex > { surround_object : & 'ex mut re_export :: Node2D , delta : f32 , scaled : bool , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExMoveLocalY < 'ex > { fn new (surround_object : & 'ex mut re_export :: Node2D , delta : f32 ,) -> Self { Self { surround_object , delta , scaled : false , } } # [inline] pub fn scaled (self , value : bool) -> Self { Self { scaled : value , .. self } } # [inline] pub fn done (self) { re_export :: Node2D :: move_local_y_full (self . surround_object , self . delta , self . scaled ,) } } # [doc = "Properties declared by [`Node2D`][super::Node2D], as interned engine names."] pub struct PropertyName ; impl PropertyName { pub const POSITION : InternedName = InternedName :: new ("position") ; pub const ROTATION : InternedName = InternedName :: new ("rotation") ; pub const ROTATION_DEGREES : InternedName = InternedName :: new ("rotation_degrees") ; pub const SCALE : InternedName = InternedName :: new ("scale") ; pub const SKEW : InternedName = InternedName :: new ("skew") ; pub const TRANSFORM : InternedName = InternedName :: new ("transform") ; pub const GLOBAL_POSITION : InternedName = InternedName :: new ("global_position") ; pub const GLOBAL_ROTATION : InternedName = InternedName :: new ("global_rotation") ; pub const GLOBAL_ROTATION_DEGREES : InternedName = InternedName :: new ("global_rotation_degrees") ; pub const GLOBAL_SCALE : InternedName = InternedName :: new ("global_scale") ; pub const GLOBAL_SKEW : InternedName = InternedName :: new ("global_skew") ; pub const GLOBAL_TRANSFORM : InternedName = InternedName :: new ("global_transform") ; } # [doc = "Methods declared by [`Node2D`][super::Node2D], as interned engine names."] pub struct MethodName ; impl MethodName { pub const SET_POSITION : InternedName = InternedName :: new ("set_position") ; pub const SET_ROTATION : InternedName = InternedName :: new ("set_rotation") ; pub const SET_ROTATION_DEGREES : InternedName = InternedName :: new ("set_rotation_degrees") ; pub const SET_SKEW : InternedName = InternedName :: new ("set_skew") ; pub const SET_SCALE : InternedName = InternedName :: new ("set_scale") ; pub const GET_POSITION : InternedName = InternedName :: new ("get_position") ; pub const GET_ROTATION : InternedName = InternedName :: new ("get_rotation") ; pub const GET_ROTATION_DEGREES : InternedName = InternedName :: new ("get_rotation_degrees") ; pub const GET_SKEW : InternedName = InternedName :: new ("get_skew") ; pub const GET_SCALE : InternedName = InternedName :: new ("get_scale") ; pub const ROTATE : InternedName = InternedName :: new ("rotate") ; pub const MOVE_LOCAL_X : InternedName = InternedName :: new ("move_local_x") ; pub const MOVE_LOCAL_Y : InternedName = InternedName :: new ("move_local_y") ; pub const TRANSLATE : InternedName = InternedName :: new ("translate") ; pub const GLOBAL_TRANSLATE : InternedName = InternedName :: new ("global_translate") ; pub const APPLY_SCALE : InternedName = InternedName :: new ("apply_scale") ; pub const SET_GLOBAL_POSITION : InternedName = InternedName :: new ("set_global_position") ; pub const GET_GLOBAL_POSITION : InternedName = InternedName :: new ("get_global_position") ; pub const SET_GLOBAL_ROTATION : InternedName = InternedName :: new ("set_global_rotation") ; pub const SET_GLOBAL_ROTATION_DEGREES : InternedName = InternedName :: new ("set_global_rotation_degrees") ; pub const GET_GLOBAL_ROTATION : InternedName = InternedName :: new ("get_global_rotation") ; pub const GET_GLOBAL_ROTATION_DEGREES : InternedName = InternedName :: new ("get_global_rotation_degrees") ; pub const SET_GLOBAL_SKEW : InternedName = InternedName :: new ("set_global_skew") ; pub const GET_GLOBAL_SKEW : InternedName = InternedName :: new ("get_global_skew") ; pub const SET_GLOBAL_SCALE : InternedName = InternedName :: new ("set_global_scale") ; pub const GET_GLOBAL_SCALE : InternedName = InternedName :: new ("get_global_scale") ; pub const LOOK_AT : InternedName = InternedName :: new ("look_at") ; pub const GET_ANGLE_TO : InternedName = InternedName :: new ("get_angle_to") ; pub const TO_LOCAL : InternedName = InternedName :: new ("to_local") ; pub const TO_GLOBAL : InternedName = InternedName :: new ("to_global") ; } # [doc = "Signals declared by [`Node2D`][super::Node2D], as interned engine names."] pub struct SignalName ; impl SignalName { }