# ! [doc = "Sidecar module for class [`GeometryInstance3D`][crate::classes::GeometryInstance3D]."] # [allow (unused_imports)] use crate :: builtin :: * ; # [allow (unused_imports)] use crate :: meta :: { AsArg , AsObjectArg , CowArg , InternedName , ObjectArg , Signature } ; # [allow (unused_imports)] use crate :: obj :: Gd ; # [allow (unused_imports)] use crate :: signal :: { SignalObject , TypedSignal } ; use crate :: sys ; pub (super) mod re_export { use super :: * ; # [doc = "Godot class `GeometryInstance3D`.\n\nInherits [`VisualInstance3D`][crate::classes::VisualInstance3D].\n\nRelated symbols (default-param builders, enums, interned names, signals) are in [`geometry_instance_3d`][crate::classes::geometry_instance_3d]."] # [derive (Debug)] # [repr (C)] pub struct GeometryInstance3D { object_ptr : sys :: GDExtensionObjectPtr , } impl GeometryInstance3D { pub fn set_cast_shadows_setting (& mut self , shadow_casting_setting : crate :: classes :: geometry_instance_3d :: ShadowCastingSetting ,) { type CallRet = () ; type CallParams = (crate :: classes :: geometry_instance_3d :: ShadowCastingSetting ,) ; let args = (shadow_casting_setting ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (206usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "GeometryInstance3D" , "set_cast_shadows_setting" , self . object_ptr , args ,) } } pub fn get_cast_shadows_setting (& self ,) -> crate :: classes :: geometry_instance_3d :: ShadowCastingSetting { type CallRet = crate :: classes :: geometry_instance_3d :: ShadowCastingSetting ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (207usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "GeometryInstance3D" , "get_cast_shadows_setting" , self . object_ptr , args ,) } } pub fn set_lod_bias (& mut self , bias : f32 ,) { type CallRet = () ; type CallParams = (f32 ,) ; let args = (bias ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (208usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "GeometryInstance3D" , "set_lod_bias" , self . object_ptr , args ,) } } pub fn get_lod_bias (& self ,) -> f32 { type CallRet = f32 ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (209usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "GeometryInstance3D" , "get_lod_bias" , self . object_ptr , args ,) } } pub fn set_transparency (& mut self , transparency : f32 ,) { type CallRet = () ; type CallParams = (f32 ,) ; let args = (transparency ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (210usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "GeometryInstance3D" , "set_transparency" , self . object_ptr , args ,) } } pub fn get_transparency (& self ,) -> f32 { type CallRet = f32 ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (211usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "GeometryInstance3D" , "get_transparency" , self . object_ptr , args ,) } } pub fn set_visibility_range_end_margin (& mut self , distance : f32 ,) { type CallRet = () ; type CallParams = (f32 ,) ; let args = (distance ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (212usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "GeometryInstance3D" , "set_visibility_range_end_margin" , self . object_ptr , args ,) } } pub fn get_visibility_range_end_margin (& self ,) -> f32 { type CallRet = f32 ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (213usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "GeometryInstance3D" , "get_visibility_range_end_margin" , self . object_ptr , args ,) } } pub fn set_visibility_range_end (& mut self , distance : f32 ,) { type CallRet = () ; type CallParams = (f32 ,) ; let args = (distance ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (214usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "GeometryInstance3D" , "set_visibility_range_end" , self . object_ptr , args ,) } } pub fn get_visibility_range_end (& self ,) -> f32 { type CallRet = f32 ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (215usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "GeometryInstance3D" , "get_visibility_range_end" , self . object_ptr , args ,) } } pub fn set_visibility_range_begin_margin (& mut self , distance : f32 ,) { type CallRet = () ; type CallParams = (f32 ,) ; let args = (distance ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (216usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "GeometryInstance3D" , "set_visibility_range_begin_margin" , self . object_ptr , args ,) } } pub fn get_visibility_range_begin_margin (& self ,) -> f32 { type CallRet = f32 ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (217usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "GeometryInstance3D" , "get_visibility_range_begin_margin" , self . object_ptr , args ,) } } pub fn set_visibility_range_begin (& mut self , distance : f32 ,) { type CallRet = () ; type CallParams = (f32 ,) ; let args = (distance ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (218usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "GeometryInstance3D" , "set_visibility_range_begin" , self . object_ptr , args ,) } } pub fn get_visibility_range_begin (& self ,) -> f32 { type CallRet = f32 ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (219usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "GeometryInstance3D" , "get_visibility_range_begin" , self . object_ptr , args ,) } } pub fn set_visibility_range_fade_mode (& mut self , mode : crate :: classes :: geometry_instance_3d :: VisibilityRangeFadeMode ,) { type CallRet = () ; type CallParams = (crate :: classes :: geometry_instance_3d :: VisibilityRangeFadeMode ,) ; let args = (mode ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (220usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "GeometryInstance3D" , "set_visibility_range_fade_mode" , self . object_ptr , args ,) } } pub fn get_visibility_range_fade_mode (& self ,) -> crate :: classes :: geometry_instance_3d :: VisibilityRangeFadeMode { type CallRet = crate :: classes :: geometry_instance_3d :: VisibilityRangeFadeMode ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (221usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "GeometryInstance3D" , "get_visibility_range_fade_mode" , self . object_ptr , args ,) } } pub fn set_instance_shader_parameter (& mut self , name : impl AsArg < StringName > , value : & Variant ,) { type CallRet = () ; type CallParams < 'a0 , 'a1 , > = (CowArg < 'a0 , StringName > , CowArg < 'a1 , Variant > ,) ; let args = (name . into_arg () , CowArg :: Borrowed (value) ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (222usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "GeometryInstance3D" , "set_instance_shader_parameter" , self . object_ptr , args ,) } } pub fn get_instance_shader_parameter (& self , name : impl AsArg < StringName > ,) -> Variant { type CallRet = Variant ; type CallParams < 'a0 , > = (CowArg < 'a0 , StringName > ,) ; let args = (name . into_arg () ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (223usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "GeometryInstance3D" , "get_instance_shader_parameter" , self . object_ptr , args ,) } } pub fn set_extra_cull_margin (& mut self , margin : f32 ,) { type CallRet = () ; type CallParams = (f32 ,) ; let args = (margin ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (224usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "GeometryInstance3D" , "set_extra_cull_margin" , self . object_ptr , args ,) } } pub fn get_extra_cull_margin (& self ,) -> f32 { type CallRet = f32 ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (225usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "GeometryInstance3D" , "get_extra_cull_margin" , self . object_ptr , args ,) } } pub fn set_lightmap_scale (& mut self , scale : crate :: classes :: geometry_instance_3d :: LightmapScale ,) { type CallRet = () ; type CallParams = (crate :: classes :: geometry_instance_3d :: LightmapScale ,) ; let args = (scale ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (226usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "GeometryInstance3D" , "set_lightmap_scale" , self . object_ptr , args ,) } } pub fn get_lightmap_scale (& self ,) -> crate :: classes :: geometry_instance_3d :: LightmapScale { type CallRet = crate :: classes :: geometry_instance_3d :: LightmapScale ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (227usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "GeometryInstance3D" , "get_lightmap_scale" , self . object_ptr , args ,) } } pub fn set_gi_mode (& mut self , mode : crate :: classes :: geometry_instance_3d :: GiMode ,) { type CallRet = () ; type CallParams = (crate :: classes :: geometry_instance_3d :: GiMode ,) ; let args = (mode ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (228usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "GeometryInstance3D" , "set_gi_mode" , self . object_ptr , args ,) } } pub fn get_gi_mode (& self ,) -> crate :: classes :: geometry_instance_3d :: GiMode { type CallRet = crate :: classes :: geometry_instance_3d :: GiMode ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (229usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "GeometryInstance3D" , "get_gi_mode" , self . object_ptr , args ,) } } pub fn set_ignore_occlusion_culling (& mut self , ignore_culling : bool ,) { type CallRet = () ; type CallParams = (bool ,) ; let args = (ignore_culling ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (230usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "GeometryInstance3D" , "set_ignore_occlusion_culling" , self . object_ptr , args ,) } } pub fn is_ignoring_occlusion_culling (& mut self ,) -> bool { type CallRet = bool ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (231usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "GeometryInstance3D" , "is_ignoring_occlusion_culling" , self . object_ptr , args ,) } } } impl crate :: obj :: GodotClass for GeometryInstance3D { const CLASS_NAME : & 'static str = "GeometryInstance3D" ; type Base = crate :: classes :: VisualInstance3D ; type Memory = crate :: obj :: MemManual ; const INIT_LEVEL : crate :: init :: InitLevel = crate :: init :: InitLevel :: Scene ; } impl crate :: obj :: EngineClass for GeometryInstance3D { fn as_object_ptr (& self) -> sys :: GDExtensionObjectPtr { self . object_ptr } } unsafe impl crate :: obj :: Inherits < crate :: classes :: VisualInstance3D > for GeometryInstance3D { } unsafe impl crate :: obj :: Inherits < crate :: classes :: Node3D > for GeometryInstance3D { } unsafe impl crate :: obj :: Inherits < crate :: classes :: Node > for GeometryInstance3D { } unsafe impl crate :: obj :: Inherits < crate :: classes :: Object > for GeometryInstance3D { } impl crate :: obj :: Instantiable for GeometryInstance3D { } impl std :: ops :: Deref for GeometryInstance3D { type Target = crate :: classes :: VisualInstance3D ; fn deref (& self) -> & Self :: Target { unsafe { std :: mem :: transmute :: < & Self , & Self :: Target > (self) } } } impl std :: ops :: DerefMut for GeometryInstance3D { fn deref_mut (& mut self) -> & mut Self :: Target { unsafe { std :: mem :: transmute :: < & mut Self , & mut Self :: Target > (self) } } } } # [repr (transparent)] # [derive (Copy , Clone , Eq , PartialEq , Hash ,)] pub struct ShadowCastingSetting { ord : i32 } impl ShadowCastingSetting { # [doc (alias = "SHADOW_CASTING_SETTING_OFF")] # [doc = "Godot enumerator name: `SHADOW_CASTING_SETTING_OFF`"] pub const OFF : Self = Self { ord : 0 } ; # [doc (alias = "SHADOW_CASTING_SETTING_ON")] # [doc = "Godot enumerator name: `SHADOW_CASTING_SETTING_ON`"] pub const ON : Self = Self { ord : 1 } ; # [doc (alias = "SHADOW_CASTING_SETTING_DOUBLE_SIDED")] # [doc = "Godot enumerator name: `SHADOW_CASTING_SETTING_DOUBLE_SIDED`"] pub const DOUBLE_SIDED : Self = Self { ord : 2 } ; # [doc (alias = "SHADOW_CASTING_SETTING_SHADOWS_ONLY")] # [doc = "Godot enumerator name: `SHADOW_CASTING_SETTING_SHADOWS_ONLY`"] pub const SHADOWS_ONLY : Self = Self { ord : 3 } ; # [allow (unreachable_patterns)] fn enumerator_name (self) -> Option < & 'static str > { match self { Self :: OFF => Some ("OFF") , Self :: ON => Some ("ON") , Self :: DOUBLE_SIDED => Some ("DOUBLE_SIDED") , Self :: SHADOWS_ONLY => Some ("SHADOWS_ONLY") , _ => None , } } } impl std :: fmt :: Debug for ShadowCastingSetting { fn fmt (& self , f : & mut std :: fmt :: Formatter < '_ >) -> std :: fmt :: Result { match self . enumerator_name () { Some (enumerator) => f . write_str (enumerator) , None => f . debug_struct (stringify ! (ShadowCastingSetting)) . field ("ord" , & self . ord) . finish () , } } } impl crate :: obj :: EngineEnum for ShadowCastingSetting { fn try_from_ord (ord : i32) -> Option < Self > { match ord { 0 | 1 | 2 | 3 => Some (Self { ord }) , _ => None , } } fn ord (self) -> i32 { self . ord } } impl crate :: meta :: GodotConvert for ShadowCastingSetting { type Via = i32 ; } impl crate :: meta :: ToGodot for ShadowCastingSetting { fn to_godot (& self) -> Self :: Via { < Self as crate :: obj :: EngineEnum > :: ord (* self) } } impl crate :: meta :: FromGodot for ShadowCastingSetting { fn try_from_godot (via : Self :: Via) -> std :: result :: Result < Self , crate :: meta :: ConvertError > { Ok (Self { ord : via }) } } # [doc = "Godot enum name: `GIMode`."] # [repr (transparent)] # [derive (Copy , Clone , Eq , PartialEq , Hash ,)] pub struct GiMode { ord : i32 } impl GiMode { # [doc (alias = "GI_MODE_DISABLED")] # [doc = "Godot enumerator name: `GI_MODE_DISABLED`"] pub const DISABLED : Self = Self { ord : 0 } ; # [doc (alias = "GI_MODE_STATIC")] # [doc = "Godot enumerator name: `GI_MODE_STATIC`"] pub const STATIC : Self = Self { ord : 1 } ; # [doc (alias = "GI_MODE_DYNAMIC")] # [doc = "Godot enumerator name: `GI_MODE_DYNAMIC`"] pub const DYNAMIC : Self = Self { ord : 2 } ; # [allow (unreachable_patterns)] fn enumerator_name (self) -> Option < & 'static str > { match self { Self :: DISABLED => Some ("DISABLED") , Self :: STATIC => Some ("STATIC") , Self :: DYNAMIC => Some ("DYNAMIC") , _ => None , } } } impl std :: fmt :: Debug for GiMode { fn fmt (& self , f : & mut std :: fmt :: Formatter < '_ >) -> std :: fmt :: Result { match self . enumerator_name () { Some (enumerator) => f . write_str (enumerator) , None => f . debug_struct (stringify ! (GiMode)) . field ("ord" , & self . ord) . finish () , } } } impl crate :: obj :: EngineEnum for GiMode { fn try_from_ord (ord : i32) -> Option < Self > { match ord { 0 | 1 | 2 => Some (Self { ord }) , _ => None , } } fn ord (self) -> i32 { self . ord } } impl crate :: meta :: GodotConvert for GiMode { type Via = i32 ; } impl crate :: meta :: ToGodot for GiMode { fn to_godot (& self) -> Self :: Via { < Self as crate :: obj :: EngineEnum > :: ord (* self) } } impl crate :: meta :: FromGodot for GiMode { fn try_from_godot (via : Self :: Via) -> std :: result :: Result < Self , crate :: meta :: ConvertError > { Ok (Self { ord : via }) } } # [repr (transparent)] # [derive (Copy , Clone , Eq , PartialEq , Hash ,)] pub struct LightmapScale { ord : i32 } impl LightmapScale { pub const LIGHTMAP_SCALE_1X : Self = Self { ord : 0 } ; pub const LIGHTMAP_SCALE_2X : Self = Self { ord : 1 } ; pub const LIGHTMAP_SCALE_4X : Self = Self { ord : 2 } ; pub const LIGHTMAP_SCALE_8X : Self = Self { ord : 3 } ; # [doc (alias = "LIGHTMAP_SCALE_MAX")] # [doc = "Godot enumerator name: `LIGHTMAP_SCALE_MAX`"] pub const MAX : Self = Self { ord : 4 } ; # [allow (unreachable_patterns)] fn enumerator_name (self) -> Option < & 'static str > { match self { Self :: LIGHTMAP_SCALE_1X => Some ("LIGHTMAP_SCALE_1X") , Self :: LIGHTMAP_SCALE_2X => Some ("LIGHTMAP_SCALE_2X") , Self :: LIGHTMAP_SCALE_4X => Some ("LIGHTMAP_SCALE_4X") , Self :: LIGHTMAP_SCALE_8X => Some ("LIGHTMAP_SCALE_8X") , Self :: MAX => Some ("MAX") , _ => None , } } } impl std :: fmt :: Debug for LightmapScale { fn fmt (& self , f : & mut std :: fmt :: Formatter < '_ >) -> std :: fmt :: Result { match self . enumerator_name () { Some (enumerator) => f . write_str (enumerator) , None => f . debug_struct (stringify ! (LightmapScale)) . field ("ord" , & self . ord) . finish () , } } } impl crate :: obj :: EngineEnum for LightmapScale { fn try_from_ord (ord : i32) -> Option < Self > { match ord { 0 | 1 | 2 | 3 | 4 => Some (Self { ord }) , _ => None , } } fn ord (self) -> i32 { self . ord } } impl crate :: meta :: GodotConvert for LightmapScale { type Via = i32 ; } impl crate :: meta :: ToGodot for LightmapScale { fn to_godot (& self) -> Self :: Via { < Self as crate :: obj :: EngineEnum > :: ord (* self) } } impl crate :: meta :: FromGodot for LightmapScale { fn try_from_godot (via : Self :: Via) -> std :: result :: Result < Self , crate :: meta :: ConvertError > { Ok (Self { ord : via }) } } # [repr (transparent)] # [derive (Copy , Clone , Eq , PartialEq , Hash ,)] pub struct VisibilityRangeFadeMode { ord : i32 } impl VisibilityRangeFadeMode { # [doc (alias = "VISIBILITY_RANGE_FADE_DISABLED")] # [doc = "Godot enumerator name: `VISIBILITY_RANGE_FADE_DISABLED`"] pub const DISABLED : Self = Self { ord : 0 } ; # [doc (alias = "VISIBILITY_RANGE_FADE_SELF")] # [doc = "Godot enumerator name: `VISIBILITY_RANGE_FADE_SELF`"] pub const SELF : Self = Self { ord : 1 } ; # [doc (alias = "VISIBILITY_RANGE_FADE_DEPENDENCIES")] # [doc = "Godot enumerator name: `VISIBILITY_RANGE_FADE_DEPENDENCIES`"] pub const DEPENDENCIES : Self = Self { ord : 2 } ; # [allow (unreachable_patterns)] fn enumerator_name (self) -> Option < & 'static str > { match self { Self :: DISABLED => Some ("DISABLED") , Self :: SELF => Some ("SELF") , Self :: DEPENDENCIES => Some ("DEPENDENCIES") , _ => None , } } } impl std :: fmt :: Debug for VisibilityRangeFadeMode { fn fmt (& self , f : & mut std :: fmt :: Formatter < '_ >) -> std :: fmt :: Result { match self . enumerator_name () { Some (enumerator) => f . write_str (enumerator) , None => f . debug_struct (stringify ! (VisibilityRangeFadeMode)) . field ("ord" , & self . ord) . finish () , } } } impl crate :: obj :: EngineEnum for VisibilityRangeFadeMode { fn try_from_ord (ord : i32) -> Option < Self > { match ord { 0 | 1 | 2 => Some (Self { ord }) , _ => None , } } fn ord (self) -> i32 { self . ord } } impl crate :: meta :: GodotConvert for VisibilityRangeFadeMode { type Via = i32 ; } impl crate :: meta :: ToGodot for VisibilityRangeFadeMode { fn to_godot (& self) -> Self :: Via { < Self as crate :: obj :: EngineEnum > :: ord (* self) } } impl crate :: meta :: FromGodot for VisibilityRangeFadeMode { fn try_from_godot (via : Self :: Via) -> std :: result :: Result < Self , crate :: meta :: ConvertError > { Ok (Self { ord : via }) } } # [doc = "Properties declared by [`GeometryInstance3D`][super::GeometryInstance3D], as interned engine names."] pub struct PropertyName ; impl PropertyName { pub const MATERIAL_OVERRIDE : InternedName = InternedName :: new ("material_override") ; pub const MATERIAL_OVERLAY : InternedName = InternedName :: new ("material_overlay") ; pub const TRANSPARENCY : InternedName = InternedName :: new ("transparency") ; pub const CAST_SHADOW : InternedName = InternedName :: new ("cast_shadow") ; pub const EXTRA_CULL_MARGIN : InternedName = InternedName :: new ("extra_cull_margin") ; pub const CUSTOM_AABB : InternedName = InternedName :: new ("custom_aabb") ; pub const LOD_BIAS : InternedName = InternedName :: new ("lod_bias") ; pub const IGNORE_OCCLUSION_CULLING : InternedName = InternedName :: new ("ignore_occlusion_culling") ; pub const GI_MODE : InternedName = InternedName :: new ("gi_mode") ; pub const GI_LIGHTMAP_SCALE : InternedName = InternedName :: new ("gi_lightmap_scale") ; pub const VISIBILITY_RANGE_BEGIN : InternedName = InternedName :: new ("visibility_range_begin") ; pub const VISIBILITY_RANGE_BEGIN_MARGIN : InternedName = InternedName :: new ("visibility_range_begin_margin") ; pub const VISIBILITY_RANGE_END : InternedName = InternedName :: new ("visibility_range_end") ; pub const VISIBILITY_RANGE_END_MARGIN : InternedName = InternedName :: new ("visibility_range_end_margin") ; pub const VISIBILITY_RANGE_FADE_MODE : InternedName = InternedName :: new ("visibility_range_fade_mode") ; } # [doc = "Methods declared by [`GeometryInstance3D`][super::GeometryInstance3D], as interned engine names."] pub struct MethodName ; impl MethodName { pub const SET_CAST_SHADOWS_SETTING : InternedName = InternedName :: new ("set_cast_shadows_setting") ; pub const GET_CAST_SHADOWS_SETTING : InternedName = InternedName :: new ("get_cast_shadows_setting") ; pub const SET_LOD_BIAS : InternedName = InternedName :: new ("set_lod_bias") ; pub const GET_LOD_BIAS : InternedName = InternedName :: new ("get_lod_bias") ; pub const SET_TRANSPARENCY : InternedName = InternedName :: new ("set_transparency") ; pub const GET_TRANSPARENCY : InternedName = InternedName :: new ("get_transparency") ; pub const SET_VISIBILITY_RANGE_END_MARGIN : InternedName = InternedName :: new ("set_visibility_range_end_margin") ; pub const GET_VISIBILITY_RANGE_END_MARGIN : InternedName = InternedName :: new ("get_visibility_range_end_margin") ; pub const SET_VISIBILITY_RANGE_END : InternedName = InternedName :: new ("set_visibility_range_end") ; pub const GET_VISIBILITY_RANGE_END : InternedName = InternedName :: new ("get_visibility_range_end") ; pub const SET_VISIBILITY_RANGE_BEGIN_MARGIN : InternedName = InternedName :: new ("set_visibility_range_begin_margin") ; pub const GET_VISIBILITY_RANGE_BEGIN_MARGIN : InternedName = InternedName :: new ("get_visibility_range_begin_margin") ; pub const SET_VISIBILITY_RANGE_BEGIN : InternedName = InternedName :: new ("set_visibility_range_begin") ; pub const GET_VISIBILITY_RANGE_BEGIN : InternedName = InternedName :: new ("get_visibility_range_begin") ; pub const SET_VISIBILITY_RANGE_FADE_MODE : InternedName = InternedName :: new ("set_visibility_range_fade_mode") ; pub const GET_VISIBILITY_RANGE_FADE_MODE : InternedName = InternedName :: new ("get_visibility_range_fade_mode") ; pub const SET_INSTANCE_SHADER_PARAMETER : InternedName = InternedName :: new ("set_instance_shader_parameter") ; pub const GET_INSTANCE_SHADER_PARAMETER : InternedName = InternedName :: new ("get_instance_shader_parameter") ; pub const SET_EXTRA_CULL_MARGIN : InternedName = InternedName :: new ("set_extra_cull_margin") ; pub const GET_EXTRA_CULL_MARGIN : InternedName = InternedName :: new ("get_extra_cull_margin") ; pub const SET_LIGHTMAP_SCALE : InternedName = InternedName :: new ("set_lightmap_scale") ; pub const GET_LIGHTMAP_SCALE : InternedName = InternedName :: new ("get_lightmap_scale") ; pub const SET_GI_MODE : InternedName = InternedName :: new ("set_gi_mode") ; pub const GET_GI_MODE : InternedName = InternedName :: new ("get_gi_mode") ; pub const SET_IGNORE_OCCLUSION_CULLING : InternedName = InternedName :: new ("set_ignore_occlusion_culling") ; pub const IS_IGNORING_OCCLUSION_CULLING : InternedName = InternedName :: new ("is_ignoring_occlusion_culling") ; } # [doc = "Signals declared by [`GeometryInstance3D`][super::GeometryInstance3D], as interned engine names."] pub struct SignalName ; impl SignalName { }