# ! [doc = "Sidecar module for class [`Label3D`][crate::classes::Label3D]."] # [allow (unused_imports)] use crate :: builtin :: * ; # [allow (unused_imports)] use crate :: meta :: { AsArg , AsObjectArg , CowArg , InternedName , ObjectArg , Signature } ; # [allow (unused_imports)] use crate :: obj :: Gd ; # [allow (unused_imports)] use crate :: signal :: { SignalObject , TypedSignal } ; use crate :: sys ; pub (super) mod re_export { use super :: * ; # [doc = "Godot class `Label3D`.\n\nInherits [`GeometryInstance3D`][crate::classes::GeometryInstance3D].\n\nRelated symbols (default-param builders, enums, interned names, signals) are in [`label_3d`][crate::classes::label_3d]."] # [derive (Debug)] # [repr (C)] pub struct Label3D { object_ptr : sys :: GDExtensionObjectPtr , } impl Label3D { pub fn set_horizontal_alignment (& mut self , alignment : crate :: global :: HorizontalAlignment ,) { type CallRet = () ; type CallParams = (crate :: global :: HorizontalAlignment ,) ; let args = (alignment ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (316usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Label3D" , "set_horizontal_alignment" , self . object_ptr , args ,) } } pub fn get_horizontal_alignment (& self ,) -> crate :: global :: HorizontalAlignment { type CallRet = crate :: global :: HorizontalAlignment ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (317usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Label3D" , "get_horizontal_alignment" , self . object_ptr , args ,) } } pub fn set_vertical_alignment (& mut self , alignment : crate :: global :: VerticalAlignment ,) { type CallRet = () ; type CallParams = (crate :: global :: VerticalAlignment ,) ; let args = (alignment ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (318usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Label3D" , "set_vertical_alignment" , self . object_ptr , args ,) } } pub fn get_vertical_alignment (& self ,) -> crate :: global :: VerticalAlignment { type CallRet = crate :: global :: VerticalAlignment ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (319usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Label3D" , "get_vertical_alignment" , self . object_ptr , args ,) } } pub fn set_modulate (& mut self , modulate : Color ,) { type CallRet = () ; type CallParams = (Color ,) ; let args = (modulate ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (320usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Label3D" , "set_modulate" , self . object_ptr , args ,) } } pub fn get_modulate (& self ,) -> Color { type CallRet = Color ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (321usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Label3D" , "get_modulate" , self . object_ptr , args ,) } } pub fn set_outline_modulate (& mut self , modulate : Color ,) { type CallRet = () ; type CallParams = (Color ,) ; let args = (modulate ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (322usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Label3D" , "set_outline_modulate" , self . object_ptr , args ,) } } pub fn get_outline_modulate (& self ,) -> Color { type CallRet = Color ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (323usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Label3D" , "get_outline_modulate" , self . object_ptr , args ,) } } pub fn set_text (& mut self , text : impl AsArg < GString > ,) { type CallRet = () ; type CallParams < 'a0 , > = (CowArg < 'a0 , GString > ,) ; let args = (text . into_arg () ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (324usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Label3D" , "set_text" , self . object_ptr , args ,) } } pub fn get_text (& self ,) -> GString { type CallRet = GString ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (325usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Label3D" , "get_text" , self . object_ptr , args ,) } } pub fn set_language (& mut self , language : impl AsArg < GString > ,) { type CallRet = () ; type CallParams < 'a0 , > = (CowArg < 'a0 , GString > ,) ; let args = (language . into_arg () ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (326usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Label3D" , "set_language" , self . object_ptr , args ,) } } pub fn get_language (& self ,) -> GString { type CallRet = GString ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (327usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Label3D" , "get_language" , self . object_ptr , args ,) } } pub fn set_uppercase (& mut self , enable : bool ,) { type CallRet = () ; type CallParams = (bool ,) ; let args = (enable ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (328usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Label3D" , "set_uppercase" , self . object_ptr , args ,) } } pub fn is_uppercase (& self ,) -> bool { type CallRet = bool ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (329usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Label3D" , "is_uppercase" , self . object_ptr , args ,) } } pub fn set_render_priority (& mut self , priority : i32 ,) { type CallRet = () ; type CallParams = (i32 ,) ; let args = (priority ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (330usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Label3D" , "set_render_priority" , self . object_ptr , args ,) } } pub fn get_render_priority (& self ,) -> i32 { type CallRet = i32 ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (331usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Label3D" , "get_render_priority" , self . object_ptr , args ,) } } pub fn set_outline_render_priority (& mut self , priority : i32 ,) { type CallRet = () ; type CallParams = (i32 ,) ; let args = (priority ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (332usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Label3D" , "set_outline_render_priority" , self . object_ptr , args ,) } } pub fn get_outline_render_priority (& self ,) -> i32 { type CallRet = i32 ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (333usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Label3D" , "get_outline_render_priority" , self . object_ptr , args ,) } } pub fn set_font (& mut self , font : impl AsObjectArg < crate :: classes :: Font > ,) { type CallRet = () ; type CallParams = (ObjectArg < crate :: classes :: Font > ,) ; let args = (font . as_object_arg () ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (334usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Label3D" , "set_font" , self . object_ptr , args ,) } } pub fn get_font (& self ,) -> Option < Gd < crate :: classes :: Font > > { type CallRet = Option < Gd < crate :: classes :: Font > > ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (335usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Label3D" , "get_font" , self . object_ptr , args ,) } } pub fn set_font_size (& mut self , size : i32 ,) { type CallRet = () ; type CallParams = (i32 ,) ; let args = (size ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (336usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Label3D" , "set_font_size" , self . object_ptr , args ,) } } pub fn get_font_size (& self ,) -> i32 { type CallRet = i32 ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (337usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Label3D" , "get_font_size" , self . object_ptr , args ,) } } pub fn set_outline_size (& mut self , outline_size : i32 ,) { type CallRet = () ; type CallParams = (i32 ,) ; let args = (outline_size ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (338usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Label3D" , "set_outline_size" , self . object_ptr , args ,) } } pub fn get_outline_size (& self ,) -> i32 { type CallRet = i32 ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (339usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Label3D" , "get_outline_size" , self . object_ptr , args ,) } } pub fn set_line_spacing (& mut self , line_spacing : f32 ,) { type CallRet = () ; type CallParams = (f32 ,) ; let args = (line_spacing ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (340usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Label3D" , "set_line_spacing" , self . object_ptr , args ,) } } pub fn get_line_spacing (& self ,) -> f32 { type CallRet = f32 ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (341usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Label3D" , "get_line_spacing" , self . object_ptr , args ,) } } pub fn set_width (& mut self , width : f32 ,) { type CallRet = () ; type CallParams = (f32 ,) ; let args = (width ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (342usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Label3D" , "set_width" , self . object_ptr , args ,) } } pub fn get_width (& self ,) -> f32 { type CallRet = f32 ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (343usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Label3D" , "get_width" , self . object_ptr , args ,) } } pub fn set_pixel_size (& mut self , pixel_size : f32 ,) { type CallRet = () ; type CallParams = (f32 ,) ; let args = (pixel_size ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (344usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Label3D" , "set_pixel_size" , self . object_ptr , args ,) } } pub fn get_pixel_size (& self ,) -> f32 { type CallRet = f32 ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (345usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Label3D" , "get_pixel_size" , self . object_ptr , args ,) } } pub fn set_offset (& mut self , offset : Vector2 ,) { type CallRet = () ; type CallParams = (Vector2 ,) ; let args = (offset ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (346usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Label3D" , "set_offset" , self . object_ptr , args ,) } } pub fn get_offset (& self ,) -> Vector2 { type CallRet = Vector2 ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (347usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Label3D" , "get_offset" , self . object_ptr , args ,) } } pub fn set_draw_flag (& mut self , flag : crate :: classes :: label_3d :: DrawFlags , enabled : bool ,) { type CallRet = () ; type CallParams = (crate :: classes :: label_3d :: DrawFlags , bool ,) ; let args = (flag , enabled ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (348usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Label3D" , "set_draw_flag" , self . object_ptr , args ,) } } pub fn get_draw_flag (& self , flag : crate :: classes :: label_3d :: DrawFlags ,) -> bool { type CallRet = bool ; type CallParams = (crate :: classes :: label_3d :: DrawFlags ,) ; let args = (flag ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (349usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Label3D" , "get_draw_flag" , self . object_ptr , args ,) } } pub fn set_alpha_cut_mode (& mut self , mode : crate :: classes :: label_3d :: AlphaCutMode ,) { type CallRet = () ; type CallParams = (crate :: classes :: label_3d :: AlphaCutMode ,) ; let args = (mode ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (350usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Label3D" , "set_alpha_cut_mode" , self . object_ptr , args ,) } } pub fn get_alpha_cut_mode (& self ,) -> crate :: classes :: label_3d :: AlphaCutMode { type CallRet = crate :: classes :: label_3d :: AlphaCutMode ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (351usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Label3D" , "get_alpha_cut_mode" , self . object_ptr , args ,) } } pub fn set_alpha_scissor_threshold (& mut self , threshold : f32 ,) { type CallRet = () ; type CallParams = (f32 ,) ; let args = (threshold ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (352usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Label3D" , "set_alpha_scissor_threshold" , self . object_ptr , args ,) } } pub fn get_alpha_scissor_threshold (& self ,) -> f32 { type CallRet = f32 ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (353usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Label3D" , "get_alpha_scissor_threshold" , self . object_ptr , args ,) } } pub fn set_alpha_hash_scale (& mut self , threshold : f32 ,) { type CallRet = () ; type CallParams = (f32 ,) ; let args = (threshold ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (354usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Label3D" , "set_alpha_hash_scale" , self . object_ptr , args ,) } } pub fn get_alpha_hash_scale (& self ,) -> f32 { type CallRet = f32 ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (355usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Label3D" , "get_alpha_hash_scale" , self . object_ptr , args ,) } } pub fn set_alpha_antialiasing_edge (& mut self , edge : f32 ,) { type CallRet = () ; type CallParams = (f32 ,) ; let args = (edge ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (356usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Label3D" , "set_alpha_antialiasing_edge" , self . object_ptr , args ,) } } pub fn get_alpha_antialiasing_edge (& self ,) -> f32 { type CallRet = f32 ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (357usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Label3D" , "get_alpha_antialiasing_edge" , self . object_ptr , args ,) } } } impl crate :: obj :: GodotClass for Label3D { const CLASS_NAME : & 'static str = "Label3D" ; type Base = crate :: classes :: GeometryInstance3D ; type Memory = crate :: obj :: MemManual ; const INIT_LEVEL : crate :: init :: InitLevel = crate :: init :: InitLevel :: Scene ; } impl crate :: obj :: EngineClass for Label3D { fn as_object_ptr (& self) -> sys :: GDExtensionObjectPtr { self . object_ptr } } unsafe impl crate :: obj :: Inherits < crate :: classes :: GeometryInstance3D > for Label3D { } unsafe impl crate :: obj :: Inherits < crate :: classes :: VisualInstance3D > for Label3D { } unsafe impl crate :: obj :: Inherits < crate :: classes :: Node3D > for Label3D { } unsafe impl crate :: obj :: Inherits < crate :: classes :: Node > for Label3D { } unsafe impl crate :: obj :: Inherits < crate :: classes :: Object > for Label3D { } impl crate :: obj :: Instantiable for Label3D { } impl std :: ops :: Deref for Label3D { type Target = crate :: classes :: GeometryInstance3D ; fn deref (& self) -> & Self :: Target { unsafe { std :: mem :: transmute :: < & Self , & Self :: Target > (self) } } } impl std :: ops :: DerefMut for Label3D { fn deref_mut (& mut self) -> & mut Self :: Target { unsafe { std :: mem :: transmute :: < & mut Self , & mut Self :: Target > (self) } } } } # [repr (transparent)] # [derive (Copy , Clone , Eq , PartialEq , Hash ,)] pub struct DrawFlags { ord : i32 } impl DrawFlags { # [doc (alias = "FLAG_SHADED")] # [doc = "Godot enumerator name: `FLAG_SHADED`"] pub const SHADED : Self = Self { ord : 0 } ; # [doc (alias = "FLAG_DOUBLE_SIDED")] # [doc = "Godot enumerator name: `FLAG_DOUBLE_SIDED`"] pub const DOUBLE_SIDED : Self = Self { ord : 1 } ; # [doc (alias = "FLAG_DISABLE_DEPTH_TEST")] # [doc = "Godot enumerator name: `FLAG_DISABLE_DEPTH_TEST`"] pub const DISABLE_DEPTH_TEST : Self = Self { ord : 2 } ; # [doc (alias = "FLAG_FIXED_SIZE")] # [doc = "Godot enumerator name: `FLAG_FIXED_SIZE`"] pub const FIXED_SIZE : Self = Self { ord : 3 } ; # [doc (alias = "FLAG_MAX")] # [doc = "Godot enumerator name: `FLAG_MAX`"] pub const MAX : Self = Self { ord : 4 } ; # [allow (unreachable_patterns)] fn enumerator_name (self) -> Option < & 'static str > { match self { Self :: SHADED => Some ("SHADED") , Self :: DOUBLE_SIDED => Some ("DOUBLE_SIDED") , Self :: DISABLE_DEPTH_TEST => Some ("DISABLE_DEPTH_TEST") , Self :: FIXED_SIZE => Some ("FIXED_SIZE") , Self :: MAX => Some ("MAX") , _ => None , } } } impl std :: fmt :: Debug for DrawFlags { fn fmt (& self , f : & mut std :: fmt :: Formatter < '_ >) -> std :: fmt :: Result { match self . enumerator_name () { Some (enumerator) => f . write_str (enumerator) , None => f . debug_struct (stringify ! (DrawFlags)) . field ("ord" , & self . ord) . finish () , } } } impl crate :: obj :: EngineEnum for DrawFlags { fn try_from_ord (ord : i32) -> Option < Self > { match ord { 0 | 1 | 2 | 3 | 4 => Some (Self { ord }) , _ => None , } } fn ord (self) -> i32 { self . ord } } impl crate :: meta :: GodotConvert for DrawFlags { type Via = i32 ; } impl crate :: meta :: ToGodot for DrawFlags { fn to_godot (& self) -> Self :: Via { < Self as crate :: obj :: EngineEnum > :: ord (* self) } } impl crate :: meta :: FromGodot for DrawFlags { fn try_from_godot (via : Self :: Via) -> std :: result :: Result < Self , crate :: meta :: ConvertError > { Ok (Self { ord : via }) } } # [repr (transparent)] # [derive (Copy , Clone , Eq , PartialEq , Hash ,)] pub struct AlphaCutMode { ord : i32 } impl AlphaCutMode { # [doc (alias = "ALPHA_CUT_DISABLED")] # [doc = "Godot enumerator name: `ALPHA_CUT_DISABLED`"] pub const DISABLED : Self = Self { ord : 0 } ; # [doc (alias = "ALPHA_CUT_DISCARD")] # [doc = "Godot enumerator name: `ALPHA_CUT_DISCARD`"] pub const DISCARD : Self = Self { ord : 1 } ; # [doc (alias = "ALPHA_CUT_OPAQUE_PREPASS")] # [doc = "Godot enumerator name: `ALPHA_CUT_OPAQUE_PREPASS`"] pub const OPAQUE_PREPASS : Self = Self { ord : 2 } ; # [doc (alias = "ALPHA_CUT_HASH")] # [doc = "Godot enumerator name: `ALPHA_CUT_HASH`"] pub const HASH : Self = Self { ord : 3 } ; # [allow (unreachable_patterns)] fn enumerator_name (self) -> Option < & 'static str > { match self { Self :: DISABLED => Some ("DISABLED") , Self :: DISCARD => Some ("DISCARD") , Self :: OPAQUE_PREPASS => Some ("OPAQUE_PREPASS") , Self :: HASH => Some ("HASH") , _ => None , } } } impl std :: fmt :: Debug for AlphaCutMode { fn fmt (& self , f : & mut std :: fmt :: Formatter < '_ >) -> std :: fmt :: Result { match self . enumerator_name () { Some (enumerator) => f . write_str (enumerator) , None => f . debug_struct (stringify ! (AlphaCutMode)) . field ("ord" , & self . ord) . finish () , } } } impl crate :: obj :: EngineEnum for AlphaCutMode { fn try_from_ord (ord : i32) -> Option < Self > { match ord { 0 | 1 | 2 | 3 => Some (Self { ord }) , _ => None , } } fn ord (self) -> i32 { self . ord } } impl crate :: meta :: GodotConvert for AlphaCutMode { type Via = i32 ; } impl crate :: meta :: ToGodot for AlphaCutMode { fn to_godot (& self) -> Self :: Via { < Self as crate :: obj :: EngineEnum > :: ord (* self) } } impl crate :: meta :: FromGodot for AlphaCutMode { fn try_from_godot (via : Self :: Via) -> std :: result :: Result < Self , crate :: meta :: ConvertError > { Ok (Self { ord : via }) } } # [doc = "Properties declared by [`Label3D`][super::Label3D], as interned engine names."] pub struct PropertyName ; impl PropertyName { pub const PIXEL_SIZE : InternedName = InternedName :: new ("pixel_size") ; pub const OFFSET : InternedName = InternedName :: new ("offset") ; pub const BILLBOARD : InternedName = InternedName :: new ("billboard") ; pub const SHADED : InternedName = InternedName :: new ("shaded") ; pub const DOUBLE_SIDED : InternedName = InternedName :: new ("double_sided") ; pub const NO_DEPTH_TEST : InternedName = InternedName :: new ("no_depth_test") ; pub const FIXED_SIZE : InternedName = InternedName :: new ("fixed_size") ; pub const ALPHA_CUT : InternedName = InternedName :: new ("alpha_cut") ; pub const ALPHA_SCISSOR_THRESHOLD : InternedName = InternedName :: new ("alpha_scissor_threshold") ; pub const ALPHA_HASH_SCALE : InternedName = InternedName :: new ("alpha_hash_scale") ; pub const ALPHA_ANTIALIASING_MODE : InternedName = InternedName :: new ("alpha_antialiasing_mode") ; pub const ALPHA_ANTIALIASING_EDGE : InternedName = InternedName :: new ("alpha_antialiasing_edge") ; pub const TEXTURE_FILTER : InternedName = InternedName :: new ("texture_filter") ; pub const RENDER_PRIORITY : InternedName = InternedName :: new ("render_priority") ; pub const OUTLINE_RENDER_PRIORITY : InternedName = InternedName :: new ("outline_render_priority") ; pub const MODULATE : InternedName = InternedName :: new ("modulate") ; pub const OUTLINE_MODULATE : InternedName = InternedName :: new ("outline_modulate") ; pub const TEXT : InternedName = InternedName :: new ("text") ; pub const FONT : InternedName = InternedName :: new ("font") ; pub const FONT_SIZE : InternedName = InternedName :: new ("font_size") ; pub const OUTLINE_SIZE : InternedName = InternedName :: new ("outline_size") ; pub const HORIZONTAL_ALIGNMENT : InternedName = InternedName :: new ("horizontal_alignment") ; pub const VERTICAL_ALIGNMENT : InternedName = InternedName :: new ("vertical_alignment") ; pub const UPPERCASE : InternedName = InternedName :: new ("uppercase") ; pub const LINE_SPACING : InternedName = InternedName :: new ("line_spacing") ; pub const AUTOWRAP_MODE : InternedName = InternedName :: new ("autowrap_mode") ; pub const JUSTIFICATION_FLAGS : InternedName = InternedName :: new ("justification_flags") ; pub const WIDTH : InternedName = InternedName :: new ("width") ; pub const TEXT_DIRECTION : InternedName = InternedName :: new ("text_direction") ; pub const LANGUAGE : InternedName = InternedName :: new ("language") ; pub const STRUCTURED_TEXT_BIDI_OVERRIDE : InternedName = InternedName :: new ("structured_text_bidi_override") ; pub const STRUCTURED_TEXT_BIDI_OVERRIDE_OPTIONS : InternedName = InternedName :: new ("structured_text_bidi_override_options") ; } # [doc = "Methods declared by [`Label3D`][super::Label3D], as interned engine names."] pub struct MethodName ; impl MethodName { pub const SET_HORIZONTAL_ALIGNMENT : InternedName = InternedName :: new ("set_horizontal_alignment") ; pub const GET_HORIZONTAL_ALIGNMENT : InternedName = InternedName :: new ("get_horizontal_alignment") ; pub const SET_VERTICAL_ALIGNMENT : InternedName = InternedName :: new ("set_vertical_alignment") ; pub const GET_VERTICAL_ALIGNMENT : InternedName = InternedName :: new ("get_vertical_alignment") ; pub const SET_MODULATE : InternedName = InternedName :: new ("set_modulate") ; pub const GET_MODULATE : InternedName = InternedName :: new ("get_modulate") ; pub const SET_OUTLINE_MODULATE : InternedName = InternedName :: new ("set_outline_modulate") ; pub const GET_OUTLINE_MODULATE : InternedName = InternedName :: new ("get_outline_modulate") ; pub const SET_TEXT : InternedName = InternedName :: new ("set_text") ; pub const GET_TEXT : InternedName = InternedName :: new ("get_text") ; pub const SET_LANGUAGE : InternedName = InternedName :: new ("set_language") ; pub const GET_LANGUAGE : InternedName = InternedName :: new ("get_language") ; pub const SET_UPPERCASE : InternedName = InternedName :: new ("set_uppercase") ; pub const IS_UPPERCASE : InternedName = InternedName :: new ("is_uppercase") ; pub const SET_RENDER_PRIORITY : InternedName = InternedName :: new ("set_render_priority") ; pub const GET_RENDER_PRIORITY : InternedName = InternedName :: new ("get_render_priority") ; pub const SET_OUTLINE_RENDER_PRIORITY : InternedName = InternedName :: new ("set_outline_render_priority") ; pub const GET_OUTLINE_RENDER_PRIORITY : InternedName = InternedName :: new ("get_outline_render_priority") ; pub const SET_FONT : InternedName = InternedName :: new ("set_font") ; pub const GET_FONT : InternedName = InternedName :: new ("get_font") ; pub const SET_FONT_SIZE : InternedName = InternedName :: new ("set_font_size") ; pub const GET_FONT_SIZE : InternedName = InternedName :: new ("get_font_size") ; pub const SET_OUTLINE_SIZE : InternedName = InternedName :: new ("set_outline_size") ; pub const GET_OUTLINE_SIZE : InternedName = InternedName :: new ("get_outline_size") ; pub const SET_LINE_SPACING : InternedName = InternedName :: new ("set_line_spacing") ; pub const GET_LINE_SPACING : InternedName = InternedName :: new ("get_line_spacing") ; pub const SET_WIDTH : InternedName = InternedName :: new ("set_width") ; pub const GET_WIDTH : InternedName = InternedName :: new ("get_width") ; pub const SET_PIXEL_SIZE : InternedName = InternedName :: new ("set_pixel_size") ; pub const GET_PIXEL_SIZE : InternedName = InternedName :: new ("get_pixel_size") ; pub const SET_OFFSET : InternedName = InternedName :: new ("set_offset") ; pub const GET_OFFSET : InternedName = InternedName :: new ("get_offset") ; pub const SET_DRAW_FLAG : InternedName = InternedName :: new ("set_draw_flag") ; pub const GET_DRAW_FLAG : InternedName = InternedName :: new ("get_draw_flag") ; pub const SET_ALPHA_CUT_MODE : InternedName = InternedName :: new ("set_alpha_cut_mode") ; pub const GET_ALPHA_CUT_MODE : InternedName = InternedName :: new ("get_alpha_cut_mode") ; pub const SET_ALPHA_SCISSOR_THRESHOLD : InternedName = InternedName :: new ("set_alpha_scissor_threshold") ; pub const GET_ALPHA_SCISSOR_THRESHOLD : InternedName = InternedName :: new ("get_alpha_scissor_threshold") ; pub const SET_ALPHA_HASH_SCALE : InternedName = InternedName :: new ("set_alpha_hash_scale") ; pub const GET_ALPHA_HASH_SCALE : InternedName = InternedName :: new ("get_alpha_hash_scale") ; pub const SET_ALPHA_ANTIALIASING_EDGE : InternedName = InternedName :: new ("set_alpha_antialiasing_edge") ; pub const GET_ALPHA_ANTIALIASING_EDGE : InternedName = InternedName :: new ("get_alpha_antialiasing_edge") ; } # [doc = "Signals declared by [`Label3D`][super::Label3D], as interned engine names."] pub struct SignalName ; impl SignalName { }