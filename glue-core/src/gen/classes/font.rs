# ! [doc = "Sidecar module for class [`Font`][crate::classes::Font]."] # [allow (unused_imports)] use crate :: builtin :: * ; # [allow (unused_imports)] use crate :: meta :: { AsArg , AsObjectArg , CowArg , InternedName , ObjectArg , Signature } ; # [allow (unused_imports)] use crate :: obj :: Gd ; # [allow (unused_imports)] use crate :: signal :: { SignalObject , TypedSignal } ; use crate :: sys ; pub (super) mod re_export { use super :: * ; # [doc = "Godot class `Font`.\n\nInherits [`Resource`][crate::classes::Resource].\n\nRelated symbols (default-param builders, enums, interned names, signals) are in [`font`][crate::classes::font]."] # [derive (Debug)] # [repr (C)] pub struct Font { object_ptr : sys :: GDExtensionObjectPtr , } impl Font { pub (crate) fn get_height_full (& self , font_size : i32 ,) -> f32 { type CallRet = f32 ; type CallParams = (i32 ,) ; let args = (font_size ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (188usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Font" , "get_height" , self . object_ptr , args ,) } } # [inline] pub fn get_height (& self ,) -> f32 { self . get_height_ex () . done () } # [inline] pub fn get_height_ex < 'ex > (& 'ex self ,) -> super :: ExGetHeight < 'ex > { super :: ExGetHeight :: new (self ,) } pub (crate) fn get_ascent_full (& self , font_size : i32 ,) -> f32 { type CallRet = f32 ; type CallParams = (i32 ,) ; let args = (font_size ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (189usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Font" , "get_ascent" , self . object_ptr , args ,) } } # [inline] pub fn get_ascent (& self ,) -> f32 { self . get_ascent_ex () . done () } # [inline] pub fn get_ascent_ex < 'ex > (& 'ex self ,) -> super :: ExGetAscent < 'ex > { super :: ExGetAscent :: new (self ,) } pub (crate) fn get_descent_full (& self , font_size : i32 ,) -> f32 { type CallRet = f32 ; type CallParams = (i32 ,) ; let args = (font_size ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (190usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Font" , "get_descent" , self . object_ptr , args ,) } } # [inline] pub fn get_descent (& self ,) -> f32 { self . get_descent_ex () . done () } # [inline] pub fn get_descent_ex < 'ex > (& 'ex self ,) -> super :: ExGetDescent < 'ex > { super :: ExGetDescent :: new (self ,) } pub (crate) fn get_underline_position_full (& self , font_size : i32 ,) -> f32 { type CallRet = f32 ; type CallParams = (i32 ,) ; let args = (font_size ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (191usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Font" , "get_underline_position" , self . object_ptr , args ,) } } # [inline] pub fn get_underline_position (& self ,) -> f32 { self . get_underline_position_ex () . done () } # [inline] pub fn get_underline_position_ex < 'ex > (& 'ex self ,) -> super :: ExGetUnderlinePosition < 'ex > { super :: ExGetUnderlinePosition :: new (self ,) } pub (crate) fn get_underline_thickness_full (& self , font_size : i32 ,) -> f32 { type CallRet = f32 ; type CallParams = (i32 ,) ; let args = (font_size ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (192usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Font" , "get_underline_thickness" , self . object_ptr , args ,) } } # [inline] pub fn get_underline_thickness (& self ,) -> f32 { self . get_underline_thickness_ex () . done () } # [inline] pub fn get_underline_thickness_ex < 'ex > (& 'ex self ,) -> super :: ExGetUnderlineThickness < 'ex > { super :: ExGetUnderlineThickness :: new (self ,) } pub fn get_font_name (& self ,) -> GString { type CallRet = GString ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (193usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Font" , "get_font_name" , self . object_ptr , args ,) } } pub fn get_font_style_name (& self ,) -> GString { type CallRet = GString ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (194usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Font" , "get_font_style_name" , self . object_ptr , args ,) } } pub fn get_font_weight (& self ,) -> i32 { type CallRet = i32 ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (195usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Font" , "get_font_weight" , self . object_ptr , args ,) } } pub fn get_font_stretch (& self ,) -> i32 { type CallRet = i32 ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (196usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Font" , "get_font_stretch" , self . object_ptr , args ,) } } pub fn set_cache_capacity (& mut self , single_line : i32 , multi_line : i32 ,) { type CallRet = () ; type CallParams = (i32 , i32 ,) ; let args = (single_line , multi_line ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (197usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Font" , "set_cache_capacity" , self . object_ptr , args ,) } } pub fn get_char_size (& self , char : i64 , font_size : i32 ,) -> Vector2 { type CallRet = Vector2 ; type CallParams = (i64 , i32 ,) ; let args = (char , font_size ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (198usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Font" , "get_char_size" , self . object_ptr , args ,) } } pub (crate) fn draw_char_full (& self , canvas_item : Rid , pos : Vector2 , char : i64 , font_size : i32 , modulate : Color ,) -> f32 { type CallRet = f32 ; type CallParams = (Rid , Vector2 , i64 , i32 , Color ,) ; let args = (canvas_item , pos , char , font_size , modulate ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (199usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Font" , "draw_char" , self . object_ptr , args ,) } } # [inline] pub fn draw_char (& self , canvas_item : Rid , pos : Vector2 , char : i64 , font_size : i32 ,) -> f32 { self . draw_char_ex (canvas_item , pos , char , font_size ,) . done () } # [inline] pub fn draw_char_ex < 'ex > (& 'ex self , canvas_item : Rid , pos : Vector2 , char : i64 , font_size : i32 ,) -> super :: ExDrawChar < 'ex > { super :: ExDrawChar :: new (self , canvas_item , pos , char , font_size ,) } pub (crate) fn draw_char_outline_full (& self , canvas_item : Rid , pos : Vector2 , char : i64 , font_size : i32 , size : i32 , modulate : Color ,) -> f32 { type CallRet = f32 ; type CallParams = (Rid , Vector2 , i64 , i32 , i32 , Color ,) ; let args = (canvas_item , pos , char , font_size , size , modulate ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (200usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Font" , "draw_char_outline" , self . object_ptr , args ,) } } # [inline] pub fn draw_char_outline (& self , canvas_item : Rid , pos : Vector2 , char : i64 , font_size : i32 ,) -> f32 { self . draw_char_outline_ex (canvas_item , pos , char , font_size ,) . done () } # [inline] pub fn draw_char_outline_ex < 'ex > (& 'ex self , canvas_item : Rid , pos : Vector2 , char : i64 , font_size : i32 ,) -> super :: ExDrawCharOutline < 'ex > { super :: ExDrawCharOutline :: new (self , canvas_item , pos , char , font_size ,) } pub fn has_char (& self , char : i64 ,) -> bool { type CallRet = bool ; type CallParams = (i64 ,) ; let args = (char ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (201usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Font" , "has_char" , self . object_ptr , args ,) } } pub fn get_supported_chars (& self ,) -> GString { type CallRet = GString ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (202usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Font" , "get_supported_chars" , self . object_ptr , args ,) } } pub fn is_language_supported (& self , language : impl AsArg < GString > ,) -> bool { type CallRet = bool ; type CallParams < 'a0 , > = (CowArg < 'a0 , GString > ,) ; let args = (language . into_arg () ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (203usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Font" , "is_language_supported" , self . object_ptr , args ,) } } pub fn is_script_supported (& self , script : impl AsArg < GString > ,) -> bool { type CallRet = bool ; type CallParams < 'a0 , > = (CowArg < 'a0 , GString > ,) ; let args = (script . into_arg () ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (204usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Font" , "is_script_supported" , self . object_ptr , args ,) } } pub fn get_face_count (& self ,) -> i64 { type CallRet = i64 ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (205usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Font" , "get_face_count" , self . object_ptr , args ,) } } } impl crate :: obj :: GodotClass for Font { const CLASS_NAME : & 'static str = "Font" ; type Base = crate :: classes :: Resource ; type Memory = crate :: obj :: MemRefCounted ; const INIT_LEVEL : crate :: init :: InitLevel = crate :: init :: InitLevel :: Scene ; } impl crate :: obj :: EngineClass for Font { fn as_object_ptr (& self) -> sys :: GDExtensionObjectPtr { self . object_ptr } } unsafe impl crate :: obj :: Inherits < crate :: classes :: Resource > for Font { } unsafe impl crate :: obj :: Inherits < crate :: classes :: RefCounted > for Font { } unsafe impl crate :: obj :: Inherits < crate :: classes :: Object > for Font { } impl std :: ops :: Deref for Font { type Target = crate :: classes :: Resource ; fn deref (& self) -> & Self :: Target { unsafe { std :: mem :: transmute :: < & Self , & Self :: Target > (self) } } } impl std :: ops :: DerefMut for Font { fn deref_mut (& mut self) -> & mut Self :: Target { unsafe { std :: mem :: transmute :: < & mut Self , & mut Self :: Target > (self) } } } } # [doc = "Default-param extender for [`Font::get_height_ex`][super::Font::get_height_ex]."] # [must_use] pub struct ExGetHeight < 'ex > { surround_object : & 'ex re_export :: Font , font_size : i32 , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExGetHeight < 'ex > { fn new (surround_object : & 'ex re_export :: Font ,) -> Self { Self { surround_object , font_size : 16i32 , } } # [inline] pub fn font_size (self , value : i32) -> Self { Self { font_size : value , .. self } } # [inline] pub fn done (self) -> f32 { re_export :: Font :: get_height_full (self . surround_object , self . font_size ,) } } # [doc = "Default-param extender for [`Font::get_ascent_ex`][super::Font::get_ascent_ex]."] # [must_use] pub struct ExGetAscent < 'ex > { surround_object : & 'ex re_export :: Font , font_size : i32 , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExGetAscent < 'ex > { fn new (surround_object : & 'ex re_export :: Font ,) -> Self { Self { surround_object , font_size : 16i32 , } } # [inline] pub fn font_size (self , value : i32) -> Self { Self { font_size : value , .. self } } # [inline] pub fn done (self) -> f32 { re_export :: Font :: get_ascent_full (self . surround_object , self . font_size ,) } } # [doc = "Default-param extender for [`Font::get_descent_ex`][super::Font::get_descent_ex]."] # [must_use] pub struct ExGetDescent < 'ex > { surround_object : & 'ex re_export :: Font , font_size : i32 , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExGetDescent < 'ex > { fn new (surround_object : & 'ex re_export :: Font ,) -> Self { Self { surround_object , font_size : 16i32 , } } # [inline] pub fn font_size (self , value : i32) -> Self { Self { font_size : value , .. self } } # [inline] pub fn done (self) -> f32 { re_export :: Font :: get_descent_full (self . surround_object , self . font_size ,) } } # [doc = "Default-param extender for [`Font::get_underline_position_ex`][super::Font::get_underline_position_ex]."] # [must_use] pub struct ExGetUnderlinePosition < 'ex > { surround_object : & 'ex re_export :: Font , font_size : i32 , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExGetUnderlinePosition < 'ex > { fn new (surround_object : & 'ex re_export :: Font ,) -> Self { Self { surround_object , font_size : 16i32 , } } # [inline] pub fn font_size (self , value : i32) -> Self { Self { font_size : value , .. self } } # [inline] pub fn done (self) -> f32 { re_export :: Font :: get_underline_position_full (self . surround_object , self . font_size ,) } } # [doc = "Default-param extender for [`Font::get_underline_thickness_ex`][super::Font::get_underline_thickness_ex]."] # [must_use] pub struct ExGetUnderlineThickness < 'ex > { surround_object : & 'ex re_export :: Font , font_size : i32 , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExGetUnderlineThickness < 'ex > { fn new (surround_object : & 'ex re_export :: Font ,) -> Self { Self { surround_object , font_size : 16i32 , } } # [inline] pub fn font_size (self , value : i32) -> Self { Self { font_size : value , .. self } } # [inline] pub fn done (self) -> f32 { re_export :: Font :: get_underline_thickness_full (self . surround_object , self . font_size ,) } } # [doc = "Default-param extender for [`Font::draw_char_ex`][super::Font::draw_char_ex]."] # [must_use] pub struct ExDrawChar < 'ex > { surround_object : & 'ex re_export :: Font , canvas_item : Rid , pos : Vector2 , char : i64 , font_size : i32 , modulate : Color , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExDrawChar < 'ex > { fn new (surround_object : & 'ex re_export :: Font , canvas_item : Rid , pos : Vector2 , char : i64 , font_size : i32 ,) -> Self { Self { surround_object , canvas_item , pos , char , font_size , modulate : Color :: from_rgba (1 as _ , 1 as _ , 1 as _ , 1 as _) , } } # [inline] pub fn modulate (self , value : Color) -> Self { Self { modulate : value , .. self } } # [inline] pub fn done (self) -> f32 { re_export :: Font :: draw_char_full (self . surround_object , self . canvas_item , self . pos , self . char , self . font_size , self . modulate ,) } } # [doc = "Default-param extender for [`Font::draw_char_outline_ex`][super::Font::draw_char_outline_ex]."] # [must_use] pub struct ExDrawCharOutline < 'ex > { surround_object : & 'ex re_export :: Font , canvas_item : Rid , pos : Vector2 , char : i64 , font_size : i32 , size : i32 , modulate : Color , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExDrawCharOutline < 'ex > { fn new (surround_object : & 'ex re_export :: Font , canvas_item : Rid , pos : Vector2 , char : i64 , font_size : i32 ,) -> Self { Self { surround_object , canvas_item , pos , char , font_size , size : - 1i32 , modulate : Color :: from_rgba (1 as _ , 1 as _ , 1 as _ , 1 as _) , } } # [inline] pub fn size (self , value : i32) -> Self { Self { size : value , .. self } } # [inline] pub fn modulate (self , value : Color) -> Self { Self { modulate : value , .. self } } # [inline] pub fn done (self) -> f32 { re_export :: Font :: draw_char_outline_full (self . surround_object , self . canvas_item , self . pos , self . char , self . font_size , self . size , self . modulate ,) } } # [doc = "Properties declared by [`Font`][super::Font], as interned engine names."] pub struct PropertyName ; impl PropertyName { pub const FALLBACKS : InternedName = InternedName :: new ("fallbacks") ; } # [doc = "Methods declared by [`Font`][super::Font], as interned engine names."] pub struct MethodName ; impl MethodName { pub const GET_HEIGHT : InternedName = InternedName :: new ("get_height") ; pub const GET_ASCENT : InternedName = InternedName :: new ("get_ascent") ; pub const GET_DESCENT : InternedName = InternedName :: new ("get_descent") ; pub const GET_UNDERLINE_POSITION : InternedName = InternedName :: new ("get_underline_position") ; pub const GET_UNDERLINE_THICKNESS : InternedName = InternedName :: new ("get_underline_thickness") ; pub const GET_FONT_NAME : InternedName = InternedName :: new ("get_font_name") ; pub const GET_FONT_STYLE_NAME : InternedName = InternedName :: new ("get_font_style_name") ; pub const GET_FONT_WEIGHT : InternedName = InternedName :: new ("get_font_weight") ; pub const GET_FONT_STRETCH : InternedName = InternedName :: new ("get_font_stretch") ; pub const SET_CACHE_CAPACITY : InternedName = InternedName :: new ("set_cache_capacity") ; pub const GET_CHAR_SIZE : InternedName = InternedName :: new ("get_char_size") ; pub const DRAW_CHAR : InternedName = InternedName :: new ("draw_char") ; pub const DRAW_CHAR_OUTLINE : InternedName = InternedName :: new ("draw_char_outline") ; pub const HAS_CHAR : InternedName = InternedName :: new ("has_char") ; pub const GET_SUPPORTED_CHARS : InternedName = InternedName :: new ("get_supported_chars") ; pub const IS_LANGUAGE_SUPPORTED : InternedName = InternedName :: new ("is_language_supported") ; pub const IS_SCRIPT_SUPPORTED : InternedName = InternedName :: new ("is_script_supported") ; pub const GET_FACE_COUNT : InternedName = InternedName :: new ("get_face_count") ; } # [doc = "Signals declared by [`Font`][super::Font], as interned engine names."] pub struct SignalName ; impl SignalName { }