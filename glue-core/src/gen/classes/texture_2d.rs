# ! [doc = "Sidecar module for class [`Texture2D`][crate::classes::Texture2D]."] # [allow (unused_imports)] use crate :: builtin :: * ; # [allow (unused_imports)] use crate :: meta :: { AsArg , AsObjectArg , CowArg , InternedName , ObjectArg , Signature } ; # [allow (unused_imports)] use crate :: obj :: Gd ; # [allow (unused_imports)] use crate :: signal :: { SignalObject , TypedSignal } ; use crate :: sys ; pub (super) mod re_export { use super :: * ; # [doc = "Godot class `Texture2D`.\n\nInherits [`Texture`][crate::classes::Texture].\n\nRelated symbols (default-param builders, enums, interned names, signals) are in [`texture_2d`][crate::classes::texture_2d]."] # [derive (Debug)] # [repr (C)] pub struct Texture2D { object_ptr : sys :: GDExtensionObjectPtr , } impl Texture2D { pub fn get_width (& self ,) -> i32 { type CallRet = i32 ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (592usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Texture2D" , "get_width" , self . object_ptr , args ,) } } pub fn get_height (& self ,) -> i32 { type CallRet = i32 ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (593usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Texture2D" , "get_height" , self . object_ptr , args ,) } } pub fn get_size (& self ,) -> Vector2 { type CallRet = Vector2 ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (594usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Texture2D" , "get_size" , self . object_ptr , args ,) } } pub fn has_alpha (& self ,) -> bool { type CallRet = bool ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (595usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Texture2D" , "has_alpha" , self . object_ptr , args ,) } } pub (crate) fn draw_full (& self , canvas_item : Rid , position : Vector2 , modulate : Color , transpose : bool ,) { type CallRet = () ; type CallParams = (Rid , Vector2 , Color , bool ,) ; let args = (canvas_item , position , modulate , transpose ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (596usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Texture2D" , "draw" , self . object_ptr , args ,) } } # [inline] pub fn draw (& self , canvas_item : Rid , position : Vector2 ,) { self . draw_ex (canvas_item , position ,) . done () } # [inline] pub fn draw_ex < 'ex > (& 'ex self , canvas_item : Rid , position : Vector2 ,) -> super :: ExDraw < 'ex > { super :: ExDraw :: new (self , canvas_item , position ,) } pub (crate) fn draw_rect_full (& self , canvas_item : Rid , rect : Rect2 , tile : bool , modulate : Color , transpose : bool ,) { type CallRet = () ; type CallParams = (Rid , Rect2 , bool , Color , bool ,) ; let args = (canvas_item , rect , tile , modulate , transpose ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (597usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Texture2D" , "draw_rect" , self . object_ptr , args ,) } } # [inline] pub fn draw_rect (& self , canvas_item : Rid , rect : Rect2 , tile : bool ,) { self . draw_rect_ex (canvas_item , rect , tile ,) . done () } # [inline] pub fn draw_rect_ex < 'ex > (& 'ex self , canvas_item : Rid , rect : Rect2 , tile : bool ,) -> super :: ExDrawRect < 'ex > { super :: ExDrawRect :: new (self , canvas_item , rect , tile ,) } pub (crate) fn draw_rect_region_full (& self , canvas_item : Rid , rect : Rect2 , src_rect : Rect2 , modulate : Color , transpose : bool , clip_uv : bool ,) { type CallRet = () ; type CallParams = (Rid , Rect2 , Rect2 , Color , bool , bool ,) ; let args = (canvas_item , rect , src_rect , modulate , transpose , clip_uv ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (598usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Texture2D" , "draw_rect_region" , self . object_ptr , args ,) } } # [inline] pub fn draw_rect_region (& self , canvas_item : Rid , rect : Rect2 , src_rect : Rect2 ,) { self . draw_rect_region_ex (canvas_item , rect , src_rect ,) . done () } # [inline] pub fn draw_rect_region_ex < 'ex > (& 'ex self , canvas_item : Rid , rect : Rect2 , src_rect : Rect2 ,) -> super :: ExDrawRectRegion < 'ex > { super :: ExDrawRectRegion :: new (self , canvas_item , rect , src_rect ,) } pub fn create_placeholder (& self ,) -> Option < Gd < crate :: classes :: Resource > > { type CallRet = Option < Gd < crate :: classes :: Resource > > ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (599usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Texture2D" , "create_placeholder" , self . object_ptr , args ,) } } } impl crate :: obj :: GodotClass for Texture2D { const CLASS_NAME : & 'static str = "Texture2D" ; type Base = crate :: classes :: Texture ; type Memory = crate :: obj :: MemRefCounted ; const INIT_LEVEL : crate :: init :: InitLevel = crate :: init :: InitLevel :: Scene ; } impl crate :: obj :: EngineClass for Texture2D { fn as_object_ptr (& self) -> sys :: GDExtensionObjectPtr { self . object_ptr } } unsafe impl crate :: obj :: Inherits < crate :: classes :: Texture > for Texture2D { } unsafe impl crate :: obj :: Inherits < crate :: classes :: Resource > for Texture2D { } unsafe impl crate :: obj :: Inherits < crate :: classes :: RefCounted > for Texture2D { } unsafe impl crate :: obj :: Inherits < crate :: classes :: Object > for Texture2D { } impl std :: ops :: Deref for Texture2D { type Target = crate :: classes :: Texture ; fn deref (& self) -> & Self :: Target { unsafe { std :: mem :: transmute :: < & Self , & Self :: Target > (self) } } } impl std :: ops :: DerefMut for Texture2D { fn deref_mut (& mut self) -> & mut Self :: Target { unsafe { std :: mem :: transmute :: < & mut Self , & mut Self :: Target > (self) } } } } # [doc = "Default-param extender for [`Texture2D::draw_ex`][super::Texture2D::draw_ex]."] # [must_use] pub struct ExDraw < 'ex > { surround_object : & 'ex re_export :: Texture2D , canvas_item : Rid , position : Vector2 , modulate : Color , transpose : bool , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExDraw < 'ex > { fn new (surround_object : & 'ex re_export :: Texture2D , canvas_item : Rid , position : Vector2 ,) -> Self { Self { surround_object , canvas_item , position , modulate : Color :: from_rgba (1 as _ , 1 as _ , 1 as _ , 1 as _) , transpose : false , } } # [inline] pub fn modulate (self , value : Color) -> Self { Self { modulate : value , .. self } } # [inline] pub fn transpose (self , value : bool) -> Self { Self { transpose : value , .. self } } # [inline] pub fn done (self) { re_export :: Texture2D :: draw_full (self . surround_object , self . canvas_item , self . position , self . modulate , self . transpose ,) } } # [doc = "Default-param extender for [`Texture2D::draw_rect_ex`][super::Texture2D::draw_rect_ex]."] # [must_use] pub struct ExDrawRect < 'ex > { surround_object : & 'ex re_export :: Texture2D , canvas_item : Rid , rect : Rect2 , tile : bool , modulate : Color , transpose : bool , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExDrawRect < 'ex > { fn new (surround_object : & 'ex re_export :: Texture2D , canvas_item : Rid , rect : Rect2 , tile : bool ,) -> Self { Self { surround_object , canvas_item , rect , tile , modulate : Color :: from_rgba (1 as _ , 1 as _ , 1 as _ , 1 as _) , transpose : false , } } # [inline] pub fn modulate (self , value : Color) -> Self { Self { modulate : value , .. self } } # [inline] pub fn transpose (self , value : bool) -> Self { Self { transpose : value , .. self } } # [inline] pub fn done (self) { re_export :: Texture2D :: draw_rect_full (self . surround_object , self . canvas_item , self . rect , self . tile , self . modulate , self . transpose ,) } } # [doc = "Default-param extender for [`Texture2D::draw_rect_region_ex`][super::Texture2D::draw_rect_region_ex]."] # [must_use] pub struct ExDrawRectRegion < 'ex > { surround_object : & 'ex re_export :: Texture2D , canvas_item : Rid , rect : Rect2 , src_rect : Rect2 , modulate : Color , transpose : bool , clip_uv : bool , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExDrawRectRegion < 'ex > { fn new (surround_object : & 'ex re_export :: Texture2D , canvas_item : Rid , rect : Rect2 , src_rect : Rect2 ,) -> Self { Self { surround_object , canvas_item , rect , src_rect , modulate : Color :: from_rgba (1 as _ , 1 as _ , 1 as _ , 1 as _) , transpose : false , clip_uv : true , } } # [inline] pub fn modulate (self , value : Color) -> Self { Self { modulate : value , .. self } } # [inline] pub fn transpose (self , value : bool) -> Self { Self { transpose : value , .. self } } # [inline] pub fn clip_uv (self , value : bool) -> Self { Self { clip_uv : value , .. self } } # [inline] pub fn done (self) { re_export :: Texture2D :: draw_rect_region_full (self . surround_object , self . canvas_item , self . rect , self . src_rect , self . modulate , self . transpose , self . clip_uv ,) } } # [doc = "Properties declared by [`Texture2D`][super::Texture2D], as interned engine names."] pub struct PropertyName ; impl PropertyName { } # [doc = "Methods declared by [`Texture2D`][super::Texture2D], as interned engine names."] pub struct MethodName ; impl MethodName { pub const GET_WIDTH : InternedName = InternedName :: new ("get_width") ; pub const GET_HEIGHT : InternedName = InternedName :: new ("get_height") ; pub const GET_SIZE : InternedName = InternedName :: new ("get_size") ; pub const HAS_ALPHA : InternedName = InternedName :: new ("has_alpha") ; pub const DRAW : InternedName = InternedName :: new ("draw") ; pub const DRAW_RECT : InternedName = InternedName :: new ("draw_rect") ; pub const DRAW_RECT_REGION : InternedName = InternedName :: new ("draw_rect_region") ; pub const CREATE_PLACEHOLDER : InternedName = InternedName :: new ("create_placeholder") ; } # [doc = "Signals declared by [`Texture2D`][super::Texture2D], as interned engine names."] pub struct SignalName ; impl SignalName { }