# ! [doc = "Sidecar module for class [`CanvasItem`][crate::classes::CanvasItem]."] # [allow (unused_imports)] use crate :: builtin :: * ; # [allow (unused_imports)] use crate :: meta :: { AsArg , AsObjectArg , CowArg , InternedName , ObjectArg , Signature } ; # [allow (unused_imports)] use crate :: obj :: Gd ; # [allow (unused_imports)] use crate :: signal :: { SignalObject , TypedSignal } ; use crate :: sys ; pub (super) mod re_export { use super :: * ; # [doc = "Godot class `CanvasItem`.\n\nInherits [`Node`][crate::classes::Node].\n\nRelated symbols (default-param builders, enums, interned names, signals) are in [`canvas_item`][crate::classes::canvas_item]."] # [derive (Debug)] # [repr (C)] pub struct CanvasItem { object_ptr : sys :: GDExtensionObjectPtr , } impl CanvasItem { pub fn get_canvas_item (& self ,) -> Rid { type CallRet = Rid ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (0usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "CanvasItem" , "get_canvas_item" , self . object_ptr , args ,) } } pub fn set_visible (& mut self , visible : bool ,) { type CallRet = () ; type CallParams = (bool ,) ; let args = (visible ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (1usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "CanvasItem" , "set_visible" , self . object_ptr , args ,) } } pub fn is_visible (& self ,) -> bool { type CallRet = bool ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (2usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "CanvasItem" , "is_visible" , self . object_ptr , args ,) } } pub fn is_visible_in_tree (& self ,) -> bool { type CallRet = bool ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (3usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "CanvasItem" , "is_visible_in_tree" , self . object_ptr , args ,) } } pub fn show (& mut self ,) { type CallRet = () ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (4usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "CanvasItem" , "show" , self . object_ptr , args ,) } } pub fn hide (& mut self ,) { type CallRet = () ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (5usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "CanvasItem" , "hide" , self . object_ptr , args ,) } } pub fn queue_redraw (& mut self ,) { type CallRet = () ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (6usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "CanvasItem" , "queue_redraw" , self . object_ptr , args ,) } } pub fn move_to_front (& mut self ,) { type CallRet = () ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (7usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "CanvasItem" , "move_to_front" , self . object_ptr , args ,) } } pub fn set_as_top_level (& mut self , enable : bool ,) { type CallRet = () ; type CallParams = (bool ,) ; let args = (enable ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (8usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "CanvasItem" , "set_as_top_level" , self . object_ptr , args ,) } } pub fn is_set_as_top_level (& self ,) -> bool { type CallRet = bool ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (9usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "CanvasItem" , "is_set_as_top_level" , self . object_ptr , args ,) } } pub fn set_light_mask (& mut self , light_mask : i32 ,) { type CallRet = () ; type CallParams = (i32 ,) ; let args = (light_mask ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (10usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "CanvasItem" , "set_light_mask" , self . object_ptr , args ,) } } pub fn get_light_mask (& self ,) -> i32 { type CallRet = i32 ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (11usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "CanvasItem" , "get_light_mask" , self . object_ptr , args ,) } } pub fn set_modulate (& mut self , modulate : Color ,) { type CallRet = () ; type CallParams = (Color ,) ; let args = (modulate ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (12usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "CanvasItem" , "set_modulate" , self . object_ptr , args ,) } } pub fn get_modulate (& self ,) -> Color { type CallRet = Color ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (13usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "CanvasItem" , "get_modulate" , self . object_ptr , args ,) } } pub fn set_self_modulate (& mut self , self_modulate : Color ,) { type CallRet = () ; type CallParams = (Color ,) ; let args = (self_modulate ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (14usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "CanvasItem" , "set_self_modulate" , self . object_ptr , args ,) } } pub fn get_self_modulate (& self ,) -> Color { type CallRet = Color ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (15usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "CanvasItem" , "get_self_modulate" , self . object_ptr , args ,) } } pub fn set_z_index (& mut self , z_index : i32 ,) { type CallRet = () ; type CallParams = (i32 ,) ; let args = (z_index ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (16usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "CanvasItem" , "set_z_index" , self . object_ptr , args ,) } } pub fn get_z_index (& self ,) -> i32 { type CallRet = i32 ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (17usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "CanvasItem" , "get_z_index" , self . object_ptr , args ,) } } pub fn set_z_as_relative (& mut self , enable : bool ,) { type CallRet = () ; type CallParams = (bool ,) ; let args = (enable ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (18usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "CanvasItem" , "set_z_as_relative" , self . object_ptr , args ,) } } pub fn is_z_relative (& self ,) -> bool { type CallRet = bool ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (19usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "CanvasItem" , "is_z_relative" , self . object_ptr , args ,) } } pub fn set_y_sort_enabled (& mut self , enabled : bool ,) { type CallRet = () ; type CallParams = (bool ,) ; let args = (enabled ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (20usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "CanvasItem" , "set_y_sort_enabled" , self . object_ptr , args ,) } } pub fn is_y_sort_enabled (& self ,) -> bool { type CallRet = bool ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (21usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "CanvasItem" , "is_y_sort_enabled" , self . object_ptr , args ,) } } pub fn set_draw_behind_parent (& mut self , enable : bool ,) { type CallRet = () ; type CallParams = (bool ,) ; let args = (enable ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (22usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "CanvasItem" , "set_draw_behind_parent" , self . object_ptr , args ,) } } pub fn is_draw_behind_parent_enabled (& self ,) -> bool { type CallRet = bool ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (23usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "CanvasItem" , "is_draw_behind_parent_enabled" , self . object_ptr , args ,) } } pub (crate) fn draw_line_full (& mut self , from : Vector2 , to : Vector2 , color : Color , width : f32 , antialiased : bool ,) { type CallRet = () ; type CallParams = (Vector2 , Vector2 , Color , f32 , bool ,) ; let args = (from , to , color , width , antialiased ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (24usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "CanvasItem" , "draw_line" , self . object_ptr , args ,) } } # [inline] pub fn draw_line (& mut self , from : Vector2 , to : Vector2 , color : Color ,) { self . draw_line_ex (from , to , color ,) . done () } # [inline] pub fn draw_line_ex < 'ex > (& 'ex mut self , from : Vector2 , to : Vector2 , color : Color ,) -> super :: ExDrawLine < 'ex > { super :: ExDrawLine :: new (self , from , to , color ,) } pub (crate) fn draw_dashed_line_full (& mut self , from : Vector2 , to : Vector2 , color : Color , width : f32 , dash : f32 , aligned : bool , antialiased : bool ,) { type CallRet = () ; type CallParams = (Vector2 , Vector2 , Color , f32 , f32 , bool , bool ,) ; let args = (from , to , color , width , dash , aligned , antialiased ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (25usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "CanvasItem" , "draw_dashed_line" , self . object_ptr , args ,) } } # [inline] pub fn draw_dashed_line (& mut self , from : Vector2 , to : Vector2 , color : Color ,) { self . draw_dashed_line_ex (from , to , color ,) . done () } # [inline] pub fn draw_dashed_line_ex < 'ex > (& 'ex mut self , from : Vector2 , to : Vector2 , color : Color ,) -> super :: ExDrawDashedLine < 'ex > { super :: ExDrawDashedLine :: new (self , from , to , color ,) } pub (crate) fn draw_arc_full (& mut self , center : Vector2 , radius : f32 , start_angle : f32 , end_angle : f32 , point_count : i32 , color : Color , width : f32 , antialiased : bool ,) { type CallRet = () ; type CallParams = (Vector2 , f32 , f32 , f32 , i32 , Color , f32 , bool ,) ; let args = (center , radius , start_angle , end_angle , point_count , color , width , antialiased ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (26usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "CanvasItem" , "draw_arc" , self . object_ptr , args ,) } } # [inline] pub fn draw_arc (& mut self , center : Vector2 , radius : f32 , start_angle : f32 , end_angle : f32 , point_count : i32 , color : Color ,) { self . draw_arc_ex (center , radius , start_angle , end_angle , point_count , color ,) . done () } # [inline] pub fn draw_arc_ex < 'ex > (& 'ex mut self , center : Vector2 , radius : f32 , start_angle : f32 , end_angle : f32 , point_count : i32 , color : Color ,) -> super :: ExDrawArc < 'ex > { super :: ExDrawArc :: new (self , center , radius , start_angle , end_angle , point_count , color ,) } pub (crate) fn draw_rect_full (& mut self , rect : Rect2 , color : Color , filled : bool , width : f32 , antialiased : bool ,) { type CallRet = () ; type CallParams = (Rect2 , Color , bool , f32 , bool ,) ; let args = (rect , color , filled , width , antialiased ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (27usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "CanvasItem" , "draw_rect" , self . object_ptr , args ,) } } # [inline] pub fn draw_rect (& mut self , rect : Rect2 , color : Color ,) { self . draw_rect_ex (rect , color ,) . done () } # [inline] pub fn draw_rect_ex < 'ex > (& 'ex mut self , rect : Rect2 , color : Color ,) -> super :: ExDrawRect < 'ex > { super :: ExDrawRect :: new (self , rect , color ,) } pub (crate) fn draw_circle_full (& mut self , position : Vector2 , radius : f32 , color : Color , filled : bool , width : f32 , antialiased : bool ,) { type CallRet = () ; type CallParams = (Vector2 , f32 , Color , bool , f32 , bool ,) ; let args = (position , radius , color , filled , width , antialiased ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (28usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "CanvasItem" , "draw_circle" , self . object_ptr , args ,) } } # [inline] pub fn draw_circle (& mut self , position : Vector2 , radius : f32 , color : Color ,) { self . draw_circle_ex (position , radius , color ,) . done () } # [inline] pub fn draw_circle_ex < 'ex > (& 'ex mut self , position : Vector2 , radius : f32 , color : Color ,) -> super :: ExDrawCircle < 'ex > { super :: ExDrawCircle :: new (self , position , radius , color ,) } pub (crate) fn draw_texture_full (& mut self , texture : ObjectArg < crate :: classes :: Texture2D > , position : Vector2 , modulate : Color ,) { type CallRet = () ; type CallParams = (ObjectArg < crate :: classes :: Texture2D > , Vector2 , Color ,) ; let args = (texture , position , modulate ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (29usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "CanvasItem" , "draw_texture" , self . object_ptr , args ,) } } # [inline] pub fn draw_texture (& mut self , texture : impl AsObjectArg < crate :: classes :: Texture2D > , position : Vector2 ,) { self . draw_texture_ex (texture , position ,) . done () } # [inline] pub fn draw_texture_ex < 'ex > (& 'ex mut self , texture : impl AsObjectArg < crate :: classes :: Texture2D > , position : Vector2 ,) -> super :: ExDrawTexture < 'ex > { super :: ExDrawTexture :: new (self , texture . as_object_arg () , position ,) } pub (crate) fn draw_texture_rect_full (& mut self , texture : ObjectArg < crate :: classes :: Texture2D > , rect : Rect2 , tile : bool , modulate : Color , transpose : bool ,) { type CallRet = () ; type CallParams = (ObjectArg < crate :: classes :: Texture2D > , Rect2 , bool , Color , bool ,) ; let args = (texture , rect , tile , modulate , transpose ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (30usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "CanvasItem" , "draw_texture_rect" , self . object_ptr , args ,) } } # [inline] pub fn draw_texture_rect (& mut self , texture : impl AsObjectArg < crate :: classes :: Texture2D > , rect : Rect2 , tile : bool ,) { self . draw_texture_rect_ex (texture , rect , tile ,) . done () } # [inline] pub fn draw_texture_rect_ex < 'ex > (& 'ex mut self , texture : impl AsObjectArg < crate :: classes :: Texture2D > , rect : Rect2 , tile : bool ,) -> super :: ExDrawTextureRect < 'ex > { super :: ExDrawTextureRect :: new (self , texture . as_object_arg () , rect , tile ,) } pub (crate) fn draw_texture_rect_region_full (& mut self , texture : ObjectArg < crate :: classes :: Texture2D > , rect : Rect2 , src_rect : Rect2 , modulate : Color , transpose : bool , clip_uv : bool ,) { type CallRet = () ; type CallParams = (ObjectArg < crate :: classes :: Texture2D > , Rect2 , Rect2 , Color , bool , bool ,) ; let args = (texture , rect , src_rect , modulate , transpose , clip_uv ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (31usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "CanvasItem" , "draw_texture_rect_region" , self . object_ptr , args ,) } } # [inline] pub fn draw_texture_rect_region (& mut self , texture : impl AsObjectArg < crate :: classes :: Texture2D > , rect : Rect2 , src_rect : Rect2 ,) { self . draw_texture_rect_region_ex (texture , rect , src_rect ,) . done () } # [inline] pub fn draw_texture_rect_region_ex < 'ex > (& 'ex mut self , texture : impl AsObjectArg < crate :: classes :: Texture2D > , rect : Rect2 , src_rect : Rect2 ,) -> super :: ExDrawTextureRectRegion < 'ex > { super :: ExDrawTextureRectRegion :: new (self , texture . as_object_arg () , rect , src_rect ,) } pub (crate) fn draw_msdf_texture_rect_region_full (& mut self , texture : ObjectArg < crate :: classes :: Texture2D > , rect : Rect2 , src_rect : Rect2 , modulate : Color , outline : f64 , pixel_range : f64 , scale : f64 ,) { type CallRet = () ; type CallParams = (ObjectArg < crate :: classes :: Texture2D > , Rect2 , Rect2 , Color , f64 , f64 , f64 ,) ; let args = (texture , rect , src_rect , modulate , outline , pixel_range , scale ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (32usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "CanvasItem" , "draw_msdf_texture_rect_region" , self . object_ptr , args ,) } } # [inline] pub fn draw_msdf_texture_rect_region (& mut self , texture : impl AsObjectArg < crate :: classes :: Texture2D > , rect : Rect2 , src_rect : Rect2 ,) { self . draw_msdf_texture_rect_region_ex (texture , rect , src_rect ,) . done () } # [inline] pub fn draw_msdf_texture_rect_region_ex < 'ex > (& 'ex mut self , texture : impl AsObjectArg < crate :: classes :: Texture2D > , rect : Rect2 , src_rect : Rect2 ,) -> super :: ExDrawMsdfTextureRectRegion < 'ex > { super :: ExDrawMsdfTextureRectRegion :: new (self , texture . as_object_arg () , rect , src_rect ,) } pub (crate) fn draw_lcd_texture_rect_region_full (& mut self , texture : ObjectArg < crate :: classes :: Texture2D > , rect : Rect2 , src_rect : Rect2 , modulate : Color ,) { type CallRet = () ; type CallParams = (ObjectArg < crate :: classes :: Texture2D > , Rect2 , Rect2 , Color ,) ; let args = (texture , rect , src_rect , modulate ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (33usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "CanvasItem" , "draw_lcd_texture_rect_region" , self . object_ptr , args ,) } } # [inline] pub fn draw_lcd_texture_rect_region (& mut self , texture : impl AsObjectArg < crate :: classes :: Texture2D > , rect : Rect2 , src_rect : Rect2 ,) { self . draw_lcd_texture_rect_region_ex (texture , rect , src_rect ,) . done () } # [inline] pub fn draw_lcd_texture_rect_region_ex < 'ex > (& 'ex mut self , texture : impl AsObjectArg < crate :: classes :: Texture2D > , rect : Rect2 , src_rect : Rect2 ,) -> super :: ExDrawLcdTextureRectRegion < 'ex > { super :: ExDrawLcdTextureRectRegion :: new (self , texture . as_object_arg () , rect , src_rect ,) } pub (crate) fn draw_char_full (& self , font : ObjectArg < crate :: classes :: Font > , pos : Vector2 , char : CowArg < '_ , GString > , font_size : i32 , modulate : Color ,) { type CallRet = () ; type CallParams < 'a0 , > = (ObjectArg < crate :: classes :: Font > , Vector2 , CowArg < 'a0 , GString > , i32 , Color ,) ; let args = (font , pos , char , font_size , modulate ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (34usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "CanvasItem" , "draw_char" , self . object_ptr , args ,) } } # [inline] pub fn draw_char (& self , font : impl AsObjectArg < crate :: classes :: Font > , pos : Vector2 , char : impl AsArg < GString > ,) { self . draw_char_ex (font , pos , char ,) . done () } # [inline] pub fn draw_char_ex < 'ex > (& 'ex self , font : impl AsObjectArg < crate :: classes :: Font > , pos : Vector2 , char : impl AsArg < GString > + 'ex ,) -> super :: ExDrawChar < 'ex > { super :: ExDrawChar :: new (self , font . as_object_arg () , pos , char . into_arg () ,) } pub (crate) fn draw_char_outline_full (& self , font : ObjectArg < crate :: classes :: Font > , pos : Vector2 , char : CowArg < '_ , GString > , font_size : i32 , size : i32 , modulate : Color ,) { type CallRet = () ; type CallParams < 'a0 , > = (ObjectArg < crate :: classes :: Font > , Vector2 , CowArg < 'a0 , GString > , i32 , i32 , Color ,) ; let args = (font , pos , char , font_size , size , modulate ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (35usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "CanvasItem" , "draw_char_outline" , self . object_ptr , args ,) } } # [inline] pub fn draw_char_outline (& self , font : impl AsObjectArg < crate :: classes :: Font > , pos : Vector2 , char : impl AsArg < GString > ,) { self . draw_char_outline_ex (font , pos , char ,) . done () } # [inline] pub fn draw_char_outline_ex < 'ex > (& 'ex self , font : impl AsObjectArg < crate :: classes :: Font > , pos : Vector2 , char : impl AsArg < GString > + 'ex ,) -> super :: ExDrawCharOutline < 'ex > { super :: ExDrawCharOutline :: new (self , font . as_object_arg () , pos , char . into_arg () ,) } pub (crate) fn draw_set_transform_full (& mut self , position : Vector2 , rotation : f32 , scale : Vector2 ,) { type CallRet = () ; type CallParams = (Vector2 , f32 , Vector2 ,) ; let args = (position , rotation , scale ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (36usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "CanvasItem" , "draw_set_transform" , self . object_ptr , args ,) } } # [inline] pub fn draw_set_transform (& mut self , position : Vector2 ,) { self . draw_set_transform_ex (position ,) . done () } # [inline] pub fn draw_set_transform_ex < 'ex > (& 'ex mut self , position : Vector2 ,) -> super :: ExDrawSetTransform < 'ex > { super :: ExDrawSetTransform :: new (self , position ,) } pub (crate) fn draw_animation_slice_full (& mut self , animation_length : f64 , slice_begin : f64 , slice_end : f64 , offset : f64 ,) { type CallRet = () ; type CallParams = (f64 , f64 , f64 , f64 ,) ; let args = (animation_length , slice_begin , slice_end , offset ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (37usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "CanvasItem" , "draw_animation_slice" , self . object_ptr , args ,) } } # [inline] pub fn draw_animation_slice (& mut self , animation_length : f64 , slice_begin : f64 , slice_end : f64 ,) { self . draw_animation_slice_ex (animation_length , slice_begin , slice_end ,) . done () } # [inline] pub fn draw_animation_slice_ex < 'ex > (& 'ex mut self , animation_length : f64 , slice_begin : f64 , slice_end : f64 ,) -> super :: ExDrawAnimationSlice < 'ex > { super :: ExDrawAnimationSlice :: new (self , animation_length , slice_begin , slice_end ,) } pub fn draw_end_animation (& mut self ,) { type CallRet = () ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (38usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "CanvasItem" , "draw_end_animation" , self . object_ptr , args ,) } } pub fn get_viewport_rect (& self ,) -> Rect2 { type CallRet = Rect2 ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (39usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "CanvasItem" , "get_viewport_rect" , self . object_ptr , args ,) } } pub fn get_local_mouse_position (& self ,) -> Vector2 { type CallRet = Vector2 ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (40usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "CanvasItem" , "get_local_mouse_position" , self . object_ptr , args ,) } } pub fn get_global_mouse_position (& self ,) -> Vector2 { type CallRet = Vector2 ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (41usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "CanvasItem" , "get_global_mouse_position" , self . object_ptr , args ,) } } pub fn get_canvas (& self ,) -> Rid { type CallRet = Rid ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (42usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "CanvasItem" , "get_canvas" , self . object_ptr , args ,) } } pub fn set_use_parent_material (& mut self , enable : bool ,) { type CallRet = () ; type CallParams = (bool ,) ; let args = (enable ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (43usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "CanvasItem" , "set_use_parent_material" , self . object_ptr , args ,) } } pub fn get_use_parent_material (& self ,) -> bool { type CallRet = bool ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (44usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "CanvasItem" , "get_use_parent_material" , self . object_ptr , args ,) } } pub fn set_notify_local_transform (& mut self , enable : bool ,) { type CallRet = () ; type CallParams = (bool ,) ; let args = (enable ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (45usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "CanvasItem" , "set_notify_local_transform" , self . object_ptr , args ,) } } pub fn is_local_transform_notification_enabled (& self ,) -> bool { type CallRet = bool ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (46usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "CanvasItem" , "is_local_transform_notification_enabled" , self . object_ptr , args ,) } } pub fn set_notify_transform (& mut self , enable : bool ,) { type CallRet = () ; type CallParams = (bool ,) ; let args = (enable ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (47usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "CanvasItem" , "set_notify_transform" , self . object_ptr , args ,) } } pub fn is_transform_notification_enabled (& self ,) -> bool { type CallRet = bool ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (48usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "CanvasItem" , "is_transform_notification_enabled" , self . object_ptr , args ,) } } pub fn force_update_transform (& mut self ,) { type CallRet = () ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (49usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "CanvasItem" , "force_update_transform" , self . object_ptr , args ,) } } pub fn make_canvas_position_local (& self , screen_point : Vector2 ,) -> Vector2 { type CallRet = Vector2 ; type CallParams = (Vector2 ,) ; let args = (screen_point ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (50usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "CanvasItem" , "make_canvas_position_local" , self . object_ptr , args ,) } } pub fn make_input_local (& self , event : impl AsObjectArg < crate :: classes :: InputEvent > ,) -> Option < Gd < crate :: classes :: InputEvent > > { type CallRet = Option < Gd < crate :: classes :: InputEvent > > ; type CallParams = (ObjectArg < crate :: classes :: InputEvent > ,) ; let args = (event . as_object_arg () ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (51usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "CanvasItem" , "make_input_local" , self . object_ptr , args ,) } } pub fn set_visibility_layer (& mut self , layer : u32 ,) { type CallRet = () ; type CallParams = (u32 ,) ; let args = (layer ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (52usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "CanvasItem" , "set_visibility_layer" , self . object_ptr , args ,) } } pub fn get_visibility_layer (& self ,) -> u32 { type CallRet = u32 ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (53usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "CanvasItem" , "get_visibility_layer" , self . object_ptr , args ,) } } pub fn set_visibility_layer_bit (& mut self , layer : u32 , enabled : bool ,) { type CallRet = () ; type CallParams = (u32 , bool ,) ; let args = (layer , enabled ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (54usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "CanvasItem" , "set_visibility_layer_bit" , self . object_ptr , args ,) } } pub fn get_visibility_layer_bit (& self , layer : u32 ,) -> bool { type CallRet = bool ; type CallParams = (u32 ,) ; let args = (layer ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (55usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "CanvasItem" , "get_visibility_layer_bit" , self . object_ptr , args ,) } } pub fn set_texture_filter (& mut self , mode : crate :: classes :: canvas_item :: TextureFilter ,) { type CallRet = () ; type CallParams = (crate :: classes :: canvas_item :: TextureFilter ,) ; let args = (mode ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (56usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "CanvasItem" , "set_texture_filter" , self . object_ptr , args ,) } } pub fn get_texture_filter (& self ,) -> crate :: classes :: canvas_item :: TextureFilter { type CallRet = crate :: classes :: canvas_item :: TextureFilter ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (57usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "CanvasItem" , "get_texture_filter" , self . object_ptr , args ,) } } pub fn set_texture_repeat (& mut self , mode : crate :: classes :: canvas_item :: TextureRepeat ,) { type CallRet = () ; type CallParams = (crate :: classes :: canvas_item :: TextureRepeat ,) ; let args = (mode ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (58usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "CanvasItem" , "set_texture_repeat" , self . object_ptr , args ,) } } pub fn get_texture_repeat (& self ,) -> crate :: classes :: canvas_item :: TextureRepeat { type CallRet = crate :: classes :: canvas_item :: TextureRepeat ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (59usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "CanvasItem" , "get_texture_repeat" , self . object_ptr , args ,) } } pub fn set_clip_children_mode (& mut self , mode : crate :: classes :: canvas_item :: ClipChildrenMode ,) { type CallRet = () ; type CallParams = (crate :: classes :: canvas_item :: ClipChildrenMode ,) ; let args = (mode ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (60usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "CanvasItem" , "set_clip_children_mode" , self . object_ptr , args ,) } } pub fn get_clip_children_mode (& self ,) -> crate :: classes :: canvas_item :: ClipChildrenMode { type CallRet = crate :: classes :: canvas_item :: ClipChildrenMode ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (61usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "CanvasItem" , "get_clip_children_mode" , self . object_ptr , args ,) } } # [doc = "Typed signals of this class and its bases; see [`SignalsOfCanvasItem`][super::canvas_item::SignalsOfCanvasItem]."] pub fn signals (& mut self) -> super :: SignalsOfCanvasItem < '_ > { super :: SignalsOfCanvasItem :: __new (crate :: signal :: SignalObject :: __new (self . object_ptr)) } pub const NOTIFICATION_TRANSFORM_CHANGED : i32 = 2000i32 ; pub const NOTIFICATION_LOCAL_TRANSFORM_CHANGED : i32 = 35i32 ; pub const NOTIFICATION_DRAW : i32 = 30i32 ; pub const NOTIFICATION_VISIBILITY_CHANGED : i32 = 31i32 ; pub const NOTIFICATION_ENTER_CANVAS : i32 = 32i32 ; pub const NOTIFICATION_EXIT_CANVAS : i32 = 33i32 ; pub const NOTIFICATION_WORLD_2D_CHANGED : i32 = 36i32 ; } impl crate :: obj :: GodotClass for CanvasItem { const CLASS_NAME : & 'static str = "CanvasItem" ; type Base = crate :: classes :: Node ; type Memory = crate :: obj :: MemManual ; const INIT_LEVEL : crate :: init :: InitLevel = crate :: init :: InitLevel :: Scene ; } impl crate :: obj :: EngineClass for CanvasItem { fn as_object_ptr (& self) -> sys :: GDExtensionObjectPtr { self . object_ptr } } unsafe impl crate :: obj :: Inherits < crate :: classes :: Node > for CanvasItem { } unsafe impl crate :: obj :: Inherits < crate :: classes :: Object > for CanvasItem { } impl std :: ops :: Deref for CanvasItem { type Target = crate :: classes :: Node ; fn deref (& self) -> & Self :: Target { unsafe { std :: mem :: transmute :: < & Self , & Self :: Target > (self) } } } impl std :: ops :: DerefMut for CanvasItem { fn deref_mut (& mut self) -> & mut Self :: Target { unsafe { std :: mem :: transmute :: < & mut Self , & mut Self :: Target > (self) } } } } # [doc = "Default-param extender for [`CanvasItem::draw_line_ex`][super::CanvasItem::draw_line_ex]."] # [must_use] pub struct ExDrawLine < 'ex > { surround_object : & 'ex mut re_export :: CanvasItem , from : Vector2 , to : Vector2 , color : Color , width : f32 , antialiased : bool , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExDrawLine < 'ex > { fn new (surround_object : & 'ex mut re_export :: CanvasItem , from : Vector2 , to : Vector2 , color : Color ,) -> Self { Self { surround_object , from , to , color , width : - 1f32 , antialiased : false , } } # [inline] pub fn width (self , value : f32) -> Self { Self { width : value , .. self } } # [inline] pub fn antialiased (self , value : bool) -> Self { Self { antialiased : value , .. self } } # [inline] pub fn done (self) { re_export :: CanvasItem :: draw_line_full (self . surround_object , self . from , self . to , self . color , self . width , self . antialiased ,) } } # [doc = "Default-param extender for [`CanvasItem::draw_dashed_line_ex`][super::CanvasItem::draw_dashed_line_ex]."] # [must_use] pub struct ExDrawDashedLine < 'ex > { surround_object : & 'ex mut re_export :: CanvasItem , from : Vector2 , to : Vector2 , color : Color , width : f32 , dash : f32 , aligned : bool , antialiased : bool , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExDrawDashedLine < 'ex > { fn new (surround_object : & 'ex mut re_export :: CanvasItem , from : Vector2 , to : Vector2 , color : Color ,) -> Self { Self { surround_object , from , to , color , width : - 1f32 , dash : 2f32 , aligned : true , antialiased : false , } } # [inline] pub fn width (self , value : f32) -> Self { Self { width : value , .. self } } # [inline] pub fn dash (self , value : f32) -> Self { Self { dash : value , .. self } } # [inline] pub fn aligned (self , value : bool) -> Self { Self { aligned : value , .. self } } # [inline] pub fn antialiased (self , value : bool) -> Self { Self { antialiased : value , .. self } } # [inline] pub fn done (self) { re_export :: CanvasItem :: draw_dashed_line_full (self . surround_object , self . from , self . to , self . color , self . width , self . dash , self . aligned , self . antialiased ,) } } # [doc = "Default-param extender for [`CanvasItem::draw_arc_ex`][super::CanvasItem::draw_arc_ex]."] # [must_use] pub struct ExDrawArc < 'ex > { surround_object : & 'ex mut re_export :: CanvasItem , center : Vector2 , radius : f32 , start_angle : f32 , end_angle : f32 , point_count : i32 , color : Color , width : f32 , antialiased : bool , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExDrawArc < 'ex > { fn new (surround_object : & 'ex mut re_export :: CanvasItem , center : Vector2 , radius : f32 , start_angle : f32 , end_angle : f32 , point_count : i32 , color : Color ,) -> Self { Self { surround_object , center , radius , start_angle , end_angle , point_count , color , width : - 1f32 , antialiased : false , } } # [inline] pub fn width (self , value : f32) -> Self { Self { width : value , .. self } } # [inline] pub fn antialiased (self , value : bool) -> Self { Self { antialiased : value , .. self } } # [inline] pub fn done (self) { re_export :: CanvasItem :: draw_arc_full (self . surround_object , self . center , self . radius , self . start_angle , self . end_angle , self . point_count , self . color , self . width , self . antialiased ,) } } # [doc = "Default-param extender for [`CanvasItem::draw_rect_ex`][super::CanvasItem::draw_rect_ex]."] # [must_use] pub struct ExDrawRect < 'ex > { surround_object : & 'ex mut re_export :: CanvasItem , rect : Rect2 , color : Color , filled : bool , width : f32 , antialiased : bool , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExDrawRect < 'ex > { fn new (surround_object : & 'ex mut re_export :: CanvasItem , rect : Rect2 , color : Color ,) -> Self { Self { surround_object , rect , color , filled : true , width : - 1f32 , antialiased : false , } } # [inline] pub fn filled (self , value : bool) -> Self { Self { filled : value , .. self } } # [inline] pub fn width (self , value : f32) -> Self { Self { width : value , .. self } } # [inline] pub fn antialiased (self , value : bool) -> Self { Self { antialiased : value , .. self } } # [inline] pub fn done (self) { re_export :: CanvasItem :: draw_rect_full (self . surround_object , self . rect , self . color , self . filled , self . width , self . antialiased ,) } } # [doc = "Default-param extender for [`CanvasItem::draw_circle_ex`][super::CanvasItem::draw_circle_ex]."] # [must_use] pub struct ExDrawCircle < 'ex > { surround_object : & 'ex mut re_export :: CanvasItem , position : Vector2 , radius : f32 , color : Color , filled : bool , width : f32 , antialiased : bool , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExDrawCircle < 'ex > { fn new (surround_object : & 'ex mut re_export :: CanvasItem , position : Vector2 , radius : f32 , color : Color ,) -> Self { Self { surround_object , position , radius , color , filled : true , width : - 1f32 , antialiased : false , } } # [inline] pub fn filled (self , value : bool) -> Self { Self { filled : value , .. self } } # [inline] pub fn width (self , value : f32) -> Self { Self { width : value , .. self } } # [inline] pub fn antialiased (self , value : bool) -> Self { Self { antialiased : value , .. self } } # [inline] pub fn done (self) { re_export :: CanvasItem :: draw_circle_full (self . surround_object , self . position , self . radius , self . color , self . filled , self . width , self . antialiased ,) } } # [doc = "Default-param extender for [`CanvasItem::draw_texture_ex`][super::CanvasItem::draw_texture_ex]."] # [must_use] pub struct ExDrawTexture < 'ex > { surround_object : & 'ex mut re_export :: CanvasItem , texture : ObjectArg < crate :: classes :: Texture2D > , position : Vector2 , modulate : Color , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExDrawTexture < 'ex > { fn new (surround_object : & 'ex mut re_export :: CanvasItem , texture : ObjectArg < crate :: classes :: Texture2D > , position : Vector2 ,) -> Self { Self { surround_object , texture , position , modulate : Color :: from_rgba (1 as _ , 1 as _ , 1 as _ , 1 as _) , } } # [inline] pub fn modulate (self , value : Color) -> Self { Self { modulate : value , .. self } } # [inline] pub fn done (self) { re_export :: CanvasItem :: draw_texture_full (self . surround_object , self . texture , self . position , self . modulate ,) } } # [doc = "Default-param extender for [`CanvasItem::draw_texture_rect_ex`][super::CanvasItem::draw_texture_rect_ex]."] # [must_use] pub struct ExDrawTextureRect < 'ex > { surround_object : & 'ex mut re_export :: CanvasItem , texture : ObjectArg < crate :: classes :: Texture2D > , rect : Rect2 , tile : bool , modulate : Color , transpose : bool , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExDrawTextureRect < 'ex > { fn new (surround_object : & 'ex mut re_export :: CanvasItem , texture : ObjectArg < crate :: classes :: Texture2D > , rect : Rect2 , tile : bool ,) -> Self { Self { surround_object , texture , rect , tile , modulate : Color :: from_rgba (1 as _ , 1 as _ , 1 as _ , 1 as _) , transpose : false , } } # [inline] pub fn modulate (self , value : Color) -> Self { Self { modulate : value , .. self } } # [inline] pub fn transpose (self , value : bool) -> Self { Self { transpose : value , .. self } } # [inline] pub fn done (self) { re_export :: CanvasItem :: draw_texture_rect_full (self . surround_object , self . texture , self . rect , self . tile , self . modulate , self . transpose ,) } } # [doc = "Default-param extender for [`CanvasItem::draw_texture_rect_region_ex`][super::CanvasItem::draw_texture_rect_region_ex]."] # [must_use] pub struct ExDrawTextureRectRegion < 'ex > { surround_object : & 'ex mut re_export :: CanvasItem , texture : ObjectArg < crate :: classes :: Texture2D > , rect : Rect2 , src_rect : Rect2 , modulate : Color , transpose : bool , clip_uv : bool , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExDrawTextureRectRegion < 'ex > { fn new (surround_object : & 'ex mut re_export :: CanvasItem , texture : ObjectArg < crate :: classes :: Texture2D > , rect : Rect2 , src_rect : Rect2 ,) -> Self { Self { surround_object , texture , rect , src_rect , modulate : Color :: from_rgba (1 as _ , 1 as _ , 1 as _ , 1 as _) , transpose : false , clip_uv : true , } } # [inline] pub fn modulate (self , value : Color) -> Self { Self { modulate : value , .. self } } # [inline] pub fn transpose (self , value : bool) -> Self { Self { transpose : value , .. self } } # [inline] pub fn clip_uv (self , value : bool) -> Self { Self { clip_uv : value , .. self } } # [inline] pub fn done (self) { re_export :: CanvasItem :: draw_texture_rect_region_full (self . surround_object , self . texture , self . rect , self . src_rect , self . modulate , self . transpose , self . clip_uv ,) } } # [doc = "Default-param extender for [`CanvasItem::draw_msdf_texture_rect_region_ex`][super::CanvasItem::draw_msdf_texture_rect_region_ex]."] # [must_use] pub struct ExDrawMsdfTextureRectRegion < 'ex > { surround_object : & 'ex mut re_export :: CanvasItem , texture : ObjectArg < crate :: classes :: Texture2D > , rect : Rect2 , src_rect : Rect2 , modulate : Color , outline : f64 , pixel_range : f64 , scale : f64 , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExDrawMsdfTextureRectRegion < 'ex > { fn new (surround_object : & 'ex mut re_export :: CanvasItem , texture : ObjectArg < crate :: classes :: Texture2D > , rect : Rect2 , src_rect : Rect2 ,) -> Self { Self { surround_object , texture , rect , src_rect , modulate : Color :: from_rgba (1 as _ , 1 as _ , 1 as _ , 1 as _) , outline : 0f64 , pixel_range : 4f64 , scale : 1f64 , } } # [inline] pub fn modulate (self , value : Color) -> Self { Self { modulate : value , .. self } } # [inline] pub fn outline (self , value : f64) -> Self { Self { outline : value , .. self } } # [inline] pub fn pixel_range (self , value : f64) -> Self { Self { pixel_range : value , .. self } } # [inline] pub fn scale (self , value : f64) -> Self { Self { scale : value , .. self } } # [inline] pub fn done (self) { re_export :: CanvasItem :: draw_msdf_texture_rect_region_full (self . surround_object , self . texture , self . rect , self . src_rect , self . modulate , self . outline , self . pixel_range , self . scale ,) } } # [doc = "Default-param extender for [`CanvasItem::draw_lcd_texture_rect_region_ex`][super::CanvasItem::draw_lcd_texture_rect_region_ex]."] # [must_use] pub struct ExDrawLcdTextureRectRegion < 'ex > { surround_object : & 'ex mut re_export :: CanvasItem , texture : ObjectArg < crate :: classes :: Texture2D > , rect : Rect2 , src_rect : Rect2 , modulate : Color , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExDrawLcdTextureRectRegion < 'ex > { fn new (surround_object : & 'ex mut re_export :: CanvasItem , texture : ObjectArg < crate :: classes :: Texture2D > , rect : Rect2 , src_rect : Rect2 ,) -> Self { Self { surround_object , texture , rect , src_rect , modulate : Color :: from_rgba (1 as _ , 1 as _ , 1 as _ , 1 as _) , } } # [inline] pub fn modulate (self , value : Color) -> Self { Self { modulate : value , .. self } } # [inline] pub fn done (self) { re_export :: CanvasItem :: draw_lcd_texture_rect_region_full (self . surround_object , self . texture , self . rect , self . src_rect , self . modulate ,) } } # [doc = "Default-param extender for [`CanvasItem::draw_char_ex`][super::CanvasItem::draw_char_ex]."] # [must_use] pub struct ExDrawChar < 'ex > { surround_object : & 'ex re_export :: CanvasItem , font : ObjectArg < crate :: classes :: Font > , pos : Vector2 , char : CowArg < 'ex , GString > , font_size : i32 , modulate : Color , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExDrawChar < 'ex > { fn new (surround_object : & 'ex re_export :: CanvasItem , font : ObjectArg < crate :: classes :: Font > , pos : Vector2 , char : CowArg < 'ex , GString > ,) -> Self { Self { surround_object , font , pos , char , font_size : 16i32 , modulate : Color :: from_rgba (1 as _ , 1 as _ , 1 as _ , 1 as _) , } } # [inline] pub fn font_size (self , value : i32) -> Self { Self { font_size : value , .. self } } # [inline] pub fn modulate (self , value : Color) -> Self { Self { modulate : value , .. self } } # [inline] pub fn done (self) { re_export :: CanvasItem :: draw_char_full (self . surround_object , self . font , self . pos , self . char , self . font_size , self . modulate ,) } } # [doc = "Default-param extender for [`CanvasItem::draw_char_outline_ex`][super::CanvasItem::draw_char_outline_ex]."] # [must_use] pub struct ExDrawCharOutline < 'ex > { surround_object : & 'ex re_export :: CanvasItem , font : ObjectArg < crate :: classes :: Font > , pos : Vector2 , char : CowArg < 'ex , GString > , font_size : i32 , size : i32 , modulate : Color , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExDrawCharOutline < 'ex > { fn new (surround_object : & 'ex re_export :: CanvasItem , font : ObjectArg < crate :: classes :: Font > , pos : Vector2 , char : CowArg < 'ex , GString > ,) -> Self { Self { surround_object , font , pos , char , font_size : 16i32 , size : - 1i32 , modulate : Color :: from_rgba (1 as _ , 1 as _ , 1 as _ , 1 as _) , } } # [inline] pub fn font_size (self , value : i32) -> Self { Self { font_size : value , .. self } } # [inline] pub fn size (self , value : i32) -> Self { Self { size : value , .. self } } # [inline] pub fn modulate (self , value : Color) -> Self { Self { modulate : value , .. self } } # [inline] pub fn done (self) { re_export :: CanvasItem :: draw_char_outline_full (self . surround_object , self . font , self . pos , self . char , self . font_size , self . size , self . modulate ,) } } # [doc = "Default-param extender for [`CanvasItem::draw_set_transform_ex`][super::CanvasItem::draw_set_transform_ex]."] # [must_use] pub struct ExDrawSetTransform < 'ex > { surround_object : & 'ex mut re_export :: CanvasItem , position : Vector2 , rotation : f32 , scale : Vector2 , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExDrawSetTransform < 'ex > { fn new (surround_object : & 'ex mut re_export :: CanvasItem , position : Vector2 ,) -> Self { Self { surround_object , position , rotation : 0f32 , scale : Vector2 :: new (1 as _ , 1 as _) , } } # [inline] pub fn rotation (self , value : f32) -> Self { Self { rotation : value , .. self } } # [inline] pub fn scale (self , value : Vector2) -> Self { Self { scale : value , .. self } } # [inline] pub fn done (self) { re_export :: CanvasItem :: draw_set_transform_full (self . surround_object , self . position , self . rotation , self . scale ,) } } # [doc = "Default-param extender for [`CanvasItem::draw_animation_slice_ex`][super::CanvasItem::draw_animation_slice_ex]."] # [must_use] pub struct ExDrawAnimationSlice < 'ex > { surround_object : & 'ex mut re_export :: CanvasItem , animation_length : f64 , slice_begin : f64 , slice_end : f64 , offset : f64 , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExDrawAnimationSlice < 'ex > { fn new (surround_object : & 'ex mut re_export :: CanvasItem , animation_length : f64 , slice_begin : f64 , slice_end : f64 ,) -> Self { Self { surround_object , animation_length , slice_begin , slice_end , offset : 0f64 , } } # [inline] pub fn offset (self , value : f64) -> Self { Self { offset : value , .. self } } # [inline] pub fn done (self) { re_export :: CanvasItem :: draw_animation_slice_full (self . surround_object , self . animation_length , self . slice_begin , self . slice_end , self . offset ,) } } # [repr (transparent)] # [derive (Copy , Clone , Eq , PartialEq , Hash ,)] pub struct TextureFilter { ord : i32 } impl TextureFilter { # [doc (alias = "TEXTURE_FILTER_PARENT_NODE")] # [doc = "Godot enumerator name: `TEXTURE_FILTER_PARENT_NODE`"] pub const PARENT_NODE : Self = Self { ord : 0 } ; # [doc (alias = "TEXTURE_FILTER_NEAREST")] # [doc = "Godot enumerator name: `TEXTURE_FILTER_NEAREST`"] pub const NEAREST : Self = Self { ord : 1 } ; # [doc (alias = "TEXTURE_FILTER_LINEAR")] # [doc = "Godot enumerator name: `TEXTURE_FILTER_LINEAR`"] pub const LINEAR : Self = Self { ord : 2 } ; # [doc (alias = "TEXTURE_FILTER_NEAREST_WITH_MIPMAPS")] # [doc = "Godot enumerator name: `TEXTURE_FILTER_NEAREST_WITH_MIPMAPS`"] pub const NEAREST_WITH_MIPMAPS : Self = Self { ord : 3 } ; # [doc (alias = "TEXTURE_FILTER_LINEAR_WITH_MIPMAPS")] # [doc = "Godot enumerator name: `TEXTURE_FILTER_LINEAR_WITH_MIPMAPS`"] pub const LINEAR_WITH_MIPMAPS : Self = Self { ord : 4 } ; # [doc (alias = "TEXTURE_FILTER_NEAREST_WITH_MIPMAPS_ANISOTROPIC")] # [doc = "Godot enumerator name: `TEXTURE_FILTER_NEAREST_WITH_MIPMAPS_ANISOTROPIC`"] pub const NEAREST_WITH_MIPMAPS_ANISOTROPIC : Self = Self { ord : 5 } ; # [doc (alias = "TEXTURE_FILTER_LINEAR_WITH_MIPMAPS_ANISOTROPIC")] # [doc = "Godot enumerator name: `TEXTURE_FILTER_LINEAR_WITH_MIPMAPS_ANISOTROPIC`"] pub const LINEAR_WITH_MIPMAPS_ANISOTROPIC : Self = Self { ord : 6 } ; # [doc (alias = "TEXTURE_FILTER_MAX")] # [doc = "Godot enumerator name: `TEXTURE_FILTER_MAX`"] pub const MAX : Self = Self { ord : 7 } ; # [allow (unreachable_patterns)] fn enumerator_name (self) -> Option < & 'static str > { match self { Self :: PARENT_NODE => Some ("PARENT_NODE") , Self :: NEAREST => Some ("NEAREST") , Self :: LINEAR => Some ("LINEAR") , Self :: NEAREST_WITH_MIPMAPS => Some ("NEAREST_WITH_MIPMAPS") , Self :: LINEAR_WITH_MIPMAPS => Some ("LINEAR_WITH_MIPMAPS") , Self :: NEAREST_WITH_MIPMAPS_ANISOTROPIC => Some ("NEAREST_WITH_MIPMAPS_ANISOTROPIC") , Self :: LINEAR_WITH_MIPMAPS_ANISOTROPIC => Some ("LINEAR_WITH_MIPMAPS_ANISOTROPIC") , Self :: MAX => Some ("MAX") , _ => None , } } } impl std :: fmt :: Debug for TextureFilter { fn fmt (& self , f : & mut std :: fmt :: Formatter < '_ >) -> std :: fmt :: Result { match self . enumerator_name () { Some (enumerator) => f . write_str (enumerator) , None => f . debug_struct (stringify ! (TextureFilter)) . field ("ord" , & self . ord) . finish () , } } } impl crate :: obj :: EngineEnum for TextureFilter { fn try_from_ord (ord : i32) -> Option < Self > { match ord { 0 | 1 | 2 | 3 | 4 | 5 | 6 | 7 => Some (Self { ord }) , _ => None , } } fn ord (self) -> i32 { self . ord } } impl crate :: meta :: GodotConvert for TextureFilter { type Via = i32 ; } impl crate :: meta :: ToGodot for TextureFilter { fn to_godot (& self) -> Self :: Via { < Self as crate :: obj :: EngineEnum > :: ord (* self) } } impl crate :: meta :: FromGodot for TextureFilter { fn try_from_godot (via : Self :: Via) -> std :: result :: Result < Self , crate :: meta :: ConvertError > { Ok (Self { ord : via }) } } # [repr (transparent)] # [derive (Copy , Clone , Eq , PartialEq , Hash ,)] pub struct TextureRepeat { ord : i32 } impl TextureRepeat { # [doc (alias = "TEXTURE_REPEAT_PARENT_NODE")] # [doc = "Godot enumerator name: `TEXTURE_REPEAT_PARENT_NODE`"] pub const PARENT_NODE : Self = Self { ord : 0 } ; # [doc (alias = "TEXTURE_REPEAT_DISABLED")] # [doc = "Godot enumerator name: `TEXTURE_REPEAT_DISABLED`"] pub const DISABLED : Self = Self { ord : 1 } ; # [doc (alias = "TEXTURE_REPEAT_ENABLED")] # [doc = "Godot enumerator name: `TEXTURE_REPEAT_ENABLED`"] pub const ENABLED : Self = Self { ord : 2 } ; # [doc (alias = "TEXTURE_REPEAT_MIRROR")] # [doc = "Godot enumerator name: `TEXTURE_REPEAT_MIRROR`"] pub const MIRROR : Self = Self { ord : 3 } ; # [doc (alias = "TEXTURE_REPEAT_MAX")] # [doc = "Godot enumerator name: `TEXTURE_REPEAT_MAX`"] pub const MAX : Self = Self { ord : 4 } ; # [allow (unreachable_patterns)] fn enumerator_name (self) -> Option < & 'static str > { match self { Self :: PARENT_NODE => Some ("PARENT_NODE") , Self :: DISABLED => Some ("DISABLED") , Self :: ENABLED => Some ("ENABLED") , Self :: MIRROR => Some ("MIRROR") , Self :: MAX => Some ("MAX") , _ => None , } } } impl std :: fmt :: Debug for TextureRepeat { fn fmt (& self , f : & mut std :: fmt :: Formatter < '_ >) -> std :: fmt :: Result { match self . enumerator_name () { Some (enumerator) => f . write_str (enumerator) , None => f . debug_struct (stringify ! (TextureRepeat)) . field ("ord" , & self . ord) . finish () , } } } impl crate :: obj :: EngineEnum for TextureRepeat { fn try_from_ord (ord : i32) -> Option < Self > { match ord { 0 | 1 | 2 | 3 | 4 => Some (Self { ord }) , _ => None , } } fn ord (self) -> i32 { self . ord } } impl crate :: meta :: GodotConvert for TextureRepeat { type Via = i32 ; } impl crate :: meta :: ToGodot for TextureRepeat { fn to_godot (& self) -> Self :: Via { < Self as crate :: obj :: EngineEnum > :: ord (* self) } } impl crate :: meta :: FromGodot for TextureRepeat { fn try_from_godot (via : Self :: Via) -> std :: result :: Result < Self , crate :: meta :: ConvertError > { Ok (Self { ord : via }) } } # [repr (transparent)] # [derive (Copy , Clone , Eq , PartialEq , Hash ,)] pub struct ClipChildrenMode { ord : i32 } impl ClipChildrenMode { # [doc (alias = "CLIP_CHILDREN_DISABLED")] # [doc = "Godot enumerator name: `CLIP_CHILDREN_DISABLED`"] pub const DISABLED : Self = Self { ord : 0 } ; # [doc (alias = "CLIP_CHILDREN_ONLY")] # [doc = "Godot enumerator name: `CLIP_CHILDREN_ONLY`"] pub const ONLY : Self = Self { ord : 1 } ; # [doc (alias = "CLIP_CHILDREN_AND_DRAW")] # [doc = "Godot enumerator name: `CLIP_CHILDREN_AND_DRAW`"] pub const AND_DRAW : Self = Self { ord : 2 } ; # [doc (alias = "CLIP_CHILDREN_MAX")] # [doc = "Godot enumerator name: `CLIP_CHILDREN_MAX`"] pub const MAX : Self = Self { ord : 3 } ; # [allow (unreachable_patterns)] fn enumerator_name (self) -> Option < & 'static str > { match self { Self :: DISABLED => Some ("DISABLED") , Self :: ONLY => Some ("ONLY") , Self :: AND_DRAW => Some ("AND_DRAW") , Self :: MAX => Some ("MAX") , _ => None , } } } impl std :: fmt :: Debug for ClipChildrenMode { fn fmt (& self , f : & mut std :: fmt :: Formatter < '_ >) -> std :: fmt :: Result { match self . enumerator_name () { Some (enumerator) => f . write_str (enumerator) , None => f . debug_struct (stringify ! (ClipChildrenMode)) . field ("ord" , & self . ord) . finish () , } } } impl crate :: obj :: EngineEnum for ClipChildrenMode { fn try_from_ord (ord : i32) -> Option < Self > { match ord { 0 | 1 | 2 | 3 => Some (Self { ord }) , _ => None , } } fn ord (self) -> i32 { self . ord } } impl crate :: meta :: GodotConvert for ClipChildrenMode { type Via = i32 ; } impl crate :: meta :: ToGodot for ClipChildrenMode { fn to_godot (& self) -> Self :: Via { < Self as crate :: obj :: EngineEnum > :: ord (* self) } } impl crate :: meta :: FromGodot for ClipChildrenMode { fn try_from_godot (via : Self :: Via) -> std :: result :: Result < Self , crate :: meta :: ConvertError > { Ok (Self { ord : via }) } } # [doc = "Properties declared by [`CanvasItem`][super::CanvasItem], as interned engine names."] pub struct PropertyName ; impl PropertyName { pub const VISIBLE : InternedName = InternedName :: new ("visible") ; pub const MODULATE : InternedName = InternedName :: new ("modulate") ; pub const SELF_MODULATE : InternedName = InternedName :: new ("self_modulate") ; pub const SHOW_BEHIND_PARENT : InternedName = InternedName :: new ("show_behind_parent") ; pub const TOP_LEVEL : InternedName = InternedName :: new ("top_level") ; pub const CLIP_CHILDREN : InternedName = InternedName :: new ("clip_children") ; pub const LIGHT_MASK : InternedName = InternedName :: new ("light_mask") ; pub const VISIBILITY_LAYER : InternedName = InternedName :: new ("visibility_layer") ; pub const Z_INDEX : InternedName = InternedName :: new ("z_index") ; pub const Z_AS_RELATIVE : InternedName = InternedName :: new ("z_as_relative") ; pub const Y_SORT_ENABLED : InternedName = InternedName :: new ("y_sort_enabled") ; pub const TEXTURE_FILTER : InternedName = InternedName :: new ("texture_filter") ; pub const TEXTURE_REPEAT : InternedName = InternedName :: new ("texture_repeat") ; pub const MATERIAL : InternedName = InternedName :: new ("material") ; pub const USE_PARENT_MATERIAL : InternedName = InternedName :: new ("use_parent_material") ; } # [doc = "Methods declared by [`CanvasItem`][super::CanvasItem], as interned engine names."] pub struct MethodName ; impl MethodName { pub const GET_CANVAS_ITEM : InternedName = InternedName :: new ("get_canvas_item") ; pub const SET_VISIBLE : InternedName = InternedName :: new ("set_visible") ; pub const IS_VISIBLE : InternedName = InternedName :: new ("is_visible") ; pub const IS_VISIBLE_IN_TREE : InternedName = InternedName :: new ("is_visible_in_tree") ; pub const SHOW : InternedName = InternedName :: new ("show") ; pub const HIDE : InternedName = InternedName :: new ("hide") ; pub const QUEUE_REDRAW : InternedName = InternedName :: new ("queue_redraw") ; pub const MOVE_TO_FRONT : InternedName = InternedName :: new ("move_to_front") ; pub const SET_AS_TOP_LEVEL : InternedName = InternedName :: new ("set_as_top_level") ; pub const IS_SET_AS_TOP_LEVEL : InternedName = InternedName :: new ("is_set_as_top_level") ; pub const SET_LIGHT_MASK : InternedName = InternedName :: new ("set_light_mask") ; pub const GET_LIGHT_MASK : InternedName = InternedName :: new ("get_light_mask") ; pub const SET_MODULATE : InternedName = InternedName :: new ("set_modulate") ; pub const GET_MODULATE : InternedName = InternedName :: new ("get_modulate") ; pub const SET_SELF_MODULATE : InternedName = InternedName :: new ("set_self_modulate") ; pub const GET_SELF_MODULATE : InternedName = InternedName :: new ("get_self_modulate") ; pub const SET_Z_INDEX : InternedName = InternedName :: new ("set_z_index") ; pub const GET_Z_INDEX : InternedName = InternedName :: new ("get_z_index") ; pub const SET_Z_AS_RELATIVE : InternedName = InternedName :: new ("set_z_as_relative") ; pub const IS_Z_RELATIVE : InternedName = InternedName :: new ("is_z_relative") ; pub const SET_Y_SORT_ENABLED : InternedName = InternedName :: new ("set_y_sort_enabled") ; pub const IS_Y_SORT_ENABLED : InternedName = InternedName :: new ("is_y_sort_enabled") ; pub const SET_DRAW_BEHIND_PARENT : InternedName = InternedName :: new ("set_draw_behind_parent") ; pub const IS_DRAW_BEHIND_PARENT_ENABLED : InternedName = InternedName :: new ("is_draw_behind_parent_enabled") ; pub const DRAW_LINE : InternedName = InternedName :: new ("draw_line") ; pub const DRAW_DASHED_LINE : InternedName = InternedName :: new ("draw_dashed_line") ; pub const DRAW_ARC : InternedName = InternedName :: new ("draw_arc") ; pub const DRAW_RECT : InternedName = InternedName :: new ("draw_rect") ; pub const DRAW_CIRCLE : InternedName = InternedName :: new ("draw_circle") ; pub const DRAW_TEXTURE : InternedName = InternedName :: new ("draw_texture") ; pub const DRAW_TEXTURE_RECT : InternedName = InternedName :: new ("draw_texture_rect") ; pub const DRAW_TEXTURE_RECT_REGION : InternedName = InternedName :: new ("draw_texture_rect_region") ; pub const DRAW_MSDF_TEXTURE_RECT_REGION : InternedName = InternedName :: new ("draw_msdf_texture_rect_region") ; pub const DRAW_LCD_TEXTURE_RECT_REGION : InternedName = InternedName :: new ("draw_lcd_texture_rect_region") ; pub const DRAW_CHAR : InternedName = InternedName :: new ("draw_char") ; pub const DRAW_CHAR_OUTLINE : InternedName = InternedName :: new ("draw_char_outline") ; pub const DRAW_SET_TRANSFORM : InternedName = InternedName :: new ("draw_set_transform") ; pub const DRAW_ANIMATION_SLICE : InternedName = InternedName :: new ("draw_animation_slice") ; pub const DRAW_END_ANIMATION : InternedName = InternedName :: new ("draw_end_animation") ; pub const GET_VIEWPORT_RECT : InternedName = InternedName :: new ("get_viewport_rect") ; pub const GET_LOCAL_MOUSE_POSITION : InternedName = InternedName :: new ("get_local_mouse_position") ; pub const GET_GLOBAL_MOUSE_POSITION : InternedName = InternedName :: new ("get_global_mouse_position") ; pub const GET_CANVAS : InternedName = InternedName :: new ("get_canvas") ; pub const SET_USE_PARENT_MATERIAL : InternedName = InternedName :: new ("set_use_parent_material") ; pub const GET_USE_PARENT_MATERIAL : InternedName = InternedName :: new ("get_use_parent_material") ; pub const SET_NOTIFY_LOCAL_TRANSFORM : InternedName = InternedName :: new ("set_notify_local_transform") ; pub const IS_LOCAL_TRANSFORM_NOTIFICATION_ENABLED : InternedName = InternedName :: new ("is_local_transform_notification_enabled") ; pub const SET_NOTIFY_TRANSFORM : InternedName = InternedName :: new ("set_notify_transform") ; pub const IS_TRANSFORM_NOTIFICATION_ENABLED : InternedName = InternedName :: new ("is_transform_notification_enabled") ; pub const FORCE_UPDATE_TRANSFORM : InternedName = InternedName :: new ("force_update_transform") ; pub const MAKE_CANVAS_POSITION_LOCAL : InternedName = InternedName :: new ("make_canvas_position_local") ; pub const MAKE_INPUT_LOCAL : InternedName = InternedName :: new ("make_input_local") ; pub const SET_VISIBILITY_LAYER : InternedName = InternedName :: new ("set_visibility_layer") ; pub const GET_VISIBILITY_LAYER : InternedName = InternedName :: new ("get_visibility_layer") ; pub const SET_VISIBILITY_LAYER_BIT : InternedName = InternedName :: new ("set_visibility_layer_bit") ; pub const GET_VISIBILITY_LAYER_BIT : InternedName = InternedName :: new ("get_visibility_layer_bit") ; pub const SET_TEXTURE_FILTER : InternedName = InternedName :: new ("set_texture_filter") ; pub const GET_TEXTURE_FILTER : InternedName = InternedName :: new ("get_texture_filter") ; pub const SET_TEXTURE_REPEAT : InternedName = InternedName :: new ("set_texture_repeat") ; pub const GET_TEXTURE_REPEAT : InternedName = InternedName :: new ("get_texture_repeat") ; pub const SET_CLIP_CHILDREN_MODE : InternedName = InternedName :: new ("set_clip_children_mode") ; pub const GET_CLIP_CHILDREN_MODE : InternedName = InternedName :: new ("get_clip_children_mode") ; } # [doc = "Signals declared by [`CanvasItem`][super::CanvasItem], as interned engine names."] pub struct SignalName ; impl SignalName { pub const DRAW : InternedName = InternedName :: new ("draw") ; pub const VISIBILITY_CHANGED : InternedName = InternedName :: new ("visibility_changed") ; pub const HIDDEN : InternedName = InternedName :: new ("hidden") ; pub const ITEM_RECT_CHANGED : InternedName = InternedName :: new ("item_rect_changed") ; } # [doc = "A collection of signals for the [`CanvasItem`][crate::classes::CanvasItem] class."] pub struct SignalsOfCanvasItem < 'c > { __base : crate :: classes :: node :: SignalsOfNode < 'c > , } impl < 'c > SignalsOfCanvasItem < 'c > { # [doc (hidden)] pub fn __new (object : SignalObject < 'c >) -> Self { Self { __base : crate :: classes :: node :: SignalsOfNode :: __new (object) } } # [doc (hidden)] pub fn __object (& self) -> SignalObject < 'c > { self . __base . __object () } # [doc = "Signature: `()`"] pub fn draw (& mut self) -> SigDraw < 'c > { SigDraw { typed : TypedSignal :: __new (self . __object () , "draw") , } } # [doc = "Signature: `()`"] pub fn visibility_changed (& mut self) -> SigVisibilityChanged < 'c > { SigVisibilityChanged { typed : TypedSignal :: __new (self . __object () , "visibility_changed") , } } # [doc = "Signature: `()`"] pub fn hidden (& mut self) -> SigHidden < 'c > { SigHidden { typed : TypedSignal :: __new (self . __object () , "hidden") , } } # [doc = "Signature: `()`"] pub fn item_rect_changed (& mut self) -> SigItemRectChanged < 'c > { SigItemRectChanged { typed : TypedSignal :: __new (self . __object () , "item_rect_changed") , } } } impl < 'c > std :: ops :: Deref for SignalsOfCanvasItem < 'c > { type Target = crate :: classes :: node :: SignalsOfNode < 'c > ; fn deref (& self) -> & Self :: Target { & self . __base } } impl std :: ops :: DerefMut for SignalsOfCanvasItem < '_ > { fn deref_mut (& mut self) -> & mut Self :: Target { & mut self . __base } } type TypedSigDraw < 'c > = TypedSignal < 'c , () > ; pub struct SigDraw < 'c > { typed : TypedSigDraw < 'c > , } impl SigDraw < '_ > { pub fn emit (& mut self ,) { self . typed . emit_tuple (()) ; } } impl < 'c > std :: ops :: Deref for SigDraw < 'c > { type Target = TypedSigDraw < 'c > ; fn deref (& self) -> & Self :: Target { & self . typed } } impl std :: ops :: DerefMut for SigDraw < '_ > { fn deref_mut (& mut self) -> & mut Self :: Target { & mut self . typed } } type TypedSigVisibilityChanged < 'c > = TypedSignal < 'c , () > ; pub struct SigVisibilityChanged < 'c > { typed : TypedSigVisibilityChanged < 'c > , } impl SigVisibilityChanged < '_ > { pub fn emit (& mut self ,) { self . typed . emit_tuple (()) ; } } impl < 'c > std :: ops :: Deref for SigVisibilityChanged < 'c > { type Target = TypedSigVisibilityChanged < 'c > ; fn deref (& self) -> & Self :: Target { & self . typed } } impl std :: ops :: DerefMut for SigVisibilityChanged < '_ > { fn deref_mut (& mut self) -> & mut Self :: Target { & mut self . typed } } type TypedSigHidden < 'c > = TypedSignal < 'c , () > ; pub struct SigHidden < 'c > { typed : TypedSigHidden < 'c > , } impl SigHidden < '_ > { pub fn emit (& mut self ,) { self . typed . emit_tuple (()) ; } } impl < 'c > std :: ops :: Deref for SigHidden < 'c > { type Target = TypedSigHidden < 'c > ; fn deref (& self) -> & Self :: Target { & self . typed } } impl std :: ops :: DerefMut for SigHidden < '_ > { fn deref_mut (& mut self) -> & mut Self :: Target { & mut self . typed } } type TypedSigItemRectChanged < 'c > = TypedSignal < 'c , () > ; pub struct SigItemRectChanged < 'c > { typed : TypedSigItemRectChanged < 'c > , } impl SigItemRectChanged < '_ > { pub fn emit (& mut self ,) { self . typed . emit_tuple (()) ; } } impl < 'c > std :: ops :: Deref for SigItemRectChanged < 'c > { type Target = TypedSigItemRectChanged < 'c > ; fn deref (& self) -> & Self :: Target { & self . typed } } impl std :: ops :: DerefMut for SigItemRectChanged < '_ > { fn deref_mut (& mut self) -> & mut Self :: Target { & mut self . typed } }