# ! [doc = "Sidecar module for class [`ItemList`][crate::classes::ItemList]."] # [allow (unused_imports)] use crate :: builtin :: * ; # [allow (unused_imports)] use crate :: meta :: { AsArg , AsObjectArg , CowArg , InternedName , ObjectArg , Signature } ; # [allow (unused_imports)] use crate :: obj :: Gd ; # [allow (unused_imports)] use crate :: signal :: { SignalObject , TypedSignal } ; use crate :: sys ; pub (super) mod re_export { use super :: * ; # [doc = "Godot class `ItemList`.\n\nInherits [`Control`][crate::classes::Control].\n\nRelated symbols (default-param builders, enums, interned names, signals) are in [`item_list`][crate::classes::item_list]."] # [derive (Debug)] # [repr (C)] pub struct ItemList { object_ptr : sys :: GDExtensionObjectPtr , } impl ItemList { pub (crate) fn add_item_full (& mut self , text : CowArg < '_ , GString > , icon : ObjectArg < crate :: classes :: Texture2D > , selectable : bool ,) -> i32 { type CallRet = i32 ; type CallParams < 'a0 , > = (CowArg < 'a0 , GString > , ObjectArg < crate :: classes :: Texture2D > , bool ,) ; let args = (text , icon , selectable ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (246usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "ItemList" , "add_item" , self . object_ptr , args ,) } } # [inline] pub fn add_item (& mut self , text : impl AsArg < GString > ,) -> i32 { self . add_item_ex (text ,) . done () } # [inline] pub fn add_item_ex < 'ex > (& 'ex mut self , text : impl AsArg < GString > + 'ex ,) -> super :: ExAddItem < 'ex > { super :: ExAddItem :: new (self , text . into_arg () ,) } pub (crate) fn add_icon_item_full (& mut self , icon : ObjectArg < crate :: classes :: Texture2D > , selectable : bool ,) -> i32 { type CallRet = i32 ; type CallParams = (ObjectArg < crate :: classes :: Texture2D > , bool ,) ; let args = (icon , selectable ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (247usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "ItemList" , "add_icon_item" , self . object_ptr , args ,) } } # [inline] pub fn add_icon_item (& mut self , icon : impl AsObjectArg < crate :: classes :: Texture2D > ,) -> i32 { self . add_icon_item_ex (icon ,) . done () } # [inline] pub fn add_icon_item_ex < 'ex > (& 'ex mut self , icon : impl AsObjectArg < crate :: classes :: Texture2D > ,) -> super :: ExAddIconItem < 'ex > { super :: ExAddIconItem :: new (self , icon . as_object_arg () ,) } pub fn set_item_text (& mut self , idx : i32 , text : impl AsArg < GString > ,) { type CallRet = () ; type CallParams < 'a0 , > = (i32 , CowArg < 'a0 , GString > ,) ; let args = (idx , text . into_arg () ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (248usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "ItemList" , "set_item_text" , self . object_ptr , args ,) } } pub fn get_item_text (& self , idx : i32 ,) -> GString { type CallRet = GString ; type CallParams = (i32 ,) ; let args = (idx ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (249usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "ItemList" , "get_item_text" , self . object_ptr , args ,) } } pub fn set_item_icon (& mut self , idx : i32 , icon : impl AsObjectArg < crate :: classes :: Texture2D > ,) { type CallRet = () ; type CallParams = (i32 , ObjectArg < crate :: classes :: Texture2D > ,) ; let args = (idx , icon . as_object_arg () ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (250usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "ItemList" , "set_item_icon" , self . object_ptr , args ,) } } pub fn get_item_icon (& self , idx : i32 ,) -> Option < Gd < crate :: classes :: Texture2D > > { type CallRet = Option < Gd < crate :: classes :: Texture2D > > ; type CallParams = (i32 ,) ; let args = (idx ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (251usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "ItemList" , "get_item_icon" , self . object_ptr , args ,) } } pub fn set_item_text_direction (& mut self , idx : i32 , direction : crate :: classes :: control :: TextDirection ,) { type CallRet = () ; type CallParams = (i32 , crate :: classes :: control :: TextDirection ,) ; let args = (idx , direction ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (252usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "ItemList" , "set_item_text_direction" , self . object_ptr , args ,) } } pub fn get_item_text_direction (& self , idx : i32 ,) -> crate :: classes :: control :: TextDirection { type CallRet = crate :: classes :: control :: TextDirection ; type CallParams = (i32 ,) ; let args = (idx ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (253usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "ItemList" , "get_item_text_direction" , self . object_ptr , args ,) } } pub fn set_item_language (& mut self , idx : i32 , language : impl AsArg < GString > ,) { type CallRet = () ; type CallParams < 'a0 , > = (i32 , CowArg < 'a0 , GString > ,) ; let args = (idx , language . into_arg () ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (254usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "ItemList" , "set_item_language" , self . object_ptr , args ,) } } pub fn get_item_language (& self , idx : i32 ,) -> GString { type CallRet = GString ; type CallParams = (i32 ,) ; let args = (idx ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (255usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "ItemList" , "get_item_language" , self . object_ptr , args ,) } } pub fn set_item_icon_transposed (& mut self , idx : i32 , transposed : bool ,) { type CallRet = () ; type CallParams = (i32 , bool ,) ; let args = (idx , transposed ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (256usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "ItemList" , "set_item_icon_transposed" , self . object_ptr , args ,) } } pub fn is_item_icon_transposed (& self , idx : i32 ,) -> bool { type CallRet = bool ; type CallParams = (i32 ,) ; let args = (idx ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (257usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "ItemList" , "is_item_icon_transposed" , self . object_ptr , args ,) } } pub fn set_item_icon_region (& mut self , idx : i32 , rect : Rect2 ,) { type CallRet = () ; type CallParams = (i32 , Rect2 ,) ; let args = (idx , rect ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (258usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "ItemList" , "set_item_icon_region" , self . object_ptr , args ,) } } pub fn get_item_icon_region (& self , idx : i32 ,) -> Rect2 { type CallRet = Rect2 ; type CallParams = (i32 ,) ; let args = (idx ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (259usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "ItemList" , "get_item_icon_region" , self . object_ptr , args ,) } } pub fn set_item_icon_modulate (& mut self , idx : i32 , modulate : Color ,) { type CallRet = () ; type CallParams = (i32 , Color ,) ; let args = (idx , modulate ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (260usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "ItemList" , "set_item_icon_modulate" , self . object_ptr , args ,) } } pub fn get_item_icon_modulate (& self , idx : i32 ,) -> Color { type CallRet = Color ; type CallParams = (i32 ,) ; let args = (idx ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (261usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "ItemList" , "get_item_icon_modulate" , self . object_ptr , args ,) } } pub fn set_item_selectable (& mut self , idx : i32 , selectable : bool ,) { type CallRet = () ; type CallParams = (i32 , bool ,) ; let args = (idx , selectable ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (262usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "ItemList" , "set_item_selectable" , self . object_ptr , args ,) } } pub fn is_item_selectable (& self , idx : i32 ,) -> bool { type CallRet = bool ; type CallParams = (i32 ,) ; let args = (idx ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (263usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "ItemList" , "is_item_selectable" , self . object_ptr , args ,) } } pub fn set_item_disabled (& mut self , idx : i32 , disabled : bool ,) { type CallRet = () ; type CallParams = (i32 , bool ,) ; let args = (idx , disabled ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (264usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "ItemList" , "set_item_disabled" , self . object_ptr , args ,) } } pub fn is_item_disabled (& self , idx : i32 ,) -> bool { type CallRet = bool ; type CallParams = (i32 ,) ; let args = (idx ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (265usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "ItemList" , "is_item_disabled" , self . object_ptr , args ,) } } pub fn set_item_metadata (& mut self , idx : i32 , metadata : & Variant ,) { type CallRet = () ; type CallParams < 'a0 , > = (i32 , CowArg < 'a0 , Variant > ,) ; let args = (idx , CowArg :: Borrowed (metadata) ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (266usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "ItemList" , "set_item_metadata" , self . object_ptr , args ,) } } pub fn get_item_metadata (& self , idx : i32 ,) -> Variant { type CallRet = Variant ; type CallParams = (i32 ,) ; let args = (idx ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (267usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "ItemList" , "get_item_metadata" , self . object_ptr , args ,) } } pub fn set_item_custom_bg_color (& mut self , idx : i32 , custom_bg_color : Color ,) { type CallRet = () ; type CallParams = (i32 , Color ,) ; let args = (idx , custom_bg_color ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (268usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "ItemList" , "set_item_custom_bg_color" , self . object_ptr , args ,) } } pub fn get_item_custom_bg_color (& self , idx : i32 ,) -> Color { type CallRet = Color ; type CallParams = (i32 ,) ; let args = (idx ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (269usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "ItemList" , "get_item_custom_bg_color" , self . object_ptr , args ,) } } pub fn set_item_custom_fg_color (& mut self , idx : i32 , custom_fg_color : Color ,) { type CallRet = () ; type CallParams = (i32 , Color ,) ; let args = (idx , custom_fg_color ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (270usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "ItemList" , "set_item_custom_fg_color" , self . object_ptr , args ,) } } pub fn get_item_custom_fg_color (& self , idx : i32 ,) -> Color { type CallRet = Color ; type CallParams = (i32 ,) ; let args = (idx ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (271usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "ItemList" , "get_item_custom_fg_color" , self . object_ptr , args ,) } } pub (crate) fn get_item_rect_full (& self , idx : i32 , expand : bool ,) -> Rect2 { type CallRet = Rect2 ; type CallParams = (i32 , bool ,) ; let args = (idx , expand ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (272usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "ItemList" , "get_item_rect" , self . object_ptr , args ,) } } # [inline] pub fn get_item_rect (& self , idx : i32 ,) -> Rect2 { self . get_item_rect_ex (idx ,) . done () } # [inline] pub fn get_item_rect_ex < 'ex > (& 'ex self , idx : i32 ,) -> super :: ExGetItemRect < 'ex > { super :: ExGetItemRect :: new (self , idx ,) } pub fn set_item_tooltip_enabled (& mut self , idx : i32 , enable : bool ,) { type CallRet = () ; type CallParams = (i32 , bool ,) ; let args = (idx , enable ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (273usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "ItemList" , "set_item_tooltip_enabled" , self . object_ptr , args ,) } } pub fn is_item_tooltip_enabled (& self , idx : i32 ,) -> bool { type CallRet = bool ; type CallParams = (i32 ,) ; let args = (idx ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (274usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "ItemList" , "is_item_tooltip_enabled" , self . object_ptr , args ,) } } pub fn set_item_tooltip (& mut self , idx : i32 , tooltip : impl AsArg < GString > ,) { type CallRet = () ; type CallParams < 'a0 , > = (i32 , CowArg < 'a0 , GString > ,) ; let args = (idx , tooltip . into_arg () ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (275usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "ItemList" , "set_item_tooltip" , self . object_ptr , args ,) } } pub fn get_item_tooltip (& self , idx : i32 ,) -> GString { type CallRet = GString ; type CallParams = (i32 ,) ; let args = (idx ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (276usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "ItemList" , "get_item_tooltip" , self . object_ptr , args ,) } } pub (crate) fn select_full (& mut self , idx : i32 , single : bool ,) { type CallRet = () ; type CallParams = (i32 , bool ,) ; let args = (idx , single ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (277usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "ItemList" , "select" , self . object_ptr , args ,) } } # [inline] pub fn select (& mut self , idx : i32 ,) { self . select_ex (idx ,) . done () } # [inline] pub fn select_ex < 'ex > (& 'ex mut self , idx : i32 ,) -> super :: ExSelect < 'ex > { super :: ExSelect :: new (self , idx ,) } pub fn deselect (& mut self , idx : i32 ,) { type CallRet = () ; type CallParams = (i32 ,) ; let args = (idx ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (278usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "ItemList" , "deselect" , self . object_ptr , args ,) } } pub fn deselect_all (& mut self ,) { type CallRet = () ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (279usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "ItemList" , "deselect_all" , self . object_ptr , args ,) } } pub fn is_selected (& self , idx : i32 ,) -> bool { type CallRet = bool ; type CallParams = (i32 ,) ; let args = (idx ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (280usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "ItemList" , "is_selected" , self . object_ptr , args ,) } } pub fn get_selected_items (& mut self ,) -> PackedInt32Array { type CallRet = PackedInt32Array ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (281usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "ItemList" , "get_selected_items" , self . object_ptr , args ,) } } pub fn move_item (& mut self , from_idx : i32 , to_idx : i32 ,) { type CallRet = () ; type CallParams = (i32 , i32 ,) ; let args = (from_idx , to_idx ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (282usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "ItemList" , "move_item" , self . object_ptr , args ,) } } pub fn set_item_count (& mut self , count : i32 ,) { type CallRet = () ; type CallParams = (i32 ,) ; let args = (count ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (283usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "ItemList" , "set_item_count" , self . object_ptr , args ,) } } pub fn get_item_count (& self ,) -> i32 { type CallRet = i32 ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (284usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "ItemList" , "get_item_count" , self . object_ptr , args ,) } } pub fn remove_item (& mut self , idx : i32 ,) { type CallRet = () ; type CallParams = (i32 ,) ; let args = (idx ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (285usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "ItemList" , "remove_item" , self . object_ptr , args ,) } } pub fn clear (& mut self ,) { type CallRet = () ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (286usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "ItemList" , "clear" , self . object_ptr , args ,) } } pub fn sort_items_by_text (& mut self ,) { type CallRet = () ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (287usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "ItemList" , "sort_items_by_text" , self . object_ptr , args ,) } } pub fn set_fixed_column_width (& mut self , width : i32 ,) { type CallRet = () ; type CallParams = (i32 ,) ; let args = (width ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (288usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "ItemList" , "set_fixed_column_width" , self . object_ptr , args ,) } } pub fn get_fixed_column_width (& self ,) -> i32 { type CallRet = i32 ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (289usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "ItemList" , "get_fixed_column_width" , self . object_ptr , args ,) } } pub fn set_same_column_width (& mut self , enable : bool ,) { type CallRet = () ; type CallParams = (bool ,) ; let args = (enable ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (290usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "ItemList" , "set_same_column_width" , self . object_ptr , args ,) } } pub fn is_same_column_width (& self ,) -> bool { type CallRet = bool ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (291usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "ItemList" , "is_same_column_width" , self . object_ptr , args ,) } } pub fn set_max_text_lines (& mut self , lines : i32 ,) { type CallRet = () ; type CallParams = (i32 ,) ; let args = (lines ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (292usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "ItemList" , "set_max_text_lines" , self . object_ptr , args ,) } } pub fn get_max_text_lines (& self ,) -> i32 { type CallRet = i32 ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (293usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "ItemList" , "get_max_text_lines" , self . object_ptr , args ,) } } pub fn set_max_columns (& mut self , amount : i32 ,) { type CallRet = () ; type CallParams = (i32 ,) ; let args = (amount ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (294usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "ItemList" , "set_max_columns" , self . object_ptr , args ,) } } pub fn get_max_columns (& self ,) -> i32 { type CallRet = i32 ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (295usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "ItemList" , "get_max_columns" , self . object_ptr , args ,) } } pub fn set_select_mode (& mut self , mode : crate :: classes :: item_list :: SelectMode ,) { type CallRet = () ; type CallParams = (crate :: classes :: item_list :: SelectMode ,) ; let args = (mode ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (296usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "ItemList" , "set_select_mode" , self . object_ptr , args ,) } } pub fn get_select_mode (& self ,) -> crate :: classes :: item_list :: SelectMode { type CallRet = crate :: classes :: item_list :: SelectMode ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (297usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "ItemList" , "get_select_mode" , self . object_ptr , args ,) } } pub fn set_icon_mode (& mut self , mode : crate :: classes :: item_list :: IconMode ,) { type CallRet = () ; type CallParams = (crate :: classes :: item_list :: IconMode ,) ; let args = (mode ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (298usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "ItemList" , "set_icon_mode" , self . object_ptr , args ,) } } pub fn get_icon_mode (& self ,) -> crate :: classes :: item_list :: IconMode { type CallRet = crate :: classes :: item_list :: IconMode ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (299usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "ItemList" , "get_icon_mode" , self . object_ptr , args ,) } } pub fn set_fixed_icon_size (& mut self , size : Vector2i ,) { type CallRet = () ; type CallParams = (Vector2i ,) ; let args = (size ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (300usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "ItemList" , "set_fixed_icon_size" , self . object_ptr , args ,) } } pub fn get_fixed_icon_size (& self ,) -> Vector2i { type CallRet = Vector2i ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (301usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "ItemList" , "get_fixed_icon_size" , self . object_ptr , args ,) } } pub fn set_icon_scale (& mut self , scale : f32 ,) { type CallRet = () ; type CallParams = (f32 ,) ; let args = (scale ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (302usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "ItemList" , "set_icon_scale" , self . object_ptr , args ,) } } pub fn get_icon_scale (& self ,) -> f32 { type CallRet = f32 ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (303usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "ItemList" , "get_icon_scale" , self . object_ptr , args ,) } } pub fn set_allow_rmb_select (& mut self , allow : bool ,) { type CallRet = () ; type CallParams = (bool ,) ; let args = (allow ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (304usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "ItemList" , "set_allow_rmb_select" , self . object_ptr , args ,) } } pub fn get_allow_rmb_select (& self ,) -> bool { type CallRet = bool ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (305usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "ItemList" , "get_allow_rmb_select" , self . object_ptr , args ,) } } pub fn set_allow_reselect (& mut self , allow : bool ,) { type CallRet = () ; type CallParams = (bool ,) ; let args = (allow ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (306usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "ItemList" , "set_allow_reselect" , self . object_ptr , args ,) } } pub fn get_allow_reselect (& self ,) -> bool { type CallRet = bool ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (307usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "ItemList" , "get_allow_reselect" , self . object_ptr , args ,) } } pub fn set_allow_search (& mut self , allow : bool ,) { type CallRet = () ; type CallParams = (bool ,) ; let args = (allow ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (308usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "ItemList" , "set_allow_search" , self . object_ptr , args ,) } } pub fn get_allow_search (& self ,) -> bool { type CallRet = bool ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (309usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "ItemList" , "get_allow_search" , self . object_ptr , args ,) } } pub fn set_auto_height (& mut self , enable : bool ,) { type CallRet = () ; type CallParams = (bool ,) ; let args = (enable ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (310usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "ItemList" , "set_auto_height" , self . object_ptr , args ,) } } pub fn has_auto_height (& self ,) -> bool { type CallRet = bool ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (311usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "ItemList" , "has_auto_height" , self . object_ptr , args ,) } } pub fn is_anything_selected (& mut self ,) -> bool { type CallRet = bool ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (312usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "ItemList" , "is_anything_selected" , self . object_ptr , args ,) } } pub (crate) fn get_item_at_position_full (& self , position : Vector2 , exact : bool ,) -> i32 { type CallRet = i32 ; type CallParams = (Vector2 , bool ,) ; let args = (position , exact ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (313usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "ItemList" , "get_item_at_position" , self . object_ptr , args ,) } } # [inline] pub fn get_item_at_position (& self , position : Vector2 ,) -> i32 { self . get_item_at_position_ex (position ,) . done () } # [inline] pub fn get_item_at_position_ex < 'ex > (& 'ex self , position : Vector2 ,) -> super :: ExGetItemAtPosition < 'ex > { super :: ExGetItemAtPosition :: new (self , position ,) } pub fn ensure_current_is_visible (& mut self ,) { type CallRet = () ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (314usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "ItemList" , "ensure_current_is_visible" , self . object_ptr , args ,) } } pub fn force_update_list_size (& mut self ,) { type CallRet = () ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (315usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "ItemList" , "force_update_list_size" , self . object_ptr , args ,) } } # [doc = "Typed signals of this class and its bases; see [`SignalsOfItemList`][super::item_list::SignalsOfItemList]."] pub fn signals (& mut self) -> super :: SignalsOfItemList < '_ > { super :: SignalsOfItemList :: __new (crate :: signal :: SignalObject :: __new (self . object_ptr)) } } impl crate :: obj :: GodotClass for ItemList { const CLASS_NAME : & 'static str = "ItemList" ; type Base = crate :: classes :: Control ; type Memory = crate :: obj :: MemManual ; const INIT_LEVEL : crate :: init :: InitLevel = crate :: init :: InitLevel :: Scene ; } impl crate :: obj :: EngineClass for ItemList { fn as_object_ptr (& self) -> sys :: GDExtensionObjectPtr { self . object_ptr } } unsafe impl crate :: obj :: Inherits < crate :: classes :: Control > for ItemList { } unsafe impl crate :: obj :: Inherits < crate :: classes :: CanvasItem > for ItemList { } unsafe impl crate :: obj :: Inherits < crate :: classes :: Node > for ItemList { } unsafe impl crate :: obj :: Inherits < crate :: classes :: Object > for ItemList { } impl crate :: obj :: Instantiable for ItemList { } impl std :: ops :: Deref for ItemList { type Target = crate :: classes :: Control ; fn deref (& self) -> & Self :: Target { unsafe { std :: mem :: transmute :: < & Self , & Self :: Target > (self) } } } impl std :: ops :: DerefMut for ItemList { fn deref_mut (& mut self) -> & mut Self :: Target { unsafe { std :: mem :: transmute :: < & mut Self , & mut Self :: Target > (self) } } } } # [doc = "Default-param extender for [`ItemList::add_item_ex`][super::ItemList::add_item_ex]."] # [must_use] pub struct ExAddItem < 'ex > { surround_object : & 'ex mut re_export :: ItemList , text : CowArg < 'ex , GString > , icon : ObjectArg < crate :: classes :: Texture2D > , selectable : bool , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExAddItem < 'ex > { fn new (surround_object : & 'ex mut re_export :: ItemList , text : CowArg < 'ex , GString > ,) -> Self { Self { surround_object , text , icon : Gd :: null_arg () , selectable : true , } } # [inline] pub fn icon (self , value : impl AsObjectArg < crate :: classes :: Texture2D >) -> Self { Self { icon : value . as_object_arg () , .. self } } # [inline] pub fn selectable (self , value : bool) -> Self { Self { selectable : value , .. self } } # [inline] pub fn done (self) -> i32 { re_export :: ItemList :: add_item_full (self . surround_object , self . text , self . icon , self . selectable ,) } } # [doc = "Default-param extender for [`ItemList::add_icon_item_ex`][super::ItemList::add_icon_item_ex]."] # [must_use] pub struct ExAddIconItem < 'ex > { surround_object : & 'ex mut re_export :: ItemList , icon : ObjectArg < crate :: classes :: Texture2D > , selectable : bool , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExAddIconItem < 'ex > { fn new (surround_object : & 'ex mut re_export :: ItemList , icon : ObjectArg < crate :: classes :: Texture2D > ,) -> Self { Self { surround_object , icon , selectable : true , } } # [inline] pub fn selectable (self , value : bool) -> Self { Self { selectable : value , .. self } } # [inline] pub fn done (self) -> i32 { re_export :: ItemList :: add_icon_item_full (self . surround_object , self . icon , self . selectable ,) } } # [doc = "Default-param extender for [`ItemList::get_item_rect_ex`][super::ItemList::get_item_rect_ex]."] # [must_use] pub struct ExGetItemRect < 'ex > { surround_object : & 'ex re_export :: ItemList , idx : i32 , expand : bool , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExGetItemRect < 'ex > { fn new (surround_object : & 'ex re_export :: ItemList , idx : i32 ,) -> Self { Self { surround_object , idx , expand : true , } } # [inline] pub fn expand (self , value : bool) -> Self { Self { expand : value , .. self } } # [inline] pub fn done (self) -> Rect2 { re_export :: ItemList :: get_item_rect_full (self . surround_object , self . idx , self . expand ,) } } # [doc = "Default-param extender for [`ItemList::select_ex`][super::ItemList::select_ex]."] # [must_use] pub struct ExSelect < 'ex > { surround_object : & 'ex mut re_export :: ItemList , idx : i32 , single : bool , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExSelect < 'ex > { fn new (surround_object : & 'ex mut re_export :: ItemList , idx : i32 ,) -> Self { Self { surround_object , idx , single : true , } } # [inline] pub fn single (self , value : bool) -> Self { Self { single : value , .. self } } # [inline] pub fn done (self) { re_export :: ItemList :: select_full (self . surround_object , self . idx , self . single ,) } } # [doc = "Default-param extender for [`ItemList::get_item_at_position_ex`][super::ItemList::get_item_at_position_ex]."] # [must_use] pub struct ExGetItemAtPosition < 'ex > { surround_object : & 'ex re_export :: ItemList , position : Vector2 , exact : bool , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExGetItemAtPosition < 'ex > { fn new (surround_object : & 'ex re_export :: ItemList , position : Vector2 ,) -> Self { Self { surround_object , position , exact : false , } } # [inline] pub fn exact (self , value : bool) -> Self { Self { exact : value , .. self } } # [inline] pub fn done (self) -> i32 { re_export :: ItemList :: get_item_at_position_full (self . surround_object , self . position , self . exact ,) } } # [repr (transparent)] # [derive (Copy , Clone , Eq , PartialEq , Hash ,)] pub struct IconMode { ord : i32 } impl IconMode { # [doc (alias = "ICON_MODE_TOP")] # [doc = "Godot enumerator name: `ICON_MODE_TOP`"] pub const TOP : Self = Self { ord : 0 } ; # [doc (alias = "ICON_MODE_LEFT")] # [doc = "Godot enumerator name: `ICON_MODE_LEFT`"] pub const LEFT : Self = Self { ord : 1 } ; # [allow (unreachable_patterns)] fn enumerator_name (self) -> Option < & 'static str > { match self { Self :: TOP => Some ("TOP") , Self :: LEFT => Some ("LEFT") , _ => None , } } } impl std :: fmt :: Debug for IconMode { fn fmt (& self , f : & mut std :: fmt :: Formatter < '_ >) -> std :: fmt :: Result { match self . enumerator_name () { Some (enumerator) => f . write_str (enumerator) , None => f . debug_struct (stringify ! (IconMode)) . field ("ord" , & self . ord) . finish () , } } } impl crate :: obj :: EngineEnum for IconMode { fn try_from_ord (ord : i32) -> Option < Self > { match ord { 0 | 1 => Some (Self { ord }) , _ => None , } } fn ord (self) -> i32 { self . ord } } impl crate :: meta :: GodotConvert for IconMode { type Via = i32 ; } impl crate :: meta :: ToGodot for IconMode { fn to_godot (& self) -> Self :: Via { < Self as crate :: obj :: EngineEnum > :: ord (* self) } } impl crate :: meta :: FromGodot for IconMode { fn try_from_godot (via : Self :: Via) -> std :: result :: Result < Self , crate :: meta :: ConvertError > { Ok (Self { ord : via }) } } # [repr (transparent)] # [derive (Copy , Clone , Eq , PartialEq , Hash ,)] pub struct SelectMode { ord : i32 } impl SelectMode { # [doc (alias = "SELECT_SINGLE")] # [doc = "Godot enumerator name: `SELECT_SINGLE`"] pub const SINGLE : Self = Self { ord : 0 } ; # [doc (alias = "SELECT_MULTI")] # [doc = "Godot enumerator name: `SELECT_MULTI`"] pub const MULTI : Self = Self { ord : 1 } ; # [allow (unreachable_patterns)] fn enumerator_name (self) -> Option < & 'static str > { match self { Self :: SINGLE => Some ("SINGLE") , Self :: MULTI => Some ("MULTI") , _ => None , } } } impl std :: fmt :: Debug for SelectMode { fn fmt (& self , f : & mut std :: fmt :: Formatter < '_ >) -> std :: fmt :: Result { match self . enumerator_name () { Some (enumerator) => f . write_str (enumerator) , None => f . debug_struct (stringify ! (SelectMode)) . field ("ord" , & self . ord) . finish () , } } } impl crate :: obj :: EngineEnum for SelectMode { fn try_from_ord (ord : i32) -> Option < Self > { match ord { 0 | 1 => Some (Self { ord }) , _ => None , } } fn ord (self) -> i32 { self . ord } } impl crate :: meta :: GodotConvert for SelectMode { type Via = i32 ; } impl crate :: meta :: ToGodot for SelectMode { fn to_godot (& self) -> Self :: Via { < Self as crate :: obj :: EngineEnum > :: ord (* self) } } impl crate :: meta :: FromGodot for SelectMode { fn try_from_godot (via : Self :: Via) -> std :: result :: Result < Self , crate :: meta :: ConvertError > { Ok (Self { ord : via }) } } # [doc = "Properties declared by [`ItemList`][super::ItemList], as interned engine names."] pub struct PropertyName ; impl PropertyName { pub const SELECT_MODE : InternedName = InternedName :: new ("select_mode") ; pub const ALLOW_RESELECT : InternedName = InternedName :: new ("allow_reselect") ; pub const ALLOW_RMB_SELECT : InternedName = InternedName :: new ("allow_rmb_select") ; pub const ALLOW_SEARCH : InternedName = InternedName :: new ("allow_search") ; pub const MAX_TEXT_LINES : InternedName = InternedName :: new ("max_text_lines") ; pub const AUTO_HEIGHT : InternedName = InternedName :: new ("auto_height") ; pub const TEXT_OVERRUN_BEHAVIOR : InternedName = InternedName :: new ("text_overrun_behavior") ; pub const ITEM_COUNT : InternedName = InternedName :: new ("item_count") ; pub const MAX_COLUMNS : InternedName = InternedName :: new ("max_columns") ; pub const SAME_COLUMN_WIDTH : InternedName = InternedName :: new ("same_column_width") ; pub const FIXED_COLUMN_WIDTH : InternedName = InternedName :: new ("fixed_column_width") ; pub const ICON_MODE : InternedName = InternedName :: new ("icon_mode") ; pub const ICON_SCALE : InternedName = InternedName :: new ("icon_scale") ; pub const FIXED_ICON_SIZE : InternedName = InternedName :: new ("fixed_icon_size") ; } # [doc = "Methods declared by [`ItemList`][super::ItemList], as interned engine names."] pub struct MethodName ; impl MethodName { pub const ADD_ITEM : InternedName = InternedName :: new ("add_item") ; pub const ADD_ICON_ITEM : InternedName = InternedName :: new ("add_icon_item") ; pub const SET_ITEM_TEXT : InternedName = InternedName :: new ("set_item_text") ; pub const GET_ITEM_TEXT : InternedName = InternedName :: new ("get_item_text") ; pub const SET_ITEM_ICON : InternedName = InternedName :: new ("set_item_icon") ; pub const GET_ITEM_ICON : InternedName = InternedName :: new ("get_item_icon") ; pub const SET_ITEM_TEXT_DIRECTION : InternedName = InternedName :: new ("set_item_text_direction") ; pub const GET_ITEM_TEXT_DIRECTION : InternedName = InternedName :: new ("get_item_text_direction") ; pub const SET_ITEM_LANGUAGE : InternedName = InternedName :: new ("set_item_language") ; pub const GET_ITEM_LANGUAGE : InternedName = InternedName :: new ("get_item_language") ; pub const SET_ITEM_ICON_TRANSPOSED : InternedName = InternedName :: new ("set_item_icon_transposed") ; pub const IS_ITEM_ICON_TRANSPOSED : InternedName = InternedName :: new ("is_item_icon_transposed") ; pub const SET_ITEM_ICON_REGION : InternedName = InternedName :: new ("set_item_icon_region") ; pub const GET_ITEM_ICON_REGION : InternedName = InternedName :: new ("get_item_icon_region") ; pub const SET_ITEM_ICON_MODULATE : InternedName = InternedName :: new ("set_item_icon_modulate") ; pub const GET_ITEM_ICON_MODULATE : InternedName = InternedName :: new ("get_item_icon_modulate") ; pub const SET_ITEM_SELECTABLE : InternedName = InternedName :: new ("set_item_selectable") ; pub const IS_ITEM_SELECTABLE : InternedName = InternedName :: new ("is_item_selectable") ; pub const SET_ITEM_DISABLED : InternedName = InternedName :: new ("set_item_disabled") ; pub const IS_ITEM_DISABLED : InternedName = InternedName :: new ("is_item_disabled") ; pub const SET_ITEM_METADATA : InternedName = InternedName :: new ("set_item_metadata") ; pub const GET_ITEM_METADATA : InternedName = InternedName :: new ("get_item_metadata") ; pub const SET_ITEM_CUSTOM_BG_COLOR : InternedName = InternedName :: new ("set_item_custom_bg_color") ; pub const GET_ITEM_CUSTOM_BG_COLOR : InternedName = InternedName :: new ("get_item_custom_bg_color") ; pub const SET_ITEM_CUSTOM_FG_COLOR : InternedName = InternedName :: new ("set_item_custom_fg_color") ; pub const GET_ITEM_CUSTOM_FG_COLOR : InternedName = InternedName :: new ("get_item_custom_fg_color") ; pub const GET_ITEM_RECT : InternedName = InternedName :: new ("get_item_rect") ; pub const SET_ITEM_TOOLTIP_ENABLED : InternedName = InternedName :: new ("set_item_tooltip_enabled") ; pub const IS_ITEM_TOOLTIP_ENABLED : InternedName = InternedName :: new ("is_item_tooltip_enabled") ; pub const SET_ITEM_TOOLTIP : InternedName = InternedName :: new ("set_item_tooltip") ; pub const GET_ITEM_TOOLTIP : InternedName = InternedName :: new ("get_item_tooltip") ; pub const SELECT : InternedName = InternedName :: new ("select") ; pub const DESELECT : InternedName = InternedName :: new ("deselect") ; pub const DESELECT_ALL : InternedName = InternedName :: new ("deselect_all") ; pub const IS_SELECTED : InternedName = InternedName :: new ("is_selected") ; pub const GET_SELECTED_ITEMS : InternedName = InternedName :: new ("get_selected_items") ; pub const MOVE_ITEM : InternedName = InternedName :: new ("move_item") ; pub const SET_ITEM_COUNT : InternedName = InternedName :: new ("set_item_count") ; pub const GET_ITEM_COUNT : InternedName = InternedName :: new ("get_item_count") ; pub const REMOVE_ITEM : InternedName = InternedName :: new ("remove_item") ; pub const CLEAR : InternedName = InternedName :: new ("clear") ; pub const SORT_ITEMS_BY_TEXT : InternedName = InternedName :: new ("sort_items_by_text") ; pub const SET_FIXED_COLUMN_WIDTH : InternedName = InternedName :: new ("set_fixed_column_width") ; pub const GET_FIXED_COLUMN_WIDTH : InternedName = InternedName :: new ("get_fixed_column_width") ; pub const SET_SAME_COLUMN_WIDTH : InternedName = InternedName :: new ("set_same_column_width") ; pub const IS_SAME_COLUMN_WIDTH : InternedName = InternedName :: new ("is_same_column_width") ; pub const SET_MAX_TEXT_LINES : InternedName = InternedName :: new ("set_max_text_lines") ; pub const GET_MAX_TEXT_LINES : InternedName = InternedName :: new ("get_max_text_lines") ; pub const SET_MAX_COLUMNS : InternedName = InternedName :: new ("set_max_columns") ; pub const GET_MAX_COLUMNS : InternedName = InternedName :: new ("get_max_columns") ; pub const SET_SELECT_MODE : InternedName = InternedName :: new ("set_select_mode") ; pub const GET_SELECT_MODE : InternedName = InternedName :: new ("get_select_mode") ; pub const SET_ICON_MODE : InternedName = InternedName :: new ("set_icon_mode") ; pub const GET_ICON_MODE : InternedName = InternedName :: new ("get_icon_mode") ; pub const SET_FIXED_ICON_SIZE : InternedName = InternedName :: new ("set_fixed_icon_size") ; pub const GET_FIXED_ICON_SIZE : InternedName = InternedName :: new ("get_fixed_icon_size") ; pub const SET_ICON_SCALE : InternedName = InternedName :: new ("set_icon_scale") ; pub const GET_ICON_SCALE : InternedName = InternedName :: new ("get_icon_scale") ; pub const SET_ALLOW_RMB_SELECT : InternedName = InternedName :: new ("set_allow_rmb_select") ; pub const GET_ALLOW_RMB_SELECT : InternedName = InternedName :: new ("get_allow_rmb_select") ; pub const SET_ALLOW_RESELECT : InternedName = InternedName :: new ("set_allow_reselect") ; pub const GET_ALLOW_RESELECT : InternedName = InternedName :: new ("get_allow_reselect") ; pub const SET_ALLOW_SEARCH : InternedName = InternedName :: new ("set_allow_search") ; pub const GET_ALLOW_SEARCH : InternedName = InternedName :: new ("get_allow_search") ; pub const SET_AUTO_HEIGHT : InternedName = InternedName :: new ("set_auto_height") ; pub const HAS_AUTO_HEIGHT : InternedName = InternedName :: new ("has_auto_height") ; pub const IS_ANYTHING_SELECTED : InternedName = InternedName :: new ("is_anything_selected") ; pub const GET_ITEM_AT_POSITION : InternedName = InternedName :: new ("get_item_at_position") ; pub const ENSURE_CURRENT_IS_VISIBLE : InternedName = InternedName :: new ("ensure_current_is_visible") ; pub const FORCE_UPDATE_LIST_SIZE : InternedName = InternedName :: new ("force_update_list_size") ; } # [doc = "Signals declared by [`ItemList`][super::ItemList], as interned engine names."] pub struct SignalName ; impl SignalName { pub const ITEM_SELECTED : InternedName = InternedName :: new ("item_selected") ; pub const EMPTY_CLICKED : InternedName = InternedName :: new ("empty_clicked") ; pub const ITEM_CLICKED : InternedName = InternedName :: new ("item_clicked") ; pub const MULTI_SELECTED : InternedName = InternedName :: new ("multi_selected") ; pub const ITEM_ACTIVATED : InternedName = InternedName :: new ("item_activated") ; } # [doc = "A collection of signals for the [`ItemList`][crate::classes::ItemList] class."] pub struct SignalsOfItemList < 'c > { __base : crate :: classes :: control :: SignalsOfControl < 'c > , } impl < 'c > SignalsOfItemList < 'c > { # [doc (hidden)] pub fn __new (object : SignalObject < 'c >) -> Self { Self { __base : crate :: classes :: control :: SignalsOfControl :: __new (object) } } # [doc (hidden)] pub fn __object (& self) -> SignalObject < 'c > { self . __base . __object () } # [doc = "Signature: `(index: i64)`"] pub fn item_selected (& mut self) -> SigItemSelected < 'c > { SigItemSelected { typed : TypedSignal :: __new (self . __object () , "item_selected") , } } # [doc = "Signature: `(at_position: Vector2, mouse_button_index: i64)`"] pub fn empty_clicked (& mut self) -> SigEmptyClicked < 'c > { SigEmptyClicked { typed : TypedSignal :: __new (self . __object () , "empty_clicked") , } } # [doc = "Signature: `(index: i64, at_position: Vector2, mouse_button_index: i64)`"] pub fn item_clicked (& mut self) -> SigItemClicked < 'c > { SigItemClicked { typed : TypedSignal :: __new (self . __object () , "item_clicked") , } } # [doc = "Signature: `(index: i64, selected: bool)`"] pub fn multi_selected (& mut self) -> SigMultiSelected < 'c > { SigMultiSelected { typed : TypedSignal :: __new (self . __object () , "multi_selected") , } } # [doc = "Signature: `(index: i64)`"] pub fn item_activated (& mut self) -> SigItemActivated < 'c > { SigItemActivated { typed : TypedSignal :: __new (self . __object () , "item_activated") , } } } impl < 'c > std :: ops :: Deref for SignalsOfItemList < 'c > { type Target = crate :: classes :: control :: SignalsOfControl < 'c > ; fn deref (& self) -> & Self :: Target { & self . __base } } impl std :: ops :: DerefMut for SignalsOfItemList < '_ > { fn deref_mut (& mut self) -> & mut Self :: Target { & mut self . __base } } type TypedSigItemSelected < 'c > = TypedSignal < 'c , (i64 ,) > ; pub struct SigItemSelected < 'c > { typed : TypedSigItemSelected < 'c > , } impl SigItemSelected < '_ > { pub fn emit (& mut self , index : i64 ,) { self . typed . emit_tuple ((index ,)) ; } } impl < 'c > std :: ops :: Deref for SigItemSelected < 'c > { type Target = TypedSigItemSelected < 'c > ; fn deref (& self) -> & Self :: Target { & self . typed } } impl std :: ops :: DerefMut for SigItemSelected < '_ > { fn deref_mut (& mut self) -> & mut Self :: Target { & mut self . typed } } type TypedSigEmptyClicked < 'c > = TypedSignal < 'c , (Vector2 , i64 ,) > ; pub struct SigEmptyClicked < 'c > { typed : TypedSigEmptyClicked < 'c > , } impl SigEmptyClicked < '_ > { pub fn emit (& mut self , at_position : Vector2 , mouse_button_index : i64 ,) { self . typed . emit_tuple ((at_position , mouse_button_index ,)) ; } } impl < 'c > std :: ops :: Deref for SigEmptyClicked < 'c > { type Target = TypedSigEmptyClicked < 'c > ; fn deref (& self) -> & Self :: Target { & self . typed } } impl std :: ops :: DerefMut for SigEmptyClicked < '_ > { fn deref_mut (& mut self) -> & mut Self :: Target { & mut self . typed } } type TypedSigItemClicked < 'c > = TypedSignal < 'c , (i64 , Vector2 , i64 ,) > ; pub struct SigItemClicked < 'c > { typed : TypedSigItemClicked < 'c > , } impl SigItemClicked < '_ > { pub fn emit (& mut self , index : i64 , at_position : Vector2 , mouse_button_index : i64 ,) { self . typed . emit_tuple ((index , at_position , mouse_button_index ,)) ; } } impl < 'c > std :: ops :: Deref for SigItemClicked < 'c > { type Target = TypedSigItemClicked < 'c > ; fn deref (& self) -> & Self :: Target { & self . typed } } impl std :: ops :: DerefMut for SigItemClicked < '_ > { fn deref_mut (& mut self) -> & mut Self :: Target { & mut self . typed } } type TypedSigMultiSelected < 'c > = TypedSignal < 'c , (i64 , bool ,) > ; pub struct SigMultiSelected < 'c > { typed : TypedSigMultiSelected < 'c > , } impl SigMultiSelected < '_ > { pub fn emit (& mut self , index : i64 , selected : bool ,) { self . typed . emit_tuple ((index , selected ,)) ; } } impl < 'c > std :: ops :: Deref for SigMultiSelected < 'c > { type Target = TypedSigMultiSelected < 'c > ; fn deref (& self) -> & Self :: Target { & self . typed } } impl std :: ops :: DerefMut for SigMultiSelected < '_ > { fn deref_mut (& mut self) -> & mut Self :: Target { & mut self . typed } } type TypedSigItemActivated < 'c > = TypedSignal < 'c , (i64 ,) > ; pub struct SigItemActivated < 'c > { typed : TypedSigItemActivated < 'c > , } impl SigItemActivated < '_ > { pub fn emit (& mut self , index : i64 ,) { self . typed . emit_tuple ((index ,)) ; } } impl < 'c > std :: ops :: Deref for SigItemActivated < 'c > { type Target = TypedSigItemActivated < 'c > ; fn deref (& self) -> & Self :: Target { & self . typed } } impl std :: ops :: DerefMut for SigItemActivated < '_ > { fn deref_mut (& mut self) -> & mut Self :: Target { & mut self . typed } }