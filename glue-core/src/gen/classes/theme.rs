# ! [doc = "Sidecar module for class [`Theme`][crate::classes::Theme]."] # [allow (unused_imports)] use crate :: builtin :: * ; # [allow (unused_imports)] use crate :: meta :: { AsArg , AsObjectArg , CowArg , InternedName , ObjectArg , Signature } ; # [allow (unused_imports)] use crate :: obj :: Gd ; # [allow (unused_imports)] use crate :: signal :: { SignalObject , TypedSignal } ; use crate :: sys ; pub (super) mod re_export { use super :: * ; # [doc = "Godot class `Theme`.\n\nInherits [`Resource`][crate::classes::Resource].\n\nRelated symbols (default-param builders, enums, interned names, signals) are in [`theme`][crate::classes::theme]."] # [derive (Debug)] # [repr (C)] pub struct Theme { object_ptr : sys :: GDExtensionObjectPtr , } impl Theme { pub fn set_icon (& mut self , name : impl AsArg < StringName > , theme_type : impl AsArg < StringName > , texture : impl AsObjectArg < crate :: classes :: Texture2D > ,) { type CallRet = () ; type CallParams < 'a0 , 'a1 , > = (CowArg < 'a0 , StringName > , CowArg < 'a1 , StringName > , ObjectArg < crate :: classes :: Texture2D > ,) ; let args = (name . into_arg () , theme_type . into_arg () , texture . as_object_arg () ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (600usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Theme" , "set_icon" , self . object_ptr , args ,) } } pub fn get_icon (& self , name : impl AsArg < StringName > , theme_type : impl AsArg < StringName > ,) -> Option < Gd < crate :: classes :: Texture2D > > { type CallRet = Option < Gd < crate :: classes :: Texture2D > > ; type CallParams < 'a0 , 'a1 , > = (CowArg < 'a0 , StringName > , CowArg < 'a1 , StringName > ,) ; let args = (name . into_arg () , theme_type . into_arg () ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (601usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Theme" , "get_icon" , self . object_ptr , args ,) } } pub fn has_icon (& self , name : impl AsArg < StringName > , theme_type : impl AsArg < StringName > ,) -> bool { type CallRet = bool ; type CallParams < 'a0 , 'a1 , > = (CowArg < 'a0 , StringName > , CowArg < 'a1 , StringName > ,) ; let args = (name . into_arg () , theme_type . into_arg () ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (602usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Theme" , "has_icon" , self . object_ptr , args ,) } } pub fn rename_icon (& mut self , old_name : impl AsArg < StringName > , name : impl AsArg < StringName > , theme_type : impl AsArg < StringName > ,) { type CallRet = () ; type CallParams < 'a0 , 'a1 , 'a2 , > = (CowArg < 'a0 , StringName > , CowArg < 'a1 , StringName > , CowArg < 'a2 , StringName > ,) ; let args = (old_name . into_arg () , name . into_arg () , theme_type . into_arg () ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (603usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Theme" , "rename_icon" , self . object_ptr , args ,) } } pub fn clear_icon (& mut self , name : impl AsArg < StringName > , theme_type : impl AsArg < StringName > ,) { type CallRet = () ; type CallParams < 'a0 , 'a1 , > = (CowArg < 'a0 , StringName > , CowArg < 'a1 , StringName > ,) ; let args = (name . into_arg () , theme_type . into_arg () ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (604usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Theme" , "clear_icon" , self . object_ptr , args ,) } } pub fn has_stylebox (& self , name : impl AsArg < StringName > , theme_type : impl AsArg < StringName > ,) -> bool { type CallRet = bool ; type CallParams < 'a0 , 'a1 , > = (CowArg < 'a0 , StringName > , CowArg < 'a1 , StringName > ,) ; let args = (name . into_arg () , theme_type . into_arg () ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (605usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Theme" , "has_stylebox" , self . object_ptr , args ,) } } pub fn rename_stylebox (& mut self , old_name : impl AsArg < StringName > , name : impl AsArg < StringName > , theme_type : impl AsArg < StringName > ,) { type CallRet = () ; type CallParams < 'a0 , 'a1 , 'a2 , > = (CowArg < 'a0 , StringName > , CowArg < 'a1 , StringName > , CowArg < 'a2 , StringName > ,) ; let args = (old_name . into_arg () , name . into_arg () , theme_type . into_arg () ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (606usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Theme" , "rename_stylebox" , self . object_ptr , args ,) } } pub fn clear_stylebox (& mut self , name : impl AsArg < StringName > , theme_type : impl AsArg < StringName > ,) { type CallRet = () ; type CallParams < 'a0 , 'a1 , > = (CowArg < 'a0 , StringName > , CowArg < 'a1 , StringName > ,) ; let args = (name . into_arg () , theme_type . into_arg () ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (607usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Theme" , "clear_stylebox" , self . object_ptr , args ,) } } pub fn set_font (& mut self , name : impl AsArg < StringName > , theme_type : impl AsArg < StringName > , font : impl AsObjectArg < crate :: classes :: Font > ,) { type CallRet = () ; type CallParams < 'a0 , 'a1 , > = (CowArg < 'a0 , StringName > , CowArg < 'a1 , StringName > , ObjectArg < crate :: classes :: Font > ,) ; let args = (name . into_arg () , theme_type . into_arg () , font . as_object_arg () ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (608usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Theme" , "set_font" , self . object_ptr , args ,) } } pub fn get_font (& self , name : impl AsArg < StringName > , theme_type : impl AsArg < StringName > ,) -> Option < Gd < crate :: classes :: Font > > { type CallRet = Option < Gd < crate :: classes :: Font > > ; type CallParams < 'a0 , 'a1 , > = (CowArg < 'a0 , StringName > , CowArg < 'a1 , StringName > ,) ; let args = (name . into_arg () , theme_type . into_arg () ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (609usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Theme" , "get_font" , self . object_ptr , args ,) } } pub fn has_font (& self , name : impl AsArg < StringName > , theme_type : impl AsArg < StringName > ,) -> bool { type CallRet = bool ; type CallParams < 'a0 , 'a1 , > = (CowArg < 'a0 , StringName > , CowArg < 'a1 , StringName > ,) ; let args = (name . into_arg () , theme_type . into_arg () ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (610usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Theme" , "has_font" , self . object_ptr , args ,) } } pub fn rename_font (& mut self , old_name : impl AsArg < StringName > , name : impl AsArg < StringName > , theme_type : impl AsArg < StringName > ,) { type CallRet = () ; type CallParams < 'a0 , 'a1 , 'a2 , > = (CowArg < 'a0 , StringName > , CowArg < 'a1 , StringName > , CowArg < 'a2 , StringName > ,) ; let args = (old_name . into_arg () , name . into_arg () , theme_type . into_arg () ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (611usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Theme" , "rename_font" , self . object_ptr , args ,) } } pub fn clear_font (& mut self , name : impl AsArg < StringName > , theme_type : impl AsArg < StringName > ,) { type CallRet = () ; type CallParams < 'a0 , 'a1 , > = (CowArg < 'a0 , StringName > , CowArg < 'a1 , StringName > ,) ; let args = (name . into_arg () , theme_type . into_arg () ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (612usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Theme" , "clear_font" , self . object_ptr , args ,) } } pub fn set_font_size (& mut self , name : impl AsArg < StringName > , theme_type : impl AsArg < StringName > , font_size : i32 ,) { type CallRet = () ; type CallParams < 'a0 , 'a1 , > = (CowArg < 'a0 , StringName > , CowArg < 'a1 , StringName > , i32 ,) ; let args = (name . into_arg () , theme_type . into_arg () , font_size ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (613usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Theme" , "set_font_size" , self . object_ptr , args ,) } } pub fn get_font_size (& self , name : impl AsArg < StringName > , theme_type : impl AsArg < StringName > ,) -> i32 { type CallRet = i32 ; type CallParams < 'a0 , 'a1 , > = (CowArg < 'a0 , StringName > , CowArg < 'a1 , StringName > ,) ; let args = (name . into_arg () , theme_type . into_arg () ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (614usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Theme" , "get_font_size" , self . object_ptr , args ,) } } pub fn has_font_size (& self , name : impl AsArg < StringName > , theme_type : impl AsArg < StringName > ,) -> bool { type CallRet = bool ; type CallParams < 'a0 , 'a1 , > = (CowArg < 'a0 , StringName > , CowArg < 'a1 , StringName > ,) ; let args = (name . into_arg () , theme_type . into_arg () ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (615usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Theme" , "has_font_size" , self . object_ptr , args ,) } } pub fn rename_font_size (& mut self , old_name : impl AsArg < StringName > , name : impl AsArg < StringName > , theme_type : impl AsArg < StringName > ,) { type CallRet = () ; type CallParams < 'a0 , 'a1 , 'a2 , > = (CowArg < 'a0 , StringName > , CowArg < 'a1 , StringName > , CowArg < 'a2 , StringName > ,) ; let args = (old_name . into_arg () , name . into_arg () , theme_type . into_arg () ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (616usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Theme" , "rename_font_size" , self . object_ptr , args ,) } } pub fn clear_font_size (& mut self , name : impl AsArg < StringName > , theme_type : impl AsArg < StringName > ,) { type CallRet = () ; type CallParams < 'a0 , 'a1 , > = (CowArg < 'a0 , StringName > , CowArg < 'a1 , StringName > ,) ; let args = (name . into_arg () , theme_type . into_arg () ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (617usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Theme" , "clear_font_size" , self . object_ptr , args ,) } } pub fn set_color (& mut self , name : impl AsArg < StringName > , theme_type : impl AsArg < StringName > , color : Color ,) { type CallRet = () ; type CallParams < 'a0 , 'a1 , > = (CowArg < 'a0 , StringName > , CowArg < 'a1 , StringName > , Color ,) ; let args = (name . into_arg () , theme_type . into_arg () , color ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (618usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Theme" , "set_color" , self . object_ptr , args ,) } } pub fn get_color (& self , name : impl AsArg < StringName > , theme_type : impl AsArg < StringName > ,) -> Color { type CallRet = Color ; type CallParams < 'a0 , 'a1 , > = (CowArg < 'a0 , StringName > , CowArg < 'a1 , StringName > ,) ; let args = (name . into_arg () , theme_type . into_arg () ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (619usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Theme" , "get_color" , self . object_ptr , args ,) } } pub fn has_color (& self , name : impl AsArg < StringName > , theme_type : impl AsArg < StringName > ,) -> bool { type CallRet = bool ; type CallParams < 'a0 , 'a1 , > = (CowArg < 'a0 , StringName > , CowArg < 'a1 , StringName > ,) ; let args = (name . into_arg () , theme_type . into_arg () ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (620usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Theme" , "has_color" , self . object_ptr , args ,) } } pub fn rename_color (& mut self , old_name : impl AsArg < StringName > , name : impl AsArg < StringName > , theme_type : impl AsArg < StringName > ,) { type CallRet = () ; type CallParams < 'a0 , 'a1 , 'a2 , > = (CowArg < 'a0 , StringName > , CowArg < 'a1 , StringName > , CowArg < 'a2 , StringName > ,) ; let args = (old_name . into_arg () , name . into_arg () , theme_type . into_arg () ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (621usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Theme" , "rename_color" , self . object_ptr , args ,) } } pub fn clear_color (& mut self , name : impl AsArg < StringName > , theme_type : impl AsArg < StringName > ,) { type CallRet = () ; type CallParams < 'a0 , 'a1 , > = (CowArg < 'a0 , StringName > , CowArg < 'a1 , StringName > ,) ; let args = (name . into_arg () , theme_type . into_arg () ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (622usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Theme" , "clear_color" , self . object_ptr , args ,) } } pub fn set_constant (& mut self , name : impl AsArg < StringName > , theme_type : impl AsArg < StringName > , constant : i32 ,) { type CallRet = () ; type CallParams < 'a0 , 'a1 , > = (CowArg < 'a0 , StringName > , CowArg < 'a1 , StringName > , i32 ,) ; let args = (name . into_arg () , theme_type . into_arg () , constant ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (623usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Theme" , "set_constant" , self . object_ptr , args ,) } } pub fn get_constant (& self , name : impl AsArg < StringName > , theme_type : impl AsArg < StringName > ,) -> i32 { type CallRet = i32 ; type CallParams < 'a0 , 'a1 , > = (CowArg < 'a0 , StringName > , CowArg < 'a1 , StringName > ,) ; let args = (name . into_arg () , theme_type . into_arg () ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (624usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Theme" , "get_constant" , self . object_ptr , args ,) } } pub fn has_constant (& self , name : impl AsArg < StringName > , theme_type : impl AsArg < StringName > ,) -> bool { type CallRet = bool ; type CallParams < 'a0 , 'a1 , > = (CowArg < 'a0 , StringName > , CowArg < 'a1 , StringName > ,) ; let args = (name . into_arg () , theme_type . into_arg () ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (625usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Theme" , "has_constant" , self . object_ptr , args ,) } } pub fn rename_constant (& mut self , old_name : impl AsArg < StringName > , name : impl AsArg < StringName > , theme_type : impl AsArg < StringName > ,) { type CallRet = () ; type CallParams < 'a0 , 'a1 , 'a2 , > = (CowArg < 'a0 , StringName > , CowArg < 'a1 , StringName > , CowArg < 'a2 , StringName > ,) ; let args = (old_name . into_arg () , name . into_arg () , theme_type . into_arg () ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (626usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Theme" , "rename_constant" , self . object_ptr , args ,) } } pub fn clear_constant (& mut self , name : impl AsArg < StringName > , theme_type : impl AsArg < StringName > ,) { type CallRet = () ; type CallParams < 'a0 , 'a1 , > = (CowArg < 'a0 , StringName > , CowArg < 'a1 , StringName > ,) ; let args = (name . into_arg () , theme_type . into_arg () ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (627usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Theme" , "clear_constant" , self . object_ptr , args ,) } } pub fn set_default_base_scale (& mut self , base_scale : f32 ,) { type CallRet = () ; type CallParams = (f32 ,) ; let args = (base_scale ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (628usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Theme" , "set_default_base_scale" , self . object_ptr , args ,) } } pub fn get_default_base_scale (& self ,) -> f32 { type CallRet = f32 ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (629usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Theme" , "get_default_base_scale" , self . object_ptr , args ,) } } pub fn has_default_base_scale (& self ,) -> bool { type CallRet = bool ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (630usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Theme" , "has_default_base_scale" , self . object_ptr , args ,) } } pub fn set_default_font (& mut self , font : impl AsObjectArg < crate :: classes :: Font > ,) { type CallRet = () ; type CallParams = (ObjectArg < crate :: classes :: Font > ,) ; let args = (font . as_object_arg () ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (631usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Theme" , "set_default_font" , self . object_ptr , args ,) } } pub fn get_default_font (& self ,) -> Option < Gd < crate :: classes :: Font > > { type CallRet = Option < Gd < crate :: classes :: Font > > ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (632usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Theme" , "get_default_font" , self . object_ptr , args ,) } } pub fn has_default_font (& self ,) -> bool { type CallRet = bool ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (633usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Theme" , "has_default_font" , self . object_ptr , args ,) } } pub fn set_default_font_size (& mut self , font_size : i32 ,) { type CallRet = () ; type CallParams = (i32 ,) ; let args = (font_size ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (634usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Theme" , "set_default_font_size" , self . object_ptr , args ,) } } pub fn get_default_font_size (& self ,) -> i32 { type CallRet = i32 ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (635usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Theme" , "get_default_font_size" , self . object_ptr , args ,) } } pub fn has_default_font_size (& self ,) -> bool { type CallRet = bool ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (636usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Theme" , "has_default_font_size" , self . object_ptr , args ,) } } pub fn set_theme_item (& mut self , data_type : crate :: classes :: theme :: DataType , name : impl AsArg < StringName > , theme_type : impl AsArg < StringName > , value : & Variant ,) { type CallRet = () ; type CallParams < 'a0 , 'a1 , 'a2 , > = (crate :: classes :: theme :: DataType , CowArg < 'a0 , StringName > , CowArg < 'a1 , StringName > , CowArg < 'a2 , Variant > ,) ; let args = (data_type , name . into_arg () , theme_type . into_arg () , CowArg :: Borrowed (value) ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (637usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Theme" , "set_theme_item" , self . object_ptr , args ,) } } pub fn get_theme_item (& self , data_type : crate :: classes :: theme :: DataType , name : impl AsArg < StringName > , theme_type : impl AsArg < StringName > ,) -> Variant { type CallRet = Variant ; type CallParams < 'a0 , 'a1 , > = (crate :: classes :: theme :: DataType , CowArg < 'a0 , StringName > , CowArg < 'a1 , StringName > ,) ; let args = (data_type , name . into_arg () , theme_type . into_arg () ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (638usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Theme" , "get_theme_item" , self . object_ptr , args ,) } } pub fn has_theme_item (& self , data_type : crate :: classes :: theme :: DataType , name : impl AsArg < StringName > , theme_type : impl AsArg < StringName > ,) -> bool { type CallRet = bool ; type CallParams < 'a0 , 'a1 , > = (crate :: classes :: theme :: DataType , CowArg < 'a0 , StringName > , CowArg < 'a1 , StringName > ,) ; let args = (data_type , name . into_arg () , theme_type . into_arg () ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (639usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Theme" , "has_theme_item" , self . object_ptr , args ,) } } pub fn rename_theme_item (& mut self , data_type : crate :: classes :: theme :: DataType , old_name : impl AsArg < StringName > , name : impl AsArg < StringName > , theme_type : impl AsArg < StringName > ,) { type CallRet = () ; type CallParams < 'a0 , 'a1 , 'a2 , > = (crate :: classes :: theme :: DataType , CowArg < 'a0 , StringName > , CowArg < 'a1 , StringName > , CowArg < 'a2 , StringName > ,) ; let args = (data_type , old_name . into_arg () , name . into_arg () , theme_type . into_arg () ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (640usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Theme" , "rename_theme_item" , self . object_ptr , args ,) } } pub fn clear_theme_item (& mut self , data_type : crate :: classes :: theme :: DataType , name : impl AsArg < StringName > , theme_type : impl AsArg < StringName > ,) { type CallRet = () ; type CallParams < 'a0 , 'a1 , > = (crate :: classes :: theme :: DataType , CowArg < 'a0 , StringName > , CowArg < 'a1 , StringName > ,) ; let args = (data_type , name . into_arg () , theme_type . into_arg () ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (641usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Theme" , "clear_theme_item" , self . object_ptr , args ,) } } pub fn set_type_variation (& mut self , theme_type : impl AsArg < StringName > , base_type : impl AsArg < StringName > ,) { type CallRet = () ; type CallParams < 'a0 , 'a1 , > = (CowArg < 'a0 , StringName > , CowArg < 'a1 , StringName > ,) ; let args = (theme_type . into_arg () , base_type . into_arg () ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (642usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Theme" , "set_type_variation" , self . object_ptr , args ,) } } pub fn is_type_variation (& self , theme_type : impl AsArg < StringName > , base_type : impl AsArg < StringName > ,) -> bool { type CallRet = bool ; type CallParams < 'a0 , 'a1 , > = (CowArg < 'a0 , StringName > , CowArg < 'a1 , StringName > ,) ; let args = (theme_type . into_arg () , base_type . into_arg () ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (643usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Theme" , "is_type_variation" , self . object_ptr , args ,) } } pub fn clear_type_variation (& mut self , theme_type : impl AsArg < StringName > ,) { type CallRet = () ; type CallParams < 'a0 , > = (CowArg < 'a0 , StringName > ,) ; let args = (theme_type . into_arg () ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (644usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Theme" , "clear_type_variation" , self . object_ptr , args ,) } } pub fn get_type_variation_base (& self , theme_type : impl AsArg < StringName > ,) -> StringName { type CallRet = StringName ; type CallParams < 'a0 , > = (CowArg < 'a0 , StringName > ,) ; let args = (theme_type . into_arg () ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (645usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Theme" , "get_type_variation_base" , self . object_ptr , args ,) } } pub fn add_type (& mut self , theme_type : impl AsArg < StringName > ,) { type CallRet = () ; type CallParams < 'a0 , > = (CowArg < 'a0 , StringName > ,) ; let args = (theme_type . into_arg () ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (646usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Theme" , "add_type" , self . object_ptr , args ,) } } pub fn remove_type (& mut self , theme_type : impl AsArg < StringName > ,) { type CallRet = () ; type CallParams < 'a0 , > = (CowArg < 'a0 , StringName > ,) ; let args = (theme_type . into_arg () ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (647usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Theme" , "remove_type" , self . object_ptr , args ,) } } pub fn merge_with (& mut self , other : impl AsObjectArg < crate :: classes :: Theme > ,) { type CallRet = () ; type CallParams = (ObjectArg < crate :: classes :: Theme > ,) ; let args = (other . as_object_arg () ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (648usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Theme" , "merge_with" , self . object_ptr , args ,) } } pub fn clear (& mut self ,) { type CallRet = () ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (649usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Theme" , "clear" , self . object_ptr , args ,) } } } impl crate :: obj :: GodotClass for Theme { const CLASS_NAME : & 'static str = "Theme" ; type Base = crate :: classes :: Resource ; type Memory = crate :: obj :: MemRefCounted ; const INIT_LEVEL : crate :: init :: InitLevel = crate :: init :: InitLevel :: Scene ; } impl crate :: obj :: EngineClass for Theme { fn as_object_ptr (& self) -> sys :: GDExtensionObjectPtr { self . object_ptr } } unsafe impl crate :: obj :: Inherits < crate :: classes :: Resource > for Theme { } unsafe impl crate :: obj :: Inherits < crate :: classes :: RefCounted > for Theme { } unsafe impl crate :: obj :: Inherits < crate :: classes :: Object > for Theme { } impl crate :: obj :: Instantiable for Theme { } impl std :: ops :: Deref for Theme { type Target = crate :: classes :: Resource ; fn deref (& self) -> & Self :: Target { unsafe { std :: mem :: transmute :: < & Self , & Self :: Target > (self) } } } impl std :: ops :: DerefMut for Theme { fn deref_mut (& mut self) -> & mut Self :: Target { unsafe { std :: mem :: transmute :: < & mut Self , & mut Self :: Target > (self) } } } } # [repr (transparent)] # [derive (Copy , Clone , Eq , PartialEq , Hash ,)] pub struct DataType { ord : i32 } impl DataType { # [doc (alias = "DATA_TYPE_COLOR")] # [doc = "Godot enumerator name: `DATA_TYPE_COLOR`"] pub const COLOR : Self = Self { ord : 0 } ; # [doc (alias = "DATA_TYPE_CONSTANT")] # [doc = "Godot enumerator name: `DATA_TYPE_CONSTANT`"] pub const CONSTANT : Self = Self { ord : 1 } ; # [doc (alias = "DATA_TYPE_FONT")] # [doc = "Godot enumerator name: `DATA_TYPE_FONT`"] pub const FONT : Self = Self { ord : 2 } ; # [doc (alias = "DATA_TYPE_FONT_SIZE")] # [doc = "Godot enumerator name: `DATA_TYPE_FONT_SIZE`"] pub const FONT_SIZE : Self = Self { ord : 3 } ; # [doc (alias = "DATA_TYPE_ICON")] # [doc = "Godot enumerator name: `DATA_TYPE_ICON`"] pub const ICON : Self = Self { ord : 4 } ; # [doc (alias = "DATA_TYPE_STYLEBOX")] # [doc = "Godot enumerator name: `DATA_TYPE_STYLEBOX`"] pub const STYLEBOX : Self = Self { ord : 5 } ; # [doc (alias = "DATA_TYPE_MAX")] # [doc = "Godot enumerator name: `DATA_TYPE_MAX`"] pub const MAX : Self = Self { ord : 6 } ; # [allow (unreachable_patterns)] fn enumerator_name (self) -> Option < & 'static str > { match self { Self :: COLOR => Some ("COLOR") , Self :: CONSTANT => Some ("CONSTANT") , Self :: FONT => Some ("FONT") , Self :: FONT_SIZE => Some ("FONT_SIZE") , Self :: ICON => Some ("ICON") , Self :: STYLEBOX => Some ("STYLEBOX") , Self :: MAX => Some ("MAX") , _ => None , } } } impl std :: fmt :: Debug for DataType { fn fmt (& self , f : & mut std :: fmt :: Formatter < '_ >) -> std :: fmt :: Result { match self . enumerator_name () { Some (enumerator) => f . write_str (enumerator) , None => f . debug_struct (stringify ! (DataType)) . field ("ord" , & self . ord) . finish () , } } } impl crate :: obj :: EngineEnum for DataType { fn try_from_ord (ord : i32) -> Option < Self > { match ord { 0 | 1 | 2 | 3 | 4 | 5 | 6 => Some (Self { ord }) , _ => None , } } fn ord (self) -> i32 { self . ord } } impl crate :: meta :: GodotConvert for DataType { type Via = i32 ; } impl crate :: meta :: ToGodot for DataType { fn to_godot (& self) -> Self :: Via { < Self as crate :: obj :: EngineEnum > :: ord (* self) } } impl crate :: meta :: FromGodot for DataType { fn try_from_godot (via : Self :: Via) -> std :: result :: Result < Self , crate :: meta :: ConvertError > { Ok (Self { ord : via }) } } # [doc = "Properties declared by [`Theme`][super::Theme], as interned engine names."] pub struct PropertyName ; impl PropertyName { pub const DEFAULT_BASE_SCALE : InternedName = InternedName :: new ("default_base_scale") ; pub const DEFAULT_FONT : InternedName = InternedName :: new ("default_font") ; pub const DEFAULT_FONT_SIZE : InternedName = InternedName :: new ("default_font_size") ; } # [doc = "Methods declared by [`Theme`][super::Theme], as interned engine names."] pub struct MethodName ; impl MethodName { pub const SET_ICON : InternedName = InternedName :: new ("set_icon") ; pub const GET_ICON : InternedName = InternedName :: new ("get_icon") ; pub const HAS_ICON : InternedName = InternedName :: new ("has_icon") ; pub const RENAME_ICON : InternedName = InternedName :: new ("rename_icon") ; pub const CLEAR_ICON : InternedName = InternedName :: new ("clear_icon") ; pub const HAS_STYLEBOX : InternedName = InternedName :: new ("has_stylebox") ; pub const RENAME_STYLEBOX : InternedName = InternedName :: new ("rename_stylebox") ; pub const CLEAR_STYLEBOX : InternedName = InternedName :: new ("clear_stylebox") ; pub const SET_FONT : InternedName = InternedName :: new ("set_font") ; pub const GET_FONT : InternedName = InternedName :: new ("get_font") ; pub const HAS_FONT : InternedName = InternedName :: new ("has_font") ; pub const RENAME_FONT : InternedName = InternedName :: new ("rename_font") ; pub const CLEAR_FONT : InternedName = InternedName :: new ("clear_font") ; pub const SET_FONT_SIZE : InternedName = InternedName :: new ("set_font_size") ; pub const GET_FONT_SIZE : InternedName = InternedName :: new ("get_font_size") ; pub const HAS_FONT_SIZE : InternedName = InternedName :: new ("has_font_size") ; pub const RENAME_FONT_SIZE : InternedName = InternedName :: new ("rename_font_size") ; pub const CLEAR_FONT_SIZE : InternedName = InternedName :: new ("clear_font_size") ; pub const SET_COLOR : InternedName = InternedName :: new ("set_color") ; pub const GET_COLOR : InternedName = InternedName :: new ("get_color") ; pub const HAS_COLOR : InternedName = InternedName :: new ("has_color") ; pub const RENAME_COLOR : InternedName = InternedName :: new ("rename_color") ; pub const CLEAR_COLOR : InternedName = InternedName :: new ("clear_color") ; pub const SET_CONSTANT : InternedName = InternedName :: new ("set_constant") ; pub const GET_CONSTANT : InternedName = InternedName :: new ("get_constant") ; pub const HAS_CONSTANT : InternedName = InternedName :: new ("has_constant") ; pub const RENAME_CONSTANT : InternedName = InternedName :: new ("rename_constant") ; pub const CLEAR_CONSTANT : InternedName = InternedName :: new ("clear_constant") ; pub const SET_DEFAULT_BASE_SCALE : InternedName = InternedName :: new ("set_default_base_scale") ; pub const GET_DEFAULT_BASE_SCALE : InternedName = InternedName :: new ("get_default_base_scale") ; pub const HAS_DEFAULT_BASE_SCALE : InternedName = InternedName :: new ("has_default_base_scale") ; pub const SET_DEFAULT_FONT : InternedName = InternedName :: new ("set_default_font") ; pub const GET_DEFAULT_FONT : InternedName = InternedName :: new ("get_default_font") ; pub const HAS_DEFAULT_FONT : InternedName = InternedName :: new ("has_default_font") ; pub const SET_DEFAULT_FONT_SIZE : InternedName = InternedName :: new ("set_default_font_size") ; pub const GET_DEFAULT_FONT_SIZE : InternedName = InternedName :: new ("get_default_font_size") ; pub const HAS_DEFAULT_FONT_SIZE : InternedName = InternedName :: new ("has_default_font_size") ; pub const SET_THEME_ITEM : InternedName = InternedName :: new ("set_theme_item") ; pub const GET_THEME_ITEM : InternedName = InternedName :: new ("get_theme_item") ; pub const HAS_THEME_ITEM : InternedName = InternedName :: new ("has_theme_item") ; pub const RENAME_THEME_ITEM : InternedName = InternedName :: new ("rename_theme_item") ; pub const CLEAR_THEME_ITEM : InternedName = InternedName :: new ("clear_theme_item") ; pub const SET_TYPE_VARIATION : InternedName = InternedName :: new ("set_type_variation") ; pub const IS_TYPE_VARIATION : InternedName = InternedName :: new ("is_type_variation") ; pub const CLEAR_TYPE_VARIATION : InternedName = InternedName :: new ("clear_type_variation") ; pub const GET_TYPE_VARIATION_BASE : InternedName = InternedName :: new ("get_type_variation_base") ; pub const ADD_TYPE : InternedName = InternedName :: new ("add_type") ; pub const REMOVE_TYPE : InternedName = InternedName :: new ("remove_type") ; pub const MERGE_WITH : InternedName = InternedName :: new ("merge_with") ; pub const CLEAR : InternedName = InternedName :: new ("clear") ; } # [doc = "Signals declared by [`Theme`][super::Theme], as interned engine names."] pub struct SignalName ; impl SignalName { }