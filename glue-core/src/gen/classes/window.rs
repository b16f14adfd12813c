# ! [doc = "Sidecar module for class [`Window`][crate::classes::Window]."] # [allow (unused_imports)] use crate :: builtin :: * ; # [allow (unused_imports)] use crate :: meta :: { AsArg , AsObjectArg , CowArg , InternedName , ObjectArg , Signature } ; # [allow (unused_imports)] use crate :: obj :: Gd ; # [allow (unused_imports)] use crate :: signal :: { SignalObject , TypedSignal } ; use crate :: sys ; pub (super) mod re_export { use super :: * ; # [doc = "Godot class `Window`.\n\nInherits [`Viewport`][crate::classes::Viewport].\n\nRelated symbols (default-param builders, enums, interned names, signals) are in [`window`][crate::classes::window]."] # [derive (Debug)] # [repr (C)] pub struct Window { object_ptr : sys :: GDExtensionObjectPtr , } impl Window { pub fn set_title (& mut self , title : impl AsArg < GString > ,) { type CallRet = () ; type CallParams < 'a0 , > = (CowArg < 'a0 , GString > ,) ; let args = (title . into_arg () ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (882usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Window" , "set_title" , self . object_ptr , args ,) } } pub fn get_title (& self ,) -> GString { type CallRet = GString ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (883usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Window" , "get_title" , self . object_ptr , args ,) } } pub fn get_window_id (& self ,) -> i32 { type CallRet = i32 ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (884usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Window" , "get_window_id" , self . object_ptr , args ,) } } pub fn set_initial_position (& mut self , initial_position : crate :: classes :: window :: WindowInitialPosition ,) { type CallRet = () ; type CallParams = (crate :: classes :: window :: WindowInitialPosition ,) ; let args = (initial_position ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (885usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Window" , "set_initial_position" , self . object_ptr , args ,) } } pub fn get_initial_position (& self ,) -> crate :: classes :: window :: WindowInitialPosition { type CallRet = crate :: classes :: window :: WindowInitialPosition ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (886usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Window" , "get_initial_position" , self . object_ptr , args ,) } } pub fn set_current_screen (& mut self , index : i32 ,) { type CallRet = () ; type CallParams = (i32 ,) ; let args = (index ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (887usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Window" , "set_current_screen" , self . object_ptr , args ,) } } pub fn get_current_screen (& self ,) -> i32 { type CallRet = i32 ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (888usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Window" , "get_current_screen" , self . object_ptr , args ,) } } pub fn set_position (& mut self , position : Vector2i ,) { type CallRet = () ; type CallParams = (Vector2i ,) ; let args = (position ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (889usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Window" , "set_position" , self . object_ptr , args ,) } } pub fn get_position (& self ,) -> Vector2i { type CallRet = Vector2i ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (890usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Window" , "get_position" , self . object_ptr , args ,) } } pub fn move_to_center (& mut self ,) { type CallRet = () ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (891usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Window" , "move_to_center" , self . object_ptr , args ,) } } pub fn set_size (& mut self , size : Vector2i ,) { type CallRet = () ; type CallParams = (Vector2i ,) ; let args = (size ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (892usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Window" , "set_size" , self . object_ptr , args ,) } } pub fn get_size (& self ,) -> Vector2i { type CallRet = Vector2i ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (893usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Window" , "get_size" , self . object_ptr , args ,) } } pub fn reset_size (& mut self ,) { type CallRet = () ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (894usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Window" , "reset_size" , self . object_ptr , args ,) } } pub fn get_position_with_decorations (& self ,) -> Vector2i { type CallRet = Vector2i ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (895usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Window" , "get_position_with_decorations" , self . object_ptr , args ,) } } pub fn get_size_with_decorations (& self ,) -> Vector2i { type CallRet = Vector2i ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (896usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Window" , "get_size_with_decorations" , self . object_ptr , args ,) } } pub fn set_max_size (& mut self , max_size : Vector2i ,) { type CallRet = () ; type CallParams = (Vector2i ,) ; let args = (max_size ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (897usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Window" , "set_max_size" , self . object_ptr , args ,) } } pub fn get_max_size (& self ,) -> Vector2i { type CallRet = Vector2i ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (898usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Window" , "get_max_size" , self . object_ptr , args ,) } } pub fn set_min_size (& mut self , min_size : Vector2i ,) { type CallRet = () ; type CallParams = (Vector2i ,) ; let args = (min_size ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (899usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Window" , "set_min_size" , self . object_ptr , args ,) } } pub fn get_min_size (& self ,) -> Vector2i { type CallRet = Vector2i ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (900usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Window" , "get_min_size" , self . object_ptr , args ,) } } pub fn set_mode (& mut self , mode : crate :: classes :: window :: Mode ,) { type CallRet = () ; type CallParams = (crate :: classes :: window :: Mode ,) ; let args = (mode ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (901usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Window" , "set_mode" , self . object_ptr , args ,) } } pub fn get_mode (& self ,) -> crate :: classes :: window :: Mode { type CallRet = crate :: classes :: window :: Mode ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (902usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Window" , "get_mode" , self . object_ptr , args ,) } } pub fn set_flag (& mut self , flag : crate :: classes :: window :: Flags , enabled : bool ,) { type CallRet = () ; type CallParams = (crate :: classes :: window :: Flags , bool ,) ; let args = (flag , enabled ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (903usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Window" , "set_flag" , self . object_ptr , args ,) } } pub fn get_flag (& self , flag : crate :: classes :: window :: Flags ,) -> bool { type CallRet = bool ; type CallParams = (crate :: classes :: window :: Flags ,) ; let args = (flag ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (904usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Window" , "get_flag" , self . object_ptr , args ,) } } pub fn is_maximize_allowed (& self ,) -> bool { type CallRet = bool ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (905usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Window" , "is_maximize_allowed" , self . object_ptr , args ,) } } pub fn request_attention (& mut self ,) { type CallRet = () ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (906usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Window" , "request_attention" , self . object_ptr , args ,) } } pub fn move_to_foreground (& mut self ,) { type CallRet = () ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (907usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Window" , "move_to_foreground" , self . object_ptr , args ,) } } pub fn set_visible (& mut self , visible : bool ,) { type CallRet = () ; type CallParams = (bool ,) ; let args = (visible ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (908usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Window" , "set_visible" , self . object_ptr , args ,) } } pub fn is_visible (& self ,) -> bool { type CallRet = bool ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (909usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Window" , "is_visible" , self . object_ptr , args ,) } } pub fn hide (& mut self ,) { type CallRet = () ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (910usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Window" , "hide" , self . object_ptr , args ,) } } pub fn show (& mut self ,) { type CallRet = () ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (911usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Window" , "show" , self . object_ptr , args ,) } } pub fn set_transient (& mut self , transient : bool ,) { type CallRet = () ; type CallParams = (bool ,) ; let args = (transient ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (912usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Window" , "set_transient" , self . object_ptr , args ,) } } pub fn is_transient (& self ,) -> bool { type CallRet = bool ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (913usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Window" , "is_transient" , self . object_ptr , args ,) } } pub fn set_transient_to_focused (& mut self , enable : bool ,) { type CallRet = () ; type CallParams = (bool ,) ; let args = (enable ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (914usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Window" , "set_transient_to_focused" , self . object_ptr , args ,) } } pub fn is_transient_to_focused (& self ,) -> bool { type CallRet = bool ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (915usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Window" , "is_transient_to_focused" , self . object_ptr , args ,) } } pub fn set_exclusive (& mut self , exclusive : bool ,) { type CallRet = () ; type CallParams = (bool ,) ; let args = (exclusive ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (916usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Window" , "set_exclusive" , self . object_ptr , args ,) } } pub fn is_exclusive (& self ,) -> bool { type CallRet = bool ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (917usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Window" , "is_exclusive" , self . object_ptr , args ,) } } pub fn set_unparent_when_invisible (& mut self , unparent : bool ,) { type CallRet = () ; type CallParams = (bool ,) ; let args = (unparent ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (918usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Window" , "set_unparent_when_invisible" , self . object_ptr , args ,) } } pub fn can_draw (& self ,) -> bool { type CallRet = bool ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (919usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Window" , "can_draw" , self . object_ptr , args ,) } } pub fn has_focus (& self ,) -> bool { type CallRet = bool ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (920usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Window" , "has_focus" , self . object_ptr , args ,) } } pub fn grab_focus (& mut self ,) { type CallRet = () ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (921usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Window" , "grab_focus" , self . object_ptr , args ,) } } pub fn set_ime_active (& mut self , active : bool ,) { type CallRet = () ; type CallParams = (bool ,) ; let args = (active ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (922usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Window" , "set_ime_active" , self . object_ptr , args ,) } } pub fn set_ime_position (& mut self , position : Vector2i ,) { type CallRet = () ; type CallParams = (Vector2i ,) ; let args = (position ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (923usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Window" , "set_ime_position" , self . object_ptr , args ,) } } pub fn is_embedded (& self ,) -> bool { type CallRet = bool ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (924usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Window" , "is_embedded" , self . object_ptr , args ,) } } pub fn get_contents_minimum_size (& self ,) -> Vector2 { type CallRet = Vector2 ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (925usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Window" , "get_contents_minimum_size" , self . object_ptr , args ,) } } pub fn set_force_native (& mut self , force_native : bool ,) { type CallRet = () ; type CallParams = (bool ,) ; let args = (force_native ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (926usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Window" , "set_force_native" , self . object_ptr , args ,) } } pub fn get_force_native (& self ,) -> bool { type CallRet = bool ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (927usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Window" , "get_force_native" , self . object_ptr , args ,) } } pub fn set_content_scale_size (& mut self , size : Vector2i ,) { type CallRet = () ; type CallParams = (Vector2i ,) ; let args = (size ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (928usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Window" , "set_content_scale_size" , self . object_ptr , args ,) } } pub fn get_content_scale_size (& self ,) -> Vector2i { type CallRet = Vector2i ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (929usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Window" , "get_content_scale_size" , self . object_ptr , args ,) } } pub fn set_content_scale_mode (& mut self , mode : crate :: classes :: window :: ContentScaleMode ,) { type CallRet = () ; type CallParams = (crate :: classes :: window :: ContentScaleMode ,) ; let args = (mode ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (930usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Window" , "set_content_scale_mode" , self . object_ptr , args ,) } } pub fn get_content_scale_mode (& self ,) -> crate :: classes :: window :: ContentScaleMode { type CallRet = crate :: classes :: window :: ContentScaleMode ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (931usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Window" , "get_content_scale_mode" , self . object_ptr , args ,) } } pub fn set_content_scale_aspect (& mut self , aspect : crate :: classes :: window :: ContentScaleAspect ,) { type CallRet = () ; type CallParams = (crate :: classes :: window :: ContentScaleAspect ,) ; let args = (aspect ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (932usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Window" , "set_content_scale_aspect" , self . object_ptr , args ,) } } pub fn get_content_scale_aspect (& self ,) -> crate :: classes :: window :: ContentScaleAspect { type CallRet = crate :: classes :: window :: ContentScaleAspect ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (933usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Window" , "get_content_scale_aspect" , self . object_ptr , args ,) } } pub fn set_content_scale_stretch (& mut self , stretch : crate :: classes :: window :: ContentScaleStretch ,) { type CallRet = () ; type CallParams = (crate :: classes :: window :: ContentScaleStretch ,) ; let args = (stretch ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (934usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Window" , "set_content_scale_stretch" , self . object_ptr , args ,) } } pub fn get_content_scale_stretch (& self ,) -> crate :: classes :: window :: ContentScaleStretch { type CallRet = crate :: classes :: window :: ContentScaleStretch ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (935usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Window" , "get_content_scale_stretch" , self . object_ptr , args ,) } } pub fn set_keep_title_visible (& mut self , title_visible : bool ,) { type CallRet = () ; type CallParams = (bool ,) ; let args = (title_visible ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (936usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Window" , "set_keep_title_visible" , self . object_ptr , args ,) } } pub fn get_keep_title_visible (& self ,) -> bool { type CallRet = bool ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (937usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Window" , "get_keep_title_visible" , self . object_ptr , args ,) } } pub fn set_content_scale_factor (& mut self , factor : f32 ,) { type CallRet = () ; type CallParams = (f32 ,) ; let args = (factor ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (938usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Window" , "set_content_scale_factor" , self . object_ptr , args ,) } } pub fn get_content_scale_factor (& self ,) -> f32 { type CallRet = f32 ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (939usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Window" , "get_content_scale_factor" , self . object_ptr , args ,) } } pub fn set_use_font_oversampling (& mut self , enable : bool ,) { type CallRet = () ; type CallParams = (bool ,) ; let args = (enable ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (940usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Window" , "set_use_font_oversampling" , self . object_ptr , args ,) } } pub fn is_using_font_oversampling (& self ,) -> bool { type CallRet = bool ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (941usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Window" , "is_using_font_oversampling" , self . object_ptr , args ,) } } pub fn set_wrap_controls (& mut self , enable : bool ,) { type CallRet = () ; type CallParams = (bool ,) ; let args = (enable ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (942usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Window" , "set_wrap_controls" , self . object_ptr , args ,) } } pub fn is_wrapping_controls (& self ,) -> bool { type CallRet = bool ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (943usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Window" , "is_wrapping_controls" , self . object_ptr , args ,) } } pub fn child_controls_changed (& mut self ,) { type CallRet = () ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (944usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Window" , "child_controls_changed" , self . object_ptr , args ,) } } pub fn set_theme (& mut self , theme : impl AsObjectArg < crate :: classes :: Theme > ,) { type CallRet = () ; type CallParams = (ObjectArg < crate :: classes :: Theme > ,) ; let args = (theme . as_object_arg () ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (945usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Window" , "set_theme" , self . object_ptr , args ,) } } pub fn get_theme (& self ,) -> Option < Gd < crate :: classes :: Theme > > { type CallRet = Option < Gd < crate :: classes :: Theme > > ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (946usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Window" , "get_theme" , self . object_ptr , args ,) } } pub fn set_theme_type_variation (& mut self , theme_type : impl AsArg < StringName > ,) { type CallRet = () ; type CallParams < 'a0 , > = (CowArg < 'a0 , StringName > ,) ; let args = (theme_type . into_arg () ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (947usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Window" , "set_theme_type_variation" , self . object_ptr , args ,) } } pub fn get_theme_type_variation (& self ,) -> StringName { type CallRet = StringName ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (948usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Window" , "get_theme_type_variation" , self . object_ptr , args ,) } } pub fn begin_bulk_theme_override (& mut self ,) { type CallRet = () ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (949usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Window" , "begin_bulk_theme_override" , self . object_ptr , args ,) } } pub fn end_bulk_theme_override (& mut self ,) { type CallRet = () ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (950usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Window" , "end_bulk_theme_override" , self . object_ptr , args ,) } } pub fn add_theme_icon_override (& mut self , name : impl AsArg < StringName > , texture : impl AsObjectArg < crate :: classes :: Texture2D > ,) { type CallRet = () ; type CallParams < 'a0 , > = (CowArg < 'a0 , StringName > , ObjectArg < crate :: classes :: Texture2D > ,) ; let args = (name . into_arg () , texture . as_object_arg () ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (951usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Window" , "add_theme_icon_override" , self . object_ptr , args ,) } } pub fn add_theme_font_override (& mut self , name : impl AsArg < StringName > , font : impl AsObjectArg < crate :: classes :: Font > ,) { type CallRet = () ; type CallParams < 'a0 , > = (CowArg < 'a0 , StringName > , ObjectArg < crate :: classes :: Font > ,) ; let args = (name . into_arg () , font . as_object_arg () ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (952usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Window" , "add_theme_font_override" , self . object_ptr , args ,) } } pub fn add_theme_font_size_override (& mut self , name : impl AsArg < StringName > , font_size : i32 ,) { type CallRet = () ; type CallParams < 'a0 , > = (CowArg < 'a0 , StringName > , i32 ,) ; let args = (name . into_arg () , font_size ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (953usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Window" , "add_theme_font_size_override" , self . object_ptr , args ,) } } pub fn add_theme_color_override (& mut self , name : impl AsArg < StringName > , color : Color ,) { type CallRet = () ; type CallParams < 'a0 , > = (CowArg < 'a0 , StringName > , Color ,) ; let args = (name . into_arg () , color ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (954usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Window" , "add_theme_color_override" , self . object_ptr , args ,) } } pub fn add_theme_constant_override (& mut self , name : impl AsArg < StringName > , constant : i32 ,) { type CallRet = () ; type CallParams < 'a0 , > = (CowArg < 'a0 , StringName > , i32 ,) ; let args = (name . into_arg () , constant ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (955usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Window" , "add_theme_constant_override" , self . object_ptr , args ,) } } pub fn remove_theme_icon_override (& mut self , name : impl AsArg < StringName > ,) { type CallRet = () ; type CallParams < 'a0 , > = (CowArg < 'a0 , StringName > ,) ; let args = (name . into_arg () ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (956usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Window" , "remove_theme_icon_override" , self . object_ptr , args ,) } } pub fn remove_theme_stylebox_override (& mut self , name : impl AsArg < StringName > ,) { type CallRet = () ; type CallParams < 'a0 , > = (CowArg < 'a0 , StringName > ,) ; let args = (name . into_arg () ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (957usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Window" , "remove_theme_stylebox_override" , self . object_ptr , args ,) } } pub fn remove_theme_font_override (& mut self , name : impl AsArg < StringName > ,) { type CallRet = () ; type CallParams < 'a0 , > = (CowArg < 'a0 , StringName > ,) ; let args = (name . into_arg () ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (958usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Window" , "remove_theme_font_override" , self . object_ptr , args ,) } } pub fn remove_theme_font_size_override (& mut self , name : impl AsArg < StringName > ,) { type CallRet = () ; type CallParams < 'a0 , > = (CowArg < 'a0 , StringName > ,) ; let args = (name . into_arg () ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (959usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Window" , "remove_theme_font_size_override" , self . object_ptr , args ,) } } pub fn remove_theme_color_override (& mut self , name : impl AsArg < StringName > ,) { type CallRet = () ; type CallParams < 'a0 , > = (CowArg < 'a0 , StringName > ,) ; let args = (name . into_arg () ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (960usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Window" , "remove_theme_color_override" , self . object_ptr , args ,) } } pub fn remove_theme_constant_override (& mut self , name : impl AsArg < StringName > ,) { type CallRet = () ; type CallParams < 'a0 , > = (CowArg < 'a0 , StringName > ,) ; let args = (name . into_arg () ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (961usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Window" , "remove_theme_constant_override" , self . object_ptr , args ,) } } pub (crate) fn get_theme_icon_full (& self , name : CowArg < '_ , StringName > , theme_type : CowArg < '_ , StringName > ,) -> Option < Gd < crate :: classes :: Texture2D > > { type CallRet = Option < Gd < crate :: classes :: Texture2D > > ; type CallParams < 'a0 , 'a1 , > = (CowArg < 'a0 , StringName > , CowArg < 'a1 , StringName > ,) ; let args = (name , theme_type ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (962usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Window" , "get_theme_icon" , self . object_ptr , args ,) } } # [inline] pub fn get_theme_icon (& self , name : impl AsArg < StringName > ,) -> Option < Gd < crate :: classes :: Texture2D > > { self . get_theme_icon_ex (name ,) . done () } # [inline] pub fn get_theme_icon_ex < 'ex > (& 'ex self , name : impl AsArg < StringName > + 'ex ,) -> super :: ExGetThemeIcon < 'ex > { super :: ExGetThemeIcon :: new (self , name . into_arg () ,) } pub (crate) fn get_theme_font_full (& self , name : CowArg < '_ , StringName > , theme_type : CowArg < '_ , StringName > ,) -> Option < Gd < crate :: classes :: Font > > { type CallRet = Option < Gd < crate :: classes :: Font > > ; type CallParams < 'a0 , 'a1 , > = (CowArg < 'a0 , StringName > , CowArg < 'a1 , StringName > ,) ; let args = (name , theme_type ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (963usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Window" , "get_theme_font" , self . object_ptr , args ,) } } # [inline] pub fn get_theme_font (& self , name : impl AsArg < StringName > ,) -> Option < Gd < crate :: classes :: Font > > { self . get_theme_font_ex (name ,) . done () } # [inline] pub fn get_theme_font_ex < 'ex > (& 'ex self , name : impl AsArg < StringName > + 'ex ,) -> super :: ExGetThemeFont < 'ex > { super :: ExGetThemeFont :: new (self , name . into_arg () ,) } pub (crate) fn get_theme_font_size_full (& self , name : CowArg < '_ , StringName > , theme_type : CowArg < '_ , StringName > ,) -> i32 { type CallRet = i32 ; type CallParams < 'a0 , 'a1 , > = (CowArg < 'a0 , StringName > , CowArg < 'a1 , StringName > ,) ; let args = (name , theme_type ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (964usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Window" , "get_theme_font_size" , self . object_ptr , args ,) } } # [inline] pub fn get_theme_font_size (& self , name : impl AsArg < StringName > ,) -> i32 { self . get_theme_font_size_ex (name ,) . done () } # [inline] pub fn get_theme_font_size_ex < 'ex > (& 'ex self , name : impl AsArg < StringName > + 'ex ,) -> super :: ExGetThemeFontSize < 'ex > { super :: ExGetThemeFontSize :: new (self , name . into_arg () ,) } pub (crate) fn get_theme_color_full (& self , name : CowArg < '_ , StringName > , theme_type : CowArg < '_ , StringName > ,) -> Color { type CallRet = Color ; type CallParams < 'a0 , 'a1 , > = (CowArg < 'a0 , StringName > , CowArg < 'a1 , StringName > ,) ; let args = (name , theme_type ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (965usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Window" , "get_theme_color" , self . object_ptr , args ,) } } # [inline] pub fn get_theme_color (& self , name : impl AsArg < StringName > ,) -> Color { self . get_theme_color_ex (name ,) . done () } # [inline] pub fn get_theme_color_ex < 'ex > (& 'ex self , name : impl AsArg < StringName > + 'ex ,) -> super :: ExGetThemeColor < 'ex > { super :: ExGetThemeColor :: new (self , name . into_arg () ,) } pub (crate) fn get_theme_constant_full (& self , name : CowArg < '_ , StringName > , theme_type : CowArg < '_ , StringName > ,) -> i32 { type CallRet = i32 ; type CallParams < 'a0 , 'a1 , > = (CowArg < 'a0 , StringName > , CowArg < 'a1 , StringName > ,) ; let args = (name , theme_type ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (966usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Window" , "get_theme_constant" , self . object_ptr , args ,) } } # [inline] pub fn get_theme_constant (& self , name : impl AsArg < StringName > ,) -> i32 { self . get_theme_constant_ex (name ,) . done () } # [inline] pub fn get_theme_constant_ex < 'ex > (& 'ex self , name : impl AsArg < StringName > + 'ex ,) -> super :: ExGetThemeConstant < 'ex > { super :: ExGetThemeConstant :: new (self , name . into_arg () ,) } pub fn has_theme_icon_override (& self , name : impl AsArg < StringName > ,) -> bool { type CallRet = bool ; type CallParams < 'a0 , > = (CowArg < 'a0 , StringName > ,) ; let args = (name . into_arg () ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (967usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Window" , "has_theme_icon_override" , self . object_ptr , args ,) } } pub fn has_theme_stylebox_override (& self , name : impl AsArg < StringName > ,) -> bool { type CallRet = bool ; type CallParams < 'a0 , > = (CowArg < 'a0 , StringName > ,) ; let args = (name . into_arg () ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (968usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Window" , "has_theme_stylebox_override" , self . object_ptr , args ,) } } pub fn has_theme_font_override (& self , name : impl AsArg < StringName > ,) -> bool { type CallRet = bool ; type CallParams < 'a0 , > = (CowArg < 'a0 , StringName > ,) ; let args = (name . into_arg () ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (969usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Window" , "has_theme_font_override" , self . object_ptr , args ,) } } pub fn has_theme_font_size_override (& self , name : impl AsArg < StringName > ,) -> bool { type CallRet = bool ; type CallParams < 'a0 , > = (CowArg < 'a0 , StringName > ,) ; let args = (name . into_arg () ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (970usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Window" , "has_theme_font_size_override" , self . object_ptr , args ,) } } pub fn has_theme_color_override (& self , name : impl AsArg < StringName > ,) -> bool { type CallRet = bool ; type CallParams < 'a0 , > = (CowArg < 'a0 , StringName > ,) ; let args = (name . into_arg () ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (971usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Window" , "has_theme_color_override" , self . object_ptr , args ,) } } pub fn has_theme_constant_override (& self , name : impl AsArg < StringName > ,) -> bool { type CallRet = bool ; type CallParams < 'a0 , > = (CowArg < 'a0 , StringName > ,) ; let args = (name . into_arg () ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (972usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Window" , "has_theme_constant_override" , self . object_ptr , args ,) } } pub (crate) fn has_theme_icon_full (& self , name : CowArg < '_ , StringName > , theme_type : CowArg < '_ , StringName > ,) -> bool { type CallRet = bool ; type CallParams < 'a0 , 'a1 , > = (CowArg < 'a0 , StringName > , CowArg < 'a1 , StringName > ,) ; let args = (name , theme_type ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (973usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Window" , "has_theme_icon" , self . object_ptr , args ,) } } # [inline] pub fn has_theme_icon (& self , name : impl AsArg < StringName > ,) -> bool { self . has_theme_icon_ex (name ,) . done () } # [inline] pub fn has_theme_icon_ex < 'ex > (& 'ex self , name : impl AsArg < StringName > + 'ex ,) -> super :: ExHasThemeIcon < 'ex > { super :: ExHasThemeIcon :: new (self , name . into_arg () ,) } pub (crate) fn has_theme_stylebox_full (& self , name : CowArg < '_ , StringName > , theme_type : CowArg < '_ , StringName > ,) -> bool { type CallRet = bool ; type CallParams < 'a0 , 'a1 , > = (CowArg < 'a0 , StringName > , CowArg < 'a1 , StringName > ,) ; let args = (name , theme_type ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (974usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Window" , "has_theme_stylebox" , self . object_ptr , args ,) } } # [inline] pub fn has_theme_stylebox (& self , name : impl AsArg < StringName > ,) -> bool { self . has_theme_stylebox_ex (name ,) . done () } # [inline] pub fn has_theme_stylebox_ex < 'ex > (& 'ex self , name : impl AsArg < StringName > + 'ex ,) -> super :: ExHasThemeStylebox < 'ex > { super :: ExHasThemeStylebox :: new (self , name . into_arg () ,) } pub (crate) fn has_theme_font_full (& self , name : CowArg < '_ , StringName > , theme_type : CowArg < '_ , StringName > ,) -> bool { type CallRet = bool ; type CallParams < 'a0 , 'a1 , > = (CowArg < 'a0 , StringName > , CowArg < 'a1 , StringName > ,) ; let args = (name , theme_type ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (975usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Window" , "has_theme_font" , self . object_ptr , args ,) } } # [inline] pub fn has_theme_font (& self , name : impl AsArg < StringName > ,) -> bool { self . has_theme_font_ex (name ,) . done () } # [inline] pub fn has_theme_font_ex < 'ex > (& 'ex self , name : impl AsArg < StringName > + 'ex ,) -> super :: ExHasThemeFont < 'ex > { super :: ExHasThemeFont :: new (self , name . into_arg () ,) } pub (crate) fn has_theme_font_size_full (& self , name : CowArg < '_ , StringName > , theme_type : CowArg < '_ , StringName > ,) -> bool { type CallRet = bool ; type CallParams < 'a0 , 'a1 , > = (CowArg < 'a0 , StringName > , CowArg < 'a1 , StringName > ,) ; let args = (name , theme_type ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (976usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Window" , "has_theme_font_size" , self . object_ptr , args ,) } } # [inline] pub fn has_theme_font_size (& self , name : impl AsArg < StringName > ,) -> bool { self . has_theme_font_size_ex (name ,) . done () } # [inline] pub fn has_theme_font_size_ex < 'ex > (& 'ex self , name : impl AsArg < StringName > + 'ex ,) -> super :: ExHasThemeFontSize < 'ex > { super :: ExHasThemeFontSize :: new (self , name . into_arg () ,) } pub (crate) fn has_theme_color_full (& self , name : CowArg < '_ , StringName > , theme_type : CowArg < '_ , StringName > ,) -> bool { type CallRet = bool ; type CallParams < 'a0 , 'a1 , > = (CowArg < 'a0 , StringName > , CowArg < 'a1 , StringName > ,) ; let args = (name , theme_type ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (977usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Window" , "has_theme_color" , self . object_ptr , args ,) } } # [inline] pub fn has_theme_color (& self , name : impl AsArg < StringName > ,) -> bool { self . has_theme_color_ex (name ,) . done () } # [inline] pub fn has_theme_color_ex < 'ex > (& 'ex self , name : impl AsArg < StringName > + 'ex ,) -> super :: ExHasThemeColor < 'ex > { super :: ExHasThemeColor :: new (self , name . into_arg () ,) } pub (crate) fn has_theme_constant_full (& self , name : CowArg < '_ , StringName > , theme_type : CowArg < '_ , StringName > ,) -> bool { type CallRet = bool ; type CallParams < 'a0 , 'a1 , > = (CowArg < 'a0 , StringName > , CowArg < 'a1 , StringName > ,) ; let args = (name , theme_type ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (978usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Window" , "has_theme_constant" , self . object_ptr , args ,) } } # [inline] pub fn has_theme_constant (& self , name : impl AsArg < StringName > ,) -> bool { self . has_theme_constant_ex (name ,) . done () } # [inline] pub fn has_theme_constant_ex < 'ex > (& 'ex self , name : impl AsArg < StringName > + 'ex ,) -> super :: ExHasThemeConstant < 'ex > { super :: ExHasThemeConstant :: new (self , name . into_arg () ,) } pub fn get_theme_default_base_scale (& self ,) -> f32 { type CallRet = f32 ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (979usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Window" , "get_theme_default_base_scale" , self . object_ptr , args ,) } } pub fn get_theme_default_font (& self ,) -> Option < Gd < crate :: classes :: Font > > { type CallRet = Option < Gd < crate :: classes :: Font > > ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (980usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Window" , "get_theme_default_font" , self . object_ptr , args ,) } } pub fn get_theme_default_font_size (& self ,) -> i32 { type CallRet = i32 ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (981usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Window" , "get_theme_default_font_size" , self . object_ptr , args ,) } } pub fn set_layout_direction (& mut self , direction : crate :: classes :: window :: LayoutDirection ,) { type CallRet = () ; type CallParams = (crate :: classes :: window :: LayoutDirection ,) ; let args = (direction ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (982usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Window" , "set_layout_direction" , self . object_ptr , args ,) } } pub fn get_layout_direction (& self ,) -> crate :: classes :: window :: LayoutDirection { type CallRet = crate :: classes :: window :: LayoutDirection ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (983usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Window" , "get_layout_direction" , self . object_ptr , args ,) } } pub fn is_layout_rtl (& self ,) -> bool { type CallRet = bool ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (984usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Window" , "is_layout_rtl" , self . object_ptr , args ,) } } pub fn set_auto_translate (& mut self , enable : bool ,) { type CallRet = () ; type CallParams = (bool ,) ; let args = (enable ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (985usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Window" , "set_auto_translate" , self . object_ptr , args ,) } } pub fn is_auto_translating (& self ,) -> bool { type CallRet = bool ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (986usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Window" , "is_auto_translating" , self . object_ptr , args ,) } } pub (crate) fn popup_full (& mut self , rect : Rect2i ,) { type CallRet = () ; type CallParams = (Rect2i ,) ; let args = (rect ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (987usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Window" , "popup" , self . object_ptr , args ,) } } # [inline] pub fn popup (& mut self ,) { self . popup_ex () . done () } # [inline] pub fn popup_ex < 'ex > (& 'ex mut self ,) -> super :: ExPopup < 'ex > { super :: ExPopup :: new (self ,) } pub fn popup_on_parent (& mut self , parent_rect : Rect2i ,) { type CallRet = () ; type CallParams = (Rect2i ,) ; let args = (parent_rect ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (988usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Window" , "popup_on_parent" , self . object_ptr , args ,) } } pub (crate) fn popup_centered_full (& mut self , minsize : Vector2i ,) { type CallRet = () ; type CallParams = (Vector2i ,) ; let args = (minsize ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (989usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Window" , "popup_centered" , self . object_ptr , args ,) } } # [inline] pub fn popup_centered (& mut self ,) { self . popup_centered_ex () . done () } # [inline] pub fn popup_centered_ex < 'ex > (& 'ex mut self ,) -> super :: ExPopupCentered < 'ex > { super :: ExPopupCentered :: new (self ,) } pub (crate) fn popup_centered_ratio_full (& mut self , ratio : f32 ,) { type CallRet = () ; type CallParams = (f32 ,) ; let args = (ratio ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (990usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Window" , "popup_centered_ratio" , self . object_ptr , args ,) } } # [inline] pub fn popup_centered_ratio (& mut self ,) { self . popup_centered_ratio_ex () . done () } # [inline] pub fn popup_centered_ratio_ex < 'ex > (& 'ex mut self ,) -> super :: ExPopupCenteredRatio < 'ex > { super :: ExPopupCenteredRatio :: new (self ,) } pub (crate) fn popup_centered_clamped_full (& mut self , minsize : Vector2i , fallback_ratio : f32 ,) { type CallRet = () ; type CallParams = (Vector2i , f32 ,) ; let args = (minsize , fallback_ratio ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (991usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Window" , "popup_centered_clamped" , self . object_ptr , args ,) } } # [inline] pub fn popup_centered_clamped (& mut self ,) { self . popup_centered_clamped_ex () . done () } # [inline] pub fn popup_centered_clamped_ex < 'ex > (& 'ex mut self ,) -> super :: ExPopupCenteredClamped < 'ex > { super :: ExPopupCenteredClamped :: new (self ,) } pub (crate) fn popup_exclusive_full (& mut self , from_node : ObjectArg < crate :: classes :: Node > , rect : Rect2i ,) { type CallRet = () ; type CallParams = (ObjectArg < crate :: classes :: Node > , Rect2i ,) ; let args = (from_node , rect ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (992usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Window" , "popup_exclusive" , self . object_ptr , args ,) } } # [inline] pub fn popup_exclusive (& mut self , from_node : impl AsObjectArg < crate :: classes :: Node > ,) { self . popup_exclusive_ex (from_node ,) . done () } # [inline] pub fn popup_exclusive_ex < 'ex > (& 'ex mut self , from_node : impl AsObjectArg < crate :: classes :: Node > ,) -> super :: ExPopupExclusive < 'ex > { super :: ExPopupExclusive :: new (self , from_node . as_object_arg () ,) } pub fn popup_exclusive_on_parent (& mut self , from_node : impl AsObjectArg < crate :: classes :: Node > , parent_rect : Rect2i ,) { type CallRet = () ; type CallParams = (ObjectArg < crate :: classes :: Node > , Rect2i ,) ; let args = (from_node . as_object_arg () , parent_rect ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (993usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Window" , "popup_exclusive_on_parent" , self . object_ptr , args ,) } } pub (crate) fn popup_exclusive_centered_full (& mut self , from_node : ObjectArg < crate :: classes :: Node > , minsize : Vector2i ,) { type CallRet = () ; type CallParams = (ObjectArg < crate :: classes :: Node > , Vector2i ,) ; let args = (from_node , minsize ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (994usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Window" , "popup_exclusive_centered" , self . object_ptr , args ,) } } # [inline] pub fn popup_exclusive_centered (& mut self , from_node : impl AsObjectArg < crate :: classes :: Node > ,) { self . popup_exclusive_centered_ex (from_node ,) . done () } # [inline] pub fn popup_exclusive_centered_ex < 'ex > (& 'ex mut self , from_node : impl AsObjectArg < crate :: classes :: Node > ,) -> super :: ExPopupExclusiveCentered < 'ex > { super :: ExPopupExclusiveCentered :: new (self , from_node . as_object_arg () ,) } pub (crate) fn popup_exclusive_centered_ratio_full (& mut self , from_node : ObjectArg < crate :: classes :: Node > , ratio : f32 ,) { type CallRet = () ; type CallParams = (ObjectArg < crate :: classes :: Node > , f32 ,) ; let args = (from_node , ratio ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (995usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Window" , "popup_exclusive_centered_ratio" , self . object_ptr , args ,) } } # [inline] pub fn popup_exclusive_centered_ratio (& mut self , from_node : impl AsObjectArg < crate :: classes :: Node > ,) { self . popup_exclusive_centered_ratio_ex (from_node ,) . done () } # [inline] pub fn popup_exclusive_centered_ratio_ex < 'ex > (& 'ex mut self , from_node : impl AsObjectArg < crate :: classes :: Node > ,) -> super :: ExPopupExclusiveCenteredRatio < 'ex > { super :: ExPopupExclusiveCenteredRatio :: new (self , from_node . as_object_arg () ,) } pub (crate) fn popup_exclusive_centered_clamped_full (& mut self , from_node : ObjectArg < crate :: classes :: Node > , minsize : Vector2i , fallback_ratio : f32 ,) { type CallRet = () ; type CallParams = (ObjectArg < crate :: classes :: Node > , Vector2i , f32 ,) ; let args = (from_node , minsize , fallback_ratio ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (996usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Window" , "popup_exclusive_centered_clamped" , self . object_ptr , args ,) } } # [inline] pub fn popup_exclusive_centered_clamped (& mut self , from_node : impl AsObjectArg < crate :: classes :: Node > ,) { self . popup_exclusive_centered_clamped_ex (from_node ,) . done () } # [inline] pub fn popup_exclusive_centered_clamped_ex < 'ex > (& 'ex mut self , from_node : impl AsObjectArg < crate :: classes :: Node > ,) -> super :: ExPopupExclusiveCenteredClamped < 'ex > { super :: ExPopupExclusiveCenteredClamped :: new (self , from_node . as_object_arg () ,) } # [doc = "Typed signals of this class and its bases; see [`SignalsOfWindow`][super::window::SignalsOfWindow]."] pub fn signals (& mut self) -> super :: SignalsOfWindow < '_ > { super :: SignalsOfWindow :: __new (crate :: signal :: SignalObject :: __new (self . object_ptr)) } pub const NOTIFICATION_VISIBILITY_CHANGED : i32 = 30i32 ; pub const NOTIFICATION_THEME_CHANGED : i32 = 32i32 ; } impl crate :: obj :: GodotClass for Window { const CLASS_NAME : & 'static str = "Window" ; type Base = crate :: classes :: Viewport ; type Memory = crate :: obj :: MemManual ; const INIT_LEVEL : crate :: init :: InitLevel = crate :: init :: InitLevel :: Scene ; } impl crate :: obj :: EngineClass for Window { fn as_object_ptr (& self) -> sys :: GDExtensionObjectPtr { self . object_ptr } } unsafe impl crate :: obj :: Inherits < crate :: classes :: Viewport > for Window { } unsafe impl crate :: obj :: Inherits < crate :: classes :: Node > for Window { } unsafe impl crate :: obj :: Inherits < crate :: classes :: Object > for Window { } impl crate :: obj :: Instantiable for Window { } impl std :: ops :: Deref for Window { type Target = crate :: classes :: Viewport ; fn deref (& self) -> & Self :: Target { unsafe { std :: mem :: transmute :: < & Self , & Self :: Target > (self) } } } impl std :: ops :: DerefMut for Window { fn deref_mut (& mut self) -> & mut Self :: Target { unsafe { std :: mem :: transmute :: < & mut Self , & mut Self :: Target > (self) } } } } # [doc = "Default-param extender for [`Window::get_theme_icon_ex`][super::Window::get_theme_icon_ex]."] # [must_use] pub struct ExGetThemeIcon < 'ex > { surround_object : & 'ex re_export :: Window , name : CowArg < 'ex , StringName > , theme_type : CowArg < 'ex , StringName > , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExGetThemeIcon < 'ex > { fn new (surround_object : & 'ex re_export :: Window , name : CowArg < 'ex , StringName > ,) -> Self { Self { surround_object , name , theme_type : CowArg :: Owned (StringName :: from ("")) , } } # [inline] pub fn theme_type (self , value : impl AsArg < StringName > + 'ex) -> Self { Self { theme_type : value . into_arg () , .. self } } # [inline] pub fn done (self) -> Option < Gd < crate :: classes :: Texture2D > > { re_export :: Window :: get_theme_icon_full (self . surround_object , self . name , self . theme_type ,) } } # [doc = "Default-param extender for [`Window::get_theme_font_ex`][super::Window::get_theme_font_ex]."] # [must_use] pub struct ExGetThemeFont < 'ex > { surround_object : & 'ex re_export :: Window , name : CowArg < 'ex , StringName > , theme_type : CowArg < 'ex , StringName > , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExGetThemeFont < 'ex > { fn new (surround_object : & 'ex re_export :: Window , name : CowArg < 'ex , StringName > ,) -> Self { Self { surround_object , name , theme_type : CowArg :: Owned (StringName :: from ("")) , } } # [inline] pub fn theme_type (self , value : impl AsArg < StringName > + 'ex) -> Self { Self { theme_type : value . into_arg () , .. self } } # [inline] pub fn done (self) -> Option < Gd < crate :: classes :: Font > > { re_export :: Window :: get_theme_font_full (self . surround_object , self . name , self . theme_type ,) } } # [doc = "Default-param extender for [`Window::get_theme_font_size_ex`][super::Window::get_theme_font_size_ex]."] # [must_use] pub struct ExGetThemeFontSize < 'ex > { surround_object : & 'ex re_export :: Window , name : CowArg < 'ex , StringName > , theme_type : CowArg < 'ex , StringName > , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExGetThemeFontSize < 'ex > { fn new (surround_object : & 'ex re_export :: Window , name : CowArg < 'ex , StringName > ,) -> Self { Self { surround_object , name , theme_type : CowArg :: Owned (StringName :: from ("")) , } } # [inline] pub fn theme_type (self , value : impl AsArg < StringName > + 'ex) -> Self { Self { theme_type : value . into_arg () , .. self } } # [inline] pub fn done (self) -> i32 { re_export :: Window :: get_theme_font_size_full (self . surround_object , self . name , self . theme_type ,) } } # [doc = "Default-param extender for [`Window::get_theme_color_ex`][super::Window::get_theme_color_ex]."] # [must_use] pub struct ExGetThemeColor < 'ex > { surround_object : & 'ex re_export :: Window , name : CowArg < 'ex , StringName > , theme_type : CowArg < 'ex , StringName > , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExGetThemeColor < 'ex > { fn new (surround_object : & 'ex re_export :: Window , name : CowArg < 'ex , StringName > ,) -> Self { Self { surround_object , name , theme_type : CowArg :: Owned (StringName :: from ("")) , } } # [inline] pub fn theme_type (self , value : impl AsArg < StringName > + 'ex) -> Self { Self { theme_type : value . into_arg () , .. self } } # [inline] pub fn done (self) -> Color { re_export :: Window :: get_theme_color_full (self . surround_object , self . name , self . theme_type ,) } } # [doc = "Default-param extender for [`Window::get_theme_constant_ex`][super::Window::get_theme_constant_ex]."] # [must_use] pub struct ExGetThemeConstant < 'ex > { surround_object : & 'ex re_export :: Window , name : CowArg < 'ex , StringName > , theme_type : CowArg < 'ex , StringName > , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExGetThemeConstant < 'ex > { fn new (surround_object : & 'ex re_export :: Window , name : CowArg < 'ex , StringName > ,) -> Self { Self { surround_object , name , theme_type : CowArg :: Owned (StringName :: from ("")) , } } # [inline] pub fn theme_type (self , value : impl AsArg < StringName > + 'ex) -> Self { Self { theme_type : value . into_arg () , .. self } } # [inline] pub fn done (self) -> i32 { re_export :: Window :: get_theme_constant_full (self . surround_object , self . name , self . theme_type ,) } } # [doc = "Default-param extender for [`Window::has_theme_icon_ex`][super::Window::has_theme_icon_ex]."] # [must_use] pub struct ExHasThemeIcon < 'ex > { surround_object : & 'ex re_export :: Window , name : CowArg < 'ex , StringName > , theme_type : CowArg < 'ex , StringName > , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExHasThemeIcon < 'ex > { fn new (surround_object : & 'ex re_export :: Window , name : CowArg < 'ex , StringName > ,) -> Self { Self { surround_object , name , theme_type : CowArg :: Owned (StringName :: from ("")) , } } # [inline] pub fn theme_type (self , value : impl AsArg < StringName > + 'ex) -> Self { Self { theme_type : value . into_arg () , .. self } } # [inline] pub fn done (self) -> bool { re_export :: Window :: has_theme_icon_full (self . surround_object , self . name , self . theme_type ,) } } # [doc = "Default-param extender for [`Window::has_theme_stylebox_ex`][super::Window::has_theme_stylebox_ex]."] # [must_use] pub struct ExHasThemeStylebox < 'ex > { surround_object : & 'ex re_export :: Window , name : CowArg < 'ex , StringName > , theme_type : CowArg < 'ex , StringName > , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExHasThemeStylebox < 'ex > { fn new (surround_object : & 'ex re_export :: Window , name : CowArg < 'ex , StringName > ,) -> Self { Self { surround_object , name , theme_type : CowArg :: Owned (StringName :: from ("")) , } } # [inline] pub fn theme_type (self , value : impl AsArg < StringName > + 'ex) -> Self { Self { theme_type : value . into_arg () , .. self } } # [inline] pub fn done (self) -> bool { re_export :: Window :: has_theme_stylebox_full (self . surround_object , self . name , self . theme_type ,) } } # [doc = "Default-param extender for [`Window::has_theme_font_ex`][super::Window::has_theme_font_ex]."] # [must_use] pub struct ExHasThemeFont < 'ex > { surround_object : & 'ex re_export :: Window , name : CowArg < 'ex , StringName > , theme_type : CowArg < 'ex , StringName > , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExHasThemeFont < 'ex > { fn new (surround_object : & 'ex re_export :: Window , name : CowArg < 'ex , StringName > ,) -> Self { Self { surround_object , name , theme_type : CowArg :: Owned (StringName :: from ("")) , } } # [inline] pub fn theme_type (self , value : impl AsArg < StringName > + 'ex) -> Self { Self { theme_type : value . into_arg () , .. self } } # [inline] pub fn done (self) -> bool { re_export :: Window :: has_theme_font_full (self . surround_object , self . name , self . theme_type ,) } } # [doc = "Default-param extender for [`Window::has_theme_font_size_ex`][super::Window::has_theme_font_size_ex]."] # [must_use] pub struct ExHasThemeFontSize < 'ex > { surround_object : & 'ex re_export :: Window , name : CowArg < 'ex , StringName > , theme_type : CowArg < 'ex , StringName > , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExHasThemeFontSize < 'ex > { fn new (surround_object : & 'ex re_export :: Window , name : CowArg < 'ex , StringName > ,) -> Self { Self { surround_object , name , theme_type : CowArg :: Owned (StringName :: from ("")) , } } # [inline] pub fn theme_type (self , value : impl AsArg < StringName > + 'ex) -> Self { Self { theme_type : value . into_arg () , .. self } } # [inline] pub fn done (self) -> bool { re_export :: Window :: has_theme_font_size_full (self . surround_object , self . name , self . theme_type ,) } } # [doc = "Default-param extender for [`Window::has_theme_color_ex`][super::Window::has_theme_color_ex]."] # [must_use] pub struct ExHasThemeColor < 'ex > { surround_object : & 'ex re_export :: Window , name : CowArg < 'ex , StringName > , theme_type : CowArg < 'ex , StringName > , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExHasThemeColor < 'ex > { fn new (surround_object : & 'ex re_export :: Window , name : CowArg < 'ex , StringName > ,) -> Self { Self { surround_object , name , theme_type : CowArg :: Owned (StringName :: from ("")) , } } # [inline] pub fn theme_type (self , value : impl AsArg < StringName > + 'ex) -> Self { Self { theme_type : value . into_arg () , .. self } } # [inline] pub fn done (self) -> bool { re_export :: Window :: has_theme_color_full (self . surround_object , self . name , self . theme_type ,) } } # [doc = "Default-param extender for [`Window::has_theme_constant_ex`][super::Window::has_theme_constant_ex]."] # [must_use] pub struct ExHasThemeConstant < 'ex > { surround_object : & 'ex re_export :: Window , name : CowArg < 'ex , StringName > , theme_type : CowArg < 'ex , StringName > , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExHasThemeConstant < 'ex > { fn new (surround_object : & 'ex re_export :: Window , name : CowArg < 'ex , StringName > ,) -> Self { Self { surround_object , name , theme_type : CowArg :: Owned (StringName :: from ("")) , } } # [inline] pub fn theme_type (self , value : impl AsArg < StringName > + 'ex) -> Self { Self { theme_type : value . into_arg () , .. self } } # [inline] pub fn done (self) -> bool { re_export :: Window :: has_theme_constant_full (self . surround_object , self . name , self . theme_type ,) } } # [doc = "Default-param extender for [`Window::popup_ex`][super::Window::popup_ex]."] # [must_use] pub struct ExPopup < 'ex > { surround_object : & 'ex mut re_export :: Window , rect : Rect2i , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExPopup < 'ex > { fn new (surround_object : & 'ex mut re_export :: Window ,) -> Self { Self { surround_object , rect : Rect2i :: from_components (0 as _ , 0 as _ , 0 as _ , 0 as _) , } } # [inline] pub fn rect (self , value : Rect2i) -> Self { Self { rect : value , .. self } } # [inline] pub fn done (self) { re_export :: Window :: popup_full (self . surround_object , self . rect ,) } } # [doc = "Default-param extender for [`Window::popup_centered_ex`][super::Window::popup_centered_ex]."] # [must_use] pub struct ExPopupCentered < 'ex > { surround_object : & 'ex mut re_export :: Window , minsize : Vector2i , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExPopupCentered < 'ex > { fn new (surround_object : & 'ex mut re_export :: Window ,) -> Self { Self { surround_object , minsize : Vector2i :: new (0 as _ , 0 as _) , } } # [inline] pub fn minsize (self , value : Vector2i) -> Self { Self { minsize : value , .. self } } # [inline] pub fn done (self) { re_export :: Window :: popup_centered_full (self . surround_object , self . minsize ,) } } # [doc = "Default-param extender for [`Window::popup_centered_ratio_ex`][super::Window::popup_centered_ratio_ex]."] # [must_use] pub struct ExPopupCenteredRatio < 'ex > { surround_object : & 'ex mut re_export :: Window , ratio : f32 , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExPopupCenteredRatio < 'ex > { fn new (surround_object : & 'ex mut re_export :: Window ,) -> Self { Self { surround_object , ratio : 0.8f32 , } } # [inline] pub fn ratio (self , value : f32) -> Self { Self { ratio : value , .. self } } # [inline] pub fn done (self) { re_export :: Window :: popup_centered_ratio_full (self . surround_object , self . ratio ,) } } # [doc = "Default-param extender for [`Window::popup_centered_clamped_ex`][super::Window::popup_centered_clamped_ex]."] # [must_use] pub struct ExPopupCenteredClamped < 'ex > { surround_object : & 'ex mut re_export :: Window , minsize : Vector2i , fallback_ratio : f32 , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExPopupCenteredClamped < 'ex > { fn new (surround_object : & 'ex mut re_export :: Window ,) -> Self { Self { surround_object , minsize : Vector2i :: new (0 as _ , 0 as _) , fallback_ratio : 0.75f32 , } } # [inline] pub fn minsize (self , value : Vector2i) -> Self { Self { minsize : value , .. self } } # [inline] pub fn fallback_ratio (self , value : f32) -> Self { Self { fallback_ratio : value , .. self } } # [inline] pub fn done (self) { re_export :: Window :: popup_centered_clamped_full (self . surround_object , self . minsize , self . fallback_ratio ,) } } # [doc = "Default-param extender for [`Window::popup_exclusive_ex`][super::Window::popup_exclusive_ex]."] # [must_use] pub struct ExPopupExclusive < 'ex > { surround_object : & 'ex mut re_export :: Window , from_node : ObjectArg < crate :: classes :: Node > , rect : Rect2i , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExPopupExclusive < 'ex > { fn new (surround_object : & 'ex mut re_export :: Window , from_node : ObjectArg < crate :: classes :: Node > ,) -> Self { Self { surround_object , from_node , rect : Rect2i :: from_components (0 as _ , 0 as _ , 0 as _ , 0 as _) , } } # [inline] pub fn rect (self , value : Rect2i) -> Self { Self { rect : value , .. self } } # [inline] pub fn done (self) { re_export :: Window :: popup_exclusive_full (self . surround_object , self . from_node , self . rect ,) } } # [doc = "Default-param extender for [`Window::popup_exclusive_centered_ex`][super::Window::popup_exclusive_centered_ex]."] # [must_use] pub struct ExPopupExclusiveCentered < 'ex > { surround_object : & 'ex mut re_export :: Window , from_node : ObjectArg < crate :: classes :: Node > , minsize : Vector2i , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExPopupExclusiveCentered < 'ex > { fn new (surround_object : & 'ex mut re_export :: Window , from_node : ObjectArg < crate :: classes :: Node > ,) -> Self { Self { surround_object , from_node , minsize : Vector2i :: new (0 as _ , 0 as _) , } } # [inline] pub fn minsize (self , value : Vector2i) -> Self { Self { minsize : value , .. self } } # [inline] pub fn done (self) { re_export :: Window :: popup_exclusive_centered_full (self . surround_object , self . from_node , self . minsize ,) } } # [doc = "Default-param extender for [`Window::popup_exclusive_centered_ratio_ex`][super::Window::popup_exclusive_centered_ratio_ex]."] # [must_use] pub struct ExPopupExclusiveCenteredRatio < 'ex > { surround_object : & 'ex mut re_export :: Window , from_node : ObjectArg < crate :: classes :: Node > , ratio : f32 , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExPopupExclusiveCenteredRatio < 'ex > { fn new (surround_object : & 'ex mut re_export :: Window , from_node : ObjectArg < crate :: classes :: Node > ,) -> Self { Self { surround_object , from_node , ratio : 0.8f32 , } } # [inline] pub fn ratio (self , value : f32) -> Self { Self { ratio : value , .. self } } # [inline] pub fn done (self) { re_export :: Window :: popup_exclusive_centered_ratio_full (self . surround_object , self . from_node , self . ratio ,) } } # [doc = "Default-param extender for [`Window::popup_exclusive_centered_clamped_ex`][super::Window::popup_exclusive_centered_clamped_ex]."] # [must_use] pub struct ExPopupExclusiveCenteredClamped < 'ex > { surround_object : & 'ex mut re_export :: Window , from_node : ObjectArg < crate :: classes :: Node > , minsize : Vector2i , fallback_ratio : f32 , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExPopupExclusiveCenteredClamped < 'ex > { fn new (surround_object : & 'ex mut re_export :: Window , from_node : ObjectArg < crate :: classes :: Node > ,) -> Self { Self { surround_object , from_node , minsize : Vector2i :: new (0 as _ , 0 as _) , fallback_ratio : 0.75f32 , } } # [inline] pub fn minsize (self , value : Vector2i) -> Self { Self { minsize : value , .. self } } # [inline] pub fn fallback_ratio (self , value : f32) -> Self { Self { fallback_ratio : value , .. self } } # [inline] pub fn done (self) { re_export :: Window :: popup_exclusive_centered_clamped_full (self . surround_object , self . from_node , self . minsize , self . fallback_ratio ,) } } # [repr (transparent)] # [derive (Copy , Clone , Eq , PartialEq , Hash ,)] pub struct Mode { ord : i32 } impl Mode { # [doc (alias = "MODE_WINDOWED")] # [doc = "Godot enumerator name: `MODE_WINDOWED`"] pub const WINDOWED : Self = Self { ord : 0 } ; # [doc (alias = "MODE_MINIMIZED")] # [doc = "Godot enumerator name: `MODE_MINIMIZED`"] pub const MINIMIZED : Self = Self { ord : 1 } ; # [doc (alias = "MODE_MAXIMIZED")] # [doc = "Godot enumerator name: `MODE_MAXIMIZED`"] pub const MAXIMIZED : Self = Self { ord : 2 } ; # [doc (alias = "MODE_FULLSCREEN")] # [doc = "Godot enumerator name: `MODE_FULLSCREEN`"] pub const FULLSCREEN : Self = Self { ord : 3 } ; # [doc (alias = "MODE_EXCLUSIVE_FULLSCREEN")] # [doc = "Godot enumerator name: `MODE_EXCLUSIVE_FULLSCREEN`"] pub const EXCLUSIVE_FULLSCREEN : Self = Self { ord : 4 } ; # [allow (unreachable_patterns)] fn enumerator_name (self) -> Option < & 'static str > { match self { Self :: WINDOWED => Some ("WINDOWED") , Self :: MINIMIZED => Some ("MINIMIZED") , Self :: MAXIMIZED => Some ("MAXIMIZED") , Self :: FULLSCREEN => Some ("FULLSCREEN") , Self :: EXCLUSIVE_FULLSCREEN => Some ("EXCLUSIVE_FULLSCREEN") , _ => None , } } } impl std :: fmt :: Debug for Mode { fn fmt (& self , f : & mut std :: fmt :: Formatter < '_ >) -> std :: fmt :: Result { match self . enumerator_name () { Some (enumerator) => f . write_str (enumerator) , None => f . debug_struct (stringify ! (Mode)) . field ("ord" , & self . ord) . finish () , } } } impl crate :: obj :: EngineEnum for Mode { fn try_from_ord (ord : i32) -> Option < Self > { match ord { 0 | 1 | 2 | 3 | 4 => Some (Self { ord }) , _ => None , } } fn ord (self) -> i32 { self . ord } } impl crate :: meta :: GodotConvert for Mode { type Via = i32 ; } impl crate :: meta :: ToGodot for Mode { fn to_godot (& self) -> Self :: Via { < Self as crate :: obj :: EngineEnum > :: ord (* self) } } impl crate :: meta :: FromGodot for Mode { fn try_from_godot (via : Self :: Via) -> std :: result :: Result < Self , crate :: meta :: ConvertError > { Ok (Self { ord : via }) } } # [repr (transparent)] # [derive (Copy , Clone , Eq , PartialEq , Hash ,)] pub struct Flags { ord : i32 } impl Flags { # [doc (alias = "FLAG_RESIZE_DISABLED")] # [doc = "Godot enumerator name: `FLAG_RESIZE_DISABLED`"] pub const RESIZE_DISABLED : Self = Self { ord : 0 } ; # [doc (alias = "FLAG_BORDERLESS")] # [doc = "Godot enumerator name: `FLAG_BORDERLESS`"] pub const BORDERLESS : Self = Self { ord : 1 } ; # [doc (alias = "FLAG_ALWAYS_ON_TOP")] # [doc = "Godot enumerator name: `FLAG_ALWAYS_ON_TOP`"] pub const ALWAYS_ON_TOP : Self = Self { ord : 2 } ; # [doc (alias = "FLAG_TRANSPARENT")] # [doc = "Godot enumerator name: `FLAG_TRANSPARENT`"] pub const TRANSPARENT : Self = Self { ord : 3 } ; # [doc (alias = "FLAG_NO_FOCUS")] # [doc = "Godot enumerator name: `FLAG_NO_FOCUS`"] pub const NO_FOCUS : Self = Self { ord : 4 } ; # [doc (alias = "FLAG_POPUP")] # [doc = "Godot enumerator name: `FLAG_POPUP`"] pub const POPUP : Self = Self { ord : 5 } ; # [doc (alias = "FLAG_EXTEND_TO_TITLE")] # [doc = "Godot enumerator name: `FLAG_EXTEND_TO_TITLE`"] pub const EXTEND_TO_TITLE : Self = Self { ord : 6 } ; # [doc (alias = "FLAG_MOUSE_PASSTHROUGH")] # [doc = "Godot enumerator name: `FLAG_MOUSE_PASSTHROUGH`"] pub const MOUSE_PASSTHROUGH : Self = Self { ord : 7 } ; # [doc (alias = "FLAG_MAX")] # [doc = "Godot enumerator name: `FLAG_MAX`"] pub const MAX : Self = Self { ord : 8 } ; # [allow (unreachable_patterns)] fn enumerator_name (self) -> Option < & 'static str > { match self { Self :: RESIZE_DISABLED => Some ("RESIZE_DISABLED") , Self :: BORDERLESS => Some ("BORDERLESS") , Self :: ALWAYS_ON_TOP => Some ("ALWAYS_ON_TOP") , Self :: TRANSPARENT => Some ("TRANSPARENT") , Self :: NO_FOCUS => Some ("NO_FOCUS") , Self :: POPUP => Some ("POPUP") , Self :: EXTEND_TO_TITLE => Some ("EXTEND_TO_TITLE") , Self :: MOUSE_PASSTHROUGH => Some ("MOUSE_PASSTHROUGH") , Self :: MAX => Some ("MAX") , _ => None , } } } impl std :: fmt :: Debug for Flags { fn fmt (& self , f : & mut std :: fmt :: Formatter < '_ >) -> std :: fmt :: Result { match self . enumerator_name () { Some (enumerator) => f . write_str (enumerator) , None => f . debug_struct (stringify ! (Flags)) . field ("ord" , & self . ord) . finish () , } } } impl crate :: obj :: EngineEnum for Flags { fn try_from_ord (ord : i32) -> Option < Self > { match ord { 0 | 1 | 2 | 3 | 4 | 5 | 6 | 7 | 8 => Some (Self { ord }) , _ => None , } } fn ord (self) -> i32 { self . ord } } impl crate :: meta :: GodotConvert for Flags { type Via = i32 ; } impl crate :: meta :: ToGodot for Flags { fn to_godot (& self) -> Self :: Via { < Self as crate :: obj :: EngineEnum > :: ord (* self) } } impl crate :: meta :: FromGodot for Flags { fn try_from_godot (via : Self :: Via) -> std :: result :: Result < Self , crate :: meta :: ConvertError > { Ok (Self { ord : via }) } } # [repr (transparent)] # [derive (Copy , Clone , Eq , PartialEq , Hash ,)] pub struct ContentScaleMode { ord : i32 } impl ContentScaleMode { # [doc (alias = "CONTENT_SCALE_MODE_DISABLED")] # [doc = "Godot enumerator name: `CONTENT_SCALE_MODE_DISABLED`"] pub const DISABLED : Self = Self { ord : 0 } ; # [doc (alias = "CONTENT_SCALE_MODE_CANVAS_ITEMS")] # [doc = "Godot enumerator name: `CONTENT_SCALE_MODE_CANVAS_ITEMS`"] pub const CANVAS_ITEMS : Self = Self { ord : 1 } ; # [doc (alias = "CONTENT_SCALE_MODE_VIEWPORT")] # [doc = "Godot enumerator name: `CONTENT_SCALE_MODE_VIEWPORT`"] pub const VIEWPORT : Self = Self { ord : 2 } ; # [allow (unreachable_patterns)] fn enumerator_name (self) -> Option < & 'static str > { match self { Self :: DISABLED => Some ("DISABLED") , Self :: CANVAS_ITEMS => Some ("CANVAS_ITEMS") , Self :: VIEWPORT => Some ("VIEWPORT") , _ => None , } } } impl std :: fmt :: Debug for ContentScaleMode { fn fmt (& self , f : & mut std :: fmt :: Formatter < '_ >) -> std :: fmt :: Result { match self . enumerator_name () { Some (enumerator) => f . write_str (enumerator) , None => f . debug_struct (stringify ! (ContentScaleMode)) . field ("ord" , & self . ord) . finish () , } } } impl crate :: obj :: EngineEnum for ContentScaleMode { fn try_from_ord (ord : i32) -> Option < Self > { match ord { 0 | 1 | 2 => Some (Self { ord }) , _ => None , } } fn ord (self) -> i32 { self . ord } } impl crate :: meta :: GodotConvert for ContentScaleMode { type Via = i32 ; } impl crate :: meta :: ToGodot for ContentScaleMode { fn to_godot (& self) -> Self :: Via { < Self as crate :: obj :: EngineEnum > :: ord (* self) } } impl crate :: meta :: FromGodot for ContentScaleMode { fn try_from_godot (via : Self :: Via) -> std :: result :: Result < Self , crate :: meta :: ConvertError > { Ok (Self { ord : via }) } } # [repr (transparent)] # [derive (Copy , Clone , Eq , PartialEq , Hash ,)] pub struct ContentScaleAspect { ord : i32 } impl ContentScaleAspect { # [doc (alias = "CONTENT_SCALE_ASPECT_IGNORE")] # [doc = "Godot enumerator name: `CONTENT_SCALE_ASPECT_IGNORE`"] pub const IGNORE : Self = Self { ord : 0 } ; # [doc (alias = "CONTENT_SCALE_ASPECT_KEEP")] # [doc = "Godot enumerator name: `CONTENT_SCALE_ASPECT_KEEP`"] pub const KEEP : Self = Self { ord : 1 } ; # [doc (alias = "CONTENT_SCALE_ASPECT_KEEP_WIDTH")] # [doc = "Godot enumerator name: `CONTENT_SCALE_ASPECT_KEEP_WIDTH`"] pub const KEEP_WIDTH : Self = Self { ord : 2 } ; # [doc (alias = "CONTENT_SCALE_ASPECT_KEEP_HEIGHT")] # [doc = "Godot enumerator name: `CONTENT_SCALE_ASPECT_KEEP_HEIGHT`"] pub const KEEP_HEIGHT : Self = Self { ord : 3 } ; # [doc (alias = "CONTENT_SCALE_ASPECT_EXPAND")] # [doc = "Godot enumerator name: `CONTENT_SCALE_ASPECT_EXPAND`"] pub const EXPAND : Self = Self { ord : 4 } ; # [allow (unreachable_patterns)] fn enumerator_name (self) -> Option < & 'static str > { match self { Self :: IGNORE => Some ("IGNORE") , Self :: KEEP => Some ("KEEP") , Self :: KEEP_WIDTH => Some ("KEEP_WIDTH") , Self :: KEEP_HEIGHT => Some ("KEEP_HEIGHT") , Self :: EXPAND => Some ("EXPAND") , _ => None , } } } impl std :: fmt :: Debug for ContentScaleAspect { fn fmt (& self , f : & mut std :: fmt :: Formatter < '_ >) -> std :: fmt :: Result { match self . enumerator_name () { Some (enumerator) => f . write_str (enumerator) , None => f . debug_struct (stringify ! (ContentScaleAspect)) . field ("ord" , & self . ord) . finish () , } } } impl crate :: obj :: EngineEnum for ContentScaleAspect { fn try_from_ord (ord : i32) -> Option < Self > { match ord { 0 | 1 | 2 | 3 | 4 => Some (Self { ord }) , _ => None , } } fn ord (self) -> i32 { self . ord } } impl crate :: meta :: GodotConvert for ContentScaleAspect { type Via = i32 ; } impl crate :: meta :: ToGodot for ContentScaleAspect { fn to_godot (& self) -> Self :: Via { < Self as crate :: obj :: EngineEnum > :: ord (* self) } } impl crate :: meta :: FromGodot for ContentScaleAspect { fn try_from_godot (via : Self :: Via) -> std :: result :: Result < Self , crate :: meta :: ConvertError > { Ok (Self { ord : via }) } } # [repr (transparent)] # [derive (Copy , Clone , Eq , PartialEq , Hash ,)] pub struct ContentScaleStretch { ord : i32 } impl ContentScaleStretch { # [doc (alias = "CONTENT_SCALE_STRETCH_FRACTIONAL")] # [doc = "Godot enumerator name: `CONTENT_SCALE_STRETCH_FRACTIONAL`"] pub const FRACTIONAL : Self = Self { ord : 0 } ; # [doc (alias = "CONTENT_SCALE_STRETCH_INTEGER")] # [doc = "Godot enumerator name: `CONTENT_SCALE_STRETCH_INTEGER`"] pub const INTEGER : Self = Self { ord : 1 } ; # [allow (unreachable_patterns)] fn enumerator_name (self) -> Option < & 'static str > { match self { Self :: FRACTIONAL => Some ("FRACTIONAL") , Self :: INTEGER => Some ("INTEGER") , _ => None , } } } impl std :: fmt :: Debug for ContentScaleStretch { fn fmt (& self , f : & mut std :: fmt :: Formatter < '_ >) -> std :: fmt :: Result { match self . enumerator_name () { Some (enumerator) => f . write_str (enumerator) , None => f . debug_struct (stringify ! (ContentScaleStretch)) . field ("ord" , & self . ord) . finish () , } } } impl crate :: obj :: EngineEnum for ContentScaleStretch { fn try_from_ord (ord : i32) -> Option < Self > { match ord { 0 | 1 => Some (Self { ord }) , _ => None , } } fn ord (self) -> i32 { self . ord } } impl crate :: meta :: GodotConvert for ContentScaleStretch { type Via = i32 ; } impl crate :: meta :: ToGodot for ContentScaleStretch { fn to_godot (& self) -> Self :: Via { < Self as crate :: obj :: EngineEnum > :: ord (* self) } } impl crate :: meta :: FromGodot for ContentScaleStretch { fn try_from_godot (via : Self :: Via) -> std :: result :: Result < Self , crate :: meta :: ConvertError > { Ok (Self { ord : via }) } } # [repr (transparent)] # [derive (Copy , Clone , Eq , PartialEq , Hash ,)] pub struct LayoutDirection { ord : i32 } impl LayoutDirection { # [doc (alias = "LAYOUT_DIRECTION_INHERITED")] # [doc = "Godot enumerator name: `LAYOUT_DIRECTION_INHERITED`"] pub const INHERITED : Self = Self { ord : 0 } ; # [doc (alias = "LAYOUT_DIRECTION_LOCALE")] # [doc = "Godot enumerator name: `LAYOUT_DIRECTION_LOCALE`"] pub const LOCALE : Self = Self { ord : 1 } ; # [doc (alias = "LAYOUT_DIRECTION_LTR")] # [doc = "Godot enumerator name: `LAYOUT_DIRECTION_LTR`"] pub const LTR : Self = Self { ord : 2 } ; # [doc (alias = "LAYOUT_DIRECTION_RTL")] # [doc = "Godot enumerator name: `LAYOUT_DIRECTION_RTL`"] pub const RTL : Self = Self { ord : 3 } ; # [allow (unreachable_patterns)] fn enumerator_name (self) -> Option < & 'static str > { match self { Self :: INHERITED => Some ("INHERITED") , Self :: LOCALE => Some ("LOCALE") , Self :: LTR => Some ("LTR") , Self :: RTL => Some ("RTL") , _ => None , } } } impl std :: fmt :: Debug for LayoutDirection { fn fmt (& self , f : & mut std :: fmt :: Formatter < '_ >) -> std :: fmt :: Result { match self . enumerator_name () { Some (enumerator) => f . write_str (enumerator) , None => f . debug_struct (stringify ! (LayoutDirection)) . field ("ord" , & self . ord) . finish () , } } } impl crate :: obj :: EngineEnum for LayoutDirection { fn try_from_ord (ord : i32) -> Option < Self > { match ord { 0 | 1 | 2 | 3 => Some (Self { ord }) , _ => None , } } fn ord (self) -> i32 { self . ord } } impl crate :: meta :: GodotConvert for LayoutDirection { type Via = i32 ; } impl crate :: meta :: ToGodot for LayoutDirection { fn to_godot (& self) -> Self :: Via { < Self as crate :: obj :: EngineEnum > :: ord (* self) } } impl crate :: meta :: FromGodot for LayoutDirection { fn try_from_godot (via : Self :: Via) -> std :: result :: Result < Self , crate :: meta :: ConvertError > { Ok (Self { ord : via }) } } # [repr (transparent)] # [derive (Copy , Clone , Eq , PartialEq , Hash ,)] pub struct WindowInitialPosition { ord : i32 } impl WindowInitialPosition { # [doc (alias = "WINDOW_INITIAL_POSITION_ABSOLUTE")] # [doc = "Godot enumerator name: `WINDOW_INITIAL_POSITION_ABSOLUTE`"] pub const ABSOLUTE : Self = Self { ord : 0 } ; # [doc (alias = "WINDOW_INITIAL_POSITION_CENTER_PRIMARY_SCREEN")] # [doc = "Godot enumerator name: `WINDOW_INITIAL_POSITION_CENTER_PRIMARY_SCREEN`"] pub const CENTER_PRIMARY_SCREEN : Self = Self { ord : 1 } ; # [doc (alias = "WINDOW_INITIAL_POSITION_CENTER_MAIN_WINDOW_SCREEN")] # [doc = "Godot enumerator name: `WINDOW_INITIAL_POSITION_CENTER_MAIN_WINDOW_SCREEN`"] pub const CENTER_MAIN_WINDOW_SCREEN : Self = Self { ord : 2 } ; # [doc (alias = "WINDOW_INITIAL_POSITION_CENTER_OTHER_SCREEN")] # [doc = "Godot enumerator name: `WINDOW_INITIAL_POSITION_CENTER_OTHER_SCREEN`"] pub const CENTER_OTHER_SCREEN : Self = Self { ord : 3 } ; # [doc (alias = "WINDOW_INITIAL_POSITION_CENTER_SCREEN_WITH_MOUSE_FOCUS")] # [doc = "Godot enumerator name: `WINDOW_INITIAL_POSITION_CENTER_SCREEN_WITH_MOUSE_FOCUS`"] pub const CENTER_SCREEN_WITH_MOUSE_FOCUS : Self = Self { ord : 4 } ; # [doc (alias = "WINDOW_INITIAL_POSITION_CENTER_SCREEN_WITH_KEYBOARD_FOCUS")] # [doc = "Godot enumerator name: `WINDOW_INITIAL_POSITION_CENTER_SCREEN_WITH_KEYBOARD_FOCUS`"] pub const CENTER_SCREEN_WITH_KEYBOARD_FOCUS : Self = Self { ord : 5 } ; # [allow (unreachable_patterns)] fn enumerator_name (self) -> Option < & 'static str > { match self { Self :: ABSOLUTE => Some ("ABSOLUTE") , Self :: CENTER_PRIMARY_SCREEN => Some ("CENTER_PRIMARY_SCREEN") , Self :: CENTER_MAIN_WINDOW_SCREEN => Some ("CENTER_MAIN_WINDOW_SCREEN") , Self :: CENTER_OTHER_SCREEN => Some ("CENTER_OTHER_SCREEN") , Self :: CENTER_SCREEN_WITH_MOUSE_FOCUS => Some ("CENTER_SCREEN_WITH_MOUSE_FOCUS") , Self :: CENTER_SCREEN_WITH_KEYBOARD_FOCUS => Some ("CENTER_SCREEN_WITH_KEYBOARD_FOCUS") , _ => None , } } } impl std :: fmt :: Debug for WindowInitialPosition { fn fmt (& self , f : & mut std :: fmt :: Formatter < '_ >) -> std :: fmt :: Result { match self . enumerator_name () { Some (enumerator) => f . write_str (enumerator) , None => f . debug_struct (stringify ! (WindowInitialPosition)) . field ("ord" , & self . ord) . finish () , } } } impl crate :: obj :: EngineEnum for WindowInitialPosition { fn try_from_ord (ord : i32) -> Option < Self > { match ord { 0 | 1 | 2 | 3 | 4 | 5 => Some (Self { ord }) , _ => None , } } fn ord (self) -> i32 { self . ord } } impl crate :: meta :: GodotConvert for WindowInitialPosition { type Via = i32 ; } impl crate :: meta :: ToGodot for WindowInitialPosition { fn to_godot (& self) -> Self :: Via { < Self as crate :: obj :: EngineEnum > :: ord (* self) } } impl crate :: meta :: FromGodot for WindowInitialPosition { fn try_from_godot (via : Self :: Via) -> std :: result :: Result < Self , crate :: meta :: ConvertError > { Ok (Self { ord : via }) } } # [doc = "Properties declared by [`Window`][super::Window], as interned engine names."] pub struct PropertyName ; impl PropertyName { pub const MODE : InternedName = InternedName :: new ("mode") ; pub const TITLE : InternedName = InternedName :: new ("title") ; pub const INITIAL_POSITION : InternedName = InternedName :: new ("initial_position") ; pub const POSITION : InternedName = InternedName :: new ("position") ; pub const SIZE : InternedName = InternedName :: new ("size") ; pub const CURRENT_SCREEN : InternedName = InternedName :: new ("current_screen") ; pub const MOUSE_PASSTHROUGH_POLYGON : InternedName = InternedName :: new ("mouse_passthrough_polygon") ; pub const VISIBLE : InternedName = InternedName :: new ("visible") ; pub const WRAP_CONTROLS : InternedName = InternedName :: new ("wrap_controls") ; pub const TRANSIENT : InternedName = InternedName :: new ("transient") ; pub const TRANSIENT_TO_FOCUSED : InternedName = InternedName :: new ("transient_to_focused") ; pub const EXCLUSIVE : InternedName = InternedName :: new ("exclusive") ; pub const UNRESIZABLE : InternedName = InternedName :: new ("unresizable") ; pub const BORDERLESS : InternedName = InternedName :: new ("borderless") ; pub const ALWAYS_ON_TOP : InternedName = InternedName :: new ("always_on_top") ; pub const TRANSPARENT : InternedName = InternedName :: new ("transparent") ; pub const UNFOCUSABLE : InternedName = InternedName :: new ("unfocusable") ; pub const POPUP_WINDOW : InternedName = InternedName :: new ("popup_window") ; pub const EXTEND_TO_TITLE : InternedName = InternedName :: new ("extend_to_title") ; pub const MOUSE_PASSTHROUGH : InternedName = InternedName :: new ("mouse_passthrough") ; pub const FORCE_NATIVE : InternedName = InternedName :: new ("force_native") ; pub const MIN_SIZE : InternedName = InternedName :: new ("min_size") ; pub const MAX_SIZE : InternedName = InternedName :: new ("max_size") ; pub const KEEP_TITLE_VISIBLE : InternedName = InternedName :: new ("keep_title_visible") ; pub const CONTENT_SCALE_SIZE : InternedName = InternedName :: new ("content_scale_size") ; pub const CONTENT_SCALE_MODE : InternedName = InternedName :: new ("content_scale_mode") ; pub const CONTENT_SCALE_ASPECT : InternedName = InternedName :: new ("content_scale_aspect") ; pub const CONTENT_SCALE_STRETCH : InternedName = InternedName :: new ("content_scale_stretch") ; pub const CONTENT_SCALE_FACTOR : InternedName = InternedName :: new ("content_scale_factor") ; pub const AUTO_TRANSLATE : InternedName = InternedName :: new ("auto_translate") ; pub const THEME : InternedName = InternedName :: new ("theme") ; pub const THEME_TYPE_VARIATION : InternedName = InternedName :: new ("theme_type_variation") ; } # [doc = "Methods declared by [`Window`][super::Window], as interned engine names."] pub struct MethodName ; impl MethodName { pub const SET_TITLE : InternedName = InternedName :: new ("set_title") ; pub const GET_TITLE : InternedName = InternedName :: new ("get_title") ; pub const GET_WINDOW_ID : InternedName = InternedName :: new ("get_window_id") ; pub const SET_INITIAL_POSITION : InternedName = InternedName :: new ("set_initial_position") ; pub const GET_INITIAL_POSITION : InternedName = InternedName :: new ("get_initial_position") ; pub const SET_CURRENT_SCREEN : InternedName = InternedName :: new ("set_current_screen") ; pub const GET_CURRENT_SCREEN : InternedName = InternedName :: new ("get_current_screen") ; pub const SET_POSITION : InternedName = InternedName :: new ("set_position") ; pub const GET_POSITION : InternedName = InternedName :: new ("get_position") ; pub const MOVE_TO_CENTER : InternedName = InternedName :: new ("move_to_center") ; pub const SET_SIZE : InternedName = InternedName :: new ("set_size") ; pub const GET_SIZE : InternedName = InternedName :: new ("get_size") ; pub const RESET_SIZE : InternedName = InternedName :: new ("reset_size") ; pub const GET_POSITION_WITH_DECORATIONS : InternedName = InternedName :: new ("get_position_with_decorations") ; pub const GET_SIZE_WITH_DECORATIONS : InternedName = InternedName :: new ("get_size_with_decorations") ; pub const SET_MAX_SIZE : InternedName = InternedName :: new ("set_max_size") ; pub const GET_MAX_SIZE : InternedName = InternedName :: new ("get_max_size") ; pub const SET_MIN_SIZE : InternedName = InternedName :: new ("set_min_size") ; pub const GET_MIN_SIZE : InternedName = InternedName :: new ("get_min_size") ; pub const SET_MODE : InternedName = InternedName :: new ("set_mode") ; pub const GET_MODE : InternedName = InternedName :: new ("get_mode") ; pub const SET_FLAG : InternedName = InternedName :: new ("set_flag") ; pub const GET_FLAG : InternedName = InternedName :: new ("get_flag") ; pub const IS_MAXIMIZE_ALLOWED : InternedName = InternedName :: new ("is_maximize_allowed") ; pub const REQUEST_ATTENTION : InternedName = InternedName :: new ("request_attention") ; pub const MOVE_TO_FOREGROUND : InternedName = InternedName :: new ("move_to_foreground") ; pub const SET_VISIBLE : InternedName = InternedName :: new ("set_visible") ; pub const IS_VISIBLE : InternedName = InternedName :: new ("is_visible") ; pub const HIDE : InternedName = InternedName :: new ("hide") ; pub const SHOW : InternedName = InternedName :: new ("show") ; pub const SET_TRANSIENT : InternedName = InternedName :: new ("set_transient") ; pub const IS_TRANSIENT : InternedName = InternedName :: new ("is_transient") ; pub const SET_TRANSIENT_TO_FOCUSED : InternedName = InternedName :: new ("set_transient_to_focused") ; pub const IS_TRANSIENT_TO_FOCUSED : InternedName = InternedName :: new ("is_transient_to_focused") ; pub const SET_EXCLUSIVE : InternedName = InternedName :: new ("set_exclusive") ; pub const IS_EXCLUSIVE : InternedName = InternedName :: new ("is_exclusive") ; pub const SET_UNPARENT_WHEN_INVISIBLE : InternedName = InternedName :: new ("set_unparent_when_invisible") ; pub const CAN_DRAW : InternedName = InternedName :: new ("can_draw") ; pub const HAS_FOCUS : InternedName = InternedName :: new ("has_focus") ; pub const GRAB_FOCUS : InternedName = InternedName :: new ("grab_focus") ; pub const SET_IME_ACTIVE : InternedName = InternedName :: new ("set_ime_active") ; pub const SET_IME_POSITION : InternedName = InternedName :: new ("set_ime_position") ; pub const IS_EMBEDDED : InternedName = InternedName :: new ("is_embedded") ; pub const GET_CONTENTS_MINIMUM_SIZE : InternedName = InternedName :: new ("get_contents_minimum_size") ; pub const SET_FORCE_NATIVE : InternedName = InternedName :: new ("set_force_native") ; pub const GET_FORCE_NATIVE : InternedName = InternedName :: new ("get_force_native") ; pub const SET_CONTENT_SCALE_SIZE : InternedName = InternedName :: new ("set_content_scale_size") ; pub const GET_CONTENT_SCALE_SIZE : InternedName = InternedName :: new ("get_content_scale_size") ; pub const SET_CONTENT_SCALE_MODE : InternedName = InternedName :: new ("set_content_scale_mode") ; pub const GET_CONTENT_SCALE_MODE : InternedName = InternedName :: new ("get_content_scale_mode") ; pub const SET_CONTENT_SCALE_ASPECT : InternedName = InternedName :: new ("set_content_scale_aspect") ; pub const GET_CONTENT_SCALE_ASPECT : InternedName = InternedName :: new ("get_content_scale_aspect") ; pub const SET_CONTENT_SCALE_STRETCH : InternedName = InternedName :: new ("set_content_scale_stretch") ; pub const GET_CONTENT_SCALE_STRETCH : InternedName = InternedName :: new ("get_content_scale_stretch") ; pub const SET_KEEP_TITLE_VISIBLE : InternedName = InternedName :: new ("set_keep_title_visible") ; pub const GET_KEEP_TITLE_VISIBLE : InternedName = InternedName :: new ("get_keep_title_visible") ; pub const SET_CONTENT_SCALE_FACTOR : InternedName = InternedName :: new ("set_content_scale_factor") ; pub const GET_CONTENT_SCALE_FACTOR : InternedName = InternedName :: new ("get_content_scale_factor") ; pub const SET_USE_FONT_OVERSAMPLING : InternedName = InternedName :: new ("set_use_font_oversampling") ; pub const IS_USING_FONT_OVERSAMPLING : InternedName = InternedName :: new ("is_using_font_oversampling") ; pub const SET_WRAP_CONTROLS : InternedName = InternedName :: new ("set_wrap_controls") ; pub const IS_WRAPPING_CONTROLS : InternedName = InternedName :: new ("is_wrapping_controls") ; pub const CHILD_CONTROLS_CHANGED : InternedName = InternedName :: new ("child_controls_changed") ; pub const SET_THEME : InternedName = InternedName :: new ("set_theme") ; pub const GET_THEME : InternedName = InternedName :: new ("get_theme") ; pub const SET_THEME_TYPE_VARIATION : InternedName = InternedName :: new ("set_theme_type_variation") ; pub const GET_THEME_TYPE_VARIATION : InternedName = InternedName :: new ("get_theme_type_variation") ; pub const BEGIN_BULK_THEME_OVERRIDE : InternedName = InternedName :: new ("begin_bulk_theme_override") ; pub const END_BULK_THEME_OVERRIDE : InternedName = InternedName :: new ("end_bulk_theme_override") ; pub const ADD_THEME_ICON_OVERRIDE : InternedName = InternedName :: new ("add_theme_icon_override") ; pub const ADD_THEME_FONT_OVERRIDE : InternedName = InternedName :: new ("add_theme_font_override") ; pub const ADD_THEME_FONT_SIZE_OVERRIDE : InternedName = InternedName :: new ("add_theme_font_size_override") ; pub const ADD_THEME_COLOR_OVERRIDE : InternedName = InternedName :: new ("add_theme_color_override") ; pub const ADD_THEME_CONSTANT_OVERRIDE : InternedName = InternedName :: new ("add_theme_constant_override") ; pub const REMOVE_THEME_ICON_OVERRIDE : InternedName = InternedName :: new ("remove_theme_icon_override") ; pub const REMOVE_THEME_STYLEBOX_OVERRIDE : InternedName = InternedName :: new ("remove_theme_stylebox_override") ; pub const REMOVE_THEME_FONT_OVERRIDE : InternedName = InternedName :: new ("remove_theme_font_override") ; pub const REMOVE_THEME_FONT_SIZE_OVERRIDE : InternedName = InternedName :: new ("remove_theme_font_size_override") ; pub const REMOVE_THEME_COLOR_OVERRIDE : InternedName = InternedName :: new ("remove_theme_color_override") ; pub const REMOVE_THEME_CONSTANT_OVERRIDE : InternedName = InternedName :: new ("remove_theme_constant_override") ; pub const GET_THEME_ICON : InternedName = InternedName :: new ("get_theme_icon") ; pub const GET_THEME_FONT : InternedName = InternedName :: new ("get_theme_font") ; pub const GET_THEME_FONT_SIZE : InternedName = InternedName :: new ("get_theme_font_size") ; pub const GET_THEME_COLOR : InternedName = InternedName :: new ("get_theme_color") ; pub const GET_THEME_CONSTANT : InternedName = InternedName :: new ("get_theme_constant") ; pub const HAS_THEME_ICON_OVERRIDE : InternedName = InternedName :: new ("has_theme_icon_override") ; pub const HAS_THEME_STYLEBOX_OVERRIDE : InternedName = InternedName :: new ("has_theme_stylebox_override") ; pub const HAS_THEME_FONT_OVERRIDE : InternedName = InternedName :: new ("has_theme_font_override") ; pub const HAS_THEME_FONT_SIZE_OVERRIDE : InternedName = InternedName :: new ("has_theme_font_size_override") ; pub const HAS_THEME_COLOR_OVERRIDE : InternedName = InternedName :: new ("has_theme_color_override") ; pub const HAS_THEME_CONSTANT_OVERRIDE : InternedName = InternedName :: new ("has_theme_constant_override") ; pub const HAS_THEME_ICON : InternedName = InternedName :: new ("has_theme_icon") ; pub const HAS_THEME_STYLEBOX : InternedName = InternedName :: new ("has_theme_stylebox") ; pub const HAS_THEME_FONT : InternedName = InternedName :: new ("has_theme_font") ; pub const HAS_THEME_FONT_SIZE : InternedName = InternedName :: new ("has_theme_font_size") ; pub const HAS_THEME_COLOR : InternedName = InternedName :: new ("has_theme_color") ; pub const HAS_THEME_CONSTANT : InternedName = InternedName :: new ("has_theme_constant") ; pub const GET_THEME_DEFAULT_BASE_SCALE : InternedName = InternedName :: new ("get_theme_default_base_scale") ; pub const GET_THEME_DEFAULT_FONT : InternedName = InternedName :: new ("get_theme_default_font") ; pub const GET_THEME_DEFAULT_FONT_SIZE : InternedName = InternedName :: new ("get_theme_default_font_size") ; pub const SET_LAYOUT_DIRECTION : InternedName = InternedName :: new ("set_layout_direction") ; pub const GET_LAYOUT_DIRECTION : InternedName = InternedName :: new ("get_layout_direction") ; pub const IS_LAYOUT_RTL : InternedName = InternedName :: new ("is_layout_rtl") ; pub const SET_AUTO_TRANSLATE : InternedName = InternedName :: new ("set_auto_translate") ; pub const IS_AUTO_TRANSLATING : InternedName = InternedName :: new ("is_auto_translating") ; pub const POPUP : InternedName = InternedName :: new ("popup") ; pub const POPUP_ON_PARENT : InternedName = InternedName :: new ("popup_on_parent") ; pub const POPUP_CENTERED : InternedName = InternedName :: new ("popup_centered") ; pub const POPUP_CENTERED_RATIO : InternedName = InternedName :: new ("popup_centered_ratio") ; pub const POPUP_CENTERED_CLAMPED : InternedName = InternedName :: new ("popup_centered_clamped") ; pub const POPUP_EXCLUSIVE : InternedName = InternedName :: new ("popup_exclusive") ; pub const POPUP_EXCLUSIVE_ON_PARENT : InternedName = InternedName :: new ("popup_exclusive_on_parent") ; pub const POPUP_EXCLUSIVE_CENTERED : InternedName = InternedName :: new ("popup_exclusive_centered") ; pub const POPUP_EXCLUSIVE_CENTERED_RATIO : InternedName = InternedName :: new ("popup_exclusive_centered_ratio") ; pub const POPUP_EXCLUSIVE_CENTERED_CLAMPED : InternedName = InternedName :: new ("popup_exclusive_centered_clamped") ; } # [doc = "Signals declared by [`Window`][super::Window], as interned engine names."] pub struct SignalName ; impl SignalName { pub const WINDOW_INPUT : InternedName = InternedName :: new ("window_input") ; pub const MOUSE_ENTERED : InternedName = InternedName :: new ("mouse_entered") ; pub const MOUSE_EXITED : InternedName = InternedName :: new ("mouse_exited") ; pub const FOCUS_ENTERED : InternedName = InternedName :: new ("focus_entered") ; pub const FOCUS_EXITED : InternedName = InternedName :: new ("focus_exited") ; pub const CLOSE_REQUESTED : InternedName = InternedName :: new ("close_requested") ; pub const GO_BACK_REQUESTED : InternedName = InternedName :: new ("go_back_requested") ; pub const VISIBILITY_CHANGED : InternedName = InternedName :: new ("visibility_changed") ; pub const ABOUT_TO_POPUP : InternedName = InternedName :: new ("about_to_popup") ; pub const THEME_CHANGED : InternedName = InternedName :: new ("theme_changed") ; pub const DPI_CHANGED : InternedName = InternedName :: new ("dpi_changed") ; pub const TITLEBAR_CHANGED : InternedName = InternedName :: new ("titlebar_changed") ; } # [doc = "A collection of signals for the [`Window`][crate::classes::Window] class."] pub struct SignalsOfWindow < 'c > { __base : crate :: classes :: viewport :: SignalsOfViewport < 'c > , } impl < 'c > SignalsOfWindow < 'c > { # [doc (hidden)] pub fn __new (object : SignalObject < 'c >) -> Self { Self { __base : crate :: classes :: viewport :: SignalsOfViewport :: __new (object) } } # [doc (hidden)] pub fn __object (& self) -> SignalObject < 'c > { self . __base . __object () } # [doc = "Signature: `(event: Option<Gd<InputEvent>>)`"] pub fn window_input (& mut self) -> SigWindowInput < 'c > { SigWindowInput { typed : TypedSignal :: __new (self . __object () , "window_input") , } } # [doc = "Signature: `()`"] pub fn mouse_entered (& mut self) -> SigMouseEntered < 'c > { SigMouseEntered { typed : TypedSignal :: __new (self . __object () , "mouse_entered") , } } # [doc = "Signature: `()`"] pub fn mouse_exited (& mut self) -> SigMouseExited < 'c > { SigMouseExited { typed : TypedSignal :: __new (self . __object () , "mouse_exited") , } } # [doc = "Signature: `()`"] pub fn focus_entered (& mut self) -> SigFocusEntered < 'c > { SigFocusEntered { typed : TypedSignal :: __new (self . __object () , "focus_entered") , } } # [doc = "Signature: `()`"] pub fn focus_exited (& mut self) -> SigFocusExited < 'c > { SigFocusExited { typed : TypedSignal :: __new (self . __object () , "focus_exited") , } } # [doc = "Signature: `()`"] pub fn close_requested (& mut self) -> SigCloseRequested < 'c > { SigCloseRequested { typed : TypedSignal :: __new (self . __object () , "close_requested") , } } # [doc = "Signature: `()`"] pub fn go_back_requested (& mut self) -> SigGoBackRequested < 'c > { SigGoBackRequested { typed : TypedSignal :: __new (self . __object () , "go_back_requested") , } } # [doc = "Signature: `()`"] pub fn visibility_changed (& mut self) -> SigVisibilityChanged < 'c > { SigVisibilityChanged { typed : TypedSignal :: __new (self . __object () , "visibility_changed") , } } # [doc = "Signature: `()`"] pub fn about_to_popup (& mut self) -> SigAboutToPopup < 'c > { SigAboutToPopup { typed : TypedSignal :: __new (self . __object () , "about_to_popup") , } } # [doc = "Signature: `()`"] pub fn theme_changed (& mut self) -> SigThemeChanged < 'c > { SigThemeChanged { typed : TypedSignal :: __new (self . __object () , "theme_changed") , } } # [doc = "Signature: `()`"] pub fn dpi_changed (& mut self) -> SigDpiChanged < 'c > { SigDpiChanged { typed : TypedSignal :: __new (self . __object () , "dpi_changed") , } } # [doc = "Signature: `()`"] pub fn titlebar_changed (& mut self) -> SigTitlebarChanged < 'c > { SigTitlebarChanged { typed : TypedSignal :: __new (self . __object () , "titlebar_changed") , } } } impl < 'c > std :: ops :: Deref for SignalsOfWindow < 'c > { type Target = crate :: classes :: viewport :: SignalsOfViewport < 'c > ; fn deref (& self) -> & Self :: Target { & self . __base } } impl std :: ops :: DerefMut for SignalsOfWindow < '_ > { fn deref_mut (& mut self) -> & mut Self :: Target { & mut self . __base } } type TypedSigWindowInput < 'c > = TypedSignal < 'c , (Option < Gd < crate :: classes :: InputEvent > > ,) > ; pub struct SigWindowInput < 'c > { typed : TypedSigWindowInput < 'c > , } impl SigWindowInput < '_ > { pub fn emit (& mut self , event : Option < Gd < crate :: classes :: InputEvent > > ,) { self . typed . emit_tuple ((event ,)) ; } } impl < 'c > std :: ops :: Deref for SigWindowInput < 'c > { type Target = TypedSigWindowInput < 'c > ; fn deref (& self) -> & Self :: Target { & self . typed } } impl std :: ops :: DerefMut for SigWindowInput < '_ > { fn deref_mut (& mut self) -> & mut Self :: Target { & mut self . typed } } type TypedSigMouseEntered < 'c > = TypedSignal < 'c , () > ; pub struct SigMouseEntered < 'c > { typed : TypedSigMouseEntered < 'c > , } impl SigMouseEntered < '_ > { pub fn emit (& mut self ,) { self . typed . emit_tuple (()) ; } } impl < 'c > std :: ops :: Deref for SigMouseEntered < 'c > { type Target = TypedSigMouseEntered < 'c > ; fn deref (& self) -> & Self :: Target { & self . typed } } impl std :: ops :: DerefMut for SigMouseEntered < '_ > { fn deref_mut (& mut self) -> & mut Self :: Target { & mut self . typed } } type TypedSigMouseExited < 'c > = TypedSignal < 'c , () > ; pub struct SigMouseExited < 'c > { typed : TypedSigMouseExited < 'c > , } impl SigMouseExited < '_ > { pub fn emit (& mut self ,) { self . typed . emit_tuple (()) ; } } impl < 'c > std :: ops :: Deref for SigMouseExited < 'c > { type Target = TypedSigMouseExited < 'c > ; fn deref (& self) -> & Self :: Target { & self . typed } } impl std :: ops :: DerefMut for SigMouseExited < '_ > { fn deref_mut (& mut self) -> & mut Self :: Target { & mut self . typed } } type TypedSigFocusEntered < 'c > = TypedSignal < 'c , () > ; pub struct SigFocusEntered < 'c > { typed : TypedSigFocusEntered < 'c > , } impl SigFocusEntered < '_ > { pub fn emit (& mut self ,) { self . typed . emit_tuple (()) ; } } impl < 'c > std :: ops :: Deref for SigFocusEntered < 'c > { type Target = TypedSigFocusEntered < 'c > ; fn deref (& self) -> & Self :: Target { & self . typed } } impl std :: ops :: DerefMut for SigFocusEntered < '_ > { fn deref_mut (& mut self) -> & mut Self :: Target { & mut self . typed } } type TypedSigFocusExited < 'c > = TypedSignal < 'c , () > ; pub struct SigFocusExited < 'c > { typed : TypedSigFocusExited < 'c > , } impl SigFocusExited < '_ > { pub fn emit (& mut self ,) { self . typed . emit_tuple (()) ; } } impl < 'c > std :: ops :: Deref for SigFocusExited < 'c > { type Target = TypedSigFocusExited < 'c > ; fn deref (& self) -> & Self :: Target { & self . typed } } impl std :: ops :: DerefMut for SigFocusExited < '_ > { fn deref_mut (& mut self) -> & mut Self :: Target { & mut self . typed } } type TypedSigCloseRequested < 'c > = TypedSignal < 'c , () > ; pub struct SigCloseRequested < 'c > { typed : TypedSigCloseRequested < 'c > , } impl SigCloseRequested < '_ > { pub fn emit (& mut self ,) { self . typed . emit_tuple (()) ; } } impl < 'c > std :: ops :: Deref for SigCloseRequested < 'c > { type Target = TypedSigCloseRequested < 'c > ; fn deref (& self) -> & Self :: Target { & self . typed } } impl std :: ops :: DerefMut for SigCloseRequested < '_ > { fn deref_mut (& mut self) -> & mut Self :: Target { & mut self . typed } } type TypedSigGoBackRequested < 'c > = TypedSignal < 'c , () > ; pub struct SigGoBackRequested < 'c > { typed : TypedSigGoBackRequested < 'c > , } impl SigGoBackRequested < '_ > { pub fn emit (& mut self ,) { self . typed . emit_tuple (()) ; } } impl < 'c > std :: ops :: Deref for SigGoBackRequested < 'c > { type Target = TypedSigGoBackRequested < 'c > ; fn deref (& self) -> & Self :: Target { & self . typed } } impl std :: ops :: DerefMut for SigGoBackRequested < '_ > { fn deref_mut (& mut self) -> & mut Self :: Target { & mut self . typed } } type TypedSigVisibilityChanged < 'c > = TypedSignal < 'c , () > ; pub struct SigVisibilityChanged < 'c > { typed : TypedSigVisibilityChanged < 'c > , } impl SigVisibilityChanged < '_ > { pub fn emit (& mut self ,) { self . typed . emit_tuple (()) ; } } impl < 'c > std :: ops :: Deref for SigVisibilityChanged < 'c > { type Target = TypedSigVisibilityChanged < 'c > ; fn deref (& self) -> & Self :: Target { & self . typed } } impl std :: ops :: DerefMut for SigVisibilityChanged < '_ > { fn deref_mut (& mut self) -> & mut Self :: Target { & mut self . typed } } type TypedSigAboutToPopup < 'c > = TypedSignal < 'c , () > ; pub struct SigAboutToPopup < 'c > { typed : TypedSigAboutToPopup < 'c > , } impl SigAboutToPopup < '_ > { pub fn emit (& mut self ,) { self . typed . emit_tuple (()) ; } } impl < 'c > std :: ops :: Deref for SigAboutToPopup < 'c > { type Target = TypedSigAboutToPopup < 'c > ; fn deref (& self) -> & Self :: Target { & self . typed } } impl std :: ops :: DerefMut for SigAboutToPopup < '_ > { fn deref_mut (& mut self) -> & mut Self :: Target { & mut self . typed } } type TypedSigThemeChanged < 'c > = TypedSignal < 'c , () > ; pub struct SigThemeChanged < 'c > { typed : TypedSigThemeChanged < 'c > , } impl SigThemeChanged < '_ > { pub fn emit (& mut self ,) { self . typed . emit_tuple (()) ; } } impl < 'c > std :: ops :: Deref for SigThemeChanged < 'c > { type Target = TypedSigThemeChanged < 'c > ; fn deref (& self) -> & Self :: Target { & self . typed } } impl std :: ops :: DerefMut for SigThemeChanged < '_ > { fn deref_mut (& mut self) -> & mut Self :: Target { & mut self . typed } } type TypedSigDpiChanged < 'c > = TypedSignal < 'c , () > ; pub struct SigDpiChanged < 'c > { typed : TypedSigDpiChanged < 'c > , } impl SigDpiChanged < '_ > { pub fn emit (& mut self ,) { self . typed . emit_tuple (()) ; } } impl < 'c > std :: ops :: Deref for SigDpiChanged < 'c > { type Target = TypedSigDpiChanged < 'c > ; fn deref (& self) -> & Self :: Target { & self . typed } } impl std :: ops :: DerefMut for SigDpiChanged < '_ > { fn deref_mut (& mut self) -> & mut Self :: Target { & mut self . typed } } type TypedSigTitlebarChanged < 'c > = TypedSignal < 'c , () > ; pub struct SigTitlebarChanged < 'c > { typed : TypedSigTitlebarChanged < 'c > , } impl SigTitlebarChanged < '_ > { pub fn emit (& mut self ,) { self . typed . emit_tuple (()) ; } } impl < 'c > std :: ops :: Deref for SigTitlebarChanged < 'c > { type Target = TypedSigTitlebarChanged < 'c > ; fn deref (& self) -> & Self :: Target { & self . typed } } impl std :: ops :: DerefMut for SigTitlebarChanged < '_ > { fn deref_mut (& mut self) -> & mut Self :: Target { & mut self . typed } }