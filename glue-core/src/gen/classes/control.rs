# ! [doc = "Sidecar module for class [`Control`][crate::classes::Control]."] # [allow (unused_imports)] use crate :: builtin :: * ; # [allow (unused_imports)] use crate :: meta :: { AsArg , AsObjectArg , CowArg , InternedName , ObjectArg , Signature } ; # [allow (unused_imports)] use crate :: obj :: Gd ; # [allow (unused_imports)] use crate :: signal :: { SignalObject , TypedSignal } ; use crate :: sys ; pub (super) mod re_export { use super :: * ; # [doc = "Godot class `Control`.\n\nInherits [`CanvasItem`][crate::classes::CanvasItem].\n\nRelated symbols (default-param builders, enums, interned names, signals) are in [`control`][crate::classes::control]."] # [derive (Debug)] # [repr (C)] pub struct Control { object_ptr : sys :: GDExtensionObjectPtr , } impl Control { pub fn accept_event (& mut self ,) { type CallRet = () ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (62usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Control" , "accept_event" , self . object_ptr , args ,) } } pub fn get_minimum_size (& self ,) -> Vector2 { type CallRet = Vector2 ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (63usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Control" , "get_minimum_size" , self . object_ptr , args ,) } } pub fn get_combined_minimum_size (& self ,) -> Vector2 { type CallRet = Vector2 ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (64usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Control" , "get_combined_minimum_size" , self . object_ptr , args ,) } } pub (crate) fn set_anchors_preset_full (& mut self , preset : crate :: classes :: control :: LayoutPreset , keep_offsets : bool ,) { type CallRet = () ; type CallParams = (crate :: classes :: control :: LayoutPreset , bool ,) ; let args = (preset , keep_offsets ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (65usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Control" , "set_anchors_preset" , self . object_ptr , args ,) } } # [inline] pub fn set_anchors_preset (& mut self , preset : crate :: classes :: control :: LayoutPreset ,) { self . set_anchors_preset_ex (preset ,) . done () } # [inline] pub fn set_anchors_preset_ex < 'ex > (& 'ex mut self , preset : crate :: classes :: control :: LayoutPreset ,) -> super :: ExSetAnchorsPreset < 'ex > { super :: ExSetAnchorsPreset :: new (self , preset ,) } pub (crate) fn set_offsets_preset_full (& mut self , preset : crate :: classes :: control :: LayoutPreset , resize_mode : crate :: classes :: control :: LayoutPresetMode , margin : i32 ,) { type CallRet = () ; type CallParams = (crate :: classes :: control :: LayoutPreset , crate :: classes :: control :: LayoutPresetMode , i32 ,) ; let args = (preset , resize_mode , margin ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (66usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Control" , "set_offsets_preset" , self . object_ptr , args ,) } } # [inline] pub fn set_offsets_preset (& mut self , preset : crate :: classes :: control :: LayoutPreset ,) { self . set_offsets_preset_ex (preset ,) . done () } # [inline] pub fn set_offsets_preset_ex < 'ex > (& 'ex mut self , preset : crate :: classes :: control :: LayoutPreset ,) -> super :: ExSetOffsetsPreset < 'ex > { super :: ExSetOffsetsPreset :: new (self , preset ,) } pub (crate) fn set_anchors_and_offsets_preset_full (& mut self , preset : crate :: classes :: control :: LayoutPreset , resize_mode : crate :: classes :: control :: LayoutPresetMode , margin : i32 ,) { type CallRet = () ; type CallParams = (crate :: classes :: control :: LayoutPreset , crate :: classes :: control :: LayoutPresetMode , i32 ,) ; let args = (preset , resize_mode , margin ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (67usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Control" , "set_anchors_and_offsets_preset" , self . object_ptr , args ,) } } # [inline] pub fn set_anchors_and_offsets_preset (& mut self , preset : crate :: classes :: control :: LayoutPreset ,) { self . set_anchors_and_offsets_preset_ex (preset ,) . done () } # [inline] pub fn set_anchors_and_offsets_preset_ex < 'ex > (& 'ex mut self , preset : crate :: classes :: control :: LayoutPreset ,) -> super :: ExSetAnchorsAndOffsetsPreset < 'ex > { super :: ExSetAnchorsAndOffsetsPreset :: new (self , preset ,) } pub (crate) fn set_anchor_full (& mut self , side : crate :: global :: Side , anchor : f32 , keep_offset : bool , push_opposite_anchor : bool ,) { type CallRet = () ; type CallParams = (crate :: global :: Side , f32 , bool , bool ,) ; let args = (side , anchor , keep_offset , push_opposite_anchor ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (68usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Control" , "set_anchor" , self . object_ptr , args ,) } } # [inline] pub fn set_anchor (& mut self , side : crate :: global :: Side , anchor : f32 ,) { self . set_anchor_ex (side , anchor ,) . done () } # [inline] pub fn set_anchor_ex < 'ex > (& 'ex mut self , side : crate :: global :: Side , anchor : f32 ,) -> super :: ExSetAnchor < 'ex > { super :: ExSetAnchor :: new (self , side , anchor ,) } pub fn get_anchor (& self , side : crate :: global :: Side ,) -> f32 { type CallRet = f32 ; type CallParams = (crate :: global :: Side ,) ; let args = (side ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (69usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Control" , "get_anchor" , self . object_ptr , args ,) } } pub fn set_offset (& mut self , side : crate :: global :: Side , offset : f32 ,) { type CallRet = () ; type CallParams = (crate :: global :: Side , f32 ,) ; let args = (side , offset ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (70usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Control" , "set_offset" , self . object_ptr , args ,) } } pub fn get_offset (& self , offset : crate :: global :: Side ,) -> f32 { type CallRet = f32 ; type CallParams = (crate :: global :: Side ,) ; let args = (offset ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (71usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Control" , "get_offset" , self . object_ptr , args ,) } } pub (crate) fn set_anchor_and_offset_full (& mut self , side : crate :: global :: Side , anchor : f32 , offset : f32 , push_opposite_anchor : bool ,) { type CallRet = () ; type CallParams = (crate :: global :: Side , f32 , f32 , bool ,) ; let args = (side , anchor , offset , push_opposite_anchor ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (72usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Control" , "set_anchor_and_offset" , self . object_ptr , args ,) } } # [inline] pub fn set_anchor_and_offset (& mut self , side : crate :: global :: Side , anchor : f32 , offset : f32 ,) { self . set_anchor_and_offset_ex (side , anchor , offset ,) . done () } # [inline] pub fn set_anchor_and_offset_ex < 'ex > (& 'ex mut self , side : crate :: global :: Side , anchor : f32 , offset : f32 ,) -> super :: ExSetAnchorAndOffset < 'ex > { super :: ExSetAnchorAndOffset :: new (self , side , anchor , offset ,) } pub fn set_begin (& mut self , position : Vector2 ,) { type CallRet = () ; type CallParams = (Vector2 ,) ; let args = (position ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (73usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Control" , "set_begin" , self . object_ptr , args ,) } } pub fn set_end (& mut self , position : Vector2 ,) { type CallRet = () ; type CallParams = (Vector2 ,) ; let args = (position ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (74usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Control" , "set_end" , self . object_ptr , args ,) } } pub (crate) fn set_position_full (& mut self , position : Vector2 , keep_offsets : bool ,) { type CallRet = () ; type CallParams = (Vector2 , bool ,) ; let args = (position , keep_offsets ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (75usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Control" , "set_position" , self . object_ptr , args ,) } } # [inline] pub fn set_position (& mut self , position : Vector2 ,) { self . set_position_ex (position ,) . done () } # [inline] pub fn set_position_ex < 'ex > (& 'ex mut self , position : Vector2 ,) -> super :: ExSetPosition < 'ex > { super :: ExSetPosition :: new (self , position ,) } pub (crate) fn set_size_full (& mut self , size : Vector2 , keep_offsets : bool ,) { type CallRet = () ; type CallParams = (Vector2 , bool ,) ; let args = (size , keep_offsets ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (76usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Control" , "set_size" , self . object_ptr , args ,) } } # [inline] pub fn set_size (& mut self , size : Vector2 ,) { self . set_size_ex (size ,) . done () } # [inline] pub fn set_size_ex < 'ex > (& 'ex mut self , size : Vector2 ,) -> super :: ExSetSize < 'ex > { super :: ExSetSize :: new (self , size ,) } pub fn reset_size (& mut self ,) { type CallRet = () ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (77usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Control" , "reset_size" , self . object_ptr , args ,) } } pub fn set_custom_minimum_size (& mut self , size : Vector2 ,) { type CallRet = () ; type CallParams = (Vector2 ,) ; let args = (size ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (78usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Control" , "set_custom_minimum_size" , self . object_ptr , args ,) } } pub (crate) fn set_global_position_full (& mut self , position : Vector2 , keep_offsets : bool ,) { type CallRet = () ; type CallParams = (Vector2 , bool ,) ; let args = (position , keep_offsets ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (79usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Control" , "set_global_position" , self . object_ptr , args ,) } } # [inline] pub fn set_global_position (& mut self , position : Vector2 ,) { self . set_global_position_ex (position ,) . done () } # [inline] pub fn set_global_position_ex < 'ex > (& 'ex mut self , position : Vector2 ,) -> super :: ExSetGlobalPosition < 'ex > { super :: ExSetGlobalPosition :: new (self , position ,) } pub fn set_rotation (& mut self , radians : f32 ,) { type CallRet = () ; type CallParams = (f32 ,) ; let args = (radians ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (80usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Control" , "set_rotation" , self . object_ptr , args ,) } } pub fn set_rotation_degrees (& mut self , degrees : f32 ,) { type CallRet = () ; type CallParams = (f32 ,) ; let args = (degrees ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (81usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Control" , "set_rotation_degrees" , self . object_ptr , args ,) } } pub fn set_scale (& mut self , scale : Vector2 ,) { type CallRet = () ; type CallParams = (Vector2 ,) ; let args = (scale ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (82usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Control" , "set_scale" , self . object_ptr , args ,) } } pub fn set_pivot_offset (& mut self , pivot_offset : Vector2 ,) { type CallRet = () ; type CallParams = (Vector2 ,) ; let args = (pivot_offset ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (83usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Control" , "set_pivot_offset" , self . object_ptr , args ,) } } pub fn get_begin (& self ,) -> Vector2 { type CallRet = Vector2 ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (84usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Control" , "get_begin" , self . object_ptr , args ,) } } pub fn get_end (& self ,) -> Vector2 { type CallRet = Vector2 ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (85usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Control" , "get_end" , self . object_ptr , args ,) } } pub fn get_position (& self ,) -> Vector2 { type CallRet = Vector2 ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (86usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Control" , "get_position" , self . object_ptr , args ,) } } pub fn get_size (& self ,) -> Vector2 { type CallRet = Vector2 ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (87usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Control" , "get_size" , self . object_ptr , args ,) } } pub fn get_rotation (& self ,) -> f32 { type CallRet = f32 ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (88usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Control" , "get_rotation" , self . object_ptr , args ,) } } pub fn get_rotation_degrees (& self ,) -> f32 { type CallRet = f32 ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (89usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Control" , "get_rotation_degrees" , self . object_ptr , args ,) } } pub fn get_scale (& self ,) -> Vector2 { type CallRet = Vector2 ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (90usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Control" , "get_scale" , self . object_ptr , args ,) } } pub fn get_pivot_offset (& self ,) -> Vector2 { type CallRet = Vector2 ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (91usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Control" , "get_pivot_offset" , self . object_ptr , args ,) } } pub fn get_custom_minimum_size (& self ,) -> Vector2 { type CallRet = Vector2 ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (92usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Control" , "get_custom_minimum_size" , self . object_ptr , args ,) } } pub fn get_parent_area_size (& self ,) -> Vector2 { type CallRet = Vector2 ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (93usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Control" , "get_parent_area_size" , self . object_ptr , args ,) } } pub fn get_global_position (& self ,) -> Vector2 { type CallRet = Vector2 ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (94usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Control" , "get_global_position" , self . object_ptr , args ,) } } pub fn get_screen_position (& self ,) -> Vector2 { type CallRet = Vector2 ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (95usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Control" , "get_screen_position" , self . object_ptr , args ,) } } pub fn get_rect (& self ,) -> Rect2 { type CallRet = Rect2 ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (96usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Control" , "get_rect" , self . object_ptr , args ,) } } pub fn get_global_rect (& self ,) -> Rect2 { type CallRet = Rect2 ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (97usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Control" , "get_global_rect" , self . object_ptr , args ,) } } pub fn set_focus_mode (& mut self , mode : crate :: classes :: control :: FocusMode ,) { type CallRet = () ; type CallParams = (crate :: classes :: control :: FocusMode ,) ; let args = (mode ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (98usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Control" , "set_focus_mode" , self . object_ptr , args ,) } } pub fn get_focus_mode (& self ,) -> crate :: classes :: control :: FocusMode { type CallRet = crate :: classes :: control :: FocusMode ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (99usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Control" , "get_focus_mode" , self . object_ptr , args ,) } } pub fn has_focus (& self ,) -> bool { type CallRet = bool ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (100usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Control" , "has_focus" , self . object_ptr , args ,) } } pub fn grab_focus (& mut self ,) { type CallRet = () ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (101usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Control" , "grab_focus" , self . object_ptr , args ,) } } pub fn release_focus (& mut self ,) { type CallRet = () ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (102usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Control" , "release_focus" , self . object_ptr , args ,) } } pub fn find_prev_valid_focus (& self ,) -> Option < Gd < crate :: classes :: Control > > { type CallRet = Option < Gd < crate :: classes :: Control > > ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (103usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Control" , "find_prev_valid_focus" , self . object_ptr , args ,) } } pub fn find_next_valid_focus (& self ,) -> Option < Gd < crate :: classes :: Control > > { type CallRet = Option < Gd < crate :: classes :: Control > > ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (104usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Control" , "find_next_valid_focus" , self . object_ptr , args ,) } } pub fn find_valid_focus_neighbor (& self , side : crate :: global :: Side ,) -> Option < Gd < crate :: classes :: Control > > { type CallRet = Option < Gd < crate :: classes :: Control > > ; type CallParams = (crate :: global :: Side ,) ; let args = (side ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (105usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Control" , "find_valid_focus_neighbor" , self . object_ptr , args ,) } } pub fn set_h_size_flags (& mut self , flags : crate :: classes :: control :: SizeFlags ,) { type CallRet = () ; type CallParams = (crate :: classes :: control :: SizeFlags ,) ; let args = (flags ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (106usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Control" , "set_h_size_flags" , self . object_ptr , args ,) } } pub fn get_h_size_flags (& self ,) -> crate :: classes :: control :: SizeFlags { type CallRet = crate :: classes :: control :: SizeFlags ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (107usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Control" , "get_h_size_flags" , self . object_ptr , args ,) } } pub fn set_stretch_ratio (& mut self , ratio : f32 ,) { type CallRet = () ; type CallParams = (f32 ,) ; let args = (ratio ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (108usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Control" , "set_stretch_ratio" , self . object_ptr , args ,) } } pub fn get_stretch_ratio (& self ,) -> f32 { type CallRet = f32 ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (109usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Control" , "get_stretch_ratio" , self . object_ptr , args ,) } } pub fn set_v_size_flags (& mut self , flags : crate :: classes :: control :: SizeFlags ,) { type CallRet = () ; type CallParams = (crate :: classes :: control :: SizeFlags ,) ; let args = (flags ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (110usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Control" , "set_v_size_flags" , self . object_ptr , args ,) } } pub fn get_v_size_flags (& self ,) -> crate :: classes :: control :: SizeFlags { type CallRet = crate :: classes :: control :: SizeFlags ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (111usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Control" , "get_v_size_flags" , self . object_ptr , args ,) } } pub fn set_theme (& mut self , theme : impl AsObjectArg < crate :: classes :: Theme > ,) { type CallRet = () ; type CallParams = (ObjectArg < crate :: classes :: Theme > ,) ; let args = (theme . as_object_arg () ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (112usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Control" , "set_theme" , self . object_ptr , args ,) } } pub fn get_theme (& self ,) -> Option < Gd < crate :: classes :: Theme > > { type CallRet = Option < Gd < crate :: classes :: Theme > > ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (113usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Control" , "get_theme" , self . object_ptr , args ,) } } pub fn set_theme_type_variation (& mut self , theme_type : impl AsArg < StringName > ,) { type CallRet = () ; type CallParams < 'a0 , > = (CowArg < 'a0 , StringName > ,) ; let args = (theme_type . into_arg () ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (114usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Control" , "set_theme_type_variation" , self . object_ptr , args ,) } } pub fn get_theme_type_variation (& self ,) -> StringName { type CallRet = StringName ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (115usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Control" , "get_theme_type_variation" , self . object_ptr , args ,) } } pub fn begin_bulk_theme_override (& mut self ,) { type CallRet = () ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (116usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Control" , "begin_bulk_theme_override" , self . object_ptr , args ,) } } pub fn end_bulk_theme_override (& mut self ,) { type CallRet = () ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (117usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Control" , "end_bulk_theme_override" , self . object_ptr , args ,) } } pub fn add_theme_icon_override (& mut self , name : impl AsArg < StringName > , texture : impl AsObjectArg < crate :: classes :: Texture2D > ,) { type CallRet = () ; type CallParams < 'a0 , > = (CowArg < 'a0 , StringName > , ObjectArg < crate :: classes :: Texture2D > ,) ; let args = (name . into_arg () , texture . as_object_arg () ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (118usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Control" , "add_theme_icon_override" , self . object_ptr , args ,) } } pub fn add_theme_font_override (& mut self , name : impl AsArg < StringName > , font : impl AsObjectArg < crate :: classes :: Font > ,) { type CallRet = () ; type CallParams < 'a0 , > = (CowArg < 'a0 , StringName > , ObjectArg < crate :: classes :: Font > ,) ; let args = (name . into_arg () , font . as_object_arg () ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (119usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Control" , "add_theme_font_override" , self . object_ptr , args ,) } } pub fn add_theme_font_size_override (& mut self , name : impl AsArg < StringName > , font_size : i32 ,) { type CallRet = () ; type CallParams < 'a0 , > = (CowArg < 'a0 , StringName > , i32 ,) ; let args = (name . into_arg () , font_size ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (120usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Control" , "add_theme_font_size_override" , self . object_ptr , args ,) } } pub fn add_theme_color_override (& mut self , name : impl AsArg < StringName > , color : Color ,) { type CallRet = () ; type CallParams < 'a0 , > = (CowArg < 'a0 , StringName > , Color ,) ; let args = (name . into_arg () , color ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (121usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Control" , "add_theme_color_override" , self . object_ptr , args ,) } } pub fn add_theme_constant_override (& mut self , name : impl AsArg < StringName > , constant : i32 ,) { type CallRet = () ; type CallParams < 'a0 , > = (CowArg < 'a0 , StringName > , i32 ,) ; let args = (name . into_arg () , constant ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (122usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Control" , "add_theme_constant_override" , self . object_ptr , args ,) } } pub fn remove_theme_icon_override (& mut self , name : impl AsArg < StringName > ,) { type CallRet = () ; type CallParams < 'a0 , > = (CowArg < 'a0 , StringName > ,) ; let args = (name . into_arg () ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (123usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Control" , "remove_theme_icon_override" , self . object_ptr , args ,) } } pub fn remove_theme_stylebox_override (& mut self , name : impl AsArg < StringName > ,) { type CallRet = () ; type CallParams < 'a0 , > = (CowArg < 'a0 , StringName > ,) ; let args = (name . into_arg () ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (124usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Control" , "remove_theme_stylebox_override" , self . object_ptr , args ,) } } pub fn remove_theme_font_override (& mut self , name : impl AsArg < StringName > ,) { type CallRet = () ; type CallParams < 'a0 , > = (CowArg < 'a0 , StringName > ,) ; let args = (name . into_arg () ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (125usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Control" , "remove_theme_font_override" , self . object_ptr , args ,) } } pub fn remove_theme_font_size_override (& mut self , name : impl AsArg < StringName > ,) { type CallRet = () ; type CallParams < 'a0 , > = (CowArg < 'a0 , StringName > ,) ; let args = (name . into_arg () ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (126usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Control" , "remove_theme_font_size_override" , self . object_ptr , args ,) } } pub fn remove_theme_color_override (& mut self , name : impl AsArg < StringName > ,) { type CallRet = () ; type CallParams < 'a0 , > = (CowArg < 'a0 , StringName > ,) ; let args = (name . into_arg () ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (127usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Control" , "remove_theme_color_override" , self . object_ptr , args ,) } } pub fn remove_theme_constant_override (& mut self , name : impl AsArg < StringName > ,) { type CallRet = () ; type CallParams < 'a0 , > = (CowArg < 'a0 , StringName > ,) ; let args = (name . into_arg () ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (128usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Control" , "remove_theme_constant_override" , self . object_ptr , args ,) } } pub (crate) fn get_theme_icon_full (& self , name : CowArg < '_ , StringName > , theme_type : CowArg < '_ , StringName > ,) -> Option < Gd < crate :: classes :: Texture2D > > { type CallRet = Option < Gd < crate :: classes :: Texture2D > > ; type CallParams < 'a0 , 'a1 , > = (CowArg < 'a0 , StringName > , CowArg < 'a1 , StringName > ,) ; let args = (name , theme_type ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (129usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Control" , "get_theme_icon" , self . object_ptr , args ,) } } # [inline] pub fn get_theme_icon (& self , name : impl AsArg < StringName > ,) -> Option < Gd < crate :: classes :: Texture2D > > { self . get_theme_icon_ex (name ,) . done () } # [inline] pub fn get_theme_icon_ex < 'ex > (& 'ex self , name : impl AsArg < StringName > + 'ex ,) -> super :: ExGetThemeIcon < 'ex > { super :: ExGetThemeIcon :: new (self , name . into_arg () ,) } pub (crate) fn get_theme_font_full (& self , name : CowArg < '_ , StringName > , theme_type : CowArg < '_ , StringName > ,) -> Option < Gd < crate :: classes :: Font > > { type CallRet = Option < Gd < crate :: classes :: Font > > ; type CallParams < 'a0 , 'a1 , > = (CowArg < 'a0 , StringName > , CowArg < 'a1 , StringName > ,) ; let args = (name , theme_type ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (130usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Control" , "get_theme_font" , self . object_ptr , args ,) } } # [inline] pub fn get_theme_font (& self , name : impl AsArg < StringName > ,) -> Option < Gd < crate :: classes :: Font > > { self . get_theme_font_ex (name ,) . done () } # [inline] pub fn get_theme_font_ex < 'ex > (& 'ex self , name : impl AsArg < StringName > + 'ex ,) -> super :: ExGetThemeFont < 'ex > { super :: ExGetThemeFont :: new (self , name . into_arg () ,) } pub (crate) fn get_theme_font_size_full (& self , name : CowArg < '_ , StringName > , theme_type : CowArg < '_ , StringName > ,) -> i32 { type CallRet = i32 ; type CallParams < 'a0 , 'a1 , > = (CowArg < 'a0 , StringName > , CowArg < 'a1 , StringName > ,) ; let args = (name , theme_type ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (131usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Control" , "get_theme_font_size" , self . object_ptr , args ,) } } # [inline] pub fn get_theme_font_size (& self , name : impl AsArg < StringName > ,) -> i32 { self . get_theme_font_size_ex (name ,) . done () } # [inline] pub fn get_theme_font_size_ex < 'ex > (& 'ex self , name : impl AsArg < StringName > + 'ex ,) -> super :: ExGetThemeFontSize < 'ex > { super :: ExGetThemeFontSize :: new (self , name . into_arg () ,) } pub (crate) fn get_theme_color_full (& self , name : CowArg < '_ , StringName > , theme_type : CowArg < '_ , StringName > ,) -> Color { type CallRet = Color ; type CallParams < 'a0 , 'a1 , > = (CowArg < 'a0 , StringName > , CowArg < 'a1 , StringName > ,) ; let args = (name , theme_type ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (132usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Control" , "get_theme_color" , self . object_ptr , args ,) } } # [inline] pub fn get_theme_color (& self , name : impl AsArg < StringName > ,) -> Color { self . get_theme_color_ex (name ,) . done () } # [inline] pub fn get_theme_color_ex < 'ex > (& 'ex self , name : impl AsArg < StringName > + 'ex ,) -> super :: ExGetThemeColor < 'ex > { super :: ExGetThemeColor :: new (self , name . into_arg () ,) } pub (crate) fn get_theme_constant_full (& self , name : CowArg < '_ , StringName > , theme_type : CowArg < '_ , StringName > ,) -> i32 { type CallRet = i32 ; type CallParams < 'a0 , 'a1 , > = (CowArg < 'a0 , StringName > , CowArg < 'a1 , StringName > ,) ; let args = (name , theme_type ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (133usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Control" , "get_theme_constant" , self . object_ptr , args ,) } } # [inline] pub fn get_theme_constant (& self , name : impl AsArg < StringName > ,) -> i32 { self . get_theme_constant_ex (name ,) . done () } # [inline] pub fn get_theme_constant_ex < 'ex > (& 'ex self , name : impl AsArg < StringName > + 'ex ,) -> super :: ExGetThemeConstant < 'ex > { super :: ExGetThemeConstant :: new (self , name . into_arg () ,) } pub fn has_theme_icon_override (& self , name : impl AsArg < StringName > ,) -> bool { type CallRet = bool ; type CallParams < 'a0 , > = (CowArg < 'a0 , StringName > ,) ; let args = (name . into_arg () ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (134usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Control" , "has_theme_icon_override" , self . object_ptr , args ,) } } pub fn has_theme_stylebox_override (& self , name : impl AsArg < StringName > ,) -> bool { type CallRet = bool ; type CallParams < 'a0 , > = (CowArg < 'a0 , StringName > ,) ; let args = (name . into_arg () ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (135usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Control" , "has_theme_stylebox_override" , self . object_ptr , args ,) } } pub fn has_theme_font_override (& self , name : impl AsArg < StringName > ,) -> bool { type CallRet = bool ; type CallParams < 'a0 , > = (CowArg < 'a0 , StringName > ,) ; let args = (name . into_arg () ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (136usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Control" , "has_theme_font_override" , self . object_ptr , args ,) } } pub fn has_theme_font_size_override (& self , name : impl AsArg < StringName > ,) -> bool { type CallRet = bool ; type CallParams < 'a0 , > = (CowArg < 'a0 , StringName > ,) ; let args = (name . into_arg () ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (137usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Control" , "has_theme_font_size_override" , self . object_ptr , args ,) } } pub fn has_theme_color_override (& self , name : impl AsArg < StringName > ,) -> bool { type CallRet = bool ; type CallParams < 'a0 , > = (CowArg < 'a0 , StringName > ,) ; let args = (name . into_arg () ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (138usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Control" , "has_theme_color_override" , self . object_ptr , args ,) } } pub fn has_theme_constant_override (& self , name : impl AsArg < StringName > ,) -> bool { type CallRet = bool ; type CallParams < 'a0 , > = (CowArg < 'a0 , StringName > ,) ; let args = (name . into_arg () ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (139usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Control" , "has_theme_constant_override" , self . object_ptr , args ,) } } pub (crate) fn has_theme_icon_full (& self , name : CowArg < '_ , StringName > , theme_type : CowArg < '_ , StringName > ,) -> bool { type CallRet = bool ; type CallParams < 'a0 , 'a1 , > = (CowArg < 'a0 , StringName > , CowArg < 'a1 , StringName > ,) ; let args = (name , theme_type ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (140usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Control" , "has_theme_icon" , self . object_ptr , args ,) } } # [inline] pub fn has_theme_icon (& self , name : impl AsArg < StringName > ,) -> bool { self . has_theme_icon_ex (name ,) . done () } # [inline] pub fn has_theme_icon_ex < 'ex > (& 'ex self , name : impl AsArg < StringName > + 'ex ,) -> super :: ExHasThemeIcon < 'ex > { super :: ExHasThemeIcon :: new (self , name . into_arg () ,) } pub (crate) fn has_theme_stylebox_full (& self , name : CowArg < '_ , StringName > , theme_type : CowArg < '_ , StringName > ,) -> bool { type CallRet = bool ; type CallParams < 'a0 , 'a1 , > = (CowArg < 'a0 , StringName > , CowArg < 'a1 , StringName > ,) ; let args = (name , theme_type ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (141usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Control" , "has_theme_stylebox" , self . object_ptr , args ,) } } # [inline] pub fn has_theme_stylebox (& self , name : impl AsArg < StringName > ,) -> bool { self . has_theme_stylebox_ex (name ,) . done () } # [inline] pub fn has_theme_stylebox_ex < 'ex > (& 'ex self , name : impl AsArg < StringName > + 'ex ,) -> super :: ExHasThemeStylebox < 'ex > { super :: ExHasThemeStylebox :: new (self , name . into_arg () ,) } pub (crate) fn has_theme_font_full (& self , name : CowArg < '_ , StringName > , theme_type : CowArg < '_ , StringName > ,) -> bool { type CallRet = bool ; type CallParams < 'a0 , 'a1 , > = (CowArg < 'a0 , StringName > , CowArg < 'a1 , StringName > ,) ; let args = (name , theme_type ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (142usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Control" , "has_theme_font" , self . object_ptr , args ,) } } # [inline] pub fn has_theme_font (& self , name : impl AsArg < StringName > ,) -> bool { self . has_theme_font_ex (name ,) . done () } # [inline] pub fn has_theme_font_ex < 'ex > (& 'ex self , name : impl AsArg < StringName > + 'ex ,) -> super :: ExHasThemeFont < 'ex > { super :: ExHasThemeFont :: new (self , name . into_arg () ,) } pub (crate) fn has_theme_font_size_full (& self , name : CowArg < '_ , StringName > , theme_type : CowArg < '_ , StringName > ,) -> bool { type CallRet = bool ; type CallParams < 'a0 , 'a1 , > = (CowArg < 'a0 , StringName > , CowArg < 'a1 , StringName > ,) ; let args = (name , theme_type ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (143usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Control" , "has_theme_font_size" , self . object_ptr , args ,) } } # [inline] pub fn has_theme_font_size (& self , name : impl AsArg < StringName > ,) -> bool { self . has_theme_font_size_ex (name ,) . done () } # [inline] pub fn has_theme_font_size_ex < 'ex > (& 'ex self , name : impl AsArg < StringName > + 'ex ,) -> super :: ExHasThemeFontSize < 'ex > { super :: ExHasThemeFontSize :: new (self , name . into_arg () ,) } pub (crate) fn has_theme_color_full (& self , name : CowArg < '_ , StringName > , theme_type : CowArg < '_ , StringName > ,) -> bool { type CallRet = bool ; type CallParams < 'a0 , 'a1 , > = (CowArg < 'a0 , StringName > , CowArg < 'a1 , StringName > ,) ; let args = (name , theme_type ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (144usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Control" , "has_theme_color" , self . object_ptr , args ,) } } # [inline] pub fn has_theme_color (& self , name : impl AsArg < StringName > ,) -> bool { self . has_theme_color_ex (name ,) . done () } # [inline] pub fn has_theme_color_ex < 'ex > (& 'ex self , name : impl AsArg < StringName > + 'ex ,) -> super :: ExHasThemeColor < 'ex > { super :: ExHasThemeColor :: new (self , name . into_arg () ,) } pub (crate) fn has_theme_constant_full (& self , name : CowArg < '_ , StringName > , theme_type : CowArg < '_ , StringName > ,) -> bool { type CallRet = bool ; type CallParams < 'a0 , 'a1 , > = (CowArg < 'a0 , StringName > , CowArg < 'a1 , StringName > ,) ; let args = (name , theme_type ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (145usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Control" , "has_theme_constant" , self . object_ptr , args ,) } } # [inline] pub fn has_theme_constant (& self , name : impl AsArg < StringName > ,) -> bool { self . has_theme_constant_ex (name ,) . done () } # [inline] pub fn has_theme_constant_ex < 'ex > (& 'ex self , name : impl AsArg < StringName > + 'ex ,) -> super :: ExHasThemeConstant < 'ex > { super :: ExHasThemeConstant :: new (self , name . into_arg () ,) } pub fn get_theme_default_base_scale (& self ,) -> f32 { type CallRet = f32 ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (146usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Control" , "get_theme_default_base_scale" , self . object_ptr , args ,) } } pub fn get_theme_default_font (& self ,) -> Option < Gd < crate :: classes :: Font > > { type CallRet = Option < Gd < crate :: classes :: Font > > ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (147usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Control" , "get_theme_default_font" , self . object_ptr , args ,) } } pub fn get_theme_default_font_size (& self ,) -> i32 { type CallRet = i32 ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (148usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Control" , "get_theme_default_font_size" , self . object_ptr , args ,) } } pub fn get_parent_control (& self ,) -> Option < Gd < crate :: classes :: Control > > { type CallRet = Option < Gd < crate :: classes :: Control > > ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (149usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Control" , "get_parent_control" , self . object_ptr , args ,) } } pub fn set_h_grow_direction (& mut self , direction : crate :: classes :: control :: GrowDirection ,) { type CallRet = () ; type CallParams = (crate :: classes :: control :: GrowDirection ,) ; let args = (direction ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (150usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Control" , "set_h_grow_direction" , self . object_ptr , args ,) } } pub fn get_h_grow_direction (& self ,) -> crate :: classes :: control :: GrowDirection { type CallRet = crate :: classes :: control :: GrowDirection ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (151usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Control" , "get_h_grow_direction" , self . object_ptr , args ,) } } pub fn set_v_grow_direction (& mut self , direction : crate :: classes :: control :: GrowDirection ,) { type CallRet = () ; type CallParams = (crate :: classes :: control :: GrowDirection ,) ; let args = (direction ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (152usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Control" , "set_v_grow_direction" , self . object_ptr , args ,) } } pub fn get_v_grow_direction (& self ,) -> crate :: classes :: control :: GrowDirection { type CallRet = crate :: classes :: control :: GrowDirection ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (153usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Control" , "get_v_grow_direction" , self . object_ptr , args ,) } } pub fn set_tooltip_text (& mut self , hint : impl AsArg < GString > ,) { type CallRet = () ; type CallParams < 'a0 , > = (CowArg < 'a0 , GString > ,) ; let args = (hint . into_arg () ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (154usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Control" , "set_tooltip_text" , self . object_ptr , args ,) } } pub fn get_tooltip_text (& self ,) -> GString { type CallRet = GString ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (155usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Control" , "get_tooltip_text" , self . object_ptr , args ,) } } pub (crate) fn get_tooltip_full (& self , at_position : Vector2 ,) -> GString { type CallRet = GString ; type CallParams = (Vector2 ,) ; let args = (at_position ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (156usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Control" , "get_tooltip" , self . object_ptr , args ,) } } # [inline] pub fn get_tooltip (& self ,) -> GString { self . get_tooltip_ex () . done () } # [inline] pub fn get_tooltip_ex < 'ex > (& 'ex self ,) -> super :: ExGetTooltip < 'ex > { super :: ExGetTooltip :: new (self ,) } pub fn set_default_cursor_shape (& mut self , shape : crate :: classes :: control :: CursorShape ,) { type CallRet = () ; type CallParams = (crate :: classes :: control :: CursorShape ,) ; let args = (shape ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (157usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Control" , "set_default_cursor_shape" , self . object_ptr , args ,) } } pub fn get_default_cursor_shape (& self ,) -> crate :: classes :: control :: CursorShape { type CallRet = crate :: classes :: control :: CursorShape ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (158usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Control" , "get_default_cursor_shape" , self . object_ptr , args ,) } } pub (crate) fn get_cursor_shape_full (& self , position : Vector2 ,) -> crate :: classes :: control :: CursorShape { type CallRet = crate :: classes :: control :: CursorShape ; type CallParams = (Vector2 ,) ; let args = (position ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (159usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Control" , "get_cursor_shape" , self . object_ptr , args ,) } } # [inline] pub fn get_cursor_shape (& self ,) -> crate :: classes :: control :: CursorShape { self . get_cursor_shape_ex () . done () } # [inline] pub fn get_cursor_shape_ex < 'ex > (& 'ex self ,) -> super :: ExGetCursorShape < 'ex > { super :: ExGetCursorShape :: new (self ,) } pub fn set_focus_neighbor (& mut self , side : crate :: global :: Side , neighbor : impl AsArg < NodePath > ,) { type CallRet = () ; type CallParams < 'a0 , > = (crate :: global :: Side , CowArg < 'a0 , NodePath > ,) ; let args = (side , neighbor . into_arg () ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (160usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Control" , "set_focus_neighbor" , self . object_ptr , args ,) } } pub fn get_focus_neighbor (& self , side : crate :: global :: Side ,) -> NodePath { type CallRet = NodePath ; type CallParams = (crate :: global :: Side ,) ; let args = (side ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (161usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Control" , "get_focus_neighbor" , self . object_ptr , args ,) } } pub fn set_focus_next (& mut self , next : impl AsArg < NodePath > ,) { type CallRet = () ; type CallParams < 'a0 , > = (CowArg < 'a0 , NodePath > ,) ; let args = (next . into_arg () ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (162usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Control" , "set_focus_next" , self . object_ptr , args ,) } } pub fn get_focus_next (& self ,) -> NodePath { type CallRet = NodePath ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (163usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Control" , "get_focus_next" , self . object_ptr , args ,) } } pub fn set_focus_previous (& mut self , previous : impl AsArg < NodePath > ,) { type CallRet = () ; type CallParams < 'a0 , > = (CowArg < 'a0 , NodePath > ,) ; let args = (previous . into_arg () ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (164usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Control" , "set_focus_previous" , self . object_ptr , args ,) } } pub fn get_focus_previous (& self ,) -> NodePath { type CallRet = NodePath ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (165usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Control" , "get_focus_previous" , self . object_ptr , args ,) } } pub fn force_drag (& mut self , data : & Variant , preview : impl AsObjectArg < crate :: classes :: Control > ,) { type CallRet = () ; type CallParams < 'a0 , > = (CowArg < 'a0 , Variant > , ObjectArg < crate :: classes :: Control > ,) ; let args = (CowArg :: Borrowed (data) , preview . as_object_arg () ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (166usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Control" , "force_drag" , self . object_ptr , args ,) } } pub fn set_mouse_filter (& mut self , filter : crate :: classes :: control :: MouseFilter ,) { type CallRet = () ; type CallParams = (crate :: classes :: control :: MouseFilter ,) ; let args = (filter ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (167usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Control" , "set_mouse_filter" , self . object_ptr , args ,) } } pub fn get_mouse_filter (& self ,) -> crate :: classes :: control :: MouseFilter { type CallRet = crate :: classes :: control :: MouseFilter ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (168usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Control" , "get_mouse_filter" , self . object_ptr , args ,) } } pub fn set_force_pass_scroll_events (& mut self , force_pass_scroll_events : bool ,) { type CallRet = () ; type CallParams = (bool ,) ; let args = (force_pass_scroll_events ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (169usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Control" , "set_force_pass_scroll_events" , self . object_ptr , args ,) } } pub fn is_force_pass_scroll_events (& self ,) -> bool { type CallRet = bool ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (170usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Control" , "is_force_pass_scroll_events" , self . object_ptr , args ,) } } pub fn set_clip_contents (& mut self , enable : bool ,) { type CallRet = () ; type CallParams = (bool ,) ; let args = (enable ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (171usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Control" , "set_clip_contents" , self . object_ptr , args ,) } } pub fn is_clipping_contents (& mut self ,) -> bool { type CallRet = bool ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (172usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Control" , "is_clipping_contents" , self . object_ptr , args ,) } } pub fn grab_click_focus (& mut self ,) { type CallRet = () ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (173usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Control" , "grab_click_focus" , self . object_ptr , args ,) } } pub fn set_drag_forwarding (& mut self , drag_func : & Callable , can_drop_func : & Callable , drop_func : & Callable ,) { type CallRet = () ; type CallParams < 'a0 , 'a1 , 'a2 , > = (CowArg < 'a0 , Callable > , CowArg < 'a1 , Callable > , CowArg < 'a2 , Callable > ,) ; let args = (CowArg :: Borrowed (drag_func) , CowArg :: Borrowed (can_drop_func) , CowArg :: Borrowed (drop_func) ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (174usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Control" , "set_drag_forwarding" , self . object_ptr , args ,) } } pub fn set_drag_preview (& mut self , control : impl AsObjectArg < crate :: classes :: Control > ,) { type CallRet = () ; type CallParams = (ObjectArg < crate :: classes :: Control > ,) ; let args = (control . as_object_arg () ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (175usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Control" , "set_drag_preview" , self . object_ptr , args ,) } } pub fn is_drag_successful (& self ,) -> bool { type CallRet = bool ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (176usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Control" , "is_drag_successful" , self . object_ptr , args ,) } } pub fn warp_mouse (& mut self , position : Vector2 ,) { type CallRet = () ; type CallParams = (Vector2 ,) ; let args = (position ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (177usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Control" , "warp_mouse" , self . object_ptr , args ,) } } pub fn set_shortcut_context (& mut self , node : impl AsObjectArg < crate :: classes :: Node > ,) { type CallRet = () ; type CallParams = (ObjectArg < crate :: classes :: Node > ,) ; let args = (node . as_object_arg () ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (178usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Control" , "set_shortcut_context" , self . object_ptr , args ,) } } pub fn get_shortcut_context (& self ,) -> Option < Gd < crate :: classes :: Node > > { type CallRet = Option < Gd < crate :: classes :: Node > > ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (179usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Control" , "get_shortcut_context" , self . object_ptr , args ,) } } pub fn update_minimum_size (& mut self ,) { type CallRet = () ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (180usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Control" , "update_minimum_size" , self . object_ptr , args ,) } } pub fn set_layout_direction (& mut self , direction : crate :: classes :: control :: LayoutDirection ,) { type CallRet = () ; type CallParams = (crate :: classes :: control :: LayoutDirection ,) ; let args = (direction ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (181usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Control" , "set_layout_direction" , self . object_ptr , args ,) } } pub fn get_layout_direction (& self ,) -> crate :: classes :: control :: LayoutDirection { type CallRet = crate :: classes :: control :: LayoutDirection ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (182usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Control" , "get_layout_direction" , self . object_ptr , args ,) } } pub fn is_layout_rtl (& self ,) -> bool { type CallRet = bool ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (183usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Control" , "is_layout_rtl" , self . object_ptr , args ,) } } pub fn set_auto_translate (& mut self , enable : bool ,) { type CallRet = () ; type CallParams = (bool ,) ; let args = (enable ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (184usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Control" , "set_auto_translate" , self . object_ptr , args ,) } } pub fn is_auto_translating (& self ,) -> bool { type CallRet = bool ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (185usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Control" , "is_auto_translating" , self . object_ptr , args ,) } } pub fn set_localize_numeral_system (& mut self , enable : bool ,) { type CallRet = () ; type CallParams = (bool ,) ; let args = (enable ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (186usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Control" , "set_localize_numeral_system" , self . object_ptr , args ,) } } pub fn is_localizing_numeral_system (& self ,) -> bool { type CallRet = bool ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (187usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Control" , "is_localizing_numeral_system" , self . object_ptr , args ,) } } # [doc = "Typed signals of this class and its bases; see [`SignalsOfControl`][super::control::SignalsOfControl]."] pub fn signals (& mut self) -> super :: SignalsOfControl < '_ > { super :: SignalsOfControl :: __new (crate :: signal :: SignalObject :: __new (self . object_ptr)) } pub const NOTIFICATION_RESIZED : i32 = 40i32 ; pub const NOTIFICATION_MOUSE_ENTER : i32 = 41i32 ; pub const NOTIFICATION_MOUSE_EXIT : i32 = 42i32 ; pub const NOTIFICATION_MOUSE_ENTER_SELF : i32 = 60i32 ; pub const NOTIFICATION_MOUSE_EXIT_SELF : i32 = 61i32 ; pub const NOTIFICATION_FOCUS_ENTER : i32 = 43i32 ; pub const NOTIFICATION_FOCUS_EXIT : i32 = 44i32 ; pub const NOTIFICATION_THEME_CHANGED : i32 = 45i32 ; pub const NOTIFICATION_SCROLL_BEGIN : i32 = 47i32 ; pub const NOTIFICATION_SCROLL_END : i32 = 48i32 ; pub const NOTIFICATION_LAYOUT_DIRECTION_CHANGED : i32 = 49i32 ; } impl crate :: obj :: GodotClass for Control { const CLASS_NAME : & 'static str = "Control" ; type Base = crate :: classes :: CanvasItem ; type Memory = crate :: obj :: MemManual ; const INIT_LEVEL : crate :: init :: InitLevel = crate :: init :: InitLevel :: Scene ; } impl crate :: obj :: EngineClass for Control { fn as_object_ptr (& self) -> sys :: GDExtensionObjectPtr { self . object_ptr } } unsafe impl crate :: obj :: Inherits < crate :: classes :: CanvasItem > for Control { } unsafe impl crate :: obj :: Inherits < crate :: classes :: Node > for Control { } unsafe impl crate :: obj :: Inherits < crate :: classes :: Object > for Control { } impl crate :: obj :: Instantiable for Control { } impl std :: ops :: Deref for Control { type Target = crate :: classes :: CanvasItem ; fn deref (& self) -> & Self :: Target { unsafe { std :: mem :: transmute :: < & Self , & Self :: Target > (self) } } } impl std :: ops :: DerefMut for Control { fn deref_mut (& mut self) -> & mut Self :: Target { unsafe { std :: mem :: transmute :: < & mut Self , & mut Self :: Target > (self) } } } } # [doc = "Default-param extender for [`Control::set_anchors_preset_ex`][super::Control::set_anchors_preset_ex]."] # [must_use] pub struct ExSetAnchorsPreset < 'ex > { surround_object : & 'ex mut re_export :: Control , preset : crate :: classes :: control :: LayoutPreset , keep_offsets : bool , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExSetAnchorsPreset < 'ex > { fn new (surround_object : & 'ex mut re_export :: Control , preset : crate :: classes :: control :: LayoutPreset ,) -> Self { Self { surround_object , preset , keep_offsets : false , } } # [inline] pub fn keep_offsets (self , value : bool) -> Self { Self { keep_offsets : value , .. self } } # [inline] pub fn done (self) { re_export :: Control :: set_anchors_preset_full (self . surround_object , self . preset , self . keep_offsets ,) } } # [doc = "Default-param extender for [`Control::set_offsets_preset_ex`][super::Control::set_offsets_preset_ex]."] # [must_use] pub struct ExSetOffsetsPreset < 'ex > { surround_object : & 'ex mut re_export :: Control , preset : crate :: classes :: control :: LayoutPreset , resize_mode : crate :: classes :: control :: LayoutPresetMode , margin : i32 , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExSetOffsetsPreset < 'ex > { fn new (surround_object : & 'ex mut re_export :: Control , preset : crate :: classes :: control :: LayoutPreset ,) -> Self { Self { surround_object , preset , resize_mode : crate :: obj :: EngineEnum :: from_ord (0) , margin : 0i32 , } } # [inline] pub fn resize_mode (self , value : crate :: classes :: control :: LayoutPresetMode) -> Self { Self { resize_mode : value , .. self } } # [inline] pub fn margin (self , value : i32) -> Self { Self { margin : value , .. self } } # [inline] pub fn done (self) { re_export :: Control :: set_offsets_preset_full (self . surround_object , self . preset , self . resize_mode , self . margin ,) } } # [doc = "Default-param extender for [`Control::set_anchors_and_offsets_preset_ex`][super::Control::set_anchors_and_offsets_preset_ex]."] # [must_use] pub struct ExSetAnchorsAndOffsetsPreset < 'ex > { surround_object : & 'ex mut re_export :: Control , preset : crate :: classes :: control :: LayoutPreset , resize_mode : crate :: classes :: control :: LayoutPresetMode , margin : i32 , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExSetAnchorsAndOffsetsPreset < 'ex > { fn new (surround_object : & 'ex mut re_export :: Control , preset : crate :: classes :: control :: LayoutPreset ,) -> Self { Self { surround_object , preset , resize_mode : crate :: obj :: EngineEnum :: from_ord (0) , margin : 0i32 , } } # [inline] pub fn resize_mode (self , value : crate :: classes :: control :: LayoutPresetMode) -> Self { Self { resize_mode : value , .. self } } # [inline] pub fn margin (self , value : i32) -> Self { Self { margin : value , .. self } } # [inline] pub fn done (self) { re_export :: Control :: set_anchors_and_offsets_preset_full (self . surround_object , self . preset , self . resize_mode , self . margin ,) } } # [doc = "Default-param extender for [`Control::set_anchor_ex`][super::Control::set_anchor_ex]."] # [must_use] pub struct ExSetAnchor < 'ex > { surround_object : & 'ex mut re_export :: Control , side : crate :: global :: Side , anchor : f32 , keep_offset : bool , push_opposite_anchor : bool , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExSetAnchor < 'ex > { fn new (surround_object : & 'ex mut re_export :: Control , side : crate :: global :: Side , anchor : f32 ,) -> Self { Self { surround_object , side , anchor , keep_offset : false , push_opposite_anchor : true , } } # [inline] pub fn keep_offset (self , value : bool) -> Self { Self { keep_offset : value , .. self } } # [inline] pub fn push_opposite_anchor (self , value : bool) -> Self { Self { push_opposite_anchor : value , .. self } } # [inline] pub fn done (self) { re_export :: Control :: set_anchor_full (self . surround_object , self . side , self . anchor , self . keep_offset , self . push_opposite_anchor ,) } } # [doc = "Default-param extender for [`Control::set_anchor_and_offset_ex`][super::Control::set_anchor_and_offset_ex]."] # [must_use] pub struct ExSetAnchorAndOffset < 'ex > { surround_object : & 'ex mut re_export :: Control , side : crate :: global :: Side , anchor : f32 , offset : f32 , push_opposite_anchor : bool , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExSetAnchorAndOffset < 'ex > { fn new (surround_object : & 'ex mut re_export :: Control , side : crate :: global :: Side , anchor : f32 , offset : f32 ,) -> Self { Self { surround_object , side , anchor , offset , push_opposite_anchor : false , } } # [inline] pub fn push_opposite_anchor (self , value : bool) -> Self { Self { push_opposite_anchor : value , .. self } } # [inline] pub fn done (self) { re_export :: Control :: set_anchor_and_offset_full (self . surround_object , self . side , self . anchor , self . offset , self . push_opposite_anchor ,) } } # [doc = "Default-param extender for [`Control::set_position_ex`][super::Control::set_position_ex]."] # [must_use] pub struct ExSetPosition < 'ex > { surround_object : & 'ex mut re_export :: Control , position : Vector2 , keep_offsets : bool , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExSetPosition < 'ex > { fn new (surround_object : & 'ex mut re_export :: Control , position : Vector2 ,) -> Self { Self { surround_object , position , keep_offsets : false , } } # [inline] pub fn keep_offsets (self , value : bool) -> Self { Self { keep_offsets : value , .. self } } # [inline] pub fn done (self) { re_export :: Control :: set_position_full (self . surround_object , self . position , self . keep_offsets ,) } } # [doc = "Default-param extender for [`Control::set_size_ex`][super::Control::set_size_ex]."] # [must_use] pub struct ExSetSize < 'ex > { surround_object : & 'ex mut re_export :: Control , size : Vector2 , keep_offsets : bool , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExSetSize < 'ex > { fn new (surround_object : & 'ex mut re_export :: Control , size : Vector2 ,) -> Self { Self { surround_object , size , keep_offsets : false , } } # [inline] pub fn keep_offsets (self , value : bool) -> Self { Self { keep_offsets : value , .. self } } # [inline] pub fn done (self) { re_export :: Control :: set_size_full (self . surround_object , self . size , self . keep_offsets ,) } } # [doc = "Default-param extender for [`Control::set_global_position_ex`][super::Control::set_global_position_ex]."] # [must_use] pub struct ExSetGlobalPosition < 'ex > { surround_object : & 'ex mut re_export :: Control , position : Vector2 , keep_offsets : bool , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExSetGlobalPosition < 'ex > { fn new (surround_object : & 'ex mut re_export :: Control , position : Vector2 ,) -> Self { Self { surround_object , position , keep_offsets : false , } } # [inline] pub fn keep_offsets (self , value : bool) -> Self { Self { keep_offsets : value , .. self } } # [inline] pub fn done (self) { re_export :: Control :: set_global_position_full (self . surround_object , self . position , self . keep_offsets ,) } } # [doc = "Default-param extender for [`Control::get_theme_icon_ex`][super::Control::get_theme_icon_ex]."] # [must_use] pub struct ExGetThemeIcon < 'ex > { surround_object : & 'ex re_export :: Control , name : CowArg < 'ex , StringName > , theme_type : CowArg < 'ex , StringName > , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExGetThemeIcon < 'ex > { fn new (surround_object : & 'ex re_export :: Control , name : CowArg < 'ex , StringName > ,) -> Self { Self { surround_object , name , theme_type : CowArg :: Owned (StringName :: from ("")) , } } # [inline] pub fn theme_type (self , value : impl AsArg < StringName > + 'ex) -> Self { Self { theme_type : value . into_arg () , .. self } } # [inline] pub fn done (self) -> Option < Gd < crate :: classes :: Texture2D > > { re_export :: Control :: get_theme_icon_full (self . surround_object , self . name , self . theme_type ,) } } # [doc = "Default-param extender for [`Control::get_theme_font_ex`][super::Control::get_theme_font_ex]."] # [must_use] pub struct ExGetThemeFont < 'ex > { surround_object : & 'ex re_export :: Control , name : CowArg < 'ex , StringName > , theme_type : CowArg < 'ex , StringName > , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExGetThemeFont < 'ex > { fn new (surround_object : & 'ex re_export :: Control , name : CowArg < 'ex , StringName > ,) -> Self { Self { surround_object , name , theme_type : CowArg :: Owned (StringName :: from ("")) , } } # [inline] pub fn theme_type (self , value : impl AsArg < StringName > + 'ex) -> Self { Self { theme_type : value . into_arg () , .. self } } # [inline] pub fn done (self) -> Option < Gd < crate :: classes :: Font > > { re_export :: Control :: get_theme_font_full (self . surround_object , self . name , self . theme_type ,) } } # [doc = "Default-param extender for [`Control::get_theme_font_size_ex`][super::Control::get_theme_font_size_ex]."] # [must_use] pub struct ExGetThemeFontSize < 'ex > { surround_object : & 'ex re_export :: Control , name : CowArg < 'ex , StringName > , theme_type : CowArg < 'ex , StringName > , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExGetThemeFontSize < 'ex > { fn new (surround_object : & 'ex re_export :: Control , name : CowArg < 'ex , StringName > ,) -> Self { Self { surround_object , name , theme_type : CowArg :: Owned (StringName :: from ("")) , } } # [inline] pub fn theme_type (self , value : impl AsArg < StringName > + 'ex) -> Self { Self { theme_type : value . into_arg () , .. self } } # [inline] pub fn done (self) -> i32 { re_export :: Control :: get_theme_font_size_full (self . surround_object , self . name , self . theme_type ,) } } # [doc = "Default-param extender for [`Control::get_theme_color_ex`][super::Control::get_theme_color_ex]."] # [must_use] pub struct ExGetThemeColor < 'ex > { surround_object : & 'ex re_export :: Control , name : CowArg < 'ex , StringName > , theme_type : CowArg < 'ex , StringName > , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExGetThemeColor < 'ex > { fn new (surround_object : & 'ex re_export :: Control , name : CowArg < 'ex , StringName > ,) -> Self { Self { surround_object , name , theme_type : CowArg :: Owned (StringName :: from ("")) , } } # [inline] pub fn theme_type (self , value : impl AsArg < StringName > + 'ex) -> Self { Self { theme_type : value . into_arg () , .. self } } # [inline] pub fn done (self) -> Color { re_export :: Control :: get_theme_color_full (self . surround_object , self . name , self . theme_type ,) } } # [doc = "Default-param extender for [`Control::get_theme_constant_ex`][super::Control::get_theme_constant_ex]."] # [must_use] pub struct ExGetThemeConstant < 'ex > { surround_object : & 'ex re_export :: Control , name : CowArg < 'ex , StringName > , theme_type : CowArg < 'ex , StringName > , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExGetThemeConstant < 'ex > { fn new (surround_object : & 'ex re_export :: Control , name : CowArg < 'ex , StringName > ,) -> Self { Self { surround_object , name , theme_type : CowArg :: Owned (StringName :: from ("")) , } } # [inline] pub fn theme_type (self , value : impl AsArg < StringName > + 'ex) -> Self { Self { theme_type : value . into_arg () , .. self } } # [inline] pub fn done (self) -> i32 { re_export :: Control :: get_theme_constant_full (self . surround_object , self . name , self . theme_type ,) } } # [doc = "Default-param extender for [`Control::has_theme_icon_ex`][super::Control::has_theme_icon_ex]."] # [must_use] pub struct ExHasThemeIcon < 'ex > { surround_object : & 'ex re_export :: Control , name : CowArg < 'ex , StringName > , theme_type : CowArg < 'ex , StringName > , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExHasThemeIcon < 'ex > { fn new (surround_object : & 'ex re_export :: Control , name : CowArg < 'ex , StringName > ,) -> Self { Self { surround_object , name , theme_type : CowArg :: Owned (StringName :: from ("")) , } } # [inline] pub fn theme_type (self , value : impl AsArg < StringName > + 'ex) -> Self { Self { theme_type : value . into_arg () , .. self } } # [inline] pub fn done (self) -> bool { re_export :: Control :: has_theme_icon_full (self . surround_object , self . name , self . theme_type ,) } } # [doc = "Default-param extender for [`Control::has_theme_stylebox_ex`][super::Control::has_theme_stylebox_ex]."] # [must_use] pub struct ExHasThemeStylebox < 'ex > { surround_object : & 'ex re_export :: Control , name : CowArg < 'ex , StringName > , theme_type : CowArg < 'ex , StringName > , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExHasThemeStylebox < 'ex > { fn new (surround_object : & 'ex re_export :: Control , name : CowArg < 'ex , StringName > ,) -> Self { Self { surround_object , name , theme_type : CowArg :: Owned (StringName :: from ("")) , } } # [inline] pub fn theme_type (self , value : impl AsArg < StringName > + 'ex) -> Self { Self { theme_type : value . into_arg () , .. self } } # [inline] pub fn done (self) -> bool { re_export :: Control :: has_theme_stylebox_full (self . surround_object , self . name , self . theme_type ,) } } # [doc = "Default-param extender for [`Control::has_theme_font_ex`][super::Control::has_theme_font_ex]."] # [must_use] pub struct ExHasThemeFont < 'ex > { surround_object : & 'ex re_export :: Control , name : CowArg < 'ex , StringName > , theme_type : CowArg < 'ex , StringName > , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExHasThemeFont < 'ex > { fn new (surround_object : & 'ex re_export :: Control , name : CowArg < 'ex , StringName > ,) -> Self { Self { surround_object , name , theme_type : CowArg :: Owned (StringName :: from ("")) , } } # [inline] pub fn theme_type (self , value : impl AsArg < StringName > + 'ex) -> Self { Self { theme_type : value . into_arg () , .. self } } # [inline] pub fn done (self) -> bool { re_export :: Control :: has_theme_font_full (self . surround_object , self . name , self . theme_type ,) } } # [doc = "Default-param extender for [`Control::has_theme_font_size_ex`][super::Control::has_theme_font_size_ex]."] # [must_use] pub struct ExHasThemeFontSize < 'ex > { surround_object : & 'ex re_export :: Control , name : CowArg < 'ex , StringName > , theme_type : CowArg < 'ex , StringName > , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExHasThemeFontSize < 'ex > { fn new (surround_object : & 'ex re_export :: Control , name : CowArg < 'ex , StringName > ,) -> Self { Self { surround_object , name , theme_type : CowArg :: Owned (StringName :: from ("")) , } } # [inline] pub fn theme_type (self , value : impl AsArg < StringName > + 'ex) -> Self { Self { theme_type : value . into_arg () , .. self } } # [inline] pub fn done (self) -> bool { re_export :: Control :: has_theme_font_size_full (self . surround_object , self . name , self . theme_type ,) } } # [doc = "Default-param extender for [`Control::has_theme_color_ex`][super::Control::has_theme_color_ex]."] # [must_use] pub struct ExHasThemeColor < 'ex > { surround_object : & 'ex re_export :: Control , name : CowArg < 'ex , StringName > , theme_type : CowArg < 'ex , StringName > , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExHasThemeColor < 'ex > { fn new (surround_object : & 'ex re_export :: Control , name : CowArg < 'ex , StringName > ,) -> Self { Self { surround_object , name , theme_type : CowArg :: Owned (StringName :: from ("")) , } } # [inline] pub fn theme_type (self , value : impl AsArg < StringName > + 'ex) -> Self { Self { theme_type : value . into_arg () , .. self } } # [inline] pub fn done (self) -> bool { re_export :: Control :: has_theme_color_full (self . surround_object , self . name , self . theme_type ,) } } # [doc = "Default-param extender for [`Control::has_theme_constant_ex`][super::Control::has_theme_constant_ex]."] # [must_use] pub struct ExHasThemeConstant < 'ex > { surround_object : & 'ex re_export :: Control , name : CowArg < 'ex , StringName > , theme_type : CowArg < 'ex , StringName > , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExHasThemeConstant < 'ex > { fn new (surround_object : & 'ex re_export :: Control , name : CowArg < 'ex , StringName > ,) -> Self { Self { surround_object , name , theme_type : CowArg :: Owned (StringName :: from ("")) , } } # [inline] pub fn theme_type (self , value : impl AsArg < StringName > + 'ex) -> Self { Self { theme_type : value . into_arg () , .. self } } # [inline] pub fn done (self) -> bool { re_export :: Control :: has_theme_constant_full (self . surround_object , self . name , self . theme_type ,) } } # [doc = "Default-param extender for [`Control::get_tooltip_ex`][super::Control::get_tooltip_ex]."] # [must_use] pub struct ExGetTooltip < 'ex > { surround_object : & 'ex re_export :: Control , at_position : Vector2 , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExGetTooltip < 'ex > { fn new (surround_object : & 'ex re_export :: Control ,) -> Self { Self { surround_object , at_position : Vector2 :: new (0 as _ , 0 as _) , } } # [inline] pub fn at_position (self , value : Vector2) -> Self { Self { at_position : value , .. self } } # [inline] pub fn done (self) -> GString { re_export :: Control :: get_tooltip_full (self . surround_object , self . at_position ,) } } # [doc = "Default-param extender for [`Control::get_cursor_shape_ex`][super::Control::get_cursor_shape_ex]."] # [must_use] pub struct ExGetCursorShape < 'ex > { surround_object : & 'ex re_export :: Control , position : Vector2 , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExGetCursorShape < 'ex > { fn new (surround_object : & 'ex re_export :: Control ,) -> Self { Self { surround_object , position : Vector2 :: new (0 as _ , 0 as _) , } } # [inline] pub fn position (self , value : Vector2) -> Self { Self { position : value , .. self } } # [inline] pub fn done (self) -> crate :: classes :: control :: CursorShape { re_export :: Control :: get_cursor_shape_full (self . surround_object , self . position ,) } } # [repr (transparent)] # [derive (Copy , Clone , Eq , PartialEq , Hash ,)] pub struct FocusMode { ord : i32 } impl FocusMode { # [doc (alias = "FOCUS_NONE")] # [doc = "Godot enumerator name: `FOCUS_NONE`"] pub const NONE : Self = Self { ord : 0 } ; # [doc (alias = "FOCUS_CLICK")] # [doc = "Godot enumerator name: `FOCUS_CLICK`"] pub const CLICK : Self = Self { ord : 1 } ; # [doc (alias = "FOCUS_ALL")] # [doc = "Godot enumerator name: `FOCUS_ALL`"] pub const ALL : Self = Self { ord : 2 } ; # [allow (unreachable_patterns)] fn enumerator_name (self) -> Option < & 'static str > { match self { Self :: NONE => Some ("NONE") , Self :: CLICK => Some ("CLICK") , Self :: ALL => Some ("ALL") , _ => None , } } } impl std :: fmt :: Debug for FocusMode { fn fmt (& self , f : & mut std :: fmt :: Formatter < '_ >) -> std :: fmt :: Result { match self . enumerator_name () { Some (enumerator) => f . write_str (enumerator) , None => f . debug_struct (stringify ! (FocusMode)) . field ("ord" , & self . ord) . finish () , } } } impl crate :: obj :: EngineEnum for FocusMode { fn try_from_ord (ord : i32) -> Option < Self > { match ord { 0 | 1 | 2 => Some (Self { ord }) , _ => None , } } fn ord (self) -> i32 { self . ord } } impl crate :: meta :: GodotConvert for FocusMode { type Via = i32 ; } impl crate :: meta :: ToGodot for FocusMode { fn to_godot (& self) -> Self :: Via { < Self as crate :: obj :: EngineEnum > :: ord (* self) } } impl crate :: meta :: FromGodot for FocusMode { fn try_from_godot (via : Self :: Via) -> std :: result :: Result < Self , crate :: meta :: ConvertError > { Ok (Self { ord : via }) } } # [repr (transparent)] # [derive (Copy , Clone , Eq , PartialEq , Hash ,)] pub struct CursorShape { ord : i32 } impl CursorShape { # [doc (alias = "CURSOR_ARROW")] # [doc = "Godot enumerator name: `CURSOR_ARROW`"] pub const ARROW : Self = Self { ord : 0 } ; # [doc (alias = "CURSOR_IBEAM")] # [doc = "Godot enumerator name: `CURSOR_IBEAM`"] pub const IBEAM : Self = Self { ord : 1 } ; # [doc (alias = "CURSOR_POINTING_HAND")] # [doc = "Godot enumerator name: `CURSOR_POINTING_HAND`"] pub const POINTING_HAND : Self = Self { ord : 2 } ; # [doc (alias = "CURSOR_CROSS")] # [doc = "Godot enumerator name: `CURSOR_CROSS`"] pub const CROSS : Self = Self { ord : 3 } ; # [doc (alias = "CURSOR_WAIT")] # [doc = "Godot enumerator name: `CURSOR_WAIT`"] pub const WAIT : Self = Self { ord : 4 } ; # [doc (alias = "CURSOR_BUSY")] # [doc = "Godot enumerator name: `CURSOR_BUSY`"] pub const BUSY : Self = Self { ord : 5 } ; # [doc (alias = "CURSOR_DRAG")] # [doc = "Godot enumerator name: `CURSOR_DRAG`"] pub const DRAG : Self = Self { ord : 6 } ; # [doc (alias = "CURSOR_CAN_DROP")] # [doc = "Godot enumerator name: `CURSOR_CAN_DROP`"] pub const CAN_DROP : Self = Self { ord : 7 } ; # [doc (alias = "CURSOR_FORBIDDEN")] # [doc = "Godot enumerator name: `CURSOR_FORBIDDEN`"] pub const FORBIDDEN : Self = Self { ord : 8 } ; # [doc (alias = "CURSOR_VSIZE")] # [doc = "Godot enumerator name: `CURSOR_VSIZE`"] pub const VSIZE : Self = Self { ord : 9 } ; # [doc (alias = "CURSOR_HSIZE")] # [doc = "Godot enumerator name: `CURSOR_HSIZE`"] pub const HSIZE : Self = Self { ord : 10 } ; # [doc (alias = "CURSOR_BDIAGSIZE")] # [doc = "Godot enumerator name: `CURSOR_BDIAGSIZE`"] pub const BDIAGSIZE : Self = Self { ord : 11 } ; # [doc (alias = "CURSOR_FDIAGSIZE")] # [doc = "Godot enumerator name: `CURSOR_FDIAGSIZE`"] pub const FDIAGSIZE : Self = Self { ord : 12 } ; # [doc (alias = "CURSOR_MOVE")] # [doc = "Godot enumerator name: `CURSOR_MOVE`"] pub const MOVE : Self = Self { ord : 13 } ; # [doc (alias = "CURSOR_VSPLIT")] # [doc = "Godot enumerator name: `CURSOR_VSPLIT`"] pub const VSPLIT : Self = Self { ord : 14 } ; # [doc (alias = "CURSOR_HSPLIT")] # [doc = "Godot enumerator name: `CURSOR_HSPLIT`"] pub const HSPLIT : Self = Self { ord : 15 } ; # [doc (alias = "CURSOR_HELP")] # [doc = "Godot enumerator name: `CURSOR_HELP`"] pub const HELP : Self = Self { ord : 16 } ; # [allow (unreachable_patterns)] fn enumerator_name (self) -> Option < & 'static str > { match self { Self :: ARROW => Some ("ARROW") , Self :: IBEAM => Some ("IBEAM") , Self :: POINTING_HAND => Some ("POINTING_HAND") , Self :: CROSS => Some ("CROSS") , Self :: WAIT => Some ("WAIT") , Self :: BUSY => Some ("BUSY") , Self :: DRAG => Some ("DRAG") , Self :: CAN_DROP => Some ("CAN_DROP") , Self :: FORBIDDEN => Some ("FORBIDDEN") , Self :: VSIZE => Some ("VSIZE") , Self :: HSIZE => Some ("HSIZE") , Self :: BDIAGSIZE => Some ("BDIAGSIZE") , Self :: FDIAGSIZE => Some ("FDIAGSIZE") , Self :: MOVE => Some ("MOVE") , Self :: VSPLIT => Some ("VSPLIT") , Self :: HSPLIT => Some ("HSPLIT") , Self :: HELP => Some ("HELP") , _ => None , } } } impl std :: fmt :: Debug for CursorShape { fn fmt (& self , f : & mut std :: fmt :: Formatter < '_ >) -> std :: fmt :: Result { match self . enumerator_name () { Some (enumerator) => f . write_str (enumerator) , None => f . debug_struct (stringify ! (CursorShape)) . field ("ord" , & self . ord) . finish () , } } } impl crate :: obj :: EngineEnum for CursorShape { fn try_from_ord (ord : i32) -> Option < Self > { match ord { 0 | 1 | 2 | 3 | 4 | 5 | 6 | 7 | 8 | 9 | 10 | 11 | 12 | 13 | 14 | 15 | 16 => Some (Self { ord }) , _ => None , } } fn ord (self) -> i32 { self . ord } } impl crate :: meta :: GodotConvert for CursorShape { type Via = i32 ; } impl crate :: meta :: ToGodot for CursorShape { fn to_godot (& self) -> Self :: Via { < Self as crate :: obj :: EngineEnum > :: ord (* self) } } impl crate :: meta :: FromGodot for CursorShape { fn try_from_godot (via : Self :: Via) -> std :: result :: Result < Self , crate :: meta :: ConvertError > { Ok (Self { ord : via }) } } # [repr (transparent)] # [derive (Copy , Clone , Eq , PartialEq , Hash ,)] pub struct LayoutPreset { ord : i32 } impl LayoutPreset { # [doc (alias = "PRESET_TOP_LEFT")] # [doc = "Godot enumerator name: `PRESET_TOP_LEFT`"] pub const TOP_LEFT : Self = Self { ord : 0 } ; # [doc (alias = "PRESET_TOP_RIGHT")] # [doc = "Godot enumerator name: `PRESET_TOP_RIGHT`"] pub const TOP_RIGHT : Self = Self { ord : 1 } ; # [doc (alias = "PRESET_BOTTOM_LEFT")] # [doc = "Godot enumerator name: `PRESET_BOTTOM_LEFT`"] pub const BOTTOM_LEFT : Self = Self { ord : 2 } ; # [doc (alias = "PRESET_BOTTOM_RIGHT")] # [doc = "Godot enumerator name: `PRESET_BOTTOM_RIGHT`"] pub const BOTTOM_RIGHT : Self = Self { ord : 3 } ; # [doc (alias = "PRESET_CENTER_LEFT")] # [doc = "Godot enumerator name: `PRESET_CENTER_LEFT`"] pub const CENTER_LEFT : Self = Self { ord : 4 } ; # [doc (alias = "PRESET_CENTER_TOP")] # [doc = "Godot enumerator name: `PRESET_CENTER_TOP`"] pub const CENTER_TOP : Self = Self { ord : 5 } ; # [doc (alias = "PRESET_CENTER_RIGHT")] # [doc = "Godot enumerator name: `PRESET_CENTER_RIGHT`"] pub const CENTER_RIGHT : Self = Self { ord : 6 } ; # [doc (alias = "PRESET_CENTER_BOTTOM")] # [doc = "Godot enumerator name: `PRESET_CENTER_BOTTOM`"] pub const CENTER_BOTTOM : Self = Self { ord : 7 } ; # [doc (alias = "PRESET_CENTER")] # [doc = "Godot enumerator name: `PRESET_CENTER`"] pub const CENTER : Self = Self { ord : 8 } ; # [doc (alias = "PRESET_LEFT_WIDE")] # [doc = "Godot enumerator name: `PRESET_LEFT_WIDE`"] pub const LEFT_WIDE : Self = Self { ord : 9 } ; # [doc (alias = "PRESET_TOP_WIDE")] # [doc = "Godot enumerator name: `PRESET_TOP_WIDE`"] pub const TOP_WIDE : Self = Self { ord : 10 } ; # [doc (alias = "PRESET_RIGHT_WIDE")] # [doc = "Godot enumerator name: `PRESET_RIGHT_WIDE`"] pub const RIGHT_WIDE : Self = Self { ord : 11 } ; # [doc (alias = "PRESET_BOTTOM_WIDE")] # [doc = "Godot enumerator name: `PRESET_BOTTOM_WIDE`"] pub const BOTTOM_WIDE : Self = Self { ord : 12 } ; # [doc (alias = "PRESET_VCENTER_WIDE")] # [doc = "Godot enumerator name: `PRESET_VCENTER_WIDE`"] pub const VCENTER_WIDE : Self = Self { ord : 13 } ; # [doc (alias = "PRESET_HCENTER_WIDE")] # [doc = "Godot enumerator name: `PRESET_HCENTER_WIDE`"] pub const HCENTER_WIDE : Self = Self { ord : 14 } ; # [doc (alias = "PRESET_FULL_RECT")] # [doc = "Godot enumerator name: `PRESET_FULL_RECT`"] pub const FULL_RECT : Self = Self { ord : 15 } ; # [allow (unreachable_patterns)] fn enumerator_name (self) -> Option < & 'static str > { match self { Self :: TOP_LEFT => Some ("TOP_LEFT") , Self :: TOP_RIGHT => Some ("TOP_RIGHT") , Self :: BOTTOM_LEFT => Some ("BOTTOM_LEFT") , Self :: BOTTOM_RIGHT => Some ("BOTTOM_RIGHT") , Self :: CENTER_LEFT => Some ("CENTER_LEFT") , Self :: CENTER_TOP => Some ("CENTER_TOP") , Self :: CENTER_RIGHT => Some ("CENTER_RIGHT") , Self :: CENTER_BOTTOM => Some ("CENTER_BOTTOM") , Self :: CENTER => Some ("CENTER") , Self :: LEFT_WIDE => Some ("LEFT_WIDE") , Self :: TOP_WIDE => Some ("TOP_WIDE") , Self :: RIGHT_WIDE => Some ("RIGHT_WIDE") , Self :: BOTTOM_WIDE => Some ("BOTTOM_WIDE") , Self :: VCENTER_WIDE => Some ("VCENTER_WIDE") , Self :: HCENTER_WIDE => Some ("HCENTER_WIDE") , Self :: FULL_RECT => Some ("FULL_RECT") , _ => None , } } } impl std :: fmt :: Debug for LayoutPreset { fn fmt (& self , f : & mut std :: fmt :: Formatter < '_ >) -> std :: fmt :: Result { match self . enumerator_name () { Some (enumerator) => f . write_str (enumerator) , None => f . debug_struct (stringify ! (LayoutPreset)) . field ("ord" , & self . ord) . finish () , } } } impl crate :: obj :: EngineEnum for LayoutPreset { fn try_from_ord (ord : i32) -> Option < Self > { match ord { 0 | 1 | 2 | 3 | 4 | 5 | 6 | 7 | 8 | 9 | 10 | 11 | 12 | 13 | 14 | 15 => Some (Self { ord }) , _ => None , } } fn ord (self) -> i32 { self . ord } } impl crate :: meta :: GodotConvert for LayoutPreset { type Via = i32 ; } impl crate :: meta :: ToGodot for LayoutPreset { fn to_godot (& self) -> Self :: Via { < Self as crate :: obj :: EngineEnum > :: ord (* self) } } impl crate :: meta :: FromGodot for LayoutPreset { fn try_from_godot (via : Self :: Via) -> std :: result :: Result < Self , crate :: meta :: ConvertError > { Ok (Self { ord : via }) } } # [repr (transparent)] # [derive (Copy , Clone , Eq , PartialEq , Hash ,)] pub struct LayoutPresetMode { ord : i32 } impl LayoutPresetMode { # [doc (alias = "PRESET_MODE_MINSIZE")] # [doc = "Godot enumerator name: `PRESET_MODE_MINSIZE`"] pub const MINSIZE : Self = Self { ord : 0 } ; # [doc (alias = "PRESET_MODE_KEEP_WIDTH")] # [doc = "Godot enumerator name: `PRESET_MODE_KEEP_WIDTH`"] pub const KEEP_WIDTH : Self = Self { ord : 1 } ; # [doc (alias = "PRESET_MODE_KEEP_HEIGHT")] # [doc = "Godot enumerator name: `PRESET_MODE_KEEP_HEIGHT`"] pub const KEEP_HEIGHT : Self = Self { ord : 2 } ; # [doc (alias = "PRESET_MODE_KEEP_SIZE")] # [doc = "Godot enumerator name: `PRESET_MODE_KEEP_SIZE`"] pub const KEEP_SIZE : Self = Self { ord : 3 } ; # [allow (unreachable_patterns)] fn enumerator_name (self) -> Option < & 'static str > { match self { Self :: MINSIZE => Some ("MINSIZE") , Self :: KEEP_WIDTH => Some ("KEEP_WIDTH") , Self :: KEEP_HEIGHT => Some ("KEEP_HEIGHT") , Self :: KEEP_SIZE => Some ("KEEP_SIZE") , _ => None , } } } impl std :: fmt :: Debug for LayoutPresetMode { fn fmt (& self , f : & mut std :: fmt :: Formatter < '_ >) -> std :: fmt :: Result { match self . enumerator_name () { Some (enumerator) => f . write_str (enumerator) , None => f . debug_struct (stringify ! (LayoutPresetMode)) . field ("ord" , & self . ord) . finish () , } } } impl crate :: obj :: EngineEnum for LayoutPresetMode { fn try_from_ord (ord : i32) -> Option < Self > { match ord { 0 | 1 | 2 | 3 => Some (Self { ord }) , _ => None , } } fn ord (self) -> i32 { self . ord } } impl crate :: meta :: GodotConvert for LayoutPresetMode { type Via = i32 ; } impl crate :: meta :: ToGodot for LayoutPresetMode { fn to_godot (& self) -> Self :: Via { < Self as crate :: obj :: EngineEnum > :: ord (* self) } } impl crate :: meta :: FromGodot for LayoutPresetMode { fn try_from_godot (via : Self :: Via) -> std :: result :: Result < Self , crate :: meta :: ConvertError > { Ok (Self { ord : via }) } } # [repr (transparent)] # [derive (Copy , Clone , Eq , PartialEq , Hash , Default ,)] pub struct SizeFlags { ord : u64 } impl SizeFlags { # [doc (alias = "SIZE_SHRINK_BEGIN")] # [doc = "Godot enumerator name: `SIZE_SHRINK_BEGIN`"] pub const SHRINK_BEGIN : Self = Self { ord : 0 } ; # [doc (alias = "SIZE_FILL")] # [doc = "Godot enumerator name: `SIZE_FILL`"] pub const FILL : Self = Self { ord : 1 } ; # [doc (alias = "SIZE_EXPAND")] # [doc = "Godot enumerator name: `SIZE_EXPAND`"] pub const EXPAND : Self = Self { ord : 2 } ; # [doc (alias = "SIZE_EXPAND_FILL")] # [doc = "Godot enumerator name: `SIZE_EXPAND_FILL`"] pub const EXPAND_FILL : Self = Self { ord : 3 } ; # [doc (alias = "SIZE_SHRINK_CENTER")] # [doc = "Godot enumerator name: `SIZE_SHRINK_CENTER`"] pub const SHRINK_CENTER : Self = Self { ord : 4 } ; # [doc (alias = "SIZE_SHRINK_END")] # [doc = "Godot enumerator name: `SIZE_SHRINK_END`"] pub const SHRINK_END : Self = Self { ord : 8 } ; # [allow (unreachable_patterns)] fn enumerator_name (self) -> Option < & 'static str > { match self { Self :: SHRINK_BEGIN => Some ("SHRINK_BEGIN") , Self :: FILL => Some ("FILL") , Self :: EXPAND => Some ("EXPAND") , Self :: EXPAND_FILL => Some ("EXPAND_FILL") , Self :: SHRINK_CENTER => Some ("SHRINK_CENTER") , Self :: SHRINK_END => Some ("SHRINK_END") , _ => None , } } } impl std :: fmt :: Debug for SizeFlags { fn fmt (& self , f : & mut std :: fmt :: Formatter < '_ >) -> std :: fmt :: Result { match self . enumerator_name () { Some (enumerator) => f . write_str (enumerator) , None => f . debug_struct (stringify ! (SizeFlags)) . field ("ord" , & self . ord) . finish () , } } } impl crate :: obj :: EngineBitfield for SizeFlags { fn try_from_ord (ord : u64) -> Option < Self > { Some (Self { ord }) } fn ord (self) -> u64 { self . ord } } impl std :: ops :: BitOr for SizeFlags { type Output = Self ; fn bitor (self , rhs : Self) -> Self :: Output { Self { ord : self . ord | rhs . ord } } } impl std :: ops :: BitOrAssign for SizeFlags { fn bitor_assign (& mut self , rhs : Self) { * self = * self | rhs ; } } impl crate :: meta :: GodotConvert for SizeFlags { type Via = u64 ; } impl crate :: meta :: ToGodot for SizeFlags { fn to_godot (& self) -> Self :: Via { < Self as crate :: obj :: EngineBitfield > :: ord (* self) } } impl crate :: meta :: FromGodot for SizeFlags { fn try_from_godot (via : Self :: Via) -> std :: result :: Result < Self , crate :: meta :: ConvertError > { Ok (Self { ord : via }) } } # [repr (transparent)] # [derive (Copy , Clone , Eq , PartialEq , Hash ,)] pub struct MouseFilter { ord : i32 } impl MouseFilter { # [doc (alias = "MOUSE_FILTER_STOP")] # [doc = "Godot enumerator name: `MOUSE_FILTER_STOP`"] pub const STOP : Self = Self { ord : 0 } ; # [doc (alias = "MOUSE_FILTER_PASS")] # [doc = "Godot enumerator name: `MOUSE_FILTER_PASS`"] pub const PASS : Self = Self { ord : 1 } ; # [doc (alias = "MOUSE_FILTER_IGNORE")] # [doc = "Godot enumerator name: `MOUSE_FILTER_IGNORE`"] pub const IGNORE : Self = Self { ord : 2 } ; # [allow (unreachable_patterns)] fn enumerator_name (self) -> Option < & 'static str > { match self { Self :: STOP => Some ("STOP") , Self :: PASS => Some ("PASS") , Self :: IGNORE => Some ("IGNORE") , _ => None , } } } impl std :: fmt :: Debug for MouseFilter { fn fmt (& self , f : & mut std :: fmt :: Formatter < '_ >) -> std :: fmt :: Result { match self . enumerator_name () { Some (enumerator) => f . write_str (enumerator) , None => f . debug_struct (stringify ! (MouseFilter)) . field ("ord" , & self . ord) . finish () , } } } impl crate :: obj :: EngineEnum for MouseFilter { fn try_from_ord (ord : i32) -> Option < Self > { match ord { 0 | 1 | 2 => Some (Self { ord }) , _ => None , } } fn ord (self) -> i32 { self . ord } } impl crate :: meta :: GodotConvert for MouseFilter { type Via = i32 ; } impl crate :: meta :: ToGodot for MouseFilter { fn to_godot (& self) -> Self :: Via { < Self as crate :: obj :: EngineEnum > :: ord (* self) } } impl crate :: meta :: FromGodot for MouseFilter { fn try_from_godot (via : Self :: Via) -> std :: result :: Result < Self , crate :: meta :: ConvertError > { Ok (Self { ord : via }) } } # [repr (transparent)] # [derive (Copy , Clone , Eq , PartialEq , Hash ,)] pub struct GrowDirection { ord : i32 } impl GrowDirection { # [doc (alias = "GROW_DIRECTION_BEGIN")] # [doc = "Godot enumerator name: `GROW_DIRECTION_BEGIN`"] pub const BEGIN : Self = Self { ord : 0 } ; # [doc (alias = "GROW_DIRECTION_END")] # [doc = "Godot enumerator name: `GROW_DIRECTION_END`"] pub const END : Self = Self { ord : 1 } ; # [doc (alias = "GROW_DIRECTION_BOTH")] # [doc = "Godot enumerator name: `GROW_DIRECTION_BOTH`"] pub const BOTH : Self = Self { ord : 2 } ; # [allow (unreachable_patterns)] fn enumerator_name (self) -> Option < & 'static str > { match self { Self :: BEGIN => Some ("BEGIN") , Self :: END => Some ("END") , Self :: BOTH => Some ("BOTH") , _ => None , } } } impl std :: fmt :: Debug for GrowDirection { fn fmt (& self , f : & mut std :: fmt :: Formatter < '_ >) -> std :: fmt :: Result { match self . enumerator_name () { Some (enumerator) => f . write_str (enumerator) , None => f . debug_struct (stringify ! (GrowDirection)) . field ("ord" , & self . ord) . finish () , } } } impl crate :: obj :: EngineEnum for GrowDirection { fn try_from_ord (ord : i32) -> Option < Self > { match ord { 0 | 1 | 2 => Some (Self { ord }) , _ => None , } } fn ord (self) -> i32 { self . ord } } impl crate :: meta :: GodotConvert for GrowDirection { type Via = i32 ; } impl crate :: meta :: ToGodot for GrowDirection { fn to_godot (& self) -> Self :: Via { < Self as crate :: obj :: EngineEnum > :: ord (* self) } } impl crate :: meta :: FromGodot for GrowDirection { fn try_from_godot (via : Self :: Via) -> std :: result :: Result < Self , crate :: meta :: ConvertError > { Ok (Self { ord : via }) } } # [repr (transparent)] # [derive (Copy , Clone , Eq , PartialEq , Hash ,)] pub struct Anchor { ord : i32 } impl Anchor { # [doc (alias = "ANCHOR_BEGIN")] # [doc = "Godot enumerator name: `ANCHOR_BEGIN`"] pub const BEGIN : Self = Self { ord : 0 } ; # [doc (alias = "ANCHOR_END")] # [doc = "Godot enumerator name: `ANCHOR_END`"] pub const END : Self = Self { ord : 1 } ; # [allow (unreachable_patterns)] fn enumerator_name (self) -> Option < & 'static str > { match self { Self :: BEGIN => Some ("BEGIN") , Self :: END => Some ("END") , _ => None , } } } impl std :: fmt :: Debug for Anchor { fn fmt (& self , f : & mut std :: fmt :: Formatter < '_ >) -> std :: fmt :: Result { match self . enumerator_name () { Some (enumerator) => f . write_str (enumerator) , None => f . debug_struct (stringify ! (Anchor)) . field ("ord" , & self . ord) . finish () , } } } impl crate :: obj :: EngineEnum for Anchor { fn try_from_ord (ord : i32) -> Option < Self > { match ord { 0 | 1 => Some (Self { ord }) , _ => None , } } fn ord (self) -> i32 { self . ord } } impl crate :: meta :: GodotConvert for Anchor { type Via = i32 ; } impl crate :: meta :: ToGodot for Anchor { fn to_godot (& self) -> Self :: Via { < Self as crate :: obj :: EngineEnum > :: ord (* self) } } impl crate :: meta :: FromGodot for Anchor { fn try_from_godot (via : Self :: Via) -> std :: result :: Result < Self , crate :: meta :: ConvertError > { Ok (Self { ord : via }) } } # [repr (transparent)] # [derive (Copy , Clone , Eq , PartialEq , Hash ,)] pub struct LayoutDirection { ord : i32 } impl LayoutDirection { # [doc (alias = "LAYOUT_DIRECTION_INHERITED")] # [doc = "Godot enumerator name: `LAYOUT_DIRECTION_INHERITED`"] pub const INHERITED : Self = Self { ord : 0 } ; # [doc (alias = "LAYOUT_DIRECTION_LOCALE")] # [doc = "Godot enumerator name: `LAYOUT_DIRECTION_LOCALE`"] pub const LOCALE : Self = Self { ord : 1 } ; # [doc (alias = "LAYOUT_DIRECTION_LTR")] # [doc = "Godot enumerator name: `LAYOUT_DIRECTION_LTR`"] pub const LTR : Self = Self { ord : 2 } ; # [doc (alias = "LAYOUT_DIRECTION_RTL")] # [doc = "Godot enumerator name: `LAYOUT_DIRECTION_RTL`"] pub const RTL : Self = Self { ord : 3 } ; # [allow (unreachable_patterns)] fn enumerator_name (self) -> Option < & 'static str > { match self { Self :: INHERITED => Some ("INHERITED") , Self :: LOCALE => Some ("LOCALE") , Self :: LTR => Some ("LTR") , Self :: RTL => Some ("RTL") , _ => None , } } } impl std :: fmt :: Debug for LayoutDirection { fn fmt (& self , f : & mut std :: fmt :: Formatter < '_ >) -> std :: fmt :: Result { match self . enumerator_name () { Some (enumerator) => f . write_str (enumerator) , None => f . debug_struct (stringify ! (LayoutDirection)) . field ("ord" , & self . ord) . finish () , } } } impl crate :: obj :: EngineEnum for LayoutDirection { fn try_from_ord (ord : i32) -> Option < Self > { match ord { 0 | 1 | 2 | 3 => Some (Self { ord }) , _ => None , } } fn ord (self) -> i32 { self . ord } } impl crate :: meta :: GodotConvert for LayoutDirection { type Via = i32 ; } impl crate :: meta :: ToGodot for LayoutDirection { fn to_godot (& self) -> Self :: Via { < Self as crate :: obj :: EngineEnum > :: ord (* self) } } impl crate :: meta :: FromGodot for LayoutDirection { fn try_from_godot (via : Self :: Via) -> std :: result :: Result < Self , crate :: meta :: ConvertError > { Ok (Self { ord : via }) } } # [repr (transparent)] # [derive (Copy , Clone , Eq , PartialEq , Hash ,)] pub struct TextDirection { ord : i32 } impl TextDirection { # [doc (alias = "TEXT_DIRECTION_INHERITED")] # [doc = "Godot enumerator name: `TEXT_DIRECTION_INHERITED`"] pub const INHERITED : Self = Self { ord : 3 } ; # [doc (alias = "TEXT_DIRECTION_AUTO")] # [doc = "Godot enumerator name: `TEXT_DIRECTION_AUTO`"] pub const AUTO : Self = Self { ord : 0 } ; # [doc (alias = "TEXT_DIRECTION_LTR")] # [doc = "Godot enumerator name: `TEXT_DIRECTION_LTR`"] pub const LTR : Self = Self { ord : 1 } ; # [doc (alias = "TEXT_DIRECTION_RTL")] # [doc = "Godot enumerator name: `TEXT_DIRECTION_RTL`"] pub const RTL : Self = Self { ord : 2 } ; # [allow (unreachable_patterns)] fn enumerator_name (self) -> Option < & 'static str > { match self { Self :: INHERITED => Some ("INHERITED") , Self :: AUTO => Some ("AUTO") , Self :: LTR => Some ("LTR") , Self :: RTL => Some ("RTL") , _ => None , } } } impl std :: fmt :: Debug for TextDirection { fn fmt (& self , f : & mut std :: fmt :: Formatter < '_ >) -> std :: fmt :: Result { match self . enumerator_name () { Some (enumerator) => f . write_str (enumerator) , None => f . debug_struct (stringify ! (TextDirection)) . field ("ord" , & self . ord) . finish () , } } } impl crate :: obj :: EngineEnum for TextDirection { fn try_from_ord (ord : i32) -> Option < Self > { match ord { 0 | 1 | 2 | 3 => Some (Self { ord }) , _ => None , } } fn ord (self) -> i32 { self . ord } } impl crate :: meta :: GodotConvert for TextDirection { type Via = i32 ; } impl crate :: meta :: ToGodot for TextDirection { fn to_godot (& self) -> Self :: Via { < Self as crate :: obj :: EngineEnum > :: ord (* self) } } impl crate :: meta :: FromGodot for TextDirection { fn try_from_godot (via : Self :: Via) -> std :: result :: Result < Self , crate :: meta :: ConvertError > { Ok (Self { ord : via }) } } # [doc = "Properties declared by [`Control`][super::Control], as interned engine names."] pub struct PropertyName ; impl PropertyName { pub const CLIP_CONTENTS : InternedName = InternedName :: new ("clip_contents") ; pub const CUSTOM_MINIMUM_SIZE : InternedName = InternedName :: new ("custom_minimum_size") ; pub const LAYOUT_DIRECTION : InternedName = InternedName :: new ("layout_direction") ; pub const LAYOUT_MODE : InternedName = InternedName :: new ("layout_mode") ; pub const ANCHORS_PRESET : InternedName = InternedName :: new ("anchors_preset") ; pub const ANCHOR_LEFT : InternedName = InternedName :: new ("anchor_left") ; pub const ANCHOR_TOP : InternedName = InternedName :: new ("anchor_top") ; pub const ANCHOR_RIGHT : InternedName = InternedName :: new ("anchor_right") ; pub const ANCHOR_BOTTOM : InternedName = InternedName :: new ("anchor_bottom") ; pub const OFFSET_LEFT : InternedName = InternedName :: new ("offset_left") ; pub const OFFSET_TOP : InternedName = InternedName :: new ("offset_top") ; pub const OFFSET_RIGHT : InternedName = InternedName :: new ("offset_right") ; pub const OFFSET_BOTTOM : InternedName = InternedName :: new ("offset_bottom") ; pub const GROW_HORIZONTAL : InternedName = InternedName :: new ("grow_horizontal") ; pub const GROW_VERTICAL : InternedName = InternedName :: new ("grow_vertical") ; pub const SIZE : InternedName = InternedName :: new ("size") ; pub const POSITION : InternedName = InternedName :: new ("position") ; pub const GLOBAL_POSITION : InternedName = InternedName :: new ("global_position") ; pub const ROTATION : InternedName = InternedName :: new ("rotation") ; pub const ROTATION_DEGREES : InternedName = InternedName :: new ("rotation_degrees") ; pub const SCALE : InternedName = InternedName :: new ("scale") ; pub const PIVOT_OFFSET : InternedName = InternedName :: new ("pivot_offset") ; pub const SIZE_FLAGS_HORIZONTAL : InternedName = InternedName :: new ("size_flags_horizontal") ; pub const SIZE_FLAGS_VERTICAL : InternedName = InternedName :: new ("size_flags_vertical") ; pub const SIZE_FLAGS_STRETCH_RATIO : InternedName = InternedName :: new ("size_flags_stretch_ratio") ; pub const LOCALIZE_NUMERAL_SYSTEM : InternedName = InternedName :: new ("localize_numeral_system") ; pub const AUTO_TRANSLATE : InternedName = InternedName :: new ("auto_translate") ; pub const TOOLTIP_TEXT : InternedName = InternedName :: new ("tooltip_text") ; pub const FOCUS_NEIGHBOR_LEFT : InternedName = InternedName :: new ("focus_neighbor_left") ; pub const FOCUS_NEIGHBOR_TOP : InternedName = InternedName :: new ("focus_neighbor_top") ; pub const FOCUS_NEIGHBOR_RIGHT : InternedName = InternedName :: new ("focus_neighbor_right") ; pub const FOCUS_NEIGHBOR_BOTTOM : InternedName = InternedName :: new ("focus_neighbor_bottom") ; pub const FOCUS_NEXT : InternedName = InternedName :: new ("focus_next") ; pub const FOCUS_PREVIOUS : InternedName = InternedName :: new ("focus_previous") ; pub const FOCUS_MODE : InternedName = InternedName :: new ("focus_mode") ; pub const MOUSE_FILTER : InternedName = InternedName :: new ("mouse_filter") ; pub const MOUSE_FORCE_PASS_SCROLL_EVENTS : InternedName = InternedName :: new ("mouse_force_pass_scroll_events") ; pub const MOUSE_DEFAULT_CURSOR_SHAPE : InternedName = InternedName :: new ("mouse_default_cursor_shape") ; pub const SHORTCUT_CONTEXT : InternedName = InternedName :: new ("shortcut_context") ; pub const THEME : InternedName = InternedName :: new ("theme") ; pub const THEME_TYPE_VARIATION : InternedName = InternedName :: new ("theme_type_variation") ; } # [doc = "Methods declared by [`Control`][super::Control], as interned engine names."] pub struct MethodName ; impl MethodName { pub const ACCEPT_EVENT : InternedName = InternedName :: new ("accept_event") ; pub const GET_MINIMUM_SIZE : InternedName = InternedName :: new ("get_minimum_size") ; pub const GET_COMBINED_MINIMUM_SIZE : InternedName = InternedName :: new ("get_combined_minimum_size") ; pub const SET_ANCHORS_PRESET : InternedName = InternedName :: new ("set_anchors_preset") ; pub const SET_OFFSETS_PRESET : InternedName = InternedName :: new ("set_offsets_preset") ; pub const SET_ANCHORS_AND_OFFSETS_PRESET : InternedName = InternedName :: new ("set_anchors_and_offsets_preset") ; pub const SET_ANCHOR : InternedName = InternedName :: new ("set_anchor") ; pub const GET_ANCHOR : InternedName = InternedName :: new ("get_anchor") ; pub const SET_OFFSET : InternedName = InternedName :: new ("set_offset") ; pub const GET_OFFSET : InternedName = InternedName :: new ("get_offset") ; pub const SET_ANCHOR_AND_OFFSET : InternedName = InternedName :: new ("set_anchor_and_offset") ; pub const SET_BEGIN : InternedName = InternedName :: new ("set_begin") ; pub const SET_END : InternedName = InternedName :: new ("set_end") ; pub const SET_POSITION : InternedName = InternedName :: new ("set_position") ; pub const SET_SIZE : InternedName = InternedName :: new ("set_size") ; pub const RESET_SIZE : InternedName = InternedName :: new ("reset_size") ; pub const SET_CUSTOM_MINIMUM_SIZE : InternedName = InternedName :: new ("set_custom_minimum_size") ; pub const SET_GLOBAL_POSITION : InternedName = InternedName :: new ("set_global_position") ; pub const SET_ROTATION : InternedName = InternedName :: new ("set_rotation") ; pub const SET_ROTATION_DEGREES : InternedName = InternedName :: new ("set_rotation_degrees") ; pub const SET_SCALE : InternedName = InternedName :: new ("set_scale") ; pub const SET_PIVOT_OFFSET : InternedName = InternedName :: new ("set_pivot_offset") ; pub const GET_BEGIN : InternedName = InternedName :: new ("get_begin") ; pub const GET_END : InternedName = InternedName :: new ("get_end") ; pub const GET_POSITION : InternedName = InternedName :: new ("get_position") ; pub const GET_SIZE : InternedName = InternedName :: new ("get_size") ; pub const GET_ROTATION : InternedName = InternedName :: new ("get_rotation") ; pub const GET_ROTATION_DEGREES : InternedName = InternedName :: new ("get_rotation_degrees") ; pub const GET_SCALE : InternedName = InternedName :: new ("get_scale") ; pub const GET_PIVOT_OFFSET : InternedName = InternedName :: new ("get_pivot_offset") ; pub const GET_CUSTOM_MINIMUM_SIZE : InternedName = InternedName :: new ("get_custom_minimum_size") ; pub const GET_PARENT_AREA_SIZE : InternedName = InternedName :: new ("get_parent_area_size") ; pub const GET_GLOBAL_POSITION : InternedName = InternedName :: new ("get_global_position") ; pub const GET_SCREEN_POSITION : InternedName = InternedName :: new ("get_screen_position") ; pub const GET_RECT : InternedName = InternedName :: new ("get_rect") ; pub const GET_GLOBAL_RECT : InternedName = InternedName :: new ("get_global_rect") ; pub const SET_FOCUS_MODE : InternedName = InternedName :: new ("set_focus_mode") ; pub const GET_FOCUS_MODE : InternedName = InternedName :: new ("get_focus_mode") ; pub const HAS_FOCUS : InternedName = InternedName :: new ("has_focus") ; pub const GRAB_FOCUS : InternedName = InternedName :: new ("grab_focus") ; pub const RELEASE_FOCUS : InternedName = InternedName :: new ("release_focus") ; pub const FIND_PREV_VALID_FOCUS : InternedName = InternedName :: new ("find_prev_valid_focus") ; pub const FIND_NEXT_VALID_FOCUS : InternedName = InternedName :: new ("find_next_valid_focus") ; pub const FIND_VALID_FOCUS_NEIGHBOR : InternedName = InternedName :: new ("find_valid_focus_neighbor") ; pub const SET_H_SIZE_FLAGS : InternedName = InternedName :: new ("set_h_size_flags") ; pub const GET_H_SIZE_FLAGS : InternedName = InternedName :: new ("get_h_size_flags") ; pub const SET_STRETCH_RATIO : InternedName = InternedName :: new ("set_stretch_ratio") ; pub const GET_STRETCH_RATIO : InternedName = InternedName :: new ("get_stretch_ratio") ; pub const SET_V_SIZE_FLAGS : InternedName = InternedName :: new ("set_v_size_flags") ; pub const GET_V_SIZE_FLAGS : InternedName = InternedName :: new ("get_v_size_flags") ; pub const SET_THEME : InternedName = InternedName :: new ("set_theme") ; pub const GET_THEME : InternedName = InternedName :: new ("get_theme") ; pub const SET_THEME_TYPE_VARIATION : InternedName = InternedName :: new ("set_theme_type_variation") ; pub const GET_THEME_TYPE_VARIATION : InternedName = InternedName :: new ("get_theme_type_variation") ; pub const BEGIN_BULK_THEME_OVERRIDE : InternedName = InternedName :: new ("begin_bulk_theme_override") ; pub const END_BULK_THEME_OVERRIDE : InternedName = InternedName :: new ("end_bulk_theme_override") ; pub const ADD_THEME_ICON_OVERRIDE : InternedName = InternedName :: new ("add_theme_icon_override") ; pub const ADD_THEME_FONT_OVERRIDE : InternedName = InternedName :: new ("add_theme_font_override") ; pub const ADD_THEME_FONT_SIZE_OVERRIDE : InternedName = InternedName :: new ("add_theme_font_size_override") ; pub const ADD_THEME_COLOR_OVERRIDE : InternedName = InternedName :: new ("add_theme_color_override") ; pub const ADD_THEME_CONSTANT_OVERRIDE : InternedName = InternedName :: new ("add_theme_constant_override") ; pub const REMOVE_THEME_ICON_OVERRIDE : InternedName = InternedName :: new ("remove_theme_icon_override") ; pub const REMOVE_THEME_STYLEBOX_OVERRIDE : InternedName = InternedName :: new ("remove_theme_stylebox_override") ; pub const REMOVE_THEME_FONT_OVERRIDE : InternedName = InternedName :: new ("remove_theme_font_override") ; pub const REMOVE_THEME_FONT_SIZE_OVERRIDE : InternedName = InternedName :: new ("remove_theme_font_size_override") ; pub const REMOVE_THEME_COLOR_OVERRIDE : InternedName = InternedName :: new ("remove_theme_color_override") ; pub const REMOVE_THEME_CONSTANT_OVERRIDE : InternedName = InternedName :: new ("remove_theme_constant_override") ; pub const GET_THEME_ICON : InternedName = InternedName :: new ("get_theme_icon") ; pub const GET_THEME_FONT : InternedName = InternedName :: new ("get_theme_font") ; pub const GET_THEME_FONT_SIZE : InternedName = InternedName :: new ("get_theme_font_size") ; pub const GET_THEME_COLOR : InternedName = InternedName :: new ("get_theme_color") ; pub const GET_THEME_CONSTANT : InternedName = InternedName :: new ("get_theme_constant") ; pub const HAS_THEME_ICON_OVERRIDE : InternedName = InternedName :: new ("has_theme_icon_override") ; pub const HAS_THEME_STYLEBOX_OVERRIDE : InternedName = InternedName :: new ("has_theme_stylebox_override") ; pub const HAS_THEME_FONT_OVERRIDE : InternedName = InternedName :: new ("has_theme_font_override") ; pub const HAS_THEME_FONT_SIZE_OVERRIDE : InternedName = InternedName :: new ("has_theme_font_size_override") ; pub const HAS_THEME_COLOR_OVERRIDE : InternedName = InternedName :: new ("has_theme_color_override") ; pub const HAS_THEME_CONSTANT_OVERRIDE : InternedName = InternedName :: new ("has_theme_constant_override") ; pub const HAS_THEME_ICON : InternedName = InternedName :: new ("has_theme_icon") ; pub const HAS_THEME_STYLEBOX : InternedName = InternedName :: new ("has_theme_stylebox") ; pub const HAS_THEME_FONT : InternedName = InternedName :: new ("has_theme_font") ; pub const HAS_THEME_FONT_SIZE : InternedName = InternedName :: new ("has_theme_font_size") ; pub const HAS_THEME_COLOR : InternedName = InternedName :: new ("has_theme_color") ; pub const HAS_THEME_CONSTANT : InternedName = InternedName :: new ("has_theme_constant") ; pub const GET_THEME_DEFAULT_BASE_SCALE : InternedName = InternedName :: new ("get_theme_default_base_scale") ; pub const GET_THEME_DEFAULT_FONT : InternedName = InternedName :: new ("get_theme_default_font") ; pub const GET_THEME_DEFAULT_FONT_SIZE : InternedName = InternedName :: new ("get_theme_default_font_size") ; pub const GET_PARENT_CONTROL : InternedName = InternedName :: new ("get_parent_control") ; pub const SET_H_GROW_DIRECTION : InternedName = InternedName :: new ("set_h_grow_direction") ; pub const GET_H_GROW_DIRECTION : InternedName = InternedName :: new ("get_h_grow_direction") ; pub const SET_V_GROW_DIRECTION : InternedName = InternedName :: new ("set_v_grow_direction") ; pub const GET_V_GROW_DIRECTION : InternedName = InternedName :: new ("get_v_grow_direction") ; pub const SET_TOOLTIP_TEXT : InternedName = InternedName :: new ("set_tooltip_text") ; pub const GET_TOOLTIP_TEXT : InternedName = InternedName :: new ("get_tooltip_text") ; pub const GET_TOOLTIP : InternedName = InternedName :: new ("get_tooltip") ; pub const SET_DEFAULT_CURSOR_SHAPE : InternedName = InternedName :: new ("set_default_cursor_shape") ; pub const GET_DEFAULT_CURSOR_SHAPE : InternedName = InternedName :: new ("get_default_cursor_shape") ; pub const GET_CURSOR_SHAPE : InternedName = InternedName :: new ("get_cursor_shape") ; pub const SET_FOCUS_NEIGHBOR : InternedName = InternedName :: new ("set_focus_neighbor") ; pub const GET_FOCUS_NEIGHBOR : InternedName = InternedName :: new ("get_focus_neighbor") ; pub const SET_FOCUS_NEXT : InternedName = InternedName :: new ("set_focus_next") ; pub const GET_FOCUS_NEXT : InternedName = InternedName :: new ("get_focus_next") ; pub const SET_FOCUS_PREVIOUS : InternedName = InternedName :: new ("set_focus_previous") ; pub const GET_FOCUS_PREVIOUS : InternedName = InternedName :: new ("get_focus_previous") ; pub const FORCE_DRAG : InternedName = InternedName :: new ("force_drag") ; pub const SET_MOUSE_FILTER : InternedName = InternedName :: new ("set_mouse_filter") ; pub const GET_MOUSE_FILTER : InternedName = InternedName :: new ("get_mouse_filter") ; pub const SET_FORCE_PASS_SCROLL_EVENTS : InternedName = InternedName :: new ("set_force_pass_scroll_events") ; pub const IS_FORCE_PASS_SCROLL_EVENTS : InternedName = InternedName :: new ("is_force_pass_scroll_events") ; pub const SET_CLIP_CONTENTS : InternedName = InternedName :: new ("set_clip_contents") ; pub const IS_CLIPPING_CONTENTS : InternedName = InternedName :: new ("is_clipping_contents") ; pub const GRAB_CLICK_FOCUS : InternedName = InternedName :: new ("grab_click_focus") ; pub const SET_DRAG_FORWARDING : InternedName = InternedName :: new ("set_drag_forwarding") ; pub const SET_DRAG_PREVIEW : InternedName = InternedName :: new ("set_drag_preview") ; pub const IS_DRAG_SUCCESSFUL : InternedName = InternedName :: new ("is_drag_successful") ; pub const WARP_MOUSE : InternedName = InternedName :: new ("warp_mouse") ; pub const SET_SHORTCUT_CONTEXT : InternedName = InternedName :: new ("set_shortcut_context") ; pub const GET_SHORTCUT_CONTEXT : InternedName = InternedName :: new ("get_shortcut_context") ; pub const UPDATE_MINIMUM_SIZE : InternedName = InternedName :: new ("update_minimum_size") ; pub const SET_LAYOUT_DIRECTION : InternedName = InternedName :: new ("set_layout_direction") ; pub const GET_LAYOUT_DIRECTION : InternedName = InternedName :: new ("get_layout_direction") ; pub const IS_LAYOUT_RTL : InternedName = InternedName :: new ("is_layout_rtl") ; pub const SET_AUTO_TRANSLATE : InternedName = InternedName :: new ("set_auto_translate") ; pub const IS_AUTO_TRANSLATING : InternedName = InternedName :: new ("is_auto_translating") ; pub const SET_LOCALIZE_NUMERAL_SYSTEM : InternedName = InternedName :: new ("set_localize_numeral_system") ; pub const IS_LOCALIZING_NUMERAL_SYSTEM : InternedName = InternedName :: new ("is_localizing_numeral_system") ; } # [doc = "Signals declared by [`Control`][super::Control], as interned engine names."] pub struct SignalName ; impl SignalName { pub const RESIZED : InternedName = InternedName :: new ("resized") ; pub const GUI_INPUT : InternedName = InternedName :: new ("gui_input") ; pub const MOUSE_ENTERED : InternedName = InternedName :: new ("mouse_entered") ; pub const MOUSE_EXITED : InternedName = InternedName :: new ("mouse_exited") ; pub const FOCUS_ENTERED : InternedName = InternedName :: new ("focus_entered") ; pub const FOCUS_EXITED : InternedName = InternedName :: new ("focus_exited") ; pub const SIZE_FLAGS_CHANGED : InternedName = InternedName :: new ("size_flags_changed") ; pub const MINIMUM_SIZE_CHANGED : InternedName = InternedName :: new ("minimum_size_changed") ; pub const THEME_CHANGED : InternedName = InternedName :: new ("theme_changed") ; } # [doc = "A collection of signals for the [`Control`][crate::classes::Control] class."] pub struct SignalsOfControl < 'c > { __base : crate :: classes :: canvas_item :: SignalsOfCanvasItem < 'c > , } impl < 'c > SignalsOfControl < 'c > { # [doc (hidden)] pub fn __new (object : SignalObject < 'c >) -> Self { Self { __base : crate :: classes :: canvas_item :: SignalsOfCanvasItem :: __new (object) } } # [doc (hidden)] pub fn __object (& self) -> SignalObject < 'c > { self . __base . __object () } # [doc = "Signature: `()`"] pub fn resized (& mut self) -> SigResized < 'c > { SigResized { typed : TypedSignal :: __new (self . __object () , "resized") , } } # [doc = "Signature: `(event: Option<Gd<InputEvent>>)`"] pub fn gui_input (& mut self) -> SigGuiInput < 'c > { SigGuiInput { typed : TypedSignal :: __new (self . __object () , "gui_input") , } } # [doc = "Signature: `()`"] pub fn mouse_entered (& mut self) -> SigMouseEntered < 'c > { SigMouseEntered { typed : TypedSignal :: __new (self . __object () , "mouse_entered") , } } # [doc = "Signature: `()`"] pub fn mouse_exited (& mut self) -> SigMouseExited < 'c > { SigMouseExited { typed : TypedSignal :: __new (self . __object () , "mouse_exited") , } } # [doc = "Signature: `()`"] pub fn focus_entered (& mut self) -> SigFocusEntered < 'c > { SigFocusEntered { typed : TypedSignal :: __new (self . __object () , "focus_entered") , } } # [doc = "Signature: `()`"] pub fn focus_exited (& mut self) -> SigFocusExited < 'c > { SigFocusExited { typed : TypedSignal :: __new (self . __object () , "focus_exited") , } } # [doc = "Signature: `()`"] pub fn size_flags_changed (& mut self) -> SigSizeFlagsChanged < 'c > { SigSizeFlagsChanged { typed : TypedSignal :: __new (self . __object () , "size_flags_changed") , } } # [doc = "Signature: `()`"] pub fn minimum_size_changed (& mut self) -> SigMinimumSizeChanged < 'c > { SigMinimumSizeChanged { typed : TypedSignal :: __new (self . __object () , "minimum_size_changed") , } } # [doc = "Signature: `()`"] pub fn theme_changed (& mut self) -> SigThemeChanged < 'c > { SigThemeChanged { typed : TypedSignal :: __new (self . __object () , "theme_changed") , } } } impl < 'c > std :: ops :: Deref for SignalsOfControl < 'c > { type Target = crate :: classes :: canvas_item :: SignalsOfCanvasItem < 'c > ; fn deref (& self) -> & Self :: Target { & self . __base } } impl std :: ops :: DerefMut for SignalsOfControl < '_ > { fn deref_mut (& mut self) -> & mut Self :: Target { & mut self . __base } } type TypedSigResized < 'c > = TypedSignal < 'c , () > ; pub struct SigResized < 'c > { typed : TypedSigResized < 'c > , } impl SigResized < '_ > { pub fn emit (& mut self ,) { self . typed . emit_tuple (()) ; } } impl < 'c > std :: ops :: Deref for SigResized < 'c > { type Target = TypedSigResized < 'c > ; fn deref (& self) -> & Self :: Target { & self . typed } } impl std :: ops :: DerefMut for SigResized < '_ > { fn deref_mut (& mut self) -> & mut Self :: Target { & mut self . typed } } type TypedSigGuiInput < 'c > = TypedSignal < 'c , (Option < Gd < crate :: classes :: InputEvent > > ,) > ; pub struct SigGuiInput < 'c > { typed : TypedSigGuiInput < 'c > , } impl SigGuiInput < '_ > { pub fn emit (& mut self , event : Option < Gd < crate :: classes :: InputEvent > > ,) { self . typed . emit_tuple ((event ,)) ; } } impl < 'c > std :: ops :: Deref for SigGuiInput < 'c > { type Target = TypedSigGuiInput < 'c > ; fn deref (& self) -> & Self :: Target { & self . typed } } impl std :: ops :: DerefMut for SigGuiInput < '_ > { fn deref_mut (& mut self) -> & mut Self :: Target { & mut self . typed } } type TypedSigMouseEntered < 'c > = TypedSignal < 'c , () > ; pub struct SigMouseEntered < 'c > { typed : TypedSigMouseEntered < 'c > , } impl SigMouseEntered < '_ > { pub fn emit (& mut self ,) { self . typed . emit_tuple (()) ; } } impl < 'c > std :: ops :: Deref for SigMouseEntered < 'c > { type Target = TypedSigMouseEntered < 'c > ; fn deref (& self) -> & Self :: Target { & self . typed } } impl std :: ops :: DerefMut for SigMouseEntered < '_ > { fn deref_mut (& mut self) -> & mut Self :: Target { & mut self . typed } } type TypedSigMouseExited < 'c > = TypedSignal < 'c , () > ; pub struct SigMouseExited < 'c > { typed : TypedSigMouseExited < 'c > , } impl SigMouseExited < '_ > { pub fn emit (& mut self ,) { self . typed . emit_tuple (()) ; } } impl < 'c > std :: ops :: Deref for SigMouseExited < 'c > { type Target = TypedSigMouseExited < 'c > ; fn deref (& self) -> & Self :: Target { & self . typed } } impl std :: ops :: DerefMut for SigMouseExited < '_ > { fn deref_mut (& mut self) -> & mut Self :: Target { & mut self . typed } } type TypedSigFocusEntered < 'c > = TypedSignal < 'c , () > ; pub struct SigFocusEntered < 'c > { typed : TypedSigFocusEntered < 'c > , } impl SigFocusEntered < '_ > { pub fn emit (& mut self ,) { self . typed . emit_tuple (()) ; } } impl < 'c > std :: ops :: Deref for SigFocusEntered < 'c > { type Target = TypedSigFocusEntered < 'c > ; fn deref (& self) -> & Self :: Target { & self . typed } } impl std :: ops :: DerefMut for SigFocusEntered < '_ > { fn deref_mut (& mut self) -> & mut Self :: Target { & mut self . typed } } type TypedSigFocusExited < 'c > = TypedSignal < 'c , () > ; pub struct SigFocusExited < 'c > { typed : TypedSigFocusExited < 'c > , } impl SigFocusExited < '_ > { pub fn emit (& mut self ,) { self . typed . emit_tuple (()) ; } } impl < 'c > std :: ops :: Deref for SigFocusExited < 'c > { type Target = TypedSigFocusExited < 'c > ; fn deref (& self) -> & Self :: Target { & self . typed } } impl std :: ops :: DerefMut for SigFocusExited < '_ > { fn deref_mut (& mut self) -> & mut Self :: Target { & mut self . typed } } type TypedSigSizeFlagsChanged < 'c > = TypedSignal < 'c , () > ; pub struct SigSizeFlagsChanged < 'c > { typed : TypedSigSizeFlagsChanged < 'c > , } impl SigSizeFlagsChanged < '_ > { pub fn emit (& mut self ,) { self . typed . emit_tuple (()) ; } } impl < 'c > std :: ops :: Deref for SigSizeFlagsChanged < 'c > { type Target = TypedSigSizeFlagsChanged < 'c > ; fn deref (& self) -> & Self :: Target { & self . typed } } impl std :: ops :: DerefMut for SigSizeFlagsChanged < '_ > { fn deref_mut (& mut self) -> & mut Self :: Target { & mut self . typed } } type TypedSigMinimumSizeChanged < 'c > = TypedSignal < 'c , () > ; pub struct SigMinimumSizeChanged < 'c > { typed : TypedSigMinimumSizeChanged < 'c > , } impl SigMinimumSizeChanged < '_ > { pub fn emit (& mut self ,) { self . typed . emit_tuple (()) ; } } impl < 'c > std :: ops :: Deref for SigMinimumSizeChanged < 'c > { type Target = TypedSigMinimumSizeChanged < 'c > ; fn deref (& self) -> & Self :: Target { & self . typed } } impl std :: ops :: DerefMut for SigMinimumSizeChanged < '_ > { fn deref_mut (& mut self) -> & mut Self :: Target { & mut self . typed } } type TypedSigThemeChanged < 'c > = TypedSignal < 'c , () > ; pub struct SigThemeChanged < 'c > { typed : TypedSigThemeChanged < 'c > , } impl SigThemeChanged < '_ > { pub fn emit (& mut self ,) { self . typed . emit_tuple (()) ; } } impl < 'c > std :: ops :: Deref for SigThemeChanged < 'c > { type Target = TypedSigThemeChanged < 'c > ; fn deref (& self) -> & Self :: Target { & self . typed } } impl std :: ops :: DerefMut for SigThemeChanged < '_ > { fn deref_mut (& mut self) -> & mut Self :: Target { & mut self . typed } }