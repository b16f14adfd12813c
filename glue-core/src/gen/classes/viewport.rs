# ! [doc = "Sidecar module for class [`Viewport`][crate::classes::Viewport]."] # [allow (unused_imports)] use crate :: builtin :: * ; # [allow (unused_imports)] use crate :: meta :: { AsArg , AsObjectArg , CowArg , InternedName , ObjectArg , Signature } ; # [allow (unused_imports)] use crate :: obj :: Gd ; # [allow (unused_imports)] use crate :: signal :: { SignalObject , TypedSignal } ; use crate :: sys ; pub (super) mod re_export { use super :: * ; # [doc = "Godot class `Viewport`.\n\nInherits [`Node`][crate::classes::Node].\n\nRelated symbols (default-param builders, enums, interned names, signals) are in [`viewport`][crate::classes::viewport]."] # [derive (Debug)] # [repr (C)] pub struct Viewport { object_ptr : sys :: GDExtensionObjectPtr , } impl Viewport { pub fn get_visible_rect (& self ,) -> Rect2 { type CallRet = Rect2 ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (774usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Viewport" , "get_visible_rect" , self . object_ptr , args ,) } } pub fn set_transparent_background (& mut self , enable : bool ,) { type CallRet = () ; type CallParams = (bool ,) ; let args = (enable ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (775usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Viewport" , "set_transparent_background" , self . object_ptr , args ,) } } pub fn has_transparent_background (& self ,) -> bool { type CallRet = bool ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (776usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Viewport" , "has_transparent_background" , self . object_ptr , args ,) } } pub fn set_use_hdr_2d (& mut self , enable : bool ,) { type CallRet = () ; type CallParams = (bool ,) ; let args = (enable ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (777usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Viewport" , "set_use_hdr_2d" , self . object_ptr , args ,) } } pub fn is_using_hdr_2d (& self ,) -> bool { type CallRet = bool ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (778usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Viewport" , "is_using_hdr_2d" , self . object_ptr , args ,) } } pub fn set_msaa_2d (& mut self , msaa : crate :: classes :: viewport :: Msaa ,) { type CallRet = () ; type CallParams = (crate :: classes :: viewport :: Msaa ,) ; let args = (msaa ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (779usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Viewport" , "set_msaa_2d" , self . object_ptr , args ,) } } pub fn get_msaa_2d (& self ,) -> crate :: classes :: viewport :: Msaa { type CallRet = crate :: classes :: viewport :: Msaa ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (780usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Viewport" , "get_msaa_2d" , self . object_ptr , args ,) } } pub fn set_msaa_3d (& mut self , msaa : crate :: classes :: viewport :: Msaa ,) { type CallRet = () ; type CallParams = (crate :: classes :: viewport :: Msaa ,) ; let args = (msaa ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (781usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Viewport" , "set_msaa_3d" , self . object_ptr , args ,) } } pub fn get_msaa_3d (& self ,) -> crate :: classes :: viewport :: Msaa { type CallRet = crate :: classes :: viewport :: Msaa ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (782usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Viewport" , "get_msaa_3d" , self . object_ptr , args ,) } } pub fn set_screen_space_aa (& mut self , screen_space_aa : crate :: classes :: viewport :: ScreenSpaceAa ,) { type CallRet = () ; type CallParams = (crate :: classes :: viewport :: ScreenSpaceAa ,) ; let args = (screen_space_aa ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (783usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Viewport" , "set_screen_space_aa" , self . object_ptr , args ,) } } pub fn get_screen_space_aa (& self ,) -> crate :: classes :: viewport :: ScreenSpaceAa { type CallRet = crate :: classes :: viewport :: ScreenSpaceAa ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (784usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Viewport" , "get_screen_space_aa" , self . object_ptr , args ,) } } pub fn set_use_taa (& mut self , enable : bool ,) { type CallRet = () ; type CallParams = (bool ,) ; let args = (enable ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (785usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Viewport" , "set_use_taa" , self . object_ptr , args ,) } } pub fn is_using_taa (& self ,) -> bool { type CallRet = bool ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (786usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Viewport" , "is_using_taa" , self . object_ptr , args ,) } } pub fn set_use_debanding (& mut self , enable : bool ,) { type CallRet = () ; type CallParams = (bool ,) ; let args = (enable ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (787usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Viewport" , "set_use_debanding" , self . object_ptr , args ,) } } pub fn is_using_debanding (& self ,) -> bool { type CallRet = bool ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (788usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Viewport" , "is_using_debanding" , self . object_ptr , args ,) } } pub fn set_use_occlusion_culling (& mut self , enable : bool ,) { type CallRet = () ; type CallParams = (bool ,) ; let args = (enable ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (789usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Viewport" , "set_use_occlusion_culling" , self . object_ptr , args ,) } } pub fn is_using_occlusion_culling (& self ,) -> bool { type CallRet = bool ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (790usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Viewport" , "is_using_occlusion_culling" , self . object_ptr , args ,) } } pub fn set_debug_draw (& mut self , debug_draw : crate :: classes :: viewport :: DebugDraw ,) { type CallRet = () ; type CallParams = (crate :: classes :: viewport :: DebugDraw ,) ; let args = (debug_draw ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (791usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Viewport" , "set_debug_draw" , self . object_ptr , args ,) } } pub fn get_debug_draw (& self ,) -> crate :: classes :: viewport :: DebugDraw { type CallRet = crate :: classes :: viewport :: DebugDraw ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (792usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Viewport" , "get_debug_draw" , self . object_ptr , args ,) } } pub fn get_render_info (& mut self , type_ : crate :: classes :: viewport :: RenderInfoType , info : crate :: classes :: viewport :: RenderInfo ,) -> i32 { type CallRet = i32 ; type CallParams = (crate :: classes :: viewport :: RenderInfoType , crate :: classes :: viewport :: RenderInfo ,) ; let args = (type_ , info ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (793usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Viewport" , "get_render_info" , self . object_ptr , args ,) } } pub fn set_physics_object_picking (& mut self , enable : bool ,) { type CallRet = () ; type CallParams = (bool ,) ; let args = (enable ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (794usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Viewport" , "set_physics_object_picking" , self . object_ptr , args ,) } } pub fn get_physics_object_picking (& mut self ,) -> bool { type CallRet = bool ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (795usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Viewport" , "get_physics_object_picking" , self . object_ptr , args ,) } } pub fn set_physics_object_picking_sort (& mut self , enable : bool ,) { type CallRet = () ; type CallParams = (bool ,) ; let args = (enable ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (796usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Viewport" , "set_physics_object_picking_sort" , self . object_ptr , args ,) } } pub fn get_physics_object_picking_sort (& mut self ,) -> bool { type CallRet = bool ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (797usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Viewport" , "get_physics_object_picking_sort" , self . object_ptr , args ,) } } pub fn set_physics_object_picking_first_only (& mut self , enable : bool ,) { type CallRet = () ; type CallParams = (bool ,) ; let args = (enable ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (798usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Viewport" , "set_physics_object_picking_first_only" , self . object_ptr , args ,) } } pub fn get_physics_object_picking_first_only (& mut self ,) -> bool { type CallRet = bool ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (799usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Viewport" , "get_physics_object_picking_first_only" , self . object_ptr , args ,) } } pub fn get_viewport_rid (& self ,) -> Rid { type CallRet = Rid ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (800usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Viewport" , "get_viewport_rid" , self . object_ptr , args ,) } } pub fn push_text_input (& mut self , text : impl AsArg < GString > ,) { type CallRet = () ; type CallParams < 'a0 , > = (CowArg < 'a0 , GString > ,) ; let args = (text . into_arg () ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (801usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Viewport" , "push_text_input" , self . object_ptr , args ,) } } pub (crate) fn push_input_full (& mut self , event : ObjectArg < crate :: classes :: InputEvent > , in_local_coords : bool ,) { type CallRet = () ; type CallParams = (ObjectArg < crate :: classes :: InputEvent > , bool ,) ; let args = (event , in_local_coords ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (802usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Viewport" , "push_input" , self . object_ptr , args ,) } } # [inline] pub fn push_input (& mut self , event : impl AsObjectArg < crate :: classes :: InputEvent > ,) { self . push_input_ex (event ,) . done () } # [inline] pub fn push_input_ex < 'ex > (& 'ex mut self , event : impl AsObjectArg < crate :: classes :: InputEvent > ,) -> super :: ExPushInput < 'ex > { super :: ExPushInput :: new (self , event . as_object_arg () ,) } pub (crate) fn push_unhandled_input_full (& mut self , event : ObjectArg < crate :: classes :: InputEvent > , in_local_coords : bool ,) { type CallRet = () ; type CallParams = (ObjectArg < crate :: classes :: InputEvent > , bool ,) ; let args = (event , in_local_coords ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (803usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Viewport" , "push_unhandled_input" , self . object_ptr , args ,) } } # [inline] pub fn push_unhandled_input (& mut self , event : impl AsObjectArg < crate :: classes :: InputEvent > ,) { self . push_unhandled_input_ex (event ,) . done () } # [inline] pub fn push_unhandled_input_ex < 'ex > (& 'ex mut self , event : impl AsObjectArg < crate :: classes :: InputEvent > ,) -> super :: ExPushUnhandledInput < 'ex > { super :: ExPushUnhandledInput :: new (self , event . as_object_arg () ,) } pub fn get_mouse_position (& self ,) -> Vector2 { type CallRet = Vector2 ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (804usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Viewport" , "get_mouse_position" , self . object_ptr , args ,) } } pub fn warp_mouse (& mut self , position : Vector2 ,) { type CallRet = () ; type CallParams = (Vector2 ,) ; let args = (position ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (805usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Viewport" , "warp_mouse" , self . object_ptr , args ,) } } pub fn update_mouse_cursor_state (& mut self ,) { type CallRet = () ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (806usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Viewport" , "update_mouse_cursor_state" , self . object_ptr , args ,) } } pub fn gui_get_drag_data (& self ,) -> Variant { type CallRet = Variant ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (807usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Viewport" , "gui_get_drag_data" , self . object_ptr , args ,) } } pub fn gui_is_dragging (& self ,) -> bool { type CallRet = bool ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (808usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Viewport" , "gui_is_dragging" , self . object_ptr , args ,) } } pub fn gui_is_drag_successful (& self ,) -> bool { type CallRet = bool ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (809usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Viewport" , "gui_is_drag_successful" , self . object_ptr , args ,) } } pub fn gui_release_focus (& mut self ,) { type CallRet = () ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (810usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Viewport" , "gui_release_focus" , self . object_ptr , args ,) } } pub fn gui_get_focus_owner (& self ,) -> Option < Gd < crate :: classes :: Control > > { type CallRet = Option < Gd < crate :: classes :: Control > > ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (811usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Viewport" , "gui_get_focus_owner" , self . object_ptr , args ,) } } pub fn gui_get_hovered_control (& self ,) -> Option < Gd < crate :: classes :: Control > > { type CallRet = Option < Gd < crate :: classes :: Control > > ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (812usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Viewport" , "gui_get_hovered_control" , self . object_ptr , args ,) } } pub fn set_disable_input (& mut self , disable : bool ,) { type CallRet = () ; type CallParams = (bool ,) ; let args = (disable ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (813usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Viewport" , "set_disable_input" , self . object_ptr , args ,) } } pub fn is_input_disabled (& self ,) -> bool { type CallRet = bool ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (814usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Viewport" , "is_input_disabled" , self . object_ptr , args ,) } } pub fn set_positional_shadow_atlas_size (& mut self , size : i32 ,) { type CallRet = () ; type CallParams = (i32 ,) ; let args = (size ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (815usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Viewport" , "set_positional_shadow_atlas_size" , self . object_ptr , args ,) } } pub fn get_positional_shadow_atlas_size (& self ,) -> i32 { type CallRet = i32 ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (816usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Viewport" , "get_positional_shadow_atlas_size" , self . object_ptr , args ,) } } pub fn set_positional_shadow_atlas_16_bits (& mut self , enable : bool ,) { type CallRet = () ; type CallParams = (bool ,) ; let args = (enable ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (817usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Viewport" , "set_positional_shadow_atlas_16_bits" , self . object_ptr , args ,) } } pub fn get_positional_shadow_atlas_16_bits (& self ,) -> bool { type CallRet = bool ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (818usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Viewport" , "get_positional_shadow_atlas_16_bits" , self . object_ptr , args ,) } } pub fn set_snap_controls_to_pixels (& mut self , enabled : bool ,) { type CallRet = () ; type CallParams = (bool ,) ; let args = (enabled ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (819usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Viewport" , "set_snap_controls_to_pixels" , self . object_ptr , args ,) } } pub fn is_snap_controls_to_pixels_enabled (& self ,) -> bool { type CallRet = bool ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (820usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Viewport" , "is_snap_controls_to_pixels_enabled" , self . object_ptr , args ,) } } pub fn set_snap_2d_transforms_to_pixel (& mut self , enabled : bool ,) { type CallRet = () ; type CallParams = (bool ,) ; let args = (enabled ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (821usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Viewport" , "set_snap_2d_transforms_to_pixel" , self . object_ptr , args ,) } } pub fn is_snap_2d_transforms_to_pixel_enabled (& self ,) -> bool { type CallRet = bool ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (822usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Viewport" , "is_snap_2d_transforms_to_pixel_enabled" , self . object_ptr , args ,) } } pub fn set_snap_2d_vertices_to_pixel (& mut self , enabled : bool ,) { type CallRet = () ; type CallParams = (bool ,) ; let args = (enabled ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (823usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Viewport" , "set_snap_2d_vertices_to_pixel" , self . object_ptr , args ,) } } pub fn is_snap_2d_vertices_to_pixel_enabled (& self ,) -> bool { type CallRet = bool ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (824usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Viewport" , "is_snap_2d_vertices_to_pixel_enabled" , self . object_ptr , args ,) } } pub fn set_positional_shadow_atlas_quadrant_subdiv (& mut self , quadrant : i32 , subdiv : crate :: classes :: viewport :: PositionalShadowAtlasQuadrantSubdiv ,) { type CallRet = () ; type CallParams = (i32 , crate :: classes :: viewport :: PositionalShadowAtlasQuadrantSubdiv ,) ; let args = (quadrant , subdiv ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (825usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Viewport" , "set_positional_shadow_atlas_quadrant_subdiv" , self . object_ptr , args ,) } } pub fn get_positional_shadow_atlas_quadrant_subdiv (& self , quadrant : i32 ,) -> crate :: classes :: viewport :: PositionalShadowAtlasQuadrantSubdiv { type CallRet = crate :: classes :: viewport :: PositionalShadowAtlasQuadrantSubdiv ; type CallParams = (i32 ,) ; let args = (quadrant ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (826usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Viewport" , "get_positional_shadow_atlas_quadrant_subdiv" , self . object_ptr , args ,) } } pub fn set_input_as_handled (& mut self ,) { type CallRet = () ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (827usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Viewport" , "set_input_as_handled" , self . object_ptr , args ,) } } pub fn is_input_handled (& self ,) -> bool { type CallRet = bool ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (828usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Viewport" , "is_input_handled" , self . object_ptr , args ,) } } pub fn set_handle_input_locally (& mut self , enable : bool ,) { type CallRet = () ; type CallParams = (bool ,) ; let args = (enable ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (829usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Viewport" , "set_handle_input_locally" , self . object_ptr , args ,) } } pub fn is_handling_input_locally (& self ,) -> bool { type CallRet = bool ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (830usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Viewport" , "is_handling_input_locally" , self . object_ptr , args ,) } } pub fn set_default_canvas_item_texture_filter (& mut self , mode : crate :: classes :: viewport :: DefaultCanvasItemTextureFilter ,) { type CallRet = () ; type CallParams = (crate :: classes :: viewport :: DefaultCanvasItemTextureFilter ,) ; let args = (mode ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (831usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Viewport" , "set_default_canvas_item_texture_filter" , self . object_ptr , args ,) } } pub fn get_default_canvas_item_texture_filter (& self ,) -> crate :: classes :: viewport :: DefaultCanvasItemTextureFilter { type CallRet = crate :: classes :: viewport :: DefaultCanvasItemTextureFilter ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (832usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Viewport" , "get_default_canvas_item_texture_filter" , self . object_ptr , args ,) } } pub fn set_embedding_subwindows (& mut self , enable : bool ,) { type CallRet = () ; type CallParams = (bool ,) ; let args = (enable ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (833usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Viewport" , "set_embedding_subwindows" , self . object_ptr , args ,) } } pub fn is_embedding_subwindows (& self ,) -> bool { type CallRet = bool ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (834usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Viewport" , "is_embedding_subwindows" , self . object_ptr , args ,) } } pub fn set_canvas_cull_mask (& mut self , mask : u32 ,) { type CallRet = () ; type CallParams = (u32 ,) ; let args = (mask ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (835usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Viewport" , "set_canvas_cull_mask" , self . object_ptr , args ,) } } pub fn get_canvas_cull_mask (& self ,) -> u32 { type CallRet = u32 ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (836usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Viewport" , "get_canvas_cull_mask" , self . object_ptr , args ,) } } pub fn set_canvas_cull_mask_bit (& mut self , layer : u32 , enable : bool ,) { type CallRet = () ; type CallParams = (u32 , bool ,) ; let args = (layer , enable ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (837usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Viewport" , "set_canvas_cull_mask_bit" , self . object_ptr , args ,) } } pub fn get_canvas_cull_mask_bit (& self , layer : u32 ,) -> bool { type CallRet = bool ; type CallParams = (u32 ,) ; let args = (layer ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (838usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Viewport" , "get_canvas_cull_mask_bit" , self . object_ptr , args ,) } } pub fn set_default_canvas_item_texture_repeat (& mut self , mode : crate :: classes :: viewport :: DefaultCanvasItemTextureRepeat ,) { type CallRet = () ; type CallParams = (crate :: classes :: viewport :: DefaultCanvasItemTextureRepeat ,) ; let args = (mode ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (839usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Viewport" , "set_default_canvas_item_texture_repeat" , self . object_ptr , args ,) } } pub fn get_default_canvas_item_texture_repeat (& self ,) -> crate :: classes :: viewport :: DefaultCanvasItemTextureRepeat { type CallRet = crate :: classes :: viewport :: DefaultCanvasItemTextureRepeat ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (840usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Viewport" , "get_default_canvas_item_texture_repeat" , self . object_ptr , args ,) } } pub fn set_sdf_oversize (& mut self , oversize : crate :: classes :: viewport :: SdfOversize ,) { type CallRet = () ; type CallParams = (crate :: classes :: viewport :: SdfOversize ,) ; let args = (oversize ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (841usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Viewport" , "set_sdf_oversize" , self . object_ptr , args ,) } } pub fn get_sdf_oversize (& self ,) -> crate :: classes :: viewport :: SdfOversize { type CallRet = crate :: classes :: viewport :: SdfOversize ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (842usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Viewport" , "get_sdf_oversize" , self . object_ptr , args ,) } } pub fn set_sdf_scale (& mut self , scale : crate :: classes :: viewport :: SdfScale ,) { type CallRet = () ; type CallParams = (crate :: classes :: viewport :: SdfScale ,) ; let args = (scale ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (843usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Viewport" , "set_sdf_scale" , self . object_ptr , args ,) } } pub fn get_sdf_scale (& self ,) -> crate :: classes :: viewport :: SdfScale { type CallRet = crate :: classes :: viewport :: SdfScale ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (844usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Viewport" , "get_sdf_scale" , self . object_ptr , args ,) } } pub fn set_mesh_lod_threshold (& mut self , pixels : f32 ,) { type CallRet = () ; type CallParams = (f32 ,) ; let args = (pixels ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (845usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Viewport" , "set_mesh_lod_threshold" , self . object_ptr , args ,) } } pub fn get_mesh_lod_threshold (& self ,) -> f32 { type CallRet = f32 ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (846usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Viewport" , "get_mesh_lod_threshold" , self . object_ptr , args ,) } } pub fn set_as_audio_listener_2d (& mut self , enable : bool ,) { type CallRet = () ; type CallParams = (bool ,) ; let args = (enable ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (847usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Viewport" , "set_as_audio_listener_2d" , self . object_ptr , args ,) } } pub fn is_audio_listener_2d (& self ,) -> bool { type CallRet = bool ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (848usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Viewport" , "is_audio_listener_2d" , self . object_ptr , args ,) } } pub fn set_use_own_world_3d (& mut self , enable : bool ,) { type CallRet = () ; type CallParams = (bool ,) ; let args = (enable ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (849usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Viewport" , "set_use_own_world_3d" , self . object_ptr , args ,) } } pub fn is_using_own_world_3d (& self ,) -> bool { type CallRet = bool ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (850usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Viewport" , "is_using_own_world_3d" , self . object_ptr , args ,) } } pub fn set_as_audio_listener_3d (& mut self , enable : bool ,) { type CallRet = () ; type CallParams = (bool ,) ; let args = (enable ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (851usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Viewport" , "set_as_audio_listener_3d" , self . object_ptr , args ,) } } pub fn is_audio_listener_3d (& self ,) -> bool { type CallRet = bool ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (852usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Viewport" , "is_audio_listener_3d" , self . object_ptr , args ,) } } pub fn set_disable_3d (& mut self , disable : bool ,) { type CallRet = () ; type CallParams = (bool ,) ; let args = (disable ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (853usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Viewport" , "set_disable_3d" , self . object_ptr , args ,) } } pub fn is_3d_disabled (& self ,) -> bool { type CallRet = bool ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (854usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Viewport" , "is_3d_disabled" , self . object_ptr , args ,) } } pub fn set_use_xr (& mut self , use_ : bool ,) { type CallRet = () ; type CallParams = (bool ,) ; let args = (use_ ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (855usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Viewport" , "set_use_xr" , self . object_ptr , args ,) } } pub fn is_using_xr (& mut self ,) -> bool { type CallRet = bool ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (856usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Viewport" , "is_using_xr" , self . object_ptr , args ,) } } pub fn set_scaling_3d_mode (& mut self , scaling_3d_mode : crate :: classes :: viewport :: Scaling3DMode ,) { type CallRet = () ; type CallParams = (crate :: classes :: viewport :: Scaling3DMode ,) ; let args = (scaling_3d_mode ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (857usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Viewport" , "set_scaling_3d_mode" , self . object_ptr , args ,) } } pub fn get_scaling_3d_mode (& self ,) -> crate :: classes :: viewport :: Scaling3DMode { type CallRet = crate :: classes :: viewport :: Scaling3DMode ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (858usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Viewport" , "get_scaling_3d_mode" , self . object_ptr , args ,) } } pub fn set_scaling_3d_scale (& mut self , scale : f32 ,) { type CallRet = () ; type CallParams = (f32 ,) ; let args = (scale ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (859usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Viewport" , "set_scaling_3d_scale" , self . object_ptr , args ,) } } pub fn get_scaling_3d_scale (& self ,) -> f32 { type CallRet = f32 ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (860usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Viewport" , "get_scaling_3d_scale" , self . object_ptr , args ,) } } pub fn set_fsr_sharpness (& mut self , fsr_sharpness : f32 ,) { type CallRet = () ; type CallParams = (f32 ,) ; let args = (fsr_sharpness ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (861usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Viewport" , "set_fsr_sharpness" , self . object_ptr , args ,) } } pub fn get_fsr_sharpness (& self ,) -> f32 { type CallRet = f32 ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (862usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Viewport" , "get_fsr_sharpness" , self . object_ptr , args ,) } } pub fn set_texture_mipmap_bias (& mut self , texture_mipmap_bias : f32 ,) { type CallRet = () ; type CallParams = (f32 ,) ; let args = (texture_mipmap_bias ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (863usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Viewport" , "set_texture_mipmap_bias" , self . object_ptr , args ,) } } pub fn get_texture_mipmap_bias (& self ,) -> f32 { type CallRet = f32 ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (864usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Viewport" , "get_texture_mipmap_bias" , self . object_ptr , args ,) } } pub fn set_vrs_mode (& mut self , mode : crate :: classes :: viewport :: VrsMode ,) { type CallRet = () ; type CallParams = (crate :: classes :: viewport :: VrsMode ,) ; let args = (mode ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (865usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Viewport" , "set_vrs_mode" , self . object_ptr , args ,) } } pub fn get_vrs_mode (& self ,) -> crate :: classes :: viewport :: VrsMode { type CallRet = crate :: classes :: viewport :: VrsMode ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (866usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Viewport" , "get_vrs_mode" , self . object_ptr , args ,) } } pub fn set_vrs_update_mode (& mut self , mode : crate :: classes :: viewport :: VrsUpdateMode ,) { type CallRet = () ; type CallParams = (crate :: classes :: viewport :: VrsUpdateMode ,) ; let args = (mode ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (867usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Viewport" , "set_vrs_update_mode" , self . object_ptr , args ,) } } pub fn get_vrs_update_mode (& self ,) -> crate :: classes :: viewport :: VrsUpdateMode { type CallRet = crate :: classes :: viewport :: VrsUpdateMode ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (868usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Viewport" , "get_vrs_update_mode" , self . object_ptr , args ,) } } pub fn set_vrs_texture (& mut self , texture : impl AsObjectArg < crate :: classes :: Texture2D > ,) { type CallRet = () ; type CallParams = (ObjectArg < crate :: classes :: Texture2D > ,) ; let args = (texture . as_object_arg () ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (869usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Viewport" , "set_vrs_texture" , self . object_ptr , args ,) } } pub fn get_vrs_texture (& self ,) -> Option < Gd < crate :: classes :: Texture2D > > { type CallRet = Option < Gd < crate :: classes :: Texture2D > > ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (870usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Viewport" , "get_vrs_texture" , self . object_ptr , args ,) } } # [doc = "Typed signals of this class and its bases; see [`SignalsOfViewport`][super::viewport::SignalsOfViewport]."] pub fn signals (& mut self) -> super :: SignalsOfViewport < '_ > { super :: SignalsOfViewport :: __new (crate :: signal :: SignalObject :: __new (self . object_ptr)) } } impl crate :: obj :: GodotClass for Viewport { const CLASS_NAME : & 'static str = "Viewport" ; type Base = crate :: classes :: Node ; type Memory = crate :: obj :: MemManual ; const INIT_LEVEL : crate :: init :: InitLevel = crate :: init :: InitLevel :: Scene ; } impl crate :: obj :: EngineClass for Viewport { fn as_object_ptr (& self) -> sys :: GDExtensionObjectPtr { self . object_ptr } } unsafe impl crate :: obj :: Inherits < crate :: classes :: Node > for Viewport { } unsafe impl crate :: obj :: Inherits < crate :: classes :: Object > for Viewport { } impl std :: ops :: Deref for Viewport { type Target = crate :: classes :: Node ; fn deref (& self) -> & Self :: Target { unsafe { std :: mem :: transmute :: < & Self , & Self :: Target > (self) } } } impl std :: ops :: DerefMut for Viewport { fn deref_mut (& mut self) -> & mut Self :: Target { unsafe { std :: mem :: transmute :: < & mut Self , & mut Self :: Target > (self) } } } } # [doc = "Default-param extender for [`Viewport::push_input_ex`][super::Viewport::push_input_ex]."] # [must_use] pub struct ExPushInput < 'ex > { surround_object : & 'ex mut re_export :: Viewport , event : ObjectArg < crate :: classes :: InputEvent > , in_local_coords : bool , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExPushInput < 'ex > { fn new (surround_object : & 'ex mut re_export :: Viewport , event : ObjectArg < crate :: classes :: InputEvent > ,) -> Self { Self { surround_object , event , in_local_coords : false , } } # [inline] pub fn in_local_coords (self , value : bool) -> Self { Self { in_local_coords : value , .. self } } # [inline] pub fn done (self) { re_export :: Viewport :: push_input_full (self . surround_object , self . event , self . in_local_coords ,) } } # [doc = "Default-param extender for [`Viewport::push_unhandled_input_ex`][super::Viewport::push_unhandled_input_ex]."] # [must_use] pub struct ExPushUnhandledInput < 'ex > { surround_object : & 'ex mut re_export :: Viewport , event : ObjectArg < crate :: classes :: InputEvent > , in_local_coords : bool , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExPushUnhandledInput < 'ex > { fn new (surround_object : & 'ex mut re_export :: Viewport , event : ObjectArg < crate :: classes :: InputEvent > ,) -> Self { Self { surround_object , event , in_local_coords : false , } } # [inline] pub fn in_local_coords (self , value : bool) -> Self { Self { in_local_coords : value , .. self } } # [inline] pub fn done (self) { re_export :: Viewport :: push_unhandled_input_full (self . surround_object , self . event , self . in_local_coords ,) } } # [repr (transparent)] # [derive (Copy , Clone , Eq , PartialEq , Hash ,)] pub struct PositionalShadowAtlasQuadrantSubdiv { ord : i32 } impl PositionalShadowAtlasQuadrantSubdiv { # [doc (alias = "SHADOW_ATLAS_QUADRANT_SUBDIV_DISABLED")] # [doc = "Godot enumerator name: `SHADOW_ATLAS_QUADRANT_SUBDIV_DISABLED`"] pub const DISABLED : Self = Self { ord : 0 } ; pub const SHADOW_ATLAS_QUADRANT_SUBDIV_1 : Self = Self { ord : 1 } ; pub const SHADOW_ATLAS_QUADRANT_SUBDIV_4 : Self = Self { ord : 2 } ; pub const SHADOW_ATLAS_QUADRANT_SUBDIV_16 : Self = Self { ord : 3 } ; pub const SHADOW_ATLAS_QUADRANT_SUBDIV_64 : Self = Self { ord : 4 } ; pub const SHADOW_ATLAS_QUADRANT_SUBDIV_256 : Self = Self { ord : 5 } ; pub const SHADOW_ATLAS_QUADRANT_SUBDIV_1024 : Self = Self { ord : 6 } ; # [doc (alias = "SHADOW_ATLAS_QUADRANT_SUBDIV_MAX")] # [doc = "Godot enumerator name: `SHADOW_ATLAS_QUADRANT_SUBDIV_MAX`"] pub const MAX : Self = Self { ord : 7 } ; # [allow (unreachable_patterns)] fn enumerator_name (self) -> Option < & 'static str > { match self { Self :: DISABLED => Some ("DISABLED") , Self :: SHADOW_ATLAS_QUADRANT_SUBDIV_1 => Some ("SHADOW_ATLAS_QUADRANT_SUBDIV_1") , Self :: SHADOW_ATLAS_QUADRANT_SUBDIV_4 => Some ("SHADOW_ATLAS_QUADRANT_SUBDIV_4") , Self :: SHADOW_ATLAS_QUADRANT_SUBDIV_16 => Some ("SHADOW_ATLAS_QUADRANT_SUBDIV_16") , Self :: SHADOW_ATLAS_QUADRANT_SUBDIV_64 => Some ("SHADOW_ATLAS_QUADRANT_SUBDIV_64") , Self :: SHADOW_ATLAS_QUADRANT_SUBDIV_256 => Some ("SHADOW_ATLAS_QUADRANT_SUBDIV_256") , Self :: SHADOW_ATLAS_QUADRANT_SUBDIV_1024 => Some ("SHADOW_ATLAS_QUADRANT_SUBDIV_1024") , Self :: MAX => Some ("MAX") , _ => None , } } } impl std :: fmt :: Debug for PositionalShadowAtlasQuadrantSubdiv { fn fmt (& self , f : & mut std :: fmt :: Formatter < '_ >) -> std :: fmt :: Result { match self . enumerator_name () { Some (enumerator) => f . write_str (enumerator) , None => f . debug_struct (stringify ! (PositionalShadowAtlasQuadrantSubdiv)) . field ("ord" , & self . ord) . finish () , } } } impl crate :: obj :: EngineEnum for PositionalShadowAtlasQuadrantSubdiv { fn try_from_ord (ord : i32) -> Option < Self > { match ord { 0 | 1 | 2 | 3 | 4 | 5 | 6 | 7 => Some (Self { ord }) , _ => None , } } fn ord (self) -> i32 { self . ord } } impl crate :: meta :: GodotConvert for PositionalShadowAtlasQuadrantSubdiv { type Via = i32 ; } impl crate :: meta :: ToGodot for PositionalShadowAtlasQuadrantSubdiv { fn to_godot (& self) -> Self :: Via { < Self as crate :: obj :: EngineEnum > :: ord (* self) } } impl crate :: meta :: FromGodot for PositionalShadowAtlasQuadrantSubdiv { fn try_from_godot (via : Self :: Via) -> std :: result :: Result < Self , crate :: meta :: ConvertError > { Ok (Self { ord : via }) } } # [repr (transparent)] # [derive (Copy , Clone , Eq , PartialEq , Hash ,)] pub struct Scaling3DMode { ord : i32 } impl Scaling3DMode { # [doc (alias = "SCALING_3D_MODE_BILINEAR")] # [doc = "Godot enumerator name: `SCALING_3D_MODE_BILINEAR`"] pub const BILINEAR : Self = Self { ord : 0 } ; # [doc (alias = "SCALING_3D_MODE_FSR")] # [doc = "Godot enumerator name: `SCALING_3D_MODE_FSR`"] pub const FSR : Self = Self { ord : 1 } ; # [doc (alias = "SCALING_3D_MODE_FSR2")] # [doc = "Godot enumerator name: `SCALING_3D_MODE_FSR2`"] pub const FSR2 : Self = Self { ord : 2 } ; # [doc (alias = "SCALING_3D_MODE_MAX")] # [doc = "Godot enumerator name: `SCALING_3D_MODE_MAX`"] pub const MAX : Self = Self { ord : 3 } ; # [allow (unreachable_patterns)] fn enumerator_name (self) -> Option < & 'static str > { match self { Self :: BILINEAR => Some ("BILINEAR") , Self :: FSR => Some ("FSR") , Self :: FSR2 => Some ("FSR2") , Self :: MAX => Some ("MAX") , _ => None , } } } impl std :: fmt :: Debug for Scaling3DMode { fn fmt (& self , f : & mut std :: fmt :: Formatter < '_ >) -> std :: fmt :: Result { match self . enumerator_name () { Some (enumerator) => f . write_str (enumerator) , None => f . debug_struct (stringify ! (Scaling3DMode)) . field ("ord" , & self . ord) . finish () , } } } impl crate :: obj :: EngineEnum for Scaling3DMode { fn try_from_ord (ord : i32) -> Option < Self > { match ord { 0 | 1 | 2 | 3 => Some (Self { ord }) , _ => None , } } fn ord (self) -> i32 { self . ord } } impl crate :: meta :: GodotConvert for Scaling3DMode { type Via = i32 ; } impl crate :: meta :: ToGodot for Scaling3DMode { fn to_godot (& self) -> Self :: Via { < Self as crate :: obj :: EngineEnum > :: ord (* self) } } impl crate :: meta :: FromGodot for Scaling3DMode { fn try_from_godot (via : Self :: Via) -> std :: result :: Result < Self , crate :: meta :: ConvertError > { Ok (Self { ord : via }) } } # [doc = "Godot enum name: `MSAA`."] # [repr (transparent)] # [derive (Copy , Clone , Eq , PartialEq , Hash ,)] pub struct Msaa { ord : i32 } impl Msaa { # [doc (alias = "MSAA_DISABLED")] # [doc = "Godot enumerator name: `MSAA_DISABLED`"] pub const DISABLED : Self = Self { ord : 0 } ; pub const MSAA_2X : Self = Self { ord : 1 } ; pub const MSAA_4X : Self = Self { ord : 2 } ; pub const MSAA_8X : Self = Self { ord : 3 } ; # [doc (alias = "MSAA_MAX")] # [doc = "Godot enumerator name: `MSAA_MAX`"] pub const MAX : Self = Self { ord : 4 } ; # [allow (unreachable_patterns)] fn enumerator_name (self) -> Option < & 'static str > { match self { Self :: DISABLED => Some ("DISABLED") , Self :: MSAA_2X => Some ("MSAA_2X") , Self :: MSAA_4X => Some ("MSAA_4X") , Self :: MSAA_8X => Some ("MSAA_8X") , Self :: MAX => Some ("MAX") , _ => None , } } } impl std :: fmt :: Debug for Msaa { fn fmt (& self , f : & mut std :: fmt :: Formatter < '_ >) -> std :: fmt :: Result { match self . enumerator_name () { Some (enumerator) => f . write_str (enumerator) , None => f . debug_struct (stringify ! (Msaa)) . field ("ord" , & self . ord) . finish () , } } } impl crate :: obj :: EngineEnum for Msaa { fn try_from_ord (ord : i32) -> Option < Self > { match ord { 0 | 1 | 2 | 3 | 4 => Some (Self { ord }) , _ => None , } } fn ord (self) -> i32 { self . ord } } impl crate :: meta :: GodotConvert for Msaa { type Via = i32 ; } impl crate :: meta :: ToGodot for Msaa { fn to_godot (& self) -> Self :: Via { < Self as crate :: obj :: EngineEnum > :: ord (* self) } } impl crate :: meta :: FromGodot for Msaa { fn try_from_godot (via : Self :: Via) -> std :: result :: Result < Self , crate :: meta :: ConvertError > { Ok (Self { ord : via }) } } # [doc = "Godot enum name: `ScreenSpaceAA`."] # [repr (transparent)] # [derive (Copy , Clone , Eq , PartialEq , Hash ,)] pub struct ScreenSpaceAa { ord : i32 } impl ScreenSpaceAa { # [doc (alias = "SCREEN_SPACE_AA_DISABLED")] # [doc = "Godot enumerator name: `SCREEN_SPACE_AA_DISABLED`"] pub const DISABLED : Self = Self { ord : 0 } ; # [doc (alias = "SCREEN_SPACE_AA_FXAA")] # [doc = "Godot enumerator name: `SCREEN_SPACE_AA_FXAA`"] pub const FXAA : Self = Self { ord : 1 } ; # [doc (alias = "SCREEN_SPACE_AA_MAX")] # [doc = "Godot enumerator name: `SCREEN_SPACE_AA_MAX`"] pub const MAX : Self = Self { ord : 2 } ; # [allow (unreachable_patterns)] fn enumerator_name (self) -> Option < & 'static str > { match self { Self :: DISABLED => Some ("DISABLED") , Self :: FXAA => Some ("FXAA") , Self :: MAX => Some ("MAX") , _ => None , } } } impl std :: fmt :: Debug for ScreenSpaceAa { fn fmt (& self , f : & mut std :: fmt :: Formatter < '_ >) -> std :: fmt :: Result { match self . enumerator_name () { Some (enumerator) => f . write_str (enumerator) , None => f . debug_struct (stringify ! (ScreenSpaceAa)) . field ("ord" , & self . ord) . finish () , } } } impl crate :: obj :: EngineEnum for ScreenSpaceAa { fn try_from_ord (ord : i32) -> Option < Self > { match ord { 0 | 1 | 2 => Some (Self { ord }) , _ => None , } } fn ord (self) -> i32 { self . ord } } impl crate :: meta :: GodotConvert for ScreenSpaceAa { type Via = i32 ; } impl crate :: meta :: ToGodot for ScreenSpaceAa { fn to_godot (& self) -> Self :: Via { < Self as crate :: obj :: EngineEnum > :: ord (* self) } } impl crate :: meta :: FromGodot for ScreenSpaceAa { fn try_from_godot (via : Self :: Via) -> std :: result :: Result < Self , crate :: meta :: ConvertError > { Ok (Self { ord : via }) } } # [repr (transparent)] # [derive (Copy , Clone , Eq , PartialEq , Hash ,)] pub struct RenderInfo { ord : i32 } impl RenderInfo { # [doc (alias = "RENDER_INFO_OBJECTS_IN_FRAME")] # [doc = "Godot enumerator name: `RENDER_INFO_OBJECTS_IN_FRAME`"] pub const OBJECTS_IN_FRAME : Self = Self { ord : 0 } ; # [doc (alias = "RENDER_INFO_PRIMITIVES_IN_FRAME")] # [doc = "Godot enumerator name: `RENDER_INFO_PRIMITIVES_IN_FRAME`"] pub const PRIMITIVES_IN_FRAME : Self = Self { ord : 1 } ; # [doc (alias = "RENDER_INFO_DRAW_CALLS_IN_FRAME")] # [doc = "Godot enumerator name: `RENDER_INFO_DRAW_CALLS_IN_FRAME`"] pub const DRAW_CALLS_IN_FRAME : Self = Self { ord : 2 } ; # [doc (alias = "RENDER_INFO_MAX")] # [doc = "Godot enumerator name: `RENDER_INFO_MAX`"] pub const MAX : Self = Self { ord : 3 } ; # [allow (unreachable_patterns)] fn enumerator_name (self) -> Option < & 'static str > { match self { Self :: OBJECTS_IN_FRAME => Some ("OBJECTS_IN_FRAME") , Self :: PRIMITIVES_IN_FRAME => Some ("PRIMITIVES_IN_FRAME") , Self :: DRAW_CALLS_IN_FRAME => Some ("DRAW_CALLS_IN_FRAME") , Self :: MAX => Some ("MAX") , _ => None , } } } impl std :: fmt :: Debug for RenderInfo { fn fmt (& self , f : & mut std :: fmt :: Formatter < '_ >) -> std :: fmt :: Result { match self . enumerator_name () { Some (enumerator) => f . write_str (enumerator) , None => f . debug_struct (stringify ! (RenderInfo)) . field ("ord" , & self . ord) . finish () , } } } impl crate :: obj :: EngineEnum for RenderInfo { fn try_from_ord (ord : i32) -> Option < Self > { match ord { 0 | 1 | 2 | 3 => Some (Self { ord }) , _ => None , } } fn ord (self) -> i32 { self . ord } } impl crate :: meta :: GodotConvert for RenderInfo { type Via = i32 ; } impl crate :: meta :: ToGodot for RenderInfo { fn to_godot (& self) -> Self :: Via { < Self as crate :: obj :: EngineEnum > :: ord (* self) } } impl crate :: meta :: FromGodot for RenderInfo { fn try_from_godot (via : Self :: Via) -> std :: result :: Result < Self , crate :: meta :: ConvertError > { Ok (Self { ord : via }) } } # [repr (transparent)] # [derive (Copy , Clone , Eq , PartialEq , Hash ,)] pub struct RenderInfoType { ord : i32 } impl RenderInfoType { # [doc (alias = "RENDER_INFO_TYPE_VISIBLE")] # [doc = "Godot enumerator name: `RENDER_INFO_TYPE_VISIBLE`"] pub const VISIBLE : Self = Self { ord : 0 } ; # [doc (alias = "RENDER_INFO_TYPE_SHADOW")] # [doc = "Godot enumerator name: `RENDER_INFO_TYPE_SHADOW`"] pub const SHADOW : Self = Self { ord : 1 } ; # [doc (alias = "RENDER_INFO_TYPE_CANVAS")] # [doc = "Godot enumerator name: `RENDER_INFO_TYPE_CANVAS`"] pub const CANVAS : Self = Self { ord : 2 } ; # [doc (alias = "RENDER_INFO_TYPE_MAX")] # [doc = "Godot enumerator name: `RENDER_INFO_TYPE_MAX`"] pub const MAX : Self = Self { ord : 3 } ; # [allow (unreachable_patterns)] fn enumerator_name (self) -> Option < & 'static str > { match self { Self :: VISIBLE => Some ("VISIBLE") , Self :: SHADOW => Some ("SHADOW") , Self :: CANVAS => Some ("CANVAS") , Self :: MAX => Some ("MAX") , _ => None , } } } impl std :: fmt :: Debug for RenderInfoType { fn fmt (& self , f : & mut std :: fmt :: Formatter < '_ >) -> std :: fmt :: Result { match self . enumerator_name () { Some (enumerator) => f . write_str (enumerator) , None => f . debug_struct (stringify ! (RenderInfoType)) . field ("ord" , & self . ord) . finish () , } } } impl crate :: obj :: EngineEnum for RenderInfoType { fn try_from_ord (ord : i32) -> Option < Self > { match ord { 0 | 1 | 2 | 3 => Some (Self { ord }) , _ => None , } } fn ord (self) -> i32 { self . ord } } impl crate :: meta :: GodotConvert for RenderInfoType { type Via = i32 ; } impl crate :: meta :: ToGodot for RenderInfoType { fn to_godot (& self) -> Self :: Via { < Self as crate :: obj :: EngineEnum > :: ord (* self) } } impl crate :: meta :: FromGodot for RenderInfoType { fn try_from_godot (via : Self :: Via) -> std :: result :: Result < Self , crate :: meta :: ConvertError > { Ok (Self { ord : via }) } } # [repr (transparent)] # [derive (Copy , Clone , Eq , PartialEq , Hash ,)] pub struct DebugDraw { ord : i32 } impl DebugDraw { # [doc (alias = "DEBUG_DRAW_DISABLED")] # [doc = "Godot enumerator name: `DEBUG_DRAW_DISABLED`"] pub const DISABLED : Self = Self { ord : 0 } ; # [doc (alias = "DEBUG_DRAW_UNSHADED")] # [doc = "Godot enumerator name: `DEBUG_DRAW_UNSHADED`"] pub const UNSHADED : Self = Self { ord : 1 } ; # [doc (alias = "DEBUG_DRAW_LIGHTING")] # [doc = "Godot enumerator name: `DEBUG_DRAW_LIGHTING`"] pub const LIGHTING : Self = Self { ord : 2 } ; # [doc (alias = "DEBUG_DRAW_OVERDRAW")] # [doc = "Godot enumerator name: `DEBUG_DRAW_OVERDRAW`"] pub const OVERDRAW : Self = Self { ord : 3 } ; # [doc (alias = "DEBUG_DRAW_WIREFRAME")] # [doc = "Godot enumerator name: `DEBUG_DRAW_WIREFRAME`"] pub const WIREFRAME : Self = Self { ord : 4 } ; # [doc (alias = "DEBUG_DRAW_NORMAL_BUFFER")] # [doc = "Godot enumerator name: `DEBUG_DRAW_NORMAL_BUFFER`"] pub const NORMAL_BUFFER : Self = Self { ord : 5 } ; # [doc (alias = "DEBUG_DRAW_VOXEL_GI_ALBEDO")] # [doc = "Godot enumerator name: `DEBUG_DRAW_VOXEL_GI_ALBEDO`"] pub const VOXEL_GI_ALBEDO : Self = Self { ord : 6 } ; # [doc (alias = "DEBUG_DRAW_VOXEL_GI_LIGHTING")] # [doc = "Godot enumerator name: `DEBUG_DRAW_VOXEL_GI_LIGHTING`"] pub const VOXEL_GI_LIGHTING : Self = Self { ord : 7 } ; # [doc (alias = "DEBUG_DRAW_VOXEL_GI_EMISSION")] # [doc = "Godot enumerator name: `DEBUG_DRAW_VOXEL_GI_EMISSION`"] pub const VOXEL_GI_EMISSION : Self = Self { ord : 8 } ; # [doc (alias = "DEBUG_DRAW_SHADOW_ATLAS")] # [doc = "Godot enumerator name: `DEBUG_DRAW_SHADOW_ATLAS`"] pub const SHADOW_ATLAS : Self = Self { ord : 9 } ; # [doc (alias = "DEBUG_DRAW_DIRECTIONAL_SHADOW_ATLAS")] # [doc = "Godot enumerator name: `DEBUG_DRAW_DIRECTIONAL_SHADOW_ATLAS`"] pub const DIRECTIONAL_SHADOW_ATLAS : Self = Self { ord : 10 } ; # [doc (alias = "DEBUG_DRAW_SCENE_LUMINANCE")] # [doc = "Godot enumerator name: `DEBUG_DRAW_SCENE_LUMINANCE`"] pub const SCENE_LUMINANCE : Self = Self { ord : 11 } ; # [doc (alias = "DEBUG_DRAW_SSAO")] # [doc = "Godot enumerator name: `DEBUG_DRAW_SSAO`"] pub const SSAO : Self = Self { ord : 12 } ; # [doc (alias = "DEBUG_DRAW_SSIL")] # [doc = "Godot enumerator name: `DEBUG_DRAW_SSIL`"] pub const SSIL : Self = Self { ord : 13 } ; # [doc (alias = "DEBUG_DRAW_PSSM_SPLITS")] # [doc = "Godot enumerator name: `DEBUG_DRAW_PSSM_SPLITS`"] pub const PSSM_SPLITS : Self = Self { ord : 14 } ; # [doc (alias = "DEBUG_DRAW_DECAL_ATLAS")] # [doc = "Godot enumerator name: `DEBUG_DRAW_DECAL_ATLAS`"] pub const DECAL_ATLAS : Self = Self { ord : 15 } ; # [doc (alias = "DEBUG_DRAW_SDFGI")] # [doc = "Godot enumerator name: `DEBUG_DRAW_SDFGI`"] pub const SDFGI : Self = Self { ord : 16 } ; # [doc (alias = "DEBUG_DRAW_SDFGI_PROBES")] # [doc = "Godot enumerator name: `DEBUG_DRAW_SDFGI_PROBES`"] pub const SDFGI_PROBES : Self = Self { ord : 17 } ; # [doc (alias = "DEBUG_DRAW_GI_BUFFER")] # [doc = "Godot enumerator name: `DEBUG_DRAW_GI_BUFFER`"] pub const GI_BUFFER : Self = Self { ord : 18 } ; # [doc (alias = "DEBUG_DRAW_DISABLE_LOD")] # [doc = "Godot enumerator name: `DEBUG_DRAW_DISABLE_LOD`"] pub const DISABLE_LOD : Self = Self { ord : 19 } ; # [doc (alias = "DEBUG_DRAW_CLUSTER_OMNI_LIGHTS")] # [doc = "Godot enumerator name: `DEBUG_DRAW_CLUSTER_OMNI_LIGHTS`"] pub const CLUSTER_OMNI_LIGHTS : Self = Self { ord : 20 } ; # [doc (alias = "DEBUG_DRAW_CLUSTER_SPOT_LIGHTS")] # [doc = "Godot enumerator name: `DEBUG_DRAW_CLUSTER_SPOT_LIGHTS`"] pub const CLUSTER_SPOT_LIGHTS : Self = Self { ord : 21 } ; # [doc (alias = "DEBUG_DRAW_CLUSTER_DECALS")] # [doc = "Godot enumerator name: `DEBUG_DRAW_CLUSTER_DECALS`"] pub const CLUSTER_DECALS : Self = Self { ord : 22 } ; # [doc (alias = "DEBUG_DRAW_CLUSTER_REFLECTION_PROBES")] # [doc = "Godot enumerator name: `DEBUG_DRAW_CLUSTER_REFLECTION_PROBES`"] pub const CLUSTER_REFLECTION_PROBES : Self = Self { ord : 23 } ; # [doc (alias = "DEBUG_DRAW_OCCLUDERS")] # [doc = "Godot enumerator name: `DEBUG_DRAW_OCCLUDERS`"] pub const OCCLUDERS : Self = Self { ord : 24 } ; # [doc (alias = "DEBUG_DRAW_MOTION_VECTORS")] # [doc = "Godot enumerator name: `DEBUG_DRAW_MOTION_VECTORS`"] pub const MOTION_VECTORS : Self = Self { ord : 25 } ; # [doc (alias = "DEBUG_DRAW_INTERNAL_BUFFER")] # [doc = "Godot enumerator name: `DEBUG_DRAW_INTERNAL_BUFFER`"] pub const INTERNAL_BUFFER : Self = Self { ord : 26 } ; # [allow (unreachable_patterns)] fn enumerator_name (self) -> Option < & 'static str > { match self { Self :: DISABLED => Some ("DISABLED") , Self :: UNSHADED => Some ("UNSHADED") , Self :: LIGHTING => Some ("LIGHTING") , Self :: OVERDRAW => Some ("OVERDRAW") , Self :: WIREFRAME => Some ("WIREFRAME") , Self :: NORMAL_BUFFER => Some ("NORMAL_BUFFER") , Self :: VOXEL_GI_ALBEDO => Some ("VOXEL_GI_ALBEDO") , Self :: VOXEL_GI_LIGHTING => Some ("VOXEL_GI_LIGHTING") , Self :: VOXEL_GI_EMISSION => Some ("VOXEL_GI_EMISSION") , Self :: SHADOW_ATLAS => Some ("SHADOW_ATLAS") , Self :: DIRECTIONAL_SHADOW_ATLAS => Some ("DIRECTIONAL_SHADOW_ATLAS") , Self :: SCENE_LUMINANCE => Some ("SCENE_LUMINANCE") , Self :: SSAO => Some ("SSAO") , Self :: SSIL => Some ("SSIL") , Self :: PSSM_SPLITS => Some ("PSSM_SPLITS") , Self :: DECAL_ATLAS => Some ("DECAL_ATLAS") , Self :: SDFGI => Some ("SDFGI") , Self :: SDFGI_PROBES => Some ("SDFGI_PROBES") , Self :: GI_BUFFER => Some ("GI_BUFFER") , Self :: DISABLE_LOD => Some ("DISABLE_LOD") , Self :: CLUSTER_OMNI_LIGHTS => Some ("CLUSTER_OMNI_LIGHTS") , Self :: CLUSTER_SPOT_LIGHTS => Some ("CLUSTER_SPOT_LIGHTS") , Self :: CLUSTER_DECALS => Some ("CLUSTER_DECALS") , Self :: CLUSTER_REFLECTION_PROBES => Some ("CLUSTER_REFLECTION_PROBES") , Self :: OCCLUDERS => Some ("OCCLUDERS") , Self :: MOTION_VECTORS => Some ("MOTION_VECTORS") , Self :: INTERNAL_BUFFER => Some ("INTERNAL_BUFFER") , _ => None , } } } impl std :: fmt :: Debug for DebugDraw { fn fmt (& self , f : & mut std :: fmt :: Formatter < '_ >) -> std :: fmt :: Result { match self . enumerator_name () { Some (enumerator) => f . write_str (enumerator) , None => f . debug_struct (stringify ! (DebugDraw)) . field ("ord" , & self . ord) . finish () , } } } impl crate :: obj :: EngineEnum for DebugDraw { fn try_from_ord (ord : i32) -> Option < Self > { match ord { 0 | 1 | 2 | 3 | 4 | 5 | 6 | 7 | 8 | 9 | 10 | 11 | 12 | 13 | 14 | 15 | 16 | 17 | 18 | 19 | 20 | 21 | 22 | 23 | 24 | 25 | 26 => Some (Self { ord }) , _ => None , } } fn ord (self) -> i32 { self . ord } } impl crate :: meta :: GodotConvert for DebugDraw { type Via = i32 ; } impl crate :: meta :: ToGodot for DebugDraw { fn to_godot (& self) -> Self :: Via { < Self as crate :: obj :: EngineEnum > :: ord (* self) } } impl crate :: meta :: FromGodot for DebugDraw { fn try_from_godot (via : Self :: Via) -> std :: result :: Result < Self , crate :: meta :: ConvertError > { Ok (Self { ord : via }) } } # [repr (transparent)] # [derive (Copy , Clone , Eq , PartialEq , Hash ,)] pub struct DefaultCanvasItemTextureFilter { ord : i32 } impl DefaultCanvasItemTextureFilter { # [doc (alias = "DEFAULT_CANVAS_ITEM_TEXTURE_FILTER_NEAREST")] # [doc = "Godot enumerator name: `DEFAULT_CANVAS_ITEM_TEXTURE_FILTER_NEAREST`"] pub const NEAREST : Self = Self { ord : 0 } ; # [doc (alias = "DEFAULT_CANVAS_ITEM_TEXTURE_FILTER_LINEAR")] # [doc = "Godot enumerator name: `DEFAULT_CANVAS_ITEM_TEXTURE_FILTER_LINEAR`"] pub const LINEAR : Self = Self { ord : 1 } ; # [doc (alias = "DEFAULT_CANVAS_ITEM_TEXTURE_FILTER_LINEAR_WITH_MIPMAPS")] # [doc = "Godot enumerator name: `DEFAULT_CANVAS_ITEM_TEXTURE_FILTER_LINEAR_WITH_MIPMAPS`"] pub const LINEAR_WITH_MIPMAPS : Self = Self { ord : 2 } ; # [doc (alias = "DEFAULT_CANVAS_ITEM_TEXTURE_FILTER_NEAREST_WITH_MIPMAPS")] # [doc = "Godot enumerator name: `DEFAULT_CANVAS_ITEM_TEXTURE_FILTER_NEAREST_WITH_MIPMAPS`"] pub const NEAREST_WITH_MIPMAPS : Self = Self { ord : 3 } ; # [doc (alias = "DEFAULT_CANVAS_ITEM_TEXTURE_FILTER_MAX")] # [doc = "Godot enumerator name: `DEFAULT_CANVAS_ITEM_TEXTURE_FILTER_MAX`"] pub const MAX : Self = Self { ord : 4 } ; # [allow (unreachable_patterns)] fn enumerator_name (self) -> Option < & 'static str > { match self { Self :: NEAREST => Some ("NEAREST") , Self :: LINEAR => Some ("LINEAR") , Self :: LINEAR_WITH_MIPMAPS => Some ("LINEAR_WITH_MIPMAPS") , Self :: NEAREST_WITH_MIPMAPS => Some ("NEAREST_WITH_MIPMAPS") , Self :: MAX => Some ("MAX") , _ => None , } } } impl std :: fmt :: Debug for DefaultCanvasItemTextureFilter { fn fmt (& self , f : & mut std :: fmt :: Formatter < '_ >) -> std :: fmt :: Result { match self . enumerator_name () { Some (enumerator) => f . write_str (enumerator) , None => f . debug_struct (stringify ! (DefaultCanvasItemTextureFilter)) . field ("ord" , & self . ord) . finish () , } } } impl crate :: obj :: EngineEnum for DefaultCanvasItemTextureFilter { fn try_from_ord (ord : i32) -> Option < Self > { match ord { 0 | 1 | 2 | 3 | 4 => Some (Self { ord }) , _ => None , } } fn ord (self) -> i32 { self . ord } } impl crate :: meta :: GodotConvert for DefaultCanvasItemTextureFilter { type Via = i32 ; } impl crate :: meta :: ToGodot for DefaultCanvasItemTextureFilter { fn to_godot (& self) -> Self :: Via { < Self as crate :: obj :: EngineEnum > :: ord (* self) } } impl crate :: meta :: FromGodot for DefaultCanvasItemTextureFilter { fn try_from_godot (via : Self :: Via) -> std :: result :: Result < Self , crate :: meta :: ConvertError > { Ok (Self { ord : via }) } } # [repr (transparent)] # [derive (Copy , Clone , Eq , PartialEq , Hash ,)] pub struct DefaultCanvasItemTextureRepeat { ord : i32 } impl DefaultCanvasItemTextureRepeat { # [doc (alias = "DEFAULT_CANVAS_ITEM_TEXTURE_REPEAT_DISABLED")] # [doc = "Godot enumerator name: `DEFAULT_CANVAS_ITEM_TEXTURE_REPEAT_DISABLED`"] pub const DISABLED : Self = Self { ord : 0 } ; # [doc (alias = "DEFAULT_CANVAS_ITEM_TEXTURE_REPEAT_ENABLED")] # [doc = "Godot enumerator name: `DEFAULT_CANVAS_ITEM_TEXTURE_REPEAT_ENABLED`"] pub const ENABLED : Self = Self { ord : 1 } ; # [doc (alias = "DEFAULT_CANVAS_ITEM_TEXTURE_REPEAT_MIRROR")] # [doc = "Godot enumerator name: `DEFAULT_CANVAS_ITEM_TEXTURE_REPEAT_MIRROR`"] pub const MIRROR : Self = Self { ord : 2 } ; # [doc (alias = "DEFAULT_CANVAS_ITEM_TEXTURE_REPEAT_MAX")] # [doc = "Godot enumerator name: `DEFAULT_CANVAS_ITEM_TEXTURE_REPEAT_MAX`"] pub const MAX : Self = Self { ord : 3 } ; # [allow (unreachable_patterns)] fn enumerator_name (self) -> Option < & 'static str > { match self { Self :: DISABLED => Some ("DISABLED") , Self :: ENABLED => Some ("ENABLED") , Self :: MIRROR => Some ("MIRROR") , Self :: MAX => Some ("MAX") , _ => None , } } } impl std :: fmt :: Debug for DefaultCanvasItemTextureRepeat { fn fmt (& self , f : & mut std :: fmt :: Formatter < '_ >) -> std :: fmt :: Result { match self . enumerator_name () { Some (enumerator) => f . write_str (enumerator) , None => f . debug_struct (stringify ! (DefaultCanvasItemTextureRepeat)) . field ("ord" , & self . ord) . finish () , } } } impl crate :: obj :: EngineEnum for DefaultCanvasItemTextureRepeat { fn try_from_ord (ord : i32) -> Option < Self > { match ord { 0 | 1 | 2 | 3 => Some (Self { ord }) , _ => None , } } fn ord (self) -> i32 { self . ord } } impl crate :: meta :: GodotConvert for DefaultCanvasItemTextureRepeat { type Via = i32 ; } impl crate :: meta :: ToGodot for DefaultCanvasItemTextureRepeat { fn to_godot (& self) -> Self :: Via { < Self as crate :: obj :: EngineEnum > :: ord (* self) } } impl crate :: meta :: FromGodot for DefaultCanvasItemTextureRepeat { fn try_from_godot (via : Self :: Via) -> std :: result :: Result < Self , crate :: meta :: ConvertError > { Ok (Self { ord : via }) } } # [doc = "Godot enum name: `SDFOversize`."] # [repr (transparent)] # [derive (Copy , Clone , Eq , PartialEq , Hash ,)] pub struct SdfOversize { ord : i32 } impl SdfOversize { pub const SDF_OVERSIZE_100_PERCENT : Self = Self { ord : 0 } ; pub const SDF_OVERSIZE_120_PERCENT : Self = Self { ord : 1 } ; pub const SDF_OVERSIZE_150_PERCENT : Self = Self { ord : 2 } ; pub const SDF_OVERSIZE_200_PERCENT : Self = Self { ord : 3 } ; # [doc (alias = "SDF_OVERSIZE_MAX")] # [doc = "Godot enumerator name: `SDF_OVERSIZE_MAX`"] pub const MAX : Self = Self { ord : 4 } ; # [allow (unreachable_patterns)] fn enumerator_name (self) -> Option < & 'static str > { match self { Self :: SDF_OVERSIZE_100_PERCENT => Some ("SDF_OVERSIZE_100_PERCENT") , Self :: SDF_OVERSIZE_120_PERCENT => Some ("SDF_OVERSIZE_120_PERCENT") , Self :: SDF_OVERSIZE_150_PERCENT => Some ("SDF_OVERSIZE_150_PERCENT") , Self :: SDF_OVERSIZE_200_PERCENT => Some ("SDF_OVERSIZE_200_PERCENT") , Self :: MAX => Some ("MAX") , _ => None , } } } impl std :: fmt :: Debug for SdfOversize { fn fmt (& self , f : & mut std :: fmt :: Formatter < '_ >) -> std :: fmt :: Result { match self . enumerator_name () { Some (enumerator) => f . write_str (enumerator) , None => f . debug_struct (stringify ! (SdfOversize)) . field ("ord" , & self . ord) . finish () , } } } impl crate :: obj :: EngineEnum for SdfOversize { fn try_from_ord (ord : i32) -> Option < Self > { match ord { 0 | 1 | 2 | 3 | 4 => Some (Self { ord }) , _ => None , } } fn ord (self) -> i32 { self . ord } } impl crate :: meta :: GodotConvert for SdfOversize { type Via = i32 ; } impl crate :: meta :: ToGodot for SdfOversize { fn to_godot (& self) -> Self :: Via { < Self as crate :: obj :: EngineEnum > :: ord (* self) } } impl crate :: meta :: FromGodot for SdfOversize { fn try_from_godot (via : Self :: Via) -> std :: result :: Result < Self , crate :: meta :: ConvertError > { Ok (Self { ord : via }) } } # [doc = "Godot enum name: `SDFScale`."] # [repr (transparent)] # [derive (Copy , Clone , Eq , PartialEq , Hash ,)] pub struct SdfScale { ord : i32 } impl SdfScale { pub const SDF_SCALE_100_PERCENT : Self = Self { ord : 0 } ; pub const SDF_SCALE_50_PERCENT : Self = Self { ord : 1 } ; pub const SDF_SCALE_25_PERCENT : Self = Self { ord : 2 } ; # [doc (alias = "SDF_SCALE_MAX")] # [doc = "Godot enumerator name: `SDF_SCALE_MAX`"] pub const MAX : Self = Self { ord : 3 } ; # [allow (unreachable_patterns)] fn enumerator_name (self) -> Option < & 'static str > { match self { Self :: SDF_SCALE_100_PERCENT => Some ("SDF_SCALE_100_PERCENT") , Self :: SDF_SCALE_50_PERCENT => Some ("SDF_SCALE_50_PERCENT") , Self :: SDF_SCALE_25_PERCENT => Some ("SDF_SCALE_25_PERCENT") , Self :: MAX => Some ("MAX") , _ => None , } } } impl std :: fmt :: Debug for SdfScale { fn fmt (& self , f : & mut std :: fmt :: Formatter < '_ >) -> std :: fmt :: Result { match self . enumerator_name () { Some (enumerator) => f . write_str (enumerator) , None => f . debug_struct (stringify ! (SdfScale)) . field ("ord" , & self . ord) . finish () , } } } impl crate :: obj :: EngineEnum for SdfScale { fn try_from_ord (ord : i32) -> Option < Self > { match ord { 0 | 1 | 2 | 3 => Some (Self { ord }) , _ => None , } } fn ord (self) -> i32 { self . ord } } impl crate :: meta :: GodotConvert for SdfScale { type Via = i32 ; } impl crate :: meta :: ToGodot for SdfScale { fn to_godot (& self) -> Self :: Via { < Self as crate :: obj :: EngineEnum > :: ord (* self) } } impl crate :: meta :: FromGodot for SdfScale { fn try_from_godot (via : Self :: Via) -> std :: result :: Result < Self , crate :: meta :: ConvertError > { Ok (Self { ord : via }) } } # [doc = "Godot enum name: `VRSMode`."] # [repr (transparent)] # [derive (Copy , Clone , Eq , PartialEq , Hash ,)] pub struct VrsMode { ord : i32 } impl VrsMode { # [doc (alias = "VRS_DISABLED")] # [doc = "Godot enumerator name: `VRS_DISABLED`"] pub const DISABLED : Self = Self { ord : 0 } ; # [doc (alias = "VRS_TEXTURE")] # [doc = "Godot enumerator name: `VRS_TEXTURE`"] pub const TEXTURE : Self = Self { ord : 1 } ; # [doc (alias = "VRS_XR")] # [doc = "Godot enumerator name: `VRS_XR`"] pub const XR : Self = Self { ord : 2 } ; # [doc (alias = "VRS_MAX")] # [doc = "Godot enumerator name: `VRS_MAX`"] pub const MAX : Self = Self { ord : 3 } ; # [allow (unreachable_patterns)] fn enumerator_name (self) -> Option < & 'static str > { match self { Self :: DISABLED => Some ("DISABLED") , Self :: TEXTURE => Some ("TEXTURE") , Self :: XR => Some ("XR") , Self :: MAX => Some ("MAX") , _ => None , } } } impl std :: fmt :: Debug for VrsMode { fn fmt (& self , f : & mut std :: fmt :: Formatter < '_ >) -> std :: fmt :: Result { match self . enumerator_name () { Some (enumerator) => f . write_str (enumerator) , None => f . debug_struct (stringify ! (VrsMode)) . field ("ord" , & self . ord) . finish () , } } } impl crate :: obj :: EngineEnum for VrsMode { fn try_from_ord (ord : i32) -> Option < Self > { match ord { 0 | 1 | 2 | 3 => Some (Self { ord }) , _ => None , } } fn ord (self) -> i32 { self . ord } } impl crate :: meta :: GodotConvert for VrsMode { type Via = i32 ; } impl crate :: meta :: ToGodot for VrsMode { fn to_godot (& self) -> Self :: Via { < Self as crate :: obj :: EngineEnum > :: ord (* self) } } impl crate :: meta :: FromGodot for VrsMode { fn try_from_godot (via : Self :: Via) -> std :: result :: Result < Self , crate :: meta :: ConvertError > { Ok (Self { ord : via }) } } # [doc = "Godot enum name: `VRSUpdateMode`."] # [repr (transparent)] # [derive (Copy , Clone , Eq , PartialEq , Hash ,)] pub struct VrsUpdateMode { ord : i32 } impl VrsUpdateMode { # [doc (alias = "VRS_UPDATE_DISABLED")] # [doc = "Godot enumerator name: `VRS_UPDATE_DISABLED`"] pub const DISABLED : Self = Self { ord : 0 } ; # [doc (alias = "VRS_UPDATE_ONCE")] # [doc = "Godot enumerator name: `VRS_UPDATE_ONCE`"] pub const ONCE : Self = Self { ord : 1 } ; # [doc (alias = "VRS_UPDATE_ALWAYS")] # [doc = "Godot enumerator name: `VRS_UPDATE_ALWAYS`"] pub const ALWAYS : Self = Self { ord : 2 } ; # [doc (alias = "VRS_UPDATE_MAX")] # [doc = "Godot enumerator name: `VRS_UPDATE_MAX`"] pub const MAX : Self = Self { ord : 3 } ; # [allow (unreachable_patterns)] fn enumerator_name (self) -> Option < & 'static str > { match self { Self :: DISABLED => Some ("DISABLED") , Self :: ONCE => Some ("ONCE") , Self :: ALWAYS => Some ("ALWAYS") , Self :: MAX => Some ("MAX") , _ => None , } } } impl std :: fmt :: Debug for VrsUpdateMode { fn fmt (& self , f : & mut std :: fmt :: Formatter < '_ >) -> std :: fmt :: Result { match self . enumerator_name () { Some (enumerator) => f . write_str (enumerator) , None => f . debug_struct (stringify ! (VrsUpdateMode)) . field ("ord" , & self . ord) . finish () , } } } impl crate :: obj :: EngineEnum for VrsUpdateMode { fn try_from_ord (ord : i32) -> Option < Self > { match ord { 0 | 1 | 2 | 3 => Some (Self { ord }) , _ => None , } } fn ord (self) -> i32 { self . ord } } impl crate :: meta :: GodotConvert for VrsUpdateMode { type Via = i32 ; } impl crate :: meta :: ToGodot for VrsUpdateMode { fn to_godot (& self) -> Self :: Via { < Self as crate :: obj :: EngineEnum > :: ord (* self) } } impl crate :: meta :: FromGodot for VrsUpdateMode { fn try_from_godot (via : Self :: Via) -> std :: result :: Result < Self , crate :: meta :: ConvertError > { Ok (Self { ord : via }) } } # [doc = "Properties declared by [`Viewport`][super::Viewport], as interned engine names."] pub struct PropertyName ; impl PropertyName { pub const DISABLE_3D : InternedName = InternedName :: new ("disable_3d") ; pub const USE_XR : InternedName = InternedName :: new ("use_xr") ; pub const OWN_WORLD_3D : InternedName = InternedName :: new ("own_world_3d") ; pub const WORLD_3D : InternedName = InternedName :: new ("world_3d") ; pub const WORLD_2D : InternedName = InternedName :: new ("world_2d") ; pub const TRANSPARENT_BG : InternedName = InternedName :: new ("transparent_bg") ; pub const HANDLE_INPUT_LOCALLY : InternedName = InternedName :: new ("handle_input_locally") ; pub const SNAP_2D_TRANSFORMS_TO_PIXEL : InternedName = InternedName :: new ("snap_2d_transforms_to_pixel") ; pub const SNAP_2D_VERTICES_TO_PIXEL : InternedName = InternedName :: new ("snap_2d_vertices_to_pixel") ; pub const MSAA_2D : InternedName = InternedName :: new ("msaa_2d") ; pub const MSAA_3D : InternedName = InternedName :: new ("msaa_3d") ; pub const SCREEN_SPACE_AA : InternedName = InternedName :: new ("screen_space_aa") ; pub const USE_TAA : InternedName = InternedName :: new ("use_taa") ; pub const USE_DEBANDING : InternedName = InternedName :: new ("use_debanding") ; pub const USE_OCCLUSION_CULLING : InternedName = InternedName :: new ("use_occlusion_culling") ; pub const MESH_LOD_THRESHOLD : InternedName = InternedName :: new ("mesh_lod_threshold") ; pub const DEBUG_DRAW : InternedName = InternedName :: new ("debug_draw") ; pub const USE_HDR_2D : InternedName = InternedName :: new ("use_hdr_2d") ; pub const SCALING_3D_MODE : InternedName = InternedName :: new ("scaling_3d_mode") ; pub const SCALING_3D_SCALE : InternedName = InternedName :: new ("scaling_3d_scale") ; pub const TEXTURE_MIPMAP_BIAS : InternedName = InternedName :: new ("texture_mipmap_bias") ; pub const FSR_SHARPNESS : InternedName = InternedName :: new ("fsr_sharpness") ; pub const VRS_MODE : InternedName = InternedName :: new ("vrs_mode") ; pub const VRS_UPDATE_MODE : InternedName = InternedName :: new ("vrs_update_mode") ; pub const VRS_TEXTURE : InternedName = InternedName :: new ("vrs_texture") ; pub const CANVAS_ITEM_DEFAULT_TEXTURE_FILTER : InternedName = InternedName :: new ("canvas_item_default_texture_filter") ; pub const CANVAS_ITEM_DEFAULT_TEXTURE_REPEAT : InternedName = InternedName :: new ("canvas_item_default_texture_repeat") ; pub const AUDIO_LISTENER_ENABLE_2D : InternedName = InternedName :: new ("audio_listener_enable_2d") ; pub const AUDIO_LISTENER_ENABLE_3D : InternedName = InternedName :: new ("audio_listener_enable_3d") ; pub const PHYSICS_OBJECT_PICKING : InternedName = InternedName :: new ("physics_object_picking") ; pub const PHYSICS_OBJECT_PICKING_SORT : InternedName = InternedName :: new ("physics_object_picking_sort") ; pub const PHYSICS_OBJECT_PICKING_FIRST_ONLY : InternedName = InternedName :: new ("physics_object_picking_first_only") ; pub const GUI_DISABLE_INPUT : InternedName = InternedName :: new ("gui_disable_input") ; pub const GUI_SNAP_CONTROLS_TO_PIXELS : InternedName = InternedName :: new ("gui_snap_controls_to_pixels") ; pub const GUI_EMBED_SUBWINDOWS : InternedName = InternedName :: new ("gui_embed_subwindows") ; pub const SDF_OVERSIZE : InternedName = InternedName :: new ("sdf_oversize") ; pub const SDF_SCALE : InternedName = InternedName :: new ("sdf_scale") ; pub const POSITIONAL_SHADOW_ATLAS_SIZE : InternedName = InternedName :: new ("positional_shadow_atlas_size") ; pub const POSITIONAL_SHADOW_ATLAS_16_BITS : InternedName = InternedName :: new ("positional_shadow_atlas_16_bits") ; pub const POSITIONAL_SHADOW_ATLAS_QUAD_0 : InternedName = InternedName :: new ("positional_shadow_atlas_quad_0") ; pub const POSITIONAL_SHADOW_ATLAS_QUAD_1 : InternedName = InternedName :: new ("positional_shadow_atlas_quad_1") ; pub const POSITIONAL_SHADOW_ATLAS_QUAD_2 : InternedName = InternedName :: new ("positional_shadow_atlas_quad_2") ; pub const POSITIONAL_SHADOW_ATLAS_QUAD_3 : InternedName = InternedName :: new ("positional_shadow_atlas_quad_3") ; pub const CANVAS_TRANSFORM : InternedName = InternedName :: new ("canvas_transform") ; pub const GLOBAL_CANVAS_TRANSFORM : InternedName = InternedName :: new ("global_canvas_transform") ; pub const CANVAS_CULL_MASK : InternedName = InternedName :: new ("canvas_cull_mask") ; } # [doc = "Methods declared by [`Viewport`][super::Viewport], as interned engine names."] pub struct MethodName ; impl MethodName { pub const GET_VISIBLE_RECT : InternedName = InternedName :: new ("get_visible_rect") ; pub const SET_TRANSPARENT_BACKGROUND : InternedName = InternedName :: new ("set_transparent_background") ; pub const HAS_TRANSPARENT_BACKGROUND : InternedName = InternedName :: new ("has_transparent_background") ; pub const SET_USE_HDR_2D : InternedName = InternedName :: new ("set_use_hdr_2d") ; pub const IS_USING_HDR_2D : InternedName = InternedName :: new ("is_using_hdr_2d") ; pub const SET_MSAA_2D : InternedName = InternedName :: new ("set_msaa_2d") ; pub const GET_MSAA_2D : InternedName = InternedName :: new ("get_msaa_2d") ; pub const SET_MSAA_3D : InternedName = InternedName :: new ("set_msaa_3d") ; pub const GET_MSAA_3D : InternedName = InternedName :: new ("get_msaa_3d") ; pub const SET_SCREEN_SPACE_AA : InternedName = InternedName :: new ("set_screen_space_aa") ; pub const GET_SCREEN_SPACE_AA : InternedName = InternedName :: new ("get_screen_space_aa") ; pub const SET_USE_TAA : InternedName = InternedName :: new ("set_use_taa") ; pub const IS_USING_TAA : InternedName = InternedName :: new ("is_using_taa") ; pub const SET_USE_DEBANDING : InternedName = InternedName :: new ("set_use_debanding") ; pub const IS_USING_DEBANDING : InternedName = InternedName :: new ("is_using_debanding") ; pub const SET_USE_OCCLUSION_CULLING : InternedName = InternedName :: new ("set_use_occlusion_culling") ; pub const IS_USING_OCCLUSION_CULLING : InternedName = InternedName :: new ("is_using_occlusion_culling") ; pub const SET_DEBUG_DRAW : InternedName = InternedName :: new ("set_debug_draw") ; pub const GET_DEBUG_DRAW : InternedName = InternedName :: new ("get_debug_draw") ; pub const GET_RENDER_INFO : InternedName = InternedName :: new ("get_render_info") ; pub const SET_PHYSICS_OBJECT_PICKING : InternedName = InternedName :: new ("set_physics_object_picking") ; pub const GET_PHYSICS_OBJECT_PICKING : InternedName = InternedName :: new ("get_physics_object_picking") ; pub const SET_PHYSICS_OBJECT_PICKING_SORT : InternedName = InternedName :: new ("set_physics_object_picking_sort") ; pub const GET_PHYSICS_OBJECT_PICKING_SORT : InternedName = InternedName :: new ("get_physics_object_picking_sort") ; pub const SET_PHYSICS_OBJECT_PICKING_FIRST_ONLY : InternedName = InternedName :: new ("set_physics_object_picking_first_only") ; pub const GET_PHYSICS_OBJECT_PICKING_FIRST_ONLY : InternedName = InternedName :: new ("get_physics_object_picking_first_only") ; pub const GET_VIEWPORT_RID : InternedName = InternedName :: new ("get_viewport_rid") ; pub const PUSH_TEXT_INPUT : InternedName = InternedName :: new ("push_text_input") ; pub const PUSH_INPUT : InternedName = InternedName :: new ("push_input") ; pub const PUSH_UNHANDLED_INPUT : InternedName = InternedName :: new ("push_unhandled_input") ; pub const GET_MOUSE_POSITION : InternedName = InternedName :: new ("get_mouse_position") ; pub const WARP_MOUSE : InternedName = InternedName :: new ("warp_mouse") ; pub const UPDATE_MOUSE_CURSOR_STATE : InternedName = InternedName :: new ("update_mouse_cursor_state") ; pub const GUI_GET_DRAG_DATA : InternedName = InternedName :: new ("gui_get_drag_data") ; pub const GUI_IS_DRAGGING : InternedName = InternedName :: new ("gui_is_dragging") ; pub const GUI_IS_DRAG_SUCCESSFUL : InternedName = InternedName :: new ("gui_is_drag_successful") ; pub const GUI_RELEASE_FOCUS : InternedName = InternedName :: new ("gui_release_focus") ; pub const GUI_GET_FOCUS_OWNER : InternedName = InternedName :: new ("gui_get_focus_owner") ; pub const GUI_GET_HOVERED_CONTROL : InternedName = InternedName :: new ("gui_get_hovered_control") ; pub const SET_DISABLE_INPUT : InternedName = InternedName :: new ("set_disable_input") ; pub const IS_INPUT_DISABLED : InternedName = InternedName :: new ("is_input_disabled") ; pub const SET_POSITIONAL_SHADOW_ATLAS_SIZE : InternedName = InternedName :: new ("set_positional_shadow_atlas_size") ; pub const GET_POSITIONAL_SHADOW_ATLAS_SIZE : InternedName = InternedName :: new ("get_positional_shadow_atlas_size") ; pub const SET_POSITIONAL_SHADOW_ATLAS_16_BITS : InternedName = InternedName :: new ("set_positional_shadow_atlas_16_bits") ; pub const GET_POSITIONAL_SHADOW_ATLAS_16_BITS : InternedName = InternedName :: new ("get_positional_shadow_atlas_16_bits") ; pub const SET_SNAP_CONTROLS_TO_PIXELS : InternedName = InternedName :: new ("set_snap_controls_to_pixels") ; pub const IS_SNAP_CONTROLS_TO_PIXELS_ENABLED : InternedName = InternedName :: new ("is_snap_controls_to_pixels_enabled") ; pub const SET_SNAP_2D_TRANSFORMS_TO_PIXEL : InternedName = InternedName :: new ("set_snap_2d_transforms_to_pixel") ; pub const IS_SNAP_2D_TRANSFORMS_TO_PIXEL_ENABLED : InternedName = InternedName :: new ("is_snap_2d_transforms_to_pixel_enabled") ; pub const SET_SNAP_2D_VERTICES_TO_PIXEL : InternedName = InternedName :: new ("set_snap_2d_vertices_to_pixel") ; pub const IS_SNAP_2D_VERTICES_TO_PIXEL_ENABLED : InternedName = InternedName :: new ("is_snap_2d_vertices_to_pixel_enabled") ; pub const SET_POSITIONAL_SHADOW_ATLAS_QUADRANT_SUBDIV : InternedName = InternedName :: new ("set_positional_shadow_atlas_quadrant_subdiv") ; pub const GET_POSITIONAL_SHADOW_ATLAS_QUADRANT_SUBDIV : InternedName = InternedName :: new ("get_positional_shadow_atlas_quadrant_subdiv") ; pub const SET_INPUT_AS_HANDLED : InternedName = InternedName :: new ("set_input_as_handled") ; pub const IS_INPUT_HANDLED : InternedName = InternedName :: new ("is_input_handled") ; pub const SET_HANDLE_INPUT_LOCALLY : InternedName = InternedName :: new ("set_handle_input_locally") ; pub const IS_HANDLING_INPUT_LOCALLY : InternedName = InternedName :: new ("is_handling_input_locally") ; pub const SET_DEFAULT_CANVAS_ITEM_TEXTURE_FILTER : InternedName = InternedName :: new ("set_default_canvas_item_texture_filter") ; pub const GET_DEFAULT_CANVAS_ITEM_TEXTURE_FILTER : InternedName = InternedName :: new ("get_default_canvas_item_texture_filter") ; pub const SET_EMBEDDING_SUBWINDOWS : InternedName = InternedName :: new ("set_embedding_subwindows") ; pub const IS_EMBEDDING_SUBWINDOWS : InternedName = InternedName :: new ("is_embedding_subwindows") ; pub const SET_CANVAS_CULL_MASK : InternedName = InternedName :: new ("set_canvas_cull_mask") ; pub const GET_CANVAS_CULL_MASK : InternedName = InternedName :: new ("get_canvas_cull_mask") ; pub const SET_CANVAS_CULL_MASK_BIT : InternedName = InternedName :: new ("set_canvas_cull_mask_bit") ; pub const GET_CANVAS_CULL_MASK_BIT : InternedName = InternedName :: new ("get_canvas_cull_mask_bit") ; pub const SET_DEFAULT_CANVAS_ITEM_TEXTURE_REPEAT : InternedName = InternedName :: new ("set_default_canvas_item_texture_repeat") ; pub const GET_DEFAULT_CANVAS_ITEM_TEXTURE_REPEAT : InternedName = InternedName :: new ("get_default_canvas_item_texture_repeat") ; pub const SET_SDF_OVERSIZE : InternedName = InternedName :: new ("set_sdf_oversize") ; pub const GET_SDF_OVERSIZE : InternedName = InternedName :: new ("get_sdf_oversize") ; pub const SET_SDF_SCALE : InternedName = InternedName :: new ("set_sdf_scale") ; pub const GET_SDF_SCALE : InternedName = InternedName :: new ("get_sdf_scale") ; pub const SET_MESH_LOD_THRESHOLD : InternedName = InternedName :: new ("set_mesh_lod_threshold") ; pub const GET_MESH_LOD_THRESHOLD : InternedName = InternedName :: new ("get_mesh_lod_threshold") ; pub const SET_AS_AUDIO_LISTENER_2D : InternedName = InternedName :: new ("set_as_audio_listener_2d") ; pub const IS_AUDIO_LISTENER_2D : InternedName = InternedName :: new ("is_audio_listener_2d") ; pub const SET_USE_OWN_WORLD_3D : InternedName = InternedName :: new ("set_use_own_world_3d") ; pub const IS_USING_OWN_WORLD_3D : InternedName = InternedName :: new ("is_using_own_world_3d") ; pub const SET_AS_AUDIO_LISTENER_3D : InternedName = InternedName :: new ("set_as_audio_listener_3d") ; pub const IS_AUDIO_LISTENER_3D : InternedName = InternedName :: new ("is_audio_listener_3d") ; pub const SET_DISABLE_3D : InternedName = InternedName :: new ("set_disable_3d") ; pub const IS_3D_DISABLED : InternedName = InternedName :: new ("is_3d_disabled") ; pub const SET_USE_XR : InternedName = InternedName :: new ("set_use_xr") ; pub const IS_USING_XR : InternedName = InternedName :: new ("is_using_xr") ; pub const SET_SCALING_3D_MODE : InternedName = InternedName :: new ("set_scaling_3d_mode") ; pub const GET_SCALING_3D_MODE : InternedName = InternedName :: new ("get_scaling_3d_mode") ; pub const SET_SCALING_3D_SCALE : InternedName = InternedName :: new ("set_scaling_3d_scale") ; pub const GET_SCALING_3D_SCALE : InternedName = InternedName :: new ("get_scaling_3d_scale") ; pub const SET_FSR_SHARPNESS : InternedName = InternedName :: new ("set_fsr_sharpness") ; pub const GET_FSR_SHARPNESS : InternedName = InternedName :: new ("get_fsr_sharpness") ; pub const SET_TEXTURE_MIPMAP_BIAS : InternedName = InternedName :: new ("set_texture_mipmap_bias") ; pub const GET_TEXTURE_MIPMAP_BIAS : InternedName = InternedName :: new ("get_texture_mipmap_bias") ; pub const SET_VRS_MODE : InternedName = InternedName :: new ("set_vrs_mode") ; pub const GET_VRS_MODE : InternedName = InternedName :: new ("get_vrs_mode") ; pub const SET_VRS_UPDATE_MODE : InternedName = InternedName :: new ("set_vrs_update_mode") ; pub const GET_VRS_UPDATE_MODE : InternedName = InternedName :: new ("get_vrs_update_mode") ; pub const SET_VRS_TEXTURE : InternedName = InternedName :: new ("set_vrs_texture") ; pub const GET_VRS_TEXTURE : InternedName = InternedName :: new ("get_vrs_texture") ; } # [doc = "Signals declared by [`Viewport`][super::Viewport], as interned engine names."] pub struct SignalName ; impl SignalName { pub const SIZE_CHANGED : InternedName = InternedName :: new ("size_changed") ; pub const GUI_FOCUS_CHANGED : InternedName = InternedName :: new ("gui_focus_changed") ; } # [doc = "A collection of signals for the [`Viewport`][crate::classes::Viewport] class."] pub struct SignalsOfViewport < 'c > { __base : crate :: classes :: node :: SignalsOfNode < 'c > , } impl < 'c > SignalsOfViewport < 'c > { # [doc (hidden)] pub fn __new (object : SignalObject < 'c >) -> Self { Self { __base : crate :: classes :: node :: SignalsOfNode :: __new (object) } } # [doc (hidden)] pub fn __object (& self) -> SignalObject < 'c > { self . __base . __object () } # [doc = "Signature: `()`"] pub fn size_changed (& mut self) -> SigSizeChanged < 'c > { SigSizeChanged { typed : TypedSignal :: __new (self . __object () , "size_changed") , } } # [doc = "Signature: `(node: Option<Gd<Control>>)`"] pub fn gui_focus_changed (& mut self) -> SigGuiFocusChanged < 'c > { SigGuiFocusChanged { typed : TypedSignal :: __new (self . __object () , "gui_focus_changed") , } } } impl < 'c > std :: ops :: Deref for SignalsOfViewport < 'c > { type Target = crate :: classes :: node :: SignalsOfNode < 'c > ; fn deref (& self) -> & Self :: Target { & self . __base } } impl std :: ops :: DerefMut for SignalsOfViewport < '_ > { fn deref_mut (& mut self) -> & mut Self :: Target { & mut self . __base } } type TypedSigSizeChanged < 'c > = TypedSignal < 'c , () > ; pub struct SigSizeChanged < 'c > { typed : TypedSigSizeChanged < 'c > , } impl SigSizeChanged < '_ > { pub fn emit (& mut self ,) { self . typed . emit_tuple (()) ; } } impl < 'c > std :: ops :: Deref for SigSizeChanged < 'c > { type Target = TypedSigSizeChanged < 'c > ; fn deref (& self) -> & Self :: Target { & self . typed } } impl std :: ops :: DerefMut for SigSizeChanged < '_ > { fn deref_mut (& mut self) -> & mut Self :: Target { & mut self . typed } } type TypedSigGuiFocusChanged < 'c > = TypedSignal < 'c , (Option < Gd < crate :: classes :: Control > > ,) > ; pub struct SigGuiFocusChanged < 'c > { typed : TypedSigGuiFocusChanged < 'c > , } impl SigGuiFocusChanged < '_ > { pub fn emit (& mut self , node : Option < Gd < crate :: classes :: Control > > ,) { self . typed . emit_tuple ((node ,)) ; } } impl < 'c > std :: ops :: Deref for SigGuiFocusChanged < 'c > { type Target = TypedSigGuiFocusChanged < 'c > ; fn deref (& self) -> & Self :: Target { & self . typed } } impl std :: ops :: DerefMut for SigGuiFocusChanged < '_ > { fn deref_mut (& mut self) -> & mut Self :: Target { & mut self . typed } }