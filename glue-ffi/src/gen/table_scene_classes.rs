pub struct ClassSceneMethodTable { function_pointers : Vec < crate :: ClassMethodBind > , } impl ClassSceneMethodTable { pub const CLASS_COUNT : usize = 19usize ; pub const METHOD_COUNT : usize = 997usize ; # [allow (clippy :: missing_safety_doc)] pub unsafe fn load (interface : & crate :: GDExtensionInterface , string_names : & mut crate :: StringCache ,) -> Self { let fetch_fptr = interface . classdb_get_method_bind ; let mut function_pointers = Vec :: with_capacity (997usize) ; load_canvas_item_methods (& mut function_pointers , string_names , fetch_fptr) ; load_control_methods (& mut function_pointers , string_names , fetch_fptr) ; load_font_methods (& mut function_pointers , string_names , fetch_fptr) ; load_geometry_instance_3d_methods (& mut function_pointers , string_names , fetch_fptr) ; load_input_event_methods (& mut function_pointers , string_names , fetch_fptr) ; load_item_list_methods (& mut function_pointers , string_names , fetch_fptr) ; load_label_3d_methods (& mut function_pointers , string_names , fetch_fptr) ; load_node_methods (& mut function_pointers , string_names , fetch_fptr) ; load_node_2d_methods (& mut function_pointers , string_names , fetch_fptr) ; load_node_3d_methods (& mut function_pointers , string_names , fetch_fptr) ; load_scene_tree_methods (& mut function_pointers , string_names , fetch_fptr) ; load_scene_tree_timer_methods (& mut function_pointers , string_names , fetch_fptr) ; load_texture_2d_methods (& mut function_pointers , string_names , fetch_fptr) ; load_theme_methods (& mut function_pointers , string_names , fetch_fptr) ; load_tile_map_methods (& mut function_pointers , string_names , fetch_fptr) ; load_tile_set_methods (& mut function_pointers , string_names , fetch_fptr) ; load_viewport_methods (& mut function_pointers , string_names , fetch_fptr) ; load_visual_instance_3d_methods (& mut function_pointers , string_names , fetch_fptr) ; load_window_methods (& mut function_pointers , string_names , fetch_fptr) ; Self { function_pointers } } # [inline (always)] pub fn fptr_by_index (& self , index : usize) -> crate :: ClassMethodBind { unsafe { * self . function_pointers . get_unchecked (index) } } } fn load_canvas_item_methods (function_pointers : & mut Vec < crate :: ClassMethodBind > , string_names : & mut crate :: StringCache , fetch_fptr : crate :: GDExtensionInterfaceClassdbGetMethodBind ,) { let sname_canvas_item = string_names . fetch ("CanvasItem") ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_canvas_item) , "CanvasItem" , "get_canvas_item" , 2944877500i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_canvas_item) , "CanvasItem" , "set_visible" , 2586408642i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_canvas_item) , "CanvasItem" , "is_visible" , 36873697i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_canvas_item) , "CanvasItem" , "is_visible_in_tree" , 36873697i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_canvas_item) , "CanvasItem" , "show" , 3218959716i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_canvas_item) , "CanvasItem" , "hide" , 3218959716i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_canvas_item) , "CanvasItem" , "queue_redraw" , 3218959716i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_canvas_item) , "CanvasItem" , "move_to_front" , 3218959716i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_canvas_item) , "CanvasItem" , "set_as_top_level" , 2586408642i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_canvas_item) , "CanvasItem" , "is_set_as_top_level" , 36873697i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_canvas_item) , "CanvasItem" , "set_light_mask" , 1286410249i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_canvas_item) , "CanvasItem" , "get_light_mask" , 3905245786i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_canvas_item) , "CanvasItem" , "set_modulate" , 2920490490i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_canvas_item) , "CanvasItem" , "get_modulate" , 3444240500i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_canvas_item) , "CanvasItem" , "set_self_modulate" , 2920490490i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_canvas_item) , "CanvasItem" , "get_self_modulate" , 3444240500i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_canvas_item) , "CanvasItem" , "set_z_index" , 1286410249i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_canvas_item) , "CanvasItem" , "get_z_index" , 3905245786i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_canvas_item) , "CanvasItem" , "set_z_as_relative" , 2586408642i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_canvas_item) , "CanvasItem" , "is_z_relative" , 36873697i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_canvas_item) , "CanvasItem" , "set_y_sort_enabled" , 2586408642i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_canvas_item) , "CanvasItem" , "is_y_sort_enabled" , 36873697i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_canvas_item) , "CanvasItem" , "set_draw_behind_parent" , 2586408642i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_canvas_item) , "CanvasItem" , "is_draw_behind_parent_enabled" , 36873697i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_canvas_item) , "CanvasItem" , "draw_line" , 1562330099i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_canvas_item) , "CanvasItem" , "draw_dashed_line" , 3653831622i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_canvas_item) , "CanvasItem" , "draw_arc" , 4140652635i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_canvas_item) , "CanvasItem" , "draw_rect" , 2773573813i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_canvas_item) , "CanvasItem" , "draw_circle" , 3153026596i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_canvas_item) , "CanvasItem" , "draw_texture" , 520200117i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_canvas_item) , "CanvasItem" , "draw_texture_rect" , 3832805018i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_canvas_item) , "CanvasItem" , "draw_texture_rect_region" , 3883821411i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_canvas_item) , "CanvasItem" , "draw_msdf_texture_rect_region" , 4219163252i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_canvas_item) , "CanvasItem" , "draw_lcd_texture_rect_region" , 3212350954i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_canvas_item) , "CanvasItem" , "draw_char" , 3339793283i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_canvas_item) , "CanvasItem" , "draw_char_outline" , 3302344391i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_canvas_item) , "CanvasItem" , "draw_set_transform" , 288975085i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_canvas_item) , "CanvasItem" , "draw_animation_slice" , 3112831842i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_canvas_item) , "CanvasItem" , "draw_end_animation" , 3218959716i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_canvas_item) , "CanvasItem" , "get_viewport_rect" , 1639390495i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_canvas_item) , "CanvasItem" , "get_local_mouse_position" , 3341600327i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_canvas_item) , "CanvasItem" , "get_global_mouse_position" , 3341600327i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_canvas_item) , "CanvasItem" , "get_canvas" , 2944877500i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_canvas_item) , "CanvasItem" , "set_use_parent_material" , 2586408642i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_canvas_item) , "CanvasItem" , "get_use_parent_material" , 36873697i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_canvas_item) , "CanvasItem" , "set_notify_local_transform" , 2586408642i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_canvas_item) , "CanvasItem" , "is_local_transform_notification_enabled" , 36873697i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_canvas_item) , "CanvasItem" , "set_notify_transform" , 2586408642i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_canvas_item) , "CanvasItem" , "is_transform_notification_enabled" , 36873697i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_canvas_item) , "CanvasItem" , "force_update_transform" , 3218959716i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_canvas_item) , "CanvasItem" , "make_canvas_position_local" , 2656412154i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_canvas_item) , "CanvasItem" , "make_input_local" , 811130057i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_canvas_item) , "CanvasItem" , "set_visibility_layer" , 1286410249i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_canvas_item) , "CanvasItem" , "get_visibility_layer" , 3905245786i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_canvas_item) , "CanvasItem" , "set_visibility_layer_bit" , 300928843i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_canvas_item) , "CanvasItem" , "get_visibility_layer_bit" , 1116898809i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_canvas_item) , "CanvasItem" , "set_texture_filter" , 1037999706i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_canvas_item) , "CanvasItem" , "get_texture_filter" , 121960042i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_canvas_item) , "CanvasItem" , "set_texture_repeat" , 1716472974i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_canvas_item) , "CanvasItem" , "get_texture_repeat" , 2667158319i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_canvas_item) , "CanvasItem" , "set_clip_children_mode" , 1319393776i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_canvas_item) , "CanvasItem" , "get_clip_children_mode" , 3581808349i64)) ; } fn load_control_methods (function_pointers : & mut Vec < crate :: ClassMethodBind > , string_names : & mut crate :: StringCache , fetch_fptr : crate :: GDExtensionInterfaceClassdbGetMethodBind ,) { let sname_control = string_names . fetch ("Control") ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_control) , "Control" , "accept_event" , 3218959716i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_control) , "Control" , "get_minimum_size" , 3341600327i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_control) , "Control" , "get_combined_minimum_size" , 3341600327i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_control) , "Control" , "set_anchors_preset" , 509135270i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_control) , "Control" , "set_offsets_preset" , 3724524307i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_control) , "Control" , "set_anchors_and_offsets_preset" , 3724524307i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_control) , "Control" , "set_anchor" , 2302782885i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_control) , "Control" , "get_anchor" , 2869120046i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_control) , "Control" , "set_offset" , 4290182280i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_control) , "Control" , "get_offset" , 2869120046i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_control) , "Control" , "set_anchor_and_offset" , 4031722181i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_control) , "Control" , "set_begin" , 743155724i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_control) , "Control" , "set_end" , 743155724i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_control) , "Control" , "set_position" , 2436320129i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_control) , "Control" , "set_size" , 2436320129i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_control) , "Control" , "reset_size" , 3218959716i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_control) , "Control" , "set_custom_minimum_size" , 743155724i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_control) , "Control" , "set_global_position" , 2436320129i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_control) , "Control" , "set_rotation" , 373806689i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_control) , "Control" , "set_rotation_degrees" , 373806689i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_control) , "Control" , "set_scale" , 743155724i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_control) , "Control" , "set_pivot_offset" , 743155724i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_control) , "Control" , "get_begin" , 3341600327i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_control) , "Control" , "get_end" , 3341600327i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_control) , "Control" , "get_position" , 3341600327i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_control) , "Control" , "get_size" , 3341600327i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_control) , "Control" , "get_rotation" , 1740695150i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_control) , "Control" , "get_rotation_degrees" , 1740695150i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_control) , "Control" , "get_scale" , 3341600327i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_control) , "Control" , "get_pivot_offset" , 3341600327i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_control) , "Control" , "get_custom_minimum_size" , 3341600327i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_control) , "Control" , "get_parent_area_size" , 3341600327i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_control) , "Control" , "get_global_position" , 3341600327i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_control) , "Control" , "get_screen_position" , 3341600327i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_control) , "Control" , "get_rect" , 1639390495i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_control) , "Control" , "get_global_rect" , 1639390495i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_control) , "Control" , "set_focus_mode" , 3232914922i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_control) , "Control" , "get_focus_mode" , 2132829277i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_control) , "Control" , "has_focus" , 36873697i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_control) , "Control" , "grab_focus" , 3218959716i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_control) , "Control" , "release_focus" , 3218959716i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_control) , "Control" , "find_prev_valid_focus" , 2783021301i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_control) , "Control" , "find_next_valid_focus" , 2783021301i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_control) , "Control" , "find_valid_focus_neighbor" , 1543910170i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_control) , "Control" , "set_h_size_flags" , 394851643i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_control) , "Control" , "get_h_size_flags" , 3781367401i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_control) , "Control" , "set_stretch_ratio" , 373806689i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_control) , "Control" , "get_stretch_ratio" , 1740695150i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_control) , "Control" , "set_v_size_flags" , 394851643i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_control) , "Control" , "get_v_size_flags" , 3781367401i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_control) , "Control" , "set_theme" , 2326690814i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_control) , "Control" , "get_theme" , 3846893731i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_control) , "Control" , "set_theme_type_variation" , 3304788590i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_control) , "Control" , "get_theme_type_variation" , 2002593661i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_control) , "Control" , "begin_bulk_theme_override" , 3218959716i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_control) , "Control" , "end_bulk_theme_override" , 3218959716i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_control) , "Control" , "add_theme_icon_override" , 1373065600i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_control) , "Control" , "add_theme_font_override" , 3518018674i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_control) , "Control" , "add_theme_font_size_override" , 2415702435i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_control) , "Control" , "add_theme_color_override" , 4260178595i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_control) , "Control" , "add_theme_constant_override" , 2415702435i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_control) , "Control" , "remove_theme_icon_override" , 3304788590i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_control) , "Control" , "remove_theme_stylebox_override" , 3304788590i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_control) , "Control" , "remove_theme_font_override" , 3304788590i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_control) , "Control" , "remove_theme_font_size_override" , 3304788590i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_control) , "Control" , "remove_theme_color_override" , 3304788590i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_control) , "Control" , "remove_theme_constant_override" , 3304788590i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_control) , "Control" , "get_theme_icon" , 2336455395i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_control) , "Control" , "get_theme_font" , 387378635i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_control) , "Control" , "get_theme_font_size" , 229578101i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_control) , "Control" , "get_theme_color" , 2377051548i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_control) , "Control" , "get_theme_constant" , 229578101i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_control) , "Control" , "has_theme_icon_override" , 2619796661i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_control) , "Control" , "has_theme_stylebox_override" , 2619796661i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_control) , "Control" , "has_theme_font_override" , 2619796661i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_control) , "Control" , "has_theme_font_size_override" , 2619796661i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_control) , "Control" , "has_theme_color_override" , 2619796661i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_control) , "Control" , "has_theme_constant_override" , 2619796661i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_control) , "Control" , "has_theme_icon" , 1187511791i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_control) , "Control" , "has_theme_stylebox" , 1187511791i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_control) , "Control" , "has_theme_font" , 1187511791i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_control) , "Control" , "has_theme_font_size" , 1187511791i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_control) , "Control" , "has_theme_color" , 1187511791i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_control) , "Control" , "has_theme_constant" , 1187511791i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_control) , "Control" , "get_theme_default_base_scale" , 1740695150i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_control) , "Control" , "get_theme_default_font" , 3229501585i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_control) , "Control" , "get_theme_default_font_size" , 3905245786i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_control) , "Control" , "get_parent_control" , 2783021301i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_control) , "Control" , "set_h_grow_direction" , 2022385301i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_control) , "Control" , "get_h_grow_direction" , 3635610155i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_control) , "Control" , "set_v_grow_direction" , 2022385301i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_control) , "Control" , "get_v_grow_direction" , 3635610155i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_control) , "Control" , "set_tooltip_text" , 83702148i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_control) , "Control" , "get_tooltip_text" , 201670096i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_control) , "Control" , "get_tooltip" , 2895288280i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_control) , "Control" , "set_default_cursor_shape" , 217062046i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_control) , "Control" , "get_default_cursor_shape" , 2359535750i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_control) , "Control" , "get_cursor_shape" , 1395773853i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_control) , "Control" , "set_focus_neighbor" , 2024461774i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_control) , "Control" , "get_focus_neighbor" , 2757935761i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_control) , "Control" , "set_focus_next" , 1348162250i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_control) , "Control" , "get_focus_next" , 4075236667i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_control) , "Control" , "set_focus_previous" , 1348162250i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_control) , "Control" , "get_focus_previous" , 4075236667i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_control) , "Control" , "force_drag" , 3191844692i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_control) , "Control" , "set_mouse_filter" , 3891156122i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_control) , "Control" , "get_mouse_filter" , 1572545674i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_control) , "Control" , "set_force_pass_scroll_events" , 2586408642i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_control) , "Control" , "is_force_pass_scroll_events" , 36873697i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_control) , "Control" , "set_clip_contents" , 2586408642i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_control) , "Control" , "is_clipping_contents" , 2240911060i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_control) , "Control" , "grab_click_focus" , 3218959716i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_control) , "Control" , "set_drag_forwarding" , 1076571380i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_control) , "Control" , "set_drag_preview" , 1496901182i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_control) , "Control" , "is_drag_successful" , 36873697i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_control) , "Control" , "warp_mouse" , 743155724i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_control) , "Control" , "set_shortcut_context" , 1078189570i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_control) , "Control" , "get_shortcut_context" , 3160264692i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_control) , "Control" , "update_minimum_size" , 3218959716i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_control) , "Control" , "set_layout_direction" , 3310692370i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_control) , "Control" , "get_layout_direction" , 1546772008i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_control) , "Control" , "is_layout_rtl" , 36873697i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_control) , "Control" , "set_auto_translate" , 2586408642i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_control) , "Control" , "is_auto_translating" , 36873697i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_control) , "Control" , "set_localize_numeral_system" , 2586408642i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_control) , "Control" , "is_localizing_numeral_system" , 36873697i64)) ; } fn load_font_methods (function_pointers : & mut Vec < crate :: ClassMethodBind > , string_names : & mut crate :: StringCache , fetch_fptr : crate :: GDExtensionInterfaceClassdbGetMethodBind ,) { let sname_font = string_names . fetch ("Font") ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_font) , "Font" , "get_height" , 378113874i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_font) , "Font" , "get_ascent" , 378113874i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_font) , "Font" , "get_descent" , 378113874i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_font) , "Font" , "get_underline_position" , 378113874i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_font) , "Font" , "get_underline_thickness" , 378113874i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_font) , "Font" , "get_font_name" , 201670096i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_font) , "Font" , "get_font_style_name" , 201670096i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_font) , "Font" , "get_font_weight" , 3905245786i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_font) , "Font" , "get_font_stretch" , 3905245786i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_font) , "Font" , "set_cache_capacity" , 3937882851i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_font) , "Font" , "get_char_size" , 3016396712i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_font) , "Font" , "draw_char" , 3815617597i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_font) , "Font" , "draw_char_outline" , 209525354i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_font) , "Font" , "has_char" , 1116898809i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_font) , "Font" , "get_supported_chars" , 201670096i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_font) , "Font" , "is_language_supported" , 3927539163i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_font) , "Font" , "is_script_supported" , 3927539163i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_font) , "Font" , "get_face_count" , 3905245786i64)) ; } fn load_geometry_instance_3d_methods (function_pointers : & mut Vec < crate :: ClassMethodBind > , string_names : & mut crate :: StringCache , fetch_fptr : crate :: GDExtensionInterfaceClassdbGetMethodBind ,) { let sname_geometry_instance_3d = string_names . fetch ("GeometryInstance3D") ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_geometry_instance_3d) , "GeometryInstance3D" , "set_cast_shadows_setting" , 856677339i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_geometry_instance_3d) , "GeometryInstance3D" , "get_cast_shadows_setting" , 3383019359i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_geometry_instance_3d) , "GeometryInstance3D" , "set_lod_bias" , 373806689i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_geometry_instance_3d) , "GeometryInstance3D" , "get_lod_bias" , 1740695150i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_geometry_instance_3d) , "GeometryInstance3D" , "set_transparency" , 373806689i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_geometry_instance_3d) , "GeometryInstance3D" , "get_transparency" , 1740695150i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_geometry_instance_3d) , "GeometryInstance3D" , "set_visibility_range_end_margin" , 373806689i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_geometry_instance_3d) , "GeometryInstance3D" , "get_visibility_range_end_margin" , 1740695150i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_geometry_instance_3d) , "GeometryInstance3D" , "set_visibility_range_end" , 373806689i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_geometry_instance_3d) , "GeometryInstance3D" , "get_visibility_range_end" , 1740695150i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_geometry_instance_3d) , "GeometryInstance3D" , "set_visibility_range_begin_margin" , 373806689i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_geometry_instance_3d) , "GeometryInstance3D" , "get_visibility_range_begin_margin" , 1740695150i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_geometry_instance_3d) , "GeometryInstance3D" , "set_visibility_range_begin" , 373806689i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_geometry_instance_3d) , "GeometryInstance3D" , "get_visibility_range_begin" , 1740695150i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_geometry_instance_3d) , "GeometryInstance3D" , "set_visibility_range_fade_mode" , 1440117808i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_geometry_instance_3d) , "GeometryInstance3D" , "get_visibility_range_fade_mode" , 2067221882i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_geometry_instance_3d) , "GeometryInstance3D" , "set_instance_shader_parameter" , 3776071444i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_geometry_instance_3d) , "GeometryInstance3D" , "get_instance_shader_parameter" , 2760726917i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_geometry_instance_3d) , "GeometryInstance3D" , "set_extra_cull_margin" , 373806689i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_geometry_instance_3d) , "GeometryInstance3D" , "get_extra_cull_margin" , 1740695150i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_geometry_instance_3d) , "GeometryInstance3D" , "set_lightmap_scale" , 2462696582i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_geometry_instance_3d) , "GeometryInstance3D" , "get_lightmap_scale" , 798767852i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_geometry_instance_3d) , "GeometryInstance3D" , "set_gi_mode" , 2548557163i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_geometry_instance_3d) , "GeometryInstance3D" , "get_gi_mode" , 2188566509i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_geometry_instance_3d) , "GeometryInstance3D" , "set_ignore_occlusion_culling" , 2586408642i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_geometry_instance_3d) , "GeometryInstance3D" , "is_ignoring_occlusion_culling" , 2240911060i64)) ; } fn load_input_event_methods (function_pointers : & mut Vec < crate :: ClassMethodBind > , string_names : & mut crate :: StringCache , fetch_fptr : crate :: GDExtensionInterfaceClassdbGetMethodBind ,) { let sname_input_event = string_names . fetch ("InputEvent") ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_input_event) , "InputEvent" , "set_device" , 1286410249i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_input_event) , "InputEvent" , "get_device" , 3905245786i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_input_event) , "InputEvent" , "is_action" , 1558498928i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_input_event) , "InputEvent" , "is_action_pressed" , 1631499404i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_input_event) , "InputEvent" , "is_action_released" , 1558498928i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_input_event) , "InputEvent" , "get_action_strength" , 801543509i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_input_event) , "InputEvent" , "is_canceled" , 36873697i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_input_event) , "InputEvent" , "is_pressed" , 36873697i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_input_event) , "InputEvent" , "is_released" , 36873697i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_input_event) , "InputEvent" , "is_echo" , 36873697i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_input_event) , "InputEvent" , "as_text" , 201670096i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_input_event) , "InputEvent" , "is_match" , 1754951977i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_input_event) , "InputEvent" , "is_action_type" , 36873697i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_input_event) , "InputEvent" , "accumulate" , 1062211774i64)) ; } fn load_item_list_methods (function_pointers : & mut Vec < crate :: ClassMethodBind > , string_names : & mut crate :: StringCache , fetch_fptr : crate :: GDExtensionInterfaceClassdbGetMethodBind ,) { let sname_item_list = string_names . fetch ("ItemList") ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_item_list) , "ItemList" , "add_item" , 359861678i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_item_list) , "ItemList" , "add_icon_item" , 4256579627i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_item_list) , "ItemList" , "set_item_text" , 501894301i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_item_list) , "ItemList" , "get_item_text" , 844755477i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_item_list) , "ItemList" , "set_item_icon" , 666127730i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_item_list) , "ItemList" , "get_item_icon" , 3536238170i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_item_list) , "ItemList" , "set_item_text_direction" , 1707680378i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_item_list) , "ItemList" , "get_item_text_direction" , 4235602388i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_item_list) , "ItemList" , "set_item_language" , 501894301i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_item_list) , "ItemList" , "get_item_language" , 844755477i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_item_list) , "ItemList" , "set_item_icon_transposed" , 300928843i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_item_list) , "ItemList" , "is_item_icon_transposed" , 1116898809i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_item_list) , "ItemList" , "set_item_icon_region" , 1356297692i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_item_list) , "ItemList" , "get_item_icon_region" , 3327874267i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_item_list) , "ItemList" , "set_item_icon_modulate" , 2878471219i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_item_list) , "ItemList" , "get_item_icon_modulate" , 3457211756i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_item_list) , "ItemList" , "set_item_selectable" , 300928843i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_item_list) , "ItemList" , "is_item_selectable" , 1116898809i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_item_list) , "ItemList" , "set_item_disabled" , 300928843i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_item_list) , "ItemList" , "is_item_disabled" , 1116898809i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_item_list) , "ItemList" , "set_item_metadata" , 2152698145i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_item_list) , "ItemList" , "get_item_metadata" , 4227898402i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_item_list) , "ItemList" , "set_item_custom_bg_color" , 2878471219i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_item_list) , "ItemList" , "get_item_custom_bg_color" , 3457211756i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_item_list) , "ItemList" , "set_item_custom_fg_color" , 2878471219i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_item_list) , "ItemList" , "get_item_custom_fg_color" , 3457211756i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_item_list) , "ItemList" , "get_item_rect" , 159227807i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_item_list) , "ItemList" , "set_item_tooltip_enabled" , 300928843i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_item_list) , "ItemList" , "is_item_tooltip_enabled" , 1116898809i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_item_list) , "ItemList" , "set_item_tooltip" , 501894301i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_item_list) , "ItemList" , "get_item_tooltip" , 844755477i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_item_list) , "ItemList" , "select" , 972357352i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_item_list) , "ItemList" , "deselect" , 1286410249i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_item_list) , "ItemList" , "deselect_all" , 3218959716i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_item_list) , "ItemList" , "is_selected" , 1116898809i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_item_list) , "ItemList" , "get_selected_items" , 969006518i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_item_list) , "ItemList" , "move_item" , 3937882851i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_item_list) , "ItemList" , "set_item_count" , 1286410249i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_item_list) , "ItemList" , "get_item_count" , 3905245786i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_item_list) , "ItemList" , "remove_item" , 1286410249i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_item_list) , "ItemList" , "clear" , 3218959716i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_item_list) , "ItemList" , "sort_items_by_text" , 3218959716i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_item_list) , "ItemList" , "set_fixed_column_width" , 1286410249i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_item_list) , "ItemList" , "get_fixed_column_width" , 3905245786i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_item_list) , "ItemList" , "set_same_column_width" , 2586408642i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_item_list) , "ItemList" , "is_same_column_width" , 36873697i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_item_list) , "ItemList" , "set_max_text_lines" , 1286410249i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_item_list) , "ItemList" , "get_max_text_lines" , 3905245786i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_item_list) , "ItemList" , "set_max_columns" , 1286410249i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_item_list) , "ItemList" , "get_max_columns" , 3905245786i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_item_list) , "ItemList" , "set_select_mode" , 928267388i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_item_list) , "ItemList" , "get_select_mode" , 1191945842i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_item_list) , "ItemList" , "set_icon_mode" , 2025053633i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_item_list) , "ItemList" , "get_icon_mode" , 3353929232i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_item_list) , "ItemList" , "set_fixed_icon_size" , 1130785943i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_item_list) , "ItemList" , "get_fixed_icon_size" , 3690982128i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_item_list) , "ItemList" , "set_icon_scale" , 373806689i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_item_list) , "ItemList" , "get_icon_scale" , 1740695150i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_item_list) , "ItemList" , "set_allow_rmb_select" , 2586408642i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_item_list) , "ItemList" , "get_allow_rmb_select" , 36873697i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_item_list) , "ItemList" , "set_allow_reselect" , 2586408642i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_item_list) , "ItemList" , "get_allow_reselect" , 36873697i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_item_list) , "ItemList" , "set_allow_search" , 2586408642i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_item_list) , "ItemList" , "get_allow_search" , 36873697i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_item_list) , "ItemList" , "set_auto_height" , 2586408642i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_item_list) , "ItemList" , "has_auto_height" , 36873697i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_item_list) , "ItemList" , "is_anything_selected" , 2240911060i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_item_list) , "ItemList" , "get_item_at_position" , 2300324924i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_item_list) , "ItemList" , "ensure_current_is_visible" , 3218959716i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_item_list) , "ItemList" , "force_update_list_size" , 3218959716i64)) ; } fn load_label_3d_methods (function_pointers : & mut Vec < crate :: ClassMethodBind > , string_names : & mut crate :: StringCache , fetch_fptr : crate :: GDExtensionInterfaceClassdbGetMethodBind ,) { let sname_label_3d = string_names . fetch ("Label3D") ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_label_3d) , "Label3D" , "set_horizontal_alignment" , 2312603777i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_label_3d) , "Label3D" , "get_horizontal_alignment" , 341400642i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_label_3d) , "Label3D" , "set_vertical_alignment" , 1796458609i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_label_3d) , "Label3D" , "get_vertical_alignment" , 3274884059i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_label_3d) , "Label3D" , "set_modulate" , 2920490490i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_label_3d) , "Label3D" , "get_modulate" , 3444240500i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_label_3d) , "Label3D" , "set_outline_modulate" , 2920490490i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_label_3d) , "Label3D" , "get_outline_modulate" , 3444240500i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_label_3d) , "Label3D" , "set_text" , 83702148i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_label_3d) , "Label3D" , "get_text" , 201670096i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_label_3d) , "Label3D" , "set_language" , 83702148i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_label_3d) , "Label3D" , "get_language" , 201670096i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_label_3d) , "Label3D" , "set_uppercase" , 2586408642i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_label_3d) , "Label3D" , "is_uppercase" , 36873697i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_label_3d) , "Label3D" , "set_render_priority" , 1286410249i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_label_3d) , "Label3D" , "get_render_priority" , 3905245786i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_label_3d) , "Label3D" , "set_outline_render_priority" , 1286410249i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_label_3d) , "Label3D" , "get_outline_render_priority" , 3905245786i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_label_3d) , "Label3D" , "set_font" , 1262170328i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_label_3d) , "Label3D" , "get_font" , 3229501585i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_label_3d) , "Label3D" , "set_font_size" , 1286410249i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_label_3d) , "Label3D" , "get_font_size" , 3905245786i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_label_3d) , "Label3D" , "set_outline_size" , 1286410249i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_label_3d) , "Label3D" , "get_outline_size" , 3905245786i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_label_3d) , "Label3D" , "set_line_spacing" , 373806689i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_label_3d) , "Label3D" , "get_line_spacing" , 1740695150i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_label_3d) , "Label3D" , "set_width" , 373806689i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_label_3d) , "Label3D" , "get_width" , 1740695150i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_label_3d) , "Label3D" , "set_pixel_size" , 373806689i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_label_3d) , "Label3D" , "get_pixel_size" , 1740695150i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_label_3d) , "Label3D" , "set_offset" , 743155724i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_label_3d) , "Label3D" , "get_offset" , 3341600327i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_label_3d) , "Label3D" , "set_draw_flag" , 1285833066i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_label_3d) , "Label3D" , "get_draw_flag" , 259226453i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_label_3d) , "Label3D" , "set_alpha_cut_mode" , 2549142916i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_label_3d) , "Label3D" , "get_alpha_cut_mode" , 219468601i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_label_3d) , "Label3D" , "set_alpha_scissor_threshold" , 373806689i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_label_3d) , "Label3D" , "get_alpha_scissor_threshold" , 1740695150i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_label_3d) , "Label3D" , "set_alpha_hash_scale" , 373806689i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_label_3d) , "Label3D" , "get_alpha_hash_scale" , 1740695150i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_label_3d) , "Label3D" , "set_alpha_antialiasing_edge" , 373806689i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_label_3d) , "Label3D" , "get_alpha_antialiasing_edge" , 1740695150i64)) ; } fn load_node_methods (function_pointers : & mut Vec < crate :: ClassMethodBind > , string_names : & mut crate :: StringCache , fetch_fptr : crate :: GDExtensionInterfaceClassdbGetMethodBind ,) { let sname_node = string_names . fetch ("Node") ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node) , "Node" , "print_orphan_nodes" , 3218959716i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node) , "Node" , "add_sibling" , 2570952461i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node) , "Node" , "set_name" , 83702148i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node) , "Node" , "get_name" , 2002593661i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node) , "Node" , "add_child" , 3863233950i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node) , "Node" , "remove_child" , 1078189570i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node) , "Node" , "reparent" , 3685795103i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node) , "Node" , "get_child_count" , 894402480i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node) , "Node" , "get_child" , 541253412i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node) , "Node" , "has_node" , 861721659i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node) , "Node" , "get_node" , 2734337346i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node) , "Node" , "get_node_or_null" , 2734337346i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node) , "Node" , "get_parent" , 3160264692i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node) , "Node" , "find_child" , 2008217037i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node) , "Node" , "find_parent" , 1140089439i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node) , "Node" , "has_node_and_resource" , 861721659i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node) , "Node" , "is_inside_tree" , 36873697i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node) , "Node" , "is_part_of_edited_scene" , 36873697i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node) , "Node" , "is_ancestor_of" , 3093956946i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node) , "Node" , "is_greater_than" , 3093956946i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node) , "Node" , "get_path" , 4075236667i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node) , "Node" , "get_path_to" , 498846349i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node) , "Node" , "add_to_group" , 3683006648i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node) , "Node" , "remove_from_group" , 3304788590i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node) , "Node" , "is_in_group" , 2619796661i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node) , "Node" , "move_child" , 3315886247i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node) , "Node" , "set_owner" , 1078189570i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node) , "Node" , "get_owner" , 3160264692i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node) , "Node" , "get_index" , 894402480i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node) , "Node" , "print_tree" , 3218959716i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node) , "Node" , "print_tree_pretty" , 3218959716i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node) , "Node" , "get_tree_string" , 2841200299i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node) , "Node" , "get_tree_string_pretty" , 2841200299i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node) , "Node" , "set_scene_file_path" , 83702148i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node) , "Node" , "get_scene_file_path" , 201670096i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node) , "Node" , "propagate_notification" , 1286410249i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node) , "Node" , "set_physics_process" , 2586408642i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node) , "Node" , "get_physics_process_delta_time" , 1740695150i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node) , "Node" , "is_physics_processing" , 36873697i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node) , "Node" , "get_process_delta_time" , 1740695150i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node) , "Node" , "set_process" , 2586408642i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node) , "Node" , "set_process_priority" , 1286410249i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node) , "Node" , "get_process_priority" , 3905245786i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node) , "Node" , "set_physics_process_priority" , 1286410249i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node) , "Node" , "get_physics_process_priority" , 3905245786i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node) , "Node" , "is_processing" , 36873697i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node) , "Node" , "set_process_input" , 2586408642i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node) , "Node" , "is_processing_input" , 36873697i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node) , "Node" , "set_process_shortcut_input" , 2586408642i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node) , "Node" , "is_processing_shortcut_input" , 36873697i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node) , "Node" , "set_process_unhandled_input" , 2586408642i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node) , "Node" , "is_processing_unhandled_input" , 36873697i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node) , "Node" , "set_process_unhandled_key_input" , 2586408642i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node) , "Node" , "is_processing_unhandled_key_input" , 36873697i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node) , "Node" , "set_process_mode" , 1841290486i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node) , "Node" , "get_process_mode" , 739966102i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node) , "Node" , "can_process" , 36873697i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node) , "Node" , "set_process_thread_group" , 2275442745i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node) , "Node" , "get_process_thread_group" , 1866404740i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node) , "Node" , "set_process_thread_messages" , 1357280998i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node) , "Node" , "get_process_thread_messages" , 4228993612i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node) , "Node" , "set_process_thread_group_order" , 1286410249i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node) , "Node" , "get_process_thread_group_order" , 3905245786i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node) , "Node" , "set_display_folded" , 2586408642i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node) , "Node" , "is_displayed_folded" , 36873697i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node) , "Node" , "set_process_internal" , 2586408642i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node) , "Node" , "is_processing_internal" , 36873697i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node) , "Node" , "set_physics_process_internal" , 2586408642i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node) , "Node" , "is_physics_processing_internal" , 36873697i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node) , "Node" , "set_physics_interpolation_mode" , 3202404928i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node) , "Node" , "get_physics_interpolation_mode" , 2920385216i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node) , "Node" , "is_physics_interpolated" , 36873697i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node) , "Node" , "is_physics_interpolated_and_enabled" , 36873697i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node) , "Node" , "reset_physics_interpolation" , 3218959716i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node) , "Node" , "set_auto_translate_mode" , 776149714i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node) , "Node" , "get_auto_translate_mode" , 2498906432i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node) , "Node" , "get_window" , 1757182445i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node) , "Node" , "get_last_exclusive_window" , 1757182445i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node) , "Node" , "get_tree" , 2958820483i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node) , "Node" , "duplicate" , 3511555459i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node) , "Node" , "replace_by" , 2570952461i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node) , "Node" , "set_scene_instance_load_placeholder" , 2586408642i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node) , "Node" , "get_scene_instance_load_placeholder" , 36873697i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node) , "Node" , "set_editable_instance" , 2731852923i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node) , "Node" , "is_editable_instance" , 3093956946i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node) , "Node" , "get_viewport" , 3596683776i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node) , "Node" , "queue_free" , 3218959716i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node) , "Node" , "request_ready" , 3218959716i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node) , "Node" , "is_node_ready" , 36873697i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node) , "Node" , "set_multiplayer_authority" , 972357352i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node) , "Node" , "get_multiplayer_authority" , 3905245786i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node) , "Node" , "is_multiplayer_authority" , 36873697i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node) , "Node" , "rpc_config" , 3776071444i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node) , "Node" , "set_editor_description" , 83702148i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node) , "Node" , "get_editor_description" , 201670096i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node) , "Node" , "set_unique_name_in_owner" , 2586408642i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node) , "Node" , "is_unique_name_in_owner" , 36873697i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node) , "Node" , "atr" , 3344478075i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node) , "Node" , "atr_n" , 259354841i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node) , "Node" , "rpc" , 4047867050i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node) , "Node" , "rpc_id" , 361499283i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node) , "Node" , "update_configuration_warnings" , 3218959716i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node) , "Node" , "call_deferred_thread_group" , 3400424181i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node) , "Node" , "set_deferred_thread_group" , 3776071444i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node) , "Node" , "notify_deferred_thread_group" , 1286410249i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node) , "Node" , "call_thread_safe" , 3400424181i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node) , "Node" , "set_thread_safe" , 3776071444i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node) , "Node" , "notify_thread_safe" , 1286410249i64)) ; } fn load_node_2d_methods (function_pointers : & mut Vec < crate :: ClassMethodBind > , string_names : & mut crate :: StringCache , fetch_fptr : crate :: GDExtensionInterfaceClassdbGetMethodBind ,) { let sname_node_2d = string_names . fetch ("Node2D") ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node_2d) , "Node2D" , "set_position" , 743155724i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node_2d) , "Node2D" , "set_rotation" , 373806689i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node_2d) , "Node2D" , "set_rotation_degrees" , 373806689i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node_2d) , "Node2D" , "set_skew" , 373806689i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node_2d) , "Node2D" , "set_scale" , 743155724i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node_2d) , "Node2D" , "get_position" , 3341600327i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node_2d) , "Node2D" , "get_rotation" , 1740695150i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node_2d) , "Node2D" , "get_rotation_degrees" , 1740695150i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node_2d) , "Node2D" , "get_skew" , 1740695150i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node_2d) , "Node2D" , "get_scale" , 3341600327i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node_2d) , "Node2D" , "rotate" , 373806689i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node_2d) , "Node2D" , "move_local_x" , 2087892650i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node_2d) , "Node2D" , "move_local_y" , 2087892650i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node_2d) , "Node2D" , "translate" , 743155724i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node_2d) , "Node2D" , "global_translate" , 743155724i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node_2d) , "Node2D" , "apply_scale" , 743155724i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node_2d) , "Node2D" , "set_global_position" , 743155724i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node_2d) , "Node2D" , "get_global_position" , 3341600327i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node_2d) , "Node2D" , "set_global_rotation" , 373806689i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node_2d) , "Node2D" , "set_global_rotation_degrees" , 373806689i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node_2d) , "Node2D" , "get_global_rotation" , 1740695150i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node_2d) , "Node2D" , "get_global_rotation_degrees" , 1740695150i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node_2d) , "Node2D" , "set_global_skew" , 373806689i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node_2d) , "Node2D" , "get_global_skew" , 1740695150i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node_2d) , "Node2D" , "set_global_scale" , 743155724i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node_2d) , "Node2D" , "get_global_scale" , 3341600327i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node_2d) , "Node2D" , "look_at" , 743155724i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node_2d) , "Node2D" , "get_angle_to" , 2276447920i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node_2d) , "Node2D" , "to_local" , 2656412154i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node_2d) , "Node2D" , "to_global" , 2656412154i64)) ; } fn load_node_3d_methods (function_pointers : & mut Vec < crate :: ClassMethodBind > , string_names : & mut crate :: StringCache , fetch_fptr : crate :: GDExtensionInterfaceClassdbGetMethodBind ,) { let sname_node_3d = string_names . fetch ("Node3D") ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node_3d) , "Node3D" , "set_position" , 3460891852i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node_3d) , "Node3D" , "get_position" , 3360562783i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node_3d) , "Node3D" , "set_rotation" , 3460891852i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node_3d) , "Node3D" , "get_rotation" , 3360562783i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node_3d) , "Node3D" , "set_rotation_degrees" , 3460891852i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node_3d) , "Node3D" , "get_rotation_degrees" , 3360562783i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node_3d) , "Node3D" , "set_rotation_order" , 1820889989i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node_3d) , "Node3D" , "get_rotation_order" , 916939469i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node_3d) , "Node3D" , "set_rotation_edit_mode" , 141483330i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node_3d) , "Node3D" , "get_rotation_edit_mode" , 1572188370i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node_3d) , "Node3D" , "set_scale" , 3460891852i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node_3d) , "Node3D" , "get_scale" , 3360562783i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node_3d) , "Node3D" , "set_global_position" , 3460891852i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node_3d) , "Node3D" , "get_global_position" , 3360562783i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node_3d) , "Node3D" , "set_global_rotation" , 3460891852i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node_3d) , "Node3D" , "get_global_rotation" , 3360562783i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node_3d) , "Node3D" , "set_global_rotation_degrees" , 3460891852i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node_3d) , "Node3D" , "get_global_rotation_degrees" , 3360562783i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node_3d) , "Node3D" , "get_parent_node_3d" , 151077316i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node_3d) , "Node3D" , "set_ignore_transform_notification" , 2586408642i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node_3d) , "Node3D" , "set_as_top_level" , 2586408642i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node_3d) , "Node3D" , "is_set_as_top_level" , 36873697i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node_3d) , "Node3D" , "set_disable_scale" , 2586408642i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node_3d) , "Node3D" , "is_scale_disabled" , 36873697i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node_3d) , "Node3D" , "force_update_transform" , 3218959716i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node_3d) , "Node3D" , "set_visibility_parent" , 1348162250i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node_3d) , "Node3D" , "get_visibility_parent" , 4075236667i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node_3d) , "Node3D" , "update_gizmos" , 3218959716i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node_3d) , "Node3D" , "clear_gizmos" , 3218959716i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node_3d) , "Node3D" , "clear_subgizmo_selection" , 3218959716i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node_3d) , "Node3D" , "set_visible" , 2586408642i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node_3d) , "Node3D" , "is_visible" , 36873697i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node_3d) , "Node3D" , "is_visible_in_tree" , 36873697i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node_3d) , "Node3D" , "show" , 3218959716i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node_3d) , "Node3D" , "hide" , 3218959716i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node_3d) , "Node3D" , "set_notify_local_transform" , 2586408642i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node_3d) , "Node3D" , "is_local_transform_notification_enabled" , 36873697i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node_3d) , "Node3D" , "set_notify_transform" , 2586408642i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node_3d) , "Node3D" , "is_transform_notification_enabled" , 36873697i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node_3d) , "Node3D" , "rotate" , 3436291937i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node_3d) , "Node3D" , "global_rotate" , 3436291937i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node_3d) , "Node3D" , "global_scale" , 3460891852i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node_3d) , "Node3D" , "global_translate" , 3460891852i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node_3d) , "Node3D" , "rotate_object_local" , 3436291937i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node_3d) , "Node3D" , "scale_object_local" , 3460891852i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node_3d) , "Node3D" , "translate_object_local" , 3460891852i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node_3d) , "Node3D" , "rotate_x" , 373806689i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node_3d) , "Node3D" , "rotate_y" , 373806689i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node_3d) , "Node3D" , "rotate_z" , 373806689i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node_3d) , "Node3D" , "translate" , 3460891852i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node_3d) , "Node3D" , "orthonormalize" , 3218959716i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node_3d) , "Node3D" , "set_identity" , 3218959716i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node_3d) , "Node3D" , "look_at" , 2882425029i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node_3d) , "Node3D" , "look_at_from_position" , 2086826090i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node_3d) , "Node3D" , "to_local" , 192990374i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_node_3d) , "Node3D" , "to_global" , 192990374i64)) ; } fn load_scene_tree_methods (function_pointers : & mut Vec < crate :: ClassMethodBind > , string_names : & mut crate :: StringCache , fetch_fptr : crate :: GDExtensionInterfaceClassdbGetMethodBind ,) { let sname_scene_tree = string_names . fetch ("SceneTree") ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_scene_tree) , "SceneTree" , "get_root" , 1757182445i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_scene_tree) , "SceneTree" , "has_group" , 2619796661i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_scene_tree) , "SceneTree" , "is_auto_accept_quit" , 36873697i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_scene_tree) , "SceneTree" , "set_auto_accept_quit" , 2586408642i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_scene_tree) , "SceneTree" , "is_quit_on_go_back" , 36873697i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_scene_tree) , "SceneTree" , "set_quit_on_go_back" , 2586408642i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_scene_tree) , "SceneTree" , "set_debug_collisions_hint" , 2586408642i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_scene_tree) , "SceneTree" , "is_debugging_collisions_hint" , 36873697i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_scene_tree) , "SceneTree" , "set_debug_paths_hint" , 2586408642i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_scene_tree) , "SceneTree" , "is_debugging_paths_hint" , 36873697i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_scene_tree) , "SceneTree" , "set_debug_navigation_hint" , 2586408642i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_scene_tree) , "SceneTree" , "is_debugging_navigation_hint" , 36873697i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_scene_tree) , "SceneTree" , "set_edited_scene_root" , 1078189570i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_scene_tree) , "SceneTree" , "get_edited_scene_root" , 3160264692i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_scene_tree) , "SceneTree" , "set_pause" , 2586408642i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_scene_tree) , "SceneTree" , "is_paused" , 36873697i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_scene_tree) , "SceneTree" , "create_timer" , 2709170273i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_scene_tree) , "SceneTree" , "get_node_count" , 3905245786i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_scene_tree) , "SceneTree" , "get_frame" , 3905245786i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_scene_tree) , "SceneTree" , "quit" , 1995695955i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_scene_tree) , "SceneTree" , "set_physics_interpolation_enabled" , 2586408642i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_scene_tree) , "SceneTree" , "is_physics_interpolation_enabled" , 36873697i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_scene_tree) , "SceneTree" , "queue_delete" , 3975164845i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_scene_tree) , "SceneTree" , "call_group_flags" , 1527739229i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_scene_tree) , "SceneTree" , "notify_group_flags" , 1245489420i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_scene_tree) , "SceneTree" , "set_group_flags" , 3497599527i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_scene_tree) , "SceneTree" , "call_group" , 1257962832i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_scene_tree) , "SceneTree" , "notify_group" , 2415702435i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_scene_tree) , "SceneTree" , "set_group" , 1279312029i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_scene_tree) , "SceneTree" , "get_first_node_in_group" , 4071044623i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_scene_tree) , "SceneTree" , "get_node_count_in_group" , 2458036349i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_scene_tree) , "SceneTree" , "set_current_scene" , 1078189570i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_scene_tree) , "SceneTree" , "get_current_scene" , 3160264692i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_scene_tree) , "SceneTree" , "change_scene_to_file" , 166001499i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_scene_tree) , "SceneTree" , "reload_current_scene" , 166280745i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_scene_tree) , "SceneTree" , "unload_current_scene" , 3218959716i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_scene_tree) , "SceneTree" , "set_multiplayer_poll_enabled" , 2586408642i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_scene_tree) , "SceneTree" , "is_multiplayer_poll_enabled" , 36873697i64)) ; } fn load_scene_tree_timer_methods (function_pointers : & mut Vec < crate :: ClassMethodBind > , string_names : & mut crate :: StringCache , fetch_fptr : crate :: GDExtensionInterfaceClassdbGetMethodBind ,) { let sname_scene_tree_timer = string_names . fetch ("SceneTreeTimer") ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_scene_tree_timer) , "SceneTreeTimer" , "set_time_left" , 373806689i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_scene_tree_timer) , "SceneTreeTimer" , "get_time_left" , 1740695150i64)) ; } fn load_texture_2d_methods (function_pointers : & mut Vec < crate :: ClassMethodBind > , string_names : & mut crate :: StringCache , fetch_fptr : crate :: GDExtensionInterfaceClassdbGetMethodBind ,) { let sname_texture_2d = string_names . fetch ("Texture2D") ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_texture_2d) , "Texture2D" , "get_width" , 3905245786i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_texture_2d) , "Texture2D" , "get_height" , 3905245786i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_texture_2d) , "Texture2D" , "get_size" , 3341600327i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_texture_2d) , "Texture2D" , "has_alpha" , 36873697i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_texture_2d) , "Texture2D" , "draw" , 2729649137i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_texture_2d) , "Texture2D" , "draw_rect" , 3499451691i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_texture_2d) , "Texture2D" , "draw_rect_region" , 2963678660i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_texture_2d) , "Texture2D" , "create_placeholder" , 121922552i64)) ; } fn load_theme_methods (function_pointers : & mut Vec < crate :: ClassMethodBind > , string_names : & mut crate :: StringCache , fetch_fptr : crate :: GDExtensionInterfaceClassdbGetMethodBind ,) { let sname_theme = string_names . fetch ("Theme") ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_theme) , "Theme" , "set_icon" , 2188371082i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_theme) , "Theme" , "get_icon" , 934555193i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_theme) , "Theme" , "has_icon" , 471820014i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_theme) , "Theme" , "rename_icon" , 642128662i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_theme) , "Theme" , "clear_icon" , 3740211285i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_theme) , "Theme" , "has_stylebox" , 471820014i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_theme) , "Theme" , "rename_stylebox" , 642128662i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_theme) , "Theme" , "clear_stylebox" , 3740211285i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_theme) , "Theme" , "set_font" , 177292320i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_theme) , "Theme" , "get_font" , 3445063586i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_theme) , "Theme" , "has_font" , 471820014i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_theme) , "Theme" , "rename_font" , 642128662i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_theme) , "Theme" , "clear_font" , 3740211285i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_theme) , "Theme" , "set_font_size" , 281601298i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_theme) , "Theme" , "get_font_size" , 2419549490i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_theme) , "Theme" , "has_font_size" , 471820014i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_theme) , "Theme" , "rename_font_size" , 642128662i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_theme) , "Theme" , "clear_font_size" , 3740211285i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_theme) , "Theme" , "set_color" , 4111215154i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_theme) , "Theme" , "get_color" , 2015923404i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_theme) , "Theme" , "has_color" , 471820014i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_theme) , "Theme" , "rename_color" , 642128662i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_theme) , "Theme" , "clear_color" , 3740211285i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_theme) , "Theme" , "set_constant" , 281601298i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_theme) , "Theme" , "get_constant" , 2419549490i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_theme) , "Theme" , "has_constant" , 471820014i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_theme) , "Theme" , "rename_constant" , 642128662i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_theme) , "Theme" , "clear_constant" , 3740211285i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_theme) , "Theme" , "set_default_base_scale" , 373806689i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_theme) , "Theme" , "get_default_base_scale" , 1740695150i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_theme) , "Theme" , "has_default_base_scale" , 36873697i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_theme) , "Theme" , "set_default_font" , 1262170328i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_theme) , "Theme" , "get_default_font" , 3229501585i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_theme) , "Theme" , "has_default_font" , 36873697i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_theme) , "Theme" , "set_default_font_size" , 1286410249i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_theme) , "Theme" , "get_default_font_size" , 3905245786i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_theme) , "Theme" , "has_default_font_size" , 36873697i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_theme) , "Theme" , "set_theme_item" , 2492983623i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_theme) , "Theme" , "get_theme_item" , 2191024021i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_theme) , "Theme" , "has_theme_item" , 1739311056i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_theme) , "Theme" , "rename_theme_item" , 3900867553i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_theme) , "Theme" , "clear_theme_item" , 2965505587i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_theme) , "Theme" , "set_type_variation" , 3740211285i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_theme) , "Theme" , "is_type_variation" , 471820014i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_theme) , "Theme" , "clear_type_variation" , 3304788590i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_theme) , "Theme" , "get_type_variation_base" , 1965194235i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_theme) , "Theme" , "add_type" , 3304788590i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_theme) , "Theme" , "remove_type" , 3304788590i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_theme) , "Theme" , "merge_with" , 2326690814i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_theme) , "Theme" , "clear" , 3218959716i64)) ; } fn load_tile_map_methods (function_pointers : & mut Vec < crate :: ClassMethodBind > , string_names : & mut crate :: StringCache , fetch_fptr : crate :: GDExtensionInterfaceClassdbGetMethodBind ,) { let sname_tile_map = string_names . fetch ("TileMap") ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_tile_map) , "TileMap" , "set_navigation_map" , 4040184819i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_tile_map) , "TileMap" , "get_navigation_map" , 495598643i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_tile_map) , "TileMap" , "force_update" , 1025054187i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_tile_map) , "TileMap" , "set_tileset" , 774531446i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_tile_map) , "TileMap" , "get_tileset" , 2678226422i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_tile_map) , "TileMap" , "set_rendering_quadrant_size" , 1286410249i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_tile_map) , "TileMap" , "get_rendering_quadrant_size" , 3905245786i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_tile_map) , "TileMap" , "get_layers_count" , 3905245786i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_tile_map) , "TileMap" , "add_layer" , 1286410249i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_tile_map) , "TileMap" , "move_layer" , 3937882851i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_tile_map) , "TileMap" , "remove_layer" , 1286410249i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_tile_map) , "TileMap" , "set_layer_name" , 501894301i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_tile_map) , "TileMap" , "get_layer_name" , 844755477i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_tile_map) , "TileMap" , "set_layer_enabled" , 300928843i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_tile_map) , "TileMap" , "is_layer_enabled" , 1116898809i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_tile_map) , "TileMap" , "set_layer_modulate" , 2878471219i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_tile_map) , "TileMap" , "get_layer_modulate" , 3457211756i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_tile_map) , "TileMap" , "set_layer_y_sort_enabled" , 300928843i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_tile_map) , "TileMap" , "is_layer_y_sort_enabled" , 1116898809i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_tile_map) , "TileMap" , "set_layer_y_sort_origin" , 3937882851i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_tile_map) , "TileMap" , "get_layer_y_sort_origin" , 923996154i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_tile_map) , "TileMap" , "set_layer_z_index" , 3937882851i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_tile_map) , "TileMap" , "get_layer_z_index" , 923996154i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_tile_map) , "TileMap" , "set_layer_navigation_enabled" , 300928843i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_tile_map) , "TileMap" , "is_layer_navigation_enabled" , 1116898809i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_tile_map) , "TileMap" , "set_layer_navigation_map" , 4040184819i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_tile_map) , "TileMap" , "get_layer_navigation_map" , 495598643i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_tile_map) , "TileMap" , "set_collision_animatable" , 2586408642i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_tile_map) , "TileMap" , "is_collision_animatable" , 36873697i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_tile_map) , "TileMap" , "set_collision_visibility_mode" , 3193440636i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_tile_map) , "TileMap" , "get_collision_visibility_mode" , 1697018252i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_tile_map) , "TileMap" , "set_navigation_visibility_mode" , 3193440636i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_tile_map) , "TileMap" , "get_navigation_visibility_mode" , 1697018252i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_tile_map) , "TileMap" , "set_cell" , 966713560i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_tile_map) , "TileMap" , "erase_cell" , 2311374912i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_tile_map) , "TileMap" , "get_cell_source_id" , 551761942i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_tile_map) , "TileMap" , "get_cell_atlas_coords" , 1869815066i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_tile_map) , "TileMap" , "get_cell_alternative_tile" , 551761942i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_tile_map) , "TileMap" , "get_coords_for_body_rid" , 291584212i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_tile_map) , "TileMap" , "get_layer_for_body_rid" , 3917799429i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_tile_map) , "TileMap" , "fix_invalid_tiles" , 3218959716i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_tile_map) , "TileMap" , "clear_layer" , 1286410249i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_tile_map) , "TileMap" , "clear" , 3218959716i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_tile_map) , "TileMap" , "update_internals" , 3218959716i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_tile_map) , "TileMap" , "notify_runtime_tile_data_update" , 1025054187i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_tile_map) , "TileMap" , "get_used_rect" , 410525958i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_tile_map) , "TileMap" , "map_to_local" , 108438297i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_tile_map) , "TileMap" , "local_to_map" , 837806996i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_tile_map) , "TileMap" , "get_neighbor_cell" , 986575103i64)) ; } fn load_tile_set_methods (function_pointers : & mut Vec < crate :: ClassMethodBind > , string_names : & mut crate :: StringCache , fetch_fptr : crate :: GDExtensionInterfaceClassdbGetMethodBind ,) { let sname_tile_set = string_names . fetch ("TileSet") ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_tile_set) , "TileSet" , "get_next_source_id" , 3905245786i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_tile_set) , "TileSet" , "remove_source" , 1286410249i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_tile_set) , "TileSet" , "set_source_id" , 3937882851i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_tile_set) , "TileSet" , "get_source_count" , 3905245786i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_tile_set) , "TileSet" , "get_source_id" , 923996154i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_tile_set) , "TileSet" , "has_source" , 1116898809i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_tile_set) , "TileSet" , "set_tile_shape" , 2131427112i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_tile_set) , "TileSet" , "get_tile_shape" , 716918169i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_tile_set) , "TileSet" , "set_tile_layout" , 1071216679i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_tile_set) , "TileSet" , "get_tile_layout" , 194628839i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_tile_set) , "TileSet" , "set_tile_offset_axis" , 3300198521i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_tile_set) , "TileSet" , "get_tile_offset_axis" , 762494114i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_tile_set) , "TileSet" , "set_tile_size" , 1130785943i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_tile_set) , "TileSet" , "get_tile_size" , 3690982128i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_tile_set) , "TileSet" , "set_uv_clipping" , 2586408642i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_tile_set) , "TileSet" , "is_uv_clipping" , 36873697i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_tile_set) , "TileSet" , "get_occlusion_layers_count" , 3905245786i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_tile_set) , "TileSet" , "add_occlusion_layer" , 1025054187i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_tile_set) , "TileSet" , "move_occlusion_layer" , 3937882851i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_tile_set) , "TileSet" , "remove_occlusion_layer" , 1286410249i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_tile_set) , "TileSet" , "set_occlusion_layer_light_mask" , 3937882851i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_tile_set) , "TileSet" , "get_occlusion_layer_light_mask" , 923996154i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_tile_set) , "TileSet" , "set_occlusion_layer_sdf_collision" , 300928843i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_tile_set) , "TileSet" , "get_occlusion_layer_sdf_collision" , 1116898809i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_tile_set) , "TileSet" , "get_physics_layers_count" , 3905245786i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_tile_set) , "TileSet" , "add_physics_layer" , 1025054187i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_tile_set) , "TileSet" , "move_physics_layer" , 3937882851i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_tile_set) , "TileSet" , "remove_physics_layer" , 1286410249i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_tile_set) , "TileSet" , "set_physics_layer_collision_layer" , 3937882851i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_tile_set) , "TileSet" , "get_physics_layer_collision_layer" , 923996154i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_tile_set) , "TileSet" , "set_physics_layer_collision_mask" , 3937882851i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_tile_set) , "TileSet" , "get_physics_layer_collision_mask" , 923996154i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_tile_set) , "TileSet" , "get_terrain_sets_count" , 3905245786i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_tile_set) , "TileSet" , "add_terrain_set" , 1025054187i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_tile_set) , "TileSet" , "move_terrain_set" , 3937882851i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_tile_set) , "TileSet" , "remove_terrain_set" , 1286410249i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_tile_set) , "TileSet" , "set_terrain_set_mode" , 3943003916i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_tile_set) , "TileSet" , "get_terrain_set_mode" , 2084469411i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_tile_set) , "TileSet" , "get_terrains_count" , 923996154i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_tile_set) , "TileSet" , "add_terrain" , 1230568737i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_tile_set) , "TileSet" , "move_terrain" , 1649997291i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_tile_set) , "TileSet" , "remove_terrain" , 3937882851i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_tile_set) , "TileSet" , "set_terrain_name" , 2285447957i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_tile_set) , "TileSet" , "get_terrain_name" , 1391810591i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_tile_set) , "TileSet" , "set_terrain_color" , 3733378741i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_tile_set) , "TileSet" , "get_terrain_color" , 2165839948i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_tile_set) , "TileSet" , "get_navigation_layers_count" , 3905245786i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_tile_set) , "TileSet" , "add_navigation_layer" , 1025054187i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_tile_set) , "TileSet" , "move_navigation_layer" , 3937882851i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_tile_set) , "TileSet" , "remove_navigation_layer" , 1286410249i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_tile_set) , "TileSet" , "set_navigation_layer_layers" , 3937882851i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_tile_set) , "TileSet" , "get_navigation_layer_layers" , 923996154i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_tile_set) , "TileSet" , "set_navigation_layer_layer_value" , 1383440665i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_tile_set) , "TileSet" , "get_navigation_layer_layer_value" , 2522259332i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_tile_set) , "TileSet" , "get_custom_data_layers_count" , 3905245786i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_tile_set) , "TileSet" , "add_custom_data_layer" , 1025054187i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_tile_set) , "TileSet" , "move_custom_data_layer" , 3937882851i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_tile_set) , "TileSet" , "remove_custom_data_layer" , 1286410249i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_tile_set) , "TileSet" , "get_custom_data_layer_by_name" , 1321353865i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_tile_set) , "TileSet" , "set_custom_data_layer_name" , 501894301i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_tile_set) , "TileSet" , "get_custom_data_layer_name" , 844755477i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_tile_set) , "TileSet" , "set_source_level_tile_proxy" , 3937882851i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_tile_set) , "TileSet" , "get_source_level_tile_proxy" , 3744713108i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_tile_set) , "TileSet" , "has_source_level_tile_proxy" , 3067735520i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_tile_set) , "TileSet" , "remove_source_level_tile_proxy" , 1286410249i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_tile_set) , "TileSet" , "set_coords_level_tile_proxy" , 1769939278i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_tile_set) , "TileSet" , "has_coords_level_tile_proxy" , 3957903770i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_tile_set) , "TileSet" , "remove_coords_level_tile_proxy" , 2311374912i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_tile_set) , "TileSet" , "set_alternative_level_tile_proxy" , 3862385460i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_tile_set) , "TileSet" , "has_alternative_level_tile_proxy" , 180086755i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_tile_set) , "TileSet" , "remove_alternative_level_tile_proxy" , 2328951467i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_tile_set) , "TileSet" , "cleanup_invalid_tile_proxies" , 3218959716i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_tile_set) , "TileSet" , "clear_tile_proxies" , 3218959716i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_tile_set) , "TileSet" , "remove_pattern" , 1286410249i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_tile_set) , "TileSet" , "get_patterns_count" , 2455072627i64)) ; } fn load_viewport_methods (function_pointers : & mut Vec < crate :: ClassMethodBind > , string_names : & mut crate :: StringCache , fetch_fptr : crate :: GDExtensionInterfaceClassdbGetMethodBind ,) { let sname_viewport = string_names . fetch ("Viewport") ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_viewport) , "Viewport" , "get_visible_rect" , 1639390495i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_viewport) , "Viewport" , "set_transparent_background" , 2586408642i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_viewport) , "Viewport" , "has_transparent_background" , 36873697i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_viewport) , "Viewport" , "set_use_hdr_2d" , 2586408642i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_viewport) , "Viewport" , "is_using_hdr_2d" , 36873697i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_viewport) , "Viewport" , "set_msaa_2d" , 3330258708i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_viewport) , "Viewport" , "get_msaa_2d" , 2542055527i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_viewport) , "Viewport" , "set_msaa_3d" , 3330258708i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_viewport) , "Viewport" , "get_msaa_3d" , 2542055527i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_viewport) , "Viewport" , "set_screen_space_aa" , 3544169389i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_viewport) , "Viewport" , "get_screen_space_aa" , 1390814124i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_viewport) , "Viewport" , "set_use_taa" , 2586408642i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_viewport) , "Viewport" , "is_using_taa" , 36873697i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_viewport) , "Viewport" , "set_use_debanding" , 2586408642i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_viewport) , "Viewport" , "is_using_debanding" , 36873697i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_viewport) , "Viewport" , "set_use_occlusion_culling" , 2586408642i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_viewport) , "Viewport" , "is_using_occlusion_culling" , 36873697i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_viewport) , "Viewport" , "set_debug_draw" , 1970246205i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_viewport) , "Viewport" , "get_debug_draw" , 579191299i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_viewport) , "Viewport" , "get_render_info" , 481977019i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_viewport) , "Viewport" , "set_physics_object_picking" , 2586408642i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_viewport) , "Viewport" , "get_physics_object_picking" , 2240911060i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_viewport) , "Viewport" , "set_physics_object_picking_sort" , 2586408642i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_viewport) , "Viewport" , "get_physics_object_picking_sort" , 2240911060i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_viewport) , "Viewport" , "set_physics_object_picking_first_only" , 2586408642i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_viewport) , "Viewport" , "get_physics_object_picking_first_only" , 2240911060i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_viewport) , "Viewport" , "get_viewport_rid" , 2944877500i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_viewport) , "Viewport" , "push_text_input" , 83702148i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_viewport) , "Viewport" , "push_input" , 3644664830i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_viewport) , "Viewport" , "push_unhandled_input" , 3644664830i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_viewport) , "Viewport" , "get_mouse_position" , 3341600327i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_viewport) , "Viewport" , "warp_mouse" , 743155724i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_viewport) , "Viewport" , "update_mouse_cursor_state" , 3218959716i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_viewport) , "Viewport" , "gui_get_drag_data" , 1214101251i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_viewport) , "Viewport" , "gui_is_dragging" , 36873697i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_viewport) , "Viewport" , "gui_is_drag_successful" , 36873697i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_viewport) , "Viewport" , "gui_release_focus" , 3218959716i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_viewport) , "Viewport" , "gui_get_focus_owner" , 2783021301i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_viewport) , "Viewport" , "gui_get_hovered_control" , 2783021301i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_viewport) , "Viewport" , "set_disable_input" , 2586408642i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_viewport) , "Viewport" , "is_input_disabled" , 36873697i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_viewport) , "Viewport" , "set_positional_shadow_atlas_size" , 1286410249i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_viewport) , "Viewport" , "get_positional_shadow_atlas_size" , 3905245786i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_viewport) , "Viewport" , "set_positional_shadow_atlas_16_bits" , 2586408642i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_viewport) , "Viewport" , "get_positional_shadow_atlas_16_bits" , 36873697i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_viewport) , "Viewport" , "set_snap_controls_to_pixels" , 2586408642i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_viewport) , "Viewport" , "is_snap_controls_to_pixels_enabled" , 36873697i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_viewport) , "Viewport" , "set_snap_2d_transforms_to_pixel" , 2586408642i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_viewport) , "Viewport" , "is_snap_2d_transforms_to_pixel_enabled" , 36873697i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_viewport) , "Viewport" , "set_snap_2d_vertices_to_pixel" , 2586408642i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_viewport) , "Viewport" , "is_snap_2d_vertices_to_pixel_enabled" , 36873697i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_viewport) , "Viewport" , "set_positional_shadow_atlas_quadrant_subdiv" , 2596956071i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_viewport) , "Viewport" , "get_positional_shadow_atlas_quadrant_subdiv" , 2676778355i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_viewport) , "Viewport" , "set_input_as_handled" , 3218959716i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_viewport) , "Viewport" , "is_input_handled" , 36873697i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_viewport) , "Viewport" , "set_handle_input_locally" , 2586408642i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_viewport) , "Viewport" , "is_handling_input_locally" , 36873697i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_viewport) , "Viewport" , "set_default_canvas_item_texture_filter" , 2815160100i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_viewport) , "Viewport" , "get_default_canvas_item_texture_filter" , 896601198i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_viewport) , "Viewport" , "set_embedding_subwindows" , 2586408642i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_viewport) , "Viewport" , "is_embedding_subwindows" , 36873697i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_viewport) , "Viewport" , "set_canvas_cull_mask" , 1286410249i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_viewport) , "Viewport" , "get_canvas_cull_mask" , 3905245786i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_viewport) , "Viewport" , "set_canvas_cull_mask_bit" , 300928843i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_viewport) , "Viewport" , "get_canvas_cull_mask_bit" , 1116898809i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_viewport) , "Viewport" , "set_default_canvas_item_texture_repeat" , 1658513413i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_viewport) , "Viewport" , "get_default_canvas_item_texture_repeat" , 4049774160i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_viewport) , "Viewport" , "set_sdf_oversize" , 2574159017i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_viewport) , "Viewport" , "get_sdf_oversize" , 2631427510i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_viewport) , "Viewport" , "set_sdf_scale" , 1402773951i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_viewport) , "Viewport" , "get_sdf_scale" , 3162688184i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_viewport) , "Viewport" , "set_mesh_lod_threshold" , 373806689i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_viewport) , "Viewport" , "get_mesh_lod_threshold" , 1740695150i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_viewport) , "Viewport" , "set_as_audio_listener_2d" , 2586408642i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_viewport) , "Viewport" , "is_audio_listener_2d" , 36873697i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_viewport) , "Viewport" , "set_use_own_world_3d" , 2586408642i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_viewport) , "Viewport" , "is_using_own_world_3d" , 36873697i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_viewport) , "Viewport" , "set_as_audio_listener_3d" , 2586408642i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_viewport) , "Viewport" , "is_audio_listener_3d" , 36873697i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_viewport) , "Viewport" , "set_disable_3d" , 2586408642i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_viewport) , "Viewport" , "is_3d_disabled" , 36873697i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_viewport) , "Viewport" , "set_use_xr" , 2586408642i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_viewport) , "Viewport" , "is_using_xr" , 2240911060i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_viewport) , "Viewport" , "set_scaling_3d_mode" , 1531597597i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_viewport) , "Viewport" , "get_scaling_3d_mode" , 2597660574i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_viewport) , "Viewport" , "set_scaling_3d_scale" , 373806689i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_viewport) , "Viewport" , "get_scaling_3d_scale" , 1740695150i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_viewport) , "Viewport" , "set_fsr_sharpness" , 373806689i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_viewport) , "Viewport" , "get_fsr_sharpness" , 1740695150i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_viewport) , "Viewport" , "set_texture_mipmap_bias" , 373806689i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_viewport) , "Viewport" , "get_texture_mipmap_bias" , 1740695150i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_viewport) , "Viewport" , "set_vrs_mode" , 2749867817i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_viewport) , "Viewport" , "get_vrs_mode" , 349660525i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_viewport) , "Viewport" , "set_vrs_update_mode" , 3182412319i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_viewport) , "Viewport" , "get_vrs_update_mode" , 2255951583i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_viewport) , "Viewport" , "set_vrs_texture" , 4051416890i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_viewport) , "Viewport" , "get_vrs_texture" , 3635182373i64)) ; } fn load_visual_instance_3d_methods (function_pointers : & mut Vec < crate :: ClassMethodBind > , string_names : & mut crate :: StringCache , fetch_fptr : crate :: GDExtensionInterfaceClassdbGetMethodBind ,) { let sname_visual_instance_3d = string_names . fetch ("VisualInstance3D") ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_visual_instance_3d) , "VisualInstance3D" , "set_base" , 2722037293i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_visual_instance_3d) , "VisualInstance3D" , "get_base" , 2944877500i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_visual_instance_3d) , "VisualInstance3D" , "get_instance" , 2944877500i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_visual_instance_3d) , "VisualInstance3D" , "set_layer_mask" , 1286410249i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_visual_instance_3d) , "VisualInstance3D" , "get_layer_mask" , 3905245786i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_visual_instance_3d) , "VisualInstance3D" , "set_layer_mask_value" , 300928843i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_visual_instance_3d) , "VisualInstance3D" , "get_layer_mask_value" , 1116898809i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_visual_instance_3d) , "VisualInstance3D" , "set_sorting_offset" , 373806689i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_visual_instance_3d) , "VisualInstance3D" , "get_sorting_offset" , 1740695150i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_visual_instance_3d) , "VisualInstance3D" , "set_sorting_use_aabb_center" , 2586408642i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_visual_instance_3d) , "VisualInstance3D" , "is_sorting_use_aabb_center" , 36873697i64)) ; } fn load_window_methods (function_pointers : & mut Vec < crate :: ClassMethodBind > , string_names : & mut crate :: StringCache , fetch_fptr : crate :: GDExtensionInterfaceClassdbGetMethodBind ,) { let sname_window = string_names . fetch ("Window") ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_window) , "Window" , "set_title" , 83702148i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_window) , "Window" , "get_title" , 201670096i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_window) , "Window" , "get_window_id" , 3905245786i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_window) , "Window" , "set_initial_position" , 4084468099i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_window) , "Window" , "get_initial_position" , 4294066647i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_window) , "Window" , "set_current_screen" , 1286410249i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_window) , "Window" , "get_current_screen" , 3905245786i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_window) , "Window" , "set_position" , 1130785943i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_window) , "Window" , "get_position" , 3690982128i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_window) , "Window" , "move_to_center" , 3218959716i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_window) , "Window" , "set_size" , 1130785943i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_window) , "Window" , "get_size" , 3690982128i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_window) , "Window" , "reset_size" , 3218959716i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_window) , "Window" , "get_position_with_decorations" , 3690982128i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_window) , "Window" , "get_size_with_decorations" , 3690982128i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_window) , "Window" , "set_max_size" , 1130785943i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_window) , "Window" , "get_max_size" , 3690982128i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_window) , "Window" , "set_min_size" , 1130785943i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_window) , "Window" , "get_min_size" , 3690982128i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_window) , "Window" , "set_mode" , 3095236531i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_window) , "Window" , "get_mode" , 2566346114i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_window) , "Window" , "set_flag" , 3426449779i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_window) , "Window" , "get_flag" , 3062752289i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_window) , "Window" , "is_maximize_allowed" , 36873697i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_window) , "Window" , "request_attention" , 3218959716i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_window) , "Window" , "move_to_foreground" , 3218959716i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_window) , "Window" , "set_visible" , 2586408642i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_window) , "Window" , "is_visible" , 36873697i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_window) , "Window" , "hide" , 3218959716i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_window) , "Window" , "show" , 3218959716i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_window) , "Window" , "set_transient" , 2586408642i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_window) , "Window" , "is_transient" , 36873697i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_window) , "Window" , "set_transient_to_focused" , 2586408642i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_window) , "Window" , "is_transient_to_focused" , 36873697i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_window) , "Window" , "set_exclusive" , 2586408642i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_window) , "Window" , "is_exclusive" , 36873697i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_window) , "Window" , "set_unparent_when_invisible" , 2586408642i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_window) , "Window" , "can_draw" , 36873697i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_window) , "Window" , "has_focus" , 36873697i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_window) , "Window" , "grab_focus" , 3218959716i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_window) , "Window" , "set_ime_active" , 2586408642i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_window) , "Window" , "set_ime_position" , 1130785943i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_window) , "Window" , "is_embedded" , 36873697i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_window) , "Window" , "get_contents_minimum_size" , 3341600327i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_window) , "Window" , "set_force_native" , 2586408642i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_window) , "Window" , "get_force_native" , 36873697i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_window) , "Window" , "set_content_scale_size" , 1130785943i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_window) , "Window" , "get_content_scale_size" , 3690982128i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_window) , "Window" , "set_content_scale_mode" , 2937716473i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_window) , "Window" , "get_content_scale_mode" , 161585230i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_window) , "Window" , "set_content_scale_aspect" , 2370399418i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_window) , "Window" , "get_content_scale_aspect" , 4158790715i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_window) , "Window" , "set_content_scale_stretch" , 349355940i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_window) , "Window" , "get_content_scale_stretch" , 536857316i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_window) , "Window" , "set_keep_title_visible" , 2586408642i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_window) , "Window" , "get_keep_title_visible" , 36873697i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_window) , "Window" , "set_content_scale_factor" , 373806689i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_window) , "Window" , "get_content_scale_factor" , 1740695150i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_window) , "Window" , "set_use_font_oversampling" , 2586408642i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_window) , "Window" , "is_using_font_oversampling" , 36873697i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_window) , "Window" , "set_wrap_controls" , 2586408642i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_window) , "Window" , "is_wrapping_controls" , 36873697i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_window) , "Window" , "child_controls_changed" , 3218959716i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_window) , "Window" , "set_theme" , 2326690814i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_window) , "Window" , "get_theme" , 3846893731i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_window) , "Window" , "set_theme_type_variation" , 3304788590i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_window) , "Window" , "get_theme_type_variation" , 2002593661i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_window) , "Window" , "begin_bulk_theme_override" , 3218959716i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_window) , "Window" , "end_bulk_theme_override" , 3218959716i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_window) , "Window" , "add_theme_icon_override" , 1373065600i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_window) , "Window" , "add_theme_font_override" , 3518018674i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_window) , "Window" , "add_theme_font_size_override" , 2415702435i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_window) , "Window" , "add_theme_color_override" , 4260178595i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_window) , "Window" , "add_theme_constant_override" , 2415702435i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_window) , "Window" , "remove_theme_icon_override" , 3304788590i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_window) , "Window" , "remove_theme_stylebox_override" , 3304788590i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_window) , "Window" , "remove_theme_font_override" , 3304788590i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_window) , "Window" , "remove_theme_font_size_override" , 3304788590i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_window) , "Window" , "remove_theme_color_override" , 3304788590i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_window) , "Window" , "remove_theme_constant_override" , 3304788590i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_window) , "Window" , "get_theme_icon" , 2336455395i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_window) , "Window" , "get_theme_font" , 387378635i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_window) , "Window" , "get_theme_font_size" , 229578101i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_window) , "Window" , "get_theme_color" , 2377051548i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_window) , "Window" , "get_theme_constant" , 229578101i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_window) , "Window" , "has_theme_icon_override" , 2619796661i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_window) , "Window" , "has_theme_stylebox_override" , 2619796661i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_window) , "Window" , "has_theme_font_override" , 2619796661i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_window) , "Window" , "has_theme_font_size_override" , 2619796661i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_window) , "Window" , "has_theme_color_override" , 2619796661i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_window) , "Window" , "has_theme_constant_override" , 2619796661i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_window) , "Window" , "has_theme_icon" , 1187511791i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_window) , "Window" , "has_theme_stylebox" , 1187511791i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_window) , "Window" , "has_theme_font" , 1187511791i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_window) , "Window" , "has_theme_font_size" , 1187511791i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_window) , "Window" , "has_theme_color" , 1187511791i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_window) , "Window" , "has_theme_constant" , 1187511791i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_window) , "Window" , "get_theme_default_base_scale" , 1740695150i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_window) , "Window" , "get_theme_default_font" , 3229501585i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_window) , "Window" , "get_theme_default_font_size" , 3905245786i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_window) , "Window" , "set_layout_direction" , 3094704184i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_window) , "Window" , "get_layout_direction" , 3909617982i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_window) , "Window" , "is_layout_rtl" , 36873697i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_window) , "Window" , "set_auto_translate" , 2586408642i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_window) , "Window" , "is_auto_translating" , 36873697i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_window) , "Window" , "popup" , 1680304321i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_window) , "Window" , "popup_on_parent" , 1763793166i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_window) , "Window" , "popup_centered" , 3447975422i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_window) , "Window" , "popup_centered_ratio" , 1014814997i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_window) , "Window" , "popup_centered_clamped" , 2613752477i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_window) , "Window" , "popup_exclusive" , 2134721627i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_window) , "Window" , "popup_exclusive_on_parent" , 2344671043i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_window) , "Window" , "popup_exclusive_centered" , 3357594017i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_window) , "Window" , "popup_exclusive_centered_ratio" , 2284776287i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_window) , "Window" , "popup_exclusive_centered_clamped" , 2612708785i64)) ; }