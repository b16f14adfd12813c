pub struct ClassServersMethodTable { function_pointers : Vec < crate :: ClassMethodBind > , } impl ClassServersMethodTable { pub const CLASS_COUNT : usize = 2usize ; pub const METHOD_COUNT : usize = 118usize ; # [allow (clippy :: missing_safety_doc)] pub unsafe fn load (interface : & crate :: GDExtensionInterface , string_names : & mut crate :: StringCache ,) -> Self { let fetch_fptr = interface . classdb_get_method_bind ; let mut function_pointers = Vec :: with_capacity (118usize) ; load_input_methods (& mut function_pointers , string_names , fetch_fptr) ; load_native_menu_methods (& mut function_pointers , string_names , fetch_fptr) ; Self { function_pointers } } # [inline (always)] pub fn fptr_by_index (& self , index : usize) -> crate :: ClassMethodBind { unsafe { * self . function_pointers . get_unchecked (index) } } } fn load_input_methods (function_pointers : & mut Vec < crate :: ClassMethodBind > , string_names : & mut crate :: StringCache , fetch_fptr : crate :: GDExtensionInterfaceClassdbGetMethodBind ,) { let sname_input = string_names . fetch ("Input") ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_input) , "Input" , "is_anything_pressed" , 36873697i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_input) , "Input" , "is_key_pressed" , 1938909964i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_input) , "Input" , "is_physical_key_pressed" , 1938909964i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_input) , "Input" , "is_key_label_pressed" , 1938909964i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_input) , "Input" , "is_mouse_button_pressed" , 1821097125i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_input) , "Input" , "is_joy_button_pressed" , 787208542i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_input) , "Input" , "is_action_pressed" , 1558498928i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_input) , "Input" , "is_action_just_pressed" , 1558498928i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_input) , "Input" , "is_action_just_released" , 1558498928i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_input) , "Input" , "get_action_strength" , 801543509i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_input) , "Input" , "get_action_raw_strength" , 801543509i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_input) , "Input" , "get_axis" , 1958752504i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_input) , "Input" , "get_vector" , 2479607902i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_input) , "Input" , "add_joy_mapping" , 1168363258i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_input) , "Input" , "remove_joy_mapping" , 83702148i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_input) , "Input" , "is_joy_known" , 3067735520i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_input) , "Input" , "get_joy_axis" , 4063175957i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_input) , "Input" , "get_joy_name" , 990163283i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_input) , "Input" , "get_joy_guid" , 844755477i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_input) , "Input" , "should_ignore_device" , 2522259332i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_input) , "Input" , "get_joy_vibration_strength" , 3114997196i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_input) , "Input" , "get_joy_vibration_duration" , 4025615559i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_input) , "Input" , "start_joy_vibration" , 2576575033i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_input) , "Input" , "stop_joy_vibration" , 1286410249i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_input) , "Input" , "vibrate_handheld" , 544894297i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_input) , "Input" , "get_gravity" , 3360562783i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_input) , "Input" , "get_accelerometer" , 3360562783i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_input) , "Input" , "get_magnetometer" , 3360562783i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_input) , "Input" , "get_gyroscope" , 3360562783i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_input) , "Input" , "set_gravity" , 3460891852i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_input) , "Input" , "set_accelerometer" , 3460891852i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_input) , "Input" , "set_magnetometer" , 3460891852i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_input) , "Input" , "set_gyroscope" , 3460891852i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_input) , "Input" , "get_last_mouse_velocity" , 1497962370i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_input) , "Input" , "get_last_mouse_screen_velocity" , 1497962370i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_input) , "Input" , "get_mouse_button_mask" , 2512161324i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_input) , "Input" , "set_mouse_mode" , 2228490894i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_input) , "Input" , "get_mouse_mode" , 965286182i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_input) , "Input" , "warp_mouse" , 743155724i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_input) , "Input" , "action_press" , 1713091165i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_input) , "Input" , "action_release" , 3304788590i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_input) , "Input" , "set_default_cursor_shape" , 2124816902i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_input) , "Input" , "get_current_cursor_shape" , 3455658929i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_input) , "Input" , "set_custom_mouse_cursor" , 703945977i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_input) , "Input" , "parse_input_event" , 3754044979i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_input) , "Input" , "set_use_accumulated_input" , 2586408642i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_input) , "Input" , "is_using_accumulated_input" , 2240911060i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_input) , "Input" , "flush_buffered_events" , 3218959716i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_input) , "Input" , "set_emulate_mouse_from_touch" , 2586408642i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_input) , "Input" , "is_emulating_mouse_from_touch" , 36873697i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_input) , "Input" , "set_emulate_touch_from_mouse" , 2586408642i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_input) , "Input" , "is_emulating_touch_from_mouse" , 36873697i64)) ; } fn load_native_menu_methods (function_pointers : & mut Vec < crate :: ClassMethodBind > , string_names : & mut crate :: StringCache , fetch_fptr : crate :: GDExtensionInterfaceClassdbGetMethodBind ,) { let sname_native_menu = string_names . fetch ("NativeMenu") ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_native_menu) , "NativeMenu" , "has_feature" , 1708975490i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_native_menu) , "NativeMenu" , "has_system_menu" , 718213027i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_native_menu) , "NativeMenu" , "get_system_menu" , 469707506i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_native_menu) , "NativeMenu" , "get_system_menu_name" , 1281499290i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_native_menu) , "NativeMenu" , "create_menu" , 529393457i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_native_menu) , "NativeMenu" , "has_menu" , 4155700596i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_native_menu) , "NativeMenu" , "free_menu" , 2722037293i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_native_menu) , "NativeMenu" , "get_size" , 2440833711i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_native_menu) , "NativeMenu" , "popup" , 2450610377i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_native_menu) , "NativeMenu" , "set_interface_direction" , 1265174801i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_native_menu) , "NativeMenu" , "set_popup_open_callback" , 3379118538i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_native_menu) , "NativeMenu" , "get_popup_open_callback" , 3170603026i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_native_menu) , "NativeMenu" , "set_popup_close_callback" , 3379118538i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_native_menu) , "NativeMenu" , "get_popup_close_callback" , 3170603026i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_native_menu) , "NativeMenu" , "set_minimum_width" , 1794382983i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_native_menu) , "NativeMenu" , "get_minimum_width" , 866169185i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_native_menu) , "NativeMenu" , "is_opened" , 4155700596i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_native_menu) , "NativeMenu" , "add_submenu_item" , 1002030223i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_native_menu) , "NativeMenu" , "add_item" , 2553375659i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_native_menu) , "NativeMenu" , "add_check_item" , 2553375659i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_native_menu) , "NativeMenu" , "add_icon_item" , 2987595282i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_native_menu) , "NativeMenu" , "add_icon_check_item" , 2987595282i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_native_menu) , "NativeMenu" , "add_radio_check_item" , 2553375659i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_native_menu) , "NativeMenu" , "add_icon_radio_check_item" , 2987595282i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_native_menu) , "NativeMenu" , "add_multistate_item" , 1558592568i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_native_menu) , "NativeMenu" , "add_separator" , 448810126i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_native_menu) , "NativeMenu" , "find_item_index_with_text" , 1362438794i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_native_menu) , "NativeMenu" , "find_item_index_with_tag" , 1260085030i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_native_menu) , "NativeMenu" , "find_item_index_with_submenu" , 893635918i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_native_menu) , "NativeMenu" , "is_item_checked" , 3120086654i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_native_menu) , "NativeMenu" , "is_item_checkable" , 3120086654i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_native_menu) , "NativeMenu" , "is_item_radio_checkable" , 3120086654i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_native_menu) , "NativeMenu" , "get_item_callback" , 1639989698i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_native_menu) , "NativeMenu" , "get_item_key_callback" , 1639989698i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_native_menu) , "NativeMenu" , "get_item_tag" , 4069510997i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_native_menu) , "NativeMenu" , "get_item_text" , 1464764419i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_native_menu) , "NativeMenu" , "get_item_submenu" , 1066463050i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_native_menu) , "NativeMenu" , "get_item_accelerator" , 316800700i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_native_menu) , "NativeMenu" , "is_item_disabled" , 3120086654i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_native_menu) , "NativeMenu" , "is_item_hidden" , 3120086654i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_native_menu) , "NativeMenu" , "get_item_tooltip" , 1464764419i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_native_menu) , "NativeMenu" , "get_item_state" , 1120910005i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_native_menu) , "NativeMenu" , "get_item_max_states" , 1120910005i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_native_menu) , "NativeMenu" , "get_item_icon" , 3391850701i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_native_menu) , "NativeMenu" , "get_item_indentation_level" , 1120910005i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_native_menu) , "NativeMenu" , "set_item_checked" , 2658558584i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_native_menu) , "NativeMenu" , "set_item_checkable" , 2658558584i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_native_menu) , "NativeMenu" , "set_item_radio_checkable" , 2658558584i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_native_menu) , "NativeMenu" , "set_item_callback" , 2779810226i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_native_menu) , "NativeMenu" , "set_item_hover_callbacks" , 2779810226i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_native_menu) , "NativeMenu" , "set_item_key_callback" , 2779810226i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_native_menu) , "NativeMenu" , "set_item_tag" , 2706844827i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_native_menu) , "NativeMenu" , "set_item_text" , 4153150897i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_native_menu) , "NativeMenu" , "set_item_submenu" , 2310537182i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_native_menu) , "NativeMenu" , "set_item_accelerator" , 786300043i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_native_menu) , "NativeMenu" , "set_item_disabled" , 2658558584i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_native_menu) , "NativeMenu" , "set_item_hidden" , 2658558584i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_native_menu) , "NativeMenu" , "set_item_tooltip" , 4153150897i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_native_menu) , "NativeMenu" , "set_item_state" , 4288446313i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_native_menu) , "NativeMenu" , "set_item_max_states" , 4288446313i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_native_menu) , "NativeMenu" , "set_item_icon" , 1388763257i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_native_menu) , "NativeMenu" , "set_item_indentation_level" , 4288446313i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_native_menu) , "NativeMenu" , "get_item_count" , 2198884583i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_native_menu) , "NativeMenu" , "is_system_menu" , 4155700596i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_native_menu) , "NativeMenu" , "remove_item" , 3411492887i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_native_menu) , "NativeMenu" , "clear" , 2722037293i64)) ; }