# ! [doc = "Sidecar module for class [`Input`][crate::classes::Input]."] # [allow (unused_imports)] use crate :: builtin :: * ; # [allow (unused_imports)] use crate :: meta :: { AsArg , AsObjectArg , CowArg , InternedName , ObjectArg , Signature } ; # [allow (unused_imports)] use crate :: obj :: Gd ; # [allow (unused_imports)] use crate :: signal :: { SignalObject , TypedSignal } ; use crate :: sys ; pub (super) mod re_export { use super :: * ; # [doc = "Godot class `Input`.\n\nInherits [`Object`][crate::classes::Object].\n\nRelated symbols (default-param builders, enums, interned names, signals) are in [`input`][crate::classes::input]."] # [derive (Debug)] # [repr (C)] pub struct Input { object_ptr : sys :: GDExtensionObjectPtr , } impl Input { # [doc = r" Returns the engine singleton, looked up once and cached afterwards."] # [doc = r""] # [doc = r" # Panics"] # [doc = r" If the engine does not provide the singleton."] pub fn singleton () -> Gd < Self > { let object_ptr = Self :: __singleton_cell () . get_or_lookup (|| { let class_name = InternedName :: new ("Input") ; unsafe { sys :: interface_fn ! (global_get_singleton) (class_name . string_sys ()) } }) . unwrap_or_else (|| panic ! ("engine singleton `Input` is not available")) ; unsafe { Gd :: from_obj_sys_weak (object_ptr) } } # [doc (hidden)] pub fn __singleton_cell () -> & 'static sys :: SingletonCell { static SINGLETON : sys :: SingletonCell = sys :: SingletonCell :: new () ; & SINGLETON } pub fn is_anything_pressed (& self ,) -> bool { type CallRet = bool ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_servers_api () . fptr_by_index (0usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Input" , "is_anything_pressed" , self . object_ptr , args ,) } } pub fn is_key_pressed (& self , keycode : crate :: global :: Key ,) -> bool { type CallRet = bool ; type CallParams = (crate :: global :: Key ,) ; let args = (keycode ,) ; unsafe { let method_bind = sys :: class_servers_api () . fptr_by_index (1usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Input" , "is_key_pressed" , self . object_ptr , args ,) } } pub fn is_physical_key_pressed (& self , keycode : crate :: global :: Key ,) -> bool { type CallRet = bool ; type CallParams = (crate :: global :: Key ,) ; let args = (keycode ,) ; unsafe { let method_bind = sys :: class_servers_api () . fptr_by_index (2usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Input" , "is_physical_key_pressed" , self . object_ptr , args ,) } } pub fn is_key_label_pressed (& self , keycode : crate :: global :: Key ,) -> bool { type CallRet = bool ; type CallParams = (crate :: global :: Key ,) ; let args = (keycode ,) ; unsafe { let method_bind = sys :: class_servers_api () . fptr_by_index (3usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Input" , "is_key_label_pressed" , self . object_ptr , args ,) } } pub fn is_mouse_button_pressed (& self , button : crate :: global :: MouseButton ,) -> bool { type CallRet = bool ; type CallParams = (crate :: global :: MouseButton ,) ; let args = (button ,) ; unsafe { let method_bind = sys :: class_servers_api () . fptr_by_index (4usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Input" , "is_mouse_button_pressed" , self . object_ptr , args ,) } } pub fn is_joy_button_pressed (& self , device : i32 , button : crate :: global :: JoyButton ,) -> bool { type CallRet = bool ; type CallParams = (i32 , crate :: global :: JoyButton ,) ; let args = (device , button ,) ; unsafe { let method_bind = sys :: class_servers_api () . fptr_by_index (5usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Input" , "is_joy_button_pressed" , self . object_ptr , args ,) } } pub (crate) fn is_action_pressed_full (& self , action : CowArg < '_ , StringName > , exact_match : bool ,) -> bool { type CallRet = bool ; type CallParams < 'a0 , > = (CowArg < 'a0 , StringName > , bool ,) ; let args = (action , exact_match ,) ; unsafe { let method_bind = sys :: class_servers_api () . fptr_by_index (6usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Input" , "is_action_pressed" , self . object_ptr , args ,) } } # [inline] pub fn is_action_pressed (& self , action : impl AsArg < StringName > ,) -> bool { self . is_action_pressed_ex (action ,) . done () } # [inline] pub fn is_action_pressed_ex < 'ex > (& 'ex self , action : impl AsArg < StringName > + 'ex ,) -> super :: ExIsActionPressed < 'ex > { super :: ExIsActionPressed :: new (self , action . into_arg () ,) } pub (crate) fn is_action_just_pressed_full (& self , action : CowArg < '_ , StringName > , exact_match : bool ,) -> bool { type CallRet = bool ; type CallParams < 'a0 , > = (CowArg < 'a0 , StringName > , bool ,) ; let args = (action , exact_match ,) ; unsafe { let method_bind = sys :: class_servers_api () . fptr_by_index (7usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Input" , "is_action_just_pressed" , self . object_ptr , args ,) } } # [inline] pub fn is_action_just_pressed (& self , action : impl AsArg < StringName > ,) -> bool { self . is_action_just_pressed_ex (action ,) . done () } # [inline] pub fn is_action_just_pressed_ex < 'ex > (& 'ex self , action : impl AsArg < StringName > + 'ex ,) -> super :: ExIsActionJustPressed < 'ex > { super :: ExIsActionJustPressed :: new (self , action . into_arg () ,) } pub (crate) fn is_action_just_released_full (& self , action : CowArg < '_ , StringName > , exact_match : bool ,) -> bool { type CallRet = bool ; type CallParams < 'a0 , > = (CowArg < 'a0 , StringName > , bool ,) ; let args = (action , exact_match ,) ; unsafe { let method_bind = sys :: class_servers_api () . fptr_by_index (8usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Input" , "is_action_just_released" , self . object_ptr , args ,) } } # [inline] pub fn is_action_just_released (& self , action : impl AsArg < StringName > ,) -> bool { self . is_action_just_released_ex (action ,) . done () } # [inline] pub fn is_action_just_released_ex < 'ex > (& 'ex self , action : impl AsArg < StringName > + 'ex ,) -> super :: ExIsActionJustReleased < 'ex > { super :: ExIsActionJustReleased :: new (self , action . into_arg () ,) } pub (crate) fn get_action_strength_full (& self , action : CowArg < '_ , StringName > , exact_match : bool ,) -> f32 { type CallRet = f32 ; type CallParams < 'a0 , > = (CowArg < 'a0 , StringName > , bool ,) ; let args = (action , exact_match ,) ; unsafe { let method_bind = sys :: class_servers_api () . fptr_by_index (9usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Input" , "get_action_strength" , self . object_ptr , args ,) } } # [inline] pub fn get_action_strength (& self , action : impl AsArg < StringName > ,) -> f32 { self . get_action_strength_ex (action ,) . done () } # [inline] pub fn get_action_strength_ex < 'ex > (& 'ex self , action : impl AsArg < StringName > + 'ex ,) -> super :: ExGetActionStrength < 'ex > { super :: ExGetActionStrength :: new (self , action . into_arg () ,) } pub (crate) fn get_action_raw_strength_full (& self , action : CowArg < '_ , StringName > , exact_match : bool ,) -> f32 { type CallRet = f32 ; type CallParams < 'a0 , > = (CowArg < 'a0 , StringName > , bool ,) ; let args = (action , exact_match ,) ; unsafe { let method_bind = sys :: class_servers_api () . fptr_by_index (10usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Input" , "get_action_raw_strength" , self . object_ptr , args ,) } } # [inline] pub fn get_action_raw_strength (& self , action : impl AsArg < StringName > ,) -> f32 { self . get_action_raw_strength_ex (action ,) . done () } # [inline] pub fn get_action_raw_strength_ex < 'ex > (& 'ex self , action : impl AsArg < StringName > + 'ex ,) -> super :: ExGetActionRawStrength < 'ex > { super :: ExGetActionRawStrength :: new (self , action . into_arg () ,) } pub fn get_axis (& self , negative_action : impl AsArg < StringName > , positive_action : impl AsArg < StringName > ,) -> f32 { type CallRet = f32 ; type CallParams < 'a0 , 'a1 , > = (CowArg < 'a0 , StringName > , CowArg < 'a1 , StringName > ,) ; let args = (negative_action . into_arg () , positive_action . into_arg () ,) ; unsafe { let method_bind = sys :: class_servers_api () . fptr_by_index (11usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Input" , "get_axis" , self . object_ptr , args ,) } } pub (crate) fn get_vector_full (& self , negative_x : CowArg < '_ , StringName > , positive_x : CowArg < '_ , StringName > , negative_y : CowArg < '_ , StringName > , positive_y : CowArg < '_ , StringName > , deadzone : f32 ,) -> Vector2 { type CallRet = Vector2 ; type CallParams < 'a0 , 'a1 , 'a2 , 'a3 , > = (CowArg < 'a0 , StringName > , CowArg < 'a1 , StringName > , CowArg < 'a2 , StringName > , CowArg < 'a3 , StringName > , f32 ,) ; let args = (negative_x , positive_x , negative_y , positive_y , deadzone ,) ; unsafe { let method_bind = sys :: class_servers_api () . fptr_by_index (12usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Input" , "get_vector" , self . object_ptr , args ,) } } # [inline] pub fn get_vector (& self , negative_x : impl AsArg < StringName > , positive_x : impl AsArg < StringName > , negative_y : impl AsArg < StringName > , positive_y : impl AsArg < StringName > ,) -> Vector2 { self . get_vector_ex (negative_x , positive_x , negative_y , positive_y ,) . done () } # [inline] pub fn get_vector_ex < 'ex > (& 'ex self , negative_x : impl AsArg < StringName > + 'ex , positive_x : impl AsArg < StringName > + 'ex , negative_y : impl AsArg < StringName > + 'ex , positive_y : impl AsArg < StringName > + 'ex ,) -> super :: ExGetVector < 'ex > { super :: ExGetVector :: new (self , negative_x . into_arg () , positive_x . into_arg () , negative_y . into_arg () , positive_y . into_arg () ,) } pub (crate) fn add_joy_mapping_full (& mut self , mapping : CowArg < '_ , GString > , update_existing : bool ,) { type CallRet = () ; type CallParams < 'a0 , > = (CowArg < 'a0 , GString > , bool ,) ; let args = (mapping , update_existing ,) ; unsafe { let method_bind = sys :: class_servers_api () . fptr_by_index (13usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Input" , "add_joy_mapping" , self . object_ptr , args ,) } } # [inline] pub fn add_joy_mapping (& mut self , mapping : impl AsArg < GString > ,) { self . add_joy_mapping_ex (mapping ,) . done () } # [inline] pub fn add_joy_mapping_ex < 'ex > (& 'ex mut self , mapping : impl AsArg < GString > + 'ex ,) -> super :: ExAddJoyMapping < 'ex > { super :: ExAddJoyMapping :: new (self , mapping . into_arg () ,) } pub fn remove_joy_mapping (& mut self , guid : impl AsArg < GString > ,) { type CallRet = () ; type CallParams < 'a0 , > = (CowArg < 'a0 , GString > ,) ; let args = (guid . into_arg () ,) ; unsafe { let method_bind = sys :: class_servers_api () . fptr_by_index (14usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Input" , "remove_joy_mapping" , self . object_ptr , args ,) } } pub fn is_joy_known (& mut self , device : i32 ,) -> bool { type CallRet = bool ; type CallParams = (i32 ,) ; let args = (device ,) ; unsafe { let method_bind = sys :: class_servers_api () . fptr_by_index (15usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Input" , "is_joy_known" , self . object_ptr , args ,) } } pub fn get_joy_axis (& self , device : i32 , axis : crate :: global :: JoyAxis ,) -> f32 { type CallRet = f32 ; type CallParams = (i32 , crate :: global :: JoyAxis ,) ; let args = (device , axis ,) ; unsafe { let method_bind = sys :: class_servers_api () . fptr_by_index (16usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Input" , "get_joy_axis" , self . object_ptr , args ,) } } pub fn get_joy_name (& mut self , device : i32 ,) -> GString { type CallRet = GString ; type CallParams = (i32 ,) ; let args = (device ,) ; unsafe { let method_bind = sys :: class_servers_api () . fptr_by_index (17usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Input" , "get_joy_name" , self . object_ptr , args ,) } } pub fn get_joy_guid (& self , device : i32 ,) -> GString { type CallRet = GString ; type CallParams = (i32 ,) ; let args = (device ,) ; unsafe { let method_bind = sys :: class_servers_api () . fptr_by_index (18usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Input" , "get_joy_guid" , self . object_ptr , args ,) } } pub fn should_ignore_device (& self , vendor_id : i32 , product_id : i32 ,) -> bool { type CallRet = bool ; type CallParams = (i32 , i32 ,) ; let args = (vendor_id , product_id ,) ; unsafe { let method_bind = sys :: class_servers_api () . fptr_by_index (19usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Input" , "should_ignore_device" , self . object_ptr , args ,) } } pub fn get_joy_vibration_strength (& mut self , device : i32 ,) -> Vector2 { type CallRet = Vector2 ; type CallParams = (i32 ,) ; let args = (device ,) ; unsafe { let method_bind = sys :: class_servers_api () . fptr_by_index (20usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Input" , "get_joy_vibration_strength" , self . object_ptr , args ,) } } pub fn get_joy_vibration_duration (& mut self , device : i32 ,) -> f32 { type CallRet = f32 ; type CallParams = (i32 ,) ; let args = (device ,) ; unsafe { let method_bind = sys :: class_servers_api () . fptr_by_index (21usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Input" , "get_joy_vibration_duration" , self . object_ptr , args ,) } } pub (crate) fn start_joy_vibration_full (& mut self , device : i32 , weak_magnitude : f32 , strong_magnitude : f32 , duration : f32 ,) { type CallRet = () ; type CallParams = (i32 , f32 , f32 , f32 ,) ; let args = (device , weak_magnitude , strong_magnitude , duration ,) ; unsafe { let method_bind = sys :: class_servers_api () . fptr_by_index (22usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Input" , "start_joy_vibration" , self . object_ptr , args ,) } } # [inline] pub fn start_joy_vibration (& mut self , device : i32 , weak_magnitude : f32 , strong_magnitude : f32 ,) { self . start_joy_vibration_ex (device , weak_magnitude , strong_magnitude ,) . done () } # [inline] pub fn start_joy_vibration_ex < 'ex > (& 'ex mut self , device : i32 , weak_magnitude : f32 , strong_magnitude : f32 ,) -> super :: ExStartJoyVibration < 'ex > { super :: ExStartJoyVibration :: new (self , device , weak_magnitude , strong_magnitude ,) } pub fn stop_joy_vibration (& mut self , device : i32 ,) { type CallRet = () ; type CallParams = (i32 ,) ; let args = (device ,) ; unsafe { let method_bind = sys :: class_servers_api () . fptr_by_index (23usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Input" , "stop_joy_vibration" , self . object_ptr , args ,) } } pub (crate) fn vibrate_handheld_full (& mut self , duration_ms : i32 , amplitude : f32 ,) { type CallRet = () ; type CallParams = (i32 , f32 ,) ; let args = (duration_ms , amplitude ,) ; unsafe { let method_bind = sys :: class_servers_api () . fptr_by_index (24usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Input" , "vibrate_handheld" , self . object_ptr , args ,) } } # [inline] pub fn vibrate_handheld (& mut self ,) { self . vibrate_handheld_ex () . done () } # [inline] pub fn vibrate_handheld_ex < 'ex > (& 'ex mut self ,) -> super :: ExVibrateHandheld < 'ex > { super :: ExVibrateHandheld :: new (self ,) } pub fn get_gravity (& self ,) -> Vector3 { type CallRet = Vector3 ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_servers_api () . fptr_by_index (25usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Input" , "get_gravity" , self . object_ptr , args ,) } } pub fn get_accelerometer (& self ,) -> Vector3 { type CallRet = Vector3 ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_servers_api () . fptr_by_index (26usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Input" , "get_accelerometer" , self . object_ptr , args ,) } } pub fn get_magnetometer (& self ,) -> Vector3 { type CallRet = Vector3 ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_servers_api () . fptr_by_index (27usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Input" , "get_magnetometer" , self . object_ptr , args ,) } } pub fn get_gyroscope (& self ,) -> Vector3 { type CallRet = Vector3 ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_servers_api () . fptr_by_index (28usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Input" , "get_gyroscope" , self . object_ptr , args ,) } } pub fn set_gravity (& mut self , value : Vector3 ,) { type CallRet = () ; type CallParams = (Vector3 ,) ; let args = (value ,) ; unsafe { let method_bind = sys :: class_servers_api () . fptr_by_index (29usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Input" , "set_gravity" , self . object_ptr , args ,) } } pub fn set_accelerometer (& mut self , value : Vector3 ,) { type CallRet = () ; type CallParams = (Vector3 ,) ; let args = (value ,) ; unsafe { let method_bind = sys :: class_servers_api () . fptr_by_index (30usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Input" , "set_accelerometer" , self . object_ptr , args ,) } } pub fn set_magnetometer (& mut self , value : Vector3 ,) { type CallRet = () ; type CallParams = (Vector3 ,) ; let args = (value ,) ; unsafe { let method_bind = sys :: class_servers_api () . fptr_by_index (31usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Input" , "set_magnetometer" , self . object_ptr , args ,) } } pub fn set_gyroscope (& mut self , value : Vector3 ,) { type CallRet = () ; type CallParams = (Vector3 ,) ; let args = (value ,) ; unsafe { let method_bind = sys :: class_servers_api () . fptr_by_index (32usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Input" , "set_gyroscope" , self . object_ptr , args ,) } } pub fn get_last_mouse_velocity (& mut self ,) -> Vector2 { type CallRet = Vector2 ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_servers_api () . fptr_by_index (33usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Input" , "get_last_mouse_velocity" , self . object_ptr , args ,) } } pub fn get_last_mouse_screen_velocity (& mut self ,) -> Vector2 { type CallRet = Vector2 ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_servers_api () . fptr_by_index (34usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Input" , "get_last_mouse_screen_velocity" , self . object_ptr , args ,) } } pub fn get_mouse_button_mask (& self ,) -> crate :: global :: MouseButtonMask { type CallRet = crate :: global :: MouseButtonMask ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_servers_api () . fptr_by_index (35usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Input" , "get_mouse_button_mask" , self . object_ptr , args ,) } } pub fn set_mouse_mode (& mut self , mode : crate :: classes :: input :: MouseMode ,) { type CallRet = () ; type CallParams = (crate :: classes :: input :: MouseMode ,) ; let args = (mode ,) ; unsafe { let method_bind = sys :: class_servers_api () . fptr_by_index (36usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Input" , "set_mouse_mode" , self . object_ptr , args ,) } } pub fn get_mouse_mode (& self ,) -> crate :: classes :: input :: MouseMode { type CallRet = crate :: classes :: input :: MouseMode ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_servers_api () . fptr_by_index (37usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Input" , "get_mouse_mode" , self . object_ptr , args ,) } } pub fn warp_mouse (& mut self , position : Vector2 ,) { type CallRet = () ; type CallParams = (Vector2 ,) ; let args = (position ,) ; unsafe { let method_bind = sys :: class_servers_api () . fptr_by_index (38usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Input" , "warp_mouse" , self . object_ptr , args ,) } } pub (crate) fn action_press_full (& mut self , action : CowArg < '_ , StringName > , strength : f32 ,) { type CallRet = () ; type CallParams < 'a0 , > = (CowArg < 'a0 , StringName > , f32 ,) ; let args = (action , strength ,) ; unsafe { let method_bind = sys :: class_servers_api () . fptr_by_index (39usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Input" , "action_press" , self . object_ptr , args ,) } } # [inline] pub fn action_press (& mut self , action : impl AsArg < StringName > ,) { self . action_press_ex (action ,) . done () } # [inline] pub fn action_press_ex < 'ex > (& 'ex mut self , action : impl AsArg < StringName > + 'ex ,) -> super :: ExActionPress < 'ex > { super :: ExActionPress :: new (self , action . into_arg () ,) } pub fn action_release (& mut self , action : impl AsArg < StringName > ,) { type CallRet = () ; type CallParams < 'a0 , > = (CowArg < 'a0 , StringName > ,) ; let args = (action . into_arg () ,) ; unsafe { let method_bind = sys :: class_servers_api () . fptr_by_index (40usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Input" , "action_release" , self . object_ptr , args ,) } } pub (crate) fn set_default_cursor_shape_full (& mut self , shape : crate :: classes :: input :: CursorShape ,) { type CallRet = () ; type CallParams = (crate :: classes :: input :: CursorShape ,) ; let args = (shape ,) ; unsafe { let method_bind = sys :: class_servers_api () . fptr_by_index (41usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Input" , "set_default_cursor_shape" , self . object_ptr , args ,) } } # [inline] pub fn set_default_cursor_shape (& mut self ,) { self . set_default_cursor_shape_ex () . done () } # [inline] pub fn set_default_cursor_shape_ex < 'ex > (& 'ex mut self ,) -> super :: ExSetDefaultCursorShape < 'ex > { super :: ExSetDefaultCursorShape :: new (self ,) } pub fn get_current_cursor_shape (& self ,) -> crate :: classes :: input :: CursorShape { type CallRet = crate :: classes :: input :: CursorShape ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_servers_api () . fptr_by_index (42usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Input" , "get_current_cursor_shape" , self . object_ptr , args ,) } } pub (crate) fn set_custom_mouse_cursor_full (& mut self , image : ObjectArg < crate :: classes :: Resource > , shape : crate :: classes :: input :: CursorShape , hotspot : Vector2 ,) { type CallRet = () ; type CallParams = (ObjectArg < crate :: classes :: Resource > , crate :: classes :: input :: CursorShape , Vector2 ,) ; let args = (image , shape , hotspot ,) ; unsafe { let method_bind = sys :: class_servers_api () . fptr_by_index (43usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Input" , "set_custom_mouse_cursor" , self . object_ptr , args ,) } } # [inline] pub fn set_custom_mouse_cursor (& mut self , image : impl AsObjectArg < crate :: classes :: Resource > ,) { self . set_custom_mouse_cursor_ex (image ,) . done () } # [inline] pub fn set_custom_mouse_cursor_ex < 'ex > (& 'ex mut self , image : impl AsObjectArg < crate :: classes :: Resource > ,) -> super :: ExSetCustomMouseCursor < 'ex > { super :: ExSetCustomMouseCursor :: new (self , image . as_object_arg () ,) } pub fn parse_input_event (& mut self , event : impl AsObjectArg < crate :: classes :: InputEvent > ,) { type CallRet = () ; type CallParams = (ObjectArg < crate :: classes :: InputEvent > ,) ; let args = (event . as_object_arg () ,) ; unsafe { let method_bind = sys :: class_servers_api () . fptr_by_index (44usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Input" , "parse_input_event" , self . object_ptr , args ,) } } pub fn set_use_accumulated_input (& mut self , enable : bool ,) { type CallRet = () ; type CallParams = (bool ,) ; let args = (enable ,) ; unsafe { let method_bind = sys :: class_servers_api () . fptr_by_index (45usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Input" , "set_use_accumulated_input" , self . object_ptr , args ,) } } pub fn is_using_accumulated_input (& mut self ,) -> bool { type CallRet = bool ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_servers_api () . fptr_by_index (46usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Input" , "is_using_accumulated_input" , self . object_ptr , args ,) } } pub fn flush_buffered_events (& mut self ,) { type CallRet = () ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_servers_api () . fptr_by_index (47usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Input" , "flush_buffered_events" , self . object_ptr , args ,) } } pub fn set_emulate_mouse_from_touch (& mut self , enable : bool ,) { type CallRet = () ; type CallParams = (bool ,) ; let args = (enable ,) ; unsafe { let method_bind = sys :: class_servers_api () . fptr_by_index (48usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Input" , "set_emulate_mouse_from_touch" , self . object_ptr , args ,) } } pub fn is_emulating_mouse_from_touch (& self ,) -> bool { type CallRet = bool ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_servers_api () . fptr_by_index (49usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Input" , "is_emulating_mouse_from_touch" , self . object_ptr , args ,) } } pub fn set_emulate_touch_from_mouse (& mut self , enable : bool ,) { type CallRet = () ; type CallParams = (bool ,) ; let args = (enable ,) ; unsafe { let method_bind = sys :: class_servers_api () . fptr_by_index (50usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Input" , "set_emulate_touch_from_mouse" , self . object_ptr , args ,) } } pub fn is_emulating_touch_from_mouse (& self ,) -> bool { type CallRet = bool ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_servers_api () . fptr_by_index (51usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Input" , "is_emulating_touch_from_mouse" , self . object_ptr , args ,) } } # [doc = "Typed signals of this class and its bases; see [`SignalsOfInput`][super::input::SignalsOfInput]."] pub fn signals (& mut self) -> super :: SignalsOfInput < '_ > { super :: SignalsOfInput :: __new (crate :: signal :: SignalObject :: __new (self . object_ptr)) } } impl crate :: obj :: GodotClass for Input { const CLASS_NAME : & 'static str = "Input" ; type Base = crate :: classes :: Object ; type Memory = crate :: obj :: MemManual ; const INIT_LEVEL : crate :: init :: InitLevel = crate :: init :: InitLevel :: Servers ; } impl crate :: obj :: EngineClass for Input { fn as_object_ptr (& self) -> sys :: GDExtensionObjectPtr { self . object_ptr } } unsafe impl crate :: obj :: Inherits < crate :: classes :: Object > for Input { } impl std :: ops :: Deref for Input { type Target = crate :: classes :: Object ; fn deref (& self) -> & Self :: Target { unsafe { std :: mem :: transmute :: < & Self , & Self :: Target > (self) } } } impl std :: ops :: DerefMut for Input { fn deref_mut (& mut self) -> & mut Self :: Target { unsafe { std :: mem :: transmute :: < & mut Self , & mut Self :: Target > (self) } } } } # [doc = "Default-param extender for [`Input::is_action_pressed_ex`][super::Input::is_action_pressed_ex]."] # [must_use] pub struct ExIsActionPressed < 'ex > { surround_object : & 'ex re_export :: Input , action : CowArg < 'ex , StringName > , exact_match : bool , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExIsActionPressed < 'ex > { fn new (surround_object : & 'ex re_export :: Input , action : CowArg < 'ex , StringName > ,) -> Self { Self { surround_object , action , exact_match : false , } } # [inline] pub fn exact_match (self , value : bool) -> Self { Self { exact_match : value , .. self } } # [inline] pub fn done (self) -> bool { re_export :: Input :: is_action_pressed_full (self . surround_object , self . action , self . exact_match ,) } } # [doc = "Default-param extender for [`Input::is_action_just_pressed_ex`][super::Input::is_action_just_pressed_ex]."] # [must_use] pub struct ExIsActionJustPressed < 'ex > { surround_object : & 'ex re_export :: Input , action : CowArg < 'ex , StringName > , exact_match : bool , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExIsActionJustPressed < 'ex > { fn new (surround_object : & 'ex re_export :: Input , action : CowArg < 'ex , StringName > ,) -> Self { Self { surround_object , action , exact_match : false , } } # [inline] pub fn exact_match (self , value : bool) -> Self { Self { exact_match : value , .. self } } # [inline] pub fn done (self) -> bool { re_export :: Input :: is_action_just_pressed_full (self . surround_object , self . action , self . exact_match ,) } } # [doc = "Default-param extender for [`Input::is_action_just_released_ex`][super::Input::is_action_just_released_ex]."] # [must_use] pub struct ExIsActionJustReleased < 'ex > { surround_object : & 'ex re_export :: Input , action : CowArg < 'ex , StringName > , exact_match : bool , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExIsActionJustReleased < 'ex > { fn new (surround_object : & 'ex re_export :: Input , action : CowArg < 'ex , StringName > ,) -> Self { Self { surround_object , action , exact_match : false , } } # [inline] pub fn exact_match (self , value : bool) -> Self { Self { exact_match : value , .. self } } # [inline] pub fn done (self) -> bool { re_export :: Input :: is_action_just_released_full (self . surround_object , self . action , self . exact_match ,) } } # [doc = "Default-param extender for [`Input::get_action_strength_ex`][super::Input::get_action_strength_ex]."] # [must_use] pub struct ExGetActionStrength < 'ex > { surround_object : & 'ex re_export :: Input , action : CowArg < 'ex , StringName > , exact_match : bool , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExGetActionStrength < 'ex > { fn new (surround_object : & 'ex re_export :: Input , action : CowArg < 'ex , StringName > ,) -> Self { Self { surround_object , action , exact_match : false , } } # [inline] pub fn exact_match (self , value : bool) -> Self { Self { exact_match : value , .. self } } # [inline] pub fn done (self) -> f32 { re_export :: Input :: get_action_strength_full (self . surround_object , self . action , self . exact_match ,) } } # [doc = "Default-param extender for [`Input::get_action_raw_strength_ex`][super::Input::get_action_raw_strength_ex]."] # [must_use] pub struct ExGetActionRawStrength < 'ex > { surround_object : & 'ex re_export :: Input , action : CowArg < 'ex , StringName > , exact_match : bool , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExGetActionRawStrength < 'ex > { fn new (surround_object : & 'ex re_export :: Input , action : CowArg < 'ex , StringName > ,) -> Self { Self { surround_object , action , exact_match : false , } } # [inline] pub fn exact_match (self , value : bool) -> Self { Self { exact_match : value , .. self } } # [inline] pub fn done (self) -> f32 { re_export :: Input :: get_action_raw_strength_full (self . surround_object , self . action , self . exact_match ,) } } # [doc = "Default-param extender for [`Input::get_vector_ex`][super::Input::get_vector_ex]."] # [must_use] pub struct ExGetVector < 'ex > { surround_object : & 'ex re_export :: Input , negative_x : CowArg < 'ex , StringName > , positive_x : CowArg < 'ex , StringName > , negative_y : CowArg < 'ex , StringName > , positive_y : CowArg < 'ex , StringName > , deadzone : f32 , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExGetVector < 'ex > { fn new (surround_object : & 'ex re_export :: Input , negative_x : CowArg < 'ex , StringName > , positive_x : CowArg < 'ex , StringName > , negative_y : CowArg < 'ex , StringName > , positive_y : CowArg < 'ex , StringName > ,) -> Self { Self { surround_object , negative_x , positive_x , negative_y , positive_y , deadzone : - 1f32 , } } # [inline] pub fn deadzone (self , value : f32) -> Self { Self { deadzone : value , .. self } } # [inline] pub fn done (self) -> Vector2 { re_export :: Input :: get_vector_full (self . surround_object , self . negative_x , self . positive_x , self . negative_y , self . positive_y , self . deadzone ,) } } # [doc = "Default-param extender for [`Input::add_joy_mapping_ex`][super::Input::add_joy_mapping_ex]."] # [must_use] pub struct ExAddJoyMapping < 'ex > { surround_object : & 'ex mut re_export :: Input , mapping : CowArg < 'ex , GString > , update_existing : bool , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExAddJoyMapping < 'ex > { fn new (surround_object : & 'ex mut re_export :: Input , mapping : CowArg < 'ex , GString > ,) -> Self { Self { surround_object , mapping , update_existing : false , } } # [inline] pub fn update_existing (self , value : bool) -> Self { Self { update_existing : value , .. self } } # [inline] pub fn done (self) { re_export :: Input :: add_joy_mapping_full (self . surround_object , self . mapping , self . update_existing ,) } } # [doc = "Default-param extender for [`Input::start_joy_vibration_ex`][super::Input::start_joy_vibration_ex]."] # [must_use] pub struct ExStartJoyVibration < 'ex > { surround_object : & 'ex mut re_export :: Input , device : i32 , weak_magnitude : f32 , strong_magnitude : f32 , duration : f32 , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExStartJoyVibration < 'ex > { fn new (surround_object : & 'ex mut re_export :: Input , device : i32 , weak_magnitude : f32 , strong_magnitude : f32 ,) -> Self { Self { surround_object , device , weak_magnitude , strong_magnitude , duration : 0f32 , } } # [inline] pub fn duration (self , value : f32) -> Self { Self { duration : value , .. self } } # [inline] pub fn done (self) { re_export :: Input :: start_joy_vibration_full (self . surround_object , self . device , self . weak_magnitude , self . strong_magnitude , self . duration ,) } } # [doc = "Default-param extender for [`Input::vibrate_handheld_ex`][super::Input::vibrate_handheld_ex]."] # [must_use] pub struct ExVibrateHandheld < 'ex > { surround_object : & 'ex mut re_export :: Input , duration_ms : i32 , amplitude : f32 , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExVibrateHandheld < 'ex > { fn new (surround_object : & 'ex mut re_export :: Input ,) -> Self { Self { surround_object , duration_ms : 500i32 , amplitude : - 1f32 , } } # [inline] pub fn duration_ms (self , value : i32) -> Self { Self { duration_ms : value , .. self } } # [inline] pub fn amplitude (self , value : f32) -> Self { Self { amplitude : value , .. self } } # [inline] pub fn done (self) { re_export :: Input :: vibrate_handheld_full (self . surround_object , self . duration_ms , self . amplitude ,) } } # [doc = "Default-param extender for [`Input::action_press_ex`][super::Input::action_press_ex]."] # [must_use] pub struct ExActionPress < 'ex > { surround_object : & 'ex mut re_export :: Input , action : CowArg < 'ex , StringName > , strength : f32 , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExActionPress < 'ex > { fn new (surround_object : & 'ex mut re_export :: Input , action : CowArg < 'ex , StringName > ,) -> Self { Self { surround_object , action , strength : 1f32 , } } # [inline] pub fn strength (self , value : f32) -> Self { Self { strength : value , .. self } } # [inline] pub fn done (self) { re_export :: Input :: action_press_full (self . surround_object , self . action , self . strength ,) } } # [doc = "Default-param extender for [`Input::set_default_cursor_shape_ex`][super::Input::set_default_cursor_shape_ex]."] # [must_use] pub struct ExSetDefaultCursorShape < 'ex > { surround_object : & 'ex mut re_export :: Input , shape : crate :: classes :: input :: CursorShape , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExSetDefaultCursorShape < 'ex > { fn new (surround_object : & 'ex mut re_export :: Input ,) -> Self { Self { surround_object , shape : crate :: obj :: EngineEnum :: from_ord (0) , } } # [inline] pub fn shape (self , value : crate :: classes :: input :: CursorShape) -> Self { Self { shape : value , .. self } } # [inline] pub fn done (self) { re_export :: Input :: set_default_cursor_shape_full (self . surround_object , self . shape ,) } } # [doc = "Default-param extender for [`Input::set_custom_mouse_cursor_ex`][super::Input::set_custom_mouse_cursor_ex]."] # [must_use] pub struct ExSetCustomMouseCursor < 'ex > { surround_object : & 'ex mut re_export :: Input , image : ObjectArg < crate :: classes :: Resource > , shape : crate :: classes :: input :: CursorShape , hotspot : Vector2 , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExSetCustomMouseCursor < 'ex > { fn new (surround_object : & 'ex mut re_export :: Input , image : ObjectArg < crate :: classes :: Resource > ,) -> Self { Self { surround_object , image , shape : crate :: obj :: EngineEnum :: from_ord (0) , hotspot : Vector2 :: new (0 as _ , 0 as _) , } } # [inline] pub fn shape (self , value : crate :: classes :: input :: CursorShape) -> Self { Self { shape : value , .. self } } # [inline] pub fn hotspot (self , value : Vector2) -> Self { Self { hotspot : value , .. self } } # [inline] pub fn done (self) { re_export :: Input :: set_custom_mouse_cursor_full (self . surround_object , self . image , self . shape , self . hotspot ,) } } # [repr (transparent)] # [derive (Copy , Clone , Eq , PartialEq , Hash ,)] pub struct MouseMode { ord : i32 } impl MouseMode { # [doc (alias = "MOUSE_MODE_VISIBLE")] # [doc = "Godot enumerator name: `MOUSE_MODE_VISIBLE`"] pub const VISIBLE : Self = Self { ord : 0 } ; # [doc (alias = "MOUSE_MODE_HIDDEN")] # [doc = "Godot enumerator name: `MOUSE_MODE_HIDDEN`"] pub const HIDDEN : Self = Self { ord : 1 } ; # [doc (alias = "MOUSE_MODE_CAPTURED")] # [doc = "Godot enumerator name: `MOUSE_MODE_CAPTURED`"] pub const CAPTURED : Self = Self { ord : 2 } ; # [doc (alias = "MOUSE_MODE_CONFINED")] # [doc = "Godot enumerator name: `MOUSE_MODE_CONFINED`"] pub const CONFINED : Self = Self { ord : 3 } ; # [doc (alias = "MOUSE_MODE_CONFINED_HIDDEN")] # [doc = "Godot enumerator name: `MOUSE_MODE_CONFINED_HIDDEN`"] pub const CONFINED_HIDDEN : Self = Self { ord : 4 } ; # [allow (unreachable_patterns)] fn enumerator_name (self) -> Option < & 'static str > { match self { Self :: VISIBLE => Some ("VISIBLE") , Self :: HIDDEN => Some ("HIDDEN") , Self :: CAPTURED => Some ("CAPTURED") , Self :: CONFINED => Some ("CONFINED") , Self :: CONFINED_HIDDEN => Some ("CONFINED_HIDDEN") , _ => None , } } } impl std :: fmt :: Debug for MouseMode { fn fmt (& self , f : & mut std :: fmt :: Formatter < '_ >) -> std :: fmt :: Result { match self . enumerator_name () { Some (enumerator) => f . write_str (enumerator) , None => f . debug_struct (stringify ! (MouseMode)) . field ("ord" , & self . ord) . finish () , } } } impl crate :: obj :: EngineEnum for MouseMode { fn try_from_ord (ord : i32) -> Option < Self > { match ord { 0 | 1 | 2 | 3 | 4 => Some (Self { ord }) , _ => None , } } fn ord (self) -> i32 { self . ord } } impl crate :: meta :: GodotConvert for MouseMode { type Via = i32 ; } impl crate :: meta :: ToGodot for MouseMode { fn to_godot (& self) -> Self :: Via { < Self as crate :: obj :: EngineEnum > :: ord (* self) } } impl crate :: meta :: FromGodot for MouseMode { fn try_from_godot (via : Self :: Via) -> std :: result :: Result < Self , crate :: meta :: ConvertError > { Ok (Self { ord : via }) } } # [repr (transparent)] # [derive (Copy , Clone , Eq , PartialEq , Hash ,)] pub struct CursorShape { ord : i32 } impl CursorShape { # [doc (alias = "CURSOR_ARROW")] # [doc = "Godot enumerator name: `CURSOR_ARROW`"] pub const ARROW : Self = Self { ord : 0 } ; # [doc (alias = "CURSOR_IBEAM")] # [doc = "Godot enumerator name: `CURSOR_IBEAM`"] pub const IBEAM : Self = Self { ord : 1 } ; # [doc (alias = "CURSOR_POINTING_HAND")] # [doc = "Godot enumerator name: `CURSOR_POINTING_HAND`"] pub const POINTING_HAND : Self = Self { ord : 2 } ; # [doc (alias = "CURSOR_CROSS")] # [doc = "Godot enumerator name: `CURSOR_CROSS`"] pub const CROSS : Self = Self { ord : 3 } ; # [doc (alias = "CURSOR_WAIT")] # [doc = "Godot enumerator name: `CURSOR_WAIT`"] pub const WAIT : Self = Self { ord : 4 } ; # [doc (alias = "CURSOR_BUSY")] # [doc = "Godot enumerator name: `CURSOR_BUSY`"] pub const BUSY : Self = Self { ord : 5 } ; # [doc (alias = "CURSOR_DRAG")] # [doc = "Godot enumerator name: `CURSOR_DRAG`"] pub const DRAG : Self = Self { ord : 6 } ; # [doc (alias = "CURSOR_CAN_DROP")] # [doc = "Godot enumerator name: `CURSOR_CAN_DROP`"] pub const CAN_DROP : Self = Self { ord : 7 } ; # [doc (alias = "CURSOR_FORBIDDEN")] # [doc = "Godot enumerator name: `CURSOR_FORBIDDEN`"] pub const FORBIDDEN : Self = Self { ord : 8 } ; # [doc (alias = "CURSOR_VSIZE")] # [doc = "Godot enumerator name: `CURSOR_VSIZE`"] pub const VSIZE : Self = Self { ord : 9 } ; # [doc (alias = "CURSOR_HSIZE")] # [doc = "Godot enumerator name: `CURSOR_HSIZE`"] pub const HSIZE : Self = Self { ord : 10 } ; # [doc (alias = "CURSOR_BDIAGSIZE")] # [doc = "Godot enumerator name: `CURSOR_BDIAGSIZE`"] pub const BDIAGSIZE : Self = Self { ord : 11 } ; # [doc (alias = "CURSOR_FDIAGSIZE")] # [doc = "Godot enumerator name: `CURSOR_FDIAGSIZE`"] pub const FDIAGSIZE : Self = Self { ord : 12 } ; # [doc (alias = "CURSOR_MOVE")] # [doc = "Godot enumerator name: `CURSOR_MOVE`"] pub const MOVE : Self = Self { ord : 13 } ; # [doc (alias = "CURSOR_VSPLIT")] # [doc = "Godot enumerator name: `CURSOR_VSPLIT`"] pub const VSPLIT : Self = Self { ord : 14 } ; # [doc (alias = "CURSOR_HSPLIT")] # [doc = "Godot enumerator name: `CURSOR_HSPLIT`"] pub const HSPLIT : Self = Self { ord : 15 } ; # [doc (alias = "CURSOR_HELP")] # [doc = "Godot enumerator name: `CURSOR_HELP`"] pub const HELP : Self = Self { ord : 16 } ; # [allow (unreachable_patterns)] fn enumerator_name (self) -> Option < & 'static str > { match self { Self :: ARROW => Some ("ARROW") , Self :: IBEAM => Some ("IBEAM") , Self :: POINTING_HAND => Some ("POINTING_HAND") , Self :: CROSS => Some ("CROSS") , Self :: WAIT => Some ("WAIT") , Self :: BUSY => Some ("BUSY") , Self :: DRAG => Some ("DRAG") , Self :: CAN_DROP => Some ("CAN_DROP") , Self :: FORBIDDEN => Some ("FORBIDDEN") , Self :: VSIZE => Some ("VSIZE") , Self :: HSIZE => Some ("HSIZE") , Self :: BDIAGSIZE => Some ("BDIAGSIZE") , Self :: FDIAGSIZE => Some ("FDIAGSIZE") , Self :: MOVE => Some ("MOVE") , Self :: VSPLIT => Some ("VSPLIT") , Self :: HSPLIT => Some ("HSPLIT") , Self :: HELP => Some ("HELP") , _ => None , } } } impl std :: fmt :: Debug for CursorShape { fn fmt (& self , f : & mut std :: fmt :: Formatter < '_ >) -> std :: fmt :: Result { match self . enumerator_name () { Some (enumerator) => f . write_str (enumerator) , None => f . debug_struct (stringify ! (CursorShape)) . field ("ord" , & self . ord) . finish () , } } } impl crate :: obj :: EngineEnum for CursorShape { fn try_from_ord (ord : i32) -> Option < Self > { match ord { 0 | 1 | 2 | 3 | 4 | 5 | 6 | 7 | 8 | 9 | 10 | 11 | 12 | 13 | 14 | 15 | 16 => Some (Self { ord }) , _ => None , } } fn ord (self) -> i32 { self . ord } } impl crate :: meta :: GodotConvert for CursorShape { type Via = i32 ; } impl crate :: meta :: ToGodot for CursorShape { fn to_godot (& self) -> Self :: Via { < Self as crate :: obj :: EngineEnum > :: ord (* self) } } impl crate :: meta :: FromGodot for CursorShape { fn try_from_godot (via : Self :: Via) -> std :: result :: Result < Self , crate :: meta :: ConvertError > { Ok (Self { ord : via }) } } # [doc = "Properties declared by [`Input`][super::Input], as interned engine names."] pub struct PropertyName ; impl PropertyName { pub const MOUSE_MODE : InternedName = InternedName :: new ("mouse_mode") ; pub const USE_ACCUMULATED_INPUT : InternedName = InternedName :: new ("use_accumulated_input") ; pub const EMULATE_MOUSE_FROM_TOUCH : InternedName = InternedName :: new ("emulate_mouse_from_touch") ; pub const EMULATE_TOUCH_FROM_MOUSE : InternedName = InternedName :: new ("emulate_touch_from_mouse") ; } # [doc = "Methods declared by [`Input`][super::Input], as interned engine names."] pub struct MethodName ; impl MethodName { pub const IS_ANYTHING_PRESSED : InternedName = InternedName :: new ("is_anything_pressed") ; pub const IS_KEY_PRESSED : InternedName = InternedName :: new ("is_key_pressed") ; pub const IS_PHYSICAL_KEY_PRESSED : InternedName = InternedName :: new ("is_physical_key_pressed") ; pub const IS_KEY_LABEL_PRESSED : InternedName = InternedName :: new ("is_key_label_pressed") ; pub const IS_MOUSE_BUTTON_PRESSED : InternedName = InternedName :: new ("is_mouse_button_pressed") ; pub const IS_JOY_BUTTON_PRESSED : InternedName = InternedName :: new ("is_joy_button_pressed") ; pub const IS_ACTION_PRESSED : InternedName = InternedName :: new ("is_action_pressed") ; pub const IS_ACTION_JUST_PRESSED : InternedName = InternedName :: new ("is_action_just_pressed") ; pub const IS_ACTION_JUST_RELEASED : InternedName = InternedName :: new ("is_action_just_released") ; pub const GET_ACTION_STRENGTH : InternedName = InternedName :: new ("get_action_strength") ; pub const GET_ACTION_RAW_STRENGTH : InternedName = InternedName :: new ("get_action_raw_strength") ; pub const GET_AXIS : InternedName = InternedName :: new ("get_axis") ; pub const GET_VECTOR : InternedName = InternedName :: new ("get_vector") ; pub const ADD_JOY_MAPPING : InternedName = InternedName :: new ("add_joy_mapping") ; pub const REMOVE_JOY_MAPPING : InternedName = InternedName :: new ("remove_joy_mapping") ; pub const IS_JOY_KNOWN : InternedName = InternedName :: new ("is_joy_known") ; pub const GET_JOY_AXIS : InternedName = InternedName :: new ("get_joy_axis") ; pub const GET_JOY_NAME : InternedName = InternedName :: new ("get_joy_name") ; pub const GET_JOY_GUID : InternedName = InternedName :: new ("get_joy_guid") ; pub const SHOULD_IGNORE_DEVICE : InternedName = InternedName :: new ("should_ignore_device") ; pub const GET_JOY_VIBRATION_STRENGTH : InternedName = InternedName :: new ("get_joy_vibration_strength") ; pub const GET_JOY_VIBRATION_DURATION : InternedName = InternedName :: new ("get_joy_vibration_duration") ; pub const START_JOY_VIBRATION : InternedName = InternedName :: new ("start_joy_vibration") ; pub const STOP_JOY_VIBRATION : InternedName = InternedName :: new ("stop_joy_vibration") ; pub const VIBRATE_HANDHELD : InternedName = InternedName :: new ("vibrate_handheld") ; pub const GET_GRAVITY : InternedName = InternedName :: new ("get_gravity") ; pub const GET_ACCELEROMETER : InternedName = InternedName :: new ("get_accelerometer") ; pub const GET_MAGNETOMETER : InternedName = InternedName :: new ("get_magnetometer") ; pub const GET_GYROSCOPE : InternedName = InternedName :: new ("get_gyroscope") ; pub const SET_GRAVITY : InternedName = InternedName :: new ("set_gravity") ; pub const SET_ACCELEROMETER : InternedName = InternedName :: new ("set_accelerometer") ; pub const SET_MAGNETOMETER : InternedName = InternedName :: new ("set_magnetometer") ; pub const SET_GYROSCOPE : InternedName = InternedName :: new ("set_gyroscope") ; pub const GET_LAST_MOUSE_VELOCITY : InternedName = InternedName :: new ("get_last_mouse_velocity") ; pub const GET_LAST_MOUSE_SCREEN_VELOCITY : InternedName = InternedName :: new ("get_last_mouse_screen_velocity") ; pub const GET_MOUSE_BUTTON_MASK : InternedName = InternedName :: new ("get_mouse_button_mask") ; pub const SET_MOUSE_MODE : InternedName = InternedName :: new ("set_mouse_mode") ; pub const GET_MOUSE_MODE : InternedName = InternedName :: new ("get_mouse_mode") ; pub const WARP_MOUSE : InternedName = InternedName :: new ("warp_mouse") ; pub const ACTION_PRESS : InternedName = InternedName :: new ("action_press") ; pub const ACTION_RELEASE : InternedName = InternedName :: new ("action_release") ; pub const SET_DEFAULT_CURSOR_SHAPE : InternedName = InternedName :: new ("set_default_cursor_shape") ; pub const GET_CURRENT_CURSOR_SHAPE : InternedName = InternedName :: new ("get_current_cursor_shape") ; pub const SET_CUSTOM_MOUSE_CURSOR : InternedName = InternedName :: new ("set_custom_mouse_cursor") ; pub const PARSE_INPUT_EVENT : InternedName = InternedName :: new ("parse_input_event") ; pub const SET_USE_ACCUMULATED_INPUT : InternedName = InternedName :: new ("set_use_accumulated_input") ; pub const IS_USING_ACCUMULATED_INPUT : InternedName = InternedName :: new ("is_using_accumulated_input") ; pub const FLUSH_BUFFERED_EVENTS : InternedName = InternedName :: new ("flush_buffered_events") ; pub const SET_EMULATE_MOUSE_FROM_TOUCH : InternedName = InternedName :: new ("set_emulate_mouse_from_touch") ; pub const IS_EMULATING_MOUSE_FROM_TOUCH : InternedName = InternedName :: new ("is_emulating_mouse_from_touch") ; pub const SET_EMULATE_TOUCH_FROM_MOUSE : InternedName = InternedName :: new ("set_emulate_touch_from_mouse") ; pub const IS_EMULATING_TOUCH_FROM_MOUSE : InternedName = InternedName :: new ("is_emulating_touch_from_mouse") ; } # [doc = "Signals declared by [`Input`][super::Input], as interned engine names."] pub struct SignalName ; impl SignalName { pub const JOY_CONNECTION_CHANGED : InternedName = InternedName :: new ("joy_connection_changed") ; } # [doc = "A collection of signals for the [`Input`][crate::classes::Input] class."] pub struct SignalsOfInput < 'c > { __base : crate :: classes :: object :: SignalsOfObject < 'c > , } impl < 'c > SignalsOfInput < 'c > { # [doc (hidden)] pub fn __new (object : SignalObject < 'c >) -> Self { Self { __base : crate :: classes :: object :: SignalsOfObject :: __new (object) } } # [doc (hidden)] pub fn __object (& self) -> SignalObject < 'c > { self . __base . __object () } # [doc = "Signature: `(device: i64, connected: bool)`"] pub fn joy_connection_changed (& mut self) -> SigJoyConnectionChanged < 'c > { SigJoyConnectionChanged { typed : TypedSignal :: __new (self . __object () , "joy_connection_changed") , } } } impl < 'c > std :: ops :: Deref for SignalsOfInput < 'c > { type Target = crate :: classes :: object :: SignalsOfObject < 'c > ; fn deref (& self) -> & Self :: Target { & self . __base } } impl std :: ops :: DerefMut for SignalsOfInput < '_ > { fn deref_mut (& mut self) -> & mut Self :: Target { & mut self . __base } } type TypedSigJoyConnectionChanged < 'c > = TypedSignal < 'c , (i64 , bool ,) > ; pub struct SigJoyConnectionChanged < 'c > { typed : TypedSigJoyConnectionChanged < 'c > , } impl SigJoyConnectionChanged < '_ > { pub fn emit (& mut self , device : i64 , connected : bool ,) { self . typed . emit_tuple ((device , connected ,)) ; } } impl < 'c > std :: ops :: Deref for SigJoyConnectionChanged < 'c > { type Target = TypedSigJoyConnectionChanged < 'c > ; fn deref (& self) -> & Self :: Target { & self . typed } } impl std :: ops :: DerefMut for SigJoyConnectionChanged < '_ > { fn deref_mut (& mut self) -> & mut Self :: Target { & mut self . typed } }