# ! [doc = "Sidecar module for class [`NativeMenu`][crate::classes::NativeMenu]."] # [allow (unused_imports)] use crate :: builtin :: * ; # [allow (unused_imports)] use crate :: meta :: { AsArg , AsObjectArg , CowArg , InternedName , ObjectArg , Signature } ; # [allow (unused_imports)] use crate :: obj :: Gd ; # [allow (unused_imports)] use crate :: signal :: { SignalObject , TypedSignal } ; use crate :: sys ; pub (super) mod re_export { use super :: * ; # [doc = "Godot class `NativeMenu`.\n\nInherits [`Object`][crate::classes::Object].\n\nRelated symbols (default-param builders, enums, interned names, signals) are in [`native_menu`][crate::classes::native_menu]."] # [derive (Debug)] # [repr (C)] pub struct NativeMenu { object_ptr : sys :: GDExtensionObjectPtr , } impl NativeMenu { # [doc = r" Returns the engine singleton, looked up once and cached afterwards."] # [doc = r""] # [doc = r" # Panics"] # [doc = r" If the engine does not provide the singleton."] pub fn singleton () -> Gd < Self > { let object_ptr = Self :: __singleton_cell () . get_or_lookup (|| { let class_name = InternedName :: new ("NativeMenu") ; unsafe { sys :: interface_fn ! (global_get_singleton) (class_name . string_sys ()) } }) . unwrap_or_else (|| panic ! ("engine singleton `NativeMenu` is not available")) ; unsafe { Gd :: from_obj_sys_weak (object_ptr) } } # [doc (hidden)] pub fn __singleton_cell () -> & 'static sys :: SingletonCell { static SINGLETON : sys :: SingletonCell = sys :: SingletonCell :: new () ; & SINGLETON } pub fn has_feature (& self , feature : crate :: classes :: native_menu :: Feature ,) -> bool { type CallRet = bool ; type CallParams = (crate :: classes :: native_menu :: Feature ,) ; let args = (feature ,) ; unsafe { let method_bind = sys :: class_servers_api () . fptr_by_index (52usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "NativeMenu" , "has_feature" , self . object_ptr , args ,) } } pub fn has_system_menu (& self , menu_id : crate :: classes :: native_menu :: SystemMenus ,) -> bool { type CallRet = bool ; type CallParams = (crate :: classes :: native_menu :: SystemMenus ,) ; let args = (menu_id ,) ; unsafe { let method_bind = sys :: class_servers_api () . fptr_by_index (53usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "NativeMenu" , "has_system_menu" , self . object_ptr , args ,) } } pub fn get_system_menu (& self , menu_id : crate :: classes :: native_menu :: SystemMenus ,) -> Rid { type CallRet = Rid ; type CallParams = (crate :: classes :: native_menu :: SystemMenus ,) ; let args = (menu_id ,) ; unsafe { let method_bind = sys :: class_servers_api () . fptr_by_index (54usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "NativeMenu" , "get_system_menu" , self . object_ptr , args ,) } } pub fn get_system_menu_name (& self , menu_id : crate :: classes :: native_menu :: SystemMenus ,) -> GString { type CallRet = GString ; type CallParams = (crate :: classes :: native_menu :: SystemMenus ,) ; let args = (menu_id ,) ; unsafe { let method_bind = sys :: class_servers_api () . fptr_by_index (55usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "NativeMenu" , "get_system_menu_name" , self . object_ptr , args ,) } } pub fn create_menu (& mut self ,) -> Rid { type CallRet = Rid ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_servers_api () . fptr_by_index (56usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "NativeMenu" , "create_menu" , self . object_ptr , args ,) } } pub fn has_menu (& self , rid : Rid ,) -> bool { type CallRet = bool ; type CallParams = (Rid ,) ; let args = (rid ,) ; unsafe { let method_bind = sys :: class_servers_api () . fptr_by_index (57usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "NativeMenu" , "has_menu" , self . object_ptr , args ,) } } pub fn free_menu (& mut self , rid : Rid ,) { type CallRet = () ; type CallParams = (Rid ,) ; let args = (rid ,) ; unsafe { let method_bind = sys :: class_servers_api () . fptr_by_index (58usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "NativeMenu" , "free_menu" , self . object_ptr , args ,) } } pub fn get_size (& self , rid : Rid ,) -> Vector2 { type CallRet = Vector2 ; type CallParams = (Rid ,) ; let args = (rid ,) ; unsafe { let method_bind = sys :: class_servers_api () . fptr_by_index (59usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "NativeMenu" , "get_size" , self . object_ptr , args ,) } } pub fn popup (& mut self , rid : Rid , position : Vector2i ,) { type CallRet = () ; type CallParams = (Rid , Vector2i ,) ; let args = (rid , position ,) ; unsafe { let method_bind = sys :: class_servers_api () . fptr_by_index (60usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "NativeMenu" , "popup" , self . object_ptr , args ,) } } pub fn set_interface_direction (& mut self , rid : Rid , is_rtl : bool ,) { type CallRet = () ; type CallParams = (Rid , bool ,) ; let args = (rid , is_rtl ,) ; unsafe { let method_bind = sys :: class_servers_api () . fptr_by_index (61usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "NativeMenu" , "set_interface_direction" , self . object_ptr , args ,) } } pub fn set_popup_open_callback (& mut self , rid : Rid , callback : & Callable ,) { type CallRet = () ; type CallParams < 'a0 , > = (Rid , CowArg < 'a0 , Callable > ,) ; let args = (rid , CowArg :: Borrowed (callback) ,) ; unsafe { let method_bind = sys :: class_servers_api () . fptr_by_index (62usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "NativeMenu" , "set_popup_open_callback" , self . object_ptr , args ,) } } pub fn get_popup_open_callback (& self , rid : Rid ,) -> Callable { type CallRet = Callable ; type CallParams = (Rid ,) ; let args = (rid ,) ; unsafe { let method_bind = sys :: class_servers_api () . fptr_by_index (63usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "NativeMenu" , "get_popup_open_callback" , self . object_ptr , args ,) } } pub fn set_popup_close_callback (& mut self , rid : Rid , callback : & Callable ,) { type CallRet = () ; type CallParams < 'a0 , > = (Rid , CowArg < 'a0 , Callable > ,) ; let args = (rid , CowArg :: Borrowed (callback) ,) ; unsafe { let method_bind = sys :: class_servers_api () . fptr_by_index (64usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "NativeMenu" , "set_popup_close_callback" , self . object_ptr , args ,) } } pub fn get_popup_close_callback (& self , rid : Rid ,) -> Callable { type CallRet = Callable ; type CallParams = (Rid ,) ; let args = (rid ,) ; unsafe { let method_bind = sys :: class_servers_api () . fptr_by_index (65usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "NativeMenu" , "get_popup_close_callback" , self . object_ptr , args ,) } } pub fn set_minimum_width (& mut self , rid : Rid , width : f32 ,) { type CallRet = () ; type CallParams = (Rid , f32 ,) ; let args = (rid , width ,) ; unsafe { let method_bind = sys :: class_servers_api () . fptr_by_index (66usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "NativeMenu" , "set_minimum_width" , self . object_ptr , args ,) } } pub fn get_minimum_width (& self , rid : Rid ,) -> f32 { type CallRet = f32 ; type CallParams = (Rid ,) ; let args = (rid ,) ; unsafe { let method_bind = sys :: class_servers_api () . fptr_by_index (67usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "NativeMenu" , "get_minimum_width" , self . object_ptr , args ,) } } pub fn is_opened (& self , rid : Rid ,) -> bool { type CallRet = bool ; type CallParams = (Rid ,) ; let args = (rid ,) ; unsafe { let method_bind = sys :: class_servers_api () . fptr_by_index (68usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "NativeMenu" , "is_opened" , self . object_ptr , args ,) } } pub (crate) fn add_submenu_item_full (& mut self , rid : Rid , label : CowArg < '_ , GString > , submenu_rid : Rid , tag : CowArg < '_ , Variant > , index : i32 ,) -> i32 { type CallRet = i32 ; type CallParams < 'a0 , 'a1 , > = (Rid , CowArg < 'a0 , GString > , Rid , CowArg < 'a1 , Variant > , i32 ,) ; let args = (rid , label , submenu_rid , tag , index ,) ; unsafe { let method_bind = sys :: class_servers_api () . fptr_by_index (69usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "NativeMenu" , "add_submenu_item" , self . object_ptr , args ,) } } # [inline] pub fn add_submenu_item (& mut self , rid : Rid , label : impl AsArg < GString > , submenu_rid : Rid ,) -> i32 { self . add_submenu_item_ex (rid , label , submenu_rid ,) . done () } # [inline] pub fn add_submenu_item_ex < 'ex > (& 'ex mut self , rid : Rid , label : impl AsArg < GString > + 'ex , submenu_rid : Rid ,) -> super :: ExAddSubmenuItem < 'ex > { super :: ExAddSubmenuItem :: new (self , rid , label . into_arg () , submenu_rid ,) } pub (crate) fn add_item_full (& mut self , rid : Rid , label : CowArg < '_ , GString > , callback : CowArg < '_ , Callable > , key_callback : CowArg < '_ , Callable > , tag : CowArg < '_ , Variant > , accelerator : crate :: global :: Key , index : i32 ,) -> i32 { type CallRet = i32 ; type CallParams < 'a0 , 'a1 , 'a2 , 'a3 , > = (Rid , CowArg < 'a0 , GString > , CowArg < 'a1 , Callable > , CowArg < 'a2 , Callable > , CowArg < 'a3 , Variant > , crate :: global :: Key , i32 ,) ; let args = (rid , label , callback , key_callback , tag , accelerator , index ,) ; unsafe { let method_bind = sys :: class_servers_api () . fptr_by_index (70usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "NativeMenu" , "add_item" , self . object_ptr , args ,) } } # [inline] pub fn add_item (& mut self , rid : Rid , label : impl AsArg < GString > ,) -> i32 { self . add_item_ex (rid , label ,) . done () } # [inline] pub fn add_item_ex < 'ex > (& 'ex mut self , rid : Rid , label : impl AsArg < GString > + 'ex ,) -> super :: ExAddItem < 'ex > { super :: ExAddItem :: new (self , rid , label . into_arg () ,) } pub (crate) fn add_check_item_full (& mut self , rid : Rid , label : CowArg < '_ , GString > , callback : CowArg < '_ , Callable > , key_callback : CowArg < '_ , Callable > , tag : CowArg < '_ , Variant > , accelerator : crate :: global :: Key , index : i32 ,) -> i32 { type CallRet = i32 ; type CallParams < 'a0 , 'a1 , 'a2 , 'a3 , > = (Rid , CowArg < 'a0 , GString > , CowArg < 'a1 , Callable > , CowArg < 'a2 , Callable > , CowArg < 'a3 , Variant > , crate :: global :: Key , i32 ,) ; let args = (rid , label , callback , key_callback , tag , accelerator , index ,) ; unsafe { let method_bind = sys :: class_servers_api () . fptr_by_index (71usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "NativeMenu" , "add_check_item" , self . object_ptr , args ,) } } # [inline] pub fn add_check_item (& mut self , rid : Rid , label : impl AsArg < GString > ,) -> i32 { self . add_check_item_ex (rid , label ,) . done () } # [inline] pub fn add_check_item_ex < 'ex > (& 'ex mut self , rid : Rid , label : impl AsArg < GString > + 'ex ,) -> super :: ExAddCheckItem < 'ex > { super :: ExAddCheckItem :: new (self , rid , label . into_arg () ,) } pub (crate) fn add_icon_item_full (& mut self , rid : Rid , icon : ObjectArg < crate :: classes :: Texture2D > , label : CowArg < '_ , GString > , callback : CowArg < '_ , Callable > , key_callback : CowArg < '_ , Callable > , tag : CowArg < '_ , Variant > , accelerator : crate :: global :: Key , index : i32 ,) -> i32 { type CallRet = i32 ; type CallParams < 'a0 , 'a1 , 'a2 , 'a3 , > = (Rid , ObjectArg < crate :: classes :: Texture2D > , CowArg < 'a0 , GString > , CowArg < 'a1 , Callable > , CowArg < 'a2 , Callable > , CowArg < 'a3 , Variant > , crate :: global :: Key , i32 ,) ; let args = (rid , icon , label , callback , key_callback , tag , accelerator , index ,) ; unsafe { let method_bind = sys :: class_servers_api () . fptr_by_index (72usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "NativeMenu" , "add_icon_item" , self . object_ptr , args ,) } } # [inline] pub fn add_icon_item (& mut self , rid : Rid , icon : impl AsObjectArg < crate :: classes :: Texture2D > , label : impl AsArg < GString > ,) -> i32 { self . add_icon_item_ex (rid , icon , label ,) . done () } # [inline] pub fn add_icon_item_ex < 'ex > (& 'ex mut self , rid : Rid , icon : impl AsObjectArg < crate :: classes :: Texture2D > , label : impl AsArg < GString > + 'ex ,) -> super :: ExAddIconItem < 'ex > { super :: ExAddIconItem :: new (self , rid , icon . as_object_arg () , label . into_arg () ,) } pub (crate) fn add_icon_check_item_full (& mut self , rid : Rid , icon : ObjectArg < crate :: classes :: Texture2D > , label : CowArg < '_ , GString > , callback : CowArg < '_ , Callable > , key_callback : CowArg < '_ , Callable > , tag : CowArg < '_ , Variant > , accelerator : crate :: global :: Key , index : i32 ,) -> i32 { type CallRet = i32 ; type CallParams < 'a0 , 'a1 , 'a2 , 'a3 , > = (Rid , ObjectArg < crate :: classes :: Texture2D > , CowArg < 'a0 , GString > , CowArg < 'a1 , Callable > , CowArg < 'a2 , Callable > , CowArg < 'a3 , Variant > , crate :: global :: Key , i32 ,) ; let args = (rid , icon , label , callback , key_callback , tag , accelerator , index ,) ; unsafe { let method_bind = sys :: class_servers_api () . fptr_by_index (73usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "NativeMenu" , "add_icon_check_item" , self . object_ptr , args ,) } } # [inline] pub fn add_icon_check_item (& mut self , rid : Rid , icon : impl AsObjectArg < crate :: classes :: Texture2D > , label : impl AsArg < GString > ,) -> i32 { self . add_icon_check_item_ex (rid , icon , label ,) . done () } # [inline] pub fn add_icon_check_item_ex < 'ex > (& 'ex mut self , rid : Rid , icon : impl AsObjectArg < crate :: classes :: Texture2D > , label : impl AsArg < GString > + 'ex ,) -> super :: ExAddIconCheckItem < 'ex > { super :: ExAddIconCheckItem :: new (self , rid , icon . as_object_arg () , label . into_arg () ,) } pub (crate) fn add_radio_check_item_full (& mut self , rid : Rid , label : CowArg < '_ , GString > , callback : CowArg < '_ , Callable > , key_callback : CowArg < '_ , Callable > , tag : CowArg < '_ , Variant > , accelerator : crate :: global :: Key , index : i32 ,) -> i32 { type CallRet = i32 ; type CallParams < 'a0 , 'a1 , 'a2 , 'a3 , > = (Rid , CowArg < 'a0 , GString > , CowArg < 'a1 , Callable > , CowArg < 'a2 , Callable > , CowArg < 'a3 , Variant > , crate :: global :: Key , i32 ,) ; let args = (rid , label , callback , key_callback , tag , accelerator , index ,) ; unsafe { let method_bind = sys :: class_servers_api () . fptr_by_index (74usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "NativeMenu" , "add_radio_check_item" , self . object_ptr , args ,) } } # [inline] pub fn add_radio_check_item (& mut self , rid : Rid , label : impl AsArg < GString > ,) -> i32 { self . add_radio_check_item_ex (rid , label ,) . done () } # [inline] pub fn add_radio_check_item_ex < 'ex > (& 'ex mut self , rid : Rid , label : impl AsArg < GString > + 'ex ,) -> super :: ExAddRadioCheckItem < 'ex > { super :: ExAddRadioCheckItem :: new (self , rid , label . into_arg () ,) } pub (crate) fn add_icon_radio_check_item_full (& mut self , rid : Rid , icon : ObjectArg < crate :: classes :: Texture2D > , label : CowArg < '_ , GString > , callback : CowArg < '_ , Callable > , key_callback : CowArg < '_ , Callable > , tag : CowArg < '_ , Variant > , accelerator : crate :: global :: Key , index : i32 ,) -> i32 { type CallRet = i32 ; type CallParams < 'a0 , 'a1 , 'a2 , 'a3 , > = (Rid , ObjectArg < crate :: classes :: Texture2D > , CowArg < 'a0 , GString > , CowArg < 'a1 , Callable > , CowArg < 'a2 , Callable > , CowArg < 'a3 , Variant > , crate :: global :: Key , i32 ,) ; let args = (rid , icon , label , callback , key_callback , tag , accelerator , index ,) ; unsafe { let method_bind = sys :: class_servers_api () . fptr_by_index (75usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "NativeMenu" , "add_icon_radio_check_item" , self . object_ptr , args ,) } } # [inline] pub fn add_icon_radio_check_item (& mut self , rid : Rid , icon : impl AsObjectArg < crate :: classes :: Texture2D > , label : impl AsArg < GString > ,) -> i32 { self . add_icon_radio_check_item_ex (rid , icon , label ,) . done () } # [inline] pub fn add_icon_radio_check_item_ex < 'ex > (& 'ex mut self , rid : Rid , icon : impl AsObjectArg < crate :: classes :: Texture2D > , label : impl AsArg < GString > + 'ex ,) -> super :: ExAddIconRadioCheckItem < 'ex > { super :: ExAddIconRadioCheckItem :: new (self , rid , icon . as_object_arg () , label . into_arg () ,) } pub (crate) fn add_multistate_item_full (& mut self , rid : Rid , label : CowArg < '_ , GString > , max_states : i32 , default_state : i32 , callback : CowArg < '_ , Callable > , key_callback : CowArg < '_ , Callable > , tag : CowArg < '_ , Variant > , accelerator : crate :: global :: Key , index : i32 ,) -> i32 { type CallRet = i32 ; type CallParams < 'a0 , 'a1 , 'a2 , 'a3 , > = (Rid , CowArg < 'a0 , GString > , i32 , i32 , CowArg < 'a1 , Callable > , CowArg < 'a2 , Callable > , CowArg < 'a3 , Variant > , crate :: global :: Key , i32 ,) ; let args = (rid , label , max_states , default_state , callback , key_callback , tag , accelerator , index ,) ; unsafe { let method_bind = sys :: class_servers_api () . fptr_by_index (76usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "NativeMenu" , "add_multistate_item" , self . object_ptr , args ,) } } # [inline] pub fn add_multistate_item (& mut self , rid : Rid , label : impl AsArg < GString > , max_states : i32 , default_state : i32 ,) -> i32 { self . add_multistate_item_ex (rid , label , max_states , default_state ,) . done () } # [inline] pub fn add_multistate_item_ex < 'ex > (& 'ex mut self , rid : Rid , label : impl AsArg < GString > + 'ex , max_states : i32 , default_state : i32 ,) -> super :: ExAddMultistateItem < 'ex > { super :: ExAddMultistateItem :: new (self , rid , label . into_arg () , max_states , default_state ,) } pub (crate) fn add_separator_full (& mut self , rid : Rid , index : i32 ,) -> i32 { type CallRet = i32 ; type CallParams = (Rid , i32 ,) ; let args = (rid , index ,) ; unsafe { let method_bind = sys :: class_servers_api () . fptr_by_index (77usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "NativeMenu" , "add_separator" , self . object_ptr , args ,) } } # [inline] pub fn add_separator (& mut self , rid : Rid ,) -> i32 { self . add_separator_ex (rid ,) . done () } # [inline] pub fn add_separator_ex < 'ex > (& 'ex mut self , rid : Rid ,) -> super :: ExAddSeparator < 'ex > { super :: ExAddSeparator :: new (self , rid ,) } pub fn find_item_index_with_text (& self , rid : Rid , text : impl AsArg < GString > ,) -> i32 { type CallRet = i32 ; type CallParams < 'a0 , > = (Rid , CowArg < 'a0 , GString > ,) ; let args = (rid , text . into_arg () ,) ; unsafe { let method_bind = sys :: class_servers_api () . fptr_by_index (78usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "NativeMenu" , "find_item_index_with_text" , self . object_ptr , args ,) } } pub fn find_item_index_with_tag (& self , rid : Rid , tag : & Variant ,) -> i32 { type CallRet = i32 ; type CallParams < 'a0 , > = (Rid , CowArg < 'a0 , Variant > ,) ; let args = (rid , CowArg :: Borrowed (tag) ,) ; unsafe { let method_bind = sys :: class_servers_api () . fptr_by_index (79usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "NativeMenu" , "find_item_index_with_tag" , self . object_ptr , args ,) } } pub fn find_item_index_with_submenu (& self , rid : Rid , submenu_rid : Rid ,) -> i32 { type CallRet = i32 ; type CallParams = (Rid , Rid ,) ; let args = (rid , submenu_rid ,) ; unsafe { let method_bind = sys :: class_servers_api () . fptr_by_index (80usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "NativeMenu" , "find_item_index_with_submenu" , self . object_ptr , args ,) } } pub fn is_item_checked (& self , rid : Rid , idx : i32 ,) -> bool { type CallRet = bool ; type CallParams = (Rid , i32 ,) ; let args = (rid , idx ,) ; unsafe { let method_bind = sys :: class_servers_api () . fptr_by_index (81usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "NativeMenu" , "is_item_checked" , self . object_ptr , args ,) } } pub fn is_item_checkable (& self , rid : Rid , idx : i32 ,) -> bool { type CallRet = bool ; type CallParams = (Rid , i32 ,) ; let args = (rid , idx ,) ; unsafe { let method_bind = sys :: class_servers_api () . fptr_by_index (82usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "NativeMenu" , "is_item_checkable" , self . object_ptr , args ,) } } pub fn is_item_radio_checkable (& self , rid : Rid , idx : i32 ,) -> bool { type CallRet = bool ; type CallParams = (Rid , i32 ,) ; let args = (rid , idx ,) ; unsafe { let method_bind = sys :: class_servers_api () . fptr_by_index (83usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "NativeMenu" , "is_item_radio_checkable" , self . object_ptr , args ,) } } pub fn get_item_callback (& self , rid : Rid , idx : i32 ,) -> Callable { type CallRet = Callable ; type CallParams = (Rid , i32 ,) ; let args = (rid , idx ,) ; unsafe { let method_bind = sys :: class_servers_api () . fptr_by_index (84usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "NativeMenu" , "get_item_callback" , self . object_ptr , args ,) } } pub fn get_item_key_callback (& self , rid : Rid , idx : i32 ,) -> Callable { type CallRet = Callable ; type CallParams = (Rid , i32 ,) ; let args = (rid , idx ,) ; unsafe { let method_bind = sys :: class_servers_api () . fptr_by_index (85usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "NativeMenu" , "get_item_key_callback" , self . object_ptr , args ,) } } pub fn get_item_tag (& self , rid : Rid , idx : i32 ,) -> Variant { type CallRet = Variant ; type CallParams = (Rid , i32 ,) ; let args = (rid , idx ,) ; unsafe { let method_bind = sys :: class_servers_api () . fptr_by_index (86usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "NativeMenu" , "get_item_tag" , self . object_ptr , args ,) } } pub fn get_item_text (& self , rid : Rid , idx : i32 ,) -> GString { type CallRet = GString ; type CallParams = (Rid , i32 ,) ; let args = (rid , idx ,) ; unsafe { let method_bind = sys :: class_servers_api () . fptr_by_index (87usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "NativeMenu" , "get_item_text" , self . object_ptr , args ,) } } pub fn get_item_submenu (& self , rid : Rid , idx : i32 ,) -> Rid { type CallRet = Rid ; type CallParams = (Rid , i32 ,) ; let args = (rid , idx ,) ; unsafe { let method_bind = sys :: class_servers_api () . fptr_by_index (88usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "NativeMenu" , "get_item_submenu" , self . object_ptr , args ,) } } pub fn get_item_accelerator (& self , rid : Rid , idx : i32 ,) -> crate :: global :: Key { type CallRet = crate :: global :: Key ; type CallParams = (Rid , i32 ,) ; let args = (rid , idx ,) ; unsafe { let method_bind = sys :: class_servers_api () . fptr_by_index (89usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "NativeMenu" , "get_item_accelerator" , self . object_ptr , args ,) } } pub fn is_item_disabled (& self , rid : Rid , idx : i32 ,) -> bool { type CallRet = bool ; type CallParams = (Rid , i32 ,) ; let args = (rid , idx ,) ; unsafe { let method_bind = sys :: class_servers_api () . fptr_by_index (90usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "NativeMenu" , "is_item_disabled" , self . object_ptr , args ,) } } pub fn is_item_hidden (& self , rid : Rid , idx : i32 ,) -> bool { type CallRet = bool ; type CallParams = (Rid , i32 ,) ; let args = (rid , idx ,) ; unsafe { let method_bind = sys :: class_servers_api () . fptr_by_index (91usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "NativeMenu" , "is_item_hidden" , self . object_ptr , args ,) } } pub fn get_item_tooltip (& self , rid : Rid , idx : i32 ,) -> GString { type CallRet = GString ; type CallParams = (Rid , i32 ,) ; let args = (rid , idx ,) ; unsafe { let method_bind = sys :: class_servers_api () . fptr_by_index (92usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "NativeMenu" , "get_item_tooltip" , self . object_ptr , args ,) } } pub fn get_item_state (& self , rid : Rid , idx : i32 ,) -> i32 { type CallRet = i32 ; type CallParams = (Rid , i32 ,) ; let args = (rid , idx ,) ; unsafe { let method_bind = sys :: class_servers_api () . fptr_by_index (93usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "NativeMenu" , "get_item_state" , self . object_ptr , args ,) } } pub fn get_item_max_states (& self , rid : Rid , idx : i32 ,) -> i32 { type CallRet = i32 ; type CallParams = (Rid , i32 ,) ; let args = (rid , idx ,) ; unsafe { let method_bind = sys :: class_servers_api () . fptr_by_index (94usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "NativeMenu" , "get_item_max_states" , self . object_ptr , args ,) } } pub fn get_item_icon (& self , rid : Rid , idx : i32 ,) -> Option < Gd < crate :: classes :: Texture2D > > { type CallRet = Option < Gd < crate :: classes :: Texture2D > > ; type CallParams = (Rid , i32 ,) ; let args = (rid , idx ,) ; unsafe { let method_bind = sys :: class_servers_api () . fptr_by_index (95usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "NativeMenu" , "get_item_icon" , self . object_ptr , args ,) } } pub fn get_item_indentation_level (& self , rid : Rid , idx : i32 ,) -> i32 { type CallRet = i32 ; type CallParams = (Rid , i32 ,) ; let args = (rid , idx ,) ; unsafe { let method_bind = sys :: class_servers_api () . fptr_by_index (96usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "NativeMenu" , "get_item_indentation_level" , self . object_ptr , args ,) } } pub fn set_item_checked (& mut self , rid : Rid , idx : i32 , checked : bool ,) { type CallRet = () ; type CallParams = (Rid , i32 , bool ,) ; let args = (rid , idx , checked ,) ; unsafe { let method_bind = sys :: class_servers_api () . fptr_by_index (97usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "NativeMenu" , "set_item_checked" , self . object_ptr , args ,) } } pub fn set_item_checkable (& mut self , rid : Rid , idx : i32 , checkable : bool ,) { type CallRet = () ; type CallParams = (Rid , i32 , bool ,) ; let args = (rid , idx , checkable ,) ; unsafe { let method_bind = sys :: class_servers_api () . fptr_by_index (98usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "NativeMenu" , "set_item_checkable" , self . object_ptr , args ,) } } pub fn set_item_radio_checkable (& mut self , rid : Rid , idx : i32 , checkable : bool ,) { type CallRet = () ; type CallParams = (Rid , i32 , bool ,) ; let args = (rid , idx , checkable ,) ; unsafe { let method_bind = sys :: class_servers_api () . fptr_by_index (99usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "NativeMenu" , "set_item_radio_checkable" , self . object_ptr , args ,) } } pub fn set_item_callback (& mut self , rid : Rid , idx : i32 , callback : & Callable ,) { type CallRet = () ; type CallParams < 'a0 , > = (Rid , i32 , CowArg < 'a0 , Callable > ,) ; let args = (rid , idx , CowArg :: Borrowed (callback) ,) ; unsafe { let method_bind = sys :: class_servers_api () . fptr_by_index (100usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "NativeMenu" , "set_item_callback" , self . object_ptr , args ,) } } pub fn set_item_hover_callbacks (& mut self , rid : Rid , idx : i32 , callback : & Callable ,) { type CallRet = () ; type CallParams < 'a0 , > = (Rid , i32 , CowArg < 'a0 , Callable > ,) ; let args = (rid , idx , CowArg :: Borrowed (callback) ,) ; unsafe { let method_bind = sys :: class_servers_api () . fptr_by_index (101usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "NativeMenu" , "set_item_hover_callbacks" , self . object_ptr , args ,) } } pub fn set_item_key_callback (& mut self , rid : Rid , idx : i32 , key_callback : & Callable ,) { type CallRet = () ; type CallParams < 'a0 , > = (Rid , i32 , CowArg < 'a0 , Callable > ,) ; let args = (rid , idx , CowArg :: Borrowed (key_callback) ,) ; unsafe { let method_bind = sys :: class_servers_api () . fptr_by_index (102usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "NativeMenu" , "set_item_key_callback" , self . object_ptr , args ,) } } pub fn set_item_tag (& mut self , rid : Rid , idx : i32 , tag : & Variant ,) { type CallRet = () ; type CallParams < 'a0 , > = (Rid , i32 , CowArg < 'a0 , Variant > ,) ; let args = (rid , idx , CowArg :: Borrowed (tag) ,) ; unsafe { let method_bind = sys :: class_servers_api () . fptr_by_index (103usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "NativeMenu" , "set_item_tag" , self . object_ptr , args ,) } } pub fn set_item_text (& mut self , rid : Rid , idx : i32 , text : impl AsArg < GString > ,) { type CallRet = () ; type CallParams < 'a0 , > = (Rid , i32 , CowArg < 'a0 , GString > ,) ; let args = (rid , idx , text . into_arg () ,) ; unsafe { let method_bind = sys :: class_servers_api () . fptr_by_index (104usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "NativeMenu" , "set_item_text" , self . object_ptr , args ,) } } pub fn set_item_submenu (& mut self , rid : Rid , idx : i32 , submenu_rid : Rid ,) { type CallRet = () ; type CallParams = (Rid , i32 , Rid ,) ; let args = (rid , idx , submenu_rid ,) ; unsafe { let method_bind = sys :: class_servers_api () . fptr_by_index (105usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "NativeMenu" , "set_item_submenu" , self . object_ptr , args ,) } } pub fn set_item_accelerator (& mut self , rid : Rid , idx : i32 , keycode : crate :: global :: Key ,) { type CallRet = () ; type CallParams = (Rid , i32 , crate :: global :: Key ,) ; let args = (rid , idx , keycode ,) ; unsafe { let method_bind = sys :: class_servers_api () . fptr_by_index (106usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "NativeMenu" , "set_item_accelerator" , self . object_ptr , args ,) } } pub fn set_item_disabled (& mut self , rid : Rid , idx : i32 , disabled : bool ,) { type CallRet = () ; type CallParams = (Rid , i32 , bool ,) ; let args = (rid , idx , disabled ,) ; unsafe { let method_bind = sys :: class_servers_api () . fptr_by_index (107usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "NativeMenu" , "set_item_disabled" , self . object_ptr , args ,) } } pub fn set_item_hidden (& mut self , rid : Rid , idx : i32 , hidden : bool ,) { type CallRet = () ; type CallParams = (Rid , i32 , bool ,) ; let args = (rid , idx , hidden ,) ; unsafe { let method_bind = sys :: class_servers_api () . fptr_by_index (108usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "NativeMenu" , "set_item_hidden" , self . object_ptr , args ,) } } pub fn set_item_tooltip (& mut self , rid : Rid , idx : i32 , tooltip : impl AsArg < GString > ,) { type CallRet = () ; type CallParams < 'a0 , > = (Rid , i32 , CowArg < 'a0 , GString > ,) ; let args = (rid , idx , tooltip . into_arg () ,) ; unsafe { let method_bind = sys :: class_servers_api () . fptr_by_index (109usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "NativeMenu" , "set_item_tooltip" , self . object_ptr , args ,) } } pub fn set_item_state (& mut self , rid : Rid , idx : i32 , state : i32 ,) { type CallRet = () ; type CallParams = (Rid , i32 , i32 ,) ; let args = (rid , idx , state ,) ; unsafe { let method_bind = sys :: class_servers_api () . fptr_by_index (110usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "NativeMenu" , "set_item_state" , self . object_ptr , args ,) } } pub fn set_item_max_states (& mut self , rid : Rid , idx : i32 , max_states : i32 ,) { type CallRet = () ; type CallParams = (Rid , i32 , i32 ,) ; let args = (rid , idx , max_states ,) ; unsafe { let method_bind = sys :: class_servers_api () . fptr_by_index (111usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "NativeMenu" , "set_item_max_states" , self . object_ptr , args ,) } } pub fn set_item_icon (& mut self , rid : Rid , idx : i32 , icon : impl AsObjectArg < crate :: classes :: Texture2D > ,) { type CallRet = () ; type CallParams = (Rid , i32 , ObjectArg < crate :: classes :: Texture2D > ,) ; let args = (rid , idx , icon . as_object_arg () ,) ; unsafe { let method_bind = sys :: class_servers_api () . fptr_by_index (112usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "NativeMenu" , "set_item_icon" , self . object_ptr , args ,) } } pub fn set_item_indentation_level (& mut self , rid : Rid , idx : i32 , level : i32 ,) { type CallRet = () ; type CallParams = (Rid , i32 , i32 ,) ; let args = (rid , idx , level ,) ; unsafe { let method_bind = sys :: class_servers_api () . fptr_by_index (113usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "NativeMenu" , "set_item_indentation_level" , self . object_ptr , args ,) } } pub fn get_item_count (& self , rid : Rid ,) -> i32 { type CallRet = i32 ; type CallParams = (Rid ,) ; let args = (rid ,) ; unsafe { let method_bind = sys :: class_servers_api () . fptr_by_index (114usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "NativeMenu" , "get_item_count" , self . object_ptr , args ,) } } pub fn is_system_menu (& self , rid : Rid ,) -> bool { type CallRet = bool ; type CallParams = (Rid ,) ; let args = (rid ,) ; unsafe { let method_bind = sys :: class_servers_api () . fptr_by_index (115usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "NativeMenu" , "is_system_menu" , self . object_ptr , args ,) } } pub fn remove_item (& mut self , rid : Rid , idx : i32 ,) { type CallRet = () ; type CallParams = (Rid , i32 ,) ; let args = (rid , idx ,) ; unsafe { let method_bind = sys :: class_servers_api () . fptr_by_index (116usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "NativeMenu" , "remove_item" , self . object_ptr , args ,) } } pub fn clear (& mut self , rid : Rid ,) { type CallRet = () ; type CallParams = (Rid ,) ; let args = (rid ,) ; unsafe { let method_bind = sys :: class_servers_api () . fptr_by_index (117usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "NativeMenu" , "clear" , self . object_ptr , args ,) } } } impl crate :: obj :: GodotClass for NativeMenu { const CLASS_NAME : & 'static str = "NativeMenu" ; type Base = crate :: classes :: Object ; type Memory = crate :: obj :: MemManual ; const INIT_LEVEL : crate :: init :: InitLevel = crate :: init :: InitLevel :: Servers ; } impl crate :: obj :: EngineClass for NativeMenu { fn as_object_ptr (& self) -> sys :: GDExtensionObjectPtr { self . object_ptr } } unsafe impl crate :: obj :: Inherits < crate :: classes :: Object > for NativeMenu { } impl crate :: obj :: Instantiable for NativeMenu { } impl std :: ops :: Deref for NativeMenu { type Target = crate :: classes :: Object ; fn deref (& self) -> & Self :: Target { unsafe { std :: mem :: transmute :: < & Self , & Self :: Target > (self) } } } impl std :: ops :: DerefMut for NativeMenu { fn deref_mut (& mut self) -> & mut Self :: Target { unsafe { std :: mem :: transmute :: < & mut Self , & mut Self :: Target > (self) } } } } # [doc = "Default-param extender for [`NativeMenu::add_submenu_item_ex`][super::NativeMenu::add_submenu_item_ex]."] # [must_use] pub struct ExAddSubmenuItem < 'ex > { surround_object : & 'ex mut re_export :: NativeMenu , rid : Rid , label : CowArg < 'ex , GString > , submenu_rid : Rid , tag : CowArg < 'ex , Variant > , index : i32 , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExAddSubmenuItem < 'ex > { fn new (surround_object : & 'ex mut re_export :: NativeMenu , rid : Rid , label : CowArg < 'ex , GString > , submenu_rid : Rid ,) -> Self { Self { surround_object , rid , label , submenu_rid , tag : CowArg :: Owned (Variant :: nil ()) , index : - 1i32 , } } # [inline] pub fn tag (self , value : & 'ex Variant) -> Self { Self { tag : CowArg :: Borrowed (value) , .. self } } # [inline] pub fn index (self , value : i32) -> Self { Self { index : value , .. self } } # [inline] pub fn done (self) -> i32 { re_export :: NativeMenu :: add_submenu_item_full (self . surround_object , self . rid , self . label , self . submenu_rid , self . tag , self . index ,) } } # [doc = "Default-param extender for [`NativeMenu::add_item_ex`][super::NativeMenu::add_item_ex]."] # [must_use] pub struct ExAddItem < 'ex > { surround_object : & 'ex mut re_export :: NativeMenu , rid : Rid , label : CowArg < 'ex , GString > , callback : CowArg < 'ex , Callable > , key_callback : CowArg < 'ex , Callable > , tag : CowArg < 'ex , Variant > , accelerator : crate :: global :: Key , index : i32 , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExAddItem < 'ex > { fn new (surround_object : & 'ex mut re_export :: NativeMenu , rid : Rid , label : CowArg < 'ex , GString > ,) -> Self { Self { surround_object , rid , label , callback : CowArg :: Owned (Callable :: invalid ()) , key_callback : CowArg :: Owned (Callable :: invalid ()) , tag : CowArg :: Owned (Variant :: nil ()) , accelerator : crate :: obj :: EngineEnum :: from_ord (0) , index : - 1i32 , } } # [inline] pub fn callback (self , value : & 'ex Callable) -> Self { Self { callback : CowArg :: Borrowed (value) , .. self } } # [inline] pub fn key_callback (self , value : & 'ex Callable) -> Self { Self { key_callback : CowArg :: Borrowed (value) , .. self } } # [inline] pub fn tag (self , value : & 'ex Variant) -> Self { Self { tag : CowArg :: Borrowed (value) , .. self } } # [inline] pub fn accelerator (self , value : crate :: global :: Key) -> Self { Self { accelerator : value , .. self } } # [inline] pub fn index (self , value : i32) -> Self { Self { index : value , .. self } } # [inline] pub fn done (self) -> i32 { re_export :: NativeMenu :: add_item_full (self . surround_object , self . rid , self . label , self . callback , self . key_callback , self . tag , self . accelerator , self . index ,) } } # [doc = "Default-param extender for [`NativeMenu::add_check_item_ex`][super::NativeMenu::add_check_item_ex]."] # [must_use] pub struct ExAddCheckItem < 'ex > { surround_object : & 'ex mut re_export :: NativeMenu , rid : Rid , label : CowArg < 'ex , GString > , callback : CowArg < 'ex , Callable > , key_callback : CowArg < 'ex , Callable > , tag : CowArg < 'ex , Variant > , accelerator : crate :: global :: Key , index : i32 , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExAddCheckItem < 'ex > { fn new (surround_object : & 'ex mut re_export :: NativeMenu , rid : Rid , label : CowArg < 'ex , GString > ,) -> Self { Self { surround_object , rid , label , callback : CowArg :: Owned (Callable :: invalid ()) , key_callback : CowArg :: Owned (Callable :: invalid ()) , tag : CowArg :: Owned (Variant :: nil ()) , accelerator : crate :: obj :: EngineEnum :: from_ord (0) , index : - 1i32 , } } # [inline] pub fn callback (self , value : & 'ex Callable) -> Self { Self { callback : CowArg :: Borrowed (value) , .. self } } # [inline] pub fn key_callback (self , value : & 'ex Callable) -> Self { Self { key_callback : CowArg :: Borrowed (value) , .. self } } # [inline] pub fn tag (self , value : & 'ex Variant) -> Self { Self { tag : CowArg :: Borrowed (value) , .. self } } # [inline] pub fn accelerator (self , value : crate :: global :: Key) -> Self { Self { accelerator : value , .. self } } # [inline] pub fn index (self , value : i32) -> Self { Self { index : value , .. self } } # [inline] pub fn done (self) -> i32 { re_export :: NativeMenu :: add_check_item_full (self . surround_object , self . rid , self . label , self . callback , self . key_callback , self . tag , self . accelerator , self . index ,) } } # [doc = "Default-param extender for [`NativeMenu::add_icon_item_ex`][super::NativeMenu::add_icon_item_ex]."] # [must_use] pub struct ExAddIconItem < 'ex > { surround_object : & 'ex mut re_export :: NativeMenu , rid : Rid , icon : ObjectArg < crate :: classes :: Texture2D > , label : CowArg < 'ex , GString > , callback : CowArg < 'ex , Callable > , key_callback : CowArg < 'ex , Callable > , tag : CowArg < 'ex , Variant > , accelerator : crate :: global :: Key , index : i32 , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExAddIconItem < 'ex > { fn new (surround_object : & 'ex mut re_export :: NativeMenu , rid : Rid , icon : ObjectArg < crate :: classes :: Texture2D > , label : CowArg < 'ex , GString > ,) -> Self { Self { surround_object , rid , icon , label , callback : CowArg :: Owned (Callable :: invalid ()) , key_callback : CowArg :: Owned (Callable :: invalid ()) , tag : CowArg :: Owned (Variant :: nil ()) , accelerator : crate :: obj :: EngineEnum :: from_ord (0) , index : - 1i32 , } } # [inline] pub fn callback (self , value : & 'ex Callable) -> Self { Self { callback : CowArg :: Borrowed (value) , .. self } } # [inline] pub fn key_callback (self , value : & 'ex Callable) -> Self { Self { key_callback : CowArg :: Borrowed (value) , .. self } } # [inline] pub fn tag (self , value : & 'ex Variant) -> Self { Self { tag : CowArg :: Borrowed (value) , .. self } } # [inline] pub fn accelerator (self , value : crate :: global :: Key) -> Self { Self { accelerator : value , .. self } } # [inline] pub fn index (self , value : i32) -> Self { Self { index : value , .. self } } # [inline] pub fn done (self) -> i32 { re_export :: NativeMenu :: add_icon_item_full (self . surround_object , self . rid , self . icon , self . label , self . callback , self . key_callback , self . tag , self . accelerator , self . index ,) } } # [doc = "Default-param extender for [`NativeMenu::add_icon_check_item_ex`][super::NativeMenu::add_icon_check_item_ex]."] # [must_use] pub struct ExAddIconCheckItem < 'ex > { surround_object : & 'ex mut re_export :: NativeMenu , rid : Rid , icon : ObjectArg < crate :: classes :: Texture2D > , label : CowArg < 'ex , GString > , callback : CowArg < 'ex , Callable > , key_callback : CowArg < 'ex , Callable > , tag : CowArg < 'ex , Variant > , accelerator : crate :: global :: Key , index : i32 , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExAddIconCheckItem < 'ex > { fn new (surround_object : & 'ex mut re_export :: NativeMenu , rid : Rid , icon : ObjectArg < crate :: classes :: Texture2D > , label : CowArg < 'ex , GString > ,) -> Self { Self { surround_object , rid , icon , label , callback : CowArg :: Owned (Callable :: invalid ()) , key_callback : CowArg :: Owned (Callable :: invalid ()) , tag : CowArg :: Owned (Variant :: nil ()) , accelerator : crate :: obj :: EngineEnum :: from_ord (0) , index : - 1i32 , } } # [inline] pub fn callback (self , value : & 'ex Callable) -> Self { Self { callback : CowArg :: Borrowed (value) , .. self } } # [inline] pub fn key_callback (self , value : & 'ex Callable) -> Self { Self { key_callback : CowArg :: Borrowed (value) , .. self } } # [inline] pub fn tag (self , value : & 'ex Variant) -> Self { Self { tag : CowArg :: Borrowed (value) , .. self } } # [inline] pub fn accelerator (self , value : crate :: global :: Key) -> Self { Self { accelerator : value , .. self } } # [inline] pub fn index (self , value : i32) -> Self { Self { index : value , .. self } } # [inline] pub fn done (self) -> i32 { re_export :: NativeMenu :: add_icon_check_item_full (self . surround_object , self . rid , self . icon , self . label , self . callback , self . key_callback , self . tag , self . accelerator , self . index ,) } } # [doc = "Default-param extender for [`NativeMenu::add_radio_check_item_ex`][super::NativeMenu::add_radio_check_item_ex]."] # [must_use] pub struct ExAddRadioCheckItem < 'ex > { surround_object : & 'ex mut re_export :: NativeMenu , rid : Rid , label : CowArg < 'ex , GString > , callback : CowArg < 'ex , Callable > , key_callback : CowArg < 'ex , Callable > , tag : CowArg < 'ex , Variant > , accelerator : crate :: global :: Key , index : i32 , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExAddRadioCheckItem < 'ex > { fn new (surround_object : & 'ex mut re_export :: NativeMenu , rid : Rid , label : CowArg < 'ex , GString > ,) -> Self { Self { surround_object , rid , label , callback : CowArg :: Owned (Callable :: invalid ()) , key_callback : CowArg :: Owned (Callable :: invalid ()) , tag : CowArg :: Owned (Variant :: nil ()) , accelerator : crate :: obj :: EngineEnum :: from_ord (0) , index : - 1i32 , } } # [inline] pub fn callback (self , value : & 'ex Callable) -> Self { Self { callback : CowArg :: Borrowed (value) , .. self } } # [inline] pub fn key_callback (self , value : & 'ex Callable) -> Self { Self { key_callback : CowArg :: Borrowed (value) , .. self } } # [inline] pub fn tag (self , value : & 'ex Variant) -> Self { Self { tag : CowArg :: Borrowed (value) , .. self } } # [inline] pub fn accelerator (self , value : crate :: global :: Key) -> Self { Self { accelerator : value , .. self } } # [inline] pub fn index (self , value : i32) -> Self { Self { index : value , .. self } } # [inline] pub fn done (self) -> i32 { re_export :: NativeMenu :: add_radio_check_item_full (self . surround_object , self . rid , self . label , self . callback , self . key_callback , self . tag , self . accelerator , self . index ,) } } # [doc = "Default-param extender for [`NativeMenu::add_icon_radio_check_item_ex`][super::NativeMenu::add_icon_radio_check_item_ex]."] # [must_use] pub struct ExAddIconRadioCheckItem < 'ex > { surround_object : & 'ex mut re_export :: NativeMenu , rid : Rid , icon : ObjectArg < crate :: classes :: Texture2D > , label : CowArg < 'ex , GString > , callback : CowArg < 'ex , Callable > , key_callback : CowArg < 'ex , Callable > , tag : CowArg < 'ex , Variant > , accelerator : crate :: global :: Key , index : i32 , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExAddIconRadioCheckItem < 'ex > { fn new (surround_object : & 'ex mut re_export :: NativeMenu , rid : Rid , icon : ObjectArg < crate :: classes :: Texture2D > , label : CowArg < 'ex , GString > ,) -> Self { Self { surround_object , rid , icon , label , callback : CowArg :: Owned (Callable :: invalid ()) , key_callback : CowArg :: Owned (Callable :: invalid ()) , tag : CowArg :: Owned (Variant :: nil ()) , accelerator : crate :: obj :: EngineEnum :: from_ord (0) , index : - 1i32 , } } # [inline] pub fn callback (self , value : & 'ex Callable) -> Self { Self { callback : CowArg :: Borrowed (value) , .. self } } # [inline] pub fn key_callback (self , value : & 'ex Callable) -> Self { Self { key_callback : CowArg :: Borrowed (value) , .. self } } # [inline] pub fn tag (self , value : & 'ex Variant) -> Self { Self { tag : CowArg :: Borrowed (value) , .. self } } # [inline] pub fn accelerator (self , value : crate :: global :: Key) -> Self { Self { accelerator : value , .. self } } # [inline] pub fn index (self , value : i32) -> Self { Self { index : value , .. self } } # [inline] pub fn done (self) -> i32 { re_export :: NativeMenu :: add_icon_radio_check_item_full (self . surround_object , self . rid , self . icon , self . label , self . callback , self . key_callback , self . tag , self . accelerator , self . index ,) } } # [doc = "Default-param extender for [`NativeMenu::add_multistate_item_ex`][super::NativeMenu::add_multistate_item_ex]."] # [must_use] pub struct ExAddMultistateItem < 'ex > { surround_object : & 'ex mut re_export :: NativeMenu , rid : Rid , label : CowArg < 'ex , GString > , max_states : i32 , default_state : i32 , callback : CowArg < 'ex , Callable > , key_callback : CowArg < 'ex , Callable > , tag : CowArg < 'ex , Variant > , accelerator : crate :: global :: Key , index : i32 , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExAddMultistateItem < 'ex > { fn new (surround_object : & 'ex mut re_export :: NativeMenu , rid : Rid , label : CowArg < 'ex , GString > , max_states : i32 , default_state : i32 ,) -> Self { Self { surround_object , rid , label , max_states , default_state , callback : CowArg :: Owned (Callable :: invalid ()) , key_callback : CowArg :: Owned (Callable :: invalid ()) , tag : CowArg :: Owned (Variant :: nil ()) , accelerator : crate :: obj :: EngineEnum :: from_ord (0) , index : - 1i32 , } } # [inline] pub fn callback (self , value : & 'ex Callable) -> Self { Self { callback : CowArg :: Borrowed (value) , .. self } } # [inline] pub fn key_callback (self , value : & 'ex Callable) -> Self { Self { key_callback : CowArg :: Borrowed (value) , .. self } } # [inline] pub fn tag (self , value : & 'ex Variant) -> Self { Self { tag : CowArg :: Borrowed (value) , .. self } } # [inline] pub fn accelerator (self , value : crate :: global :: Key) -> Self { Self { accelerator : value , .. self } } # [inline] pub fn index (self , value : i32) -> Self { Self { index : value , .. self } } # [inline] pub fn done (self) -> i32 { re_export :: NativeMenu :: add_multistate_item_full (self . surround_object , self . rid , self . label , self . max_states , self . default_state , self . callback , self . key_callback , self . tag , self . accelerator , self . index ,) } } # [doc = "Default-param extender for [`NativeMenu::add_separator_ex`][super::NativeMenu::add_separator_ex]."] # [must_use] pub struct ExAddSeparator < 'ex > { surround_object : & 'ex mut re_export :: NativeMenu , rid : Rid , index : i32 , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExAddSeparator < 'ex > { fn new (surround_object : & 'ex mut re_export :: NativeMenu , rid : Rid ,) -> Self { Self { surround_object , rid , index : - 1i32 , } } # [inline] pub fn index (self , value : i32) -> Self { Self { index : value , .. self } } # [inline] pub fn done (self) -> i32 { re_export :: NativeMenu :: add_separator_full (self . surround_object , self . rid , self . index ,) } } # [repr (transparent)] # [derive (Copy , Clone , Eq , PartialEq , Hash ,)] pub struct Feature { ord : i32 } impl Feature { # [doc (alias = "FEATURE_GLOBAL_MENU")] # [doc = "Godot enumerator name: `FEATURE_GLOBAL_MENU`"] pub const GLOBAL_MENU : Self = Self { ord : 0 } ; # [doc (alias = "FEATURE_POPUP_MENU")] # [doc = "Godot enumerator name: `FEATURE_POPUP_MENU`"] pub const POPUP_MENU : Self = Self { ord : 1 } ; # [doc (alias = "FEATURE_OPEN_CLOSE_CALLBACK")] # [doc = "Godot enumerator name: `FEATURE_OPEN_CLOSE_CALLBACK`"] pub const OPEN_CLOSE_CALLBACK : Self = Self { ord : 2 } ; # [doc (alias = "FEATURE_HOVER_CALLBACK")] # [doc = "Godot enumerator name: `FEATURE_HOVER_CALLBACK`"] pub const HOVER_CALLBACK : Self = Self { ord : 3 } ; # [doc (alias = "FEATURE_KEY_CALLBACK")] # [doc = "Godot enumerator name: `FEATURE_KEY_CALLBACK`"] pub const KEY_CALLBACK : Self = Self { ord : 4 } ; # [allow (unreachable_patterns)] fn enumerator_name (self) -> Option < & 'static str > { match self { Self :: GLOBAL_MENU => Some ("GLOBAL_MENU") , Self :: POPUP_MENU => Some ("POPUP_MENU") , Self :: OPEN_CLOSE_CALLBACK => Some ("OPEN_CLOSE_CALLBACK") , Self :: HOVER_CALLBACK => Some ("HOVER_CALLBACK") , Self :: KEY_CALLBACK => Some ("KEY_CALLBACK") , _ => None , } } } impl std :: fmt :: Debug for Feature { fn fmt (& self , f : & mut std :: fmt :: Formatter < '_ >) -> std :: fmt :: Result { match self . enumerator_name () { Some (enumerator) => f . write_str (enumerator) , None => f . debug_struct (stringify ! (Feature)) . field ("ord" , & self . ord) . finish () , } } } impl crate :: obj :: EngineEnum for Feature { fn try_from_ord (ord : i32) -> Option < Self > { match ord { 0 | 1 | 2 | 3 | 4 => Some (Self { ord }) , _ => None , } } fn ord (self) -> i32 { self . ord } } impl crate :: meta :: GodotConvert for Feature { type Via = i32 ; } impl crate :: meta :: ToGodot for Feature { fn to_godot (& self) -> Self :: Via { < Self as crate :: obj :: EngineEnum > :: ord (* self) } } impl crate :: meta :: FromGodot for Feature { fn try_from_godot (via : Self :: Via) -> std :: result :: Result < Self , crate :: meta :: ConvertError > { Ok (Self { ord : via }) } } # [repr (transparent)] # [derive (Copy , Clone , Eq , PartialEq , Hash ,)] pub struct SystemMenus { ord : i32 } impl SystemMenus { pub const INVALID_MENU_ID : Self = Self { ord : 0 } ; pub const MAIN_MENU_ID : Self = Self { ord : 1 } ; pub const APPLICATION_MENU_ID : Self = Self { ord : 2 } ; pub const WINDOW_MENU_ID : Self = Self { ord : 3 } ; pub const HELP_MENU_ID : Self = Self { ord : 4 } ; pub const DOCK_MENU_ID : Self = Self { ord : 5 } ; # [allow (unreachable_patterns)] fn enumerator_name (self) -> Option < & 'static str > { match self { Self :: INVALID_MENU_ID => Some ("INVALID_MENU_ID") , Self :: MAIN_MENU_ID => Some ("MAIN_MENU_ID") , Self :: APPLICATION_MENU_ID => Some ("APPLICATION_MENU_ID") , Self :: WINDOW_MENU_ID => Some ("WINDOW_MENU_ID") , Self :: HELP_MENU_ID => Some ("HELP_MENU_ID") , Self :: DOCK_MENU_ID => Some ("DOCK_MENU_ID") , _ => None , } } } impl std :: fmt :: Debug for SystemMenus { fn fmt (& self , f : & mut std :: fmt :: Formatter < '_ >) -> std :: fmt :: Result { match self . enumerator_name () { Some (enumerator) => f . write_str (enumerator) , None => f . debug_struct (stringify ! (SystemMenus)) . field ("ord" , & self . ord) . finish () , } } } impl crate :: obj :: EngineEnum for SystemMenus { fn try_from_ord (ord : i32) -> Option < Self > { match ord { 0 | 1 | 2 | 3 | 4 | 5 => Some (Self { ord }) , _ => None , } } fn ord (self) -> i32 { self . ord } } impl crate :: meta :: GodotConvert for SystemMenus { type Via = i32 ; } impl crate :: meta :: ToGodot for SystemMenus { fn to_godot (& self) -> Self :: Via { < Self as crate :: obj :: EngineEnum > :: ord (* self) } } impl crate :: meta :: FromGodot for SystemMenus { fn try_from_godot (via : Self :: Via) -> std :: result :: Result < Self , crate :: meta :: ConvertError > { Ok (Self { ord : via }) } } # [doc = "Properties declared by [`NativeMenu`][super::NativeMenu], as interned engine names."] pub struct PropertyName ; impl PropertyName { } # [doc = "Methods declared by [`NativeMenu`][super::NativeMenu], as interned engine names."] pub struct MethodName ; impl MethodName { pub const HAS_FEATURE : InternedName = InternedName :: new ("has_feature") ; pub const HAS_SYSTEM_MENU : InternedName = InternedName :: new ("has_system_menu") ; pub const GET_SYSTEM_MENU : InternedName = InternedName :: new ("get_system_menu") ; pub const GET_SYSTEM_MENU_NAME : InternedName = InternedName :: new ("get_system_menu_name") ; pub const CREATE_MENU : InternedName = InternedName :: new ("create_menu") ; pub const HAS_MENU : InternedName = InternedName :: new ("has_menu") ; pub const FREE_MENU : InternedName = InternedName :: new ("free_menu") ; pub const GET_SIZE : InternedName = InternedName :: new ("get_size") ; pub const POPUP : InternedName = InternedName :: new ("popup") ; pub const SET_INTERFACE_DIRECTION : InternedName = InternedName :: new ("set_interface_direction") ; pub const SET_POPUP_OPEN_CALLBACK : InternedName = InternedName :: new ("set_popup_open_callback") ; pub const GET_POPUP_OPEN_CALLBACK : InternedName = InternedName :: new ("get_popup_open_callback") ; pub const SET_POPUP_CLOSE_CALLBACK : InternedName = InternedName :: new ("set_popup_close_callback") ; pub const GET_POPUP_CLOSE_CALLBACK : InternedName = InternedName :: new ("get_popup_close_callback") ; pub const SET_MINIMUM_WIDTH : InternedName = InternedName :: new ("set_minimum_width") ; pub const GET_MINIMUM_WIDTH : InternedName = InternedName :: new ("get_minimum_width") ; pub const IS_OPENED : InternedName = InternedName :: new ("is_opened") ; pub const ADD_SUBMENU_ITEM : InternedName = InternedName :: new ("add_submenu_item") ; pub const ADD_ITEM : InternedName = InternedName :: new ("add_item") ; pub const ADD_CHECK_ITEM : InternedName = InternedName :: new ("add_check_item") ; pub const ADD_ICON_ITEM : InternedName = InternedName :: new ("add_icon_item") ; pub const ADD_ICON_CHECK_ITEM : InternedName = InternedName :: new ("add_icon_check_item") ; pub const ADD_RADIO_CHECK_ITEM : InternedName = InternedName :: new ("add_radio_check_item") ; pub const ADD_ICON_RADIO_CHECK_ITEM : InternedName = InternedName :: new ("add_icon_radio_check_item") ; pub const ADD_MULTISTATE_ITEM : InternedName = InternedName :: new ("add_multistate_item") ; pub const ADD_SEPARATOR : InternedName = InternedName :: new ("add_separator") ; pub const FIND_ITEM_INDEX_WITH_TEXT : InternedName = InternedName :: new ("find_item_index_with_text") ; pub const FIND_ITEM_INDEX_WITH_TAG : InternedName = InternedName :: new ("find_item_index_with_tag") ; pub const FIND_ITEM_INDEX_WITH_SUBMENU : InternedName = InternedName :: new ("find_item_index_with_submenu") ; pub const IS_ITEM_CHECKED : InternedName = InternedName :: new ("is_item_checked") ; pub const IS_ITEM_CHECKABLE : InternedName = InternedName :: new ("is_item_checkable") ; pub const IS_ITEM_RADIO_CHECKABLE : InternedName = InternedName :: new ("is_item_radio_checkable") ; pub const GET_ITEM_CALLBACK : InternedName = InternedName :: new ("get_item_callback") ; pub const GET_ITEM_KEY_CALLBACK : InternedName = InternedName :: new ("get_item_key_callback") ; pub const GET_ITEM_TAG : InternedName = InternedName :: new ("get_item_tag") ; pub const GET_ITEM_TEXT : InternedName = InternedName :: new ("get_item_text") ; pub const GET_ITEM_SUBMENU : InternedName = InternedName :: new ("get_item_submenu") ; pub const GET_ITEM_ACCELERATOR : InternedName = InternedName :: new ("get_item_accelerator") ; pub const IS_ITEM_DISABLED : InternedName = InternedName :: new ("is_item_disabled") ; pub const IS_ITEM_HIDDEN : InternedName = InternedName :: new ("is_item_hidden") ; pub const GET_ITEM_TOOLTIP : InternedName = InternedName :: new ("get_item_tooltip") ; pub const GET_ITEM_STATE : InternedName = InternedName :: new ("get_item_state") ; pub const GET_ITEM_MAX_STATES : InternedName = InternedName :: new ("get_item_max_states") ; pub const GET_ITEM_ICON : InternedName = InternedName :: new ("get_item_icon") ; pub const GET_ITEM_INDENTATION_LEVEL : InternedName = InternedName :: new ("get_item_indentation_level") ; pub const SET_ITEM_CHECKED : InternedName = InternedName :: new ("set_item_checked") ; pub const SET_ITEM_CHECKABLE : InternedName = InternedName :: new ("set_item_checkable") ; pub const SET_ITEM_RADIO_CHECKABLE : InternedName = InternedName :: new ("set_item_radio_checkable") ; pub const SET_ITEM_CALLBACK : InternedName = InternedName :: new ("set_item_callback") ; pub const SET_ITEM_HOVER_CALLBACKS : InternedName = InternedName :: new ("set_item_hover_callbacks") ; pub const SET_ITEM_KEY_CALLBACK : InternedName = InternedName :: new ("set_item_key_callback") ; pub const SET_ITEM_TAG : InternedName = InternedName :: new ("set_item_tag") ; pub const SET_ITEM_TEXT : InternedName = InternedName :: new ("set_item_text") ; pub const SET_ITEM_SUBMENU : InternedName = InternedName :: new ("set_item_submenu") ; pub const SET_ITEM_ACCELERATOR : InternedName = InternedName :: new ("set_item_accelerator") ; pub const SET_ITEM_DISABLED : InternedName = InternedName :: new ("set_item_disabled") ; pub const SET_ITEM_HIDDEN : InternedName = InternedName :: new ("set_item_hidden") ; pub const SET_ITEM_TOOLTIP : InternedName = InternedName :: new ("set_item_tooltip") ; pub const SET_ITEM_STATE : InternedName = InternedName :: new ("set_item_state") ; pub const SET_ITEM_MAX_STATES : InternedName = InternedName :: new ("set_item_max_states") ; pub const SET_ITEM_ICON : InternedName = InternedName :: new ("set_item_icon") ; pub const SET_ITEM_INDENTATION_LEVEL : InternedName = InternedName :: new ("set_item_indentation_level") ; pub const GET_ITEM_COUNT : InternedName = InternedName :: new ("get_item_count") ; pub const IS_SYSTEM_MENU : InternedName = InternedName :: new ("is_system_menu") ; pub const REMOVE_ITEM : InternedName = InternedName :: new ("remove_item") ; pub const CLEAR : InternedName = InternedName :: new ("clear") ; } # [doc = "Signals declared by [`NativeMenu`][super::NativeMenu], as interned engine names."] pub struct SignalName ; impl SignalName { }