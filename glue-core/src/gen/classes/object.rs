# ! [doc = "Sidecar module for class [`Object`][crate::classes::Object]."] # [allow (unused_imports)] use crate :: builtin :: * ; # [allow (unused_imports)] use crate :: meta :: { AsArg , AsObjectArg , CowArg , InternedName , ObjectArg , Signature } ; # [allow (unused_imports)] use crate :: obj :: Gd ; # [allow (unused_imports)] use crate :: signal :: { SignalObject , TypedSignal } ; use crate :: sys ; pub (super) mod re_export { use super :: * ; # [doc = "Godot class `Object`.\n\nRelated symbols (default-param builders, enums, interned names, signals) are in [`object`][crate::classes::object]."] # [derive (Debug)] # [repr (C)] pub struct Object { object_ptr : sys :: GDExtensionObjectPtr , } impl Object { pub fn get_class (& self ,) -> GString { type CallRet = GString ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_core_api () . fptr_by_index (0usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Object" , "get_class" , self . object_ptr , args ,) } } pub fn is_class (& self , class : impl AsArg < GString > ,) -> bool { type CallRet = bool ; type CallParams < 'a0 , > = (CowArg < 'a0 , GString > ,) ; let args = (class . into_arg () ,) ; unsafe { let method_bind = sys :: class_core_api () . fptr_by_index (1usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Object" , "is_class" , self . object_ptr , args ,) } } pub fn set (& mut self , property : impl AsArg < StringName > , value : & Variant ,) { type CallRet = () ; type CallParams < 'a0 , 'a1 , > = (CowArg < 'a0 , StringName > , CowArg < 'a1 , Variant > ,) ; let args = (property . into_arg () , CowArg :: Borrowed (value) ,) ; unsafe { let method_bind = sys :: class_core_api () . fptr_by_index (2usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Object" , "set" , self . object_ptr , args ,) } } pub fn get (& self , property : impl AsArg < StringName > ,) -> Variant { type CallRet = Variant ; type CallParams < 'a0 , > = (CowArg < 'a0 , StringName > ,) ; let args = (property . into_arg () ,) ; unsafe { let method_bind = sys :: class_core_api () . fptr_by_index (3usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Object" , "get" , self . object_ptr , args ,) } } pub fn set_indexed (& mut self , property_path : impl AsArg < NodePath > , value : & Variant ,) { type CallRet = () ; type CallParams < 'a0 , 'a1 , > = (CowArg < 'a0 , NodePath > , CowArg < 'a1 , Variant > ,) ; let args = (property_path . into_arg () , CowArg :: Borrowed (value) ,) ; unsafe { let method_bind = sys :: class_core_api () . fptr_by_index (4usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Object" , "set_indexed" , self . object_ptr , args ,) } } pub fn get_indexed (& self , property_path : impl AsArg < NodePath > ,) -> Variant { type CallRet = Variant ; type CallParams < 'a0 , > = (CowArg < 'a0 , NodePath > ,) ; let args = (property_path . into_arg () ,) ; unsafe { let method_bind = sys :: class_core_api () . fptr_by_index (5usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Object" , "get_indexed" , self . object_ptr , args ,) } } pub fn property_can_revert (& self , property : impl AsArg < StringName > ,) -> bool { type CallRet = bool ; type CallParams < 'a0 , > = (CowArg < 'a0 , StringName > ,) ; let args = (property . into_arg () ,) ; unsafe { let method_bind = sys :: class_core_api () . fptr_by_index (6usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Object" , "property_can_revert" , self . object_ptr , args ,) } } pub fn property_get_revert (& self , property : impl AsArg < StringName > ,) -> Variant { type CallRet = Variant ; type CallParams < 'a0 , > = (CowArg < 'a0 , StringName > ,) ; let args = (property . into_arg () ,) ; unsafe { let method_bind = sys :: class_core_api () . fptr_by_index (7usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Object" , "property_get_revert" , self . object_ptr , args ,) } } pub (crate) fn notification_full (& mut self , what : i32 , reversed : bool ,) { type CallRet = () ; type CallParams = (i32 , bool ,) ; let args = (what , reversed ,) ; unsafe { let method_bind = sys :: class_core_api () . fptr_by_index (8usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Object" , "notification" , self . object_ptr , args ,) } } # [inline] pub fn notification (& mut self , what : i32 ,) { self . notification_ex (what ,) . done () } # [inline] pub fn notification_ex < 'ex > (& 'ex mut self , what : i32 ,) -> super :: ExNotification < 'ex > { super :: ExNotification :: new (self , what ,) } pub fn to_string (& mut self ,) -> GString { type CallRet = GString ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_core_api () . fptr_by_index (9usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Object" , "to_string" , self . object_ptr , args ,) } } pub fn set_script (& mut self , script : & Variant ,) { type CallRet = () ; type CallParams < 'a0 , > = (CowArg < 'a0 , Variant > ,) ; let args = (CowArg :: Borrowed (script) ,) ; unsafe { let method_bind = sys :: class_core_api () . fptr_by_index (10usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Object" , "set_script" , self . object_ptr , args ,) } } pub fn get_script (& self ,) -> Variant { type CallRet = Variant ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_core_api () . fptr_by_index (11usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Object" , "get_script" , self . object_ptr , args ,) } } pub fn set_meta (& mut self , name : impl AsArg < StringName > , value : & Variant ,) { type CallRet = () ; type CallParams < 'a0 , 'a1 , > = (CowArg < 'a0 , StringName > , CowArg < 'a1 , Variant > ,) ; let args = (name . into_arg () , CowArg :: Borrowed (value) ,) ; unsafe { let method_bind = sys :: class_core_api () . fptr_by_index (12usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Object" , "set_meta" , self . object_ptr , args ,) } } pub fn remove_meta (& mut self , name : impl AsArg < StringName > ,) { type CallRet = () ; type CallParams < 'a0 , > = (CowArg < 'a0 , StringName > ,) ; let args = (name . into_arg () ,) ; unsafe { let method_bind = sys :: class_core_api () . fptr_by_index (13usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Object" , "remove_meta" , self . object_ptr , args ,) } } pub (crate) fn get_meta_full (& self , name : CowArg < '_ , StringName > , default : CowArg < '_ , Variant > ,) -> Variant { type CallRet = Variant ; type CallParams < 'a0 , 'a1 , > = (CowArg < 'a0 , StringName > , CowArg < 'a1 , Variant > ,) ; let args = (name , default ,) ; unsafe { let method_bind = sys :: class_core_api () . fptr_by_index (14usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Object" , "get_meta" , self . object_ptr , args ,) } } # [inline] pub fn get_meta (& self , name : impl AsArg < StringName > ,) -> Variant { self . get_meta_ex (name ,) . done () } # [inline] pub fn get_meta_ex < 'ex > (& 'ex self , name : impl AsArg < StringName > + 'ex ,) -> super :: ExGetMeta < 'ex > { super :: ExGetMeta :: new (self , name . into_arg () ,) } pub fn has_meta (& self , name : impl AsArg < StringName > ,) -> bool { type CallRet = bool ; type CallParams < 'a0 , > = (CowArg < 'a0 , StringName > ,) ; let args = (name . into_arg () ,) ; unsafe { let method_bind = sys :: class_core_api () . fptr_by_index (15usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Object" , "has_meta" , self . object_ptr , args ,) } } pub fn has_user_signal (& self , signal : impl AsArg < StringName > ,) -> bool { type CallRet = bool ; type CallParams < 'a0 , > = (CowArg < 'a0 , StringName > ,) ; let args = (signal . into_arg () ,) ; unsafe { let method_bind = sys :: class_core_api () . fptr_by_index (16usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Object" , "has_user_signal" , self . object_ptr , args ,) } } pub fn remove_user_signal (& mut self , signal : impl AsArg < StringName > ,) { type CallRet = () ; type CallParams < 'a0 , > = (CowArg < 'a0 , StringName > ,) ; let args = (signal . into_arg () ,) ; unsafe { let method_bind = sys :: class_core_api () . fptr_by_index (17usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Object" , "remove_user_signal" , self . object_ptr , args ,) } } # [doc = r" # Panics"] # [doc = r" This is a _varcall_ method, meaning parameters and return values are passed as `Variant`."] # [doc = r" It can detect call failures and will panic in such a case."] pub fn emit_signal (& mut self , signal : impl AsArg < StringName > , varargs : & [Variant]) -> crate :: global :: Error { self . try_emit_signal (signal , varargs) . unwrap_or_else (| e | panic ! ("{e}")) } # [doc = r" # Return type"] # [doc = r" This is a _varcall_ method, meaning parameters and return values are passed as `Variant`."] # [doc = r" It can detect call failures and will return `Err` in such a case."] pub fn try_emit_signal (& mut self , signal : impl AsArg < StringName > , varargs : & [Variant]) -> Result < crate :: global :: Error , crate :: meta :: CallError > { type CallRet = crate :: global :: Error ; type CallParams < 'a0 , > = (CowArg < 'a0 , StringName > ,) ; let args = (signal . into_arg () ,) ; unsafe { let method_bind = sys :: class_core_api () . fptr_by_index (18usize) ; Signature :: < CallParams , CallRet > :: out_class_varcall (method_bind , "Object" , "emit_signal" , self . object_ptr , args , varargs ,) } } # [doc = r" # Panics"] # [doc = r" This is a _varcall_ method, meaning parameters and return values are passed as `Variant`."] # [doc = r" It can detect call failures and will panic in such a case."] pub fn call (& mut self , method : impl AsArg < StringName > , varargs : & [Variant]) -> Variant { self . try_call (method , varargs) . unwrap_or_else (| e | panic ! ("{e}")) } # [doc = r" # Return type"] # [doc = r" This is a _varcall_ method, meaning parameters and return values are passed as `Variant`."] # [doc = r" It can detect call failures and will return `Err` in such a case."] pub fn try_call (& mut self , method : impl AsArg < StringName > , varargs : & [Variant]) -> Result < Variant , crate :: meta :: CallError > { type CallRet = Variant ; type CallParams < 'a0 , > = (CowArg < 'a0 , StringName > ,) ; let args = (method . into_arg () ,) ; unsafe { let method_bind = sys :: class_core_api () . fptr_by_index (19usize) ; Signature :: < CallParams , CallRet > :: out_class_varcall (method_bind , "Object" , "call" , self . object_ptr , args , varargs ,) } } # [doc = r" # Panics"] # [doc = r" This is a _varcall_ method, meaning parameters and return values are passed as `Variant`."] # [doc = r" It can detect call failures and will panic in such a case."] pub fn call_deferred (& mut self , method : impl AsArg < StringName > , varargs : & [Variant]) -> Variant { self . try_call_deferred (method , varargs) . unwrap_or_else (| e | panic ! ("{e}")) } # [doc = r" # Return type"] # [doc = r" This is a _varcall_ method, meaning parameters and return values are passed as `Variant`."] # [doc = r" It can detect call failures and will return `Err` in such a case."] pub fn try_call_deferred (& mut self , method : impl AsArg < StringName > , varargs : & [Variant]) -> Result < Variant , crate :: meta :: CallError > { type CallRet = Variant ; type CallParams < 'a0 , > = (CowArg < 'a0 , StringName > ,) ; let args = (method . into_arg () ,) ; unsafe { let method_bind = sys :: class_core_api () . fptr_by_index (20usize) ; Signature :: < CallParams , CallRet > :: out_class_varcall (method_bind , "Object" , "call_deferred" , self . object_ptr , args , varargs ,) } } pub fn set_deferred (& mut self , property : impl AsArg < StringName > , value : & Variant ,) { type CallRet = () ; type CallParams < 'a0 , 'a1 , > = (CowArg < 'a0 , StringName > , CowArg < 'a1 , Variant > ,) ; let args = (property . into_arg () , CowArg :: Borrowed (value) ,) ; unsafe { let method_bind = sys :: class_core_api () . fptr_by_index (21usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Object" , "set_deferred" , self . object_ptr , args ,) } } pub fn has_method (& self , method : impl AsArg < StringName > ,) -> bool { type CallRet = bool ; type CallParams < 'a0 , > = (CowArg < 'a0 , StringName > ,) ; let args = (method . into_arg () ,) ; unsafe { let method_bind = sys :: class_core_api () . fptr_by_index (22usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Object" , "has_method" , self . object_ptr , args ,) } } pub fn get_method_argument_count (& self , method : impl AsArg < StringName > ,) -> i32 { type CallRet = i32 ; type CallParams < 'a0 , > = (CowArg < 'a0 , StringName > ,) ; let args = (method . into_arg () ,) ; unsafe { let method_bind = sys :: class_core_api () . fptr_by_index (23usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Object" , "get_method_argument_count" , self . object_ptr , args ,) } } pub fn has_signal (& self , signal : impl AsArg < StringName > ,) -> bool { type CallRet = bool ; type CallParams < 'a0 , > = (CowArg < 'a0 , StringName > ,) ; let args = (signal . into_arg () ,) ; unsafe { let method_bind = sys :: class_core_api () . fptr_by_index (24usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Object" , "has_signal" , self . object_ptr , args ,) } } pub (crate) fn connect_full (& mut self , signal : CowArg < '_ , StringName > , callable : CowArg < '_ , Callable > , flags : u32 ,) -> crate :: global :: Error { type CallRet = crate :: global :: Error ; type CallParams < 'a0 , 'a1 , > = (CowArg < 'a0 , StringName > , CowArg < 'a1 , Callable > , u32 ,) ; let args = (signal , callable , flags ,) ; unsafe { let method_bind = sys :: class_core_api () . fptr_by_index (25usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Object" , "connect" , self . object_ptr , args ,) } } # [inline] pub fn connect (& mut self , signal : impl AsArg < StringName > , callable : & Callable ,) -> crate :: global :: Error { self . connect_ex (signal , callable ,) . done () } # [inline] pub fn connect_ex < 'ex > (& 'ex mut self , signal : impl AsArg < StringName > + 'ex , callable : & 'ex Callable ,) -> super :: ExConnect < 'ex > { super :: ExConnect :: new (self , signal . into_arg () , CowArg :: Borrowed (callable) ,) } pub fn disconnect (& mut self , signal : impl AsArg < StringName > , callable : & Callable ,) { type CallRet = () ; type CallParams < 'a0 , 'a1 , > = (CowArg < 'a0 , StringName > , CowArg < 'a1 , Callable > ,) ; let args = (signal . into_arg () , CowArg :: Borrowed (callable) ,) ; unsafe { let method_bind = sys :: class_core_api () . fptr_by_index (26usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Object" , "disconnect" , self . object_ptr , args ,) } } pub fn is_connected (& self , signal : impl AsArg < StringName > , callable : & Callable ,) -> bool { type CallRet = bool ; type CallParams < 'a0 , 'a1 , > = (CowArg < 'a0 , StringName > , CowArg < 'a1 , Callable > ,) ; let args = (signal . into_arg () , CowArg :: Borrowed (callable) ,) ; unsafe { let method_bind = sys :: class_core_api () . fptr_by_index (27usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Object" , "is_connected" , self . object_ptr , args ,) } } pub fn set_block_signals (& mut self , enable : bool ,) { type CallRet = () ; type CallParams = (bool ,) ; let args = (enable ,) ; unsafe { let method_bind = sys :: class_core_api () . fptr_by_index (28usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Object" , "set_block_signals" , self . object_ptr , args ,) } } pub fn is_blocking_signals (& self ,) -> bool { type CallRet = bool ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_core_api () . fptr_by_index (29usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Object" , "is_blocking_signals" , self . object_ptr , args ,) } } pub fn notify_property_list_changed (& mut self ,) { type CallRet = () ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_core_api () . fptr_by_index (30usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Object" , "notify_property_list_changed" , self . object_ptr , args ,) } } pub fn set_message_translation (& mut self , enable : bool ,) { type CallRet = () ; type CallParams = (bool ,) ; let args = (enable ,) ; unsafe { let method_bind = sys :: class_core_api () . fptr_by_index (31usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Object" , "set_message_translation" , self . object_ptr , args ,) } } pub fn can_translate_messages (& self ,) -> bool { type CallRet = bool ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_core_api () . fptr_by_index (32usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Object" , "can_translate_messages" , self . object_ptr , args ,) } } pub (crate) fn tr_full (& self , message : CowArg < '_ , StringName > , context : CowArg < '_ , StringName > ,) -> GString { type CallRet = GString ; type CallParams < 'a0 , 'a1 , > = (CowArg < 'a0 , StringName > , CowArg < 'a1 , StringName > ,) ; let args = (message , context ,) ; unsafe { let method_bind = sys :: class_core_api () . fptr_by_index (33usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Object" , "tr" , self . object_ptr , args ,) } } # [inline] pub fn tr (& self , message : impl AsArg < StringName > ,) -> GString { self . tr_ex (message ,) . done () } # [inline] pub fn tr_ex < 'ex > (& 'ex self , message : impl AsArg < StringName > + 'ex ,) -> super :: ExTr < 'ex > { super :: ExTr :: new (self , message . into_arg () ,) } pub (crate) fn tr_n_full (& self , message : CowArg < '_ , StringName > , plural_message : CowArg < '_ , StringName > , n : i32 , context : CowArg < '_ , StringName > ,) -> GString { type CallRet = GString ; type CallParams < 'a0 , 'a1 , 'a2 , > = (CowArg < 'a0 , StringName > , CowArg < 'a1 , StringName > , i32 , CowArg < 'a2 , StringName > ,) ; let args = (message , plural_message , n , context ,) ; unsafe { let method_bind = sys :: class_core_api () . fptr_by_index (34usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Object" , "tr_n" , self . object_ptr , args ,) } } # [inline] pub fn tr_n (& self , message : impl AsArg < StringName > , plural_message : impl AsArg < StringName > , n : i32 ,) -> GString { self . tr_n_ex (message , plural_message , n ,) . done () } # [inline] pub fn tr_n_ex < 'ex > (& 'ex self , message : impl AsArg < StringName > + 'ex , plural_message : impl AsArg < StringName > + 'ex , n : i32 ,) -> super :: ExTrN < 'ex > { super :: ExTrN :: new (self , message . into_arg () , plural_message . into_arg () , n ,) } pub fn is_queued_for_deletion (& self ,) -> bool { type CallRet = bool ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_core_api () . fptr_by_index (35usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Object" , "is_queued_for_deletion" , self . object_ptr , args ,) } } pub fn cancel_free (& mut self ,) { type CallRet = () ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_core_api () . fptr_by_index (36usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Object" , "cancel_free" , self . object_ptr , args ,) } } # [doc = "Typed signals of this class and its bases; see [`SignalsOfObject`][super::object::SignalsOfObject]."] pub fn signals (& mut self) -> super :: SignalsOfObject < '_ > { super :: SignalsOfObject :: __new (crate :: signal :: SignalObject :: __new (self . object_ptr)) } pub const NOTIFICATION_POSTINITIALIZE : i32 = 0i32 ; pub const NOTIFICATION_PREDELETE : i32 = 1i32 ; pub const NOTIFICATION_EXTENSION_RELOADED : i32 = 2i32 ; } impl crate :: obj :: GodotClass for Object { const CLASS_NAME : & 'static str = "Object" ; type Base = () ; type Memory = crate :: obj :: MemManual ; const INIT_LEVEL : crate :: init :: InitLevel = crate :: init :: InitLevel :: Core ; } impl crate :: obj :: EngineClass for Object { fn as_object_ptr (& self) -> sys :: GDExtensionObjectPtr { self . object_ptr } } impl crate :: obj :: Instantiable for Object { } } # [doc = "Default-param extender for [`Object::notification_ex`][super::Object::notification_ex]."] # [must_use] pub struct ExNotification < 'ex > { surround_object : & 'ex mut re_export :: Object , what : i32 , reversed : bool , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExNotification < 'ex > { fn new (surround_object : & 'ex mut re_export :: Object , what : i32 ,) -> Self { Self { surround_object , what , reversed : false , } } # [inline] pub fn reversed (self , value : bool) -> Self { Self { reversed : value , .. self } } # [inline] pub fn done (self) { re_export :: Object :: notification_full (self . surround_object , self . what , self . reversed ,) } } # [doc = "Default-param extender for [`Object::get_meta_ex`][super::Object::get_meta_ex]."] # [must_use] pub struct ExGetMeta < 'ex > { surround_object : & 'ex re_export :: Object , name : CowArg < 'ex , StringName > , default : CowArg < 'ex , Variant > , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExGetMeta < 'ex > { fn new (surround_object : & 'ex re_export :: Object , name : CowArg < 'ex , StringName > ,) -> Self { Self { surround_object , name , default : CowArg :: Owned (Variant :: nil ()) , } } # [inline] pub fn default (self , value : & 'ex Variant) -> Self { Self { default : CowArg :: Borrowed (value) , .. self } } # [inline] pub fn done (self) -> Variant { re_export :: Object :: get_meta_full (self . surround_object , self . name , self . default ,) } } # [doc = "Default-param extender for [`Object::connect_ex`][super::Object::connect_ex]."] # [must_use] pub struct ExConnect < 'ex > { surround_object : & 'ex mut re_export :: Object , signal : CowArg < 'ex , StringName > , callable : CowArg < 'ex , Callable > , flags : u32 , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExConnect < 'ex > { fn new (surround_object : & 'ex mut re_export :: Object , signal : CowArg < 'ex , StringName > , callable : CowArg < 'ex , Callable > ,) -> Self { Self { surround_object , signal , callable , flags : 0u32 , } } # [inline] pub fn flags (self , value : u32) -> Self { Self { flags : value , .. self } } # [inline] pub fn done (self) -> crate :: global :: Error { re_export :: Object :: connect_full (self . surround_object , self . signal , self . callable , self . flags ,) } } # [doc = "Default-param extender for [`Object::tr_ex`][super::Object::tr_ex]."] # [must_use] pub struct ExTr < 'ex > { surround_object : & 'ex re_export :: Object , message : CowArg < 'ex , StringName > , context : CowArg < 'ex , StringName > , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExTr < 'ex > { fn new (surround_object : & 'ex re_export :: Object , message : CowArg < 'ex , StringName > ,) -> Self { Self { surround_object , message , context : CowArg :: Owned (StringName :: from ("")) , } } # [inline] pub fn context (self , value : impl AsArg < StringName > + 'ex) -> Self { Self { context : value . into_arg () , .. self } } # [inline] pub fn done (self) -> GString { re_export :: Object :: tr_full (self . surround_object , self . message , self . context ,) } } # [doc = "Default-param extender for [`Object::tr_n_ex`][super::Object::tr_n_ex]."] # [must_use] pub struct ExTrN < 'ex > { surround_object : & 'ex re_export :: Object , message : CowArg < 'ex , StringName > , plural_message : CowArg < 'ex , StringName > , n : i32 , context : CowArg < 'ex , StringName > , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExTrN < 'ex > { fn new (surround_object : & 'ex re_export :: Object , message : CowArg < 'ex , StringName > , plural_message : CowArg < 'ex , StringName > , n : i32 ,) -> Self { Self { surround_object , message , plural_message , n , context : CowArg :: Owned (StringName :: from ("")) , } } # [inline] pub fn context (self , value : impl AsArg < StringName > + 'ex) -> Self { Self { context : value . into_arg () , .. self } } # [inline] pub fn done (self) -> GString { re_export :: Object :: tr_n_full (self . surround_object , self . message , self . plural_message , self . n , self . context ,) } } # [repr (transparent)] # [derive (Copy , Clone , Eq , PartialEq , Hash ,)] pub struct ConnectFlags { ord : i32 } impl ConnectFlags { # [doc (alias = "CONNECT_DEFERRED")] # [doc = "Godot enumerator name: `CONNECT_DEFERRED`"] pub const DEFERRED : Self = Self { ord : 1 } ; # [doc (alias = "CONNECT_PERSIST")] # [doc = "Godot enumerator name: `CONNECT_PERSIST`"] pub const PERSIST : Self = Self { ord : 2 } ; # [doc (alias = "CONNECT_ONE_SHOT")] # [doc = "Godot enumerator name: `CONNECT_ONE_SHOT`"] pub const ONE_SHOT : Self = Self { ord : 4 } ; # [doc (alias = "CONNECT_REFERENCE_COUNTED")] # [doc = "Godot enumerator name: `CONNECT_REFERENCE_COUNTED`"] pub const REFERENCE_COUNTED : Self = Self { ord : 8 } ; # [allow (unreachable_patterns)] fn enumerator_name (self) -> Option < & 'static str > { match self { Self :: DEFERRED => Some ("DEFERRED") , Self :: PERSIST => Some ("PERSIST") , Self :: ONE_SHOT => Some ("ONE_SHOT") , Self :: REFERENCE_COUNTED => Some ("REFERENCE_COUNTED") , _ => None , } } } impl std :: fmt :: Debug for ConnectFlags { fn fmt (& self , f : & mut std :: fmt :: Formatter < '_ >) -> std :: fmt :: Result { match self . enumerator_name () { Some (enumerator) => f . write_str (enumerator) , None => f . debug_struct (stringify ! (ConnectFlags)) . field ("ord" , & self . ord) . finish () , } } } impl crate :: obj :: EngineEnum for ConnectFlags { fn try_from_ord (ord : i32) -> Option < Self > { match ord { 1 | 2 | 4 | 8 => Some (Self { ord }) , _ => None , } } fn ord (self) -> i32 { self . ord } } impl crate :: meta :: GodotConvert for ConnectFlags { type Via = i32 ; } impl crate :: meta :: ToGodot for ConnectFlags { fn to_godot (& self) -> Self :: Via { < Self as crate :: obj :: EngineEnum > :: ord (* self) } } impl crate :: meta :: FromGodot for ConnectFlags { fn try_from_godot (via : Self :: Via) -> std :: result :: Result < Self , crate :: meta :: ConvertError > { Ok (Self { ord : via }) } } # [doc = "Properties declared by [`Object`][super::Object], as interned engine names."] pub struct PropertyName ; impl PropertyName { } # [doc = "Methods declared by [`Object`][super::Object], as interned engine names."] pub struct MethodName ; impl MethodName { pub const GET_CLASS : InternedName = InternedName :: new ("get_class") ; pub const IS_CLASS : InternedName = InternedName :: new ("is_class") ; pub const SET : InternedName = InternedName :: new ("set") ; pub const GET : InternedName = InternedName :: new ("get") ; pub const SET_INDEXED : InternedName = InternedName :: new ("set_indexed") ; pub const GET_INDEXED : InternedName = InternedName :: new ("get_indexed") ; pub const PROPERTY_CAN_REVERT : InternedName = InternedName :: new ("property_can_revert") ; pub const PROPERTY_GET_REVERT : InternedName = InternedName :: new ("property_get_revert") ; pub const NOTIFICATION : InternedName = InternedName :: new ("notification") ; pub const TO_STRING : InternedName = InternedName :: new ("to_string") ; pub const SET_SCRIPT : InternedName = InternedName :: new ("set_script") ; pub const GET_SCRIPT : InternedName = InternedName :: new ("get_script") ; pub const SET_META : InternedName = InternedName :: new ("set_meta") ; pub const REMOVE_META : InternedName = InternedName :: new ("remove_meta") ; pub const GET_META : InternedName = InternedName :: new ("get_meta") ; pub const HAS_META : InternedName = InternedName :: new ("has_meta") ; pub const HAS_USER_SIGNAL : InternedName = InternedName :: new ("has_user_signal") ; pub const REMOVE_USER_SIGNAL : InternedName = InternedName :: new ("remove_user_signal") ; pub const EMIT_SIGNAL : InternedName = InternedName :: new ("emit_signal") ; pub const CALL : InternedName = InternedName :: new ("call") ; pub const CALL_DEFERRED : InternedName = InternedName :: new ("call_deferred") ; pub const SET_DEFERRED : InternedName = InternedName :: new ("set_deferred") ; pub const HAS_METHOD : InternedName = InternedName :: new ("has_method") ; pub const GET_METHOD_ARGUMENT_COUNT : InternedName = InternedName :: new ("get_method_argument_count") ; pub const HAS_SIGNAL : InternedName = InternedName :: new ("has_signal") ; pub const CONNECT : InternedName = InternedName :: new ("connect") ; pub const DISCONNECT : InternedName = InternedName :: new ("disconnect") ; pub const IS_CONNECTED : InternedName = InternedName :: new ("is_connected") ; pub const SET_BLOCK_SIGNALS : InternedName = InternedName :: new ("set_block_signals") ; pub const IS_BLOCKING_SIGNALS : InternedName = InternedName :: new ("is_blocking_signals") ; pub const NOTIFY_PROPERTY_LIST_CHANGED : InternedName = InternedName :: new ("notify_property_list_changed") ; pub const SET_MESSAGE_TRANSLATION : InternedName = InternedName :: new ("set_message_translation") ; pub const CAN_TRANSLATE_MESSAGES : InternedName = InternedName :: new ("can_translate_messages") ; pub const TR : InternedName = InternedName :: new ("tr") ; pub const TR_N : InternedName = InternedName :: new ("tr_n") ; pub const IS_QUEUED_FOR_DELETION : InternedName = InternedName :: new ("is_queued_for_deletion") ; pub const CANCEL_FREE : InternedName = InternedName :: new ("cancel_free") ; } # [doc = "Signals declared by [`Object`][super::Object], as interned engine names."] pub struct SignalName ; impl SignalName { pub const SCRIPT_CHANGED : InternedName = InternedName :: new ("script_changed") ; pub const PROPERTY_LIST_CHANGED : InternedName = InternedName :: new ("property_list_changed") ; } # [doc = "A collection of signals for the [`Object`][crate::classes::Object] class."] pub struct SignalsOfObject < 'c > { __object : SignalObject < 'c > , } impl < 'c > SignalsOfObject < 'c > { # [doc (hidden)] pub fn __new (object : SignalObject < 'c >) -> Self { Self { __object : object } } # [doc (hidden)] pub fn __object (& self) -> SignalObject < 'c > { self . __object } # [doc = "Signature: `()`"] pub fn script_changed (& mut self) -> SigScriptChanged < 'c > { SigScriptChanged { typed : TypedSignal :: __new (self . __object () , "script_changed") , } } # [doc = "Signature: `()`"] pub fn property_list_changed (& mut self) -> SigPropertyListChanged < 'c > { SigPropertyListChanged { typed : TypedSignal :: __new (self . __object () , "property_list_changed") , } } } type TypedSigScriptChanged < 'c > = TypedSignal < 'c , () > ; pub struct SigScriptChanged < 'c > { typed : TypedSigScriptChanged < 'c > , } impl SigScriptChanged < '_ > { pub fn emit (& mut self ,) { self . typed . emit_tuple (()) ; } } impl < 'c > std :: ops :: Deref for SigScriptChanged < 'c > { type Target = TypedSigScriptChanged < 'c > ; fn deref (& self) -> & Self :: Target { & self . typed } } impl std :: ops :: DerefMut for SigScriptChanged < '_ > { fn deref_mut (& mut self) -> & mut Self :: Target { & mut self . typed } } type TypedSigPropertyListChanged < 'c > = TypedSignal < 'c , () > ; pub struct SigPropertyListChanged < 'c > { typed : TypedSigPropertyListChanged < 'c > , } impl SigPropertyListChanged < '_ > { pub fn emit (& mut self ,) { self . typed . emit_tuple (()) ; } } impl < 'c > std :: ops :: Deref for SigPropertyListChanged < 'c > { type Target = TypedSigPropertyListChanged < 'c > ; fn deref (& self) -> & Self :: Target { & self . typed } } impl std :: ops :: DerefMut for SigPropertyListChanged < '_ > { fn deref_mut (& mut self) -> & mut Self :: Target { & mut self . typed } }