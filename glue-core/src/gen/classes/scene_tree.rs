# ! [doc = "Sidecar module for class [`SceneTree`][crate::classes::SceneTree]."] # [allow (unused_imports)] use crate :: builtin :: * ; # [allow (unused_imports)] use crate :: meta :: { AsArg , AsObjectArg , CowArg , InternedName , ObjectArg , Signature } ; # [allow (unused_imports)] use crate :: obj :: Gd ; # [allow (unused_imports)] use crate :: signal :: { SignalObject , TypedSignal } ; use crate :: sys ; pub (super) mod re_export { use super :: * ; # [doc = "Godot class `SceneTree`.\n\nInherits [`MainLoop`][crate::classes::MainLoop].\n\nRelated symbols (default-param builders, enums, interned names, signals) are in [`scene_tree`][crate::classes::scene_tree]."] # [derive (Debug)] # [repr (C)] pub struct SceneTree { object_ptr : sys :: GDExtensionObjectPtr , } impl SceneTree { pub fn get_root (& self ,) -> Option < Gd < crate :: classes :: Window > > { type CallRet = Option < Gd < crate :: classes :: Window > > ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (552usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "SceneTree" , "get_root" , self . object_ptr , args ,) } } pub fn has_group (& self , name : impl AsArg < StringName > ,) -> bool { type CallRet = bool ; type CallParams < 'a0 , > = (CowArg < 'a0 , StringName > ,) ; let args = (name . into_arg () ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (553usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "SceneTree" , "has_group" , self . object_ptr , args ,) } } pub fn is_auto_accept_quit (& self ,) -> bool { type CallRet = bool ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (554usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "SceneTree" , "is_auto_accept_quit" , self . object_ptr , args ,) } } pub fn set_auto_accept_quit (& mut self , enabled : bool ,) { type CallRet = () ; type CallParams = (bool ,) ; let args = (enabled ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (555usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "SceneTree" , "set_auto_accept_quit" , self . object_ptr , args ,) } } pub fn is_quit_on_go_back (& self ,) -> bool { type CallRet = bool ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (556usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "SceneTree" , "is_quit_on_go_back" , self . object_ptr , args ,) } } pub fn set_quit_on_go_back (& mut self , enabled : bool ,) { type CallRet = () ; type CallParams = (bool ,) ; let args = (enabled ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (557usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "SceneTree" , "set_quit_on_go_back" , self . object_ptr , args ,) } } pub fn set_debug_collisions_hint (& mut self , enable : bool ,) { type CallRet = () ; type CallParams = (bool ,) ; let args = (enable ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (558usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "SceneTree" , "set_debug_collisions_hint" , self . object_ptr , args ,) } } pub fn is_debugging_collisions_hint (& self ,) -> bool { type CallRet = bool ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (559usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "SceneTree" , "is_debugging_collisions_hint" , self . object_ptr , args ,) } } pub fn set_debug_paths_hint (& mut self , enable : bool ,) { type CallRet = () ; type CallParams = (bool ,) ; let args = (enable ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (560usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "SceneTree" , "set_debug_paths_hint" , self . object_ptr , args ,) } } pub fn is_debugging_paths_hint (& self ,) -> bool { type CallRet = bool ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (561usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "SceneTree" , "is_debugging_paths_hint" , self . object_ptr , args ,) } } pub fn set_debug_navigation_hint (& mut self , enable : bool ,) { type CallRet = () ; type CallParams = (bool ,) ; let args = (enable ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (562usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "SceneTree" , "set_debug_navigation_hint" , self . object_ptr , args ,) } } pub fn is_debugging_navigation_hint (& self ,) -> bool { type CallRet = bool ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (563usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "SceneTree" , "is_debugging_navigation_hint" , self . object_ptr , args ,) } } pub fn set_edited_scene_root (& mut self , scene : impl AsObjectArg < crate :: classes :: Node > ,) { type CallRet = () ; type CallParams = (ObjectArg < crate :: classes :: Node > ,) ; let args = (scene . as_object_arg () ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (564usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "SceneTree" , "set_edited_scene_root" , self . object_ptr , args ,) } } pub fn get_edited_scene_root (& self ,) -> Option < Gd < crate :: classes :: Node > > { type CallRet = Option < Gd < crate :: classes :: Node > > ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (565usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "SceneTree" , "get_edited_scene_root" , self . object_ptr , args ,) } } pub fn set_pause (& mut self , enable : bool ,) { type CallRet = () ; type CallParams = (bool ,) ; let args = (enable ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (566usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "SceneTree" , "set_pause" , self . object_ptr , args ,) } } pub fn is_paused (& self ,) -> bool { type CallRet = bool ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (567usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "SceneTree" , "is_paused" , self . object_ptr , args ,) } } pub (crate) fn create_timer_full (& mut self , time_sec : f64 , process_always : bool , process_in_physics : bool , ignore_time_scale : bool ,) -> Option < Gd < crate :: classes :: SceneTreeTimer > > { type CallRet = Option < Gd < crate :: classes :: SceneTreeTimer > > ; type CallParams = (f64 , bool , bool , bool ,) ; let args = (time_sec , process_always , process_in_physics , ignore_time_scale ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (568usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "SceneTree" , "create_timer" , self . object_ptr , args ,) } } # [inline] pub fn create_timer (& mut self , time_sec : f64 ,) -> Option < Gd < crate :: classes :: SceneTreeTimer > > { self . create_timer_ex (time_sec ,) . done () } # [inline] pub fn create_timer_ex < 'ex > (& 'ex mut self , time_sec : f64 ,) -> super :: ExCreateTimer < 'ex > { super :: ExCreateTimer :: new (self , time_sec ,) } pub fn get_node_count (& self ,) -> i32 { type CallRet = i32 ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (569usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "SceneTree" , "get_node_count" , self . object_ptr , args ,) } } pub fn get_frame (& self ,) -> i64 { type CallRet = i64 ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (570usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "SceneTree" , "get_frame" , self . object_ptr , args ,) } } pub (crate) fn quit_full (& mut self , exit_code : i32 ,) { type CallRet = () ; type CallParams = (i32 ,) ; let args = (exit_code ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (571usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "SceneTree" , "quit" , self . object_ptr , args ,) } } # [inline] pub fn quit (& mut self ,) { self . quit_ex () . done () } # [inline] pub fn quit_ex < 'ex > (& 'ex mut self ,) -> super :: ExQuit < 'ex > { super :: ExQuit :: new (self ,) } pub fn set_physics_interpolation_enabled (& mut self , enabled : bool ,) { type CallRet = () ; type CallParams = (bool ,) ; let args = (enabled ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (572usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "SceneTree" , "set_physics_interpolation_enabled" , self . object_ptr , args ,) } } pub fn is_physics_interpolation_enabled (& self ,) -> bool { type CallRet = bool ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (573usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "SceneTree" , "is_physics_interpolation_enabled" , self . object_ptr , args ,) } } pub fn queue_delete (& mut self , obj : impl AsObjectArg < crate :: classes :: Object > ,) { type CallRet = () ; type CallParams = (ObjectArg < crate :: classes :: Object > ,) ; let args = (obj . as_object_arg () ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (574usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "SceneTree" , "queue_delete" , self . object_ptr , args ,) } } # [doc = r" # Panics"] # [doc = r" This is a _varcall_ method, meaning parameters and return values are passed as `Variant`."] # [doc = r" It can detect call failures and will panic in such a case."] pub fn call_group_flags (& mut self , flags : i64 , group : impl AsArg < StringName > , method : impl AsArg < StringName > , varargs : & [Variant]) { self . try_call_group_flags (flags , group , method , varargs) . unwrap_or_else (| e | panic ! ("{e}")) } # [doc = r" # Return type"] # [doc = r" This is a _varcall_ method, meaning parameters and return values are passed as `Variant`."] # [doc = r" It can detect call failures and will return `Err` in such a case."] pub fn try_call_group_flags (& mut self , flags : i64 , group : impl AsArg < StringName > , method : impl AsArg < StringName > , varargs : & [Variant]) -> Result < () , crate :: meta :: CallError > { type CallRet = () ; type CallParams < 'a0 , 'a1 , > = (i64 , CowArg < 'a0 , StringName > , CowArg < 'a1 , StringName > ,) ; let args = (flags , group . into_arg () , method . into_arg () ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (575usize) ; Signature :: < CallParams , CallRet > :: out_class_varcall (method_bind , "SceneTree" , "call_group_flags" , self . object_ptr , args , varargs ,) } } pub fn notify_group_flags (& mut self , call_flags : u32 , group : impl AsArg < StringName > , notification : i32 ,) { type CallRet = () ; type CallParams < 'a0 , > = (u32 , CowArg < 'a0 , StringName > , i32 ,) ; let args = (call_flags , group . into_arg () , notification ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (576usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "SceneTree" , "notify_group_flags" , self . object_ptr , args ,) } } pub fn set_group_flags (& mut self , call_flags : u32 , group : impl AsArg < StringName > , property : impl AsArg < GString > , value : & Variant ,) { type CallRet = () ; type CallParams < 'a0 , 'a1 , 'a2 , > = (u32 , CowArg < 'a0 , StringName > , CowArg < 'a1 , GString > , CowArg < 'a2 , Variant > ,) ; let args = (call_flags , group . into_arg () , property . into_arg () , CowArg :: Borrowed (value) ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (577usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "SceneTree" , "set_group_flags" , self . object_ptr , args ,) } } # [doc = r" # Panics"] # [doc = r" This is a _varcall_ method, meaning parameters and return values are passed as `Variant`."] # [doc = r" It can detect call failures and will panic in such a case."] pub fn call_group (& mut self , group : impl AsArg < StringName > , method : impl AsArg < StringName > , varargs : & [Variant]) { self . try_call_group (group , method , varargs) . unwrap_or_else (| e | panic ! ("{e}")) } # [doc = r" # Return type"] # [doc = r" This is a _varcall_ method, meaning parameters and return values are passed as `Variant`."] # [doc = r" It can detect call failures and will return `Err` in such a case."] pub fn try_call_group (& mut self , group : impl AsArg < StringName > , method : impl AsArg < StringName > , varargs : & [Variant]) -> Result < () , crate :: meta :: CallError > { type CallRet = () ; type CallParams < 'a0 , 'a1 , > = (CowArg < 'a0 , StringName > , CowArg < 'a1 , StringName > ,) ; let args = (group . into_arg () , method . into_arg () ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (578usize) ; Signature :: < CallParams , CallRet > :: out_class_varcall (method_bind , "SceneTree" , "call_group" , self . object_ptr , args , varargs ,) } } pub fn notify_group (& mut self , group : impl AsArg < StringName > , notification : i32 ,) { type CallRet = () ; type CallParams < 'a0 , > = (CowArg < 'a0 , StringName > , i32 ,) ; let args = (group . into_arg () , notification ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (579usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "SceneTree" , "notify_group" , self . object_ptr , args ,) } } pub fn set_group (& mut self , group : impl AsArg < StringName > , property : impl AsArg < GString > , value : & Variant ,) { type CallRet = () ; type CallParams < 'a0 , 'a1 , 'a2 , > = (CowArg < 'a0 , StringName > , CowArg < 'a1 , GString > , CowArg < 'a2 , Variant > ,) ; let args = (group . into_arg () , property . into_arg () , CowArg :: Borrowed (value) ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (580usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "SceneTree" , "set_group" , self . object_ptr , args ,) } } pub fn get_first_node_in_group (& mut self , group : impl AsArg < StringName > ,) -> Option < Gd < crate :: classes :: Node > > { type CallRet = Option < Gd < crate :: classes :: Node > > ; type CallParams < 'a0 , > = (CowArg < 'a0 , StringName > ,) ; let args = (group . into_arg () ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (581usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "SceneTree" , "get_first_node_in_group" , self . object_ptr , args ,) } } pub fn get_node_count_in_group (& self , group : impl AsArg < StringName > ,) -> i32 { type CallRet = i32 ; type CallParams < 'a0 , > = (CowArg < 'a0 , StringName > ,) ; let args = (group . into_arg () ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (582usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "SceneTree" , "get_node_count_in_group" , self . object_ptr , args ,) } } pub fn set_current_scene (& mut self , child_node : impl AsObjectArg < crate :: classes :: Node > ,) { type CallRet = () ; type CallParams = (ObjectArg < crate :: classes :: Node > ,) ; let args = (child_node . as_object_arg () ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (583usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "SceneTree" , "set_current_scene" , self . object_ptr , args ,) } } pub fn get_current_scene (& self ,) -> Option < Gd < crate :: classes :: Node > > { type CallRet = Option < Gd < crate :: classes :: Node > > ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (584usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "SceneTree" , "get_current_scene" , self . object_ptr , args ,) } } pub fn change_scene_to_file (& mut self , path : impl AsArg < GString > ,) -> crate :: global :: Error { type CallRet = crate :: global :: Error ; type CallParams < 'a0 , > = (CowArg < 'a0 , GString > ,) ; let args = (path . into_arg () ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (585usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "SceneTree" , "change_scene_to_file" , self . object_ptr , args ,) } } pub fn reload_current_scene (& mut self ,) -> crate :: global :: Error { type CallRet = crate :: global :: Error ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (586usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "SceneTree" , "reload_current_scene" , self . object_ptr , args ,) } } pub fn unload_current_scene (& mut self ,) { type CallRet = () ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (587usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "SceneTree" , "unload_current_scene" , self . object_ptr , args ,) } } pub fn set_multiplayer_poll_enabled (& mut self , enabled : bool ,) { type CallRet = () ; type CallParams = (bool ,) ; let args = (enabled ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (588usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "SceneTree" , "set_multiplayer_poll_enabled" , self . object_ptr , args ,) } } pub fn is_multiplayer_poll_enabled (& self ,) -> bool { type CallRet = bool ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (589usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "SceneTree" , "is_multiplayer_poll_enabled" , self . object_ptr , args ,) } } # [doc = "Typed signals of this class and its bases; see [`SignalsOfSceneTree`][super::scene_tree::SignalsOfSceneTree]."] pub fn signals (& mut self) -> super :: SignalsOfSceneTree < '_ > { super :: SignalsOfSceneTree :: __new (crate :: signal :: SignalObject :: __new (self . object_ptr)) } } impl crate :: obj :: GodotClass for SceneTree { const CLASS_NAME : & 'static str = "SceneTree" ; type Base = crate :: classes :: MainLoop ; type Memory = crate :: obj :: MemManual ; const INIT_LEVEL : crate :: init :: InitLevel = crate :: init :: InitLevel :: Scene ; } impl crate :: obj :: EngineClass for SceneTree { fn as_object_ptr (& self) -> sys :: GDExtensionObjectPtr { self . object_ptr } } unsafe impl crate :: obj :: Inherits < crate :: classes :: MainLoop > for SceneTree { } unsafe impl crate :: obj :: Inherits < crate :: classes :: Object > for SceneTree { } impl crate :: obj :: Instantiable for SceneTree { } impl std :: ops :: Deref for SceneTree { type Target = crate :: classes :: MainLoop ; fn deref (& self) -> & Self :: Target { unsafe { std :: mem :: transmute :: < & Self , & Self :: Target > (self) } } } impl std :: ops :: DerefMut for SceneTree { fn deref_mut (& mut self) -> & mut Self :: Target { unsafe { std :: mem :: transmute :: < & mut Self , & mut Self :: Target > (self) } } } } # [doc = "Default-param extender for [`SceneTree::create_timer_ex`][super::SceneTree::create_timer_ex]."] # [must_use] pub struct ExCreateTimer < 'ex > { surround_object : & 'ex mut re_export :: SceneTree , time_sec : f64 , process_always : bool , process_in_physics : bool , ignore_time_scale : bool , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExCreateTimer < 'ex > { fn new (surround_object : & 'ex mut re_export :: SceneTree , time_sec : f64 ,) -> Self { Self { surround_object , time_sec , process_always : true , process_in_physics : false , ignore_time_scale : false , } } # [inline] pub fn process_always (self , value : bool) -> Self { Self { process_always : value , .. self } } # [inline] pub fn process_in_physics (self , value : bool) -> Self { Self { process_in_physics : value , .. self } } # [inline] pub fn ignore_time_scale (self , value : bool) -> Self { Self { ignore_time_scale : value , .. self } } # [inline] pub fn done (self) -> Option < Gd < crate :: classes :: SceneTreeTimer > > { re_export :: SceneTree :: create_timer_full (self . surround_object , self . time_sec , self . process_always , self . process_in_physics , self . ignore_time_scale ,) } } # [doc = "Default-param extender for [`SceneTree::quit_ex`][super::SceneTree::quit_ex]."] # [must_use] pub struct ExQuit < 'ex > { surround_object : & 'ex mut re_export :: SceneTree , exit_code : i32 , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExQuit < 'ex > { fn new (surround_object : & 'ex mut re_export :: SceneTree ,) -> Self { Self { surround_object , exit_code : 0i32 , } } # [inline] pub fn exit_code (self , value : i32) -> Self { Self { exit_code : value , .. self } } # [inline] pub fn done (self) { re_export :: SceneTree :: quit_full (self . surround_object , self . exit_code ,) } } # [repr (transparent)] # [derive (Copy , Clone , Eq , PartialEq , Hash ,)] pub struct GroupCallFlags { ord : i32 } impl GroupCallFlags { # [doc (alias = "GROUP_CALL_DEFAULT")] # [doc = "Godot enumerator name: `GROUP_CALL_DEFAULT`"] pub const DEFAULT : Self = Self { ord : 0 } ; # [doc (alias = "GROUP_CALL_REVERSE")] # [doc = "Godot enumerator name: `GROUP_CALL_REVERSE`"] pub const REVERSE : Self = Self { ord : 1 } ; # [doc (alias = "GROUP_CALL_DEFERRED")] # [doc = "Godot enumerator name: `GROUP_CALL_DEFERRED`"] pub const DEFERRED : Self = Self { ord : 2 } ; # [doc (alias = "GROUP_CALL_UNIQUE")] # [doc = "Godot enumerator name: `GROUP_CALL_UNIQUE`"] pub const UNIQUE : Self = Self { ord : 4 } ; # [allow (unreachable_patterns)] fn enumerator_name (self) -> Option < & 'static str > { match self { Self :: DEFAULT => Some ("DEFAULT") , Self :: REVERSE => Some ("REVERSE") , Self :: DEFERRED => Some ("DEFERRED") , Self :: UNIQUE => Some ("UNIQUE") , _ => None , } } } impl std :: fmt :: Debug for GroupCallFlags { fn fmt (& self , f : & mut std :: fmt :: Formatter < '_ >) -> std :: fmt :: Result { match self . enumerator_name () { Some (enumerator) => f . write_str (enumerator) , None => f . debug_struct (stringify ! (GroupCallFlags)) . field ("ord" , & self . ord) . finish () , } } } impl crate :: obj :: EngineEnum for GroupCallFlags { fn try_from_ord (ord : i32) -> Option < Self > { match ord { 0 | 1 | 2 | 4 => Some (Self { ord }) , _ => None , } } fn ord (self) -> i32 { self . ord } } impl crate :: meta :: GodotConvert for GroupCallFlags { type Via = i32 ; } impl crate :: meta :: ToGodot for GroupCallFlags { fn to_godot (& self) -> Self :: Via { < Self as crate :: obj :: EngineEnum > :: ord (* self) } } impl crate :: meta :: FromGodot for GroupCallFlags { fn try_from_godot (via : Self :: Via) -> std :: result :: Result < Self , crate :: meta :: ConvertError > { Ok (Self { ord : via }) } } # [doc = "Properties declared by [`SceneTree`][super::SceneTree], as interned engine names."] pub struct PropertyName ; impl PropertyName { pub const AUTO_ACCEPT_QUIT : InternedName = InternedName :: new ("auto_accept_quit") ; pub const QUIT_ON_GO_BACK : InternedName = InternedName :: new ("quit_on_go_back") ; pub const DEBUG_COLLISIONS_HINT : InternedName = InternedName :: new ("debug_collisions_hint") ; pub const DEBUG_PATHS_HINT : InternedName = InternedName :: new ("debug_paths_hint") ; pub const DEBUG_NAVIGATION_HINT : InternedName = InternedName :: new ("debug_navigation_hint") ; pub const PAUSED : InternedName = InternedName :: new ("paused") ; pub const EDITED_SCENE_ROOT : InternedName = InternedName :: new ("edited_scene_root") ; pub const CURRENT_SCENE : InternedName = InternedName :: new ("current_scene") ; pub const ROOT : InternedName = InternedName :: new ("root") ; pub const MULTIPLAYER_POLL : InternedName = InternedName :: new ("multiplayer_poll") ; pub const PHYSICS_INTERPOLATION : InternedName = InternedName :: new ("physics_interpolation") ; } # [doc = "Methods declared by [`SceneTree`][super::SceneTree], as interned engine names."] pub struct MethodName ; impl MethodName { pub const GET_ROOT : InternedName = InternedName :: new ("get_root") ; pub const HAS_GROUP : InternedName = InternedName :: new ("has_group") ; pub const IS_AUTO_ACCEPT_QUIT : InternedName = InternedName :: new ("is_auto_accept_quit") ; pub const SET_AUTO_ACCEPT_QUIT : InternedName = InternedName :: new ("set_auto_accept_quit") ; pub const IS_QUIT_ON_GO_BACK : InternedName = InternedName :: new ("is_quit_on_go_back") ; pub const SET_QUIT_ON_GO_BACK : InternedName = InternedName :: new ("set_quit_on_go_back") ; pub const SET_DEBUG_COLLISIONS_HINT : InternedName = InternedName :: new ("set_debug_collisions_hint") ; pub const IS_DEBUGGING_COLLISIONS_HINT : InternedName = InternedName :: new ("is_debugging_collisions_hint") ; pub const SET_DEBUG_PATHS_HINT : InternedName = InternedName :: new ("set_debug_paths_hint") ; pub const IS_DEBUGGING_PATHS_HINT : InternedName = InternedName :: new ("is_debugging_paths_hint") ; pub const SET_DEBUG_NAVIGATION_HINT : InternedName = InternedName :: new ("set_debug_navigation_hint") ; pub const IS_DEBUGGING_NAVIGATION_HINT : InternedName = InternedName :: new ("is_debugging_navigation_hint") ; pub const SET_EDITED_SCENE_ROOT : InternedName = InternedName :: new ("set_edited_scene_root") ; pub const GET_EDITED_SCENE_ROOT : InternedName = InternedName :: new ("get_edited_scene_root") ; pub const SET_PAUSE : InternedName = InternedName :: new ("set_pause") ; pub const IS_PAUSED : InternedName = InternedName :: new ("is_paused") ; pub const CREATE_TIMER : InternedName = InternedName :: new ("create_timer") ; pub const GET_NODE_COUNT : InternedName = InternedName :: new ("get_node_count") ; pub const GET_FRAME : InternedName = InternedName :: new ("get_frame") ; pub const QUIT : InternedName = InternedName :: new ("quit") ; pub const SET_PHYSICS_INTERPOLATION_ENABLED : InternedName = InternedName :: new ("set_physics_interpolation_enabled") ; pub const IS_PHYSICS_INTERPOLATION_ENABLED : InternedName = InternedName :: new ("is_physics_interpolation_enabled") ; pub const QUEUE_DELETE : InternedName = InternedName :: new ("queue_delete") ; pub const CALL_GROUP_FLAGS : InternedName = InternedName :: new ("call_group_flags") ; pub const NOTIFY_GROUP_FLAGS : InternedName = InternedName :: new ("notify_group_flags") ; pub const SET_GROUP_FLAGS : InternedName = InternedName :: new ("set_group_flags") ; pub const CALL_GROUP : InternedName = InternedName :: new ("call_group") ; pub const NOTIFY_GROUP : InternedName = InternedName :: new ("notify_group") ; pub const SET_GROUP : InternedName = InternedName :: new ("set_group") ; pub const GET_FIRST_NODE_IN_GROUP : InternedName = InternedName :: new ("get_first_node_in_group") ; pub const GET_NODE_COUNT_IN_GROUP : InternedName = InternedName :: new ("get_node_count_in_group") ; pub const SET_CURRENT_SCENE : InternedName = InternedName :: new ("set_current_scene") ; pub const GET_CURRENT_SCENE : InternedName = InternedName :: new ("get_current_scene") ; pub const CHANGE_SCENE_TO_FILE : InternedName = InternedName :: new ("change_scene_to_file") ; pub const RELOAD_CURRENT_SCENE : InternedName = InternedName :: new ("reload_current_scene") ; pub const UNLOAD_CURRENT_SCENE : InternedName = InternedName :: new ("unload_current_scene") ; pub const SET_MULTIPLAYER_POLL_ENABLED : InternedName = InternedName :: new ("set_multiplayer_poll_enabled") ; pub const IS_MULTIPLAYER_POLL_ENABLED : InternedName = InternedName :: new ("is_multiplayer_poll_enabled") ; } # [doc = "Signals declared by [`SceneTree`][super::SceneTree], as interned engine names."] pub struct SignalName ; impl SignalName { pub const TREE_CHANGED : InternedName = InternedName :: new ("tree_changed") ; pub const TREE_PROCESS_MODE_CHANGED : InternedName = InternedName :: new ("tree_process_mode_changed") ; pub const NODE_ADDED : InternedName = InternedName :: new ("node_added") ; pub const NODE_REMOVED : InternedName = InternedName :: new ("node_removed") ; pub const NODE_RENAMED : InternedName = InternedName :: new ("node_renamed") ; pub const NODE_CONFIGURATION_WARNING_CHANGED : InternedName = InternedName :: new ("node_configuration_warning_changed") ; pub const PROCESS_FRAME : InternedName = InternedName :: new ("process_frame") ; pub const PHYSICS_FRAME : InternedName = InternedName :: new ("physics_frame") ; } # [doc = "A collection of signals for the [`SceneTree`][crate::classes::SceneTree] class."] pub struct SignalsOfSceneTree < 'c > { __base : crate :: classes :: main_loop :: SignalsOfMainLoop < 'c > , } impl < 'c > SignalsOfSceneTree < 'c > { # [doc (hidden)] pub fn __new (object : SignalObject < 'c >) -> Self { Self { __base : crate :: classes :: main_loop :: SignalsOfMainLoop :: __new (object) } } # [doc (hidden)] pub fn __object (& self) -> SignalObject < 'c > { self . __base . __object () } # [doc = "Signature: `()`"] pub fn tree_changed (& mut self) -> SigTreeChanged < 'c > { SigTreeChanged { typed : TypedSignal :: __new (self . __object () , "tree_changed") , } } # [doc = "Signature: `()`"] pub fn tree_process_mode_changed (& mut self) -> SigTreeProcessModeChanged < 'c > { SigTreeProcessModeChanged { typed : TypedSignal :: __new (self . __object () , "tree_process_mode_changed") , } } # [doc = "Signature: `(node: Option<Gd<Node>>)`"] pub fn node_added (& mut self) -> SigNodeAdded < 'c > { SigNodeAdded { typed : TypedSignal :: __new (self . __object () , "node_added") , } } # [doc = "Signature: `(node: Option<Gd<Node>>)`"] pub fn node_removed (& mut self) -> SigNodeRemoved < 'c > { SigNodeRemoved { typed : TypedSignal :: __new (self . __object () , "node_removed") , } } # [doc = "Signature: `(node: Option<Gd<Node>>)`"] pub fn node_renamed (& mut self) -> SigNodeRenamed < 'c > { SigNodeRenamed { typed : TypedSignal :: __new (self . __object () , "node_renamed") , } } # [doc = "Signature: `(node: Option<Gd<Node>>)`"] pub fn node_configuration_warning_changed (& mut self) -> SigNodeConfigurationWarningChanged < 'c > { SigNodeConfigurationWarningChanged { typed : TypedSignal :: __new (self . __object () , "node_configuration_warning_changed") , } } # [doc = "Signature: `()`"] pub fn process_frame (& mut self) -> SigProcessFrame < 'c > { SigProcessFrame { typed : TypedSignal :: __new (self . __object () , "process_frame") , } } # [doc = "Signature: `()`"] pub fn physics_frame (& mut self) -> SigPhysicsFrame < 'c > { SigPhysicsFrame { typed : TypedSignal :: __new (self . __object () , "physics_frame") , } } } impl < 'c > std :: ops :: Deref for SignalsOfSceneTree < 'c > { type Target = crate :: classes :: main_loop :: SignalsOfMainLoop < 'c > ; fn deref (& self) -> & Self :: Target { & self . __base } } impl std :: ops :: DerefMut for SignalsOfSceneTree < '_ > { fn deref_mut (& mut self) -> & mut Self :: Target { & mut self . __base } } type TypedSigTreeChanged < 'c > = TypedSignal < 'c , () > ; pub struct SigTreeChanged < 'c > { typed : TypedSigTreeChanged < 'c > , } impl SigTreeChanged < '_ > { pub fn emit (& mut self ,) { self . typed . emit_tuple (()) ; } } impl < 'c > std :: ops :: Deref for SigTreeChanged < 'c > { type Target = TypedSigTreeChanged < 'c > ; fn deref (& self) -> & Self :: Target { & self . typed } } impl std :: ops :: DerefMut for SigTreeChanged < '_ > { fn deref_mut (& mut self) -> & mut Self :: Target { & mut self . typed } } type TypedSigTreeProcessModeChanged < 'c > = TypedSignal < 'c , () > ; pub struct SigTreeProcessModeChanged < 'c > { typed : TypedSigTreeProcessModeChanged < 'c > , } impl SigTreeProcessModeChanged < '_ > { pub fn emit (& mut self ,) { self . typed . emit_tuple (()) ; } } impl < 'c > std :: ops :: Deref for SigTreeProcessModeChanged < 'c > { type Target = TypedSigTreeProcessModeChanged < 'c > ; fn deref (& self) -> & Self :: Target { & self . typed } } impl std :: ops :: DerefMut for SigTreeProcessModeChanged < '_ > { fn deref_mut (& mut self) -> & mut Self :: Target { & mut self . typed } } type TypedSigNodeAdded < 'c > = TypedSignal < 'c , (Option < Gd < crate :: classes :: Node > > ,) > ; pub struct SigNodeAdded < 'c > { typed : TypedSigNodeAdded < 'c > , } impl SigNodeAdded < '_ > { pub fn emit (& mut self , node : Option < Gd < crate :: classes :: Node > > ,) { self . typed . emit_tuple ((node ,)) ; } } impl < 'c > std :: ops :: Deref for SigNodeAdded < 'c > { type Target = TypedSigNodeAdded < 'c > ; fn deref (& self) -> & Self :: Target { & self . typed } } impl std :: ops :: DerefMut for SigNodeAdded < '_ > { fn deref_mut (& mut self) -> & mut Self :: Target { & mut self . typed } } type TypedSigNodeRemoved < 'c > = TypedSignal < 'c , (Option < Gd < crate :: classes :: Node > > ,) > ; pub struct SigNodeRemoved < 'c > { typed : TypedSigNodeRemoved < 'c > , } impl SigNodeRemoved < '_ > { pub fn emit (& mut self , node : Option < Gd < crate :: classes :: Node > > ,) { self . typed . emit_tuple ((node ,)) ; } } impl < 'c > std :: ops :: Deref for SigNodeRemoved < 'c > { type Target = TypedSigNodeRemoved < 'c > ; fn deref (& self) -> & Self :: Target { & self . typed } } impl std :: ops :: DerefMut for SigNodeRemoved < '_ > { fn deref_mut (& mut self) -> & mut Self :: Target { & mut self . typed } } type TypedSigNodeRenamed < 'c > = TypedSignal < 'c , (Option < Gd < crate :: classes :: Node > > ,) > ; pub struct SigNodeRenamed < 'c > { typed : TypedSigNodeRenamed < 'c > , } impl SigNodeRenamed < '_ > { pub fn emit (& mut self , node : Option < Gd < crate :: classes :: Node > > ,) { self . typed . emit_tuple ((node ,)) ; } } impl < 'c > std :: ops :: Deref for SigNodeRenamed < 'c > { type Target = TypedSigNodeRenamed < 'c > ; fn deref (& self) -> & Self :: Target { & self . typed } } impl std :: ops :: DerefMut for SigNodeRenamed < '_ > { fn deref_mut (& mut self) -> & mut Self :: Target { & mut self . typed } } type TypedSigNodeConfigurationWarningChanged < 'c > = TypedSignal < 'c , (Option < Gd < crate :: classes :: Node > > ,) > ; pub struct SigNodeConfigurationWarningChanged < 'c > { typed : TypedSigNodeConfigurationWarningChanged < 'c > , } impl SigNodeConfigurationWarningChanged < '_ > { pub fn emit (& mut self , node : Option < Gd < crate :: classes :: Node > > ,) { self . typed . emit_tuple ((node ,)) ; } } impl < 'c > std :: ops :: Deref for SigNodeConfigurationWarningChanged < 'c > { type Target = TypedSigNodeConfigurationWarningChanged < 'c > ; fn deref (& self) -> & Self :: Target { & self . typed } } impl std :: ops :: DerefMut for SigNodeConfigurationWarningChanged < '_ > { fn deref_mut (& mut self) -> & mut Self :: Target { & mut self . typed } } type TypedSigProcessFrame < 'c > = TypedSignal < 'c , () > ; pub struct SigProcessFrame < 'c > { typed : TypedSigProcessFrame < 'c > , } impl SigProcessFrame < '_ > { pub fn emit (& mut self ,) { self . typed . emit_tuple (()) ; } } impl < 'c > std :: ops :: Deref for SigProcessFrame < 'c > { type Target = TypedSigProcessFrame < 'c > ; fn deref (& self) -> & Self :: Target { & self . typed } } impl std :: ops :: DerefMut for SigProcessFrame < '_ > { fn deref_mut (& mut self) -> & mut Self :: Target { & mut self . typed } } type TypedSigPhysicsFrame < 'c > = TypedSignal < 'c , () > ; pub struct SigPhysicsFrame < 'c > { typed : TypedSigPhysicsFrame < 'c > , } impl SigPhysicsFrame < '_ > { pub fn emit (& mut self ,) { self . typed . emit_tuple (()) ; } } impl < 'c > std :: ops :: Deref for SigPhysicsFrame < 'c > { type Target = TypedSigPhysicsFrame < 'c > ; fn deref (& self) -> & Self :: Target { & self . typed } } impl std :: ops :: DerefMut for SigPhysicsFrame < '_ > { fn deref_mut (& mut self) -> & mut Self :: Target { & mut self . typed } }