# ! [doc = "Sidecar module for class [`Node`][crate::classes::Node]."] # [allow (unused_imports)] use crate :: builtin :: * ; # [allow (unused_imports)] use crate :: meta :: { AsArg , AsObjectArg , CowArg , InternedName , ObjectArg , Signature } ; # [allow (unused_imports)] use crate :: obj :: Gd ; # [allow (unused_imports)] use crate :: signal :: { SignalObject , TypedSignal } ; use crate :: sys ; pub (super) mod re_export { use super :: * ; # [doc = "Godot class `Node`.\n\nInherits [`Object`][crate::classes::Object].\n\nRelated symbols (default-param builders, enums, interned names, signals) are in [`node`][crate::classes::node]."] # [derive (Debug)] # [repr (C)] pub struct Node { object_ptr : sys :: GDExtensionObjectPtr , } impl Node { pub fn print_orphan_nodes () { type CallRet = () ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (358usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node" , "print_orphan_nodes" , std :: ptr :: null_mut () , args ,) } } pub (crate) fn add_sibling_full (& mut self , sibling : ObjectArg < crate :: classes :: Node > , force_readable_name : bool ,) { type CallRet = () ; type CallParams = (ObjectArg < crate :: classes :: Node > , bool ,) ; let args = (sibling , force_readable_name ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (359usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node" , "add_sibling" , self . object_ptr , args ,) } } # [inline] pub fn add_sibling (& mut self , sibling : impl AsObjectArg < crate :: classes :: Node > ,) { self . add_sibling_ex (sibling ,) . done () } # [inline] pub fn add_sibling_ex < 'ex > (& 'ex mut self , sibling : impl AsObjectArg < crate :: classes :: Node > ,) -> super :: ExAddSibling < 'ex > { super :: ExAddSibling :: new (self , sibling . as_object_arg () ,) } pub fn set_name (& mut self , name : impl AsArg < GString > ,) { type CallRet = () ; type CallParams < 'a0 , > = (CowArg < 'a0 , GString > ,) ; let args = (name . into_arg () ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (360usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node" , "set_name" , self . object_ptr , args ,) } } pub fn get_name (& self ,) -> StringName { type CallRet = StringName ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (361usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node" , "get_name" , self . object_ptr , args ,) } } pub (crate) fn add_child_full (& mut self , node : ObjectArg < crate :: classes :: Node > , force_readable_name : bool , internal : crate :: classes :: node :: InternalMode ,) { type CallRet = () ; type CallParams = (ObjectArg < crate :: classes :: Node > , bool , crate :: classes :: node :: InternalMode ,) ; let args = (node , force_readable_name , internal ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (362usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node" , "add_child" , self . object_ptr , args ,) } } # [inline] pub fn add_child (& mut self , node : impl AsObjectArg < crate :: classes :: Node > ,) { self . add_child_ex (node ,) . done () } # [inline] pub fn add_child_ex < 'ex > (& 'ex mut self , node : impl AsObjectArg < crate :: classes :: Node > ,) -> super :: ExAddChild < 'ex > { super :: ExAddChild :: new (self , node . as_object_arg () ,) } pub fn remove_child (& mut self , node : impl AsObjectArg < crate :: classes :: Node > ,) { type CallRet = () ; type CallParams = (ObjectArg < crate :: classes :: Node > ,) ; let args = (node . as_object_arg () ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (363usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node" , "remove_child" , self . object_ptr , args ,) } } pub (crate) fn reparent_full (& mut self , new_parent : ObjectArg < crate :: classes :: Node > , keep_global_transform : bool ,) { type CallRet = () ; type CallParams = (ObjectArg < crate :: classes :: Node > , bool ,) ; let args = (new_parent , keep_global_transform ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (364usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node" , "reparent" , self . object_ptr , args ,) } } # [inline] pub fn reparent (& mut self , new_parent : impl AsObjectArg < crate :: classes :: Node > ,) { self . reparent_ex (new_parent ,) . done () } # [inline] pub fn reparent_ex < 'ex > (& 'ex mut self , new_parent : impl AsObjectArg < crate :: classes :: Node > ,) -> super :: ExReparent < 'ex > { super :: ExReparent :: new (self , new_parent . as_object_arg () ,) } pub (crate) fn get_child_count_full (& self , include_internal : bool ,) -> i32 { type CallRet = i32 ; type CallParams = (bool ,) ; let args = (include_internal ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (365usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node" , "get_child_count" , self . object_ptr , args ,) } } # [inline] pub fn get_child_count (& self ,) -> i32 { self . get_child_count_ex () . done () } # [inline] pub fn get_child_count_ex < 'ex > (& 'ex self ,) -> super :: ExGetChildCount < 'ex > { super :: ExGetChildCount :: new (self ,) } pub (crate) fn get_child_full (& self , idx : i32 , include_internal : bool ,) -> Option < Gd < crate :: classes :: Node > > { type CallRet = Option < Gd < crate :: classes :: Node > > ; type CallParams = (i32 , bool ,) ; let args = (idx , include_internal ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (366usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node" , "get_child" , self . object_ptr , args ,) } } # [inline] pub fn get_child (& self , idx : i32 ,) -> Option < Gd < crate :: classes :: Node > > { self . get_child_ex (idx ,) . done () } # [inline] pub fn get_child_ex < 'ex > (& 'ex self , idx : i32 ,) -> super :: ExGetChild < 'ex > { super :: ExGetChild :: new (self , idx ,) } pub fn has_node (& self , path : impl AsArg < NodePath > ,) -> bool { type CallRet = bool ; type CallParams < 'a0 , > = (CowArg < 'a0 , NodePath > ,) ; let args = (path . into_arg () ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (367usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node" , "has_node" , self . object_ptr , args ,) } } pub fn get_node (& self , path : impl AsArg < NodePath > ,) -> Option < Gd < crate :: classes :: Node > > { type CallRet = Option < Gd < crate :: classes :: Node > > ; type CallParams < 'a0 , > = (CowArg < 'a0 , NodePath > ,) ; let args = (path . into_arg () ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (368usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node" , "get_node" , self . object_ptr , args ,) } } pub fn get_node_or_null (& self , path : impl AsArg < NodePath > ,) -> Option < Gd < crate :: classes :: Node > > { type CallRet = Option < Gd < crate :: classes :: Node > > ; type CallParams < 'a0 , > = (CowArg < 'a0 , NodePath > ,) ; let args = (path . into_arg () ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (369usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node" , "get_node_or_null" , self . object_ptr , args ,) } } pub fn get_parent (& self ,) -> Option < Gd < crate :: classes :: Node > > { type CallRet = Option < Gd < crate :: classes :: Node > > ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (370usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node" , "get_parent" , self . object_ptr , args ,) } } pub (crate) fn find_child_full (& self , pattern : CowArg < '_ , GString > , recursive : bool , owned : bool ,) -> Option < Gd < crate :: classes :: Node > > { type CallRet = Option < Gd < crate :: classes :: Node > > ; type CallParams < 'a0 , > = (CowArg < 'a0 , GString > , bool , bool ,) ; let args = (pattern , recursive , owned ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (371usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node" , "find_child" , self . object_ptr , args ,) } } # [inline] pub fn find_child (& self , pattern : impl AsArg < GString > ,) -> Option < Gd < crate :: classes :: Node > > { self . find_child_ex (pattern ,) . done () } # [inline] pub fn find_child_ex < 'ex > (& 'ex self , pattern : impl AsArg < GString > + 'ex ,) -> super :: ExFindChild < 'ex > { super :: ExFindChild :: new (self , pattern . into_arg () ,) } pub fn find_parent (& self , pattern : impl AsArg < GString > ,) -> Option < Gd < crate :: classes :: Node > > { type CallRet = Option < Gd < crate :: classes :: Node > > ; type CallParams < 'a0 , > = (CowArg < 'a0 , GString > ,) ; let args = (pattern . into_arg () ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (372usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node" , "find_parent" , self . object_ptr , args ,) } } pub fn has_node_and_resource (& self , path : impl AsArg < NodePath > ,) -> bool { type CallRet = bool ; type CallParams < 'a0 , > = (CowArg < 'a0 , NodePath > ,) ; let args = (path . into_arg () ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (373usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node" , "has_node_and_resource" , self . object_ptr , args ,) } } pub fn is_inside_tree (& self ,) -> bool { type CallRet = bool ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (374usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node" , "is_inside_tree" , self . object_ptr , args ,) } } pub fn is_part_of_edited_scene (& self ,) -> bool { type CallRet = bool ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (375usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node" , "is_part_of_edited_scene" , self . object_ptr , args ,) } } pub fn is_ancestor_of (& self , node : impl AsObjectArg < crate :: classes :: Node > ,) -> bool { type CallRet = bool ; type CallParams = (ObjectArg < crate :: classes :: Node > ,) ; let args = (node . as_object_arg () ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (376usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node" , "is_ancestor_of" , self . object_ptr , args ,) } } pub fn is_greater_than (& self , node : impl AsObjectArg < crate :: classes :: Node > ,) -> bool { type CallRet = bool ; type CallParams = (ObjectArg < crate :: classes :: Node > ,) ; let args = (node . as_object_arg () ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (377usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node" , "is_greater_than" , self . object_ptr , args ,) } } pub fn get_path (& self ,) -> NodePath { type CallRet = NodePath ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (378usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node" , "get_path" , self . object_ptr , args ,) } } pub (crate) fn get_path_to_full (& self , node : ObjectArg < crate :: classes :: Node > , use_unique_path : bool ,) -> NodePath { type CallRet = NodePath ; type CallParams = (ObjectArg < crate :: classes :: Node > , bool ,) ; let args = (node , use_unique_path ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (379usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node" , "get_path_to" , self . object_ptr , args ,) } } # [inline] pub fn get_path_to (& self , node : impl AsObjectArg < crate :: classes :: Node > ,) -> NodePath { self . get_path_to_ex (node ,) . done () } # [inline] pub fn get_path_to_ex < 'ex > (& 'ex self , node : impl AsObjectArg < crate :: classes :: Node > ,) -> super :: ExGetPathTo < 'ex > { super :: ExGetPathTo :: new (self , node . as_object_arg () ,) } pub (crate) fn add_to_group_full (& mut self , group : CowArg < '_ , StringName > , persistent : bool ,) { type CallRet = () ; type CallParams < 'a0 , > = (CowArg < 'a0 , StringName > , bool ,) ; let args = (group , persistent ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (380usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node" , "add_to_group" , self . object_ptr , args ,) } } # [inline] pub fn add_to_group (& mut self , group : impl AsArg < StringName > ,) { self . add_to_group_ex (group ,) . done () } # [inline] pub fn add_to_group_ex < 'ex > (& 'ex mut self , group : impl AsArg < StringName > + 'ex ,) -> super :: ExAddToGroup < 'ex > { super :: ExAddToGroup :: new (self , group . into_arg () ,) } pub fn remove_from_group (& mut self , group : impl AsArg < StringName > ,) { type CallRet = () ; type CallParams < 'a0 , > = (CowArg < 'a0 , StringName > ,) ; let args = (group . into_arg () ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (381usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node" , "remove_from_group" , self . object_ptr , args ,) } } pub fn is_in_group (& self , group : impl AsArg < StringName > ,) -> bool { type CallRet = bool ; type CallParams < 'a0 , > = (CowArg < 'a0 , StringName > ,) ; let args = (group . into_arg () ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (382usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node" , "is_in_group" , self . object_ptr , args ,) } } pub fn move_child (& mut self , child_node : impl AsObjectArg < crate :: classes :: Node > , to_index : i32 ,) { type CallRet = () ; type CallParams = (ObjectArg < crate :: classes :: Node > , i32 ,) ; let args = (child_node . as_object_arg () , to_index ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (383usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node" , "move_child" , self . object_ptr , args ,) } } pub fn set_owner (& mut self , owner : impl AsObjectArg < crate :: classes :: Node > ,) { type CallRet = () ; type CallParams = (ObjectArg < crate :: classes :: Node > ,) ; let args = (owner . as_object_arg () ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (384usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node" , "set_owner" , self . object_ptr , args ,) } } pub fn get_owner (& self ,) -> Option < Gd < crate :: classes :: Node > > { type CallRet = Option < Gd < crate :: classes :: Node > > ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (385usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node" , "get_owner" , self . object_ptr , args ,) } } pub (crate) fn get_index_full (& self , include_internal : bool ,) -> i32 { type CallRet = i32 ; type CallParams = (bool ,) ; let args = (include_internal ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (386usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node" , "get_index" , self . object_ptr , args ,) } } # [inline] pub fn get_index (& self ,) -> i32 { self . get_index_ex () . done () } # [inline] pub fn get_index_ex < 'ex > (& 'ex self ,) -> super :: ExGetIndex < 'ex > { super :: ExGetIndex :: new (self ,) } pub fn print_tree (& mut self ,) { type CallRet = () ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (387usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node" , "print_tree" , self . object_ptr , args ,) } } pub fn print_tree_pretty (& mut self ,) { type CallRet = () ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (388usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node" , "print_tree_pretty" , self . object_ptr , args ,) } } pub fn get_tree_string (& mut self ,) -> GString { type CallRet = GString ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (389usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node" , "get_tree_string" , self . object_ptr , args ,) } } pub fn get_tree_string_pretty (& mut self ,) -> GString { type CallRet = GString ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (390usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node" , "get_tree_string_pretty" , self . object_ptr , args ,) } } pub fn set_scene_file_path (& mut self , scene_file_path : impl AsArg < GString > ,) { type CallRet = () ; type CallParams < 'a0 , > = (CowArg < 'a0 , GString > ,) ; let args = (scene_file_path . into_arg () ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (391usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node" , "set_scene_file_path" , self . object_ptr , args ,) } } pub fn get_scene_file_path (& self ,) -> GString { type CallRet = GString ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (392usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node" , "get_scene_file_path" , self . object_ptr , args ,) } } pub fn propagate_notification (& mut self , what : i32 ,) { type CallRet = () ; type CallParams = (i32 ,) ; let args = (what ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (393usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node" , "propagate_notification" , self . object_ptr , args ,) } } pub fn set_physics_process (& mut self , enable : bool ,) { type CallRet = () ; type CallParams = (bool ,) ; let args = (enable ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (394usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node" , "set_physics_process" , self . object_ptr , args ,) } } pub fn get_physics_process_delta_time (& self ,) -> f64 { type CallRet = f64 ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (395usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node" , "get_physics_process_delta_time" , self . object_ptr , args ,) } } pub fn is_physics_processing (& self ,) -> bool { type CallRet = bool ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (396usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node" , "is_physics_processing" , self . object_ptr , args ,) } } pub fn get_process_delta_time (& self ,) -> f64 { type CallRet = f64 ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (397usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node" , "get_process_delta_time" , self . object_ptr , args ,) } } pub fn set_process (& mut self , enable : bool ,) { type CallRet = () ; type CallParams = (bool ,) ; let args = (enable ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (398usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node" , "set_process" , self . object_ptr , args ,) } } pub fn set_process_priority (& mut self , priority : i32 ,) { type CallRet = () ; type CallParams = (i32 ,) ; let args = (priority ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (399usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node" , "set_process_priority" , self . object_ptr , args ,) } } pub fn get_process_priority (& self ,) -> i32 { type CallRet = i32 ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (400usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node" , "get_process_priority" , self . object_ptr , args ,) } } pub fn set_physics_process_priority (& mut self , priority : i32 ,) { type CallRet = () ; type CallParams = (i32 ,) ; let args = (priority ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (401usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node" , "set_physics_process_priority" , self . object_ptr , args ,) } } pub fn get_physics_process_priority (& self ,) -> i32 { type CallRet = i32 ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (402usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node" , "get_physics_process_priority" , self . object_ptr , args ,) } } pub fn is_processing (& self ,) -> bool { type CallRet = bool ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (403usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node" , "is_processing" , self . object_ptr , args ,) } } pub fn set_process_input (& mut self , enable : bool ,) { type CallRet = () ; type CallParams = (bool ,) ; let args = (enable ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (404usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node" , "set_process_input" , self . object_ptr , args ,) } } pub fn is_processing_input (& self ,) -> bool { type CallRet = bool ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (405usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node" , "is_processing_input" , self . object_ptr , args ,) } } pub fn set_process_shortcut_input (& mut self , enable : bool ,) { type CallRet = () ; type CallParams = (bool ,) ; let args = (enable ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (406usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node" , "set_process_shortcut_input" , self . object_ptr , args ,) } } pub fn is_processing_shortcut_input (& self ,) -> bool { type CallRet = bool ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (407usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node" , "is_processing_shortcut_input" , self . object_ptr , args ,) } } pub fn set_process_unhandled_input (& mut self , enable : bool ,) { type CallRet = () ; type CallParams = (bool ,) ; let args = (enable ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (408usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node" , "set_process_unhandled_input" , self . object_ptr , args ,) } } pub fn is_processing_unhandled_input (& self ,) -> bool { type CallRet = bool ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (409usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node" , "is_processing_unhandled_input" , self . object_ptr , args ,) } } pub fn set_process_unhandled_key_input (& mut self , enable : bool ,) { type CallRet = () ; type CallParams = (bool ,) ; let args = (enable ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (410usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node" , "set_process_unhandled_key_input" , self . object_ptr , args ,) } } pub fn is_processing_unhandled_key_input (& self ,) -> bool { type CallRet = bool ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (411usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node" , "is_processing_unhandled_key_input" , self . object_ptr , args ,) } } pub fn set_process_mode (& mut self , mode : crate :: classes :: node :: ProcessMode ,) { type CallRet = () ; type CallParams = (crate :: classes :: node :: ProcessMode ,) ; let args = (mode ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (412usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node" , "set_process_mode" , self . object_ptr , args ,) } } pub fn get_process_mode (& self ,) -> crate :: classes :: node :: ProcessMode { type CallRet = crate :: classes :: node :: ProcessMode ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (413usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node" , "get_process_mode" , self . object_ptr , args ,) } } pub fn can_process (& self ,) -> bool { type CallRet = bool ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (414usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node" , "can_process" , self . object_ptr , args ,) } } pub fn set_process_thread_group (& mut self , mode : crate :: classes :: node :: ProcessThreadGroup ,) { type CallRet = () ; type CallParams = (crate :: classes :: node :: ProcessThreadGroup ,) ; let args = (mode ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (415usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node" , "set_process_thread_group" , self . object_ptr , args ,) } } pub fn get_process_thread_group (& self ,) -> crate :: classes :: node :: ProcessThreadGroup { type CallRet = crate :: classes :: node :: ProcessThreadGroup ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (416usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node" , "get_process_thread_group" , self . object_ptr , args ,) } } pub fn set_process_thread_messages (& mut self , flags : crate :: classes :: node :: ProcessThreadMessages ,) { type CallRet = () ; type CallParams = (crate :: classes :: node :: ProcessThreadMessages ,) ; let args = (flags ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (417usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node" , "set_process_thread_messages" , self . object_ptr , args ,) } } pub fn get_process_thread_messages (& self ,) -> crate :: classes :: node :: ProcessThreadMessages { type CallRet = crate :: classes :: node :: ProcessThreadMessages ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (418usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node" , "get_process_thread_messages" , self . object_ptr , args ,) } } pub fn set_process_thread_group_order (& mut self , order : i32 ,) { type CallRet = () ; type CallParams = (i32 ,) ; let args = (order ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (419usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node" , "set_process_thread_group_order" , self . object_ptr , args ,) } } pub fn get_process_thread_group_order (& self ,) -> i32 { type CallRet = i32 ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (420usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node" , "get_process_thread_group_order" , self . object_ptr , args ,) } } pub fn set_display_folded (& mut self , fold : bool ,) { type CallRet = () ; type CallParams = (bool ,) ; let args = (fold ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (421usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node" , "set_display_folded" , self . object_ptr , args ,) } } pub fn is_displayed_folded (& self ,) -> bool { type CallRet = bool ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (422usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node" , "is_displayed_folded" , self . object_ptr , args ,) } } pub fn set_process_internal (& mut self , enable : bool ,) { type CallRet = () ; type CallParams = (bool ,) ; let args = (enable ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (423usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node" , "set_process_internal" , self . object_ptr , args ,) } } pub fn is_processing_internal (& self ,) -> bool { type CallRet = bool ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (424usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node" , "is_processing_internal" , self . object_ptr , args ,) } } pub fn set_physics_process_internal (& mut self , enable : bool ,) { type CallRet = () ; type CallParams = (bool ,) ; let args = (enable ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (425usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node" , "set_physics_process_internal" , self . object_ptr , args ,) } } pub fn is_physics_processing_internal (& self ,) -> bool { type CallRet = bool ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (426usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node" , "is_physics_processing_internal" , self . object_ptr , args ,) } } pub fn set_physics_interpolation_mode (& mut self , mode : crate :: classes :: node :: PhysicsInterpolationMode ,) { type CallRet = () ; type CallParams = (crate :: classes :: node :: PhysicsInterpolationMode ,) ; let args = (mode ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (427usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node" , "set_physics_interpolation_mode" , self . object_ptr , args ,) } } pub fn get_physics_interpolation_mode (& self ,) -> crate :: classes :: node :: PhysicsInterpolationMode { type CallRet = crate :: classes :: node :: PhysicsInterpolationMode ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (428usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node" , "get_physics_interpolation_mode" , self . object_ptr , args ,) } } pub fn is_physics_interpolated (& self ,) -> bool { type CallRet = bool ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (429usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node" , "is_physics_interpolated" , self . object_ptr , args ,) } } pub fn is_physics_interpolated_and_enabled (& self ,) -> bool { type CallRet = bool ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (430usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node" , "is_physics_interpolated_and_enabled" , self . object_ptr , args ,) } } pub fn reset_physics_interpolation (& mut self ,) { type CallRet = () ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (431usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node" , "reset_physics_interpolation" , self . object_ptr , args ,) } } pub fn set_auto_translate_mode (& mut self , mode : crate :: classes :: node :: AutoTranslateMode ,) { type CallRet = () ; type CallParams = (crate :: classes :: node :: AutoTranslateMode ,) ; let args = (mode ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (432usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node" , "set_auto_translate_mode" , self . object_ptr , args ,) } } pub fn get_auto_translate_mode (& self ,) -> crate :: classes :: node :: AutoTranslateMode { type CallRet = crate :: classes :: node :: AutoTranslateMode ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (433usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node" , "get_auto_translate_mode" , self . object_ptr , args ,) } } pub fn get_window (& self ,) -> Option < Gd < crate :: classes :: Window > > { type CallRet = Option < Gd < crate :: classes :: Window > > ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (434usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node" , "get_window" , self . object_ptr , args ,) } } pub fn get_last_exclusive_window (& self ,) -> Option < Gd < crate :: classes :: Window > > { type CallRet = Option < Gd < crate :: classes :: Window > > ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (435usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node" , "get_last_exclusive_window" , self . object_ptr , args ,) } } pub fn get_tree (& self ,) -> Option < Gd < crate :: classes :: SceneTree > > { type CallRet = Option < Gd < crate :: classes :: SceneTree > > ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (436usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node" , "get_tree" , self . object_ptr , args ,) } } pub (crate) fn duplicate_full (& self , flags : i32 ,) -> Option < Gd < crate :: classes :: Node > > { type CallRet = Option < Gd < crate :: classes :: Node > > ; type CallParams = (i32 ,) ; let args = (flags ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (437usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node" , "duplicate" , self . object_ptr , args ,) } } # [inline] pub fn duplicate (& self ,) -> Option < Gd < crate :: classes :: Node > > { self . duplicate_ex () . done () } # [inline] pub fn duplicate_ex < 'ex > (& 'ex self ,) -> super :: ExDuplicate < 'ex > { super :: ExDuplicate :: new (self ,) } pub (crate) fn replace_by_full (& mut self , node : ObjectArg < crate :: classes :: Node > , keep_groups : bool ,) { type CallRet = () ; type CallParams = (ObjectArg < crate :: classes :: Node > , bool ,) ; let args = (node , keep_groups ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (438usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node" , "replace_by" , self . object_ptr , args ,) } } # [inline] pub fn replace_by (& mut self , node : impl AsObjectArg < crate :: classes :: Node > ,) { self . replace_by_ex (node ,) . done () } # [inline] pub fn replace_by_ex < 'ex > (& 'ex mut self , node : impl AsObjectArg < crate :: classes :: Node > ,) -> super :: ExReplaceBy < 'ex > { super :: ExReplaceBy :: new (self , node . as_object_arg () ,) } pub fn set_scene_instance_load_placeholder (& mut self , load_placeholder : bool ,) { type CallRet = () ; type CallParams = (bool ,) ; let args = (load_placeholder ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (439usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node" , "set_scene_instance_load_placeholder" , self . object_ptr , args ,) } } pub fn get_scene_instance_load_placeholder (& self ,) -> bool { type CallRet = bool ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (440usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node" , "get_scene_instance_load_placeholder" , self . object_ptr , args ,) } } pub fn set_editable_instance (& mut self , node : impl AsObjectArg < crate :: classes :: Node > , is_editable : bool ,) { type CallRet = () ; type CallParams = (ObjectArg < crate :: classes :: Node > , bool ,) ; let args = (node . as_object_arg () , is_editable ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (441usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node" , "set_editable_instance" , self . object_ptr , args ,) } } pub fn is_editable_instance (& self , node : impl AsObjectArg < crate :: classes :: Node > ,) -> bool { type CallRet = bool ; type CallParams = (ObjectArg < crate :: classes :: Node > ,) ; let args = (node . as_object_arg () ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (442usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node" , "is_editable_instance" , self . object_ptr , args ,) } } pub fn get_viewport (& self ,) -> Option < Gd < crate :: classes :: Viewport > > { type CallRet = Option < Gd < crate :: classes :: Viewport > > ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (443usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node" , "get_viewport" , self . object_ptr , args ,) } } pub fn queue_free (& mut self ,) { type CallRet = () ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (444usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node" , "queue_free" , self . object_ptr , args ,) } } pub fn request_ready (& mut self ,) { type CallRet = () ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (445usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node" , "request_ready" , self . object_ptr , args ,) } } pub fn is_node_ready (& self ,) -> bool { type CallRet = bool ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (446usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node" , "is_node_ready" , self . object_ptr , args ,) } } pub (crate) fn set_multiplayer_authority_full (& mut self , id : i32 , recursive : bool ,) { type CallRet = () ; type CallParams = (i32 , bool ,) ; let args = (id , recursive ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (447usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node" , "set_multiplayer_authority" , self . object_ptr , args ,) } } # [inline] pub fn set_multiplayer_authority (& mut self , id : i32 ,) { self . set_multiplayer_authority_ex (id ,) . done () } # [inline] pub fn set_multiplayer_authority_ex < 'ex > (& 'ex mut self , id : i32 ,) -> super :: ExSetMultiplayerAuthority < 'ex > { super :: ExSetMultiplayerAuthority :: new (self , id ,) } pub fn get_multiplayer_authority (& self ,) -> i32 { type CallRet = i32 ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (448usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node" , "get_multiplayer_authority" , self . object_ptr , args ,) } } pub fn is_multiplayer_authority (& self ,) -> bool { type CallRet = bool ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (449usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node" , "is_multiplayer_authority" , self . object_ptr , args ,) } } pub fn rpc_config (& mut self , method : impl AsArg < StringName > , config : & Variant ,) { type CallRet = () ; type CallParams < 'a0 , 'a1 , > = (CowArg < 'a0 , StringName > , CowArg < 'a1 , Variant > ,) ; let args = (method . into_arg () , CowArg :: Borrowed (config) ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (450usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node" , "rpc_config" , self . object_ptr , args ,) } } pub fn set_editor_description (& mut self , editor_description : impl AsArg < GString > ,) { type CallRet = () ; type CallParams < 'a0 , > = (CowArg < 'a0 , GString > ,) ; let args = (editor_description . into_arg () ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (451usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node" , "set_editor_description" , self . object_ptr , args ,) } } pub fn get_editor_description (& self ,) -> GString { type CallRet = GString ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (452usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node" , "get_editor_description" , self . object_ptr , args ,) } } pub fn set_unique_name_in_owner (& mut self , enable : bool ,) { type CallRet = () ; type CallParams = (bool ,) ; let args = (enable ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (453usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node" , "set_unique_name_in_owner" , self . object_ptr , args ,) } } pub fn is_unique_name_in_owner (& self ,) -> bool { type CallRet = bool ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (454usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node" , "is_unique_name_in_owner" , self . object_ptr , args ,) } } pub (crate) fn atr_full (& self , message : CowArg < '_ , GString > , context : CowArg < '_ , StringName > ,) -> GString { type CallRet = GString ; type CallParams < 'a0 , 'a1 , > = (CowArg < 'a0 , GString > , CowArg < 'a1 , StringName > ,) ; let args = (message , context ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (455usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node" , "atr" , self . object_ptr , args ,) } } # [inline] pub fn atr (& self , message : impl AsArg < GString > ,) -> GString { self . atr_ex (message ,) . done () } # [inline] pub fn atr_ex < 'ex > (& 'ex self , message : impl AsArg < GString > + 'ex ,) -> super :: ExAtr < 'ex > { super :: ExAtr :: new (self , message . into_arg () ,) } pub (crate) fn atr_n_full (& self , message : CowArg < '_ , GString > , plural_message : CowArg < '_ , StringName > , n : i32 , context : CowArg < '_ , StringName > ,) -> GString { type CallRet = GString ; type CallParams < 'a0 , 'a1 , 'a2 , > = (CowArg < 'a0 , GString > , CowArg < 'a1 , StringName > , i32 , CowArg < 'a2 , StringName > ,) ; let args = (message , plural_message , n , context ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (456usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node" , "atr_n" , self . object_ptr , args ,) } } # [inline] pub fn atr_n (& self , message : impl AsArg < GString > , plural_message : impl AsArg < StringName > , n : i32 ,) -> GString { self . atr_n_ex (message , plural_message , n ,) . done () } # [inline] pub fn atr_n_ex < 'ex > (& 'ex self , message : impl AsArg < GString > + 'ex , plural_message : impl AsArg < StringName > + 'ex , n : i32 ,) -> super :: ExAtrN < 'ex > { super :: ExAtrN :: new (self , message . into_arg () , plural_message . into_arg () , n ,) } # [doc = r" # Panics"] # [doc = r" This is a _varcall_ method, meaning parameters and return values are passed as `Variant`."] # [doc = r" It can detect call failures and will panic in such a case."] pub fn rpc (& mut self , method : impl AsArg < StringName > , varargs : & [Variant]) -> crate :: global :: Error { self . try_rpc (method , varargs) . unwrap_or_else (| e | panic ! ("{e}")) } # [doc = r" # Return type"] # [doc = r" This is a _varcall_ method, meaning parameters and return values are passed as `Variant`."] # [doc = r" It can detect call failures and will return `Err` in such a case."] pub fn try_rpc (& mut self , method : impl AsArg < StringName > , varargs : & [Variant]) -> Result < crate :: global :: Error , crate :: meta :: CallError > { type CallRet = crate :: global :: Error ; type CallParams < 'a0 , > = (CowArg < 'a0 , StringName > ,) ; let args = (method . into_arg () ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (457usize) ; Signature :: < CallParams , CallRet > :: out_class_varcall (method_bind , "Node" , "rpc" , self . object_ptr , args , varargs ,) } } # [doc = r" # Panics"] # [doc = r" This is a _varcall_ method, meaning parameters and return values are passed as `Variant`."] # [doc = r" It can detect call failures and will panic in such a case."] pub fn rpc_id (& mut self , peer_id : i64 , method : impl AsArg < StringName > , varargs : & [Variant]) -> crate :: global :: Error { self . try_rpc_id (peer_id , method , varargs) . unwrap_or_else (| e | panic ! ("{e}")) } # [doc = r" # Return type"] # [doc = r" This is a _varcall_ method, meaning parameters and return values are passed as `Variant`."] # [doc = r" It can detect call failures and will return `Err` in such a case."] pub fn try_rpc_id (& mut self , peer_id : i64 , method : impl AsArg < StringName > , varargs : & [Variant]) -> Result < crate :: global :: Error , crate :: meta :: CallError > { type CallRet = crate :: global :: Error ; type CallParams < 'a0 , > = (i64 , CowArg < 'a0 , StringName > ,) ; let args = (peer_id , method . into_arg () ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (458usize) ; Signature :: < CallParams , CallRet > :: out_class_varcall (method_bind , "Node" , "rpc_id" , self . object_ptr , args , varargs ,) } } pub fn update_configuration_warnings (& mut self ,) { type CallRet = () ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (459usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node" , "update_configuration_warnings" , self . object_ptr , args ,) } } # [doc = r" # Panics"] # [doc = r" This is a _varcall_ method, meaning parameters and return values are passed as `Variant`."] # [doc = r" It can detect call failures and will panic in such a case."] pub fn call_deferred_thread_group (& mut self , method : impl AsArg < StringName > , varargs : & [Variant]) -> Variant { self . try_call_deferred_thread_group (method , varargs) . unwrap_or_else (| e | panic ! ("{e}")) } # [doc = r" # Return type"] # [doc = r" This is a _varcall_ method, meaning parameters and return values are passed as `Variant`."] # [doc = r" It can detect call failures and will return `Err` in such a case."] pub fn try_call_deferred_thread_group (& mut self , method : impl AsArg < StringName > , varargs : & [Variant]) -> Result < Variant , crate :: meta :: CallError > { type CallRet = Variant ; type CallParams < 'a0 , > = (CowArg < 'a0 , StringName > ,) ; let args = (method . into_arg () ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (460usize) ; Signature :: < CallParams , CallRet > :: out_class_varcall (method_bind , "Node" , "call_deferred_thread_group" , self . object_ptr , args , varargs ,) } } pub fn set_deferred_thread_group (& mut self , property : impl AsArg < StringName > , value : & Variant ,) { type CallRet = () ; type CallParams < 'a0 , 'a1 , > = (CowArg < 'a0 , StringName > , CowArg < 'a1 , Variant > ,) ; let args = (property . into_arg () , CowArg :: Borrowed (value) ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (461usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node" , "set_deferred_thread_group" , self . object_ptr , args ,) } } pub fn notify_deferred_thread_group (& mut self , what : i32 ,) { type CallRet = () ; type CallParams = (i32 ,) ; let args = (what ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (462usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node" , "notify_deferred_thread_group" , self . object_ptr , args ,) } } # [doc = r" # Panics"] # [doc = r" This is a _varcall_ method, meaning parameters and return values are passed as `Variant`."] # [doc = r" It can detect call failures and will panic in such a case."] pub fn call_thread_safe (& mut self , method : impl AsArg < StringName > , varargs : & [Variant]) -> Variant { self . try_call_thread_safe (method , varargs) . unwrap_or_else (| e | panic ! ("{e}")) } # [doc = r" # Return type"] # [doc = r" This is a _varcall_ method, meaning parameters and return values are passed as `Variant`."] # [doc = r" It can detect call failures and will return `Err` in such a case."] pub fn try_call_thread_safe (& mut self , method : impl AsArg < StringName > , varargs : & [Variant]) -> Result < Variant , crate :: meta :: CallError > { type CallRet = Variant ; type CallParams < 'a0 , > = (CowArg < 'a0 , StringName > ,) ; let args = (method . into_arg () ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (463usize) ; Signature :: < CallParams , CallRet > :: out_class_varcall (method_bind , "Node" , "call_thread_safe" , self . object_ptr , args , varargs ,) } } pub fn set_thread_safe (& mut self , property : impl AsArg < StringName > , value : & Variant ,) { type CallRet = () ; type CallParams < 'a0 , 'a1 , > = (CowArg < 'a0 , StringName > , CowArg < 'a1 , Variant > ,) ; let args = (property . into_arg () , CowArg :: Borrowed (value) ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (464usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node" , "set_thread_safe" , self . object_ptr , args ,) } } pub fn notify_thread_safe (& mut self , what : i32 ,) { type CallRet = () ; type CallParams = (i32 ,) ; let args = (what ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (465usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Node" , "notify_thread_safe" , self . object_ptr , args ,) } } # [doc = "Typed signals of this class and its bases; see [`SignalsOfNode`][super::node::SignalsOfNode]."] pub fn signals (& mut self) -> super :: SignalsOfNode < '_ > { super :: SignalsOfNode :: __new (crate :: signal :: SignalObject :: __new (self . object_ptr)) } pub const NOTIFICATION_ENTER_TREE : i32 = 10i32 ; pub const NOTIFICATION_EXIT_TREE : i32 = 11i32 ; pub const NOTIFICATION_MOVED_IN_PARENT : i32 = 12i32 ; pub const NOTIFICATION_READY : i32 = 13i32 ; pub const NOTIFICATION_PAUSED : i32 = 14i32 ; pub const NOTIFICATION_UNPAUSED : i32 = 15i32 ; pub const NOTIFICATION_PHYSICS_PROCESS : i32 = 16i32 ; pub const NOTIFICATION_PROCESS : i32 = 17i32 ; pub const NOTIFICATION_PARENTED : i32 = 18i32 ; pub const NOTIFICATION_UNPARENTED : i32 = 19i32 ; pub const NOTIFICATION_SCENE_INSTANTIATED : i32 = 20i32 ; pub const NOTIFICATION_DRAG_BEGIN : i32 = 21i32 ; pub const NOTIFICATION_DRAG_END : i32 = 22i32 ; pub const NOTIFICATION_PATH_RENAMED : i32 = 23i32 ; pub const NOTIFICATION_CHILD_ORDER_CHANGED : i32 = 24i32 ; pub const NOTIFICATION_INTERNAL_PROCESS : i32 = 25i32 ; pub const NOTIFICATION_INTERNAL_PHYSICS_PROCESS : i32 = 26i32 ; pub const NOTIFICATION_POST_ENTER_TREE : i32 = 27i32 ; pub const NOTIFICATION_DISABLED : i32 = 28i32 ; pub const NOTIFICATION_ENABLED : i32 = 29i32 ; pub const NOTIFICATION_RESET_PHYSICS_INTERPOLATION : i32 = 2001i32 ; pub const NOTIFICATION_EDITOR_PRE_SAVE : i32 = 9001i32 ; pub const NOTIFICATION_EDITOR_POST_SAVE : i32 = 9002i32 ; pub const NOTIFICATION_WM_MOUSE_ENTER : i32 = 1002i32 ; pub const NOTIFICATION_WM_MOUSE_EXIT : i32 = 1003i32 ; pub const NOTIFICATION_WM_WINDOW_FOCUS_IN : i32 = 1004i32 ; pub const NOTIFICATION_WM_WINDOW_FOCUS_OUT : i32 = 1005i32 ; pub const NOTIFICATION_WM_CLOSE_REQUEST : i32 = 1006i32 ; pub const NOTIFICATION_WM_GO_BACK_REQUEST : i32 = 1007i32 ; pub const NOTIFICATION_WM_SIZE_CHANGED : i32 = 1008i32 ; pub const NOTIFICATION_WM_DPI_CHANGE : i32 = 1009i32 ; pub const NOTIFICATION_VP_MOUSE_ENTER : i32 = 1010i32 ; pub const NOTIFICATION_VP_MOUSE_EXIT : i32 = 1011i32 ; pub const NOTIFICATION_OS_MEMORY_WARNING : i32 = 2009i32 ; pub const NOTIFICATION_TRANSLATION_CHANGED : i32 = 2010i32 ; pub const NOTIFICATION_WM_ABOUT : i32 = 2011i32 ; pub const NOTIFICATION_CRASH : i32 = 2012i32 ; pub const NOTIFICATION_OS_IME_UPDATE : i32 = 2013i32 ; pub const NOTIFICATION_APPLICATION_RESUMED : i32 = 2014i32 ; pub const NOTIFICATION_APPLICATION_PAUSED : i32 = 2015i32 ; pub const NOTIFICATION_APPLICATION_FOCUS_IN : i32 = 2016i32 ; pub const NOTIFICATION_APPLICATION_FOCUS_OUT : i32 = 2017i32 ; pub const NOTIFICATION_TEXT_SERVER_CHANGED : i32 = 2018i32 ; } impl crate :: obj :: GodotClass for Node { const CLASS_NAME : & 'static str = "Node" ; type Base = crate :: classes :: Object ; type Memory = crate :: obj :: MemManual ; const INIT_LEVEL : crate :: init :: InitLevel = crate :: init :: InitLevel :: Scene ; } impl crate :: obj :: EngineClass for Node { fn as_object_ptr (& self) -> sys :: GDExtensionObjectPtr { self . object_ptr } } unsafe impl crate :: obj :: Inherits < crate :: classes :: Object > for Node { } impl crate :: obj :: Instantiable for Node { } impl std :: ops :: Deref for Node { type Target = crate :: classes :: Object ; fn deref (& self) -> & Self :: Target { unsafe { std :: mem :: transmute :: < & Self , & Self :: Target > (self) } } } impl std :: ops :: DerefMut for Node { fn deref_mut (& mut self) -> & mut Self :: Target { unsafe { std :: mem :: transmute :: < & mut Self , & mut Self :: Target > (self) } } } } # [doc = "Default-param extender for [`Node::add_sibling_ex`][super::Node::add_sibling_ex]."] # [must_use] pub struct ExAddSibling < 'ex > { surround_object : & 'ex mut re_export :: Node , sibling : ObjectArg < crate :: classes :: Node > , force_readable_name : bool , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExAddSibling < 'ex > { fn new (surround_object : & 'ex mut re_export :: Node , sibling : ObjectArg < crate :: classes :: Node > ,) -> Self { Self { surround_object , sibling , force_readable_name : false , } } # [inline] pub fn force_readable_name (self , value : bool) -> Self { Self { force_readable_name : value , .. self } } # [inline] pub fn done (self) { re_export :: Node :: add_sibling_full (self . surround_object , self . sibling , self . force_readable_name ,) } } # [doc = "Default-param extender for [`Node::add_child_ex`][super::Node::add_child_ex]."] # [must_use] pub struct ExAddChild < 'ex > { surround_object : & 'ex mut re_export :: Node , node : ObjectArg < crate :: classes :: Node > , force_readable_name : bool , internal : crate :: classes :: node :: InternalMode , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExAddChild < 'ex > { fn new (surround_object : & 'ex mut re_export :: Node , node : ObjectArg < crate :: classes :: Node > ,) -> Self { Self { surround_object , node , force_readable_name : false , internal : crate :: obj :: EngineEnum :: from_ord (0) , } } # [inline] pub fn force_readable_name (self , value : bool) -> Self { Self { force_readable_name : value , .. self } } # [inline] pub fn internal (self , value : crate :: classes :: node :: InternalMode) -> Self { Self { internal : value , .. self } } # [inline] pub fn done (self) { re_export :: Node :: add_child_full (self . surround_object , self . node , self . force_readable_name , self . internal ,) } } # [doc = "Default-param extender for [`Node::reparent_ex`][super::Node::reparent_ex]."] # [must_use] pub struct ExReparent < 'ex > { surround_object : & 'ex mut re_export :: Node , new_parent : ObjectArg < crate :: classes :: Node > , keep_global_transform : bool , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExReparent < 'ex > { fn new (surround_object : & 'ex mut re_export :: Node , new_parent : ObjectArg < crate :: classes :: Node > ,) -> Self { Self { surround_object , new_parent , keep_global_transform : true , } } # [inline] pub fn keep_global_transform (self , value : bool) -> Self { Self { keep_global_transform : value , .. self } } # [inline] pub fn done (self) { re_export :: Node :: reparent_full (self . surround_object , self . new_parent , self . keep_global_transform ,) } } # [doc = "Default-param extender for [`Node::get_child_count_ex`][super::Node::get_child_count_ex]."] # [must_use] pub struct ExGetChildCount < 'ex > { surround_object : & 'ex re_export :: Node , include_internal : bool , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExGetChildCount < 'ex > { fn new (surround_object : & 'ex re_export :: Node ,) -> Self { Self { surround_object , include_internal : false , } } # [inline] pub fn include_internal (self , value : bool) -> Self { Self { include_internal : value , .. self } } # [inline] pub fn done (self) -> i32 { re_export :: Node :: get_child_count_full (self . surround_object , self . include_internal ,) } } # [doc = "Default-param extender for [`Node::get_child_ex`][super::Node::get_child_ex]."] # [must_use] pub struct ExGetChild < 'ex > { surround_object : & 'ex re_export :: Node , idx : i32 , include_internal : bool , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExGetChild < 'ex > { fn new (surround_object : & 'ex re_export :: Node , idx : i32 ,) -> Self { Self { surround_object , idx , include_internal : false , } } # [inline] pub fn include_internal (self , value : bool) -> Self { Self { include_internal : value , .. self } } # [inline] pub fn done (self) -> Option < Gd < crate :: classes :: Node > > { re_export :: Node :: get_child_full (self . surround_object , self . idx , self . include_internal ,) } } # [doc = "Default-param extender for [`Node::find_child_ex`][super::Node::find_child_ex]."] # [must_use] pub struct ExFindChild < 'ex > { surround_object : & 'ex re_export :: Node , pattern : CowArg < 'ex , GString > , recursive : bool , owned : bool , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExFindChild < 'ex > { fn new (surround_object : & 'ex re_export :: Node , pattern : CowArg < 'ex , GString > ,) -> Self { Self { surround_object , pattern , recursive : true , owned : true , } } # [inline] pub fn recursive (self , value : bool) -> Self { Self { recursive : value , .. self } } # [inline] pub fn owned (self , value : bool) -> Self { Self { owned : value , .. self } } # [inline] pub fn done (self) -> Option < Gd < crate :: classes :: Node > > { re_export :: Node :: find_child_full (self . surround_object , self . pattern , self . recursive , self . owned ,) } } # [doc = "Default-param extender for [`Node::get_path_to_ex`][super::Node::get_path_to_ex]."] # [must_use] pub struct ExGetPathTo < 'ex > { surround_object : & 'ex re_export :: Node , node : ObjectArg < crate :: classes :: Node > , use_unique_path : bool , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExGetPathTo < 'ex > { fn new (surround_object : & 'ex re_export :: Node , node : ObjectArg < crate :: classes :: Node > ,) -> Self { Self { surround_object , node , use_unique_path : false , } } # [inline] pub fn use_unique_path (self , value : bool) -> Self { Self { use_unique_path : value , .. self } } # [inline] pub fn done (self) -> NodePath { re_export :: Node :: get_path_to_full (self . surround_object , self . node , self . use_unique_path ,) } } # [doc = "Default-param extender for [`Node::add_to_group_ex`][super::Node::add_to_group_ex]."] # [must_use] pub struct ExAddToGroup < 'ex > { surround_object : & 'ex mut re_export :: Node , group : CowArg < 'ex , StringName > , persistent : bool , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExAddToGroup < 'ex > { fn new (surround_object : & 'ex mut re_export :: Node , group : CowArg < 'ex , StringName > ,) -> Self { Self { surround_object , group , persistent : false , } } # [inline] pub fn persistent (self , value : bool) -> Self { Self { persistent : value , .. self } } # [inline] pub fn done (self) { re_export :: Node :: add_to_group_full (self . surround_object , self . group , self . persistent ,) } } # [doc = "Default-param extender for [`Node::get_index_ex`][super::Node::get_index_ex]."] # [must_use] pub struct ExGetIndex < 'ex > { surround_object : & 'ex re_export :: Node , include_internal : bool , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExGetIndex < 'ex > { fn new (surround_object : & 'ex re_export :: Node ,) -> Self { Self { surround_object , include_internal : false , } } # [inline] pub fn include_internal (self , value : bool) -> Self { Self { include_internal : value , .. self } } # [inline] pub fn done (self) -> i32 { re_export :: Node :: get_index_full (self . surround_object , self . include_internal ,) } } # [doc = "Default-param extender for [`Node::duplicate_ex`][super::Node::duplicate_ex]."] # [must_use] pub struct ExDuplicate < 'ex > { surround_object : & 'ex re_export :: Node , flags : i32 , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExDuplicate < 'ex > { fn new (surround_object : & 'ex re_export :: Node ,) -> Self { Self { surround_object , flags : 15i32 , } } # [inline] pub fn flags (self , value : i32) -> Self { Self { flags : value , .. self } } # [inline] pub fn done (self) -> Option < Gd < crate :: classes :: Node > > { re_export :: Node :: duplicate_full (self . surround_object , self . flags ,) } } # [doc = "Default-param extender for [`Node::replace_by_ex`][super::Node::replace_by_ex]."] # [must_use] pub struct ExReplaceBy < 'ex > { surround_object : & 'ex mut re_export :: Node , node : ObjectArg < crate :: classes :: Node > , keep_groups : bool , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExReplaceBy < 'ex > { fn new (surround_object : & 'ex mut re_export :: Node , node : ObjectArg < crate :: classes :: Node > ,) -> Self { Self { surround_object , node , keep_groups : false , } } # [inline] pub fn keep_groups (self , value : bool) -> Self { Self { keep_groups : value , .. self } } # [inline] pub fn done (self) { re_export :: Node :: replace_by_full (self . surround_object , self . node , self . keep_groups ,) } } # [doc = "Default-param extender for [`Node::set_multiplayer_authority_ex`][super::Node::set_multiplayer_authority_ex]."] # [must_use] pub struct ExSetMultiplayerAuthority < 'ex > { surround_object : & 'ex mut re_export :: Node , id : i32 , recursive : bool , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExSetMultiplayerAuthority < 'ex > { fn new (surround_object : & 'ex mut re_export :: Node , id : i32 ,) -> Self { Self { surround_object , id , recursive : true , } } # [inline] pub fn recursive (self , value : bool) -> Self { Self { recursive : value , .. self } } # [inline] pub fn done (self) { re_export :: Node :: set_multiplayer_authority_full (self . surround_object , self . id , self . recursive ,) } } # [doc = "Default-param extender for [`Node::atr_ex`][super::Node::atr_ex]."] # [must_use] pub struct ExAtr < 'ex > { surround_object : & 'ex re_export :: Node , message : CowArg < 'ex , GString > , context : CowArg < 'ex , StringName > , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExAtr < 'ex > { fn new (surround_object : & 'ex re_export :: Node , message : CowArg < 'ex , GString > ,) -> Self { Self { surround_object , message , context : CowArg :: Owned (StringName :: from ("")) , } } # [inline] pub fn context (self , value : impl AsArg < StringName > + 'ex) -> Self { Self { context : value . into_arg () , .. self } } # [inline] pub fn done (self) -> GString { re_export :: Node :: atr_full (self . surround_object , self . message , self . context ,) } } # [doc = "Default-param extender for [`Node::atr_n_ex`][super::Node::atr_n_ex]."] # [must_use] pub struct ExAtrN < 'ex > { surround_object : & 'ex re_export :: Node , message : CowArg < 'ex , GString > , plural_message : CowArg < 'ex , StringName > , n : i32 , context : CowArg < 'ex , StringName > , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExAtrN < 'ex > { fn new (surround_object : & 'ex re_export :: Node , message : CowArg < 'ex , GString > , plural_message : CowArg < 'ex , StringName > , n : i32 ,) -> Self { Self { surround_object , message , plural_message , n , context : CowArg :: Owned (StringName :: from ("")) , } } # [inline] pub fn context (self , value : impl AsArg < StringName > + 'ex) -> Self { Self { context : value . into_arg () , .. self } } # [inline] pub fn done (self) -> GString { re_export :: Node :: atr_n_full (self . surround_object , self . message , self . plural_message , self . n , self . context ,) } } # [repr (transparent)] # [derive (Copy , Clone , Eq , PartialEq , Hash ,)] pub struct ProcessMode { ord : i32 } impl ProcessMode { # [doc (alias = "PROCESS_MODE_INHERIT")] # [doc = "Godot enumerator name: `PROCESS_MODE_INHERIT`"] pub const INHERIT : Self = Self { ord : 0 } ; # [doc (alias = "PROCESS_MODE_PAUSABLE")] # [doc = "Godot enumerator name: `PROCESS_MODE_PAUSABLE`"] pub const PAUSABLE : Self = Self { ord : 1 } ; # [doc (alias = "PROCESS_MODE_WHEN_PAUSED")] # [doc = "Godot enumerator name: `PROCESS_MODE_WHEN_PAUSED`"] pub const WHEN_PAUSED : Self = Self { ord : 2 } ; # [doc (alias = "PROCESS_MODE_ALWAYS")] # [doc = "Godot enumerator name: `PROCESS_MODE_ALWAYS`"] pub const ALWAYS : Self = Self { ord : 3 } ; # [doc (alias = "PROCESS_MODE_DISABLED")] # [doc = "Godot enumerator name: `PROCESS_MODE_DISABLED`"] pub const DISABLED : Self = Self { ord : 4 } ; # [allow (unreachable_patterns)] fn enumerator_name (self) -> Option < & 'static str > { match self { Self :: INHERIT => Some ("INHERIT") , Self :: PAUSABLE => Some ("PAUSABLE") , Self :: WHEN_PAUSED => Some ("WHEN_PAUSED") , Self :: ALWAYS => Some ("ALWAYS") , Self :: DISABLED => Some ("DISABLED") , _ => None , } } } impl std :: fmt :: Debug for ProcessMode { fn fmt (& self , f : & mut std :: fmt :: Formatter < '_ >) -> std :: fmt :: Result { match self . enumerator_name () { Some (enumerator) => f . write_str (enumerator) , None => f . debug_struct (stringify ! (ProcessMode)) . field ("ord" , & self . ord) . finish () , } } } impl crate :: obj :: EngineEnum for ProcessMode { fn try_from_ord (ord : i32) -> Option < Self > { match ord { 0 | 1 | 2 | 3 | 4 => Some (Self { ord }) , _ => None , } } fn ord (self) -> i32 { self . ord } } impl crate :: meta :: GodotConvert for ProcessMode { type Via = i32 ; } impl crate :: meta :: ToGodot for ProcessMode { fn to_godot (& self) -> Self :: Via { < Self as crate :: obj :: EngineEnum > :: ord (* self) } } impl crate :: meta :: FromGodot for ProcessMode { fn try_from_godot (via : Self :: Via) -> std :: result :: Result < Self , crate :: meta :: ConvertError > { Ok (Self { ord : via }) } } # [repr (transparent)] # [derive (Copy , Clone , Eq , PartialEq , Hash ,)] pub struct ProcessThreadGroup { ord : i32 } impl ProcessThreadGroup { # [doc (alias = "PROCESS_THREAD_GROUP_INHERIT")] # [doc = "Godot enumerator name: `PROCESS_THREAD_GROUP_INHERIT`"] pub const INHERIT : Self = Self { ord : 0 } ; # [doc (alias = "PROCESS_THREAD_GROUP_MAIN_THREAD")] # [doc = "Godot enumerator name: `PROCESS_THREAD_GROUP_MAIN_THREAD`"] pub const MAIN_THREAD : Self = Self { ord : 1 } ; # [doc (alias = "PROCESS_THREAD_GROUP_SUB_THREAD")] # [doc = "Godot enumerator name: `PROCESS_THREAD_GROUP_SUB_THREAD`"] pub const SUB_THREAD : Self = Self { ord : 2 } ; # [allow (unreachable_patterns)] fn enumerator_name (self) -> Option < & 'static str > { match self { Self :: INHERIT => Some ("INHERIT") , Self :: MAIN_THREAD => Some ("MAIN_THREAD") , Self :: SUB_THREAD => Some ("SUB_THREAD") , _ => None , } } } impl std :: fmt :: Debug for ProcessThreadGroup { fn fmt (& self , f : & mut std :: fmt :: Formatter < '_ >) -> std :: fmt :: Result { match self . enumerator_name () { Some (enumerator) => f . write_str (enumerator) , None => f . debug_struct (stringify ! (ProcessThreadGroup)) . field ("ord" , & self . ord) . finish () , } } } impl crate :: obj :: EngineEnum for ProcessThreadGroup { fn try_from_ord (ord : i32) -> Option < Self > { match ord { 0 | 1 | 2 => Some (Self { ord }) , _ => None , } } fn ord (self) -> i32 { self . ord } } impl crate :: meta :: GodotConvert for ProcessThreadGroup { type Via = i32 ; } impl crate :: meta :: ToGodot for ProcessThreadGroup { fn to_godot (& self) -> Self :: Via { < Self as crate :: obj :: EngineEnum > :: ord (* self) } } impl crate :: meta :: FromGodot for ProcessThreadGroup { fn try_from_godot (via : Self :: Via) -> std :: result :: Result < Self , crate :: meta :: ConvertError > { Ok (Self { ord : via }) } } # [repr (transparent)] # [derive (Copy , Clone , Eq , PartialEq , Hash , Default ,)] pub struct ProcessThreadMessages { ord : u64 } impl ProcessThreadMessages { # [doc (alias = "FLAG_PROCESS_THREAD_MESSAGES")] # [doc = "Godot enumerator name: `FLAG_PROCESS_THREAD_MESSAGES`"] pub const MESSAGES : Self = Self { ord : 1 } ; # [doc (alias = "FLAG_PROCESS_THREAD_MESSAGES_PHYSICS")] # [doc = "Godot enumerator name: `FLAG_PROCESS_THREAD_MESSAGES_PHYSICS`"] pub const MESSAGES_PHYSICS : Self = Self { ord : 2 } ; # [doc (alias = "FLAG_PROCESS_THREAD_MESSAGES_ALL")] # [doc = "Godot enumerator name: `FLAG_PROCESS_THREAD_MESSAGES_ALL`"] pub const MESSAGES_ALL : Self = Self { ord : 3 } ; # [allow (unreachable_patterns)] fn enumerator_name (self) -> Option < & 'static str > { match self { Self :: MESSAGES => Some ("MESSAGES") , Self :: MESSAGES_PHYSICS => Some ("MESSAGES_PHYSICS") , Self :: MESSAGES_ALL => Some ("MESSAGES_ALL") , _ => None , } } } impl std :: fmt :: Debug for ProcessThreadMessages { fn fmt (& self , f : & mut std :: fmt :: Formatter < '_ >) -> std :: fmt :: Result { match self . enumerator_name () { Some (enumerator) => f . write_str (enumerator) , None => f . debug_struct (stringify ! (ProcessThreadMessages)) . field ("ord" , & self . ord) . finish () , } } } impl crate :: obj :: EngineBitfield for ProcessThreadMessages { fn try_from_ord (ord : u64) -> Option < Self > { Some (Self { ord }) } fn ord (self) -> u64 { self . ord } } impl std :: ops :: BitOr for ProcessThreadMessages { type Output = Self ; fn bitor (self , rhs : Self) -> Self :: Output { Self { ord : self . ord | rhs . ord } } } impl std :: ops :: BitOrAssign for ProcessThreadMessages { fn bitor_assign (& mut self , rhs : Self) { * self = * self | rhs ; } } impl crate :: meta :: GodotConvert for ProcessThreadMessages { type Via = u64 ; } impl crate :: meta :: ToGodot for ProcessThreadMessages { fn to_godot (& self) -> Self :: Via { < Self as crate :: obj :: EngineBitfield > :: ord (* self) } } impl crate :: meta :: FromGodot for ProcessThreadMessages { fn try_from_godot (via : Self :: Via) -> std :: result :: Result < Self , crate :: meta :: ConvertError > { Ok (Self { ord : via }) } } # [repr (transparent)] # [derive (Copy , Clone , Eq , PartialEq , Hash ,)] pub struct PhysicsInterpolationMode { ord : i32 } impl PhysicsInterpolationMode { # [doc (alias = "PHYSICS_INTERPOLATION_MODE_INHERIT")] # [doc = "Godot enumerator name: `PHYSICS_INTERPOLATION_MODE_INHERIT`"] pub const INHERIT : Self = Self { ord : 0 } ; # [doc (alias = "PHYSICS_INTERPOLATION_MODE_ON")] # [doc = "Godot enumerator name: `PHYSICS_INTERPOLATION_MODE_ON`"] pub const ON : Self = Self { ord : 1 } ; # [doc (alias = "PHYSICS_INTERPOLATION_MODE_OFF")] # [doc = "Godot enumerator name: `PHYSICS_INTERPOLATION_MODE_OFF`"] pub const OFF : Self = Self { ord : 2 } ; # [allow (unreachable_patterns)] fn enumerator_name (self) -> Option < & 'static str > { match self { Self :: INHERIT => Some ("INHERIT") , Self :: ON => Some ("ON") , Self :: OFF => Some ("OFF") , _ => None , } } } impl std :: fmt :: Debug for PhysicsInterpolationMode { fn fmt (& self , f : & mut std :: fmt :: Formatter < '_ >) -> std :: fmt :: Result { match self . enumerator_name () { Some (enumerator) => f . write_str (enumerator) , None => f . debug_struct (stringify ! (PhysicsInterpolationMode)) . field ("ord" , & self . ord) . finish () , } } } impl crate :: obj :: EngineEnum for PhysicsInterpolationMode { fn try_from_ord (ord : i32) -> Option < Self > { match ord { 0 | 1 | 2 => Some (Self { ord }) , _ => None , } } fn ord (self) -> i32 { self . ord } } impl crate :: meta :: GodotConvert for PhysicsInterpolationMode { type Via = i32 ; } impl crate :: meta :: ToGodot for PhysicsInterpolationMode { fn to_godot (& self) -> Self :: Via { < Self as crate :: obj :: EngineEnum > :: ord (* self) } } impl crate :: meta :: FromGodot for PhysicsInterpolationMode { fn try_from_godot (via : Self :: Via) -> std :: result :: Result < Self , crate :: meta :: ConvertError > { Ok (Self { ord : via }) } } # [repr (transparent)] # [derive (Copy , Clone , Eq , PartialEq , Hash ,)] pub struct DuplicateFlags { ord : i32 } impl DuplicateFlags { # [doc (alias = "DUPLICATE_SIGNALS")] # [doc = "Godot enumerator name: `DUPLICATE_SIGNALS`"] pub const SIGNALS : Self = Self { ord : 1 } ; # [doc (alias = "DUPLICATE_GROUPS")] # [doc = "Godot enumerator name: `DUPLICATE_GROUPS`"] pub const GROUPS : Self = Self { ord : 2 } ; # [doc (alias = "DUPLICATE_SCRIPTS")] # [doc = "Godot enumerator name: `DUPLICATE_SCRIPTS`"] pub const SCRIPTS : Self = Self { ord : 4 } ; # [doc (alias = "DUPLICATE_USE_INSTANTIATION")] # [doc = "Godot enumerator name: `DUPLICATE_USE_INSTANTIATION`"] pub const USE_INSTANTIATION : Self = Self { ord : 8 } ; # [allow (unreachable_patterns)] fn enumerator_name (self) -> Option < & 'static str > { match self { Self :: SIGNALS => Some ("SIGNALS") , Self :: GROUPS => Some ("GROUPS") , Self :: SCRIPTS => Some ("SCRIPTS") , Self :: USE_INSTANTIATION => Some ("USE_INSTANTIATION") , _ => None , } } } impl std :: fmt :: Debug for DuplicateFlags { fn fmt (& self , f : & mut std :: fmt :: Formatter < '_ >) -> std :: fmt :: Result { match self . enumerator_name () { Some (enumerator) => f . write_str (enumerator) , None => f . debug_struct (stringify ! (DuplicateFlags)) . field ("ord" , & self . ord) . finish () , } } } impl crate :: obj :: EngineEnum for DuplicateFlags { fn try_from_ord (ord : i32) -> Option < Self > { match ord { 1 | 2 | 4 | 8 => Some (Self { ord }) , _ => None , } } fn ord (self) -> i32 { self . ord } } impl crate :: meta :: GodotConvert for DuplicateFlags { type Via = i32 ; } impl crate :: meta :: ToGodot for DuplicateFlags { fn to_godot (& self) -> Self :: Via { < Self as crate :: obj :: EngineEnum > :: ord (* self) } } impl crate :: meta :: FromGodot for DuplicateFlags { fn try_from_godot (via : Self :: Via) -> std :: result :: Result < Self , crate :: meta :: ConvertError > { Ok (Self { ord : via }) } } # [repr (transparent)] # [derive (Copy , Clone , Eq , PartialEq , Hash ,)] pub struct InternalMode { ord : i32 } impl InternalMode { # [doc (alias = "INTERNAL_MODE_DISABLED")] # [doc = "Godot enumerator name: `INTERNAL_MODE_DISABLED`"] pub const DISABLED : Self = Self { ord : 0 } ; # [doc (alias = "INTERNAL_MODE_FRONT")] # [doc = "Godot enumerator name: `INTERNAL_MODE_FRONT`"] pub const FRONT : Self = Self { ord : 1 } ; # [doc (alias = "INTERNAL_MODE_BACK")] # [doc = "Godot enumerator name: `INTERNAL_MODE_BACK`"] pub const BACK : Self = Self { ord : 2 } ; # [allow (unreachable_patterns)] fn enumerator_name (self) -> Option < & 'static str > { match self { Self :: DISABLED => Some ("DISABLED") , Self :: FRONT => Some ("FRONT") , Self :: BACK => Some ("BACK") , _ => None , } } } impl std :: fmt :: Debug for InternalMode { fn fmt (& self , f : & mut std :: fmt :: Formatter < '_ >) -> std :: fmt :: Result { match self . enumerator_name () { Some (enumerator) => f . write_str (enumerator) , None => f . debug_struct (stringify ! (InternalMode)) . field ("ord" , & self . ord) . finish () , } } } impl crate :: obj :: EngineEnum for InternalMode { fn try_from_ord (ord : i32) -> Option < Self > { match ord { 0 | 1 | 2 => Some (Self { ord }) , _ => None , } } fn ord (self) -> i32 { self . ord } } impl crate :: meta :: GodotConvert for InternalMode { type Via = i32 ; } impl crate :: meta :: ToGodot for InternalMode { fn to_godot (& self) -> Self :: Via { < Self as crate :: obj :: EngineEnum > :: ord (* self) } } impl crate :: meta :: FromGodot for InternalMode { fn try_from_godot (via : Self :: Via) -> std :: result :: Result < Self , crate :: meta :: ConvertError > { Ok (Self { ord : via }) } } # [repr (transparent)] # [derive (Copy , Clone , Eq , PartialEq , Hash ,)] pub struct AutoTranslateMode { ord : i32 } impl AutoTranslateMode { # [doc (alias = "AUTO_TRANSLATE_MODE_INHERIT")] # [doc = "Godot enumerator name: `AUTO_TRANSLATE_MODE_INHERIT`"] pub const INHERIT : Self = Self { ord : 0 } ; # [doc (alias = "AUTO_TRANSLATE_MODE_ALWAYS")] # [doc = "Godot enumerator name: `AUTO_TRANSLATE_MODE_ALWAYS`"] pub const ALWAYS : Self = Self { ord : 1 } ; # [doc (alias = "AUTO_TRANSLATE_MODE_DISABLED")] # [doc = "Godot enumerator name: `AUTO_TRANSLATE_MODE_DISABLED`"] pub const DISABLED : Self = Self { ord : 2 } ; # [allow (unreachable_patterns)] fn enumerator_name (self) -> Option < & 'static str > { match self { Self :: INHERIT => Some ("INHERIT") , Self :: ALWAYS => Some ("ALWAYS") , Self :: DISABLED => Some ("DISABLED") , _ => None , } } } impl std :: fmt :: Debug for AutoTranslateMode { fn fmt (& self , f : & mut std :: fmt :: Formatter < '_ >) -> std :: fmt :: Result { match self . enumerator_name () { Some (enumerator) => f . write_str (enumerator) , None => f . debug_struct (stringify ! (AutoTranslateMode)) . field ("ord" , & self . ord) . finish () , } } } impl crate :: obj :: EngineEnum for AutoTranslateMode { fn try_from_ord (ord : i32) -> Option < Self > { match ord { 0 | 1 | 2 => Some (Self { ord }) , _ => None , } } fn ord (self) -> i32 { self . ord } } impl crate :: meta :: GodotConvert for AutoTranslateMode { type Via = i32 ; } impl crate :: meta :: ToGodot for AutoTranslateMode { fn to_godot (& self) -> Self :: Via { < Self as crate :: obj :: EngineEnum > :: ord (* self) } } impl crate :: meta :: FromGodot for AutoTranslateMode { fn try_from_godot (via : Self :: Via) -> std :: result :: Result < Self , crate :: meta :: ConvertError > { Ok (Self { ord : via }) } } # [doc = "Properties declared by [`Node`][super::Node], as interned engine names."] pub struct PropertyName ; impl PropertyName { pub const NAME : InternedName = InternedName :: new ("name") ; pub const UNIQUE_NAME_IN_OWNER : InternedName = InternedName :: new ("unique_name_in_owner") ; pub const SCENE_FILE_PATH : InternedName = InternedName :: new ("scene_file_path") ; pub const OWNER : InternedName = InternedName :: new ("owner") ; pub const MULTIPLAYER : InternedName = InternedName :: new ("multiplayer") ; pub const PROCESS_MODE : InternedName = InternedName :: new ("process_mode") ; pub const PROCESS_PRIORITY : InternedName = InternedName :: new ("process_priority") ; pub const PROCESS_PHYSICS_PRIORITY : InternedName = InternedName :: new ("process_physics_priority") ; pub const PROCESS_THREAD_GROUP : InternedName = InternedName :: new ("process_thread_group") ; pub const PROCESS_THREAD_GROUP_ORDER : InternedName = InternedName :: new ("process_thread_group_order") ; pub const PROCESS_THREAD_MESSAGES : InternedName = InternedName :: new ("process_thread_messages") ; pub const PHYSICS_INTERPOLATION_MODE : InternedName = InternedName :: new ("physics_interpolation_mode") ; pub const AUTO_TRANSLATE_MODE : InternedName = InternedName :: new ("auto_translate_mode") ; pub const EDITOR_DESCRIPTION : InternedName = InternedName :: new ("editor_description") ; } # [doc = "Methods declared by [`Node`][super::Node], as interned engine names."] pub struct MethodName ; impl MethodName { pub const PRINT_ORPHAN_NODES : InternedName = InternedName :: new ("print_orphan_nodes") ; pub const ADD_SIBLING : InternedName = InternedName :: new ("add_sibling") ; pub const SET_NAME : InternedName = InternedName :: new ("set_name") ; pub const GET_NAME : InternedName = InternedName :: new ("get_name") ; pub const ADD_CHILD : InternedName = InternedName :: new ("add_child") ; pub const REMOVE_CHILD : InternedName = InternedName :: new ("remove_child") ; pub const REPARENT : InternedName = InternedName :: new ("reparent") ; pub const GET_CHILD_COUNT : InternedName = InternedName :: new ("get_child_count") ; pub const GET_CHILD : InternedName = InternedName :: new ("get_child") ; pub const HAS_NODE : InternedName = InternedName :: new ("has_node") ; pub const GET_NODE : InternedName = InternedName :: new ("get_node") ; pub const GET_NODE_OR_NULL : InternedName = InternedName :: new ("get_node_or_null") ; pub const GET_PARENT : InternedName = InternedName :: new ("get_parent") ; pub const FIND_CHILD : InternedName = InternedName :: new ("find_child") ; pub const FIND_PARENT : InternedName = InternedName :: new ("find_parent") ; pub const HAS_NODE_AND_RESOURCE : InternedName = InternedName :: new ("has_node_and_resource") ; pub const IS_INSIDE_TREE : InternedName = InternedName :: new ("is_inside_tree") ; pub const IS_PART_OF_EDITED_SCENE : InternedName = InternedName :: new ("is_part_of_edited_scene") ; pub const IS_ANCESTOR_OF : InternedName = InternedName :: new ("is_ancestor_of") ; pub const IS_GREATER_THAN : InternedName = InternedName :: new ("is_greater_than") ; pub const GET_PATH : InternedName = InternedName :: new ("get_path") ; pub const GET_PATH_TO : InternedName = InternedName :: new ("get_path_to") ; pub const ADD_TO_GROUP : InternedName = InternedName :: new ("add_to_group") ; pub const REMOVE_FROM_GROUP : InternedName = InternedName :: new ("remove_from_group") ; pub const IS_IN_GROUP : InternedName = InternedName :: new ("is_in_group") ; pub const MOVE_CHILD : InternedName = InternedName :: new ("move_child") ; pub const SET_OWNER : InternedName = InternedName :: new ("set_owner") ; pub const GET_OWNER : InternedName = InternedName :: new ("get_owner") ; pub const GET_INDEX : InternedName = InternedName :: new ("get_index") ; pub const PRINT_TREE : InternedName = InternedName :: new ("print_tree") ; pub const PRINT_TREE_PRETTY : InternedName = InternedName :: new ("print_tree_pretty") ; pub const GET_TREE_STRING : InternedName = InternedName :: new ("get_tree_string") ; pub const GET_TREE_STRING_PRETTY : InternedName = InternedName :: new ("get_tree_string_pretty") ; pub const SET_SCENE_FILE_PATH : InternedName = InternedName :: new ("set_scene_file_path") ; pub const GET_SCENE_FILE_PATH : InternedName = InternedName :: new ("get_scene_file_path") ; pub const PROPAGATE_NOTIFICATION : InternedName = InternedName :: new ("propagate_notification") ; pub const SET_PHYSICS_PROCESS : InternedName = InternedName :: new ("set_physics_process") ; pub const GET_PHYSICS_PROCESS_DELTA_TIME : InternedName = InternedName :: new ("get_physics_process_delta_time") ; pub const IS_PHYSICS_PROCESSING : InternedName = InternedName :: new ("is_physics_processing") ; pub const GET_PROCESS_DELTA_TIME : InternedName = InternedName :: new ("get_process_delta_time") ; pub const SET_PROCESS : InternedName = InternedName :: new ("set_process") ; pub const SET_PROCESS_PRIORITY : InternedName = InternedName :: new ("set_process_priority") ; pub const GET_PROCESS_PRIORITY : InternedName = InternedName :: new ("get_process_priority") ; pub const SET_PHYSICS_PROCESS_PRIORITY : InternedName = InternedName :: new ("set_physics_process_priority") ; pub const GET_PHYSICS_PROCESS_PRIORITY : InternedName = InternedName :: new ("get_physics_process_priority") ; pub const IS_PROCESSING : InternedName = InternedName :: new ("is_processing") ; pub const SET_PROCESS_INPUT : InternedName = InternedName :: new ("set_process_input") ; pub const IS_PROCESSING_INPUT : InternedName = InternedName :: new ("is_processing_input") ; pub const SET_PROCESS_SHORTCUT_INPUT : InternedName = InternedName :: new ("set_process_shortcut_input") ; pub const IS_PROCESSING_SHORTCUT_INPUT : InternedName = InternedName :: new ("is_processing_shortcut_input") ; pub const SET_PROCESS_UNHANDLED_INPUT : InternedName = InternedName :: new ("set_process_unhandled_input") ; pub const IS_PROCESSING_UNHANDLED_INPUT : InternedName = InternedName :: new ("is_processing_unhandled_input") ; pub const SET_PROCESS_UNHANDLED_KEY_INPUT : InternedName = InternedName :: new ("set_process_unhandled_key_input") ; pub const IS_PROCESSING_UNHANDLED_KEY_INPUT : InternedName = InternedName :: new ("is_processing_unhandled_key_input") ; pub const SET_PROCESS_MODE : InternedName = InternedName :: new ("set_process_mode") ; pub const GET_PROCESS_MODE : InternedName = InternedName :: new ("get_process_mode") ; pub const CAN_PROCESS : InternedName = InternedName :: new ("can_process") ; pub const SET_PROCESS_THREAD_GROUP : InternedName = InternedName :: new ("set_process_thread_group") ; pub const GET_PROCESS_THREAD_GROUP : InternedName = InternedName :: new ("get_process_thread_group") ; pub const SET_PROCESS_THREAD_MESSAGES : InternedName = InternedName :: new ("set_process_thread_messages") ; pub const GET_PROCESS_THREAD_MESSAGES : InternedName = InternedName :: new ("get_process_thread_messages") ; pub const SET_PROCESS_THREAD_GROUP_ORDER : InternedName = InternedName :: new ("set_process_thread_group_order") ; pub const GET_PROCESS_THREAD_GROUP_ORDER : InternedName = InternedName :: new ("get_process_thread_group_order") ; pub const SET_DISPLAY_FOLDED : InternedName = InternedName :: new ("set_display_folded") ; pub const IS_DISPLAYED_FOLDED : InternedName = InternedName :: new ("is_displayed_folded") ; pub const SET_PROCESS_INTERNAL : InternedName = InternedName :: new ("set_process_internal") ; pub const IS_PROCESSING_INTERNAL : InternedName = InternedName :: new ("is_processing_internal") ; pub const SET_PHYSICS_PROCESS_INTERNAL : InternedName = InternedName :: new ("set_physics_process_internal") ; pub const IS_PHYSICS_PROCESSING_INTERNAL : InternedName = InternedName :: new ("is_physics_processing_internal") ; pub const SET_PHYSICS_INTERPOLATION_MODE : InternedName = InternedName :: new ("set_physics_interpolation_mode") ; pub const GET_PHYSICS_INTERPOLATION_MODE : InternedName = InternedName :: new ("get_physics_interpolation_mode") ; pub const IS_PHYSICS_INTERPOLATED : InternedName = InternedName :: new ("is_physics_interpolated") ; pub const IS_PHYSICS_INTERPOLATED_AND_ENABLED : InternedName = InternedName :: new ("is_physics_interpolated_and_enabled") ; pub const RESET_PHYSICS_INTERPOLATION : InternedName = InternedName :: new ("reset_physics_interpolation") ; pub const SET_AUTO_TRANSLATE_MODE : InternedName = InternedName :: new ("set_auto_translate_mode") ; pub const GET_AUTO_TRANSLATE_MODE : InternedName = InternedName :: new ("get_auto_translate_mode") ; pub const GET_WINDOW : InternedName = InternedName :: new ("get_window") ; pub const GET_LAST_EXCLUSIVE_WINDOW : InternedName = InternedName :: new ("get_last_exclusive_window") ; pub const GET_TREE : InternedName = InternedName :: new ("get_tree") ; pub const DUPLICATE : InternedName = InternedName :: new ("duplicate") ; pub const REPLACE_BY : InternedName = InternedName :: new ("replace_by") ; pub const SET_SCENE_INSTANCE_LOAD_PLACEHOLDER : InternedName = InternedName :: new ("set_scene_instance_load_placeholder") ; pub const GET_SCENE_INSTANCE_LOAD_PLACEHOLDER : InternedName = InternedName :: new ("get_scene_instance_load_placeholder") ; pub const SET_EDITABLE_INSTANCE : InternedName = InternedName :: new ("set_editable_instance") ; pub const IS_EDITABLE_INSTANCE : InternedName = InternedName :: new ("is_editable_instance") ; pub const GET_VIEWPORT : InternedName = InternedName :: new ("get_viewport") ; pub const QUEUE_FREE : InternedName = InternedName :: new ("queue_free") ; pub const REQUEST_READY : InternedName = InternedName :: new ("request_ready") ; pub const IS_NODE_READY : InternedName = InternedName :: new ("is_node_ready") ; pub const SET_MULTIPLAYER_AUTHORITY : InternedName = InternedName :: new ("set_multiplayer_authority") ; pub const GET_MULTIPLAYER_AUTHORITY : InternedName = InternedName :: new ("get_multiplayer_authority") ; pub const IS_MULTIPLAYER_AUTHORITY : InternedName = InternedName :: new ("is_multiplayer_authority") ; pub const RPC_CONFIG : InternedName = InternedName :: new ("rpc_config") ; pub const SET_EDITOR_DESCRIPTION : InternedName = InternedName :: new ("set_editor_description") ; pub const GET_EDITOR_DESCRIPTION : InternedName = InternedName :: new ("get_editor_description") ; pub const SET_UNIQUE_NAME_IN_OWNER : InternedName = InternedName :: new ("set_unique_name_in_owner") ; pub const IS_UNIQUE_NAME_IN_OWNER : InternedName = InternedName :: new ("is_unique_name_in_owner") ; pub const ATR : InternedName = InternedName :: new ("atr") ; pub const ATR_N : InternedName = InternedName :: new ("atr_n") ; pub const RPC : InternedName = InternedName :: new ("rpc") ; pub const RPC_ID : InternedName = InternedName :: new ("rpc_id") ; pub const UPDATE_CONFIGURATION_WARNINGS : InternedName = InternedName :: new ("update_configuration_warnings") ; pub const CALL_DEFERRED_THREAD_GROUP : InternedName = InternedName :: new ("call_deferred_thread_group") ; pub const SET_DEFERRED_THREAD_GROUP : InternedName = InternedName :: new ("set_deferred_thread_group") ; pub const NOTIFY_DEFERRED_THREAD_GROUP : InternedName = InternedName :: new ("notify_deferred_thread_group") ; pub const CALL_THREAD_SAFE : InternedName = InternedName :: new ("call_thread_safe") ; pub const SET_THREAD_SAFE : InternedName = InternedName :: new ("set_thread_safe") ; pub const NOTIFY_THREAD_SAFE : InternedName = InternedName :: new ("notify_thread_safe") ; } # [doc = "Signals declared by [`Node`][super::Node], as interned engine names."] pub struct SignalName ; impl SignalName { pub const READY : InternedName = InternedName :: new ("ready") ; pub const RENAMED : InternedName = InternedName :: new ("renamed") ; pub const TREE_ENTERED : InternedName = InternedName :: new ("tree_entered") ; pub const TREE_EXITING : InternedName = InternedName :: new ("tree_exiting") ; pub const TREE_EXITED : InternedName = InternedName :: new ("tree_exited") ; pub const CHILD_ENTERED_TREE : InternedName = InternedName :: new ("child_entered_tree") ; pub const CHILD_EXITING_TREE : InternedName = InternedName :: new ("child_exiting_tree") ; pub const CHILD_ORDER_CHANGED : InternedName = InternedName :: new ("child_order_changed") ; pub const REPLACING_BY : InternedName = InternedName :: new ("replacing_by") ; pub const EDITOR_DESCRIPTION_CHANGED : InternedName = InternedName :: new ("editor_description_changed") ; } # [doc = "A collection of signals for the [`Node`][crate::classes::Node] class."] pub struct SignalsOfNode < 'c > { __base : crate :: classes :: object :: SignalsOfObject < 'c > , } impl < 'c > SignalsOfNode < 'c > { # [doc (hidden)] pub fn __new (object : SignalObject < 'c >) -> Self { Self { __base : crate :: classes :: object :: SignalsOfObject :: __new (object) } } # [doc (hidden)] pub fn __object (& self) -> SignalObject < 'c > { self . __base . __object () } # [doc = "Signature: `()`"] pub fn ready (& mut self) -> SigReady < 'c > { SigReady { typed : TypedSignal :: __new (self . __object () , "ready") , } } # [doc = "Signature: `()`"] pub fn renamed (& mut self) -> SigRenamed < 'c > { SigRenamed { typed : TypedSignal :: __new (self . __object () , "renamed") , } } # [doc = "Signature: `()`"] pub fn tree_entered (& mut self) -> SigTreeEntered < 'c > { SigTreeEntered { typed : TypedSignal :: __new (self . __object () , "tree_entered") , } } # [doc = "Signature: `()`"] pub fn tree_exiting (& mut self) -> SigTreeExiting < 'c > { SigTreeExiting { typed : TypedSignal :: __new (self . __object () , "tree_exiting") , } } # [doc = "Signature: `()`"] pub fn tree_exited (& mut self) -> SigTreeExited < 'c > { SigTreeExited { typed : TypedSignal :: __new (self . __object () , "tree_exited") , } } # [doc = "Signature: `(node: Option<Gd<Node>>)`"] pub fn child_entered_tree (& mut self) -> SigChildEnteredTree < 'c > { SigChildEnteredTree { typed : TypedSignal :: __new (self . __object () , "child_entered_tree") , } } # [doc = "Signature: `(node: Option<Gd<Node>>)`"] pub fn child_exiting_tree (& mut self) -> SigChildExitingTree < 'c > { SigChildExitingTree { typed : TypedSignal :: __new (self . __object () , "child_exiting_tree") , } } # [doc = "Signature: `()`"] pub fn child_order_changed (& mut self) -> SigChildOrderChanged < 'c > { SigChildOrderChanged { typed : TypedSignal :: __new (self . __object () , "child_order_changed") , } } # [doc = "Signature: `(node: Option<Gd<Node>>)`"] pub fn replacing_by (& mut self) -> SigReplacingBy < 'c > { SigReplacingBy { typed : TypedSignal :: __new (self . __object () , "replacing_by") , } } # [doc = "Signature: `(node: Option<Gd<Node>>)`"] pub fn editor_description_changed (& mut self) -> SigEditorDescriptionChanged < 'c > { SigEditorDescriptionChanged { typed : TypedSignal :: __new (self . __object () , "editor_description_changed") , } } } impl < 'c > std :: ops :: Deref for SignalsOfNode < 'c > { type Target = crate :: classes :: object :: SignalsOfObject < 'c > ; fn deref (& self) -> & Self :: Target { & self . __base } } impl std :: ops :: DerefMut for SignalsOfNode < '_ > { fn deref_mut (& mut self) -> & mut Self :: Target { & mut self . __base } } type TypedSigReady < 'c > = TypedSignal < 'c , () > ; pub struct SigReady < 'c > { typed : TypedSigReady < 'c > , } impl SigReady < '_ > { pub fn emit (& mut self ,) { self . typed . emit_tuple (()) ; } } impl < 'c > std :: ops :: Deref for SigReady < 'c > { type Target = TypedSigReady < 'c > ; fn deref (& self) -> & Self :: Target { & self . typed } } impl std :: ops :: DerefMut for SigReady < '_ > { fn deref_mut (& mut self) -> & mut Self :: Target { & mut self . typed } } type TypedSigRenamed < 'c > = TypedSignal < 'c , () > ; pub struct SigRenamed < 'c > { typed : TypedSigRenamed < 'c > , } impl SigRenamed < '_ > { pub fn emit (& mut self ,) { self . typed . emit_tuple (()) ; } } impl < 'c > std :: ops :: Deref for SigRenamed < 'c > { type Target = TypedSigRenamed < 'c > ; fn deref (& self) -> & Self :: Target { & self . typed } } impl std :: ops :: DerefMut for SigRenamed < '_ > { fn deref_mut (& mut self) -> & mut Self :: Target { & mut self . typed } } type TypedSigTreeEntered < 'c > = TypedSignal < 'c , () > ; pub struct SigTreeEntered < 'c > { typed : TypedSigTreeEntered < 'c > , } impl SigTreeEntered < '_ > { pub fn emit (& mut self ,) { self . typed . emit_tuple (()) ; } } impl < 'c > std :: ops :: Deref for SigTreeEntered < 'c > { type Target = TypedSigTreeEntered < 'c > ; fn deref (& self) -> & Self :: Target { & self . typed } } impl std :: ops :: DerefMut for SigTreeEntered < '_ > { fn deref_mut (& mut self) -> & mut Self :: Target { & mut self . typed } } type TypedSigTreeExiting < 'c > = TypedSignal < 'c , () > ; pub struct SigTreeExiting < 'c > { typed : TypedSigTreeExiting < 'c > , } impl SigTreeExiting < '_ > { pub fn emit (& mut self ,) { self . typed . emit_tuple (()) ; } } impl < 'c > std :: ops :: Deref for SigTreeExiting < 'c > { type Target = TypedSigTreeExiting < 'c > ; fn deref (& self) -> & Self :: Target { & self . typed } } impl std :: ops :: DerefMut for SigTreeExiting < '_ > { fn deref_mut (& mut self) -> & mut Self :: Target { & mut self . typed } } type TypedSigTreeExited < 'c > = TypedSignal < 'c , () > ; pub struct SigTreeExited < 'c > { typed : TypedSigTreeExited < 'c > , } impl SigTreeExited < '_ > { pub fn emit (& mut self ,) { self . typed . emit_tuple (()) ; } } impl < 'c > std :: ops :: Deref for SigTreeExited < 'c > { type Target = TypedSigTreeExited < 'c > ; fn deref (& self) -> & Self :: Target { & self . typed } } impl std :: ops :: DerefMut for SigTreeExited < '_ > { fn deref_mut (& mut self) -> & mut Self :: Target { & mut self . typed } } type TypedSigChildEnteredTree < 'c > = TypedSignal < 'c , (Option < Gd < crate :: classes :: Node > > ,) > ; pub struct SigChildEnteredTree < 'c > { typed : TypedSigChildEnteredTree < 'c > , } impl SigChildEnteredTree < '_ > { pub fn emit (& mut self , node : Option < Gd < crate :: classes :: Node > > ,) { self . typed . emit_tuple ((node ,)) ; } } impl < 'c > std :: ops :: Deref for SigChildEnteredTree < 'c > { type Target = TypedSigChildEnteredTree < 'c > ; fn deref (& self) -> & Self :: Target { & self . typed } } impl std :: ops :: DerefMut for SigChildEnteredTree < '_ > { fn deref_mut (& mut self) -> & mut Self :: Target { & mut self . typed } } type TypedSigChildExitingTree < 'c > = TypedSignal < 'c , (Option < Gd < crate :: classes :: Node > > ,) > ; pub struct SigChildExitingTree < 'c > { typed : TypedSigChildExitingTree < 'c > , } impl SigChildExitingTree < '_ > { pub fn emit (& mut self , node : Option < Gd < crate :: classes :: Node > > ,) { self . typed . emit_tuple ((node ,)) ; } } impl < 'c > std :: ops :: Deref for SigChildExitingTree < 'c > { type Target = TypedSigChildExitingTree < 'c > ; fn deref (& self) -> & Self :: Target { & self . typed } } impl std :: ops :: DerefMut for SigChildExitingTree < '_ > { fn deref_mut (& mut self) -> & mut Self :: Target { & mut self . typed } } type TypedSigChildOrderChanged < 'c > = TypedSignal < 'c , () > ; pub struct SigChildOrderChanged < 'c > { typed : TypedSigChildOrderChanged < 'c > , } impl SigChildOrderChanged < '_ > { pub fn emit (& mut self ,) { self . typed . emit_tuple (()) ; } } impl < 'c > std :: ops :: Deref for SigChildOrderChanged < 'c > { type Target = TypedSigChildOrderChanged < 'c > ; fn deref (& self) -> & Self :: Target { & self . typed } } impl std :: ops :: DerefMut for SigChildOrderChanged < '_ > { fn deref_mut (& mut self) -> & mut Self :: Target { & mut self . typed } } type TypedSigReplacingBy < 'c > = TypedSignal < 'c , (Option < Gd < crate :: classes :: Node > > ,) > ; pub struct SigReplacingBy < 'c > { typed : TypedSigReplacingBy < 'c > , } impl SigReplacingBy < '_ > { pub fn emit (& mut self , node : Option < Gd < crate :: classes :: Node > > ,) { self . typed . emit_tuple ((node ,)) ; } } impl < 'c > std :: ops :: Deref for SigReplacingBy < 'c > { type Target = TypedSigReplacingBy < 'c > ; fn deref (& self) -> & Self :: Target { & self . typed } } impl std :: ops :: DerefMut for SigReplacingBy < '_ > { fn deref_mut (& mut self) -> & mut Self :: Target { & mut self . typed } } type TypedSigEditorDescriptionChanged < 'c > = TypedSignal < 'c , (Option < Gd < crate :: classes :: Node > > ,) > ; pub struct SigEditorDescriptionChanged < 'c > { typed : TypedSigEditorDescriptionChanged < 'c > , } impl SigEditorDescriptionChanged < '_ > { pub fn emit (& mut self , node : Option < Gd < crate :: classes :: Node > > ,) { self . typed . emit_tuple ((node ,)) ; } } impl < 'c > std :: ops :: Deref for SigEditorDescriptionChanged < 'c > { type Target = TypedSigEditorDescriptionChanged < 'c > ; fn deref (& self) -> & Self :: Target { & self . typed } } impl std :: ops :: DerefMut for SigEditorDescriptionChanged < '_ > { fn deref_mut (& mut self) -> & mut Self :: Target { & mut self . typed } }