pub struct ClassCoreMethodTable { function_pointers : Vec < crate :: ClassMethodBind > , } impl ClassCoreMethodTable { pub const CLASS_COUNT : usize = 3usize ; pub const METHOD_COUNT : usize = 56usize ; # [allow (clippy :: missing_safety_doc)] pub unsafe fn load (interface : & crate :: GDExtensionInterface , string_names : & mut crate :: StringCache ,) -> Self { let fetch_fptr = interface . classdb_get_method_bind ; let mut function_pointers = Vec :: with_capacity (56usize) ; load_object_methods (& mut function_pointers , string_names , fetch_fptr) ; load_ref_counted_methods (& mut function_pointers , string_names , fetch_fptr) ; load_resource_methods (& mut function_pointers , string_names , fetch_fptr) ; Self { function_pointers } } # [inline (always)] pub fn fptr_by_index (& self , index : usize) -> crate :: ClassMethodBind { unsafe { * self . function_pointers . get_unchecked (index) } } } fn load_object_methods (function_pointers : & mut Vec < crate :: ClassMethodBind > , string_names : & mut crate :: StringCache , fetch_fptr : crate :: GDExtensionInterfaceClassdbGetMethodBind ,) { let sname_object = string_names . fetch ("Object") ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_object) , "Object" , "get_class" , 201670096i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_object) , "Object" , "is_class" , 3927539163i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_object) , "Object" , "set" , 3776071444i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_object) , "Object" , "get" , 2760726917i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_object) , "Object" , "set_indexed" , 3500910842i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_object) , "Object" , "get_indexed" , 4006125091i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_object) , "Object" , "property_can_revert" , 2619796661i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_object) , "Object" , "property_get_revert" , 2760726917i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_object) , "Object" , "notification" , 4023243586i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_object) , "Object" , "to_string" , 2841200299i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_object) , "Object" , "set_script" , 1114965689i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_object) , "Object" , "get_script" , 1214101251i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_object) , "Object" , "set_meta" , 3776071444i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_object) , "Object" , "remove_meta" , 3304788590i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_object) , "Object" , "get_meta" , 3990617847i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_object) , "Object" , "has_meta" , 2619796661i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_object) , "Object" , "has_user_signal" , 2619796661i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_object) , "Object" , "remove_user_signal" , 3304788590i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_object) , "Object" , "emit_signal" , 4047867050i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_object) , "Object" , "call" , 3400424181i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_object) , "Object" , "call_deferred" , 3400424181i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_object) , "Object" , "set_deferred" , 3776071444i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_object) , "Object" , "has_method" , 2619796661i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_object) , "Object" , "get_method_argument_count" , 2458036349i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_object) , "Object" , "has_signal" , 2619796661i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_object) , "Object" , "connect" , 1518946055i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_object) , "Object" , "disconnect" , 1874754934i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_object) , "Object" , "is_connected" , 768136979i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_object) , "Object" , "set_block_signals" , 2586408642i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_object) , "Object" , "is_blocking_signals" , 36873697i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_object) , "Object" , "notify_property_list_changed" , 3218959716i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_object) , "Object" , "set_message_translation" , 2586408642i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_object) , "Object" , "can_translate_messages" , 36873697i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_object) , "Object" , "tr" , 2475554935i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_object) , "Object" , "tr_n" , 4021311862i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_object) , "Object" , "is_queued_for_deletion" , 36873697i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_object) , "Object" , "cancel_free" , 3218959716i64)) ; } fn load_ref_counted_methods (function_pointers : & mut Vec < crate :: ClassMethodBind > , string_names : & mut crate :: StringCache , fetch_fptr : crate :: GDExtensionInterfaceClassdbGetMethodBind ,) { let sname_ref_counted = string_names . fetch ("RefCounted") ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_ref_counted) , "RefCounted" , "init_ref" , 2240911060i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_ref_counted) , "RefCounted" , "reference" , 2240911060i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_ref_counted) , "RefCounted" , "unreference" , 2240911060i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_ref_counted) , "RefCounted" , "get_reference_count" , 3905245786i64)) ; } fn load_resource_methods (function_pointers : & mut Vec < crate :: ClassMethodBind > , string_names : & mut crate :: StringCache , fetch_fptr : crate :: GDExtensionInterfaceClassdbGetMethodBind ,) { let sname_resource = string_names . fetch ("Resource") ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_resource) , "Resource" , "set_path" , 83702148i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_resource) , "Resource" , "take_over_path" , 83702148i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_resource) , "Resource" , "get_path" , 201670096i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_resource) , "Resource" , "set_name" , 83702148i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_resource) , "Resource" , "get_name" , 201670096i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_resource) , "Resource" , "get_rid" , 2944877500i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_resource) , "Resource" , "set_local_to_scene" , 2586408642i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_resource) , "Resource" , "is_local_to_scene" , 36873697i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_resource) , "Resource" , "get_local_scene" , 3160264692i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_resource) , "Resource" , "setup_local_to_scene" , 3218959716i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_resource) , "Resource" , "generate_scene_unique_id" , 2841200299i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_resource) , "Resource" , "set_scene_unique_id" , 83702148i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_resource) , "Resource" , "get_scene_unique_id" , 201670096i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_resource) , "Resource" , "emit_changed" , 3218959716i64)) ; function_pointers . push (crate :: load_class_method (fetch_fptr , string_names , Some (sname_resource) , "Resource" , "duplicate" , 482882304i64)) ; }