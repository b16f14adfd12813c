pub struct ClassEditorMethodTable { function_pointers : Vec < crate :: ClassMethodBind > , } impl ClassEditorMethodTable { pub const CLASS_COUNT : usize = 0usize ; pub const METHOD_COUNT : usize = 0usize ; # [allow (clippy :: missing_safety_doc)] # [allow (unused_variables)] pub unsafe fn load (interface : & crate :: GDExtensionInterface , string_names : & mut crate :: StringCache ,) -> Self { let function_pointers = Vec :: new () ; Self { function_pointers } } # [inline (always)] pub fn fptr_by_index (& self , index : usize) -> crate :: ClassMethodBind { unsafe { * self . function_pointers . get_unchecked (index) } } }