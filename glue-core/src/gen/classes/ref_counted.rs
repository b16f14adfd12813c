# ! [doc = "Sidecar module for class [`RefCounted`][crate::classes::RefCounted]."] # [allow (unused_imports)] use crate :: builtin :: * ; # [allow (unused_imports)] use crate :: meta :: { AsArg , AsObjectArg , CowArg , InternedName , ObjectArg , Signature } ; # [allow (unused_imports)] use crate :: obj :: Gd ; # [allow (unused_imports)] use crate :: signal :: { SignalObject , TypedSignal } ; use crate :: sys ; pub (super) mod re_export { use super :: * ; # [doc = "Godot class `RefCounted`.\n\nInherits [`Object`][crate::classes::Object].\n\nRelated symbols (default-param builders, enums, interned names, signals) are in [`ref_counted`][crate::classes::ref_counted]."] # [derive (Debug)] # [repr (C)] pub struct RefCounted { object_ptr : sys :: GDExtensionObjectPtr , } impl RefCounted { pub (crate) fn init_ref (& mut self ,) -> bool { type CallRet = bool ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_core_api () . fptr_by_index (37usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "RefCounted" , "init_ref" , self . object_ptr , args ,) } } pub (crate) fn reference (& mut self ,) -> bool { type CallRet = bool ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_core_api () . fptr_by_index (38usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "RefCounted" , "reference" , self . object_ptr , args ,) } } pub (crate) fn unreference (& mut self ,) -> bool { type CallRet = bool ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_core_api () . fptr_by_index (39usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "RefCounted" , "unreference" , self . object_ptr , args ,) } } pub fn get_reference_count (& self ,) -> i32 { type CallRet = i32 ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_core_api () . fptr_by_index (40usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "RefCounted" , "get_reference_count" , self . object_ptr , args ,) } } } impl crate :: obj :: GodotClass for RefCounted { const CLASS_NAME : & 'static str = "RefCounted" ; type Base = crate :: classes :: Object ; type Memory = crate :: obj :: MemRefCounted ; const INIT_LEVEL : crate :: init :: InitLevel = crate :: init :: InitLevel :: Core ; } impl crate :: obj :: EngineClass for RefCounted { fn as_object_ptr (& self) -> sys :: GDExtensionObjectPtr { self . object_ptr } } unsafe impl crate :: obj :: Inherits < crate :: classes :: Object > for RefCounted { } impl crate :: obj :: Instantiable for RefCounted { } impl std :: ops :: Deref for RefCounted { type Target = crate :: classes :: Object ; fn deref (& self) -> & Self :: Target { unsafe { std :: mem :: transmute :: < & Self , & Self :: Target > (self) } } } impl std :: ops :: DerefMut for RefCounted { fn deref_mut (& mut self) -> & mut Self :: Target { unsafe { std :: mem :: transmute :: < & mut Self , & mut Self :: Target > (self) } } } } # [doc = "Properties declared by [`RefCounted`][super::RefCounted], as interned engine names."] pub struct PropertyName ; impl PropertyName { } # [doc = "Methods declared by [`RefCounted`][super::RefCounted], as interned engine names."] pub struct MethodName ; impl MethodName { pub const INIT_REF : InternedName = InternedName :: new ("init_ref") ; pub const REFERENCE : InternedName = InternedName :: new ("reference") ; pub const UNREFERENCE : InternedName = InternedName :: new ("unreference") ; pub const GET_REFERENCE_COUNT : InternedName = InternedName :: new ("get_reference_count") ; } # [doc = "Signals declared by [`RefCounted`][super::RefCounted], as interned engine names."] pub struct SignalName ; impl SignalName { }