# ! [doc = "Sidecar module for class [`Resource`][crate::classes::Resource]."] # [allow (unused_imports)] use crate :: builtin :: * ; # [allow (unused_imports)] use crate :: meta :: { AsArg , AsObjectArg , CowArg , InternedName , ObjectArg , Signature } ; # [allow (unused_imports)] use crate :: obj :: Gd ; # [allow (unused_imports)] use crate :: signal :: { SignalObject , TypedSignal } ; use crate :: sys ; pub (super) mod re_export { use super :: * ; # [doc = "Godot class `Resource`.\n\nInherits [`RefCounted`][crate::classes::RefCounted].\n\nRelated symbols (default-param builders, enums, interned names, signals) are in [`resource`][crate::classes::resource]."] # [derive (Debug)] # [repr (C)] pub struct Resource { object_ptr : sys :: GDExtensionObjectPtr , } impl Resource { pub fn set_path (& mut self , path : impl AsArg < GString > ,) { type CallRet = () ; type CallParams < 'a0 , > = (CowArg < 'a0 , GString > ,) ; let args = (path . into_arg () ,) ; unsafe { let method_bind = sys :: class_core_api () . fptr_by_index (41usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Resource" , "set_path" , self . object_ptr , args ,) } } pub fn take_over_path (& mut self , path : impl AsArg < GString > ,) { type CallRet = () ; type CallParams < 'a0 , > = (CowArg < 'a0 , GString > ,) ; let args = (path . into_arg () ,) ; unsafe { let method_bind = sys :: class_core_api () . fptr_by_index (42usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Resource" , "take_over_path" , self . object_ptr , args ,) } } pub fn get_path (& self ,) -> GString { type CallRet = GString ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_core_api () . fptr_by_index (43usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Resource" , "get_path" , self . object_ptr , args ,) } } pub fn set_name (& mut self , name : impl AsArg < GString > ,) { type CallRet = () ; type CallParams < 'a0 , > = (CowArg < 'a0 , GString > ,) ; let args = (name . into_arg () ,) ; unsafe { let method_bind = sys :: class_core_api () . fptr_by_index (44usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Resource" , "set_name" , self . object_ptr , args ,) } } pub fn get_name (& self ,) -> GString { type CallRet = GString ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_core_api () . fptr_by_index (45usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Resource" , "get_name" , self . object_ptr , args ,) } } pub fn get_rid (& self ,) -> Rid { type CallRet = Rid ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_core_api () . fptr_by_index (46usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Resource" , "get_rid" , self . object_ptr , args ,) } } pub fn set_local_to_scene (& mut self , enable : bool ,) { type CallRet = () ; type CallParams = (bool ,) ; let args = (enable ,) ; unsafe { let method_bind = sys :: class_core_api () . fptr_by_index (47usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Resource" , "set_local_to_scene" , self . object_ptr , args ,) } } pub fn is_local_to_scene (& self ,) -> bool { type CallRet = bool ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_core_api () . fptr_by_index (48usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Resource" , "is_local_to_scene" , self . object_ptr , args ,) } } pub fn get_local_scene (& self ,) -> Option < Gd < crate :: classes :: Node > > { type CallRet = Option < Gd < crate :: classes :: Node > > ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_core_api () . fptr_by_index (49usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Resource" , "get_local_scene" , self . object_ptr , args ,) } } pub fn setup_local_to_scene (& mut self ,) { type CallRet = () ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_core_api () . fptr_by_index (50usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Resource" , "setup_local_to_scene" , self . object_ptr , args ,) } } pub fn generate_scene_unique_id () -> GString { type CallRet = GString ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_core_api () . fptr_by_index (51usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Resource" , "generate_scene_unique_id" , std :: ptr :: null_mut () , args ,) } } pub fn set_scene_unique_id (& mut self , id : impl AsArg < GString > ,) { type CallRet = () ; type CallParams < 'a0 , > = (CowArg < 'a0 , GString > ,) ; let args = (id . into_arg () ,) ; unsafe { let method_bind = sys :: class_core_api () . fptr_by_index (52usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Resource" , "set_scene_unique_id" , self . object_ptr , args ,) } } pub fn get_scene_unique_id (& self ,) -> GString { type CallRet = GString ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_core_api () . fptr_by_index (53usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Resource" , "get_scene_unique_id" , self . object_ptr , args ,) } } pub fn emit_changed (& mut self ,) { type CallRet = () ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_core_api () . fptr_by_index (54usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Resource" , "emit_changed" , self . object_ptr , args ,) } } pub (crate) fn duplicate_full (& self , subresources : bool ,) -> Option < Gd < crate :: classes :: Resource > > { type CallRet = Option < Gd < crate :: classes :: Resource > > ; type CallParams = (bool ,) ; let args = (subresources ,) ; unsafe { let method_bind = sys :: class_core_api () . fptr_by_index (55usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "Resource" , "duplicate" , self . object_ptr , args ,) } } # [inline] pub fn duplicate (& self ,) -> Option < Gd < crate :: classes :: Resource > > { self . duplicate_ex () . done () } # [inline] pub fn duplicate_ex < 'ex > (& 'ex self ,) -> super :: ExDuplicate < 'ex > { super :: ExDuplicate :: new (self ,) } # [doc = "Typed signals of this class and its bases; see [`SignalsOfResource`][super::resource::SignalsOfResource]."] pub fn signals (& mut self) -> super :: SignalsOfResource < '_ > { super :: SignalsOfResource :: __new (crate :: signal :: SignalObject :: __new (self . object_ptr)) } } impl crate :: obj :: GodotClass for Resource { const CLASS_NAME : & 'static str = "Resource" ; type Base = crate :: classes :: RefCounted ; type Memory = crate :: obj :: MemRefCounted ; const INIT_LEVEL : crate :: init :: InitLevel = crate :: init :: InitLevel :: Core ; } impl crate :: obj :: EngineClass for Resource { fn as_object_ptr (& self) -> sys :: GDExtensionObjectPtr { self . object_ptr } } unsafe impl crate :: obj :: Inherits < crate :: classes :: RefCounted > for Resource { } unsafe impl crate :: obj :: Inherits < crate :: classes :: Object > for Resource { } impl crate :: obj :: Instantiable for Resource { } impl std :: ops :: Deref for Resource { type Target = crate :: classes :: RefCounted ; fn deref (& self) -> & Self :: Target { unsafe { std :: mem :: transmute :: < & Self , & Self :: Target > (self) } } } impl std :: ops :: DerefMut for Resource { fn deref_mut (& mut self) -> & mut Self :: Target { unsafe { std :: mem :: transmute :: < & mut Self , & mut Self :: Target > (self) } } } } # [doc = "Default-param extender for [`Resource::duplicate_ex`][super::Resource::duplicate_ex]."] # [must_use] pub struct ExDuplicate < 'ex > { surround_object : & 'ex re_export :: Resource , subresources : bool , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExDuplicate < 'ex > { fn new (surround_object : & 'ex re_export :: Resource ,) -> Self { Self { surround_object , subresources : false , } } # [inline] pub fn subresources (self , value : bool) -> Self { Self { subresources : value , .. self } } # [inline] pub fn done (self) -> Option < Gd < crate :: classes :: Resource > > { re_export :: Resource :: duplicate_full (self . surround_object , self . subresources ,) } } # [doc = "Properties declared by [`Resource`][super::Resource], as interned engine names."] pub struct PropertyName ; impl PropertyName { pub const RESOURCE_LOCAL_TO_SCENE : InternedName = InternedName :: new ("resource_local_to_scene") ; pub const RESOURCE_PATH : InternedName = InternedName :: new ("resource_path") ; pub const RESOURCE_NAME : InternedName = InternedName :: new ("resource_name") ; pub const RESOURCE_SCENE_UNIQUE_ID : InternedName = InternedName :: new ("resource_scene_unique_id") ; } # [doc = "Methods declared by [`Resource`][super::Resource], as interned engine names."] pub struct MethodName ; impl MethodName { pub const SET_PATH : InternedName = InternedName :: new ("set_path") ; pub const TAKE_OVER_PATH : InternedName = InternedName :: new ("take_over_path") ; pub const GET_PATH : InternedName = InternedName :: new ("get_path") ; pub const SET_NAME : InternedName = InternedName :: new ("set_name") ; pub const GET_NAME : InternedName = InternedName :: new ("get_name") ; pub const GET_RID : InternedName = InternedName :: new ("get_rid") ; pub const SET_LOCAL_TO_SCENE : InternedName = InternedName :: new ("set_local_to_scene") ; pub const IS_LOCAL_TO_SCENE : InternedName = InternedName :: new ("is_local_to_scene") ; pub const GET_LOCAL_SCENE : InternedName = InternedName :: new ("get_local_scene") ; pub const SETUP_LOCAL_TO_SCENE : InternedName = InternedName :: new ("setup_local_to_scene") ; pub const GENERATE_SCENE_UNIQUE_ID : InternedName = InternedName :: new ("generate_scene_unique_id") ; pub const SET_SCENE_UNIQUE_ID : InternedName = InternedName :: new ("set_scene_unique_id") ; pub const GET_SCENE_UNIQUE_ID : InternedName = InternedName :: new ("get_scene_unique_id") ; pub const EMIT_CHANGED : InternedName = InternedName :: new ("emit_changed") ; pub const DUPLICATE : InternedName = InternedName :: new ("duplicate") ; } # [doc = "Signals declared by [`Resource`][super::Resource], as interned engine names."] pub struct SignalName ; impl SignalName { pub const CHANGED : InternedName = InternedName :: new ("changed") ; pub const SETUP_LOCAL_TO_SCENE_REQUESTED : InternedName = InternedName :: new ("setup_local_to_scene_requested") ; } # [doc = "A collection of signals for the [`Resource`][crate::classes::Resource] class."] pub struct SignalsOfResource < 'c > { __base : crate :: classes :: object :: SignalsOfObject < 'c > , } impl < 'c > SignalsOfResource < 'c > { # [doc (hidden)] pub fn __new (object : SignalObject < 'c >) -> Self { Self { __base : crate :: classes :: object :: SignalsOfObject :: __new (object) } } # [doc (hidden)] pub fn __object (& self) -> SignalObject < 'c > { self . __base . __object () } # [doc = "Signature: `()`"] pub fn changed (& mut self) -> SigChanged < 'c > { SigChanged { typed : TypedSignal :: __new (self . __object () , "changed") , } } # [doc = "Signature: `()`"] pub fn setup_local_to_scene_requested (& mut self) -> SigSetupLocalToSceneRequested < 'c > { SigSetupLocalToSceneRequested { typed : TypedSignal :: __new (self . __object () , "setup_local_to_scene_requested") , } } } impl < 'c > std :: ops :: Deref for SignalsOfResource < 'c > { type Target = crate :: classes :: object :: SignalsOfObject < 'c > ; fn deref (& self) -> & Self :: Target { & self . __base } } impl std :: ops :: DerefMut for SignalsOfResource < '_ > { fn deref_mut (& mut self) -> & mut Self :: Target { & mut self . __base } } type TypedSigChanged < 'c > = TypedSignal < 'c , () > ; pub struct SigChanged < 'c > { typed : TypedSigChanged < 'c > , } impl SigChanged < '_ > { pub fn emit (& mut self ,) { self . typed . emit_tuple (()) ; } } impl < 'c > std :: ops :: Deref for SigChanged < 'c > { type Target = TypedSigChanged < 'c > ; fn deref (& self) -> & Self :: Target { & self . typed } } impl std :: ops :: DerefMut for SigChanged < '_ > { fn deref_mut (& mut self) -> & mut Self :: Target { & mut self . typed } } type TypedSigSetupLocalToSceneRequested < 'c > = TypedSignal < 'c , () > ; pub struct SigSetupLocalToSceneRequested < 'c > { typed : TypedSigSetupLocalToSceneRequested < 'c > , } impl SigSetupLocalToSceneRequested < '_ > { pub fn emit (& mut self ,) { self . typed . emit_tuple (()) ; } } impl < 'c > std :: ops :: Deref for SigSetupLocalToSceneRequested < 'c > { type Target = TypedSigSetupLocalToSceneRequested < 'c > ; fn deref (& self) -> & Self :: Target { & self . typed } } impl std :: ops :: DerefMut for SigSetupLocalToSceneRequested < '_ > { fn deref_mut (& mut self) -> & mut Self :: Target { & mut self . typed } }