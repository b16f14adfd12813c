# ! [doc = "Sidecar module for class [`MainLoop`][crate::classes::MainLoop]."] # [allow (unused_imports)] use crate :: builtin :: * ; # [allow (unused_imports)] use crate :: meta :: { AsArg , AsObjectArg , CowArg , InternedName , ObjectArg , Signature } ; # [allow (unused_imports)] use crate :: obj :: Gd ; # [allow (unused_imports)] use crate :: signal :: { SignalObject , TypedSignal } ; use crate :: sys ; pub (super) mod re_export { use super :: * ; # [doc = "Godot class `MainLoop`.\n\nInherits [`Object`][crate::classes::Object].\n\nRelated symbols (default-param builders, enums, interned names, signals) are in [`main_loop`][crate::classes::main_loop]."] # [derive (Debug)] # [repr (C)] pub struct MainLoop { object_ptr : sys :: GDExtensionObjectPtr , } impl MainLoop { # [doc = "Typed signals of this class and its bases; see [`SignalsOfMainLoop`][super::main_loop::SignalsOfMainLoop]."] pub fn signals (& mut self) -> super :: SignalsOfMainLoop < '_ > { super :: SignalsOfMainLoop :: __new (crate :: signal :: SignalObject :: __new (self . object_ptr)) } pub const NOTIFICATION_OS_MEMORY_WARNING : i32 = 2009i32 ; pub const NOTIFICATION_TRANSLATION_CHANGED : i32 = 2010i32 ; pub const NOTIFICATION_WM_ABOUT : i32 = 2011i32 ; pub const NOTIFICATION_CRASH : i32 = 2012i32 ; pub const NOTIFICATION_OS_IME_UPDATE : i32 = 2013i32 ; pub const NOTIFICATION_APPLICATION_RESUMED : i32 = 2014i32 ; pub const NOTIFICATION_APPLICATION_PAUSED : i32 = 2015i32 ; pub const NOTIFICATION_APPLICATION_FOCUS_IN : i32 = 2016i32 ; pub const NOTIFICATION_APPLICATION_FOCUS_OUT : i32 = 2017i32 ; pub const NOTIFICATION_TEXT_SERVER_CHANGED : i32 = 2018i32 ; } impl crate :: obj :: GodotClass for MainLoop { const CLASS_NAME : & 'static str = "MainLoop" ; type Base = crate :: classes :: Object ; type Memory = crate :: obj :: MemManual ; const INIT_LEVEL : crate :: init :: InitLevel = crate :: init :: InitLevel :: Scene ; } impl crate :: obj :: EngineClass for MainLoop { fn as_object_ptr (& self) -> sys :: GDExtensionObjectPtr { self . object_ptr } } unsafe impl crate :: obj :: Inherits < crate :: classes :: Object > for MainLoop { } impl crate :: obj :: Instantiable for MainLoop { } impl std :: ops :: Deref for MainLoop { type Target = crate :: classes :: Object ; fn deref (& self) -> & Self :: Target { unsafe { std :: mem :: transmute :: < & Self , & Self :: Target > (self) } } } impl std :: ops :: DerefMut for MainLoop { fn deref_mut (& mut self) -> & mut Self :: Target { unsafe { std :: mem :: transmute :: < & mut Self , & mut Self :: Target > (self) } } } } # [doc = "Properties declared by [`MainLoop`][super::MainLoop], as interned engine names."] pub struct PropertyName ; impl PropertyName { } # [doc = "Methods declared by [`MainLoop`][super::MainLoop], as interned engine names."] pub struct MethodName ; impl MethodName { } # [doc = "Signals declared by [`MainLoop`][super::MainLoop], as interned engine names."] pub struct SignalName ; impl SignalName { pub const ON_REQUEST_PERMISSIONS_RESULT : InternedName = InternedName :: new ("on_request_permissions_result") ; } # [doc = "A collection of signals for the [`MainLoop`][crate::classes::MainLoop] class."] pub struct SignalsOfMainLoop < 'c > { __base : crate :: classes :: object :: SignalsOfObject < 'c > , } impl < 'c > SignalsOfMainLoop < 'c > { # [doc (hidden)] pub fn __new (object : SignalObject < 'c >) -> Self { Self { __base : crate :: classes :: object :: SignalsOfObject :: __new (object) } } # [doc (hidden)] pub fn __object (& self) -> SignalObject < 'c > { self . __base . __object () } # [doc = "Signature: `(permission: GString, granted: bool)`"] pub fn on_request_permissions_result (& mut self) -> SigOnRequestPermissionsResult < 'c > { SigOnRequestPermissionsResult { typed : TypedSignal :: __new (self . __object () , "on_request_permissions_result") , } } } impl < 'c > std :: ops :: Deref for SignalsOfMainLoop < 'c > { type Target = crate :: classes :: object :: SignalsOfObject < 'c > ; fn deref (& self) -> & Self :: Target { & self . __base } } impl std :: ops :: DerefMut for SignalsOfMainLoop < '_ > { fn deref_mut (& mut self) -> & mut Self :: Target { & mut self . __base } } type TypedSigOnRequestPermissionsResult < 'c > = TypedSignal < 'c , (GString , bool ,) > ; pub struct SigOnRequestPermissionsResult < 'c > { typed : TypedSigOnRequestPermissionsResult < 'c > , } impl SigOnRequestPermissionsResult < '_ > { pub fn emit (& mut self , permission : GString , granted : bool ,) { self . typed . emit_tuple ((permission , granted ,)) ; } } impl < 'c > std :: ops :: Deref for SigOnRequestPermissionsResult < 'c > { type Target = TypedSigOnRequestPermissionsResult < 'c > ; fn deref (& self) -> & Self :: Target { & self . typed } } impl std :: ops :: DerefMut for SigOnRequestPermissionsResult < '_ > { fn deref_mut (& mut self) -> & mut Self :: Target { & mut self . typed } }