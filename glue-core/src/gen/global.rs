# ! [doc = r" Global enums and bitfields of `@GlobalScope`."] # [repr (transparent)] # [derive (Copy , Clone , Eq , PartialEq , Hash ,)] pub struct Side { ord : i32 } impl Side { # [doc (alias = "SIDE_LEFT")] # [doc = "Godot enumerator name: `SIDE_LEFT`"] pub const LEFT : Self = Self { ord : 0 } ; # [doc (alias = "SIDE_TOP")] # [doc = "Godot enumerator name: `SIDE_TOP`"] pub const TOP : Self = Self { ord : 1 } ; # [doc (alias = "SIDE_RIGHT")] # [doc = "Godot enumerator name: `SIDE_RIGHT`"] pub const RIGHT : Self = Self { ord : 2 } ; # [doc (alias = "SIDE_BOTTOM")] # [doc = "Godot enumerator name: `SIDE_BOTTOM`"] pub const BOTTOM : Self = Self { ord : 3 } ; # [allow (unreachable_patterns)] fn enumerator_name (self) -> Option < & 'static str > { match self { Self :: LEFT => Some ("LEFT") , Self :: TOP => Some ("TOP") , Self :: RIGHT => Some ("RIGHT") , Self :: BOTTOM => Some ("BOTTOM") , _ => None , } } } impl std :: fmt :: Debug for Side { fn fmt (& self , f : & mut std :: fmt :: Formatter < '_ >) -> std :: fmt :: Result { match self . enumerator_name () { Some (enumerator) => f . write_str (enumerator) , None => f . debug_struct (stringify ! (Side)) . field ("ord" , & self . ord) . finish () , } } } impl crate :: obj :: EngineEnum for Side { fn try_from_ord (ord : i32) -> Option < Self > { match ord { 0 | 1 | 2 | 3 => Some (Self { ord }) , _ => None , } } fn ord (self) -> i32 { self . ord } } impl crate :: meta :: GodotConvert for Side { type Via = i32 ; } impl crate :: meta :: ToGodot for Side { fn to_godot (& self) -> Self :: Via { < Self as crate :: obj :: EngineEnum > :: ord (* self) } } impl crate :: meta :: FromGodot for Side { fn try_from_godot (via : Self :: Via) -> std :: result :: Result < Self , crate :: meta :: ConvertError > { Ok (Self { ord : via }) } } # [repr (transparent)] # [derive (Copy , Clone , Eq , PartialEq , Hash ,)] pub struct Corner { ord : i32 } impl Corner { # [doc (alias = "CORNER_TOP_LEFT")] # [doc = "Godot enumerator name: `CORNER_TOP_LEFT`"] pub const TOP_LEFT : Self = Self { ord : 0 } ; # [doc (alias = "CORNER_TOP_RIGHT")] # [doc = "Godot enumerator name: `CORNER_TOP_RIGHT`"] pub const TOP_RIGHT : Self = Self { ord : 1 } ; # [doc (alias = "CORNER_BOTTOM_RIGHT")] # [doc = "Godot enumerator name: `CORNER_BOTTOM_RIGHT`"] pub const BOTTOM_RIGHT : Self = Self { ord : 2 } ; # [doc (alias = "CORNER_BOTTOM_LEFT")] # [doc = "Godot enumerator name: `CORNER_BOTTOM_LEFT`"] pub const BOTTOM_LEFT : Self = Self { ord : 3 } ; # [allow (unreachable_patterns)] fn enumerator_name (self) -> Option < & 'static str > { match self { Self :: TOP_LEFT => Some ("TOP_LEFT") , Self :: TOP_RIGHT => Some ("TOP_RIGHT") , Self :: BOTTOM_RIGHT => Some ("BOTTOM_RIGHT") , Self :: BOTTOM_LEFT => Some ("BOTTOM_LEFT") , _ => None , } } } impl std :: fmt :: Debug for Corner { fn fmt (& self , f : & mut std :: fmt :: Formatter < '_ >) -> std :: fmt :: Result { match self . enumerator_name () { Some (enumerator) => f . write_str (enumerator) , None => f . debug_struct (stringify ! (Corner)) . field ("ord" , & self . ord) . finish () , } } } impl crate :: obj :: EngineEnum for Corner { fn try_from_ord (ord : i32) -> Option < Self > { match ord { 0 | 1 | 2 | 3 => Some (Self { ord }) , _ => None , } } fn ord (self) -> i32 { self . ord } } impl crate :: meta :: GodotConvert for Corner { type Via = i32 ; } impl crate :: meta :: ToGodot for Corner { fn to_godot (& self) -> Self :: Via { < Self as crate :: obj :: EngineEnum > :: ord (* self) } } impl crate :: meta :: FromGodot for Corner { fn try_from_godot (via : Self :: Via) -> std :: result :: Result < Self , crate :: meta :: ConvertError > { Ok (Self { ord : via }) } } # [repr (transparent)] # [derive (Copy , Clone , Eq , PartialEq , Hash ,)] pub struct Orientation { ord : i32 } impl Orientation { pub const VERTICAL : Self = Self { ord : 1 } ; pub const HORIZONTAL : Self = Self { ord : 0 } ; # [allow (unreachable_patterns)] fn enumerator_name (self) -> Option < & 'static str > { match self { Self :: VERTICAL => Some ("VERTICAL") , Self :: HORIZONTAL => Some ("HORIZONTAL") , _ => None , } } } impl std :: fmt :: Debug for Orientation { fn fmt (& self , f : & mut std :: fmt :: Formatter < '_ >) -> std :: fmt :: Result { match self . enumerator_name () { Some (enumerator) => f . write_str (enumerator) , None => f . debug_struct (stringify ! (Orientation)) . field ("ord" , & self . ord) . finish () , } } } impl crate :: obj :: EngineEnum for Orientation { fn try_from_ord (ord : i32) -> Option < Self > { match ord { 0 | 1 => Some (Self { ord }) , _ => None , } } fn ord (self) -> i32 { self . ord } } impl crate :: meta :: GodotConvert for Orientation { type Via = i32 ; } impl crate :: meta :: ToGodot for Orientation { fn to_godot (& self) -> Self :: Via { < Self as crate :: obj :: EngineEnum > :: ord (* self) } } impl crate :: meta :: FromGodot for Orientation { fn try_from_godot (via : Self :: Via) -> std :: result :: Result < Self , crate :: meta :: ConvertError > { Ok (Self { ord : via }) } } # [repr (transparent)] # [derive (Copy , Clone , Eq , PartialEq , Hash ,)] pub struct ClockDirection { ord : i32 } impl ClockDirection { pub const CLOCKWISE : Self = Self { ord : 0 } ; pub const COUNTERCLOCKWISE : Self = Self { ord : 1 } ; # [allow (unreachable_patterns)] fn enumerator_name (self) -> Option < & 'static str > { match self { Self :: CLOCKWISE => Some ("CLOCKWISE") , Self :: COUNTERCLOCKWISE => Some ("COUNTERCLOCKWISE") , _ => None , } } } impl std :: fmt :: Debug for ClockDirection { fn fmt (& self , f : & mut std :: fmt :: Formatter < '_ >) -> std :: fmt :: Result { match self . enumerator_name () { Some (enumerator) => f . write_str (enumerator) , None => f . debug_struct (stringify ! (ClockDirection)) . field ("ord" , & self . ord) . finish () , } } } impl crate :: obj :: EngineEnum for ClockDirection { fn try_from_ord (ord : i32) -> Option < Self > { match ord { 0 | 1 => Some (Self { ord }) , _ => None , } } fn ord (self) -> i32 { self . ord } } impl crate :: meta :: GodotConvert for ClockDirection { type Via = i32 ; } impl crate :: meta :: ToGodot for ClockDirection { fn to_godot (& self) -> Self :: Via { < Self as crate :: obj :: EngineEnum > :: ord (* self) } } impl crate :: meta :: FromGodot for ClockDirection { fn try_from_godot (via : Self :: Via) -> std :: result :: Result < Self , crate :: meta :: ConvertError > { Ok (Self { ord : via }) } } # [repr (transparent)] # [derive (Copy , Clone , Eq , PartialEq , Hash ,)] pub struct HorizontalAlignment { ord : i32 } impl HorizontalAlignment { # [doc (alias = "HORIZONTAL_ALIGNMENT_LEFT")] # [doc = "Godot enumerator name: `HORIZONTAL_ALIGNMENT_LEFT`"] pub const LEFT : Self = Self { ord : 0 } ; # [doc (alias = "HORIZONTAL_ALIGNMENT_CENTER")] # [doc = "Godot enumerator name: `HORIZONTAL_ALIGNMENT_CENTER`"] pub const CENTER : Self = Self { ord : 1 } ; # [doc (alias = "HORIZONTAL_ALIGNMENT_RIGHT")] # [doc = "Godot enumerator name: `HORIZONTAL_ALIGNMENT_RIGHT`"] pub const RIGHT : Self = Self { ord : 2 } ; # [doc (alias = "HORIZONTAL_ALIGNMENT_FILL")] # [doc = "Godot enumerator name: `HORIZONTAL_ALIGNMENT_FILL`"] pub const FILL : Self = Self { ord : 3 } ; # [allow (unreachable_patterns)] fn enumerator_name (self) -> Option < & 'static str > { match self { Self :: LEFT => Some ("LEFT") , Self :: CENTER => Some ("CENTER") , Self :: RIGHT => Some ("RIGHT") , Self :: FILL => Some ("FILL") , _ => None , } } } impl std :: fmt :: Debug for HorizontalAlignment { fn fmt (& self , f : & mut std :: fmt :: Formatter < '_ >) -> std :: fmt :: Result { match self . enumerator_name () { Some (enumerator) => f . write_str (enumerator) , None => f . debug_struct (stringify ! (HorizontalAlignment)) . field ("ord" , & self . ord) . finish () , } } } impl crate :: obj :: EngineEnum for HorizontalAlignment { fn try_from_ord (ord : i32) -> Option < Self > { match ord { 0 | 1 | 2 | 3 => Some (Self { ord }) , _ => None , } } fn ord (self) -> i32 { self . ord } } impl crate :: meta :: GodotConvert for HorizontalAlignment { type Via = i32 ; } impl crate :: meta :: ToGodot for HorizontalAlignment { fn to_godot (& self) -> Self :: Via { < Self as crate :: obj :: EngineEnum > :: ord (* self) } } impl crate :: meta :: FromGodot for HorizontalAlignment { fn try_from_godot (via : Self :: Via) -> std :: result :: Result < Self , crate :: meta :: ConvertError > { Ok (Self { ord : via }) } } # [repr (transparent)] # [derive (Copy , Clone , Eq , PartialEq , Hash ,)] pub struct VerticalAlignment { ord : i32 } impl VerticalAlignment { # [doc (alias = "VERTICAL_ALIGNMENT_TOP")] # [doc = "Godot enumerator name: `VERTICAL_ALIGNMENT_TOP`"] pub const TOP : Self = Self { ord : 0 } ; # [doc (alias = "VERTICAL_ALIGNMENT_CENTER")] # [doc = "Godot enumerator name: `VERTICAL_ALIGNMENT_CENTER`"] pub const CENTER : Self = Self { ord : 1 } ; # [doc (alias = "VERTICAL_ALIGNMENT_BOTTOM")] # [doc = "Godot enumerator name: `VERTICAL_ALIGNMENT_BOTTOM`"] pub const BOTTOM : Self = Self { ord : 2 } ; # [doc (alias = "VERTICAL_ALIGNMENT_FILL")] # [doc = "Godot enumerator name: `VERTICAL_ALIGNMENT_FILL`"] pub const FILL : Self = Self { ord : 3 } ; # [allow (unreachable_patterns)] fn enumerator_name (self) -> Option < & 'static str > { match self { Self :: TOP => Some ("TOP") , Self :: CENTER => Some ("CENTER") , Self :: BOTTOM => Some ("BOTTOM") , Self :: FILL => Some ("FILL") , _ => None , } } } impl std :: fmt :: Debug for VerticalAlignment { fn fmt (& self , f : & mut std :: fmt :: Formatter < '_ >) -> std :: fmt :: Result { match self . enumerator_name () { Some (enumerator) => f . write_str (enumerator) , None => f . debug_struct (stringify ! (VerticalAlignment)) . field ("ord" , & self . ord) . finish () , } } } impl crate :: obj :: EngineEnum for VerticalAlignment { fn try_from_ord (ord : i32) -> Option < Self > { match ord { 0 | 1 | 2 | 3 => Some (Self { ord }) , _ => None , } } fn ord (self) -> i32 { self . ord } } impl crate :: meta :: GodotConvert for VerticalAlignment { type Via = i32 ; } impl crate :: meta :: ToGodot for VerticalAlignment { fn to_godot (& self) -> Self :: Via { < Self as crate :: obj :: EngineEnum > :: ord (* self) } } impl crate :: meta :: FromGodot for VerticalAlignment { fn try_from_godot (via : Self :: Via) -> std :: result :: Result < Self , crate :: meta :: ConvertError > { Ok (Self { ord : via }) } } # [repr (transparent)] # [derive (Copy , Clone , Eq , PartialEq , Hash ,)] pub struct InlineAlignment { ord : i32 } impl InlineAlignment { # [doc (alias = "INLINE_ALIGNMENT_TOP_TO")] # [doc = "Godot enumerator name: `INLINE_ALIGNMENT_TOP_TO`"] pub const TOP_TO : Self = Self { ord : 0 } ; # [doc (alias = "INLINE_ALIGNMENT_CENTER_TO")] # [doc = "Godot enumerator name: `INLINE_ALIGNMENT_CENTER_TO`"] pub const CENTER_TO : Self = Self { ord : 1 } ; # [doc (alias = "INLINE_ALIGNMENT_BASELINE_TO")] # [doc = "Godot enumerator name: `INLINE_ALIGNMENT_BASELINE_TO`"] pub const BASELINE_TO : Self = Self { ord : 3 } ; # [doc (alias = "INLINE_ALIGNMENT_BOTTOM_TO")] # [doc = "Godot enumerator name: `INLINE_ALIGNMENT_BOTTOM_TO`"] pub const BOTTOM_TO : Self = Self { ord : 2 } ; # [doc (alias = "INLINE_ALIGNMENT_TO_TOP")] # [doc = "Godot enumerator name: `INLINE_ALIGNMENT_TO_TOP`"] pub const TO_TOP : Self = Self { ord : 0 } ; # [doc (alias = "INLINE_ALIGNMENT_TO_CENTER")] # [doc = "Godot enumerator name: `INLINE_ALIGNMENT_TO_CENTER`"] pub const TO_CENTER : Self = Self { ord : 4 } ; # [doc (alias = "INLINE_ALIGNMENT_TO_BASELINE")] # [doc = "Godot enumerator name: `INLINE_ALIGNMENT_TO_BASELINE`"] pub const TO_BASELINE : Self = Self { ord : 8 } ; # [doc (alias = "INLINE_ALIGNMENT_TO_BOTTOM")] # [doc = "Godot enumerator name: `INLINE_ALIGNMENT_TO_BOTTOM`"] pub const TO_BOTTOM : Self = Self { ord : 12 } ; # [doc (alias = "INLINE_ALIGNMENT_TOP")] # [doc = "Godot enumerator name: `INLINE_ALIGNMENT_TOP`"] pub const TOP : Self = Self { ord : 0 } ; # [doc (alias = "INLINE_ALIGNMENT_CENTER")] # [doc = "Godot enumerator name: `INLINE_ALIGNMENT_CENTER`"] pub const CENTER : Self = Self { ord : 5 } ; # [doc (alias = "INLINE_ALIGNMENT_BOTTOM")] # [doc = "Godot enumerator name: `INLINE_ALIGNMENT_BOTTOM`"] pub const BOTTOM : Self = Self { ord : 14 } ; # [doc (alias = "INLINE_ALIGNMENT_IMAGE_MASK")] # [doc = "Godot enumerator name: `INLINE_ALIGNMENT_IMAGE_MASK`"] pub const IMAGE_MASK : Self = Self { ord : 3 } ; # [doc (alias = "INLINE_ALIGNMENT_TEXT_MASK")] # [doc = "Godot enumerator name: `INLINE_ALIGNMENT_TEXT_MASK`"] pub const TEXT_MASK : Self = Self { ord : 12 } ; # [allow (unreachable_patterns)] fn enumerator_name (self) -> Option < & 'static str > { match self { Self :: TOP_TO => Some ("TOP_TO") , Self :: CENTER_TO => Some ("CENTER_TO") , Self :: BASELINE_TO => Some ("BASELINE_TO") , Self :: BOTTOM_TO => Some ("BOTTOM_TO") , Self :: TO_TOP => Some ("TO_TOP") , Self :: TO_CENTER => Some ("TO_CENTER") , Self :: TO_BASELINE => Some ("TO_BASELINE") , Self :: TO_BOTTOM => Some ("TO_BOTTOM") , Self :: TOP => Some ("TOP") , Self :: CENTER => Some ("CENTER") , Self :: BOTTOM => Some ("BOTTOM") , Self :: IMAGE_MASK => Some ("IMAGE_MASK") , Self :: TEXT_MASK => Some ("TEXT_MASK") , _ => None , } } } impl std :: fmt :: Debug for InlineAlignment { fn fmt (& self , f : & mut std :: fmt :: Formatter < '_ >) -> std :: fmt :: Result { match self . enumerator_name () { Some (enumerator) => f . write_str (enumerator) , None => f . debug_struct (stringify ! (InlineAlignment)) . field ("ord" , & self . ord) . finish () , } } } impl crate :: obj :: EngineEnum for InlineAlignment { fn try_from_ord (ord : i32) -> Option < Self > { match ord { 0 | 1 | 2 | 3 | 4 | 5 | 8 | 12 | 14 => Some (Self { ord }) , _ => None , } } fn ord (self) -> i32 { self . ord } } impl crate :: meta :: GodotConvert for InlineAlignment { type Via = i32 ; } impl crate :: meta :: ToGodot for InlineAlignment { fn to_godot (& self) -> Self :: Via { < Self as crate :: obj :: EngineEnum > :: ord (* self) } } impl crate :: meta :: FromGodot for InlineAlignment { fn try_from_godot (via : Self :: Via) -> std :: result :: Result < Self , crate :: meta :: ConvertError > { Ok (Self { ord : via }) } } # [repr (transparent)] # [derive (Copy , Clone , Eq , PartialEq , Hash ,)] pub struct EulerOrder { ord : i32 } impl EulerOrder { # [doc (alias = "EULER_ORDER_XYZ")] # [doc = "Godot enumerator name: `EULER_ORDER_XYZ`"] pub const XYZ : Self = Self { ord : 0 } ; # [doc (alias = "EULER_ORDER_XZY")] # [doc = "Godot enumerator name: `EULER_ORDER_XZY`"] pub const XZY : Self = Self { ord : 1 } ; # [doc (alias = "EULER_ORDER_YXZ")] # [doc = "Godot enumerator name: `EULER_ORDER_YXZ`"] pub const YXZ : Self = Self { ord : 2 } ; # [doc (alias = "EULER_ORDER_YZX")] # [doc = "Godot enumerator name: `EULER_ORDER_YZX`"] pub const YZX : Self = Self { ord : 3 } ; # [doc (alias = "EULER_ORDER_ZXY")] # [doc = "Godot enumerator name: `EULER_ORDER_ZXY`"] pub const ZXY : Self = Self { ord : 4 } ; # [doc (alias = "EULER_ORDER_ZYX")] # [doc = "Godot enumerator name: `EULER_ORDER_ZYX`"] pub const ZYX : Self = Self { ord : 5 } ; # [allow (unreachable_patterns)] fn enumerator_name (self) -> Option < & 'static str > { match self { Self :: XYZ => Some ("XYZ") , Self :: XZY => Some ("XZY") , Self :: YXZ => Some ("YXZ") , Self :: YZX => Some ("YZX") , Self :: ZXY => Some ("ZXY") , Self :: ZYX => Some ("ZYX") , _ => None , } } } impl std :: fmt :: Debug for EulerOrder { fn fmt (& self , f : & mut std :: fmt :: Formatter < '_ >) -> std :: fmt :: Result { match self . enumerator_name () { Some (enumerator) => f . write_str (enumerator) , None => f . debug_struct (stringify ! (EulerOrder)) . field ("ord" , & self . ord) . finish () , } } } impl crate :: obj :: EngineEnum for EulerOrder { fn try_from_ord (ord : i32) -> Option < Self > { match ord { 0 | 1 | 2 | 3 | 4 | 5 => Some (Self { ord }) , _ => None , } } fn ord (self) -> i32 { self . ord } } impl crate :: meta :: GodotConvert for EulerOrder { type Via = i32 ; } impl crate :: meta :: ToGodot for EulerOrder { fn to_godot (& self) -> Self :: Via { < Self as crate :: obj :: EngineEnum > :: ord (* self) } } impl crate :: meta :: FromGodot for EulerOrder { fn try_from_godot (via : Self :: Via) -> std :: result :: Result < Self , crate :: meta :: ConvertError > { Ok (Self { ord : via }) } } # [repr (transparent)] # [derive (Copy , Clone , Eq , PartialEq , Hash ,)] pub struct Key { ord : i32 } impl Key { # [doc (alias = "KEY_NONE")] # [doc = "Godot enumerator name: `KEY_NONE`"] pub const NONE : Self = Self { ord : 0 } ; # [doc (alias = "KEY_SPECIAL")] # [doc = "Godot enumerator name: `KEY_SPECIAL`"] pub const SPECIAL : Self = Self { ord : 4194304 } ; # [doc (alias = "KEY_ESCAPE")] # [doc = "Godot enumerator name: `KEY_ESCAPE`"] pub const ESCAPE : Self = Self { ord : 4194305 } ; # [doc (alias = "KEY_TAB")] # [doc = "Godot enumerator name: `KEY_TAB`"] pub const TAB : Self = Self { ord : 4194306 } ; # [doc (alias = "KEY_BACKTAB")] # [doc = "Godot enumerator name: `KEY_BACKTAB`"] pub const BACKTAB : Self = Self { ord : 4194307 } ; # [doc (alias = "KEY_BACKSPACE")] # [doc = "Godot enumerator name: `KEY_BACKSPACE`"] pub const BACKSPACE : Self = Self { ord : 4194308 } ; # [doc (alias = "KEY_ENTER")] # [doc = "Godot enumerator name: `KEY_ENTER`"] pub const ENTER : Self = Self { ord : 4194309 } ; # [doc (alias = "KEY_KP_ENTER")] # [doc = "Godot enumerator name: `KEY_KP_ENTER`"] pub const KP_ENTER : Self = Self { ord : 4194310 } ; # [doc (alias = "KEY_INSERT")] # [doc = "Godot enumerator name: `KEY_INSERT`"] pub const INSERT : Self = Self { ord : 4194311 } ; # [doc (alias = "KEY_DELETE")] # [doc = "Godot enumerator name: `KEY_DELETE`"] pub const DELETE : Self = Self { ord : 4194312 } ; # [doc (alias = "KEY_PAUSE")] # [doc = "Godot enumerator name: `KEY_PAUSE`"] pub const PAUSE : Self = Self { ord : 4194313 } ; # [doc (alias = "KEY_PRINT")] # [doc = "Godot enumerator name: `KEY_PRINT`"] pub const PRINT : Self = Self { ord : 4194314 } ; # [doc (alias = "KEY_SYSREQ")] # [doc = "Godot enumerator name: `KEY_SYSREQ`"] pub const SYSREQ : Self = Self { ord : 4194315 } ; # [doc (alias = "KEY_CLEAR")] # [doc = "Godot enumerator name: `KEY_CLEAR`"] pub const CLEAR : Self = Self { ord : 4194316 } ; # [doc (alias = "KEY_HOME")] # [doc = "Godot enumerator name: `KEY_HOME`"] pub const HOME : Self = Self { ord : 4194317 } ; # [doc (alias = "KEY_END")] # [doc = "Godot enumerator name: `KEY_END`"] pub const END : Self = Self { ord : 4194318 } ; # [doc (alias = "KEY_LEFT")] # [doc = "Godot enumerator name: `KEY_LEFT`"] pub const LEFT : Self = Self { ord : 4194319 } ; # [doc (alias = "KEY_UP")] # [doc = "Godot enumerator name: `KEY_UP`"] pub const UP : Self = Self { ord : 4194320 } ; # [doc (alias = "KEY_RIGHT")] # [doc = "Godot enumerator name: `KEY_RIGHT`"] pub const RIGHT : Self = Self { ord : 4194321 } ; # [doc (alias = "KEY_DOWN")] # [doc = "Godot enumerator name: `KEY_DOWN`"] pub const DOWN : Self = Self { ord : 4194322 } ; # [doc (alias = "KEY_PAGEUP")] # [doc = "Godot enumerator name: `KEY_PAGEUP`"] pub const PAGEUP : Self = Self { ord : 4194323 } ; # [doc (alias = "KEY_PAGEDOWN")] # [doc = "Godot enumerator name: `KEY_PAGEDOWN`"] pub const PAGEDOWN : Self = Self { ord : 4194324 } ; # [doc (alias = "KEY_SHIFT")] # [doc = "Godot enumerator name: `KEY_SHIFT`"] pub const SHIFT : Self = Self { ord : 4194325 } ; # [doc (alias = "KEY_CTRL")] # [doc = "Godot enumerator name: `KEY_CTRL`"] pub const CTRL : Self = Self { ord : 4194326 } ; # [doc (alias = "KEY_META")] # [doc = "Godot enumerator name: `KEY_META`"] pub const META : Self = Self { ord : 4194327 } ; # [doc (alias = "KEY_ALT")] # [doc = "Godot enumerator name: `KEY_ALT`"] pub const ALT : Self = Self { ord : 4194328 } ; # [doc (alias = "KEY_CAPSLOCK")] # [doc = "Godot enumerator name: `KEY_CAPSLOCK`"] pub const CAPSLOCK : Self = Self { ord : 4194329 } ; # [doc (alias = "KEY_NUMLOCK")] # [doc = "Godot enumerator name: `KEY_NUMLOCK`"] pub const NUMLOCK : Self = Self { ord : 4194330 } ; # [doc (alias = "KEY_SCROLLLOCK")] # [doc = "Godot enumerator name: `KEY_SCROLLLOCK`"] pub const SCROLLLOCK : Self = Self { ord : 4194331 } ; # [doc (alias = "KEY_F1")] # [doc = "Godot enumerator name: `KEY_F1`"] pub const F1 : Self = Self { ord : 4194332 } ; # [doc (alias = "KEY_F2")] # [doc = "Godot enumerator name: `KEY_F2`"] pub const F2 : Self = Self { ord : 4194333 } ; # [doc (alias = "KEY_F3")] # [doc = "Godot enumerator name: `KEY_F3`"] pub const F3 : Self = Self { ord : 4194334 } ; # [doc (alias = "KEY_F4")] # [doc = "Godot enumerator name: `KEY_F4`"] pub const F4 : Self = Self { ord : 4194335 } ; # [doc (alias = "KEY_F5")] # [doc = "Godot enumerator name: `KEY_F5`"] pub const F5 : Self = Self { ord : 4194336 } ; # [doc (alias = "KEY_F6")] # [doc = "Godot enumerator name: `KEY_F6`"] pub const F6 : Self = Self { ord : 4194337 } ; # [doc (alias = "KEY_F7")] # [doc = "Godot enumerator name: `KEY_F7`"] pub const F7 : Self = Self { ord : 4194338 } ; # [doc (alias = "KEY_F8")] # [doc = "Godot enumerator name: `KEY_F8`"] pub const F8 : Self = Self { ord : 4194339 } ; # [doc (alias = "KEY_F9")] # [doc = "Godot enumerator name: `KEY_F9`"] pub const F9 : Self = Self { ord : 4194340 } ; # [doc (alias = "KEY_F10")] # [doc = "Godot enumerator name: `KEY_F10`"] pub const F10 : Self = Self { ord : 4194341 } ; # [doc (alias = "KEY_F11")] # [doc = "Godot enumerator name: `KEY_F11`"] pub const F11 : Self = Self { ord : 4194342 } ; # [doc (alias = "KEY_F12")] # [doc = "Godot enumerator name: `KEY_F12`"] pub const F12 : Self = Self { ord : 4194343 } ; # [doc (alias = "KEY_F13")] # [doc = "Godot enumerator name: `KEY_F13`"] pub const F13 : Self = Self { ord : 4194344 } ; # [doc (alias = "KEY_F14")] # [doc = "Godot enumerator name: `KEY_F14`"] pub const F14 : Self = Self { ord : 4194345 } ; # [doc (alias = "KEY_F15")] # [doc = "Godot enumerator name: `KEY_F15`"] pub const F15 : Self = Self { ord : 4194346 } ; # [doc (alias = "KEY_F16")] # [doc = "Godot enumerator name: `KEY_F16`"] pub const F16 : Self = Self { ord : 4194347 } ; # [doc (alias = "KEY_F17")] # [doc = "Godot enumerator name: `KEY_F17`"] pub const F17 : Self = Self { ord : 4194348 } ; # [doc (alias = "KEY_F18")] # [doc = "Godot enumerator name: `KEY_F18`"] pub const F18 : Self = Self { ord : 4194349 } ; # [doc (alias = "KEY_F19")] # [doc = "Godot enumerator name: `KEY_F19`"] pub const F19 : Self = Self { ord : 4194350 } ; # [doc (alias = "KEY_F20")] # [doc = "Godot enumerator name: `KEY_F20`"] pub const F20 : Self = Self { ord : 4194351 } ; # [doc (alias = "KEY_F21")] # [doc = "Godot enumerator name: `KEY_F21`"] pub const F21 : Self = Self { ord : 4194352 } ; # [doc (alias = "KEY_F22")] # [doc = "Godot enumerator name: `KEY_F22`"] pub const F22 : Self = Self { ord : 4194353 } ; # [doc (alias = "KEY_F23")] # [doc = "Godot enumerator name: `KEY_F23`"] pub const F23 : Self = Self { ord : 4194354 } ; # [doc (alias = "KEY_F24")] # [doc = "Godot enumerator name: `KEY_F24`"] pub const F24 : Self = Self { ord : 4194355 } ; # [doc (alias = "KEY_F25")] # [doc = "Godot enumerator name: `KEY_F25`"] pub const F25 : Self = Self { ord : 4194356 } ; # [doc (alias = "KEY_F26")] # [doc = "Godot enumerator name: `KEY_F26`"] pub const F26 : Self = Self { ord : 4194357 } ; # [doc (alias = "KEY_F27")] # [doc = "Godot enumerator name: `KEY_F27`"] pub const F27 : Self = Self { ord : 4194358 } ; # [doc (alias = "KEY_F28")] # [doc = "Godot enumerator name: `KEY_F28`"] pub const F28 : Self = Self { ord : 4194359 } ; # [doc (alias = "KEY_F29")] # [doc = "Godot enumerator name: `KEY_F29`"] pub const F29 : Self = Self { ord : 4194360 } ; # [doc (alias = "KEY_F30")] # [doc = "Godot enumerator name: `KEY_F30`"] pub const F30 : Self = Self { ord : 4194361 } ; # [doc (alias = "KEY_F31")] # [doc = "Godot enumerator name: `KEY_F31`"] pub const F31 : Self = Self { ord : 4194362 } ; # [doc (alias = "KEY_F32")] # [doc = "Godot enumerator name: `KEY_F32`"] pub const F32 : Self = Self { ord : 4194363 } ; # [doc (alias = "KEY_F33")] # [doc = "Godot enumerator name: `KEY_F33`"] pub const F33 : Self = Self { ord : 4194364 } ; # [doc (alias = "KEY_F34")] # [doc = "Godot enumerator name: `KEY_F34`"] pub const F34 : Self = Self { ord : 4194365 } ; # [doc (alias = "KEY_F35")] # [doc = "Godot enumerator name: `KEY_F35`"] pub const F35 : Self = Self { ord : 4194366 } ; # [doc (alias = "KEY_KP_MULTIPLY")] # [doc = "Godot enumerator name: `KEY_KP_MULTIPLY`"] pub const KP_MULTIPLY : Self = Self { ord : 4194433 } ; # [doc (alias = "KEY_KP_DIVIDE")] # [doc = "Godot enumerator name: `KEY_KP_DIVIDE`"] pub const KP_DIVIDE : Self = Self { ord : 4194434 } ; # [doc (alias = "KEY_KP_SUBTRACT")] # [doc = "Godot enumerator name: `KEY_KP_SUBTRACT`"] pub const KP_SUBTRACT : Self = Self { ord : 4194435 } ; # [doc (alias = "KEY_KP_PERIOD")] # [doc = "Godot enumerator name: `KEY_KP_PERIOD`"] pub const KP_PERIOD : Self = Self { ord : 4194436 } ; # [doc (alias = "KEY_KP_ADD")] # [doc = "Godot enumerator name: `KEY_KP_ADD`"] pub const KP_ADD : Self = Self { ord : 4194437 } ; # [doc (alias = "KEY_KP_0")] # [doc = "Godot enumerator name: `KEY_KP_0`"] pub const KP_0 : Self = Self { ord : 4194438 } ; # [doc (alias = "KEY_KP_1")] # [doc = "Godot enumerator name: `KEY_KP_1`"] pub const KP_1 : Self = Self { ord : 4194439 } ; # [doc (alias = "KEY_KP_2")] # [doc = "Godot enumerator name: `KEY_KP_2`"] pub const KP_2 : Self = Self { ord : 4194440 } ; # [doc (alias = "KEY_KP_3")] # [doc = "Godot enumerator name: `KEY_KP_3`"] pub const KP_3 : Self = Self { ord : 4194441 } ; # [doc (alias = "KEY_KP_4")] # [doc = "Godot enumerator name: `KEY_KP_4`"] pub const KP_4 : Self = Self { ord : 4194442 } ; # [doc (alias = "KEY_KP_5")] # [doc = "Godot enumerator name: `KEY_KP_5`"] pub const KP_5 : Self = Self { ord : 4194443 } ; # [doc (alias = "KEY_KP_6")] # [doc = "Godot enumerator name: `KEY_KP_6`"] pub const KP_6 : Self = Self { ord : 4194444 } ; # [doc (alias = "KEY_KP_7")] # [doc = "Godot enumerator name: `KEY_KP_7`"] pub const KP_7 : Self = Self { ord : 4194445 } ; # [doc (alias = "KEY_KP_8")] # [doc = "Godot enumerator name: `KEY_KP_8`"] pub const KP_8 : Self = Self { ord : 4194446 } ; # [doc (alias = "KEY_KP_9")] # [doc = "Godot enumerator name: `KEY_KP_9`"] pub const KP_9 : Self = Self { ord : 4194447 } ; # [doc (alias = "KEY_MENU")] # [doc = "Godot enumerator name: `KEY_MENU`"] pub const MENU : Self = Self { ord : 4194370 } ; # [doc (alias = "KEY_HYPER")] # [doc = "Godot enumerator name: `KEY_HYPER`"] pub const HYPER : Self = Self { ord : 4194371 } ; # [doc (alias = "KEY_HELP")] # [doc = "Godot enumerator name: `KEY_HELP`"] pub const HELP : Self = Self { ord : 4194373 } ; # [doc (alias = "KEY_BACK")] # [doc = "Godot enumerator name: `KEY_BACK`"] pub const BACK : Self = Self { ord : 4194376 } ; # [doc (alias = "KEY_FORWARD")] # [doc = "Godot enumerator name: `KEY_FORWARD`"] pub const FORWARD : Self = Self { ord : 4194377 } ; # [doc (alias = "KEY_STOP")] # [doc = "Godot enumerator name: `KEY_STOP`"] pub const STOP : Self = Self { ord : 4194378 } ; # [doc (alias = "KEY_REFRESH")] # [doc = "Godot enumerator name: `KEY_REFRESH`"] pub const REFRESH : Self = Self { ord : 4194379 } ; # [doc (alias = "KEY_VOLUMEDOWN")] # [doc = "Godot enumerator name: `KEY_VOLUMEDOWN`"] pub const VOLUMEDOWN : Self = Self { ord : 4194380 } ; # [doc (alias = "KEY_VOLUMEMUTE")] # [doc = "Godot enumerator name: `KEY_VOLUMEMUTE`"] pub const VOLUMEMUTE : Self = Self { ord : 4194381 } ; # [doc (alias = "KEY_VOLUMEUP")] # [doc = "Godot enumerator name: `KEY_VOLUMEUP`"] pub const VOLUMEUP : Self = Self { ord : 4194382 } ; # [doc (alias = "KEY_MEDIAPLAY")] # [doc = "Godot enumerator name: `KEY_MEDIAPLAY`"] pub const MEDIAPLAY : Self = Self { ord : 4194388 } ; # [doc (alias = "KEY_MEDIASTOP")] # [doc = "Godot enumerator name: `KEY_MEDIASTOP`"] pub const MEDIASTOP : Self = Self { ord : 4194389 } ; # [doc (alias = "KEY_MEDIAPREVIOUS")] # [doc = "Godot enumerator name: `KEY_MEDIAPREVIOUS`"] pub const MEDIAPREVIOUS : Self = Self { ord : 4194390 } ; # [doc (alias = "KEY_MEDIANEXT")] # [doc = "Godot enumerator name: `KEY_MEDIANEXT`"] pub const MEDIANEXT : Self = Self { ord : 4194391 } ; # [doc (alias = "KEY_MEDIARECORD")] # [doc = "Godot enumerator name: `KEY_MEDIARECORD`"] pub const MEDIARECORD : Self = Self { ord : 4194392 } ; # [doc (alias = "KEY_HOMEPAGE")] # [doc = "Godot enumerator name: `KEY_HOMEPAGE`"] pub const HOMEPAGE : Self = Self { ord : 4194393 } ; # [doc (alias = "KEY_FAVORITES")] # [doc = "Godot enumerator name: `KEY_FAVORITES`"] pub const FAVORITES : Self = Self { ord : 4194394 } ; # [doc (alias = "KEY_SEARCH")] # [doc = "Godot enumerator name: `KEY_SEARCH`"] pub const SEARCH : Self = Self { ord : 4194395 } ; # [doc (alias = "KEY_STANDBY")] # [doc = "Godot enumerator name: `KEY_STANDBY`"] pub const STANDBY : Self = Self { ord : 4194396 } ; # [doc (alias = "KEY_OPENURL")] # [doc = "Godot enumerator name: `KEY_OPENURL`"] pub const OPENURL : Self = Self { ord : 4194397 } ; # [doc (alias = "KEY_LAUNCHMAIL")] # [doc = "Godot enumerator name: `KEY_LAUNCHMAIL`"] pub const LAUNCHMAIL : Self = Self { ord : 4194398 } ; # [doc (alias = "KEY_LAUNCHMEDIA")] # [doc = "Godot enumerator name: `KEY_LAUNCHMEDIA`"] pub const LAUNCHMEDIA : Self = Self { ord : 4194399 } ; # [doc (alias = "KEY_LAUNCH0")] # [doc = "Godot enumerator name: `KEY_LAUNCH0`"] pub const LAUNCH0 : Self = Self { ord : 4194400 } ; # [doc (alias = "KEY_LAUNCH1")] # [doc = "Godot enumerator name: `KEY_LAUNCH1`"] pub const LAUNCH1 : Self = Self { ord : 4194401 } ; # [doc (alias = "KEY_LAUNCH2")] # [doc = "Godot enumerator name: `KEY_LAUNCH2`"] pub const LAUNCH2 : Self = Self { ord : 4194402 } ; # [doc (alias = "KEY_LAUNCH3")] # [doc = "Godot enumerator name: `KEY_LAUNCH3`"] pub const LAUNCH3 : Self = Self { ord : 4194403 } ; # [doc (alias = "KEY_LAUNCH4")] # [doc = "Godot enumerator name: `KEY_LAUNCH4`"] pub const LAUNCH4 : Self = Self { ord : 4194404 } ; # [doc (alias = "KEY_LAUNCH5")] # [doc = "Godot enumerator name: `KEY_LAUNCH5`"] pub const LAUNCH5 : Self = Self { ord : 4194405 } ; # [doc (alias = "KEY_LAUNCH6")] # [doc = "Godot enumerator name: `KEY_LAUNCH6`"] pub const LAUNCH6 : Self = Self { ord : 4194406 } ; # [doc (alias = "KEY_LAUNCH7")] # [doc = "Godot enumerator name: `KEY_LAUNCH7`"] pub const LAUNCH7 : Self = Self { ord : 4194407 } ; # [doc (alias = "KEY_LAUNCH8")] # [doc = "Godot enumerator name: `KEY_LAUNCH8`"] pub const LAUNCH8 : Self = Self { ord : 4194408 } ; # [doc (alias = "KEY_LAUNCH9")] # [doc = "Godot enumerator name: `KEY_LAUNCH9`"] pub const LAUNCH9 : Self = Self { ord : 4194409 } ; # [doc (alias = "KEY_LAUNCHA")] # [doc = "Godot enumerator name: `KEY_LAUNCHA`"] pub const LAUNCHA : Self = Self { ord : 4194410 } ; # [doc (alias = "KEY_LAUNCHB")] # [doc = "Godot enumerator name: `KEY_LAUNCHB`"] pub const LAUNCHB : Self = Self { ord : 4194411 } ; # [doc (alias = "KEY_LAUNCHC")] # [doc = "Godot enumerator name: `KEY_LAUNCHC`"] pub const LAUNCHC : Self = Self { ord : 4194412 } ; # [doc (alias = "KEY_LAUNCHD")] # [doc = "Godot enumerator name: `KEY_LAUNCHD`"] pub const LAUNCHD : Self = Self { ord : 4194413 } ; # [doc (alias = "KEY_LAUNCHE")] # [doc = "Godot enumerator name: `KEY_LAUNCHE`"] pub const LAUNCHE : Self = Self { ord : 4194414 } ; # [doc (alias = "KEY_LAUNCHF")] # [doc = "Godot enumerator name: `KEY_LAUNCHF`"] pub const LAUNCHF : Self = Self { ord : 4194415 } ; # [doc (alias = "KEY_GLOBE")] # [doc = "Godot enumerator name: `KEY_GLOBE`"] pub const GLOBE : Self = Self { ord : 4194416 } ; # [doc (alias = "KEY_KEYBOARD")] # [doc = "Godot enumerator name: `KEY_KEYBOARD`"] pub const KEYBOARD : Self = Self { ord : 4194417 } ; # [doc (alias = "KEY_JIS_EISU")] # [doc = "Godot enumerator name: `KEY_JIS_EISU`"] pub const JIS_EISU : Self = Self { ord : 4194418 } ; # [doc (alias = "KEY_JIS_KANA")] # [doc = "Godot enumerator name: `KEY_JIS_KANA`"] pub const JIS_KANA : Self = Self { ord : 4194419 } ; # [doc (alias = "KEY_UNKNOWN")] # [doc = "Godot enumerator name: `KEY_UNKNOWN`"] pub const UNKNOWN : Self = Self { ord : 8388607 } ; # [doc (alias = "KEY_SPACE")] # [doc = "Godot enumerator name: `KEY_SPACE`"] pub const SPACE : Self = Self { ord : 32 } ; # [doc (alias = "KEY_EXCLAM")] # [doc = "Godot enumerator name: `KEY_EXCLAM`"] pub const EXCLAM : Self = Self { ord : 33 } ; # [doc (alias = "KEY_QUOTEDBL")] # [doc = "Godot enumerator name: `KEY_QUOTEDBL`"] pub const QUOTEDBL : Self = Self { ord : 34 } ; # [doc (alias = "KEY_NUMBERSIGN")] # [doc = "Godot enumerator name: `KEY_NUMBERSIGN`"] pub const NUMBERSIGN : Self = Self { ord : 35 } ; # [doc (alias = "KEY_DOLLAR")] # [doc = "Godot enumerator name: `KEY_DOLLAR`"] pub const DOLLAR : Self = Self { ord : 36 } ; # [doc (alias = "KEY_PERCENT")] # [doc = "Godot enumerator name: `KEY_PERCENT`"] pub const PERCENT : Self = Self { ord : 37 } ; # [doc (alias = "KEY_AMPERSAND")] # [doc = "Godot enumerator name: `KEY_AMPERSAND`"] pub const AMPERSAND : Self = Self { ord : 38 } ; # [doc (alias = "KEY_APOSTROPHE")] # [doc = "Godot enumerator name: `KEY_APOSTROPHE`"] pub const APOSTROPHE : Self = Self { ord : 39 } ; # [doc (alias = "KEY_PARENLEFT")] # [doc = "Godot enumerator name: `KEY_PARENLEFT`"] pub const PARENLEFT : Self = Self { ord : 40 } ; # [doc (alias = "KEY_PARENRIGHT")] # [doc = "Godot enumerator name: `KEY_PARENRIGHT`"] pub const PARENRIGHT : Self = Self { ord : 41 } ; # [doc (alias = "KEY_ASTERISK")] # [doc = "Godot enumerator name: `KEY_ASTERISK`"] pub const ASTERISK : Self = Self { ord : 42 } ; # [doc (alias = "KEY_PLUS")] # [doc = "Godot enumerator name: `KEY_PLUS`"] pub const PLUS : Self = Self { ord : 43 } ; # [doc (alias = "KEY_COMMA")] # [doc = "Godot enumerator name: `KEY_COMMA`"] pub const COMMA : Self = Self { ord : 44 } ; # [doc (alias = "KEY_MINUS")] # [doc = "Godot enumerator name: `KEY_MINUS`"] pub const MINUS : Self = Self { ord : 45 } ; # [doc (alias = "KEY_PERIOD")] # [doc = "Godot enumerator name: `KEY_PERIOD`"] pub const PERIOD : Self = Self { ord : 46 } ; # [doc (alias = "KEY_SLASH")] # [doc = "Godot enumerator name: `KEY_SLASH`"] pub const SLASH : Self = Self { ord : 47 } ; pub const KEY_0 : Self = Self { ord : 48 } ; pub const KEY_1 : Self = Self { ord : 49 } ; pub const KEY_2 : Self = Self { ord : 50 } ; pub const KEY_3 : Self = Self { ord : 51 } ; pub const KEY_4 : Self = Self { ord : 52 } ; pub const KEY_5 : Self = Self { ord : 53 } ; pub const KEY_6 : Self = Self { ord : 54 } ; pub const KEY_7 : Self = Self { ord : 55 } ; pub const KEY_8 : Self = Self { ord : 56 } ; pub const KEY_9 : Self = Self { ord : 57 } ; # [doc (alias = "KEY_COLON")] # [doc = "Godot enumerator name: `KEY_COLON`"] pub const COLON : Self = Self { ord : 58 } ; # [doc (alias = "KEY_SEMICOLON")] # [doc = "Godot enumerator name: `KEY_SEMICOLON`"] pub const SEMICOLON : Self = Self { ord : 59 } ; # [doc (alias = "KEY_LESS")] # [doc = "Godot enumerator name: `KEY_LESS`"] pub const LESS : Self = Self { ord : 60 } ; # [doc (alias = "KEY_EQUAL")] # [doc = "Godot enumerator name: `KEY_EQUAL`"] pub const EQUAL : Self = Self { ord : 61 } ; # [doc (alias = "KEY_GREATER")] # [doc = "Godot enumerator name: `KEY_GREATER`"] pub const GREATER : Self = Self { ord : 62 } ; # [doc (alias = "KEY_QUESTION")] # [doc = "Godot enumerator name: `KEY_QUESTION`"] pub const QUESTION : Self = Self { ord : 63 } ; # [doc (alias = "KEY_AT")] # [doc = "Godot enumerator name: `KEY_AT`"] pub const AT : Self = Self { ord : 64 } ; # [doc (alias = "KEY_A")] # [doc = "Godot enumerator name: `KEY_A`"] pub const A : Self = Self { ord : 65 } ; # [doc (alias = "KEY_B")] # [doc = "Godot enumerator name: `KEY_B`"] pub const B : Self = Self { ord : 66 } ; # [doc (alias = "KEY_C")] # [doc = "Godot enumerator name: `KEY_C`"] pub const C : Self = Self { ord : 67 } ; # [doc (alias = "KEY_D")] # [doc = "Godot enumerator name: `KEY_D`"] pub const D : Self = Self { ord : 68 } ; # [doc (alias = "KEY_E")] # [doc = "Godot enumerator name: `KEY_E`"] pub const E : Self = Self { ord : 69 } ; # [doc (alias = "KEY_F")] # [doc = "Godot enumerator name: `KEY_F`"] pub const F : Self = Self { ord : 70 } ; # [doc (alias = "KEY_G")] # [doc = "Godot enumerator name: `KEY_G`"] pub const G : Self = Self { ord : 71 } ; # [doc (alias = "KEY_H")] # [doc = "Godot enumerator name: `KEY_H`"] pub const H : Self = Self { ord : 72 } ; # [doc (alias = "KEY_I")] # [doc = "Godot enumerator name: `KEY_I`"] pub const I : Self = Self { ord : 73 } ; # [doc (alias = "KEY_J")] # [doc = "Godot enumerator name: `KEY_J`"] pub const J : Self = Self { ord : 74 } ; # [doc (alias = "KEY_K")] # [doc = "Godot enumerator name: `KEY_K`"] pub const K : Self = Self { ord : 75 } ; # [doc (alias = "KEY_L")] # [doc = "Godot enumerator name: `KEY_L`"] pub const L : Self = Self { ord : 76 } ; # [doc (alias = "KEY_M")] # [doc = "Godot enumerator name: `KEY_M`"] pub const M : Self = Self { ord : 77 } ; # [doc (alias = "KEY_N")] # [doc = "Godot enumerator name: `KEY_N`"] pub const N : Self = Self { ord : 78 } ; # [doc (alias = "KEY_O")] # [doc = "Godot enumerator name: `KEY_O`"] pub const O : Self = Self { ord : 79 } ; # [doc (alias = "KEY_P")] # [doc = "Godot enumerator name: `KEY_P`"] pub const P : Self = Self { ord : 80 } ; # [doc (alias = "KEY_Q")] # [doc = "Godot enumerator name: `KEY_Q`"] pub const Q : Self = Self { ord : 81 } ; # [doc (alias = "KEY_R")] # [doc = "Godot enumerator name: `KEY_R`"] pub const R : Self = Self { ord : 82 } ; # [doc (alias = "KEY_S")] # [doc = "Godot enumerator name: `KEY_S`"] pub const S : Self = Self { ord : 83 } ; # [doc (alias = "KEY_T")] # [doc = "Godot enumerator name: `KEY_T`"] pub const T : Self = Self { ord : 84 } ; # [doc (alias = "KEY_U")] # [doc = "Godot enumerator name: `KEY_U`"] pub const U : Self = Self { ord : 85 } ; # [doc (alias = "KEY_V")] # [doc = "Godot enumerator name: `KEY_V`"] pub const V : Self = Self { ord : 86 } ; # [doc (alias = "KEY_W")] # [doc = "Godot enumerator name: `KEY_W`"] pub const W : Self = Self { ord : 87 } ; # [doc (alias = "KEY_X")] # [doc = "Godot enumerator name: `KEY_X`"] pub const X : Self = Self { ord : 88 } ; # [doc (alias = "KEY_Y")] # [doc = "Godot enumerator name: `KEY_Y`"] pub const Y : Self = Self { ord : 89 } ; # [doc (alias = "KEY_Z")] # [doc = "Godot enumerator name: `KEY_Z`"] pub const Z : Self = Self { ord : 90 } ; # [doc (alias = "KEY_BRACKETLEFT")] # [doc = "Godot enumerator name: `KEY_BRACKETLEFT`"] pub const BRACKETLEFT : Self = Self { ord : 91 } ; # [doc (alias = "KEY_BACKSLASH")] # [doc = "Godot enumerator name: `KEY_BACKSLASH`"] pub const BACKSLASH : Self = Self { ord : 92 } ; # [doc (alias = "KEY_BRACKETRIGHT")] # [doc = "Godot enumerator name: `KEY_BRACKETRIGHT`"] pub const BRACKETRIGHT : Self = Self { ord : 93 } ; # [doc (alias = "KEY_ASCIICIRCUM")] # [doc = "Godot enumerator name: `KEY_ASCIICIRCUM`"] pub const ASCIICIRCUM : Self = Self { ord : 94 } ; # [doc (alias = "KEY_UNDERSCORE")] # [doc = "Godot enumerator name: `KEY_UNDERSCORE`"] pub const UNDERSCORE : Self = Self { ord : 95 } ; # [doc (alias = "KEY_QUOTELEFT")] # [doc = "Godot enumerator name: `KEY_QUOTELEFT`"] pub const QUOTELEFT : Self = Self { ord : 96 } ; # [doc (alias = "KEY_BRACELEFT")] # [doc = "Godot enumerator name: `KEY_BRACELEFT`"] pub const BRACELEFT : Self = Self { ord : 123 } ; # [doc (alias = "KEY_BAR")] # [doc = "Godot enumerator name: `KEY_BAR`"] pub const BAR : Self = Self { ord : 124 } ; # [doc (alias = "KEY_BRACERIGHT")] # [doc = "Godot enumerator name: `KEY_BRACERIGHT`"] pub const BRACERIGHT : Self = Self { ord : 125 } ; # [doc (alias = "KEY_ASCIITILDE")] # [doc = "Godot enumerator name: `KEY_ASCIITILDE`"] pub const ASCIITILDE : Self = Self { ord : 126 } ; # [doc (alias = "KEY_YEN")] # [doc = "Godot enumerator name: `KEY_YEN`"] pub const YEN : Self = Self { ord : 165 } ; # [doc (alias = "KEY_SECTION")] # [doc = "Godot enumerator name: `KEY_SECTION`"] pub const SECTION : Self = Self { ord : 167 } ; # [allow (unreachable_patterns)] fn enumerator_name (self) -> Option < & 'static str > { match self { Self :: NONE => Some ("NONE") , Self :: SPECIAL => Some ("SPECIAL") , Self :: ESCAPE => Some ("ESCAPE") , Self :: TAB => Some ("TAB") , Self :: BACKTAB => Some ("BACKTAB") , Self :: BACKSPACE => Some ("BACKSPACE") , Self :: ENTER => Some ("ENTER") , Self :: KP_ENTER => Some ("KP_ENTER") , Self :: INSERT => Some ("INSERT") , Self :: DELETE => Some ("DELETE") , Self :: PAUSE => Some ("PAUSE") , Self :: PRINT => Some ("PRINT") , Self :: SYSREQ => Some ("SYSREQ") , Self :: CLEAR => Some ("CLEAR") , Self :: HOME => Some ("HOME") , Self :: END => Some ("END") , Self :: LEFT => Some ("LEFT") , Self :: UP => Some ("UP") , Self :: RIGHT => Some ("RIGHT") , Self :: DOWN => Some ("DOWN") , Self :: PAGEUP => Some ("PAGEUP") , Self :: PAGEDOWN => Some ("PAGEDOWN") , Self :: SHIFT => Some ("SHIFT") , Self :: CTRL => Some ("CTRL") , Self :: META => Some ("META") , Self :: ALT => Some ("ALT") , Self :: CAPSLOCK => Some ("CAPSLOCK") , Self :: NUMLOCK => Some ("NUMLOCK") , Self :: SCROLLLOCK => Some ("SCROLLLOCK") , Self :: F1 => Some ("F1") , Self :: F2 => Some ("F2") , Self :: F3 => Some ("F3") , Self :: F4 => Some ("F4") , Self :: F5 => Some ("F5") , Self :: F6 => Some ("F6") , Self :: F7 => Some ("F7") , Self :: F8 => Some ("F8") , Self :: F9 => Some ("F9") , Self :: F10 => Some ("F10") , Self :: F11 => Some ("F11") , Self :: F12 => Some ("F12") , Self :: F13 => Some ("F13") , Self :: F14 => Some ("F14") , Self :: F15 => Some ("F15") , Self :: F16 => Some ("F16") , Self :: F17 => Some ("F17") , Self :: F18 => Some ("F18") , Self :: F19 => Some ("F19") , Self :: F20 => Some ("F20") , Self :: F21 => Some ("F21") , Self :: F22 => Some ("F22") , Self :: F23 => Some ("F23") , Self :: F24 => Some ("F24") , Self :: F25 => Some ("F25") , Self :: F26 => Some ("F26") , Self :: F27 => Some ("F27") , Self :: F28 => Some ("F28") , Self :: F29 => Some ("F29") , Self :: F30 => Some ("F30") , Self :: F31 => Some ("F31") , Self :: F32 => Some ("F32") , Self :: F33 => Some ("F33") , Self :: F34 => Some ("F34") , Self :: F35 => Some ("F35") , Self :: KP_MULTIPLY => Some ("KP_MULTIPLY") , Self :: KP_DIVIDE => Some ("KP_DIVIDE") , Self :: KP_SUBTRACT => Some ("KP_SUBTRACT") , Self :: KP_PERIOD => Some ("KP_PERIOD") , Self :: KP_ADD => Some ("KP_ADD") , Self :: KP_0 => Some ("KP_0") , Self :: KP_1 => Some ("KP_1") , Self :: KP_2 => Some ("KP_2") , Self :: KP_3 => Some ("KP_3") , Self :: KP_4 => Some ("KP_4") , Self :: KP_5 => Some ("KP_5") , Self :: KP_6 => Some ("KP_6") , Self :: KP_7 => Some ("KP_7") , Self :: KP_8 => Some ("KP_8") , Self :: KP_9 => Some ("KP_9") , Self :: MENU => Some ("MENU") , Self :: HYPER => Some ("HYPER") , Self :: HELP => Some ("HELP") , Self :: BACK => Some ("BACK") , Self :: FORWARD => Some ("FORWARD") , Self :: STOP => Some ("STOP") , Self :: REFRESH => Some ("REFRESH") , Self :: VOLUMEDOWN => Some ("VOLUMEDOWN") , Self :: VOLUMEMUTE => Some ("VOLUMEMUTE") , Self :: VOLUMEUP => Some ("VOLUMEUP") , Self :: MEDIAPLAY => Some ("MEDIAPLAY") , Self :: MEDIASTOP => Some ("MEDIASTOP") , Self :: MEDIAPREVIOUS => Some ("MEDIAPREVIOUS") , Self :: MEDIANEXT => Some ("MEDIANEXT") , Self :: MEDIARECORD => Some ("MEDIARECORD") , Self :: HOMEPAGE => Some ("HOMEPAGE") , Self :: FAVORITES => Some ("FAVORITES") , Self :: SEARCH => Some ("SEARCH") , Self :: STANDBY => Some ("STANDBY") , Self :: OPENURL => Some ("OPENURL") , Self :: LAUNCHMAIL => Some ("LAUNCHMAIL") , Self :: LAUNCHMEDIA => Some ("LAUNCHMEDIA") , Self :: LAUNCH0 => Some ("LAUNCH0") , Self :: LAUNCH1 => Some ("LAUNCH1") , Self :: LAUNCH2 => Some ("LAUNCH2") , Self :: LAUNCH3 => Some ("LAUNCH3") , Self :: LAUNCH4 => Some ("LAUNCH4") , Self :: LAUNCH5 => Some ("LAUNCH5") , Self :: LAUNCH6 => Some ("LAUNCH6") , Self :: LAUNCH7 => Some ("LAUNCH7") , Self :: LAUNCH8 => Some ("LAUNCH8") , Self :: LAUNCH9 => Some ("LAUNCH9") , Self :: LAUNCHA => Some ("LAUNCHA") , Self :: LAUNCHB => Some ("LAUNCHB") , Self :: LAUNCHC => Some ("LAUNCHC") , Self :: LAUNCHD => Some ("LAUNCHD") , Self :: LAUNCHE => Some ("LAUNCHE") , Self :: LAUNCHF => Some ("LAUNCHF") , Self :: GLOBE => Some ("GLOBE") , Self :: KEYBOARD => Some ("KEYBOARD") , Self :: JIS_EISU => Some ("JIS_EISU") , Self :: JIS_KANA => Some ("JIS_KANA") , Self :: UNKNOWN => Some ("UNKNOWN") , Self :: SPACE => Some ("SPACE") , Self :: EXCLAM => Some ("EXCLAM") , Self :: QUOTEDBL => Some ("QUOTEDBL") , Self :: NUMBERSIGN => Some ("NUMBERSIGN") , Self :: DOLLAR => Some ("DOLLAR") , Self :: PERCENT => Some ("PERCENT") , Self :: AMPERSAND => Some ("AMPERSAND") , Self :: APOSTROPHE => Some ("APOSTROPHE") , Self :: PARENLEFT => Some ("PARENLEFT") , Self :: PARENRIGHT => Some ("PARENRIGHT") , Self :: ASTERISK => Some ("ASTERISK") , Self :: PLUS => Some ("PLUS") , Self :: COMMA => Some ("COMMA") , Self :: MINUS => Some ("MINUS") , Self :: PERIOD => Some ("PERIOD") , Self :: SLASH => Some ("SLASH") , Self :: KEY_0 => Some ("KEY_0") , Self :: KEY_1 => Some ("KEY_1") , Self :: KEY_2 => Some ("KEY_2") , Self :: KEY_3 => Some ("KEY_3") , Self :: KEY_4 => Some ("KEY_4") , Self :: KEY_5 => Some ("KEY_5") , Self :: KEY_6 => Some ("KEY_6") , Self :: KEY_7 => Some ("KEY_7") , Self :: KEY_8 => Some ("KEY_8") , Self :: KEY_9 => Some ("KEY_9") , Self :: COLON => Some ("COLON") , Self :: SEMICOLON => Some ("SEMICOLON") , Self :: LESS => Some ("LESS") , Self :: EQUAL => Some ("EQUAL") , Self :: GREATER => Some ("GREATER") , Self :: QUESTION => Some ("QUESTION") , Self :: AT => Some ("AT") , Self :: A => Some ("A") , Self :: B => Some ("B") , Self :: C => Some ("C") , Self :: D => Some ("D") , Self :: E => Some ("E") , Self :: F => Some ("F") , Self :: G => Some ("G") , Self :: H => Some ("H") , Self :: I => Some ("I") , Self :: J => Some ("J") , Self :: K => Some ("K") , Self :: L => Some ("L") , Self :: M => Some ("M") , Self :: N => Some ("N") , Self :: O => Some ("O") , Self :: P => Some ("P") , Self :: Q => Some ("Q") , Self :: R => Some ("R") , Self :: S => Some ("S") , Self :: T => Some ("T") , Self :: U => Some ("U") , Self :: V => Some ("V") , Self :: W => Some ("W") , Self :: X => Some ("X") , Self :: Y => Some ("Y") , Self :: Z => Some ("Z") , Self :: BRACKETLEFT => Some ("BRACKETLEFT") , Self :: BACKSLASH => Some ("BACKSLASH") , Self :: BRACKETRIGHT => Some ("BRACKETRIGHT") , Self :: ASCIICIRCUM => Some ("ASCIICIRCUM") , Self :: UNDERSCORE => Some ("UNDERSCORE") , Self :: QUOTELEFT => Some ("QUOTELEFT") , Self :: BRACELEFT => Some ("BRACELEFT") , Self :: BAR => Some ("BAR") , Self :: BRACERIGHT => Some ("BRACERIGHT") , Self :: ASCIITILDE => Some ("ASCIITILDE") , Self :: YEN => Some ("YEN") , Self :: SECTION => Some ("SECTION") , _ => None , } } } impl std :: fmt :: Debug for Key { fn fmt (& self , f : & mut std :: fmt :: Formatter < '_ >) -> std :: fmt :: Result { match self . enumerator_name () { Some (enumerator) => f . write_str (enumerator) , None => f . debug_struct (stringify ! (Key)) . field ("ord" , & self . ord) . finish () , } } } impl crate :: obj :: EngineEnum for Key { fn try_from_ord (ord : i32) -> Option < Self > { match ord { 0 | 32 | 33 | 34 | 35 | 36 | 37 | 38 | 39 | 40 | 41 | 42 | 43 | 44 | 45 | 46 | 47 | 48 | 49 | 50 | 51 | 52 | 53 | 54 | 55 | 56 | 57 | 58 | 59 | 60 | 61 | 62 | 63 | 64 | 65 | 66 | 67 | 68 | 69 | 70 | 71 | 72 | 73 | 74 | 75 | 76 | 77 | 78 | 79 | 80 | 81 | 82 | 83 | 84 | 85 | 86 | 87 | 88 | 89 | 90 | 91 | 92 | 93 | 94 | 95 | 96 | 123 | 124 | 125 | 126 | 165 | 167 | 4194304 | 4194305 | 4194306 | 4194307 | 4194308 | 4194309 | 4194310 | 4194311 | 4194312 | 4194313 | 4194314 | 4194315 | 4194316 | 4194317 | 4194318 | 4194319 | 4194320 | 4194321 | 4194322 | 4194323 | 4194324 | 4194325 | 4194326 | 4194327 | 4194328 | 4194329 | 4194330 | 4194331 | 4194332 | 4194333 | 4194334 | 4194335 | 4194336 | 4194337 | 4194338 | 4194339 | 4194340 | 4194341 | 4194342 | 4194343 | 4194344 | 4194345 | 4194346 | 4194347 | 4194348 | 4194349 | 4194350 | 4194351 | 4194352 | 4194353 | 4194354 | 4194355 | 4194356 | 4194357 | 4194358 | 4194359 | 4194360 | 4194361 | 4194362 | 4194363 | 4194364 | 4194365 | 4194366 | 4194370 | 4194371 | 4194373 | 4194376 | 4194377 | 4194378 | 4194379 | 4194380 | 4194381 | 4194382 | 4194388 | 4194389 | 4194390 | 4194391 | 4194392 | 4194393 | 4194394 | 4194395 | 4194396 | 4194397 | 4194398 | 4194399 | 4194400 | 4194401 | 4194402 | 4194403 | 4194404 | 4194405 | 4194406 | 4194407 | 4194408 | 4194409 | 4194410 | 4194411 | 4194412 | 4194413 | 4194414 | 4194415 | 4194416 | 4194417 | 4194418 | 4194419 | 4194433 | 4194434 | 4194435 | 4194436 | 4194437 | 4194438 | 4194439 | 4194440 | 4194441 | 4194442 | 4194443 | 4194444 | 4194445 | 4194446 | 4194447 | 8388607 => Some (Self { ord }) , _ => None , } } fn ord (self) -> i32 { self . ord } } impl crate :: meta :: GodotConvert for Key { type Via = i32 ; } impl crate :: meta :: ToGodot for Key { fn to_godot (& self) -> Self :: Via { < Self as crate :: obj :: EngineEnum > :: ord (* self) } } impl crate :: meta :: FromGodot for Key { fn try_from_godot (via : Self :: Via) -> std :: result :: Result < Self , crate :: meta :: ConvertError > { Ok (Self { ord : via }) } } # [repr (transparent)] # [derive (Copy , Clone , Eq , PartialEq , Hash , Default ,)] pub struct KeyModifierMask { ord : u64 } impl KeyModifierMask { # [doc (alias = "KEY_CODE_MASK")] # [doc = "Godot enumerator name: `KEY_CODE_MASK`"] pub const CODE_MASK : Self = Self { ord : 8388607 } ; # [doc (alias = "KEY_MODIFIER_MASK")] # [doc = "Godot enumerator name: `KEY_MODIFIER_MASK`"] pub const MODIFIER_MASK : Self = Self { ord : 532676608 } ; # [doc (alias = "KEY_MASK_CMD_OR_CTRL")] # [doc = "Godot enumerator name: `KEY_MASK_CMD_OR_CTRL`"] pub const MASK_CMD_OR_CTRL : Self = Self { ord : 16777216 } ; # [doc (alias = "KEY_MASK_SHIFT")] # [doc = "Godot enumerator name: `KEY_MASK_SHIFT`"] pub const MASK_SHIFT : Self = Self { ord : 33554432 } ; # [doc (alias = "KEY_MASK_ALT")] # [doc = "Godot enumerator name: `KEY_MASK_ALT`"] pub const MASK_ALT : Self = Self { ord : 67108864 } ; # [doc (alias = "KEY_MASK_META")] # [doc = "Godot enumerator name: `KEY_MASK_META`"] pub const MASK_META : Self = Self { ord : 134217728 } ; # [doc (alias = "KEY_MASK_CTRL")] # [doc = "Godot enumerator name: `KEY_MASK_CTRL`"] pub const MASK_CTRL : Self = Self { ord : 268435456 } ; # [doc (alias = "KEY_MASK_KPAD")] # [doc = "Godot enumerator name: `KEY_MASK_KPAD`"] pub const MASK_KPAD : Self = Self { ord : 536870912 } ; # [doc (alias = "KEY_MASK_GROUP_SWITCH")] # [doc = "Godot enumerator name: `KEY_MASK_GROUP_SWITCH`"] pub const MASK_GROUP_SWITCH : Self = Self { ord : 1073741824 } ; # [allow (unreachable_patterns)] fn enumerator_name (self) -> Option < & 'static str > { match self { Self :: CODE_MASK => Some ("CODE_MASK") , Self :: MODIFIER_MASK => Some ("MODIFIER_MASK") , Self :: MASK_CMD_OR_CTRL => Some ("MASK_CMD_OR_CTRL") , Self :: MASK_SHIFT => Some ("MASK_SHIFT") , Self :: MASK_ALT => Some ("MASK_ALT") , Self :: MASK_META => Some ("MASK_META") , Self :: MASK_CTRL => Some ("MASK_CTRL") , Self :: MASK_KPAD => Some ("MASK_KPAD") , Self :: MASK_GROUP_SWITCH => Some ("MASK_GROUP_SWITCH") , _ => None , } } } impl std :: fmt :: Debug for KeyModifierMask { fn fmt (& self , f : & mut std :: fmt :: Formatter < '_ >) -> std :: fmt :: Result { match self . enumerator_name () { Some (enumerator) => f . write_str (enumerator) , None => f . debug_struct (stringify ! (KeyModifierMask)) . field ("ord" , & self . ord) . finish () , } } } impl crate :: obj :: EngineBitfield for KeyModifierMask { fn try_from_ord (ord : u64) -> Option < Self > { Some (Self { ord }) } fn ord (self) -> u64 { self . ord } } impl std :: ops :: BitOr for KeyModifierMask { type Output = Self ; fn bitor (self , rhs : Self) -> Self :: Output { Self { ord : self . ord | rhs . ord } } } impl std :: ops :: BitOrAssign for KeyModifierMask { fn bitor_assign (& mut self , rhs : Self) { * self = * self | rhs ; } } impl crate :: meta :: GodotConvert for KeyModifierMask { type Via = u64 ; } impl crate :: meta :: ToGodot for KeyModifierMask { fn to_godot (& self) -> Self :: Via { < Self as crate :: obj :: EngineBitfield > :: ord (* self) } } impl crate :: meta :: FromGodot for KeyModifierMask { fn try_from_godot (via : Self :: Via) -> std :: result :: Result < Self , crate :: meta :: ConvertError > { Ok (Self { ord : via }) } } # [repr (transparent)] # [derive (Copy , Clone , Eq , PartialEq , Hash ,)] pub struct KeyLocation { ord : i32 } impl KeyLocation { # [doc (alias = "KEY_LOCATION_UNSPECIFIED")] # [doc = "Godot enumerator name: `KEY_LOCATION_UNSPECIFIED`"] pub const UNSPECIFIED : Self = Self { ord : 0 } ; # [doc (alias = "KEY_LOCATION_LEFT")] # [doc = "Godot enumerator name: `KEY_LOCATION_LEFT`"] pub const LEFT : Self = Self { ord : 1 } ; # [doc (alias = "KEY_LOCATION_RIGHT")] # [doc = "Godot enumerator name: `KEY_LOCATION_RIGHT`"] pub const RIGHT : Self = Self { ord : 2 } ; # [allow (unreachable_patterns)] fn enumerator_name (self) -> Option < & 'static str > { match self { Self :: UNSPECIFIED => Some ("UNSPECIFIED") , Self :: LEFT => Some ("LEFT") , Self :: RIGHT => Some ("RIGHT") , _ => None , } } } impl std :: fmt :: Debug for KeyLocation { fn fmt (& self , f : & mut std :: fmt :: Formatter < '_ >) -> std :: fmt :: Result { match self . enumerator_name () { Some (enumerator) => f . write_str (enumerator) , None => f . debug_struct (stringify ! (KeyLocation)) . field ("ord" , & self . ord) . finish () , } } } impl crate :: obj :: EngineEnum for KeyLocation { fn try_from_ord (ord : i32) -> Option < Self > { match ord { 0 | 1 | 2 => Some (Self { ord }) , _ => None , } } fn ord (self) -> i32 { self . ord } } impl crate :: meta :: GodotConvert for KeyLocation { type Via = i32 ; } impl crate :: meta :: ToGodot for KeyLocation { fn to_godot (& self) -> Self :: Via { < Self as crate :: obj :: EngineEnum > :: ord (* self) } } impl crate :: meta :: FromGodot for KeyLocation { fn try_from_godot (via : Self :: Via) -> std :: result :: Result < Self , crate :: meta :: ConvertError > { Ok (Self { ord : via }) } } # [repr (transparent)] # [derive (Copy , Clone , Eq , PartialEq , Hash ,)] pub struct MouseButton { ord : i32 } impl MouseButton { # [doc (alias = "MOUSE_BUTTON_NONE")] # [doc = "Godot enumerator name: `MOUSE_BUTTON_NONE`"] pub const NONE : Self = Self { ord : 0 } ; # [doc (alias = "MOUSE_BUTTON_LEFT")] # [doc = "Godot enumerator name: `MOUSE_BUTTON_LEFT`"] pub const LEFT : Self = Self { ord : 1 } ; # [doc (alias = "MOUSE_BUTTON_RIGHT")] # [doc = "Godot enumerator name: `MOUSE_BUTTON_RIGHT`"] pub const RIGHT : Self = Self { ord : 2 } ; # [doc (alias = "MOUSE_BUTTON_MIDDLE")] # [doc = "Godot enumerator name: `MOUSE_BUTTON_MIDDLE`"] pub const MIDDLE : Self = Self { ord : 3 } ; # [doc (alias = "MOUSE_BUTTON_WHEEL_UP")] # [doc = "Godot enumerator name: `MOUSE_BUTTON_WHEEL_UP`"] pub const WHEEL_UP : Self = Self { ord : 4 } ; # [doc (alias = "MOUSE_BUTTON_WHEEL_DOWN")] # [doc = "Godot enumerator name: `MOUSE_BUTTON_WHEEL_DOWN`"] pub const WHEEL_DOWN : Self = Self { ord : 5 } ; # [doc (alias = "MOUSE_BUTTON_WHEEL_LEFT")] # [doc = "Godot enumerator name: `MOUSE_BUTTON_WHEEL_LEFT`"] pub const WHEEL_LEFT : Self = Self { ord : 6 } ; # [doc (alias = "MOUSE_BUTTON_WHEEL_RIGHT")] # [doc = "Godot enumerator name: `MOUSE_BUTTON_WHEEL_RIGHT`"] pub const WHEEL_RIGHT : Self = Self { ord : 7 } ; # [doc (alias = "MOUSE_BUTTON_XBUTTON1")] # [doc = "Godot enumerator name: `MOUSE_BUTTON_XBUTTON1`"] pub const XBUTTON1 : Self = Self { ord : 8 } ; # [doc (alias = "MOUSE_BUTTON_XBUTTON2")] # [doc = "Godot enumerator name: `MOUSE_BUTTON_XBUTTON2`"] pub const XBUTTON2 : Self = Self { ord : 9 } ; # [allow (unreachable_patterns)] fn enumerator_name (self) -> Option < & 'static str > { match self { Self :: NONE => Some ("NONE") , Self :: LEFT => Some ("LEFT") , Self :: RIGHT => Some ("RIGHT") , Self :: MIDDLE => Some ("MIDDLE") , Self :: WHEEL_UP => Some ("WHEEL_UP") , Self :: WHEEL_DOWN => Some ("WHEEL_DOWN") , Self :: WHEEL_LEFT => Some ("WHEEL_LEFT") , Self :: WHEEL_RIGHT => Some ("WHEEL_RIGHT") , Self :: XBUTTON1 => Some ("XBUTTON1") , Self :: XBUTTON2 => Some ("XBUTTON2") , _ => None , } } } impl std :: fmt :: Debug for MouseButton { fn fmt (& self , f : & mut std :: fmt :: Formatter < '_ >) -> std :: fmt :: Result { match self . enumerator_name () { Some (enumerator) => f . write_str (enumerator) , None => f . debug_struct (stringify ! (MouseButton)) . field ("ord" , & self . ord) . finish () , } } } impl crate :: obj :: EngineEnum for MouseButton { fn try_from_ord (ord : i32) -> Option < Self > { match ord { 0 | 1 | 2 | 3 | 4 | 5 | 6 | 7 | 8 | 9 => Some (Self { ord }) , _ => None , } } fn ord (self) -> i32 { self . ord } } impl crate :: meta :: GodotConvert for MouseButton { type Via = i32 ; } impl crate :: meta :: ToGodot for MouseButton { fn to_godot (& self) -> Self :: Via { < Self as crate :: obj :: EngineEnum > :: ord (* self) } } impl crate :: meta :: FromGodot for MouseButton { fn try_from_godot (via : Self :: Via) -> std :: result :: Result < Self , crate :: meta :: ConvertError > { Ok (Self { ord : via }) } } # [repr (transparent)] # [derive (Copy , Clone , Eq , PartialEq , Hash , Default ,)] pub struct MouseButtonMask { ord : u64 } impl MouseButtonMask { # [doc (alias = "MOUSE_BUTTON_MASK_LEFT")] # [doc = "Godot enumerator name: `MOUSE_BUTTON_MASK_LEFT`"] pub const LEFT : Self = Self { ord : 1 } ; # [doc (alias = "MOUSE_BUTTON_MASK_RIGHT")] # [doc = "Godot enumerator name: `MOUSE_BUTTON_MASK_RIGHT`"] pub const RIGHT : Self = Self { ord : 2 } ; # [doc (alias = "MOUSE_BUTTON_MASK_MIDDLE")] # [doc = "Godot enumerator name: `MOUSE_BUTTON_MASK_MIDDLE`"] pub const MIDDLE : Self = Self { ord : 4 } ; # [doc (alias = "MOUSE_BUTTON_MASK_MB_XBUTTON1")] # [doc = "Godot enumerator name: `MOUSE_BUTTON_MASK_MB_XBUTTON1`"] pub const MB_XBUTTON1 : Self = Self { ord : 128 } ; # [doc (alias = "MOUSE_BUTTON_MASK_MB_XBUTTON2")] # [doc = "Godot enumerator name: `MOUSE_BUTTON_MASK_MB_XBUTTON2`"] pub const MB_XBUTTON2 : Self = Self { ord : 256 } ; # [allow (unreachable_patterns)] fn enumerator_name (self) -> Option < & 'static str > { match self { Self :: LEFT => Some ("LEFT") , Self :: RIGHT => Some ("RIGHT") , Self :: MIDDLE => Some ("MIDDLE") , Self :: MB_XBUTTON1 => Some ("MB_XBUTTON1") , Self :: MB_XBUTTON2 => Some ("MB_XBUTTON2") , _ => None , } } } impl std :: fmt :: Debug for MouseButtonMask { fn fmt (& self , f : & mut std :: fmt :: Formatter < '_ >) -> std :: fmt :: Result { match self . enumerator_name () { Some (enumerator) => f . write_str (enumerator) , None => f . debug_struct (stringify ! (MouseButtonMask)) . field ("ord" , & self . ord) . finish () , } } } impl crate :: obj :: EngineBitfield for MouseButtonMask { fn try_from_ord (ord : u64) -> Option < Self > { Some (Self { ord }) } fn ord (self) -> u64 { self . ord } } impl std :: ops :: BitOr for MouseButtonMask { type Output = Self ; fn bitor (self , rhs : Self) -> Self :: Output { Self { ord : self . ord | rhs . ord } } } impl std :: ops :: BitOrAssign for MouseButtonMask { fn bitor_assign (& mut self , rhs : Self) { * self = * self | rhs ; } } impl crate :: meta :: GodotConvert for MouseButtonMask { type Via = u64 ; } impl crate :: meta :: ToGodot for MouseButtonMask { fn to_godot (& self) -> Self :: Via { < Self as crate :: obj :: EngineBitfield > :: ord (* self) } } impl crate :: meta :: FromGodot for MouseButtonMask { fn try_from_godot (via : Self :: Via) -> std :: result :: Result < Self , crate :: meta :: ConvertError > { Ok (Self { ord : via }) } } # [repr (transparent)] # [derive (Copy , Clone , Eq , PartialEq , Hash ,)] pub struct JoyButton { ord : i32 } impl JoyButton { # [doc (alias = "JOY_BUTTON_INVALID")] # [doc = "Godot enumerator name: `JOY_BUTTON_INVALID`"] pub const INVALID : Self = Self { ord : - 1 } ; # [doc (alias = "JOY_BUTTON_A")] # [doc = "Godot enumerator name: `JOY_BUTTON_A`"] pub const A : Self = Self { ord : 0 } ; # [doc (alias = "JOY_BUTTON_B")] # [doc = "Godot enumerator name: `JOY_BUTTON_B`"] pub const B : Self = Self { ord : 1 } ; # [doc (alias = "JOY_BUTTON_X")] # [doc = "Godot enumerator name: `JOY_BUTTON_X`"] pub const X : Self = Self { ord : 2 } ; # [doc (alias = "JOY_BUTTON_Y")] # [doc = "Godot enumerator name: `JOY_BUTTON_Y`"] pub const Y : Self = Self { ord : 3 } ; # [doc (alias = "JOY_BUTTON_BACK")] # [doc = "Godot enumerator name: `JOY_BUTTON_BACK`"] pub const BACK : Self = Self { ord : 4 } ; # [doc (alias = "JOY_BUTTON_GUIDE")] # [doc = "Godot enumerator name: `JOY_BUTTON_GUIDE`"] pub const GUIDE : Self = Self { ord : 5 } ; # [doc (alias = "JOY_BUTTON_START")] # [doc = "Godot enumerator name: `JOY_BUTTON_START`"] pub const START : Self = Self { ord : 6 } ; # [doc (alias = "JOY_BUTTON_LEFT_STICK")] # [doc = "Godot enumerator name: `JOY_BUTTON_LEFT_STICK`"] pub const LEFT_STICK : Self = Self { ord : 7 } ; # [doc (alias = "JOY_BUTTON_RIGHT_STICK")] # [doc = "Godot enumerator name: `JOY_BUTTON_RIGHT_STICK`"] pub const RIGHT_STICK : Self = Self { ord : 8 } ; # [doc (alias = "JOY_BUTTON_LEFT_SHOULDER")] # [doc = "Godot enumerator name: `JOY_BUTTON_LEFT_SHOULDER`"] pub const LEFT_SHOULDER : Self = Self { ord : 9 } ; # [doc (alias = "JOY_BUTTON_RIGHT_SHOULDER")] # [doc = "Godot enumerator name: `JOY_BUTTON_RIGHT_SHOULDER`"] pub const RIGHT_SHOULDER : Self = Self { ord : 10 } ; # [doc (alias = "JOY_BUTTON_DPAD_UP")] # [doc = "Godot enumerator name: `JOY_BUTTON_DPAD_UP`"] pub const DPAD_UP : Self = Self { ord : 11 } ; # [doc (alias = "JOY_BUTTON_DPAD_DOWN")] # [doc = "Godot enumerator name: `JOY_BUTTON_DPAD_DOWN`"] pub const DPAD_DOWN : Self = Self { ord : 12 } ; # [doc (alias = "JOY_BUTTON_DPAD_LEFT")] # [doc = "Godot enumerator name: `JOY_BUTTON_DPAD_LEFT`"] pub const DPAD_LEFT : Self = Self { ord : 13 } ; # [doc (alias = "JOY_BUTTON_DPAD_RIGHT")] # [doc = "Godot enumerator name: `JOY_BUTTON_DPAD_RIGHT`"] pub const DPAD_RIGHT : Self = Self { ord : 14 } ; # [doc (alias = "JOY_BUTTON_MISC1")] # [doc = "Godot enumerator name: `JOY_BUTTON_MISC1`"] pub const MISC1 : Self = Self { ord : 15 } ; # [doc (alias = "JOY_BUTTON_PADDLE1")] # [doc = "Godot enumerator name: `JOY_BUTTON_PADDLE1`"] pub const PADDLE1 : Self = Self { ord : 16 } ; # [doc (alias = "JOY_BUTTON_PADDLE2")] # [doc = "Godot enumerator name: `JOY_BUTTON_PADDLE2`"] pub const PADDLE2 : Self = Self { ord : 17 } ; # [doc (alias = "JOY_BUTTON_PADDLE3")] # [doc = "Godot enumerator name: `JOY_BUTTON_PADDLE3`"] pub const PADDLE3 : Self = Self { ord : 18 } ; # [doc (alias = "JOY_BUTTON_PADDLE4")] # [doc = "Godot enumerator name: `JOY_BUTTON_PADDLE4`"] pub const PADDLE4 : Self = Self { ord : 19 } ; # [doc (alias = "JOY_BUTTON_TOUCHPAD")] # [doc = "Godot enumerator name: `JOY_BUTTON_TOUCHPAD`"] pub const TOUCHPAD : Self = Self { ord : 20 } ; # [doc (alias = "JOY_BUTTON_SDL_MAX")] # [doc = "Godot enumerator name: `JOY_BUTTON_SDL_MAX`"] pub const SDL_MAX : Self = Self { ord : 21 } ; # [doc (alias = "JOY_BUTTON_MAX")] # [doc = "Godot enumerator name: `JOY_BUTTON_MAX`"] pub const MAX : Self = Self { ord : 128 } ; # [allow (unreachable_patterns)] fn enumerator_name (self) -> Option < & 'static str > { match self { Self :: INVALID => Some ("INVALID") , Self :: A => Some ("A") , Self :: B => Some ("B") , Self :: X => Some ("X") , Self :: Y => Some ("Y") , Self :: BACK => Some ("BACK") , Self :: GUIDE => Some ("GUIDE") , Self :: START => Some ("START") , Self :: LEFT_STICK => Some ("LEFT_STICK") , Self :: RIGHT_STICK => Some ("RIGHT_STICK") , Self :: LEFT_SHOULDER => Some ("LEFT_SHOULDER") , Self :: RIGHT_SHOULDER => Some ("RIGHT_SHOULDER") , Self :: DPAD_UP => Some ("DPAD_UP") , Self :: DPAD_DOWN => Some ("DPAD_DOWN") , Self :: DPAD_LEFT => Some ("DPAD_LEFT") , Self :: DPAD_RIGHT => Some ("DPAD_RIGHT") , Self :: MISC1 => Some ("MISC1") , Self :: PADDLE1 => Some ("PADDLE1") , Self :: PADDLE2 => Some ("PADDLE2") , Self :: PADDLE3 => Some ("PADDLE3") , Self :: PADDLE4 => Some ("PADDLE4") , Self :: TOUCHPAD => Some ("TOUCHPAD") , Self :: SDL_MAX => Some ("SDL_MAX") , Self :: MAX => Some ("MAX") , _ => None , } } } impl std :: fmt :: Debug for JoyButton { fn fmt (& self , f : & mut std :: fmt :: Formatter < '_ >) -> std :: fmt :: Result { match self . enumerator_name () { Some (enumerator) => f . write_str (enumerator) , None => f . debug_struct (stringify ! (JoyButton)) . field ("ord" , & self . ord) . finish () , } } } impl crate :: obj :: EngineEnum for JoyButton { fn try_from_ord (ord : i32) -> Option < Self > { match ord { - 1 | 0 | 1 | 2 | 3 | 4 | 5 | 6 | 7 | 8 | 9 | 10 | 11 | 12 | 13 | 14 | 15 | 16 | 17 | 18 | 19 | 20 | 21 | 128 => Some (Self { ord }) , _ => None , } } fn ord (self) -> i32 { self . ord } } impl crate :: meta :: GodotConvert for JoyButton { type Via = i32 ; } impl crate :: meta :: ToGodot for JoyButton { fn to_godot (& self) -> Self :: Via { < Self as crate :: obj :: EngineEnum > :: ord (* self) } } impl crate :: meta :: FromGodot for JoyButton { fn try_from_godot (via : Self :: Via) -> std :: result :: Result < Self , crate :: meta :: ConvertError > { Ok (Self { ord : via }) } } # [repr (transparent)] # [derive (Copy , Clone , Eq , PartialEq , Hash ,)] pub struct JoyAxis { ord : i32 } impl JoyAxis { # [doc (alias = "JOY_AXIS_INVALID")] # [doc = "Godot enumerator name: `JOY_AXIS_INVALID`"] pub const INVALID : Self = Self { ord : - 1 } ; # [doc (alias = "JOY_AXIS_LEFT_X")] # [doc = "Godot enumerator name: `JOY_AXIS_LEFT_X`"] pub const LEFT_X : Self = Self { ord : 0 } ; # [doc (alias = "JOY_AXIS_LEFT_Y")] # [doc = "Godot enumerator name: `JOY_AXIS_LEFT_Y`"] pub const LEFT_Y : Self = Self { ord : 1 } ; # [doc (alias = "JOY_AXIS_RIGHT_X")] # [doc = "Godot enumerator name: `JOY_AXIS_RIGHT_X`"] pub const RIGHT_X : Self = Self { ord : 2 } ; # [doc (alias = "JOY_AXIS_RIGHT_Y")] # [doc = "Godot enumerator name: `JOY_AXIS_RIGHT_Y`"] pub const RIGHT_Y : Self = Self { ord : 3 } ; # [doc (alias = "JOY_AXIS_TRIGGER_LEFT")] # [doc = "Godot enumerator name: `JOY_AXIS_TRIGGER_LEFT`"] pub const TRIGGER_LEFT : Self = Self { ord : 4 } ; # [doc (alias = "JOY_AXIS_TRIGGER_RIGHT")] # [doc = "Godot enumerator name: `JOY_AXIS_TRIGGER_RIGHT`"] pub const TRIGGER_RIGHT : Self = Self { ord : 5 } ; # [doc (alias = "JOY_AXIS_SDL_MAX")] # [doc = "Godot enumerator name: `JOY_AXIS_SDL_MAX`"] pub const SDL_MAX : Self = Self { ord : 6 } ; # [doc (alias = "JOY_AXIS_MAX")] # [doc = "Godot enumerator name: `JOY_AXIS_MAX`"] pub const MAX : Self = Self { ord : 10 } ; # [allow (unreachable_patterns)] fn enumerator_name (self) -> Option < & 'static str > { match self { Self :: INVALID => Some ("INVALID") , Self :: LEFT_X => Some ("LEFT_X") , Self :: LEFT_Y => Some ("LEFT_Y") , Self :: RIGHT_X => Some ("RIGHT_X") , Self :: RIGHT_Y => Some ("RIGHT_Y") , Self :: TRIGGER_LEFT => Some ("TRIGGER_LEFT") , Self :: TRIGGER_RIGHT => Some ("TRIGGER_RIGHT") , Self :: SDL_MAX => Some ("SDL_MAX") , Self :: MAX => Some ("MAX") , _ => None , } } } impl std :: fmt :: Debug for JoyAxis { fn fmt (& self , f : & mut std :: fmt :: Formatter < '_ >) -> std :: fmt :: Result { match self . enumerator_name () { Some (enumerator) => f . write_str (enumerator) , None => f . debug_struct (stringify ! (JoyAxis)) . field ("ord" , & self . ord) . finish () , } } } impl crate :: obj :: EngineEnum for JoyAxis { fn try_from_ord (ord : i32) -> Option < Self > { match ord { - 1 | 0 | 1 | 2 | 3 | 4 | 5 | 6 | 10 => Some (Self { ord }) , _ => None , } } fn ord (self) -> i32 { self . ord } } impl crate :: meta :: GodotConvert for JoyAxis { type Via = i32 ; } impl crate :: meta :: ToGodot for JoyAxis { fn to_godot (& self) -> Self :: Via { < Self as crate :: obj :: EngineEnum > :: ord (* self) } } impl crate :: meta :: FromGodot for JoyAxis { fn try_from_godot (via : Self :: Via) -> std :: result :: Result < Self , crate :: meta :: ConvertError > { Ok (Self { ord : via }) } } # [doc = "Godot enum name: `MIDIMessage`."] # [repr (transparent)] # [derive (Copy , Clone , Eq , PartialEq , Hash ,)] pub struct MidiMessage { ord : i32 } impl MidiMessage { # [doc (alias = "MIDI_MESSAGE_NONE")] # [doc = "Godot enumerator name: `MIDI_MESSAGE_NONE`"] pub const NONE : Self = Self { ord : 0 } ; # [doc (alias = "MIDI_MESSAGE_NOTE_OFF")] # [doc = "Godot enumerator name: `MIDI_MESSAGE_NOTE_OFF`"] pub const NOTE_OFF : Self = Self { ord : 8 } ; # [doc (alias = "MIDI_MESSAGE_NOTE_ON")] # [doc = "Godot enumerator name: `MIDI_MESSAGE_NOTE_ON`"] pub const NOTE_ON : Self = Self { ord : 9 } ; # [doc (alias = "MIDI_MESSAGE_AFTERTOUCH")] # [doc = "Godot enumerator name: `MIDI_MESSAGE_AFTERTOUCH`"] pub const AFTERTOUCH : Self = Self { ord : 10 } ; # [doc (alias = "MIDI_MESSAGE_CONTROL_CHANGE")] # [doc = "Godot enumerator name: `MIDI_MESSAGE_CONTROL_CHANGE`"] pub const CONTROL_CHANGE : Self = Self { ord : 11 } ; # [doc (alias = "MIDI_MESSAGE_PROGRAM_CHANGE")] # [doc = "Godot enumerator name: `MIDI_MESSAGE_PROGRAM_CHANGE`"] pub const PROGRAM_CHANGE : Self = Self { ord : 12 } ; # [doc (alias = "MIDI_MESSAGE_CHANNEL_PRESSURE")] # [doc = "Godot enumerator name: `MIDI_MESSAGE_CHANNEL_PRESSURE`"] pub const CHANNEL_PRESSURE : Self = Self { ord : 13 } ; # [doc (alias = "MIDI_MESSAGE_PITCH_BEND")] # [doc = "Godot enumerator name: `MIDI_MESSAGE_PITCH_BEND`"] pub const PITCH_BEND : Self = Self { ord : 14 } ; # [doc (alias = "MIDI_MESSAGE_SYSTEM_EXCLUSIVE")] # [doc = "Godot enumerator name: `MIDI_MESSAGE_SYSTEM_EXCLUSIVE`"] pub const SYSTEM_EXCLUSIVE : Self = Self { ord : 240 } ; # [doc (alias = "MIDI_MESSAGE_QUARTER_FRAME")] # [doc = "Godot enumerator name: `MIDI_MESSAGE_QUARTER_FRAME`"] pub const QUARTER_FRAME : Self = Self { ord : 241 } ; # [doc (alias = "MIDI_MESSAGE_SONG_POSITION_POINTER")] # [doc = "Godot enumerator name: `MIDI_MESSAGE_SONG_POSITION_POINTER`"] pub const SONG_POSITION_POINTER : Self = Self { ord : 242 } ; # [doc (alias = "MIDI_MESSAGE_SONG_SELECT")] # [doc = "Godot enumerator name: `MIDI_MESSAGE_SONG_SELECT`"] pub const SONG_SELECT : Self = Self { ord : 243 } ; # [doc (alias = "MIDI_MESSAGE_TUNE_REQUEST")] # [doc = "Godot enumerator name: `MIDI_MESSAGE_TUNE_REQUEST`"] pub const TUNE_REQUEST : Self = Self { ord : 246 } ; # [doc (alias = "MIDI_MESSAGE_TIMING_CLOCK")] # [doc = "Godot enumerator name: `MIDI_MESSAGE_TIMING_CLOCK`"] pub const TIMING_CLOCK : Self = Self { ord : 248 } ; # [doc (alias = "MIDI_MESSAGE_START")] # [doc = "Godot enumerator name: `MIDI_MESSAGE_START`"] pub const START : Self = Self { ord : 250 } ; # [doc (alias = "MIDI_MESSAGE_CONTINUE")] # [doc = "Godot enumerator name: `MIDI_MESSAGE_CONTINUE`"] pub const CONTINUE : Self = Self { ord : 251 } ; # [doc (alias = "MIDI_MESSAGE_STOP")] # [doc = "Godot enumerator name: `MIDI_MESSAGE_STOP`"] pub const STOP : Self = Self { ord : 252 } ; # [doc (alias = "MIDI_MESSAGE_ACTIVE_SENSING")] # [doc = "Godot enumerator name: `MIDI_MESSAGE_ACTIVE_SENSING`"] pub const ACTIVE_SENSING : Self = Self { ord : 254 } ; # [doc (alias = "MIDI_MESSAGE_SYSTEM_RESET")] # [doc = "Godot enumerator name: `MIDI_MESSAGE_SYSTEM_RESET`"] pub const SYSTEM_RESET : Self = Self { ord : 255 } ; # [allow (unreachable_patterns)] fn enumerator_name (self) -> Option < & 'static str > { match self { Self :: NONE => Some ("NONE") , Self :: NOTE_OFF => Some ("NOTE_OFF") , Self :: NOTE_ON => Some ("NOTE_ON") , Self :: AFTERTOUCH => Some ("AFTERTOUCH") , Self :: CONTROL_CHANGE => Some ("CONTROL_CHANGE") , Self :: PROGRAM_CHANGE => Some ("PROGRAM_CHANGE") , Self :: CHANNEL_PRESSURE => Some ("CHANNEL_PRESSURE") , Self :: PITCH_BEND => Some ("PITCH_BEND") , Self :: SYSTEM_EXCLUSIVE => Some ("SYSTEM_EXCLUSIVE") , Self :: QUARTER_FRAME => Some ("QUARTER_FRAME") , Self :: SONG_POSITION_POINTER => Some ("SONG_POSITION_POINTER") , Self :: SONG_SELECT => Some ("SONG_SELECT") , Self :: TUNE_REQUEST => Some ("TUNE_REQUEST") , Self :: TIMING_CLOCK => Some ("TIMING_CLOCK") , Self :: START => Some ("START") , Self :: CONTINUE => Some ("CONTINUE") , Self :: STOP => Some ("STOP") , Self :: ACTIVE_SENSING => Some ("ACTIVE_SENSING") , Self :: SYSTEM_RESET => Some ("SYSTEM_RESET") , _ => None , } } } impl std :: fmt :: Debug for MidiMessage { fn fmt (& self , f : & mut std :: fmt :: Formatter < '_ >) -> std :: fmt :: Result { match self . enumerator_name () { Some (enumerator) => f . write_str (enumerator) , None => f . debug_struct (stringify ! (MidiMessage)) . field ("ord" , & self . ord) . finish () , } } } impl crate :: obj :: EngineEnum for MidiMessage { fn try_from_ord (ord : i32) -> Option < Self > { match ord { 0 | 8 | 9 | 10 | 11 | 12 | 13 | 14 | 240 | 241 | 242 | 243 | 246 | 248 | 250 | 251 | 252 | 254 | 255 => Some (Self { ord }) , _ => None , } } fn ord (self) -> i32 { self . ord } } impl crate :: meta :: GodotConvert for MidiMessage { type Via = i32 ; } impl crate :: meta :: ToGodot for MidiMessage { fn to_godot (& self) -> Self :: Via { < Self as crate :: obj :: EngineEnum > :: ord (* self) } } impl crate :: meta :: FromGodot for MidiMessage { fn try_from_godot (via : Self :: Via) -> std :: result :: Result < Self , crate :: meta :: ConvertError > { Ok (Self { ord : via }) } } # [repr (transparent)] # [derive (Copy , Clone , Eq , PartialEq , Hash ,)] pub struct Error { ord : i32 } impl Error { pub const OK : Self = Self { ord : 0 } ; pub const FAILED : Self = Self { ord : 1 } ; pub const ERR_UNAVAILABLE : Self = Self { ord : 2 } ; pub const ERR_UNCONFIGURED : Self = Self { ord : 3 } ; pub const ERR_UNAUTHORIZED : Self = Self { ord : 4 } ; pub const ERR_PARAMETER_RANGE_ERROR : Self = Self { ord : 5 } ; pub const ERR_OUT_OF_MEMORY : Self = Self { ord : 6 } ; pub const ERR_FILE_NOT_FOUND : Self = Self { ord : 7 } ; pub const ERR_FILE_BAD_DRIVE : Self = Self { ord : 8 } ; pub const ERR_FILE_BAD_PATH : Self = Self { ord : 9 } ; pub const ERR_FILE_NO_PERMISSION : Self = Self { ord : 10 } ; pub const ERR_FILE_ALREADY_IN_USE : Self = Self { ord : 11 } ; pub const ERR_FILE_CANT_OPEN : Self = Self { ord : 12 } ; pub const ERR_FILE_CANT_WRITE : Self = Self { ord : 13 } ; pub const ERR_FILE_CANT_READ : Self = Self { ord : 14 } ; pub const ERR_FILE_UNRECOGNIZED : Self = Self { ord : 15 } ; pub const ERR_FILE_CORRUPT : Self = Self { ord : 16 } ; pub const ERR_FILE_MISSING_DEPENDENCIES : Self = Self { ord : 17 } ; pub const ERR_FILE_EOF : Self = Self { ord : 18 } ; pub const ERR_CANT_OPEN : Self = Self { ord : 19 } ; pub const ERR_CANT_CREATE : Self = Self { ord : 20 } ; pub const ERR_QUERY_FAILED : Self = Self { ord : 21 } ; pub const ERR_ALREADY_IN_USE : Self = Self { ord : 22 } ; pub const ERR_LOCKED : Self = Self { ord : 23 } ; pub const ERR_TIMEOUT : Self = Self { ord : 24 } ; pub const ERR_CANT_CONNECT : Self = Self { ord : 25 } ; pub const ERR_CANT_RESOLVE : Self = Self { ord : 26 } ; pub const ERR_CONNECTION_ERROR : Self = Self { ord : 27 } ; pub const ERR_CANT_ACQUIRE_RESOURCE : Self = Self { ord : 28 } ; pub const ERR_CANT_FORK : Self = Self { ord : 29 } ; pub const ERR_INVALID_DATA : Self = Self { ord : 30 } ; pub const ERR_INVALID_PARAMETER : Self = Self { ord : 31 } ; pub const ERR_ALREADY_EXISTS : Self = Self { ord : 32 } ; pub const ERR_DOES_NOT_EXIST : Self = Self { ord : 33 } ; pub const ERR_DATABASE_CANT_READ : Self = Self { ord : 34 } ; pub const ERR_DATABASE_CANT_WRITE : Self = Self { ord : 35 } ; pub const ERR_COMPILATION_FAILED : Self = Self { ord : 36 } ; pub const ERR_METHOD_NOT_FOUND : Self = Self { ord : 37 } ; pub const ERR_LINK_FAILED : Self = Self { ord : 38 } ; pub const ERR_SCRIPT_FAILED : Self = Self { ord : 39 } ; pub const ERR_CYCLIC_LINK : Self = Self { ord : 40 } ; pub const ERR_INVALID_DECLARATION : Self = Self { ord : 41 } ; pub const ERR_DUPLICATE_SYMBOL : Self = Self { ord : 42 } ; pub const ERR_PARSE_ERROR : Self = Self { ord : 43 } ; pub const ERR_BUSY : Self = Self { ord : 44 } ; pub const ERR_SKIP : Self = Self { ord : 45 } ; pub const ERR_HELP : Self = Self { ord : 46 } ; pub const ERR_BUG : Self = Self { ord : 47 } ; pub const ERR_PRINTER_ON_FIRE : Self = Self { ord : 48 } ; # [allow (unreachable_patterns)] fn enumerator_name (self) -> Option < & 'static str > { match self { Self :: OK => Some ("OK") , Self :: FAILED => Some ("FAILED") , Self :: ERR_UNAVAILABLE => Some ("ERR_UNAVAILABLE") , Self :: ERR_UNCONFIGURED => Some ("ERR_UNCONFIGURED") , Self :: ERR_UNAUTHORIZED => Some ("ERR_UNAUTHORIZED") , Self :: ERR_PARAMETER_RANGE_ERROR => Some ("ERR_PARAMETER_RANGE_ERROR") , Self :: ERR_OUT_OF_MEMORY => Some ("ERR_OUT_OF_MEMORY") , Self :: ERR_FILE_NOT_FOUND => Some ("ERR_FILE_NOT_FOUND") , Self :: ERR_FILE_BAD_DRIVE => Some ("ERR_FILE_BAD_DRIVE") , Self :: ERR_FILE_BAD_PATH => Some ("ERR_FILE_BAD_PATH") , Self :: ERR_FILE_NO_PERMISSION => Some ("ERR_FILE_NO_PERMISSION") , Self :: ERR_FILE_ALREADY_IN_USE => Some ("ERR_FILE_ALREADY_IN_USE") , Self :: ERR_FILE_CANT_OPEN => Some ("ERR_FILE_CANT_OPEN") , Self :: ERR_FILE_CANT_WRITE => Some ("ERR_FILE_CANT_WRITE") , Self :: ERR_FILE_CANT_READ => Some ("ERR_FILE_CANT_READ") , Self :: ERR_FILE_UNRECOGNIZED => Some ("ERR_FILE_UNRECOGNIZED") , Self :: ERR_FILE_CORRUPT => Some ("ERR_FILE_CORRUPT") , Self :: ERR_FILE_MISSING_DEPENDENCIES => Some ("ERR_FILE_MISSING_DEPENDENCIES") , Self :: ERR_FILE_EOF => Some ("ERR_FILE_EOF") , Self :: ERR_CANT_OPEN => Some ("ERR_CANT_OPEN") , Self :: ERR_CANT_CREATE => Some ("ERR_CANT_CREATE") , Self :: ERR_QUERY_FAILED => Some ("ERR_QUERY_FAILED") , Self :: ERR_ALREADY_IN_USE => Some ("ERR_ALREADY_IN_USE") , Self :: ERR_LOCKED => Some ("ERR_LOCKED") , Self :: ERR_TIMEOUT => Some ("ERR_TIMEOUT") , Self :: ERR_CANT_CONNECT => Some ("ERR_CANT_CONNECT") , Self :: ERR_CANT_RESOLVE => Some ("ERR_CANT_RESOLVE") , Self :: ERR_CONNECTION_ERROR => Some ("ERR_CONNECTION_ERROR") , Self :: ERR_CANT_ACQUIRE_RESOURCE => Some ("ERR_CANT_ACQUIRE_RESOURCE") , Self :: ERR_CANT_FORK => Some ("ERR_CANT_FORK") , Self :: ERR_INVALID_DATA => Some ("ERR_INVALID_DATA") , Self :: ERR_INVALID_PARAMETER => Some ("ERR_INVALID_PARAMETER") , Self :: ERR_ALREADY_EXISTS => Some ("ERR_ALREADY_EXISTS") , Self :: ERR_DOES_NOT_EXIST => Some ("ERR_DOES_NOT_EXIST") , Self :: ERR_DATABASE_CANT_READ => Some ("ERR_DATABASE_CANT_READ") , Self :: ERR_DATABASE_CANT_WRITE => Some ("ERR_DATABASE_CANT_WRITE") , Self :: ERR_COMPILATION_FAILED => Some ("ERR_COMPILATION_FAILED") , Self :: ERR_METHOD_NOT_FOUND => Some ("ERR_METHOD_NOT_FOUND") , Self :: ERR_LINK_FAILED => Some ("ERR_LINK_FAILED") , Self :: ERR_SCRIPT_FAILED => Some ("ERR_SCRIPT_FAILED") , Self :: ERR_CYCLIC_LINK => Some ("ERR_CYCLIC_LINK") , Self :: ERR_INVALID_DECLARATION => Some ("ERR_INVALID_DECLARATION") , Self :: ERR_DUPLICATE_SYMBOL => Some ("ERR_DUPLICATE_SYMBOL") , Self :: ERR_PARSE_ERROR => Some ("ERR_PARSE_ERROR") , Self :: ERR_BUSY => Some ("ERR_BUSY") , Self :: ERR_SKIP => Some ("ERR_SKIP") , Self :: ERR_HELP => Some ("ERR_HELP") , Self :: ERR_BUG => Some ("ERR_BUG") , Self :: ERR_PRINTER_ON_FIRE => Some ("ERR_PRINTER_ON_FIRE") , _ => None , } } } impl std :: fmt :: Debug for Error { fn fmt (& self , f : & mut std :: fmt :: Formatter < '_ >) -> std :: fmt :: Result { match self . enumerator_name () { Some (enumerator) => f . write_str (enumerator) , None => f . debug_struct (stringify ! (Error)) . field ("ord" , & self . ord) . finish () , } } } impl crate :: obj :: EngineEnum for Error { fn try_from_ord (ord : i32) -> Option < Self > { match ord { 0 | 1 | 2 | 3 | 4 | 5 | 6 | 7 | 8 | 9 | 10 | 11 | 12 | 13 | 14 | 15 | 16 | 17 | 18 | 19 | 20 | 21 | 22 | 23 | 24 | 25 | 26 | 27 | 28 | 29 | 30 | 31 | 32 | 33 | 34 | 35 | 36 | 37 | 38 | 39 | 40 | 41 | 42 | 43 | 44 | 45 | 46 | 47 | 48 => Some (Self { ord }) , _ => None , } } fn ord (self) -> i32 { self . ord } } impl crate :: meta :: GodotConvert for Error { type Via = i32 ; } impl crate :: meta :: ToGodot for Error { fn to_godot (& self) -> Self :: Via { < Self as crate :: obj :: EngineEnum > :: ord (* self) } } impl crate :: meta :: FromGodot for Error { fn try_from_godot (via : Self :: Via) -> std :: result :: Result < Self , crate :: meta :: ConvertError > { Ok (Self { ord : via }) } } # [repr (transparent)] # [derive (Copy , Clone , Eq , PartialEq , Hash ,)] pub struct PropertyHint { ord : i32 } impl PropertyHint { # [doc (alias = "PROPERTY_HINT_NONE")] # [doc = "Godot enumerator name: `PROPERTY_HINT_NONE`"] pub const NONE : Self = Self { ord : 0 } ; # [doc (alias = "PROPERTY_HINT_RANGE")] # [doc = "Godot enumerator name: `PROPERTY_HINT_RANGE`"] pub const RANGE : Self = Self { ord : 1 } ; # [doc (alias = "PROPERTY_HINT_ENUM")] # [doc = "Godot enumerator name: `PROPERTY_HINT_ENUM`"] pub const ENUM : Self = Self { ord : 2 } ; # [doc (alias = "PROPERTY_HINT_ENUM_SUGGESTION")] # [doc = "Godot enumerator name: `PROPERTY_HINT_ENUM_SUGGESTION`"] pub const ENUM_SUGGESTION : Self = Self { ord : 3 } ; # [doc (alias = "PROPERTY_HINT_EXP_EASING")] # [doc = "Godot enumerator name: `PROPERTY_HINT_EXP_EASING`"] pub const EXP_EASING : Self = Self { ord : 4 } ; # [doc (alias = "PROPERTY_HINT_LINK")] # [doc = "Godot enumerator name: `PROPERTY_HINT_LINK`"] pub const LINK : Self = Self { ord : 5 } ; # [doc (alias = "PROPERTY_HINT_FLAGS")] # [doc = "Godot enumerator name: `PROPERTY_HINT_FLAGS`"] pub const FLAGS : Self = Self { ord : 6 } ; # [doc (alias = "PROPERTY_HINT_LAYERS_2D_RENDER")] # [doc = "Godot enumerator name: `PROPERTY_HINT_LAYERS_2D_RENDER`"] pub const LAYERS_2D_RENDER : Self = Self { ord : 7 } ; # [doc (alias = "PROPERTY_HINT_LAYERS_2D_PHYSICS")] # [doc = "Godot enumerator name: `PROPERTY_HINT_LAYERS_2D_PHYSICS`"] pub const LAYERS_2D_PHYSICS : Self = Self { ord : 8 } ; # [doc (alias = "PROPERTY_HINT_LAYERS_2D_NAVIGATION")] # [doc = "Godot enumerator name: `PROPERTY_HINT_LAYERS_2D_NAVIGATION`"] pub const LAYERS_2D_NAVIGATION : Self = Self { ord : 9 } ; # [doc (alias = "PROPERTY_HINT_LAYERS_3D_RENDER")] # [doc = "Godot enumerator name: `PROPERTY_HINT_LAYERS_3D_RENDER`"] pub const LAYERS_3D_RENDER : Self = Self { ord : 10 } ; # [doc (alias = "PROPERTY_HINT_LAYERS_3D_PHYSICS")] # [doc = "Godot enumerator name: `PROPERTY_HINT_LAYERS_3D_PHYSICS`"] pub const LAYERS_3D_PHYSICS : Self = Self { ord : 11 } ; # [doc (alias = "PROPERTY_HINT_LAYERS_3D_NAVIGATION")] # [doc = "Godot enumerator name: `PROPERTY_HINT_LAYERS_3D_NAVIGATION`"] pub const LAYERS_3D_NAVIGATION : Self = Self { ord : 12 } ; # [doc (alias = "PROPERTY_HINT_LAYERS_AVOIDANCE")] # [doc = "Godot enumerator name: `PROPERTY_HINT_LAYERS_AVOIDANCE`"] pub const LAYERS_AVOIDANCE : Self = Self { ord : 37 } ; # [doc (alias = "PROPERTY_HINT_FILE")] # [doc = "Godot enumerator name: `PROPERTY_HINT_FILE`"] pub const FILE : Self = Self { ord : 13 } ; # [doc (alias = "PROPERTY_HINT_DIR")] # [doc = "Godot enumerator name: `PROPERTY_HINT_DIR`"] pub const DIR : Self = Self { ord : 14 } ; # [doc (alias = "PROPERTY_HINT_GLOBAL_FILE")] # [doc = "Godot enumerator name: `PROPERTY_HINT_GLOBAL_FILE`"] pub const GLOBAL_FILE : Self = Self { ord : 15 } ; # [doc (alias = "PROPERTY_HINT_GLOBAL_DIR")] # [doc = "Godot enumerator name: `PROPERTY_HINT_GLOBAL_DIR`"] pub const GLOBAL_DIR : Self = Self { ord : 16 } ; # [doc (alias = "PROPERTY_HINT_RESOURCE_TYPE")] # [doc = "Godot enumerator name: `PROPERTY_HINT_RESOURCE_TYPE`"] pub const RESOURCE_TYPE : Self = Self { ord : 17 } ; # [doc (alias = "PROPERTY_HINT_MULTILINE_TEXT")] # [doc = "Godot enumerator name: `PROPERTY_HINT_MULTILINE_TEXT`"] pub const MULTILINE_TEXT : Self = Self { ord : 18 } ; # [doc (alias = "PROPERTY_HINT_EXPRESSION")] # [doc = "Godot enumerator name: `PROPERTY_HINT_EXPRESSION`"] pub const EXPRESSION : Self = Self { ord : 19 } ; # [doc (alias = "PROPERTY_HINT_PLACEHOLDER_TEXT")] # [doc = "Godot enumerator name: `PROPERTY_HINT_PLACEHOLDER_TEXT`"] pub const PLACEHOLDER_TEXT : Self = Self { ord : 20 } ; # [doc (alias = "PROPERTY_HINT_COLOR_NO_ALPHA")] # [doc = "Godot enumerator name: `PROPERTY_HINT_COLOR_NO_ALPHA`"] pub const COLOR_NO_ALPHA : Self = Self { ord : 21 } ; # [doc (alias = "PROPERTY_HINT_OBJECT_ID")] # [doc = "Godot enumerator name: `PROPERTY_HINT_OBJECT_ID`"] pub const OBJECT_ID : Self = Self { ord : 22 } ; # [doc (alias = "PROPERTY_HINT_TYPE_STRING")] # [doc = "Godot enumerator name: `PROPERTY_HINT_TYPE_STRING`"] pub const TYPE_STRING : Self = Self { ord : 23 } ; # [doc (alias = "PROPERTY_HINT_NODE_PATH_TO_EDITED_NODE")] # [doc = "Godot enumerator name: `PROPERTY_HINT_NODE_PATH_TO_EDITED_NODE`"] pub const NODE_PATH_TO_EDITED_NODE : Self = Self { ord : 24 } ; # [doc (alias = "PROPERTY_HINT_OBJECT_TOO_BIG")] # [doc = "Godot enumerator name: `PROPERTY_HINT_OBJECT_TOO_BIG`"] pub const OBJECT_TOO_BIG : Self = Self { ord : 25 } ; # [doc (alias = "PROPERTY_HINT_NODE_PATH_VALID_TYPES")] # [doc = "Godot enumerator name: `PROPERTY_HINT_NODE_PATH_VALID_TYPES`"] pub const NODE_PATH_VALID_TYPES : Self = Self { ord : 26 } ; # [doc (alias = "PROPERTY_HINT_SAVE_FILE")] # [doc = "Godot enumerator name: `PROPERTY_HINT_SAVE_FILE`"] pub const SAVE_FILE : Self = Self { ord : 27 } ; # [doc (alias = "PROPERTY_HINT_GLOBAL_SAVE_FILE")] # [doc = "Godot enumerator name: `PROPERTY_HINT_GLOBAL_SAVE_FILE`"] pub const GLOBAL_SAVE_FILE : Self = Self { ord : 28 } ; # [doc (alias = "PROPERTY_HINT_INT_IS_OBJECTID")] # [doc = "Godot enumerator name: `PROPERTY_HINT_INT_IS_OBJECTID`"] pub const INT_IS_OBJECTID : Self = Self { ord : 29 } ; # [doc (alias = "PROPERTY_HINT_INT_IS_POINTER")] # [doc = "Godot enumerator name: `PROPERTY_HINT_INT_IS_POINTER`"] pub const INT_IS_POINTER : Self = Self { ord : 30 } ; # [doc (alias = "PROPERTY_HINT_ARRAY_TYPE")] # [doc = "Godot enumerator name: `PROPERTY_HINT_ARRAY_TYPE`"] pub const ARRAY_TYPE : Self = Self { ord : 31 } ; # [doc (alias = "PROPERTY_HINT_LOCALE_ID")] # [doc = "Godot enumerator name: `PROPERTY_HINT_LOCALE_ID`"] pub const LOCALE_ID : Self = Self { ord : 32 } ; # [doc (alias = "PROPERTY_HINT_LOCALIZABLE_STRING")] # [doc = "Godot enumerator name: `PROPERTY_HINT_LOCALIZABLE_STRING`"] pub const LOCALIZABLE_STRING : Self = Self { ord : 33 } ; # [doc (alias = "PROPERTY_HINT_NODE_TYPE")] # [doc = "Godot enumerator name: `PROPERTY_HINT_NODE_TYPE`"] pub const NODE_TYPE : Self = Self { ord : 34 } ; # [doc (alias = "PROPERTY_HINT_HIDE_QUATERNION_EDIT")] # [doc = "Godot enumerator name: `PROPERTY_HINT_HIDE_QUATERNION_EDIT`"] pub const HIDE_QUATERNION_EDIT : Self = Self { ord : 35 } ; # [doc (alias = "PROPERTY_HINT_PASSWORD")] # [doc = "Godot enumerator name: `PROPERTY_HINT_PASSWORD`"] pub const PASSWORD : Self = Self { ord : 36 } ; # [doc (alias = "PROPERTY_HINT_MAX")] # [doc = "Godot enumerator name: `PROPERTY_HINT_MAX`"] pub const MAX : Self = Self { ord : 38 } ; # [allow (unreachable_patterns)] fn enumerator_name (self) -> Option < & 'static str > { match self { Self :: NONE => Some ("NONE") , Self :: RANGE => Some ("RANGE") , Self :: ENUM => Some ("ENUM") , Self :: ENUM_SUGGESTION => Some ("ENUM_SUGGESTION") , Self :: EXP_EASING => Some ("EXP_EASING") , Self :: LINK => Some ("LINK") , Self :: FLAGS => Some ("FLAGS") , Self :: LAYERS_2D_RENDER => Some ("LAYERS_2D_RENDER") , Self :: LAYERS_2D_PHYSICS => Some ("LAYERS_2D_PHYSICS") , Self :: LAYERS_2D_NAVIGATION => Some ("LAYERS_2D_NAVIGATION") , Self :: LAYERS_3D_RENDER => Some ("LAYERS_3D_RENDER") , Self :: LAYERS_3D_PHYSICS => Some ("LAYERS_3D_PHYSICS") , Self :: LAYERS_3D_NAVIGATION => Some ("LAYERS_3D_NAVIGATION") , Self :: LAYERS_AVOIDANCE => Some ("LAYERS_AVOIDANCE") , Self :: FILE => Some ("FILE") , Self :: DIR => Some ("DIR") , Self :: GLOBAL_FILE => Some ("GLOBAL_FILE") , Self :: GLOBAL_DIR => Some ("GLOBAL_DIR") , Self :: RESOURCE_TYPE => Some ("RESOURCE_TYPE") , Self :: MULTILINE_TEXT => Some ("MULTILINE_TEXT") , Self :: EXPRESSION => Some ("EXPRESSION") , Self :: PLACEHOLDER_TEXT => Some ("PLACEHOLDER_TEXT") , Self :: COLOR_NO_ALPHA => Some ("COLOR_NO_ALPHA") , Self :: OBJECT_ID => Some ("OBJECT_ID") , Self :: TYPE_STRING => Some ("TYPE_STRING") , Self :: NODE_PATH_TO_EDITED_NODE => Some ("NODE_PATH_TO_EDITED_NODE") , Self :: OBJECT_TOO_BIG => Some ("OBJECT_TOO_BIG") , Self :: NODE_PATH_VALID_TYPES => Some ("NODE_PATH_VALID_TYPES") , Self :: SAVE_FILE => Some ("SAVE_FILE") , Self :: GLOBAL_SAVE_FILE => Some ("GLOBAL_SAVE_FILE") , Self :: INT_IS_OBJECTID => Some ("INT_IS_OBJECTID") , Self :: INT_IS_POINTER => Some ("INT_IS_POINTER") , Self :: ARRAY_TYPE => Some ("ARRAY_TYPE") , Self :: LOCALE_ID => Some ("LOCALE_ID") , Self :: LOCALIZABLE_STRING => Some ("LOCALIZABLE_STRING") , Self :: NODE_TYPE => Some ("NODE_TYPE") , Self :: HIDE_QUATERNION_EDIT => Some ("HIDE_QUATERNION_EDIT") , Self :: PASSWORD => Some ("PASSWORD") , Self :: MAX => Some ("MAX") , _ => None , } } } impl std :: fmt :: Debug for PropertyHint { fn fmt (& self , f : & mut std :: fmt :: Formatter < '_ >) -> std :: fmt :: Result { match self . enumerator_name () { Some (enumerator) => f . write_str (enumerator) , None => f . debug_struct (stringify ! (PropertyHint)) . field ("ord" , & self . ord) . finish () , } } } impl crate :: obj :: EngineEnum for PropertyHint { fn try_from_ord (ord : i32) -> Option < Self > { match ord { 0 | 1 | 2 | 3 | 4 | 5 | 6 | 7 | 8 | 9 | 10 | 11 | 12 | 13 | 14 | 15 | 16 | 17 | 18 | 19 | 20 | 21 | 22 | 23 | 24 | 25 | 26 | 27 | 28 | 29 | 30 | 31 | 32 | 33 | 34 | 35 | 36 | 37 | 38 => Some (Self { ord }) , _ => None , } } fn ord (self) -> i32 { self . ord } } impl crate :: meta :: GodotConvert for PropertyHint { type Via = i32 ; } impl crate :: meta :: ToGodot for PropertyHint { fn to_godot (& self) -> Self :: Via { < Self as crate :: obj :: EngineEnum > :: ord (* self) } } impl crate :: meta :: FromGodot for PropertyHint { fn try_from_godot (via : Self :: Via) -> std :: result :: Result < Self , crate :: meta :: ConvertError > { Ok (Self { ord : via }) } } # [repr (transparent)] # [derive (Copy , Clone , Eq , PartialEq , Hash , Default ,)] pub struct PropertyUsageFlags { ord : u64 } impl PropertyUsageFlags { # [doc (alias = "PROPERTY_USAGE_NONE")] # [doc = "Godot enumerator name: `PROPERTY_USAGE_NONE`"] pub const NONE : Self = Self { ord : 0 } ; # [doc (alias = "PROPERTY_USAGE_STORAGE")] # [doc = "Godot enumerator name: `PROPERTY_USAGE_STORAGE`"] pub const STORAGE : Self = Self { ord : 2 } ; # [doc (alias = "PROPERTY_USAGE_EDITOR")] # [doc = "Godot enumerator name: `PROPERTY_USAGE_EDITOR`"] pub const EDITOR : Self = Self { ord : 4 } ; # [doc (alias = "PROPERTY_USAGE_INTERNAL")] # [doc = "Godot enumerator name: `PROPERTY_USAGE_INTERNAL`"] pub const INTERNAL : Self = Self { ord : 8 } ; # [doc (alias = "PROPERTY_USAGE_CHECKABLE")] # [doc = "Godot enumerator name: `PROPERTY_USAGE_CHECKABLE`"] pub const CHECKABLE : Self = Self { ord : 16 } ; # [doc (alias = "PROPERTY_USAGE_CHECKED")] # [doc = "Godot enumerator name: `PROPERTY_USAGE_CHECKED`"] pub const CHECKED : Self = Self { ord : 32 } ; # [doc (alias = "PROPERTY_USAGE_GROUP")] # [doc = "Godot enumerator name: `PROPERTY_USAGE_GROUP`"] pub const GROUP : Self = Self { ord : 64 } ; # [doc (alias = "PROPERTY_USAGE_CATEGORY")] # [doc = "Godot enumerator name: `PROPERTY_USAGE_CATEGORY`"] pub const CATEGORY : Self = Self { ord : 128 } ; # [doc (alias = "PROPERTY_USAGE_SUBGROUP")] # [doc = "Godot enumerator name: `PROPERTY_USAGE_SUBGROUP`"] pub const SUBGROUP : Self = Self { ord : 256 } ; # [doc (alias = "PROPERTY_USAGE_CLASS_IS_BITFIELD")] # [doc = "Godot enumerator name: `PROPERTY_USAGE_CLASS_IS_BITFIELD`"] pub const CLASS_IS_BITFIELD : Self = Self { ord : 512 } ; # [doc (alias = "PROPERTY_USAGE_NO_INSTANCE_STATE")] # [doc = "Godot enumerator name: `PROPERTY_USAGE_NO_INSTANCE_STATE`"] pub const NO_INSTANCE_STATE : Self = Self { ord : 1024 } ; # [doc (alias = "PROPERTY_USAGE_RESTART_IF_CHANGED")] # [doc = "Godot enumerator name: `PROPERTY_USAGE_RESTART_IF_CHANGED`"] pub const RESTART_IF_CHANGED : Self = Self { ord : 2048 } ; # [doc (alias = "PROPERTY_USAGE_SCRIPT_VARIABLE")] # [doc = "Godot enumerator name: `PROPERTY_USAGE_SCRIPT_VARIABLE`"] pub const SCRIPT_VARIABLE : Self = Self { ord : 4096 } ; # [doc (alias = "PROPERTY_USAGE_STORE_IF_NULL")] # [doc = "Godot enumerator name: `PROPERTY_USAGE_STORE_IF_NULL`"] pub const STORE_IF_NULL : Self = Self { ord : 8192 } ; # [doc (alias = "PROPERTY_USAGE_UPDATE_ALL_IF_MODIFIED")] # [doc = "Godot enumerator name: `PROPERTY_USAGE_UPDATE_ALL_IF_MODIFIED`"] pub const UPDATE_ALL_IF_MODIFIED : Self = Self { ord : 16384 } ; # [doc (alias = "PROPERTY_USAGE_SCRIPT_DEFAULT_VALUE")] # [doc = "Godot enumerator name: `PROPERTY_USAGE_SCRIPT_DEFAULT_VALUE`"] pub const SCRIPT_DEFAULT_VALUE : Self = Self { ord : 32768 } ; # [doc (alias = "PROPERTY_USAGE_CLASS_IS_ENUM")] # [doc = "Godot enumerator name: `PROPERTY_USAGE_CLASS_IS_ENUM`"] pub const CLASS_IS_ENUM : Self = Self { ord : 65536 } ; # [doc (alias = "PROPERTY_USAGE_NIL_IS_VARIANT")] # [doc = "Godot enumerator name: `PROPERTY_USAGE_NIL_IS_VARIANT`"] pub const NIL_IS_VARIANT : Self = Self { ord : 131072 } ; # [doc (alias = "PROPERTY_USAGE_ARRAY")] # [doc = "Godot enumerator name: `PROPERTY_USAGE_ARRAY`"] pub const ARRAY : Self = Self { ord : 262144 } ; # [doc (alias = "PROPERTY_USAGE_ALWAYS_DUPLICATE")] # [doc = "Godot enumerator name: `PROPERTY_USAGE_ALWAYS_DUPLICATE`"] pub const ALWAYS_DUPLICATE : Self = Self { ord : 524288 } ; # [doc (alias = "PROPERTY_USAGE_NEVER_DUPLICATE")] # [doc = "Godot enumerator name: `PROPERTY_USAGE_NEVER_DUPLICATE`"] pub const NEVER_DUPLICATE : Self = Self { ord : 1048576 } ; # [doc (alias = "PROPERTY_USAGE_HIGH_END_GFX")] # [doc = "Godot enumerator name: `PROPERTY_USAGE_HIGH_END_GFX`"] pub const HIGH_END_GFX : Self = Self { ord : 2097152 } ; # [doc (alias = "PROPERTY_USAGE_NODE_PATH_FROM_SCENE_ROOT")] # [doc = "Godot enumerator name: `PROPERTY_USAGE_NODE_PATH_FROM_SCENE_ROOT`"] pub const NODE_PATH_FROM_SCENE_ROOT : Self = Self { ord : 4194304 } ; # [doc (alias = "PROPERTY_USAGE_RESOURCE_NOT_PERSISTENT")] # [doc = "Godot enumerator name: `PROPERTY_USAGE_RESOURCE_NOT_PERSISTENT`"] pub const RESOURCE_NOT_PERSISTENT : Self = Self { ord : 8388608 } ; # [doc (alias = "PROPERTY_USAGE_KEYING_INCREMENTS")] # [doc = "Godot enumerator name: `PROPERTY_USAGE_KEYING_INCREMENTS`"] pub const KEYING_INCREMENTS : Self = Self { ord : 16777216 } ; # [doc (alias = "PROPERTY_USAGE_DEFERRED_SET_RESOURCE")] # [doc = "Godot enumerator name: `PROPERTY_USAGE_DEFERRED_SET_RESOURCE`"] pub const DEFERRED_SET_RESOURCE : Self = Self { ord : 33554432 } ; # [doc (alias = "PROPERTY_USAGE_EDITOR_INSTANTIATE_OBJECT")] # [doc = "Godot enumerator name: `PROPERTY_USAGE_EDITOR_INSTANTIATE_OBJECT`"] pub const EDITOR_INSTANTIATE_OBJECT : Self = Self { ord : 67108864 } ; # [doc (alias = "PROPERTY_USAGE_EDITOR_BASIC_SETTING")] # [doc = "Godot enumerator name: `PROPERTY_USAGE_EDITOR_BASIC_SETTING`"] pub const EDITOR_BASIC_SETTING : Self = Self { ord : 134217728 } ; # [doc (alias = "PROPERTY_USAGE_READ_ONLY")] # [doc = "Godot enumerator name: `PROPERTY_USAGE_READ_ONLY`"] pub const READ_ONLY : Self = Self { ord : 268435456 } ; # [doc (alias = "PROPERTY_USAGE_SECRET")] # [doc = "Godot enumerator name: `PROPERTY_USAGE_SECRET`"] pub const SECRET : Self = Self { ord : 536870912 } ; # [doc (alias = "PROPERTY_USAGE_DEFAULT")] # [doc = "Godot enumerator name: `PROPERTY_USAGE_DEFAULT`"] pub const DEFAULT : Self = Self { ord : 6 } ; # [doc (alias = "PROPERTY_USAGE_NO_EDITOR")] # [doc = "Godot enumerator name: `PROPERTY_USAGE_NO_EDITOR`"] pub const NO_EDITOR : Self = Self { ord : 2 } ; # [allow (unreachable_patterns)] fn enumerator_name (self) -> Option < & 'static str > { match self { Self :: NONE => Some ("NONE") , Self :: STORAGE => Some ("STORAGE") , Self :: EDITOR => Some ("EDITOR") , Self :: INTERNAL => Some ("INTERNAL") , Self :: CHECKABLE => Some ("CHECKABLE") , Self :: CHECKED => Some ("CHECKED") , Self :: GROUP => Some ("GROUP") , Self :: CATEGORY => Some ("CATEGORY") , Self :: SUBGROUP => Some ("SUBGROUP") , Self :: CLASS_IS_BITFIELD => Some ("CLASS_IS_BITFIELD") , Self :: NO_INSTANCE_STATE => Some ("NO_INSTANCE_STATE") , Self :: RESTART_IF_CHANGED => Some ("RESTART_IF_CHANGED") , Self :: SCRIPT_VARIABLE => Some ("SCRIPT_VARIABLE") , Self :: STORE_IF_NULL => Some ("STORE_IF_NULL") , Self :: UPDATE_ALL_IF_MODIFIED => Some ("UPDATE_ALL_IF_MODIFIED") , Self :: SCRIPT_DEFAULT_VALUE => Some ("SCRIPT_DEFAULT_VALUE") , Self :: CLASS_IS_ENUM => Some ("CLASS_IS_ENUM") , Self :: NIL_IS_VARIANT => Some ("NIL_IS_VARIANT") , Self :: ARRAY => Some ("ARRAY") , Self :: ALWAYS_DUPLICATE => Some ("ALWAYS_DUPLICATE") , Self :: NEVER_DUPLICATE => Some ("NEVER_DUPLICATE") , Self :: HIGH_END_GFX => Some ("HIGH_END_GFX") , Self :: NODE_PATH_FROM_SCENE_ROOT => Some ("NODE_PATH_FROM_SCENE_ROOT") , Self :: RESOURCE_NOT_PERSISTENT => Some ("RESOURCE_NOT_PERSISTENT") , Self :: KEYING_INCREMENTS => Some ("KEYING_INCREMENTS") , Self :: DEFERRED_SET_RESOURCE => Some ("DEFERRED_SET_RESOURCE") , Self :: EDITOR_INSTANTIATE_OBJECT => Some ("EDITOR_INSTANTIATE_OBJECT") , Self :: EDITOR_BASIC_SETTING => Some ("EDITOR_BASIC_SETTING") , Self :: READ_ONLY => Some ("READ_ONLY") , Self :: SECRET => Some ("SECRET") , Self :: DEFAULT => Some ("DEFAULT") , Self :: NO_EDITOR => Some ("NO_EDITOR") , _ => None , } } } impl std :: fmt :: Debug for PropertyUsageFlags { fn fmt (& self , f : & mut std :: fmt :: Formatter < '_ >) -> std :: fmt :: Result { match self . enumerator_name () { Some (enumerator) => f . write_str (enumerator) , None => f . debug_struct (stringify ! (PropertyUsageFlags)) . field ("ord" , & self . ord) . finish () , } } } impl crate :: obj :: EngineBitfield for PropertyUsageFlags { fn try_from_ord (ord : u64) -> Option < Self > { Some (Self { ord }) } fn ord (self) -> u64 { self . ord } } impl std :: ops :: BitOr for PropertyUsageFlags { type Output = Self ; fn bitor (self , rhs : Self) -> Self :: Output { Self { ord : self . ord | rhs . ord } } } impl std :: ops :: BitOrAssign for PropertyUsageFlags { fn bitor_assign (& mut self , rhs : Self) { * self = * self | rhs ; } } impl crate :: meta :: GodotConvert for PropertyUsageFlags { type Via = u64 ; } impl crate :: meta :: ToGodot for PropertyUsageFlags { fn to_godot (& self) -> Self :: Via { < Self as crate :: obj :: EngineBitfield > :: ord (* self) } } impl crate :: meta :: FromGodot for PropertyUsageFlags { fn try_from_godot (via : Self :: Via) -> std :: result :: Result < Self , crate :: meta :: ConvertError > { Ok (Self { ord : via }) } } # [repr (transparent)] # [derive (Copy , Clone , Eq , PartialEq , Hash , Default ,)] pub struct MethodFlags { ord : u64 } impl MethodFlags { # [doc (alias = "METHOD_FLAG_NORMAL")] # [doc = "Godot enumerator name: `METHOD_FLAG_NORMAL`"] pub const FLAG_NORMAL : Self = Self { ord : 1 } ; # [doc (alias = "METHOD_FLAG_EDITOR")] # [doc = "Godot enumerator name: `METHOD_FLAG_EDITOR`"] pub const FLAG_EDITOR : Self = Self { ord : 2 } ; # [doc (alias = "METHOD_FLAG_CONST")] # [doc = "Godot enumerator name: `METHOD_FLAG_CONST`"] pub const FLAG_CONST : Self = Self { ord : 4 } ; # [doc (alias = "METHOD_FLAG_VIRTUAL")] # [doc = "Godot enumerator name: `METHOD_FLAG_VIRTUAL`"] pub const FLAG_VIRTUAL : Self = Self { ord : 8 } ; # [doc (alias = "METHOD_FLAG_VARARG")] # [doc = "Godot enumerator name: `METHOD_FLAG_VARARG`"] pub const FLAG_VARARG : Self = Self { ord : 16 } ; # [doc (alias = "METHOD_FLAG_STATIC")] # [doc = "Godot enumerator name: `METHOD_FLAG_STATIC`"] pub const FLAG_STATIC : Self = Self { ord : 32 } ; # [doc (alias = "METHOD_FLAG_OBJECT_CORE")] # [doc = "Godot enumerator name: `METHOD_FLAG_OBJECT_CORE`"] pub const FLAG_OBJECT_CORE : Self = Self { ord : 64 } ; # [doc (alias = "METHOD_FLAGS_DEFAULT")] # [doc = "Godot enumerator name: `METHOD_FLAGS_DEFAULT`"] pub const FLAGS_DEFAULT : Self = Self { ord : 1 } ; # [allow (unreachable_patterns)] fn enumerator_name (self) -> Option < & 'static str > { match self { Self :: FLAG_NORMAL => Some ("FLAG_NORMAL") , Self :: FLAG_EDITOR => Some ("FLAG_EDITOR") , Self :: FLAG_CONST => Some ("FLAG_CONST") , Self :: FLAG_VIRTUAL => Some ("FLAG_VIRTUAL") , Self :: FLAG_VARARG => Some ("FLAG_VARARG") , Self :: FLAG_STATIC => Some ("FLAG_STATIC") , Self :: FLAG_OBJECT_CORE => Some ("FLAG_OBJECT_CORE") , Self :: FLAGS_DEFAULT => Some ("FLAGS_DEFAULT") , _ => None , } } } impl std :: fmt :: Debug for MethodFlags { fn fmt (& self , f : & mut std :: fmt :: Formatter < '_ >) -> std :: fmt :: Result { match self . enumerator_name () { Some (enumerator) => f . write_str (enumerator) , None => f . debug_struct (stringify ! (MethodFlags)) . field ("ord" , & self . ord) . finish () , } } } impl crate :: obj :: EngineBitfield for MethodFlags { fn try_from_ord (ord : u64) -> Option < Self > { Some (Self { ord }) } fn ord (self) -> u64 { self . ord } } impl std :: ops :: BitOr for MethodFlags { type Output = Self ; fn bitor (self , rhs : Self) -> Self :: Output { Self { ord : self . ord | rhs . ord } } } impl std :: ops :: BitOrAssign for MethodFlags { fn bitor_assign (& mut self , rhs : Self) { * self = * self | rhs ; } } impl crate :: meta :: GodotConvert for MethodFlags { type Via = u64 ; } impl crate :: meta :: ToGodot for MethodFlags { fn to_godot (& self) -> Self :: Via { < Self as crate :: obj :: EngineBitfield > :: ord (* self) } } impl crate :: meta :: FromGodot for MethodFlags { fn try_from_godot (via : Self :: Via) -> std :: result :: Result < Self , crate :: meta :: ConvertError > { Ok (Self { ord : via }) } }