# [doc = r" Godot name and initialization level of every bound engine class, in declaration order."] pub const ENGINE_CLASS_NAMES : [(& str , crate :: init :: InitLevel) ; 26usize] = [("CanvasItem" , crate :: init :: InitLevel :: Scene) , ("Control" , crate :: init :: InitLevel :: Scene) , ("Font" , crate :: init :: InitLevel :: Scene) , ("GeometryInstance3D" , crate :: init :: InitLevel :: Scene) , ("Input" , crate :: init :: InitLevel :: Servers) , ("InputEvent" , crate :: init :: InitLevel :: Scene) , ("ItemList" , crate :: init :: InitLevel :: Scene) , ("Label3D" , crate :: init :: InitLevel :: Scene) , ("MainLoop" , crate :: init :: InitLevel :: Scene) , ("NativeMenu" , crate :: init :: InitLevel :: Servers) , ("Node" , crate :: init :: InitLevel :: Scene) , ("Node2D" , crate :: init :: InitLevel :: Scene) , ("Node3D" , crate :: init :: InitLevel :: Scene) , ("Object" , crate :: init :: InitLevel :: Core) , ("RefCounted" , crate :: init :: InitLevel :: Core) , ("Resource" , crate :: init :: InitLevel :: Core) , ("SceneTree" , crate :: init :: InitLevel :: Scene) , ("SceneTreeTimer" , crate :: init :: InitLevel :: Scene) , ("Texture" , crate :: init :: InitLevel :: Scene) , ("Texture2D" , crate :: init :: InitLevel :: Scene) , ("Theme" , crate :: init :: InitLevel :: Scene) , ("TileMap" , crate :: init :: InitLevel :: Scene) , ("TileSet" , crate :: init :: InitLevel :: Scene) , ("Viewport" , crate :: init :: InitLevel :: Scene) , ("VisualInstance3D" , crate :: init :: InitLevel :: Scene) , ("Window" , crate :: init :: InitLevel :: Scene) ,] ; # [doc = r" Initialization level at which the method binds of `class_name` are available; `None` if the class is not bound."] pub fn class_init_level (class_name : & str) -> Option < crate :: init :: InitLevel > { ENGINE_CLASS_NAMES . iter () . find (| (name , _) | * name == class_name) . map (| (_ , level) | * level) } # [doc = r" Forgets all cached singleton pointers; they are looked up again after re-initialization."] pub (crate) fn reset_singletons () { crate :: classes :: Input :: __singleton_cell () . reset () ; crate :: classes :: NativeMenu :: __singleton_cell () . reset () ; }