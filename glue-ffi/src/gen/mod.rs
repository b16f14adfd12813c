pub mod table_core_classes ; pub mod table_servers_classes ; pub mod table_scene_classes ; pub mod table_editor_classes ; pub mod types ; # [doc = r" Version of `extension_api.json` that the tables were generated from."] pub const GODOT_API_VERSION : (u8 , u8 , u8) = (4u8 , 3u8 , 0u8) ; pub const GODOT_API_VERSION_STRING : & str = "v4.3.stable.official" ;