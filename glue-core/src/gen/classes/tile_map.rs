# ! [doc = "Sidecar module for class [`TileMap`][crate::classes::TileMap]."] # [allow (unused_imports)] use crate :: builtin :: * ; # [allow (unused_imports)] use crate :: meta :: { AsArg , AsObjectArg , CowArg , InternedName , ObjectArg , Signature } ; # [allow (unused_imports)] use crate :: obj :: Gd ; # [allow (unused_imports)] use crate :: signal :: { SignalObject , TypedSignal } ; use crate :: sys ; pub (super) mod re_export { use super :: * ; # [doc = "Godot class `TileMap`.\n\nInherits [`Node2D`][crate::classes::Node2D].\n\nRelated symbols (default-param builders, enums, interned names, signals) are in [`tile_map`][crate::classes::tile_map]."] # [derive (Debug)] # [repr (C)] pub struct TileMap { object_ptr : sys :: GDExtensionObjectPtr , } impl TileMap { pub fn set_navigation_map (& mut self , layer : i32 , map : Rid ,) { type CallRet = () ; type CallParams = (i32 , Rid ,) ; let args = (layer , map ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (650usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "TileMap" , "set_navigation_map" , self . object_ptr , args ,) } } pub fn get_navigation_map (& self , layer : i32 ,) -> Rid { type CallRet = Rid ; type CallParams = (i32 ,) ; let args = (layer ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (651usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "TileMap" , "get_navigation_map" , self . object_ptr , args ,) } } pub (crate) fn force_update_full (& mut self , layer : i32 ,) { type CallRet = () ; type CallParams = (i32 ,) ; let args = (layer ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (652usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "TileMap" , "force_update" , self . object_ptr , args ,) } } # [inline] pub fn force_update (& mut self ,) { self . force_update_ex () . done () } # [inline] pub fn force_update_ex < 'ex > (& 'ex mut self ,) -> super :: ExForceUpdate < 'ex > { super :: ExForceUpdate :: new (self ,) } pub fn set_tileset (& mut self , tileset : impl AsObjectArg < crate :: classes :: TileSet > ,) { type CallRet = () ; type CallParams = (ObjectArg < crate :: classes :: TileSet > ,) ; let args = (tileset . as_object_arg () ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (653usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "TileMap" , "set_tileset" , self . object_ptr , args ,) } } pub fn get_tileset (& self ,) -> Option < Gd < crate :: classes :: TileSet > > { type CallRet = Option < Gd < crate :: classes :: TileSet > > ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (654usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "TileMap" , "get_tileset" , self . object_ptr , args ,) } } pub fn set_rendering_quadrant_size (& mut self , size : i32 ,) { type CallRet = () ; type CallParams = (i32 ,) ; let args = (size ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (655usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "TileMap" , "set_rendering_quadrant_size" , self . object_ptr , args ,) } } pub fn get_rendering_quadrant_size (& self ,) -> i32 { type CallRet = i32 ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (656usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "TileMap" , "get_rendering_quadrant_size" , self . object_ptr , args ,) } } pub fn get_layers_count (& self ,) -> i32 { type CallRet = i32 ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (657usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "TileMap" , "get_layers_count" , self . object_ptr , args ,) } } pub fn add_layer (& mut self , to_position : i32 ,) { type CallRet = () ; type CallParams = (i32 ,) ; let args = (to_position ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (658usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "TileMap" , "add_layer" , self . object_ptr , args ,) } } pub fn move_layer (& mut self , layer : i32 , to_position : i32 ,) { type CallRet = () ; type CallParams = (i32 , i32 ,) ; let args = (layer , to_position ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (659usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "TileMap" , "move_layer" , self . object_ptr , args ,) } } pub fn remove_layer (& mut self , layer : i32 ,) { type CallRet = () ; type CallParams = (i32 ,) ; let args = (layer ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (660usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "TileMap" , "remove_layer" , self . object_ptr , args ,) } } pub fn set_layer_name (& mut self , layer : i32 , name : impl AsArg < GString > ,) { type CallRet = () ; type CallParams < 'a0 , > = (i32 , CowArg < 'a0 , GString > ,) ; let args = (layer , name . into_arg () ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (661usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "TileMap" , "set_layer_name" , self . object_ptr , args ,) } } pub fn get_layer_name (& self , layer : i32 ,) -> GString { type CallRet = GString ; type CallParams = (i32 ,) ; let args = (layer ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (662usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "TileMap" , "get_layer_name" , self . object_ptr , args ,) } } pub fn set_layer_enabled (& mut self , layer : i32 , enabled : bool ,) { type CallRet = () ; type CallParams = (i32 , bool ,) ; let args = (layer , enabled ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (663usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "TileMap" , "set_layer_enabled" , self . object_ptr , args ,) } } pub fn is_layer_enabled (& self , layer : i32 ,) -> bool { type CallRet = bool ; type CallParams = (i32 ,) ; let args = (layer ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (664usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "TileMap" , "is_layer_enabled" , self . object_ptr , args ,) } } pub fn set_layer_modulate (& mut self , layer : i32 , modulate : Color ,) { type CallRet = () ; type CallParams = (i32 , Color ,) ; let args = (layer , modulate ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (665usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "TileMap" , "set_layer_modulate" , self . object_ptr , args ,) } } pub fn get_layer_modulate (& self , layer : i32 ,) -> Color { type CallRet = Color ; type CallParams = (i32 ,) ; let args = (layer ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (666usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "TileMap" , "get_layer_modulate" , self . object_ptr , args ,) } } pub fn set_layer_y_sort_enabled (& mut self , layer : i32 , y_sort_enabled : bool ,) { type CallRet = () ; type CallParams = (i32 , bool ,) ; let args = (layer , y_sort_enabled ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (667usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "TileMap" , "set_layer_y_sort_enabled" , self . object_ptr , args ,) } } pub fn is_layer_y_sort_enabled (& self , layer : i32 ,) -> bool { type CallRet = bool ; type CallParams = (i32 ,) ; let args = (layer ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (668usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "TileMap" , "is_layer_y_sort_enabled" , self . object_ptr , args ,) } } pub fn set_layer_y_sort_origin (& mut self , layer : i32 , y_sort_origin : i32 ,) { type CallRet = () ; type CallParams = (i32 , i32 ,) ; let args = (layer , y_sort_origin ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (669usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "TileMap" , "set_layer_y_sort_origin" , self . object_ptr , args ,) } } pub fn get_layer_y_sort_origin (& self , layer : i32 ,) -> i32 { type CallRet = i32 ; type CallParams = (i32 ,) ; let args = (layer ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (670usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "TileMap" , "get_layer_y_sort_origin" , self . object_ptr , args ,) } } pub fn set_layer_z_index (& mut self , layer : i32 , z_index : i32 ,) { type CallRet = () ; type CallParams = (i32 , i32 ,) ; let args = (layer , z_index ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (671usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "TileMap" , "set_layer_z_index" , self . object_ptr , args ,) } } pub fn get_layer_z_index (& self , layer : i32 ,) -> i32 { type CallRet = i32 ; type CallParams = (i32 ,) ; let args = (layer ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (672usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "TileMap" , "get_layer_z_index" , self . object_ptr , args ,) } } pub fn set_layer_navigation_enabled (& mut self , layer : i32 , enabled : bool ,) { type CallRet = () ; type CallParams = (i32 , bool ,) ; let args = (layer , enabled ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (673usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "TileMap" , "set_layer_navigation_enabled" , self . object_ptr , args ,) } } pub fn is_layer_navigation_enabled (& self , layer : i32 ,) -> bool { type CallRet = bool ; type CallParams = (i32 ,) ; let args = (layer ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (674usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "TileMap" , "is_layer_navigation_enabled" , self . object_ptr , args ,) } } pub fn set_layer_navigation_map (& mut self , layer : i32 , map : Rid ,) { type CallRet = () ; type CallParams = (i32 , Rid ,) ; let args = (layer , map ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (675usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "TileMap" , "set_layer_navigation_map" , self . object_ptr , args ,) } } pub fn get_layer_navigation_map (& self , layer : i32 ,) -> Rid { type CallRet = Rid ; type CallParams = (i32 ,) ; let args = (layer ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (676usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "TileMap" , "get_layer_navigation_map" , self . object_ptr , args ,) } } pub fn set_collision_animatable (& mut self , enabled : bool ,) { type CallRet = () ; type CallParams = (bool ,) ; let args = (enabled ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (677usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "TileMap" , "set_collision_animatable" , self . object_ptr , args ,) } } pub fn is_collision_animatable (& self ,) -> bool { type CallRet = bool ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (678usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "TileMap" , "is_collision_animatable" , self . object_ptr , args ,) } } pub fn set_collision_visibility_mode (& mut self , collision_visibility_mode : crate :: classes :: tile_map :: VisibilityMode ,) { type CallRet = () ; type CallParams = (crate :: classes :: tile_map :: VisibilityMode ,) ; let args = (collision_visibility_mode ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (679usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "TileMap" , "set_collision_visibility_mode" , self . object_ptr , args ,) } } pub fn get_collision_visibility_mode (& self ,) -> crate :: classes :: tile_map :: VisibilityMode { type CallRet = crate :: classes :: tile_map :: VisibilityMode ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (680usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "TileMap" , "get_collision_visibility_mode" , self . object_ptr , args ,) } } pub fn set_navigation_visibility_mode (& mut self , navigation_visibility_mode : crate :: classes :: tile_map :: VisibilityMode ,) { type CallRet = () ; type CallParams = (crate :: classes :: tile_map :: VisibilityMode ,) ; let args = (navigation_visibility_mode ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (681usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "TileMap" , "set_navigation_visibility_mode" , self . object_ptr , args ,) } } pub fn get_navigation_visibility_mode (& self ,) -> crate :: classes :: tile_map :: VisibilityMode { type CallRet = crate :: classes :: tile_map :: VisibilityMode ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (682usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "TileMap" , "get_navigation_visibility_mode" , self . object_ptr , args ,) } } pub (crate) fn set_cell_full (& mut self , layer : i32 , coords : Vector2i , source_id : i32 , atlas_coords : Vector2i , alternative_tile : i32 ,) { type CallRet = () ; type CallParams = (i32 , Vector2i , i32 , Vector2i , i32 ,) ; let args = (layer , coords , source_id , atlas_coords , alternative_tile ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (683usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "TileMap" , "set_cell" , self . object_ptr , args ,) } } # [inline] pub fn set_cell (& mut self , layer : i32 , coords : Vector2i ,) { self . set_cell_ex (layer , coords ,) . done () } # [inline] pub fn set_cell_ex < 'ex > (& 'ex mut self , layer : i32 , coords : Vector2i ,) -> super :: ExSetCell < 'ex > { super :: ExSetCell :: new (self , layer , coords ,) } pub fn erase_cell (& mut self , layer : i32 , coords : Vector2i ,) { type CallRet = () ; type CallParams = (i32 , Vector2i ,) ; let args = (layer , coords ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (684usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "TileMap" , "erase_cell" , self . object_ptr , args ,) } } pub (crate) fn get_cell_source_id_full (& self , layer : i32 , coords : Vector2i , use_proxies : bool ,) -> i32 { type CallRet = i32 ; type CallParams = (i32 , Vector2i , bool ,) ; let args = (layer , coords , use_proxies ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (685usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "TileMap" , "get_cell_source_id" , self . object_ptr , args ,) } } # [inline] pub fn get_cell_source_id (& self , layer : i32 , coords : Vector2i ,) -> i32 { self . get_cell_source_id_ex (layer , coords ,) . done () } # [inline] pub fn get_cell_source_id_ex < 'ex > (& 'ex self , layer : i32 , coords : Vector2i ,) -> super :: ExGetCellSourceId < 'ex > { super :: ExGetCellSourceId :: new (self , layer , coords ,) } pub (crate) fn get_cell_atlas_coords_full (& self , layer : i32 , coords : Vector2i , use_proxies : bool ,) -> Vector2i { type CallRet = Vector2i ; type CallParams = (i32 , Vector2i , bool ,) ; let args = (layer , coords , use_proxies ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (686usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "TileMap" , "get_cell_atlas_coords" , self . object_ptr , args ,) } } # [inline] pub fn get_cell_atlas_coords (& self , layer : i32 , coords : Vector2i ,) -> Vector2i { self . get_cell_atlas_coords_ex (layer , coords ,) . done () } # [inline] pub fn get_cell_atlas_coords_ex < 'ex > (& 'ex self , layer : i32 , coords : Vector2i ,) -> super :: ExGetCellAtlasCoords < 'ex > { super :: ExGetCellAtlasCoords :: new (self , layer , coords ,) } pub (crate) fn get_cell_alternative_tile_full (& self , layer : i32 , coords : Vector2i , use_proxies : bool ,) -> i32 { type CallRet = i32 ; type CallParams = (i32 , Vector2i , bool ,) ; let args = (layer , coords , use_proxies ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (687usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "TileMap" , "get_cell_alternative_tile" , self . object_ptr , args ,) } } # [inline] pub fn get_cell_alternative_tile (& self , layer : i32 , coords : Vector2i ,) -> i32 { self . get_cell_alternative_tile_ex (layer , coords ,) . done () } # [inline] pub fn get_cell_alternative_tile_ex < 'ex > (& 'ex self , layer : i32 , coords : Vector2i ,) -> super :: ExGetCellAlternativeTile < 'ex > { super :: ExGetCellAlternativeTile :: new (self , layer , coords ,) } pub fn get_coords_for_body_rid (& mut self , body : Rid ,) -> Vector2i { type CallRet = Vector2i ; type CallParams = (Rid ,) ; let args = (body ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (688usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "TileMap" , "get_coords_for_body_rid" , self . object_ptr , args ,) } } pub fn get_layer_for_body_rid (& mut self , body : Rid ,) -> i32 { type CallRet = i32 ; type CallParams = (Rid ,) ; let args = (body ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (689usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "TileMap" , "get_layer_for_body_rid" , self . object_ptr , args ,) } } pub fn fix_invalid_tiles (& mut self ,) { type CallRet = () ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (690usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "TileMap" , "fix_invalid_tiles" , self . object_ptr , args ,) } } pub fn clear_layer (& mut self , layer : i32 ,) { type CallRet = () ; type CallParams = (i32 ,) ; let args = (layer ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (691usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "TileMap" , "clear_layer" , self . object_ptr , args ,) } } pub fn clear (& mut self ,) { type CallRet = () ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (692usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "TileMap" , "clear" , self . object_ptr , args ,) } } pub fn update_internals (& mut self ,) { type CallRet = () ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (693usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "TileMap" , "update_internals" , self . object_ptr , args ,) } } pub (crate) fn notify_runtime_tile_data_update_full (& mut self , layer : i32 ,) { type CallRet = () ; type CallParams = (i32 ,) ; let args = (layer ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (694usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "TileMap" , "notify_runtime_tile_data_update" , self . object_ptr , args ,) } } # [inline] pub fn notify_runtime_tile_data_update (& mut self ,) { self . notify_runtime_tile_data_update_ex () . done () } # [inline] pub fn notify_runtime_tile_data_update_ex < 'ex > (& 'ex mut self ,) -> super :: ExNotifyRuntimeTileDataUpdate < 'ex > { super :: ExNotifyRuntimeTileDataUpdate :: new (self ,) } pub fn get_used_rect (& self ,) -> Rect2i { type CallRet = Rect2i ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (695usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "TileMap" , "get_used_rect" , self . object_ptr , args ,) } } pub fn map_to_local (& self , map_position : Vector2i ,) -> Vector2 { type CallRet = Vector2 ; type CallParams = (Vector2i ,) ; let args = (map_position ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (696usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "TileMap" , "map_to_local" , self . object_ptr , args ,) } } pub fn local_to_map (& self , local_position : Vector2 ,) -> Vector2i { type CallRet = Vector2i ; type CallParams = (Vector2 ,) ; let args = (local_position ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (697usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "TileMap" , "local_to_map" , self . object_ptr , args ,) } } pub fn get_neighbor_cell (& self , coords : Vector2i , neighbor : crate :: classes :: tile_set :: CellNeighbor ,) -> Vector2i { type CallRet = Vector2i ; type CallParams = (Vector2i , crate :: classes :: tile_set :: CellNeighbor ,) ; let args = (coords , neighbor ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (698usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "TileMap" , "get_neighbor_cell" , self . object_ptr , args ,) } } # [doc = "Typed signals of this class and its bases; see [`SignalsOfTileMap`][super::tile_map::SignalsOfTileMap]."] pub fn signals (& mut self) -> super :: SignalsOfTileMap < '_ > { super :: SignalsOfTileMap :: __new (crate :: signal :: SignalObject :: __new (self . object_ptr)) } } impl crate :: obj :: GodotClass for TileMap { const CLASS_NAME : & 'static str = "TileMap" ; type Base = crate :: classes :: Node2D ; type Memory = crate :: obj :: MemManual ; const INIT_LEVEL : crate :: init :: InitLevel = crate :: init :: InitLevel :: Scene ; } impl crate :: obj :: EngineClass for TileMap { fn as_object_ptr (& self) -> sys :: GDExtensionObjectPtr { self . object_ptr } } unsafe impl crate :: obj :: Inherits < crate :: classes :: Node2D > for TileMap { } unsafe impl crate :: obj :: Inherits < crate :: classes :: CanvasItem > for TileMap { } unsafe impl crate :: obj :: Inherits < crate :: classes :: Node > for TileMap { } unsafe impl crate :: obj :: Inherits < crate :: classes :: Object > for TileMap { } impl crate :: obj :: Instantiable for TileMap { } impl std :: ops :: Deref for TileMap { type Target = crate :: classes :: Node2D ; fn deref (& self) -> & Self :: Target { unsafe { std :: mem :: transmute :: < & Self , & Self :: Target > (self) } } } impl std :: ops :: DerefMut for TileMap { fn deref_mut (& mut self) -> & mut Self :: Target { unsafe { std :: mem :: transmute :: < & mut Self , & mut Self :: Target > (self) } } } } # [doc = "Default-param extender for [`TileMap::force_update_ex`][super::TileMap::force_update_ex]."] # [must_use] pub struct ExForceUpdate < 'ex > { surround_object : & 'ex mut re_export :: TileMap , layer : i32 , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExForceUpdate < 'ex > { fn new (surround_object : & 'ex mut re_export :: TileMap ,) -> Self { Self { surround_object , layer : - 1i32 , } } # [inline] pub fn layer (self , value : i32) -> Self { Self { layer : value , .. self } } # [inline] pub fn done (self) { re_export :: TileMap :: force_update_full (self . surround_object , self . layer ,) } } # [doc = "Default-param extender for [`TileMap::set_cell_ex`][super::TileMap::set_cell_ex]."] # [must_use] pub struct ExSetCell < 'ex > { surround_object : & 'ex mut re_export :: TileMap , layer : i32 , coords : Vector2i , source_id : i32 , atlas_coords : Vector2i , alternative_tile : i32 , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExSetCell < 'ex > { fn new (surround_object : & 'ex mut re_export :: TileMap , layer : i32 , coords : Vector2i ,) -> Self { Self { surround_object , layer , coords , source_id : - 1i32 , atlas_coords : Vector2i :: new (- 1 as _ , - 1 as _) , alternative_tile : 0i32 , } } # [inline] pub fn source_id (self , value : i32) -> Self { Self { source_id : value , .. self } } # [inline] pub fn atlas_coords (self , value : Vector2i) -> Self { Self { atlas_coords : value , .. self } } # [inline] pub fn alternative_tile (self , value : i32) -> Self { Self { alternative_tile : value , .. self } } # [inline] pub fn done (self) { re_export :: TileMap :: set_cell_full (self . surround_object , self . layer , self . coords , self . source_id , self . atlas_coords , self . alternative_tile ,) } } # [doc = "Default-param extender for [`TileMap::get_cell_source_id_ex`][super::TileMap::get_cell_source_id_ex]."] # [must_use] pub struct ExGetCellSourceId < 'ex > { surround_object : & 'ex re_export :: TileMap , layer : i32 , coords : Vector2i , use_proxies : bool , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExGetCellSourceId < 'ex > { fn new (surround_object : & 'ex re_export :: TileMap , layer : i32 , coords : Vector2i ,) -> Self { Self { surround_object , layer , coords , use_proxies : false , } } # [inline] pub fn use_proxies (self , value : bool) -> Self { Self { use_proxies : value , .. self } } # [inline] pub fn done (self) -> i32 { re_export :: TileMap :: get_cell_source_id_full (self . surround_object , self . layer , self . coords , self . use_proxies ,) } } # [doc = "Default-param extender for [`TileMap::get_cell_atlas_coords_ex`][super::TileMap::get_cell_atlas_coords_ex]."] # [must_use] pub struct ExGetCellAtlasCoords < 'ex > { surround_object : & 'ex re_export :: TileMap , layer : i32 , coords : Vector2i , use_proxies : bool , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExGetCellAtlasCoords < 'ex > { fn new (surround_object : & 'ex re_export :: TileMap , layer : i32 , coords : Vector2i ,) -> Self { Self { surround_object , layer , coords , use_proxies : false , } } # [inline] pub fn use_proxies (self , value : bool) -> Self { Self { use_proxies : value , .. self } } # [inline] pub fn done (self) -> Vector2i { re_export :: TileMap :: get_cell_atlas_coords_full (self . surround_object , self . layer , self . coords , self . use_proxies ,) } } # [doc = "Default-param extender for [`TileMap::get_cell_alternative_tile_ex`][super::TileMap::get_cell_alternative_tile_ex]."] # [must_use] pub struct ExGetCellAlternativeTile < 'ex > { surround_object : & 'ex re_export :: TileMap , layer : i32 , coords : Vector2i , use_proxies : bool , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExGetCellAlternativeTile < 'ex > { fn new (surround_object : & 'ex re_export :: TileMap , layer : i32 , coords : Vector2i ,) -> Self { Self { surround_object , layer , coords , use_proxies : false , } } # [inline] pub fn use_proxies (self , value : bool) -> Self { Self { use_proxies : value , .. self } } # [inline] pub fn done (self) -> i32 { re_export :: TileMap :: get_cell_alternative_tile_full (self . surround_object , self . layer , self . coords , self . use_proxies ,) } } # [doc = "Default-param extender for [`TileMap::notify_runtime_tile_data_update_ex`][super::TileMap::notify_runtime_tile_data_update_ex]."] # [must_use] pub struct ExNotifyRuntimeTileDataUpdate < 'ex > { surround_object : & 'ex mut re_export :: TileMap , layer : i32 , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExNotifyRuntimeTileDataUpdate < 'ex > { fn new (surround_object : & 'ex mut re_export :: TileMap ,) -> Self { Self { surround_object , layer : - 1i32 , } } # [inline] pub fn layer (self , value : i32) -> Self { Self { layer : value , .. self } } # [inline] pub fn done (self) { re_export :: TileMap :: notify_runtime_tile_data_update_full (self . surround_object , self . layer ,) } } # [repr (transparent)] # [derive (Copy , Clone , Eq , PartialEq , Hash ,)] pub struct VisibilityMode { ord : i32 } impl VisibilityMode { # [doc (alias = "VISIBILITY_MODE_DEFAULT")] # [doc = "Godot enumerator name: `VISIBILITY_MODE_DEFAULT`"] pub const DEFAULT : Self = Self { ord : 0 } ; # [doc (alias = "VISIBILITY_MODE_FORCE_HIDE")] # [doc = "Godot enumerator name: `VISIBILITY_MODE_FORCE_HIDE`"] pub const FORCE_HIDE : Self = Self { ord : 2 } ; # [doc (alias = "VISIBILITY_MODE_FORCE_SHOW")] # [doc = "Godot enumerator name: `VISIBILITY_MODE_FORCE_SHOW`"] pub const FORCE_SHOW : Self = Self { ord : 1 } ; # [allow (unreachable_patterns)] fn enumerator_name (self) -> Option < & 'static str > { match self { Self :: DEFAULT => Some ("DEFAULT") , Self :: FORCE_HIDE => Some ("FORCE_HIDE") , Self :: FORCE_SHOW => Some ("FORCE_SHOW") , _ => None , } } } impl std :: fmt :: Debug for VisibilityMode { fn fmt (& self , f : & mut std :: fmt :: Formatter < '_ >) -> std :: fmt :: Result { match self . enumerator_name () { Some (enumerator) => f . write_str (enumerator) , None => f . debug_struct (stringify ! (VisibilityMode)) . field ("ord" , & self . ord) . finish () , } } } impl crate :: obj :: EngineEnum for VisibilityMode { fn try_from_ord (ord : i32) -> Option < Self > { match ord { 0 | 1 | 2 => Some (Self { ord }) , _ => None , } } fn ord (self) -> i32 { self . ord } } impl crate :: meta :: GodotConvert for VisibilityMode { type Via = i32 ; } impl crate :: meta :: ToGodot for VisibilityMode { fn to_godot (& self) -> Self :: Via { < Self as crate :: obj :: EngineEnum > :: ord (* self) } } impl crate :: meta :: FromGodot for VisibilityMode { fn try_from_godot (via : Self :: Via) -> std :: result :: Result < Self , crate :: meta :: ConvertError > { Ok (Self { ord : via }) } } # [doc = "Properties declared by [`TileMap`][super::TileMap], as interned engine names."] pub struct PropertyName ; impl PropertyName { pub const TILE_SET : InternedName = InternedName :: new ("tile_set") ; pub const RENDERING_QUADRANT_SIZE : InternedName = InternedName :: new ("rendering_quadrant_size") ; pub const COLLISION_ANIMATABLE : InternedName = InternedName :: new ("collision_animatable") ; pub const COLLISION_VISIBILITY_MODE : InternedName = InternedName :: new ("collision_visibility_mode") ; pub const NAVIGATION_VISIBILITY_MODE : InternedName = InternedName :: new ("navigation_visibility_mode") ; } # [doc = "Methods declared by [`TileMap`][super::TileMap], as interned engine names."] pub struct MethodName ; impl MethodName { pub const SET_NAVIGATION_MAP : InternedName = InternedName :: new ("set_navigation_map") ; pub const GET_NAVIGATION_MAP : InternedName = InternedName :: new ("get_navigation_map") ; pub const FORCE_UPDATE : InternedName = InternedName :: new ("force_update") ; pub const SET_TILESET : InternedName = InternedName :: new ("set_tileset") ; pub const GET_TILESET : InternedName = InternedName :: new ("get_tileset") ; pub const SET_RENDERING_QUADRANT_SIZE : InternedName = InternedName :: new ("set_rendering_quadrant_size") ; pub const GET_RENDERING_QUADRANT_SIZE : InternedName = InternedName :: new ("get_rendering_quadrant_size") ; pub const GET_LAYERS_COUNT : InternedName = InternedName :: new ("get_layers_count") ; pub const ADD_LAYER : InternedName = InternedName :: new ("add_layer") ; pub const MOVE_LAYER : InternedName = InternedName :: new ("move_layer") ; pub const REMOVE_LAYER : InternedName = InternedName :: new ("remove_layer") ; pub const SET_LAYER_NAME : InternedName = InternedName :: new ("set_layer_name") ; pub const GET_LAYER_NAME : InternedName = InternedName :: new ("get_layer_name") ; pub const SET_LAYER_ENABLED : InternedName = InternedName :: new ("set_layer_enabled") ; pub const IS_LAYER_ENABLED : InternedName = InternedName :: new ("is_layer_enabled") ; pub const SET_LAYER_MODULATE : InternedName = InternedName :: new ("set_layer_modulate") ; pub const GET_LAYER_MODULATE : InternedName = InternedName :: new ("get_layer_modulate") ; pub const SET_LAYER_Y_SORT_ENABLED : InternedName = InternedName :: new ("set_layer_y_sort_enabled") ; pub const IS_LAYER_Y_SORT_ENABLED : InternedName = InternedName :: new ("is_layer_y_sort_enabled") ; pub const SET_LAYER_Y_SORT_ORIGIN : InternedName = InternedName :: new ("set_layer_y_sort_origin") ; pub const GET_LAYER_Y_SORT_ORIGIN : InternedName = InternedName :: new ("get_layer_y_sort_origin") ; pub const SET_LAYER_Z_INDEX : InternedName = InternedName :: new ("set_layer_z_index") ; pub const GET_LAYER_Z_INDEX : InternedName = InternedName :: new ("get_layer_z_index") ; pub const SET_LAYER_NAVIGATION_ENABLED : InternedName = InternedName :: new ("set_layer_navigation_enabled") ; pub const IS_LAYER_NAVIGATION_ENABLED : InternedName = InternedName :: new ("is_layer_navigation_enabled") ; pub const SET_LAYER_NAVIGATION_MAP : InternedName = InternedName :: new ("set_layer_navigation_map") ; pub const GET_LAYER_NAVIGATION_MAP : InternedName = InternedName :: new ("get_layer_navigation_map") ; pub const SET_COLLISION_ANIMATABLE : InternedName = InternedName :: new ("set_collision_animatable") ; pub const IS_COLLISION_ANIMATABLE : InternedName = InternedName :: new ("is_collision_animatable") ; pub const SET_COLLISION_VISIBILITY_MODE : InternedName = InternedName :: new ("set_collision_visibility_mode") ; pub const GET_COLLISION_VISIBILITY_MODE : InternedName = InternedName :: new ("get_collision_visibility_mode") ; pub const SET_NAVIGATION_VISIBILITY_MODE : InternedName = InternedName :: new ("set_navigation_visibility_mode") ; pub const GET_NAVIGATION_VISIBILITY_MODE : InternedName = InternedName :: new ("get_navigation_visibility_mode") ; pub const SET_CELL : InternedName = InternedName :: new ("set_cell") ; pub const ERASE_CELL : InternedName = InternedName :: new ("erase_cell") ; pub const GET_CELL_SOURCE_ID : InternedName = InternedName :: new ("get_cell_source_id") ; pub const GET_CELL_ATLAS_COORDS : InternedName = InternedName :: new ("get_cell_atlas_coords") ; pub const GET_CELL_ALTERNATIVE_TILE : InternedName = InternedName :: new ("get_cell_alternative_tile") ; pub const GET_COORDS_FOR_BODY_RID : InternedName = InternedName :: new ("get_coords_for_body_rid") ; pub const GET_LAYER_FOR_BODY_RID : InternedName = InternedName :: new ("get_layer_for_body_rid") ; pub const FIX_INVALID_TILES : InternedName = InternedName :: new ("fix_invalid_tiles") ; pub const CLEAR_LAYER : InternedName = InternedName :: new ("clear_layer") ; pub const CLEAR : InternedName = InternedName :: new ("clear") ; pub const UPDATE_INTERNALS : InternedName = InternedName :: new ("update_internals") ; pub const NOTIFY_RUNTIME_TILE_DATA_UPDATE : InternedName = InternedName :: new ("notify_runtime_tile_data_update") ; pub const GET_USED_RECT : InternedName = InternedName :: new ("get_used_rect") ; pub const MAP_TO_LOCAL : InternedName = InternedName :: new ("map_to_local") ; pub const LOCAL_TO_MAP : InternedName = InternedName :: new ("local_to_map") ; pub const GET_NEIGHBOR_CELL : InternedName = InternedName :: new ("get_neighbor_cell") ; } # [doc = "Signals declared by [`TileMap`][super::TileMap], as interned engine names."] pub struct SignalName ; impl SignalName { pub const CHANGED : InternedName = InternedName :: new ("changed") ; } # [doc = "A collection of signals for the [`TileMap`][crate::classes::TileMap] class."] pub struct SignalsOfTileMap < 'c > { __base : crate :: classes :: canvas_item :: SignalsOfCanvasItem < 'c > , } impl < 'c > SignalsOfTileMap < 'c > { # [doc (hidden)] pub fn __new (object : SignalObject < 'c >) -> Self { Self { __base : crate :: classes :: canvas_item :: SignalsOfCanvasItem :: __new (object) } } # [doc (hidden)] pub fn __object (& self) -> SignalObject < 'c > { self . __base . __object () } # [doc = "Signature: `()`"] pub fn changed (& mut self) -> SigChanged < 'c > { SigChanged { typed : TypedSignal :: __new (self . __object () , "changed") , } } } impl < 'c > std :: ops :: Deref for SignalsOfTileMap < 'c > { type Target = crate :: classes :: canvas_item :: SignalsOfCanvasItem < 'c > ; fn deref (& self) -> & Self :: Target { & self . __base } } impl std :: ops :: DerefMut for SignalsOfTileMap < '_ > { fn deref_mut (& mut self) -> & mut Self :: Target { & mut self . __base } } type TypedSigChanged < 'c > = TypedSignal < 'c , () > ; pub struct SigChanged < 'c > { typed : TypedSigChanged < 'c > , } impl SigChanged < '_ > { pub fn emit (& mut self ,) { self . typed . emit_tuple (()) ; } } impl < 'c > std :: ops :: Deref for SigChanged < 'c > { type Target = TypedSigChanged < 'c > ; fn deref (& self) -> & Self :: Target { & self . typed } } impl std :: ops :: DerefMut for SigChanged < '_ > { fn deref_mut (& mut self) -> & mut Self :: Target { & mut self . typed } }