# ! [doc = "Sidecar module for class [`TileSet`][crate::classes::TileSet]."] # [allow (unused_imports)] use crate :: builtin :: * ; # [allow (unused_imports)] use crate :: meta :: { AsArg , AsObjectArg , CowArg , InternedName , ObjectArg , Signature } ; # [allow (unused_imports)] use crate :: obj :: Gd ; # [allow (unused_imports)] use crate :: signal :: { SignalObject , TypedSignal } ; use crate :: sys ; pub (super) mod re_export { use super :: * ; # [doc = "Godot class `TileSet`.\n\nInherits [`Resource`][crate::classes::Resource].\n\nRelated symbols (default-param builders, enums, interned names, signals) are in [`tile_set`][crate::classes::tile_set]."] # [derive (Debug)] # [repr (C)] pub struct TileSet { object_ptr : sys :: GDExtensionObjectPtr , } impl TileSet { pub fn get_next_source_id (& self ,) -> i32 { type CallRet = i32 ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (699usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "TileSet" , "get_next_source_id" , self . object_ptr , args ,) } } pub fn remove_source (& mut self , source_id : i32 ,) { type CallRet = () ; type CallParams = (i32 ,) ; let args = (source_id ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (700usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "TileSet" , "remove_source" , self . object_ptr , args ,) } } pub fn set_source_id (& mut self , source_id : i32 , new_source_id : i32 ,) { type CallRet = () ; type CallParams = (i32 , i32 ,) ; let args = (source_id , new_source_id ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (701usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "TileSet" , "set_source_id" , self . object_ptr , args ,) } } pub fn get_source_count (& self ,) -> i32 { type CallRet = i32 ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (702usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "TileSet" , "get_source_count" , self . object_ptr , args ,) } } pub fn get_source_id (& self , index : i32 ,) -> i32 { type CallRet = i32 ; type CallParams = (i32 ,) ; let args = (index ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (703usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "TileSet" , "get_source_id" , self . object_ptr , args ,) } } pub fn has_source (& self , source_id : i32 ,) -> bool { type CallRet = bool ; type CallParams = (i32 ,) ; let args = (source_id ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (704usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "TileSet" , "has_source" , self . object_ptr , args ,) } } pub fn set_tile_shape (& mut self , shape : crate :: classes :: tile_set :: TileShape ,) { type CallRet = () ; type CallParams = (crate :: classes :: tile_set :: TileShape ,) ; let args = (shape ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (705usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "TileSet" , "set_tile_shape" , self . object_ptr , args ,) } } pub fn get_tile_shape (& self ,) -> crate :: classes :: tile_set :: TileShape { type CallRet = crate :: classes :: tile_set :: TileShape ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (706usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "TileSet" , "get_tile_shape" , self . object_ptr , args ,) } } pub fn set_tile_layout (& mut self , layout : crate :: classes :: tile_set :: TileLayout ,) { type CallRet = () ; type CallParams = (crate :: classes :: tile_set :: TileLayout ,) ; let args = (layout ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (707usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "TileSet" , "set_tile_layout" , self . object_ptr , args ,) } } pub fn get_tile_layout (& self ,) -> crate :: classes :: tile_set :: TileLayout { type CallRet = crate :: classes :: tile_set :: TileLayout ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (708usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "TileSet" , "get_tile_layout" , self . object_ptr , args ,) } } pub fn set_tile_offset_axis (& mut self , alignment : crate :: classes :: tile_set :: TileOffsetAxis ,) { type CallRet = () ; type CallParams = (crate :: classes :: tile_set :: TileOffsetAxis ,) ; let args = (alignment ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (709usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "TileSet" , "set_tile_offset_axis" , self . object_ptr , args ,) } } pub fn get_tile_offset_axis (& self ,) -> crate :: classes :: tile_set :: TileOffsetAxis { type CallRet = crate :: classes :: tile_set :: TileOffsetAxis ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (710usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "TileSet" , "get_tile_offset_axis" , self . object_ptr , args ,) } } pub fn set_tile_size (& mut self , size : Vector2i ,) { type CallRet = () ; type CallParams = (Vector2i ,) ; let args = (size ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (711usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "TileSet" , "set_tile_size" , self . object_ptr , args ,) } } pub fn get_tile_size (& self ,) -> Vector2i { type CallRet = Vector2i ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (712usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "TileSet" , "get_tile_size" , self . object_ptr , args ,) } } pub fn set_uv_clipping (& mut self , uv_clipping : bool ,) { type CallRet = () ; type CallParams = (bool ,) ; let args = (uv_clipping ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (713usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "TileSet" , "set_uv_clipping" , self . object_ptr , args ,) } } pub fn is_uv_clipping (& self ,) -> bool { type CallRet = bool ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (714usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "TileSet" , "is_uv_clipping" , self . object_ptr , args ,) } } pub fn get_occlusion_layers_count (& self ,) -> i32 { type CallRet = i32 ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (715usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "TileSet" , "get_occlusion_layers_count" , self . object_ptr , args ,) } } pub (crate) fn add_occlusion_layer_full (& mut self , to_position : i32 ,) { type CallRet = () ; type CallParams = (i32 ,) ; let args = (to_position ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (716usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "TileSet" , "add_occlusion_layer" , self . object_ptr , args ,) } } # [inline] pub fn add_occlusion_layer (& mut self ,) { self . add_occlusion_layer_ex () . done () } # [inline] pub fn add_occlusion_layer_ex < 'ex > (& 'ex mut self ,) -> super :: ExAddOcclusionLayer < 'ex > { super :: ExAddOcclusionLayer :: new (self ,) } pub fn move_occlusion_layer (& mut self , layer_index : i32 , to_position : i32 ,) { type CallRet = () ; type CallParams = (i32 , i32 ,) ; let args = (layer_index , to_position ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (717usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "TileSet" , "move_occlusion_layer" , self . object_ptr , args ,) } } pub fn remove_occlusion_layer (& mut self , layer_index : i32 ,) { type CallRet = () ; type CallParams = (i32 ,) ; let args = (layer_index ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (718usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "TileSet" , "remove_occlusion_layer" , self . object_ptr , args ,) } } pub fn set_occlusion_layer_light_mask (& mut self , layer_index : i32 , light_mask : i32 ,) { type CallRet = () ; type CallParams = (i32 , i32 ,) ; let args = (layer_index , light_mask ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (719usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "TileSet" , "set_occlusion_layer_light_mask" , self . object_ptr , args ,) } } pub fn get_occlusion_layer_light_mask (& self , layer_index : i32 ,) -> i32 { type CallRet = i32 ; type CallParams = (i32 ,) ; let args = (layer_index ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (720usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "TileSet" , "get_occlusion_layer_light_mask" , self . object_ptr , args ,) } } pub fn set_occlusion_layer_sdf_collision (& mut self , layer_index : i32 , sdf_collision : bool ,) { type CallRet = () ; type CallParams = (i32 , bool ,) ; let args = (layer_index , sdf_collision ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (721usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "TileSet" , "set_occlusion_layer_sdf_collision" , self . object_ptr , args ,) } } pub fn get_occlusion_layer_sdf_collision (& self , layer_index : i32 ,) -> bool { type CallRet = bool ; type CallParams = (i32 ,) ; let args = (layer_index ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (722usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "TileSet" , "get_occlusion_layer_sdf_collision" , self . object_ptr , args ,) } } pub fn get_physics_layers_count (& self ,) -> i32 { type CallRet = i32 ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (723usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "TileSet" , "get_physics_layers_count" , self . object_ptr , args ,) } } pub (crate) fn add_physics_layer_full (& mut self , to_position : i32 ,) { type CallRet = () ; type CallParams = (i32 ,) ; let args = (to_position ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (724usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "TileSet" , "add_physics_layer" , self . object_ptr , args ,) } } # [inline] pub fn add_physics_layer (& mut self ,) { self . add_physics_layer_ex () . done () } # [inline] pub fn add_physics_layer_ex < 'ex > (& 'ex mut self ,) -> super :: ExAddPhysicsLayer < 'ex > { super :: ExAddPhysicsLayer :: new (self ,) } pub fn move_physics_layer (& mut self , layer_index : i32 , to_position : i32 ,) { type CallRet = () ; type CallParams = (i32 , i32 ,) ; let args = (layer_index , to_position ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (725usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "TileSet" , "move_physics_layer" , self . object_ptr , args ,) } } pub fn remove_physics_layer (& mut self , layer_index : i32 ,) { type CallRet = () ; type CallParams = (i32 ,) ; let args = (layer_index ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (726usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "TileSet" , "remove_physics_layer" , self . object_ptr , args ,) } } pub fn set_physics_layer_collision_layer (& mut self , layer_index : i32 , layer : u32 ,) { type CallRet = () ; type CallParams = (i32 , u32 ,) ; let args = (layer_index , layer ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (727usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "TileSet" , "set_physics_layer_collision_layer" , self . object_ptr , args ,) } } pub fn get_physics_layer_collision_layer (& self , layer_index : i32 ,) -> u32 { type CallRet = u32 ; type CallParams = (i32 ,) ; let args = (layer_index ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (728usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "TileSet" , "get_physics_layer_collision_layer" , self . object_ptr , args ,) } } pub fn set_physics_layer_collision_mask (& mut self , layer_index : i32 , mask : u32 ,) { type CallRet = () ; type CallParams = (i32 , u32 ,) ; let args = (layer_index , mask ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (729usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "TileSet" , "set_physics_layer_collision_mask" , self . object_ptr , args ,) } } pub fn get_physics_layer_collision_mask (& self , layer_index : i32 ,) -> u32 { type CallRet = u32 ; type CallParams = (i32 ,) ; let args = (layer_index ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (730usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "TileSet" , "get_physics_layer_collision_mask" , self . object_ptr , args ,) } } pub fn get_terrain_sets_count (& self ,) -> i32 { type CallRet = i32 ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (731usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "TileSet" , "get_terrain_sets_count" , self . object_ptr , args ,) } } pub (crate) fn add_terrain_set_full (& mut self , to_position : i32 ,) { type CallRet = () ; type CallParams = (i32 ,) ; let args = (to_position ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (732usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "TileSet" , "add_terrain_set" , self . object_ptr , args ,) } } # [inline] pub fn add_terrain_set (& mut self ,) { self . add_terrain_set_ex () . done () } # [inline] pub fn add_terrain_set_ex < 'ex > (& 'ex mut self ,) -> super :: ExAddTerrainSet < 'ex > { super :: ExAddTerrainSet :: new (self ,) } pub fn move_terrain_set (& mut self , terrain_set : i32 , to_position : i32 ,) { type CallRet = () ; type CallParams = (i32 , i32 ,) ; let args = (terrain_set , to_position ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (733usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "TileSet" , "move_terrain_set" , self . object_ptr , args ,) } } pub fn remove_terrain_set (& mut self , terrain_set : i32 ,) { type CallRet = () ; type CallParams = (i32 ,) ; let args = (terrain_set ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (734usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "TileSet" , "remove_terrain_set" , self . object_ptr , args ,) } } pub fn set_terrain_set_mode (& mut self , terrain_set : i32 , mode : crate :: classes :: tile_set :: TerrainMode ,) { type CallRet = () ; type CallParams = (i32 , crate :: classes :: tile_set :: TerrainMode ,) ; let args = (terrain_set , mode ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (735usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "TileSet" , "set_terrain_set_mode" , self . object_ptr , args ,) } } pub fn get_terrain_set_mode (& self , terrain_set : i32 ,) -> crate :: classes :: tile_set :: TerrainMode { type CallRet = crate :: classes :: tile_set :: TerrainMode ; type CallParams = (i32 ,) ; let args = (terrain_set ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (736usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "TileSet" , "get_terrain_set_mode" , self . object_ptr , args ,) } } pub fn get_terrains_count (& self , terrain_set : i32 ,) -> i32 { type CallRet = i32 ; type CallParams = (i32 ,) ; let args = (terrain_set ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (737usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "TileSet" , "get_terrains_count" , self . object_ptr , args ,) } } pub (crate) fn add_terrain_full (& mut self , terrain_set : i32 , to_position : i32 ,) { type CallRet = () ; type CallParams = (i32 , i32 ,) ; let args = (terrain_set , to_position ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (738usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "TileSet" , "add_terrain" , self . object_ptr , args ,) } } # [inline] pub fn add_terrain (& mut self , terrain_set : i32 ,) { self . add_terrain_ex (terrain_set ,) . done () } # [inline] pub fn add_terrain_ex < 'ex > (& 'ex mut self , terrain_set : i32 ,) -> super :: ExAddTerrain < 'ex > { super :: ExAddTerrain :: new (self , terrain_set ,) } pub fn move_terrain (& mut self , terrain_set : i32 , terrain_index : i32 , to_position : i32 ,) { type CallRet = () ; type CallParams = (i32 , i32 , i32 ,) ; let args = (terrain_set , terrain_index , to_position ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (739usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "TileSet" , "move_terrain" , self . object_ptr , args ,) } } pub fn remove_terrain (& mut self , terrain_set : i32 , terrain_index : i32 ,) { type CallRet = () ; type CallParams = (i32 , i32 ,) ; let args = (terrain_set , terrain_index ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (740usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "TileSet" , "remove_terrain" , self . object_ptr , args ,) } } pub fn set_terrain_name (& mut self , terrain_set : i32 , terrain_index : i32 , name : impl AsArg < GString > ,) { type CallRet = () ; type CallParams < 'a0 , > = (i32 , i32 , CowArg < 'a0 , GString > ,) ; let args = (terrain_set , terrain_index , name . into_arg () ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (741usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "TileSet" , "set_terrain_name" , self . object_ptr , args ,) } } pub fn get_terrain_name (& self , terrain_set : i32 , terrain_index : i32 ,) -> GString { type CallRet = GString ; type CallParams = (i32 , i32 ,) ; let args = (terrain_set , terrain_index ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (742usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "TileSet" , "get_terrain_name" , self . object_ptr , args ,) } } pub fn set_terrain_color (& mut self , terrain_set : i32 , terrain_index : i32 , color : Color ,) { type CallRet = () ; type CallParams = (i32 , i32 , Color ,) ; let args = (terrain_set , terrain_index , color ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (743usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "TileSet" , "set_terrain_color" , self . object_ptr , args ,) } } pub fn get_terrain_color (& self , terrain_set : i32 , terrain_index : i32 ,) -> Color { type CallRet = Color ; type CallParams = (i32 , i32 ,) ; let args = (terrain_set , terrain_index ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (744usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "TileSet" , "get_terrain_color" , self . object_ptr , args ,) } } pub fn get_navigation_layers_count (& self ,) -> i32 { type CallRet = i32 ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (745usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "TileSet" , "get_navigation_layers_count" , self . object_ptr , args ,) } } pub (crate) fn add_navigation_layer_full (& mut self , to_position : i32 ,) { type CallRet = () ; type CallParams = (i32 ,) ; let args = (to_position ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (746usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "TileSet" , "add_navigation_layer" , self . object_ptr , args ,) } } # [inline] pub fn add_navigation_layer (& mut self ,) { self . add_navigation_layer_ex () . done () } # [inline] pub fn add_navigation_layer_ex < 'ex > (& 'ex mut self ,) -> super :: ExAddNavigationLayer < 'ex > { super :: ExAddNavigationLayer :: new (self ,) } pub fn move_navigation_layer (& mut self , layer_index : i32 , to_position : i32 ,) { type CallRet = () ; type CallParams = (i32 , i32 ,) ; let args = (layer_index , to_position ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (747usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "TileSet" , "move_navigation_layer" , self . object_ptr , args ,) } } pub fn remove_navigation_layer (& mut self , layer_index : i32 ,) { type CallRet = () ; type CallParams = (i32 ,) ; let args = (layer_index ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (748usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "TileSet" , "remove_navigation_layer" , self . object_ptr , args ,) } } pub fn set_navigation_layer_layers (& mut self , layer_index : i32 , layers : u32 ,) { type CallRet = () ; type CallParams = (i32 , u32 ,) ; let args = (layer_index , layers ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (749usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "TileSet" , "set_navigation_layer_layers" , self . object_ptr , args ,) } } pub fn get_navigation_layer_layers (& self , layer_index : i32 ,) -> u32 { type CallRet = u32 ; type CallParams = (i32 ,) ; let args = (layer_index ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (750usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "TileSet" , "get_navigation_layer_layers" , self . object_ptr , args ,) } } pub fn set_navigation_layer_layer_value (& mut self , layer_index : i32 , layer_number : i32 , value : bool ,) { type CallRet = () ; type CallParams = (i32 , i32 , bool ,) ; let args = (layer_index , layer_number , value ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (751usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "TileSet" , "set_navigation_layer_layer_value" , self . object_ptr , args ,) } } pub fn get_navigation_layer_layer_value (& self , layer_index : i32 , layer_number : i32 ,) -> bool { type CallRet = bool ; type CallParams = (i32 , i32 ,) ; let args = (layer_index , layer_number ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (752usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "TileSet" , "get_navigation_layer_layer_value" , self . object_ptr , args ,) } } pub fn get_custom_data_layers_count (& self ,) -> i32 { type CallRet = i32 ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (753usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "TileSet" , "get_custom_data_layers_count" , self . object_ptr , args ,) } } pub (crate) fn add_custom_data_layer_full (& mut self , to_position : i32 ,) { type CallRet = () ; type CallParams = (i32 ,) ; let args = (to_position ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (754usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "TileSet" , "add_custom_data_layer" , self . object_ptr , args ,) } } # [inline] pub fn add_custom_data_layer (& mut self ,) { self . add_custom_data_layer_ex () . done () } # [inline] pub fn add_custom_data_layer_ex < 'ex > (& 'ex mut self ,) -> super :: ExAddCustomDataLayer < 'ex > { super :: ExAddCustomDataLayer :: new (self ,) } pub fn move_custom_data_layer (& mut self , layer_index : i32 , to_position : i32 ,) { type CallRet = () ; type CallParams = (i32 , i32 ,) ; let args = (layer_index , to_position ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (755usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "TileSet" , "move_custom_data_layer" , self . object_ptr , args ,) } } pub fn remove_custom_data_layer (& mut self , layer_index : i32 ,) { type CallRet = () ; type CallParams = (i32 ,) ; let args = (layer_index ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (756usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "TileSet" , "remove_custom_data_layer" , self . object_ptr , args ,) } } pub fn get_custom_data_layer_by_name (& self , layer_name : impl AsArg < GString > ,) -> i32 { type CallRet = i32 ; type CallParams < 'a0 , > = (CowArg < 'a0 , GString > ,) ; let args = (layer_name . into_arg () ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (757usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "TileSet" , "get_custom_data_layer_by_name" , self . object_ptr , args ,) } } pub fn set_custom_data_layer_name (& mut self , layer_index : i32 , layer_name : impl AsArg < GString > ,) { type CallRet = () ; type CallParams < 'a0 , > = (i32 , CowArg < 'a0 , GString > ,) ; let args = (layer_index , layer_name . into_arg () ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (758usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "TileSet" , "set_custom_data_layer_name" , self . object_ptr , args ,) } } pub fn get_custom_data_layer_name (& self , layer_index : i32 ,) -> GString { type CallRet = GString ; type CallParams = (i32 ,) ; let args = (layer_index ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (759usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "TileSet" , "get_custom_data_layer_name" , self . object_ptr , args ,) } } pub fn set_source_level_tile_proxy (& mut self , source_from : i32 , source_to : i32 ,) { type CallRet = () ; type CallParams = (i32 , i32 ,) ; let args = (source_from , source_to ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (760usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "TileSet" , "set_source_level_tile_proxy" , self . object_ptr , args ,) } } pub fn get_source_level_tile_proxy (& mut self , source_from : i32 ,) -> i32 { type CallRet = i32 ; type CallParams = (i32 ,) ; let args = (source_from ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (761usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "TileSet" , "get_source_level_tile_proxy" , self . object_ptr , args ,) } } pub fn has_source_level_tile_proxy (& mut self , source_from : i32 ,) -> bool { type CallRet = bool ; type CallParams = (i32 ,) ; let args = (source_from ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (762usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "TileSet" , "has_source_level_tile_proxy" , self . object_ptr , args ,) } } pub fn remove_source_level_tile_proxy (& mut self , source_from : i32 ,) { type CallRet = () ; type CallParams = (i32 ,) ; let args = (source_from ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (763usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "TileSet" , "remove_source_level_tile_proxy" , self . object_ptr , args ,) } } pub fn set_coords_level_tile_proxy (& mut self , p_source_from : i32 , coords_from : Vector2i , source_to : i32 , coords_to : Vector2i ,) { type CallRet = () ; type CallParams = (i32 , Vector2i , i32 , Vector2i ,) ; let args = (p_source_from , coords_from , source_to , coords_to ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (764usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "TileSet" , "set_coords_level_tile_proxy" , self . object_ptr , args ,) } } pub fn has_coords_level_tile_proxy (& mut self , source_from : i32 , coords_from : Vector2i ,) -> bool { type CallRet = bool ; type CallParams = (i32 , Vector2i ,) ; let args = (source_from , coords_from ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (765usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "TileSet" , "has_coords_level_tile_proxy" , self . object_ptr , args ,) } } pub fn remove_coords_level_tile_proxy (& mut self , source_from : i32 , coords_from : Vector2i ,) { type CallRet = () ; type CallParams = (i32 , Vector2i ,) ; let args = (source_from , coords_from ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (766usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "TileSet" , "remove_coords_level_tile_proxy" , self . object_ptr , args ,) } } pub fn set_alternative_level_tile_proxy (& mut self , source_from : i32 , coords_from : Vector2i , alternative_from : i32 , source_to : i32 , coords_to : Vector2i , alternative_to : i32 ,) { type CallRet = () ; type CallParams = (i32 , Vector2i , i32 , i32 , Vector2i , i32 ,) ; let args = (source_from , coords_from , alternative_from , source_to , coords_to , alternative_to ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (767usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "TileSet" , "set_alternative_level_tile_proxy" , self . object_ptr , args ,) } } pub fn has_alternative_level_tile_proxy (& mut self , source_from : i32 , coords_from : Vector2i , alternative_from : i32 ,) -> bool { type CallRet = bool ; type CallParams = (i32 , Vector2i , i32 ,) ; let args = (source_from , coords_from , alternative_from ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (768usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "TileSet" , "has_alternative_level_tile_proxy" , self . object_ptr , args ,) } } pub fn remove_alternative_level_tile_proxy (& mut self , source_from : i32 , coords_from : Vector2i , alternative_from : i32 ,) { type CallRet = () ; type CallParams = (i32 , Vector2i , i32 ,) ; let args = (source_from , coords_from , alternative_from ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (769usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "TileSet" , "remove_alternative_level_tile_proxy" , self . object_ptr , args ,) } } pub fn cleanup_invalid_tile_proxies (& mut self ,) { type CallRet = () ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (770usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "TileSet" , "cleanup_invalid_tile_proxies" , self . object_ptr , args ,) } } pub fn clear_tile_proxies (& mut self ,) { type CallRet = () ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (771usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "TileSet" , "clear_tile_proxies" , self . object_ptr , args ,) } } pub fn remove_pattern (& mut self , index : i32 ,) { type CallRet = () ; type CallParams = (i32 ,) ; let args = (index ,) ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (772usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "TileSet" , "remove_pattern" , self . object_ptr , args ,) } } pub fn get_patterns_count (& mut self ,) -> i32 { type CallRet = i32 ; type CallParams = () ; let args = () ; unsafe { let method_bind = sys :: class_scene_api () . fptr_by_index (773usize) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , "TileSet" , "get_patterns_count" , self . object_ptr , args ,) } } } impl crate :: obj :: GodotClass for TileSet { const CLASS_NAME : & 'static str = "TileSet" ; type Base = crate :: classes :: Resource ; type Memory = crate :: obj :: MemRefCounted ; const INIT_LEVEL : crate :: init :: InitLevel = crate :: init :: InitLevel :: Scene ; } impl crate :: obj :: EngineClass for TileSet { fn as_object_ptr (& self) -> sys :: GDExtensionObjectPtr { self . object_ptr } } unsafe impl crate :: obj :: Inherits < crate :: classes :: Resource > for TileSet { } unsafe impl crate :: obj :: Inherits < crate :: classes :: RefCounted > for TileSet { } unsafe impl crate :: obj :: Inherits < crate :: classes :: Object > for TileSet { } impl crate :: obj :: Instantiable for TileSet { } impl std :: ops :: Deref for TileSet { type Target = crate :: classes :: Resource ; fn deref (& self) -> & Self :: Target { unsafe { std :: mem :: transmute :: < & Self , & Self :: Target > (self) } } } impl std :: ops :: DerefMut for TileSet { fn deref_mut (& mut self) -> & mut Self :: Target { unsafe { std :: mem :: transmute :: < & mut Self , & mut Self :: Target > (self) } } } } # [doc = "Default-param extender for [`TileSet::add_occlusion_layer_ex`][super::TileSet::add_occlusion_layer_ex]."] # [must_use] pub struct ExAddOcclusionLayer < 'ex > { surround_object : & 'ex mut re_export :: TileSet , to_position : i32 , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExAddOcclusionLayer < 'ex > { fn new (surround_object : & 'ex mut re_export :: TileSet ,) -> Self { Self { surround_object , to_position : - 1i32 , } } # [inline] pub fn to_position (self , value : i32) -> Self { Self { to_position : value , .. self } } # [inline] pub fn done (self) { re_export :: TileSet :: add_occlusion_layer_full (self . surround_object , self . to_position ,) } } # [doc = "Default-param extender for [`TileSet::add_physics_layer_ex`][super::TileSet::add_physics_layer_ex]."] # [must_use] pub struct ExAddPhysicsLayer < 'ex > { surround_object : & 'ex mut re_export :: TileSet , to_position : i32 , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExAddPhysicsLayer < 'ex > { fn new (surround_object : & 'ex mut re_export :: TileSet ,) -> Self { Self { surround_object , to_position : - 1i32 , } } # [inline] pub fn to_position (self , value : i32) -> Self { Self { to_position : value , .. self } } # [inline] pub fn done (self) { re_export :: TileSet :: add_physics_layer_full (self . surround_object , self . to_position ,) } } # [doc = "Default-param extender for [`TileSet::add_terrain_set_ex`][super::TileSet::add_terrain_set_ex]."] # [must_use] pub struct ExAddTerrainSet < 'ex > { surround_object : & 'ex mut re_export :: TileSet , to_position : i32 , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExAddTerrainSet < 'ex > { fn new (surround_object : & 'ex mut re_export :: TileSet ,) -> Self { Self { surround_object , to_position : - 1i32 , } } # [inline] pub fn to_position (self , value : i32) -> Self { Self { to_position : value , .. self } } # [inline] pub fn done (self) { re_export :: TileSet :: add_terrain_set_full (self . surround_object , self . to_position ,) } } # [doc = "Default-param extender for [`TileSet::add_terrain_ex`][super::TileSet::add_terrain_ex]."] # [must_use] pub struct ExAddTerrain < 'ex > { surround_object : & 'ex mut re_export :: TileSet , terrain_set : i32 , to_position : i32 , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExAddTerrain < 'ex > { fn new (surround_object : & 'ex mut re_export :: TileSet , terrain_set : i32 ,) -> Self { Self { surround_object , terrain_set , to_position : - 1i32 , } } # [inline] pub fn to_position (self , value : i32) -> Self { Self { to_position : value , .. self } } # [inline] pub fn done (self) { re_export :: TileSet :: add_terrain_full (self . surround_object , self . terrain_set , self . to_position ,) } } # [doc = "Default-param extender for [`TileSet::add_navigation_layer_ex`][super::TileSet::add_navigation_layer_ex]."] # [must_use] pub struct ExAddNavigationLayer < 'ex > { surround_object : & 'ex mut re_export :: TileSet , to_position : i32 , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExAddNavigationLayer < 'ex > { fn new (surround_object : & 'ex mut re_export :: TileSet ,) -> Self { Self { surround_object , to_position : - 1i32 , } } # [inline] pub fn to_position (self , value : i32) -> Self { Self { to_position : value , .. self } } # [inline] pub fn done (self) { re_export :: TileSet :: add_navigation_layer_full (self . surround_object , self . to_position ,) } } # [doc = "Default-param extender for [`TileSet::add_custom_data_layer_ex`][super::TileSet::add_custom_data_layer_ex]."] # [must_use] pub struct ExAddCustomDataLayer < 'ex > { surround_object : & 'ex mut re_export :: TileSet , to_position : i32 , } # [allow (clippy :: wrong_self_convention , clippy :: needless_update)] impl < 'ex > ExAddCustomDataLayer < 'ex > { fn new (surround_object : & 'ex mut re_export :: TileSet ,) -> Self { Self { surround_object , to_position : - 1i32 , } } # [inline] pub fn to_position (self , value : i32) -> Self { Self { to_position : value , .. self } } # [inline] pub fn done (self) { re_export :: TileSet :: add_custom_data_layer_full (self . surround_object , self . to_position ,) } } # [repr (transparent)] # [derive (Copy , Clone , Eq , PartialEq , Hash ,)] pub struct TileShape { ord : i32 } impl TileShape { # [doc (alias = "TILE_SHAPE_SQUARE")] # [doc = "Godot enumerator name: `TILE_SHAPE_SQUARE`"] pub const SQUARE : Self = Self { ord : 0 } ; # [doc (alias = "TILE_SHAPE_ISOMETRIC")] # [doc = "Godot enumerator name: `TILE_SHAPE_ISOMETRIC`"] pub const ISOMETRIC : Self = Self { ord : 1 } ; # [doc (alias = "TILE_SHAPE_HALF_OFFSET_SQUARE")] # [doc = "Godot enumerator name: `TILE_SHAPE_HALF_OFFSET_SQUARE`"] pub const HALF_OFFSET_SQUARE : Self = Self { ord : 2 } ; # [doc (alias = "TILE_SHAPE_HEXAGON")] # [doc = "Godot enumerator name: `TILE_SHAPE_HEXAGON`"] pub const HEXAGON : Self = Self { ord : 3 } ; # [allow (unreachable_patterns)] fn enumerator_name (self) -> Option < & 'static str > { match self { Self :: SQUARE => Some ("SQUARE") , Self :: ISOMETRIC => Some ("ISOMETRIC") , Self :: HALF_OFFSET_SQUARE => Some ("HALF_OFFSET_SQUARE") , Self :: HEXAGON => Some ("HEXAGON") , _ => None , } } } impl std :: fmt :: Debug for TileShape { fn fmt (& self , f : & mut std :: fmt :: Formatter < '_ >) -> std :: fmt :: Result { match self . enumerator_name () { Some (enumerator) => f . write_str (enumerator) , None => f . debug_struct (stringify ! (TileShape)) . field ("ord" , & self . ord) . finish () , } } } impl crate :: obj :: EngineEnum for TileShape { fn try_from_ord (ord : i32) -> Option < Self > { match ord { 0 | 1 | 2 | 3 => Some (Self { ord }) , _ => None , } } fn ord (self) -> i32 { self . ord } } impl crate :: meta :: GodotConvert for TileShape { type Via = i32 ; } impl crate :: meta :: ToGodot for TileShape { fn to_godot (& self) -> Self :: Via { < Self as crate :: obj :: EngineEnum > :: ord (* self) } } impl crate :: meta :: FromGodot for TileShape { fn try_from_godot (via : Self :: Via) -> std :: result :: Result < Self , crate :: meta :: ConvertError > { Ok (Self { ord : via }) } } # [repr (transparent)] # [derive (Copy , Clone , Eq , PartialEq , Hash ,)] pub struct TileLayout { ord : i32 } impl TileLayout { # [doc (alias = "TILE_LAYOUT_STACKED")] # [doc = "Godot enumerator name: `TILE_LAYOUT_STACKED`"] pub const STACKED : Self = Self { ord : 0 } ; # [doc (alias = "TILE_LAYOUT_STACKED_OFFSET")] # [doc = "Godot enumerator name: `TILE_LAYOUT_STACKED_OFFSET`"] pub const STACKED_OFFSET : Self = Self { ord : 1 } ; # [doc (alias = "TILE_LAYOUT_STAIRS_RIGHT")] # [doc = "Godot enumerator name: `TILE_LAYOUT_STAIRS_RIGHT`"] pub const STAIRS_RIGHT : Self = Self { ord : 2 } ; # [doc (alias = "TILE_LAYOUT_STAIRS_DOWN")] # [doc = "Godot enumerator name: `TILE_LAYOUT_STAIRS_DOWN`"] pub const STAIRS_DOWN : Self = Self { ord : 3 } ; # [doc (alias = "TILE_LAYOUT_DIAMOND_RIGHT")] # [doc = "Godot enumerator name: `TILE_LAYOUT_DIAMOND_RIGHT`"] pub const DIAMOND_RIGHT : Self = Self { ord : 4 } ; # [doc (alias = "TILE_LAYOUT_DIAMOND_DOWN")] # [doc = "Godot enumerator name: `TILE_LAYOUT_DIAMOND_DOWN`"] pub const DIAMOND_DOWN : Self = Self { ord : 5 } ; # [allow (unreachable_patterns)] fn enumerator_name (self) -> Option < & 'static str > { match self { Self :: STACKED => Some ("STACKED") , Self :: STACKED_OFFSET => Some ("STACKED_OFFSET") , Self :: STAIRS_RIGHT => Some ("STAIRS_RIGHT") , Self :: STAIRS_DOWN => Some ("STAIRS_DOWN") , Self :: DIAMOND_RIGHT => Some ("DIAMOND_RIGHT") , Self :: DIAMOND_DOWN => Some ("DIAMOND_DOWN") , _ => None , } } } impl std :: fmt :: Debug for TileLayout { fn fmt (& self , f : & mut std :: fmt :: Formatter < '_ >) -> std :: fmt :: Result { match self . enumerator_name () { Some (enumerator) => f . write_str (enumerator) , None => f . debug_struct (stringify ! (TileLayout)) . field ("ord" , & self . ord) . finish () , } } } impl crate :: obj :: EngineEnum for TileLayout { fn try_from_ord (ord : i32) -> Option < Self > { match ord { 0 | 1 | 2 | 3 | 4 | 5 => Some (Self { ord }) , _ => None , } } fn ord (self) -> i32 { self . ord } } impl crate :: meta :: GodotConvert for TileLayout { type Via = i32 ; } impl crate :: meta :: ToGodot for TileLayout { fn to_godot (& self) -> Self :: Via { < Self as crate :: obj :: EngineEnum > :: ord (* self) } } impl crate :: meta :: FromGodot for TileLayout { fn try_from_godot (via : Self :: Via) -> std :: result :: Result < Self , crate :: meta :: ConvertError > { Ok (Self { ord : via }) } } # [repr (transparent)] # [derive (Copy , Clone , Eq , PartialEq , Hash ,)] pub struct TileOffsetAxis { ord : i32 } impl TileOffsetAxis { # [doc (alias = "TILE_OFFSET_AXIS_HORIZONTAL")] # [doc = "Godot enumerator name: `TILE_OFFSET_AXIS_HORIZONTAL`"] pub const HORIZONTAL : Self = Self { ord : 0 } ; # [doc (alias = "TILE_OFFSET_AXIS_VERTICAL")] # [doc = "Godot enumerator name: `TILE_OFFSET_AXIS_VERTICAL`"] pub const VERTICAL : Self = Self { ord : 1 } ; # [allow (unreachable_patterns)] fn enumerator_name (self) -> Option < & 'static str > { match self { Self :: HORIZONTAL => Some ("HORIZONTAL") , Self :: VERTICAL => Some ("VERTICAL") , _ => None , } } } impl std :: fmt :: Debug for TileOffsetAxis { fn fmt (& self , f : & mut std :: fmt :: Formatter < '_ >) -> std :: fmt :: Result { match self . enumerator_name () { Some (enumerator) => f . write_str (enumerator) , None => f . debug_struct (stringify ! (TileOffsetAxis)) . field ("ord" , & self . ord) . finish () , } } } impl crate :: obj :: EngineEnum for TileOffsetAxis { fn try_from_ord (ord : i32) -> Option < Self > { match ord { 0 | 1 => Some (Self { ord }) , _ => None , } } fn ord (self) -> i32 { self . ord } } impl crate :: meta :: GodotConvert for TileOffsetAxis { type Via = i32 ; } impl crate :: meta :: ToGodot for TileOffsetAxis { fn to_godot (& self) -> Self :: Via { < Self as crate :: obj :: EngineEnum > :: ord (* self) } } impl crate :: meta :: FromGodot for TileOffsetAxis { fn try_from_godot (via : Self :: Via) -> std :: result :: Result < Self , crate :: meta :: ConvertError > { Ok (Self { ord : via }) } } # [repr (transparent)] # [derive (Copy , Clone , Eq , PartialEq , Hash ,)] pub struct CellNeighbor { ord : i32 } impl CellNeighbor { # [doc (alias = "CELL_NEIGHBOR_RIGHT_SIDE")] # [doc = "Godot enumerator name: `CELL_NEIGHBOR_RIGHT_SIDE`"] pub const RIGHT_SIDE : Self = Self { ord : 0 } ; # [doc (alias = "CELL_NEIGHBOR_RIGHT_CORNER")] # [doc = "Godot enumerator name: `CELL_NEIGHBOR_RIGHT_CORNER`"] pub const RIGHT_CORNER : Self = Self { ord : 1 } ; # [doc (alias = "CELL_NEIGHBOR_BOTTOM_RIGHT_SIDE")] # [doc = "Godot enumerator name: `CELL_NEIGHBOR_BOTTOM_RIGHT_SIDE`"] pub const BOTTOM_RIGHT_SIDE : Self = Self { ord : 2 } ; # [doc (alias = "CELL_NEIGHBOR_BOTTOM_RIGHT_CORNER")] # [doc = "Godot enumerator name: `CELL_NEIGHBOR_BOTTOM_RIGHT_CORNER`"] pub const BOTTOM_RIGHT_CORNER : Self = Self { ord : 3 } ; # [doc (alias = "CELL_NEIGHBOR_BOTTOM_SIDE")] # [doc = "Godot enumerator name: `CELL_NEIGHBOR_BOTTOM_SIDE`"] pub const BOTTOM_SIDE : Self = Self { ord : 4 } ; # [doc (alias = "CELL_NEIGHBOR_BOTTOM_CORNER")] # [doc = "Godot enumerator name: `CELL_NEIGHBOR_BOTTOM_CORNER`"] pub const BOTTOM_CORNER : Self = Self { ord : 5 } ; # [doc (alias = "CELL_NEIGHBOR_BOTTOM_LEFT_SIDE")] # [doc = "Godot enumerator name: `CELL_NEIGHBOR_BOTTOM_LEFT_SIDE`"] pub const BOTTOM_LEFT_SIDE : Self = Self { ord : 6 } ; # [doc (alias = "CELL_NEIGHBOR_BOTTOM_LEFT_CORNER")] # [doc = "Godot enumerator name: `CELL_NEIGHBOR_BOTTOM_LEFT_CORNER`"] pub const BOTTOM_LEFT_CORNER : Self = Self { ord : 7 } ; # [doc (alias = "CELL_NEIGHBOR_LEFT_SIDE")] # [doc = "Godot enumerator name: `CELL_NEIGHBOR_LEFT_SIDE`"] pub const LEFT_SIDE : Self = Self { ord : 8 } ; # [doc (alias = "CELL_NEIGHBOR_LEFT_CORNER")] # [doc = "Godot enumerator name: `CELL_NEIGHBOR_LEFT_CORNER`"] pub const LEFT_CORNER : Self = Self { ord : 9 } ; # [doc (alias = "CELL_NEIGHBOR_TOP_LEFT_SIDE")] # [doc = "Godot enumerator name: `CELL_NEIGHBOR_TOP_LEFT_SIDE`"] pub const TOP_LEFT_SIDE : Self = Self { ord : 10 } ; # [doc (alias = "CELL_NEIGHBOR_TOP_LEFT_CORNER")] # [doc = "Godot enumerator name: `CELL_NEIGHBOR_TOP_LEFT_CORNER`"] pub const TOP_LEFT_CORNER : Self = Self { ord : 11 } ; # [doc (alias = "CELL_NEIGHBOR_TOP_SIDE")] # [doc = "Godot enumerator name: `CELL_NEIGHBOR_TOP_SIDE`"] pub const TOP_SIDE : Self = Self { ord : 12 } ; # [doc (alias = "CELL_NEIGHBOR_TOP_CORNER")] # [doc = "Godot enumerator name: `CELL_NEIGHBOR_TOP_CORNER`"] pub const TOP_CORNER : Self = Self { ord : 13 } ; # [doc (alias = "CELL_NEIGHBOR_TOP_RIGHT_SIDE")] # [doc = "Godot enumerator name: `CELL_NEIGHBOR_TOP_RIGHT_SIDE`"] pub const TOP_RIGHT_SIDE : Self = Self { ord : 14 } ; # [doc (alias = "CELL_NEIGHBOR_TOP_RIGHT_CORNER")] # [doc = "Godot enumerator name: `CELL_NEIGHBOR_TOP_RIGHT_CORNER`"] pub const TOP_RIGHT_CORNER : Self = Self { ord : 15 } ; # [allow (unreachable_patterns)] fn enumerator_name (self) -> Option < & 'static str > { match self { Self :: RIGHT_SIDE => Some ("RIGHT_SIDE") , Self :: RIGHT_CORNER => Some ("RIGHT_CORNER") , Self :: BOTTOM_RIGHT_SIDE => Some ("BOTTOM_RIGHT_SIDE") , Self :: BOTTOM_RIGHT_CORNER => Some ("BOTTOM_RIGHT_CORNER") , Self :: BOTTOM_SIDE => Some ("BOTTOM_SIDE") , Self :: BOTTOM_CORNER => Some ("BOTTOM_CORNER") , Self :: BOTTOM_LEFT_SIDE => Some ("BOTTOM_LEFT_SIDE") , Self :: BOTTOM_LEFT_CORNER => Some ("BOTTOM_LEFT_CORNER") , Self :: LEFT_SIDE => Some ("LEFT_SIDE") , Self :: LEFT_CORNER => Some ("LEFT_CORNER") , Self :: TOP_LEFT_SIDE => Some ("TOP_LEFT_SIDE") , Self :: TOP_LEFT_CORNER => Some ("TOP_LEFT_CORNER") , Self :: TOP_SIDE => Some ("TOP_SIDE") , Self :: TOP_CORNER => Some ("TOP_CORNER") , Self :: TOP_RIGHT_SIDE => Some ("TOP_RIGHT_SIDE") , Self :: TOP_RIGHT_CORNER => Some ("TOP_RIGHT_CORNER") , _ => None , } } } impl std :: fmt :: Debug for CellNeighbor { fn fmt (& self , f : & mut std :: fmt :: Formatter < '_ >) -> std :: fmt :: Result { match self . enumerator_name () { Some (enumerator) => f . write_str (enumerator) , None => f . debug_struct (stringify ! (CellNeighbor)) . field ("ord" , & self . ord) . finish () , } } } impl crate :: obj :: EngineEnum for CellNeighbor { fn try_from_ord (ord : i32) -> Option < Self > { match ord { 0 | 1 | 2 | 3 | 4 | 5 | 6 | 7 | 8 | 9 | 10 | 11 | 12 | 13 | 14 | 15 => Some (Self { ord }) , _ => None , } } fn ord (self) -> i32 { self . ord } } impl crate :: meta :: GodotConvert for CellNeighbor { type Via = i32 ; } impl crate :: meta :: ToGodot for CellNeighbor { fn to_godot (& self) -> Self :: Via { < Self as crate :: obj :: EngineEnum > :: ord (* self) } } impl crate :: meta :: FromGodot for CellNeighbor { fn try_from_godot (via : Self :: Via) -> std :: result :: Result < Self , crate :: meta :: ConvertError > { Ok (Self { ord : via }) } } # [repr (transparent)] # [derive (Copy , Clone , Eq , PartialEq , Hash ,)] pub struct TerrainMode { ord : i32 } impl TerrainMode { # [doc (alias = "TERRAIN_MODE_MATCH_CORNERS_AND_SIDES")] # [doc = "Godot enumerator name: `TERRAIN_MODE_MATCH_CORNERS_AND_SIDES`"] pub const MATCH_CORNERS_AND_SIDES : Self = Self { ord : 0 } ; # [doc (alias = "TERRAIN_MODE_MATCH_CORNERS")] # [doc = "Godot enumerator name: `TERRAIN_MODE_MATCH_CORNERS`"] pub const MATCH_CORNERS : Self = Self { ord : 1 } ; # [doc (alias = "TERRAIN_MODE_MATCH_SIDES")] # [doc = "Godot enumerator name: `TERRAIN_MODE_MATCH_SIDES`"] pub const MATCH_SIDES : Self = Self { ord : 2 } ; # [allow (unreachable_patterns)] fn enumerator_name (self) -> Option < & 'static str > { match self { Self :: MATCH_CORNERS_AND_SIDES => Some ("MATCH_CORNERS_AND_SIDES") , Self :: MATCH_CORNERS => Some ("MATCH_CORNERS") , Self :: MATCH_SIDES => Some ("MATCH_SIDES") , _ => None , } } } impl std :: fmt :: Debug for TerrainMode { fn fmt (& self , f : & mut std :: fmt :: Formatter < '_ >) -> std :: fmt :: Result { match self . enumerator_name () { Some (enumerator) => f . write_str (enumerator) , None => f . debug_struct (stringify ! (TerrainMode)) . field ("ord" , & self . ord) . finish () , } } } impl crate :: obj :: EngineEnum for TerrainMode { fn try_from_ord (ord : i32) -> Option < Self > { match ord { 0 | 1 | 2 => Some (Self { ord }) , _ => None , } } fn ord (self) -> i32 { self . ord } } impl crate :: meta :: GodotConvert for TerrainMode { type Via = i32 ; } impl crate :: meta :: ToGodot for TerrainMode { fn to_godot (& self) -> Self :: Via { < Self as crate :: obj :: EngineEnum > :: ord (* self) } } impl crate :: meta :: FromGodot for TerrainMode { fn try_from_godot (via : Self :: Via) -> std :: result :: Result < Self , crate :: meta :: ConvertError > { Ok (Self { ord : via }) } } # [doc = "Properties declared by [`TileSet`][super::TileSet], as interned engine names."] pub struct PropertyName ; impl PropertyName { pub const TILE_SHAPE : InternedName = InternedName :: new ("tile_shape") ; pub const TILE_LAYOUT : InternedName = InternedName :: new ("tile_layout") ; pub const TILE_OFFSET_AXIS : InternedName = InternedName :: new ("tile_offset_axis") ; pub const TILE_SIZE : InternedName = InternedName :: new ("tile_size") ; pub const UV_CLIPPING : InternedName = InternedName :: new ("uv_clipping") ; } # [doc = "Methods declared by [`TileSet`][super::TileSet], as interned engine names."] pub struct MethodName ; impl MethodName { pub const GET_NEXT_SOURCE_ID : InternedName = InternedName :: new ("get_next_source_id") ; pub const REMOVE_SOURCE : InternedName = InternedName :: new ("remove_source") ; pub const SET_SOURCE_ID : InternedName = InternedName :: new ("set_source_id") ; pub const GET_SOURCE_COUNT : InternedName = InternedName :: new ("get_source_count") ; pub const GET_SOURCE_ID : InternedName = InternedName :: new ("get_source_id") ; pub const HAS_SOURCE : InternedName = InternedName :: new ("has_source") ; pub const SET_TILE_SHAPE : InternedName = InternedName :: new ("set_tile_shape") ; pub const GET_TILE_SHAPE : InternedName = InternedName :: new ("get_tile_shape") ; pub const SET_TILE_LAYOUT : InternedName = InternedName :: new ("set_tile_layout") ; pub const GET_TILE_LAYOUT : InternedName = InternedName :: new ("get_tile_layout") ; pub const SET_TILE_OFFSET_AXIS : InternedName = InternedName :: new ("set_tile_offset_axis") ; pub const GET_TILE_OFFSET_AXIS : InternedName = InternedName :: new ("get_tile_offset_axis") ; pub const SET_TILE_SIZE : InternedName = InternedName :: new ("set_tile_size") ; pub const GET_TILE_SIZE : InternedName = InternedName :: new ("get_tile_size") ; pub const SET_UV_CLIPPING : InternedName = InternedName :: new ("set_uv_clipping") ; pub const IS_UV_CLIPPING : InternedName = InternedName :: new ("is_uv_clipping") ; pub const GET_OCCLUSION_LAYERS_COUNT : InternedName = InternedName :: new ("get_occlusion_layers_count") ; pub const ADD_OCCLUSION_LAYER : InternedName = InternedName :: new ("add_occlusion_layer") ; pub const MOVE_OCCLUSION_LAYER : InternedName = InternedName :: new ("move_occlusion_layer") ; pub const REMOVE_OCCLUSION_LAYER : InternedName = InternedName :: new ("remove_occlusion_layer") ; pub const SET_OCCLUSION_LAYER_LIGHT_MASK : InternedName = InternedName :: new ("set_occlusion_layer_light_mask") ; pub const GET_OCCLUSION_LAYER_LIGHT_MASK : InternedName = InternedName :: new ("get_occlusion_layer_light_mask") ; pub const SET_OCCLUSION_LAYER_SDF_COLLISION : InternedName = InternedName :: new ("set_occlusion_layer_sdf_collision") ; pub const GET_OCCLUSION_LAYER_SDF_COLLISION : InternedName = InternedName :: new ("get_occlusion_layer_sdf_collision") ; pub const GET_PHYSICS_LAYERS_COUNT : InternedName = InternedName :: new ("get_physics_layers_count") ; pub const ADD_PHYSICS_LAYER : InternedName = InternedName :: new ("add_physics_layer") ; pub const MOVE_PHYSICS_LAYER : InternedName = InternedName :: new ("move_physics_layer") ; pub const REMOVE_PHYSICS_LAYER : InternedName = InternedName :: new ("remove_physics_layer") ; pub const SET_PHYSICS_LAYER_COLLISION_LAYER : InternedName = InternedName :: new ("set_physics_layer_collision_layer") ; pub const GET_PHYSICS_LAYER_COLLISION_LAYER : InternedName = InternedName :: new ("get_physics_layer_collision_layer") ; pub const SET_PHYSICS_LAYER_COLLISION_MASK : InternedName = InternedName :: new ("set_physics_layer_collision_mask") ; pub const GET_PHYSICS_LAYER_COLLISION_MASK : InternedName = InternedName :: new ("get_physics_layer_collision_mask") ; pub const GET_TERRAIN_SETS_COUNT : InternedName = InternedName :: new ("get_terrain_sets_count") ; pub const ADD_TERRAIN_SET : InternedName = InternedName :: new ("add_terrain_set") ; pub const MOVE_TERRAIN_SET : InternedName = InternedName :: new ("move_terrain_set") ; pub const REMOVE_TERRAIN_SET : InternedName = InternedName :: new ("remove_terrain_set") ; pub const SET_TERRAIN_SET_MODE : InternedName = InternedName :: new ("set_terrain_set_mode") ; pub const GET_TERRAIN_SET_MODE : InternedName = InternedName :: new ("get_terrain_set_mode") ; pub const GET_TERRAINS_COUNT : InternedName = InternedName :: new ("get_terrains_count") ; pub const ADD_TERRAIN : InternedName = InternedName :: new ("add_terrain") ; pub const MOVE_TERRAIN : InternedName = InternedName :: new ("move_terrain") ; pub const REMOVE_TERRAIN : InternedName = InternedName :: new ("remove_terrain") ; pub const SET_TERRAIN_NAME : InternedName = InternedName :: new ("set_terrain_name") ; pub const GET_TERRAIN_NAME : InternedName = InternedName :: new ("get_terrain_name") ; pub const SET_TERRAIN_COLOR : InternedName = InternedName :: new ("set_terrain_color") ; pub const GET_TERRAIN_COLOR : InternedName = InternedName :: new ("get_terrain_color") ; pub const GET_NAVIGATION_LAYERS_COUNT : InternedName = InternedName :: new ("get_navigation_layers_count") ; pub const ADD_NAVIGATION_LAYER : InternedName = InternedName :: new ("add_navigation_layer") ; pub const MOVE_NAVIGATION_LAYER : InternedName = InternedName :: new ("move_navigation_layer") ; pub const REMOVE_NAVIGATION_LAYER : InternedName = InternedName :: new ("remove_navigation_layer") ; pub const SET_NAVIGATION_LAYER_LAYERS : InternedName = InternedName :: new ("set_navigation_layer_layers") ; pub const GET_NAVIGATION_LAYER_LAYERS : InternedName = InternedName :: new ("get_navigation_layer_layers") ; pub const SET_NAVIGATION_LAYER_LAYER_VALUE : InternedName = InternedName :: new ("set_navigation_layer_layer_value") ; pub const GET_NAVIGATION_LAYER_LAYER_VALUE : InternedName = InternedName :: new ("get_navigation_layer_layer_value") ; pub const GET_CUSTOM_DATA_LAYERS_COUNT : InternedName = InternedName :: new ("get_custom_data_layers_count") ; pub const ADD_CUSTOM_DATA_LAYER : InternedName = InternedName :: new ("add_custom_data_layer") ; pub const MOVE_CUSTOM_DATA_LAYER : InternedName = InternedName :: new ("move_custom_data_layer") ; pub const REMOVE_CUSTOM_DATA_LAYER : InternedName = InternedName :: new ("remove_custom_data_layer") ; pub const GET_CUSTOM_DATA_LAYER_BY_NAME : InternedName = InternedName :: new ("get_custom_data_layer_by_name") ; pub const SET_CUSTOM_DATA_LAYER_NAME : InternedName = InternedName :: new ("set_custom_data_layer_name") ; pub const GET_CUSTOM_DATA_LAYER_NAME : InternedName = InternedName :: new ("get_custom_data_layer_name") ; pub const SET_SOURCE_LEVEL_TILE_PROXY : InternedName = InternedName :: new ("set_source_level_tile_proxy") ; pub const GET_SOURCE_LEVEL_TILE_PROXY : InternedName = InternedName :: new ("get_source_level_tile_proxy") ; pub const HAS_SOURCE_LEVEL_TILE_PROXY : InternedName = InternedName :: new ("has_source_level_tile_proxy") ; pub const REMOVE_SOURCE_LEVEL_TILE_PROXY : InternedName = InternedName :: new ("remove_source_level_tile_proxy") ; pub const SET_COORDS_LEVEL_TILE_PROXY : InternedName = InternedName :: new ("set_coords_level_tile_proxy") ; pub const HAS_COORDS_LEVEL_TILE_PROXY : InternedName = InternedName :: new ("has_coords_level_tile_proxy") ; pub const REMOVE_COORDS_LEVEL_TILE_PROXY : InternedName = InternedName :: new ("remove_coords_level_tile_proxy") ; pub const SET_ALTERNATIVE_LEVEL_TILE_PROXY : InternedName = InternedName :: new ("set_alternative_level_tile_proxy") ; pub const HAS_ALTERNATIVE_LEVEL_TILE_PROXY : InternedName = InternedName :: new ("has_alternative_level_tile_proxy") ; pub const REMOVE_ALTERNATIVE_LEVEL_TILE_PROXY : InternedName = InternedName :: new ("remove_alternative_level_tile_proxy") ; pub const CLEANUP_INVALID_TILE_PROXIES : InternedName = InternedName :: new ("cleanup_invalid_tile_proxies") ; pub const CLEAR_TILE_PROXIES : InternedName = InternedName :: new ("clear_tile_proxies") ; pub const REMOVE_PATTERN : InternedName = InternedName :: new ("remove_pattern") ; pub const GET_PATTERNS_COUNT : InternedName = InternedName :: new ("get_patterns_count") ; } # [doc = "Signals declared by [`TileSet`][super::TileSet], as interned engine names."] pub struct SignalName ; impl SignalName { }