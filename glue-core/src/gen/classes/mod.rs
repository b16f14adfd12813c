pub mod canvas_item ; pub use canvas_item :: re_export :: CanvasItem ; pub mod control ; pub use control :: re_export :: Control ; pub mod font ; pub use font :: re_export :: Font ; pub mod geometry_instance_3d ; pub use geometry_instance_3d :: re_export :: GeometryInstance3D ; pub mod input ; pub use input :: re_export :: Input ; pub mod input_event ; pub use input_event :: re_export :: InputEvent ; pub mod item_list ; pub use item_list :: re_export :: ItemList ; pub mod label_3d ; pub use label_3d :: re_export :: Label3D ; pub mod main_loop ; pub use main_loop :: re_export :: MainLoop ; pub mod native_menu ; pub use native_menu :: re_export :: NativeMenu ; pub mod node ; pub use node :: re_export :: Node ; pub mod node_2d ; pub use node_2d :: re_export :: Node2D ; pub mod node_3d ; pub use node_3d :: re_export :: Node3D ; pub mod object ; pub use object :: re_export :: Object ; pub mod ref_counted ; pub use ref_counted :: re_export :: RefCounted ; pub mod resource ; pub use resource :: re_export :: Resource ; pub mod scene_tree ; pub use scene_tree :: re_export :: SceneTree ; pub mod scene_tree_timer ; pub use scene_tree_timer :: re_export :: SceneTreeTimer ; pub mod texture ; pub use texture :: re_export :: Texture ; pub mod texture_2d ; pub use texture_2d :: re_export :: Texture2D ; pub mod theme ; pub use theme :: re_export :: Theme ; pub mod tile_map ; pub use tile_map :: re_export :: TileMap ; pub mod tile_set ; pub use tile_set :: re_export :: TileSet ; pub mod viewport ; pub use viewport :: re_export :: Viewport ; pub mod visual_instance_3d ; pub use visual_instance_3d :: re_export :: VisualInstance3D ; pub mod window ; pub use window :: re_export :: Window ;