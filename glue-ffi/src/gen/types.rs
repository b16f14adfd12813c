# [cfg (target_pointer_width = "32")] mod types_32 { pub type OpaqueNil = crate :: Opaque < 0usize > ; pub type OpaqueBool = crate :: Opaque < 1usize > ; pub type OpaqueInt = crate :: Opaque < 8usize > ; pub type OpaqueFloat = crate :: Opaque < 8usize > ; pub type OpaqueString = crate :: Opaque < 4usize > ; pub type OpaqueVector2 = crate :: Opaque < 8usize > ; pub type OpaqueVector2i = crate :: Opaque < 8usize > ; pub type OpaqueRect2 = crate :: Opaque < 16usize > ; pub type OpaqueRect2i = crate :: Opaque < 16usize > ; pub type OpaqueVector3 = crate :: Opaque < 12usize > ; pub type OpaqueVector3i = crate :: Opaque < 12usize > ; pub type OpaqueTransform2D = crate :: Opaque < 24usize > ; pub type OpaqueVector4 = crate :: Opaque < 16usize > ; pub type OpaqueVector4i = crate :: Opaque < 16usize > ; pub type OpaquePlane = crate :: Opaque < 16usize > ; pub type OpaqueQuaternion = crate :: Opaque < 16usize > ; pub type OpaqueAabb = crate :: Opaque < 24usize > ; pub type OpaqueBasis = crate :: Opaque < 36usize > ; pub type OpaqueTransform3D = crate :: Opaque < 48usize > ; pub type OpaqueProjection = crate :: Opaque < 64usize > ; pub type OpaqueColor = crate :: Opaque < 16usize > ; pub type OpaqueStringName = crate :: Opaque < 4usize > ; pub type OpaqueNodePath = crate :: Opaque < 4usize > ; pub type OpaqueRid = crate :: Opaque < 8usize > ; pub type OpaqueObject = crate :: Opaque < 4usize > ; pub type OpaqueCallable = crate :: Opaque < 16usize > ; pub type OpaqueSignal = crate :: Opaque < 16usize > ; pub type OpaqueDictionary = crate :: Opaque < 4usize > ; pub type OpaqueArray = crate :: Opaque < 4usize > ; pub type OpaquePackedByteArray = crate :: Opaque < 8usize > ; pub type OpaquePackedInt32Array = crate :: Opaque < 8usize > ; pub type OpaquePackedInt64Array = crate :: Opaque < 8usize > ; pub type OpaquePackedFloat32Array = crate :: Opaque < 8usize > ; pub type OpaquePackedFloat64Array = crate :: Opaque < 8usize > ; pub type OpaquePackedStringArray = crate :: Opaque < 8usize > ; pub type OpaquePackedVector2Array = crate :: Opaque < 8usize > ; pub type OpaquePackedVector3Array = crate :: Opaque < 8usize > ; pub type OpaquePackedColorArray = crate :: Opaque < 8usize > ; pub type OpaquePackedVector4Array = crate :: Opaque < 8usize > ; pub type OpaqueVariant = crate :: Opaque < 24usize > ; } # [cfg (target_pointer_width = "64")] mod types_64 { pub type OpaqueNil = crate :: Opaque < 0usize > ; pub type OpaqueBool = crate :: Opaque < 1usize > ; pub type OpaqueInt = crate :: Opaque < 8usize > ; pub type OpaqueFloat = crate :: Opaque < 8usize > ; pub type OpaqueString = crate :: Opaque < 8usize > ; pub type OpaqueVector2 = crate :: Opaque < 8usize > ; pub type OpaqueVector2i = crate :: Opaque < 8usize > ; pub type OpaqueRect2 = crate :: Opaque < 16usize > ; pub type OpaqueRect2i = crate :: Opaque < 16usize > ; pub type OpaqueVector3 = crate :: Opaque < 12usize > ; pub type OpaqueVector3i = crate :: Opaque < 12usize > ; pub type OpaqueTransform2D = crate :: Opaque < 24usize > ; pub type OpaqueVector4 = crate :: Opaque < 16usize > ; pub type OpaqueVector4i = crate :: Opaque < 16usize > ; pub type OpaquePlane = crate :: Opaque < 16usize > ; pub type OpaqueQuaternion = crate :: Opaque < 16usize > ; pub type OpaqueAabb = crate :: Opaque < 24usize > ; pub type OpaqueBasis = crate :: Opaque < 36usize > ; pub type OpaqueTransform3D = crate :: Opaque < 48usize > ; pub type OpaqueProjection = crate :: Opaque < 64usize > ; pub type OpaqueColor = crate :: Opaque < 16usize > ; pub type OpaqueStringName = crate :: Opaque < 8usize > ; pub type OpaqueNodePath = crate :: Opaque < 8usize > ; pub type OpaqueRid = crate :: Opaque < 8usize > ; pub type OpaqueObject = crate :: Opaque < 8usize > ; pub type OpaqueCallable = crate :: Opaque < 16usize > ; pub type OpaqueSignal = crate :: Opaque < 16usize > ; pub type OpaqueDictionary = crate :: Opaque < 8usize > ; pub type OpaqueArray = crate :: Opaque < 8usize > ; pub type OpaquePackedByteArray = crate :: Opaque < 16usize > ; pub type OpaquePackedInt32Array = crate :: Opaque < 16usize > ; pub type OpaquePackedInt64Array = crate :: Opaque < 16usize > ; pub type OpaquePackedFloat32Array = crate :: Opaque < 16usize > ; pub type OpaquePackedFloat64Array = crate :: Opaque < 16usize > ; pub type OpaquePackedStringArray = crate :: Opaque < 16usize > ; pub type OpaquePackedVector2Array = crate :: Opaque < 16usize > ; pub type OpaquePackedVector3Array = crate :: Opaque < 16usize > ; pub type OpaquePackedColorArray = crate :: Opaque < 16usize > ; pub type OpaquePackedVector4Array = crate :: Opaque < 16usize > ; pub type OpaqueVariant = crate :: Opaque < 24usize > ; } # [cfg (target_pointer_width = "32")] pub use types_32 :: * ; # [cfg (target_pointer_width = "64")] pub use types_64 :: * ;