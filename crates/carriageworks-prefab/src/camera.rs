//! On-ride camera child builder.

use glam::DVec3;

use crate::node::{PrefabNode, PropertyDesc};

/// Default field of view exposed on every camera child.
const DEFAULT_FIELD_OF_VIEW: f64 = 1.0;

/// Camera child referencing `prefab`.
///
/// Cameras are configured through exposed properties, not a raw transform:
/// position and rotation land in `Properties`, alongside a fixed default
/// field of view.
pub fn simple_camera_child(prefab: &str, position: DVec3, rotation: DVec3) -> PrefabNode {
    PrefabNode::from_prefab(prefab)
        .with_property("FieldOfView", PropertyDesc::new(DEFAULT_FIELD_OF_VIEW))
        .with_property("Position", PropertyDesc::new(position))
        .with_property("Rotation", PropertyDesc::new(rotation))
}
