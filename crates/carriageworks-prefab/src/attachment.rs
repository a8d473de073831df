//! Bone attachment and attach-point builders.

use crate::component::{BoneTransform, Component};
use crate::node::{ChildMap, PrefabNode, PropertyDesc};
use crate::transform::Transform;

/// Prefab referenced by [`simple_attach_point`].
pub const ATTACH_POINT_PREFAB: &str = "AttachPoint";

/// Node pinned to `bone` on the immediate animated parent.
pub fn simple_bone_attachment(bone: &str) -> PrefabNode {
    PrefabNode::new()
        .with_component(Component::BoneTransform(BoneTransform {
            bone_name: bone.to_string(),
        }))
        .with_component(Component::Transform(Transform::IDENTITY))
}

/// [`simple_bone_attachment`] with the supplied children attached as-is.
pub fn bone_attachment_with_children(bone: &str, children: ChildMap) -> PrefabNode {
    simple_bone_attachment(bone).with_children(children)
}

/// Attach point for elements hooked on from outside the main hierarchy
/// (catch cars and the like). References the `AttachPoint` prefab and
/// exposes the bone to attach to as a property.
pub fn simple_attach_point(bone: &str) -> PrefabNode {
    PrefabNode::from_prefab(ATTACH_POINT_PREFAB)
        .with_property("AttachBone", PropertyDesc::new(bone))
        .with_component(Component::Transform(Transform::IDENTITY))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;

    #[test]
    fn bone_attachment_carries_bone_and_identity_transform() {
        let node = simple_bone_attachment("WheelBogie_L");
        assert_eq!(node.prefab, None);
        assert_eq!(
            node.components["BoneTransform"],
            Component::BoneTransform(BoneTransform {
                bone_name: "WheelBogie_L".to_string(),
            })
        );
        assert_eq!(
            node.components["Transform"],
            Component::Transform(Transform::IDENTITY)
        );
        assert!(node.children.is_empty());
    }

    #[test]
    fn attachment_children_are_injected_unchanged() {
        let mut children = ChildMap::new();
        children.insert("Lamp".to_string(), PrefabNode::from_prefab("HeadLamp"));
        let node = bone_attachment_with_children("LampBone", children.clone());
        assert_eq!(node.children, children);
        assert!(node.components.contains_key("BoneTransform"));
    }

    #[test]
    fn attach_point_references_prefab_and_exposes_bone() {
        let node = simple_attach_point("CatchCarBone");
        assert_eq!(node.prefab.as_deref(), Some(ATTACH_POINT_PREFAB));
        assert_eq!(
            node.properties["AttachBone"].default,
            Value::from("CatchCarBone")
        );
        assert!(node.components.contains_key("Transform"));
    }
}
