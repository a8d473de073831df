//! The prefab tree record and its composition API.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::component::Component;
use crate::value::Value;

/// Components on a node, keyed by [`Component::kind`].
pub type ComponentMap = BTreeMap<String, Component>;

/// Properties exposed on a node, keyed by property name.
pub type PropertyMap = BTreeMap<String, PropertyDesc>;

/// Children of a node, keyed by child name (unique within the parent).
pub type ChildMap = BTreeMap<String, PrefabNode>;

/// Name for the `index`th repeated child, 1-based: `Wheel1`, `CoasterCar3`.
///
/// Every repeated-child builder funnels through this so the convention
/// cannot drift between wheel, car, and tag naming.
pub fn child_name(prefix: &str, index: u32) -> String {
    format!("{prefix}{index}")
}

/// Build a kind-keyed component map from a list of components.
pub fn components<I>(items: I) -> ComponentMap
where
    I: IntoIterator<Item = Component>,
{
    items
        .into_iter()
        .map(|c| (c.kind().to_string(), c))
        .collect()
}

/// How a property default combines with one inherited from the referenced
/// prefab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DefaultMerge {
    /// The authored default replaces any inherited one.
    Replace,
    /// The authored values append to the inherited default list.
    Append,
}

impl DefaultMerge {
    fn is_replace(&self) -> bool {
        matches!(self, DefaultMerge::Replace)
    }
}

/// A configurable field exposed on a referenced prefab.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PropertyDesc {
    pub default: Value,
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub ty: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contents: Option<BTreeMap<String, Value>>,
    #[serde(skip_serializing_if = "DefaultMerge::is_replace")]
    pub default_merge: DefaultMerge,
}

impl PropertyDesc {
    /// Untyped property with a replacing default.
    pub fn new(default: impl Into<Value>) -> Self {
        PropertyDesc {
            default: default.into(),
            ty: None,
            contents: None,
            default_merge: DefaultMerge::Replace,
        }
    }

    /// Property with an explicit engine type name.
    pub fn typed(default: impl Into<Value>, ty: &str) -> Self {
        PropertyDesc {
            ty: Some(ty.to_string()),
            ..Self::new(default)
        }
    }

    /// Typed property whose default appends to any inherited list instead
    /// of replacing it.
    pub fn appending(default: impl Into<Value>, ty: &str) -> Self {
        PropertyDesc {
            default_merge: DefaultMerge::Append,
            ..Self::typed(default, ty)
        }
    }

    /// Attach a contents mapping.
    pub fn with_contents(mut self, contents: BTreeMap<String, Value>) -> Self {
        self.contents = Some(contents);
        self
    }
}

/// A node in an authored prefab tree.
///
/// Every part is optional; empty parts are omitted when the tree is
/// emitted. Nodes are plain owned data: builders return fresh trees and two
/// results never share structure.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PrefabNode {
    /// Name of a referenced prefab template.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefab: Option<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub components: ComponentMap,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: PropertyMap,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub children: ChildMap,
}

impl PrefabNode {
    pub fn new() -> Self {
        Self::default()
    }

    /// Node referencing a prefab template by name.
    pub fn from_prefab(name: impl Into<String>) -> Self {
        PrefabNode {
            prefab: Some(name.into()),
            ..Self::default()
        }
    }

    /// Add a component, keyed by its kind. A second component of the same
    /// kind replaces the first.
    pub fn with_component(mut self, component: Component) -> Self {
        self.components
            .insert(component.kind().to_string(), component);
        self
    }

    /// Merge a component set into this node; entries replace same-kind
    /// existing ones.
    pub fn with_components(mut self, components: ComponentMap) -> Self {
        self.components.extend(components);
        self
    }

    /// Expose a property on the node.
    pub fn with_property(mut self, name: impl Into<String>, desc: PropertyDesc) -> Self {
        self.properties.insert(name.into(), desc);
        self
    }

    /// Add a single named child.
    pub fn with_child(mut self, name: impl Into<String>, child: PrefabNode) -> Self {
        self.children.insert(name.into(), child);
        self
    }

    /// Attach an existing child map as-is (field injection, no per-entry
    /// rebuild). Replaces any children already present.
    pub fn with_children(mut self, children: ChildMap) -> Self {
        self.children = children;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::BoneTransform;
    use crate::transform::Transform;

    #[test]
    fn child_names_are_one_based_concatenation() {
        assert_eq!(child_name("Wheel", 1), "Wheel1");
        assert_eq!(child_name("CoasterCar", 12), "CoasterCar12");
    }

    #[test]
    fn components_are_keyed_by_kind() {
        let node = PrefabNode::new()
            .with_component(Component::Transform(Transform::IDENTITY))
            .with_component(Component::BoneTransform(BoneTransform {
                bone_name: "Root".to_string(),
            }));
        assert!(node.components.contains_key("Transform"));
        assert!(node.components.contains_key("BoneTransform"));
        assert_eq!(node.components.len(), 2);
    }

    #[test]
    fn same_kind_component_replaces() {
        let node = PrefabNode::new()
            .with_component(Component::Transform(Transform::IDENTITY))
            .with_component(Component::Transform(crate::transform::transform(
                glam::DVec3::ZERO,
                glam::DVec3::ZERO,
                2.0,
            )));
        assert_eq!(node.components.len(), 1);
        match &node.components["Transform"] {
            Component::Transform(t) => assert_eq!(t.scale, 2.0),
            other => panic!("unexpected component {other:?}"),
        }
    }

    #[test]
    fn with_children_injects_the_map_unchanged() {
        let mut children = ChildMap::new();
        children.insert("Seat".to_string(), PrefabNode::from_prefab("SeatBase"));
        let node = PrefabNode::new().with_children(children.clone());
        assert_eq!(node.children, children);
    }

    #[test]
    fn append_and_replace_defaults_stay_distinguishable() {
        let replace = PropertyDesc::typed(Value::List(Vec::new()), "Uint64Array");
        let append = PropertyDesc::appending(Value::List(Vec::new()), "Uint64Array");
        assert_ne!(replace, append);

        // Only the append marker survives into emission.
        let replace_json = serde_json::to_value(&replace).unwrap();
        let append_json = serde_json::to_value(&append).unwrap();
        assert!(replace_json.get("DefaultMerge").is_none());
        assert_eq!(append_json["DefaultMerge"], "Append");
    }

    #[test]
    fn contents_mapping_is_emitted_when_attached() {
        let mut contents = BTreeMap::new();
        contents.insert("MinCount".to_string(), Value::from(1u32));
        let desc = PropertyDesc::new(Value::List(Vec::new())).with_contents(contents);
        let json = serde_json::to_value(&desc).unwrap();
        assert_eq!(json["Contents"]["MinCount"], 1);

        let bare = serde_json::to_value(PropertyDesc::new(Value::List(Vec::new()))).unwrap();
        assert!(bare.get("Contents").is_none());
    }

    #[test]
    fn empty_parts_are_omitted_from_emission() {
        let node = PrefabNode::from_prefab("AttachPoint");
        assert_eq!(
            serde_json::to_value(&node).unwrap(),
            serde_json::json!({ "Prefab": "AttachPoint" })
        );
    }

    #[test]
    fn builder_calls_share_no_structure() {
        let a = PrefabNode::new().with_child("Wheel1", PrefabNode::from_prefab("WheelBase"));
        let mut b = a.clone();
        b.children.insert("Wheel2".to_string(), PrefabNode::new());
        assert_eq!(a.children.len(), 1);
        assert_eq!(b.children.len(), 2);
    }
}
