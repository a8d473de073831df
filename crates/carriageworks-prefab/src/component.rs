//! Typed component records and the component union.
//!
//! Each engine component kind gets an explicit record instead of a
//! duck-typed field bag, so a misspelt field cannot reach the authoring
//! pipeline. The union serializes untagged: a component renders as its bare
//! field map, keyed in the parent node by [`Component::kind`].

use std::collections::BTreeMap;

use serde::Serialize;

use crate::transform::Transform;
use crate::value::Value;

/// A component on a prefab node.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Component {
    Transform(Transform),
    BoneTransform(BoneTransform),
    RenderMaterialEffects(RenderMaterialEffects),
    Model(Model),
    ModelSkeleton(ModelSkeleton),
    PhysicsMass(PhysicsMass),
    WheelPhysics(WheelPhysics),
    AssetPackageLoader(AssetPackageLoader),
    AssetPackageProvider(AssetPackageProvider),
    SemanticTagMap(SemanticTagMap),
    SceneryPlatform(SceneryPlatform),
    DynamicSceneryPlatform(DynamicSceneryPlatform),
    TriggerContext(TriggerContext),
    PlatformIdProvider(PlatformIdProvider),
    SceneryDuplicationContext(SceneryDuplicationContext),
}

impl Component {
    /// The engine component-type name, used as the key in a node's
    /// component map.
    pub fn kind(&self) -> &'static str {
        match self {
            Component::Transform(_) => "Transform",
            Component::BoneTransform(_) => "BoneTransform",
            Component::RenderMaterialEffects(_) => "RenderMaterialEffects",
            Component::Model(_) => "Model",
            Component::ModelSkeleton(_) => "ModelSkeleton",
            Component::PhysicsMass(_) => "PhysicsMass",
            Component::WheelPhysics(_) => "WheelPhysics",
            Component::AssetPackageLoader(_) => "AssetPackageLoader",
            Component::AssetPackageProvider(_) => "AssetPackageProvider",
            Component::SemanticTagMap(_) => "SemanticTagMap",
            Component::SceneryPlatform(_) => "SceneryPlatform",
            Component::DynamicSceneryPlatform(_) => "DynamicSceneryPlatform",
            Component::TriggerContext(_) => "TriggerContext",
            Component::PlatformIdProvider(_) => "PlatformIdProvider",
            Component::SceneryDuplicationContext(_) => "SceneryDuplicationContext",
        }
    }
}

/// Pins a node to a named bone on the nearest animated ancestor.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct BoneTransform {
    pub bone_name: String,
}

/// Points a renderable at the entity providing its material customisation
/// channels.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RenderMaterialEffects {
    /// Relative path to the providing entity.
    pub provider_entity: String,
}

/// Visual model reference.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Model {
    pub name: String,
    /// Cars move under the ride's control, so the engine-side culling
    /// volume update stays off.
    pub update_culling_volume: bool,
}

/// Skeleton paired with a [`Model`] of the same name.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ModelSkeleton {
    pub name: String,
}

/// Physics mass in kilograms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PhysicsMass {
    pub mass: f64,
}

/// Marker enabling wheel collision handling; carries no data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct WheelPhysics {}

/// Caller-supplied asset package loader configuration, passed through
/// verbatim; the builders never interpret its fields.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct AssetPackageLoader(pub BTreeMap<String, Value>);

impl AssetPackageLoader {
    /// Loader pulling a single named asset package.
    pub fn package(name: &str) -> Self {
        let mut config = BTreeMap::new();
        config.insert("Package".to_string(), Value::from(name));
        Self(config)
    }
}

/// Exposes the asset packages loaded at `loader_path` to this subtree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AssetPackageProvider {
    pub loader_path: String,
}

/// Semantic tags on a car entity, keyed by tag name.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct SemanticTagMap(pub BTreeMap<String, SemanticTag>);

/// A single semantic tag entry.
///
/// The provider slot is absent (not null) on the base colour channel; the
/// engine reserves slot 0 for it implicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SemanticTag {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub material_customisation_provider_slot: Option<u32>,
}

/// Finds the platform mesh scenery snaps against.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SceneryPlatform {
    pub platform_mesh: String,
    /// Vertical offset of the display plane below the mesh origin.
    pub display_plane_offset: f64,
}

/// Twinning wiring for a platform duplicated across cars and trains.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DynamicSceneryPlatform {
    /// Group name formats this platform twins under; `{0}` is filled with
    /// the train index by the engine.
    pub twinning_groups: Vec<String>,
    /// Per-train platform name format.
    pub platform_name: String,
}

/// Routes trigger events to the owning tracked-ride car.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TriggerContext {
    pub tracked_ride_car_entity: String,
}

/// Points at the entity that hands out platform IDs.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PlatformIdProvider {
    pub provider_entity: String,
}

/// Duplicates scenery around a symmetry axis held by a sibling child node.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SceneryDuplicationContext {
    pub rotational_symmetry_axis_entity: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_matches_engine_component_names() {
        assert_eq!(Component::Transform(Transform::IDENTITY).kind(), "Transform");
        assert_eq!(
            Component::SemanticTagMap(SemanticTagMap::default()).kind(),
            "SemanticTagMap"
        );
        assert_eq!(
            Component::SceneryDuplicationContext(SceneryDuplicationContext {
                rotational_symmetry_axis_entity: "./RotationalSymmetryAxis".to_string(),
            })
            .kind(),
            "SceneryDuplicationContext"
        );
    }

    #[test]
    fn components_serialize_as_bare_field_maps() {
        let model = Component::Model(Model {
            name: "CoasterCarBody".to_string(),
            update_culling_volume: false,
        });
        assert_eq!(
            serde_json::to_value(&model).unwrap(),
            serde_json::json!({
                "Name": "CoasterCarBody",
                "UpdateCullingVolume": false,
            })
        );
    }

    #[test]
    fn absent_provider_slot_is_omitted_entirely() {
        let tag = SemanticTag {
            material_customisation_provider_slot: None,
        };
        assert_eq!(serde_json::to_value(tag).unwrap(), serde_json::json!({}));

        let tag = SemanticTag {
            material_customisation_provider_slot: Some(2),
        };
        assert_eq!(
            serde_json::to_value(tag).unwrap(),
            serde_json::json!({ "MaterialCustomisationProviderSlot": 2 })
        );
    }

    #[test]
    fn loader_serializes_transparently() {
        let loader = AssetPackageLoader::package("CoasterCars_Shared");
        assert_eq!(
            serde_json::to_value(&loader).unwrap(),
            serde_json::json!({ "Package": "CoasterCars_Shared" })
        );
    }

    #[test]
    fn wheel_physics_marker_is_an_empty_map() {
        let marker = Component::WheelPhysics(WheelPhysics::default());
        assert_eq!(serde_json::to_value(&marker).unwrap(), serde_json::json!({}));
    }
}
