//! Wheel, wheel-assembly, and bogie builders.

use crate::component::{
    AssetPackageLoader, AssetPackageProvider, Component, RenderMaterialEffects, WheelPhysics,
};
use crate::error::PrefabError;
use crate::node::{ComponentMap, PrefabNode, PropertyDesc, child_name, components};
use crate::path::parent_path;
use crate::transform::Transform;

/// Prefab referenced by every [`wheel_child`].
pub const WHEEL_BASE_PREFAB: &str = "WheelBase";

// Nesting is fixed at wheel -> assembly -> bogie -> car, so the material
// customisation provider on the car sits two levels above the assembly root
// and three above each wheel.
const ASSEMBLY_PROVIDER_LEVELS: u32 = 2;
const WHEEL_PROVIDER_LEVELS: u32 = 3;

fn material_effects(levels: u32) -> Component {
    Component::RenderMaterialEffects(RenderMaterialEffects {
        provider_entity: parent_path(levels),
    })
}

/// Assembly referencing `prefab_name` with children `Wheel1..WheelN`, each
/// wired to the car's material customisation provider.
///
/// A zero count permissively yields an assembly with no wheels.
pub fn wheel_assembly(prefab_name: &str, wheel_count: u32) -> PrefabNode {
    let mut node = PrefabNode::from_prefab(prefab_name)
        .with_component(material_effects(ASSEMBLY_PROVIDER_LEVELS))
        .with_component(Component::Transform(Transform::IDENTITY));
    for i in 1..=wheel_count {
        node = node.with_child(
            child_name("Wheel", i),
            PrefabNode::new().with_component(material_effects(WHEEL_PROVIDER_LEVELS)),
        );
    }
    node
}

/// Strict variant of [`wheel_assembly`]: rejects a zero wheel count.
pub fn try_wheel_assembly(prefab_name: &str, wheel_count: u32) -> Result<PrefabNode, PrefabError> {
    if wheel_count == 0 {
        return Err(PrefabError::ZeroCount {
            builder: "wheel_assembly",
            unit: "wheel",
        });
    }
    Ok(wheel_assembly(prefab_name, wheel_count))
}

/// Single wheel referencing the wheel base prefab.
///
/// `radius` maps to the `WheelRadius` property only when supplied. When
/// omitted the key is absent altogether and the base prefab's own default
/// applies; an explicit zero would override it.
pub fn wheel_child(bone: &str, model: &str, radius: Option<f64>) -> PrefabNode {
    let mut node = PrefabNode::from_prefab(WHEEL_BASE_PREFAB)
        .with_property("BoneName", PropertyDesc::new(bone))
        .with_property("ModelName", PropertyDesc::new(model));
    if let Some(radius) = radius {
        node = node.with_property("WheelRadius", PropertyDesc::new(radius));
    }
    node
}

/// Component set for a wheel-assembly carrier: identity transform, wheel
/// physics marker, the supplied loader verbatim, and a package provider
/// rooted at the carrier itself.
pub fn bogie_components(loader: AssetPackageLoader) -> ComponentMap {
    components([
        Component::Transform(Transform::IDENTITY),
        Component::WheelPhysics(WheelPhysics::default()),
        Component::AssetPackageLoader(loader),
        Component::AssetPackageProvider(AssetPackageProvider {
            loader_path: parent_path(0),
        }),
    ])
}
