//! Scenery-platform builders.
//!
//! Platforms let guests place scenery on moving train cars. A platform node
//! sits one level below its car; the engine twins it across every car of
//! every train through the group name formats wired here.

use crate::component::{
    AssetPackageProvider, Component, DynamicSceneryPlatform, PlatformIdProvider,
    SceneryDuplicationContext, SceneryPlatform, TriggerContext,
};
use crate::node::{PrefabNode, PropertyDesc};
use crate::path::parent_path;
use crate::transform::Transform;
use crate::value::Value;

/// Child added by [`rotational_symmetry_scenery_platform`] and referenced
/// by its duplication context.
pub const ROTATIONAL_SYMMETRY_AXIS_CHILD: &str = "RotationalSymmetryAxis";

/// Vertical offset of the platform display plane below the mesh origin.
const DISPLAY_PLANE_OFFSET: f64 = -0.2;

// car/Platform sits four levels below the entity handing out platform IDs.
const PLATFORM_ID_PROVIDER_LEVELS: u32 = 4;

/// Scenery platform wired for twinning across every car of every train.
///
/// `name_suffix` distinguishes platforms on the same car (`"Front"`,
/// `"Rear"`); the `{0}` slot in the emitted formats is filled with the
/// train index by the engine.
pub fn simple_scenery_platform(mesh: &str, name_suffix: &str) -> PrefabNode {
    PrefabNode::new()
        .with_component(Component::SceneryPlatform(SceneryPlatform {
            platform_mesh: mesh.to_string(),
            display_plane_offset: DISPLAY_PLANE_OFFSET,
        }))
        .with_component(Component::DynamicSceneryPlatform(DynamicSceneryPlatform {
            twinning_groups: vec![
                "Train{0}_AllCars".to_string(),
                format!("AllTrains_{name_suffix}"),
                "AllTrains_AllCars".to_string(),
            ],
            platform_name: format!("Train{{0}}_{name_suffix}"),
        }))
        .with_component(Component::TriggerContext(TriggerContext {
            tracked_ride_car_entity: parent_path(1),
        }))
        .with_component(Component::Transform(Transform::IDENTITY))
        .with_component(Component::AssetPackageProvider(AssetPackageProvider {
            loader_path: parent_path(1),
        }))
        .with_component(Component::PlatformIdProvider(PlatformIdProvider {
            provider_entity: parent_path(PLATFORM_ID_PROVIDER_LEVELS),
        }))
        .with_property(
            "InputValues",
            PropertyDesc::appending(Value::List(Vec::new()), "Uint64Array"),
        )
}

/// [`simple_scenery_platform`] plus a rotational symmetry axis.
///
/// Extends the base structure both ways at once: a duplication context
/// component referencing the new `RotationalSymmetryAxis` child, and the
/// child itself holding the given transform.
pub fn rotational_symmetry_scenery_platform(
    mesh: &str,
    name_suffix: &str,
    axis_transform: Transform,
) -> PrefabNode {
    simple_scenery_platform(mesh, name_suffix)
        .with_component(Component::SceneryDuplicationContext(
            SceneryDuplicationContext {
                rotational_symmetry_axis_entity: format!("./{ROTATIONAL_SYMMETRY_AXIS_CHILD}"),
            },
        ))
        .with_child(
            ROTATIONAL_SYMMETRY_AXIS_CHILD,
            PrefabNode::new().with_component(Component::Transform(axis_transform)),
        )
}
