//! Train-car component sets.

use std::collections::BTreeMap;

use crate::component::{
    AssetPackageLoader, AssetPackageProvider, Component, Model, ModelSkeleton, PhysicsMass,
    SemanticTag, SemanticTagMap,
};
use crate::error::PrefabError;
use crate::node::{ComponentMap, child_name, components};
use crate::path::parent_path;
use crate::transform::Transform;

/// Tag prefix for per-car colour channels.
pub const CAR_CHANNEL_TAG_PREFIX: &str = "CoasterCar";

/// Component set for a train car: model and skeleton named `model`, mass,
/// the asset loader/provider pair, and one semantic tag per colour channel.
///
/// Channel 1 is the base channel and carries no provider slot; channel `i`
/// above it gets slot `i - 1`. Counts above 4 keep the same linear
/// assignment; the engine side of that range is unverified.
pub fn train_car_components(
    model: &str,
    loader: AssetPackageLoader,
    channel_count: u32,
    mass: f64,
) -> ComponentMap {
    let mut tags = BTreeMap::new();
    for i in 1..=channel_count {
        let slot = if i == 1 { None } else { Some(i - 1) };
        tags.insert(
            child_name(CAR_CHANNEL_TAG_PREFIX, i),
            SemanticTag {
                material_customisation_provider_slot: slot,
            },
        );
    }
    components([
        Component::Model(Model {
            name: model.to_string(),
            update_culling_volume: false,
        }),
        Component::ModelSkeleton(ModelSkeleton {
            name: model.to_string(),
        }),
        Component::PhysicsMass(PhysicsMass { mass }),
        Component::AssetPackageLoader(loader),
        Component::AssetPackageProvider(AssetPackageProvider {
            loader_path: parent_path(0),
        }),
        Component::SemanticTagMap(SemanticTagMap(tags)),
        Component::Transform(Transform::IDENTITY),
    ])
}

/// Strict variant of [`train_car_components`]: rejects zero channels.
pub fn try_train_car_components(
    model: &str,
    loader: AssetPackageLoader,
    channel_count: u32,
    mass: f64,
) -> Result<ComponentMap, PrefabError> {
    if channel_count == 0 {
        return Err(PrefabError::ZeroCount {
            builder: "train_car_components",
            unit: "colour channel",
        });
    }
    Ok(train_car_components(model, loader, channel_count, mass))
}
