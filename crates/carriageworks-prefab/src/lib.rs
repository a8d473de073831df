//! Carriageworks -- declarative prefab assembly for train-car entities.
//!
//! Builders here produce the nested component/property/child structures the
//! scene authoring pipeline consumes when describing coaster trains: cars,
//! wheel bogies, scenery platforms, and their attachment points. Everything
//! is pure and synchronous: each call returns a fresh tree, holds no state,
//! and may run from any thread.
//!
//! The compositional rules the builders enforce are the ones that are easy
//! to get wrong by hand: relative reference paths that must match the real
//! nesting depth, 1-based index naming for repeated children, and
//! properties that must stay absent rather than defaulted.
//!
//! ```rust
//! use carriageworks_prefab::*;
//!
//! let bogie = simple_bone_attachment("BogieFront")
//!     .with_components(bogie_components(AssetPackageLoader::package("SharedWheels")))
//!     .with_child("WheelAssembly", wheel_assembly("FrontWheels", 4));
//! print_prefab(&bogie);
//! ```
//!
//! # Key types
//!
//! - [`PrefabNode`] -- a tree node: prefab reference, components,
//!   properties, children.
//! - [`Component`] -- typed record per engine component kind, keyed by
//!   [`Component::kind`].
//! - [`PropertyDesc`] -- exposed property with default, optional type, and
//!   append-vs-replace default merging.
//! - [`PrefabError`] -- raised only by the opt-in strict (`try_`) builder
//!   variants; the default paths keep the permissive authoring contract.

pub mod attachment;
pub mod camera;
pub mod car;
pub mod color;
pub mod component;
pub mod dump;
pub mod error;
pub mod node;
pub mod path;
pub mod platform;
pub mod transform;
pub mod value;
pub mod wheels;

pub use glam::DVec3;

pub use attachment::{
    ATTACH_POINT_PREFAB, bone_attachment_with_children, simple_attach_point,
    simple_bone_attachment,
};
pub use camera::simple_camera_child;
pub use car::{CAR_CHANNEL_TAG_PREFIX, train_car_components, try_train_car_components};
pub use color::{hex_color_to_normalized, try_hex_color_to_normalized};
pub use component::{
    AssetPackageLoader, AssetPackageProvider, BoneTransform, Component, DynamicSceneryPlatform,
    Model, ModelSkeleton, PhysicsMass, PlatformIdProvider, RenderMaterialEffects,
    SceneryDuplicationContext, SceneryPlatform, SemanticTag, SemanticTagMap, TriggerContext,
    WheelPhysics,
};
pub use dump::{dump_lines, print_prefab, to_ron_string};
pub use error::PrefabError;
pub use node::{
    ChildMap, ComponentMap, DefaultMerge, PrefabNode, PropertyDesc, PropertyMap, child_name,
    components,
};
pub use path::parent_path;
pub use platform::{
    ROTATIONAL_SYMMETRY_AXIS_CHILD, rotational_symmetry_scenery_platform,
    simple_scenery_platform,
};
pub use transform::{Transform, transform};
pub use value::Value;
pub use wheels::{
    WHEEL_BASE_PREFAB, bogie_components, try_wheel_assembly, wheel_assembly, wheel_child,
};
