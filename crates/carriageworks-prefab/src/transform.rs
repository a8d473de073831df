//! Local placement of a prefab node.

use glam::DVec3;
use serde::Serialize;

/// Position, Euler rotation in radians, and uniform scale.
///
/// Always carries exactly these three fields; the engine rejects transforms
/// with anything else.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Transform {
    pub position: DVec3,
    pub rotation: DVec3,
    pub scale: f64,
}

impl Transform {
    /// Zero position and rotation, unit scale.
    pub const IDENTITY: Transform = Transform {
        position: DVec3::ZERO,
        rotation: DVec3::ZERO,
        scale: 1.0,
    };
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Combine the three parts verbatim. Nothing is defaulted or validated; a
/// zero scale or negative rotation passes through unchanged.
pub fn transform(position: DVec3, rotation: DVec3, scale: f64) -> Transform {
    Transform {
        position,
        rotation,
        scale,
    }
}
