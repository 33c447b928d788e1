//! Math types used for actor placement

use nalgebra::Vector3;

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// Location and rotation of an actor in its world
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActorTransform {
    /// World-space location
    pub location: Vec3,
    /// Rotation as Euler angles (pitch, yaw, roll) in radians
    pub rotation: Vec3,
}

impl ActorTransform {
    /// Transform at the world origin with no rotation
    pub fn origin() -> Self {
        Self {
            location: Vec3::zeros(),
            rotation: Vec3::zeros(),
        }
    }

    /// Transform at the given location with no rotation
    pub fn at(location: Vec3) -> Self {
        Self {
            location,
            rotation: Vec3::zeros(),
        }
    }

    /// Whether this transform is exactly the origin transform
    pub fn is_origin(&self) -> bool {
        *self == Self::origin()
    }
}

impl Default for ActorTransform {
    fn default() -> Self {
        Self::origin()
    }
}
