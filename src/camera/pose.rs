use glam::Vec3;

/// Camera position plus look-at target.
///
/// Poses are plain values: the tweener never mutates one in place, it
/// produces a fresh pose every frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pose {
    /// Eye (camera) position in world space.
    pub position: Vec3,
    /// Point the camera looks at.
    pub look_at: Vec3,
}

impl Pose {
    /// Create a pose from an eye position and a look-at target.
    #[must_use]
    pub const fn new(position: Vec3, look_at: Vec3) -> Self {
        Self { position, look_at }
    }

    /// Create a pose from plain `[x, y, z]` arrays (the options format).
    #[must_use]
    pub fn from_arrays(position: [f32; 3], look_at: [f32; 3]) -> Self {
        Self {
            position: Vec3::from_array(position),
            look_at: Vec3::from_array(look_at),
        }
    }

    /// Linear blend toward `other`. Both vectors use the same `t`.
    #[must_use]
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        Self {
            position: self.position.lerp(other.position, t),
            look_at: self.look_at.lerp(other.look_at, t),
        }
    }

    /// Combined distance: eye-to-eye plus target-to-target.
    #[must_use]
    pub fn distance_to(&self, other: &Self) -> f32 {
        self.position.distance(other.position)
            + self.look_at.distance(other.look_at)
    }

    /// Whether both vectors are within `epsilon` of `other`'s.
    #[must_use]
    pub fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.position.distance(other.position) <= epsilon
            && self.look_at.distance(other.look_at) <= epsilon
    }

    /// Unit view direction, or `-Z` when eye and target coincide.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        (self.look_at - self.position)
            .try_normalize()
            .unwrap_or(Vec3::NEG_Z)
    }
}
