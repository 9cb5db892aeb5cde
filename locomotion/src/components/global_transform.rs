use glam::{Affine3A, Vec3};

/// Component used to represent the global transform of the entity.
/// This is the transformation from local to global space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalTransform(pub Affine3A);

impl Default for GlobalTransform {
    fn default() -> Self {
        Self(Affine3A::IDENTITY)
    }
}

impl GlobalTransform {
    /// Create a transform that only translates
    pub fn from_translation(translation: Vec3) -> Self {
        Self(Affine3A::from_translation(translation))
    }

    /// The position of the entity in global space
    pub fn translation(&self) -> Vec3 {
        self.0.translation.into()
    }
}
