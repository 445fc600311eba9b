use glam::Vec3;

/// Minimal 3-component arithmetic needed by the noise kernel.
///
/// Implemented for [`glam::Vec3`] and for plain `[f32; 3]`, so the kernel has a
/// single implementation regardless of which representation the caller uses.
pub trait NoiseVector: Copy {
    /// Builds a vector from its components.
    fn new(x: f32, y: f32, z: f32) -> Self;

    /// Builds a vector with all three components set to `value`.
    #[inline]
    fn splat(value: f32) -> Self {
        Self::new(value, value, value)
    }

    /// The `x` component.
    fn x(self) -> f32;
    /// The `y` component.
    fn y(self) -> f32;
    /// The `z` component.
    fn z(self) -> f32;

    /// Component-wise sum.
    fn add(self, rhs: Self) -> Self;
    /// Component-wise difference.
    fn sub(self, rhs: Self) -> Self;
    /// Component-wise product.
    fn mul(self, rhs: Self) -> Self;

    /// Dot product, accumulated as `x + y + z` from left to right.
    fn dot(self, rhs: Self) -> f32;
}

impl NoiseVector for Vec3 {
    #[inline]
    fn new(x: f32, y: f32, z: f32) -> Self {
        Vec3::new(x, y, z)
    }

    #[inline]
    fn x(self) -> f32 {
        self.x
    }

    #[inline]
    fn y(self) -> f32 {
        self.y
    }

    #[inline]
    fn z(self) -> f32 {
        self.z
    }

    #[inline]
    fn add(self, rhs: Self) -> Self {
        self + rhs
    }

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self - rhs
    }

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self * rhs
    }

    #[inline]
    fn dot(self, rhs: Self) -> f32 {
        Vec3::dot(self, rhs)
    }
}

impl NoiseVector for [f32; 3] {
    #[inline]
    fn new(x: f32, y: f32, z: f32) -> Self {
        [x, y, z]
    }

    #[inline]
    fn x(self) -> f32 {
        self[0]
    }

    #[inline]
    fn y(self) -> f32 {
        self[1]
    }

    #[inline]
    fn z(self) -> f32 {
        self[2]
    }

    #[inline]
    fn add(self, rhs: Self) -> Self {
        [self[0] + rhs[0], self[1] + rhs[1], self[2] + rhs[2]]
    }

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        [self[0] - rhs[0], self[1] - rhs[1], self[2] - rhs[2]]
    }

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        [self[0] * rhs[0], self[1] * rhs[1], self[2] * rhs[2]]
    }

    #[inline]
    fn dot(self, rhs: Self) -> f32 {
        self[0] * rhs[0] + self[1] * rhs[1] + self[2] * rhs[2]
    }
}
