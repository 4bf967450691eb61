//! Axis-aligned scene bounds and their projection onto the view axis.

use glam::{Mat4, Vec3};

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner.
    pub min: Vec3,
    /// Maximum corner.
    pub max: Vec3,
}

impl Aabb {
    /// The empty box: any union with it yields the other operand.
    pub const EMPTY: Self = Self {
        min: Vec3::splat(f32::MAX),
        max: Vec3::splat(f32::MIN),
    };

    /// Box spanning the two corners (in any order).
    #[must_use]
    pub fn new(a: Vec3, b: Vec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Smallest box containing all `points`. Empty input gives
    /// [`Aabb::EMPTY`].
    #[must_use]
    pub fn from_points(points: &[Vec3]) -> Self {
        points.iter().fold(Self::EMPTY, |acc, &p| acc.extended(p))
    }

    /// `true` when the box contains no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.min.cmpgt(self.max).any()
    }

    /// Grow the box to include `p`.
    #[must_use]
    pub fn extended(self, p: Vec3) -> Self {
        Self {
            min: self.min.min(p),
            max: self.max.max(p),
        }
    }

    /// Box center. Meaningless for an empty box.
    #[must_use]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// The eight corners.
    #[must_use]
    pub fn corners(&self) -> [Vec3; 8] {
        let (lo, hi) = (self.min, self.max);
        [
            Vec3::new(lo.x, lo.y, lo.z),
            Vec3::new(hi.x, lo.y, lo.z),
            Vec3::new(lo.x, hi.y, lo.z),
            Vec3::new(hi.x, hi.y, lo.z),
            Vec3::new(lo.x, lo.y, hi.z),
            Vec3::new(hi.x, lo.y, hi.z),
            Vec3::new(lo.x, hi.y, hi.z),
            Vec3::new(hi.x, hi.y, hi.z),
        ]
    }

    /// Axis-aligned box enclosing this box after an affine transform.
    #[must_use]
    pub fn transformed(&self, m: &Mat4) -> Self {
        if self.is_empty() {
            return *self;
        }
        self.corners()
            .iter()
            .fold(Self::EMPTY, |acc, &c| acc.extended(m.transform_point3(c)))
    }

    /// Near/far distances of a camera-space box for a camera looking down
    /// −Z: `(−max.z, −min.z)`.
    #[must_use]
    pub fn depth_range(&self) -> (f32, f32) {
        (-self.max.z, -self.min.z)
    }
}

impl Default for Aabb {
    fn default() -> Self {
        Self::EMPTY
    }
}

#[cfg(test)]
mod tests {
    use glam::Quat;

    use super::*;

    #[test]
    fn empty_box_stays_empty() {
        assert!(Aabb::EMPTY.is_empty());
        assert!(Aabb::from_points(&[]).is_empty());
        let moved = Aabb::EMPTY.transformed(&Mat4::from_translation(Vec3::X));
        assert!(moved.is_empty());
    }

    #[test]
    fn depth_range_flips_z() {
        let b = Aabb::new(Vec3::new(-1.0, -1.0, -10.0), Vec3::new(1.0, 1.0, -2.0));
        assert_eq!(b.depth_range(), (2.0, 10.0));
    }

    #[test]
    fn rotation_encloses_all_corners() {
        let b = Aabb::new(Vec3::splat(-1.0), Vec3::splat(1.0));
        let m = Mat4::from_quat(Quat::from_rotation_z(std::f32::consts::FRAC_PI_4));
        let r = b.transformed(&m);
        let diag = 2.0_f32.sqrt();
        assert!((r.max.x - diag).abs() < 1e-5);
        assert!((r.min.y + diag).abs() < 1e-5);
        assert!((r.max.z - 1.0).abs() < 1e-5);
    }
}
