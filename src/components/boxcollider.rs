use bevy_ecs::prelude::Component;
use glam::Vec2;

#[derive(Debug, Clone, Copy, PartialEq, Component)]
pub struct BoxCollider {
    pub size: Vec2,
    pub offset: Vec2,
}

impl BoxCollider {
    /// Create a BoxCollider with given size, anchored at the entity position.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
            offset: Vec2::ZERO,
        }
    }

    /// Create a BoxCollider of the given size centered on the entity position.
    pub fn centered(width: f32, height: f32) -> Self {
        Self::new(width, height).with_offset(Vec2::new(-width * 0.5, -height * 0.5))
    }

    /// Modify BoxCollider with given offset
    pub fn with_offset(mut self, offset: Vec2) -> Self {
        self.offset = offset;
        self
    }

    /// Returns (min, max) of the collider AABB for a given entity position.
    /// Handles negative size by normalizing to proper min/max.
    pub fn aabb(&self, position: Vec2) -> (Vec2, Vec2) {
        let p0 = position + self.offset;
        let p1 = p0 + self.size;
        (p0.min(p1), p0.max(p1))
    }

    /// AABB vs AABB overlap test against another BoxCollider at a different entity position.
    /// Touching edges do not count as overlap.
    pub fn overlaps(&self, position: Vec2, other: &Self, other_position: Vec2) -> bool {
        let (min_a, max_a) = self.aabb(position);
        let (min_b, max_b) = other.aabb(other_position);
        min_a.x < max_b.x && max_a.x > min_b.x && min_a.y < max_b.y && max_a.y > min_b.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_collider_spans_both_sides() {
        let collider = BoxCollider::centered(10.0, 20.0);
        let (min, max) = collider.aabb(Vec2::new(100.0, 100.0));
        assert_eq!(min, Vec2::new(95.0, 90.0));
        assert_eq!(max, Vec2::new(105.0, 110.0));
    }

    #[test]
    fn negative_size_is_normalized() {
        let collider = BoxCollider::new(-10.0, -10.0);
        let (min, max) = collider.aabb(Vec2::ZERO);
        assert_eq!(min, Vec2::new(-10.0, -10.0));
        assert_eq!(max, Vec2::ZERO);
    }

    #[test]
    fn overlapping_boxes() {
        let a = BoxCollider::centered(10.0, 10.0);
        let b = BoxCollider::centered(10.0, 10.0);
        assert!(a.overlaps(Vec2::ZERO, &b, Vec2::new(9.0, 9.0)));
        assert!(!a.overlaps(Vec2::ZERO, &b, Vec2::new(11.0, 0.0)));
    }

    #[test]
    fn touching_edges_do_not_overlap() {
        let a = BoxCollider::centered(10.0, 10.0);
        let b = BoxCollider::centered(10.0, 10.0);
        assert!(!a.overlaps(Vec2::ZERO, &b, Vec2::new(10.0, 0.0)));
    }
}
