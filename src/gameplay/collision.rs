use bevy::prelude::*;

/// Circle vs axis-aligned rectangle: clamp the circle center to the
/// rectangle on each axis to find the closest point, then compare squared
/// distances. Contact at exactly `radius` counts as a hit.
pub fn circle_hits_rect(center: Vec2, radius: f32, rect: Rect) -> bool {
    let closest = center.clamp(rect.min, rect.max);
    center.distance_squared(closest) <= radius * radius
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paddle_rect() -> Rect {
        Rect::from_corners(Vec2::new(30.0, 300.0), Vec2::new(50.0, 400.0))
    }

    #[test]
    fn center_inside_rect_hits() {
        assert!(circle_hits_rect(Vec2::new(40.0, 350.0), 10.0, paddle_rect()));
    }

    #[test]
    fn face_contact_hits() {
        // 10 units left of the left face, radius 10
        assert!(circle_hits_rect(Vec2::new(20.0, 350.0), 10.0, paddle_rect()));
        assert!(!circle_hits_rect(Vec2::new(19.9, 350.0), 10.0, paddle_rect()));
    }

    #[test]
    fn corner_contact_is_inclusive() {
        // 3-4-5 triangle off the top-left corner: distance exactly 5
        let center = Vec2::new(27.0, 296.0);
        assert!(circle_hits_rect(center, 5.0, paddle_rect()));
        assert!(!circle_hits_rect(center, 5.0 - 1e-3, paddle_rect()));
    }

    #[test]
    fn corner_contact_past_radius_misses() {
        let center = Vec2::new(27.0, 296.0 - 1e-3);
        assert!(!circle_hits_rect(center, 5.0, paddle_rect()));
    }
}
