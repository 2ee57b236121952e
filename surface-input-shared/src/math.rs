use glam::Vec2;

/// Half of the element's displayed size.
pub fn half_extents(size: Vec2) -> Vec2 {
    size * 0.5
}

/// Map an element-local pixel offset to normalized surface coordinates.
///
/// The origin sits at the element center. Both axes are scaled by the
/// half-height, so y spans [-1, 1] and x spans [-aspect, aspect]. Y grows
/// upward.
pub fn normalize_offset(offset: Vec2, size: Vec2) -> Vec2 {
    let half = half_extents(size);
    if half.y <= 0.0 {
        return Vec2::ZERO;
    }
    let x = (offset.x - half.x) / half.y;
    let y = (offset.y - half.y) / half.y;
    Vec2::new(x, -y)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn approx_eq_vec(a: Vec2, b: Vec2) -> bool {
        approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
    }

    // ── half_extents ──

    #[test]
    fn test_half_extents() {
        assert_eq!(half_extents(Vec2::new(640.0, 480.0)), Vec2::new(320.0, 240.0));
    }

    // ── normalize_offset ──

    #[test]
    fn test_center_maps_to_origin() {
        let size = Vec2::new(800.0, 600.0);
        assert_eq!(normalize_offset(Vec2::new(400.0, 300.0), size), Vec2::ZERO);
    }

    #[test]
    fn test_top_edge_is_positive_one() {
        let size = Vec2::new(800.0, 600.0);
        let p = normalize_offset(Vec2::new(400.0, 0.0), size);
        assert!(approx_eq_vec(p, Vec2::new(0.0, 1.0)), "got {p}");
    }

    #[test]
    fn test_bottom_edge_is_negative_one() {
        let size = Vec2::new(800.0, 600.0);
        let p = normalize_offset(Vec2::new(400.0, 600.0), size);
        assert!(approx_eq_vec(p, Vec2::new(0.0, -1.0)), "got {p}");
    }

    #[test]
    fn test_x_scaled_by_half_height() {
        // Wide element: right edge lands at the aspect ratio, not at 1.0
        let size = Vec2::new(800.0, 400.0);
        let p = normalize_offset(Vec2::new(800.0, 200.0), size);
        assert!(approx_eq(p.x, 2.0), "x = {}", p.x);
        assert!(approx_eq(p.y, 0.0));
    }

    #[test]
    fn test_top_left_corner() {
        let size = Vec2::new(200.0, 200.0);
        let p = normalize_offset(Vec2::ZERO, size);
        assert!(approx_eq_vec(p, Vec2::new(-1.0, 1.0)), "got {p}");
    }

    #[test]
    fn test_zero_height_yields_origin() {
        let p = normalize_offset(Vec2::new(10.0, 10.0), Vec2::new(100.0, 0.0));
        assert_eq!(p, Vec2::ZERO);
        assert!(p.is_finite());
    }
}
