//! Overlay Placement
//!
//! Geometry for centering an overlay box at a caller-chosen point.

use gpui::{Pixels, Point, point, px};

/// Top-left corner that centers a box of the given size on `anchor`
pub fn anchored_origin(anchor: Point<Pixels>, width: f32, height: f32) -> Point<Pixels> {
    point(anchor.x - px(width / 2.0), anchor.y - px(height / 2.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchored_origin_centers_box() {
        let origin = anchored_origin(point(px(200.0), px(100.0)), 300.0, 60.0);
        assert_eq!(origin, point(px(50.0), px(70.0)));
    }
}
