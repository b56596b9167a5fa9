//! Geometry helpers: rectangle corners and rotation about a pivot

use glam::DVec2;

/// The four corners of a (possibly rotated) card, in page space.
///
/// Names refer to the unrotated rectangle: `tl` stays the corner that was
/// top-left before rotation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Corners {
    pub tl: DVec2,
    pub tr: DVec2,
    pub bl: DVec2,
    pub br: DVec2,
}

impl Corners {
    /// Axis-aligned rectangle of `size` centred on `center`.
    pub fn of_rect(center: DVec2, size: DVec2) -> Self {
        let half = size * 0.5;
        Corners {
            tl: center - half,
            tr: DVec2::new(center.x + half.x, center.y - half.y),
            bl: DVec2::new(center.x - half.x, center.y + half.y),
            br: center + half,
        }
    }

    /// Apply `f` to each corner.
    pub fn map(self, mut f: impl FnMut(DVec2) -> DVec2) -> Self {
        Corners {
            tl: f(self.tl),
            tr: f(self.tr),
            bl: f(self.bl),
            br: f(self.br),
        }
    }

    /// Corners in `tl, tr, bl, br` order.
    pub fn to_array(self) -> [DVec2; 4] {
        [self.tl, self.tr, self.bl, self.br]
    }

    /// Closed outline `tl → tr → br → bl → tl`, ready to stroke.
    pub fn outline(self) -> [DVec2; 5] {
        [self.tl, self.tr, self.br, self.bl, self.tl]
    }
}

/// Rotate `p` about `pivot`. `rotation` is `(cos θ, sin θ)`.
///
/// In y-down page space a positive angle turns clockwise on screen:
/// `x' = x cos θ − y sin θ`, `y' = y cos θ + x sin θ` relative to the pivot.
#[inline]
pub fn rotate_about(p: DVec2, pivot: DVec2, rotation: DVec2) -> DVec2 {
    pivot + rotation.rotate(p - pivot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Degrees;
    use glam::dvec2;

    fn close(a: DVec2, b: DVec2, tol: f64) -> bool {
        (a - b).abs().max_element() <= tol
    }

    #[test]
    fn rect_corners_are_centred() {
        let c = Corners::of_rect(dvec2(105.0, 148.5), dvec2(85.0, 55.0));
        assert_eq!(c.tl, dvec2(62.5, 121.0));
        assert_eq!(c.tr, dvec2(147.5, 121.0));
        assert_eq!(c.bl, dvec2(62.5, 176.0));
        assert_eq!(c.br, dvec2(147.5, 176.0));
    }

    #[test]
    fn outline_closes_back_on_first_corner() {
        let c = Corners::of_rect(DVec2::ZERO, dvec2(2.0, 2.0));
        let outline = c.outline();
        assert_eq!(outline[0], outline[4]);
        assert_eq!(outline[2], c.br);
    }

    #[test]
    fn positive_quarter_turn_moves_x_axis_onto_y_axis() {
        let p = rotate_about(dvec2(10.0, 0.0), DVec2::ZERO, Degrees(90.0).rotation());
        assert!(close(p, dvec2(0.0, 10.0), 1e-12));
    }

    #[test]
    fn rotation_keeps_pivot_fixed() {
        let pivot = dvec2(148.5, 210.0);
        let p = rotate_about(pivot, pivot, Degrees(37.0).rotation());
        assert_eq!(p, pivot);
    }

    #[test]
    fn rotating_forward_then_back_restores_points() {
        let pivot = dvec2(105.0, 148.5);
        for angle in [-90.0, -45.5, -1.0, 0.0, 7.25, 33.0, 90.0] {
            let fwd = Degrees(angle).rotation();
            let back = Degrees(-angle).rotation();
            for p in [dvec2(0.0, 0.0), dvec2(210.0, 297.0), dvec2(-40.0, 512.5)] {
                let round = rotate_about(rotate_about(p, pivot, fwd), pivot, back);
                let tol = 1e-9 * p.length().max(pivot.length());
                assert!(close(round, p, tol), "angle {angle}: {p} -> {round}");
            }
        }
    }
}
