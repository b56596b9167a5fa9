//! Strongly-typed numeric primitives for page layout (zero-cost newtypes).
//!
//! - Physical lengths are millimetres (`Mm`), never bare `f64` in signatures
//! - Angles are degrees at the API surface, radians only inside geometry
//! - Grid addresses are integer pairs, independent of any unit

use std::fmt;

use glam::DVec2;

/// Error type for invalid numeric values
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericError {
    /// Value is NaN
    NaN,
    /// Value is infinite
    Infinite,
    /// Value is zero or negative when positive required
    NotPositive,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NaN => write!(f, "value is NaN"),
            NumericError::Infinite => write!(f, "value is infinite"),
            NumericError::NotPositive => write!(f, "value is not positive"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Length in millimetres (the physical page unit)
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Mm(pub f64);

impl Mm {
    /// Create a length with validation (rejects NaN/infinite)
    #[inline]
    pub fn try_new(val: f64) -> Result<Mm, NumericError> {
        if val.is_nan() {
            Err(NumericError::NaN)
        } else if val.is_infinite() {
            Err(NumericError::Infinite)
        } else {
            Ok(Mm(val))
        }
    }

    /// Create a strictly positive length with validation
    #[inline]
    pub fn try_positive(val: f64) -> Result<Mm, NumericError> {
        let mm = Mm::try_new(val)?;
        if mm.0 <= 0.0 {
            Err(NumericError::NotPositive)
        } else {
            Ok(mm)
        }
    }

    /// Get the raw value (use sparingly, prefer typed operations)
    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Mm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}mm", self.0)
    }
}

/// Rotation in degrees. Positive turns clockwise on screen (y grows down).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Degrees(pub f64);

impl Degrees {
    pub const ZERO: Degrees = Degrees(0.0);

    #[inline]
    pub fn to_radians(self) -> f64 {
        self.0.to_radians()
    }

    /// Unit vector `(cos θ, sin θ)`, ready for `DVec2::rotate`.
    #[inline]
    pub fn rotation(self) -> DVec2 {
        DVec2::from_angle(self.to_radians())
    }
}

impl fmt::Display for Degrees {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.0)
    }
}

/// Width × height of a physical rectangle (page or card)
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Size {
    pub w: Mm,
    pub h: Mm,
}

impl Size {
    pub const fn mm(w: f64, h: f64) -> Self {
        Size { w: Mm(w), h: Mm(h) }
    }

    /// Size as a vector `(w, h)` in millimetres.
    #[inline]
    pub fn to_vec(self) -> DVec2 {
        DVec2::new(self.w.0, self.h.0)
    }

    /// Centre point of a rectangle of this size anchored at the origin.
    #[inline]
    pub fn center(self) -> DVec2 {
        self.to_vec() * 0.5
    }

    /// Both sides finite and greater than zero.
    #[inline]
    pub fn has_positive_sides(self) -> bool {
        [self.w, self.h].iter().all(|side| Mm::try_positive(side.0).is_ok())
    }

    /// True when `p` lies inside `[0, w] × [0, h]`, edges included.
    #[inline]
    pub fn contains(self, p: DVec2) -> bool {
        p.x >= 0.0 && p.x <= self.w.0 && p.y >= 0.0 && p.y <= self.h.0
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}×{}mm", self.w.0, self.h.0)
    }
}

/// Page size in millimetres
pub type PaperSize = Size;
/// Card size in millimetres
pub type CardSize = Size;

/// Opaque 8-bit RGB colour
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(0xff, 0xff, 0xff);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Integer address of a tiled card; `(0, 0)` is the centred origin cell.
/// `y` grows downward like page coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct GridCoord {
    pub x: i32,
    pub y: i32,
}

impl GridCoord {
    pub const ORIGIN: GridCoord = GridCoord { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        GridCoord { x, y }
    }

    /// Shift by a step vector.
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        GridCoord { x: self.x + dx, y: self.y + dy }
    }
}

impl fmt::Display for GridCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mm_try_new_rejects_nan_and_infinity() {
        assert_eq!(Mm::try_new(f64::NAN), Err(NumericError::NaN));
        assert_eq!(Mm::try_new(f64::INFINITY), Err(NumericError::Infinite));
        assert_eq!(Mm::try_new(-3.0), Ok(Mm(-3.0)));
    }

    #[test]
    fn mm_try_positive_rejects_zero_and_negative() {
        assert_eq!(Mm::try_positive(0.0), Err(NumericError::NotPositive));
        assert_eq!(Mm::try_positive(-1.0), Err(NumericError::NotPositive));
        assert_eq!(Mm::try_positive(0.5), Ok(Mm(0.5)));
    }

    #[test]
    fn positive_sides_reject_zero_and_nan() {
        assert!(Size::mm(85.0, 55.0).has_positive_sides());
        assert!(!Size::mm(0.0, 55.0).has_positive_sides());
        assert!(!Size::mm(85.0, -1.0).has_positive_sides());
        assert!(!Size::mm(f64::NAN, 55.0).has_positive_sides());
        assert!(!Size::mm(f64::INFINITY, 55.0).has_positive_sides());
    }

    #[test]
    fn size_contains_is_inclusive() {
        let page = Size::mm(210.0, 297.0);
        assert!(page.contains(DVec2::new(0.0, 0.0)));
        assert!(page.contains(DVec2::new(210.0, 297.0)));
        assert!(!page.contains(DVec2::new(210.000001, 10.0)));
        assert!(!page.contains(DVec2::new(10.0, -0.000001)));
    }

    #[test]
    fn quarter_turn_rotation_vector() {
        let r = Degrees(90.0).rotation();
        assert!(r.x.abs() < 1e-12);
        assert!((r.y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn rgb_displays_as_hex() {
        assert_eq!(Rgb::new(0x99, 0x99, 0x99).to_string(), "#999999");
        assert_eq!(Rgb::WHITE.to_string(), "#ffffff");
    }

    #[test]
    fn grid_coord_offset_and_display() {
        assert_eq!(GridCoord::new(1, 2).offset(-1, 1), GridCoord::new(0, 3));
        assert_eq!(GridCoord::ORIGIN.to_string(), "(0,0)");
    }
}
