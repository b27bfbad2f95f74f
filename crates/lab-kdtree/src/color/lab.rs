//! CIELAB perceptual color space
//!
//! CIELAB (CIE 1976 L*a*b*) is the coordinate space the index is keyed on:
//! Euclidean distance between two CIELAB coordinates approximates the
//! perceived difference between the colors.
//!
//! # References
//!
//! CIE 15:2004 Colorimetry; IEC 61966-2-1 for the sRGB transfer function.

use super::srgb::Srgb;

/// D65 reference white tristimulus values, scaled so Y = 100.
const WHITE_X: f64 = 95.047;
const WHITE_Y: f64 = 100.0;
const WHITE_Z: f64 = 108.883;

/// CIE constants as exact rationals (216/24389 and 24389/27).
const EPSILON: f64 = 216.0 / 24389.0;
const KAPPA: f64 = 24389.0 / 27.0;

/// A color in CIELAB perceptual color space.
///
/// CIELAB provides approximately uniform distances: equal numerical
/// differences correspond to roughly equal perceived differences. The
/// index stores catalog entries as CIELAB coordinates and answers
/// nearest-neighbor queries under Euclidean distance in this space.
///
/// # Components
///
/// - `l`: Lightness (0.0 = black, 100.0 = white for in-gamut colors)
/// - `a`: Green-red axis (negative = green, positive = red)
/// - `b`: Blue-yellow axis (negative = blue, positive = yellow)
///
/// # Note
///
/// Values are not clamped or validated here; the tree rejects non-finite
/// coordinates at construction and query time instead.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CieLab {
    /// Lightness: 0.0 (black) to 100.0 (white) for in-gamut colors
    pub l: f64,
    /// Green-red axis: roughly -128.0..=127.0 for sRGB inputs
    pub a: f64,
    /// Blue-yellow axis: roughly -128.0..=127.0 for sRGB inputs
    pub b: f64,
}

impl CieLab {
    /// Create a new CieLab color.
    #[inline]
    pub fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Read access by axis index: 0 = L, 1 = a, anything else = b.
    ///
    /// This is the per-axis view the tree uses while cycling through
    /// dimensions with depth.
    #[inline]
    pub fn component(self, axis: usize) -> f64 {
        match axis {
            0 => self.l,
            1 => self.a,
            _ => self.b,
        }
    }

    /// Euclidean distance to another CIELAB coordinate.
    ///
    /// This is the perceptual difference metric the index minimizes.
    ///
    /// # Example
    ///
    /// ```
    /// use lab_kdtree::CieLab;
    ///
    /// let black = CieLab::new(0.0, 0.0, 0.0);
    /// let white = CieLab::new(100.0, 0.0, 0.0);
    /// assert_eq!(black.distance(white), 100.0);
    /// ```
    #[inline]
    pub fn distance(self, other: CieLab) -> f64 {
        let dl = self.l - other.l;
        let da = self.a - other.a;
        let db = self.b - other.b;
        (dl * dl + da * da + db * db).sqrt()
    }

    /// Whether all three components are finite (not NaN or infinite).
    ///
    /// Non-finite components break both the ordering used for median
    /// splits and the distance comparison, so the tree rejects them.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.l.is_finite() && self.a.is_finite() && self.b.is_finite()
    }
}

/// CIE XYZ tristimulus values (D65, Y scaled to 100).
///
/// Conversion intermediate between sRGB and CIELAB; not part of the
/// public API.
struct Xyz {
    x: f64,
    y: f64,
    z: f64,
}

/// IEC 61966-2-1 transfer function: gamma-decode one sRGB channel to
/// linear light.
fn srgb_channel_to_linear(c: f64) -> f64 {
    if c > 0.04045 {
        ((c + 0.055) / 1.055).powf(2.4)
    } else {
        c / 12.92
    }
}

fn srgb_to_xyz(srgb: Srgb) -> Xyz {
    let r = srgb_channel_to_linear(srgb.r);
    let g = srgb_channel_to_linear(srgb.g);
    let b = srgb_channel_to_linear(srgb.b);

    // Linear sRGB to XYZ, D65 (rows sum to the reference white)
    Xyz {
        x: (0.4124564 * r + 0.3575761 * g + 0.1804375 * b) * 100.0,
        y: (0.2126729 * r + 0.7151522 * g + 0.0721750 * b) * 100.0,
        z: (0.0193339 * r + 0.1191920 * g + 0.9503041 * b) * 100.0,
    }
}

/// CIELAB forward companding of one normalized tristimulus value.
fn lab_f(t: f64) -> f64 {
    if t > EPSILON {
        t.cbrt()
    } else {
        (KAPPA * t + 16.0) / 116.0
    }
}

impl From<Srgb> for CieLab {
    /// Convert an sRGB color to CIELAB via XYZ under the D65 illuminant.
    ///
    /// Deterministic: equal inputs always produce equal coordinates.
    ///
    /// # Example
    ///
    /// ```
    /// use lab_kdtree::{CieLab, Srgb};
    ///
    /// let black = CieLab::from(Srgb::from_u8(0, 0, 0));
    /// assert!(black.l.abs() < 1e-9);
    ///
    /// let white = CieLab::from(Srgb::from_u8(255, 255, 255));
    /// assert!((white.l - 100.0).abs() < 1e-4);
    /// assert!(white.a.abs() < 1e-3 && white.b.abs() < 1e-3);
    /// ```
    fn from(srgb: Srgb) -> Self {
        let xyz = srgb_to_xyz(srgb);

        let fx = lab_f(xyz.x / WHITE_X);
        let fy = lab_f(xyz.y / WHITE_Y);
        let fz = lab_f(xyz.z / WHITE_Z);

        CieLab {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }
}
