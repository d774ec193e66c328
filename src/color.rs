//! Color value type and nearest-color metrics.
//!
//! All comparisons use plain Euclidean distance in RGB space. The radius
//! [`FLIP_NEIGHBORHOOD`] (√3) is the farthest a pixel can move when up to
//! three channel LSBs are flipped, and is the base tolerance for every
//! "looks like the carrier" query in the crate.

use crate::histogram::ColorHistogram;

/// Maximum distance reachable by flipping up to three channel LSBs (√3).
pub const FLIP_NEIGHBORHOOD: f64 = 1.732_050_807_568_877_2;

/// An exact RGB triplet. Alpha is never carried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Euclidean distance to another color in RGB space.
    ///
    /// Symmetric, and zero exactly when the colors are equal.
    pub fn distance(self, other: Color) -> f64 {
        let dr = self.r as f64 - other.r as f64;
        let dg = self.g as f64 - other.g as f64;
        let db = self.b as f64 - other.b as f64;
        (dr * dr + dg * dg + db * db).sqrt()
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Finds the histogram color closest to `target`, skipping `target` itself.
///
/// Ties keep the last candidate seen in histogram order. Returns `None` when
/// the histogram holds no other color.
pub fn find_closest(histogram: &ColorHistogram, target: Color) -> Option<Color> {
    // start above the largest possible distance so any real color qualifies
    let mut min = Color::new(0, 0, 0).distance(Color::new(255, 255, 255)) + 1.0;
    let mut closest = None;

    for (color, _) in histogram.iter() {
        let distance = target.distance(color);
        if distance <= min && distance != 0.0 {
            min = distance;
            closest = Some(color);
        }
    }

    closest
}

/// All histogram colors within the single-bit-flip neighborhood of `target`,
/// i.e. at distance in (0, √3], in histogram order.
pub fn close_colors(histogram: &ColorHistogram, target: Color) -> Vec<Color> {
    histogram
        .iter()
        .map(|(color, _)| color)
        .filter(|&color| {
            let distance = target.distance(color);
            distance > 0.0 && distance <= FLIP_NEIGHBORHOOD
        })
        .collect()
}
