//! Statistical inference of encoding parameters from an unlabeled canvas.
//!
//! A true carrier color accumulates LSB-perturbed variants of itself, so
//! among the most frequent colors it has an unusually dense single-bit-flip
//! neighborhood; that picks the carrier. Orientation follows from where the
//! perturbed pixels sit: writing starts at the canonical top-left, so in the
//! correct orientation each column's leading run of untouched carrier pixels
//! is shorter than its trailing run ("top-heaviness"). None of this needs
//! ground truth; a bad guess degrades into garbage output, never an error.

use crate::canvas::{Canvas, Rotation};
use crate::color::{close_colors, Color, FLIP_NEIGHBORHOOD};
use crate::embed::ChannelMask;
use crate::histogram::ColorHistogram;
use crate::orientation::DirectionDescriptor;
use crate::TOP_COLOR_COUNT;

/// Guesses the carrier color, returning it with a tolerance hint.
///
/// Considers the [`TOP_COLOR_COUNT`] most frequent colors and picks the one
/// with the most close colors among them (strict maximum, first wins).
/// The hint is 1.0 when only a single close color was found, √3 otherwise.
/// `None` when no frequent color has any close neighbor at all.
pub fn guess_carrier<C: Canvas>(canvas: &C) -> Option<(Color, f64)> {
    let top = ColorHistogram::of_canvas(canvas).top_k(TOP_COLOR_COUNT);

    let mut guess = None;
    let mut max_close = 0;
    for (color, _) in top.iter() {
        let close = close_colors(&top, color).len();
        if close > max_close {
            max_close = close;
            guess = Some(color);
        }
    }

    let tolerance = if max_close == 1 { 1.0 } else { FLIP_NEIGHBORHOOD };
    guess.map(|color| (color, tolerance))
}

/// 1-D run test: data sits on the left iff the leading run of carrier
/// values is shorter than the trailing run.
fn is_top_heavy(values: &[Color], carrier: Color) -> bool {
    let leading = values.iter().take_while(|&&c| c == carrier).count();
    let trailing = values.iter().rev().take_while(|&&c| c == carrier).count();
    leading < trailing
}

/// Scores how strongly the canvas reads top-to-bottom, in [0, 1].
///
/// Each column collects its pixels within `crypt_dist` of the carrier. A
/// column where every collected pixel equals the carrier exactly carries no
/// signal and scores −3; any other column scores 1 when top-heavy, else 0.
/// The column sum is floored at 0 before averaging, so an image of nothing
/// but untouched carrier scores 0 rather than negative.
pub fn top_heaviness<C: Canvas>(canvas: &C, carrier: Color, crypt_dist: f64) -> f64 {
    let (width, height) = canvas.dimensions();
    if width == 0 {
        return 0.0;
    }

    let mut sum: i64 = 0;
    for x in 0..width {
        let mut column = Vec::new();
        let mut all_zeros = true;
        for y in 0..height {
            let pixel = canvas.get(x, y);
            if carrier.distance(pixel) <= crypt_dist {
                if pixel != carrier {
                    all_zeros = false;
                }
                column.push(pixel);
            }
        }
        sum += if all_zeros {
            -3
        } else {
            is_top_heavy(&column, carrier) as i64
        };
    }

    sum.max(0) as f64 / width as f64
}

/// Tests whether a top-heavy canvas is mirrored, i.e. reads right-to-left.
///
/// Scans down for the first row containing no data-bearing pixel (within
/// tolerance and different from the carrier) and inspects the row above it,
/// the last, typically partially filled, data row. When the very first row
/// is already quiet, or no quiet row exists, the bottom row is inspected
/// instead. The inspected row's in-tolerance pixels are then run through the
/// 1-D test: data hugging the right edge means mirrored.
pub fn is_mirrored<C: Canvas>(canvas: &C, carrier: Color, crypt_dist: f64) -> bool {
    let (width, height) = canvas.dimensions();
    if height == 0 {
        return false;
    }

    let mut row = None;
    for y in 0..height {
        let mut all_zeros = true;
        for x in 0..width {
            let pixel = canvas.get(x, y);
            if carrier.distance(pixel) <= crypt_dist && pixel != carrier {
                all_zeros = false;
                break;
            }
        }
        if all_zeros {
            row = Some(y);
            break;
        }
    }
    let row = match row {
        Some(0) | None => height - 1,
        Some(y) => y - 1,
    };

    let data: Vec<Color> = (0..width)
        .map(|x| canvas.get(x, row))
        .filter(|&pixel| carrier.distance(pixel) <= crypt_dist)
        .collect();

    !is_top_heavy(&data, carrier)
}

/// Guesses the scan direction, inferring the carrier first.
///
/// Falls back to the canonical descriptor when no carrier color stands out.
pub fn guess_direction<C: Canvas>(canvas: &C) -> DirectionDescriptor {
    match guess_carrier(canvas) {
        Some((carrier, crypt_dist)) => guess_direction_with(canvas, carrier, crypt_dist),
        None => DirectionDescriptor::CANONICAL,
    }
}

/// Guesses the scan direction for a known carrier color.
///
/// Scores [`top_heaviness`] under all four rotations (a rotation must beat a
/// score of 0 to be chosen; 0° is the default), then resolves the mirror
/// axis with [`is_mirrored`] on the winning rotation.
pub fn guess_direction_with<C: Canvas>(
    canvas: &C,
    carrier: Color,
    crypt_dist: f64,
) -> DirectionDescriptor {
    const ROTATIONS: [(Rotation, u32); 4] = [
        (Rotation::None, 0),
        (Rotation::Ccw90, 90),
        (Rotation::Ccw180, 180),
        (Rotation::Ccw270, 270),
    ];

    let mut best_score = 0.0;
    let mut best = (Rotation::None, 0);
    for (rotation, degrees) in ROTATIONS {
        let score = top_heaviness(&canvas.rotated(rotation), carrier, crypt_dist);
        if score > best_score {
            best_score = score;
            best = (rotation, degrees);
        }
    }

    let (rotation, degrees) = best;
    let mirrored = is_mirrored(&canvas.rotated(rotation), carrier, crypt_dist);
    if degrees % 180 == 0 {
        DirectionDescriptor::new(true, degrees == 0, !mirrored)
    } else {
        DirectionDescriptor::new(false, !mirrored, degrees == 90)
    }
}

/// Infers which channels carry bits around the guessed carrier.
///
/// A channel is enabled when any close color of the carrier (among the
/// [`TOP_COLOR_COUNT`] most frequent) has that channel's LSB set. The
/// in-pixel bit order cannot be observed, so `reversed` is always false.
pub fn guess_channel_mask<C: Canvas>(canvas: &C, carrier: Color) -> ChannelMask {
    let top = ColorHistogram::of_canvas(canvas).top_k(TOP_COLOR_COUNT);

    let mut mask = ChannelMask::new(false, false, false, false);
    for color in close_colors(&top, carrier) {
        if color.r & 1 == 1 {
            mask.red = true;
        }
        if color.g & 1 == 1 {
            mask.green = true;
        }
        if color.b & 1 == 1 {
            mask.blue = true;
        }
    }
    mask
}
