//! Payload extraction workflow, manual and automatic.
//!
//! Manual decoding canonicalizes with caller-supplied parameters and reads.
//! Automatic decoding first infers carrier color, scan direction, and
//! channel mask from pixel statistics, then runs the same path. Neither
//! variant fails: wrong or unguessable parameters produce empty or garbage
//! output rather than an error.

use crate::canvas::Canvas;
use crate::detect;
use crate::embed::{self, CarrierSpec};
use crate::orientation::{canonicalize, DirectionDescriptor};

/// Everything [`decode`] needs besides the canvas. Identical in shape to
/// the encode parameters; decoding must be told (or guess) the same values.
#[derive(Debug, Clone, Copy)]
pub struct DecodeParams {
    pub direction: DirectionDescriptor,
    pub carrier: CarrierSpec,
}

/// Configuration for the decoder.
#[derive(Debug, Clone, Default)]
pub struct DecoderConfig {
    /// Whether to emit diagnostics on stderr.
    pub verbose: bool,
}

/// Decodes the payload with caller-supplied parameters.
pub fn decode<C: Canvas>(canvas: &C, params: &DecodeParams) -> Vec<u8> {
    decode_with_config(canvas, params, &DecoderConfig::default())
}

/// Decodes a payload with custom configuration.
pub fn decode_with_config<C: Canvas>(
    canvas: &C,
    params: &DecodeParams,
    _config: &DecoderConfig,
) -> Vec<u8> {
    let canonical = canonicalize(canvas, params.direction);
    embed::read(&canonical, &params.carrier)
}

/// Decodes with every parameter inferred from pixel statistics.
pub fn decode_auto<C: Canvas>(canvas: &C) -> Vec<u8> {
    decode_auto_with_config(canvas, &DecoderConfig::default())
}

/// Automatic decode with custom configuration.
///
/// Returns empty bytes when no carrier color stands out; wrong guesses
/// return garbage. The in-pixel bit order cannot be inferred, so the
/// channel mask is always applied in R→G→B order.
pub fn decode_auto_with_config<C: Canvas>(canvas: &C, config: &DecoderConfig) -> Vec<u8> {
    let Some((carrier, crypt_dist)) = detect::guess_carrier(canvas) else {
        if config.verbose {
            eprintln!("No carrier color stands out, returning empty payload");
        }
        return Vec::new();
    };

    let direction = detect::guess_direction_with(canvas, carrier, crypt_dist);
    let mask = detect::guess_channel_mask(canvas, carrier);

    if config.verbose {
        eprintln!(
            "Guessed carrier {}, direction {:?}, channels r={} g={} b={}",
            carrier, direction, mask.red, mask.green, mask.blue
        );
    }

    let params = DecodeParams { direction, carrier: CarrierSpec::new(carrier, mask) };
    decode_with_config(canvas, &params, config)
}
