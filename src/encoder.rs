//! Payload embedding workflow.
//!
//! Encoding reorients the canvas onto the canonical scan, writes the payload
//! bits around the carrier color, and puts the caller's orientation back:
//! canonicalize → write → restore.

use crate::bits::bytes_to_bits;
use crate::canvas::Canvas;
use crate::embed::{self, CarrierSpec};
use crate::orientation::{canonicalize, restore, DirectionDescriptor};

/// Everything [`encode`] needs besides the canvas and the payload.
#[derive(Debug, Clone, Copy)]
pub struct EncodeParams {
    /// The scan order the stego image should be read in.
    pub direction: DirectionDescriptor,
    pub carrier: CarrierSpec,
}

/// Configuration for the encoder.
#[derive(Debug, Clone, Default)]
pub struct EncoderConfig {
    /// Whether to emit diagnostics on stderr.
    pub verbose: bool,
}

/// Encodes `payload` into the canvas around the carrier color.
pub fn encode<C: Canvas>(canvas: &C, payload: &[u8], params: &EncodeParams) -> C {
    encode_with_config(canvas, payload, params, &EncoderConfig::default())
}

/// Encodes a payload with custom configuration.
///
/// Never fails: a payload longer than the carrier capacity is silently
/// truncated, and a canvas without carrier-colored pixels comes back with
/// nothing embedded. Callers needing a full-payload guarantee check
/// [`embed::capacity`] on the canonicalized canvas first.
pub fn encode_with_config<C: Canvas>(
    canvas: &C,
    payload: &[u8],
    params: &EncodeParams,
    config: &EncoderConfig,
) -> C {
    let canonical = canonicalize(canvas, params.direction);

    if config.verbose {
        let capacity = embed::capacity(&canonical, &params.carrier);
        eprintln!("Embedding {} bytes (capacity {} bytes)", payload.len(), capacity);
        if payload.len() > capacity {
            eprintln!("Payload exceeds capacity, the tail will be dropped");
        }
    }

    let written = embed::write(&canonical, &bytes_to_bits(payload), &params.carrier);
    restore(&written, params.direction)
}
