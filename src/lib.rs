//! # Colorveil - hide bytes behind a color
//!
//! Colorveil hides an arbitrary byte payload in the least-significant color
//! bits of an image, using a single chosen "carrier" color as camouflage,
//! and can recover the encoding parameters from pixel statistics alone.
//!
//! ## Overview
//!
//! - Pixels exactly matching the carrier color absorb payload bits, one per
//!   enabled channel, in a canonical top-left row-major scan.
//! - The stego image may be handed over in any of 8 reading directions
//!   (rows or columns first, either polarity per axis); a small orientation
//!   algebra maps each onto the canonical scan and back.
//! - Decoding either takes the same parameters, or infers carrier color,
//!   direction, and channel mask statistically: the carrier is the frequent
//!   color with the densest cloud of one-bit-flip variants, and the scan
//!   direction is whichever rotation concentrates those variants at the top.
//!
//! No header, length, or checksum is embedded: the stego image is a plain
//! pixel grid with no reserved markers, and extraction zero-pads up to a
//! byte boundary.
//!
//! ## Example
//!
//! ```rust
//! use colorveil::{
//!     decode, encode, Canvas, CarrierSpec, ChannelMask, Color, DecodeParams,
//!     DirectionDescriptor, EncodeParams, ImageCanvas,
//! };
//!
//! // a canvas dominated by the carrier color
//! let carrier = Color::new(40, 90, 160);
//! let mut canvas = ImageCanvas::blank(64, 64);
//! for y in 0..64 {
//!     for x in 0..64 {
//!         canvas.set(x, y, carrier);
//!     }
//! }
//!
//! let params = EncodeParams {
//!     direction: DirectionDescriptor::CANONICAL,
//!     carrier: CarrierSpec::new(carrier, ChannelMask::RGB),
//! };
//! let stego = encode(&canvas, b"meet at dawn", &params);
//!
//! let recovered = decode(
//!     &stego,
//!     &DecodeParams { direction: params.direction, carrier: params.carrier },
//! );
//! assert_eq!(&recovered[..12], b"meet at dawn");
//! ```
//!
//! ## Modules
//!
//! - [`color`]: color distances and nearest-color queries
//! - [`histogram`]: pixel frequency extraction and top-K ranking
//! - [`bits`]: byte-stream ↔ bit-stream conversion
//! - [`canvas`]: the pixel-grid capability and its `image`-backed adapter
//! - [`orientation`]: scan-direction normalization
//! - [`embed`]: the LSB write/read engine
//! - [`detect`]: statistical parameter inference
//! - [`encoder`] / [`decoder`]: the end-to-end workflows

/// How many of the most frequent colors auto-detection considers.
pub const TOP_COLOR_COUNT: usize = 30;

pub mod bits;
pub mod canvas;
pub mod color;
pub mod decoder;
pub mod detect;
pub mod embed;
pub mod encoder;
pub mod histogram;
pub mod orientation;

// Re-export commonly used types at the crate root
pub use canvas::{Canvas, CanvasError, ImageCanvas, Rotation};
pub use color::{close_colors, find_closest, Color, FLIP_NEIGHBORHOOD};
pub use decoder::{
    decode, decode_auto, decode_auto_with_config, decode_with_config, DecodeParams, DecoderConfig,
};
pub use detect::{
    guess_carrier, guess_channel_mask, guess_direction, guess_direction_with, top_heaviness,
};
pub use embed::{capacity, CarrierSpec, Channel, ChannelMask};
pub use encoder::{encode, encode_with_config, EncodeParams, EncoderConfig};
pub use histogram::ColorHistogram;
pub use orientation::{canonicalize, restore, DirectionDescriptor};
