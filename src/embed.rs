//! LSB embedding and extraction around a carrier color.
//!
//! Writing targets pixels *exactly* equal to the carrier color; reading
//! accepts every pixel within the carrier's tolerance band. The asymmetry is
//! deliberate: writing perturbs carrier pixels away from exact equality, but
//! never by more than one LSB per enabled channel, so every written pixel
//! stays within `√(enabled channels)` of the carrier.

use crate::bits;
use crate::canvas::Canvas;
use crate::color::Color;

/// One of the three color channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    fn get(self, color: Color) -> u8 {
        match self {
            Channel::Red => color.r,
            Channel::Green => color.g,
            Channel::Blue => color.b,
        }
    }

    fn set(self, color: &mut Color, value: u8) {
        match self {
            Channel::Red => color.r = value,
            Channel::Green => color.g = value,
            Channel::Blue => color.b = value,
        }
    }
}

/// Which channels carry payload bits, and in which in-pixel order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelMask {
    pub red: bool,
    pub green: bool,
    pub blue: bool,
    /// Read/write bits in B→G→R order instead of R→G→B.
    pub reversed: bool,
}

impl ChannelMask {
    /// All three channels, natural order.
    pub const RGB: Self = Self { red: true, green: true, blue: true, reversed: false };

    pub const fn new(red: bool, green: bool, blue: bool, reversed: bool) -> Self {
        Self { red, green, blue, reversed }
    }

    pub fn enabled_count(self) -> u32 {
        self.red as u32 + self.green as u32 + self.blue as u32
    }

    fn enables(self, channel: Channel) -> bool {
        match channel {
            Channel::Red => self.red,
            Channel::Green => self.green,
            Channel::Blue => self.blue,
        }
    }

    /// Enabled channels in read/write order.
    pub fn channels(self) -> impl Iterator<Item = Channel> {
        let order = if self.reversed {
            [Channel::Blue, Channel::Green, Channel::Red]
        } else {
            [Channel::Red, Channel::Green, Channel::Blue]
        };
        order.into_iter().filter(move |&channel| self.enables(channel))
    }
}

/// The carrier color together with the channel mask that determines its
/// tolerance band.
#[derive(Debug, Clone, Copy)]
pub struct CarrierSpec {
    pub color: Color,
    pub mask: ChannelMask,
}

impl CarrierSpec {
    pub const fn new(color: Color, mask: ChannelMask) -> Self {
        Self { color, mask }
    }

    /// Maximum distance a written pixel can sit from the carrier:
    /// `√(enabled channel count)`. Exact, not approximate: each enabled
    /// channel moves by at most 1.
    pub fn tolerance(&self) -> f64 {
        (self.mask.enabled_count() as f64).sqrt()
    }
}

/// Embeds `payload_bits` into the canvas in canonical row-major order.
///
/// Each pixel exactly equal to the carrier color consumes up to one bit per
/// enabled channel (clear LSB, then set it to the next bit). After the
/// payload runs out, remaining carrier pixels get their enabled-channel LSBs
/// cleared to zero, so extraction sees zero-padding rather than leftover
/// carrier bits. Pixels that are not exactly the carrier are copied
/// unchanged and never consume bits; excess payload bits are dropped.
///
/// Returns a new canvas of identical dimensions.
pub fn write<C: Canvas>(canvas: &C, payload_bits: &[u8], spec: &CarrierSpec) -> C {
    let (width, height) = canvas.dimensions();
    let mut output = C::blank(width, height);
    let mut bit_index = 0;

    for y in 0..height {
        for x in 0..width {
            let mut pixel = canvas.get(x, y);
            if pixel == spec.color {
                for channel in spec.mask.channels() {
                    let bit = if bit_index < payload_bits.len() {
                        let bit = payload_bits[bit_index];
                        bit_index += 1;
                        bit
                    } else {
                        0
                    };
                    let value = (channel.get(pixel) & !1) | bit;
                    channel.set(&mut pixel, value);
                }
            }
            output.set(x, y, pixel);
        }
    }

    output
}

/// Extracts the embedded byte stream in canonical row-major order.
///
/// Every pixel within the carrier's tolerance band contributes its
/// enabled-channel LSBs; all other pixels are skipped. The bit accumulator
/// is zero-padded up to a byte boundary.
pub fn read<C: Canvas>(canvas: &C, spec: &CarrierSpec) -> Vec<u8> {
    let (width, height) = canvas.dimensions();
    let tolerance = spec.tolerance();
    let mut payload_bits = Vec::new();

    for y in 0..height {
        for x in 0..width {
            let pixel = canvas.get(x, y);
            if spec.color.distance(pixel) <= tolerance {
                for channel in spec.mask.channels() {
                    payload_bits.push(channel.get(pixel) & 1);
                }
            }
        }
    }

    bits::bits_to_bytes(&payload_bits)
}

/// Payload capacity in whole bytes: exact-carrier pixels × enabled channels,
/// divided by 8. Callers that need a full-payload guarantee check this
/// before calling [`write`].
pub fn capacity<C: Canvas>(canvas: &C, spec: &CarrierSpec) -> usize {
    let (width, height) = canvas.dimensions();
    let mut carrier_pixels = 0usize;
    for y in 0..height {
        for x in 0..width {
            if canvas.get(x, y) == spec.color {
                carrier_pixels += 1;
            }
        }
    }
    carrier_pixels * spec.mask.enabled_count() as usize / 8
}
