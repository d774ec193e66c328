//! Colorveil - hide bytes behind a color
//!
//! CLI for carrier-color LSB steganography. Encoding needs the carrier
//! color, channel selection, and reading direction; decoding takes the same
//! parameters or infers all of them from pixel statistics with `--auto`.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use colorveil::{
    capacity, decode_auto_with_config, decode_with_config, encode_with_config, guess_carrier,
    guess_channel_mask, guess_direction_with, CarrierSpec, ChannelMask, Color,
    DecodeParams, DecoderConfig, DirectionDescriptor, EncodeParams, EncoderConfig, ImageCanvas,
};

/// Colorveil - hide bytes behind a color
///
/// Hides a payload in the LSBs of pixels matching a chosen carrier color.
/// Use a lossless output format (PNG, BMP); lossy re-encoding destroys the
/// embedded bits.
#[derive(Parser)]
#[command(name = "colorveil")]
#[command(version)]
#[command(about = "Carrier-color LSB steganography with parameter auto-detection")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Embed a payload into an image around the carrier color
    Encode {
        /// Input image path
        #[arg(short, long)]
        image: PathBuf,

        /// Output image path (use a lossless format such as .png)
        #[arg(short, long)]
        output: PathBuf,

        /// Text payload (mutually exclusive with --file)
        #[arg(short, long, conflicts_with = "file")]
        message: Option<String>,

        /// Binary payload file (mutually exclusive with --message)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Carrier color as "R,G,B" (each 0-255)
        #[arg(short, long)]
        carrier: String,

        /// Channels that carry bits, any subset of "rgb"
        #[arg(long, default_value = "rgb")]
        channels: String,

        /// Write bits in B,G,R order within each pixel
        #[arg(long)]
        reversed: bool,

        /// Scan columns before rows
        #[arg(long)]
        vertical: bool,

        /// Scan rows bottom to top
        #[arg(long)]
        bottom_up: bool,

        /// Scan pixels right to left
        #[arg(long)]
        right_to_left: bool,

        /// Verbose output (capacity diagnostics)
        #[arg(short, long)]
        verbose: bool,
    },

    /// Extract a payload from an image
    Decode {
        /// Stego image path
        #[arg(short, long)]
        image: PathBuf,

        /// Output file for the payload; without it, prints lossy UTF-8
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Infer carrier color, direction, and channels statistically
        #[arg(short, long, conflicts_with_all = ["carrier", "channels", "reversed", "vertical", "bottom_up", "right_to_left"])]
        auto: bool,

        /// Carrier color as "R,G,B" (each 0-255)
        #[arg(short, long, required_unless_present = "auto")]
        carrier: Option<String>,

        /// Channels that carry bits, any subset of "rgb"
        #[arg(long, default_value = "rgb")]
        channels: String,

        /// Read bits in B,G,R order within each pixel
        #[arg(long)]
        reversed: bool,

        /// Scan columns before rows
        #[arg(long)]
        vertical: bool,

        /// Scan rows bottom to top
        #[arg(long)]
        bottom_up: bool,

        /// Scan pixels right to left
        #[arg(long)]
        right_to_left: bool,

        /// Verbose output (guessed parameters)
        #[arg(short, long)]
        verbose: bool,
    },

    /// Show what auto-detection would guess for an image
    Inspect {
        /// Image path
        #[arg(short, long)]
        image: PathBuf,
    },
}

fn parse_carrier(value: &str) -> Result<Color> {
    let parts: Vec<&str> = value.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        bail!("Carrier color must be \"R,G,B\", got \"{value}\"");
    }
    let channel = |i: usize| -> Result<u8> {
        parts[i]
            .parse()
            .with_context(|| format!("Invalid channel value \"{}\" (expected 0-255)", parts[i]))
    };
    Ok(Color::new(channel(0)?, channel(1)?, channel(2)?))
}

fn parse_channels(value: &str, reversed: bool) -> Result<ChannelMask> {
    let mut mask = ChannelMask::new(false, false, false, reversed);
    for c in value.chars() {
        match c.to_ascii_lowercase() {
            'r' => mask.red = true,
            'g' => mask.green = true,
            'b' => mask.blue = true,
            other => bail!("Unknown channel '{other}' (expected a subset of \"rgb\")"),
        }
    }
    if mask.enabled_count() == 0 {
        bail!("At least one channel must be enabled");
    }
    Ok(mask)
}

fn direction_from_flags(vertical: bool, bottom_up: bool, right_to_left: bool) -> DirectionDescriptor {
    DirectionDescriptor::new(!vertical, !bottom_up, !right_to_left)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Encode {
            image,
            output,
            message,
            file,
            carrier,
            channels,
            reversed,
            vertical,
            bottom_up,
            right_to_left,
            verbose,
        } => {
            let payload = match (message, file) {
                (Some(text), None) => text.into_bytes(),
                (None, Some(path)) => fs::read(&path)
                    .with_context(|| format!("Failed to read payload file {}", path.display()))?,
                _ => bail!("Provide a payload with --message or --file"),
            };

            let canvas = ImageCanvas::from_file(&image)
                .with_context(|| format!("Failed to load image {}", image.display()))?;

            let params = EncodeParams {
                direction: direction_from_flags(vertical, bottom_up, right_to_left),
                carrier: CarrierSpec::new(parse_carrier(&carrier)?, parse_channels(&channels, reversed)?),
            };
            let config = EncoderConfig { verbose };

            let stego = encode_with_config(&canvas, &payload, &params, &config);
            stego
                .save(&output)
                .with_context(|| format!("Failed to save image {}", output.display()))?;

            println!("Embedded {} bytes into {}", payload.len(), output.display());
        }

        Commands::Decode {
            image,
            output,
            auto,
            carrier,
            channels,
            reversed,
            vertical,
            bottom_up,
            right_to_left,
            verbose,
        } => {
            let canvas = ImageCanvas::from_file(&image)
                .with_context(|| format!("Failed to load image {}", image.display()))?;
            let config = DecoderConfig { verbose };

            let payload = if auto {
                decode_auto_with_config(&canvas, &config)
            } else {
                let Some(carrier) = carrier else {
                    bail!("Provide --carrier or use --auto");
                };
                let params = DecodeParams {
                    direction: direction_from_flags(vertical, bottom_up, right_to_left),
                    carrier: CarrierSpec::new(
                        parse_carrier(&carrier)?,
                        parse_channels(&channels, reversed)?,
                    ),
                };
                decode_with_config(&canvas, &params, &config)
            };

            match output {
                Some(path) => {
                    fs::write(&path, &payload)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    println!("Wrote {} bytes to {}", payload.len(), path.display());
                }
                None => println!("{}", String::from_utf8_lossy(&payload)),
            }
        }

        Commands::Inspect { image } => {
            let canvas = ImageCanvas::from_file(&image)
                .with_context(|| format!("Failed to load image {}", image.display()))?;

            match guess_carrier(&canvas) {
                Some((color, tolerance)) => {
                    let direction = guess_direction_with(&canvas, color, tolerance);
                    let mask = guess_channel_mask(&canvas, color);
                    let spec = CarrierSpec::new(color, mask);

                    println!("Carrier color:  {color} (tolerance {tolerance:.3})");
                    println!(
                        "Direction:      horizontal-first={} top-to-bottom={} left-to-right={}",
                        direction.horiz_first, direction.top_to_bottom, direction.left_to_right
                    );
                    println!(
                        "Channels:       r={} g={} b={}",
                        mask.red, mask.green, mask.blue
                    );
                    println!("Capacity:       {} bytes", capacity(&canvas, &spec));
                }
                None => println!("No carrier color stands out in this image"),
            }
        }
    }

    Ok(())
}
