//! Multi-page TIFF reader.
//!
//! Decodes every frame (IFD) of a TIFF file into an RGB8 buffer, in stored
//! page order. Grayscale, RGB, and RGBA sources at 8 and 16 bits per sample
//! go through `image::DynamicImage` for the color conversion; palette
//! (indexed) frames are expanded via the ColorMap tag and CMYK frames are
//! converted with the standard subtractive formula. The conversion to RGB is
//! lossy for palette/CMYK/grayscale sources.

use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;

use image::{DynamicImage, ImageBuffer, RgbImage};
use thiserror::Error;
use tiff::ColorType;
use tiff::decoder::{Decoder, DecodingResult};
use tiff::tags::Tag;
use tracing::debug;

#[derive(Debug, Error)]
pub enum TiffError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TIFF decode error: {0}")]
    Decode(#[from] tiff::TiffError),

    #[error("Unsupported TIFF color type: {0:?}")]
    UnsupportedColorType(ColorType),

    #[error("Frame buffer does not match {width}x{height} dimensions")]
    BufferSize { width: u32, height: u32 },

    #[error("Palette index {index} outside ColorMap of {len} entries")]
    PaletteIndex { index: usize, len: usize },
}

/// A decoded multi-page TIFF: an ordered sequence of RGB8 frames.
///
/// All frames are decoded eagerly on `open`; the reader owns its frames and
/// is released once the corresponding PDF has been written.
#[derive(Debug)]
pub struct TiffReader {
    frames: Vec<RgbImage>,
}

impl TiffReader {
    /// Decode every frame of the TIFF at `path`, in stored page order.
    pub fn open(path: &Path) -> Result<Self, TiffError> {
        let file = File::open(path)?;
        let mut decoder = Decoder::new(BufReader::new(file))?;

        let mut frames = Vec::new();
        loop {
            frames.push(decode_frame(&mut decoder)?);
            if !decoder.more_images() {
                break;
            }
            decoder.next_image()?;
        }

        debug!(path = %path.display(), pages = frames.len(), "Decoded TIFF");
        Ok(Self { frames })
    }

    pub fn page_count(&self) -> usize {
        self.frames.len()
    }

    pub fn frames(&self) -> &[RgbImage] {
        &self.frames
    }

    pub fn into_frames(self) -> Vec<RgbImage> {
        self.frames
    }
}

/// Decode the decoder's current frame and convert it to RGB8.
fn decode_frame<R: Read + Seek>(decoder: &mut Decoder<R>) -> Result<RgbImage, TiffError> {
    let (width, height) = decoder.dimensions()?;
    let color = decoder.colortype()?;

    let size_err = || TiffError::BufferSize { width, height };

    let dynamic = match (color, decoder.read_image()?) {
        (ColorType::Gray(8), DecodingResult::U8(buf)) => DynamicImage::ImageLuma8(
            ImageBuffer::from_raw(width, height, buf).ok_or_else(size_err)?,
        ),
        (ColorType::Gray(16), DecodingResult::U16(buf)) => DynamicImage::ImageLuma16(
            ImageBuffer::from_raw(width, height, buf).ok_or_else(size_err)?,
        ),
        (ColorType::GrayA(8), DecodingResult::U8(buf)) => DynamicImage::ImageLumaA8(
            ImageBuffer::from_raw(width, height, buf).ok_or_else(size_err)?,
        ),
        (ColorType::GrayA(16), DecodingResult::U16(buf)) => DynamicImage::ImageLumaA16(
            ImageBuffer::from_raw(width, height, buf).ok_or_else(size_err)?,
        ),
        (ColorType::RGB(8), DecodingResult::U8(buf)) => DynamicImage::ImageRgb8(
            ImageBuffer::from_raw(width, height, buf).ok_or_else(size_err)?,
        ),
        (ColorType::RGB(16), DecodingResult::U16(buf)) => DynamicImage::ImageRgb16(
            ImageBuffer::from_raw(width, height, buf).ok_or_else(size_err)?,
        ),
        (ColorType::RGBA(8), DecodingResult::U8(buf)) => DynamicImage::ImageRgba8(
            ImageBuffer::from_raw(width, height, buf).ok_or_else(size_err)?,
        ),
        (ColorType::RGBA(16), DecodingResult::U16(buf)) => DynamicImage::ImageRgba16(
            ImageBuffer::from_raw(width, height, buf).ok_or_else(size_err)?,
        ),
        (ColorType::Palette(8), DecodingResult::U8(buf)) => {
            let colormap = decoder.get_tag_u16_vec(Tag::ColorMap)?;
            return expand_palette(width, height, &buf, &colormap);
        }
        (ColorType::CMYK(8), DecodingResult::U8(buf)) => {
            return cmyk_to_rgb(width, height, &buf);
        }
        (color, _) => return Err(TiffError::UnsupportedColorType(color)),
    };

    Ok(dynamic.to_rgb8())
}

/// Expand 8-bit palette indices using the TIFF ColorMap tag.
///
/// The ColorMap stores all red values, then all green, then all blue, each as
/// a 16-bit quantity; the high byte carries the 8-bit color.
fn expand_palette(
    width: u32,
    height: u32,
    indices: &[u8],
    colormap: &[u16],
) -> Result<RgbImage, TiffError> {
    let entries = colormap.len() / 3;
    let (reds, rest) = colormap.split_at(entries);
    let (greens, blues) = rest.split_at(entries);

    let mut rgb = Vec::with_capacity(indices.len() * 3);
    for &index in indices {
        let i = index as usize;
        if i >= entries {
            return Err(TiffError::PaletteIndex {
                index: i,
                len: entries,
            });
        }
        rgb.push((reds[i] >> 8) as u8);
        rgb.push((greens[i] >> 8) as u8);
        rgb.push((blues[i] >> 8) as u8);
    }

    RgbImage::from_raw(width, height, rgb).ok_or(TiffError::BufferSize { width, height })
}

/// Convert interleaved 8-bit CMYK samples to RGB.
fn cmyk_to_rgb(width: u32, height: u32, samples: &[u8]) -> Result<RgbImage, TiffError> {
    if samples.len() != width as usize * height as usize * 4 {
        return Err(TiffError::BufferSize { width, height });
    }

    let mut rgb = Vec::with_capacity(width as usize * height as usize * 3);
    for px in samples.chunks_exact(4) {
        let (c, m, y, k) = (px[0] as u32, px[1] as u32, px[2] as u32, px[3] as u32);
        rgb.push(((255 - c) * (255 - k) / 255) as u8);
        rgb.push(((255 - m) * (255 - k) / 255) as u8);
        rgb.push(((255 - y) * (255 - k) / 255) as u8);
    }

    RgbImage::from_raw(width, height, rgb).ok_or(TiffError::BufferSize { width, height })
}
