// SPDX-License-Identifier: MPL-2.0
//! SVG rasterization and tone inversion.
//!
//! SVGs are parsed with usvg and drawn with resvg onto a tiny-skia pixmap
//! scaled to the requested surface. The pixmap's premultiplied pixels are
//! converted to straight RGBA so inversion operates on the visible colour.

use super::IconSize;
use crate::error::{IconError, IconResult};
use image_rs::{ImageFormat, RgbaImage};
use resvg::usvg;
use std::io::Cursor;

/// Straight (non-premultiplied) RGBA8 pixels, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbaRaster {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl RgbaRaster {
    /// Wraps an existing buffer. Returns `None` if its length does not
    /// match `width * height * 4`.
    #[must_use]
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<u8>) -> Option<Self> {
        let expected = (width as usize)
            .checked_mul(height as usize)?
            .checked_mul(4)?;
        (pixels.len() == expected).then_some(Self {
            width,
            height,
            pixels,
        })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    /// RGBA of the pixel at `(x, y)`, or `None` outside the raster.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = (y as usize * self.width as usize + x as usize) * 4;
        let px = &self.pixels[offset..offset + 4];
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Encodes the raster as PNG.
    ///
    /// # Errors
    ///
    /// Returns [`IconError::Encode`] if the encoder rejects the buffer.
    pub fn encode_png(&self) -> IconResult<Vec<u8>> {
        let image = RgbaImage::from_raw(self.width, self.height, self.pixels.clone())
            .ok_or_else(|| IconError::Encode("buffer does not match dimensions".into()))?;
        let mut bytes = Cursor::new(Vec::new());
        image
            .write_to(&mut bytes, ImageFormat::Png)
            .map_err(|e| IconError::Encode(e.to_string()))?;
        Ok(bytes.into_inner())
    }
}

/// Parses `svg` and draws it stretched onto a `size` surface.
///
/// # Errors
///
/// Returns [`IconError::Decode`] for malformed SVG data.
pub fn rasterize(svg: &[u8], size: IconSize) -> IconResult<RgbaRaster> {
    let tree = usvg::Tree::from_data(svg, &usvg::Options::default())
        .map_err(|e| IconError::Decode(e.to_string()))?;

    let (width, height) = (size.width(), size.height());
    let mut pixmap = tiny_skia::Pixmap::new(width, height)
        .ok_or(IconError::Surface { width, height })?;

    let orig_size = tree.size();
    let scale_x = width as f32 / orig_size.width();
    let scale_y = height as f32 / orig_size.height();
    let transform = tiny_skia::Transform::from_scale(scale_x, scale_y);

    resvg::render(&tree, transform, &mut pixmap.as_mut());

    let pixels = pixmap
        .pixels()
        .iter()
        .flat_map(|px| {
            let c = px.demultiply();
            [c.red(), c.green(), c.blue(), c.alpha()]
        })
        .collect();

    Ok(RgbaRaster {
        width,
        height,
        pixels,
    })
}

/// Replaces every pixel's R, G and B with `255 - channel`. Alpha is kept.
pub fn invert_rgb(pixels: &mut [u8]) {
    for px in pixels.chunks_exact_mut(4) {
        px[0] = 255 - px[0];
        px[1] = 255 - px[1];
        px[2] = 255 - px[2];
    }
}
