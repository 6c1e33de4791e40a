//! Image surface capability and raster backend

use std::path::Path;

use image::{ColorType, DynamicImage, Rgba};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;
use sanipass_core::{Color, RedactionRegion};

use crate::Result;

/// Pixel buffer that redactions are drawn onto.
///
/// Backends are chosen at construction; the applicator and aggregate only
/// depend on this trait.
pub trait Surface: Send {
    /// Decode the image at `path`
    fn open(path: &Path) -> Result<Self>
    where
        Self: Sized;

    fn dimensions(&self) -> (u32, u32);

    /// Whether the color mode carries an alpha channel
    fn has_alpha(&self) -> bool;

    /// Drop the alpha channel so later drawing cannot composite translucently
    fn make_opaque(&mut self);

    /// Draw `region` grown by `border_width + border_padding` on every side.
    ///
    /// `fill` covers the whole grown rectangle; `outline` is a ring of
    /// `border_width` pixels along its outer edge. Drawing is clipped to the
    /// image.
    fn draw_rectangle(
        &mut self,
        region: &RedactionRegion,
        outline: Option<Color>,
        fill: Option<Color>,
        border_width: u32,
        border_padding: u32,
    );

    /// Encode to `path`, format chosen from the extension
    fn save(&self, path: &Path) -> Result<()>;
}

/// Inclusive integer pixel bounds of a region.
///
/// Left/top round down and right/bottom round up, so fractional regions are
/// always fully covered. Bounds are not clipped to any image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub x0: i64,
    pub y0: i64,
    pub x1: i64,
    pub y1: i64,
}

impl PixelRect {
    pub fn from_region(region: &RedactionRegion) -> Self {
        Self {
            x0: region.left.floor() as i64,
            y0: region.top.floor() as i64,
            x1: region.right.ceil() as i64,
            y1: region.bottom.ceil() as i64,
        }
    }

    pub fn width(&self) -> u64 {
        (self.x1 - self.x0 + 1).max(0) as u64
    }

    pub fn height(&self) -> u64 {
        (self.y1 - self.y0 + 1).max(0) as u64
    }

    /// Intersection with a `width` x `height` image; None when disjoint
    pub fn clip(&self, width: u32, height: u32) -> Option<Self> {
        let clipped = Self {
            x0: self.x0.max(0),
            y0: self.y0.max(0),
            x1: self.x1.min(i64::from(width) - 1),
            y1: self.y1.min(i64::from(height) - 1),
        };
        (clipped.x0 <= clipped.x1 && clipped.y0 <= clipped.y1).then_some(clipped)
    }

    /// Top, bottom, left and right bands of a `border_width` ring along the
    /// outer edge. Bands overlap at the corners and cover the whole rect once
    /// the ring is wider than half of it.
    pub fn ring(&self, border_width: u32) -> [Self; 4] {
        let inset = i64::from(border_width) - 1;
        [
            Self {
                y1: (self.y0 + inset).min(self.y1),
                ..*self
            },
            Self {
                y0: (self.y1 - inset).max(self.y0),
                ..*self
            },
            Self {
                x1: (self.x0 + inset).min(self.x1),
                ..*self
            },
            Self {
                x0: (self.x1 - inset).max(self.x0),
                ..*self
            },
        ]
    }

    /// Only valid once clipped to an image
    fn to_rect(self) -> Rect {
        Rect::at(self.x0 as i32, self.y0 as i32).of_size(self.width() as u32, self.height() as u32)
    }
}

/// In-memory raster backed by the `image` crate, drawn with `imageproc`
#[derive(Debug, Clone)]
pub struct RasterSurface {
    image: DynamicImage,
}

impl RasterSurface {
    pub fn from_image(image: DynamicImage) -> Self {
        Self { image }
    }

    pub fn image(&self) -> &DynamicImage {
        &self.image
    }

    pub fn into_image(self) -> DynamicImage {
        self.image
    }
}

impl Surface for RasterSurface {
    fn open(path: &Path) -> Result<Self> {
        let image = image::open(path)?;
        tracing::debug!(
            "Opened {} ({}x{}, {:?})",
            path.display(),
            image.width(),
            image.height(),
            image.color()
        );
        Ok(Self { image })
    }

    fn dimensions(&self) -> (u32, u32) {
        (self.image.width(), self.image.height())
    }

    fn has_alpha(&self) -> bool {
        self.image.color().has_alpha()
    }

    fn make_opaque(&mut self) {
        if !self.has_alpha() {
            return;
        }

        self.image = match self.image.color() {
            ColorType::La8 => DynamicImage::ImageLuma8(self.image.to_luma8()),
            ColorType::La16 => DynamicImage::ImageLuma16(self.image.to_luma16()),
            ColorType::Rgba16 => DynamicImage::ImageRgb16(self.image.to_rgb16()),
            ColorType::Rgba32F => DynamicImage::ImageRgb32F(self.image.to_rgb32f()),
            _ => DynamicImage::ImageRgb8(self.image.to_rgb8()),
        };
    }

    fn draw_rectangle(
        &mut self,
        region: &RedactionRegion,
        outline: Option<Color>,
        fill: Option<Color>,
        border_width: u32,
        border_padding: u32,
    ) {
        let grown = region.inflate(f64::from(border_width) + f64::from(border_padding));
        let outer = PixelRect::from_region(&grown);
        let (width, height) = self.dimensions();

        if let Some(fill) = fill
            && let Some(rect) = outer.clip(width, height)
        {
            draw_filled_rect_mut(&mut self.image, rect.to_rect(), Rgba(fill.to_rgba()));
        }

        if let Some(outline) = outline
            && border_width > 0
        {
            let color = Rgba(outline.to_rgba());
            for band in outer.ring(border_width) {
                if let Some(rect) = band.clip(width, height) {
                    draw_filled_rect_mut(&mut self.image, rect.to_rect(), color);
                }
            }
        }
    }

    fn save(&self, path: &Path) -> Result<()> {
        self.image.save(path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GenericImageView, RgbImage, RgbaImage};

    fn white(width: u32, height: u32) -> RasterSurface {
        RasterSurface::from_image(DynamicImage::ImageRgb8(RgbImage::from_pixel(
            width,
            height,
            image::Rgb([255, 255, 255]),
        )))
    }

    fn pixel(surface: &RasterSurface, x: u32, y: u32) -> [u8; 4] {
        surface.image().get_pixel(x, y).0
    }

    #[test]
    fn test_pixel_rect_rounds_outward() {
        let rect = PixelRect::from_region(&RedactionRegion::new(10.4, 5.0, 20.2, 8.0));
        assert_eq!(
            rect,
            PixelRect {
                x0: 10,
                y0: 5,
                x1: 21,
                y1: 8
            }
        );
        assert_eq!(rect.width(), 12);
        assert_eq!(rect.height(), 4);
    }

    #[test]
    fn test_clip_to_image() {
        let rect = PixelRect {
            x0: -4,
            y0: 2,
            x1: 30,
            y1: 5,
        };
        assert_eq!(
            rect.clip(10, 10),
            Some(PixelRect {
                x0: 0,
                y0: 2,
                x1: 9,
                y1: 5
            })
        );

        let outside = PixelRect {
            x0: 12,
            y0: 0,
            x1: 20,
            y1: 5,
        };
        assert_eq!(outside.clip(10, 10), None);
    }

    #[test]
    fn test_ring_bands() {
        let rect = PixelRect {
            x0: 0,
            y0: 0,
            x1: 9,
            y1: 5,
        };
        let [top, bottom, left, right] = rect.ring(2);
        assert_eq!((top.y0, top.y1), (0, 1));
        assert_eq!((bottom.y0, bottom.y1), (4, 5));
        assert_eq!((left.x0, left.x1), (0, 1));
        assert_eq!((right.x0, right.x1), (8, 9));

        // Wider than the rect: bands never extend past it
        let [top, ..] = rect.ring(100);
        assert_eq!(top, rect);
    }

    #[test]
    fn test_huge_border_does_not_overflow() {
        let mut surface = white(20, 20);
        let region = RedactionRegion::new(5.0, 5.0, 10.0, 10.0);

        surface.draw_rectangle(&region, Some(Color::RED), Some(Color::BLACK), u32::MAX, 1);

        // Ring inner edge sits at the padding, 4..=11
        assert_eq!(pixel(&surface, 0, 0), [255, 0, 0, 255]);
        assert_eq!(pixel(&surface, 3, 7), [255, 0, 0, 255]);
        assert_eq!(pixel(&surface, 4, 7), [0, 0, 0, 255]);
        assert_eq!(pixel(&surface, 7, 7), [0, 0, 0, 255]);
        assert_eq!(pixel(&surface, 12, 7), [255, 0, 0, 255]);
    }

    #[test]
    fn test_wide_ring_outside_image_leaves_pixels() {
        let mut surface = white(20, 20);
        let region = RedactionRegion::new(5.0, 5.0, 10.0, 10.0);

        // Padding pushes the ring's inner edge outside the image on every side
        surface.draw_rectangle(&region, Some(Color::RED), None, 100_000, 10);

        assert_eq!(pixel(&surface, 0, 0), [255, 255, 255, 255]);
        assert_eq!(pixel(&surface, 7, 7), [255, 255, 255, 255]);
        assert_eq!(pixel(&surface, 19, 19), [255, 255, 255, 255]);
    }

    #[test]
    fn test_fill_covers_inclusive_bounds() {
        let mut surface = white(20, 20);
        let region = RedactionRegion::new(2.0, 3.0, 5.0, 6.0);

        surface.draw_rectangle(&region, None, Some(Color::BLACK), 0, 0);

        assert_eq!(pixel(&surface, 2, 3), [0, 0, 0, 255]);
        assert_eq!(pixel(&surface, 5, 6), [0, 0, 0, 255]);
        assert_eq!(pixel(&surface, 6, 6), [255, 255, 255, 255]);
        assert_eq!(pixel(&surface, 1, 3), [255, 255, 255, 255]);
    }

    #[test]
    fn test_outline_ring_has_border_width() {
        let mut surface = white(30, 30);
        let region = RedactionRegion::new(10.0, 10.0, 20.0, 20.0);

        surface.draw_rectangle(&region, Some(Color::RED), None, 2, 1);

        // Grown by 3: outer edge at 7, ring is 7..=8, padding at 9, interior untouched
        assert_eq!(pixel(&surface, 7, 15), [255, 0, 0, 255]);
        assert_eq!(pixel(&surface, 8, 15), [255, 0, 0, 255]);
        assert_eq!(pixel(&surface, 9, 15), [255, 255, 255, 255]);
        assert_eq!(pixel(&surface, 15, 15), [255, 255, 255, 255]);
        assert_eq!(pixel(&surface, 23, 15), [255, 0, 0, 255]);
    }

    #[test]
    fn test_drawing_is_clipped_to_image() {
        let mut surface = white(10, 10);
        let region = RedactionRegion::new(-5.0, -5.0, 4.0, 4.0);

        surface.draw_rectangle(&region, Some(Color::RED), Some(Color::BLACK), 1, 1);

        assert_eq!(pixel(&surface, 0, 0), [0, 0, 0, 255]);
        assert_eq!(pixel(&surface, 6, 6), [255, 0, 0, 255]);
        assert_eq!(pixel(&surface, 9, 9), [255, 255, 255, 255]);
    }

    #[test]
    fn test_make_opaque_drops_alpha() {
        let mut surface = RasterSurface::from_image(DynamicImage::ImageRgba8(
            RgbaImage::from_pixel(4, 4, Rgba([10, 20, 30, 0])),
        ));
        assert!(surface.has_alpha());

        surface.make_opaque();

        assert!(!surface.has_alpha());
        assert_eq!(surface.image().color(), ColorType::Rgb8);
        assert_eq!(pixel(&surface, 0, 0), [10, 20, 30, 255]);
    }

    #[test]
    fn test_make_opaque_keeps_grayscale() {
        let mut surface = RasterSurface::from_image(DynamicImage::ImageLumaA8(
            image::GrayAlphaImage::new(2, 2),
        ));
        surface.make_opaque();
        assert_eq!(surface.image().color(), ColorType::L8);
    }
}
