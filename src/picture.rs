//! Sampling raster images into coloured height fields for mosaics and reliefs.

use std::error::Error;
use std::path::Path;

use image::RgbImage;
use image::imageops::{self, FilterType};
use voxbrick_grid::HeightField;
use voxbrick_parts::Palette;
use voxbrick_parts::palette::color_distance;

const WHITE: [u8; 3] = [255, 255, 255];

pub fn load_rgb(path: &Path) -> Result<RgbImage, Box<dyn Error>> {
    let img = image::open(path)?;
    Ok(img.to_rgb8())
}

/// Nearest-neighbour resize to `width` studs, keeping the aspect ratio
/// (height rounds down).
pub fn resize_to_studs(img: &RgbImage, width: u32) -> Result<RgbImage, Box<dyn Error>> {
    let (w, h) = img.dimensions();
    if w == 0 || h == 0 {
        return Err("image has no pixels".into());
    }
    let height = (width as f64 * h as f64 / w as f64) as u32;
    if width == 0 || height == 0 {
        return Err(format!("cannot sample a {}x{} image at {} studs wide", w, h, width).into());
    }
    log::debug!("resampling {}x{} -> {}x{} studs", w, h, width, height);
    Ok(imageops::resize(img, width, height, FilterType::Nearest))
}

/// ITU-R 601 luma, rounded.
#[inline]
pub fn luma(rgb: [u8; 3]) -> u8 {
    let [r, g, b] = rgb.map(u32::from);
    ((r * 299 + g * 587 + b * 114 + 500) / 1000) as u8
}

/// One plate per pixel, each snapped to the palette.
pub fn mosaic_field(img: &RgbImage, palette: &Palette) -> Result<HeightField, Box<dyn Error>> {
    let (w, h) = img.dimensions();
    let mut field = HeightField::new(w as usize, h as usize)?;
    for (x, z, px) in img.enumerate_pixels() {
        field.set(x as usize, z as usize, 1, palette.nearest(px.0));
    }
    Ok(field)
}

/// Brighter pixels stand taller: `floor(luma / 255 * max_height) + 1` plates.
/// Pixels within `background_threshold` of white are left empty.
pub fn relief_field(
    img: &RgbImage,
    palette: &Palette,
    max_height: usize,
    background_threshold: f32,
) -> Result<HeightField, Box<dyn Error>> {
    let (w, h) = img.dimensions();
    let mut field = HeightField::new(w as usize, h as usize)?;
    let mut background = 0usize;
    for (x, z, px) in img.enumerate_pixels() {
        if color_distance(px.0, WHITE) < background_threshold {
            background += 1;
            continue;
        }
        let brightness = luma(px.0) as f32 / 255.0;
        let height = (brightness * max_height as f32) as usize + 1;
        field.set(x as usize, z as usize, height, palette.nearest(px.0));
    }
    log::debug!("relief: {} background pixels skipped", background);
    Ok(field)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;
    use voxbrick_parts::ColorId;

    fn image_from(w: u32, h: u32, f: impl Fn(u32, u32) -> [u8; 3]) -> RgbImage {
        RgbImage::from_fn(w, h, |x, y| Rgb(f(x, y)))
    }

    #[test]
    fn luma_weights() {
        assert_eq!(luma([0, 0, 0]), 0);
        assert_eq!(luma([255, 255, 255]), 255);
        assert_eq!(luma([255, 0, 0]), 76);
        assert_eq!(luma([0, 255, 0]), 150);
        assert_eq!(luma([0, 0, 255]), 29);
    }

    #[test]
    fn resize_keeps_aspect() {
        let img = image_from(64, 48, |_, _| [0, 0, 0]);
        let out = resize_to_studs(&img, 32).unwrap();
        assert_eq!(out.dimensions(), (32, 24));
        let tall = image_from(10, 25, |_, _| [0, 0, 0]);
        assert_eq!(resize_to_studs(&tall, 4).unwrap().dimensions(), (4, 10));
        let wide = image_from(100, 1, |_, _| [0, 0, 0]);
        assert!(resize_to_studs(&wide, 8).is_err());
    }

    #[test]
    fn mosaic_quantises_every_pixel() {
        let img = image_from(2, 2, |x, y| if (x + y) % 2 == 0 { [210, 30, 30] } else { [250, 250, 250] });
        let field = mosaic_field(&img, &Palette::ldraw()).unwrap();
        assert_eq!(field.max_height(), 1);
        assert_eq!(field.color(0, 0), ColorId::RED);
        assert_eq!(field.color(1, 0), ColorId::WHITE);
        assert_eq!(field.height(1, 0), 1);
    }

    #[test]
    fn relief_heights_follow_brightness() {
        let img = image_from(3, 1, |x, _| match x {
            0 => [0, 0, 0],
            1 => [255, 255, 255],
            _ => [160, 165, 169],
        });
        let field = relief_field(&img, &Palette::ldraw(), 10, 30.0).unwrap();
        assert_eq!(field.height(0, 0), 1);
        assert_eq!(field.color(0, 0), ColorId::BLACK);
        // white is background
        assert_eq!(field.height(1, 0), 0);
        // luma 164 -> floor(6.43) + 1
        assert_eq!(field.height(2, 0), 7);
        assert_eq!(field.color(2, 0), ColorId(71));
    }
}
