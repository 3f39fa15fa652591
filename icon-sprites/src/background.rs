//! Near-white background removal

use image::RgbaImage;

use crate::rotate::TRANSPARENT;

/// Default per-channel brightness above which a pixel counts as background.
pub const DEFAULT_THRESHOLD: u8 = 200;

/// Replace every pixel whose red, green and blue channels all exceed
/// `threshold` with a fully transparent pixel. Returns how many were cleared.
pub fn clear_background(img: &mut RgbaImage, threshold: u8) -> usize {
    let mut cleared = 0;
    for pixel in img.pixels_mut() {
        let [r, g, b, _] = pixel.0;
        if r > threshold && g > threshold && b > threshold {
            *pixel = TRANSPARENT;
            cleared += 1;
        }
    }
    cleared
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_clears_only_above_threshold() {
        let mut img = RgbaImage::new(4, 1);
        img.put_pixel(0, 0, Rgba([255, 255, 255, 255]));
        img.put_pixel(1, 0, Rgba([201, 201, 201, 255]));
        img.put_pixel(2, 0, Rgba([200, 255, 255, 255]));
        img.put_pixel(3, 0, Rgba([255, 0, 0, 128]));

        let cleared = clear_background(&mut img, DEFAULT_THRESHOLD);

        assert_eq!(cleared, 2);
        assert_eq!(*img.get_pixel(0, 0), TRANSPARENT);
        assert_eq!(*img.get_pixel(1, 0), TRANSPARENT);
        assert_eq!(*img.get_pixel(2, 0), Rgba([200, 255, 255, 255]));
        assert_eq!(*img.get_pixel(3, 0), Rgba([255, 0, 0, 128]));
    }

    #[test]
    fn test_max_threshold_clears_nothing() {
        let mut img = RgbaImage::from_pixel(3, 3, Rgba([255, 255, 255, 255]));
        assert_eq!(clear_background(&mut img, 255), 0);
        assert_eq!(*img.get_pixel(1, 1), Rgba([255, 255, 255, 255]));
    }
}
