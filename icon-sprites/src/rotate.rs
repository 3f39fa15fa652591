//! Clockwise rotation of RGBA sprites
//!
//! Output pixels are mapped back into the source around the image center, so
//! the result has no holes. Canvas area that the rotated source does not cover
//! is fully transparent.
//!
//! Exact quarter turns skip resampling entirely and remap pixels losslessly,
//! as long as the output canvas has the quarter-turned size (always true with
//! `expand`, and for square sources on a fixed canvas).

use image::{imageops, Rgba, RgbaImage};

/// Pixel value used for canvas area outside the rotated source.
pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Slack used when rounding rotated extents up to whole pixels.
const BOUNDS_EPSILON: f64 = 1e-6;

/// How source pixels are sampled for angles that are not quarter turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Resample {
    /// Pick the source pixel under the mapped point. Keeps the palette intact.
    #[default]
    Nearest,
    /// Blend the four nearest source pixels with premultiplied alpha.
    Bilinear,
}

/// Normalize an angle to `[0, 360)`.
pub fn normalize_degrees(degrees: f64) -> f64 {
    let d = degrees.rem_euclid(360.0);
    if d >= 360.0 {
        0.0
    } else {
        d
    }
}

/// Number of clockwise quarter turns, if `degrees` is an exact multiple of 90.
fn quarter_turns(degrees: f64) -> Option<u32> {
    let d = normalize_degrees(degrees);
    if d.fract() == 0.0 && (d as u32) % 90 == 0 {
        Some(d as u32 / 90)
    } else {
        None
    }
}

/// `(sin, cos)` with exact values at quarter turns.
fn sin_cos(degrees: f64) -> (f64, f64) {
    match quarter_turns(degrees) {
        Some(0) => (0.0, 1.0),
        Some(1) => (1.0, 0.0),
        Some(2) => (0.0, -1.0),
        Some(3) => (-1.0, 0.0),
        _ => normalize_degrees(degrees).to_radians().sin_cos(),
    }
}

/// Canvas size needed to hold a `width` x `height` image rotated by `degrees`.
pub fn rotated_bounds(width: u32, height: u32, degrees: f64) -> (u32, u32) {
    let (sin, cos) = sin_cos(degrees);
    let (w, h) = (width as f64, height as f64);
    let extent_x = w * cos.abs() + h * sin.abs();
    let extent_y = w * sin.abs() + h * cos.abs();
    let round_up = |v: f64| ((v - BOUNDS_EPSILON).ceil().max(1.0)) as u32;
    (round_up(extent_x), round_up(extent_y))
}

/// Rotate `src` clockwise by `degrees`.
///
/// With `expand` the canvas grows to the rotated bounds, otherwise it keeps the
/// source size and the corners are clipped.
pub fn rotate(src: &RgbaImage, degrees: f64, expand: bool, resample: Resample) -> RgbaImage {
    let (width, height) = src.dimensions();

    if let Some(turns) = quarter_turns(degrees) {
        if expand || turns % 2 == 0 || width == height {
            return match turns {
                1 => imageops::rotate90(src),
                2 => imageops::rotate180(src),
                3 => imageops::rotate270(src),
                _ => src.clone(),
            };
        }
    }

    let (out_w, out_h) = if expand {
        rotated_bounds(width, height, degrees)
    } else {
        (width, height)
    };
    let (sin, cos) = sin_cos(degrees);
    let (src_cx, src_cy) = (width as f64 / 2.0, height as f64 / 2.0);
    let (out_cx, out_cy) = (out_w as f64 / 2.0, out_h as f64 / 2.0);

    RgbaImage::from_fn(out_w, out_h, |x, y| {
        let dx = x as f64 + 0.5 - out_cx;
        let dy = y as f64 + 0.5 - out_cy;
        // Inverse of the clockwise rotation (y axis points down).
        let sx = dx * cos + dy * sin + src_cx;
        let sy = -dx * sin + dy * cos + src_cy;
        match resample {
            Resample::Nearest => sample_nearest(src, sx, sy),
            Resample::Bilinear => sample_bilinear(src, sx, sy),
        }
    })
}

fn pixel_or_transparent(src: &RgbaImage, x: i64, y: i64) -> Rgba<u8> {
    if x < 0 || y < 0 || x >= src.width() as i64 || y >= src.height() as i64 {
        return TRANSPARENT;
    }
    *src.get_pixel(x as u32, y as u32)
}

fn sample_nearest(src: &RgbaImage, sx: f64, sy: f64) -> Rgba<u8> {
    pixel_or_transparent(src, sx.floor() as i64, sy.floor() as i64)
}

fn sample_bilinear(src: &RgbaImage, sx: f64, sy: f64) -> Rgba<u8> {
    // Shift from pixel-center coordinates to the sample grid.
    let gx = sx - 0.5;
    let gy = sy - 0.5;
    let x0 = gx.floor();
    let y0 = gy.floor();
    let fx = gx - x0;
    let fy = gy - y0;
    let (x0, y0) = (x0 as i64, y0 as i64);

    let taps = [
        (x0, y0, (1.0 - fx) * (1.0 - fy)),
        (x0 + 1, y0, fx * (1.0 - fy)),
        (x0, y0 + 1, (1.0 - fx) * fy),
        (x0 + 1, y0 + 1, fx * fy),
    ];

    let mut premultiplied = [0.0f64; 3];
    let mut alpha = 0.0f64;
    for (x, y, weight) in taps {
        if weight == 0.0 {
            continue;
        }
        let Rgba([r, g, b, a]) = pixel_or_transparent(src, x, y);
        let wa = weight * a as f64;
        premultiplied[0] += wa * r as f64;
        premultiplied[1] += wa * g as f64;
        premultiplied[2] += wa * b as f64;
        alpha += wa;
    }

    if alpha <= 0.0 {
        return TRANSPARENT;
    }
    let channel = |v: f64| (v / alpha).round().clamp(0.0, 255.0) as u8;
    Rgba([
        channel(premultiplied[0]),
        channel(premultiplied[1]),
        channel(premultiplied[2]),
        alpha.round().clamp(0.0, 255.0) as u8,
    ])
}
