//! Luma weights and small RGB helpers.
//!
//! Color spaces carry their own luma coefficients (three scalar weights
//! applied to RGB-like primaries). Spaces without meaningful primaries fall
//! back to [`REC709_LUMA`].

/// Rec.709 luminance coefficient for red channel.
pub const REC709_LUMA_R: f32 = 0.2126;

/// Rec.709 luminance coefficient for green channel.
pub const REC709_LUMA_G: f32 = 0.7152;

/// Rec.709 luminance coefficient for blue channel.
pub const REC709_LUMA_B: f32 = 0.0722;

/// Rec.709 luminance coefficients as an array [R, G, B].
pub const REC709_LUMA: [f32; 3] = [REC709_LUMA_R, REC709_LUMA_G, REC709_LUMA_B];

/// Weighted luma of an RGB triplet.
///
/// ```
/// use curves_core::pixel::{luma, REC709_LUMA};
/// let y = luma([0.5, 0.3, 0.2], REC709_LUMA);
/// assert!((y - 0.3353).abs() < 0.0001);
/// ```
#[inline]
pub fn luma(rgb: [f32; 3], weights: [f32; 3]) -> f32 {
    rgb[0] * weights[0] + rgb[1] * weights[1] + rgb[2] * weights[2]
}

/// Naive CMYK -> RGB conversion on normalized values.
#[inline]
pub fn cmyk_to_rgb(cmyk: [f32; 4]) -> [f32; 3] {
    let k = 1.0 - cmyk[3];
    [(1.0 - cmyk[0]) * k, (1.0 - cmyk[1]) * k, (1.0 - cmyk[2]) * k]
}

/// Naive RGB -> CMYK conversion on normalized values (maximal black).
#[inline]
pub fn rgb_to_cmyk(rgb: [f32; 3]) -> [f32; 4] {
    let max = rgb[0].max(rgb[1]).max(rgb[2]);
    if max <= 0.0 {
        return [0.0, 0.0, 0.0, 1.0];
    }
    [
        (max - rgb[0]) / max,
        (max - rgb[1]) / max,
        (max - rgb[2]) / max,
        1.0 - max,
    ]
}
