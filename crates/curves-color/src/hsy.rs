//! Hue / chroma / luma color model.
//!
//! Hexagonal hue in `[0, 1)` with red at 0, chroma `max - min` as the
//! saturation component, and luma weighted by the color space's
//! coefficients. Conversions are exact inverses for in-gamut colors.

use curves_core::luma;

/// Converts RGB to `[hue, saturation, luma]`.
pub fn rgb_to_hsy(rgb: [f32; 3], weights: [f32; 3]) -> [f32; 3] {
    let [r, g, b] = rgb;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let chroma = max - min;

    let sector = if chroma <= 0.0 {
        0.0
    } else if r == max {
        ((g - b) / chroma).rem_euclid(6.0)
    } else if g == max {
        (b - r) / chroma + 2.0
    } else {
        (r - g) / chroma + 4.0
    };

    [sector / 6.0, chroma, luma(rgb, weights)]
}

/// Converts `[hue, saturation, luma]` back to RGB.
///
/// The result is not clamped; strong saturation at extreme luma can leave
/// the `[0, 1]` cube.
pub fn hsy_to_rgb(hsy: [f32; 3], weights: [f32; 3]) -> [f32; 3] {
    let [hue, chroma, y] = hsy;
    let h = hue.rem_euclid(1.0) * 6.0;
    let x = chroma * (1.0 - ((h % 2.0) - 1.0).abs());

    let base = match h as u32 {
        0 => [chroma, x, 0.0],
        1 => [x, chroma, 0.0],
        2 => [0.0, chroma, x],
        3 => [0.0, x, chroma],
        4 => [x, 0.0, chroma],
        _ => [chroma, 0.0, x],
    };

    let m = y - luma(base, weights);
    [base[0] + m, base[1] + m, base[2] + m]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use curves_core::REC709_LUMA;

    #[test]
    fn test_primaries() {
        let red = rgb_to_hsy([1.0, 0.0, 0.0], REC709_LUMA);
        assert_abs_diff_eq!(red[0], 0.0);
        assert_abs_diff_eq!(red[1], 1.0);
        assert_abs_diff_eq!(red[2], REC709_LUMA[0]);

        let green = rgb_to_hsy([0.0, 1.0, 0.0], REC709_LUMA);
        assert_abs_diff_eq!(green[0], 1.0 / 3.0, epsilon = 1e-6);

        let blue = rgb_to_hsy([0.0, 0.0, 1.0], REC709_LUMA);
        assert_abs_diff_eq!(blue[0], 2.0 / 3.0, epsilon = 1e-6);
    }

    #[test]
    fn test_gray_has_no_chroma() {
        let hsy = rgb_to_hsy([0.4, 0.4, 0.4], REC709_LUMA);
        assert_eq!(hsy[0], 0.0);
        assert_eq!(hsy[1], 0.0);
        assert_abs_diff_eq!(hsy[2], 0.4, epsilon = 1e-6);
    }

    #[test]
    fn test_roundtrip() {
        let weights = [0.299, 0.587, 0.114];
        for rgb in [
            [0.8, 0.3, 0.1],
            [0.1, 0.9, 0.4],
            [0.2, 0.3, 0.7],
            [0.9, 0.1, 0.8],
            [0.5, 0.5, 0.5],
        ] {
            let back = hsy_to_rgb(rgb_to_hsy(rgb, weights), weights);
            for c in 0..3 {
                assert_abs_diff_eq!(back[c], rgb[c], epsilon = 1e-5);
            }
        }
    }

    #[test]
    fn test_hue_wraps() {
        let a = hsy_to_rgb([0.25, 0.5, 0.5], REC709_LUMA);
        let b = hsy_to_rgb([1.25, 0.5, 0.5], REC709_LUMA);
        for c in 0..3 {
            assert_abs_diff_eq!(a[c], b[c], epsilon = 1e-6);
        }
    }
}
