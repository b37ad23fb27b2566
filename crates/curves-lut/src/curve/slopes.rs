//! Slope estimation for monotone cubic curves.
//!
//! Fritsch-Butland weighted harmonic mean of adjacent secants. Slopes are
//! zero at local extrema and never exceed three times the smaller secant,
//! which keeps every Hermite segment within its end values.

use super::types::ControlPoint;

/// Estimate slopes at control points.
///
/// Zero-width segments (duplicate x) contribute a zero secant, turning the
/// curve into a step at that x.
pub fn estimate_slopes(ctrl_pts: &[ControlPoint]) -> Vec<f32> {
    let n = ctrl_pts.len();
    if n < 2 {
        return vec![0.0; n];
    }

    let mut secant_slope = Vec::with_capacity(n - 1);
    let mut secant_len = Vec::with_capacity(n - 1);

    for i in 0..n - 1 {
        let del_x = ctrl_pts[i + 1].x - ctrl_pts[i].x;
        let del_y = ctrl_pts[i + 1].y - ctrl_pts[i].y;
        secant_slope.push(if del_x > 0.0 { del_y / del_x } else { 0.0 });
        secant_len.push(del_x);
    }

    // Only 2 points - straight line
    if n == 2 {
        return vec![secant_slope[0], secant_slope[0]];
    }

    let mut slopes = Vec::with_capacity(n);
    slopes.push(secant_slope[0]);

    for k in 1..n - 1 {
        let (d0, d1) = (secant_slope[k - 1], secant_slope[k]);
        let (h0, h1) = (secant_len[k - 1], secant_len[k]);

        if d0 * d1 <= 0.0 || h0 <= 0.0 || h1 <= 0.0 {
            slopes.push(0.0);
            continue;
        }

        let w0 = 2.0 * h1 + h0;
        let w1 = h1 + 2.0 * h0;
        slopes.push((w0 + w1) / (w0 / d0 + w1 / d1));
    }

    slopes.push(secant_slope[n - 2]);
    slopes
}
