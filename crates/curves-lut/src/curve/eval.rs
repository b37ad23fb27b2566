//! Curve evaluation.

use super::types::ControlPoint;

/// Evaluate a cubic Hermite interpolant through `pts` with `slopes` at `x`.
///
/// Values outside the control point range clamp to the first/last y.
pub fn eval_hermite(pts: &[ControlPoint], slopes: &[f32], x: f32) -> f32 {
    let n = pts.len();
    if n == 0 {
        return x;
    }
    if x.is_nan() || x <= pts[0].x {
        return pts[0].y;
    }
    if x >= pts[n - 1].x {
        return pts[n - 1].y;
    }

    // Last point with p.x <= x; the next one is strictly greater.
    let lo = pts.partition_point(|p| p.x <= x) - 1;
    let hi = lo + 1;

    let (p0, p1) = (pts[lo], pts[hi]);
    let h = p1.x - p0.x;
    let t = (x - p0.x) / h;
    let t2 = t * t;
    let t3 = t2 * t;

    let h00 = 2.0 * t3 - 3.0 * t2 + 1.0;
    let h10 = t3 - 2.0 * t2 + t;
    let h01 = -2.0 * t3 + 3.0 * t2;
    let h11 = t3 - t2;

    h00 * p0.y + h10 * h * slopes[lo] + h01 * p1.y + h11 * h * slopes[hi]
}
