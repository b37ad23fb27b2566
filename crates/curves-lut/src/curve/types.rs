//! Core curve types.

use super::eval::eval_hermite;
use super::slopes::estimate_slopes;
use crate::{LutError, LutResult};

/// Tolerance for comparing control point coordinates.
const POINT_EPSILON: f32 = 1e-6;

/// A single control point on a curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlPoint {
    /// X coordinate (input value).
    pub x: f32,
    /// Y coordinate (output value).
    pub y: f32,
}

impl ControlPoint {
    /// Create a new control point.
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    fn on_diagonal(&self) -> bool {
        (self.x - self.y).abs() < POINT_EPSILON
    }
}

impl Default for ControlPoint {
    fn default() -> Self {
        Self { x: 0.0, y: 0.0 }
    }
}

/// A monotone cubic curve over the normalized domain.
///
/// Curves are immutable snapshots: editing operations return a new curve.
/// Slopes are estimated once at construction so evaluation is cheap.
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    points: Vec<ControlPoint>,
    slopes: Vec<f32>,
    name: Option<String>,
}

impl Curve {
    /// Creates a curve from control points.
    ///
    /// # Errors
    ///
    /// [`LutError::MalformedCurve`] when there are fewer than two points,
    /// when x coordinates decrease, or when a coordinate is not a finite
    /// value in `[0, 1]`.
    pub fn new(points: Vec<ControlPoint>) -> LutResult<Self> {
        validate(&points)?;
        let slopes = estimate_slopes(&points);
        Ok(Self {
            points,
            slopes,
            name: None,
        })
    }

    /// The identity curve `y = x`.
    pub fn identity() -> Self {
        let points = vec![ControlPoint::new(0.0, 0.0), ControlPoint::new(1.0, 1.0)];
        let slopes = estimate_slopes(&points);
        Self {
            points,
            slopes,
            name: None,
        }
    }

    /// Returns a copy of this curve carrying a display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Display name, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Control points, ordered by x.
    pub fn points(&self) -> &[ControlPoint] {
        &self.points
    }

    /// Whether this curve is the identity mapping.
    ///
    /// Every point must lie on the diagonal and the curve must span the whole
    /// `[0, 1]` domain; a diagonal segment that stops short clamps its ends
    /// and is therefore not an identity.
    pub fn is_null(&self) -> bool {
        let first = self.points[0];
        let last = self.points[self.points.len() - 1];
        first.x.abs() < POINT_EPSILON
            && (last.x - 1.0).abs() < POINT_EPSILON
            && self.points.iter().all(ControlPoint::on_diagonal)
    }

    /// Evaluates the curve at `x`.
    ///
    /// Inputs outside the first/last control point clamp to the end values.
    pub fn evaluate(&self, x: f32) -> f32 {
        eval_hermite(&self.points, &self.slopes, x)
    }

    /// Samples the curve at `len` evenly spaced inputs over `[0, 1]`.
    pub fn sample(&self, len: usize) -> Vec<f32> {
        let denom = (len.max(2) - 1) as f32;
        (0..len).map(|i| self.evaluate(i as f32 / denom)).collect()
    }

    /// Returns a new curve with `point` inserted in x order.
    ///
    /// A point with the same x as an existing one is placed after it.
    pub fn with_point(&self, point: ControlPoint) -> LutResult<Self> {
        let mut points = self.points.clone();
        let at = points.partition_point(|p| p.x <= point.x);
        points.insert(at, point);
        self.rebuilt(points)
    }

    /// Returns a new curve without the point at `index`.
    ///
    /// # Errors
    ///
    /// [`LutError::MalformedCurve`] when the index is out of range or the
    /// result would have fewer than two points.
    pub fn without_point(&self, index: usize) -> LutResult<Self> {
        if index >= self.points.len() {
            return Err(LutError::MalformedCurve(format!(
                "point index {index} out of range ({} points)",
                self.points.len()
            )));
        }
        let mut points = self.points.clone();
        points.remove(index);
        self.rebuilt(points)
    }

    /// Whether both curves have the same control points, ignoring names.
    pub fn same_shape(&self, other: &Curve) -> bool {
        self.points == other.points
    }

    fn rebuilt(&self, points: Vec<ControlPoint>) -> LutResult<Self> {
        let mut curve = Self::new(points)?;
        curve.name = self.name.clone();
        Ok(curve)
    }
}

impl Default for Curve {
    fn default() -> Self {
        Self::identity()
    }
}

/// Checks the curve invariants.
fn validate(points: &[ControlPoint]) -> LutResult<()> {
    if points.len() < 2 {
        return Err(LutError::MalformedCurve(format!(
            "curve needs at least 2 control points, got {}",
            points.len()
        )));
    }

    let mut last_x = f32::NEG_INFINITY;
    for p in points {
        for v in [p.x, p.y] {
            if !v.is_finite() || !(0.0..=1.0).contains(&v) {
                return Err(LutError::MalformedCurve(format!(
                    "control point ({}, {}) outside [0, 1]",
                    p.x, p.y
                )));
            }
        }
        if p.x < last_x {
            return Err(LutError::MalformedCurve(
                "x coordinates must be non-decreasing".into(),
            ));
        }
        last_x = p.x;
    }

    Ok(())
}
