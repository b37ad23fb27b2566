//! Composite of the per-category transformations.
//!
//! A filter produces up to five transformations, one per curve category.
//! [`CompositeTransform::optimized`] merges them into the single transform a
//! renderer applies to every pixel:
//!
//! 1. Real channels (per-channel LUT)
//! 2. All colors (per-channel LUT, alpha excluded)
//! 3. Hue
//! 4. Saturation
//! 5. Lightness
//!
//! Absent categories are dropped and adjacent per-channel LUT stages fuse
//! into one stage whose table chains reproduce sequential application
//! exactly.

use tracing::trace;

use crate::transform::{ChannelLut, ColorTransform};

/// Category names in application order.
pub const STAGE_ORDER: [&str; 5] = ["real", "all_colors", "hue", "saturation", "lightness"];

/// Ordered sequence of transformation stages.
///
/// Stateless and shareable across threads; [`apply`](Self::apply) takes
/// `&self`.
///
/// # Example
///
/// ```rust
/// use curves_color::CompositeTransform;
///
/// let identity = CompositeTransform::optimized([None, None, None, None, None]);
/// assert!(identity.is_identity());
///
/// let mut px = [0.1, 0.2, 0.3, 1.0];
/// identity.apply(&mut px);
/// assert_eq!(px, [0.1, 0.2, 0.3, 1.0]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompositeTransform {
    stages: Vec<ColorTransform>,
}

impl CompositeTransform {
    /// Transform that changes nothing.
    pub fn identity() -> Self {
        Self { stages: Vec::new() }
    }

    /// Stages applied exactly as given, without fusion.
    pub fn sequential(stages: Vec<ColorTransform>) -> Self {
        Self { stages }
    }

    /// Merges per-category transforms given in [`STAGE_ORDER`].
    pub fn optimized(transforms: [Option<ColorTransform>; 5]) -> Self {
        let mut stages: Vec<ColorTransform> = Vec::with_capacity(5);

        for (&name, slot) in STAGE_ORDER.iter().zip(transforms) {
            let Some(stage) = slot else {
                trace!(stage = name, "stage elided");
                continue;
            };

            match stage {
                ColorTransform::Lut(lut) if lut.is_identity() => {
                    trace!(stage = name, "empty LUT stage elided");
                }
                ColorTransform::Lut(lut) => match stages.pop() {
                    Some(ColorTransform::Lut(prev)) => {
                        trace!(stage = name, "LUT stage fused with previous");
                        stages.push(ColorTransform::Lut(prev.then(lut)));
                    }
                    other => {
                        stages.extend(other);
                        stages.push(ColorTransform::Lut(lut));
                    }
                },
                other => stages.push(other),
            }
        }

        trace!(stages = stages.len(), "composite built");
        Self { stages }
    }

    /// Number of stages after optimization.
    #[inline]
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Whether there are no stages.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Whether applying this transform leaves every pixel unchanged.
    #[inline]
    pub fn is_identity(&self) -> bool {
        self.stages.is_empty()
    }

    /// The stages, in application order.
    pub fn stages(&self) -> &[ColorTransform] {
        &self.stages
    }

    /// Applies all stages to one pixel.
    #[inline]
    pub fn apply(&self, px: &mut [f32]) {
        for stage in &self.stages {
            stage.apply(px);
        }
    }
}

impl From<ChannelLut> for CompositeTransform {
    fn from(lut: ChannelLut) -> Self {
        Self::optimized([Some(lut.into()), None, None, None, None])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::{HsyComponent, HsyCurve, LightnessCurve};
    use curves_core::{ChannelValueType, RgbLayout, REC709_LUMA};
    use curves_lut::{ControlPoint, Curve, TransferDomain, TransferTable};

    fn table(points: &[(f32, f32)]) -> TransferTable {
        let points = points.iter().map(|&(x, y)| ControlPoint::new(x, y)).collect();
        let curve = Curve::new(points).unwrap();
        TransferTable::build(&curve, &TransferDomain::for_value_type(ChannelValueType::U8))
    }

    const RGB: RgbLayout = RgbLayout::Rgb([0, 1, 2]);

    fn real() -> ColorTransform {
        ChannelLut::per_channel(vec![
            Some(table(&[(0.0, 0.1), (1.0, 0.9)])),
            None,
            Some(table(&[(0.0, 0.0), (0.5, 0.7), (1.0, 1.0)])),
            None,
        ])
        .into()
    }

    fn all_colors() -> ColorTransform {
        ChannelLut::shared(4, &[0, 1, 2], table(&[(0.0, 0.0), (0.5, 0.25), (1.0, 1.0)])).into()
    }

    fn hue() -> ColorTransform {
        HsyCurve::new(HsyComponent::Hue, table(&[(0.0, 0.2), (1.0, 0.6)]), REC709_LUMA, RGB).into()
    }

    fn saturation() -> ColorTransform {
        HsyCurve::new(HsyComponent::Saturation, table(&[(0.0, 0.0), (1.0, 0.5)]), REC709_LUMA, RGB)
            .into()
    }

    fn lightness() -> ColorTransform {
        LightnessCurve::new(table(&[(0.0, 0.2), (1.0, 0.8)]), REC709_LUMA, RGB).into()
    }

    fn slots(mask: u8) -> [Option<ColorTransform>; 5] {
        let all = [real(), all_colors(), hue(), saturation(), lightness()];
        let mut out: [Option<ColorTransform>; 5] = Default::default();
        for (i, t) in all.into_iter().enumerate() {
            if mask & (1 << i) != 0 {
                out[i] = Some(t);
            }
        }
        out
    }

    const PIXELS: [[f32; 4]; 5] = [
        [0.8, 0.3, 0.1, 1.0],
        [0.1, 0.9, 0.4, 0.5],
        [0.5, 0.5, 0.5, 0.0],
        [0.0, 0.0, 1.0, 0.25],
        [1.0, 1.0, 1.0, 1.0],
    ];

    #[test]
    fn test_empty_is_identity() {
        let t = CompositeTransform::optimized(Default::default());
        assert!(t.is_identity());
        assert_eq!(t.len(), 0);
    }

    #[test]
    fn test_single_stage() {
        let t = CompositeTransform::optimized(slots(0b00100));
        assert_eq!(t.len(), 1);
        assert_eq!(t.stages()[0].name(), "hue");
    }

    #[test]
    fn test_adjacent_luts_fuse() {
        let t = CompositeTransform::optimized(slots(0b00011));
        assert_eq!(t.len(), 1);
        let ColorTransform::Lut(lut) = &t.stages()[0] else {
            panic!("expected a LUT stage");
        };
        assert_eq!(lut.chain(0).len(), 2);
        assert_eq!(lut.chain(1).len(), 1);
        assert_eq!(lut.chain(3).len(), 0);
    }

    #[test]
    fn test_fixed_order() {
        let t = CompositeTransform::optimized(slots(0b11111));
        let names: Vec<_> = t.stages().iter().map(ColorTransform::name).collect();
        assert_eq!(names, ["lut", "hue", "saturation", "lightness"]);
    }

    #[test]
    fn test_identity_lut_elided() {
        let t = CompositeTransform::optimized([
            Some(ChannelLut::new(4).into()),
            None,
            None,
            None,
            Some(lightness()),
        ]);
        assert_eq!(t.len(), 1);
        assert_eq!(t.stages()[0].name(), "lightness");
    }

    #[test]
    fn test_matches_sequential_for_every_subset() {
        for mask in 0u8..32 {
            let fused = CompositeTransform::optimized(slots(mask));
            let sequential: Vec<ColorTransform> = slots(mask).into_iter().flatten().collect();
            let sequential = CompositeTransform::sequential(sequential);

            for px in PIXELS {
                let mut a = px;
                let mut b = px;
                fused.apply(&mut a);
                sequential.apply(&mut b);
                assert_eq!(a, b, "mask {mask:05b}, pixel {px:?}");
            }
        }
    }

    #[test]
    fn test_alpha_untouched() {
        let t = CompositeTransform::optimized(slots(0b11111));
        for px in PIXELS {
            let mut out = px;
            t.apply(&mut out);
            assert_eq!(out[3], px[3]);
        }
    }
}
