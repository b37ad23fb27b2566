//! Single-stage pixel transformations.
//!
//! Every stage works on one pixel of normalized `f32` channel values in the
//! color space's memory order.

use std::fmt;
use std::sync::Arc;

use curves_core::{luma, RgbLayout};
use curves_lut::TransferTable;

use crate::hsy::{hsy_to_rgb, rgb_to_hsy};

/// Per-channel lookup stage.
///
/// Each memory position holds a chain of tables applied in order; an empty
/// chain leaves the channel untouched. Chains let adjacent LUT stages fuse
/// without resampling.
#[derive(Clone, Default, PartialEq)]
pub struct ChannelLut {
    chains: Vec<Vec<Arc<TransferTable>>>,
}

impl ChannelLut {
    /// Stage over `channel_count` channels that changes nothing.
    pub fn new(channel_count: usize) -> Self {
        Self {
            chains: vec![Vec::new(); channel_count],
        }
    }

    /// One optional table per memory position.
    pub fn per_channel(tables: Vec<Option<TransferTable>>) -> Self {
        let chains = tables
            .into_iter()
            .map(|t| t.map(Arc::new).into_iter().collect())
            .collect();
        Self { chains }
    }

    /// The same table on each of `indices`; other channels untouched.
    pub fn shared(channel_count: usize, indices: &[usize], table: TransferTable) -> Self {
        let table = Arc::new(table);
        let mut lut = Self::new(channel_count);
        for &i in indices {
            if let Some(chain) = lut.chains.get_mut(i) {
                chain.push(Arc::clone(&table));
            }
        }
        lut
    }

    /// Number of channels covered.
    #[inline]
    pub fn channel_count(&self) -> usize {
        self.chains.len()
    }

    /// Tables applied to the channel at memory position `index`.
    pub fn chain(&self, index: usize) -> &[Arc<TransferTable>] {
        self.chains.get(index).map_or(&[][..], Vec::as_slice)
    }

    /// Whether no channel has a table.
    pub fn is_identity(&self) -> bool {
        self.chains.iter().all(Vec::is_empty)
    }

    /// Appends `next` after this stage, channel by channel.
    pub fn then(mut self, next: ChannelLut) -> Self {
        if next.chains.len() > self.chains.len() {
            self.chains.resize_with(next.chains.len(), Vec::new);
        }
        for (chain, more) in self.chains.iter_mut().zip(next.chains) {
            chain.extend(more);
        }
        self
    }

    /// Applies the stage to one pixel.
    #[inline]
    pub fn apply(&self, px: &mut [f32]) {
        for (v, chain) in px.iter_mut().zip(&self.chains) {
            for table in chain {
                *v = table.apply(*v);
            }
        }
    }
}

impl fmt::Debug for ChannelLut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lens: Vec<usize> = self.chains.iter().map(Vec::len).collect();
        f.debug_struct("ChannelLut").field("chain_lengths", &lens).finish()
    }
}

/// HSY component a curve adjusts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HsyComponent {
    /// Hexagonal hue.
    Hue,
    /// Chroma.
    Saturation,
}

impl HsyComponent {
    #[inline]
    fn index(self) -> usize {
        match self {
            Self::Hue => 0,
            Self::Saturation => 1,
        }
    }
}

/// Remaps one HSY component of the pixel's color through a table.
///
/// The mapping is absolute: the component's current value is the table
/// input and the table output replaces it.
#[derive(Debug, Clone, PartialEq)]
pub struct HsyCurve {
    component: HsyComponent,
    table: TransferTable,
    luma: [f32; 3],
    layout: RgbLayout,
}

impl HsyCurve {
    /// Creates the adjustment.
    pub fn new(
        component: HsyComponent,
        table: TransferTable,
        luma: [f32; 3],
        layout: RgbLayout,
    ) -> Self {
        Self {
            component,
            table,
            luma,
            layout,
        }
    }

    /// Component this stage adjusts.
    pub fn component(&self) -> HsyComponent {
        self.component
    }

    /// Applies the stage to one pixel.
    #[inline]
    pub fn apply(&self, px: &mut [f32]) {
        let mut hsy = rgb_to_hsy(self.layout.read(px), self.luma);
        let i = self.component.index();
        hsy[i] = self.table.apply(hsy[i]);
        self.layout.write(px, clamp01(hsy_to_rgb(hsy, self.luma)));
    }
}

/// Remaps luma through a table and shifts all color components by the
/// change, keeping chroma.
#[derive(Debug, Clone, PartialEq)]
pub struct LightnessCurve {
    table: TransferTable,
    luma: [f32; 3],
    layout: RgbLayout,
}

impl LightnessCurve {
    /// Creates the adjustment.
    pub fn new(table: TransferTable, luma: [f32; 3], layout: RgbLayout) -> Self {
        Self { table, luma, layout }
    }

    /// Applies the stage to one pixel.
    #[inline]
    pub fn apply(&self, px: &mut [f32]) {
        let rgb = self.layout.read(px);
        let y = luma(rgb, self.luma);
        let delta = self.table.apply(y) - y;
        self.layout
            .write(px, clamp01([rgb[0] + delta, rgb[1] + delta, rgb[2] + delta]));
    }
}

/// One stage of a composite transformation.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorTransform {
    /// Per-channel lookup tables.
    Lut(ChannelLut),
    /// Hue or saturation curve in HSY.
    Hsy(HsyCurve),
    /// Lightness curve.
    Lightness(LightnessCurve),
}

impl ColorTransform {
    /// Applies the stage to one pixel.
    #[inline]
    pub fn apply(&self, px: &mut [f32]) {
        match self {
            Self::Lut(lut) => lut.apply(px),
            Self::Hsy(curve) => curve.apply(px),
            Self::Lightness(curve) => curve.apply(px),
        }
    }

    /// Short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Lut(_) => "lut",
            Self::Hsy(c) => match c.component {
                HsyComponent::Hue => "hue",
                HsyComponent::Saturation => "saturation",
            },
            Self::Lightness(_) => "lightness",
        }
    }
}

impl From<ChannelLut> for ColorTransform {
    fn from(lut: ChannelLut) -> Self {
        Self::Lut(lut)
    }
}

impl From<HsyCurve> for ColorTransform {
    fn from(curve: HsyCurve) -> Self {
        Self::Hsy(curve)
    }
}

impl From<LightnessCurve> for ColorTransform {
    fn from(curve: LightnessCurve) -> Self {
        Self::Lightness(curve)
    }
}

#[inline]
fn clamp01(rgb: [f32; 3]) -> [f32; 3] {
    rgb.map(|v| v.clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use curves_core::{ChannelValueType, REC709_LUMA};
    use curves_lut::{ControlPoint, Curve, TransferDomain};

    fn table(points: &[(f32, f32)]) -> TransferTable {
        let points = points.iter().map(|&(x, y)| ControlPoint::new(x, y)).collect();
        let curve = Curve::new(points).unwrap();
        TransferTable::build(&curve, &TransferDomain::for_value_type(ChannelValueType::U16))
    }

    fn invert() -> TransferTable {
        table(&[(0.0, 1.0), (1.0, 0.0)])
    }

    const RGB: RgbLayout = RgbLayout::Rgb([0, 1, 2]);

    // ========================================================================
    // ChannelLut
    // ========================================================================

    #[test]
    fn test_per_channel_skips_empty() {
        let lut = ChannelLut::per_channel(vec![Some(invert()), None, None, None]);
        let mut px = [0.25, 0.5, 0.75, 1.0];
        lut.apply(&mut px);
        assert_abs_diff_eq!(px[0], 0.75, epsilon = 1e-4);
        assert_eq!(&px[1..], &[0.5, 0.75, 1.0]);
    }

    #[test]
    fn test_shared_table() {
        let lut = ChannelLut::shared(4, &[0, 1, 2], invert());
        let mut px = [0.2, 0.4, 0.6, 0.8];
        lut.apply(&mut px);
        assert_abs_diff_eq!(px[0], 0.8, epsilon = 1e-4);
        assert_abs_diff_eq!(px[1], 0.6, epsilon = 1e-4);
        assert_abs_diff_eq!(px[2], 0.4, epsilon = 1e-4);
        assert_eq!(px[3], 0.8);
        assert!(Arc::ptr_eq(&lut.chain(0)[0], &lut.chain(2)[0]));
    }

    #[test]
    fn test_then_chains_tables() {
        let a = ChannelLut::per_channel(vec![Some(invert()), None]);
        let b = ChannelLut::per_channel(vec![Some(invert()), Some(invert())]);
        let fused = a.clone().then(b.clone());
        assert_eq!(fused.chain(0).len(), 2);
        assert_eq!(fused.chain(1).len(), 1);

        let mut seq = [0.3, 0.7];
        a.apply(&mut seq);
        b.apply(&mut seq);
        let mut one = [0.3, 0.7];
        fused.apply(&mut one);
        assert_eq!(seq, one);
    }

    #[test]
    fn test_empty_lut_is_identity() {
        assert!(ChannelLut::new(3).is_identity());
        assert!(ChannelLut::shared(3, &[], invert()).is_identity());
        assert!(ChannelLut::new(3).chain(9).is_empty());
    }

    // ========================================================================
    // HSY stages
    // ========================================================================

    #[test]
    fn test_saturation_to_zero_gives_gray() {
        let flat = table(&[(0.0, 0.0), (1.0, 0.0)]);
        let stage = HsyCurve::new(HsyComponent::Saturation, flat, REC709_LUMA, RGB);
        let mut px = [0.8, 0.3, 0.1, 0.5];
        let y = luma([0.8, 0.3, 0.1], REC709_LUMA);
        stage.apply(&mut px);
        for c in 0..3 {
            assert_abs_diff_eq!(px[c], y, epsilon = 1e-4);
        }
        assert_eq!(px[3], 0.5);
    }

    #[test]
    fn test_hue_shift_rotates() {
        // Shift every hue by a third: red becomes green.
        let stage = HsyCurve::new(
            HsyComponent::Hue,
            table(&[(0.0, 1.0 / 3.0), (2.0 / 3.0, 1.0)]),
            [1.0 / 3.0; 3],
            RGB,
        );
        let mut px = [0.6, 0.2, 0.2];
        stage.apply(&mut px);
        assert_abs_diff_eq!(px[0], 0.2, epsilon = 1e-3);
        assert_abs_diff_eq!(px[1], 0.6, epsilon = 1e-3);
        assert_abs_diff_eq!(px[2], 0.2, epsilon = 1e-3);
    }

    #[test]
    fn test_hsy_on_bgr_layout() {
        let stage = HsyCurve::new(
            HsyComponent::Saturation,
            table(&[(0.0, 0.0), (1.0, 0.0)]),
            REC709_LUMA,
            RgbLayout::Rgb([2, 1, 0]),
        );
        // Memory B, G, R
        let mut px = [0.0, 0.0, 1.0];
        stage.apply(&mut px);
        for c in 0..3 {
            assert_abs_diff_eq!(px[c], REC709_LUMA[0], epsilon = 1e-4);
        }
    }

    #[test]
    fn test_lightness_shifts_and_clamps() {
        let stage = LightnessCurve::new(table(&[(0.0, 0.5), (1.0, 1.0)]), REC709_LUMA, RGB);
        let mut px = [0.0, 0.0, 0.0, 1.0];
        stage.apply(&mut px);
        for c in 0..3 {
            assert_abs_diff_eq!(px[c], 0.5, epsilon = 1e-4);
        }

        let mut px = [1.0, 0.5, 0.5, 1.0];
        stage.apply(&mut px);
        assert_eq!(px[0], 1.0);
        assert!(px[1] > 0.5);
    }

    #[test]
    fn test_lightness_keeps_hue_and_chroma() {
        let stage = LightnessCurve::new(table(&[(0.0, 0.1), (1.0, 0.9)]), REC709_LUMA, RGB);
        let before = [0.6, 0.4, 0.3];
        let mut px = [before[0], before[1], before[2], 1.0];
        stage.apply(&mut px);

        let a = rgb_to_hsy(before, REC709_LUMA);
        let b = rgb_to_hsy([px[0], px[1], px[2]], REC709_LUMA);
        assert_abs_diff_eq!(a[0], b[0], epsilon = 1e-4);
        assert_abs_diff_eq!(a[1], b[1], epsilon = 1e-4);
        assert!(b[2] > a[2]);
    }

    #[test]
    fn test_names() {
        assert_eq!(ColorTransform::from(ChannelLut::new(1)).name(), "lut");
        let hue = HsyCurve::new(HsyComponent::Hue, invert(), REC709_LUMA, RGB);
        assert_eq!(ColorTransform::from(hue).name(), "hue");
    }
}
