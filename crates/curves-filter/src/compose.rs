//! Per-channel transform composer.
//!
//! Turns a reconciled curve set into at most one transformation per curve
//! category. Null curves never reach the table builder; a category whose
//! curves are all null contributes nothing.

use curves_color::{
    ChannelLut, ColorTransform, CompositeTransform, HsyComponent, HsyCurve, LightnessCurve,
};
use curves_core::ColorSpace;
use curves_lut::{Curve, TransferTable};
use tracing::{trace, warn};

use crate::catalog::{virtual_channels, VirtualChannelInfo, VirtualChannelType};
use crate::{FilterConfiguration, FilterError, FilterResult};

/// One optional transformation per curve category.
#[derive(Debug, Clone, Default)]
pub struct ChannelTransforms {
    /// Per-channel tables for the real channels.
    pub real: Option<ColorTransform>,
    /// One table shared by every color channel.
    pub all_colors: Option<ColorTransform>,
    /// Hue curve.
    pub hue: Option<ColorTransform>,
    /// Saturation curve.
    pub saturation: Option<ColorTransform>,
    /// Lightness curve.
    pub lightness: Option<ColorTransform>,
}

impl ChannelTransforms {
    /// Number of categories with a transformation.
    pub fn count(&self) -> usize {
        [
            &self.real,
            &self.all_colors,
            &self.hue,
            &self.saturation,
            &self.lightness,
        ]
        .iter()
        .filter(|t| t.is_some())
        .count()
    }

    /// The categories in composite order.
    pub fn into_slots(self) -> [Option<ColorTransform>; 5] {
        [
            self.real,
            self.all_colors,
            self.hue,
            self.saturation,
            self.lightness,
        ]
    }

    /// Merges the categories into one transform.
    pub fn into_composite(self) -> CompositeTransform {
        CompositeTransform::optimized(self.into_slots())
    }
}

/// Builds the transformations for `config` on `cs`.
///
/// # Errors
///
/// - [`FilterError::InvalidColorSpace`] when `cs` does not validate
/// - [`FilterError::ChannelCountMismatch`] when the curve count differs from
///   the catalog size
pub fn compose(config: &FilterConfiguration, cs: &ColorSpace) -> FilterResult<ChannelTransforms> {
    cs.validate()?;
    let catalog = virtual_channels(cs);

    let curves = config.curves();
    if curves.len() != catalog.len() {
        warn!(
            space = %cs.id,
            expected = catalog.len(),
            got = curves.len(),
            "illegal number of curves for color space"
        );
        return Err(FilterError::ChannelCountMismatch {
            expected: catalog.len(),
            got: curves.len(),
        });
    }

    let mut real = Vec::new();
    let mut out = ChannelTransforms::default();

    for (info, curve) in catalog.iter().zip(curves) {
        match info.kind() {
            VirtualChannelType::Real => real.push((info, curve)),
            VirtualChannelType::AllColors => {
                out.all_colors = table_for(info, curve).map(|table| {
                    ChannelLut::shared(cs.channel_count(), &cs.color_channels(), table).into()
                });
            }
            VirtualChannelType::Hue => {
                out.hue = hsy_stage(cs, info, curve, HsyComponent::Hue);
            }
            VirtualChannelType::Saturation => {
                out.saturation = hsy_stage(cs, info, curve, HsyComponent::Saturation);
            }
            VirtualChannelType::Lightness => {
                out.lightness = table_for(info, curve).and_then(|table| {
                    let layout = rgb_layout(cs)?;
                    Some(LightnessCurve::new(table, cs.luma, layout).into())
                });
            }
        }
    }

    out.real = real_stage(cs, &real);

    trace!(space = %cs.id, stages = out.count(), "composed channel transforms");
    Ok(out)
}

/// Combined table stage for all real channels, identity-filled.
fn real_stage(cs: &ColorSpace, real: &[(&VirtualChannelInfo, &Curve)]) -> Option<ColorTransform> {
    if real.iter().all(|(_, curve)| curve.is_null()) {
        trace!("real channels elided");
        return None;
    }

    let mut tables: Vec<Option<TransferTable>> = vec![None; cs.channel_count()];
    for (info, curve) in real {
        let Some(index) = info.pixel_index() else {
            continue;
        };
        let domain = info.domain();
        let table = TransferTable::build_checked(curve, &domain)
            .unwrap_or_else(|| TransferTable::identity(domain));
        if let Some(slot) = tables.get_mut(index) {
            *slot = Some(table);
        }
    }
    Some(ChannelLut::per_channel(tables).into())
}

fn hsy_stage(
    cs: &ColorSpace,
    info: &VirtualChannelInfo,
    curve: &Curve,
    component: HsyComponent,
) -> Option<ColorTransform> {
    let table = table_for(info, curve)?;
    let layout = rgb_layout(cs)?;
    Some(HsyCurve::new(component, table, cs.luma, layout).into())
}

fn table_for(info: &VirtualChannelInfo, curve: &Curve) -> Option<TransferTable> {
    let table = TransferTable::build_checked(curve, &info.domain());
    if table.is_none() {
        trace!(channel = info.name(), "null curve elided");
    }
    table
}

fn rgb_layout(cs: &ColorSpace) -> Option<curves_core::RgbLayout> {
    let layout = cs.rgb_layout();
    if layout.is_none() {
        warn!(space = %cs.id, "color space has no RGB layout, skipping HSY curve");
    }
    layout
}
