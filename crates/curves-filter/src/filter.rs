//! The per-channel color adjustment filter.

use curves_color::{CompositeTransform, PixelProcessor};
use curves_core::{ColorModel, ColorSpace};
use tracing::{debug, warn};

use crate::catalog::virtual_channels;
use crate::compose::compose;
use crate::config::FILTER_ID;
use crate::{FilterConfiguration, FilterResult};

/// Adjusts every channel of a color space through user curves.
///
/// # Example
///
/// ```rust
/// use curves_core::ColorSpace;
/// use curves_filter::PerChannelFilter;
/// use curves_lut::Curve;
///
/// let filter = PerChannelFilter::new();
/// let cs = ColorSpace::rgba8();
///
/// let mut config = filter.default_configuration(&cs).unwrap();
/// // Darken all color channels
/// config.set_curve(7, "0,0;0.5,0.25;1,1;".parse::<Curve>().unwrap()).unwrap();
///
/// let mut pixels = vec![128u8, 128, 128, 200];
/// filter.apply(&cs, &config, &mut pixels).unwrap();
/// assert!(pixels[0] < 80);
/// assert_eq!(pixels[3], 200);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PerChannelFilter;

impl PerChannelFilter {
    /// User-visible name.
    pub const NAME: &'static str = "Color Adjustment";

    /// Creates the filter.
    pub fn new() -> Self {
        Self
    }

    /// Filter identifier.
    pub fn id(&self) -> &'static str {
        FILTER_ID
    }

    /// User-visible name.
    pub fn name(&self) -> &'static str {
        Self::NAME
    }

    /// Configuration that defers to the defaults of the color space it is
    /// applied to.
    pub fn factory_configuration(&self) -> FilterConfiguration {
        FilterConfiguration::new(0)
    }

    /// One named identity curve per virtual channel of `cs`.
    pub fn default_configuration(&self, cs: &ColorSpace) -> FilterResult<FilterConfiguration> {
        cs.validate()?;
        let curves = self.factory_configuration().reconcile(&virtual_channels(cs))?;
        Ok(FilterConfiguration::from_curves(curves))
    }

    /// Builds the composite transform for `config` on `cs`.
    ///
    /// An invalid color space yields the identity transform. An empty
    /// configuration uses the color space defaults.
    ///
    /// # Errors
    ///
    /// [`FilterError::ChannelCountMismatch`](crate::FilterError::ChannelCountMismatch)
    /// when the configuration was made for a different channel layout.
    pub fn create_transformation(
        &self,
        cs: &ColorSpace,
        config: &FilterConfiguration,
    ) -> FilterResult<CompositeTransform> {
        if let Err(e) = cs.validate() {
            warn!(space = %cs.id, error = %e, "invalid color space, using identity transform");
            return Ok(CompositeTransform::identity());
        }

        let curves = config.reconcile(&virtual_channels(cs))?;
        let transforms = compose(&FilterConfiguration::from_curves(curves), cs)?;
        let composite = transforms.into_composite();
        debug!(space = %cs.id, stages = composite.len(), "created transformation");
        Ok(composite)
    }

    /// Whether the filter must also visit fully transparent pixels.
    pub fn needs_transparent_pixels(&self, cs: &ColorSpace) -> bool {
        cs.model == ColorModel::Alpha
    }

    /// Applies the filter to raw pixels of `cs`.
    pub fn apply(
        &self,
        cs: &ColorSpace,
        config: &FilterConfiguration,
        data: &mut [u8],
    ) -> FilterResult<()> {
        let composite = self.create_transformation(cs, config)?;
        PixelProcessor::new().process_bytes(&composite, cs, data)?;
        Ok(())
    }

    /// Applies the filter to normalized pixels of `cs`, channels in memory
    /// order.
    pub fn apply_f32(
        &self,
        cs: &ColorSpace,
        config: &FilterConfiguration,
        data: &mut [f32],
    ) -> FilterResult<()> {
        let composite = self.create_transformation(cs, config)?;
        PixelProcessor::new().process_f32(&composite, data, cs.channel_count())?;
        Ok(())
    }
}
