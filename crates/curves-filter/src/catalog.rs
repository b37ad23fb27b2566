//! Virtual channel catalog.
//!
//! Unifies a color space's physical channels with the synthesized channels
//! a curve can target. The catalog is a pure function of the color space;
//! configurations address curves by position in it.
//!
//! | Model | Entries |
//! |-------|---------|
//! | RGB, CMYK | real channels, Hue, Saturation, Lightness, All Colors |
//! | Gray, Lab | real channels, All Colors |
//! | Alpha | real channels |
//!
//! Real channels come in display order with the alpha channel moved last.

use curves_core::{ChannelInfo, ChannelValueType, ColorSpace};
use curves_lut::TransferDomain;
use tracing::debug;

/// Kind of a virtual channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VirtualChannelType {
    /// A physical channel of the color space.
    Real,
    /// Hue of the pixel's color.
    Hue,
    /// Saturation of the pixel's color.
    Saturation,
    /// Lightness of the pixel's color.
    Lightness,
    /// Every color channel at once, alpha excluded.
    AllColors,
}

impl VirtualChannelType {
    /// Display name of a synthetic kind.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Real => "Real",
            Self::Hue => "Hue",
            Self::Saturation => "Saturation",
            Self::Lightness => "Lightness",
            Self::AllColors => "All Colors",
        }
    }
}

/// One entry of the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct VirtualChannelInfo {
    kind: VirtualChannelType,
    pixel_index: Option<usize>,
    value_type: ChannelValueType,
    is_alpha: bool,
    name: String,
}

impl VirtualChannelInfo {
    /// Entry for the physical channel at memory position `pixel_index`.
    pub fn real(pixel_index: usize, channel: &ChannelInfo) -> Self {
        Self {
            kind: VirtualChannelType::Real,
            pixel_index: Some(pixel_index),
            value_type: channel.value_type,
            is_alpha: channel.is_alpha(),
            name: channel.name.clone(),
        }
    }

    /// Entry for a synthetic channel.
    pub fn synthetic(kind: VirtualChannelType, value_type: ChannelValueType) -> Self {
        Self {
            kind,
            pixel_index: None,
            value_type,
            is_alpha: false,
            name: kind.name().to_string(),
        }
    }

    /// Kind of this entry.
    #[inline]
    pub fn kind(&self) -> VirtualChannelType {
        self.kind
    }

    /// Memory position of a real channel; `None` for synthetic entries.
    #[inline]
    pub fn pixel_index(&self) -> Option<usize> {
        self.pixel_index
    }

    /// Numeric kind the curve for this entry is edited in.
    #[inline]
    pub fn value_type(&self) -> ChannelValueType {
        self.value_type
    }

    /// Size in bytes of one value of this entry.
    #[inline]
    pub fn channel_size(&self) -> usize {
        self.value_type.size()
    }

    /// Whether this is the alpha channel.
    #[inline]
    pub fn is_alpha(&self) -> bool {
        self.is_alpha
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Editing domain for curves on this entry.
    pub fn domain(&self) -> TransferDomain {
        TransferDomain::for_value_type(self.value_type)
    }
}

/// Builds the catalog for `cs`.
pub fn virtual_channels(cs: &ColorSpace) -> Vec<VirtualChannelInfo> {
    let order = cs.display_order();
    let (colors, alpha): (Vec<usize>, Vec<usize>) =
        order.into_iter().partition(|&i| !cs.channels[i].is_alpha());

    let mut catalog: Vec<VirtualChannelInfo> = colors
        .iter()
        .chain(&alpha)
        .map(|&i| VirtualChannelInfo::real(i, &cs.channels[i]))
        .collect();

    if cs.model.supports_hsl() {
        for kind in [
            VirtualChannelType::Hue,
            VirtualChannelType::Saturation,
            VirtualChannelType::Lightness,
        ] {
            catalog.push(VirtualChannelInfo::synthetic(kind, ChannelValueType::F32));
        }
    }

    if let Some(&first) = colors.first() {
        let vt = cs.channels[first].value_type;
        catalog.push(VirtualChannelInfo::synthetic(VirtualChannelType::AllColors, vt));
    }

    debug!(space = %cs.id, channels = catalog.len(), "virtual channel catalog");
    catalog
}
