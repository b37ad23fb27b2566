//! Color space descriptors.
//!
//! A [`ColorSpace`] is an immutable description of a pixel layout: the
//! physical channels in memory order, the order they are shown to the user
//! in, the numeric kind of every channel, and the luma coefficients used to
//! derive perceptual quantities from RGB-like primaries.
//!
//! # Memory order vs display order
//!
//! Channels are stored in memory order. Each channel also carries a
//! `display_position`; sorting by it gives the order a user sees (for
//! `BGRA` memory layouts the display order is still R, G, B, A).
//!
//! ```
//! use curves_core::ColorSpace;
//!
//! let cs = ColorSpace::bgra8();
//! let names: Vec<_> = cs
//!     .display_order()
//!     .into_iter()
//!     .map(|i| cs.channels[i].name.as_str())
//!     .collect();
//! assert_eq!(names, ["Red", "Green", "Blue", "Alpha"]);
//! ```
//!
//! # Built-in spaces
//!
//! | Constructor | Model | Memory layout |
//! |-------------|-------|---------------|
//! | [`ColorSpace::rgba8`] | RGB | R G B A (u8) |
//! | [`ColorSpace::bgra8`] | RGB | B G R A (u8) |
//! | [`ColorSpace::rgba16`] | RGB | R G B A (u16) |
//! | [`ColorSpace::rgba_f16`] | RGB | R G B A (f16) |
//! | [`ColorSpace::rgba_f32`] | RGB | R G B A (f32) |
//! | [`ColorSpace::graya8`] | Gray | Y A (u8) |
//! | [`ColorSpace::gray_i16`] | Gray | Y (i16) |
//! | [`ColorSpace::laba16`] | Lab | L a b A (u16) |
//! | [`ColorSpace::cmyka8`] | CMYK | C M Y K A (u8) |
//! | [`ColorSpace::alpha8`] | Alpha | A (u8) |

use std::fmt;

use crate::error::{Error, Result};
use crate::format::ChannelValueType;
use crate::pixel::{cmyk_to_rgb, rgb_to_cmyk, REC709_LUMA};

/// Color model family of a color space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorModel {
    /// Red, green, blue primaries.
    Rgb,
    /// Cyan, magenta, yellow, key.
    Cmyk,
    /// Single gray channel.
    Gray,
    /// CIE L*a*b*.
    Lab,
    /// Alpha-only masks.
    Alpha,
}

impl ColorModel {
    /// Number of color (non-alpha) channels the model requires.
    pub const fn color_channels(&self) -> usize {
        match self {
            Self::Rgb | Self::Lab => 3,
            Self::Cmyk => 4,
            Self::Gray => 1,
            Self::Alpha => 0,
        }
    }

    /// Whether hue, saturation and lightness can be derived from this model.
    ///
    /// True for models convertible to RGB. Lab and gray spaces have no
    /// meaningful hue in this engine; alpha masks have no color at all.
    pub const fn supports_hsl(&self) -> bool {
        matches!(self, Self::Rgb | Self::Cmyk)
    }

    /// Short model identifier.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Rgb => "RGBA",
            Self::Cmyk => "CMYKA",
            Self::Gray => "GRAYA",
            Self::Lab => "LABA",
            Self::Alpha => "A",
        }
    }
}

impl fmt::Display for ColorModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Role of a physical channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelRole {
    /// Carries color information.
    Color,
    /// Carries opacity.
    Alpha,
}

/// One physical channel of a color space.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelInfo {
    /// User-visible channel name.
    pub name: String,
    /// Numeric storage kind.
    pub value_type: ChannelValueType,
    /// Color or alpha.
    pub role: ChannelRole,
    /// Position in the user-facing display order.
    pub display_position: usize,
}

impl ChannelInfo {
    /// Creates a color channel.
    pub fn color(
        name: impl Into<String>,
        value_type: ChannelValueType,
        display_position: usize,
    ) -> Self {
        Self {
            name: name.into(),
            value_type,
            role: ChannelRole::Color,
            display_position,
        }
    }

    /// Creates an alpha channel.
    pub fn alpha(
        name: impl Into<String>,
        value_type: ChannelValueType,
        display_position: usize,
    ) -> Self {
        Self {
            name: name.into(),
            value_type,
            role: ChannelRole::Alpha,
            display_position,
        }
    }

    /// Channel size in bytes.
    #[inline]
    pub fn size(&self) -> usize {
        self.value_type.size()
    }

    /// Whether this is the alpha channel.
    #[inline]
    pub fn is_alpha(&self) -> bool {
        self.role == ChannelRole::Alpha
    }
}

/// Where the RGB components of a pixel live.
///
/// Indices are memory positions within a pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RgbLayout {
    /// Direct red, green, blue channels.
    Rgb([usize; 3]),
    /// Cyan, magenta, yellow, key channels, converted on the fly.
    Cmyk([usize; 4]),
}

impl RgbLayout {
    /// Reads an RGB triplet from a normalized pixel.
    #[inline]
    pub fn read(&self, px: &[f32]) -> [f32; 3] {
        match *self {
            Self::Rgb([r, g, b]) => [px[r], px[g], px[b]],
            Self::Cmyk([c, m, y, k]) => cmyk_to_rgb([px[c], px[m], px[y], px[k]]),
        }
    }

    /// Writes an RGB triplet back into a normalized pixel.
    #[inline]
    pub fn write(&self, px: &mut [f32], rgb: [f32; 3]) {
        match *self {
            Self::Rgb([r, g, b]) => {
                px[r] = rgb[0];
                px[g] = rgb[1];
                px[b] = rgb[2];
            }
            Self::Cmyk(idx) => {
                let cmyk = rgb_to_cmyk(rgb);
                for (i, v) in idx.into_iter().zip(cmyk) {
                    px[i] = v;
                }
            }
        }
    }
}

/// Immutable color space descriptor.
///
/// Fields are public so hosts can describe arbitrary layouts; use
/// [`ColorSpace::new`] or [`ColorSpace::validate`] before trusting one.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorSpace {
    /// Identifier, e.g. `"RGBA8"`.
    pub id: String,
    /// Color model family.
    pub model: ColorModel,
    /// Physical channels in memory order.
    pub channels: Vec<ChannelInfo>,
    /// Luma coefficients `[r, g, b]`.
    pub luma: [f32; 3],
}

impl ColorSpace {
    /// Creates and validates a color space.
    pub fn new(
        id: impl Into<String>,
        model: ColorModel,
        channels: Vec<ChannelInfo>,
        luma: [f32; 3],
    ) -> Result<Self> {
        let cs = Self {
            id: id.into(),
            model,
            channels,
            luma,
        };
        cs.validate()?;
        Ok(cs)
    }

    /// Checks the descriptor invariants.
    ///
    /// - at least one channel
    /// - display positions form a permutation of `0..n`
    /// - at most one alpha channel
    /// - color channel count matches the model
    /// - finite luma weights
    pub fn validate(&self) -> Result<()> {
        let n = self.channels.len();
        if n == 0 {
            return Err(Error::InvalidColorSpace(format!("{}: no channels", self.id)));
        }

        let mut seen = vec![false; n];
        for ch in &self.channels {
            let pos = ch.display_position;
            if pos >= n || seen[pos] {
                return Err(Error::InvalidColorSpace(format!(
                    "{}: bad display position {} for channel '{}'",
                    self.id, pos, ch.name
                )));
            }
            seen[pos] = true;
        }

        let alphas = self.channels.iter().filter(|c| c.is_alpha()).count();
        if alphas > 1 {
            return Err(Error::InvalidColorSpace(format!(
                "{}: {} alpha channels",
                self.id, alphas
            )));
        }

        let colors = n - alphas;
        if colors != self.model.color_channels() {
            return Err(Error::InvalidColorSpace(format!(
                "{}: model {} needs {} color channels, got {}",
                self.id,
                self.model,
                self.model.color_channels(),
                colors
            )));
        }

        if self.luma.iter().any(|w| !w.is_finite()) {
            return Err(Error::InvalidColorSpace(format!("{}: non-finite luma", self.id)));
        }

        Ok(())
    }

    /// Number of physical channels.
    #[inline]
    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    /// Pixel size in bytes.
    pub fn pixel_size(&self) -> usize {
        self.channels.iter().map(ChannelInfo::size).sum()
    }

    /// Memory index of the alpha channel, if any.
    pub fn alpha_index(&self) -> Option<usize> {
        self.channels.iter().position(ChannelInfo::is_alpha)
    }

    /// Memory indices sorted by display position.
    pub fn display_order(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.channels.len()).collect();
        order.sort_by_key(|&i| self.channels[i].display_position);
        order
    }

    /// Memory indices of the color channels, in display order.
    pub fn color_channels(&self) -> Vec<usize> {
        self.display_order()
            .into_iter()
            .filter(|&i| !self.channels[i].is_alpha())
            .collect()
    }

    /// RGB access for models that support it.
    pub fn rgb_layout(&self) -> Option<RgbLayout> {
        let colors = self.color_channels();
        match (self.model, colors.as_slice()) {
            (ColorModel::Rgb, &[r, g, b]) => Some(RgbLayout::Rgb([r, g, b])),
            (ColorModel::Cmyk, &[c, m, y, k]) => Some(RgbLayout::Cmyk([c, m, y, k])),
            _ => None,
        }
    }

    /// Decodes one raw pixel into normalized channel values.
    pub fn decode_pixel(&self, bytes: &[u8], out: &mut [f32]) -> Result<()> {
        self.check_pixel(bytes.len(), out.len())?;
        let mut offset = 0;
        for (ch, v) in self.channels.iter().zip(out.iter_mut()) {
            *v = ch.value_type.read(&bytes[offset..]);
            offset += ch.size();
        }
        Ok(())
    }

    /// Encodes normalized channel values into one raw pixel.
    pub fn encode_pixel(&self, px: &[f32], out: &mut [u8]) -> Result<()> {
        self.check_pixel(out.len(), px.len())?;
        let mut offset = 0;
        for (ch, &v) in self.channels.iter().zip(px) {
            ch.value_type.write(&mut out[offset..], v);
            offset += ch.size();
        }
        Ok(())
    }

    fn check_pixel(&self, bytes: usize, values: usize) -> Result<()> {
        if values != self.channels.len() {
            return Err(Error::ChannelMismatch {
                expected: self.channels.len(),
                actual: values,
            });
        }
        let pixel_size = self.pixel_size();
        if bytes < pixel_size {
            return Err(Error::BufferSize { len: bytes, pixel_size });
        }
        Ok(())
    }

    // ------------------------------------------------------------------------
    // Built-in spaces
    // ------------------------------------------------------------------------

    fn rgba(id: &str, vt: ChannelValueType) -> Self {
        Self {
            id: id.to_string(),
            model: ColorModel::Rgb,
            channels: vec![
                ChannelInfo::color("Red", vt, 0),
                ChannelInfo::color("Green", vt, 1),
                ChannelInfo::color("Blue", vt, 2),
                ChannelInfo::alpha("Alpha", vt, 3),
            ],
            luma: REC709_LUMA,
        }
    }

    /// 8-bit RGBA, memory order R, G, B, A.
    pub fn rgba8() -> Self {
        Self::rgba("RGBA8", ChannelValueType::U8)
    }

    /// 16-bit RGBA.
    pub fn rgba16() -> Self {
        Self::rgba("RGBA16", ChannelValueType::U16)
    }

    /// Half-float RGBA.
    pub fn rgba_f16() -> Self {
        Self::rgba("RGBAF16", ChannelValueType::F16)
    }

    /// 32-bit float RGBA.
    pub fn rgba_f32() -> Self {
        Self::rgba("RGBAF32", ChannelValueType::F32)
    }

    /// 8-bit RGBA stored as B, G, R, A in memory.
    pub fn bgra8() -> Self {
        let vt = ChannelValueType::U8;
        Self {
            id: "BGRA8".to_string(),
            model: ColorModel::Rgb,
            channels: vec![
                ChannelInfo::color("Blue", vt, 2),
                ChannelInfo::color("Green", vt, 1),
                ChannelInfo::color("Red", vt, 0),
                ChannelInfo::alpha("Alpha", vt, 3),
            ],
            luma: REC709_LUMA,
        }
    }

    /// 8-bit gray with alpha.
    pub fn graya8() -> Self {
        let vt = ChannelValueType::U8;
        Self {
            id: "GRAYA8".to_string(),
            model: ColorModel::Gray,
            channels: vec![
                ChannelInfo::color("Gray", vt, 0),
                ChannelInfo::alpha("Alpha", vt, 1),
            ],
            luma: REC709_LUMA,
        }
    }

    /// Signed 16-bit gray without alpha.
    pub fn gray_i16() -> Self {
        Self {
            id: "GRAYI16".to_string(),
            model: ColorModel::Gray,
            channels: vec![ChannelInfo::color("Gray", ChannelValueType::I16, 0)],
            luma: REC709_LUMA,
        }
    }

    /// 16-bit L*a*b* with alpha.
    pub fn laba16() -> Self {
        let vt = ChannelValueType::U16;
        Self {
            id: "LABA16".to_string(),
            model: ColorModel::Lab,
            channels: vec![
                ChannelInfo::color("L", vt, 0),
                ChannelInfo::color("a", vt, 1),
                ChannelInfo::color("b", vt, 2),
                ChannelInfo::alpha("Alpha", vt, 3),
            ],
            luma: REC709_LUMA,
        }
    }

    /// 8-bit CMYK with alpha.
    pub fn cmyka8() -> Self {
        let vt = ChannelValueType::U8;
        Self {
            id: "CMYKA8".to_string(),
            model: ColorModel::Cmyk,
            channels: vec![
                ChannelInfo::color("Cyan", vt, 0),
                ChannelInfo::color("Magenta", vt, 1),
                ChannelInfo::color("Yellow", vt, 2),
                ChannelInfo::color("Black", vt, 3),
                ChannelInfo::alpha("Alpha", vt, 4),
            ],
            luma: REC709_LUMA,
        }
    }

    /// 8-bit alpha mask.
    pub fn alpha8() -> Self {
        Self {
            id: "ALPHA8".to_string(),
            model: ColorModel::Alpha,
            channels: vec![ChannelInfo::alpha("Alpha", ChannelValueType::U8, 0)],
            luma: REC709_LUMA,
        }
    }
}

impl fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {} channels)", self.id, self.model, self.channels.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtins_are_valid() {
        for cs in [
            ColorSpace::rgba8(),
            ColorSpace::bgra8(),
            ColorSpace::rgba16(),
            ColorSpace::rgba_f16(),
            ColorSpace::rgba_f32(),
            ColorSpace::graya8(),
            ColorSpace::gray_i16(),
            ColorSpace::laba16(),
            ColorSpace::cmyka8(),
            ColorSpace::alpha8(),
        ] {
            assert!(cs.validate().is_ok(), "{cs} should be valid");
        }
    }

    #[test]
    fn test_empty_space_is_invalid() {
        let err = ColorSpace::new("EMPTY", ColorModel::Gray, vec![], REC709_LUMA);
        assert!(matches!(err, Err(Error::InvalidColorSpace(_))));
    }

    #[test]
    fn test_duplicate_display_position_is_invalid() {
        let vt = ChannelValueType::U8;
        let err = ColorSpace::new(
            "BAD",
            ColorModel::Gray,
            vec![ChannelInfo::color("Gray", vt, 0), ChannelInfo::alpha("Alpha", vt, 0)],
            REC709_LUMA,
        );
        assert!(err.is_err());
    }

    #[test]
    fn test_model_channel_count_checked() {
        let vt = ChannelValueType::U8;
        let err = ColorSpace::new(
            "BAD",
            ColorModel::Rgb,
            vec![ChannelInfo::color("Red", vt, 0), ChannelInfo::color("Green", vt, 1)],
            REC709_LUMA,
        );
        assert!(err.is_err());
    }

    #[test]
    fn test_bgra_layout() {
        let cs = ColorSpace::bgra8();
        assert_eq!(cs.display_order(), vec![2, 1, 0, 3]);
        assert_eq!(cs.rgb_layout(), Some(RgbLayout::Rgb([2, 1, 0])));
        assert_eq!(cs.alpha_index(), Some(3));
    }

    #[test]
    fn test_rgb_layout_absent_for_lab() {
        assert!(ColorSpace::laba16().rgb_layout().is_none());
        assert!(ColorSpace::graya8().rgb_layout().is_none());
    }

    #[test]
    fn test_pixel_codec_roundtrip_u16() {
        let cs = ColorSpace::rgba16();
        assert_eq!(cs.pixel_size(), 8);

        let mut raw = [0u8; 8];
        cs.encode_pixel(&[0.0, 0.5, 1.0, 1.0], &mut raw).unwrap();
        let mut px = [0.0_f32; 4];
        cs.decode_pixel(&raw, &mut px).unwrap();

        assert_eq!(px[0], 0.0);
        assert!((px[1] - 0.5).abs() < 1e-4);
        assert_eq!(px[2], 1.0);
    }

    #[test]
    fn test_decode_rejects_wrong_channel_count() {
        let cs = ColorSpace::rgba8();
        let mut px = [0.0_f32; 3];
        let err = cs.decode_pixel(&[0, 0, 0, 0], &mut px);
        assert!(matches!(err, Err(Error::ChannelMismatch { expected: 4, actual: 3 })));
    }

    #[test]
    fn test_cmyk_layout_read_write() {
        let cs = ColorSpace::cmyka8();
        let layout = cs.rgb_layout().unwrap();
        let mut px = [0.0, 0.0, 0.0, 0.0, 1.0];
        assert_eq!(layout.read(&px), [1.0, 1.0, 1.0]);

        layout.write(&mut px, [0.0, 0.0, 0.0]);
        assert_eq!(px[3], 1.0);
        assert_eq!(px[4], 1.0);
    }
}
