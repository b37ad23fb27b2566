//! Channel numeric storage kinds.
//!
//! Every physical channel of a color space stores its values in one of the
//! kinds below. The kind decides the editing domain of a curve for that
//! channel (see `curves-lut`) and how raw bytes map to the normalized `f32`
//! values the transformations work with.
//!
//! # Normalization
//!
//! | Kind | Raw range | Normalized |
//! |------|-----------|------------|
//! | `U8`/`U16`/`U32` | `[0, 2^n - 1]` | `raw / max` |
//! | `I8`/`I16` | `[-2^(n-1), 2^(n-1) - 1]` | `(raw - min) / (max - min)` |
//! | `F16`/`F32`/`F64` | unbounded | `raw` (nominal `[0, 1]`) |
//!
//! # Usage
//!
//! ```rust
//! use curves_core::ChannelValueType;
//!
//! let vt = ChannelValueType::U16;
//! assert_eq!(vt.size(), 2);
//!
//! let mut raw = [0u8; 2];
//! vt.write(&mut raw, 1.0);
//! assert_eq!(u16::from_ne_bytes(raw), 65535);
//! assert_eq!(vt.read(&raw), 1.0);
//! ```

use half::f16;

/// Numeric storage kind of a single channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ChannelValueType {
    /// 8-bit unsigned integer.
    #[default]
    U8,
    /// 16-bit unsigned integer.
    U16,
    /// 32-bit unsigned integer.
    U32,
    /// 8-bit signed integer.
    I8,
    /// 16-bit signed integer.
    I16,
    /// 16-bit half-precision float.
    F16,
    /// 32-bit single-precision float.
    F32,
    /// 64-bit double-precision float.
    F64,
}

impl ChannelValueType {
    /// All kinds, in declaration order.
    pub const ALL: [ChannelValueType; 8] = [
        Self::U8,
        Self::U16,
        Self::U32,
        Self::I8,
        Self::I16,
        Self::F16,
        Self::F32,
        Self::F64,
    ];

    /// Number of bytes per channel value.
    #[inline]
    pub const fn size(&self) -> usize {
        match self {
            Self::U8 | Self::I8 => 1,
            Self::U16 | Self::I16 | Self::F16 => 2,
            Self::U32 | Self::F32 => 4,
            Self::F64 => 8,
        }
    }

    /// Number of bits per channel value.
    #[inline]
    pub const fn bits(&self) -> u32 {
        self.size() as u32 * 8
    }

    /// Whether this is a floating-point kind.
    #[inline]
    pub const fn is_float(&self) -> bool {
        matches!(self, Self::F16 | Self::F32 | Self::F64)
    }

    /// Whether this is a signed integer kind.
    #[inline]
    pub const fn is_signed(&self) -> bool {
        matches!(self, Self::I8 | Self::I16)
    }

    /// Whether this is an unsigned integer kind.
    #[inline]
    pub const fn is_unsigned(&self) -> bool {
        matches!(self, Self::U8 | Self::U16 | Self::U32)
    }

    /// Smallest and largest raw value of an integer kind.
    ///
    /// Float kinds report their nominal `[0, 1]` range.
    pub const fn raw_range(&self) -> (f64, f64) {
        match self {
            Self::U8 => (0.0, u8::MAX as f64),
            Self::U16 => (0.0, u16::MAX as f64),
            Self::U32 => (0.0, u32::MAX as f64),
            Self::I8 => (i8::MIN as f64, i8::MAX as f64),
            Self::I16 => (i16::MIN as f64, i16::MAX as f64),
            Self::F16 | Self::F32 | Self::F64 => (0.0, 1.0),
        }
    }

    /// Maps a raw value to the normalized domain.
    #[inline]
    pub fn normalize(&self, raw: f64) -> f32 {
        if self.is_float() {
            return raw as f32;
        }
        let (min, max) = self.raw_range();
        ((raw - min) / (max - min)) as f32
    }

    /// Maps a normalized value back to the raw domain.
    ///
    /// Integer kinds clamp to their range and round to nearest.
    #[inline]
    pub fn denormalize(&self, value: f32) -> f64 {
        if self.is_float() {
            return value as f64;
        }
        let (min, max) = self.raw_range();
        let v = (value as f64).clamp(0.0, 1.0);
        (min + v * (max - min)).round()
    }

    /// Reads one native-endian channel value and normalizes it.
    ///
    /// `bytes` must hold at least [`size`](Self::size) bytes.
    pub fn read(&self, bytes: &[u8]) -> f32 {
        let raw = match self {
            Self::U8 => bytes[0] as f64,
            Self::I8 => bytes[0] as i8 as f64,
            Self::U16 => u16::from_ne_bytes([bytes[0], bytes[1]]) as f64,
            Self::I16 => i16::from_ne_bytes([bytes[0], bytes[1]]) as f64,
            Self::U32 => u32::from_ne_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]) as f64,
            Self::F16 => f16::from_ne_bytes([bytes[0], bytes[1]]).to_f64(),
            Self::F32 => f32::from_ne_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]) as f64,
            Self::F64 => {
                let mut b = [0u8; 8];
                b.copy_from_slice(&bytes[..8]);
                f64::from_ne_bytes(b)
            }
        };
        self.normalize(raw)
    }

    /// Denormalizes `value` and writes it as native-endian bytes.
    ///
    /// `bytes` must hold at least [`size`](Self::size) bytes.
    pub fn write(&self, bytes: &mut [u8], value: f32) {
        let raw = self.denormalize(value);
        match self {
            Self::U8 => bytes[0] = raw as u8,
            Self::I8 => bytes[0] = (raw as i8) as u8,
            Self::U16 => bytes[..2].copy_from_slice(&(raw as u16).to_ne_bytes()),
            Self::I16 => bytes[..2].copy_from_slice(&(raw as i16).to_ne_bytes()),
            Self::U32 => bytes[..4].copy_from_slice(&(raw as u32).to_ne_bytes()),
            Self::F16 => bytes[..2].copy_from_slice(&f16::from_f64(raw).to_ne_bytes()),
            Self::F32 => bytes[..4].copy_from_slice(&(raw as f32).to_ne_bytes()),
            Self::F64 => bytes[..8].copy_from_slice(&raw.to_ne_bytes()),
        }
    }

    /// Short name for display.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::F16 => "f16",
            Self::F32 => "f32",
            Self::F64 => "f64",
        }
    }
}

impl std::fmt::Display for ChannelValueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sizes() {
        assert_eq!(ChannelValueType::U8.size(), 1);
        assert_eq!(ChannelValueType::I16.size(), 2);
        assert_eq!(ChannelValueType::F16.size(), 2);
        assert_eq!(ChannelValueType::U32.size(), 4);
        assert_eq!(ChannelValueType::F64.size(), 8);
        assert_eq!(ChannelValueType::U16.bits(), 16);
    }

    #[test]
    fn test_kind_predicates() {
        for vt in ChannelValueType::ALL {
            let count = [vt.is_float(), vt.is_signed(), vt.is_unsigned()]
                .iter()
                .filter(|b| **b)
                .count();
            assert_eq!(count, 1, "{vt} must be exactly one kind");
        }
    }

    #[test]
    fn test_u8_read_write() {
        let vt = ChannelValueType::U8;
        let mut b = [0u8; 1];
        vt.write(&mut b, 0.5);
        assert_eq!(b[0], 128);
        assert_relative_eq!(vt.read(&[255]), 1.0);
        assert_relative_eq!(vt.read(&[0]), 0.0);
    }

    #[test]
    fn test_signed_normalization() {
        let vt = ChannelValueType::I8;
        assert_relative_eq!(vt.read(&[i8::MIN as u8]), 0.0);
        assert_relative_eq!(vt.read(&[i8::MAX as u8]), 1.0);

        let mut b = [0u8; 1];
        vt.write(&mut b, 0.0);
        assert_eq!(b[0] as i8, -128);
    }

    #[test]
    fn test_integer_write_clamps() {
        let vt = ChannelValueType::U16;
        let mut b = [0u8; 2];
        vt.write(&mut b, 1.7);
        assert_eq!(u16::from_ne_bytes(b), u16::MAX);
        vt.write(&mut b, -0.3);
        assert_eq!(u16::from_ne_bytes(b), 0);
    }

    #[test]
    fn test_float_passthrough() {
        let vt = ChannelValueType::F16;
        let mut b = [0u8; 2];
        vt.write(&mut b, 0.25);
        assert_relative_eq!(vt.read(&b), 0.25);

        let vt = ChannelValueType::F32;
        let mut b = [0u8; 4];
        vt.write(&mut b, 1.5);
        assert_relative_eq!(vt.read(&b), 1.5);
    }
}
