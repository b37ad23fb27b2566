//! Editing domain of a channel's numeric kind.
//!
//! Curves always live in `[0, 1]`; the domain describes how that range is
//! presented to a user editing a channel and how finely a table for the
//! channel needs to be sampled.
//!
//! | Kind | Range | Shift | Scale |
//! |------|-------|-------|-------|
//! | unsigned `w` bytes | `[0, 2^(8w) - 1]` | `0` | `2^(8w)` |
//! | signed `w` bytes | `[-2^(8w)/2, 2^(8w)/2 - 1]` | `0.5` | `2^(8w)` |
//! | float | `[0, 100]` | `0` | `100` |

use curves_core::ChannelValueType;

/// Largest table length; 16-bit resolution.
pub const MAX_TABLE_LEN: usize = 1 << 16;

/// Value range, shift and scale for one channel numeric kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransferDomain {
    /// Kind this domain was derived from.
    pub value_type: ChannelValueType,
    /// Smallest displayed channel value.
    pub min: i64,
    /// Largest displayed channel value.
    pub max: i64,
    /// Offset subtracted from a normalized value before scaling.
    pub shift: f64,
    /// Factor from shifted normalized values to channel values.
    pub scale: f64,
}

impl TransferDomain {
    /// Domain for `value_type`.
    pub fn for_value_type(value_type: ChannelValueType) -> Self {
        if value_type.is_float() {
            return Self {
                value_type,
                min: 0,
                max: 100,
                shift: 0.0,
                scale: 100.0,
            };
        }

        let span = 1i64 << value_type.bits();
        if value_type.is_signed() {
            Self {
                value_type,
                min: -span / 2,
                max: span / 2 - 1,
                shift: 0.5,
                scale: span as f64,
            }
        } else {
            Self {
                value_type,
                min: 0,
                max: span - 1,
                shift: 0.0,
                scale: span as f64,
            }
        }
    }

    /// Number of entries a table over this domain holds.
    ///
    /// One per representable integer value, capped at [`MAX_TABLE_LEN`].
    /// Float kinds always use the cap.
    pub fn table_len(&self) -> usize {
        if self.value_type.is_float() {
            return MAX_TABLE_LEN;
        }
        let count = (self.max - self.min + 1) as u64;
        count.min(MAX_TABLE_LEN as u64) as usize
    }

    /// Converts a normalized curve coordinate to the displayed channel value.
    #[inline]
    pub fn to_channel_value(&self, normalized: f64) -> f64 {
        (normalized - self.shift) * self.scale
    }

    /// Converts a displayed channel value back to a normalized coordinate.
    #[inline]
    pub fn from_channel_value(&self, value: f64) -> f64 {
        value / self.scale + self.shift
    }
}
