//! Dense transfer tables sampled from curves.
//!
//! A [`TransferTable`] stores a curve evaluated at evenly spaced inputs over
//! `[0, 1]`. Entries are normalized outputs in `[0, 1]`; lookup linearly
//! interpolates between the two nearest entries.

use crate::{Curve, LutError, LutResult, TransferDomain};

/// Lookup table built from a curve for one channel numeric kind.
///
/// Tables are immutable once built and can be shared across threads.
///
/// # Example
///
/// ```rust
/// use curves_core::ChannelValueType;
/// use curves_lut::{Curve, TransferDomain, TransferTable};
///
/// let domain = TransferDomain::for_value_type(ChannelValueType::U8);
/// let table = TransferTable::identity(domain);
/// assert!((table.apply(0.5) - 0.5).abs() < 1e-6);
///
/// // Null curves never need a table
/// assert!(TransferTable::build_checked(&Curve::identity(), &domain).is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TransferTable {
    data: Vec<f32>,
    domain: TransferDomain,
}

impl TransferTable {
    /// Pass-through table over `domain`.
    pub fn identity(domain: TransferDomain) -> Self {
        let len = domain.table_len();
        let denom = (len - 1) as f32;
        let data = (0..len).map(|i| i as f32 / denom).collect();
        Self { data, domain }
    }

    /// Samples `curve` over `domain`.
    ///
    /// Entry `i` is the curve at `i / (len - 1)`, clamped to `[0, 1]`.
    pub fn build(curve: &Curve, domain: &TransferDomain) -> Self {
        let data = curve
            .sample(domain.table_len())
            .into_iter()
            .map(|v| v.clamp(0.0, 1.0))
            .collect();
        Self {
            data,
            domain: *domain,
        }
    }

    /// Like [`build`](Self::build), but returns `None` for null curves.
    pub fn build_checked(curve: &Curve, domain: &TransferDomain) -> Option<Self> {
        (!curve.is_null()).then(|| Self::build(curve, domain))
    }

    /// Wraps precomputed entries.
    ///
    /// # Errors
    ///
    /// [`LutError::InvalidSize`] for fewer than two entries.
    pub fn from_data(data: Vec<f32>, domain: TransferDomain) -> LutResult<Self> {
        if data.len() < 2 {
            return Err(LutError::InvalidSize(format!(
                "table needs at least 2 entries, got {}",
                data.len()
            )));
        }
        Ok(Self { data, domain })
    }

    /// Number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always false; tables hold at least two entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Raw entries.
    #[inline]
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Domain the table was built for.
    #[inline]
    pub fn domain(&self) -> &TransferDomain {
        &self.domain
    }

    /// Looks up `value`, clamped to `[0, 1]`, with linear interpolation.
    #[inline]
    pub fn apply(&self, value: f32) -> f32 {
        let t = if value.is_nan() { 0.0 } else { value.clamp(0.0, 1.0) };

        let last = self.data.len() - 1;
        let idx_f = t * last as f32;
        let idx0 = (idx_f as usize).min(last);
        let idx1 = (idx0 + 1).min(last);
        let frac = idx_f - idx0 as f32;

        self.data[idx0] + (self.data[idx1] - self.data[idx0]) * frac
    }

    /// Whether every entry equals its own input position.
    pub fn is_identity(&self, tolerance: f32) -> bool {
        let denom = (self.data.len() - 1) as f32;
        self.data
            .iter()
            .enumerate()
            .all(|(i, &v)| (v - i as f32 / denom).abs() <= tolerance)
    }
}
