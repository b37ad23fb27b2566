//! Filter configuration: the stored curve set.
//!
//! Curves are addressed by position in the virtual channel catalog of the
//! color space the filter runs on. A configuration carries no color space
//! of its own, so it is reconciled against a catalog before use.
//!
//! # Persistence
//!
//! Two forms are supported:
//!
//! - a YAML or JSON document with one entry per channel:
//!
//! ```yaml
//! filter: perchannel
//! version: 1
//! channels:
//!   - name: Red
//!     points: [[0.0, 0.0], [0.5, 0.25], [1.0, 1.0]]
//! ```
//!
//! - a flat property map: `nTransfers` plus `curve0`, `curve1`, ... holding
//!   the curves' `"x,y;x,y;"` text form.

use std::collections::BTreeMap;
use std::path::Path;

use curves_lut::{ControlPoint, Curve};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::catalog::VirtualChannelInfo;
use crate::{FilterError, FilterResult};

/// Filter identifier stored in documents.
pub const FILTER_ID: &str = "perchannel";

/// Document format version.
pub const CONFIG_VERSION: u32 = 1;

/// Property key holding the curve count.
const COUNT_KEY: &str = "nTransfers";

/// Largest curve count accepted from a property map.
pub const MAX_CURVES: usize = 256;

/// Ordered curve set of the per-channel filter.
///
/// # Example
///
/// ```rust
/// use curves_core::ColorSpace;
/// use curves_filter::{virtual_channels, FilterConfiguration};
///
/// let catalog = virtual_channels(&ColorSpace::rgba8());
/// let config = FilterConfiguration::new(0);
///
/// // Empty configurations expand to one named identity curve per channel
/// let curves = config.reconcile(&catalog).unwrap();
/// assert_eq!(curves.len(), 8);
/// assert_eq!(curves[0].name(), Some("Red"));
/// assert!(curves.iter().all(|c| c.is_null()));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterConfiguration {
    curves: Vec<Curve>,
}

impl FilterConfiguration {
    /// Configuration with `channel_count` identity curves.
    ///
    /// A count of zero means "use the defaults of whatever color space the
    /// filter runs on".
    pub fn new(channel_count: usize) -> Self {
        Self {
            curves: vec![Curve::identity(); channel_count],
        }
    }

    /// Configuration holding `curves`.
    pub fn from_curves(curves: Vec<Curve>) -> Self {
        Self { curves }
    }

    /// Filter identifier.
    pub fn id(&self) -> &'static str {
        FILTER_ID
    }

    /// Document format version.
    pub fn version(&self) -> u32 {
        CONFIG_VERSION
    }

    /// Replaces the curve set.
    pub fn set_curves(&mut self, curves: Vec<Curve>) {
        self.curves = curves;
    }

    /// Replaces the curve at `index`.
    ///
    /// # Errors
    ///
    /// [`FilterError::ChannelCountMismatch`] when `index` is out of range.
    pub fn set_curve(&mut self, index: usize, curve: Curve) -> FilterResult<()> {
        let count = self.curves.len();
        let slot = self.curves.get_mut(index).ok_or(FilterError::ChannelCountMismatch {
            expected: index + 1,
            got: count,
        })?;
        *slot = curve;
        Ok(())
    }

    /// Stored curves, in catalog order.
    pub fn curves(&self) -> &[Curve] {
        &self.curves
    }

    /// Number of stored curves.
    pub fn curve_count(&self) -> usize {
        self.curves.len()
    }

    /// Whether this configuration asks for defaults.
    pub fn is_default(&self) -> bool {
        self.curves.is_empty()
    }

    /// Matches the stored curves to `catalog`.
    ///
    /// - no stored curves: one identity curve per entry, named after it
    /// - same count: the stored curves, positionally
    ///
    /// # Errors
    ///
    /// [`FilterError::ChannelCountMismatch`] when the counts differ.
    pub fn reconcile(&self, catalog: &[VirtualChannelInfo]) -> FilterResult<Vec<Curve>> {
        if self.curves.is_empty() {
            debug!(channels = catalog.len(), "using default curves");
            return Ok(catalog
                .iter()
                .map(|info| Curve::identity().with_name(info.name()))
                .collect());
        }

        if self.curves.len() != catalog.len() {
            warn!(
                expected = catalog.len(),
                got = self.curves.len(),
                "curve count does not match the color space"
            );
            return Err(FilterError::ChannelCountMismatch {
                expected: catalog.len(),
                got: self.curves.len(),
            });
        }

        Ok(self.curves.clone())
    }

    // ------------------------------------------------------------------------
    // Documents
    // ------------------------------------------------------------------------

    /// Serializes to YAML.
    pub fn to_yaml(&self) -> FilterResult<String> {
        Ok(serde_yaml::to_string(&self.to_raw())?)
    }

    /// Parses a YAML document.
    pub fn from_yaml(yaml: &str) -> FilterResult<Self> {
        let raw: RawConfig = serde_yaml::from_str(yaml)?;
        Self::from_raw(raw)
    }

    /// Serializes to pretty-printed JSON.
    pub fn to_json(&self) -> FilterResult<String> {
        Ok(serde_json::to_string_pretty(&self.to_raw())?)
    }

    /// Parses a JSON document.
    pub fn from_json(json: &str) -> FilterResult<Self> {
        let raw: RawConfig = serde_json::from_str(json)?;
        Self::from_raw(raw)
    }

    /// Writes the configuration to `path`; `.json` selects JSON, `.yaml` or
    /// `.yml` YAML.
    pub fn save(&self, path: impl AsRef<Path>) -> FilterResult<()> {
        let path = path.as_ref();
        let text = match DocFormat::from_path(path)? {
            DocFormat::Yaml => self.to_yaml()?,
            DocFormat::Json => self.to_json()?,
        };
        std::fs::write(path, text)?;
        debug!(path = %path.display(), curves = self.curves.len(), "saved configuration");
        Ok(())
    }

    /// Reads a configuration written by [`save`](Self::save).
    pub fn load(path: impl AsRef<Path>) -> FilterResult<Self> {
        let path = path.as_ref();
        let format = DocFormat::from_path(path)?;
        let text = std::fs::read_to_string(path)?;
        match format {
            DocFormat::Yaml => Self::from_yaml(&text),
            DocFormat::Json => Self::from_json(&text),
        }
    }

    fn to_raw(&self) -> RawConfig {
        RawConfig {
            filter: FILTER_ID.to_string(),
            version: CONFIG_VERSION,
            channels: self
                .curves
                .iter()
                .map(|c| RawChannel {
                    name: c.name().map(str::to_string),
                    points: c.points().iter().map(|p| [p.x, p.y]).collect(),
                })
                .collect(),
        }
    }

    fn from_raw(raw: RawConfig) -> FilterResult<Self> {
        if raw.filter != FILTER_ID {
            return Err(FilterError::Serialization(format!(
                "expected filter '{FILTER_ID}', got '{}'",
                raw.filter
            )));
        }
        if raw.version != CONFIG_VERSION {
            return Err(FilterError::Serialization(format!(
                "unsupported version {} (supported: {CONFIG_VERSION})",
                raw.version
            )));
        }

        let curves = raw
            .channels
            .into_iter()
            .map(|ch| -> FilterResult<Curve> {
                let points = ch.points.iter().map(|&[x, y]| ControlPoint::new(x, y)).collect();
                let curve = Curve::new(points)?;
                Ok(match ch.name {
                    Some(name) => curve.with_name(name),
                    None => curve,
                })
            })
            .collect::<FilterResult<Vec<_>>>()?;

        Ok(Self { curves })
    }

    // ------------------------------------------------------------------------
    // Property map
    // ------------------------------------------------------------------------

    /// Flat property form: `nTransfers` and `curveN`.
    pub fn to_properties(&self) -> BTreeMap<String, String> {
        let mut props = BTreeMap::new();
        props.insert(COUNT_KEY.to_string(), self.curves.len().to_string());
        for (i, curve) in self.curves.iter().enumerate() {
            props.insert(format!("curve{i}"), curve.to_string());
        }
        props
    }

    /// Reads the flat property form.
    ///
    /// A missing count means no curves. A missing `curveN` entry falls back
    /// to the identity curve.
    ///
    /// # Errors
    ///
    /// [`FilterError::Serialization`] for a bad count or one above
    /// [`MAX_CURVES`],
    /// [`FilterError::MalformedCurve`] for a bad curve.
    pub fn from_properties(props: &BTreeMap<String, String>) -> FilterResult<Self> {
        let count = match props.get(COUNT_KEY) {
            Some(v) => v.trim().parse::<usize>().map_err(|e| {
                FilterError::Serialization(format!("bad {COUNT_KEY} '{v}': {e}"))
            })?,
            None => 0,
        };
        if count > MAX_CURVES {
            return Err(FilterError::Serialization(format!(
                "{COUNT_KEY} {count} exceeds the limit of {MAX_CURVES}"
            )));
        }

        let curves = (0..count)
            .map(|i| -> FilterResult<Curve> {
                match props.get(&format!("curve{i}")) {
                    Some(text) => Ok(text.parse::<Curve>()?),
                    None => {
                        warn!(index = i, "missing curve property, using identity");
                        Ok(Curve::identity())
                    }
                }
            })
            .collect::<FilterResult<Vec<_>>>()?;

        Ok(Self { curves })
    }
}

/// On-disk document layout.
#[derive(Debug, Serialize, Deserialize)]
struct RawConfig {
    filter: String,
    version: u32,
    #[serde(default)]
    channels: Vec<RawChannel>,
}

#[derive(Debug, Serialize, Deserialize)]
struct RawChannel {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    points: Vec<[f32; 2]>,
}

enum DocFormat {
    Yaml,
    Json,
}

impl DocFormat {
    fn from_path(path: &Path) -> FilterResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("yaml" | "yml") => Ok(Self::Yaml),
            Some("json") => Ok(Self::Json),
            _ => Err(FilterError::Serialization(format!(
                "unsupported configuration file: {}",
                path.display()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::virtual_channels;
    use curves_core::ColorSpace;

    fn darken() -> Curve {
        Curve::new(vec![
            ControlPoint::new(0.0, 0.0),
            ControlPoint::new(0.5, 0.25),
            ControlPoint::new(1.0, 1.0),
        ])
        .unwrap()
    }

    // ========================================================================
    // Reconciliation
    // ========================================================================

    #[test]
    fn test_reconcile_empty_gives_named_defaults() {
        let catalog = virtual_channels(&ColorSpace::graya8());
        let curves = FilterConfiguration::new(0).reconcile(&catalog).unwrap();
        assert_eq!(curves.len(), 3);
        let names: Vec<_> = curves.iter().map(|c| c.name().unwrap()).collect();
        assert_eq!(names, ["Gray", "Alpha", "All Colors"]);
        assert!(curves.iter().all(Curve::is_null));
    }

    #[test]
    fn test_reconcile_positional() {
        let catalog = virtual_channels(&ColorSpace::graya8());
        let mut config = FilterConfiguration::new(3);
        config.set_curve(1, darken().with_name("Anything")).unwrap();
        let curves = config.reconcile(&catalog).unwrap();
        assert_eq!(curves[1].name(), Some("Anything"));
        assert!(curves[1].same_shape(&darken()));
    }

    #[test]
    fn test_reconcile_mismatch() {
        let catalog = virtual_channels(&ColorSpace::graya8());
        let err = FilterConfiguration::new(4).reconcile(&catalog).unwrap_err();
        assert!(matches!(err, FilterError::ChannelCountMismatch { expected: 3, got: 4 }));
    }

    #[test]
    fn test_set_curve_out_of_range() {
        let mut config = FilterConfiguration::new(2);
        assert!(config.set_curve(2, darken()).is_err());
        assert_eq!(config.curve_count(), 2);
    }

    #[test]
    fn test_factory_is_default() {
        let config = FilterConfiguration::new(0);
        assert!(config.is_default());
        assert_eq!(config.id(), "perchannel");
        assert_eq!(config.version(), 1);
    }

    // ========================================================================
    // Documents
    // ========================================================================

    #[test]
    fn test_yaml_roundtrip() {
        let config = FilterConfiguration::from_curves(vec![
            darken().with_name("Red"),
            Curve::identity(),
        ]);
        let yaml = config.to_yaml().unwrap();
        assert!(yaml.contains("perchannel"));
        let back = FilterConfiguration::from_yaml(&yaml).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_json_roundtrip() {
        let config = FilterConfiguration::from_curves(vec![darken(), darken().with_name("Blue")]);
        let back = FilterConfiguration::from_json(&config.to_json().unwrap()).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_document_rejects_bad_curve() {
        let yaml = "filter: perchannel\nversion: 1\nchannels:\n  - points: [[0.7, 0], [0.2, 1]]\n";
        let err = FilterConfiguration::from_yaml(yaml).unwrap_err();
        assert!(matches!(err, FilterError::MalformedCurve(_)));
    }

    #[test]
    fn test_document_rejects_wrong_filter_or_version() {
        let yaml = "filter: levels\nversion: 1\n";
        assert!(matches!(
            FilterConfiguration::from_yaml(yaml),
            Err(FilterError::Serialization(_))
        ));
        let yaml = "filter: perchannel\nversion: 7\n";
        assert!(matches!(
            FilterConfiguration::from_yaml(yaml),
            Err(FilterError::Serialization(_))
        ));
    }

    #[test]
    fn test_save_load() {
        let dir = tempfile::tempdir().unwrap();
        let config = FilterConfiguration::from_curves(vec![darken().with_name("Gray")]);
        for file in ["curves.yaml", "curves.json"] {
            let path = dir.path().join(file);
            config.save(&path).unwrap();
            assert_eq!(FilterConfiguration::load(&path).unwrap(), config);
        }
        let err = config.save(dir.path().join("curves.txt")).unwrap_err();
        assert!(matches!(err, FilterError::Serialization(_)));
    }

    // ========================================================================
    // Properties
    // ========================================================================

    #[test]
    fn test_properties_roundtrip() {
        let config = FilterConfiguration::from_curves(vec![Curve::identity(), darken()]);
        let props = config.to_properties();
        assert_eq!(props["nTransfers"], "2");
        assert_eq!(props["curve0"], "0,0;1,1;");
        assert_eq!(props["curve1"], "0,0;0.5,0.25;1,1;");

        let back = FilterConfiguration::from_properties(&props).unwrap();
        assert_eq!(back.curve_count(), 2);
        assert!(back.curves()[1].same_shape(&darken()));
    }

    #[test]
    fn test_properties_missing_entries() {
        let mut props = BTreeMap::new();
        assert!(FilterConfiguration::from_properties(&props).unwrap().is_default());

        props.insert("nTransfers".to_string(), "2".to_string());
        props.insert("curve1".to_string(), "0,1;1,0;".to_string());
        let config = FilterConfiguration::from_properties(&props).unwrap();
        assert!(config.curves()[0].is_null());
        assert!(!config.curves()[1].is_null());

        props.insert("nTransfers".to_string(), "two".to_string());
        assert!(matches!(
            FilterConfiguration::from_properties(&props),
            Err(FilterError::Serialization(_))
        ));
    }

    #[test]
    fn test_properties_count_is_bounded() {
        let mut props = BTreeMap::new();
        props.insert("nTransfers".to_string(), MAX_CURVES.to_string());
        let config = FilterConfiguration::from_properties(&props).unwrap();
        assert_eq!(config.curve_count(), MAX_CURVES);

        for huge in ["257", "2000000", "1000000000000"] {
            props.insert("nTransfers".to_string(), huge.to_string());
            assert!(matches!(
                FilterConfiguration::from_properties(&props),
                Err(FilterError::Serialization(_))
            ));
        }
    }
}
