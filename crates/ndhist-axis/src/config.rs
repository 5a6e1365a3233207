//! Serializable axis descriptions
//!
//! An [`AxisConfig`] carries exactly the parameters needed to rebuild an axis
//! of a given kind. Configurations can be validated, compared and exchanged
//! without committing to a concrete axis; [`AxisConfig::build`] materializes
//! them.
//!
//! ```rust
//! use ndhist_axis::{AxisConfig, AxisKind, BinnedAxis};
//!
//! let config = AxisConfig::irregular(vec![0.0, 1.0, 3.0, 6.0]).with_title("energy");
//! let axis = config.build().unwrap();
//! assert_eq!(axis.kind(), AxisKind::Irregular);
//! assert_eq!(axis.find_bin(2.0), 2);
//! assert_eq!(axis.config(), config);
//! ```

use crate::axis::{Axis, AxisKind};
use crate::base::BinnedAxis;
use crate::equidistant::EquidistantAxis;
use crate::growable::GrowableAxis;
use crate::irregular::IrregularAxis;
use crate::labels::LabeledAxis;
use ndhist_core::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Parameters describing one axis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AxisConfig {
    /// `n_bins` equal bins over `[low, high)`
    Equidistant {
        #[serde(default)]
        title: String,
        n_bins: usize,
        low: f64,
        high: f64,
    },
    /// Like `Equidistant`, with a range that grows on demand
    Growable {
        #[serde(default)]
        title: String,
        n_bins: usize,
        low: f64,
        high: f64,
    },
    /// Explicit bin borders
    Irregular {
        #[serde(default)]
        title: String,
        borders: Vec<f64>,
    },
    /// Labeled bins; `n_bins` defaults to the number of labels
    Labels {
        #[serde(default)]
        title: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        n_bins: Option<usize>,
        labels: Vec<String>,
    },
}

impl AxisConfig {
    pub fn equidistant(n_bins: usize, low: f64, high: f64) -> Self {
        AxisConfig::Equidistant {
            title: String::new(),
            n_bins,
            low,
            high,
        }
    }

    pub fn growable(n_bins: usize, low: f64, high: f64) -> Self {
        AxisConfig::Growable {
            title: String::new(),
            n_bins,
            low,
            high,
        }
    }

    pub fn irregular(borders: Vec<f64>) -> Self {
        AxisConfig::Irregular {
            title: String::new(),
            borders,
        }
    }

    pub fn labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        AxisConfig::Labels {
            title: String::new(),
            n_bins: None,
            labels: labels.into_iter().map(Into::into).collect(),
        }
    }

    /// Labeled axis with room for `n_bins` labels
    pub fn labels_with_capacity<I, S>(n_bins: usize, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        AxisConfig::Labels {
            title: String::new(),
            n_bins: Some(n_bins),
            labels: labels.into_iter().map(Into::into).collect(),
        }
    }

    /// Set the title of the described axis
    pub fn with_title(mut self, new_title: impl Into<String>) -> Self {
        match &mut self {
            AxisConfig::Equidistant { title, .. }
            | AxisConfig::Growable { title, .. }
            | AxisConfig::Irregular { title, .. }
            | AxisConfig::Labels { title, .. } => *title = new_title.into(),
        }
        self
    }

    pub fn title(&self) -> &str {
        match self {
            AxisConfig::Equidistant { title, .. }
            | AxisConfig::Growable { title, .. }
            | AxisConfig::Irregular { title, .. }
            | AxisConfig::Labels { title, .. } => title,
        }
    }

    pub fn kind(&self) -> AxisKind {
        match self {
            AxisConfig::Equidistant { .. } => AxisKind::Equidistant,
            AxisConfig::Growable { .. } => AxisKind::Growable,
            AxisConfig::Irregular { .. } => AxisKind::Irregular,
            AxisConfig::Labels { .. } => AxisKind::Labels,
        }
    }

    /// Number of regular bins the described axis will have
    pub fn n_bins_no_over(&self) -> usize {
        match self {
            AxisConfig::Equidistant { n_bins, .. } | AxisConfig::Growable { n_bins, .. } => {
                *n_bins
            }
            AxisConfig::Irregular { borders, .. } => borders.len().saturating_sub(1),
            AxisConfig::Labels { n_bins, labels, .. } => n_bins.unwrap_or(labels.len()),
        }
    }

    /// Materialize the described axis
    pub fn build(&self) -> Result<Axis> {
        let built = self.try_build();
        if let Err(err) = &built {
            warn!(kind = %self.kind(), %err, "rejected axis configuration");
        }
        built
    }

    fn try_build(&self) -> Result<Axis> {
        let axis: Axis = match self {
            AxisConfig::Equidistant {
                title,
                n_bins,
                low,
                high,
            } => EquidistantAxis::new(*n_bins, *low, *high)?
                .with_title(title.as_str())
                .into(),
            AxisConfig::Growable {
                title,
                n_bins,
                low,
                high,
            } => GrowableAxis::new(*n_bins, *low, *high)?
                .with_title(title.as_str())
                .into(),
            AxisConfig::Irregular { title, borders } => IrregularAxis::new(borders.clone())?
                .with_title(title.as_str())
                .into(),
            AxisConfig::Labels {
                title,
                n_bins,
                labels,
            } => LabeledAxis::new(n_bins.unwrap_or(labels.len()), labels.iter().cloned())?
                .with_title(title.as_str())
                .into(),
        };
        Ok(axis)
    }
}

impl From<&Axis> for AxisConfig {
    fn from(axis: &Axis) -> Self {
        let title = axis.title().to_string();
        match axis {
            Axis::Equidistant(eq) => AxisConfig::Equidistant {
                title,
                n_bins: eq.n_bins_no_over(),
                low: eq.low(),
                high: eq.high(),
            },
            Axis::Growable(grow) => AxisConfig::Growable {
                title,
                n_bins: grow.n_bins_no_over(),
                low: grow.minimum(),
                high: grow.maximum(),
            },
            Axis::Irregular(irr) => AxisConfig::Irregular {
                title,
                borders: irr.borders().to_vec(),
            },
            Axis::Labels(lab) => {
                let n_bins = lab.n_bins_no_over();
                AxisConfig::Labels {
                    title,
                    n_bins: (n_bins != lab.labels().len()).then_some(n_bins),
                    labels: lab.labels().to_vec(),
                }
            }
        }
    }
}

impl TryFrom<&AxisConfig> for Axis {
    type Error = Error;

    fn try_from(config: &AxisConfig) -> Result<Self> {
        config.build()
    }
}
