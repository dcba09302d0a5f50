//! Configuration of heatmap preprocessing and ordering.

use crate::error::HeatmapError;
use crate::metric::MetricKind;
use crate::reorder::ReorderKind;
use serde::{Deserialize, Serialize};

/// Default number of discrete buckets values are quantized into.
pub const DEFAULT_BUCKET_COUNT: usize = 50;

// =#========================================================================#=
// VALUE DOMAIN
// =#========================================================================#=
/// Closed range `[min, max]` of expected matrix values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueDomain {
    pub min: f64,
    pub max: f64,
}

impl ValueDomain {
    /// Creates a validated domain.
    ///
    /// # Errors
    /// [HeatmapError::InvalidDomain] unless both bounds are finite and `min < max`.
    pub fn new(min: f64, max: f64) -> Result<Self, HeatmapError> {
        let domain = ValueDomain { min, max };
        domain.validate()?;
        Ok(domain)
    }

    /// Checks that both bounds are finite and `min < max`.
    pub fn validate(&self) -> Result<(), HeatmapError> {
        if self.min.is_finite() && self.max.is_finite() && self.min < self.max {
            Ok(())
        } else {
            Err(HeatmapError::InvalidDomain {
                min: self.min,
                max: self.max,
            })
        }
    }

    /// Returns whether `value` lies in `[min, max]`; `false` for NaN.
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }

    /// Returns `max - min`.
    pub fn width(&self) -> f64 {
        self.max - self.min
    }
}

impl Default for ValueDomain {
    fn default() -> Self {
        ValueDomain { min: 0.0, max: 1.0 }
    }
}

/// How to treat values outside of the [ValueDomain] when bucketizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DomainPolicy {
    /// Values below `min` land in the first bucket, values above `max` in the last
    #[default]
    Clamp,
    /// Values outside the domain are an error
    Strict,
}

// =#========================================================================#=
// HEATMAP SETTINGS
// =#========================================================================#=
/// Settings for a [Heatmap](crate::heatmap::Heatmap).
///
/// Missing fields take their default when deserialized.
///
/// # Example
/// ```
/// use heatorder::heatmap::{DomainPolicy, HeatmapSettings};
/// use heatorder::metric::MetricKind;
/// use heatorder::reorder::ReorderKind;
///
/// let settings = HeatmapSettings::default()
///     .with_bucket_count(10)
///     .with_domain_policy(DomainPolicy::Strict)
///     .with_metric(MetricKind::Correlation)
///     .with_reordering(ReorderKind::None);
/// assert_eq!(settings.bucket_count, 10);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeatmapSettings {
    /// Number of discrete buckets values are quantized into
    pub bucket_count: usize,
    /// Range of expected values
    pub domain: ValueDomain,
    /// Treatment of values outside of `domain`
    pub domain_policy: DomainPolicy,
    /// Dissimilarity used for clustering and reordering
    pub metric: MetricKind,
    /// Leaf-order refinement applied to every clustered axis
    pub reordering: ReorderKind,
}

impl Default for HeatmapSettings {
    fn default() -> Self {
        HeatmapSettings {
            bucket_count: DEFAULT_BUCKET_COUNT,
            domain: ValueDomain::default(),
            domain_policy: DomainPolicy::default(),
            metric: MetricKind::default(),
            reordering: ReorderKind::default(),
        }
    }
}

impl HeatmapSettings {
    /// Sets the number of buckets.
    pub fn with_bucket_count(mut self, bucket_count: usize) -> Self {
        self.bucket_count = bucket_count;
        self
    }

    /// Sets the value domain.
    pub fn with_domain(mut self, domain: ValueDomain) -> Self {
        self.domain = domain;
        self
    }

    /// Sets the out-of-domain policy.
    pub fn with_domain_policy(mut self, domain_policy: DomainPolicy) -> Self {
        self.domain_policy = domain_policy;
        self
    }

    /// Sets the distance metric.
    pub fn with_metric(mut self, metric: MetricKind) -> Self {
        self.metric = metric;
        self
    }

    /// Sets the reordering heuristic.
    pub fn with_reordering(mut self, reordering: ReorderKind) -> Self {
        self.reordering = reordering;
        self
    }
}
