//! Presentation module
//!
//! Controls when and where the product is visible to consumers. Visibility
//! periods and category validity periods may be open-ended on either side.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::models::common::one_or_many;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct DgPresentationModule {
    /// Overrides the visibility given by `productConsumerVisibility`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_absolute_consumer_visibility: Option<bool>,
    /// Limits product visibility to the given periods
    #[serde(rename = "productConsumerVisibility", skip_serializing_if = "Option::is_none")]
    pub product_consumer_visibilities: Option<Vec<TimePeriod>>,
    #[serde(rename = "presentationCategory", skip_serializing_if = "Option::is_none")]
    pub presentation_categories: Option<Vec<PresentationCategory>>,
}

impl DgPresentationModule {
    /// Whether the product is visible to consumers at `at`.
    ///
    /// The absolute visibility flag wins when present. Without visibility
    /// periods the product is visible.
    pub fn is_visible_at(&self, at: DateTime<FixedOffset>) -> bool {
        if let Some(absolute) = self.product_absolute_consumer_visibility {
            return absolute;
        }
        match &self.product_consumer_visibilities {
            Some(periods) => periods.iter().any(|p| p.contains(at)),
            None => true,
        }
    }
}

/// A category the product is associated with
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PresentationCategory {
    /// Category tree name
    pub tree_name: String,
    /// Category external ID
    pub ext_id: String,
    /// A single period in flat documents, a list otherwise
    #[serde(
        rename = "validityPeriod",
        default,
        deserialize_with = "one_or_many",
        skip_serializing_if = "Option::is_none"
    )]
    pub validity_periods: Option<Vec<TimePeriod>>,
}

impl PresentationCategory {
    pub fn new(tree_name: impl Into<String>, ext_id: impl Into<String>) -> Self {
        Self {
            tree_name: tree_name.into(),
            ext_id: ext_id.into(),
            validity_periods: None,
        }
    }
}

/// A time range, open-ended when either bound is absent
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct TimePeriod {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date_time: Option<DateTime<FixedOffset>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date_time: Option<DateTime<FixedOffset>>,
}

impl TimePeriod {
    pub fn new(
        start_date_time: Option<DateTime<FixedOffset>>,
        end_date_time: Option<DateTime<FixedOffset>>,
    ) -> Self {
        Self {
            start_date_time,
            end_date_time,
        }
    }

    /// Start inclusive, end exclusive
    pub fn contains(&self, at: DateTime<FixedOffset>) -> bool {
        self.start_date_time.is_none_or(|start| start <= at)
            && self.end_date_time.is_none_or(|end| at < end)
    }
}
