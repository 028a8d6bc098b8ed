use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One arm of a split test.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SplitTestVariant {
    pub id: String,

    /// Relative share of traffic; must be positive
    pub weight: u32,

    /// Page copy keys replaced when this variant is shown
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_overrides: Option<BTreeMap<String, String>>,
}

impl SplitTestVariant {
    pub fn new(id: impl Into<String>, weight: u32) -> Self {
        Self {
            id: id.into(),
            weight,
            content_overrides: None,
        }
    }
}

/// A funnel page experiment with ordered, weighted variants.
///
/// The first variant is the fallback arm.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SplitTest {
    pub id: i64,

    #[serde(default)]
    pub name: Option<String>,

    /// Funnel page this test runs on (e.g. "checkout", "upsell")
    #[serde(default)]
    pub page: Option<String>,

    pub variants: Vec<SplitTestVariant>,
}

impl SplitTest {
    pub fn total_weight(&self) -> u64 {
        total_weight(&self.variants)
    }

    pub fn variant(&self, id: &str) -> Option<&SplitTestVariant> {
        self.variants.iter().find(|v| v.id == id)
    }

    pub fn display_name(&self) -> String {
        match &self.name {
            Some(name) => format!("#{} {}", self.id, name),
            None => format!("#{}", self.id),
        }
    }
}

pub(crate) fn total_weight(variants: &[SplitTestVariant]) -> u64 {
    variants.iter().map(|v| u64::from(v.weight)).sum()
}
