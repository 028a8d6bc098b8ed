use serde::{Deserialize, Serialize};

use crate::scoring::ScoringConfig;
use crate::split_test::SplitTest;

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Point table overrides; omitted categories use the built-in tables
    #[serde(default)]
    pub scoring: Option<ScoringConfig>,

    #[serde(default)]
    pub split_tests: Vec<SplitTest>,
}

impl Config {
    pub fn split_test(&self, id: i64) -> Option<&SplitTest> {
        self.split_tests.iter().find(|t| t.id == id)
    }
}
