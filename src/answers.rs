use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;

/// Quiz answer fields the scoring tables know about.
///
/// Serialized as the camelCase key the quiz front end submits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum QuizField {
    CrmUsage,
    LeadResponseSpeed,
    MissedLeads,
    ChatAgents,
    OfferConfidence,
    MainOffer,
    MonthlyRevenue,
    ContentFrequency,
    AudienceSize,
    InstagramHandle,
    MonthlyAdBudget,
    NinetyDayGoal,
    Website,
}

impl QuizField {
    pub const ALL: [QuizField; 13] = [
        QuizField::CrmUsage,
        QuizField::LeadResponseSpeed,
        QuizField::MissedLeads,
        QuizField::ChatAgents,
        QuizField::OfferConfidence,
        QuizField::MainOffer,
        QuizField::MonthlyRevenue,
        QuizField::ContentFrequency,
        QuizField::AudienceSize,
        QuizField::InstagramHandle,
        QuizField::MonthlyAdBudget,
        QuizField::NinetyDayGoal,
        QuizField::Website,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            QuizField::CrmUsage => "crmUsage",
            QuizField::LeadResponseSpeed => "leadResponseSpeed",
            QuizField::MissedLeads => "missedLeads",
            QuizField::ChatAgents => "chatAgents",
            QuizField::OfferConfidence => "offerConfidence",
            QuizField::MainOffer => "mainOffer",
            QuizField::MonthlyRevenue => "monthlyRevenue",
            QuizField::ContentFrequency => "contentFrequency",
            QuizField::AudienceSize => "audienceSize",
            QuizField::InstagramHandle => "instagramHandle",
            QuizField::MonthlyAdBudget => "monthlyAdBudget",
            QuizField::NinetyDayGoal => "ninetyDayGoal",
            QuizField::Website => "website",
        }
    }
}

impl fmt::Display for QuizField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Raw quiz answers as submitted: answer key -> answer text.
///
/// Lookups never fail; a missing key reads as the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct QuizAnswers {
    values: HashMap<String, String>,
}

impl QuizAnswers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer text for a known field ("" when absent)
    pub fn get(&self, field: QuizField) -> &str {
        self.get_raw(field.key())
    }

    /// Answer text for any key ("" when absent)
    pub fn get_raw(&self, key: &str) -> &str {
        self.values.get(key).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, field: QuizField, value: impl Into<String>) {
        self.values.insert(field.key().to_string(), value.into());
    }

    pub fn with(mut self, field: QuizField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Build answers from a parsed JSON object.
    ///
    /// Strings are taken as-is, numbers and booleans by their textual form,
    /// `null` is dropped. Nested arrays/objects are rejected.
    pub fn from_json(value: serde_json::Value) -> Result<Self> {
        let serde_json::Value::Object(map) = value else {
            bail!("Quiz answers must be a JSON object");
        };

        let mut values = HashMap::with_capacity(map.len());
        for (key, value) in map {
            let text = match value {
                serde_json::Value::Null => continue,
                serde_json::Value::String(s) => s,
                serde_json::Value::Bool(b) => b.to_string(),
                serde_json::Value::Number(n) => n.to_string(),
                other => bail!("Answer '{}' must be a string, got {}", key, other),
            };
            values.insert(key, text);
        }
        Ok(Self { values })
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QuizAnswers {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Load quiz answers from a JSON file
pub fn load_answers(path: &Path) -> Result<QuizAnswers> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read answers file at {}", path.display()))?;

    let value: serde_json::Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse answers: invalid JSON in {}", path.display()))?;

    QuizAnswers::from_json(value)
        .with_context(|| format!("Invalid answers in {}", path.display()))
}
