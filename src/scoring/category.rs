use serde::{Deserialize, Serialize};
use std::fmt;

/// The four dimensions a business is scored on.
///
/// Declaration order is the tie-break order for strength/gap selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Category {
    #[serde(rename = "Lead Generation")]
    LeadGeneration,
    #[serde(rename = "Offer Clarity")]
    OfferClarity,
    #[serde(rename = "Social Presence")]
    SocialPresence,
    #[serde(rename = "Conversion Process")]
    ConversionProcess,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::LeadGeneration,
        Category::OfferClarity,
        Category::SocialPresence,
        Category::ConversionProcess,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Category::LeadGeneration => "Lead Generation",
            Category::OfferClarity => "Offer Clarity",
            Category::SocialPresence => "Social Presence",
            Category::ConversionProcess => "Conversion Process",
        }
    }

    /// Key used for this category in the scoring config file
    pub fn config_key(&self) -> &'static str {
        match self {
            Category::LeadGeneration => "lead_generation",
            Category::OfferClarity => "offer_clarity",
            Category::SocialPresence => "social_presence",
            Category::ConversionProcess => "conversion_process",
        }
    }

    pub fn industry_average(&self) -> u32 {
        match self {
            Category::LeadGeneration => 55,
            Category::OfferClarity => 60,
            Category::SocialPresence => 45,
            Category::ConversionProcess => 50,
        }
    }

    pub fn top_performers(&self) -> u32 {
        match self {
            Category::LeadGeneration => 85,
            Category::OfferClarity => 90,
            Category::SocialPresence => 80,
            Category::ConversionProcess => 85,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
