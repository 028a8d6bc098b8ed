use super::category::Category;
use super::config::ScoringConfig;
use super::factors::Predicate;

const CATEGORY_MAX: u64 = 100;

/// Validate scoring tables at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_scoring(config: &ScoringConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    for category in Category::ALL {
        let key = category.config_key();
        let factors = config.factors(category);

        for (i, factor) in factors.iter().enumerate() {
            if factor.tiers.is_empty() {
                errors.push(format!(
                    "scoring.{}[{}]: factor '{}' has no tiers",
                    key, i, factor.field
                ));
            }
            for (j, tier) in factor.tiers.iter().enumerate() {
                if let Err(e) = Predicate::parse(&tier.when) {
                    errors.push(format!(
                        "scoring.{}[{}].tiers[{}].when: invalid '{}' - {}",
                        key, i, j, tier.when, e
                    ));
                }
            }
        }

        // u64 so large configured points cannot wrap past the check
        let max_total: u64 = factors.iter().map(|f| u64::from(f.max_points())).sum();
        if max_total > CATEGORY_MAX {
            errors.push(format!(
                "scoring.{}: factors can award up to {} points, more than {}",
                key, max_total, CATEGORY_MAX
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
