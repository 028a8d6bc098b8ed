use std::collections::BTreeMap;

use super::hash::hash_to_number;
use super::types::{total_weight, SplitTest, SplitTestVariant};

/// Deterministically pick a variant id for a visitor.
///
/// The same `(session_id, test_id, variants)` always yields the same id.
/// Across many sessions each variant's share converges to
/// `weight / total_weight`.
///
/// Bucket boundaries follow the variant list, so adding, removing or
/// reweighting variants reshuffles existing visitors.
///
/// Returns `None` only when `variants` is empty or every weight is zero;
/// split-test validation rejects both.
pub fn assign_variant<'a>(
    session_id: &str,
    test_id: i64,
    variants: &'a [SplitTestVariant],
) -> Option<&'a str> {
    let hash = hash_to_number(&format!("{}-{}", session_id, test_id));
    let total = total_weight(variants);
    let mut target = i64::try_from(u64::from(hash).checked_rem(total)?).ok()?;

    for variant in variants {
        target -= i64::from(variant.weight);
        if target < 0 {
            tracing::debug!(session_id, test_id, hash, variant = %variant.id, "variant assigned");
            return Some(variant.id.as_str());
        }
    }

    variants.first().map(|v| v.id.as_str())
}

impl SplitTest {
    /// Variant shown to this session
    pub fn assign(&self, session_id: &str) -> Option<&SplitTestVariant> {
        let id = assign_variant(session_id, self.id, &self.variants)?;
        self.variant(id)
    }

    /// Page content for this session: base copy with the assigned variant's
    /// overrides merged on top.
    pub fn content_for(
        &self,
        session_id: &str,
        base: &BTreeMap<String, String>,
    ) -> BTreeMap<String, String> {
        let mut content = base.clone();
        if let Some(overrides) = self
            .assign(session_id)
            .and_then(|v| v.content_overrides.as_ref())
        {
            content.extend(overrides.iter().map(|(k, v)| (k.clone(), v.clone())));
        }
        content
    }
}

/// Assign `sessions` synthetic visitors (`sim-0`, `sim-1`, ...) and count
/// how many land in each variant. Variants appear in test order.
pub fn simulate_distribution(test: &SplitTest, sessions: usize) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = test
        .variants
        .iter()
        .map(|v| (v.id.clone(), 0))
        .collect();

    for i in 0..sessions {
        if let Some(id) = assign_variant(&format!("sim-{}", i), test.id, &test.variants) {
            if let Some(entry) = counts.iter_mut().find(|(vid, _)| vid == id) {
                entry.1 += 1;
            }
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ab(a: u32, b: u32) -> Vec<SplitTestVariant> {
        vec![SplitTestVariant::new("A", a), SplitTestVariant::new("B", b)]
    }

    fn split_test(id: i64, variants: Vec<SplitTestVariant>) -> SplitTest {
        SplitTest {
            id,
            name: None,
            page: None,
            variants,
        }
    }

    #[test]
    fn test_known_assignment() {
        // hash("session-abc-7") = 1248019563, mod 100 = 63 -> B
        assert_eq!(assign_variant("session-abc", 7, &ab(50, 50)), Some("B"));
    }

    #[test]
    fn test_reweighting_can_flip_assignment() {
        assert_eq!(assign_variant("session-abc", 7, &ab(50, 50)), Some("B"));
        assert_eq!(assign_variant("session-abc", 7, &ab(90, 10)), Some("A"));
    }

    #[test]
    fn test_repeated_calls_agree() {
        let variants = ab(30, 70);
        let first = assign_variant("returning-visitor", 12, &variants);
        for _ in 0..1000 {
            assert_eq!(assign_variant("returning-visitor", 12, &variants), first);
        }
    }

    #[test]
    fn test_test_id_is_part_of_the_key() {
        let variants = ab(1, 1);
        let ids: Vec<_> = (0..20)
            .map(|t| assign_variant("same-visitor", t, &variants))
            .collect();
        assert!(ids.contains(&Some("A")));
        assert!(ids.contains(&Some("B")));
    }

    #[test]
    fn test_single_variant_always_wins() {
        let variants = vec![SplitTestVariant::new("only", 3)];
        for i in 0..50 {
            assert_eq!(assign_variant(&format!("s{}", i), 1, &variants), Some("only"));
        }
    }

    #[test]
    fn test_zero_weight_variant_never_chosen() {
        let variants = vec![
            SplitTestVariant::new("A", 1),
            SplitTestVariant::new("off", 0),
            SplitTestVariant::new("B", 1),
        ];
        for i in 0..200 {
            assert_ne!(assign_variant(&format!("s{}", i), 4, &variants), Some("off"));
        }
    }

    #[test]
    fn test_degenerate_inputs() {
        assert_eq!(assign_variant("s", 1, &[]), None);
        assert_eq!(assign_variant("s", 1, &ab(0, 0)), None);
    }

    #[test]
    fn test_even_split_distribution() {
        let variants = ab(50, 50);
        let a = (0..10_000)
            .filter(|i| assign_variant(&format!("visitor-{}", i), 1, &variants) == Some("A"))
            .count();
        assert!((4_500..=5_500).contains(&a), "A got {}", a);
    }

    #[test]
    fn test_simulate_distribution() {
        let test = split_test(3, ab(90, 10));
        let counts = simulate_distribution(&test, 10_000);
        assert_eq!(counts.len(), 2);
        assert_eq!(counts[0].0, "A");
        assert_eq!(counts[0].1 + counts[1].1, 10_000);
        assert!((8_500..=9_500).contains(&counts[0].1), "A got {}", counts[0].1);
    }

    #[test]
    fn test_content_for_merges_overrides() {
        let mut b = SplitTestVariant::new("B", 50);
        b.content_overrides = Some(BTreeMap::from([(
            "headline".to_string(),
            "Scale to $50K months".to_string(),
        )]));
        let test = split_test(7, vec![SplitTestVariant::new("A", 50), b]);

        let base = BTreeMap::from([
            ("headline".to_string(), "Grow your clinic".to_string()),
            ("cta".to_string(), "Get the roadmap".to_string()),
        ]);

        // session-abc lands in B for test 7
        let content = test.content_for("session-abc", &base);
        assert_eq!(content["headline"], "Scale to $50K months");
        assert_eq!(content["cta"], "Get the roadmap");
    }

    #[test]
    fn test_content_for_without_overrides_returns_base() {
        let test = split_test(7, ab(50, 50));
        let base = BTreeMap::from([("headline".to_string(), "Grow".to_string())]);
        assert_eq!(test.content_for("session-abc", &base), base);
    }
}
