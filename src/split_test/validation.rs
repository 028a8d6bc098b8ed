use std::collections::HashSet;

use super::types::SplitTest;

/// Validate split test definitions before they are used for assignment.
/// Returns all validation errors at once (not just the first).
pub fn validate_split_tests(tests: &[SplitTest]) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();
    let mut seen_tests = HashSet::new();

    for (i, test) in tests.iter().enumerate() {
        if !seen_tests.insert(test.id) {
            errors.push(format!("split_tests[{}].id: duplicate test id {}", i, test.id));
        }

        if test.variants.is_empty() {
            errors.push(format!("split_tests[{}].variants: at least one variant required", i));
            continue;
        }

        let mut seen_variants = HashSet::new();
        for (j, variant) in test.variants.iter().enumerate() {
            if variant.weight == 0 {
                errors.push(format!(
                    "split_tests[{}].variants[{}].weight: must be positive",
                    i, j
                ));
            }
            if !seen_variants.insert(variant.id.as_str()) {
                errors.push(format!(
                    "split_tests[{}].variants[{}].id: duplicate variant id '{}'",
                    i, j, variant.id
                ));
            }
        }

        if test.total_weight() == 0 {
            errors.push(format!("split_tests[{}]: total weight must be greater than zero", i));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::split_test::SplitTestVariant;

    fn split_test(id: i64, variants: Vec<SplitTestVariant>) -> SplitTest {
        SplitTest {
            id,
            name: None,
            page: None,
            variants,
        }
    }

    #[test]
    fn test_valid_tests() {
        let tests = vec![
            split_test(1, vec![SplitTestVariant::new("A", 50), SplitTestVariant::new("B", 50)]),
            split_test(2, vec![SplitTestVariant::new("control", 1)]),
        ];
        assert!(validate_split_tests(&tests).is_ok());
        assert!(validate_split_tests(&[]).is_ok());
    }

    #[test]
    fn test_no_variants() {
        let errors = validate_split_tests(&[split_test(1, vec![])]).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("split_tests[0].variants"));
    }

    #[test]
    fn test_zero_weights() {
        let tests = [split_test(
            1,
            vec![SplitTestVariant::new("A", 0), SplitTestVariant::new("B", 0)],
        )];
        let errors = validate_split_tests(&tests).unwrap_err();
        // two zero weights plus zero total
        assert_eq!(errors.len(), 3);
        assert!(errors[2].contains("total weight"));
    }

    #[test]
    fn test_duplicate_ids() {
        let tests = [
            split_test(1, vec![SplitTestVariant::new("A", 1), SplitTestVariant::new("A", 1)]),
            split_test(1, vec![SplitTestVariant::new("A", 1)]),
        ];
        let errors = validate_split_tests(&tests).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors[0].contains("duplicate variant id 'A'"));
        assert!(errors[1].contains("duplicate test id 1"));
    }
}
