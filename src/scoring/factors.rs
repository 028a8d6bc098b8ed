use anyhow::{bail, Result};

/// One term of a tier predicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Term {
    Contains(String),
    ContainsAny(Vec<String>),
    LongerThan(usize), // character count, strictly greater
    Present,
}

impl Term {
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Some(text) = s.strip_prefix("contains:") {
            if text.is_empty() {
                bail!("contains: needs text to match");
            }
            Ok(Term::Contains(text.to_string()))
        } else if let Some(list) = s.strip_prefix("any:") {
            let options: Vec<String> = list
                .split('|')
                .filter(|o| !o.is_empty())
                .map(str::to_string)
                .collect();
            if options.is_empty() {
                bail!("any: needs at least one option");
            }
            Ok(Term::ContainsAny(options))
        } else if let Some(n) = s.strip_prefix("len>") {
            Ok(Term::LongerThan(n.trim().parse()?))
        } else if s == "present" {
            Ok(Term::Present)
        } else {
            bail!("Unknown predicate term: '{}'", s)
        }
    }

    pub fn matches(&self, answer: &str) -> bool {
        match self {
            Term::Contains(text) => answer.contains(text.as_str()),
            Term::ContainsAny(options) => options.iter().any(|o| answer.contains(o.as_str())),
            Term::LongerThan(n) => answer.chars().count() > *n,
            Term::Present => !answer.is_empty(),
        }
    }
}

/// Conjunction of terms, written as `term & term & ...`.
///
/// Examples: `contains:Within 5 minutes`, `contains:$ & len>50`,
/// `len>20 & any:$|K`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Predicate {
    terms: Vec<Term>,
}

impl Predicate {
    pub fn parse(s: &str) -> Result<Self> {
        if s.trim().is_empty() {
            bail!("Predicate is empty");
        }
        let terms = s
            .split(" & ")
            .map(Term::parse)
            .collect::<Result<Vec<_>>>()?;
        Ok(Predicate { terms })
    }

    pub fn matches(&self, answer: &str) -> bool {
        self.terms.iter().all(|t| t.matches(answer))
    }
}
