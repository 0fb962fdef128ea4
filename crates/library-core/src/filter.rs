//! Classification rules: `index=choice` pairs turned into an include mask.
//!
//! A rule string such as `"1=1,2=2,3=1,4=2"` selects categories by their
//! 1-based position in a fixed enumeration and marks each one included (`1`)
//! or excluded (`2`). Categories the rule does not mention are excluded, so
//! the rule acts as an allow-list.
//!
//! Parsing is all-or-nothing: the first malformed pair aborts with a
//! [`RuleError`] and no mask is produced.
//!
//! # Examples
//!
//! ```rust
//! use library_core::{filter::CategoryMask, models::{Choice, Rarity}};
//!
//! let mask = CategoryMask::parse("1=1,2=2,3=1,4=2", Rarity::OPTIONS).unwrap();
//! assert!(mask.includes(Rarity::Low));
//! assert!(!mask.includes(Rarity::Medium));
//! assert!(mask.matches("High"));
//! assert!(!mask.matches("Legendary"));
//! ```

use crate::{error::RuleError, models::Choice};

/// Choice value that includes a category.
const INCLUDE: &str = "1";
/// Choice value that excludes a category.
const EXCLUDE: &str = "2";

/// Per-category include decision, in declared category order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryMask<C> {
    entries: Vec<(C, bool)>,
}

impl<C: Choice> CategoryMask<C> {
    /// Parses a rule string against `categories`, whose order defines the
    /// valid indexes `1..=categories.len()`.
    pub fn parse(rules: &str, categories: &[C]) -> Result<Self, RuleError> {
        if rules.trim().is_empty() {
            return Err(RuleError::Empty);
        }

        let pairs: Vec<&str> = rules
            .split(',')
            .map(str::trim)
            .filter(|pair| !pair.is_empty())
            .collect();
        if pairs.is_empty() {
            return Err(RuleError::Empty);
        }

        let mut entries: Vec<(C, bool)> = categories.iter().map(|c| (*c, false)).collect();
        for pair in pairs {
            let (position, include) = parse_pair(pair, categories.len())?;
            entries[position].1 = include;
        }

        Ok(Self { entries })
    }

    /// Whether `category` is included.
    pub fn includes(&self, category: C) -> bool {
        self.entries
            .iter()
            .any(|(candidate, include)| *candidate == category && *include)
    }

    /// Whether a stored category value passes the mask. The value must equal
    /// a known category label (surrounding whitespace ignored); unknown values
    /// never match.
    pub fn matches(&self, value: &str) -> bool {
        let value = value.trim();
        self.entries
            .iter()
            .any(|(category, include)| *include && category.label() == value)
    }

    /// Keeps the records whose category value passes the mask, in order.
    pub fn apply<'a, R, F>(&self, records: &'a [R], category_of: F) -> Vec<&'a R>
    where
        F: Fn(&R) -> &str,
    {
        records
            .iter()
            .filter(|record| self.matches(category_of(record)))
            .collect()
    }

    /// Categories and their decisions in declared order.
    pub fn entries(&self) -> &[(C, bool)] {
        &self.entries
    }

    /// Included categories in declared order.
    pub fn included(&self) -> impl Iterator<Item = C> + '_ {
        self.entries
            .iter()
            .filter(|(_, include)| *include)
            .map(|(category, _)| *category)
    }
}

/// Validates one `index=choice` pair and returns the zero-based position and
/// the include decision.
fn parse_pair(pair: &str, category_count: usize) -> Result<(usize, bool), RuleError> {
    let mut sides = pair.split('=');
    let (index, choice) = match (sides.next(), sides.next(), sides.next()) {
        (Some(index), Some(choice), None) => (index.trim(), choice.trim()),
        _ => {
            return Err(RuleError::MalformedPair {
                pair: pair.to_string(),
            })
        }
    };

    if !is_digits(index) || !is_digits(choice) {
        return Err(RuleError::NotNumeric {
            pair: pair.to_string(),
        });
    }

    let position = index
        .parse::<usize>()
        .ok()
        .filter(|index| (1..=category_count).contains(index))
        .ok_or_else(|| RuleError::IndexOutOfRange {
            index: index.to_string(),
            max: category_count,
            pair: pair.to_string(),
        })?;

    let include = match choice {
        INCLUDE => true,
        EXCLUDE => false,
        _ => {
            return Err(RuleError::InvalidChoice {
                choice: choice.to_string(),
                pair: pair.to_string(),
            })
        }
    };

    Ok((position - 1, include))
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Artifact, Rarity, VisitorStatus};

    fn artifact(code: &str, rarity: &str) -> Artifact {
        Artifact {
            code: code.to_string(),
            description: format!("{code} description"),
            rarity: rarity.to_string(),
            status: "Stored".to_string(),
        }
    }

    #[test]
    fn test_parse_full_rule() {
        let mask = CategoryMask::parse("1=1,2=2,3=1,4=2", Rarity::OPTIONS).unwrap();
        assert_eq!(
            mask.entries(),
            &[
                (Rarity::Low, true),
                (Rarity::Medium, false),
                (Rarity::High, true),
                (Rarity::Forbidden, false),
            ]
        );
    }

    #[test]
    fn test_unmentioned_categories_are_excluded() {
        let mask = CategoryMask::parse("4=1", Rarity::OPTIONS).unwrap();
        assert_eq!(mask.included().collect::<Vec<_>>(), vec![Rarity::Forbidden]);
    }

    #[test]
    fn test_whitespace_and_trailing_commas_are_tolerated() {
        let mask = CategoryMask::parse("  2 = 1 , ,3=1,", Rarity::OPTIONS).unwrap();
        assert_eq!(
            mask.included().collect::<Vec<_>>(),
            vec![Rarity::Medium, Rarity::High]
        );
    }

    #[test]
    fn test_later_pair_overrides_earlier() {
        let mask = CategoryMask::parse("1=1,1=2", Rarity::OPTIONS).unwrap();
        assert!(!mask.includes(Rarity::Low));
    }

    #[test]
    fn test_empty_input_rejected() {
        assert_eq!(CategoryMask::parse("", Rarity::OPTIONS), Err(RuleError::Empty));
        assert_eq!(CategoryMask::parse("   ", Rarity::OPTIONS), Err(RuleError::Empty));
        assert_eq!(CategoryMask::parse(" , ,", Rarity::OPTIONS), Err(RuleError::Empty));
    }

    #[test]
    fn test_index_out_of_range_rejected() {
        let err = CategoryMask::parse("5=1", Rarity::OPTIONS).unwrap_err();
        assert!(matches!(err, RuleError::IndexOutOfRange { max: 4, .. }));

        let err = CategoryMask::parse("0=1", Rarity::OPTIONS).unwrap_err();
        assert!(matches!(err, RuleError::IndexOutOfRange { .. }));

        let err = CategoryMask::parse("99999999999999999999999=1", Rarity::OPTIONS).unwrap_err();
        assert!(matches!(err, RuleError::IndexOutOfRange { .. }));
    }

    #[test]
    fn test_malformed_pairs_rejected() {
        assert!(matches!(
            CategoryMask::parse("1", Rarity::OPTIONS),
            Err(RuleError::MalformedPair { .. })
        ));
        assert!(matches!(
            CategoryMask::parse("1=1=1", Rarity::OPTIONS),
            Err(RuleError::MalformedPair { .. })
        ));
        assert!(matches!(
            CategoryMask::parse("a=1", Rarity::OPTIONS),
            Err(RuleError::NotNumeric { .. })
        ));
        assert!(matches!(
            CategoryMask::parse("1=", Rarity::OPTIONS),
            Err(RuleError::NotNumeric { .. })
        ));
        assert!(matches!(
            CategoryMask::parse("-1=1", Rarity::OPTIONS),
            Err(RuleError::NotNumeric { .. })
        ));
    }

    #[test]
    fn test_invalid_choice_rejected() {
        let err = CategoryMask::parse("1=3", Rarity::OPTIONS).unwrap_err();
        assert_eq!(
            err,
            RuleError::InvalidChoice {
                choice: "3".to_string(),
                pair: "1=3".to_string(),
            }
        );
        assert!(matches!(
            CategoryMask::parse("1=01", Rarity::OPTIONS),
            Err(RuleError::InvalidChoice { .. })
        ));
    }

    #[test]
    fn test_error_after_valid_pairs_yields_no_mask() {
        let result = CategoryMask::parse("1=1,2=1,7=1", Rarity::OPTIONS);
        assert!(result.is_err());
    }

    #[test]
    fn test_apply_filters_by_label() {
        let artifacts = vec![
            artifact("ART1", "Low"),
            artifact("ART2", "Medium"),
            artifact("ART3", " High "),
            artifact("ART4", "Legendary"),
            artifact("ART5", "low"),
            artifact("ART6", ""),
        ];
        let mask = CategoryMask::parse("1=1,3=1", Rarity::OPTIONS).unwrap();

        let codes: Vec<&str> = mask
            .apply(&artifacts, |a| a.rarity.as_str())
            .into_iter()
            .map(|a| a.code.as_str())
            .collect();
        assert_eq!(codes, vec!["ART1", "ART3"]);
    }

    #[test]
    fn test_apply_is_idempotent() {
        let artifacts = vec![
            artifact("ART1", "Low"),
            artifact("ART2", "Forbidden"),
            artifact("ART3", "High"),
        ];
        let mask = CategoryMask::parse("2=2,4=1,3=1", Rarity::OPTIONS).unwrap();

        let first = mask.apply(&artifacts, |a| a.rarity.as_str());
        let second = mask.apply(&artifacts, |a| a.rarity.as_str());
        assert_eq!(first, second);

        let owned: Vec<Artifact> = first.into_iter().cloned().collect();
        let again = mask.apply(&owned, |a| a.rarity.as_str());
        assert_eq!(again.len(), owned.len());
    }

    #[test]
    fn test_generic_over_other_categories() {
        let mask = CategoryMask::parse("2=1", VisitorStatus::OPTIONS).unwrap();
        assert!(mask.matches("retired"));
        assert!(!mask.matches("active"));
        assert!(CategoryMask::parse("3=1", VisitorStatus::OPTIONS).is_err());
    }
}
