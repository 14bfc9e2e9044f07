//! Column shifts: moving a rank up or down the sorted rank list.

use std::sync::LazyLock;

use regex_lite::Regex;

use crate::catalog::{Catalog, Rank};
use crate::error::{TableError, TableResult};

static SIGNED_INT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[-+]?\d+").expect("signed integer pattern is valid"));

/// Parse a column shift from user input.
///
/// The first signed integer found in the string is used ("+2", "cs-1",
/// "shift 3"). Input without one is a shift of 0. Values too large for an
/// `i64` saturate, which clamping makes harmless.
pub fn parse_shift(input: &str) -> i64 {
    let Some(found) = SIGNED_INT.find(input) else {
        return 0;
    };
    let digits = found.as_str();
    digits.parse().unwrap_or(if digits.starts_with('-') {
        i64::MIN
    } else {
        i64::MAX
    })
}

/// Move `index` by `shift`, clamped to `0..len`.
///
/// `len` must be non-zero.
pub fn shifted_index(index: usize, shift: i64, len: usize) -> usize {
    let last = len.saturating_sub(1);
    let target = i64::try_from(index)
        .unwrap_or(i64::MAX)
        .saturating_add(shift);
    if target <= 0 {
        0
    } else {
        usize::try_from(target).map_or(last, |t| t.min(last))
    }
}

/// Apply a column shift to a rank.
///
/// A zero shift returns the rank as given. Otherwise the rank is located in
/// the catalog's sorted list and moved, saturating at either end.
pub fn apply_shift<'a>(catalog: &'a Catalog, rank: &'a Rank, shift: i64) -> TableResult<&'a Rank> {
    if shift == 0 {
        return Ok(rank);
    }
    let index = catalog
        .index_of(rank)
        .ok_or_else(|| TableError::UnknownRank(rank.name.clone()))?;
    let ranks = catalog.ranks();
    Ok(&ranks[shifted_index(index, shift, ranks.len())])
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn catalog() -> Catalog {
        let document = json!({
            "T": {
                "Rank": {
                    "Feeble":    { "abbreviation": "Fe", "minimum": 1,  "standard": 2,  "green": 61, "yellow": 91, "red": 100 },
                    "Typical":   { "abbreviation": "Ty", "minimum": 5,  "standard": 6,  "green": 51, "yellow": 81, "red": 98 },
                    "Good":      { "abbreviation": "Gd", "minimum": 8,  "standard": 10, "green": 46, "yellow": 76, "red": 98 },
                    "Excellent": { "abbreviation": "Ex", "minimum": 16, "standard": 20, "green": 41, "yellow": 71, "red": 95 }
                },
                "Effect": {}
            }
        });
        Catalog::from_document(&document, "T").unwrap()
    }

    #[test]
    fn parse_plain_and_signed() {
        assert_eq!(parse_shift("3"), 3);
        assert_eq!(parse_shift("+2"), 2);
        assert_eq!(parse_shift("-1"), -1);
        assert_eq!(parse_shift("cs-2"), -2);
        assert_eq!(parse_shift("shift 4 columns"), 4);
        assert_eq!(parse_shift("1 then 2"), 1);
    }

    #[test]
    fn parse_without_digits_is_zero() {
        assert_eq!(parse_shift(""), 0);
        assert_eq!(parse_shift("left"), 0);
        assert_eq!(parse_shift("-"), 0);
    }

    #[test]
    fn parse_saturates() {
        assert_eq!(parse_shift("99999999999999999999999"), i64::MAX);
        assert_eq!(parse_shift("-99999999999999999999999"), i64::MIN);
    }

    #[test]
    fn shift_moves_along_sorted_list() {
        let catalog = catalog();
        let typical = catalog.rank("Ty").unwrap();
        assert_eq!(apply_shift(&catalog, typical, 1).unwrap().name, "Good");
        assert_eq!(apply_shift(&catalog, typical, 2).unwrap().name, "Excellent");
        assert_eq!(apply_shift(&catalog, typical, -1).unwrap().name, "Feeble");
    }

    #[test]
    fn shift_clamps_low() {
        let catalog = catalog();
        let good = catalog.rank("Good").unwrap();
        assert_eq!(catalog.index_of(good), Some(2));
        assert_eq!(apply_shift(&catalog, good, -5).unwrap().name, "Feeble");
    }

    #[test]
    fn shift_clamps_high() {
        let catalog = catalog();
        let good = catalog.rank("Good").unwrap();
        assert_eq!(apply_shift(&catalog, good, 40).unwrap().name, "Excellent");
        assert_eq!(
            apply_shift(&catalog, good, i64::MAX).unwrap().name,
            "Excellent"
        );
        assert_eq!(apply_shift(&catalog, good, i64::MIN).unwrap().name, "Feeble");
    }

    #[test]
    fn zero_shift_skips_lookup() {
        let catalog = catalog();
        let outside = Rank {
            name: "Elsewhere".to_string(),
            abbreviation: "El".to_string(),
            minimum: 0,
            standard: 0,
            green: 1,
            yellow: 2,
            red: 3,
        };
        assert_eq!(apply_shift(&catalog, &outside, 0).unwrap(), &outside);
        assert!(matches!(
            apply_shift(&catalog, &outside, 1),
            Err(TableError::UnknownRank(_))
        ));
    }

    #[test]
    fn index_clamping() {
        assert_eq!(shifted_index(2, -5, 4), 0);
        assert_eq!(shifted_index(2, 1, 4), 3);
        assert_eq!(shifted_index(2, 10, 4), 3);
        assert_eq!(shifted_index(0, 0, 1), 0);
    }

    proptest! {
        #[test]
        fn zero_shift_is_identity(i in 0usize..4) {
            let catalog = catalog();
            let rank = &catalog.ranks()[i];
            prop_assert_eq!(apply_shift(&catalog, rank, 0).unwrap(), rank);
        }

        #[test]
        fn large_shifts_saturate(i in 0usize..4, magnitude in 4i64..10_000) {
            let catalog = catalog();
            let rank = &catalog.ranks()[i];
            let ranks = catalog.ranks();
            prop_assert_eq!(apply_shift(&catalog, rank, magnitude).unwrap(), &ranks[3]);
            prop_assert_eq!(apply_shift(&catalog, rank, -magnitude).unwrap(), &ranks[0]);
        }

        #[test]
        fn shifted_index_in_bounds(index in 0usize..20, shift in any::<i64>(), len in 1usize..20) {
            let index = index.min(len - 1);
            prop_assert!(shifted_index(index, shift, len) < len);
        }
    }
}
