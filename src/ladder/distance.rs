//! Hamming distance between raw strings
//!
//! These helpers normalize their inputs, so callers can pass user text
//! directly. For already-built words use [`Word::distance`].

use crate::core::Word;

/// Sentinel used at the string boundary for an undefined distance
pub const UNDEFINED_DISTANCE: i32 = -1;

/// Hamming distance between two strings, compared case-insensitively
///
/// Returns `None` when the strings differ in length.
///
/// # Examples
/// ```
/// use doublets::ladder::hamming_distance;
///
/// assert_eq!(hamming_distance("Cold", "cord"), Some(1));
/// assert_eq!(hamming_distance("cold", "cold"), Some(0));
/// assert_eq!(hamming_distance("cat", "cart"), None);
/// ```
#[must_use]
pub fn hamming_distance(a: &str, b: &str) -> Option<usize> {
    Word::new(a).distance(&Word::new(b))
}

/// Convert a distance into its boundary form, `-1` when undefined
#[must_use]
pub fn distance_or_sentinel(distance: Option<usize>) -> i32 {
    distance.map_or(UNDEFINED_DISTANCE, |d| {
        i32::try_from(d).unwrap_or(i32::MAX)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn identical_strings_have_zero_distance() {
        assert_eq!(hamming_distance("warm", "warm"), Some(0));
        assert_eq!(hamming_distance("", ""), Some(0));
    }

    #[test]
    fn case_is_ignored() {
        assert_eq!(hamming_distance("WARM", "warm"), Some(0));
        assert_eq!(hamming_distance("Ward", "WARM"), Some(1));
    }

    #[test]
    fn length_mismatch_is_undefined() {
        assert_eq!(hamming_distance("cat", "cats"), None);
        assert_eq!(hamming_distance("", "a"), None);
    }

    #[test]
    fn sentinel_conversion() {
        assert_eq!(distance_or_sentinel(None), -1);
        assert_eq!(distance_or_sentinel(Some(0)), 0);
        assert_eq!(distance_or_sentinel(Some(3)), 3);
    }

    proptest! {
        #[test]
        fn distance_is_symmetric(a in "[a-z]{4}", b in "[a-z]{4}") {
            prop_assert_eq!(hamming_distance(&a, &b), hamming_distance(&b, &a));
        }

        #[test]
        fn distance_to_self_is_zero(a in "[a-zA-Z]{0,8}") {
            prop_assert_eq!(hamming_distance(&a, &a), Some(0));
        }

        #[test]
        fn distance_bounded_by_length(a in "[a-z]{5}", b in "[a-z]{5}") {
            let d = hamming_distance(&a, &b).unwrap();
            prop_assert!(d <= 5);
        }

        #[test]
        fn differing_lengths_are_undefined(a in "[a-z]{1,6}", b in "[a-z]{7,9}") {
            prop_assert_eq!(hamming_distance(&a, &b), None);
            prop_assert_eq!(distance_or_sentinel(hamming_distance(&b, &a)), -1);
        }
    }
}
