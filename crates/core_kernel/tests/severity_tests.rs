//! Tests for bounded severity ratings

use core_kernel::{CoreError, SeverityRating};
use proptest::prelude::*;

#[test]
fn test_bounds_are_inclusive() {
    assert_eq!(SeverityRating::new(1).unwrap().value(), 1);
    assert_eq!(SeverityRating::new(10).unwrap().value(), 10);
}

#[test]
fn test_out_of_range_rejected() {
    assert_eq!(SeverityRating::new(0), Err(CoreError::SeverityOutOfRange(0)));
    assert_eq!(SeverityRating::new(11), Err(CoreError::SeverityOutOfRange(11)));
}

#[test]
fn test_deserialize_validates_range() {
    let rating: SeverityRating = serde_json::from_str("7").unwrap();
    assert_eq!(rating.value(), 7);
    assert!(serde_json::from_str::<SeverityRating>("42").is_err());
}

proptest! {
    #[test]
    fn prop_only_one_through_ten_accepted(value in -1000i64..1000i64) {
        prop_assert_eq!(SeverityRating::new(value).is_ok(), (1..=10).contains(&value));
    }
}
