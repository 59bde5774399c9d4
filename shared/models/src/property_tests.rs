//! Property-based tests for the movie domain models.
//!
//! Validates invariants that must hold for every well-formed record:
//! promotion from draft to persisted record preserves all fields, and the
//! validation rules accept exactly the documented field ranges.

use chrono::NaiveDate;
use proptest::prelude::*;
use validator::Validate;

use crate::{MovieDraft, MovieUpsert};

prop_compose! {
    fn arb_release_date()(
        year in 1950i32..2100,
        month in 1u32..=12,
        day in 1u32..=28,
    ) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }
}

prop_compose! {
    fn arb_cast()(names in prop::collection::vec("[A-Za-z ]{1,30}", 0..6)) -> Vec<String> {
        names
    }
}

prop_compose! {
    fn arb_draft()(
        name in "[A-Za-z0-9 ]{1,60}",
        year in 1950i32..2100,
        cast in arb_cast(),
        release_date in arb_release_date(),
    ) -> MovieDraft {
        MovieDraft::new(name, year, cast, release_date)
    }
}

proptest! {
    #[test]
    fn promotion_preserves_every_field(draft in arb_draft(), id in "[a-f0-9]{8}") {
        let movie = draft.clone().into_movie(id.clone());
        prop_assert_eq!(movie.id, id);
        prop_assert_eq!(movie.name, draft.name);
        prop_assert_eq!(movie.year, draft.year);
        prop_assert_eq!(movie.cast, draft.cast);
        prop_assert_eq!(movie.release_date, draft.release_date);
    }

    #[test]
    fn well_formed_drafts_pass_validation(draft in arb_draft()) {
        prop_assert!(draft.validate().is_ok());
    }

    #[test]
    fn promoted_records_stay_valid(draft in arb_draft(), id in "[a-f0-9]{8}") {
        prop_assert!(draft.into_movie(id).validate().is_ok());
    }

    #[test]
    fn nameless_drafts_never_validate(
        year in 1950i32..2100,
        release_date in arb_release_date(),
    ) {
        let draft = MovieDraft::new("", year, Vec::new(), release_date);
        prop_assert!(draft.validate().is_err());
    }

    #[test]
    fn upsert_tag_matches_source_type(draft in arb_draft(), id in "[a-f0-9]{8}") {
        prop_assert!(matches!(MovieUpsert::from(draft.clone()), MovieUpsert::New(_)));
        prop_assert!(matches!(
            MovieUpsert::from(draft.into_movie(id)),
            MovieUpsert::Existing(_)
        ));
    }
}
