//! Tests for the explicit-request set.

use crate::layout::{Category, Links, Local, Match, MatchFlags, Remote, WantValue};

use super::error::WantError;
use super::explicit::{Explicit, MergeMode};

mod folding {
    use super::*;

    #[test]
    fn empty_input_touches_nothing() {
        let explicit = Explicit::lenient(Vec::<WantValue>::new());
        for category in Category::ALL {
            assert!(!explicit.touched(category));
        }
    }

    #[test]
    fn values_land_in_their_category() {
        let explicit = Explicit::lenient([
            WantValue::from(Remote::Url),
            WantValue::from(Links::None),
        ]);

        assert_eq!(explicit.remote, Some(Remote::Url));
        assert_eq!(explicit.links, Some(Links::None));
        assert!(!explicit.touched(Category::Local));
        assert!(!explicit.touched(Category::Match));
    }

    #[test]
    fn exact_alone_touches_match_with_no_bits() {
        let explicit = Explicit::lenient([WantValue::from(Match::Exact)]);
        assert_eq!(explicit.matching, Some(MatchFlags::empty()));
        assert!(explicit.touched(Category::Match));
    }

    #[test]
    fn match_values_combine() {
        let explicit = Explicit::lenient([
            WantValue::from(Match::Completion),
            WantValue::from(Match::Exact),
            WantValue::from(Match::Loose),
        ]);
        assert_eq!(explicit.matching, Some(MatchFlags::all()));
    }

    #[test]
    fn lenient_single_value_overwrites() {
        let explicit = Explicit::lenient([
            WantValue::from(Local::Uri),
            WantValue::from(Local::Url),
        ]);
        assert_eq!(explicit.local, Some(Local::Url));
    }
}

mod strict {
    use super::*;

    #[test]
    fn stops_at_first_conflict() {
        let result = Explicit::strict([
            WantValue::from(Links::Url),
            WantValue::from(Remote::Ref),
            WantValue::from(Remote::Uri),
            WantValue::from(Local::None),
            WantValue::from(Local::Ref),
        ]);

        assert_eq!(
            result,
            Err(WantError::Conflict {
                category: Category::Remote,
                first: Remote::Ref.into(),
                second: Remote::Uri.into(),
            })
        );
    }

    #[test]
    fn combined_match_then_exact_reports_combined_first() {
        let result = Explicit::strict([
            WantValue::from(Match::Loose),
            WantValue::from(Match::Completion),
            WantValue::from(Match::Exact),
        ]);

        assert_eq!(
            result,
            Err(WantError::Conflict {
                category: Category::Match,
                first: Match::LooseCompletion.into(),
                second: Match::Exact.into(),
            })
        );
    }

    #[test]
    fn apply_dispatches_on_mode() {
        let mut explicit = Explicit::default();
        explicit.apply(Local::Ref.into(), MergeMode::Strict).unwrap();

        assert!(explicit.apply(Local::Uri.into(), MergeMode::Strict).is_err());
        assert_eq!(explicit.local, Some(Local::Ref));

        explicit.apply(Local::Uri.into(), MergeMode::Lenient).unwrap();
        assert_eq!(explicit.local, Some(Local::Uri));
    }

    #[test]
    fn default_mode_is_lenient() {
        assert_eq!(MergeMode::default(), MergeMode::Lenient);
    }
}
