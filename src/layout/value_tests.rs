//! Tests for categories and value parsing.

use super::error::ParseValueError;
use super::value::*;

mod parsing {
    use super::*;

    #[test]
    fn parse_category_value_token() {
        let value: WantValue = "local=uri".parse().unwrap();
        assert_eq!(value, WantValue::Local(Local::Uri));
    }

    #[test]
    fn parse_is_case_insensitive_and_trims() {
        let value: WantValue = "Remote = URL".parse().unwrap();
        assert_eq!(value, WantValue::Remote(Remote::Url));
    }

    #[test]
    fn parse_combined_match() {
        let value: WantValue = "match=loose+completion".parse().unwrap();
        assert_eq!(value, WantValue::Match(Match::LooseCompletion));
    }

    #[test]
    fn missing_separator_is_malformed() {
        let err = "local".parse::<WantValue>().unwrap_err();
        assert_eq!(err, ParseValueError::Malformed("local".to_string()));
    }

    #[test]
    fn unknown_category_rejected() {
        let err = "images=url".parse::<WantValue>().unwrap_err();
        assert!(matches!(err, ParseValueError::UnknownCategory(ref c) if c == "images"));
    }

    #[test]
    fn value_from_other_category_rejected() {
        let err = "links=ref".parse::<WantValue>().unwrap_err();
        assert_eq!(
            err,
            ParseValueError::UnknownValue {
                category: Category::Links,
                value: "ref".to_string(),
            }
        );
    }

    #[test]
    fn display_parses_back() {
        let values = [
            WantValue::Links(Links::Url),
            WantValue::Match(Match::Completion),
            WantValue::Local(Local::None),
            WantValue::Remote(Remote::Ref),
        ];
        for value in values {
            assert_eq!(value.to_string().parse::<WantValue>().unwrap(), value);
        }
    }
}

mod match_flags {
    use super::*;

    #[test]
    fn exact_has_no_flags() {
        assert!(Match::Exact.flags().is_empty());
    }

    #[test]
    fn combined_flags_read_back_as_sentinel() {
        let flags = Match::Loose.flags() | Match::Completion.flags();
        assert_eq!(Match::from_flags(flags), Match::LooseCompletion);
    }

    #[test]
    fn from_bits_ignores_unknown_bits() {
        assert_eq!(Match::from_bits(0b101), Match::Loose);
    }
}

mod serde_names {
    use super::*;

    #[test]
    fn values_serialize_lowercase() {
        assert_eq!(serde_json::to_string(&Local::Uri).unwrap(), "\"uri\"");
        assert_eq!(
            serde_json::to_string(&Match::LooseCompletion).unwrap(),
            "\"loose+completion\""
        );
        assert_eq!(serde_json::to_string(&Category::Remote).unwrap(), "\"remote\"");
    }

    #[test]
    fn category_index_matches_all_order() {
        for (i, category) in Category::ALL.into_iter().enumerate() {
            assert_eq!(category.index(), i);
        }
    }
}
