//! Tests for the category layout table.

use super::field::{CAPACITY, validate};
use super::registry::*;
use super::value::{Category, Links, Local, Match, Remote, WantValue};

mod table {
    use super::*;

    #[test]
    fn widths_match_category_shapes() {
        assert_eq!(width_of(Category::Links), 1);
        assert_eq!(width_of(Category::Match), 2);
        assert_eq!(width_of(Category::Local), 2);
        assert_eq!(width_of(Category::Remote), 2);
    }

    #[test]
    fn offsets_are_stacked_in_category_order() {
        assert_eq!(offset_of(Category::Links), 0);
        assert_eq!(offset_of(Category::Match), 1);
        assert_eq!(offset_of(Category::Local), 3);
        assert_eq!(offset_of(Category::Remote), 5);
    }

    #[test]
    fn table_is_valid() {
        assert_eq!(validate(&LAYOUT), Ok(()));
    }

    #[test]
    fn used_bits_fit_capacity() {
        assert_eq!(used_mask(), 0b111_1111);
        assert!(REMOTE.end() <= CAPACITY);
    }

    #[test]
    fn field_of_follows_category_index() {
        for category in Category::ALL {
            assert_eq!(field_of(category), LAYOUT[category.index()]);
        }
    }
}

mod conversion {
    use super::*;

    #[test]
    fn links_bits() {
        assert_eq!(value_to_bits(Links::None.into()), 0);
        assert_eq!(value_to_bits(Links::Url.into()), 1);
    }

    #[test]
    fn match_bits_are_independent_flags() {
        assert_eq!(value_to_bits(Match::Exact.into()), 0b00);
        assert_eq!(value_to_bits(Match::Loose.into()), 0b01);
        assert_eq!(value_to_bits(Match::Completion.into()), 0b10);
        assert_eq!(value_to_bits(Match::LooseCompletion.into()), 0b11);
    }

    #[test]
    fn local_and_remote_share_encoding() {
        let pairs = [
            (Local::None, Remote::None, 0),
            (Local::Ref, Remote::Ref, 1),
            (Local::Uri, Remote::Uri, 2),
            (Local::Url, Remote::Url, 3),
        ];
        for (local, remote, bits) in pairs {
            assert_eq!(value_to_bits(local.into()), bits);
            assert_eq!(value_to_bits(remote.into()), bits);
        }
    }

    #[test]
    fn every_field_pattern_decodes_to_its_own_bits() {
        for category in Category::ALL {
            for bits in 0..=field_of(category).value_mask() {
                let value = bits_to_value(category, bits);
                assert_eq!(value.category(), category);
                assert_eq!(value_to_bits(value), bits);
            }
        }
    }

    #[test]
    fn excess_bits_are_masked() {
        assert_eq!(
            bits_to_value(Category::Links, 0b10),
            WantValue::Links(Links::None)
        );
        assert_eq!(
            bits_to_value(Category::Local, 0b110),
            WantValue::Local(Local::Uri)
        );
    }
}
