//! The fixed layout of categories within a packed options value.
//!
//! | Category | Offset | Width |
//! |----------|--------|-------|
//! | links    | 0      | 1     |
//! | match    | 1      | 2     |
//! | local    | 3      | 2     |
//! | remote   | 5      | 2     |

use super::field::{BitField, disjoint, fits};
use super::value::{Category, Links, Local, Match, Remote, WantValue};

/// Links: one flag bit.
pub const LINKS: BitField = BitField::new(1, 0);

/// Match: loose and completion bits.
pub const MATCH: BitField = BitField::after(LINKS, 2);

/// Local: four mutually exclusive values.
pub const LOCAL: BitField = BitField::after(MATCH, 2);

/// Remote: four mutually exclusive values.
pub const REMOTE: BitField = BitField::after(LOCAL, 2);

/// All fields, indexed by [`Category::index`].
pub const LAYOUT: [BitField; 4] = [LINKS, MATCH, LOCAL, REMOTE];

const _: () = assert!(fits(&LAYOUT), "category fields exceed 32 bits");
const _: () = assert!(disjoint(&LAYOUT), "category fields overlap");

/// The field holding `category`.
#[must_use]
pub const fn field_of(category: Category) -> BitField {
    LAYOUT[category.index()]
}

#[must_use]
pub const fn width_of(category: Category) -> u32 {
    field_of(category).width()
}

#[must_use]
pub const fn offset_of(category: Category) -> u32 {
    field_of(category).offset()
}

/// Field-relative bits of a value, before shifting to its category's offset.
#[must_use]
pub const fn value_to_bits(value: WantValue) -> u32 {
    match value {
        WantValue::Links(v) => v.bits(),
        WantValue::Match(v) => v.bits(),
        WantValue::Local(v) => v.bits(),
        WantValue::Remote(v) => v.bits(),
    }
}

/// Decodes field-relative bits of `category`.
///
/// Total: bits beyond the field width are ignored, and every remaining
/// pattern maps to a value.
#[must_use]
pub const fn bits_to_value(category: Category, bits: u32) -> WantValue {
    let bits = bits & field_of(category).value_mask();
    match category {
        Category::Links => WantValue::Links(Links::from_bits(bits)),
        Category::Match => WantValue::Match(Match::from_bits(bits)),
        Category::Local => WantValue::Local(Local::from_bits(bits)),
        Category::Remote => WantValue::Remote(Remote::from_bits(bits)),
    }
}

/// Bits of all categories combined.
#[must_use]
pub const fn used_mask() -> u32 {
    LINKS.mask() | MATCH.mask() | LOCAL.mask() | REMOTE.mask()
}
