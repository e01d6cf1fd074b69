//! Fixed-width bit ranges inside a packed `u32`.

use super::error::LayoutError;

/// Number of bits available in a packed value.
pub const CAPACITY: u32 = u32::BITS;

/// A contiguous range of bits: `width` bits starting at `offset`.
///
/// Fields are usually stacked with [`BitField::after`], so each one starts
/// where the previous one ends.
///
/// # Examples
///
/// ```
/// use want::layout::BitField;
///
/// let low = BitField::new(4, 0);
/// let high = BitField::after(low, 3);
///
/// assert_eq!(high.offset(), 4);
/// assert_eq!(high.insert(0, 0b101), 0b101_0000);
/// assert_eq!(high.extract(0b101_0000), 0b101);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitField {
    width: u32,
    offset: u32,
}

impl BitField {
    /// Creates a field of `width` bits at `offset`.
    #[must_use]
    pub const fn new(width: u32, offset: u32) -> Self {
        Self { width, offset }
    }

    /// Creates a field of `width` bits starting right after `previous`.
    #[must_use]
    pub const fn after(previous: Self, width: u32) -> Self {
        Self::new(width, previous.end())
    }

    #[must_use]
    pub const fn width(self) -> u32 {
        self.width
    }

    #[must_use]
    pub const fn offset(self) -> u32 {
        self.offset
    }

    /// First bit past this field.
    #[must_use]
    pub const fn end(self) -> u32 {
        self.offset.saturating_add(self.width)
    }

    /// Mask of `width` low bits, before shifting to `offset`.
    #[must_use]
    pub const fn value_mask(self) -> u32 {
        if self.width >= CAPACITY {
            u32::MAX
        } else {
            (1 << self.width) - 1
        }
    }

    /// Mask of this field's bits within the packed value.
    #[must_use]
    pub const fn mask(self) -> u32 {
        match self.value_mask().checked_shl(self.offset) {
            Some(mask) => mask,
            None => 0,
        }
    }

    /// Reads this field's bits out of `packed`. Bits of other fields are ignored.
    #[must_use]
    pub const fn extract(self, packed: u32) -> u32 {
        match packed.checked_shr(self.offset) {
            Some(shifted) => shifted & self.value_mask(),
            None => 0,
        }
    }

    /// Writes `bits` into this field of `packed`, truncating to the field width.
    #[must_use]
    pub const fn insert(self, packed: u32, bits: u32) -> u32 {
        let shifted = match (bits & self.value_mask()).checked_shl(self.offset) {
            Some(shifted) => shifted,
            None => 0,
        };
        (packed & !self.mask()) | shifted
    }

    /// Returns true if the two fields share at least one bit.
    #[must_use]
    pub const fn overlaps(self, other: Self) -> bool {
        self.width > 0 && other.width > 0 && self.offset < other.end() && other.offset < self.end()
    }
}

/// Returns true if every field ends within [`CAPACITY`].
#[must_use]
pub const fn fits(fields: &[BitField]) -> bool {
    let mut i = 0;
    while i < fields.len() {
        if fields[i].end() > CAPACITY {
            return false;
        }
        i += 1;
    }
    true
}

/// Returns true if no two fields share a bit.
#[must_use]
pub const fn disjoint(fields: &[BitField]) -> bool {
    let mut i = 0;
    while i < fields.len() {
        let mut j = i + 1;
        while j < fields.len() {
            if fields[i].overlaps(fields[j]) {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}

/// Checks a field table, reporting the first defect found.
///
/// # Errors
///
/// Returns [`LayoutError::Overflow`] for a field past [`CAPACITY`], or
/// [`LayoutError::Overlap`] for two fields sharing bits.
pub fn validate(fields: &[BitField]) -> Result<(), LayoutError> {
    if let Some((index, field)) = fields.iter().enumerate().find(|(_, f)| f.end() > CAPACITY) {
        return Err(LayoutError::Overflow {
            index,
            end: field.end(),
            capacity: CAPACITY,
        });
    }

    for (first, a) in fields.iter().enumerate() {
        if let Some(offset) = fields[first + 1..].iter().position(|b| a.overlaps(*b)) {
            return Err(LayoutError::Overlap {
                first,
                second: first + 1 + offset,
            });
        }
    }

    Ok(())
}
