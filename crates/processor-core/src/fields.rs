//! Bit-field descriptors for architected words.
//!
//! Fields are named by their architectural bit range (bit 0 = MSB) so the
//! tables built on top of [`FieldSpec`] read the same as the hardware field
//! maps. Extraction and insertion always truncate to the field width.

use crate::word::{Word36, WORD_BITS};

/// Truncates `value` to its low `width` bits.
///
/// Widths of 64 or more return `value` unchanged.
#[must_use]
pub const fn mask_to_width(value: u64, width: u32) -> u64 {
    if width >= u64::BITS {
        value
    } else {
        value & ((1u64 << width) - 1)
    }
}

/// A bit range within one word of a multi-word architected structure.
///
/// Always non-empty and inside bits 0-35; [`FieldSpec::new`] enforces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldSpec {
    word: usize,
    first_bit: u32,
    width: u32,
}

impl FieldSpec {
    /// Describes `width` bits starting at architectural bit `first_bit` of `word`.
    ///
    /// # Panics
    ///
    /// Panics when `width` is zero or the range runs past bit 35. In a `const`
    /// item this is a compile error.
    #[must_use]
    pub const fn new(word: usize, first_bit: u32, width: u32) -> Self {
        assert!(
            width > 0 && first_bit < WORD_BITS && width <= WORD_BITS - first_bit,
            "field must be non-empty and lie within bits 0-35"
        );
        Self {
            word,
            first_bit,
            width,
        }
    }

    /// Index of the word within the structure.
    #[must_use]
    pub const fn word(self) -> usize {
        self.word
    }

    /// First (most significant) architectural bit of the field.
    #[must_use]
    pub const fn first_bit(self) -> u32 {
        self.first_bit
    }

    /// Field width in bits.
    #[must_use]
    pub const fn width(self) -> u32 {
        self.width
    }

    /// Describes a field spanning an entire word.
    #[must_use]
    pub const fn whole_word(word: usize) -> Self {
        Self::new(word, 0, WORD_BITS)
    }

    /// Last (least significant) architectural bit of the field.
    #[must_use]
    pub const fn last_bit(self) -> u32 {
        self.first_bit + self.width - 1
    }

    /// Right-shift that brings the field down to bit position zero.
    #[must_use]
    pub const fn shift(self) -> u32 {
        WORD_BITS - self.first_bit - self.width
    }

    /// Right-aligned mask of the field width.
    #[must_use]
    pub const fn mask(self) -> u64 {
        mask_to_width(u64::MAX, self.width)
    }

    /// Mask of the field in its in-word position.
    #[must_use]
    pub const fn in_place_mask(self) -> u64 {
        self.mask() << self.shift()
    }

    /// Extracts the field, right-aligned.
    #[must_use]
    pub const fn extract(self, word: Word36) -> u64 {
        (word.value() >> self.shift()) & self.mask()
    }

    /// Extracts the field without moving it from its in-word position.
    #[must_use]
    pub const fn extract_in_place(self, word: Word36) -> u64 {
        word.value() & self.in_place_mask()
    }

    /// Extracts a one-bit field as a flag.
    #[must_use]
    pub const fn flag(self, word: Word36) -> bool {
        self.extract(word) != 0
    }

    /// Replaces the field in `word` with `value`, dropping excess high bits of `value`.
    #[must_use]
    pub const fn insert(self, word: Word36, value: u64) -> Word36 {
        let cleared = word.value() & !self.in_place_mask();
        Word36::new(cleared | ((value & self.mask()) << self.shift()))
    }
}

#[cfg(test)]
mod tests {
    use super::{mask_to_width, FieldSpec};
    use crate::word::Word36;

    #[test]
    fn mask_to_width_truncates() {
        assert_eq!(mask_to_width(0o777, 3), 0o7);
        assert_eq!(mask_to_width(0x1_FFFF, 15), 0x7FFF);
        assert_eq!(mask_to_width(u64::MAX, 64), u64::MAX);
        assert_eq!(mask_to_width(0o17, 0), 0);
    }

    #[test]
    fn shift_and_mask_follow_architectural_numbering() {
        let top3 = FieldSpec::new(0, 0, 3);
        assert_eq!(top3.shift(), 33);
        assert_eq!(top3.mask(), 0o7);
        assert_eq!(top3.last_bit(), 2);

        let low_half = FieldSpec::new(0, 18, 18);
        assert_eq!(low_half.shift(), 0);
        assert_eq!(low_half.in_place_mask(), 0o777_777);

        let whole = FieldSpec::whole_word(3);
        assert_eq!(whole.shift(), 0);
        assert_eq!(whole.mask(), Word36::MASK);
    }

    #[test]
    fn extract_reads_right_aligned_value() {
        let word = Word36::new(0o577_777_000_000);
        assert_eq!(FieldSpec::new(0, 0, 3).extract(word), 0o5);
        assert_eq!(FieldSpec::new(0, 3, 15).extract(word), 0o77777);
        assert_eq!(FieldSpec::new(0, 18, 18).extract(word), 0);
    }

    #[test]
    fn extract_in_place_keeps_position() {
        let word = Word36::new(0o123_456_777_777);
        let designator_bits = FieldSpec::new(0, 12, 6);
        assert_eq!(designator_bits.extract_in_place(word), 0o000_056_000_000);
    }

    #[test]
    fn insert_replaces_only_the_field_and_truncates() {
        let field = FieldSpec::new(0, 3, 15);
        let word = field.insert(Word36::new(Word36::MASK), 0);
        assert_eq!(word.value(), 0o700_000_777_777);

        let widened = field.insert(Word36::ZERO, 0x1_8001);
        assert_eq!(field.extract(widened), 0x0001);
    }

    #[test]
    fn accessors_report_construction_arguments() {
        let spec = FieldSpec::new(2, 10, 2);
        assert_eq!((spec.word(), spec.first_bit(), spec.width()), (2, 10, 2));
    }

    #[test]
    #[should_panic(expected = "field must be non-empty")]
    fn empty_field_is_rejected() {
        let _ = FieldSpec::new(0, 4, 0);
    }

    #[test]
    #[should_panic(expected = "field must be non-empty")]
    fn field_past_bit_35_is_rejected() {
        let _ = FieldSpec::new(0, 30, 7);
    }

    #[test]
    #[should_panic(expected = "field must be non-empty")]
    fn field_starting_past_the_word_is_rejected() {
        let _ = FieldSpec::new(0, u32::MAX, 1);
    }

    #[test]
    fn flag_reports_single_bits() {
        let bit = FieldSpec::new(0, 13, 1);
        assert!(bit.flag(Word36::new(0o020_000_000)));
        assert!(!bit.flag(Word36::new(0o040_000_000)));
    }
}
