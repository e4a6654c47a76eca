#![forbid(unsafe_code)]

//! Character classification: bidi class, mirrored counterpart, and
//! Arabic strong-letter queries.
//!
//! Lookups are binary searches over the sorted interval tables in
//! [`crate::tables`]. Code points not covered by any interval classify as
//! strong left-to-right, so the pipeline always completes on unmapped input.

use crate::tables::{ARABIC_STRONG_RANGES, BIDI_CLASS_RANGES, MIRRORED_PAIRS};
use crate::types::BidiClass;

/// Look up the bidirectional class of a code point.
///
/// Unmapped code points default to [`BidiClass::L`].
#[inline]
pub fn bidi_class(ch: char) -> BidiClass {
    let cp = ch as u32;
    if cp < 0x80 {
        return ascii_class(cp as u8);
    }
    range_class(cp)
}

/// Bidi class for the ASCII block, matched directly.
const fn ascii_class(b: u8) -> BidiClass {
    match b {
        0x0A | 0x0D | 0x1C..=0x1E => BidiClass::BS,
        0x09 | 0x0B | 0x1F => BidiClass::SS,
        0x0C | 0x20 => BidiClass::WS,
        0x00..=0x08 | 0x0E..=0x1B | 0x7F => BidiClass::BN,
        b'0'..=b'9' => BidiClass::EN,
        b'+' | b'-' => BidiClass::ES,
        b'#' | b'$' | b'%' => BidiClass::ET,
        b',' | b'.' | b'/' | b':' => BidiClass::CS,
        b'A'..=b'Z' | b'a'..=b'z' => BidiClass::L,
        _ => BidiClass::ON,
    }
}

fn range_class(cp: u32) -> BidiClass {
    let idx = BIDI_CLASS_RANGES.partition_point(|&(first, _, _)| first <= cp);
    if idx > 0 {
        let (first, last, class) = BIDI_CLASS_RANGES[idx - 1];
        if cp >= first && cp <= last {
            return class;
        }
    }
    BidiClass::L
}

/// The mirrored counterpart of a code point, if it has one.
///
/// Mirroring applies to characters rendered at odd embedding levels whose
/// glyph shape depends on direction (brackets, inequality signs, ...).
#[inline]
pub fn mirror_of(ch: char) -> Option<char> {
    let cp = ch as u32;
    MIRRORED_PAIRS
        .binary_search_by_key(&cp, |&(from, _)| from)
        .ok()
        .and_then(|idx| char::from_u32(MIRRORED_PAIRS[idx].1))
}

/// Whether a code point is a strong right-to-left Arabic letter.
#[inline]
pub fn is_strong_arabic(ch: char) -> bool {
    let cp = ch as u32;
    let idx = ARABIC_STRONG_RANGES.partition_point(|&(first, _)| first <= cp);
    idx > 0 && cp <= ARABIC_STRONG_RANGES[idx - 1].1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_classes() {
        assert_eq!(bidi_class('a'), BidiClass::L);
        assert_eq!(bidi_class('Z'), BidiClass::L);
        assert_eq!(bidi_class('7'), BidiClass::EN);
        assert_eq!(bidi_class('+'), BidiClass::ES);
        assert_eq!(bidi_class('$'), BidiClass::ET);
        assert_eq!(bidi_class(','), BidiClass::CS);
        assert_eq!(bidi_class(' '), BidiClass::WS);
        assert_eq!(bidi_class('\t'), BidiClass::SS);
        assert_eq!(bidi_class('\n'), BidiClass::BS);
        assert_eq!(bidi_class('('), BidiClass::ON);
    }

    #[test]
    fn hebrew_and_arabic() {
        assert_eq!(bidi_class('\u{05D0}'), BidiClass::R); // alef
        assert_eq!(bidi_class('\u{05EA}'), BidiClass::R); // tav
        assert_eq!(bidi_class('\u{0627}'), BidiClass::AL); // Arabic alef
        assert_eq!(bidi_class('\u{0660}'), BidiClass::AN); // Arabic-Indic zero
        assert_eq!(bidi_class('\u{06F0}'), BidiClass::EN); // extended Arabic-Indic zero
        assert_eq!(bidi_class('\u{064B}'), BidiClass::NSM);
    }

    #[test]
    fn interval_boundaries() {
        // First and last code point of an interval must both hit it.
        assert_eq!(bidi_class('\u{0591}'), BidiClass::NSM);
        assert_eq!(bidi_class('\u{05BD}'), BidiClass::NSM);
        // One past the end falls into the next interval.
        assert_eq!(bidi_class('\u{05BE}'), BidiClass::R);
        // Gap between intervals falls back to L.
        assert_eq!(bidi_class('\u{05EB}'), BidiClass::L);
    }

    #[test]
    fn unmapped_defaults_to_ltr() {
        assert_eq!(bidi_class('\u{0100}'), BidiClass::L); // Latin Extended-A
        assert_eq!(bidi_class('\u{4E2D}'), BidiClass::L); // CJK ideograph
        assert_eq!(bidi_class('\u{10330}'), BidiClass::L); // Gothic (uncovered)
    }

    #[test]
    fn explicit_controls_are_boundary_neutral() {
        for cp in [0x202A, 0x202B, 0x202C, 0x202D, 0x202E, 0x2066, 0x2067, 0x2068, 0x2069] {
            let ch = char::from_u32(cp).unwrap();
            assert_eq!(bidi_class(ch), BidiClass::BN, "U+{cp:04X}");
        }
    }

    #[test]
    fn mirrors() {
        assert_eq!(mirror_of('('), Some(')'));
        assert_eq!(mirror_of(')'), Some('('));
        assert_eq!(mirror_of('<'), Some('>'));
        assert_eq!(mirror_of('\u{27E8}'), Some('\u{27E9}'));
        assert_eq!(mirror_of('a'), None);
        assert_eq!(mirror_of('\u{05D0}'), None);
    }

    #[test]
    fn arabic_strong() {
        assert!(is_strong_arabic('\u{0627}'));
        assert!(is_strong_arabic('\u{FE70}'));
        assert!(!is_strong_arabic('\u{0660}')); // digit
        assert!(!is_strong_arabic('\u{05D0}')); // Hebrew
        assert!(!is_strong_arabic('a'));
    }
}
