//! CapRTL: capital Latin letters stand in for Hebrew letters.
//!
//! A testing convention for exercising right-to-left behavior with plain
//! ASCII input: `A`..`Z` decode to the first 26 Hebrew letters, everything
//! else passes through as Latin-1.

use crate::SUBSTITUTE;

const UNI_ALEF: u32 = 0x05D0;

pub fn to_unicode(b: u8) -> char {
    if b.is_ascii_uppercase() {
        // 26 capitals onto alef..shin.
        char::from_u32(UNI_ALEF + (b - b'A') as u32).unwrap_or('\u{FFFD}')
    } else {
        b as char
    }
}

pub fn from_unicode(c: char) -> u8 {
    let u = c as u32;
    if (UNI_ALEF..UNI_ALEF + 26).contains(&u) {
        b'A' + (u - UNI_ALEF) as u8
    } else if u < 0x100 {
        u as u8
    } else {
        SUBSTITUTE
    }
}
