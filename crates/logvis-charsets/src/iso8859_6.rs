//! ISO 8859-6 (Arabic).
//!
//! The Arabic block 0xC1..=0xF2 maps linearly onto U+0621..=U+0652. Arabic
//! punctuation has dedicated slots; presentation forms are not handled.

use crate::SUBSTITUTE;

const ISO_HAMZA: u8 = 0xC1;
const ISO_SUKUN: u8 = 0xF2;
const UNI_HAMZA: u32 = 0x0621;
const UNI_SUKUN: u32 = 0x0652;

pub fn to_unicode(b: u8) -> char {
    match b {
        ISO_HAMZA..=ISO_SUKUN => {
            char::from_u32(UNI_HAMZA + (b - ISO_HAMZA) as u32).unwrap_or('\u{FFFD}')
        }
        other => other as char,
    }
}

pub fn from_unicode(c: char) -> u8 {
    let u = c as u32;
    match u {
        UNI_HAMZA..=UNI_SUKUN => ISO_HAMZA + (u - UNI_HAMZA) as u8,
        _ if u < 0x100 => u as u8,
        0x060C => 0xAC,
        0x061B => 0xBB,
        0x061F => 0xBF,
        _ => SUBSTITUTE,
    }
}
