//! ISO 8859-8 (Hebrew).
//!
//! The Hebrew block sits at 0xE0..=0xFA. Bytes 0xFE/0xFF carry the LRM/RLM
//! extension agreed at the Ivrix meeting of 2000-04-14.

use crate::SUBSTITUTE;

const ISO_ALEF: u8 = 0xE0;
const ISO_TAV: u8 = 0xFA;
const ISO_LRM: u8 = 0xFE;
const ISO_RLM: u8 = 0xFF;

const UNI_ALEF: u32 = 0x05D0;
const UNI_TAV: u32 = 0x05EA;
const UNI_LRM: char = '\u{200E}';
const UNI_RLM: char = '\u{200F}';

pub fn to_unicode(b: u8) -> char {
    match b {
        ISO_LRM => UNI_LRM,
        ISO_RLM => UNI_RLM,
        ISO_ALEF..=ISO_TAV => {
            char::from_u32(UNI_ALEF + (b - ISO_ALEF) as u32).unwrap_or('\u{FFFD}')
        }
        other => other as char,
    }
}

pub fn from_unicode(c: char) -> u8 {
    let u = c as u32;
    match u {
        UNI_ALEF..=UNI_TAV => ISO_ALEF + (u - UNI_ALEF) as u8,
        _ if c == UNI_LRM => ISO_LRM,
        _ if c == UNI_RLM => ISO_RLM,
        _ if u < 0x100 => u as u8,
        _ => SUBSTITUTE,
    }
}
