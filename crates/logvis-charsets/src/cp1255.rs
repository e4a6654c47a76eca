//! Windows-1255 (Hebrew).
//!
//! Extends ISO 8859-8 with Hebrew points (0xC0..=0xD3), the yiddish
//! digraphs and geresh/gershayim (0xD4..=0xD8), and the Windows-1252-style
//! punctuation block at 0x80..=0xBF.

use crate::SUBSTITUTE;

const CP_ALEF: u8 = 0xE0;
const CP_TAV: u8 = 0xFA;
const UNI_ALEF: u32 = 0x05D0;
const UNI_TAV: u32 = 0x05EA;

const CP_SHEVA: u8 = 0xC0;
const CP_SOF_PASUQ: u8 = 0xD3;
const UNI_SHEVA: u32 = 0x05B0;
const UNI_SOF_PASUQ: u32 = 0x05C3;

const CP_DOUBLE_VAV: u8 = 0xD4;
const CP_GERSHAYIM: u8 = 0xD8;
const UNI_DOUBLE_VAV: u32 = 0x05F0;
const UNI_GERSHAYIM: u32 = 0x05F4;

/// Punctuation block 0x80..=0xBF; undefined slots pass through.
const PUNCT: [char; 64] = [
    '\u{20AC}', '\u{81}', '\u{201A}', '\u{0192}', '\u{201E}', '\u{2026}', '\u{2020}', '\u{2021}',
    '\u{02C6}', '\u{2030}', '\u{8A}', '\u{2039}', '\u{8C}', '\u{8D}', '\u{8E}', '\u{8F}',
    '\u{90}', '\u{2018}', '\u{2019}', '\u{201C}', '\u{201D}', '\u{2022}', '\u{2013}', '\u{2014}',
    '\u{02DC}', '\u{2122}', '\u{9A}', '\u{203A}', '\u{9C}', '\u{9D}', '\u{9E}', '\u{9F}',
    '\u{A0}', '\u{A1}', '\u{A2}', '\u{A3}', '\u{20AA}', '\u{A5}', '\u{A6}', '\u{A7}',
    '\u{A8}', '\u{A9}', '\u{D7}', '\u{AB}', '\u{AC}', '\u{AD}', '\u{AE}', '\u{AF}',
    '\u{B0}', '\u{B1}', '\u{B2}', '\u{B3}', '\u{B4}', '\u{B5}', '\u{B6}', '\u{B7}',
    '\u{B8}', '\u{B9}', '\u{F7}', '\u{BB}', '\u{BC}', '\u{BD}', '\u{BE}', '\u{BF}',
];

pub fn to_unicode(b: u8) -> char {
    match b {
        CP_ALEF..=CP_TAV => char::from_u32(UNI_ALEF + (b - CP_ALEF) as u32).unwrap_or('\u{FFFD}'),
        CP_SHEVA..=CP_SOF_PASUQ => {
            char::from_u32(UNI_SHEVA + (b - CP_SHEVA) as u32).unwrap_or('\u{FFFD}')
        }
        CP_DOUBLE_VAV..=CP_GERSHAYIM => {
            char::from_u32(UNI_DOUBLE_VAV + (b - CP_DOUBLE_VAV) as u32).unwrap_or('\u{FFFD}')
        }
        0x80..=0xBF => PUNCT[(b - 0x80) as usize],
        other => other as char,
    }
}

pub fn from_unicode(c: char) -> u8 {
    let u = c as u32;
    match u {
        UNI_ALEF..=UNI_TAV => CP_ALEF + (u - UNI_ALEF) as u8,
        UNI_SHEVA..=UNI_SOF_PASUQ => CP_SHEVA + (u - UNI_SHEVA) as u8,
        UNI_DOUBLE_VAV..=UNI_GERSHAYIM => CP_DOUBLE_VAV + (u - UNI_DOUBLE_VAV) as u8,
        _ if u < 0x100 => u as u8,
        _ => SUBSTITUTE,
    }
}
