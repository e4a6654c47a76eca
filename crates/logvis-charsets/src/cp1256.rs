//! Windows-1256 (Arabic).
//!
//! The whole high half 0x80..=0xFF decodes through one table mixing Arabic
//! letters, Persian/Urdu extensions, and Windows-1252 punctuation. Encoding
//! uses the contiguous hamza..dad run plus an explicit map for the rest.

use crate::SUBSTITUTE;

const UNI_HAMZA: u32 = 0x0621;
const UNI_DAD: u32 = 0x0636;
const CP_HAMZA: u8 = 0xC1;

/// High half 0x80..=0xFF.
const HIGH: [char; 128] = [
    '\u{20AC}', '\u{067E}', '\u{201A}', '\u{0192}', '\u{201E}', '\u{2026}', '\u{2020}', '\u{2021}',
    '\u{02C6}', '\u{2030}', '\u{0679}', '\u{2039}', '\u{0152}', '\u{0686}', '\u{0698}', '\u{0688}',
    '\u{06AF}', '\u{2018}', '\u{2019}', '\u{201C}', '\u{201D}', '\u{2022}', '\u{2013}', '\u{2014}',
    '\u{06A9}', '\u{2122}', '\u{0691}', '\u{203A}', '\u{0153}', '\u{200C}', '\u{200D}', '\u{06BA}',
    '\u{A0}', '\u{060C}', '\u{A2}', '\u{A3}', '\u{A4}', '\u{A5}', '\u{A6}', '\u{A7}',
    '\u{A8}', '\u{A9}', '\u{06BE}', '\u{AB}', '\u{AC}', '\u{AD}', '\u{AE}', '\u{AF}',
    '\u{B0}', '\u{B1}', '\u{B2}', '\u{B3}', '\u{B4}', '\u{B5}', '\u{B6}', '\u{B7}',
    '\u{B8}', '\u{B9}', '\u{061B}', '\u{BB}', '\u{BC}', '\u{BD}', '\u{BE}', '\u{061F}',
    '\u{06C1}', '\u{0621}', '\u{0622}', '\u{0623}', '\u{0624}', '\u{0625}', '\u{0626}', '\u{0627}',
    '\u{0628}', '\u{0629}', '\u{062A}', '\u{062B}', '\u{062C}', '\u{062D}', '\u{062E}', '\u{062F}',
    '\u{0630}', '\u{0631}', '\u{0632}', '\u{0633}', '\u{0634}', '\u{0635}', '\u{0636}', '\u{D7}',
    '\u{0637}', '\u{0638}', '\u{0639}', '\u{063A}', '\u{0640}', '\u{0641}', '\u{0642}', '\u{0643}',
    '\u{E0}', '\u{0644}', '\u{E2}', '\u{0645}', '\u{0646}', '\u{0647}', '\u{0648}', '\u{E7}',
    '\u{E8}', '\u{E9}', '\u{EA}', '\u{EB}', '\u{0649}', '\u{064A}', '\u{EE}', '\u{EF}',
    '\u{064B}', '\u{064C}', '\u{064D}', '\u{064E}', '\u{F4}', '\u{064F}', '\u{0650}', '\u{F7}',
    '\u{0651}', '\u{F9}', '\u{0652}', '\u{FB}', '\u{FC}', '\u{200E}', '\u{200F}', '\u{FF}',
];

pub fn to_unicode(b: u8) -> char {
    if b >= 0x80 {
        HIGH[(b - 0x80) as usize]
    } else {
        b as char
    }
}

pub fn from_unicode(c: char) -> u8 {
    let u = c as u32;
    if u < 0x100 {
        return u as u8;
    }
    if (UNI_HAMZA..=UNI_DAD).contains(&u) {
        return CP_HAMZA + (u - UNI_HAMZA) as u8;
    }
    match u {
        0x0152 => 0x8C,
        0x0153 => 0x9C,
        0x0192 => 0x83,
        0x02C6 => 0x88,
        0x060C => 0xA1,
        0x061B => 0xBA,
        0x061F => 0xBF,
        0x0637 => 0xD8,
        0x0638 => 0xD9,
        0x0639 => 0xDA,
        0x063A => 0xDB,
        0x0640 => 0xDC,
        0x0641 => 0xDD,
        0x0642 => 0xDE,
        0x0643 => 0xDF,
        0x0644 => 0xE1,
        0x0645 => 0xE3,
        0x0646 => 0xE4,
        0x0647 => 0xE5,
        0x0648 => 0xE6,
        0x0649 => 0xEC,
        0x064A => 0xED,
        0x064B => 0xF0,
        0x064C => 0xF1,
        0x064D => 0xF2,
        0x064E => 0xF3,
        0x064F => 0xF5,
        0x0650 => 0xF6,
        0x0651 => 0xF8,
        0x0652 => 0xFA,
        0x0679 => 0x8A,
        0x067E => 0x81,
        0x0686 => 0x8D,
        0x0688 => 0x8F,
        0x0691 => 0x9A,
        0x0698 => 0x8E,
        0x06A9 => 0x98,
        0x06AF => 0x90,
        0x06BA => 0x9F,
        0x06BE => 0xAA,
        0x06C1 => 0xC0,
        0x200C => 0x9D,
        0x200D => 0x9E,
        0x200E => 0xFD,
        0x200F => 0xFE,
        0x2013 => 0x96,
        0x2014 => 0x97,
        0x2018 => 0x91,
        0x2019 => 0x92,
        0x201A => 0x82,
        0x201C => 0x93,
        0x201D => 0x94,
        0x201E => 0x84,
        0x2020 => 0x86,
        0x2021 => 0x87,
        0x2022 => 0x95,
        0x2026 => 0x85,
        0x2030 => 0x89,
        0x2039 => 0x8B,
        0x203A => 0x9B,
        0x20AC => 0x80,
        0x2122 => 0x99,
        _ => SUBSTITUTE,
    }
}
