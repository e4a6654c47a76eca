//! ISIRI 3342 (Persian).
//!
//! Bytes 0xA1..=0xFE decode through a table carrying Persian letters,
//! extended digits, and mirrored-in-place punctuation; 0x80..=0xA0 and
//! 0xFF shadow the low ASCII range.

use crate::SUBSTITUTE;

/// 0xA0..=0xFF. The four slots at 0xEC..=0xEF are undefined and decode to
/// themselves as low controls.
const HIGH: [char; 96] = [
    '\u{20}', '\u{200C}', '\u{200D}', '!', '\u{A4}', '\u{066A}', '.', '\u{066C}',
    ')', '(', '\u{D7}', '+', '\u{060C}', '-', '\u{066B}', '/',
    '\u{06F0}', '\u{06F1}', '\u{06F2}', '\u{06F3}', '\u{06F4}', '\u{06F5}', '\u{06F6}', '\u{06F7}',
    '\u{06F8}', '\u{06F9}', ':', '\u{061B}', '<', '=', '>', '\u{061F}',
    '\u{0622}', '\u{0627}', '\u{0621}', '\u{0628}', '\u{067E}', '\u{062A}', '\u{062B}', '\u{062C}',
    '\u{0686}', '\u{062D}', '\u{062E}', '\u{062F}', '\u{0630}', '\u{0631}', '\u{0632}', '\u{0698}',
    '\u{0633}', '\u{0634}', '\u{0635}', '\u{0636}', '\u{0637}', '\u{0638}', '\u{0639}', '\u{063A}',
    '\u{0641}', '\u{0642}', '\u{06A9}', '\u{06AF}', '\u{0644}', '\u{0645}', '\u{0646}', '\u{0648}',
    '\u{0647}', '\u{06CC}', ']', '[', '}', '{', '\u{AB}', '\u{BB}',
    '*', '\u{0640}', '|', '\\', '\u{EC}', '\u{ED}', '\u{EE}', '\u{EF}',
    '\u{064E}', '\u{0650}', '\u{064F}', '\u{064B}', '\u{064D}', '\u{064C}', '\u{0651}', '\u{0652}',
    '\u{0623}', '\u{0624}', '\u{0625}', '\u{0626}', '\u{0629}', '\u{0643}', '\u{064A}', '\u{7F}',
];

pub fn to_unicode(b: u8) -> char {
    match b {
        0x80..=0xA0 | 0xFF => (b - 0x80) as char,
        0xA1..=0xFE => HIGH[(b - 0xA0) as usize],
        other => other as char,
    }
}

pub fn from_unicode(c: char) -> u8 {
    let u = c as u32;
    if u < 0x100 {
        return u as u8;
    }
    match u {
        0x060C => 0xAC,
        0x061B => 0xBB,
        0x061F => 0xBF,
        0x0621 => 0xC2,
        0x0622 => 0xC0,
        0x0623 => 0xF8,
        0x0624 => 0xF9,
        0x0625 => 0xFA,
        0x0626 => 0xFB,
        0x0627 => 0xC1,
        0x0628 => 0xC3,
        0x0629 => 0xFC,
        0x062A => 0xC5,
        0x062B => 0xC6,
        0x062C => 0xC7,
        0x062D => 0xC9,
        0x062E => 0xCA,
        0x062F => 0xCB,
        0x0630 => 0xCC,
        0x0631 => 0xCD,
        0x0632 => 0xCE,
        0x0633 => 0xD0,
        0x0634 => 0xD1,
        0x0635 => 0xD2,
        0x0636 => 0xD3,
        0x0637 => 0xD4,
        0x0638 => 0xD5,
        0x0639 => 0xD6,
        0x063A => 0xD7,
        0x0640 => 0xE9,
        0x0641 => 0xD8,
        0x0642 => 0xD9,
        0x0643 => 0xFD,
        0x0644 => 0xDC,
        0x0645 => 0xDD,
        0x0646 => 0xDE,
        0x0647 => 0xE0,
        0x0648 => 0xDF,
        0x064A => 0xFE,
        0x064B => 0xF3,
        0x064C => 0xF5,
        0x064D => 0xF4,
        0x064E => 0xF0,
        0x064F => 0xF2,
        0x0650 => 0xF1,
        0x0651 => 0xF6,
        0x0652 => 0xF7,
        0x066A => 0xA5,
        0x066B => 0xAE,
        0x066C => 0xA7,
        0x067E => 0xC4,
        0x0686 => 0xC8,
        0x0698 => 0xCF,
        0x06A9 => 0xDA,
        0x06AF => 0xDB,
        0x06CC => 0xE1,
        0x06F0 => 0xB0,
        0x06F1 => 0xB1,
        0x06F2 => 0xB2,
        0x06F3 => 0xB3,
        0x06F4 => 0xB4,
        0x06F5 => 0xB5,
        0x06F6 => 0xB6,
        0x06F7 => 0xB7,
        0x06F8 => 0xB8,
        0x06F9 => 0xB9,
        0x200C => 0xA1,
        0x200D => 0xA2,
        _ => SUBSTITUTE,
    }
}
