#![forbid(unsafe_code)]

//! Static character property tables: bidirectional classes, mirrored
//! glyph pairs, and Arabic strong-letter ranges.
//!
//! All tables are sorted by code point and hold disjoint closed intervals,
//! so lookups in [`crate::class`] are plain binary searches. Code points not
//! covered by [`BIDI_CLASS_RANGES`] default to strong left-to-right, which
//! is why LTR-heavy blocks (Latin, Greek, Cyrillic, CJK, Hangul...) are
//! mostly absent here.

use crate::types::BidiClass;

/// Bidi class ranges for non-ASCII code points.
/// Format: (first, last, class); `last` is inclusive.
pub(crate) static BIDI_CLASS_RANGES: &[(u32, u32, BidiClass)] = &[
    // Latin-1 supplement
    (0x0080, 0x0084, BidiClass::BN),
    (0x0085, 0x0085, BidiClass::BS), // NEL
    (0x0086, 0x009F, BidiClass::BN),
    (0x00A0, 0x00A0, BidiClass::CS), // NBSP
    (0x00A1, 0x00A1, BidiClass::ON),
    (0x00A2, 0x00A5, BidiClass::ET), // cent, pound, currency, yen
    (0x00A6, 0x00A9, BidiClass::ON),
    (0x00AB, 0x00AC, BidiClass::ON),
    (0x00AD, 0x00AD, BidiClass::BN), // soft hyphen
    (0x00AE, 0x00AF, BidiClass::ON),
    (0x00B0, 0x00B1, BidiClass::ET),
    (0x00B2, 0x00B3, BidiClass::EN),
    (0x00B4, 0x00B4, BidiClass::ON),
    (0x00B6, 0x00B8, BidiClass::ON),
    (0x00B9, 0x00B9, BidiClass::EN),
    (0x00BB, 0x00BF, BidiClass::ON),
    (0x00D7, 0x00D7, BidiClass::ON),
    (0x00F7, 0x00F7, BidiClass::ON),
    // Spacing modifiers and combining marks
    (0x02B9, 0x02BA, BidiClass::ON),
    (0x02C2, 0x02CF, BidiClass::ON),
    (0x02D2, 0x02DF, BidiClass::ON),
    (0x02E5, 0x02ED, BidiClass::ON),
    (0x0300, 0x036F, BidiClass::NSM),
    (0x0374, 0x0375, BidiClass::ON),
    (0x037E, 0x037E, BidiClass::ON),
    (0x0384, 0x0385, BidiClass::ON),
    (0x0387, 0x0387, BidiClass::ON),
    (0x0483, 0x0489, BidiClass::NSM),
    // Hebrew
    (0x0591, 0x05BD, BidiClass::NSM),
    (0x05BE, 0x05BE, BidiClass::R),
    (0x05BF, 0x05BF, BidiClass::NSM),
    (0x05C0, 0x05C0, BidiClass::R),
    (0x05C1, 0x05C2, BidiClass::NSM),
    (0x05C3, 0x05C3, BidiClass::R),
    (0x05C4, 0x05C5, BidiClass::NSM),
    (0x05C6, 0x05C6, BidiClass::R),
    (0x05C7, 0x05C7, BidiClass::NSM),
    (0x05D0, 0x05EA, BidiClass::R),
    (0x05EF, 0x05F4, BidiClass::R),
    // Arabic
    (0x0600, 0x0605, BidiClass::AN),
    (0x0606, 0x0607, BidiClass::ON),
    (0x0608, 0x0608, BidiClass::AL),
    (0x0609, 0x060A, BidiClass::ET),
    (0x060B, 0x060B, BidiClass::AL),
    (0x060C, 0x060C, BidiClass::CS),
    (0x060D, 0x060D, BidiClass::AL),
    (0x060E, 0x060F, BidiClass::ON),
    (0x0610, 0x061A, BidiClass::NSM),
    (0x061B, 0x061B, BidiClass::AL),
    (0x061C, 0x061C, BidiClass::BN), // Arabic letter mark
    (0x061D, 0x064A, BidiClass::AL),
    (0x064B, 0x065F, BidiClass::NSM),
    (0x0660, 0x0669, BidiClass::AN),
    (0x066A, 0x066A, BidiClass::ET),
    (0x066B, 0x066C, BidiClass::AN),
    (0x066D, 0x066F, BidiClass::AL),
    (0x0670, 0x0670, BidiClass::NSM),
    (0x0671, 0x06D5, BidiClass::AL),
    (0x06D6, 0x06DC, BidiClass::NSM),
    (0x06DD, 0x06DD, BidiClass::AN),
    (0x06DE, 0x06DE, BidiClass::ON),
    (0x06DF, 0x06E4, BidiClass::NSM),
    (0x06E5, 0x06E6, BidiClass::AL),
    (0x06E7, 0x06E8, BidiClass::NSM),
    (0x06E9, 0x06E9, BidiClass::ON),
    (0x06EA, 0x06ED, BidiClass::NSM),
    (0x06EE, 0x06EF, BidiClass::AL),
    (0x06F0, 0x06F9, BidiClass::EN), // extended Arabic-Indic digits
    (0x06FA, 0x070E, BidiClass::AL),
    (0x070F, 0x070F, BidiClass::BN), // Syriac abbreviation mark
    (0x0710, 0x0710, BidiClass::AL),
    (0x0711, 0x0711, BidiClass::NSM),
    (0x0712, 0x072F, BidiClass::AL),
    (0x0730, 0x074A, BidiClass::NSM),
    (0x074B, 0x07A5, BidiClass::AL),
    (0x07A6, 0x07B0, BidiClass::NSM),
    (0x07B1, 0x07BF, BidiClass::AL),
    // NKo
    (0x07C0, 0x07EA, BidiClass::R),
    (0x07EB, 0x07F3, BidiClass::NSM),
    (0x07F4, 0x07F5, BidiClass::R),
    (0x07F6, 0x07F9, BidiClass::ON),
    (0x07FA, 0x07FC, BidiClass::R),
    (0x07FD, 0x07FD, BidiClass::NSM),
    (0x07FE, 0x07FF, BidiClass::ET),
    // Samaritan, Mandaic
    (0x0800, 0x0815, BidiClass::R),
    (0x0816, 0x0819, BidiClass::NSM),
    (0x081A, 0x081A, BidiClass::R),
    (0x081B, 0x0823, BidiClass::NSM),
    (0x0824, 0x0824, BidiClass::R),
    (0x0825, 0x0827, BidiClass::NSM),
    (0x0828, 0x0828, BidiClass::R),
    (0x0829, 0x082D, BidiClass::NSM),
    (0x0830, 0x083E, BidiClass::R),
    (0x0840, 0x0858, BidiClass::R),
    (0x0859, 0x085B, BidiClass::NSM),
    (0x085E, 0x085E, BidiClass::R),
    // Arabic Extended-B/A
    (0x0860, 0x089F, BidiClass::AL),
    (0x08A0, 0x08C9, BidiClass::AL),
    (0x08CA, 0x08E1, BidiClass::NSM),
    (0x08E2, 0x08E2, BidiClass::AN),
    (0x08E3, 0x0902, BidiClass::NSM),
    // Indic combining marks (main ranges only)
    (0x093A, 0x093A, BidiClass::NSM),
    (0x093C, 0x093C, BidiClass::NSM),
    (0x0941, 0x0948, BidiClass::NSM),
    (0x094D, 0x094D, BidiClass::NSM),
    (0x0951, 0x0957, BidiClass::NSM),
    (0x0962, 0x0963, BidiClass::NSM),
    (0x0981, 0x0981, BidiClass::NSM),
    (0x09BC, 0x09BC, BidiClass::NSM),
    (0x09C1, 0x09C4, BidiClass::NSM),
    (0x09CD, 0x09CD, BidiClass::NSM),
    (0x09E2, 0x09E3, BidiClass::NSM),
    (0x09F2, 0x09F3, BidiClass::ET),
    (0x0E31, 0x0E31, BidiClass::NSM),
    (0x0E34, 0x0E3A, BidiClass::NSM),
    (0x0E3F, 0x0E3F, BidiClass::ET),
    (0x0E47, 0x0E4E, BidiClass::NSM),
    (0x0F3A, 0x0F3D, BidiClass::ON),
    (0x0F71, 0x0F7E, BidiClass::NSM),
    (0x0F80, 0x0F84, BidiClass::NSM),
    // General punctuation
    (0x1680, 0x1680, BidiClass::WS), // Ogham space mark
    (0x169B, 0x169C, BidiClass::ON),
    (0x17DB, 0x17DB, BidiClass::ET), // riel sign
    (0x1800, 0x180A, BidiClass::ON),
    (0x180B, 0x180F, BidiClass::NSM),
    (0x2000, 0x200A, BidiClass::WS),
    (0x200B, 0x200D, BidiClass::BN), // ZWSP, ZWNJ, ZWJ
    (0x200E, 0x200E, BidiClass::L),  // LRM
    (0x200F, 0x200F, BidiClass::R),  // RLM
    (0x2010, 0x2027, BidiClass::ON),
    (0x2028, 0x2028, BidiClass::WS), // line separator
    (0x2029, 0x2029, BidiClass::BS), // paragraph separator
    (0x202A, 0x202E, BidiClass::BN), // LRE/RLE/PDF/LRO/RLO: recognized, not resolved
    (0x202F, 0x202F, BidiClass::CS), // NNBSP
    (0x2030, 0x2034, BidiClass::ET),
    (0x2035, 0x2043, BidiClass::ON),
    (0x2044, 0x2044, BidiClass::CS), // fraction slash
    (0x2045, 0x205E, BidiClass::ON),
    (0x205F, 0x205F, BidiClass::WS),
    (0x2060, 0x2064, BidiClass::BN),
    (0x2066, 0x2069, BidiClass::BN), // LRI/RLI/FSI/PDI: recognized, not resolved
    (0x206A, 0x206F, BidiClass::BN),
    // Superscripts and subscripts
    (0x2070, 0x2070, BidiClass::EN),
    (0x2074, 0x2079, BidiClass::EN),
    (0x207A, 0x207B, BidiClass::ES),
    (0x207C, 0x207E, BidiClass::ON),
    (0x2080, 0x2089, BidiClass::EN),
    (0x208A, 0x208B, BidiClass::ES),
    (0x208C, 0x208E, BidiClass::ON),
    // Currency symbols
    (0x20A0, 0x20CF, BidiClass::ET),
    // Combining marks for symbols
    (0x20D0, 0x20F0, BidiClass::NSM),
    // Letterlike symbols and number forms
    (0x2100, 0x2101, BidiClass::ON),
    (0x2103, 0x2106, BidiClass::ON),
    (0x2108, 0x2109, BidiClass::ON),
    (0x2114, 0x2114, BidiClass::ON),
    (0x2116, 0x2118, BidiClass::ON),
    (0x211E, 0x2123, BidiClass::ON),
    (0x2125, 0x2125, BidiClass::ON),
    (0x2127, 0x2127, BidiClass::ON),
    (0x2129, 0x2129, BidiClass::ON),
    (0x212E, 0x212E, BidiClass::ET),
    (0x213A, 0x213B, BidiClass::ON),
    (0x2140, 0x2144, BidiClass::ON),
    (0x214A, 0x214D, BidiClass::ON),
    (0x2150, 0x215F, BidiClass::ON),
    (0x2189, 0x218B, BidiClass::ON),
    // Arrows, mathematical operators, technical, box drawing, shapes
    (0x2190, 0x2426, BidiClass::ON),
    (0x2440, 0x244A, BidiClass::ON),
    (0x2460, 0x2487, BidiClass::ON), // circled/parenthesized numbers
    (0x24EA, 0x24FF, BidiClass::ON),
    (0x2500, 0x27FF, BidiClass::ON),
    (0x2900, 0x2BFF, BidiClass::ON),
    (0x2CE5, 0x2CEA, BidiClass::ON),
    (0x2CEF, 0x2CF1, BidiClass::NSM),
    (0x2E00, 0x2E5D, BidiClass::ON),
    (0x2E80, 0x2FFF, BidiClass::ON),
    // CJK symbols and punctuation
    (0x3000, 0x3000, BidiClass::WS), // ideographic space
    (0x3001, 0x3004, BidiClass::ON),
    (0x3008, 0x3020, BidiClass::ON),
    (0x302A, 0x302D, BidiClass::NSM),
    (0x3030, 0x3030, BidiClass::ON),
    (0x3036, 0x3037, BidiClass::ON),
    (0x303D, 0x303F, BidiClass::ON),
    (0x3099, 0x309A, BidiClass::NSM),
    (0x309B, 0x309C, BidiClass::ON),
    (0x30A0, 0x30A0, BidiClass::ON),
    (0x30FB, 0x30FB, BidiClass::ON),
    (0x31C0, 0x31E3, BidiClass::ON),
    (0x321D, 0x321E, BidiClass::ON),
    (0x3250, 0x325F, BidiClass::ON),
    (0x327C, 0x327E, BidiClass::ON),
    (0x32B1, 0x32BF, BidiClass::ON),
    (0x32CC, 0x32CF, BidiClass::ON),
    (0x3377, 0x337A, BidiClass::ON),
    (0x33DE, 0x33DF, BidiClass::ON),
    (0x33FF, 0x33FF, BidiClass::ON),
    (0x4DC0, 0x4DFF, BidiClass::ON), // Yijing hexagrams
    (0xA490, 0xA4C6, BidiClass::ON),
    (0xA60D, 0xA60F, BidiClass::ON),
    (0xA66F, 0xA672, BidiClass::NSM),
    (0xA674, 0xA67D, BidiClass::NSM),
    (0xA69E, 0xA69F, BidiClass::NSM),
    (0xA6F0, 0xA6F1, BidiClass::NSM),
    (0xA700, 0xA721, BidiClass::ON),
    (0xA788, 0xA788, BidiClass::ON),
    (0xA828, 0xA82B, BidiClass::ON),
    (0xA838, 0xA839, BidiClass::ET),
    (0xA8E0, 0xA8F1, BidiClass::NSM),
    (0xAB6A, 0xAB6B, BidiClass::ON),
    (0xFB1D, 0xFB1D, BidiClass::R),
    (0xFB1E, 0xFB1E, BidiClass::NSM),
    (0xFB1F, 0xFB28, BidiClass::R),
    (0xFB29, 0xFB29, BidiClass::ES), // Hebrew alternative plus
    (0xFB2A, 0xFB4F, BidiClass::R),
    (0xFB50, 0xFD3D, BidiClass::AL),
    (0xFD3E, 0xFD3F, BidiClass::ON), // ornate parentheses
    (0xFD40, 0xFDCF, BidiClass::AL),
    (0xFDF0, 0xFDFC, BidiClass::AL),
    (0xFDFD, 0xFDFF, BidiClass::ON),
    (0xFE00, 0xFE0F, BidiClass::NSM), // variation selectors
    (0xFE10, 0xFE19, BidiClass::ON),
    (0xFE20, 0xFE2F, BidiClass::NSM),
    (0xFE30, 0xFE4F, BidiClass::ON),
    (0xFE50, 0xFE50, BidiClass::CS),
    (0xFE51, 0xFE51, BidiClass::ON),
    (0xFE52, 0xFE52, BidiClass::CS),
    (0xFE54, 0xFE54, BidiClass::ON),
    (0xFE55, 0xFE55, BidiClass::CS),
    (0xFE56, 0xFE5E, BidiClass::ON),
    (0xFE5F, 0xFE5F, BidiClass::ET),
    (0xFE60, 0xFE61, BidiClass::ON),
    (0xFE62, 0xFE63, BidiClass::ES),
    (0xFE64, 0xFE66, BidiClass::ON),
    (0xFE68, 0xFE68, BidiClass::ON),
    (0xFE69, 0xFE6A, BidiClass::ET),
    (0xFE6B, 0xFE6B, BidiClass::ON),
    (0xFE70, 0xFEFC, BidiClass::AL),
    (0xFEFF, 0xFEFF, BidiClass::BN), // BOM / ZWNBSP
    // Fullwidth and halfwidth forms
    (0xFF01, 0xFF02, BidiClass::ON),
    (0xFF03, 0xFF05, BidiClass::ET),
    (0xFF06, 0xFF0A, BidiClass::ON),
    (0xFF0B, 0xFF0B, BidiClass::ES),
    (0xFF0C, 0xFF0C, BidiClass::CS),
    (0xFF0D, 0xFF0D, BidiClass::ES),
    (0xFF0E, 0xFF0F, BidiClass::CS),
    (0xFF10, 0xFF19, BidiClass::EN),
    (0xFF1A, 0xFF1A, BidiClass::CS),
    (0xFF1B, 0xFF20, BidiClass::ON),
    (0xFF3B, 0xFF40, BidiClass::ON),
    (0xFF5B, 0xFF65, BidiClass::ON),
    (0xFFE0, 0xFFE1, BidiClass::ET),
    (0xFFE2, 0xFFE4, BidiClass::ON),
    (0xFFE5, 0xFFE6, BidiClass::ET),
    (0xFFE8, 0xFFEE, BidiClass::ON),
    (0xFFF9, 0xFFFD, BidiClass::ON),
    // Supplementary planes: right-to-left scripts and Arabic math symbols
    (0x10800, 0x10FFF, BidiClass::R), // Cypriot through Old Turkic blocks
    (0x1D167, 0x1D169, BidiClass::NSM),
    (0x1D173, 0x1D17A, BidiClass::BN),
    (0x1D17B, 0x1D182, BidiClass::NSM),
    (0x1D185, 0x1D18B, BidiClass::NSM),
    (0x1D1AA, 0x1D1AD, BidiClass::NSM),
    (0x1D7CE, 0x1D7FF, BidiClass::EN), // mathematical digits
    (0x1E800, 0x1EC6F, BidiClass::R),
    (0x1EC70, 0x1ECBF, BidiClass::AL), // Indic Siyaq numbers
    (0x1ED00, 0x1ED4F, BidiClass::AL), // Ottoman Siyaq numbers
    (0x1EE00, 0x1EEFF, BidiClass::AL), // Arabic mathematical alphabetic symbols
    (0x1EF00, 0x1EFFF, BidiClass::R),
    (0x1F100, 0x1F10A, BidiClass::EN),
    (0xE0001, 0xE0001, BidiClass::BN),
    (0xE0020, 0xE007F, BidiClass::BN),
    (0xE0100, 0xE01EF, BidiClass::NSM),
];

/// Mirrored glyph pairs, sorted by the first code point.
/// Format: (code_point, mirrored_counterpart). Pairs appear in both
/// directions so a single binary search answers either side.
pub(crate) static MIRRORED_PAIRS: &[(u32, u32)] = &[
    (0x0028, 0x0029), // ( )
    (0x0029, 0x0028),
    (0x003C, 0x003E), // < >
    (0x003E, 0x003C),
    (0x005B, 0x005D), // [ ]
    (0x005D, 0x005B),
    (0x007B, 0x007D), // { }
    (0x007D, 0x007B),
    (0x00AB, 0x00BB), // « »
    (0x00BB, 0x00AB),
    (0x0F3A, 0x0F3B),
    (0x0F3B, 0x0F3A),
    (0x0F3C, 0x0F3D),
    (0x0F3D, 0x0F3C),
    (0x169B, 0x169C),
    (0x169C, 0x169B),
    (0x2039, 0x203A), // ‹ ›
    (0x203A, 0x2039),
    (0x2045, 0x2046),
    (0x2046, 0x2045),
    (0x207D, 0x207E),
    (0x207E, 0x207D),
    (0x208D, 0x208E),
    (0x208E, 0x208D),
    (0x2208, 0x220B), // ∈ ∋
    (0x2209, 0x220C),
    (0x220A, 0x220D),
    (0x220B, 0x2208),
    (0x220C, 0x2209),
    (0x220D, 0x220A),
    (0x223C, 0x223D),
    (0x223D, 0x223C),
    (0x2243, 0x22CD),
    (0x2252, 0x2253),
    (0x2253, 0x2252),
    (0x2254, 0x2255),
    (0x2255, 0x2254),
    (0x2264, 0x2265), // ≤ ≥
    (0x2265, 0x2264),
    (0x2266, 0x2267),
    (0x2267, 0x2266),
    (0x2268, 0x2269),
    (0x2269, 0x2268),
    (0x226A, 0x226B), // ≪ ≫
    (0x226B, 0x226A),
    (0x226E, 0x226F),
    (0x226F, 0x226E),
    (0x2270, 0x2271),
    (0x2271, 0x2270),
    (0x2272, 0x2273),
    (0x2273, 0x2272),
    (0x2276, 0x2277),
    (0x2277, 0x2276),
    (0x227A, 0x227B), // ≺ ≻
    (0x227B, 0x227A),
    (0x227C, 0x227D),
    (0x227D, 0x227C),
    (0x2282, 0x2283), // ⊂ ⊃
    (0x2283, 0x2282),
    (0x2284, 0x2285),
    (0x2285, 0x2284),
    (0x2286, 0x2287),
    (0x2287, 0x2286),
    (0x2288, 0x2289),
    (0x2289, 0x2288),
    (0x228A, 0x228B),
    (0x228B, 0x228A),
    (0x228F, 0x2290),
    (0x2290, 0x228F),
    (0x2291, 0x2292),
    (0x2292, 0x2291),
    (0x22A2, 0x22A3), // ⊢ ⊣
    (0x22A3, 0x22A2),
    (0x22B0, 0x22B1),
    (0x22B1, 0x22B0),
    (0x22B2, 0x22B3),
    (0x22B3, 0x22B2),
    (0x22B4, 0x22B5),
    (0x22B5, 0x22B4),
    (0x22CD, 0x2243),
    (0x22D0, 0x22D1),
    (0x22D1, 0x22D0),
    (0x22D6, 0x22D7),
    (0x22D7, 0x22D6),
    (0x22D8, 0x22D9),
    (0x22D9, 0x22D8),
    (0x22DA, 0x22DB),
    (0x22DB, 0x22DA),
    (0x2308, 0x2309), // ⌈ ⌉
    (0x2309, 0x2308),
    (0x230A, 0x230B), // ⌊ ⌋
    (0x230B, 0x230A),
    (0x2329, 0x232A),
    (0x232A, 0x2329),
    (0x2768, 0x2769),
    (0x2769, 0x2768),
    (0x276A, 0x276B),
    (0x276B, 0x276A),
    (0x276C, 0x276D),
    (0x276D, 0x276C),
    (0x276E, 0x276F),
    (0x276F, 0x276E),
    (0x2770, 0x2771),
    (0x2771, 0x2770),
    (0x2772, 0x2773),
    (0x2773, 0x2772),
    (0x2774, 0x2775),
    (0x2775, 0x2774),
    (0x27E6, 0x27E7), // ⟦ ⟧
    (0x27E7, 0x27E6),
    (0x27E8, 0x27E9), // ⟨ ⟩
    (0x27E9, 0x27E8),
    (0x27EA, 0x27EB),
    (0x27EB, 0x27EA),
    (0x27EC, 0x27ED),
    (0x27ED, 0x27EC),
    (0x27EE, 0x27EF),
    (0x27EF, 0x27EE),
    (0x2983, 0x2984),
    (0x2984, 0x2983),
    (0x2985, 0x2986),
    (0x2986, 0x2985),
    (0x2987, 0x2988),
    (0x2988, 0x2987),
    (0x2989, 0x298A),
    (0x298A, 0x2989),
    (0x2991, 0x2992),
    (0x2992, 0x2991),
    (0x2993, 0x2994),
    (0x2994, 0x2993),
    (0x2995, 0x2996),
    (0x2996, 0x2995),
    (0x2997, 0x2998),
    (0x2998, 0x2997),
    (0x29FC, 0x29FD),
    (0x29FD, 0x29FC),
    (0x3008, 0x3009), // 〈 〉
    (0x3009, 0x3008),
    (0x300A, 0x300B),
    (0x300B, 0x300A),
    (0x300C, 0x300D),
    (0x300D, 0x300C),
    (0x300E, 0x300F),
    (0x300F, 0x300E),
    (0x3010, 0x3011),
    (0x3011, 0x3010),
    (0x3014, 0x3015),
    (0x3015, 0x3014),
    (0x3016, 0x3017),
    (0x3017, 0x3016),
    (0x3018, 0x3019),
    (0x3019, 0x3018),
    (0x301A, 0x301B),
    (0x301B, 0x301A),
    (0xFE59, 0xFE5A),
    (0xFE5A, 0xFE59),
    (0xFE5B, 0xFE5C),
    (0xFE5C, 0xFE5B),
    (0xFE5D, 0xFE5E),
    (0xFE5E, 0xFE5D),
    (0xFE64, 0xFE65),
    (0xFE65, 0xFE64),
    (0xFF08, 0xFF09),
    (0xFF09, 0xFF08),
    (0xFF1C, 0xFF1E),
    (0xFF1E, 0xFF1C),
    (0xFF3B, 0xFF3D),
    (0xFF3D, 0xFF3B),
    (0xFF5B, 0xFF5D),
    (0xFF5D, 0xFF5B),
    (0xFF5F, 0xFF60),
    (0xFF60, 0xFF5F),
    (0xFF62, 0xFF63),
    (0xFF63, 0xFF62),
];

/// Ranges of Arabic letters that are strong right-to-left.
/// Format: (first, last), inclusive, sorted and disjoint.
pub(crate) static ARABIC_STRONG_RANGES: &[(u32, u32)] = &[
    (0x0608, 0x0608),
    (0x060B, 0x060B),
    (0x060D, 0x060D),
    (0x061D, 0x064A),
    (0x066D, 0x066F),
    (0x0671, 0x06D5),
    (0x06E5, 0x06E6),
    (0x06EE, 0x06EF),
    (0x06FA, 0x070E),
    (0x0710, 0x0710),
    (0x0712, 0x072F),
    (0x074B, 0x07A5),
    (0x07B1, 0x07BF),
    (0x0860, 0x08C9),
    (0xFB50, 0xFD3D),
    (0xFD40, 0xFDCF),
    (0xFDF0, 0xFDFC),
    (0xFE70, 0xFEFC),
    (0x1EE00, 0x1EEFF),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_sorted_disjoint(ranges: impl Iterator<Item = (u32, u32)>) {
        let mut prev_last: Option<u32> = None;
        for (first, last) in ranges {
            assert!(first <= last, "range {first:#x}..={last:#x} is inverted");
            if let Some(p) = prev_last {
                assert!(p < first, "range starting at {first:#x} overlaps previous");
            }
            prev_last = Some(last);
        }
    }

    #[test]
    fn class_ranges_sorted_and_disjoint() {
        assert_sorted_disjoint(BIDI_CLASS_RANGES.iter().map(|&(f, l, _)| (f, l)));
    }

    #[test]
    fn arabic_ranges_sorted_and_disjoint() {
        assert_sorted_disjoint(ARABIC_STRONG_RANGES.iter().copied());
    }

    #[test]
    fn mirrored_pairs_sorted_and_involutive() {
        let mut prev = 0u32;
        for &(from, to) in MIRRORED_PAIRS {
            assert!(from > prev || prev == 0, "pair {from:#x} out of order");
            prev = from;
            // Every pair's counterpart must map back.
            let back = MIRRORED_PAIRS
                .binary_search_by_key(&to, |&(f, _)| f)
                .map(|i| MIRRORED_PAIRS[i].1);
            assert_eq!(back, Ok(from), "mirror of {to:#x} should be {from:#x}");
        }
    }
}
