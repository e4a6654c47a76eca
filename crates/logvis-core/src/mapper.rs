#![forbid(unsafe_code)]

//! Range and caret mapping between logical and visual coordinates.
//!
//! Reordering can split one contiguous range in either coordinate space into
//! up to three pieces in the other, so [`map_range`] returns a small span
//! list rather than a single span. [`resolve_caret`] turns a pixel
//! coordinate into an insertion point for editor use.

use smallvec::SmallVec;

use crate::types::Direction;

// ---------------------------------------------------------------------------
// Range mapping
// ---------------------------------------------------------------------------

/// A half-open `[start, end)` span of character positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    #[inline]
    fn contains(&self, pos: usize) -> bool {
        self.start <= pos && pos < self.end
    }
}

/// Translate `span` through a position map into the map's own coordinate
/// space.
///
/// `map` carries one entry per character, mapping the walked space to the
/// space `span` is expressed in: pass the visual→logical map to translate a
/// logical span into visual spans, and the logical→visual map for the other
/// direction. The walk covers every index plus a one-past-the-end sentinel,
/// opening a span on entering `[span.start, span.end)` and closing it on
/// leaving, so at most three spans come back.
pub fn map_range(span: Span, map: &[u32]) -> SmallVec<[Span; 3]> {
    let len = map.len();
    let mut out = SmallVec::new();
    let mut open: Option<usize> = None;

    for i in 0..=len {
        let inside = i < len && span.contains(map[i] as usize);
        match (open, inside) {
            (None, true) => open = Some(i),
            (Some(start), false) => {
                out.push(Span { start, end: i });
                open = None;
            }
            _ => {}
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Caret resolution
// ---------------------------------------------------------------------------

/// An insertion point resolved from a pixel coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaretPosition {
    /// Logical index the caret sits at, in `[0, len]`.
    pub logical: usize,
    /// Visual index the caret sits at, in `[0, len]`.
    pub visual: usize,
    /// Caret x coordinate, snapped to the nearest character edge.
    pub x: i32,
    /// Direction of the character the caret was resolved against.
    pub is_rtl: bool,
    /// Whether the caret attaches before the logical character at
    /// `logical` (true) or after the one preceding it (false).
    pub attach_before: bool,
}

/// Resolve a pixel coordinate to a caret position.
///
/// `char_widths` is indexed in logical order; the visual line starts at
/// `x_offset`. A point in the left half of a character box attaches to that
/// box's left edge, a point in the right half to its right edge; which
/// logical position that edge means depends on the character's direction.
/// Points left of all text resolve to logical position 0 attaching after,
/// points right of all text to the logical end attaching before.
pub fn resolve_caret(
    x_pos: i32,
    x_offset: i32,
    levels: &[u8],
    base: Direction,
    vis_to_log: &[u32],
    char_widths: &[i32],
) -> CaretPosition {
    debug_assert_eq!(levels.len(), vis_to_log.len());
    debug_assert_eq!(levels.len(), char_widths.len());
    let len = vis_to_log.len();

    if len == 0 {
        return CaretPosition {
            logical: 0,
            visual: 0,
            x: x_offset,
            is_rtl: base.is_rtl(),
            attach_before: false,
        };
    }

    if x_pos < x_offset {
        return CaretPosition {
            logical: 0,
            visual: 0,
            x: x_offset,
            is_rtl: levels[vis_to_log[0] as usize] % 2 == 1,
            attach_before: false,
        };
    }

    let mut left = x_offset;
    for visual in 0..len {
        let logical = vis_to_log[visual] as usize;
        let width = char_widths[logical];
        if x_pos < left + width {
            let is_rtl = levels[logical] % 2 == 1;
            let in_left_half = x_pos < left + width / 2;
            // The left edge of an RTL box is logically after the character,
            // the right edge before it; LTR is the opposite.
            return if in_left_half {
                CaretPosition {
                    logical: if is_rtl { logical + 1 } else { logical },
                    visual,
                    x: left,
                    is_rtl,
                    attach_before: !is_rtl,
                }
            } else {
                CaretPosition {
                    logical: if is_rtl { logical } else { logical + 1 },
                    visual: visual + 1,
                    x: left + width,
                    is_rtl,
                    attach_before: is_rtl,
                }
            };
        }
        left += width;
    }

    CaretPosition {
        logical: len,
        visual: len,
        x: left,
        is_rtl: levels[vis_to_log[len - 1] as usize] % 2 == 1,
        attach_before: true,
    }
}

// ---------------------------------------------------------------------------
// Change bounds
// ---------------------------------------------------------------------------

/// Locate the changed region between two versions of a string.
///
/// Returns `(start, len)` over `new`: the offset of the first differing
/// character and the length of the changed region after trimming the common
/// prefix and suffix. Identical strings yield `(common_len, 0)`.
pub fn change_bounds(old: &[char], new: &[char]) -> (usize, usize) {
    let prefix = old
        .iter()
        .zip(new.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let max_suffix = old.len().min(new.len()) - prefix;
    let suffix = old
        .iter()
        .rev()
        .zip(new.iter().rev())
        .take(max_suffix)
        .take_while(|(a, b)| a == b)
        .count();

    (prefix, new.len() - suffix - prefix)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans(pairs: &[(usize, usize)]) -> Vec<Span> {
        pairs.iter().map(|&(start, end)| Span { start, end }).collect()
    }

    // Maps for "abc XYZ def" resolved with an LTR base, where XYZ is a
    // strong-RTL block: visual order is "abc ZYX def".
    const V2L: [u32; 11] = [0, 1, 2, 3, 6, 5, 4, 7, 8, 9, 10];

    #[test]
    fn map_range_full_span_is_identity() {
        let got = map_range(Span { start: 0, end: 11 }, &V2L);
        assert_eq!(got.as_slice(), spans(&[(0, 11)]).as_slice());
    }

    #[test]
    fn map_range_within_one_direction() {
        // Logical [0, 3) is visually contiguous.
        let got = map_range(Span { start: 0, end: 3 }, &V2L);
        assert_eq!(got.as_slice(), spans(&[(0, 3)]).as_slice());
        // Logical [4, 7) (the reversed block) is also one visual span.
        let got = map_range(Span { start: 4, end: 7 }, &V2L);
        assert_eq!(got.as_slice(), spans(&[(4, 7)]).as_slice());
    }

    #[test]
    fn map_range_straddling_a_reversal_splits() {
        // Logical [2, 6) covers "c X" plus the first two RTL letters; the
        // RTL part lands right-to-left so the visual picture is split.
        let got = map_range(Span { start: 2, end: 6 }, &V2L);
        assert_eq!(got.as_slice(), spans(&[(2, 4), (5, 7)]).as_slice());
    }

    #[test]
    fn map_range_three_way_split() {
        // Visual→logical identity except a reversed middle: translating a
        // logical span through l2v can cut it into prefix, middle, suffix.
        let l2v: [u32; 7] = [0, 5, 4, 3, 2, 1, 6];
        let got = map_range(Span { start: 1, end: 6 }, &l2v);
        // Walked (logical) indices whose visual position is in [1, 6).
        assert_eq!(got.as_slice(), spans(&[(1, 6)]).as_slice());
        let got = map_range(Span { start: 0, end: 2 }, &l2v);
        assert_eq!(got.as_slice(), spans(&[(0, 1), (5, 6)]).as_slice());
    }

    #[test]
    fn map_range_empty_span() {
        let got = map_range(Span { start: 3, end: 3 }, &V2L);
        assert!(got.is_empty());
        let got = map_range(Span { start: 0, end: 0 }, &[]);
        assert!(got.is_empty());
    }

    // Caret fixtures: 4 chars, 10px each, line starts at x = 100.
    // "ab" + two RTL letters, LTR base: levels [0,0,1,1], visual a b R1 R0.
    const LEVELS: [u8; 4] = [0, 0, 1, 1];
    const CARET_V2L: [u32; 4] = [0, 1, 3, 2];
    const WIDTHS: [i32; 4] = [10, 10, 10, 10];

    fn caret(x: i32) -> CaretPosition {
        resolve_caret(x, 100, &LEVELS, Direction::Ltr, &CARET_V2L, &WIDTHS)
    }

    #[test]
    fn caret_in_ltr_box() {
        // Left half of visual box 1 (logical char 1).
        let got = caret(112);
        assert_eq!(
            got,
            CaretPosition {
                logical: 1,
                visual: 1,
                x: 110,
                is_rtl: false,
                attach_before: true,
            }
        );
        // Right half snaps to the box's right edge, after the character.
        let got = caret(118);
        assert_eq!(
            got,
            CaretPosition {
                logical: 2,
                visual: 2,
                x: 120,
                is_rtl: false,
                attach_before: false,
            }
        );
    }

    #[test]
    fn caret_in_rtl_box() {
        // Visual box 2 holds logical char 3. Its left edge is logically
        // after that character.
        let got = caret(122);
        assert_eq!(
            got,
            CaretPosition {
                logical: 4,
                visual: 2,
                x: 120,
                is_rtl: true,
                attach_before: false,
            }
        );
        let got = caret(128);
        assert_eq!(
            got,
            CaretPosition {
                logical: 3,
                visual: 3,
                x: 130,
                is_rtl: true,
                attach_before: true,
            }
        );
    }

    #[test]
    fn caret_outside_text() {
        let got = caret(50);
        assert_eq!(got.logical, 0);
        assert_eq!(got.visual, 0);
        assert_eq!(got.x, 100);
        assert!(!got.attach_before);

        let got = caret(500);
        assert_eq!(got.logical, 4);
        assert_eq!(got.visual, 4);
        assert_eq!(got.x, 140);
        assert!(got.attach_before);
        assert!(got.is_rtl);
    }

    #[test]
    fn caret_empty_line() {
        let got = resolve_caret(123, 100, &[], Direction::Rtl, &[], &[]);
        assert_eq!(got.logical, 0);
        assert_eq!(got.x, 100);
        assert!(got.is_rtl);
    }

    #[test]
    fn change_bounds_basic() {
        let old: Vec<char> = "hello world".chars().collect();
        let new: Vec<char> = "hello brave world".chars().collect();
        assert_eq!(change_bounds(&old, &new), (6, 6));
    }

    #[test]
    fn change_bounds_identical_and_empty() {
        let s: Vec<char> = "same".chars().collect();
        assert_eq!(change_bounds(&s, &s), (4, 0));
        assert_eq!(change_bounds(&[], &[]), (0, 0));
        assert_eq!(change_bounds(&[], &s), (0, 4));
        assert_eq!(change_bounds(&s, &[]), (0, 0));
    }

    #[test]
    fn change_bounds_repeated_characters() {
        // "aaa" -> "aaaa": the overlap guard keeps prefix and suffix from
        // double-counting the shared region.
        let old: Vec<char> = "aaa".chars().collect();
        let new: Vec<char> = "aaaa".chars().collect();
        assert_eq!(change_bounds(&old, &new), (3, 1));
    }

    #[test]
    fn change_bounds_replacement() {
        let old: Vec<char> = "abcdef".chars().collect();
        let new: Vec<char> = "abXYef".chars().collect();
        assert_eq!(change_bounds(&old, &new), (2, 2));
    }
}
