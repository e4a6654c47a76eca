//! Property-based invariant tests for the resolution pipeline.
//!
//! These must hold for arbitrary valid inputs:
//!
//! 1. Logical→visual and visual→logical maps are mutual inverse
//!    permutations.
//! 2. Resolution is deterministic: the same input yields identical output.
//! 3. Every embedding level is bounded by `base_level + 2` and respects the
//!    base-level floor.
//! 4. The visual buffer is a permutation of the input (up to mirroring).
//! 5. Mapping the full logical span yields exactly one full visual span.
//! 6. Levels from `resolve` and `resolve_levels` agree.

use logvis_core::{
    BaseDirection, Direction, ResolveRequest, Span, map_range, mirror_of, resolve, resolve_levels,
};

use proptest::prelude::*;

// ── Strategies ──────────────────────────────────────────────────────────

/// Characters drawn from scripts and symbol sets that exercise every
/// resolver path: Latin, Hebrew, Arabic letters and digits, European
/// digits, separators, terminators, combining marks, whitespace, brackets.
fn arb_bidi_char() -> impl Strategy<Value = char> {
    prop_oneof![
        prop::char::range('a', 'z'),
        prop::char::range('\u{05D0}', '\u{05EA}'),
        prop::char::range('\u{0627}', '\u{063A}'),
        prop::char::range('\u{0660}', '\u{0669}'),
        prop::char::range('0', '9'),
        prop::char::range('\u{0300}', '\u{0310}'),
        Just(' '),
        Just('\t'),
        Just('+'),
        Just('-'),
        Just(','),
        Just('.'),
        Just('$'),
        Just('%'),
        Just('('),
        Just(')'),
        Just('['),
        Just(']'),
        Just('!'),
    ]
}

fn arb_text() -> impl Strategy<Value = Vec<char>> {
    prop::collection::vec(arb_bidi_char(), 0..120)
}

fn arb_base() -> impl Strategy<Value = BaseDirection> {
    prop_oneof![
        Just(BaseDirection::Ltr),
        Just(BaseDirection::Rtl),
        Just(BaseDirection::Auto),
        Just(BaseDirection::AutoLtr),
        Just(BaseDirection::AutoRtl),
    ]
}

// ── Properties ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn maps_are_mutual_inverses(text in arb_text(), base in arb_base()) {
        let out = resolve(&text, base, ResolveRequest::ALL).unwrap();
        let l2v = out.log_to_vis.unwrap();
        let v2l = out.vis_to_log.unwrap();
        prop_assert_eq!(l2v.len(), text.len());
        prop_assert_eq!(v2l.len(), text.len());
        for i in 0..text.len() {
            prop_assert_eq!(v2l[l2v[i] as usize] as usize, i);
            prop_assert_eq!(l2v[v2l[i] as usize] as usize, i);
        }
    }

    #[test]
    fn resolution_is_deterministic(text in arb_text(), base in arb_base()) {
        let a = resolve(&text, base, ResolveRequest::ALL).unwrap();
        let b = resolve(&text, base, ResolveRequest::ALL).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn levels_are_bounded(text in arb_text(), base in arb_base()) {
        let out = resolve_levels(&text, base).unwrap();
        let floor = out.direction.base_level();
        prop_assert!(out.max_level <= floor + 2);
        for &level in &out.levels {
            prop_assert!(level >= floor);
            prop_assert!(level <= out.max_level);
        }
        if let Some(max) = out.levels.iter().max() {
            prop_assert_eq!(*max, out.max_level);
        }
    }

    #[test]
    fn visual_is_permutation_of_input(text in arb_text(), base in arb_base()) {
        let out = resolve(&text, base, ResolveRequest::ALL).unwrap();
        let visual = out.visual.unwrap();
        let v2l = out.vis_to_log.unwrap();
        prop_assert_eq!(visual.len(), text.len());
        for (v, &ch) in visual.iter().enumerate() {
            let logical = v2l[v] as usize;
            let original = text[logical];
            // Mirroring substitutes the paired character on odd levels.
            prop_assert!(ch == original || mirror_of(original) == Some(ch));
        }
    }

    #[test]
    fn full_span_maps_to_full_span(text in arb_text(), base in arb_base()) {
        let out = resolve(&text, base, ResolveRequest::ALL).unwrap();
        let v2l = out.vis_to_log.unwrap();
        let full = Span { start: 0, end: text.len() };
        let mapped = map_range(full, &v2l);
        if text.is_empty() {
            prop_assert!(mapped.is_empty());
        } else {
            prop_assert_eq!(mapped.as_slice(), &[full]);
        }
    }

    #[test]
    fn level_entry_points_agree(text in arb_text(), base in arb_base()) {
        let full = resolve(&text, base, ResolveRequest::ALL).unwrap();
        let only = resolve_levels(&text, base).unwrap();
        prop_assert_eq!(full.levels.unwrap(), only.levels);
        prop_assert_eq!(full.direction, only.direction);
        prop_assert_eq!(full.max_level, only.max_level);
    }

    #[test]
    fn forced_base_is_respected(text in arb_text()) {
        let ltr = resolve_levels(&text, BaseDirection::Ltr).unwrap();
        prop_assert_eq!(ltr.direction, Direction::Ltr);
        let rtl = resolve_levels(&text, BaseDirection::Rtl).unwrap();
        prop_assert_eq!(rtl.direction, Direction::Rtl);
    }
}
