#![forbid(unsafe_code)]

//! Neutral-type resolution (UAX #9 rules N1–N2, two-level form).
//!
//! Phase 1 collapses every remaining separator, terminator, whitespace, and
//! boundary category into the single [`BidiClass::N`] category. Phase 2
//! resolves each neutral run from its direct neighbors: digits count as
//! strong R for context, matching strong context on both sides wins (N1),
//! anything else falls back to the embedding direction (N2). There is no
//! numeric precedence beyond the digit-as-R rule.

use crate::runs::RunList;
use crate::types::BidiClass;

pub(crate) fn resolve_neutral_types(runs: &mut RunList) {
    // Phase 1: collapse to plain neutrals.
    for i in runs.interior() {
        if runs.class(i).collapses_to_neutral() {
            runs.set_class(i, BidiClass::N);
        }
    }
    runs.compact();

    // Phase 2: resolve each neutral run from its neighbors.
    for i in runs.interior() {
        if runs.class(i) != BidiClass::N {
            continue;
        }

        // European and Arabic digits act as R for neutral context.
        let as_strong = |class: BidiClass| match class {
            BidiClass::EN | BidiClass::AN => BidiClass::R,
            other => other,
        };
        let prev = as_strong(runs.class(i - 1));
        let next = as_strong(runs.class(i + 1));

        let resolved = match (prev, next) {
            (BidiClass::R, BidiClass::R) => BidiClass::R,
            (BidiClass::L, BidiClass::L) => BidiClass::L,
            _ => BidiClass::E,
        };
        runs.set_class(i, resolved);
    }
    runs.compact();
}
