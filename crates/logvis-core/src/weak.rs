#![forbid(unsafe_code)]

//! Weak-type resolution (UAX #9 rules W1–W7).
//!
//! A single left-to-right sweep over the interior runs with a running
//! `last_strong` context. Two rules rewrite the *previous* run (W3's
//! Arabic-letter demotion and W7's European-digit promotion); applying them
//! retroactively keeps the `last_strong` bookkeeping for the current run
//! intact. The same two rules get a trailing fixup for the final interior
//! run, which the sweep body never rewrites in place.

use crate::runs::RunList;
use crate::types::BidiClass;

/// Resolve combining marks, digits, separators, and terminators into
/// numeric or strong categories. `base_class` is the strong category of the
/// resolved paragraph direction.
pub(crate) fn resolve_weak_types(runs: &mut RunList, base_class: BidiClass) {
    let mut last_strong = base_class;

    for i in runs.interior() {
        let prev = runs.class(i - 1);
        let this = runs.class(i);
        let next = runs.class(i + 1);

        if prev.is_strong() {
            last_strong = prev;
        }

        // W1: a non-spacing mark takes the class of the run before it; at
        // the start of text it becomes neutral and later resolves to the
        // embedding direction.
        if this == BidiClass::NSM {
            runs.set_class(
                i,
                if prev == BidiClass::Sot {
                    BidiClass::N
                } else {
                    prev
                },
            );
        }

        // W2: a European digit in an Arabic-letter context becomes an
        // Arabic digit.
        if runs.class(i) == BidiClass::EN && last_strong == BidiClass::AL {
            runs.set_class(i, BidiClass::AN);
        }

        // W3: Arabic letters become strong R. Applied to the previous run
        // so the `last_strong` read above still sees the AL.
        if prev == BidiClass::AL {
            runs.set_class(i - 1, BidiClass::R);
        }

        // W4: a single-character European separator between European digits
        // joins them; a single-character common separator between digits of
        // one kind joins that kind.
        if runs.get(i).len == 1 {
            match (prev, this, next) {
                (BidiClass::EN, BidiClass::ES, BidiClass::EN)
                | (BidiClass::EN, BidiClass::CS, BidiClass::EN) => {
                    runs.set_class(i, BidiClass::EN);
                }
                (BidiClass::AN, BidiClass::CS, BidiClass::AN) => {
                    runs.set_class(i, BidiClass::AN);
                }
                _ => {}
            }
        }

        // W5: European terminators adjacent to European digits become
        // European digits.
        if this == BidiClass::ET && (prev == BidiClass::EN || next == BidiClass::EN) {
            runs.set_class(i, BidiClass::EN);
        }

        // W6: whatever separators and terminators remain are other-neutral.
        let this = runs.class(i);
        if matches!(this, BidiClass::ES | BidiClass::ET | BidiClass::CS) {
            runs.set_class(i, BidiClass::ON);
        }

        // W7: European digits after a strong L context become L. Applied to
        // the previous run, like W3.
        if prev == BidiClass::EN && last_strong == BidiClass::L {
            runs.set_class(i - 1, BidiClass::L);
        }
    }

    // The sweep rewrites run i-1, never the last interior run itself; apply
    // W3 and W7 to it here.
    if runs.len() > 2 {
        let last = runs.len() - 2;
        if runs.class(last) == BidiClass::AL {
            runs.set_class(last, BidiClass::R);
        }
        if runs.class(last) == BidiClass::EN && last_strong == BidiClass::L {
            runs.set_class(last, BidiClass::L);
        }
    }

    runs.compact();
}

#[cfg(test)]
mod tests {
    use super::*;
    use BidiClass::*;

    fn resolved(input: &[BidiClass], base: BidiClass) -> Vec<BidiClass> {
        let mut runs = RunList::encode(input);
        resolve_weak_types(&mut runs, base);
        let mut out = Vec::new();
        for run in runs.iter_interior() {
            out.extend(std::iter::repeat_n(run.class, run.len));
        }
        out
    }

    #[test]
    fn w1_nsm_takes_previous_class() {
        assert_eq!(resolved(&[R, NSM], L), vec![R, R]);
        assert_eq!(resolved(&[L, NSM, NSM], L), vec![L, L, L]);
    }

    #[test]
    fn w1_nsm_at_start_of_text_is_neutral() {
        assert_eq!(resolved(&[NSM, L], L), vec![N, L]);
    }

    #[test]
    fn w2_en_after_arabic_becomes_an() {
        assert_eq!(resolved(&[AL, EN], L), vec![R, AN]);
        // Intervening neutral does not reset the strong context.
        assert_eq!(resolved(&[AL, WS, EN], L), vec![R, WS, AN]);
        // A strong L in between does.
        assert_eq!(resolved(&[AL, L, EN], L), vec![R, L, L]);
    }

    #[test]
    fn w3_al_becomes_r() {
        assert_eq!(resolved(&[AL, AL, WS, AL], L), vec![R, R, WS, R]);
    }

    #[test]
    fn w3_applies_to_final_run() {
        assert_eq!(resolved(&[L, AL], L), vec![L, R]);
    }

    #[test]
    fn w4_single_separator_between_digits() {
        assert_eq!(resolved(&[R, EN, ES, EN], R), vec![R, EN, EN, EN]);
        assert_eq!(resolved(&[R, EN, CS, EN], R), vec![R, EN, EN, EN]);
        assert_eq!(resolved(&[AL, AN, CS, AN], L), vec![R, AN, AN, AN]);
        // Two-character separator runs stay separators (then become ON).
        assert_eq!(resolved(&[R, EN, ES, ES, EN], R), vec![R, EN, ON, ON, EN]);
    }

    #[test]
    fn w5_terminators_join_digits() {
        assert_eq!(resolved(&[R, ET, EN], R), vec![R, EN, EN]);
        assert_eq!(resolved(&[R, EN, ET], R), vec![R, EN, EN]);
    }

    #[test]
    fn w6_leftover_separators_become_neutral() {
        assert_eq!(resolved(&[R, ES, R], R), vec![R, ON, R]);
        assert_eq!(resolved(&[R, ET, R], R), vec![R, ON, R]);
        assert_eq!(resolved(&[R, CS, R], R), vec![R, ON, R]);
    }

    #[test]
    fn w7_en_after_l_becomes_l() {
        assert_eq!(resolved(&[L, EN, WS], L), vec![L, L, WS]);
        // Applies through the trailing fixup as well.
        assert_eq!(resolved(&[L, EN], L), vec![L, L]);
        // Base direction alone supplies the context.
        assert_eq!(resolved(&[EN, WS], L), vec![L, WS]);
        // An R context blocks the promotion.
        assert_eq!(resolved(&[R, EN], L), vec![R, EN]);
    }
}
