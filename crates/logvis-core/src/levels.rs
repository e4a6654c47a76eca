#![forbid(unsafe_code)]

//! Implicit embedding-level resolution (UAX #9 rules I1–I2, two-level form).
//!
//! A strictly online pass: each run's level is computed from the base level
//! parity and its own resolved class, never revisiting earlier runs.

use crate::runs::RunList;
use crate::types::BidiClass;

/// Assign an embedding level to every run. Returns the maximum level seen.
pub(crate) fn resolve_implicit_levels(runs: &mut RunList, base_level: u8) -> u8 {
    let mut max_level = base_level;

    for i in runs.interior() {
        let this = runs.class(i);
        let prev = runs.class(i - 1);

        let level = if base_level % 2 == 0 {
            match this {
                BidiClass::R => base_level + 1,
                BidiClass::AN => base_level + 2,
                BidiClass::EN if prev != BidiClass::L => base_level + 2,
                _ => base_level,
            }
        } else {
            match this {
                BidiClass::L | BidiClass::AN | BidiClass::EN => base_level + 1,
                _ => base_level,
            }
        };

        runs.get_mut(i).level = level;
        if level > max_level {
            max_level = level;
        }
    }

    runs.compact();
    max_level
}

#[cfg(test)]
mod tests {
    use super::*;
    use BidiClass::*;

    fn levels(input: &[BidiClass], base_level: u8) -> (Vec<u8>, u8) {
        let mut runs = RunList::encode(input);
        let max = resolve_implicit_levels(&mut runs, base_level);
        let mut out = Vec::new();
        for run in runs.iter_interior() {
            out.extend(std::iter::repeat_n(run.level, run.len));
        }
        (out, max)
    }

    #[test]
    fn even_base() {
        let (lv, max) = levels(&[L, R, AN, L], 0);
        assert_eq!(lv, vec![0, 1, 2, 0]);
        assert_eq!(max, 2);
    }

    #[test]
    fn even_base_en_after_l_stays() {
        // An EN run directly after a strong L run keeps the base level;
        // after anything else it nests two levels deep.
        let (lv, _) = levels(&[L, EN], 0);
        assert_eq!(lv, vec![0, 0]);
        let (lv, _) = levels(&[R, EN], 0);
        assert_eq!(lv, vec![1, 2]);
    }

    #[test]
    fn odd_base() {
        let (lv, max) = levels(&[R, L, EN, AN, R], 1);
        assert_eq!(lv, vec![1, 2, 2, 2, 1]);
        assert_eq!(max, 2);
    }

    #[test]
    fn all_base_direction() {
        let (lv, max) = levels(&[L, L, L], 0);
        assert_eq!(lv, vec![0, 0, 0]);
        assert_eq!(max, 0);

        let (lv, max) = levels(&[R, R], 1);
        assert_eq!(lv, vec![1, 1]);
        assert_eq!(max, 1);
    }

    #[test]
    fn embedding_direction_class_keeps_base_level() {
        let (lv, _) = levels(&[R, E, R], 1);
        assert_eq!(lv, vec![1, 1, 1]);
        let (lv, _) = levels(&[L, E, L], 0);
        assert_eq!(lv, vec![0, 0, 0]);
    }
}
