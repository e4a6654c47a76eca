#![forbid(unsafe_code)]

//! Run-length encoding of per-character bidi classes.
//!
//! A [`RunList`] is an index-addressed vector of maximal runs bracketed by a
//! zero-length start sentinel ([`BidiClass::Sot`]) and end sentinel
//! ([`BidiClass::Eot`]), so every resolver rule can read `i - 1` / `i + 1`
//! without bounds checks.
//!
//! # Invariants
//!
//! 1. No two adjacent interior runs share the same (class, level) pair;
//!    [`RunList::compact`] restores this after every class-rewriting pass.
//! 2. Interior runs partition `[0, len)` contiguously and in order; the sum
//!    of interior run lengths equals the input length.

use crate::types::BidiClass;

/// One maximal span of input sharing a bidi class, plus its resolved level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Run {
    pub class: BidiClass,
    /// Start offset in the input, in code points.
    pub pos: usize,
    /// Span length in code points; zero only for the sentinels.
    pub len: usize,
    /// Resolved embedding level; meaningful after the implicit-level pass.
    pub level: u8,
}

/// Ordered run sequence with sentinel runs at both ends.
#[derive(Debug, Clone)]
pub(crate) struct RunList {
    runs: Vec<Run>,
}

impl RunList {
    /// Run-length encode a class array into maximal runs.
    pub fn encode(classes: &[BidiClass]) -> Self {
        let mut runs = Vec::with_capacity(classes.len() / 2 + 3);
        runs.push(Run {
            class: BidiClass::Sot,
            pos: 0,
            len: 0,
            level: 0,
        });

        let mut iter = classes.iter().copied().enumerate();
        if let Some((_, first)) = iter.next() {
            let mut class = first;
            let mut pos = 0usize;
            let mut len = 1usize;
            for (i, c) in iter {
                if c == class {
                    len += 1;
                } else {
                    runs.push(Run {
                        class,
                        pos,
                        len,
                        level: 0,
                    });
                    class = c;
                    pos = i;
                    len = 1;
                }
            }
            runs.push(Run {
                class,
                pos,
                len,
                level: 0,
            });
        }

        runs.push(Run {
            class: BidiClass::Eot,
            pos: classes.len(),
            len: 0,
            level: 0,
        });
        Self { runs }
    }

    /// Merge adjacent runs left with equal class and level, summing lengths.
    ///
    /// Cost is bounded by the run count, not the character count. The
    /// sentinels never merge because their classes are unique to them.
    pub fn compact(&mut self) {
        let mut write = 0usize;
        for read in 1..self.runs.len() {
            let run = self.runs[read];
            let prev = &mut self.runs[write];
            if run.class == prev.class && run.level == prev.level {
                prev.len += run.len;
            } else {
                write += 1;
                self.runs[write] = run;
            }
        }
        self.runs.truncate(write + 1);
    }

    /// Indices of the interior (non-sentinel) runs.
    #[inline]
    pub fn interior(&self) -> std::ops::Range<usize> {
        1..self.runs.len() - 1
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.runs.len()
    }

    #[inline]
    pub fn get(&self, idx: usize) -> &Run {
        &self.runs[idx]
    }

    #[inline]
    pub fn get_mut(&mut self, idx: usize) -> &mut Run {
        &mut self.runs[idx]
    }

    #[inline]
    pub fn class(&self, idx: usize) -> BidiClass {
        self.runs[idx].class
    }

    #[inline]
    pub fn set_class(&mut self, idx: usize, class: BidiClass) {
        self.runs[idx].class = class;
    }

    /// Iterate over interior runs.
    pub fn iter_interior(&self) -> impl Iterator<Item = &Run> {
        self.runs[self.interior()].iter()
    }

    /// Checks invariant 2 above. Callers on hot paths gate this behind
    /// `cfg(debug_assertions)`.
    pub fn assert_partition(&self, input_len: usize) {
        let mut expected = 0usize;
        for run in self.iter_interior() {
            assert_eq!(run.pos, expected, "runs must be contiguous");
            assert!(run.len > 0, "interior runs must be non-empty");
            expected += run.len;
        }
        assert_eq!(expected, input_len, "runs must cover the input");
    }
}
