#![forbid(unsafe_code)]

//! Core types for the bidirectional algorithm: character categories,
//! paragraph directions, embedding levels, and the error taxonomy.

use thiserror::Error;

/// Maximum supported input length in code points.
///
/// Inputs longer than this are rejected by every entry point before any
/// output is produced. Position maps fit comfortably in `u32` at this size.
pub const MAX_INPUT_LEN: usize = 65535;

// ---------------------------------------------------------------------------
// BidiClass
// ---------------------------------------------------------------------------

/// Bidirectional category of a code point.
///
/// The first group are the categories the classifier assigns. The second
/// group exists only during resolution: `N` is the collapsed neutral target,
/// `E` the embedding-direction fallback, and `Sot`/`Eot` the zero-length
/// sentinels bracketing the run sequence.
///
/// Explicit embedding/override/isolate controls (U+202A–U+202E,
/// U+2066–U+2069) classify as [`BidiClass::BN`]: they are recognized but the
/// nested-level stack of UAX #9 rules X1–X8 is out of scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum BidiClass {
    /// Strong left-to-right letter.
    L,
    /// Strong right-to-left letter.
    R,
    /// Arabic letter (strong right-to-left, tracked separately for W2/W3).
    AL,
    /// European digit.
    EN,
    /// Arabic-Indic digit.
    AN,
    /// European number separator (`+`, `-`).
    ES,
    /// European number terminator (`#`, `$`, `%`, currency signs).
    ET,
    /// Common separator (`,`, `.`, `/`, `:`).
    CS,
    /// Non-spacing combining mark.
    NSM,
    /// Block separator (paragraph-ending controls).
    BS,
    /// Segment separator (tab).
    SS,
    /// Whitespace.
    WS,
    /// Boundary neutral (formatting and control codes removed from layout).
    BN,
    /// Other neutral (most punctuation and symbols).
    ON,

    /// Collapsed neutral; resolution-only.
    N,
    /// Neutral resolved to the embedding direction; resolution-only.
    E,
    /// Start-of-text sentinel; only ever held by the first run.
    Sot,
    /// End-of-text sentinel; only ever held by the last run.
    Eot,
}

impl BidiClass {
    /// Whether this category unconditionally establishes a direction.
    #[inline]
    pub const fn is_strong(self) -> bool {
        matches!(self, BidiClass::L | BidiClass::R | BidiClass::AL)
    }

    /// Categories collapsed into [`BidiClass::N`] by the neutral resolver.
    #[inline]
    pub(crate) const fn collapses_to_neutral(self) -> bool {
        matches!(
            self,
            BidiClass::WS
                | BidiClass::ON
                | BidiClass::ES
                | BidiClass::ET
                | BidiClass::CS
                | BidiClass::BS
                | BidiClass::SS
                | BidiClass::BN
        )
    }
}

// ---------------------------------------------------------------------------
// Direction
// ---------------------------------------------------------------------------

/// Requested paragraph direction.
///
/// The `Auto*` variants detect the direction from the first strong character
/// in the text; when none is found, `AutoLtr`/`AutoRtl` fall back to their
/// weak hint and `Auto` falls back to left-to-right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BaseDirection {
    /// Force left-to-right.
    Ltr,
    /// Force right-to-left.
    Rtl,
    /// Detect from content, defaulting to left-to-right.
    #[default]
    Auto,
    /// Detect from content, with a weak left-to-right fallback.
    AutoLtr,
    /// Detect from content, with a weak right-to-left fallback.
    AutoRtl,
}

/// Resolved paragraph direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ltr,
    Rtl,
}

impl Direction {
    /// Base embedding level: 0 for LTR, 1 for RTL.
    #[inline]
    pub const fn base_level(self) -> u8 {
        match self {
            Direction::Ltr => 0,
            Direction::Rtl => 1,
        }
    }

    #[inline]
    pub const fn is_rtl(self) -> bool {
        matches!(self, Direction::Rtl)
    }

    /// The strong category corresponding to this direction.
    #[inline]
    pub(crate) const fn strong_class(self) -> BidiClass {
        match self {
            Direction::Ltr => BidiClass::L,
            Direction::Rtl => BidiClass::R,
        }
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors reported by the resolution entry points.
///
/// The algorithm itself is total; the only failure mode is input that
/// exceeds the supported length, rejected before any work is done.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BidiError {
    #[error("input length {len} exceeds the supported maximum of {max} code points")]
    LengthExceeded { len: usize, max: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strong_classes() {
        assert!(BidiClass::L.is_strong());
        assert!(BidiClass::R.is_strong());
        assert!(BidiClass::AL.is_strong());
        assert!(!BidiClass::EN.is_strong());
        assert!(!BidiClass::N.is_strong());
    }

    #[test]
    fn base_levels() {
        assert_eq!(Direction::Ltr.base_level(), 0);
        assert_eq!(Direction::Rtl.base_level(), 1);
        assert!(Direction::Rtl.is_rtl());
    }

    #[test]
    fn neutral_collapse_set() {
        for class in [
            BidiClass::WS,
            BidiClass::ON,
            BidiClass::ES,
            BidiClass::ET,
            BidiClass::CS,
            BidiClass::BS,
            BidiClass::SS,
            BidiClass::BN,
        ] {
            assert!(class.collapses_to_neutral());
        }
        assert!(!BidiClass::EN.collapses_to_neutral());
        assert!(!BidiClass::NSM.collapses_to_neutral());
    }
}
