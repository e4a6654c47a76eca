#![forbid(unsafe_code)]

//! Top-level resolution entry points: analysis, mirroring, recursive
//! reversal, and position-map construction.
//!
//! [`resolve`] runs the full pipeline (classify → run-encode → weak →
//! neutral → implicit levels → reorder); [`resolve_levels`] stops after the
//! level pass. Both are pure functions over the input slice; outputs are
//! returned as owned buffers, so a rejected input never leaves partial
//! state behind.

use tracing::debug;

use crate::class::{bidi_class, mirror_of};
use crate::levels::resolve_implicit_levels;
use crate::neutral::resolve_neutral_types;
use crate::runs::RunList;
use crate::types::{BaseDirection, BidiClass, BidiError, Direction, MAX_INPUT_LEN};
use crate::weak::resolve_weak_types;

// ---------------------------------------------------------------------------
// Requests and results
// ---------------------------------------------------------------------------

/// Selects which outputs [`resolve`] materializes.
///
/// Requesting either position map computes the shared scratch permutation;
/// the other direction is then derived by inversion at no extra cost.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResolveRequest {
    /// Reordered (and mirrored) character buffer in visual order.
    pub visual: bool,
    /// Logical-position → visual-position permutation.
    pub log_to_vis: bool,
    /// Visual-position → logical-position permutation.
    pub vis_to_log: bool,
    /// Per-character embedding levels.
    pub levels: bool,
}

impl ResolveRequest {
    /// Everything: visual buffer, both maps, and levels.
    pub const ALL: Self = Self {
        visual: true,
        log_to_vis: true,
        vis_to_log: true,
        levels: true,
    };

    /// Only the visual buffer.
    pub const VISUAL: Self = Self {
        visual: true,
        log_to_vis: false,
        vis_to_log: false,
        levels: false,
    };

    #[inline]
    fn wants_reorder(&self) -> bool {
        self.visual || self.log_to_vis || self.vis_to_log
    }
}

/// Result of a full [`resolve`] call. Fields are `Some` exactly for the
/// outputs the request selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    /// The resolved paragraph direction.
    pub direction: Direction,
    /// Highest embedding level reached.
    pub max_level: u8,
    pub visual: Option<Vec<char>>,
    pub log_to_vis: Option<Vec<u32>>,
    pub vis_to_log: Option<Vec<u32>>,
    pub levels: Option<Vec<u8>>,
}

/// Result of [`resolve_levels`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLevels {
    pub direction: Direction,
    pub max_level: u8,
    /// One embedding level per input character.
    pub levels: Vec<u8>,
}

// ---------------------------------------------------------------------------
// Analysis (stages 2–5)
// ---------------------------------------------------------------------------

struct Analysis {
    runs: RunList,
    direction: Direction,
    max_level: u8,
}

/// Detect the paragraph direction from the first strong run, falling back
/// to the weak hint and finally to left-to-right.
fn detect_direction(runs: &RunList, base: BaseDirection) -> Direction {
    match base {
        BaseDirection::Ltr => Direction::Ltr,
        BaseDirection::Rtl => Direction::Rtl,
        BaseDirection::Auto | BaseDirection::AutoLtr | BaseDirection::AutoRtl => {
            for run in runs.iter_interior() {
                match run.class {
                    BidiClass::L => return Direction::Ltr,
                    BidiClass::R | BidiClass::AL => return Direction::Rtl,
                    _ => {}
                }
            }
            if matches!(base, BaseDirection::AutoRtl) {
                Direction::Rtl
            } else {
                Direction::Ltr
            }
        }
    }
}

fn analyse(chars: &[char], base: BaseDirection) -> Analysis {
    let classes: Vec<BidiClass> = chars.iter().map(|&ch| bidi_class(ch)).collect();
    let mut runs = RunList::encode(&classes);

    let direction = detect_direction(&runs, base);
    let base_level = direction.base_level();
    debug!(?direction, runs = runs.len() - 2, "encoded runs");

    resolve_weak_types(&mut runs, direction.strong_class());
    debug!(runs = runs.len() - 2, "resolved weak types");

    resolve_neutral_types(&mut runs);
    debug!(runs = runs.len() - 2, "resolved neutral types");

    let max_level = resolve_implicit_levels(&mut runs, base_level);
    debug!(max_level, "resolved implicit levels");

    #[cfg(debug_assertions)]
    runs.assert_partition(chars.len());

    Analysis {
        runs,
        direction,
        max_level,
    }
}

fn check_len(len: usize) -> Result<(), BidiError> {
    if len > MAX_INPUT_LEN {
        Err(BidiError::LengthExceeded {
            len,
            max: MAX_INPUT_LEN,
        })
    } else {
        Ok(())
    }
}

fn expand_levels(runs: &RunList, len: usize) -> Vec<u8> {
    let mut levels = vec![0u8; len];
    for run in runs.iter_interior() {
        levels[run.pos..run.pos + run.len].fill(run.level);
    }
    levels
}

// ---------------------------------------------------------------------------
// Entry points
// ---------------------------------------------------------------------------

/// Run the full bidirectional pipeline over `chars`.
///
/// Fails with [`BidiError::LengthExceeded`] if the input is longer than
/// [`MAX_INPUT_LEN`]; no output is produced in that case.
pub fn resolve(
    chars: &[char],
    base: BaseDirection,
    request: ResolveRequest,
) -> Result<Resolved, BidiError> {
    check_len(chars.len())?;
    let len = chars.len();

    let Analysis {
        runs,
        direction,
        max_level,
    } = analyse(chars, base);

    let levels = request.levels.then(|| expand_levels(&runs, len));

    let mut visual = request.visual.then(|| chars.to_vec());
    // Reversing an identity permutation alongside the text yields the
    // visual→logical map; the other direction is its inverse.
    let mut scratch_map = (request.log_to_vis || request.vis_to_log)
        .then(|| (0..len as u32).collect::<Vec<u32>>());

    if request.wants_reorder() {
        if let Some(buf) = visual.as_deref_mut() {
            mirror_odd_levels(&runs, buf);
        }
        reverse_runs(&runs, max_level, visual.as_deref_mut(), scratch_map.as_deref_mut());
    }

    let vis_to_log = scratch_map;
    let log_to_vis = match (&vis_to_log, request.log_to_vis) {
        (Some(v2l), true) => Some(invert_map(v2l)),
        _ => None,
    };
    let vis_to_log = request.vis_to_log.then_some(vis_to_log).flatten();

    Ok(Resolved {
        direction,
        max_level,
        visual,
        log_to_vis,
        vis_to_log,
        levels,
    })
}

/// Run stages 2–5 only, producing per-character embedding levels.
pub fn resolve_levels(chars: &[char], base: BaseDirection) -> Result<ResolvedLevels, BidiError> {
    check_len(chars.len())?;

    let Analysis {
        runs,
        direction,
        max_level,
    } = analyse(chars, base);

    Ok(ResolvedLevels {
        direction,
        max_level,
        levels: expand_levels(&runs, chars.len()),
    })
}

// ---------------------------------------------------------------------------
// Reordering helpers
// ---------------------------------------------------------------------------

/// Substitute mirrored counterparts for characters on odd levels.
fn mirror_odd_levels(runs: &RunList, visual: &mut [char]) {
    for run in runs.iter_interior() {
        if run.level % 2 == 1 {
            for ch in &mut visual[run.pos..run.pos + run.len] {
                if let Some(mirrored) = mirror_of(*ch) {
                    *ch = mirrored;
                }
            }
        }
    }
}

/// The recursive-reversal pass: for each level from the deepest down to 1,
/// reverse every maximal stretch of runs at or above that level. Higher
/// levels are reversed first and so end up nested inside lower reversals.
fn reverse_runs(
    runs: &RunList,
    max_level: u8,
    mut visual: Option<&mut [char]>,
    mut map: Option<&mut [u32]>,
) {
    for level_idx in (1..=max_level).rev() {
        let mut i = runs.interior().start;
        let end = runs.interior().end;
        while i < end {
            if runs.get(i).level >= level_idx {
                let pos = runs.get(i).pos;
                let mut len = runs.get(i).len;
                let mut j = i + 1;
                while j < end && runs.get(j).level >= level_idx {
                    len += runs.get(j).len;
                    j += 1;
                }
                if let Some(buf) = visual.as_deref_mut() {
                    buf[pos..pos + len].reverse();
                }
                if let Some(m) = map.as_deref_mut() {
                    m[pos..pos + len].reverse();
                }
                i = j;
            } else {
                i += 1;
            }
        }
    }
}

/// Invert a permutation: `out[map[i]] = i`.
fn invert_map(map: &[u32]) -> Vec<u32> {
    let mut out = vec![0u32; map.len()];
    for (i, &m) in map.iter().enumerate() {
        out[m as usize] = i as u32;
    }
    out
}
