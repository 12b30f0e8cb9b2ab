// Tue Jan 13 2026 - Alex

use crate::layout::{AccessPattern, ByteRange, LayoutError, Member, RecoveredType};
use std::collections::BTreeSet;

/// One hypothesised array element: `[start, start + stride)` together with
/// the patterns that fall inside it, already rebased to the window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrideWindow {
    pub start: u64,
    pub stride: u64,
    pub patterns: Vec<AccessPattern>,
}

impl StrideWindow {
    pub fn range(&self) -> ByteRange {
        ByteRange::with_size(self.start, self.stride)
    }
}

/// Every distinct stride mentioned by `patterns`, largest first.
pub fn strides_descending(patterns: &[AccessPattern]) -> Vec<u64> {
    let all: BTreeSet<u64> = patterns.iter().flat_map(|p| p.strides.iter().copied()).collect();
    all.into_iter().rev().collect()
}

/// Cuts the patterns that repeat with `stride` into consecutive windows.
/// Each window opens at the lowest remaining base.
pub fn split_windows(mut candidates: Vec<AccessPattern>, stride: u64) -> Vec<StrideWindow> {
    candidates.sort_by_key(|p| p.base);
    let mut windows = Vec::new();

    while let Some(base) = candidates.first().map(|p| p.base) {
        let range = ByteRange::with_size(base, stride);
        let (inside, outside): (Vec<_>, Vec<_>) =
            candidates.into_iter().partition(|p| range.contains(p.base));
        candidates = outside;

        log::trace!("stride {} window {} holds {} pattern(s)", stride, range, inside.len());
        windows.push(StrideWindow {
            start: range.start(),
            stride,
            patterns: inside.into_iter().map(|p| p.rebase(range.start(), stride)).collect(),
        });
    }

    windows
}

/// Peels strides from the coarsest down. Each window becomes an array member
/// whose element type comes from `element_of`; patterns with no stride at all
/// become scalar members. Members are returned unresolved, arrays first.
pub fn decompose<F>(patterns: Vec<AccessPattern>, mut element_of: F) -> Result<Vec<Member>, LayoutError>
where
    F: FnMut(Vec<AccessPattern>) -> Result<RecoveredType, LayoutError>,
{
    let strides = strides_descending(&patterns);
    let mut pool = patterns;
    let mut members = Vec::new();

    for stride in strides {
        let (candidates, rest): (Vec<_>, Vec<_>) = pool.into_iter().partition(|p| p.has_stride(stride));
        pool = rest;
        if candidates.is_empty() {
            continue;
        }

        for window in split_windows(candidates, stride) {
            let element = element_of(window.patterns)?;
            members.push(Member::new(window.start, stride, RecoveredType::array(element, stride)));
        }
    }

    for pattern in pool {
        // Unreachable: every stride in the pool was peeled above.
        if pattern.is_repeated() {
            return Err(LayoutError::ResidualStride {
                base: pattern.base,
                strides: pattern.strides.into_iter().collect(),
            });
        }
        members.push(Member::scalar(pattern.base, pattern.access_size));
    }

    Ok(members)
}
