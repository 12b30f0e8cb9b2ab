// Tue Jan 13 2026 - Alex

use crate::layout::{ByteRange, LayoutError, Member, UnionBuilder};
use itertools::Itertools;
use std::collections::BTreeSet;

/// Rewrites a member list until no two members overlap, folding every
/// connected overlap region into a single union-typed member.
pub struct OverlapResolver {
    merges: usize,
}

impl OverlapResolver {
    pub fn new() -> Self {
        Self { merges: 0 }
    }

    pub fn merges(&self) -> usize {
        self.merges
    }

    /// Returns the members sorted by offset, pairwise disjoint.
    pub fn resolve(&mut self, mut members: Vec<Member>) -> Result<Vec<Member>, LayoutError> {
        if let Some(empty) = members.iter().find(|m| m.size == 0) {
            return Err(LayoutError::EmptyMember { offset: empty.offset });
        }

        // Each merge replaces at least two members with one, so this runs
        // at most members.len() times.
        while let Some(region) = find_overlap_region(&members) {
            let (overlapping, mut rest): (Vec<Member>, Vec<Member>) =
                members.into_iter().partition(|m| m.range().overlaps(&region));
            log::trace!("merging {} members over {}", overlapping.len(), region);

            let rebased = overlapping.into_iter().map(|m| m.rebased(region.start())).collect();
            let ty = UnionBuilder::build(rebased)?;
            rest.push(Member::new(region.start(), region.len(), ty));

            members = rest;
            self.merges += 1;
        }

        members.sort_by_key(|m| m.offset);
        Ok(members)
    }
}

impl Default for OverlapResolver {
    fn default() -> Self {
        Self::new()
    }
}

pub fn resolve_overlaps(members: Vec<Member>) -> Result<Vec<Member>, LayoutError> {
    OverlapResolver::new().resolve(members)
}

/// First elementary interval (between consecutive endpoints) touched by more
/// than one member, grown to the maximal region transitively connected to it.
fn find_overlap_region(members: &[Member]) -> Option<ByteRange> {
    let endpoints: BTreeSet<u64> = members.iter().flat_map(|m| [m.offset, m.end()]).collect();

    let seed = endpoints
        .iter()
        .tuple_windows()
        .map(|(&start, &end)| ByteRange::new(start, end))
        .find(|interval| overlapping(members, interval).count() > 1)?;

    let mut region = seed;
    loop {
        let grown = overlapping(members, &region).fold(region, |acc, m| acc.union(&m.range()));
        if grown == region {
            return Some(region);
        }
        region = grown;
    }
}

fn overlapping<'a>(members: &'a [Member], region: &'a ByteRange) -> impl Iterator<Item = &'a Member> + 'a {
    members.iter().filter(move |m| m.range().overlaps(region))
}
