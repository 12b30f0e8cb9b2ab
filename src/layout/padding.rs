// Tue Jan 13 2026 - Alex

use crate::layout::{ByteRange, Member, RecoveredType};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutSlot<'a> {
    Field(&'a Member),
    Padding(ByteRange),
}

impl LayoutSlot<'_> {
    pub fn range(&self) -> ByteRange {
        match self {
            Self::Field(member) => member.range(),
            Self::Padding(range) => *range,
        }
    }

    pub fn is_padding(&self) -> bool {
        matches!(self, Self::Padding(_))
    }
}

/// Flat view of a struct's members with the gaps between them made explicit.
#[derive(Debug, Clone)]
pub struct StructureLayout<'a> {
    slots: Vec<LayoutSlot<'a>>,
}

impl<'a> StructureLayout<'a> {
    /// Returns `None` for anything that is not a struct.
    pub fn of(ty: &'a RecoveredType) -> Option<Self> {
        ty.members().map(Self::from_members)
    }

    /// Members must be disjoint and sorted by offset.
    pub fn from_members(members: &'a [Member]) -> Self {
        let mut slots = Vec::with_capacity(members.len() * 2);
        let mut cursor: Option<u64> = None;

        for member in members {
            if let Some(end) = cursor {
                if end < member.offset {
                    slots.push(LayoutSlot::Padding(ByteRange::new(end, member.offset)));
                }
            }
            slots.push(LayoutSlot::Field(member));
            cursor = Some(member.end());
        }

        Self { slots }
    }

    pub fn slots(&self) -> &[LayoutSlot<'a>] {
        &self.slots
    }

    pub fn fields(&self) -> impl Iterator<Item = &'a Member> + '_ {
        self.slots.iter().filter_map(|slot| match slot {
            LayoutSlot::Field(member) => Some(*member),
            LayoutSlot::Padding(_) => None,
        })
    }

    pub fn padding_bytes(&self) -> u64 {
        self.slots.iter().filter(|s| s.is_padding()).map(|s| s.range().len()).sum()
    }

    /// From the first member's offset to the furthest member end.
    pub fn size(&self) -> u64 {
        let start = self.slots.first().map(|s| s.range().start());
        let end = self.slots.iter().map(|s| s.range().end()).max();
        match (start, end) {
            (Some(start), Some(end)) => end - start,
            _ => 0,
        }
    }
}

impl fmt::Display for StructureLayout<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in &self.slots {
            match slot {
                LayoutSlot::Field(member) => writeln!(f, "{} {}", member.range(), member.ty)?,
                LayoutSlot::Padding(range) => writeln!(f, "{} padding", range)?,
            }
        }
        Ok(())
    }
}
