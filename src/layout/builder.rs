// Tue Jan 13 2026 - Alex

use crate::layout::{Member, RecoveredType};

/// Collects non-overlapping members (ascending offsets) into a type.
pub struct StructureBuilder {
    members: Vec<Member>,
}

impl StructureBuilder {
    pub fn new() -> Self {
        Self { members: Vec::new() }
    }

    pub fn from_members(members: Vec<Member>) -> Self {
        Self { members }
    }

    pub fn add_member(mut self, offset: u64, size: u64, ty: RecoveredType) -> Self {
        self.members.push(Member::new(offset, size, ty));
        self
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// A lone member at offset zero is the whole object, so its type is
    /// returned unwrapped.
    pub fn build(mut self) -> RecoveredType {
        if self.members.len() == 1 && self.members[0].offset == 0 {
            if let Some(member) = self.members.pop() {
                return member.ty;
            }
        }
        RecoveredType::Struct(self.members)
    }
}

impl Default for StructureBuilder {
    fn default() -> Self {
        Self::new()
    }
}
