// Tue Jan 13 2026 - Alex

use crate::layout::{LayoutError, Member, RecoveredType, StructureBuilder};

/// Splits mutually overlapping members into panels, each a chain of
/// non-overlapping members, and builds one alternative per panel.
pub struct UnionBuilder {
    panels: Vec<Vec<Member>>,
}

impl UnionBuilder {
    pub fn new() -> Self {
        Self { panels: Vec::new() }
    }

    /// Members must already be rebased to the union's origin.
    pub fn build(members: Vec<Member>) -> Result<RecoveredType, LayoutError> {
        let mut builder = Self::new();
        builder.place_all(members)?;
        Ok(builder.finish())
    }

    pub fn place_all(&mut self, mut members: Vec<Member>) -> Result<(), LayoutError> {
        if let Some(empty) = members.iter().find(|m| m.size == 0) {
            return Err(LayoutError::EmptyMember { offset: empty.offset });
        }
        // Earliest finishing first; stable so equal ends keep caller order.
        members.sort_by_key(Member::end);
        for member in members {
            self.place(member);
        }
        Ok(())
    }

    fn place(&mut self, member: Member) {
        let slot = self
            .panels
            .iter()
            .position(|panel| panel.last().map_or(true, |last| last.end() <= member.offset));
        match slot {
            Some(index) => self.panels[index].push(member),
            None => self.panels.push(vec![member]),
        }
    }

    pub fn panel_count(&self) -> usize {
        self.panels.len()
    }

    pub fn panels(&self) -> &[Vec<Member>] {
        &self.panels
    }

    /// No members means nothing to choose between: an empty struct.
    pub fn finish(self) -> RecoveredType {
        if self.panels.is_empty() {
            return RecoveredType::empty_struct();
        }
        let mut alternatives: Vec<RecoveredType> = self
            .panels
            .into_iter()
            .map(|panel| StructureBuilder::from_members(panel).build())
            .collect();
        if alternatives.len() == 1 {
            if let Some(only) = alternatives.pop() {
                log::trace!("union collapsed to a single panel");
                return only;
            }
        }
        RecoveredType::Union(alternatives)
    }
}

impl Default for UnionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_and_array_become_two_alternatives() {
        let array = RecoveredType::array(RecoveredType::Scalar(4), 4);
        let members = vec![Member::new(0, 4, array.clone()), Member::scalar(0, 4)];
        let ty = UnionBuilder::build(members).unwrap();
        assert_eq!(ty, RecoveredType::Union(vec![array, RecoveredType::Scalar(4)]));
    }

    #[test]
    fn test_greedy_panels() {
        // [0,8) overlaps both [0,4) and [4,8); the two halves chain.
        let members = vec![Member::scalar(0, 8), Member::scalar(0, 4), Member::scalar(4, 4)];
        let mut builder = UnionBuilder::new();
        builder.place_all(members).unwrap();
        assert_eq!(builder.panel_count(), 2);
        assert_eq!(builder.panels()[0], vec![Member::scalar(0, 4), Member::scalar(4, 4)]);
        assert_eq!(builder.panels()[1], vec![Member::scalar(0, 8)]);

        let ty = builder.finish();
        assert_eq!(
            ty,
            RecoveredType::Union(vec![
                RecoveredType::Struct(vec![Member::scalar(0, 4), Member::scalar(4, 4)]),
                RecoveredType::Scalar(8),
            ])
        );
    }

    #[test]
    fn test_single_panel_collapses_to_struct() {
        let members = vec![Member::scalar(4, 4), Member::scalar(0, 4)];
        let ty = UnionBuilder::build(members).unwrap();
        assert!(!ty.is_union());
        assert_eq!(ty, RecoveredType::Struct(vec![Member::scalar(0, 4), Member::scalar(4, 4)]));
    }

    #[test]
    fn test_single_panel_single_member_unwraps() {
        let ty = UnionBuilder::build(vec![Member::scalar(0, 2)]).unwrap();
        assert_eq!(ty, RecoveredType::Scalar(2));
    }

    #[test]
    fn test_no_members_builds_empty_struct() {
        let ty = UnionBuilder::build(Vec::new()).unwrap();
        assert_eq!(ty, RecoveredType::empty_struct());
        assert!(crate::layout::LayoutValidator::new().is_valid(&ty));
    }

    #[test]
    fn test_zero_size_member_rejected() {
        let err = UnionBuilder::build(vec![Member::scalar(0, 4), Member::new(2, 0, RecoveredType::empty_struct())]);
        assert!(matches!(err, Err(LayoutError::EmptyMember { offset: 2 })));
    }
}
