// Tue Jan 13 2026 - Alex

use crate::layout::{LayoutError, Member, RecoveredType};
use itertools::Itertools;

/// Walks a recovered type and checks the structural invariants: positive
/// sizes, pairwise disjoint struct members, unions with real alternatives.
pub struct LayoutValidator;

impl LayoutValidator {
    pub fn new() -> Self {
        Self
    }

    pub fn validate(&self, ty: &RecoveredType) -> Result<(), LayoutError> {
        match ty {
            RecoveredType::Scalar(0) => Err(LayoutError::ZeroSizedScalar),
            RecoveredType::Scalar(_) => Ok(()),
            RecoveredType::Array(_, 0) => Err(LayoutError::ZeroStrideArray),
            RecoveredType::Array(element, _) => self.validate(element),
            RecoveredType::Struct(members) => {
                self.validate_members(members)?;
                members.iter().try_for_each(|m| self.validate(&m.ty))
            }
            RecoveredType::Union(alternatives) => {
                if alternatives.len() < 2 {
                    return Err(LayoutError::DegenerateUnion(alternatives.len()));
                }
                alternatives.iter().try_for_each(|alt| self.validate(alt))
            }
        }
    }

    pub fn validate_members(&self, members: &[Member]) -> Result<(), LayoutError> {
        if let Some(empty) = members.iter().find(|m| m.size == 0) {
            return Err(LayoutError::EmptyMember { offset: empty.offset });
        }
        match members.iter().tuple_combinations().find(|(a, b)| a.overlaps(b)) {
            Some((a, b)) => Err(LayoutError::OverlapSurvived {
                first_start: a.offset,
                first_end: a.end(),
                second_start: b.offset,
                second_end: b.end(),
            }),
            None => Ok(()),
        }
    }

    pub fn is_valid(&self, ty: &RecoveredType) -> bool {
        self.validate(ty).is_ok()
    }
}

impl Default for LayoutValidator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_tree() {
        let inner = RecoveredType::Struct(vec![Member::scalar(0, 4), Member::scalar(4, 4)]);
        let ty = RecoveredType::Struct(vec![
            Member::scalar(0, 4),
            Member::new(4, 8, RecoveredType::array(inner, 8)),
        ]);
        assert!(LayoutValidator::new().is_valid(&ty));
        assert!(LayoutValidator::new().is_valid(&RecoveredType::empty_struct()));
    }

    #[test]
    fn test_overlap_detected() {
        let ty = RecoveredType::Struct(vec![Member::scalar(0, 8), Member::scalar(4, 4)]);
        let err = LayoutValidator::new().validate(&ty).unwrap_err();
        assert!(matches!(
            err,
            LayoutError::OverlapSurvived { first_start: 0, first_end: 8, second_start: 4, second_end: 8 }
        ));
        assert!(err.is_internal());
    }

    #[test]
    fn test_nested_faults_detected() {
        let validator = LayoutValidator::new();
        let degenerate = RecoveredType::array(RecoveredType::Union(vec![RecoveredType::Scalar(4)]), 4);
        assert!(matches!(validator.validate(&degenerate), Err(LayoutError::DegenerateUnion(1))));

        let zero = RecoveredType::Struct(vec![Member::new(0, 4, RecoveredType::Scalar(0))]);
        assert!(matches!(validator.validate(&zero), Err(LayoutError::ZeroSizedScalar)));

        let no_stride = RecoveredType::array(RecoveredType::Scalar(4), 0);
        assert!(matches!(validator.validate(&no_stride), Err(LayoutError::ZeroStrideArray)));
    }
}
