// Tue Jan 13 2026 - Alex

use crate::layout::{ByteRange, RecoveredType};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Member {
    pub offset: u64,
    pub size: u64,
    pub ty: RecoveredType,
}

impl Member {
    pub fn new(offset: u64, size: u64, ty: RecoveredType) -> Self {
        Self { offset, size, ty }
    }

    pub fn scalar(offset: u64, size: u64) -> Self {
        Self::new(offset, size, RecoveredType::Scalar(size))
    }

    /// Saturates at `u64::MAX`; validated patterns never get that far.
    pub fn end(&self) -> u64 {
        self.offset.saturating_add(self.size)
    }

    pub fn range(&self) -> ByteRange {
        ByteRange::with_size(self.offset, self.size)
    }

    pub fn overlaps(&self, other: &Member) -> bool {
        self.range().overlaps(&other.range())
    }

    pub fn rebased(mut self, origin: u64) -> Self {
        self.offset -= origin;
        self
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}: {}", self.offset, self.ty)
    }
}
