// Tue Jan 13 2026 - Alex

use crate::layout::LayoutError;
use std::collections::BTreeSet;
use std::fmt;

/// One observed access against an object: `access_size` bytes at `base`,
/// repeating at every period listed in `strides`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AccessPattern {
    pub base: u64,
    pub strides: BTreeSet<u64>,
    pub access_size: u64,
}

impl AccessPattern {
    pub fn new(base: u64, access_size: u64) -> Self {
        Self {
            base,
            strides: BTreeSet::new(),
            access_size,
        }
    }

    pub fn with_stride(mut self, stride: u64) -> Self {
        self.strides.insert(stride);
        self
    }

    pub fn with_strides<I: IntoIterator<Item = u64>>(mut self, strides: I) -> Self {
        self.strides.extend(strides);
        self
    }

    pub fn is_repeated(&self) -> bool {
        !self.strides.is_empty()
    }

    pub fn has_stride(&self, stride: u64) -> bool {
        self.strides.contains(&stride)
    }

    /// Moves the pattern into a window starting at `window_start` and drops
    /// `stride`, which the window itself now accounts for.
    pub fn rebase(mut self, window_start: u64, stride: u64) -> Self {
        self.base -= window_start;
        self.strides.remove(&stride);
        self
    }

    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.access_size == 0 {
            return Err(LayoutError::ZeroAccessSize { base: self.base });
        }
        self.check_span(self.access_size)?;
        for &stride in &self.strides {
            if stride == 0 {
                return Err(LayoutError::ZeroStride { base: self.base });
            }
            if self.access_size > stride {
                return Err(LayoutError::AccessWiderThanStride {
                    base: self.base,
                    access_size: self.access_size,
                    stride,
                });
            }
            self.check_span(stride)?;
        }
        Ok(())
    }

    fn check_span(&self, span: u64) -> Result<(), LayoutError> {
        match self.base.checked_add(span) {
            Some(_) => Ok(()),
            None => Err(LayoutError::OffsetOverflow { base: self.base, span }),
        }
    }
}

impl fmt::Display for AccessPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:x}", self.base)?;
        for stride in self.strides.iter().rev() {
            write!(f, " + {}*i", stride)?;
        }
        write!(f, " ({} bytes)", self.access_size)
    }
}
