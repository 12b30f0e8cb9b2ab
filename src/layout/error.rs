// Tue Jan 13 2026 - Alex

use crate::config::ConfigError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Access at base 0x{base:x} has zero width")]
    ZeroAccessSize { base: u64 },
    #[error("Access at base 0x{base:x} claims a zero stride")]
    ZeroStride { base: u64 },
    #[error("Access at base 0x{base:x} is {access_size} bytes wide but repeats every {stride} bytes")]
    AccessWiderThanStride { base: u64, access_size: u64, stride: u64 },
    #[error("Access at base 0x{base:x} spanning {span} bytes runs past the end of the address space")]
    OffsetOverflow { base: u64, span: u64 },
    #[error("Pattern at base 0x{base:x} reached the scalar step with strides {strides:?}")]
    ResidualStride { base: u64, strides: Vec<u64> },
    #[error("Member at offset 0x{offset:x} has zero size")]
    EmptyMember { offset: u64 },
    #[error("Members overlap: [0x{first_start:x}, 0x{first_end:x}) and [0x{second_start:x}, 0x{second_end:x})")]
    OverlapSurvived {
        first_start: u64,
        first_end: u64,
        second_start: u64,
        second_end: u64,
    },
    #[error("Union has {0} alternative(s), expected at least two")]
    DegenerateUnion(usize),
    #[error("Scalar has zero size")]
    ZeroSizedScalar,
    #[error("Array has zero stride")]
    ZeroStrideArray,
    #[error("Decomposition exceeded maximum depth {0}")]
    DepthExceeded(usize),
    #[error("Thread pool error: {0}")]
    ThreadPool(String),
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl LayoutError {
    /// True when the error points at a bug in whatever produced the patterns
    /// (or in this crate) rather than at rejected input.
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            Self::ResidualStride { .. }
                | Self::EmptyMember { .. }
                | Self::OverlapSurvived { .. }
                | Self::DegenerateUnion(_)
                | Self::ZeroSizedScalar
                | Self::ZeroStrideArray
        )
    }

    pub fn is_input(&self) -> bool {
        matches!(
            self,
            Self::ZeroAccessSize { .. }
                | Self::ZeroStride { .. }
                | Self::AccessWiderThanStride { .. }
                | Self::OffsetOverflow { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_classification() {
        assert!(LayoutError::ResidualStride { base: 0, strides: vec![4] }.is_internal());
        assert!(LayoutError::EmptyMember { offset: 8 }.is_internal());
        assert!(!LayoutError::ZeroStride { base: 0 }.is_internal());
        assert!(LayoutError::ZeroStride { base: 0 }.is_input());
        assert!(LayoutError::OffsetOverflow { base: u64::MAX, span: 4 }.is_input());
        assert!(!LayoutError::DepthExceeded(64).is_input());
        assert!(!LayoutError::DepthExceeded(64).is_internal());
    }

    #[test]
    fn test_error_messages() {
        let err = LayoutError::AccessWiderThanStride { base: 0x10, access_size: 8, stride: 4 };
        assert_eq!(err.to_string(), "Access at base 0x10 is 8 bytes wide but repeats every 4 bytes");
        assert_eq!(LayoutError::DegenerateUnion(1).to_string(), "Union has 1 alternative(s), expected at least two");
    }
}
