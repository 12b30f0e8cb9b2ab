// Tue Jan 13 2026 - Alex

use crate::layout::Member;
use std::fmt;

/// Shape recovered for a region of memory.
///
/// `Array` carries only the period of its element; how many elements there
/// are is left to whoever knows the size of the enclosing object.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RecoveredType {
    Scalar(u64),
    Array(Box<RecoveredType>, u64),
    Struct(Vec<Member>),
    Union(Vec<RecoveredType>),
}

impl RecoveredType {
    pub fn empty_struct() -> Self {
        Self::Struct(Vec::new())
    }

    pub fn array(element: RecoveredType, stride: u64) -> Self {
        Self::Array(Box::new(element), stride)
    }

    /// Bytes spanned from the type's own origin. Arrays report one period.
    pub fn extent(&self) -> u64 {
        match self {
            Self::Scalar(size) => *size,
            Self::Array(_, stride) => *stride,
            Self::Struct(members) => members.iter().map(Member::end).max().unwrap_or(0),
            Self::Union(alternatives) => alternatives.iter().map(Self::extent).max().unwrap_or(0),
        }
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self, Self::Scalar(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(_, _))
    }

    pub fn is_struct(&self) -> bool {
        matches!(self, Self::Struct(_))
    }

    pub fn is_union(&self) -> bool {
        matches!(self, Self::Union(_))
    }

    pub fn members(&self) -> Option<&[Member]> {
        match self {
            Self::Struct(members) => Some(members.as_slice()),
            _ => None,
        }
    }

    pub fn alternatives(&self) -> Option<&[RecoveredType]> {
        match self {
            Self::Union(alternatives) => Some(alternatives.as_slice()),
            _ => None,
        }
    }

    pub fn element(&self) -> Option<(&RecoveredType, u64)> {
        match self {
            Self::Array(element, stride) => Some((element.as_ref(), *stride)),
            _ => None,
        }
    }

    /// Nesting depth; a scalar or an empty struct is depth 1.
    pub fn depth(&self) -> usize {
        1 + match self {
            Self::Scalar(_) => 0,
            Self::Array(element, _) => element.depth(),
            Self::Struct(members) => members.iter().map(|m| m.ty.depth()).max().unwrap_or(0),
            Self::Union(alternatives) => alternatives.iter().map(Self::depth).max().unwrap_or(0),
        }
    }
}

impl fmt::Display for RecoveredType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(size) => write!(f, "Scalar({})", size),
            Self::Array(element, stride) => write!(f, "Array({}, {})", element, stride),
            Self::Struct(members) => {
                if members.is_empty() {
                    return write!(f, "struct {{}}");
                }
                write!(f, "struct {{ ")?;
                for (i, member) in members.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", member)?;
                }
                write!(f, " }}")
            }
            Self::Union(alternatives) => {
                write!(f, "union {{ ")?;
                for (i, alternative) in alternatives.iter().enumerate() {
                    if i > 0 {
                        write!(f, " | ")?;
                    }
                    write!(f, "{}", alternative)?;
                }
                write!(f, " }}")
            }
        }
    }
}
