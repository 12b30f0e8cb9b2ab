// Tue Jan 13 2026 - Alex

pub mod builder;
pub mod error;
pub mod inference;
pub mod member;
pub mod overlap;
pub mod padding;
pub mod pattern;
pub mod range;
pub mod stride;
pub mod type_info;
pub mod union;
pub mod validator;

pub use builder::StructureBuilder;
pub use error::LayoutError;
pub use inference::{infer_type, TypeInference};
pub use member::Member;
pub use overlap::{resolve_overlaps, OverlapResolver};
pub use padding::{LayoutSlot, StructureLayout};
pub use pattern::AccessPattern;
pub use range::ByteRange;
pub use stride::StrideWindow;
pub use type_info::RecoveredType;
pub use union::UnionBuilder;
pub use validator::LayoutValidator;
