//! GL-free vertex element types and the interleaved vertex layout packer.

mod element;
mod error;
mod layout;

pub use element::{ElementType, ScalarKind, TypeDescriptor};
pub use error::LayoutError;
pub use layout::{AttributeDescriptor, VertexLayout};
