/// Invalid-argument conditions raised while describing or packing a vertex
/// layout.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// A layout needs at least one element.
    #[error("Vertex layout requires at least one element")]
    EmptyLayout,

    /// An element type ordinal or name that is not in the descriptor table.
    #[error("Unknown element type: {0}")]
    UnknownElementType(String),

    /// Offsets or stride past `u32::MAX` bytes.
    #[error("Vertex layout does not fit in a u32 stride")]
    LayoutTooLarge,
}

impl LayoutError {
    pub(crate) fn unknown_ordinal(ordinal: u32) -> Self {
        Self::UnknownElementType(format!("ordinal {ordinal}"))
    }

    pub(crate) fn unknown_name(name: &str) -> Self {
        Self::UnknownElementType(format!("'{name}'"))
    }
}
