use crate::{ElementType, LayoutError, ScalarKind};

/// Placement of one element within an interleaved vertex record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AttributeDescriptor {
    /// The element type this attribute was packed from.
    pub element: ElementType,
    /// Offset from the start of the vertex record, in bytes.
    pub byte_offset: u32,
    /// Number of scalar components, 1 to 4.
    pub component_count: u32,
    /// Whether the attribute is bound as integer data.
    pub is_integral: bool,
    /// Scalar kind of each component.
    pub scalar: ScalarKind,
}

impl AttributeDescriptor {
    fn new(element: ElementType, byte_offset: u32) -> Self {
        let desc = element.descriptor();
        Self {
            element,
            byte_offset,
            component_count: desc.component_count,
            is_integral: desc.is_integral,
            scalar: desc.scalar,
        }
    }

    /// Byte size of the attribute, excluding any padding that follows it.
    pub fn size(&self) -> u32 {
        self.element.size()
    }

    /// First byte past the end of the attribute.
    pub fn end(&self) -> u32 {
        self.byte_offset + self.size()
    }
}

/// Packed, aligned memory layout of an interleaved vertex record.
///
/// Fields follow C struct layout rules: each element starts at a multiple of
/// its component width, and the stride is padded up to the widest alignment
/// seen. The first element is always placed at offset 0.
///
/// ```
/// use gput_data::{ElementType::*, VertexLayout};
///
/// let layout = VertexLayout::pack(&[Vec2F32, I32, Vec3F32, I32]).unwrap();
/// let offsets: Vec<u32> = layout.iter().map(|a| a.byte_offset).collect();
/// assert_eq!(offsets, [0, 8, 12, 24]);
/// assert_eq!(layout.stride(), 28);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct VertexLayout {
    attributes: Vec<AttributeDescriptor>,
    stride: u32,
}

impl VertexLayout {
    /// Computes offsets and stride for `elements`, in the order given.
    ///
    /// # Errors
    /// Returns [`LayoutError::EmptyLayout`] if `elements` is empty, or
    /// [`LayoutError::LayoutTooLarge`] if the record would not fit in a `u32`
    /// stride.
    pub fn pack(elements: &[ElementType]) -> Result<Self, LayoutError> {
        let mut attributes = Vec::with_capacity(elements.len());
        let placement = place(elements.iter().copied(), |element, offset| {
            attributes.push(AttributeDescriptor::new(element, offset));
        })?;

        tracing::debug!(
            attributes = attributes.len(),
            stride = placement.stride,
            padding = placement.stride - placement.used,
            "packed vertex layout"
        );

        Ok(Self { attributes, stride: placement.stride })
    }

    /// Packs a layout from raw element type ordinals.
    ///
    /// # Errors
    /// Returns [`LayoutError::UnknownElementType`] for any ordinal outside the
    /// descriptor table, or [`LayoutError::EmptyLayout`] for empty input.
    pub fn from_raw(ordinals: &[u32]) -> Result<Self, LayoutError> {
        let elements = ordinals
            .iter()
            .map(|&ordinal| ElementType::try_from(ordinal))
            .collect::<Result<Vec<_>, _>>()?;

        Self::pack(&elements)
    }

    /// Attribute descriptors, in input order.
    pub fn attributes(&self) -> &[AttributeDescriptor] {
        &self.attributes
    }

    /// Total bytes per vertex record, including trailing padding.
    pub fn stride(&self) -> u32 {
        self.stride
    }

    /// Number of attributes in the record.
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// Always false for a packed layout; provided for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Iterates over the attributes in input order.
    pub fn iter(&self) -> std::slice::Iter<'_, AttributeDescriptor> {
        self.attributes.iter()
    }

    /// Bytes of the stride not occupied by any attribute.
    pub fn padding(&self) -> u32 {
        self.stride - self.attributes.iter().map(AttributeDescriptor::size).sum::<u32>()
    }
}

impl<'a> IntoIterator for &'a VertexLayout {
    type Item = &'a AttributeDescriptor;
    type IntoIter = std::slice::Iter<'a, AttributeDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Stride and summed element sizes of a placed record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Placement {
    stride: u32,
    used: u32,
}

/// Assigns each element its byte offset, handing `(element, offset)` to
/// `visit` in input order.
fn place(
    elements: impl IntoIterator<Item = ElementType>,
    mut visit: impl FnMut(ElementType, u32),
) -> Result<Placement, LayoutError> {
    let mut elements = elements.into_iter();
    let first = elements.next().ok_or(LayoutError::EmptyLayout)?;

    // no leading padding; the record itself starts at offset 0
    visit(first, 0);
    let mut max_alignment = first.alignment();
    let mut offset = first.size();
    let mut used = first.size();

    for element in elements {
        let alignment = element.alignment();
        max_alignment = max_alignment.max(alignment);

        let start = align_up(offset, alignment).ok_or(LayoutError::LayoutTooLarge)?;
        visit(element, start);

        offset = start
            .checked_add(element.size())
            .ok_or(LayoutError::LayoutTooLarge)?;
        // bounded by offset
        used += element.size();
    }

    let stride = align_up(offset, max_alignment).ok_or(LayoutError::LayoutTooLarge)?;
    Ok(Placement { stride, used })
}

/// Rounds `offset` up to the next multiple of `alignment`, or `None` if the
/// result does not fit in a `u32`.
fn align_up(offset: u32, alignment: u32) -> Option<u32> {
    match offset % alignment {
        0 => Some(offset),
        rem => offset.checked_add(alignment - rem),
    }
}
