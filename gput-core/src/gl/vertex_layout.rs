use glow::HasContext;
use gput_data::{AttributeDescriptor, ElementType, ScalarKind, VertexLayout};

use crate::{error::Error, gl::check_gl_error};

/// GL component type enum for a scalar kind.
pub fn scalar_gl_type(scalar: ScalarKind) -> u32 {
    match scalar {
        ScalarKind::I8 => glow::BYTE,
        ScalarKind::U8 => glow::UNSIGNED_BYTE,
        ScalarKind::I16 => glow::SHORT,
        ScalarKind::U16 => glow::UNSIGNED_SHORT,
        ScalarKind::I32 => glow::INT,
        ScalarKind::U32 => glow::UNSIGNED_INT,
        ScalarKind::F16 => glow::HALF_FLOAT,
        ScalarKind::F32 => glow::FLOAT,
    }
}

/// Packs `elements` and binds the result to consecutive attribute indices
/// starting at `first_index`.
///
/// The vertex array object and the vertex buffer holding the records must
/// already be bound.
///
/// # Errors
/// Returns [`Error::Layout`] if the elements cannot be packed, and otherwise
/// the errors of [`bind_vertex_layout`].
pub fn set_vertex_layout(
    gl: &glow::Context,
    elements: &[ElementType],
    first_index: u32,
) -> Result<VertexLayout, Error> {
    let layout = VertexLayout::pack(elements)?;
    bind_vertex_layout(gl, &layout, first_index)?;
    Ok(layout)
}

/// Issues one attribute pointer call per attribute of `layout`.
///
/// Attribute `i` is enabled at index `first_index + i`. Integral attributes
/// use the integer pointer variant so shaders receive them unconverted;
/// float attributes are passed through unnormalized.
///
/// # Errors
/// Returns [`Error::Resource`] if the attributes exceed `GL_MAX_VERTEX_ATTRIBS`,
/// or [`Error::Gl`] if an attribute pointer call fails, e.g. because no
/// vertex array object is bound.
pub fn bind_vertex_layout(
    gl: &glow::Context,
    layout: &VertexLayout,
    first_index: u32,
) -> Result<(), Error> {
    let max_attribs = unsafe { gl.get_parameter_i32(glow::MAX_VERTEX_ATTRIBS) };
    check_attribute_range(first_index, layout.len(), max_attribs)?;

    let stride = layout.stride() as i32;
    for (index, attr) in (first_index..).zip(layout.iter()) {
        enable_vertex_attrib(gl, index, attr, stride);
    }
    check_gl_error(gl, "vertex_attrib_pointer")?;

    tracing::debug!(
        first_index,
        attributes = layout.len(),
        stride,
        "bound vertex layout"
    );
    Ok(())
}

fn check_attribute_range(first_index: u32, count: usize, max_attribs: i32) -> Result<(), Error> {
    let end = u64::from(first_index) + count as u64;
    if end > max_attribs.max(0) as u64 {
        return Err(Error::too_many_vertex_attributes(first_index, count));
    }

    Ok(())
}

fn enable_vertex_attrib(gl: &glow::Context, index: u32, attr: &AttributeDescriptor, stride: i32) {
    let size = attr.component_count as i32;
    let type_ = scalar_gl_type(attr.scalar);
    let offset = attr.byte_offset as i32;

    tracing::trace!(index, element = %attr.element, offset, "vertex attribute");
    unsafe {
        gl.enable_vertex_attrib_array(index);
        if attr.is_integral {
            gl.vertex_attrib_pointer_i32(index, size, type_, stride, offset);
        } else {
            gl.vertex_attrib_pointer_f32(index, size, type_, false, stride, offset);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_types() {
        assert_eq!(scalar_gl_type(ScalarKind::I8), glow::BYTE);
        assert_eq!(scalar_gl_type(ScalarKind::U16), glow::UNSIGNED_SHORT);
        assert_eq!(scalar_gl_type(ScalarKind::U32), glow::UNSIGNED_INT);
        assert_eq!(scalar_gl_type(ScalarKind::F16), glow::HALF_FLOAT);
        assert_eq!(scalar_gl_type(ScalarKind::F32), glow::FLOAT);
    }

    #[test]
    fn test_integral_elements_use_integer_types() {
        for ty in ElementType::ALL {
            let gl_type = scalar_gl_type(ty.scalar());
            let float = matches!(gl_type, glow::FLOAT | glow::HALF_FLOAT);
            assert_eq!(float, !ty.is_integral(), "{ty}");
        }
    }

    #[test]
    fn test_attribute_range() {
        assert!(check_attribute_range(0, 16, 16).is_ok());
        assert!(check_attribute_range(12, 4, 16).is_ok());
        assert!(check_attribute_range(13, 4, 16).is_err());
        assert!(check_attribute_range(u32::MAX, 2, 16).is_err());
        assert!(check_attribute_range(0, 1, -1).is_err());
    }
}
