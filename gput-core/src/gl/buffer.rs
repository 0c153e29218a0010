use glow::HasContext;

use crate::{error::Error, gl::check_gl_error};

/// Binding target of a buffer object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferKind {
    /// Per-vertex attribute data (`GL_ARRAY_BUFFER`).
    Vertex,
    /// Element indices (`GL_ELEMENT_ARRAY_BUFFER`).
    Index,
}

impl BufferKind {
    fn name(self) -> &'static str {
        match self {
            Self::Vertex => "vertex",
            Self::Index => "index",
        }
    }
}

impl From<BufferKind> for u32 {
    fn from(val: BufferKind) -> Self {
        match val {
            BufferKind::Vertex => glow::ARRAY_BUFFER,
            BufferKind::Index => glow::ELEMENT_ARRAY_BUFFER,
        }
    }
}

/// A buffer object with static contents.
#[derive(Debug)]
pub struct Buffer {
    buffer: glow::Buffer,
    kind: BufferKind,
}

impl Buffer {
    /// Creates a buffer and uploads `data` with `STATIC_DRAW` usage.
    ///
    /// The target is left unbound afterwards.
    ///
    /// # Errors
    /// Returns [`Error::Resource`] if the buffer object cannot be created, or
    /// [`Error::Gl`] if GL rejects the upload (e.g. `GL_OUT_OF_MEMORY`).
    pub fn create(gl: &glow::Context, kind: BufferKind, data: &[u8]) -> Result<Self, Error> {
        let buffer = unsafe { gl.create_buffer() }
            .map_err(|e| Error::buffer_creation_failed(kind.name(), &e))?;

        let target = kind.into();
        unsafe {
            gl.bind_buffer(target, Some(buffer));
            gl.buffer_data_u8_slice(target, data, glow::STATIC_DRAW);
            gl.bind_buffer(target, None);
        }

        if let Err(e) = check_gl_error(gl, "buffer_data") {
            unsafe { gl.delete_buffer(buffer) };
            return Err(e);
        }

        tracing::debug!(kind = kind.name(), bytes = data.len(), "created buffer");
        Ok(Self { buffer, kind })
    }

    /// Creates a buffer from a slice of plain vertex or index records.
    ///
    /// `T` is uploaded as-is, so it must be `#[repr(C)]` (or a primitive) to
    /// match the layout the attribute pointers describe.
    ///
    /// # Errors
    /// Returns [`Error::Resource`] if the buffer object cannot be created, or
    /// [`Error::Gl`] if the upload fails.
    pub fn create_from_slice<T: bytemuck::Pod>(
        gl: &glow::Context,
        kind: BufferKind,
        data: &[T],
    ) -> Result<Self, Error> {
        Self::create(gl, kind, bytemuck::cast_slice(data))
    }

    /// Binds the buffer to its target.
    ///
    /// # Errors
    /// Returns [`Error::Gl`] if GL reports an error.
    pub fn bind(&self, gl: &glow::Context) -> Result<(), Error> {
        unsafe { gl.bind_buffer(self.kind.into(), Some(self.buffer)) };
        check_gl_error(gl, "bind_buffer")
    }

    /// Clears the buffer's target.
    ///
    /// # Errors
    /// Returns [`Error::Gl`] if GL reports an error.
    pub fn unbind(&self, gl: &glow::Context) -> Result<(), Error> {
        unsafe { gl.bind_buffer(self.kind.into(), None) };
        check_gl_error(gl, "unbind_buffer")
    }

    /// Deletes the buffer, releasing the GPU resource.
    ///
    /// # Errors
    /// Returns [`Error::Gl`] if GL reports an error.
    pub fn delete(self, gl: &glow::Context) -> Result<(), Error> {
        unsafe { gl.delete_buffer(self.buffer) };
        check_gl_error(gl, "delete_buffer")
    }

    /// The target this buffer binds to.
    pub fn kind(&self) -> BufferKind {
        self.kind
    }

    /// Underlying GL buffer handle.
    pub fn raw(&self) -> glow::Buffer {
        self.buffer
    }
}

#[cfg(test)]
mod tests {
    use bytemuck::{Pod, Zeroable};

    use super::*;

    #[repr(C)]
    #[derive(Clone, Copy, Pod, Zeroable)]
    struct Vertex {
        pos: [f32; 2],
        id: u32,
    }

    #[test]
    fn test_buffer_targets() {
        assert_eq!(u32::from(BufferKind::Vertex), glow::ARRAY_BUFFER);
        assert_eq!(u32::from(BufferKind::Index), glow::ELEMENT_ARRAY_BUFFER);
    }

    #[test]
    fn test_vertex_bytes() {
        let vertices = [Vertex { pos: [1.0, 2.0], id: 7 }; 3];
        let bytes: &[u8] = bytemuck::cast_slice(&vertices);

        assert_eq!(bytes.len(), 3 * 12);
        assert_eq!(&bytes[12..16], &1.0_f32.to_ne_bytes());
        assert_eq!(&bytes[20..24], &7_u32.to_ne_bytes());
    }

    #[test]
    fn test_index_bytes() {
        let indices: [u16; 6] = [0, 1, 2, 0, 3, 1];
        let bytes: &[u8] = bytemuck::cast_slice(&indices);

        assert_eq!(bytes.len(), 12);
        assert_eq!(u16::from_ne_bytes([bytes[2], bytes[3]]), 1);
    }
}
