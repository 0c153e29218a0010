//! Thin OpenGL ES abstraction over [`glow`].
//!
//! Wraps shader, program, buffer and texture creation with error checking,
//! and binds interleaved vertex records from an automatically packed
//! [`VertexLayout`].

/// The crate-wide [`Error`] type.
pub mod error;
/// `glow` wrappers for GL objects and vertex layout binding.
pub mod gl;

pub use ::gput_data::{
    AttributeDescriptor, ElementType, LayoutError, ScalarKind, TypeDescriptor, VertexLayout,
};
pub use error::Error;
pub use gl::{
    Buffer, BufferKind, GlErrorCode, GlPixelFormat, PixelFormat, Shader, ShaderProgram,
    ShaderStage, Texture, bind_vertex_layout, check_gl_error, compile_shader, delete_shader,
    set_vertex_layout,
};
