use gput_data::LayoutError;

use crate::gl::GlErrorCode;

/// Error categories for the GL abstraction layer.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Shader compilation, linking, or program creation errors.
    #[error("Shader error: {0}")]
    Shader(String),

    /// GL resource creation or management errors.
    #[error("Resource error: {0}")]
    Resource(String),

    /// An error flag raised by the GL driver.
    #[error("GL error after {operation}: {code}")]
    Gl {
        /// The wrapper call that was checked.
        operation: &'static str,
        /// The first error code reported.
        code: GlErrorCode,
    },

    /// Invalid vertex layout description.
    #[error(transparent)]
    Layout(#[from] LayoutError),
}

impl Error {
    // Shader errors
    pub(crate) fn shader_creation_failed(detail: &str) -> Self {
        Self::Shader(format!("Shader creation failed: {detail}"))
    }

    pub(crate) fn shader_compile_failed(stage: &str, log: &str) -> Self {
        Self::Shader(format!("{stage} shader compile error:\n{log}"))
    }

    pub(crate) fn shader_program_creation_failed(detail: &str) -> Self {
        Self::Shader(format!("Shader program creation failed: {detail}"))
    }

    pub(crate) fn shader_stage_mismatch(position: &str, expected: &str, actual: &str) -> Self {
        Self::Shader(format!(
            "{position} shader should be a {expected} shader, got a {actual} shader"
        ))
    }

    pub(crate) fn shader_link_failed(log: &str) -> Self {
        Self::Shader(format!("Program link error:\n{log}"))
    }

    // Resource errors
    pub(crate) fn buffer_creation_failed(buffer_kind: &str, detail: &str) -> Self {
        Self::Resource(format!("Failed to create {buffer_kind} buffer: {detail}"))
    }

    pub(crate) fn texture_creation_failed(detail: &str) -> Self {
        Self::Resource(format!("Failed to create texture: {detail}"))
    }

    pub(crate) fn texture_data_size_mismatch(expected: usize, actual: usize) -> Self {
        Self::Resource(format!(
            "Texture data is {actual} bytes, expected {expected} bytes"
        ))
    }

    pub(crate) fn invalid_texture_dimensions(width: i32, height: i32) -> Self {
        Self::Resource(format!("Invalid texture dimensions: {width}x{height}"))
    }

    pub(crate) fn too_many_vertex_attributes(first_index: u32, count: usize) -> Self {
        Self::Resource(format!(
            "Cannot bind {count} vertex attributes starting at index {first_index}"
        ))
    }
}
