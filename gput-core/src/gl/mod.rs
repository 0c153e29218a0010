mod buffer;
mod debug;
mod program;
mod texture;
mod vertex_layout;

pub use buffer::{Buffer, BufferKind};
pub use debug::{GlErrorCode, check_gl_error};
pub use program::{Shader, ShaderProgram, ShaderStage, compile_shader, delete_shader};
pub use texture::{GlPixelFormat, PixelFormat, Texture};
pub use vertex_layout::{bind_vertex_layout, scalar_gl_type, set_vertex_layout};
