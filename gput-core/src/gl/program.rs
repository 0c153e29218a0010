use glow::HasContext;

use crate::{error::Error, gl::check_gl_error};

/// Pipeline stage a shader is compiled for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    /// Runs once per vertex.
    Vertex,
    /// Runs once per fragment.
    Fragment,
}

impl ShaderStage {
    fn name(self) -> &'static str {
        match self {
            Self::Vertex => "vertex",
            Self::Fragment => "fragment",
        }
    }
}

impl From<ShaderStage> for u32 {
    fn from(val: ShaderStage) -> Self {
        use ShaderStage::*;

        match val {
            Vertex => glow::VERTEX_SHADER,
            Fragment => glow::FRAGMENT_SHADER,
        }
    }
}

/// A compiled shader object, tagged with its stage.
#[derive(Debug, Clone, Copy)]
pub struct Shader {
    raw: glow::Shader,
    stage: ShaderStage,
}

impl Shader {
    /// Stage the shader was compiled for.
    pub fn stage(&self) -> ShaderStage {
        self.stage
    }

    /// Underlying GL shader handle.
    pub fn raw(&self) -> glow::Shader {
        self.raw
    }
}

/// Compiles `sources` as one shader of the given stage.
///
/// The sources are concatenated in order, like the string array accepted by
/// `glShaderSource`.
///
/// # Errors
/// Returns [`Error::Shader`] with the driver's info log if compilation fails.
/// The failed shader object is deleted.
pub fn compile_shader(
    gl: &glow::Context,
    stage: ShaderStage,
    sources: &[&str],
) -> Result<Shader, Error> {
    let shader =
        unsafe { gl.create_shader(stage.into()) }.map_err(|e| Error::shader_creation_failed(&e))?;

    let source = sources.concat();
    unsafe {
        gl.shader_source(shader, &source);
        gl.compile_shader(shader);
    }

    if !unsafe { gl.get_shader_compile_status(shader) } {
        let log = unsafe { gl.get_shader_info_log(shader) };
        unsafe { gl.delete_shader(shader) };
        return Err(Error::shader_compile_failed(stage.name(), &log));
    }

    tracing::debug!(stage = stage.name(), "compiled shader");
    Ok(Shader { raw: shader, stage })
}

/// Deletes a shader object. Programs it was linked into are unaffected.
pub fn delete_shader(gl: &glow::Context, shader: Shader) {
    unsafe { gl.delete_shader(shader.raw) };
}

/// A linked vertex + fragment program.
#[derive(Debug)]
pub struct ShaderProgram {
    pub(crate) program: glow::Program,
}

impl ShaderProgram {
    /// Compiles both stages and links them, deleting the intermediate shaders.
    ///
    /// # Errors
    /// Returns [`Error::Shader`] if either stage fails to compile or the
    /// program fails to link.
    pub fn create(
        gl: &glow::Context,
        vertex_source: &str,
        fragment_source: &str,
    ) -> Result<Self, Error> {
        let vertex_shader = compile_shader(gl, ShaderStage::Vertex, &[vertex_source])?;
        let fragment_shader = match compile_shader(gl, ShaderStage::Fragment, &[fragment_source]) {
            Ok(shader) => shader,
            Err(e) => {
                delete_shader(gl, vertex_shader);
                return Err(e);
            },
        };

        let program = Self::link(gl, vertex_shader, fragment_shader);

        // no longer needed after linking
        delete_shader(gl, vertex_shader);
        delete_shader(gl, fragment_shader);

        program
    }

    /// Links a vertex and a fragment shader into a program.
    ///
    /// # Errors
    /// Returns [`Error::Shader`] if the shaders are passed in the wrong
    /// order, or if linking fails.
    pub fn link(gl: &glow::Context, vertex: Shader, fragment: Shader) -> Result<Self, Error> {
        check_stage("First", ShaderStage::Vertex, vertex)?;
        check_stage("Second", ShaderStage::Fragment, fragment)?;

        let program = unsafe { gl.create_program() }
            .map_err(|e| Error::shader_program_creation_failed(&e))?;

        // attach shaders and link program
        unsafe {
            gl.attach_shader(program, vertex.raw);
            gl.attach_shader(program, fragment.raw);
            gl.link_program(program);
        }

        if let Err(e) = check_link_status(gl, program) {
            unsafe { gl.delete_program(program) };
            return Err(e);
        }

        tracing::debug!("linked shader program");
        Ok(ShaderProgram { program })
    }

    /// Use the shader program.
    ///
    /// # Errors
    /// Returns [`Error::Gl`] if GL reports an error.
    pub fn bind(&self, gl: &glow::Context) -> Result<(), Error> {
        unsafe { gl.use_program(Some(self.program)) };
        check_gl_error(gl, "use_program")
    }

    /// Clears the current program.
    ///
    /// # Errors
    /// Returns [`Error::Gl`] if GL reports an error.
    pub fn unbind(gl: &glow::Context) -> Result<(), Error> {
        unsafe { gl.use_program(None) };
        check_gl_error(gl, "unbind_program")
    }

    /// Deletes the program, releasing the GPU resource.
    ///
    /// # Errors
    /// Returns [`Error::Gl`] if the driver flags the deletion, e.g. for a
    /// program that was already deleted.
    pub fn delete(self, gl: &glow::Context) -> Result<(), Error> {
        unsafe { gl.delete_program(self.program) };
        check_gl_error(gl, "delete_program")
    }

    /// Underlying GL program handle.
    pub fn raw(&self) -> glow::Program {
        self.program
    }
}

fn check_stage(position: &str, expected: ShaderStage, shader: Shader) -> Result<(), Error> {
    if shader.stage != expected {
        return Err(Error::shader_stage_mismatch(
            position,
            expected.name(),
            shader.stage.name(),
        ));
    }

    Ok(())
}

fn check_link_status(gl: &glow::Context, program: glow::Program) -> Result<(), Error> {
    let status = unsafe { gl.get_program_link_status(program) };
    if !status {
        let log = unsafe { gl.get_program_info_log(program) };
        return Err(Error::shader_link_failed(&log));
    }

    Ok(())
}
