use std::fmt;

use glow::HasContext;

use crate::error::Error;

/// Error flag reported by `glGetError`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlErrorCode {
    /// `GL_INVALID_ENUM`: an enum argument was out of range.
    InvalidEnum,
    /// `GL_INVALID_VALUE`: a numeric argument was out of range.
    InvalidValue,
    /// `GL_INVALID_OPERATION`: the call is not allowed in the current state.
    InvalidOperation,
    /// `GL_STACK_OVERFLOW`
    StackOverflow,
    /// `GL_STACK_UNDERFLOW`
    StackUnderflow,
    /// `GL_OUT_OF_MEMORY`; GL state is undefined afterwards.
    OutOfMemory,
    /// `GL_INVALID_FRAMEBUFFER_OPERATION`: the bound framebuffer is incomplete.
    InvalidFramebufferOperation,
    /// A code outside the core set, e.g. from a vendor extension.
    Unknown(u32),
}

impl GlErrorCode {
    /// Maps a raw error code; `None` for `GL_NO_ERROR`.
    pub fn from_raw(code: u32) -> Option<Self> {
        use GlErrorCode::*;

        let code = match code {
            glow::NO_ERROR => return None,
            glow::INVALID_ENUM => InvalidEnum,
            glow::INVALID_VALUE => InvalidValue,
            glow::INVALID_OPERATION => InvalidOperation,
            glow::STACK_OVERFLOW => StackOverflow,
            glow::STACK_UNDERFLOW => StackUnderflow,
            glow::OUT_OF_MEMORY => OutOfMemory,
            glow::INVALID_FRAMEBUFFER_OPERATION => InvalidFramebufferOperation,
            other => Unknown(other),
        };
        Some(code)
    }

    /// The raw GL enum value.
    pub fn as_raw(self) -> u32 {
        use GlErrorCode::*;

        match self {
            InvalidEnum => glow::INVALID_ENUM,
            InvalidValue => glow::INVALID_VALUE,
            InvalidOperation => glow::INVALID_OPERATION,
            StackOverflow => glow::STACK_OVERFLOW,
            StackUnderflow => glow::STACK_UNDERFLOW,
            OutOfMemory => glow::OUT_OF_MEMORY,
            InvalidFramebufferOperation => glow::INVALID_FRAMEBUFFER_OPERATION,
            Unknown(code) => code,
        }
    }

    /// The GL enum name, e.g. `GL_INVALID_ENUM`.
    pub fn name(self) -> &'static str {
        use GlErrorCode::*;

        match self {
            InvalidEnum => "GL_INVALID_ENUM",
            InvalidValue => "GL_INVALID_VALUE",
            InvalidOperation => "GL_INVALID_OPERATION",
            StackOverflow => "GL_STACK_OVERFLOW",
            StackUnderflow => "GL_STACK_UNDERFLOW",
            OutOfMemory => "GL_OUT_OF_MEMORY",
            InvalidFramebufferOperation => "GL_INVALID_FRAMEBUFFER_OPERATION",
            Unknown(_) => "GL_UNKNOWN_ERROR",
        }
    }
}

impl fmt::Display for GlErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown(code) => write!(f, "{} (0x{code:04X})", self.name()),
            _ => f.write_str(self.name()),
        }
    }
}

/// Upper bound on queued error flags drained per check. A lost context can
/// report errors forever.
const MAX_DRAINED_ERRORS: usize = 16;

/// Drains the GL error queue after `operation`.
///
/// Every pending flag is logged; the first one is returned.
///
/// # Errors
/// Returns [`Error::Gl`] if any error flag was set.
pub fn check_gl_error(gl: &glow::Context, operation: &'static str) -> Result<(), Error> {
    drain_errors(operation, || unsafe { gl.get_error() })
}

/// Pulls raw codes from `next_error` until `GL_NO_ERROR` or the drain cap.
fn drain_errors(
    operation: &'static str,
    mut next_error: impl FnMut() -> u32,
) -> Result<(), Error> {
    let mut first = None;

    for _ in 0..MAX_DRAINED_ERRORS {
        let Some(code) = GlErrorCode::from_raw(next_error()) else {
            break;
        };

        tracing::error!(operation, error = %code, "GL error");
        first.get_or_insert(code);
    }

    match first {
        Some(code) => Err(Error::Gl { operation, code }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_error_maps_to_none() {
        assert_eq!(GlErrorCode::from_raw(glow::NO_ERROR), None);
    }

    #[test]
    fn test_error_names() {
        let cases = [
            (glow::INVALID_ENUM, "GL_INVALID_ENUM"),
            (glow::INVALID_VALUE, "GL_INVALID_VALUE"),
            (glow::INVALID_OPERATION, "GL_INVALID_OPERATION"),
            (glow::STACK_OVERFLOW, "GL_STACK_OVERFLOW"),
            (glow::STACK_UNDERFLOW, "GL_STACK_UNDERFLOW"),
            (glow::OUT_OF_MEMORY, "GL_OUT_OF_MEMORY"),
            (glow::INVALID_FRAMEBUFFER_OPERATION, "GL_INVALID_FRAMEBUFFER_OPERATION"),
        ];

        for (raw, name) in cases {
            let code = GlErrorCode::from_raw(raw).unwrap();
            assert_eq!(code.name(), name);
            assert_eq!(code.to_string(), name);
            assert_eq!(code.as_raw(), raw);
        }
    }

    #[test]
    fn test_unknown_code_is_preserved() {
        let code = GlErrorCode::from_raw(0x9999).unwrap();
        assert_eq!(code, GlErrorCode::Unknown(0x9999));
        assert_eq!(code.as_raw(), 0x9999);
        assert_eq!(code.to_string(), "GL_UNKNOWN_ERROR (0x9999)");
    }

    #[test]
    fn test_gl_error_display() {
        let err = Error::Gl {
            operation: "create_texture",
            code: GlErrorCode::OutOfMemory,
        };
        assert_eq!(err.to_string(), "GL error after create_texture: GL_OUT_OF_MEMORY");
    }

    fn queue(codes: &[u32]) -> impl FnMut() -> u32 + '_ {
        let mut codes = codes.iter();
        move || codes.next().copied().unwrap_or(glow::NO_ERROR)
    }

    #[test]
    fn test_empty_queue_is_ok() {
        assert!(drain_errors("bind_buffer", queue(&[])).is_ok());
    }

    #[test]
    fn test_first_queued_error_is_returned() {
        let err = drain_errors(
            "buffer_data",
            queue(&[glow::OUT_OF_MEMORY, glow::INVALID_ENUM]),
        )
        .unwrap_err();

        assert!(matches!(
            err,
            Error::Gl { operation: "buffer_data", code: GlErrorCode::OutOfMemory }
        ));
    }

    #[test]
    fn test_drain_stops_at_cap() {
        let mut calls = 0;
        let result = drain_errors("tex_image_2d", || {
            calls += 1;
            glow::INVALID_OPERATION
        });

        assert!(result.is_err());
        assert_eq!(calls, MAX_DRAINED_ERRORS);
    }

    #[test]
    fn test_drain_stops_at_no_error() {
        let mut calls = 0;
        let codes = [glow::INVALID_VALUE, glow::NO_ERROR, glow::INVALID_ENUM];
        let result = drain_errors("vertex_attrib_pointer", || {
            calls += 1;
            codes[calls - 1]
        });

        assert!(matches!(result, Err(Error::Gl { code: GlErrorCode::InvalidValue, .. })));
        assert_eq!(calls, 2);
    }
}
