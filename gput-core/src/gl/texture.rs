use glow::{HasContext, PixelUnpackData};

use crate::{error::Error, gl::check_gl_error};

/// Sized texel format of a 2D texture: channel count × component type.
///
/// Integer formats are sampled as integers; `16F`/`32F` formats as floats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelFormat {
    /// One signed 8-bit integer channel.
    R8I,
    /// One unsigned 8-bit integer channel.
    R8UI,
    /// One signed 16-bit integer channel.
    R16I,
    /// One unsigned 16-bit integer channel.
    R16UI,
    /// One signed 32-bit integer channel.
    R32I,
    /// One unsigned 32-bit integer channel.
    R32UI,
    /// One half-float channel.
    R16F,
    /// One 32-bit float channel.
    R32F,

    /// Two signed 8-bit integer channels.
    RG8I,
    /// Two unsigned 8-bit integer channels.
    RG8UI,
    /// Two signed 16-bit integer channels.
    RG16I,
    /// Two unsigned 16-bit integer channels.
    RG16UI,
    /// Two signed 32-bit integer channels.
    RG32I,
    /// Two unsigned 32-bit integer channels.
    RG32UI,
    /// Two half-float channels.
    RG16F,
    /// Two 32-bit float channels.
    RG32F,

    /// Three signed 8-bit integer channels.
    RGB8I,
    /// Three unsigned 8-bit integer channels.
    RGB8UI,
    /// Three signed 16-bit integer channels.
    RGB16I,
    /// Three unsigned 16-bit integer channels.
    RGB16UI,
    /// Three signed 32-bit integer channels.
    RGB32I,
    /// Three unsigned 32-bit integer channels.
    RGB32UI,
    /// Three half-float channels.
    RGB16F,
    /// Three 32-bit float channels.
    RGB32F,

    /// Four signed 8-bit integer channels.
    RGBA8I,
    /// Four unsigned 8-bit integer channels.
    RGBA8UI,
    /// Four signed 16-bit integer channels.
    RGBA16I,
    /// Four unsigned 16-bit integer channels.
    RGBA16UI,
    /// Four signed 32-bit integer channels.
    RGBA32I,
    /// Four unsigned 32-bit integer channels.
    RGBA32UI,
    /// Four half-float channels.
    RGBA16F,
    /// Four 32-bit float channels.
    RGBA32F,
}

/// GL enums needed to allocate and upload a texture of a [`PixelFormat`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlPixelFormat {
    /// Sized internal format, e.g. `GL_RG16UI`.
    pub internal_format: u32,
    /// External (client data) format, e.g. `GL_RG_INTEGER`.
    pub format: u32,
    /// Component data type, e.g. `GL_UNSIGNED_SHORT`.
    pub data_type: u32,
}

impl PixelFormat {
    /// Every pixel format, ordered by channel count then component type.
    #[rustfmt::skip]
    pub const ALL: [PixelFormat; 32] = {
        use PixelFormat::*;
        [
            R8I, R8UI, R16I, R16UI, R32I, R32UI, R16F, R32F,
            RG8I, RG8UI, RG16I, RG16UI, RG32I, RG32UI, RG16F, RG32F,
            RGB8I, RGB8UI, RGB16I, RGB16UI, RGB32I, RGB32UI, RGB16F, RGB32F,
            RGBA8I, RGBA8UI, RGBA16I, RGBA16UI, RGBA32I, RGBA32UI, RGBA16F, RGBA32F,
        ]
    };

    /// Number of channels, 1 to 4.
    pub fn channels(self) -> u32 {
        match self as usize / 8 {
            0 => 1,
            1 => 2,
            2 => 3,
            _ => 4,
        }
    }

    /// Whether texels are stored and sampled as integers.
    pub fn is_integer(self) -> bool {
        !matches!(self.data_type(), glow::HALF_FLOAT | glow::FLOAT)
    }

    /// Byte width of a single channel.
    pub fn channel_bytes(self) -> u32 {
        match self.data_type() {
            glow::BYTE | glow::UNSIGNED_BYTE => 1,
            glow::SHORT | glow::UNSIGNED_SHORT | glow::HALF_FLOAT => 2,
            _ => 4,
        }
    }

    /// Size of one texel in client memory.
    pub fn bytes_per_pixel(self) -> u32 {
        self.channels() * self.channel_bytes()
    }

    /// The GL internal format, external format, and data type.
    pub fn gl_format(self) -> GlPixelFormat {
        GlPixelFormat {
            internal_format: self.internal_format(),
            format: self.external_format(),
            data_type: self.data_type(),
        }
    }

    fn internal_format(self) -> u32 {
        use PixelFormat::*;

        match self {
            R8I => glow::R8I,
            R8UI => glow::R8UI,
            R16I => glow::R16I,
            R16UI => glow::R16UI,
            R32I => glow::R32I,
            R32UI => glow::R32UI,
            R16F => glow::R16F,
            R32F => glow::R32F,

            RG8I => glow::RG8I,
            RG8UI => glow::RG8UI,
            RG16I => glow::RG16I,
            RG16UI => glow::RG16UI,
            RG32I => glow::RG32I,
            RG32UI => glow::RG32UI,
            RG16F => glow::RG16F,
            RG32F => glow::RG32F,

            RGB8I => glow::RGB8I,
            RGB8UI => glow::RGB8UI,
            RGB16I => glow::RGB16I,
            RGB16UI => glow::RGB16UI,
            RGB32I => glow::RGB32I,
            RGB32UI => glow::RGB32UI,
            RGB16F => glow::RGB16F,
            RGB32F => glow::RGB32F,

            RGBA8I => glow::RGBA8I,
            RGBA8UI => glow::RGBA8UI,
            RGBA16I => glow::RGBA16I,
            RGBA16UI => glow::RGBA16UI,
            RGBA32I => glow::RGBA32I,
            RGBA32UI => glow::RGBA32UI,
            RGBA16F => glow::RGBA16F,
            RGBA32F => glow::RGBA32F,
        }
    }

    fn external_format(self) -> u32 {
        let float = !self.is_integer();
        match (self.channels(), float) {
            (1, false) => glow::RED_INTEGER,
            (2, false) => glow::RG_INTEGER,
            (3, false) => glow::RGB_INTEGER,
            (_, false) => glow::RGBA_INTEGER,
            (1, true) => glow::RED,
            (2, true) => glow::RG,
            (3, true) => glow::RGB,
            (_, true) => glow::RGBA,
        }
    }

    fn data_type(self) -> u32 {
        // column within a channel-count row
        match self as usize % 8 {
            0 => glow::BYTE,
            1 => glow::UNSIGNED_BYTE,
            2 => glow::SHORT,
            3 => glow::UNSIGNED_SHORT,
            4 => glow::INT,
            5 => glow::UNSIGNED_INT,
            6 => glow::HALF_FLOAT,
            _ => glow::FLOAT,
        }
    }
}

/// A 2D texture object.
#[derive(Debug)]
pub struct Texture {
    gl_texture: glow::Texture,
    format: PixelFormat,
    /// Texture dimensions (width, height)
    dimensions: (i32, i32),
}

impl Texture {
    /// Allocates a `TEXTURE_2D` and optionally uploads its initial texels.
    ///
    /// Filtering is set to `NEAREST`, which integer formats require. The
    /// texture is left unbound.
    ///
    /// # Errors
    /// Returns [`Error::Resource`] if the dimensions are not positive, if
    /// `data` does not hold exactly `width * height` texels, or if the
    /// texture object cannot be created. Returns [`Error::Gl`] if GL rejects
    /// the allocation or upload; the texture is deleted in that case.
    pub fn create(
        gl: &glow::Context,
        format: PixelFormat,
        width: i32,
        height: i32,
        data: Option<&[u8]>,
    ) -> Result<Self, Error> {
        validate_texture_data(format, width, height, data)?;

        let gl_texture =
            unsafe { gl.create_texture() }.map_err(|e| Error::texture_creation_failed(&e))?;

        let gl_format = format.gl_format();
        unsafe {
            gl.bind_texture(glow::TEXTURE_2D, Some(gl_texture));
            #[rustfmt::skip]
            gl.tex_image_2d(
                glow::TEXTURE_2D,
                0, // level
                gl_format.internal_format as i32,
                width, height,
                0, // border
                gl_format.format,
                gl_format.data_type,
                PixelUnpackData::Slice(data),
            );
            gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_MIN_FILTER, glow::NEAREST as i32);
            gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_MAG_FILTER, glow::NEAREST as i32);
            gl.bind_texture(glow::TEXTURE_2D, None);
        }

        if let Err(e) = check_gl_error(gl, "tex_image_2d") {
            unsafe { gl.delete_texture(gl_texture) };
            return Err(e);
        }

        tracing::debug!(?format, width, height, "created texture");
        Ok(Self { gl_texture, format, dimensions: (width, height) })
    }

    /// Binds the texture to `TEXTURE_2D` on the active texture unit.
    ///
    /// # Errors
    /// Returns [`Error::Gl`] if GL reports an error.
    pub fn bind(&self, gl: &glow::Context) -> Result<(), Error> {
        unsafe { gl.bind_texture(glow::TEXTURE_2D, Some(self.gl_texture)) };
        check_gl_error(gl, "bind_texture")
    }

    /// Clears the `TEXTURE_2D` binding of the active texture unit.
    ///
    /// # Errors
    /// Returns [`Error::Gl`] if GL reports an error.
    pub fn unbind(gl: &glow::Context) -> Result<(), Error> {
        unsafe { gl.bind_texture(glow::TEXTURE_2D, None) };
        check_gl_error(gl, "unbind_texture")
    }

    /// Deletes the texture, releasing the GPU resource.
    ///
    /// # Errors
    /// Returns [`Error::Gl`] if GL reports an error.
    pub fn delete(self, gl: &glow::Context) -> Result<(), Error> {
        unsafe { gl.delete_texture(self.gl_texture) };
        check_gl_error(gl, "delete_texture")
    }

    /// Texel format the texture was allocated with.
    pub fn format(&self) -> PixelFormat {
        self.format
    }

    /// Returns the texture dimensions (width, height)
    pub fn dimensions(&self) -> (i32, i32) {
        self.dimensions
    }

    /// Underlying GL texture handle.
    pub fn raw(&self) -> glow::Texture {
        self.gl_texture
    }
}

fn validate_texture_data(
    format: PixelFormat,
    width: i32,
    height: i32,
    data: Option<&[u8]>,
) -> Result<(), Error> {
    if width <= 0 || height <= 0 {
        return Err(Error::invalid_texture_dimensions(width, height));
    }

    if let Some(data) = data {
        let expected = width as usize * height as usize * format.bytes_per_pixel() as usize;
        if data.len() != expected {
            return Err(Error::texture_data_size_mismatch(expected, data.len()));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_matches_discriminants() {
        for (idx, format) in PixelFormat::ALL.iter().enumerate() {
            assert_eq!(*format as usize, idx, "{format:?} out of place");
        }
    }

    #[test]
    fn test_integer_formats() {
        let f = PixelFormat::R8I.gl_format();
        assert_eq!((f.internal_format, f.format, f.data_type), (glow::R8I, glow::RED_INTEGER, glow::BYTE));

        let f = PixelFormat::RG16UI.gl_format();
        assert_eq!(
            (f.internal_format, f.format, f.data_type),
            (glow::RG16UI, glow::RG_INTEGER, glow::UNSIGNED_SHORT)
        );

        let f = PixelFormat::RGBA32I.gl_format();
        assert_eq!(
            (f.internal_format, f.format, f.data_type),
            (glow::RGBA32I, glow::RGBA_INTEGER, glow::INT)
        );
    }

    #[test]
    fn test_float_formats() {
        let f = PixelFormat::R16F.gl_format();
        assert_eq!((f.internal_format, f.format, f.data_type), (glow::R16F, glow::RED, glow::HALF_FLOAT));

        let f = PixelFormat::RGB32F.gl_format();
        assert_eq!((f.internal_format, f.format, f.data_type), (glow::RGB32F, glow::RGB, glow::FLOAT));

        let f = PixelFormat::RGBA16F.gl_format();
        assert_eq!(f.format, glow::RGBA);
    }

    #[test]
    fn test_external_format_follows_integer_flag() {
        for format in PixelFormat::ALL {
            let external = format.gl_format().format;
            let is_integer_external = matches!(
                external,
                glow::RED_INTEGER | glow::RG_INTEGER | glow::RGB_INTEGER | glow::RGBA_INTEGER
            );
            assert_eq!(is_integer_external, format.is_integer(), "{format:?}");
        }
    }

    #[test]
    fn test_bytes_per_pixel() {
        assert_eq!(PixelFormat::R8UI.bytes_per_pixel(), 1);
        assert_eq!(PixelFormat::RG16F.bytes_per_pixel(), 4);
        assert_eq!(PixelFormat::RGB8I.bytes_per_pixel(), 3);
        assert_eq!(PixelFormat::RGBA32F.bytes_per_pixel(), 16);
    }

    #[test]
    fn test_texture_data_validation() {
        assert!(validate_texture_data(PixelFormat::RGBA8UI, 2, 2, Some(&[0; 16])).is_ok());
        assert!(validate_texture_data(PixelFormat::RGBA8UI, 2, 2, None).is_ok());
        assert!(matches!(
            validate_texture_data(PixelFormat::RGBA8UI, 2, 2, Some(&[0; 15])),
            Err(Error::Resource(_))
        ));
        assert!(matches!(
            validate_texture_data(PixelFormat::R32F, 0, 4, None),
            Err(Error::Resource(_))
        ));
    }
}
