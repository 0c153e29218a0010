use std::{fmt, str::FromStr};

use crate::error::LayoutError;

/// Scalar representation of a single vertex attribute component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum ScalarKind {
    /// Signed 8-bit integer.
    I8,
    /// Signed 16-bit integer.
    I16,
    /// Signed 32-bit integer.
    I32,
    /// Unsigned 8-bit integer.
    U8,
    /// Unsigned 16-bit integer.
    U16,
    /// Unsigned 32-bit integer.
    U32,
    /// IEEE 754 half-precision float.
    F16,
    /// IEEE 754 single-precision float.
    F32,
}

impl ScalarKind {
    /// Byte width of one component.
    pub const fn byte_width(self) -> u32 {
        match self {
            Self::I8 | Self::U8 => 1,
            Self::I16 | Self::U16 | Self::F16 => 2,
            Self::I32 | Self::U32 | Self::F32 => 4,
        }
    }

    /// Whether attributes of this kind are bound as integer data rather
    /// than converted to floating point.
    pub const fn is_integral(self) -> bool {
        !matches!(self, Self::F16 | Self::F32)
    }

    /// Canonical lowercase name, e.g. `u16`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::F16 => "f16",
            Self::F32 => "f32",
        }
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Static description of an [`ElementType`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeDescriptor {
    /// Total byte size of one instance.
    pub size: u32,
    /// Required byte alignment; the width of a single scalar component,
    /// not of the whole vector.
    pub alignment: u32,
    /// Number of scalar components, 1 to 4.
    pub component_count: u32,
    /// Whether the element must be bound as integer data.
    pub is_integral: bool,
    /// Scalar kind of each component.
    pub scalar: ScalarKind,
}

impl TypeDescriptor {
    const fn new(component_count: u32, scalar: ScalarKind) -> Self {
        Self {
            size: component_count * scalar.byte_width(),
            alignment: scalar.byte_width(),
            component_count,
            is_integral: scalar.is_integral(),
            scalar,
        }
    }
}

/// One field of an interleaved vertex record.
///
/// Variants are ordered by component count, then by scalar kind in the
/// order `i8, u8, i16, u16, i32, u32, f16, f32`. The discriminant doubles
/// as the index into the descriptor table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
#[repr(u8)]
pub enum ElementType {
    /// Single `i8`.
    I8,
    /// Single `u8`.
    U8,
    /// Single `i16`.
    I16,
    /// Single `u16`.
    U16,
    /// Single `i32`.
    I32,
    /// Single `u32`.
    U32,
    /// Single half-float.
    F16,
    /// Single `f32`.
    F32,

    /// 2 × `i8`.
    Vec2I8,
    /// 2 × `u8`.
    Vec2U8,
    /// 2 × `i16`.
    Vec2I16,
    /// 2 × `u16`.
    Vec2U16,
    /// 2 × `i32`.
    Vec2I32,
    /// 2 × `u32`.
    Vec2U32,
    /// 2 × half-float.
    Vec2F16,
    /// 2 × `f32`.
    Vec2F32,

    /// 3 × `i8`.
    Vec3I8,
    /// 3 × `u8`.
    Vec3U8,
    /// 3 × `i16`.
    Vec3I16,
    /// 3 × `u16`.
    Vec3U16,
    /// 3 × `i32`.
    Vec3I32,
    /// 3 × `u32`.
    Vec3U32,
    /// 3 × half-float.
    Vec3F16,
    /// 3 × `f32`.
    Vec3F32,

    /// 4 × `i8`.
    Vec4I8,
    /// 4 × `u8`.
    Vec4U8,
    /// 4 × `i16`.
    Vec4I16,
    /// 4 × `u16`.
    Vec4U16,
    /// 4 × `i32`.
    Vec4I32,
    /// 4 × `u32`.
    Vec4U32,
    /// 4 × half-float.
    Vec4F16,
    /// 4 × `f32`.
    Vec4F32,
}

use ScalarKind as S;

#[rustfmt::skip]
static DESCRIPTORS: [TypeDescriptor; ElementType::COUNT] = [
    TypeDescriptor::new(1, S::I8),  TypeDescriptor::new(1, S::U8),
    TypeDescriptor::new(1, S::I16), TypeDescriptor::new(1, S::U16),
    TypeDescriptor::new(1, S::I32), TypeDescriptor::new(1, S::U32),
    TypeDescriptor::new(1, S::F16), TypeDescriptor::new(1, S::F32),

    TypeDescriptor::new(2, S::I8),  TypeDescriptor::new(2, S::U8),
    TypeDescriptor::new(2, S::I16), TypeDescriptor::new(2, S::U16),
    TypeDescriptor::new(2, S::I32), TypeDescriptor::new(2, S::U32),
    TypeDescriptor::new(2, S::F16), TypeDescriptor::new(2, S::F32),

    TypeDescriptor::new(3, S::I8),  TypeDescriptor::new(3, S::U8),
    TypeDescriptor::new(3, S::I16), TypeDescriptor::new(3, S::U16),
    TypeDescriptor::new(3, S::I32), TypeDescriptor::new(3, S::U32),
    TypeDescriptor::new(3, S::F16), TypeDescriptor::new(3, S::F32),

    TypeDescriptor::new(4, S::I8),  TypeDescriptor::new(4, S::U8),
    TypeDescriptor::new(4, S::I16), TypeDescriptor::new(4, S::U16),
    TypeDescriptor::new(4, S::I32), TypeDescriptor::new(4, S::U32),
    TypeDescriptor::new(4, S::F16), TypeDescriptor::new(4, S::F32),
];

#[rustfmt::skip]
const NAMES: [&str; ElementType::COUNT] = [
    "i8", "u8", "i16", "u16", "i32", "u32", "f16", "f32",
    "vec2_i8", "vec2_u8", "vec2_i16", "vec2_u16", "vec2_i32", "vec2_u32", "vec2_f16", "vec2_f32",
    "vec3_i8", "vec3_u8", "vec3_i16", "vec3_u16", "vec3_i32", "vec3_u32", "vec3_f16", "vec3_f32",
    "vec4_i8", "vec4_u8", "vec4_i16", "vec4_u16", "vec4_i32", "vec4_u32", "vec4_f16", "vec4_f32",
];

impl ElementType {
    /// Number of element types.
    pub const COUNT: usize = 32;

    /// Every element type, in discriminant order.
    #[rustfmt::skip]
    pub const ALL: [ElementType; Self::COUNT] = {
        use ElementType::*;
        [
            I8, U8, I16, U16, I32, U32, F16, F32,
            Vec2I8, Vec2U8, Vec2I16, Vec2U16, Vec2I32, Vec2U32, Vec2F16, Vec2F32,
            Vec3I8, Vec3U8, Vec3I16, Vec3U16, Vec3I32, Vec3U32, Vec3F16, Vec3F32,
            Vec4I8, Vec4U8, Vec4I16, Vec4U16, Vec4I32, Vec4U32, Vec4F16, Vec4F32,
        ]
    };

    /// Returns the static descriptor for this element type.
    #[inline]
    pub const fn descriptor(self) -> &'static TypeDescriptor {
        &DESCRIPTORS[self as usize]
    }

    /// Byte size of one instance.
    #[inline]
    pub const fn size(self) -> u32 {
        self.descriptor().size
    }

    /// Required byte alignment, the width of one component.
    #[inline]
    pub const fn alignment(self) -> u32 {
        self.descriptor().alignment
    }

    /// Number of scalar components, 1 to 4.
    #[inline]
    pub const fn component_count(self) -> u32 {
        self.descriptor().component_count
    }

    /// Whether the element is bound as integer data.
    #[inline]
    pub const fn is_integral(self) -> bool {
        self.descriptor().is_integral
    }

    /// Scalar kind of each component.
    #[inline]
    pub const fn scalar(self) -> ScalarKind {
        self.descriptor().scalar
    }

    /// Canonical lowercase name, e.g. `vec3_f32`.
    pub const fn name(self) -> &'static str {
        NAMES[self as usize]
    }
}

impl TryFrom<u32> for ElementType {
    type Error = LayoutError;

    fn try_from(ordinal: u32) -> Result<Self, Self::Error> {
        Self::ALL
            .get(ordinal as usize)
            .copied()
            .ok_or_else(|| LayoutError::unknown_ordinal(ordinal))
    }
}

impl TryFrom<u8> for ElementType {
    type Error = LayoutError;

    fn try_from(ordinal: u8) -> Result<Self, Self::Error> {
        Self::try_from(u32::from(ordinal))
    }
}

impl FromStr for ElementType {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        NAMES
            .iter()
            .position(|name| name.eq_ignore_ascii_case(needle))
            .map(|idx| Self::ALL[idx])
            .ok_or_else(|| LayoutError::unknown_name(s))
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_covers_all_combinations() {
        let mut seen = std::collections::HashSet::new();
        for ty in ElementType::ALL {
            assert!(seen.insert((ty.component_count(), ty.scalar())));
        }
        assert_eq!(seen.len(), 4 * 8);
    }

    #[test]
    fn test_all_matches_discriminants() {
        for (idx, ty) in ElementType::ALL.iter().enumerate() {
            assert_eq!(*ty as usize, idx, "{ty} out of place");
        }
    }

    #[test]
    fn test_accessors_in_const_context() {
        const POSITION: TypeDescriptor = *ElementType::Vec3F32.descriptor();
        const STRIDE: u32 = ElementType::Vec3F32.size() + ElementType::Vec2F16.size();
        const COLOR: &str = ElementType::Vec4U8.name();

        assert_eq!(POSITION, TypeDescriptor::new(3, ScalarKind::F32));
        assert_eq!(STRIDE, 16);
        assert_eq!(COLOR, "vec4_u8");
        assert_eq!(ElementType::Vec4U8.scalar(), ScalarKind::U8);
    }

    #[test]
    fn test_descriptor_values() {
        let d = ElementType::Vec3F32.descriptor();
        assert_eq!(d.size, 12);
        assert_eq!(d.alignment, 4);
        assert_eq!(d.component_count, 3);
        assert!(!d.is_integral);
        assert_eq!(d.scalar, ScalarKind::F32);

        let d = ElementType::Vec2U16.descriptor();
        assert_eq!((d.size, d.alignment, d.component_count), (4, 2, 2));
        assert!(d.is_integral);

        let d = ElementType::I8.descriptor();
        assert_eq!((d.size, d.alignment, d.component_count), (1, 1, 1));
        assert!(d.is_integral);

        let d = ElementType::Vec4F16.descriptor();
        assert_eq!((d.size, d.alignment, d.component_count), (8, 2, 4));
        assert!(!d.is_integral);
    }

    #[test]
    fn test_alignment_is_component_width() {
        for ty in ElementType::ALL {
            assert_eq!(ty.alignment(), ty.scalar().byte_width());
            assert_eq!(ty.size(), ty.alignment() * ty.component_count());
        }
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("vec3_f32".parse::<ElementType>().unwrap(), ElementType::Vec3F32);
        assert_eq!("I8".parse::<ElementType>().unwrap(), ElementType::I8);
        assert_eq!(" Vec2_U16 ".parse::<ElementType>().unwrap(), ElementType::Vec2U16);

        for ty in ElementType::ALL {
            assert_eq!(ty.to_string().parse::<ElementType>().unwrap(), ty);
        }
    }

    #[test]
    fn test_parse_unknown_name() {
        let err = "vec5_f32".parse::<ElementType>().unwrap_err();
        assert!(matches!(err, LayoutError::UnknownElementType(_)));
        assert!(err.to_string().contains("vec5_f32"));
    }

    #[test]
    fn test_ordinal_conversion() {
        assert_eq!(ElementType::try_from(0u32).unwrap(), ElementType::I8);
        assert_eq!(ElementType::try_from(31u8).unwrap(), ElementType::Vec4F32);
        assert!(ElementType::try_from(32u32).is_err());
        assert!(ElementType::try_from(u8::MAX).is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_uses_canonical_names() {
        for ty in ElementType::ALL {
            let json = serde_json::to_string(&ty).unwrap();
            assert_eq!(json, format!("\"{}\"", ty.name()));
        }
    }
}
