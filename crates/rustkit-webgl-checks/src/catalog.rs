//! WebGL constant catalogs.
//!
//! A [`Catalog`] is the ordered table of symbolic names and values a
//! rendering context exposes. The WebGL 2 catalog is a superset of the
//! WebGL 1 catalog, so code written against names works unchanged on
//! either and simply sees fewer symbols under WebGL 1.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::error::WebGLCheckError;

/// A GL enumeration value.
pub type GLenum = u32;

macro_rules! gl_constants {
    ($table:ident { $($name:ident = $value:expr,)* }) => {
        $(pub const $name: GLenum = $value;)*

        pub(crate) const $table: &[(&str, GLenum)] = &[$((stringify!($name), $name),)*];
    };
}

/// WebGL constants (matches OpenGL ES 2.0 / 3.0).
pub mod constants {
    use super::GLenum;

    gl_constants!(WEBGL1 {
        // Clear bits
        COLOR_BUFFER_BIT = 0x00004000,
        DEPTH_BUFFER_BIT = 0x00000100,
        STENCIL_BUFFER_BIT = 0x00000400,

        // Primitive types
        POINTS = 0x0000,
        LINES = 0x0001,
        LINE_LOOP = 0x0002,
        LINE_STRIP = 0x0003,
        TRIANGLES = 0x0004,
        TRIANGLE_STRIP = 0x0005,
        TRIANGLE_FAN = 0x0006,

        // Buffer types
        ARRAY_BUFFER = 0x8892,
        ELEMENT_ARRAY_BUFFER = 0x8893,
        ARRAY_BUFFER_BINDING = 0x8894,
        ELEMENT_ARRAY_BUFFER_BINDING = 0x8895,

        // Buffer usage
        STREAM_DRAW = 0x88E0,
        STATIC_DRAW = 0x88E4,
        DYNAMIC_DRAW = 0x88E8,
        BUFFER_SIZE = 0x8764,
        BUFFER_USAGE = 0x8765,

        // Data types
        BYTE = 0x1400,
        UNSIGNED_BYTE = 0x1401,
        SHORT = 0x1402,
        UNSIGNED_SHORT = 0x1403,
        INT = 0x1404,
        UNSIGNED_INT = 0x1405,
        FLOAT = 0x1406,

        // Packed pixel types
        UNSIGNED_SHORT_4_4_4_4 = 0x8033,
        UNSIGNED_SHORT_5_5_5_1 = 0x8034,
        UNSIGNED_SHORT_5_6_5 = 0x8363,

        // Shader types
        FRAGMENT_SHADER = 0x8B30,
        VERTEX_SHADER = 0x8B31,

        // Shader parameters
        DELETE_STATUS = 0x8B80,
        COMPILE_STATUS = 0x8B81,
        LINK_STATUS = 0x8B82,

        // Texture targets
        TEXTURE_2D = 0x0DE1,
        TEXTURE_CUBE_MAP = 0x8513,
        TEXTURE_BINDING_2D = 0x8069,

        // Texture parameters
        TEXTURE_MAG_FILTER = 0x2800,
        TEXTURE_MIN_FILTER = 0x2801,
        TEXTURE_WRAP_S = 0x2802,
        TEXTURE_WRAP_T = 0x2803,

        // Texture filter values
        NEAREST = 0x2600,
        LINEAR = 0x2601,
        NEAREST_MIPMAP_NEAREST = 0x2700,
        LINEAR_MIPMAP_NEAREST = 0x2701,
        NEAREST_MIPMAP_LINEAR = 0x2702,
        LINEAR_MIPMAP_LINEAR = 0x2703,

        // Texture wrap values
        REPEAT = 0x2901,
        CLAMP_TO_EDGE = 0x812F,
        MIRRORED_REPEAT = 0x8370,

        // Texture formats
        ALPHA = 0x1906,
        RGB = 0x1907,
        RGBA = 0x1908,
        LUMINANCE = 0x1909,
        LUMINANCE_ALPHA = 0x190A,

        // Blend functions
        ZERO = 0,
        ONE = 1,
        SRC_COLOR = 0x0300,
        ONE_MINUS_SRC_COLOR = 0x0301,
        SRC_ALPHA = 0x0302,
        ONE_MINUS_SRC_ALPHA = 0x0303,
        DST_ALPHA = 0x0304,
        ONE_MINUS_DST_ALPHA = 0x0305,
        DST_COLOR = 0x0306,
        ONE_MINUS_DST_COLOR = 0x0307,

        // Blend equations
        FUNC_ADD = 0x8006,
        FUNC_SUBTRACT = 0x800A,
        FUNC_REVERSE_SUBTRACT = 0x800B,

        // Depth test functions
        NEVER = 0x0200,
        LESS = 0x0201,
        EQUAL = 0x0202,
        LEQUAL = 0x0203,
        GREATER = 0x0204,
        NOTEQUAL = 0x0205,
        GEQUAL = 0x0206,
        ALWAYS = 0x0207,

        // Capabilities
        BLEND = 0x0BE2,
        CULL_FACE = 0x0B44,
        DEPTH_TEST = 0x0B71,
        DITHER = 0x0BD0,
        POLYGON_OFFSET_FILL = 0x8037,
        SAMPLE_ALPHA_TO_COVERAGE = 0x809E,
        SAMPLE_COVERAGE = 0x80A0,
        SCISSOR_TEST = 0x0C11,
        STENCIL_TEST = 0x0B90,

        // Face culling
        FRONT = 0x0404,
        BACK = 0x0405,
        FRONT_AND_BACK = 0x0408,

        // Error codes
        NO_ERROR = 0,
        INVALID_ENUM = 0x0500,
        INVALID_VALUE = 0x0501,
        INVALID_OPERATION = 0x0502,
        OUT_OF_MEMORY = 0x0505,

        // Framebuffer
        FRAMEBUFFER = 0x8D40,
        RENDERBUFFER = 0x8D41,
        COLOR_ATTACHMENT0 = 0x8CE0,
        DEPTH_ATTACHMENT = 0x8D00,
        STENCIL_ATTACHMENT = 0x8D20,
        DEPTH_STENCIL_ATTACHMENT = 0x821A,
        FRAMEBUFFER_COMPLETE = 0x8CD5,
    });

    gl_constants!(WEBGL2 {
        // Buffer targets
        COPY_READ_BUFFER = 0x8F36,
        COPY_WRITE_BUFFER = 0x8F37,
        TRANSFORM_FEEDBACK_BUFFER = 0x8C8E,
        UNIFORM_BUFFER = 0x8A11,
        PIXEL_PACK_BUFFER = 0x88EB,
        PIXEL_UNPACK_BUFFER = 0x88EC,

        // Buffer usage
        STREAM_READ = 0x88E1,
        STREAM_COPY = 0x88E2,
        STATIC_READ = 0x88E5,
        STATIC_COPY = 0x88E6,
        DYNAMIC_READ = 0x88E9,
        DYNAMIC_COPY = 0x88EA,

        // Data types
        HALF_FLOAT = 0x140B,
        UNSIGNED_INT_2_10_10_10_REV = 0x8368,
        UNSIGNED_INT_10F_11F_11F_REV = 0x8C3B,
        UNSIGNED_INT_5_9_9_9_REV = 0x8C3E,
        UNSIGNED_INT_24_8 = 0x84FA,

        // Texture targets
        TEXTURE_3D = 0x806F,
        TEXTURE_2D_ARRAY = 0x8C1A,
        TEXTURE_BINDING_3D = 0x806A,
        TEXTURE_BINDING_2D_ARRAY = 0x8C1D,

        // Texture formats
        RED = 0x1903,
        RG = 0x8227,
        R8 = 0x8229,
        RG8 = 0x822B,
        RGBA8 = 0x8058,
    });
}

// ==================== Version ====================

/// WebGL API version a catalog or context belongs to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum WebGLVersion {
    WebGL1,
    #[default]
    WebGL2,
}

impl fmt::Display for WebGLVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WebGLVersion::WebGL1 => write!(f, "webgl"),
            WebGLVersion::WebGL2 => write!(f, "webgl2"),
        }
    }
}

impl FromStr for WebGLVersion {
    type Err = WebGLCheckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "webgl" | "webgl1" | "1" => Ok(WebGLVersion::WebGL1),
            "webgl2" | "2" => Ok(WebGLVersion::WebGL2),
            other => Err(WebGLCheckError::unsupported(format!(
                "Unknown WebGL version '{}'",
                other
            ))),
        }
    }
}

// ==================== Catalog ====================

/// Ordered symbolic name to value table.
#[derive(Debug, Clone)]
pub struct Catalog {
    version: WebGLVersion,
    entries: Vec<(&'static str, GLenum)>,
    values: HashMap<&'static str, GLenum>,
    names: HashMap<GLenum, &'static str>,
}

impl Catalog {
    /// Build a catalog from entries in declaration order.
    ///
    /// When several names share a value, the first declared name is the
    /// one [`Catalog::name_of`] reports.
    pub fn new(
        version: WebGLVersion,
        entries: impl IntoIterator<Item = (&'static str, GLenum)>,
    ) -> Self {
        let entries: Vec<_> = entries.into_iter().collect();
        let mut values = HashMap::with_capacity(entries.len());
        let mut names = HashMap::with_capacity(entries.len());

        for &(name, value) in &entries {
            values.entry(name).or_insert(value);
            names.entry(value).or_insert(name);
        }

        Self {
            version,
            entries,
            values,
            names,
        }
    }

    /// The WebGL 1 catalog.
    pub fn webgl1() -> Self {
        Self::new(WebGLVersion::WebGL1, constants::WEBGL1.iter().copied())
    }

    /// The WebGL 2 catalog (WebGL 1 plus the version 2 symbols).
    pub fn webgl2() -> Self {
        Self::new(
            WebGLVersion::WebGL2,
            constants::WEBGL1
                .iter()
                .chain(constants::WEBGL2.iter())
                .copied(),
        )
    }

    pub fn for_version(version: WebGLVersion) -> Self {
        match version {
            WebGLVersion::WebGL1 => Self::webgl1(),
            WebGLVersion::WebGL2 => Self::webgl2(),
        }
    }

    pub fn version(&self) -> WebGLVersion {
        self.version
    }

    /// Entries in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, GLenum)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a constant by symbolic name.
    pub fn get(&self, name: &str) -> Option<GLenum> {
        self.values.get(name).copied()
    }

    /// Reverse lookup of a value's symbolic name.
    pub fn name_of(&self, value: GLenum) -> Option<&'static str> {
        self.names.get(&value).copied()
    }

    /// Symbolic name of `value`, or its decimal form when no symbol matches.
    pub fn key(&self, value: GLenum) -> String {
        match self.name_of(value) {
            Some(name) => name.to_string(),
            None => value.to_string(),
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::for_version(WebGLVersion::default())
    }
}
