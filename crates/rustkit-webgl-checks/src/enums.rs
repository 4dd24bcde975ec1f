//! Enumeration checks for draw-call parameters.
//!
//! Each [`EnumCategory`] declares its member symbols by name. A [`Checker`]
//! resolves those names against one catalog, so a WebGL 1 checker simply
//! validates a smaller set of buffer targets and usages.

use lazy_static::lazy_static;
use tracing::{debug, trace};

use crate::arrays::{type_from_array, TypedArray};
use crate::catalog::{Catalog, GLenum, WebGLVersion};
use crate::error::{Result, Violation, WebGLCheckError};

// ==================== Categories ====================

/// A family of GL enumeration values accepted by one parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnumCategory {
    /// Size of indices for drawElements.
    IndexType,
    /// Primitive topology.
    DrawMode,
    /// Buffer binding point.
    BufferTarget,
    /// Buffer access pattern hint.
    BufferUsage,
}

impl EnumCategory {
    pub const ALL: [EnumCategory; 4] = [
        EnumCategory::IndexType,
        EnumCategory::DrawMode,
        EnumCategory::BufferTarget,
        EnumCategory::BufferUsage,
    ];

    /// Human-readable name used in diagnostics.
    pub fn label(&self) -> &'static str {
        match self {
            EnumCategory::IndexType => "index type",
            EnumCategory::DrawMode => "draw mode",
            EnumCategory::BufferTarget => "buffer target",
            EnumCategory::BufferUsage => "buffer usage",
        }
    }

    /// Member symbols, WebGL 2 only names included.
    pub fn symbols(&self) -> &'static [&'static str] {
        match self {
            EnumCategory::IndexType => &["UNSIGNED_BYTE", "UNSIGNED_SHORT", "UNSIGNED_INT"],
            EnumCategory::DrawMode => &[
                "POINTS",
                "LINE_STRIP",
                "LINE_LOOP",
                "LINES",
                "TRIANGLE_STRIP",
                "TRIANGLE_FAN",
                "TRIANGLES",
            ],
            EnumCategory::BufferTarget => &[
                "ARRAY_BUFFER",         // vertex attributes
                "ELEMENT_ARRAY_BUFFER", // element indices
                // WebGL 2
                "COPY_READ_BUFFER",
                "COPY_WRITE_BUFFER",
                "TRANSFORM_FEEDBACK_BUFFER",
                "UNIFORM_BUFFER",
                "PIXEL_PACK_BUFFER",
                "PIXEL_UNPACK_BUFFER",
            ],
            EnumCategory::BufferUsage => &[
                "STATIC_DRAW",
                "DYNAMIC_DRAW",
                "STREAM_DRAW",
                // WebGL 2
                "STATIC_READ",
                "DYNAMIC_READ",
                "STREAM_READ",
                "STATIC_COPY",
                "DYNAMIC_COPY",
                "STREAM_COPY",
            ],
        }
    }

    /// Buffer tables drop symbols the catalog leaves undefined or zero.
    fn drops_zero(&self) -> bool {
        matches!(self, EnumCategory::BufferTarget | EnumCategory::BufferUsage)
    }

    fn violation(&self) -> Violation {
        match self {
            EnumCategory::IndexType => Violation::IndexType,
            EnumCategory::DrawMode => Violation::DrawMode,
            EnumCategory::BufferTarget => Violation::BufferTarget,
            EnumCategory::BufferUsage => Violation::BufferUsage,
        }
    }
}

// ==================== Checker ====================

/// Category tables resolved against one catalog.
#[derive(Debug, Clone)]
pub struct Checker {
    catalog: Catalog,
    index_types: Vec<GLenum>,
    draw_modes: Vec<GLenum>,
    buffer_targets: Vec<GLenum>,
    buffer_usages: Vec<GLenum>,
}

impl Checker {
    pub fn new(catalog: Catalog) -> Self {
        let index_types = build_table(&catalog, EnumCategory::IndexType);
        let draw_modes = build_table(&catalog, EnumCategory::DrawMode);
        let buffer_targets = build_table(&catalog, EnumCategory::BufferTarget);
        let buffer_usages = build_table(&catalog, EnumCategory::BufferUsage);

        trace!(
            "Built {} tables: {} index types, {} draw modes, {} targets, {} usages",
            catalog.version(),
            index_types.len(),
            draw_modes.len(),
            buffer_targets.len(),
            buffer_usages.len()
        );

        Self {
            catalog,
            index_types,
            draw_modes,
            buffer_targets,
            buffer_usages,
        }
    }

    pub fn for_version(version: WebGLVersion) -> Self {
        Self::new(Catalog::for_version(version))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Valid values of `category`.
    pub fn table(&self, category: EnumCategory) -> &[GLenum] {
        match category {
            EnumCategory::IndexType => &self.index_types,
            EnumCategory::DrawMode => &self.draw_modes,
            EnumCategory::BufferTarget => &self.buffer_targets,
            EnumCategory::BufferUsage => &self.buffer_usages,
        }
    }

    /// Symbolic name of `value`, or its decimal form.
    pub fn gl_key(&self, value: GLenum) -> String {
        self.catalog.key(value)
    }

    pub fn is_member(&self, category: EnumCategory, value: GLenum) -> bool {
        self.table(category).contains(&value)
    }

    /// Fails with `Bad <category> gl.<KEY> <source>` when `value` is not a member.
    pub fn assert_member(&self, category: EnumCategory, value: GLenum, source: &str) -> Result<()> {
        if self.is_member(category, value) {
            return Ok(());
        }

        let key = self.gl_key(value);
        debug!("Rejected {} gl.{} from {}", category.label(), key, source);
        Err(WebGLCheckError::validation(
            category.violation(),
            format!("Bad {} gl.{} {}", category.label(), key, source),
        ))
    }

    pub fn is_index_type(&self, value: GLenum) -> bool {
        self.is_member(EnumCategory::IndexType, value)
    }

    pub fn assert_index_type(&self, value: GLenum, source: &str) -> Result<()> {
        self.assert_member(EnumCategory::IndexType, value, source)
    }

    pub fn is_draw_mode(&self, value: GLenum) -> bool {
        self.is_member(EnumCategory::DrawMode, value)
    }

    pub fn assert_draw_mode(&self, value: GLenum, source: &str) -> Result<()> {
        self.assert_member(EnumCategory::DrawMode, value, source)
    }

    pub fn is_buffer_target(&self, value: GLenum) -> bool {
        self.is_member(EnumCategory::BufferTarget, value)
    }

    pub fn assert_buffer_target(&self, value: GLenum, source: &str) -> Result<()> {
        self.assert_member(EnumCategory::BufferTarget, value, source)
    }

    pub fn is_buffer_usage(&self, value: GLenum) -> bool {
        self.is_member(EnumCategory::BufferUsage, value)
    }

    pub fn assert_buffer_usage(&self, value: GLenum, source: &str) -> Result<()> {
        self.assert_member(EnumCategory::BufferUsage, value, source)
    }

    /// Fails when the element type of `array` is not `gl_type`.
    ///
    /// Arrays with no GL element type fail with
    /// [`WebGLCheckError::UnsupportedType`] before the comparison.
    pub fn assert_array_type_matches<A: TypedArray + ?Sized>(
        &self,
        array: &A,
        gl_type: GLenum,
        source: &str,
    ) -> Result<()> {
        if type_from_array(array)? == gl_type {
            return Ok(());
        }

        let key = self.gl_key(gl_type);
        debug!("Rejected {} for gl.{} from {}", array.kind().name(), key, source);
        Err(WebGLCheckError::validation(
            Violation::ArrayType,
            format!(
                "{} does not match element type gl.{} {}",
                array.kind().name(),
                key,
                source
            ),
        ))
    }
}

impl Default for Checker {
    fn default() -> Self {
        Self::new(Catalog::default())
    }
}

fn build_table(catalog: &Catalog, category: EnumCategory) -> Vec<GLenum> {
    category
        .symbols()
        .iter()
        .filter_map(|name| catalog.get(name))
        .filter(|&value| !category.drops_zero() || value != 0)
        .collect()
}

// ==================== Shared checker ====================

lazy_static! {
    static ref GLOBAL: Checker = Checker::default();
}

/// The process-wide WebGL 2 checker.
pub fn global() -> &'static Checker {
    &GLOBAL
}

pub fn gl_key(value: GLenum) -> String {
    global().gl_key(value)
}

pub fn index_types() -> &'static [GLenum] {
    global().table(EnumCategory::IndexType)
}

pub fn draw_modes() -> &'static [GLenum] {
    global().table(EnumCategory::DrawMode)
}

pub fn buffer_targets() -> &'static [GLenum] {
    global().table(EnumCategory::BufferTarget)
}

pub fn buffer_usages() -> &'static [GLenum] {
    global().table(EnumCategory::BufferUsage)
}

pub fn is_index_type(value: GLenum) -> bool {
    global().is_index_type(value)
}

pub fn assert_index_type(value: GLenum, source: &str) -> Result<()> {
    global().assert_index_type(value, source)
}

pub fn is_draw_mode(value: GLenum) -> bool {
    global().is_draw_mode(value)
}

pub fn assert_draw_mode(value: GLenum, source: &str) -> Result<()> {
    global().assert_draw_mode(value, source)
}

pub fn is_buffer_target(value: GLenum) -> bool {
    global().is_buffer_target(value)
}

pub fn assert_buffer_target(value: GLenum, source: &str) -> Result<()> {
    global().assert_buffer_target(value, source)
}

pub fn is_buffer_usage(value: GLenum) -> bool {
    global().is_buffer_usage(value)
}

pub fn assert_buffer_usage(value: GLenum, source: &str) -> Result<()> {
    global().assert_buffer_usage(value, source)
}

pub fn assert_array_type_matches<A: TypedArray + ?Sized>(
    array: &A,
    gl_type: GLenum,
    source: &str,
) -> Result<()> {
    global().assert_array_type_matches(array, gl_type, source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arrays::Clamped;
    use crate::catalog::constants;

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }

    #[test]
    fn test_draw_modes() {
        assert!(is_draw_mode(constants::TRIANGLES));
        assert!(is_draw_mode(constants::POINTS));
        assert!(!is_draw_mode(constants::ARRAY_BUFFER));
        assert_eq!(draw_modes().len(), 7);
    }

    #[test]
    fn test_assert_draw_mode_message() {
        init_tracing();
        assert!(assert_draw_mode(constants::LINES, "draw()").is_ok());

        let err = assert_draw_mode(constants::ARRAY_BUFFER, "draw()").unwrap_err();
        assert_eq!(err.to_string(), "Bad draw mode gl.ARRAY_BUFFER draw()");
        assert_eq!(err.violation(), Some(Violation::DrawMode));
    }

    #[test]
    fn test_assert_uses_decimal_for_unknown_values() {
        let err = assert_index_type(12345, "Model.render").unwrap_err();
        assert_eq!(err.to_string(), "Bad index type gl.12345 Model.render");
    }

    #[test]
    fn test_index_types() {
        assert!(is_index_type(constants::UNSIGNED_BYTE));
        assert!(is_index_type(constants::UNSIGNED_SHORT));
        assert!(is_index_type(constants::UNSIGNED_INT));
        assert!(!is_index_type(constants::FLOAT));
        assert_eq!(
            index_types(),
            &[constants::UNSIGNED_BYTE, constants::UNSIGNED_SHORT, constants::UNSIGNED_INT]
        );

        let err = assert_index_type(constants::FLOAT, "drawElements").unwrap_err();
        assert_eq!(err.to_string(), "Bad index type gl.FLOAT drawElements");
    }

    #[test]
    fn test_every_table_member_is_accepted() {
        let checker = global();
        for category in EnumCategory::ALL {
            for &value in checker.table(category) {
                assert!(checker.is_member(category, value));
                assert!(checker.assert_member(category, value, "test").is_ok());
            }
        }
    }

    #[test]
    fn test_categories_do_not_overlap() {
        assert!(!is_buffer_target(constants::STATIC_DRAW));
        assert!(!is_buffer_usage(constants::ARRAY_BUFFER));
        assert!(!is_index_type(constants::TRIANGLES));
        assert!(!is_draw_mode(constants::UNSIGNED_BYTE));
    }

    #[test]
    fn test_buffer_tables_webgl2() {
        assert_eq!(buffer_targets().len(), 8);
        assert_eq!(buffer_usages().len(), 9);
        assert!(is_buffer_target(constants::UNIFORM_BUFFER));
        assert!(is_buffer_usage(constants::DYNAMIC_COPY));

        let err = assert_buffer_usage(constants::TRIANGLES, "Buffer.setData").unwrap_err();
        assert_eq!(err.to_string(), "Bad buffer usage gl.TRIANGLES Buffer.setData");
        assert_eq!(err.violation(), Some(Violation::BufferUsage));
    }

    #[test]
    fn test_buffer_tables_webgl1() {
        let checker = Checker::for_version(WebGLVersion::WebGL1);
        assert_eq!(
            checker.table(EnumCategory::BufferTarget),
            &[constants::ARRAY_BUFFER, constants::ELEMENT_ARRAY_BUFFER]
        );
        assert_eq!(checker.table(EnumCategory::BufferUsage).len(), 3);
        assert!(!checker.is_buffer_target(constants::UNIFORM_BUFFER));

        let err = checker
            .assert_buffer_target(constants::UNIFORM_BUFFER, "Buffer.bind")
            .unwrap_err();
        assert_eq!(err.to_string(), "Bad buffer target gl.35345 Buffer.bind");
    }

    #[test]
    fn test_zero_buffer_values_are_dropped() {
        let catalog = Catalog::new(
            WebGLVersion::WebGL2,
            [("POINTS", 0), ("ARRAY_BUFFER", 0), ("STATIC_DRAW", 0x88E4)],
        );
        let checker = Checker::new(catalog);
        assert_eq!(checker.table(EnumCategory::DrawMode), &[0_u32]);
        assert!(checker.table(EnumCategory::BufferTarget).is_empty());
        assert_eq!(checker.table(EnumCategory::BufferUsage), &[0x88E4_u32]);
    }

    #[test]
    fn test_array_type_matches() {
        init_tracing();
        let data = [1.0_f32, 2.0, 3.0];
        assert!(assert_array_type_matches(&data[..], constants::FLOAT, "Buffer").is_ok());
        let pixels = Clamped(vec![0_u8; 4]);
        assert!(assert_array_type_matches(&pixels, constants::UNSIGNED_BYTE, "Texture").is_ok());

        let err =
            assert_array_type_matches(&data, constants::UNSIGNED_SHORT, "Buffer").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Float32Array does not match element type gl.UNSIGNED_SHORT Buffer"
        );
        assert_eq!(err.violation(), Some(Violation::ArrayType));
    }

    #[test]
    fn test_array_type_unsupported_array() {
        let data = vec![1.0_f64];
        let err = assert_array_type_matches(&data, constants::FLOAT, "Buffer").unwrap_err();
        assert_eq!(err, WebGLCheckError::unsupported("Failed to deduce type from array"));
    }

    #[test]
    fn test_global_key() {
        assert_eq!(gl_key(constants::ELEMENT_ARRAY_BUFFER), "ELEMENT_ARRAY_BUFFER");
        assert_eq!(gl_key(4_000_000), "4000000");
        assert_eq!(global().catalog().version(), WebGLVersion::WebGL2);
    }
}
