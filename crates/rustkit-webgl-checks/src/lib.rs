//! # RustKit WebGL Checks
//!
//! Parameter validation and constant lookup for the RustKit WebGL API.
//!
//! ## Features
//!
//! - **Context checks**: Recognize WebGL 1 and WebGL 2 contexts, including
//!   wrapped contexts that only expose their constants
//! - **Enum checks**: Index types, draw modes, buffer targets, buffer usage
//! - **Typed arrays**: GL element type from array storage and back
//! - **Constant names**: Reverse lookup for readable diagnostics
//!
//! ## Architecture
//!
//! ```text
//! Catalog (WebGL 1 / WebGL 2 names and values)
//!    └── Checker
//!           ├── Category tables
//!           └── Diagnostics (gl_key)
//! ```
//!
//! The free functions use a shared WebGL 2 [`Checker`]. Build a checker for
//! [`WebGLVersion::WebGL1`] to validate against the smaller catalog.

pub mod arrays;
pub mod catalog;
pub mod context;
pub mod enums;
pub mod error;

pub use arrays::{array_kind_from_type, type_from_array, ArrayKind, Clamped, TypedArray};
pub use catalog::{constants, Catalog, GLenum, WebGLVersion};
pub use context::{
    assert_webgl2_context, assert_webgl_context, is_webgl2_context, is_webgl_context,
    ContextProbe,
};
pub use enums::{
    assert_array_type_matches, assert_buffer_target, assert_buffer_usage, assert_draw_mode,
    assert_index_type, buffer_targets, buffer_usages, draw_modes, gl_key, global, index_types,
    is_buffer_target, is_buffer_usage, is_draw_mode, is_index_type, Checker, EnumCategory,
};
pub use error::{Result, Violation, WebGLCheckError};

#[cfg(test)]
mod tests {
    use super::*;

    struct DrawCall {
        mode: GLenum,
        index_type: GLenum,
        indices: Vec<u16>,
    }

    fn validate(gl: &impl ContextProbe, call: &DrawCall) -> Result<()> {
        assert_webgl_context(gl)?;
        assert_draw_mode(call.mode, "drawElements")?;
        assert_index_type(call.index_type, "drawElements")?;
        assert_array_type_matches(&call.indices, call.index_type, "drawElements")
    }

    #[test]
    fn test_validate_draw_call() {
        let gl = Catalog::webgl1();
        let call = DrawCall {
            mode: constants::TRIANGLES,
            index_type: constants::UNSIGNED_SHORT,
            indices: vec![0, 1, 2],
        };
        assert!(validate(&gl, &call).is_ok());
    }

    #[test]
    fn test_validate_draw_call_errors() {
        let gl = Catalog::webgl1();
        let call = DrawCall {
            mode: constants::TRIANGLES,
            index_type: constants::UNSIGNED_INT,
            indices: vec![0, 1, 2],
        };
        let err = validate(&gl, &call).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Uint16Array does not match element type gl.UNSIGNED_INT drawElements"
        );

        let bad_mode = DrawCall {
            mode: constants::STATIC_DRAW,
            ..call
        };
        let err = validate(&gl, &bad_mode).unwrap_err();
        assert_eq!(err.to_string(), "Bad draw mode gl.STATIC_DRAW drawElements");
    }

    #[test]
    fn test_webgl1_checker_with_webgl2_context() {
        let checker = Checker::for_version(WebGLVersion::WebGL1);
        assert!(assert_webgl2_context(checker.catalog()).is_err());
        assert!(assert_webgl2_context(global().catalog()).is_ok());
    }
}
