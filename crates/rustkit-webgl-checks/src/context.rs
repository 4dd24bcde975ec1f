//! Rendering context checks.
//!
//! A context is recognized either by its nominal version tag or by a
//! marker constant only that version defines, so wrapped and proxied
//! contexts pass even when their tag is missing or stale.

use std::collections::HashMap;

use tracing::debug;

use crate::catalog::{constants, Catalog, GLenum, WebGLVersion};
use crate::error::{Result, Violation, WebGLCheckError};

const ERR_CONTEXT: &str = "Invalid rendering context";
const ERR_WEBGL2: &str = "Requires version-2 context";

/// Capability probe over an opaque rendering context.
pub trait ContextProbe {
    /// Nominal version tag, when the object knows what it is.
    fn context_version(&self) -> Option<WebGLVersion> {
        None
    }

    /// Constant exposed by the object under `name`.
    fn constant(&self, name: &str) -> Option<GLenum>;
}

impl<T: ContextProbe + ?Sized> ContextProbe for &T {
    fn context_version(&self) -> Option<WebGLVersion> {
        (**self).context_version()
    }

    fn constant(&self, name: &str) -> Option<GLenum> {
        (**self).constant(name)
    }
}

impl<T: ContextProbe> ContextProbe for Option<T> {
    fn context_version(&self) -> Option<WebGLVersion> {
        self.as_ref().and_then(|ctx| ctx.context_version())
    }

    fn constant(&self, name: &str) -> Option<GLenum> {
        self.as_ref().and_then(|ctx| ctx.constant(name))
    }
}

impl ContextProbe for Catalog {
    fn constant(&self, name: &str) -> Option<GLenum> {
        self.get(name)
    }
}

impl ContextProbe for HashMap<String, GLenum> {
    fn constant(&self, name: &str) -> Option<GLenum> {
        self.get(name).copied()
    }
}

fn has_marker<C: ContextProbe + ?Sized>(gl: &C, name: &str, value: GLenum) -> bool {
    let matched = gl.constant(name) == Some(value);
    debug!("Probed {} marker: {}", name, matched);
    matched
}

/// Whether `gl` is a WebGL rendering context (WebGL 2 contexts included).
pub fn is_webgl_context<C: ContextProbe + ?Sized>(gl: &C) -> bool {
    gl.context_version().is_some() || has_marker(gl, "ARRAY_BUFFER", constants::ARRAY_BUFFER)
}

/// Whether `gl` is a WebGL 2 rendering context.
pub fn is_webgl2_context<C: ContextProbe + ?Sized>(gl: &C) -> bool {
    gl.context_version() == Some(WebGLVersion::WebGL2)
        || has_marker(gl, "TEXTURE_BINDING_3D", constants::TEXTURE_BINDING_3D)
}

pub fn assert_webgl_context<C: ContextProbe + ?Sized>(gl: &C) -> Result<()> {
    if is_webgl_context(gl) {
        Ok(())
    } else {
        Err(WebGLCheckError::validation(Violation::Context, ERR_CONTEXT))
    }
}

pub fn assert_webgl2_context<C: ContextProbe + ?Sized>(gl: &C) -> Result<()> {
    if is_webgl2_context(gl) {
        Ok(())
    } else {
        Err(WebGLCheckError::validation(Violation::WebGL2Context, ERR_WEBGL2))
    }
}
