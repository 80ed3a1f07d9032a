//! Tessellation of font glyph outlines for GPU rendering.
//!
//! This crate converts a TrueType style glyph outline (points, on-curve tags
//! and contour end indices, as produced by FreeType or read from a `glyf`
//! table) into a flat, non-indexed triangle list. The triangles are meant to
//! be drawn with additive blending into a coverage buffer and resolved by a
//! fragment shader, so no rasterization happens on the CPU.
//!
//! Every contour contributes two kinds of triangles:
//!
//! * a fan over the contour's hull polygon (its on-curve points, including
//!   the ones implied between consecutive off-curve points), tagged with the
//!   texture coordinate `(0, 1)` so the shader always treats it as inside;
//! * one triangle per quadratic segment spanning start, control and end
//!   point with the texture coordinates `(0, 0)`, `(0.5, 0)` and `(1, 1)`.
//!   The shader evaluates `u² - v` to cut away the part outside the curve.
//!
//! ```
//! use glyph_mesh::{tessellate, OutlineBuf, TessellateSettings};
//!
//! let mut outline = OutlineBuf::new();
//! outline
//!     .on_curve((0.0, 0.0))
//!     .off_curve((50.0, 100.0))
//!     .on_curve((100.0, 0.0))
//!     .close_contour();
//! let result = tessellate(outline.as_ref(), TessellateSettings::default()).unwrap();
//! assert_eq!(result.mesh.triangle_count(), 1);
//! let bytes: &[u8] = result.mesh.as_bytes();
//! assert_eq!(bytes.len(), 3 * 16);
//! ```
//!
//! Tessellation is a pure function of its input. Nothing is cached between
//! calls.

#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(any(feature = "std", test))]
#[macro_use]
extern crate std;

extern crate alloc;

pub mod contour;
pub mod geometry;

mod error;
mod mesh;
mod outline;
mod point;
mod settings;
mod tessellate;

pub use error::{DegenerateReason, Diagnostic, TessellateError};
pub use mesh::{Mesh, Vertex, CURVE_TEX_COORDS, SOLID_TEX_COORD};
pub use outline::{is_on_curve, Contours, OutlineBuf, OutlineRef, RawContour, ON_CURVE};
pub use point::Point;
pub use settings::{FanOrigin, FillMode, TessellateSettings};
pub use tessellate::{tessellate, tessellate_into, Tessellation};
