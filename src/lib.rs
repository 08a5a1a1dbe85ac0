//! # splinegrid
//!
//! Scanline rasterization of editable quadratic spline outlines.
//!
//! A closed outline is described by an ordered sequence of 2D control
//! points. Even-indexed points lie on the curve, odd-indexed points act as
//! quadratic control handles, and the chain always wraps back to the first
//! point. The rasterizer samples every grid row at its vertical center,
//! solves each segment for x-intercepts, and fills the spans where the
//! nonzero winding count is positive, producing a boolean coverage grid.
//!
//! ## Pipeline
//!
//! 1. **Control points** - the authoritative editable shape, owned by the
//!    [`ctrl::SplineCtrl`] editor (or seeded from a glyph outline).
//! 2. **Spline builder** - rebuilds the segment chain wholesale on every
//!    edit ([`spline`]).
//! 3. **Row solver** - per-row x-intercepts with slope-sign tags
//!    ([`intercept`]).
//! 4. **Rasterizer** - winding sweep and span fill into the coverage grid
//!    ([`rasterizer_scanline_nz`], [`coverage_grid`]).
//!
//! Windowing, input polling, and drawing stay with the host: the editor
//! takes already-decoded pointer state, and the renderer reads the grid plus
//! the editor's marker rectangles.

// Foundation types
pub mod basics;

// Outline geometry
pub mod spline;

// Scanline rasterizer
pub mod coverage_grid;
pub mod intercept;
pub mod rasterizer_scanline_nz;

// Interactive editing
pub mod ctrl;

// Optional: TrueType glyph outlines as control-point seeds
#[cfg(feature = "font")]
pub mod glyph_source;
