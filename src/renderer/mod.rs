//! Rendering abstraction layer.
//!
//! *The caster and projector never touch a pixel buffer.*  They fill a
//! flat [`Column`](crate::engine::Column) buffer and hand it to a type
//! that implements [`Renderer`].  Back-ends are pluggable – the shipped
//! one is a plain CPU rasterizer, a GPU back-end would upload the same
//! columns as vertex data instead.

use crate::engine::projection::Column;

/// Pixel format of the software frame-buffer (0x00RRGGBB).
pub type Rgba = u32;

/// A renderer that owns an internal scratch buffer for the whole frame.
///
/// `end_frame` loans the finished buffer to a user-supplied closure;
/// software callers forward it to their window manager.
pub trait Renderer {
    /// (Re)allocate internal scratch for the requested resolution and
    /// clear it.
    fn begin_frame(&mut self, width: usize, height: usize);

    /// Rasterise one frame's worth of wall slices, one per column.
    fn draw_columns(&mut self, cols: &[Column]);

    /// Finish the frame and **loan** the buffer to `submit`.
    ///
    /// `submit(&[Rgba], w, h)` runs exactly once per frame.
    fn end_frame<F>(&mut self, submit: F)
    where
        F: FnOnce(&[Rgba], usize, usize);
}

mod software;

pub use software::Software;
