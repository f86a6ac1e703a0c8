//! Classic software (CPU) column renderer.
//!
//! Fills an `&mut [u32]` frame-buffer in **0x00RRGGBB** format: sky over
//! floor, then one shaded vertical slice per column.  Walls crossed on a
//! horizontal grid line are drawn darker than vertical ones, the cheap
//! two-tone look every flat-shaded raycaster uses; a thin mortar line at
//! the face edges comes from the column's texture offset.

use crate::{
    engine::caster::Side,
    engine::projection::Column,
    renderer::{Renderer, Rgba},
};

const SKY: Rgba = 0x00_303048;
const FLOOR: Rgba = 0x00_282420;

/// Per-label wall tints; label 0 never reaches the rasterizer with a
/// positive height, so slot 0 is just a fallback.
const PALETTE: [Rgba; 10] = [
    0x00_FF00FF, // 0 – should not appear
    0x00_B03A2E,
    0x00_2E86C1,
    0x00_28B463,
    0x00_B7950B,
    0x00_884EA0,
    0x00_17A589,
    0x00_A04000,
    0x00_839192,
    0x00_D0D3D4,
];

/// CPU back-end drawing untextured shaded slices.
#[derive(Default)]
pub struct Software {
    scratch: Vec<Rgba>,
    width: usize,
    height: usize,
}

impl Software {
    #[inline]
    fn shade(col: &Column) -> Rgba {
        let base = PALETTE[col.label as usize % PALETTE.len()];
        let mut c = match col.side {
            Side::X => base,
            Side::Y => halve(base),
        };
        // mortar line at the cell edges
        if col.tex_u < 0.04 || col.tex_u > 0.96 {
            c = halve(c);
        }
        c
    }
}

/// Halve each channel (cheap 50 % darken).
#[inline(always)]
fn halve(c: Rgba) -> Rgba {
    (c >> 1) & 0x00_7F7F7F
}

impl Renderer for Software {
    fn begin_frame(&mut self, w: usize, h: usize) {
        if w != self.width || h != self.height {
            self.width = w;
            self.height = h;
            self.scratch.resize(w * h, 0);
        }

        // sky above the horizon, floor below
        let horizon = h / 2;
        self.scratch[..horizon * w].fill(SKY);
        self.scratch[horizon * w..].fill(FLOOR);
    }

    fn draw_columns(&mut self, cols: &[Column]) {
        let half_h = self.height as f32 * 0.5;
        let n = cols.len().min(self.width);

        for (x, col) in cols.iter().take(n).enumerate() {
            // half_height 1.0 spans the full frame
            let span = col.half_height * half_h;
            let top = (half_h - span).max(0.0) as usize;
            let bot = (half_h + span).min(self.height as f32) as usize;
            if top >= bot {
                continue; // miss column or degenerate slice
            }

            let shade = Self::shade(col);
            for y in top..bot {
                self.scratch[y * self.width + x] = shade;
            }
        }
    }

    fn end_frame<F>(&mut self, submit: F)
    where
        F: FnOnce(&[Rgba], usize, usize),
    {
        submit(&self.scratch, self.width, self.height);
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
#[cfg(test)]
mod tests {
    use super::*;

    fn slice(half_height: f32, side: Side) -> Column {
        Column {
            dist: 1.0,
            half_height,
            label: 1,
            side,
            tex_u: 0.5,
        }
    }

    #[test]
    fn begin_frame_paints_sky_and_floor() {
        let mut sw = Software::default();
        sw.begin_frame(4, 4);
        sw.end_frame(|fb, w, h| {
            assert_eq!((w, h), (4, 4));
            assert!(fb[..2 * 4].iter().all(|&p| p == SKY));
            assert!(fb[2 * 4..].iter().all(|&p| p == FLOOR));
        });
    }

    #[test]
    fn tall_slice_clamps_to_frame() {
        let mut sw = Software::default();
        sw.begin_frame(2, 6);
        sw.draw_columns(&[slice(10.0, Side::X), slice(10.0, Side::X)]);
        sw.end_frame(|fb, w, h| {
            // fully covered, nothing out of bounds panicked
            assert!(fb.iter().take(w * h).all(|&p| p == PALETTE[1]));
        });
    }

    #[test]
    fn zero_height_column_leaves_background() {
        let mut sw = Software::default();
        sw.begin_frame(1, 4);
        sw.draw_columns(&[slice(0.0, Side::X)]);
        sw.end_frame(|fb, _, _| {
            assert_eq!(fb[0], SKY);
            assert_eq!(fb[3], FLOOR);
        });
    }

    #[test]
    fn horizontal_crossings_are_darker() {
        let x_shade = Software::shade(&slice(1.0, Side::X));
        let y_shade = Software::shade(&slice(1.0, Side::Y));
        assert_eq!(y_shade, (x_shade >> 1) & 0x00_7F7F7F);
    }
}
