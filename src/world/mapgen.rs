//! Procedural map source: carves rectangular rooms out of solid rock.
//!
//! Purely a convenience for the viewer – the caster does not care where a
//! [`Grid`] came from.  Deterministic for a given seed.

use rand::{Rng, SeedableRng, rngs::StdRng};

use super::grid::{Grid, GridError};

/// Room-carving generator parameters.
#[derive(Clone, Copy, Debug)]
pub struct MapGen {
    pub width: usize,
    pub height: usize,
    pub seed: u64,
    pub rooms: usize,
}

impl MapGen {
    pub fn new(width: usize, height: usize, seed: u64) -> Self {
        Self {
            width,
            height,
            seed,
            rooms: 8,
        }
    }

    /// Build the grid: start fully solid, carve overlapping rooms, then
    /// re-seal the outer border so every ray terminates on a wall.
    pub fn build(&self) -> Result<Grid, GridError> {
        let (w, h) = (self.width, self.height);
        if w < 5 || h < 5 {
            return Err(GridError::SizeMismatch {
                expected: 25,
                got: w * h,
            });
        }

        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut cells = vec![0u8; w * h];

        // varied wall labels so the viewer can tint rooms differently
        for (i, c) in cells.iter_mut().enumerate() {
            *c = 1 + (i % 3) as u8;
        }

        for _ in 0..self.rooms {
            let rw = rng.gen_range(2..=(w / 2).max(3));
            let rh = rng.gen_range(2..=(h / 2).max(3));
            let rx = rng.gen_range(1..w.saturating_sub(rw).max(2));
            let ry = rng.gen_range(1..h.saturating_sub(rh).max(2));
            for y in ry..(ry + rh).min(h - 1) {
                for x in rx..(rx + rw).min(w - 1) {
                    cells[y * w + x] = 0;
                }
            }
        }

        // closed border
        for x in 0..w {
            cells[x] = 1;
            cells[(h - 1) * w + x] = 1;
        }
        for y in 0..h {
            cells[y * w] = 1;
            cells[y * w + w - 1] = 1;
        }

        Grid::from_cells(w, h, cells)
    }

    /// First empty cell centre, scanning row-major – a safe spawn point.
    pub fn spawn(grid: &Grid) -> Option<glam::Vec2> {
        for y in 0..grid.height() as i32 {
            for x in 0..grid.width() as i32 {
                if grid.get(x, y) == Some(0) {
                    return Some(glam::Vec2::new(x as f32 + 0.5, y as f32 + 0.5));
                }
            }
        }
        None
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_map() {
        let a = MapGen::new(16, 12, 7).build().unwrap();
        let b = MapGen::new(16, 12, 7).build().unwrap();
        for y in 0..12 {
            for x in 0..16 {
                assert_eq!(a.get(x, y), b.get(x, y));
            }
        }
    }

    #[test]
    fn border_stays_closed() {
        let g = MapGen::new(20, 15, 42).build().unwrap();
        for x in 0..20 {
            assert!(Grid::is_opaque(g.get(x, 0).unwrap()));
            assert!(Grid::is_opaque(g.get(x, 14).unwrap()));
        }
        for y in 0..15 {
            assert!(Grid::is_opaque(g.get(0, y).unwrap()));
            assert!(Grid::is_opaque(g.get(19, y).unwrap()));
        }
    }

    #[test]
    fn spawn_lands_on_empty_cell() {
        let g = MapGen::new(16, 12, 3).build().unwrap();
        let p = MapGen::spawn(&g).expect("generator always carves something");
        assert!(!g.blocks(p.x, p.y));
    }

    #[test]
    fn tiny_maps_are_rejected() {
        assert!(MapGen::new(3, 3, 0).build().is_err());
    }
}
