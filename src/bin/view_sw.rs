//! Interactive software-rendered viewer.
//!
//! Controls  W/S = forward/back  A/D = strafe  ←/→ = turn  Esc = quit
//!
//! ```bash
//! cargo run --release -- [map.txt]
//! cargo run --release -- --gen [seed]
//! ```

use minifb::{Key, Window, WindowOptions};
use std::time::{Duration, Instant};

use raywolf_rs::{
    engine::{Column, Projection},
    renderer::{Renderer, Software},
    world::{Grid, Lens, MapGen, Pose},
};

const W: usize = 1024;
const H: usize = 640;
const MOVE_SPEED: f32 = 3.0; // cells per second
const TURN_SPEED: f32 = 2.2; // radians per second

/// Fallback map, same floor plan as the classic 7×7 demo room.
const DEMO_MAP: &str = "1111111\n\
                        11    1\n\
                        1     1\n\
                        1     1\n\
                        1     1\n\
                        11   21\n\
                        1111111\n";

fn main() -> anyhow::Result<()> {
    // ─────────── pick a grid source ────────────
    let mut args = std::env::args().skip(1);
    let grid = match args.next().as_deref() {
        Some("--gen") => {
            let seed: u64 = args.next().unwrap_or_else(|| "1".into()).parse()?;
            MapGen::new(24, 18, seed).build()?
        }
        Some(path) => Grid::parse(&std::fs::read_to_string(path)?)?,
        None => Grid::parse(DEMO_MAP)?,
    };

    let spawn = MapGen::spawn(&grid).ok_or_else(|| anyhow::anyhow!("map has no empty cell"))?;
    let mut pose = Pose::new(spawn, 0.0);
    let lens = Lens::new(60_f32.to_radians());
    let projection = Projection::default();

    let mut columns = vec![Column::EMPTY; W];
    let mut renderer = Software::default();

    let mut win = Window::new("raywolf software render", W, H, WindowOptions::default())?;
    win.set_target_fps(70);

    // ────────────────── benchmarking state ──────────────────────────────
    let mut acc_time = Duration::ZERO; // cumulated cast+draw time
    let mut acc_frames = 0usize;
    let mut last_print = Instant::now();
    let mut last_frame = Instant::now();

    while win.is_open() && !win.is_key_down(Key::Escape) {
        let dt = last_frame.elapsed().as_secs_f32().min(0.1);
        last_frame = Instant::now();

        handle_input(&mut pose, &grid, &win, dt);

        let t0 = Instant::now();

        projection.cast_columns(&pose, &lens, &grid, &mut columns)?;

        renderer.begin_frame(W, H);
        renderer.draw_columns(&columns);

        acc_time += t0.elapsed();
        acc_frames += 1;
        if last_print.elapsed() >= Duration::from_secs(2) {
            let avg = acc_time.as_secs_f64() * 1e3 / acc_frames as f64;
            println!("{avg:.2} ms/frame over {acc_frames} frames");
            acc_time = Duration::ZERO;
            acc_frames = 0;
            last_print = Instant::now();
        }

        let mut result = Ok(());
        renderer.end_frame(|fb, w, h| result = win.update_with_buffer(fb, w, h));
        result?;
    }
    Ok(())
}

/// Move-then-revert collision: try the step, undo it if the new cell is
/// solid.  Crude but exactly what a grid this coarse needs.
fn handle_input(pose: &mut Pose, grid: &Grid, win: &Window, dt: f32) {
    if win.is_key_down(Key::Left) {
        pose.turn(TURN_SPEED * dt);
    }
    if win.is_key_down(Key::Right) {
        pose.turn(-TURN_SPEED * dt);
    }

    let mut forward = 0.0;
    let mut side = 0.0;
    if win.is_key_down(Key::W) || win.is_key_down(Key::Up) {
        forward += MOVE_SPEED * dt;
    }
    if win.is_key_down(Key::S) || win.is_key_down(Key::Down) {
        forward -= MOVE_SPEED * dt;
    }
    if win.is_key_down(Key::A) {
        side -= MOVE_SPEED * dt;
    }
    if win.is_key_down(Key::D) {
        side += MOVE_SPEED * dt;
    }

    let before = pose.pos;
    pose.step(forward, side);
    if grid.blocks(pose.pos.x, pose.pos.y) {
        pose.pos = before;
    }
}
