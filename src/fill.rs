//! Bucket fill.
//!
//! An explicit-stack flood fill over the 8-connected neighborhood: diagonal
//! neighbors count as connected, so a one pixel diagonal line does not seal a
//! region. Each pixel is painted when it is queued, so it is queued at most
//! once and the stack never outgrows the region.
use egui::Color32;

use crate::canvas::{PixelCanvas, Point, to_rgba};
use crate::error::CanvasResult;
use crate::pen::Pen;

const NEIGHBORS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Repaints the region connected to `seed` whose color is `target`.
///
/// `target` is the seed color sampled before any painting. Painting is one
/// pixel per visited cell whatever the pen width. Returns the number of
/// pixels painted; when the pen already has the target color nothing is
/// touched and 0 is returned.
pub fn flood_fill(
    canvas: &mut PixelCanvas,
    seed: Point,
    target: Color32,
    pen: &Pen,
) -> CanvasResult<usize> {
    // Validates the seed even when the fill turns out to be a no-op
    canvas.pixel_at(seed)?;
    if pen.color() == target {
        return Ok(0);
    }

    let target = to_rgba(target);
    let paint = pen.color();
    let (width, height) = canvas.size();
    canvas.set_pixel(seed, paint);
    let mut painted = 1;
    let mut stack = vec![seed];

    while let Some(current) = stack.pop() {
        for (dx, dy) in NEIGHBORS {
            let x = current.x + dx;
            let y = current.y + dy;
            if x < 0 || y < 0 || x as u32 >= width || y as u32 >= height {
                continue;
            }
            if *canvas.bitmap().get_pixel(x as u32, y as u32) != target {
                continue;
            }
            let next = Point::new(x, y);
            canvas.set_pixel(next, paint);
            painted += 1;
            stack.push(next);
        }
    }

    log::debug!("Flood fill from ({}, {}) painted {} pixels", seed.x, seed.y, painted);
    Ok(painted)
}
