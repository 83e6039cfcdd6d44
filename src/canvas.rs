use egui::{Color32, Pos2};
use image::{Rgba, RgbaImage};

use crate::error::{CanvasError, CanvasResult};
use crate::pen::{Pen, PenCap};

/// The raster the canvas owns and history snapshots copy
pub type Bitmap = RgbaImage;

/// An integer position in canvas-local coordinates.
///
/// Points may lie outside the bitmap: drawing clips them, reads reject them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<Pos2> for Point {
    fn from(pos: Pos2) -> Self {
        Self::new(pos.x.floor() as i32, pos.y.floor() as i32)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

pub(crate) fn to_rgba(color: Color32) -> Rgba<u8> {
    Rgba(color.to_array())
}

pub(crate) fn to_color(pixel: &Rgba<u8>) -> Color32 {
    let [r, g, b, a] = pixel.0;
    Color32::from_rgba_premultiplied(r, g, b, a)
}

/// Offsets a pen covers around its center
fn footprint(pen: &Pen) -> Vec<(i32, i32)> {
    match pen.cap() {
        PenCap::Round => round_footprint(pen.width()),
    }
}

/// Offsets within a disc of diameter `width`, centered on the origin
fn round_footprint(width: u32) -> Vec<(i32, i32)> {
    let reach = (width / 2) as i32;
    let limit = i64::from(width) * i64::from(width);
    let mut offsets = Vec::new();
    for dy in -reach..=reach {
        for dx in -reach..=reach {
            let d2 = i64::from(dx) * i64::from(dx) + i64::from(dy) * i64::from(dy);
            if 4 * d2 <= limit {
                offsets.push((dx, dy));
            }
        }
    }
    offsets
}

/// The single bitmap every tool paints into.
///
/// Dimensions are fixed at construction; undo and file loads swap or
/// composite pixels but never resize.
#[derive(Debug, Clone)]
pub struct PixelCanvas {
    bitmap: Bitmap,
}

impl PixelCanvas {
    /// Creates an opaque white canvas
    pub fn new(width: u32, height: u32) -> CanvasResult<Self> {
        if width == 0 || height == 0 {
            return Err(CanvasError::EmptyCanvas);
        }
        let bitmap = RgbaImage::from_pixel(width, height, to_rgba(Color32::WHITE));
        Ok(Self { bitmap })
    }

    pub fn width(&self) -> u32 {
        self.bitmap.width()
    }

    pub fn height(&self) -> u32 {
        self.bitmap.height()
    }

    pub fn size(&self) -> (u32, u32) {
        self.bitmap.dimensions()
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as u32) < self.width() && (p.y as u32) < self.height()
    }

    pub fn bitmap(&self) -> &Bitmap {
        &self.bitmap
    }

    /// A full copy of the live bitmap
    pub fn snapshot(&self) -> Bitmap {
        self.bitmap.clone()
    }

    /// Reads the color under `p`
    pub fn pixel_at(&self, p: Point) -> CanvasResult<Color32> {
        if !self.contains(p) {
            return Err(self.out_of_bounds(p));
        }
        Ok(to_color(self.bitmap.get_pixel(p.x as u32, p.y as u32)))
    }

    /// Writes one pixel, silently clipping anything off the bitmap
    pub fn set_pixel(&mut self, p: Point, color: Color32) {
        self.put(p, to_rgba(color));
    }

    fn put(&mut self, p: Point, rgba: Rgba<u8>) {
        if self.contains(p) {
            self.bitmap.put_pixel(p.x as u32, p.y as u32, rgba);
        }
    }

    fn stamp(&mut self, center: Point, offsets: &[(i32, i32)], rgba: Rgba<u8>) {
        for &(dx, dy) in offsets {
            self.put(Point::new(center.x + dx, center.y + dy), rgba);
        }
    }

    /// Paints the pen's round footprint centered on `p`
    pub fn draw_point(&mut self, p: Point, pen: &Pen) {
        let offsets = footprint(pen);
        self.stamp(p, &offsets, to_rgba(pen.color()));
    }

    /// Rasterizes a round-capped stroke from `a` to `b`
    pub fn draw_line(&mut self, a: Point, b: Point, pen: &Pen) {
        let offsets = footprint(pen);
        let rgba = to_rgba(pen.color());

        let dx = (b.x - a.x).abs();
        let dy = -(b.y - a.y).abs();
        let sx = if a.x < b.x { 1 } else { -1 };
        let sy = if a.y < b.y { 1 } else { -1 };
        let mut err = dx + dy;
        let mut cursor = a;

        loop {
            self.stamp(cursor, &offsets, rgba);
            if cursor == b {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                cursor.x += sx;
            }
            if e2 <= dx {
                err += dx;
                cursor.y += sy;
            }
        }
    }

    /// Rasterizes an unfilled rectangle with opposite corners `c1` and `c2`
    pub fn draw_rect(&mut self, c1: Point, c2: Point, pen: &Pen) {
        if c1 == c2 {
            self.draw_point(c1, pen);
            return;
        }
        let (left, right) = (c1.x.min(c2.x), c1.x.max(c2.x));
        let (top, bottom) = (c1.y.min(c2.y), c1.y.max(c2.y));

        let top_left = Point::new(left, top);
        let top_right = Point::new(right, top);
        let bottom_right = Point::new(right, bottom);
        let bottom_left = Point::new(left, bottom);

        self.draw_line(top_left, top_right, pen);
        self.draw_line(top_right, bottom_right, pen);
        self.draw_line(bottom_right, bottom_left, pen);
        self.draw_line(bottom_left, top_left, pen);
    }

    /// Swaps in a whole bitmap of the same dimensions
    pub fn replace(&mut self, bitmap: Bitmap) -> CanvasResult<()> {
        if bitmap.dimensions() != self.size() {
            return Err(CanvasError::SizeMismatch {
                expected: self.size(),
                actual: bitmap.dimensions(),
            });
        }
        self.bitmap = bitmap;
        Ok(())
    }

    /// Draws `image` over the canvas at the origin, clipped to the canvas.
    ///
    /// `image` is straight (unpremultiplied) RGBA as decoded from a file;
    /// translucent pixels are blended source-over.
    pub fn composite(&mut self, image: &RgbaImage) {
        let width = image.width().min(self.width());
        let height = image.height().min(self.height());

        for y in 0..height {
            for x in 0..width {
                let src = image.get_pixel(x, y);
                let dst = self.bitmap.get_pixel_mut(x, y);
                *dst = blend_over(src, dst);
            }
        }
    }

    /// The bitmap as straight (unpremultiplied) RGBA, the layout image files use
    pub fn export(&self) -> RgbaImage {
        let mut image = self.bitmap.clone();
        for pixel in image.pixels_mut() {
            *pixel = Rgba(to_color(pixel).to_srgba_unmultiplied());
        }
        image
    }

    /// Paints every pixel with `color`
    pub fn fill_with(&mut self, color: Color32) {
        let rgba = to_rgba(color);
        for pixel in self.bitmap.pixels_mut() {
            *pixel = rgba;
        }
    }

    fn out_of_bounds(&self, p: Point) -> CanvasError {
        CanvasError::OutOfBounds {
            x: p.x,
            y: p.y,
            width: self.width(),
            height: self.height(),
        }
    }
}

fn mul_div_255(a: u8, b: u8) -> u8 {
    ((u16::from(a) * u16::from(b) + 127) / 255) as u8
}

/// Source-over of a straight-alpha source onto a premultiplied destination
fn blend_over(src: &Rgba<u8>, dst: &Rgba<u8>) -> Rgba<u8> {
    let [r, g, b, a] = src.0;
    match a {
        255 => Rgba([r, g, b, 255]),
        0 => *dst,
        _ => {
            let inv = 255 - a;
            let [sr, sg, sb, sa] = Color32::from_rgba_unmultiplied(r, g, b, a).to_array();
            let [dr, dg, db, da] = dst.0;
            Rgba([
                sr.saturating_add(mul_div_255(dr, inv)),
                sg.saturating_add(mul_div_255(dg, inv)),
                sb.saturating_add(mul_div_255(db, inv)),
                sa.saturating_add(mul_div_255(da, inv)),
            ])
        }
    }
}
