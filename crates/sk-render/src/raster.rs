//! Scan conversion of points, lines, and triangles in pixel space.
//!
//! Lines are clipped to the viewport (Liang–Barsky) and then walked with
//! Bresenham's algorithm; triangles are filled by testing pixel
//! centers against edge functions and interpolating depth and color with the
//! resulting barycentric weights.

use crate::{Color, Framebuffer};

/// A projected vertex: pixel coordinates (y down) and NDC depth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
    pub depth: f32,
}

impl ScreenPoint {
    pub fn new(x: f64, y: f64, depth: f32) -> Self {
        Self { x, y, depth }
    }

    fn pixel(&self) -> (i32, i32) {
        (self.x.floor() as i32, self.y.floor() as i32)
    }

    fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    fn lerp(&self, other: &Self, t: f64) -> Self {
        Self::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
            self.depth + (other.depth - self.depth) * t as f32,
        )
    }
}

/// Pixel-space rectangle `[-margin, width + margin] × [-margin, height + margin]`
/// a brush of `size` can still reach the framebuffer from.
fn reach(fb: &Framebuffer, size: u32) -> ((f64, f64), (f64, f64)) {
    let margin = size.max(1) as f64;
    (
        (-margin, -margin),
        (fb.width() as f64 + margin, fb.height() as f64 + margin),
    )
}

/// Parameter range `[t0, t1]` of `a + t (b - a)` inside the rectangle
/// `lo..hi`, or `None` when the segment misses it.
fn clip_segment(a: ScreenPoint, b: ScreenPoint, lo: (f64, f64), hi: (f64, f64)) -> Option<(f64, f64)> {
    let (dx, dy) = (b.x - a.x, b.y - a.y);
    if !(a.is_finite() && dx.is_finite() && dy.is_finite()) {
        return None;
    }
    let (mut t0, mut t1) = (0.0f64, 1.0f64);
    for (p, q) in [(-dx, a.x - lo.0), (dx, hi.0 - a.x), (-dy, a.y - lo.1), (dy, hi.1 - a.y)] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
        } else if p < 0.0 {
            t0 = t0.max(q / p);
        } else {
            t1 = t1.min(q / p);
        }
    }
    (t0 <= t1).then_some((t0, t1))
}

#[inline]
fn plot(fb: &mut Framebuffer, x: i32, y: i32, depth: Option<f32>, color: Color) {
    match depth {
        Some(z) => {
            fb.set_pixel_depth(x, y, z, color);
        }
        None => fb.set_pixel(x, y, color),
    }
}

/// Square brush of `size` pixels centered on `(x, y)`.
fn stamp(fb: &mut Framebuffer, x: i32, y: i32, size: u32, depth: Option<f32>, color: Color) {
    let size = size.max(1) as i32;
    let lo = -(size - 1) / 2;
    for dy in lo..lo + size {
        for dx in lo..lo + size {
            plot(fb, x + dx, y + dy, depth, color);
        }
    }
}

/// Visit every pixel on the Bresenham line from `(x0, y0)` to `(x1, y1)`,
/// both endpoints included. The callback also gets the fraction along the line.
///
/// Visits one pixel per step of the longer axis; callers drawing into a
/// framebuffer clip first.
pub fn bresenham(x0: i32, y0: i32, x1: i32, y1: i32, mut visit: impl FnMut(i32, i32, f32)) {
    let (x0, y0, x1, y1) = (i64::from(x0), i64::from(y0), i64::from(x1), i64::from(y1));
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let steps = dx.max(-dy).max(1) as f32;

    let (mut x, mut y) = (x0, y0);
    let mut err = dx + dy;
    let mut k = 0u64;
    loop {
        // Stays between the i32 endpoints.
        visit(x as i32, y as i32, k as f32 / steps);
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
        k += 1;
    }
}

/// Draw a point as a `size × size` square.
pub fn draw_point(fb: &mut Framebuffer, p: ScreenPoint, size: u32, depth_test: bool, color: Color) {
    let (lo, hi) = reach(fb, size);
    if !p.is_finite() || p.x < lo.0 || p.y < lo.1 || p.x > hi.0 || p.y > hi.1 {
        return;
    }
    let (x, y) = p.pixel();
    stamp(fb, x, y, size, depth_test.then_some(p.depth), color);
}

/// Draw a line `width` pixels wide, interpolating depth between the ends.
///
/// Only the part of the segment a `width` brush can reach the framebuffer
/// from is rasterized, so far off-screen endpoints cost nothing extra.
pub fn draw_line(
    fb: &mut Framebuffer,
    a: ScreenPoint,
    b: ScreenPoint,
    width: u32,
    depth_test: bool,
    color: Color,
) {
    let (lo, hi) = reach(fb, width);
    let Some((t0, t1)) = clip_segment(a, b, lo, hi) else {
        return;
    };
    let (a, b) = (
        if t0 > 0.0 { a.lerp(&b, t0) } else { a },
        if t1 < 1.0 { a.lerp(&b, t1) } else { b },
    );
    let (x0, y0) = a.pixel();
    let (x1, y1) = b.pixel();
    bresenham(x0, y0, x1, y1, |x, y, t| {
        let depth = depth_test.then(|| a.depth + (b.depth - a.depth) * t);
        stamp(fb, x, y, width, depth, color);
    });
}

/// Fill a triangle, interpolating per-vertex colors. Either winding is
/// accepted; zero-area triangles draw nothing.
pub fn fill_triangle(fb: &mut Framebuffer, v: [ScreenPoint; 3], colors: [Color; 3], depth_test: bool) {
    let edge = |a: ScreenPoint, b: ScreenPoint, px: f64, py: f64| {
        (b.x - a.x) * (py - a.y) - (b.y - a.y) * (px - a.x)
    };
    let area = edge(v[0], v[1], v[2].x, v[2].y);
    if area.abs() < 1e-12 {
        return;
    }

    let min_x = v.iter().map(|p| p.x).fold(f64::INFINITY, f64::min).floor().max(0.0) as i32;
    let min_y = v.iter().map(|p| p.y).fold(f64::INFINITY, f64::min).floor().max(0.0) as i32;
    let max_x = v
        .iter()
        .map(|p| p.x)
        .fold(f64::NEG_INFINITY, f64::max)
        .ceil()
        .min(fb.width() as f64 - 1.0) as i32;
    let max_y = v
        .iter()
        .map(|p| p.y)
        .fold(f64::NEG_INFINITY, f64::max)
        .ceil()
        .min(fb.height() as f64 - 1.0) as i32;

    for y in min_y..=max_y {
        let py = y as f64 + 0.5;
        for x in min_x..=max_x {
            let px = x as f64 + 0.5;
            let w0 = edge(v[1], v[2], px, py) / area;
            let w1 = edge(v[2], v[0], px, py) / area;
            let w2 = edge(v[0], v[1], px, py) / area;
            if w0 < 0.0 || w1 < 0.0 || w2 < 0.0 {
                continue;
            }
            let (w0, w1, w2) = (w0 as f32, w1 as f32, w2 as f32);
            let color = colors[0] * w0 + colors[1] * w1 + colors[2] * w2;
            let depth = depth_test.then(|| v[0].depth * w0 + v[1].depth * w1 + v[2].depth * w2);
            plot(fb, x, y, depth, color);
        }
    }
}
