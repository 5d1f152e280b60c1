//! Color and depth buffers for a single frame.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::debug;
use sk_core::Result;

use crate::Color;

/// `width × height` packed 0RGB pixels plus a depth buffer, row 0 at the top.
///
/// Depth follows OpenGL NDC: smaller is closer, cleared to `+inf`.
#[derive(Debug, Clone)]
pub struct Framebuffer {
    width: u32,
    height: u32,
    color: Vec<u32>,
    depth: Vec<f32>,
}

impl Framebuffer {
    pub fn new(width: u32, height: u32) -> Self {
        let len = width as usize * height as usize;
        Self {
            width,
            height,
            color: vec![0; len],
            depth: vec![f32::INFINITY; len],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn clear(&mut self, color: Color) {
        self.color.fill(color.to_u32());
        self.depth.fill(f32::INFINITY);
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    /// Write a pixel, ignoring coordinates outside the buffer.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if let Some(i) = self.index(x, y) {
            self.color[i] = color.to_u32();
        }
    }

    /// Write a pixel if `depth` is closer than what is stored.
    ///
    /// Returns whether the pixel was written.
    pub fn set_pixel_depth(&mut self, x: i32, y: i32, depth: f32, color: Color) -> bool {
        match self.index(x, y) {
            Some(i) if depth < self.depth[i] => {
                self.depth[i] = depth;
                self.color[i] = color.to_u32();
                true
            }
            _ => false,
        }
    }

    pub fn pixel(&self, x: i32, y: i32) -> Option<u32> {
        self.index(x, y).map(|i| self.color[i])
    }

    pub fn depth(&self, x: i32, y: i32) -> Option<f32> {
        self.index(x, y).map(|i| self.depth[i])
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.color
    }

    /// Binary PPM (`P6`) encoding of the color buffer.
    pub fn write_ppm<W: Write>(&self, mut out: W) -> Result<()> {
        write!(out, "P6\n{} {}\n255\n", self.width, self.height)?;
        let mut bytes = Vec::with_capacity(self.color.len() * 3);
        for &px in &self.color {
            bytes.extend_from_slice(&[(px >> 16) as u8, (px >> 8) as u8, px as u8]);
        }
        out.write_all(&bytes)?;
        out.flush()?;
        Ok(())
    }

    pub fn save_ppm(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.write_ppm(BufWriter::new(File::create(path)?))?;
        debug!("wrote {}x{} frame to {}", self.width, self.height, path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_and_bounds() {
        let mut fb = Framebuffer::new(4, 3);
        fb.clear(Color::WHITE);
        assert!(fb.as_slice().iter().all(|&p| p == 0x00FF_FFFF));
        fb.set_pixel(-1, 0, Color::BLACK);
        fb.set_pixel(4, 0, Color::BLACK);
        fb.set_pixel(0, 3, Color::BLACK);
        assert!(fb.as_slice().iter().all(|&p| p == 0x00FF_FFFF));
        assert_eq!(fb.pixel(5, 5), None);
    }

    #[test]
    fn test_depth_test() {
        let mut fb = Framebuffer::new(2, 2);
        fb.clear(Color::BLACK);
        assert!(fb.set_pixel_depth(1, 1, 0.5, Color::RED));
        assert!(!fb.set_pixel_depth(1, 1, 0.7, Color::BLUE));
        assert_eq!(fb.pixel(1, 1), Some(Color::RED.to_u32()));
        assert!(fb.set_pixel_depth(1, 1, -0.2, Color::BLUE));
        assert_eq!(fb.pixel(1, 1), Some(Color::BLUE.to_u32()));
        assert_eq!(fb.depth(1, 1), Some(-0.2));
    }

    #[test]
    fn test_ppm_encoding() {
        let mut fb = Framebuffer::new(2, 1);
        fb.clear(Color::BLACK);
        fb.set_pixel(1, 0, Color::rgb(1.0, 0.0, 1.0));
        let mut out = Vec::new();
        fb.write_ppm(&mut out).unwrap();
        let header = b"P6\n2 1\n255\n";
        assert_eq!(&out[..header.len()], header);
        assert_eq!(&out[header.len()..], &[0, 0, 0, 255, 0, 255]);
    }
}
