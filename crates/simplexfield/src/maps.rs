//! Sampling noise onto pixel grids.
//!
//! Rows are filled in parallel. Every pixel depends only on its own
//! coordinates and the generator's immutable tables, so the parallel result
//! is identical to a sequential scan.

use rayon::prelude::*;
use tracing::trace;

use crate::noise::{Noise2D, Noise3D};

/// Grayscale buffer (single channel).
#[derive(Debug, Clone, PartialEq)]
pub struct GrayscaleBuffer {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel data (single channel, row-major).
    pub data: Vec<f64>,
}

impl GrayscaleBuffer {
    /// Create a new grayscale buffer filled with a value.
    pub fn new(width: u32, height: u32, fill: f64) -> Self {
        let size = width as usize * height as usize;
        Self {
            width,
            height,
            data: vec![fill; size],
        }
    }

    /// Get a pixel at the given coordinates.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> f64 {
        self.data[self.index(x, y)]
    }

    /// Set a pixel at the given coordinates.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, value: f64) {
        let idx = self.index(x, y);
        self.data[idx] = value;
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Smallest and largest stored values, or `None` for an empty buffer.
    pub fn min_max(&self) -> Option<(f64, f64)> {
        let mut iter = self.data.iter().copied();
        let first = iter.next()?;
        Some(iter.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
    }

    /// Convert to 8-bit bytes, clamping to [0, 1].
    pub fn to_bytes(&self) -> Vec<u8> {
        self.data
            .iter()
            .map(|&v| (v.clamp(0.0, 1.0) * 255.0).round() as u8)
            .collect()
    }
}

/// Sampling window: pixel `(px, py)` maps to `offset + (px, py) * frequency`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Window {
    pub width: u32,
    pub height: u32,
    pub frequency: f64,
    pub offset: [f64; 2],
}

impl Window {
    pub fn new(width: u32, height: u32, frequency: f64) -> Self {
        Self {
            width,
            height,
            frequency,
            offset: [0.0, 0.0],
        }
    }

    pub fn with_offset(mut self, offset: [f64; 2]) -> Self {
        self.offset = offset;
        self
    }

    #[inline]
    fn coord(&self, px: usize, py: usize) -> (f64, f64) {
        (
            self.offset[0] + px as f64 * self.frequency,
            self.offset[1] + py as f64 * self.frequency,
        )
    }
}

/// Fill a buffer from `f(x, y)` over the window, one rayon task per row.
fn fill<F>(window: &Window, f: F) -> GrayscaleBuffer
where
    F: Fn(f64, f64) -> f64 + Sync,
{
    let mut buffer = GrayscaleBuffer::new(window.width, window.height, 0.0);
    if window.width == 0 || window.height == 0 {
        return buffer;
    }

    buffer
        .data
        .par_chunks_mut(window.width as usize)
        .enumerate()
        .for_each(|(py, row)| {
            for (px, out) in row.iter_mut().enumerate() {
                let (x, y) = window.coord(px, py);
                *out = f(x, y);
            }
        });

    trace!(
        width = window.width,
        height = window.height,
        "filled grayscale buffer"
    );
    buffer
}

/// Render 2D noise over the window, stored in [0, 1] via `sample_01`.
pub fn render_2d<N: Noise2D + Sync>(noise: &N, window: &Window) -> GrayscaleBuffer {
    fill(window, |x, y| noise.sample_01(x, y))
}

/// Render the `z` slice of 3D noise over the window, stored in [0, 1].
pub fn render_3d_slice<N: Noise3D + Sync>(noise: &N, window: &Window, z: f64) -> GrayscaleBuffer {
    fill(window, |x, y| noise.sample_01(x, y, z))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NoiseGenerator;

    #[test]
    fn test_buffer_get_set() {
        let mut buffer = GrayscaleBuffer::new(4, 3, 0.25);
        buffer.set(3, 2, 0.75);
        assert_eq!(buffer.get(3, 2), 0.75);
        assert_eq!(buffer.get(0, 0), 0.25);
        assert_eq!(buffer.data.len(), 12);
    }

    #[test]
    fn test_to_bytes_clamps() {
        let buffer = GrayscaleBuffer {
            width: 3,
            height: 1,
            data: vec![-0.5, 0.5, 1.5],
        };
        assert_eq!(buffer.to_bytes(), vec![0, 128, 255]);
    }

    #[test]
    fn test_min_max() {
        assert_eq!(GrayscaleBuffer::new(0, 0, 0.0).min_max(), None);
        let buffer = GrayscaleBuffer {
            width: 3,
            height: 1,
            data: vec![0.4, 0.1, 0.9],
        };
        assert_eq!(buffer.min_max(), Some((0.1, 0.9)));
    }

    #[test]
    fn test_render_matches_direct_sampling() {
        let gen = NoiseGenerator::new(21);
        let noise = gen.noise_2d_evaluator();
        let window = Window::new(17, 9, 0.05).with_offset([3.0, -2.0]);
        let buffer = render_2d(&noise, &window);

        for py in 0..9u32 {
            for px in 0..17u32 {
                let x = 3.0 + px as f64 * 0.05;
                let y = -2.0 + py as f64 * 0.05;
                assert_eq!(buffer.get(px, py), noise.sample_01(x, y));
            }
        }
    }

    #[test]
    fn test_render_3d_slice_matches_direct_sampling() {
        let gen = NoiseGenerator::new(21);
        let noise = gen.noise_3d_evaluator();
        let window = Window::new(8, 8, 0.1);
        let buffer = render_3d_slice(&noise, &window, 1.5);
        assert_eq!(buffer.get(5, 6), noise.sample_01(0.0 + 5.0 * 0.1, 0.0 + 6.0 * 0.1, 1.5));
    }

    #[test]
    fn test_render_empty_window() {
        let gen = NoiseGenerator::new(21);
        let buffer = render_2d(&gen.noise_2d_evaluator(), &Window::new(0, 10, 0.1));
        assert!(buffer.data.is_empty());
    }
}
