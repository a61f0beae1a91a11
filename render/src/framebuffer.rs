use std::convert::TryFrom;

use rgb::FromSlice;

use crate::{
    error::{Error, Result},
    geometry::{Dimensions, PixelFormat, RowOrder, BYTES_PER_PIXEL},
    Pixel,
};

/// CPU side pixel memory in `PixelFormat::Bgrx8888`.
///
/// Row `y` starts at byte `y * pitch`. The buffer is either empty (no memory)
/// or holds exactly `width * height * BYTES_PER_PIXEL` bytes.
#[derive(Debug, Default)]
pub struct FrameBuffer {
    pixels: Vec<u8>,
    width: u32,
    height: u32,
    pitch: usize,
    row_order: RowOrder,
}

impl FrameBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_row_order(row_order: RowOrder) -> Self {
        Self { row_order, ..Self::default() }
    }

    pub fn width(&self) -> u32 { self.width }
    pub fn height(&self) -> u32 { self.height }
    pub fn pitch(&self) -> usize { self.pitch }
    pub fn row_order(&self) -> RowOrder { self.row_order }
    pub fn dimensions(&self) -> Dimensions { Dimensions::new(self.width, self.height) }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Reallocates the buffer for `width` x `height` pixels.
    ///
    /// The old block is released before the new one is requested, so a failed
    /// allocation leaves the buffer empty with zero dimensions. The new block
    /// is zero filled.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        self.release();

        let bytes = width as u128 * height as u128 * BYTES_PER_PIXEL as u128;
        let out_of_memory = || Error::OutOfMemory { width, height, bytes };

        let len = usize::try_from(bytes).map_err(|_| out_of_memory())?;
        let mut pixels = Vec::new();
        pixels.try_reserve_exact(len).map_err(|_| out_of_memory())?;
        pixels.resize(len, 0);

        self.pixels = pixels;
        self.width = width;
        self.height = height;
        self.pitch = width as usize * BYTES_PER_PIXEL;

        log::debug!("frame buffer reallocated: {}x{} ({} bytes)", width, height, len);
        Ok(())
    }

    /// Whole pixel memory as bytes. Valid until the next `resize`.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Writable pixel memory. Valid until the next `resize`.
    ///
    /// Writes for row `y` belong in `y * pitch .. y * pitch + width * 4`.
    pub fn pixels_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    /// Rows in memory order, each as packed pixels.
    pub fn rows_mut(&mut self) -> impl Iterator<Item = &mut [Pixel]> {
        let pitch = self.pitch.max(BYTES_PER_PIXEL);
        self.pixels
            .chunks_exact_mut(pitch)
            .map(|row| row.as_bgra_mut())
    }

    pub fn view(&self) -> PixelView<'_> {
        PixelView {
            bytes: &self.pixels,
            width: self.width,
            height: self.height,
            pitch: self.pitch,
            row_order: self.row_order,
            format: PixelFormat::Bgrx8888,
        }
    }

    fn release(&mut self) {
        self.pixels = Vec::new();
        self.width = 0;
        self.height = 0;
        self.pitch = 0;
    }
}

/// Borrowed pixel memory plus the geometry needed to read it.
#[derive(Copy, Clone, Debug)]
pub struct PixelView<'a> {
    pub bytes: &'a [u8],
    pub width: u32,
    pub height: u32,
    pub pitch: usize,
    pub row_order: RowOrder,
    pub format: PixelFormat,
}

impl<'a> PixelView<'a> {
    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.width, self.height)
    }

    /// Bytes of memory row `y`.
    pub fn row(&self, y: usize) -> &'a [u8] {
        let start = y * self.pitch;
        &self.bytes[start..start + self.width as usize * self.format.bytes_per_pixel()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let buffer = FrameBuffer::new();
        assert!(buffer.is_empty());
        assert_eq!(buffer.dimensions(), Dimensions::new(0, 0));
        assert_eq!(buffer.pitch(), 0);
        assert!(buffer.pixels().is_empty());
    }

    #[test]
    fn resize_matches_request() {
        let mut buffer = FrameBuffer::new();
        for &(w, h) in &[(1, 1), (4, 3), (640, 480), (3, 7), (0, 5), (5, 0)] {
            buffer.resize(w, h).unwrap();
            assert_eq!(buffer.width(), w);
            assert_eq!(buffer.height(), h);
            assert_eq!(buffer.pitch(), w as usize * 4);
            assert_eq!(buffer.pixels().len(), (w * h * 4) as usize);
        }
    }

    #[test]
    fn resize_to_zero_is_empty() {
        let mut buffer = FrameBuffer::new();
        buffer.resize(16, 16).unwrap();
        assert!(!buffer.is_empty());

        buffer.resize(0, 0).unwrap();
        assert!(buffer.is_empty());
        assert_eq!(buffer.dimensions(), Dimensions::new(0, 0));
        assert_eq!(buffer.rows_mut().count(), 0);
    }

    #[test]
    fn resize_twice_keeps_size() {
        let mut buffer = FrameBuffer::new();
        buffer.resize(8, 6).unwrap();
        let first = (buffer.dimensions(), buffer.pixels().len());
        buffer.resize(8, 6).unwrap();
        assert_eq!((buffer.dimensions(), buffer.pixels().len()), first);
    }

    #[test]
    fn new_memory_is_zeroed() {
        let mut buffer = FrameBuffer::new();
        buffer.resize(3, 3).unwrap();
        buffer.pixels_mut().iter_mut().for_each(|b| *b = 0xAB);
        buffer.resize(5, 2).unwrap();
        assert!(buffer.pixels().iter().all(|&b| b == 0));
    }

    #[test]
    fn impossible_size_leaves_buffer_empty() {
        let mut buffer = FrameBuffer::new();
        buffer.resize(10, 10).unwrap();

        let err = buffer.resize(u32::MAX, u32::MAX).unwrap_err();
        match err {
            Error::OutOfMemory { width, height, bytes } => {
                assert_eq!((width, height), (u32::MAX, u32::MAX));
                assert_eq!(bytes, u32::MAX as u128 * u32::MAX as u128 * 4);
            }
        }
        assert!(buffer.is_empty());
        assert_eq!(buffer.dimensions(), Dimensions::new(0, 0));
        assert_eq!(buffer.pitch(), 0);

        buffer.resize(2, 2).unwrap();
        assert_eq!(buffer.pixels().len(), 16);
    }

    #[test]
    fn rows_follow_pitch() {
        let mut buffer = FrameBuffer::new();
        buffer.resize(3, 2).unwrap();
        for (y, row) in buffer.rows_mut().enumerate() {
            assert_eq!(row.len(), 3);
            row[2] = Pixel { b: 1, g: y as u8 + 1, r: 0, a: 0 };
        }
        let pitch = buffer.pitch();
        assert_eq!(&buffer.pixels()[8..12], &[1, 1, 0, 0]);
        assert_eq!(&buffer.pixels()[pitch + 8..pitch + 12], &[1, 2, 0, 0]);
    }

    #[test]
    fn view_carries_geometry() {
        let mut buffer = FrameBuffer::with_row_order(RowOrder::BottomUp);
        buffer.resize(2, 3).unwrap();
        let view = buffer.view();
        assert_eq!(view.dimensions(), Dimensions::new(2, 3));
        assert_eq!(view.pitch, 8);
        assert_eq!(view.row_order, RowOrder::BottomUp);
        assert_eq!(view.row(2).len(), 8);
    }
}
