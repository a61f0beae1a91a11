use utils::nearest_index;

use crate::{
    framebuffer::PixelView,
    geometry::{Dimensions, PixelFormat, RowOrder, BYTES_PER_PIXEL},
    Pixel,
};

/// Something a frame buffer can be stretched onto.
pub trait BlitTarget {
    /// Current size of the drawable area.
    fn dimensions(&self) -> Dimensions;

    /// Scaled copy of the whole `source` onto `(0, 0, destination)`.
    ///
    /// Callers never pass an empty source or an empty destination.
    fn stretch_blit(&mut self, source: &PixelView, destination: Dimensions);
}

/// In-memory top-down BGRX raster with nearest neighbour stretching.
#[derive(Clone, Debug, Default)]
pub struct PixelSurface {
    pixels: Vec<u8>,
    dim: Dimensions,
}

impl PixelSurface {
    pub fn new(width: u32, height: u32) -> Self {
        let mut surface = Self::default();
        surface.resize(width, height);
        surface
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.dim = Dimensions::new(width, height);
        self.pixels = vec![0; self.dim.pixel_count() as usize * BYTES_PER_PIXEL];
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    /// Pixel at column `x` of row `y`, row 0 being the top.
    pub fn pixel(&self, x: u32, y: u32) -> Pixel {
        assert!(
            x < self.dim.width && y < self.dim.height,
            "PixelSurface index out of bounds. dimensions = {:?}, (x, y) = {:?}",
            self.dim, (x, y),
        );
        let at = (y as usize * self.dim.width as usize + x as usize) * BYTES_PER_PIXEL;
        let p = &self.pixels[at..at + BYTES_PER_PIXEL];
        Pixel {
            b: p[PixelFormat::BLUE_OFFSET],
            g: p[PixelFormat::GREEN_OFFSET],
            r: p[PixelFormat::RED_OFFSET],
            a: p[PixelFormat::PADDING_OFFSET],
        }
    }
}

impl BlitTarget for PixelSurface {
    fn dimensions(&self) -> Dimensions {
        self.dim
    }

    fn stretch_blit(&mut self, source: &PixelView, destination: Dimensions) {
        let src = source.dimensions();
        if src.is_empty() || destination.is_empty() {
            return;
        }

        // anything past the surface edge is clipped, the scale factor is not
        let visible_width = destination.width.min(self.dim.width) as usize;
        let visible_height = destination.height.min(self.dim.height) as usize;
        let columns: Vec<usize> = (0..visible_width)
            .map(|dx| nearest_index(dx, destination.width as usize, src.width as usize))
            .collect();

        let dst_pitch = self.dim.width as usize * BYTES_PER_PIXEL;
        for dy in 0..visible_height {
            let image_row = nearest_index(dy, destination.height as usize, src.height as usize);
            let memory_row = match source.row_order {
                RowOrder::TopDown => image_row,
                RowOrder::BottomUp => src.height as usize - 1 - image_row,
            };
            let src_row = source.row(memory_row);

            let dst_start = dy * dst_pitch;
            let dst_row = &mut self.pixels[dst_start..dst_start + visible_width * BYTES_PER_PIXEL];
            for (dst, &sx) in dst_row.chunks_exact_mut(BYTES_PER_PIXEL).zip(&columns) {
                let at = sx * BYTES_PER_PIXEL;
                dst.copy_from_slice(&src_row[at..at + BYTES_PER_PIXEL]);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FrameBuffer;

    fn numbered(width: u32, height: u32, row_order: RowOrder) -> FrameBuffer {
        let mut buffer = FrameBuffer::with_row_order(row_order);
        buffer.resize(width, height).unwrap();
        for (y, row) in buffer.rows_mut().enumerate() {
            for (x, pixel) in row.iter_mut().enumerate() {
                *pixel = Pixel { b: x as u8, g: y as u8, r: 7, a: 0 };
            }
        }
        buffer
    }

    #[test]
    fn same_size_copies_exactly() {
        let buffer = numbered(3, 2, RowOrder::TopDown);
        let mut surface = PixelSurface::new(3, 2);
        surface.stretch_blit(&buffer.view(), surface.dimensions());
        assert_eq!(surface.as_bytes(), buffer.pixels());
    }

    #[test]
    fn stretches_up() {
        let buffer = numbered(2, 2, RowOrder::TopDown);
        let mut surface = PixelSurface::new(4, 4);
        surface.stretch_blit(&buffer.view(), Dimensions::new(4, 4));

        assert_eq!(surface.pixel(0, 0), Pixel { b: 0, g: 0, r: 7, a: 0 });
        assert_eq!(surface.pixel(1, 1), Pixel { b: 0, g: 0, r: 7, a: 0 });
        assert_eq!(surface.pixel(2, 1), Pixel { b: 1, g: 0, r: 7, a: 0 });
        assert_eq!(surface.pixel(1, 2), Pixel { b: 0, g: 1, r: 7, a: 0 });
        assert_eq!(surface.pixel(3, 3), Pixel { b: 1, g: 1, r: 7, a: 0 });
    }

    #[test]
    fn stretches_down() {
        let buffer = numbered(4, 4, RowOrder::TopDown);
        let mut surface = PixelSurface::new(2, 2);
        surface.stretch_blit(&buffer.view(), Dimensions::new(2, 2));

        assert_eq!(surface.pixel(0, 0), Pixel { b: 0, g: 0, r: 7, a: 0 });
        assert_eq!(surface.pixel(1, 0), Pixel { b: 2, g: 0, r: 7, a: 0 });
        assert_eq!(surface.pixel(1, 1), Pixel { b: 2, g: 2, r: 7, a: 0 });
    }

    #[test]
    fn bottom_up_rows_are_flipped() {
        let buffer = numbered(1, 3, RowOrder::BottomUp);
        let mut surface = PixelSurface::new(1, 3);
        surface.stretch_blit(&buffer.view(), Dimensions::new(1, 3));

        assert_eq!(surface.pixel(0, 0).g, 2);
        assert_eq!(surface.pixel(0, 1).g, 1);
        assert_eq!(surface.pixel(0, 2).g, 0);
    }

    #[test]
    fn destination_larger_than_surface_is_clipped() {
        let buffer = numbered(2, 2, RowOrder::TopDown);
        let mut surface = PixelSurface::new(2, 2);
        surface.stretch_blit(&buffer.view(), Dimensions::new(4, 4));

        // only the top-left quadrant of the 4x4 stretch lands on the surface
        for y in 0..2 {
            for x in 0..2 {
                assert_eq!(surface.pixel(x, y), Pixel { b: 0, g: 0, r: 7, a: 0 });
            }
        }
    }

    #[test]
    fn empty_destination_is_untouched() {
        let buffer = numbered(2, 2, RowOrder::TopDown);
        let mut surface = PixelSurface::new(0, 0);
        surface.stretch_blit(&buffer.view(), Dimensions::new(0, 0));
        assert!(surface.as_bytes().is_empty());
    }
}
