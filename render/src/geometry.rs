/// Size of one packed pixel in bytes.
pub const BYTES_PER_PIXEL: usize = PixelFormat::Bgrx8888.bytes_per_pixel();

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// `true` when there is nothing to draw, i.e. either side is zero.
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn pixel_count(self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

/// Region of a surface, in pixels. Used for paint requests.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub fn covering(dim: Dimensions) -> Self {
        Self { x: 0, y: 0, width: dim.width, height: dim.height }
    }
}

/// Which image row the first row in memory holds.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RowOrder {
    /// Row 0 is the top of the image.
    TopDown,
    /// Row 0 is the bottom of the image.
    BottomUp,
}

impl Default for RowOrder {
    fn default() -> Self {
        RowOrder::TopDown
    }
}

/// 32-bit packed pixel formats understood by blit targets.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PixelFormat {
    /// Byte 0 blue, byte 1 green, byte 2 red, byte 3 unused.
    /// Read as a little-endian `u32` this is `0x00RRGGBB`.
    Bgrx8888,
}

impl PixelFormat {
    pub const fn bytes_per_pixel(self) -> usize {
        match self {
            PixelFormat::Bgrx8888 => 4,
        }
    }

    pub const BLUE_OFFSET: usize = 0;
    pub const GREEN_OFFSET: usize = 1;
    pub const RED_OFFSET: usize = 2;
    pub const PADDING_OFFSET: usize = 3;
}
