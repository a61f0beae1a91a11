use crate::{
    config::{BufferSizing, PresenterConfig, ResizeRepaint},
    error::Result,
    framebuffer::FrameBuffer,
    geometry::{Dimensions, Rect},
    surface::BlitTarget,
    Pixel,
};

/// Owns the frame buffer, animates the gradient in it and stretches it onto
/// whatever surface the host hands in.
#[derive(Debug)]
pub struct Presenter {
    buffer: FrameBuffer,
    blue_offset: i32,
    green_offset: i32,
    config: PresenterConfig,
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new(PresenterConfig::default())
    }
}

impl Presenter {
    pub fn new(config: PresenterConfig) -> Self {
        Self {
            buffer: FrameBuffer::with_row_order(config.row_order),
            blue_offset: 0,
            green_offset: 0,
            config,
        }
    }

    pub fn buffer(&self) -> &FrameBuffer { &self.buffer }
    pub fn offsets(&self) -> (i32, i32) { (self.blue_offset, self.green_offset) }

    pub fn fill_procedural_pattern(&mut self, blue_offset: i32, green_offset: i32) {
        render_weird_gradient(&mut self.buffer, blue_offset, green_offset);
    }

    /// Stretches the whole frame buffer over `(0, 0, width, height)` of `target`.
    pub fn present_to<T>(&self, target: &mut T, width: u32, height: u32)
        where T: BlitTarget + ?Sized
    {
        let destination = Dimensions::new(width, height);
        if destination.is_empty() || self.buffer.is_empty() {
            return;
        }
        target.stretch_blit(&self.buffer.view(), destination);
    }

    pub fn on_resize(&mut self, width: u32, height: u32) -> Result<()> {
        self.buffer.resize(width, height)?;
        if self.config.resize_repaint == ResizeRepaint::Immediate {
            self.fill_procedural_pattern(self.blue_offset, self.green_offset);
        }
        Ok(())
    }

    /// Advances the animation one frame and presents it.
    pub fn tick<T>(&mut self, target: &mut T)
        where T: BlitTarget + ?Sized
    {
        self.blue_offset = self.blue_offset.wrapping_add(self.config.step.blue);
        self.green_offset = self.green_offset.wrapping_add(self.config.step.green);
        self.fill_procedural_pattern(self.blue_offset, self.green_offset);

        let destination = target.dimensions();
        self.present_to(target, destination.width, destination.height);
    }

    pub fn on_window_created(&mut self, width: u32, height: u32) -> Result<()> {
        log::info!("window created with client area {}x{}", width, height);
        match self.config.sizing {
            BufferSizing::TrackWindow => self.on_resize(width, height),
            BufferSizing::Fixed(dim) => self.on_resize(dim.width, dim.height),
        }
    }

    pub fn on_window_resized(&mut self, width: u32, height: u32) -> Result<()> {
        match self.config.sizing {
            BufferSizing::TrackWindow => self.on_resize(width, height),
            BufferSizing::Fixed(dim) => {
                log::debug!("window resized to {}x{}, keeping {}x{} buffer", width, height, dim.width, dim.height);
                Ok(())
            }
        }
    }

    /// Repaints the whole target. The dirty region is not used for clipping.
    pub fn on_paint_needed<T>(&self, target: &mut T, dirty: Rect)
        where T: BlitTarget + ?Sized
    {
        log::debug!("paint requested for {:?}", dirty);
        let destination = target.dimensions();
        self.present_to(target, destination.width, destination.height);
    }

    pub fn on_frame_tick<T>(&mut self, target: &mut T)
        where T: BlitTarget + ?Sized
    {
        self.tick(target);
    }
}

/// Blue follows the column, green follows the row, both truncated to 8 bits.
fn render_weird_gradient(buffer: &mut FrameBuffer, blue_offset: i32, green_offset: i32) {
    for (y, row) in buffer.rows_mut().enumerate() {
        let green = (y as i32).wrapping_add(green_offset) as u8;
        for (x, pixel) in row.iter_mut().enumerate() {
            let blue = (x as i32).wrapping_add(blue_offset) as u8;
            *pixel = Pixel { b: blue, g: green, r: 0, a: 0 };
        }
    }
}
