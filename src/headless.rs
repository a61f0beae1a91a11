use platform::time;
use render::{BlitTarget, Dimensions, PixelSurface, Presenter, Rect};

pub struct HeadlessConfig {
    pub frames: u32,
    pub surface: Dimensions,
    /// Surface size after the resize half way through the run.
    pub resized: Dimensions,
}

impl Default for HeadlessConfig {
    fn default() -> Self {
        Self {
            frames: 120,
            surface: Dimensions::new(1080, 720),
            resized: Dimensions::new(640, 480),
        }
    }
}

/// Drives `presenter` the way a window would: created, painted, ticked, and
/// resized once half way through. Returns the surface holding the last frame.
pub fn run(mut presenter: Presenter, config: &HeadlessConfig) -> render::Result<PixelSurface> {
    let mut surface = PixelSurface::new(config.surface.width, config.surface.height);
    presenter.on_window_created(config.surface.width, config.surface.height)?;
    presenter.on_paint_needed(&mut surface, Rect::covering(config.surface));

    for frame in 0..config.frames {
        if frame == config.frames / 2 {
            surface.resize(config.resized.width, config.resized.height);
            presenter.on_window_resized(config.resized.width, config.resized.height)?;
            presenter.on_paint_needed(&mut surface, Rect::covering(config.resized));
        }

        let frame_counter = time::Counter::start();
        presenter.on_frame_tick(&mut surface);
        log::trace!("frame {}: {:.3} ms", frame, frame_counter.end().as_ms());
    }

    log::debug!("{} frames on a {:?} surface", config.frames, surface.dimensions());
    Ok(surface)
}

#[cfg(test)]
mod tests {
    use super::*;
    use render::{BufferSizing, PresenterConfig};

    fn small_config(frames: u32) -> HeadlessConfig {
        HeadlessConfig {
            frames,
            surface: Dimensions::new(8, 6),
            resized: Dimensions::new(4, 3),
        }
    }

    #[test]
    fn last_frame_shows_final_offsets() {
        let surface = run(Presenter::default(), &small_config(10)).unwrap();
        assert_eq!(surface.dimensions(), Dimensions::new(4, 3));
        // 10 ticks of (+1, +2)
        let corner = surface.pixel(0, 0);
        assert_eq!((corner.b, corner.g, corner.r), (10, 20, 0));
        let far = surface.pixel(3, 2);
        assert_eq!((far.b, far.g, far.r), (13, 22, 0));
    }

    #[test]
    fn fixed_buffer_is_stretched() {
        let config = PresenterConfig::default().sizing(BufferSizing::Fixed(Dimensions::new(2, 2)));
        let surface = run(Presenter::new(config), &small_config(4)).unwrap();
        // 2x2 buffer over a 4x3 surface, offsets (4, 8)
        let corner = surface.pixel(3, 2);
        assert_eq!((corner.b, corner.g), (5, 9));
    }

    #[test]
    fn zero_sized_window_survives() {
        let config = HeadlessConfig {
            frames: 4,
            surface: Dimensions::new(0, 0),
            resized: Dimensions::new(0, 0),
        };
        let surface = run(Presenter::default(), &config).unwrap();
        assert!(surface.as_bytes().is_empty());
    }
}
