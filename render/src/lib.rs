pub mod config;
pub mod error;
pub mod framebuffer;
pub mod geometry;
pub mod presenter;
pub mod surface;

pub use config::{BufferSizing, OffsetStep, PresenterConfig, ResizeRepaint};
pub use error::{Error, Result};
pub use framebuffer::{FrameBuffer, PixelView};
pub use geometry::{Dimensions, PixelFormat, Rect, RowOrder, BYTES_PER_PIXEL};
pub use presenter::Presenter;
pub use surface::{BlitTarget, PixelSurface};

pub use rgb::alt::BGRA8 as Pixel;
