use crate::geometry::{Dimensions, RowOrder};

/// How the frame buffer size follows the window.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BufferSizing {
    /// Reallocate to the client area size on every resize.
    TrackWindow,
    /// Allocate once when the window is created and stretch from then on.
    Fixed(Dimensions),
}

/// What the buffer holds right after it was reallocated.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ResizeRepaint {
    /// Refill with the current offsets inside the resize.
    Immediate,
    /// Leave the fresh allocation as is until the next frame tick.
    NextTick,
}

/// Per-tick change of the pattern offsets.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct OffsetStep {
    pub blue: i32,
    pub green: i32,
}

impl Default for OffsetStep {
    fn default() -> Self {
        Self { blue: 1, green: 2 }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PresenterConfig {
    pub row_order: RowOrder,
    pub sizing: BufferSizing,
    pub resize_repaint: ResizeRepaint,
    pub step: OffsetStep,
}

impl Default for PresenterConfig {
    fn default() -> Self {
        Self {
            row_order: RowOrder::TopDown,
            sizing: BufferSizing::TrackWindow,
            resize_repaint: ResizeRepaint::Immediate,
            step: OffsetStep::default(),
        }
    }
}

impl PresenterConfig {
    pub fn row_order(self, row_order: RowOrder) -> Self {
        Self { row_order, ..self }
    }

    pub fn sizing(self, sizing: BufferSizing) -> Self {
        Self { sizing, ..self }
    }

    pub fn resize_repaint(self, resize_repaint: ResizeRepaint) -> Self {
        Self { resize_repaint, ..self }
    }

    pub fn step(self, blue: i32, green: i32) -> Self {
        Self { step: OffsetStep { blue, green }, ..self }
    }
}
