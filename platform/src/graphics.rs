use std::mem::{self, size_of};
use render::{BlitTarget, Dimensions, PixelView, RowOrder};
use winapi::{
    shared::windef::HDC,
    um::wingdi::{self, BITMAPINFO, BITMAPINFOHEADER},
};

/// Device context of a window client area, as a blit target.
pub struct GdiSurface {
    device_context: HDC,
    dimensions: Dimensions,
}

impl GdiSurface {
    pub fn new(device_context: HDC, dimensions: Dimensions) -> Self {
        Self { device_context, dimensions }
    }
}

impl BlitTarget for GdiSurface {
    fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    fn stretch_blit(&mut self, source: &PixelView, destination: Dimensions) {
        let bitmap_info = bitmap_info(source);
        let blit_result = unsafe {
            wingdi::StretchDIBits(
                self.device_context,
                0,
                0,
                destination.width as i32,
                destination.height as i32,
                0,
                0,
                source.width as i32,
                source.height as i32,
                source.bytes.as_ptr() as *const _,
                &bitmap_info,
                wingdi::DIB_RGB_COLORS,
                wingdi::SRCCOPY,
            )
        };
        if blit_result == 0 {
            log::error!(
                "StretchDIBits in GdiSurface::stretch_blit(...) failed.
                StretchDIBits {{
                    hdc: {:p},
                    DestWidth: {},
                    DestHeight: {},
                    SrcWidth: {},
                    SrcHeight: {},
                    lpBits: {:p},
                    biHeight: {},
                }}",
                self.device_context,
                destination.width,
                destination.height,
                source.width,
                source.height,
                source.bytes.as_ptr(),
                bitmap_info.bmiHeader.biHeight,
            );
        }
    }
}

fn bitmap_info(source: &PixelView) -> BITMAPINFO {
    BITMAPINFO {
        bmiHeader: BITMAPINFOHEADER {
            biSize: size_of::<BITMAPINFOHEADER>() as u32,
            biWidth: source.width as i32,
            biHeight: dib_height(source.height, source.row_order),
            biPlanes: 1,
            biBitCount: 32,
            biCompression: wingdi::BI_RGB,
            ..unsafe { mem::zeroed() }
        },
        ..unsafe { mem::zeroed() }
    }
}

/// GDI encodes the row order in the sign of the DIB height: negative is top-down.
fn dib_height(height: u32, row_order: RowOrder) -> i32 {
    match row_order {
        RowOrder::TopDown => -(height as i32),
        RowOrder::BottomUp => height as i32,
    }
}
