use std::{
    cell::RefCell,
    ffi::CString,
    mem::{self, size_of, MaybeUninit},
    ptr,
};
use winapi::{
    shared::{
        windef::{HWND, HDC, RECT},
        basetsd::LONG_PTR,
        minwindef::{self, DWORD},
    },
    um::winuser,
};
use render::{Dimensions, Rect};
use crate::graphics::GdiSurface;

#[derive(Clone, Debug)]
pub struct WindowConfig {
    pub title: String,
    /// Client area size.
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: String::from("Asake"),
            width: 1080,
            height: 720,
        }
    }
}

/// What the window procedure saw since the last `drain_events`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum WindowEvent {
    Resized(Dimensions),
    PaintNeeded(Rect),
}

type EventQueue = RefCell<Vec<WindowEvent>>;

pub struct Window {
    handle: HWND,
    device_context: HDC,
    events: Box<EventQueue>,
}

impl Window {
    pub fn create(config: &WindowConfig) -> Self {
        use winapi::um::{
            libloaderapi::GetModuleHandleA,
            winuser::{WNDCLASSEXA, RegisterClassExA, AdjustWindowRectEx, CreateWindowExA, GetDC},
        };

        let instance = win_assert_non_null! {
            GetModuleHandleA(ptr::null())
        };
        let class_name = {
            let class = WNDCLASSEXA {
                cbSize: size_of::<WNDCLASSEXA>() as u32,
                style: winuser::CS_OWNDC | winuser::CS_HREDRAW | winuser::CS_VREDRAW,
                lpfnWndProc: Some(Self::window_class_proc),
                cbClsExtra: 0,
                cbWndExtra: 0,
                hInstance: instance,
                hIcon: ptr::null_mut(),
                hCursor: ptr::null_mut(),
                hbrBackground: ptr::null_mut(),
                lpszMenuName: ptr::null_mut(),
                lpszClassName: "asake_window_class\0".as_ptr() as *const _,
                hIconSm: ptr::null_mut(),
            };
            win_assert_non_zero! {
                RegisterClassExA(&class);
            };
            class.lpszClassName
        };
        let title = CString::new(config.title.as_str()).unwrap_or_default();
        let window_style = winuser::WS_OVERLAPPEDWINDOW | winuser::WS_VISIBLE;
        let handle = {
            let mut window_dim = RECT {
                left: 0,
                top: 0,
                right: config.width as i32,
                bottom: config.height as i32,
            };
            win_assert_non_zero! {
                AdjustWindowRectEx(&mut window_dim, window_style, 0, 0);
            };
            win_assert_non_null!(
                CreateWindowExA(
                    0,
                    class_name,
                    title.as_ptr(),
                    window_style,
                    winuser::CW_USEDEFAULT,
                    winuser::CW_USEDEFAULT,
                    window_dim.right - window_dim.left,
                    window_dim.bottom - window_dim.top,
                    ptr::null_mut(),
                    ptr::null_mut(),
                    instance,
                    ptr::null_mut(),
                )
            )
        };
        let device_context = win_assert_non_null! {
            GetDC(handle)
        };

        // WM_SIZE and WM_PAINT sent during creation are dropped, the host
        // reads the initial size with `client_dimensions`
        let events = Box::new(EventQueue::default());
        unsafe {
            winuser::SetWindowLongPtrA(handle, winuser::GWLP_USERDATA, &*events as *const EventQueue as LONG_PTR);
        }

        log::info!("window \"{}\" created", config.title);
        Self { handle, device_context, events }
    }

    pub fn client_dimensions(&self) -> Dimensions {
        use winuser::GetClientRect;

        let client_rect = {
            let mut client_rect = MaybeUninit::uninit();
            win_assert_non_zero! {
                GetClientRect(self.handle, client_rect.as_mut_ptr());
            };
            unsafe { client_rect.assume_init() }
        };
        Dimensions::new(
            (client_rect.right - client_rect.left).max(0) as u32,
            (client_rect.bottom - client_rect.top).max(0) as u32,
        )
    }

    /// Blit target covering the current client area.
    pub fn surface(&self) -> GdiSurface {
        GdiSurface::new(self.device_context, self.client_dimensions())
    }

    pub fn drain_events(&self) -> Vec<WindowEvent> {
        mem::take(&mut *self.events.borrow_mut())
    }

    pub fn set_title(&self, title: &str) {
        if let Ok(title) = CString::new(title) {
            unsafe { winuser::SetWindowTextA(self.handle, title.as_ptr()) };
        }
    }

    unsafe fn push_event(window_handle: HWND, event: WindowEvent) {
        let events = winuser::GetWindowLongPtrA(window_handle, winuser::GWLP_USERDATA) as *const EventQueue;
        if let Some(events) = events.as_ref() {
            if let Ok(mut events) = events.try_borrow_mut() {
                events.push(event);
            }
        }
    }

    unsafe extern "system" fn window_class_proc(
        window_handle: HWND,
        message: minwindef::UINT,
        w_param: minwindef::WPARAM,
        l_param: minwindef::LPARAM,
    ) -> minwindef::LRESULT {
        let mut result = 0;

        match message {
            winuser::WM_CLOSE => winuser::PostQuitMessage(0),
            winuser::WM_KEYDOWN if w_param == winuser::VK_ESCAPE as minwindef::WPARAM => {
                winuser::PostQuitMessage(0)
            }
            winuser::WM_SIZE => {
                let width = minwindef::LOWORD(l_param as DWORD) as u32;
                let height = minwindef::HIWORD(l_param as DWORD) as u32;
                Self::push_event(window_handle, WindowEvent::Resized(Dimensions::new(width, height)));
            }
            winuser::WM_PAINT => {
                let mut paint: winuser::PAINTSTRUCT = mem::zeroed();
                if !winuser::BeginPaint(window_handle, &mut paint).is_null() {
                    let dirty = paint.rcPaint;
                    Self::push_event(window_handle, WindowEvent::PaintNeeded(Rect {
                        x: dirty.left,
                        y: dirty.top,
                        width: (dirty.right - dirty.left).max(0) as u32,
                        height: (dirty.bottom - dirty.top).max(0) as u32,
                    }));
                    winuser::EndPaint(window_handle, &paint);
                }
            }
            _ => result = winuser::DefWindowProcA(window_handle, message, w_param, l_param),
        }

        result
    }
}

impl Drop for Window {
    fn drop(&mut self) {
        unsafe {
            winuser::SetWindowLongPtrA(self.handle, winuser::GWLP_USERDATA, 0);
            winuser::DestroyWindow(self.handle);
        }
    }
}

/// Message dispatch loop. Dispatches all messages in queue.
///
/// Returns `false` when WM_QUIT is received and `true` otherwise.
pub fn dispatch_messages() -> bool {
    use winuser::{PeekMessageA, TranslateMessage, DispatchMessageA};

    loop {
        let msg = unsafe {
            let mut msg = MaybeUninit::uninit();
            if PeekMessageA(msg.as_mut_ptr(), ptr::null_mut(), 0, 0, winuser::PM_REMOVE) != 0 {
                Some(msg.assume_init())
            } else {
                None
            }
        };

        match msg {
            None => break true,
            Some(msg) if msg.message == winuser::WM_QUIT => break false,
            Some(msg) => unsafe {
                TranslateMessage(&msg);
                DispatchMessageA(&msg);
            },
        }
    }
}
