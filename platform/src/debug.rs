/// Shows the message for `GetLastError` in a message box, logs it and panics.
pub fn panic_with_last_error_message(fn_name: &str) -> ! {
    use std::{
        ffi::{CStr, CString},
        mem::MaybeUninit,
        os::raw::c_char,
        ptr,
    };
    use winapi::um::{
        errhandlingapi::GetLastError,
        winbase::{
            FormatMessageA,
            LocalFree,
            FORMAT_MESSAGE_ALLOCATE_BUFFER,
            FORMAT_MESSAGE_FROM_SYSTEM,
            FORMAT_MESSAGE_IGNORE_INSERTS,
        },
        winuser::{MessageBoxA, MB_ICONERROR, MB_OK},
    };

    let error_code = unsafe { GetLastError() };
    let error_message = {
        let mut message_ptr = MaybeUninit::<*mut c_char>::uninit();
        let get_error_message_result = unsafe {
            FormatMessageA(
                FORMAT_MESSAGE_ALLOCATE_BUFFER
                    | FORMAT_MESSAGE_FROM_SYSTEM
                    | FORMAT_MESSAGE_IGNORE_INSERTS,
                ptr::null(),
                error_code,
                0,
                message_ptr.as_mut_ptr() as *mut _,
                0,
                ptr::null_mut(),
            )
        };
        if get_error_message_result == 0 {
            format!("unknown error {}", error_code)
        } else {
            let message_ptr = unsafe { message_ptr.assume_init() };
            let message = unsafe { CStr::from_ptr(message_ptr) }
                .to_string_lossy()
                .trim_end()
                .to_owned();
            unsafe { LocalFree(message_ptr as *mut _) };
            message
        }
    };

    log::error!("{} failed: {}", fn_name, error_message);
    if let (Ok(text), Ok(caption)) = (CString::new(error_message.as_str()), CString::new(fn_name)) {
        unsafe {
            MessageBoxA(ptr::null_mut(), text.as_ptr(), caption.as_ptr(), MB_OK | MB_ICONERROR);
        }
    }

    panic!("{}. Error: {}", fn_name, error_message);
}

#[macro_export]
macro_rules! win_assert_non_zero {
    (
        $fn_name:ident( $($arg:expr),* $(,)? ) $(;)?
    ) => {
        {
            let result = unsafe { $fn_name($($arg),*) };
            if result == 0 {
                $crate::debug::panic_with_last_error_message(stringify!($fn_name));
            }
            result
        }
    };
}

#[macro_export]
macro_rules! win_assert_non_null {
    (
        $fn_name:ident( $($arg:expr),* $(,)? ) $(;)?
    ) => {
        {
            let result = unsafe { $fn_name($($arg),*) };
            if result.is_null() {
                $crate::debug::panic_with_last_error_message(stringify!($fn_name));
            }
            result
        }
    };
}
