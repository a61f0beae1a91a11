#[cfg(windows)]
extern crate winapi;

pub mod time;

#[cfg(windows)]
#[macro_use]
pub mod debug;
#[cfg(windows)]
pub mod graphics;
#[cfg(windows)]
pub mod window;
