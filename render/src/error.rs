use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("out of memory: cannot allocate {bytes} bytes for a {width}x{height} frame buffer")]
    OutOfMemory {
        width: u32,
        height: u32,
        bytes: u128,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
