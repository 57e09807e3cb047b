use std::path::Path;

use crate::core::data::pixel_buffer::PixelBuffer;

/// Writes a finished frame somewhere on disk.
pub trait FilePresenterPort {
    /// File extension, without the dot, for paths built by callers.
    fn extension(&self) -> &'static str;

    fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()>;
}
