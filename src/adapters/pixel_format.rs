//! Pixel format conversion for framebuffer adapters.

use std::error::Error;
use std::fmt;

use crate::core::data::pixel_buffer::PixelBuffer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormatError {
    PartialRgbPixel { src_len: usize },
    LengthMismatch { expected: usize, actual: usize },
}

impl fmt::Display for PixelFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PartialRgbPixel { src_len } => {
                write!(f, "RGB source length {} is not a multiple of 3", src_len)
            }
            Self::LengthMismatch { expected, actual } => write!(
                f,
                "RGBA destination holds {} bytes, expected {}",
                actual, expected
            ),
        }
    }
}

impl Error for PixelFormatError {}

/// Expands packed RGB into RGBA with alpha 255.
///
/// `dst` must hold exactly four bytes for every three in `src`.
pub fn copy_rgb_to_rgba(src: &[u8], dst: &mut [u8]) -> Result<(), PixelFormatError> {
    if src.len() % 3 != 0 {
        return Err(PixelFormatError::PartialRgbPixel { src_len: src.len() });
    }

    let expected = src.len() / 3 * 4;
    if dst.len() != expected {
        return Err(PixelFormatError::LengthMismatch {
            expected,
            actual: dst.len(),
        });
    }

    for (rgb, rgba) in src.chunks_exact(3).zip(dst.chunks_exact_mut(4)) {
        rgba[..3].copy_from_slice(rgb);
        rgba[3] = 255;
    }

    Ok(())
}

/// Copies a whole frame into an RGBA framebuffer of the same dimensions.
pub fn copy_frame_to_rgba(frame: &PixelBuffer, dst: &mut [u8]) -> Result<(), PixelFormatError> {
    copy_rgb_to_rgba(frame.buffer(), dst)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;
    use crate::core::data::pixel_rect::PixelRect;

    #[test]
    fn test_known_values_get_opaque_alpha() {
        let src = [
            255, 0, 0, // red
            0, 255, 0, // green
            0, 0, 255, // blue
        ];
        let mut dst = [0; 12];

        copy_rgb_to_rgba(&src, &mut dst).unwrap();

        assert_eq!(dst, [255, 0, 0, 255, 0, 255, 0, 255, 0, 0, 255, 255]);
    }

    #[test]
    fn test_empty_buffers() {
        let mut dst: [u8; 0] = [];

        assert_eq!(copy_rgb_to_rgba(&[], &mut dst), Ok(()));
    }

    #[test]
    fn test_size_errors() {
        let mut dst = [0; 8];

        assert_eq!(
            copy_rgb_to_rgba(&[1, 2, 3, 4], &mut dst),
            Err(PixelFormatError::PartialRgbPixel { src_len: 4 })
        );
        assert_eq!(
            copy_rgb_to_rgba(&[1, 2, 3], &mut dst),
            Err(PixelFormatError::LengthMismatch {
                expected: 4,
                actual: 8
            })
        );
    }

    #[test]
    fn test_frame_copy() {
        let mut frame = PixelBuffer::new(PixelRect::from_size(2, 2).unwrap());
        frame.fill(Colour::rgb(10, 20, 30));
        let mut dst = vec![0; 16];

        copy_frame_to_rgba(&frame, &mut dst).unwrap();

        assert_eq!(&dst[..8], &[10, 20, 30, 255, 10, 20, 30, 255]);
    }
}
