use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;

/// Writes frames as binary PPM (`P6`) images.
#[derive(Debug, Default)]
pub struct PpmFilePresenter {}

impl PpmFilePresenter {
    pub fn new() -> Self {
        Self {}
    }

    /// Encodes `buffer` as PPM into any writer.
    pub fn write_to<W: Write>(&self, buffer: &PixelBuffer, mut out: W) -> std::io::Result<()> {
        let rect = buffer.pixel_rect();

        // P6: binary RGB, then width, height and max colour value
        writeln!(out, "P6")?;
        writeln!(out, "{} {}", rect.width(), rect.height())?;
        writeln!(out, "255")?;
        out.write_all(buffer.buffer())?;
        out.flush()
    }
}

impl FilePresenterPort for PpmFilePresenter {
    fn extension(&self) -> &'static str {
        "ppm"
    }

    fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        let file = File::create(filepath.as_ref())?;
        self.write_to(buffer, BufWriter::new(file))?;
        log::debug!("wrote {}", filepath.as_ref().display());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;
    use crate::core::data::pixel_rect::PixelRect;

    #[test]
    fn test_header_then_raw_rgb() {
        let mut buffer = PixelBuffer::new(PixelRect::from_size(3, 2).unwrap());
        buffer.fill(Colour::rgb(1, 2, 3));
        let mut out = Vec::new();

        PpmFilePresenter::new().write_to(&buffer, &mut out).unwrap();

        let header = b"P6\n3 2\n255\n";
        assert_eq!(&out[..header.len()], header);
        assert_eq!(out.len(), header.len() + 3 * 2 * 3);
        assert_eq!(&out[header.len()..header.len() + 3], &[1, 2, 3]);
    }

    #[test]
    fn test_present_writes_file() {
        let path = std::env::temp_dir().join(format!("analysis_visualizer_ppm_{}.ppm", std::process::id()));
        let buffer = PixelBuffer::new(PixelRect::from_size(4, 4).unwrap());

        PpmFilePresenter::new().present(&buffer, &path).unwrap();

        let written = std::fs::read(&path).unwrap();
        assert!(written.starts_with(b"P6\n4 4\n255\n"));
        std::fs::remove_file(&path).unwrap();
    }
}
