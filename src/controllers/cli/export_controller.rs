use std::error::Error;
use std::fmt;
use std::path::PathBuf;
use std::time::Instant;

use rayon::prelude::*;

use crate::controllers::cli::export_config::ExportConfig;
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::pixel_rect::PixelRectError;
use crate::core::drawing::pixel_canvas::PixelCanvas;
use crate::core::visualizers::epsilon_delta::params::EpsilonDeltaParams;
use crate::core::visualizers::epsilon_delta::visualizer::EpsilonDeltaVisualizer;
use crate::core::visualizers::errors::RenderError;
use crate::core::visualizers::ports::visualizer::Visualizer;
use crate::core::visualizers::riemann::params::RiemannParams;
use crate::core::visualizers::riemann::visualizer::RiemannVisualizer;
use crate::core::visualizers::taylor::params::TaylorParams;
use crate::core::visualizers::taylor::visualizer::TaylorVisualizer;
use crate::core::visualizers::visualizer_kinds::VisualizerKinds;
use crate::core::visualizers::weierstrass::params::WeierstrassParams;
use crate::core::visualizers::weierstrass::visualizer::WeierstrassVisualizer;

#[derive(Debug, Clone, PartialEq)]
pub enum FrameError {
    Canvas(PixelRectError),
    Render(RenderError),
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Canvas(err) => write!(f, "cannot allocate canvas: {}", err),
            Self::Render(err) => write!(f, "{}", err),
        }
    }
}

impl Error for FrameError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Canvas(err) => Some(err),
            Self::Render(err) => Some(err),
        }
    }
}

impl From<PixelRectError> for FrameError {
    fn from(err: PixelRectError) -> Self {
        Self::Canvas(err)
    }
}

impl From<RenderError> for FrameError {
    fn from(err: RenderError) -> Self {
        Self::Render(err)
    }
}

/// A visualizer drawn at its default parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedFrame {
    pub kind: VisualizerKinds,
    pub buffer: PixelBuffer,
    pub readout: String,
}

fn draw<V: Visualizer>(visualizer: &mut V) -> Result<String, RenderError> {
    Ok(visualizer.render()?.to_string())
}

/// Renders `kind` with default parameters onto a fresh `width` x `height` canvas.
pub fn render_frame(
    kind: VisualizerKinds,
    width: u32,
    height: u32,
) -> Result<RenderedFrame, FrameError> {
    let canvas = PixelCanvas::new(width, height)?;

    let (canvas, readout) = match kind {
        VisualizerKinds::Weierstrass => {
            let mut visualizer = WeierstrassVisualizer::new(canvas, WeierstrassParams::default());
            let readout = draw(&mut visualizer)?;
            (visualizer.into_surface(), readout)
        }
        VisualizerKinds::EpsilonDelta => {
            let mut visualizer = EpsilonDeltaVisualizer::new(canvas, EpsilonDeltaParams::default());
            let readout = draw(&mut visualizer)?;
            (visualizer.into_surface(), readout)
        }
        VisualizerKinds::Riemann => {
            let mut visualizer = RiemannVisualizer::new(canvas, RiemannParams::default());
            let readout = draw(&mut visualizer)?;
            (visualizer.into_surface(), readout)
        }
        VisualizerKinds::Taylor => {
            let mut visualizer = TaylorVisualizer::new(canvas, TaylorParams::default());
            let readout = draw(&mut visualizer)?;
            (visualizer.into_surface(), readout)
        }
    };

    Ok(RenderedFrame {
        kind,
        buffer: canvas.into_buffer(),
        readout,
    })
}

/// Batch-renders every visualizer to image files.
pub struct ExportController<P: FilePresenterPort> {
    presenter: P,
    config: ExportConfig,
    frames: Vec<RenderedFrame>,
}

impl<P: FilePresenterPort> ExportController<P> {
    pub fn new(presenter: P, config: ExportConfig) -> Self {
        Self {
            presenter,
            config,
            frames: Vec::new(),
        }
    }

    #[must_use]
    pub fn frames(&self) -> &[RenderedFrame] {
        &self.frames
    }

    /// Renders all visualizers, one rayon task each.
    pub fn generate(&mut self) -> Result<(), Box<dyn Error>> {
        let width = self.config.width;
        let height = self.config.height;

        println!("Rendering {} visualizers...", VisualizerKinds::ALL.len());
        println!("Image size: {}x{}", width, height);

        let start = Instant::now();
        let frames = VisualizerKinds::ALL
            .par_iter()
            .map(|&kind| render_frame(kind, width, height))
            .collect::<Result<Vec<_>, FrameError>>()?;
        let duration = start.elapsed();

        println!("Duration:   {:?}", duration);
        for frame in &frames {
            println!("{}: {}", frame.kind, frame.readout);
        }

        self.frames = frames;
        Ok(())
    }

    /// Writes the generated frames into the output directory. Returns the paths written.
    pub fn write(&self) -> std::io::Result<Vec<PathBuf>> {
        if self.frames.is_empty() {
            log::warn!("nothing to write, generate has not produced any frames");
            return Ok(Vec::new());
        }

        std::fs::create_dir_all(&self.config.output_dir)?;

        let mut written = Vec::with_capacity(self.frames.len());
        for frame in &self.frames {
            let path = self
                .config
                .output_dir
                .join(frame.kind.slug())
                .with_extension(self.presenter.extension());

            self.presenter.present(&frame.buffer, &path)?;
            println!("Saved to {}", path.display());
            written.push(path);
        }

        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;
    use crate::core::data::point::Point;
    use std::cell::RefCell;
    use std::path::Path;

    #[derive(Default)]
    struct RecordingPresenter {
        written: RefCell<Vec<(PathBuf, u32, u32)>>,
    }

    impl FilePresenterPort for RecordingPresenter {
        fn extension(&self) -> &'static str {
            "raw"
        }

        fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
            let rect = buffer.pixel_rect();
            self.written
                .borrow_mut()
                .push((filepath.as_ref().to_path_buf(), rect.width(), rect.height()));
            Ok(())
        }
    }

    fn temp_output_dir(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("analysis_visualizer_{}_{}", name, std::process::id()))
    }

    #[test]
    fn test_render_frame_draws_on_white_background() {
        let frame = render_frame(VisualizerKinds::Riemann, 70, 70).unwrap();

        assert_eq!(frame.buffer.pixel_rect().width(), 70);
        assert_eq!(frame.buffer.pixel(Point { x: 69, y: 0 }), Ok(Colour::WHITE));
        assert!(frame.readout.contains("actual area = 3.7333"));
    }

    #[test]
    fn test_render_frame_rejects_degenerate_size() {
        assert!(matches!(
            render_frame(VisualizerKinds::Taylor, 1, 100),
            Err(FrameError::Canvas(_))
        ));
    }

    #[test]
    fn test_generate_then_write_every_visualizer() {
        let output_dir = temp_output_dir("export");
        let config = ExportConfig::new(&output_dir, 120, 80).unwrap();
        let mut controller = ExportController::new(RecordingPresenter::default(), config);

        controller.generate().unwrap();
        let paths = controller.write().unwrap();

        assert_eq!(controller.frames().len(), 4);
        assert_eq!(paths.len(), 4);
        assert_eq!(paths[0], output_dir.join("weierstrass.raw"));
        assert_eq!(paths[1], output_dir.join("epsilon_delta.raw"));
        let written = controller.presenter.written.borrow();
        assert!(written.iter().all(|(_, w, h)| (*w, *h) == (120, 80)));

        std::fs::remove_dir_all(&output_dir).unwrap();
    }

    #[test]
    fn test_write_before_generate_writes_nothing() {
        let controller = ExportController::new(RecordingPresenter::default(), ExportConfig::default());

        assert_eq!(controller.write().unwrap(), Vec::<PathBuf>::new());
    }
}
