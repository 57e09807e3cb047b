use std::env;
use std::path::PathBuf;

use analysis_visualizer::{ExportConfig, ExportController, PpmFilePresenter};

fn run(config: ExportConfig) -> Result<Vec<PathBuf>, Box<dyn std::error::Error>> {
    let presenter = PpmFilePresenter::new();
    let mut controller = ExportController::new(presenter, config);

    controller.generate()?;
    let written = controller.write()?;

    Ok(written)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ExportConfig::from_args(env::args().skip(1))?;
    log::info!(
        "exporting {}x{} frames to {}",
        config.width,
        config.height,
        config.output_dir.display()
    );

    run(config)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_writes_one_file_per_visualizer() {
        let output_dir = env::temp_dir().join(format!("analysis_visualizer_main_{}", std::process::id()));
        let config = ExportConfig::new(&output_dir, 60, 40).unwrap();

        let written = run(config).unwrap();

        assert_eq!(written.len(), 4);
        assert!(written.iter().all(|path| path.exists()));

        std::fs::remove_dir_all(&output_dir).unwrap();
    }
}
