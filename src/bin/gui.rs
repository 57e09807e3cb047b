fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let presenter_factory = analysis_visualizer::PixelsPresenterFactory::new();
    let command = analysis_visualizer::RunGuiCommand::new(presenter_factory);

    command.execute();
}
