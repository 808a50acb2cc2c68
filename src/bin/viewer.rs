use clap::Parser;
use env_logger::Env;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = fractal_viewer::ViewerArgs::parse().into_config();
    let presenter_factory = fractal_viewer::PixelsPresenterFactory::new();
    let command = fractal_viewer::RunGuiCommand::new(presenter_factory, config);

    match command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
