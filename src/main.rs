use std::path::Path;
use std::process::ExitCode;

use httpheaders::config::GenConfig;
use httpheaders::codegen;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match std::env::args().nth(1) {
        Some(path) => GenConfig::from_file(Path::new(&path)),
        None => GenConfig::default(),
    };

    match codegen::generate(&config) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
