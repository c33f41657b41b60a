use bitstream_serde::DecodeError;
use simple_logger::SimpleLogger;

mod app;
mod config;
mod protocol;

use app::App;
use config::SyncConfig;

fn main() -> Result<(), DecodeError> {
    let config = SyncConfig::default();

    SimpleLogger::new()
        .with_level(config.log_level)
        .init()
        .expect("A logger was already initialized");

    let mut app = App::new(config);
    app.run()
}
