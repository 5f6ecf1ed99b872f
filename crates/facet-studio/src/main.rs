mod config;
mod demo;

use facet_engine::logging::init_logging;

use config::StudioConfig;

fn main() -> anyhow::Result<()> {
    let config = StudioConfig::from_args(std::env::args().skip(1))?;
    init_logging(config.logging.clone());

    log::info!("facet studio: {}x{} -> {}", config.width, config.height, config.output.display());
    demo::run(&config)
}
