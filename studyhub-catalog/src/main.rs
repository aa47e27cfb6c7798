use anyhow::Result;
use clap::Parser;
use studyhub_catalog::cli::{self, Params};
use studyhub_catalog::CatalogConfig;
use tracing::info;

fn main() -> Result<()> {
    let params = Params::parse();

    let mut config = CatalogConfig::load_or_default(params.config.as_ref())?;
    if let Some(path) = params.catalog.clone() {
        config.catalog_path = Some(path);
    }

    tracing_subscriber::fmt()
        .with_max_level(config.max_level()?)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    info!("studyhub starting with config: {:?}", config);

    let stdout = std::io::stdout();
    cli::run(&config, &params.command, &mut stdout.lock())
}
