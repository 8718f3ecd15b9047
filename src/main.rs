use std::path::PathBuf;

use anyhow::{bail, Context};
use areakit::{init_logging, load_config, summarize_document, BUILD_DATE, VERSION};

const USAGE: &str = "usage: areakit [config.(json|toml)] <areas.txt>";

fn main() -> anyhow::Result<()> {
    // Initialize logging
    init_logging()?;
    tracing::info!("AreaKit {} (built {})", VERSION, BUILD_DATE);

    let args: Vec<PathBuf> = std::env::args_os().skip(1).map(PathBuf::from).collect();
    let (config_path, areas_path) = match args.as_slice() {
        [areas] => (None, areas),
        [config, areas] => (Some(config), areas),
        _ => bail!(USAGE),
    };

    let config = load_config(config_path.map(PathBuf::as_path))?;
    let text = std::fs::read_to_string(areas_path)
        .with_context(|| format!("reading {}", areas_path.display()))?;

    let summary = summarize_document(&config, &text)?;
    for message in &summary.errors {
        tracing::warn!("{}", message);
    }
    println!("{}", summary.document);

    Ok(())
}
