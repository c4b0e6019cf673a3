//! Build an icon cache from a sheet export and an extracted icon tree and
//! print what got loaded.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use rust_texture_cache::{
    DirectoryIconResolver, FileIconCache, IconCacheConfig, IconSheets, ImageTextureLoader,
};

/// Inspect the icon texture cache built from a sheet export
#[derive(Parser)]
#[command(name = "icon-cache-inspect")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON export of the record tables
    sheets: PathBuf,

    /// Root of the extracted icon tree
    icon_root: PathBuf,

    /// Optional JSON cache configuration
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let _ = env_logger::try_init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => IconCacheConfig::from_file(path)
            .with_context(|| format!("reading config {}", path.display()))?,
        None => IconCacheConfig::default(),
    }
    .with_env_overrides();

    let sheets = IconSheets::from_file(&args.sheets)
        .with_context(|| format!("reading sheets {}", args.sheets.display()))?;

    let resolver = DirectoryIconResolver::new(&args.icon_root);
    let loader = ImageTextureLoader::new(config.max_icon_dimension);

    let mut cache = FileIconCache::load(&sheets, resolver, loader, &config)
        .context("building icon cache")?;

    let stats = cache.statistics();
    for (category, count) in &stats.category_counts {
        println!("{:<16} {:>6}", category.name(), count);
    }
    println!("{:<16} {:>6}", "Total", stats.total_textures);

    let released = cache.dispose();
    log::info!("Released {} textures", released);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_arguments() {
        let args = Args::try_parse_from(["icon-cache-inspect", "sheets.json", "icons"]).unwrap();
        assert_eq!(args.sheets, PathBuf::from("sheets.json"));
        assert_eq!(args.icon_root, PathBuf::from("icons"));
        assert_eq!(args.config, None);

        let args =
            Args::try_parse_from(["icon-cache-inspect", "sheets.json", "icons", "cache.json"])
                .unwrap();
        assert_eq!(args.config, Some(PathBuf::from("cache.json")));
    }

    #[test]
    fn test_missing_icon_root_rejected() {
        assert!(Args::try_parse_from(["icon-cache-inspect", "sheets.json"]).is_err());
        assert!(Args::try_parse_from(["icon-cache-inspect", "a", "b", "c", "d"]).is_err());
    }
}
