use anyhow::{Context, Result};

use crate::cli::{AppContext, InitArgs};
use crate::core::markers::{Marker, MarkerRegistry};

/// Starter marker set covering the common file types.
pub fn default_registry() -> MarkerRegistry {
    let marker = |exts: &[&str], start: &str, end: &str| Marker {
        ext: exts.iter().map(|e| e.to_string()).collect(),
        start: start.to_string(),
        end: end.to_string(),
    };

    MarkerRegistry {
        markers: vec![
            marker(&["go", "rs", "tf", "c", "h", "js", "ts"], "/*", "*/"),
            marker(&["sh", "bash"], "<< comment", "comment"),
            marker(&["py"], "\"\"\"", "\"\"\""),
            // already prose; pass through untouched
            marker(&["md", "markdown"], "", ""),
        ],
    }
}

pub fn init(args: InitArgs, ctx: &AppContext) -> Result<()> {
    let config_path = args.path.join("narrative.yaml");

    if config_path.exists() && !args.force {
        anyhow::bail!(
            "Marker config already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    let yaml = serde_yaml::to_string(&default_registry())
        .context("Failed to serialize default marker config")?;

    std::fs::write(&config_path, yaml).context("Failed to write marker config")?;

    if !ctx.quiet {
        println!("Created marker config at {}", config_path.display());
    }
    Ok(())
}
