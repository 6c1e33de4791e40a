use anyhow::Result;
use sanipass_config::Config;
use std::path::Path;

pub fn handle(path: Option<&Path>, force: bool) -> Result<()> {
    let path = path.map_or_else(Config::config_path, Path::to_path_buf);

    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists (use --force to replace it)",
            path.display()
        );
    }

    Config::default().save(&path)?;

    println!("✓ Created {}", path.display());
    Ok(())
}
