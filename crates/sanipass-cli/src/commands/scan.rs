use anyhow::Result;
use sanipass_config::Config;
use sanipass_engine::Outcome;
use serde_json::json;

use crate::cli::ScanArgs;

pub async fn handle(args: ScanArgs, config: &Config) -> Result<()> {
    let (sanitizer, inputs) = super::prepare(&args.input, config)?;

    let results = sanitizer.sanitize_all(&inputs, None, false).await;

    let mut report = Vec::new();
    let mut failed = 0;
    for (path, result) in results {
        match result {
            Ok(Outcome::Sensitive { matches, .. }) => {
                if args.json {
                    report.push(json!({
                        "path": path.display().to_string(),
                        "matches": matches,
                    }));
                } else {
                    println!("{}", path.display());
                    for summary in &matches {
                        println!(
                            "  ({}, {}) {:?} -> {}",
                            summary.left,
                            summary.top,
                            summary.text,
                            summary.matches.join(", ")
                        );
                    }
                }
            }
            Ok(Outcome::Clean) => {}
            Err(e) => {
                tracing::error!("Skipping {}: {:#}", path.display(), e);
                failed += 1;
            }
        }
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    if failed > 0 {
        anyhow::bail!("{} of {} images failed", failed, inputs.len());
    }

    Ok(())
}
