use anyhow::Result;
use sanipass_config::Config;
use sanipass_engine::Outcome;

use crate::cli::RedactArgs;

pub async fn handle(args: RedactArgs, config: &Config) -> Result<()> {
    let (sanitizer, inputs) = super::prepare(&args.input, config)?;
    let style = super::redaction_style(config, args.keep_first, args.keep_last)?;

    let redaction = (!args.report_only).then_some(&style);
    let results = sanitizer
        .sanitize_all(&inputs, redaction, args.overwrite)
        .await;

    let mut sensitive = 0;
    let mut failed = 0;
    for (path, result) in results {
        match result {
            Ok(Outcome::Sensitive { saved, .. }) => {
                sensitive += 1;
                println!("{}", path.display());
                if let Some(saved) = saved {
                    tracing::info!("Sanitized image written to {}", saved.display());
                }
            }
            Ok(Outcome::Clean) => {}
            Err(e) => {
                tracing::error!("{}: {:#}", path.display(), e);
                failed += 1;
            }
        }
    }

    tracing::info!(
        "Found {} images containing sensitive information.",
        sensitive
    );

    if failed > 0 {
        anyhow::bail!("{} of {} images failed", failed, inputs.len());
    }

    Ok(())
}
