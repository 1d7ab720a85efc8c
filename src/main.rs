use anyhow::Result;
use clap::Parser;

use translate_cli::cli::Args;
use translate_cli::cli::commands::translate::{self, TranslateOptions};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let options = TranslateOptions {
        key: args.key,
        to: args.to,
        from: args.from,
        text: args.text,
    };
    translate::run_translate(options).await?;

    Ok(())
}
