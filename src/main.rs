use anyhow::Context;
use tokio::io::AsyncReadExt;

use pullfile::backend::native::NativeFileBackend;
use pullfile::cli::{self, BufferSource, Config};
use pullfile::document::FileDocument;
use pullfile::picker::TerminalPicker;
use pullfile::workflow::{self, PullOptions};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let config = match cli::parse_args() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    };

    env_logger::Builder::new()
        .filter_level(config.log_level())
        .parse_default_env()
        .init();

    if let Err(e) = run(config).await {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

async fn run(config: Config) -> anyhow::Result<()> {
    if !workflow::is_pullable_target(&config.file) {
        log::warn!(
            "{} is not an existing file, nothing to pull into",
            config.file.display()
        );
        return Ok(());
    }

    let file = std::path::absolute(&config.file)
        .with_context(|| format!("resolving {}", config.file.display()))?;
    let backend = NativeFileBackend {
        atomic: config.atomic,
    };

    let mut document = match &config.buffer {
        None => FileDocument::open(&file),
        Some(source) => {
            let buffer = read_buffer(source).await?;
            FileDocument::with_buffer(&file, buffer, &backend)?
        }
    };

    log::debug!("Running {} on {}", pullfile::PULL_FILE_COMMAND, file.display());
    let options = PullOptions {
        sort_entries: config.sort,
    };
    let outcome = workflow::pull_file(&mut document, &TerminalPicker::new(), &backend, options)
        .await?;

    if config.json {
        let report = workflow::json_report(outcome.as_ref())?;
        println!("{}", serde_json::to_string(&report)?);
    }
    Ok(())
}

async fn read_buffer(source: &BufferSource) -> anyhow::Result<Vec<u8>> {
    match source {
        BufferSource::Stdin => {
            let mut buffer = Vec::new();
            tokio::io::stdin()
                .read_to_end(&mut buffer)
                .await
                .context("reading buffer from stdin")?;
            Ok(buffer)
        }
        BufferSource::File(path) => tokio::fs::read(path)
            .await
            .with_context(|| format!("reading buffer from {}", path.display())),
    }
}
