mod names;
mod paths;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand};
use scribe_transcribe_interface::TranscriptFile;
use scribe_transcribe_job::JobClient;

#[derive(Parser)]
#[command(
    name = "scribe",
    about = "Convert diarized batch-transcription output into readable text"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Pre-assigned speaker names, either "spk_0=Alice,spk_1=Bob" or just
    /// "Alice,Bob" in speaker order. Skips the interactive prompts.
    #[arg(long, global = true)]
    names: Option<String>,

    /// Where to write the transcript. Defaults to "<stem>_processed.txt"
    /// next to the input file, or "<job>.txt" in the current directory.
    #[arg(long, short, global = true)]
    output: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// Convert a result file already on disk
    File {
        /// Path to the result JSON (quoting and shell escapes tolerated)
        path: String,
    },
    /// Fetch a transcription job's result and convert it
    Job {
        /// The transcription job name
        name: String,

        /// Keep polling until the job completes
        #[arg(long)]
        wait: bool,

        /// Seconds between polls when --wait is set
        #[arg(long, default_value_t = 30)]
        poll_secs: u64,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let (file, default_output) = match &cli.command {
        Command::File { path } => {
            let path = paths::sanitize_path(path)?;
            let data = std::fs::read(&path)
                .with_context(|| format!("reading {}", path.display()))?;
            let file: TranscriptFile =
                serde_json::from_slice(&data).context("parsing transcript file")?;
            let output = paths::processed_output_path(&path);
            (file, output)
        }
        Command::Job {
            name,
            wait,
            poll_secs,
        } => {
            let client = JobClient::from_env().await;
            let file = if *wait {
                client
                    .wait_for_completion(name, Duration::from_secs(*poll_secs))
                    .await?
            } else {
                client.fetch_completed(name).await?
            };
            (file, PathBuf::from(format!("{name}.txt")))
        }
    };

    let speaker_count = scribe_transcript::resolve_speaker_count(&file)?;
    let speaker_names = match &cli.names {
        Some(raw) => names::parse_names_arg(raw)?,
        None => names::collect_speaker_names(speaker_count)?,
    };

    let rendered = scribe_transcript::render(&file, &speaker_names)?;

    println!();
    println!("{}", rendered.text);
    println!();

    let output = cli.output.unwrap_or(default_output);
    std::fs::write(&output, &rendered.text)
        .with_context(|| format!("writing {}", output.display()))?;
    tracing::info!(path = %output.display(), "transcript saved");
    println!("Saved transcript to {}", output.display());

    Ok(())
}
