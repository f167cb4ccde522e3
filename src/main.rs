use anyhow::Context;
use clap::{Parser, Subcommand};
use gamedex_import::apis::create_source;
use gamedex_import::config::Config;
use gamedex_import::constants::HTTP_OK;
use gamedex_import::infra::{InMemoryRecorder, ReqwestHttp, TracingRecorder};
use gamedex_import::{logging, ImportOutcome, ImportUseCase, Source, TitleList};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "gamedex_import")]
#[command(about = "Import owned game titles from Steam, PSN and Xbox Live profiles")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Import the games of one profile
    Import {
        /// Source to import from: steam, psn, xbl
        #[arg(long)]
        source: Source,
        /// Profile identifier (Steam id, PSN id or gamertag)
        #[arg(long)]
        id: String,
        /// Print the titles as a JSON array
        #[arg(long)]
        json: bool,
    },
    /// Import several profiles in one run
    ImportAll {
        #[arg(long)]
        steam: Option<String>,
        #[arg(long)]
        psn: Option<String>,
        #[arg(long)]
        xbl: Option<String>,
        /// Print the reports as JSON
        #[arg(long)]
        json: bool,
    },
    /// Run an extractor over a saved page, without any network access
    Extract {
        #[arg(long)]
        source: Source,
        /// Path to the saved HTML page
        #[arg(long)]
        file: String,
        /// Status code to pretend the page was served with
        #[arg(long, default_value_t = HTTP_OK)]
        status: u16,
    },
}

fn print_titles(titles: Option<&TitleList>, json: bool) -> anyhow::Result<()> {
    match (titles, json) {
        (Some(titles), true) => println!("{}", serde_json::to_string_pretty(titles)?),
        (Some(titles), false) => {
            for title in titles {
                println!("{title}");
            }
        }
        (None, true) => println!("null"),
        (None, false) => println!("no result"),
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init_logging();

    let cli = Cli::parse();
    let config = Config::load().context("loading configuration")?;

    match cli.command {
        Commands::Import { source, id, json } => {
            let recorder = Arc::new(InMemoryRecorder::forwarding_to(Box::new(TracingRecorder)));
            let use_case = ImportUseCase::new(Box::new(ReqwestHttp), recorder.clone(), config);

            let titles = use_case
                .import(source, &id)
                .await
                .with_context(|| format!("{source} import for '{id}' failed"))?;
            info!(
                "{} import finished, {} rows skipped",
                source,
                recorder.skipped_rows()
            );
            print_titles(titles.as_ref(), json)?;
        }
        Commands::ImportAll { steam, psn, xbl, json } => {
            let requests: Vec<(Source, String)> = [
                (Source::Steam, steam),
                (Source::Psn, psn),
                (Source::Xbl, xbl),
            ]
            .into_iter()
            .filter_map(|(source, id)| id.map(|id| (source, id)))
            .collect();

            if requests.is_empty() {
                anyhow::bail!("pass at least one of --steam, --psn or --xbl");
            }

            let use_case = ImportUseCase::new(Box::new(ReqwestHttp), Arc::new(TracingRecorder), config);
            let reports = use_case.import_many(&requests).await;

            if json {
                println!("{}", serde_json::to_string_pretty(&reports)?);
            } else {
                for report in &reports {
                    match &report.outcome {
                        ImportOutcome::Imported(titles) => {
                            println!("{} ({}): {} titles", report.source, report.profile_id, titles.len());
                            for title in titles {
                                println!("   - {title}");
                            }
                        }
                        ImportOutcome::NoResult => {
                            println!("{} ({}): no result", report.source, report.profile_id)
                        }
                        ImportOutcome::Failed(message) => {
                            error!("{} import failed: {}", report.source, message);
                            println!("{} ({}): failed: {}", report.source, report.profile_id, message);
                        }
                    }
                }
            }
        }
        Commands::Extract { source, file, status } => {
            let document = std::fs::read_to_string(&file)
                .with_context(|| format!("reading {file}"))?;
            let recorder = InMemoryRecorder::forwarding_to(Box::new(TracingRecorder));
            let titles = create_source(source).extract(status, &document, &recorder)?;
            info!("{} rows skipped", recorder.skipped_rows());
            print_titles(titles.as_ref(), false)?;
        }
    }
    Ok(())
}
