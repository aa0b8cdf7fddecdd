use crate::batch::{BatchOptions, generate_cue_file, generate_cue_files};
use crate::commands::{Cli, Commands};
use anyhow::Result;
use clap::Parser;
use indicatif::MultiProgress;
use indicatif_log_bridge::LogWrapper;

mod batch;
mod commands;
mod cue;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let logger = env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .build();

    let level = logger.filter();
    let pb = MultiProgress::new();

    LogWrapper::new(pb.clone(), logger).try_init()?;
    log::set_max_level(level);

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate(cmd) => {
            let parser = cmd.options.parser()?;
            let template = cmd.options.album("");

            generate_cue_file(
                &cmd.description,
                cmd.output.as_deref(),
                cmd.filename.as_deref(),
                &template,
                &parser,
                cmd.options.force,
            )
            .await?;
        }
        Commands::Batch(cmd) => {
            let options = BatchOptions {
                album: cmd.options.album(""),
                parser: cmd.options.parser()?,
                force: cmd.options.force,
                jobs: cmd.jobs,
            };

            let summary = generate_cue_files(pb.clone(), &cmd.dir, &options).await?;

            if summary.failed > 0 {
                anyhow::bail!("{} album(s) could not be converted", summary.failed);
            }
        }
    }

    Ok(())
}
