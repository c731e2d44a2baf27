use clap::Parser;
use dirmirror::config::{Cli, Prompter};
use dirmirror::logging::{self, FileLog};
use dirmirror::ui::write_startup_summary;
use std::io;
use std::sync::Arc;

fn main() -> anyhow::Result<()> {
    let _cli = Cli::parse();
    logging::init_tracing();

    println!();
    // Prompts re-ask until every answer is valid
    let config = Prompter::new(io::stdin().lock(), io::stdout()).collect()?;
    config.validate()?;

    let (log, log_status) = FileLog::open(&config.log_file)?;
    tracing::debug!(path = %log.path().display(), ?log_status, "log file opened");
    write_startup_summary(&mut io::stdout(), &config, log_status)?;
    println!();

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(dirmirror::commands::mirror::run(config, Arc::new(log)))?;

    Ok(())
}
