use clap::Parser;

mod cli;
mod debounce;
mod effects;
mod logging;
mod runtime;
mod ui;

fn main() -> anyhow::Result<()> {
    let args = cli::Args::parse();
    logging::initialize(args.log_file.as_deref());
    runtime::run(args)
}
