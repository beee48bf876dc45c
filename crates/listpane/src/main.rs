use clap::Parser;
use listpane::cli::{run, Cli};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run(&cli, &mut out)
}
