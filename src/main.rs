//! babynames CLI entrypoint

use clap::Parser;

use babynames::cli::{self, Cli};

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    let stdout = std::io::stdout();
    if let Err(e) = cli::run(cli.into_options(), &mut stdout.lock()) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
