use clap::Parser;
use git_unmerged::cli::{execute_command, Cli};

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    if let Err(e) = execute_command(cli) {
        eprintln!("git-unmerged: {}", e);
        std::process::exit(1);
    }
}
