//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    if let Err(err) = politician_cli::run() {
        eprintln!("politician: {err}");
        std::process::exit(1);
    }
}
