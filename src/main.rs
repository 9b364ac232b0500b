use imagelens::app;
use std::env;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let paths: Vec<String> = env::args().skip(1).collect();
    let result = if paths.is_empty() {
        app::run()
    } else {
        app::run_batch(&paths)
    };

    if let Err(message) = result {
        eprintln!("{message}");
        std::process::exit(1);
    }
}
