use ftlcheck::commands::Cli;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Structured logging only when explicitly requested; normal runs keep
    // plain console output.
    if std::env::var("RUST_LOG").is_ok() || std::env::var("FTLCHECK_DEBUG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .init();
    }
    Cli::menu()
}
