use clap::Parser;
use claudernetes::cli::Cli;
use claudernetes::config::Settings;
use claudernetes::core::write_manifest;
use claudernetes::error::GenerateResult;
use claudernetes::logging;
use claudernetes::pipeline::generate_manifest;
use tracing::debug;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let settings = Settings::from(Cli::parse());

    let log_file = match settings.log_file.as_deref().map(logging::create_log_file) {
        Some(Ok(file)) => Some(file),
        Some(Err(e)) => {
            eprintln!("Failed to create log file: {e}");
            None
        }
        None => None,
    };
    logging::init(log_file);

    if let Err(e) = run(&settings).await {
        // Written directly so RUST_LOG cannot hide it
        eprintln!("Error: {e}");
        debug!("Exiting with status {}: {}", e.exit_code(), e);
        std::process::exit(e.exit_code());
    }
}

async fn run(settings: &Settings) -> GenerateResult<()> {
    let manifest = generate_manifest(settings).await?;
    write_manifest(&mut std::io::stdout().lock(), &manifest)
}
