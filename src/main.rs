mod cli;

#[tokio::main]
async fn main() {
    activities::observability::init_tracing();

    let config = match cli::run() {
        cli::RunOutcome::Serve(config) => config,
        cli::RunOutcome::Exit(code) => std::process::exit(code),
    };

    if let Err(err) = activities::serve(config).await {
        tracing::error!(error = %err, "server stopped");
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
