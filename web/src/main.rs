use std::process::ExitCode;

use gglib_core::{ModelClient, PageState};
use gglib_web::PageController;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let client = ModelClient::default();
    tracing::debug!(base_url = client.base_url(), "mounting page");
    let mut page = PageController::mount_with(client, reqwest::Client::new());
    print!("{}", page.render());

    let state = page.settled().await;
    print!("\n{}", state.render());

    match state {
        PageState::Error(_) => ExitCode::FAILURE,
        _ => ExitCode::SUCCESS,
    }
}
