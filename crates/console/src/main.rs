//! Headless console entry point.
//!
//! Runs the dashboard load path once without a browser: resolve a token,
//! fetch the product rows, print them. A load failure prints the same empty
//! state the page would show.

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use devportal_catalog::{PLACEHOLDER, endpoint_host, status_label, visibility_label};
    use devportal_console::{CancelToken, DashboardState, load_dashboard};
    use devportal_store::{Client, IdentityClient, StoreConfig};
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = StoreConfig::from_env()?;
    let identity = IdentityClient::new(config.token_url.clone());
    let client = Client::connect(config, &identity).await;

    let mut state = DashboardState::new();
    load_dashboard(&client, &CancelToken::new(), &mut state).await;

    if state.rows().is_empty() {
        println!("No API products found.");
        return Ok(());
    }

    println!(
        "{:<38} {:<28} {:<12} {:<10} {}",
        "ID", "NAME", "STATUS", "VISIBILITY", "ENDPOINT"
    );
    for row in state.visible_rows() {
        println!(
            "{:<38} {:<28} {:<12} {:<10} {}",
            row.id,
            row.name.as_deref().unwrap_or(PLACEHOLDER),
            status_label(row.status.as_deref()),
            visibility_label(row.visibility.as_deref()),
            row.service_endpoint_url
                .as_deref()
                .and_then(endpoint_host)
                .unwrap_or(PLACEHOLDER),
        );
    }
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {}
