use std::time::Duration;

use crate::{config::Settings, error, info, server, warning};

pub async fn serve(settings: &Settings, open: bool) {
    let login_url = format!("http://{}/login", settings.server_addr);
    info!("Starting bridge server on http://{}", settings.server_addr);
    info!("Log in at {}", login_url);

    if open {
        tokio::spawn(async move {
            // give the listener a moment to bind
            tokio::time::sleep(Duration::from_millis(300)).await;
            if webbrowser::open(&login_url).is_err() {
                warning!(
                    "Failed to open browser. Please navigate to the following URL manually:\n{}",
                    login_url
                );
            }
        });
    }

    if let Err(e) = server::start_api_server(settings).await {
        error!("Server stopped with an error: {}", e);
    }
}
