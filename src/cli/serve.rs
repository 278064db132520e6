use crate::{
    config::AppConfig,
    error,
    server::{AppState, start_api_server},
};

pub async fn serve(config: AppConfig) {
    let state = match AppState::from_config(config) {
        Ok(state) => state,
        Err(e) => error!("Cannot initialise the gateway. Err: {}", e),
    };

    if let Err(e) = start_api_server(state).await {
        error!("Server stopped. Err: {}", e);
    }
}
