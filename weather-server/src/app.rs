use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use weather_core::{ProviderError, TemperatureProvider};

pub type SharedProvider = Arc<dyn TemperatureProvider>;

pub fn app_router(provider: SharedProvider) -> Router {
    Router::new()
        .route("/hello", get(hello))
        .route("/weather/{city}", get(weather))
        .with_state(provider)
}

async fn hello() -> &'static str {
    "hello!"
}

/// Averaged temperature for a city, as a bare JSON number in Kelvin.
async fn weather(
    State(provider): State<SharedProvider>,
    Path(city): Path<String>,
) -> Result<Json<f64>, ApiError> {
    let temperature = provider.temperature(&city).await?;
    Ok(Json(temperature.kelvin()))
}

/// Any provider failure surfaces as a 500 with the message as plain text.
struct ApiError(ProviderError);

impl From<ProviderError> for ApiError {
    fn from(err: ProviderError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (StatusCode::INTERNAL_SERVER_ERROR, self.0.to_string()).into_response()
    }
}
