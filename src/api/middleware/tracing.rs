//! HTTP request/response tracing middleware.

use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{
    DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer,
};
use tracing::Level;

/// Creates a tracing middleware for HTTP requests.
///
/// Request headers are never recorded, so the bearer token stays out of logs.
///
/// # Logging Behavior
///
/// - Span at `INFO` with method, URI and HTTP version
/// - Request start at `DEBUG`, or `INFO` when `verbose` is set
/// - Response at `INFO` with status and latency in milliseconds
/// - 5xx responses at `ERROR`
///
/// # Example Logs
///
/// ```text
/// INFO request{method=POST uri=/route/docs version=HTTP/1.1}: finished processing request latency=3 ms status=200
/// INFO request{method=GET uri=/docs version=HTTP/1.1}: finished processing request latency=1 ms status=307
/// ```
///
/// # Integration
///
/// ```rust,ignore
/// let app = Router::new()
///     .merge(api::routes::protected_routes())
///     .layer(tracing::layer(false));
/// ```
pub fn layer(verbose: bool) -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>> {
    let request_level = if verbose { Level::INFO } else { Level::DEBUG };

    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_request(DefaultOnRequest::new().level(request_level))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
        .on_failure(DefaultOnFailure::new().level(Level::ERROR))
}
