use axum::{
    Router,
    extract::Request,
    http::{Method, Uri, uri::PathAndQuery},
    middleware,
    routing::get,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowHeaders, AllowOrigin, CorsLayer},
    normalize_path::NormalizePathLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api_doc::ApiDoc;
use crate::handlers::{health_handler, hello_handler, not_found_handler, ping_handler};
use crate::routes;

/// Build the application router.
///
/// The route table is fixed here; registering the same (method, path) twice
/// panics when the router is built. API paths match case-insensitively and
/// ignore a trailing slash. Swagger UI keeps exact matching since it
/// redirects `/swagger-ui` to `/swagger-ui/`.
pub fn router() -> Router {
    let api = ServiceBuilder::new()
        .layer(NormalizePathLayer::trim_trailing_slash())
        .layer(middleware::map_request(lowercase_path))
        .service(api_routes());

    Router::new()
        .merge(SwaggerUi::new(routes::SWAGGER_UI).url(routes::OPENAPI_JSON, ApiDoc::openapi()))
        .method_not_allowed_fallback(not_found_handler)
        .fallback_service(api)
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
}

fn api_routes() -> Router {
    Router::new()
        .route(routes::HELLO, get(hello_handler))
        .route(routes::PING, get(ping_handler))
        .route(routes::HEALTH, get(health_handler))
        .method_not_allowed_fallback(not_found_handler)
        .fallback(not_found_handler)
}

/// Lowercase the request path, leaving the query untouched.
async fn lowercase_path(mut request: Request) -> Request {
    let uri = request.uri();
    if !uri.path().bytes().any(|b| b.is_ascii_uppercase()) {
        return request;
    }

    let mut path_and_query = uri.path().to_ascii_lowercase();
    if let Some(query) = uri.query() {
        path_and_query.push('?');
        path_and_query.push_str(query);
    }

    let mut parts = uri.clone().into_parts();
    if let Ok(path_and_query) = PathAndQuery::try_from(path_and_query) {
        parts.path_and_query = Some(path_and_query);
        if let Ok(lowered) = Uri::from_parts(parts) {
            *request.uri_mut() = lowered;
        }
    }
    request
}

/// Any origin may call the API, with credentials.
///
/// The caller's `Origin` is echoed back rather than answered with `*`,
/// because browsers reject a wildcard origin on credentialed requests.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::HEAD,
            Method::PUT,
            Method::PATCH,
            Method::POST,
            Method::DELETE,
        ])
        .allow_headers(AllowHeaders::mirror_request())
}
