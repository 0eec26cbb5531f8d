//! Browser client assets, embedded in the binary

use axum::{
    http::header,
    response::{Html, IntoResponse},
};

static INDEX_HTML: &str = include_str!("../../../public/index.html");
static APP_JS: &str = include_str!("../../../public/app.js");
static STYLES_CSS: &str = include_str!("../../../public/styles.css");

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn app_js() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript; charset=utf-8")],
        APP_JS,
    )
}

pub async fn styles_css() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], STYLES_CSS)
}
