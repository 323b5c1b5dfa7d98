use axum::{body::Body, response::Response};

cfg_if::cfg_if! {
    if #[cfg(not(debug_assertions))] {
        use axum::{body::to_bytes, http::header};
        use std::sync::LazyLock;

        static MINIFY_CFG: LazyLock<minify_html::Cfg> = LazyLock::new(|| minify_html::Cfg {
            keep_closing_tags: true,
            keep_html_and_head_opening_tags: true,
            minify_css: true,
            minify_js: true,
            ..Default::default()
        });

        async fn minify(response: Response<Body>) -> Response<Body> {
            if !super::headers::is_html(response.headers()) {
                return response;
            }

            let (mut parts, body) = response.into_parts();
            let bytes = match to_bytes(body, usize::MAX).await {
                Ok(bytes) => bytes,
                Err(err) => {
                    tracing::error!(err = %err, "failed to buffer html response");
                    return Response::from_parts(parts, Body::empty());
                }
            };

            parts.headers.remove(header::CONTENT_LENGTH);

            Response::from_parts(parts, Body::from(minify_html::minify(&bytes, &MINIFY_CFG)))
        }
    } else {
        async fn minify(response: Response<Body>) -> Response<Body> {
            response
        }
    }
}

/// Minifies HTML pages and form partials in release builds.
pub async fn minify_html_middleware(response: Response<Body>) -> Response<Body> {
    minify(response).await
}
