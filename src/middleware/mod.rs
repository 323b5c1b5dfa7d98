mod headers;
mod minify;

pub use headers::{cache_control_middleware, security_headers_middleware};
pub use minify::minify_html_middleware;
