pub use hyper::header::{self, HeaderMap, HeaderValue};
pub use hyper::{Body, Method, StatusCode, Uri, Version};
