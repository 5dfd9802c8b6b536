use crate::http::{HeaderMap, Method, Uri, Version};
use crate::internal_prelude::*;

use std::ops;

#[derive(Debug)]
pub struct Request {
    inner: Box<HyperRequest>,
}

impl From<HyperRequest> for Request {
    fn from(req: HyperRequest) -> Self {
        Self {
            inner: Box::new(req),
        }
    }
}

impl ops::Deref for Request {
    type Target = HyperRequest;

    fn deref(&self) -> &Self::Target {
        self.inner.as_ref()
    }
}

impl ops::DerefMut for Request {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.inner.as_mut()
    }
}

// Body and extensions are not captured.
#[derive(Debug, Clone)]
pub struct RequestHead {
    method: Method,
    uri: Uri,
    version: Version,
    headers: HeaderMap,
}

impl RequestHead {
    pub fn capture(req: &Request) -> Self {
        Self {
            method: req.method().clone(),
            uri: req.uri().clone(),
            version: req.version(),
            headers: req.headers().clone(),
        }
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn uri(&self) -> &Uri {
        &self.uri
    }

    pub fn path(&self) -> &str {
        self.uri.path()
    }

    pub fn version(&self) -> Version {
        self.version
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }
}

#[test]
fn capture_head() {
    let hreq = hyper::Request::builder()
        .method(Method::POST)
        .uri("/posts/42?draft=1")
        .header("x-request-id", "abc")
        .body(Body::from("payload"))
        .unwrap();
    let req = Request::from(hreq);

    let head = RequestHead::capture(&req);
    assert_eq!(head.method(), Method::POST);
    assert_eq!(head.path(), "/posts/42");
    assert_eq!(head.uri().query(), Some("draft=1"));
    assert_eq!(head.version(), Version::HTTP_11);
    assert_eq!(head.headers()["x-request-id"], "abc");
}
