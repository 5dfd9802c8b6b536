use crate::http::{header, HeaderValue, StatusCode};
use crate::internal_prelude::*;

use std::ops;

use futures::future::{self, Either, Ready};
use pin_project::pin_project;

#[derive(Debug)]
pub struct Response {
    inner: Box<HyperResponse>,
}

impl Response {
    pub fn new(status: StatusCode, body: Body) -> Self {
        let mut inner = Box::new(HyperResponse::new(body));
        *inner.status_mut() = status;
        Self { inner }
    }

    pub fn text(s: impl Into<String>) -> Self {
        let mut res = Self::new(StatusCode::OK, Body::from(s.into()));
        let content_type = HeaderValue::from_static(mime::TEXT_PLAIN_UTF_8.as_ref());
        res.headers_mut().insert(header::CONTENT_TYPE, content_type);
        res
    }

    pub fn into_hyper(self) -> HyperResponse {
        *self.inner
    }
}

impl ops::Deref for Response {
    type Target = HyperResponse;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl ops::DerefMut for Response {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}

impl From<StatusCode> for Response {
    fn from(status: StatusCode) -> Self {
        Response::new(status, Body::empty())
    }
}

pub trait Responder: Send + Sync {
    type Future: Future<Output = Result<Response>> + Send;

    fn respond(self) -> Self::Future;
}

type Done = Ready<Result<Response>>;

impl Responder for () {
    type Future = Done;

    fn respond(self) -> Self::Future {
        future::ok(StatusCode::OK.into())
    }
}

impl Responder for &str {
    type Future = Done;

    fn respond(self) -> Self::Future {
        future::ok(Response::text(self))
    }
}

impl Responder for Response {
    type Future = Done;

    fn respond(self) -> Self::Future {
        future::ok(self)
    }
}

impl<T, E> Responder for Result<T, E>
where
    T: Responder,
    E: Into<Error> + Send + Sync,
{
    type Future = Either<T::Future, Done>;

    fn respond(self) -> Self::Future {
        self.map_or_else(
            |err| Either::Right(future::err(err.into())),
            |value| Either::Left(value.respond()),
        )
    }
}

impl<R> Responder for (StatusCode, R)
where
    R: Responder,
{
    type Future = WithStatus<R::Future>;

    fn respond(self) -> Self::Future {
        let (status, inner) = self;
        WithStatus {
            inner: inner.respond(),
            status,
        }
    }
}

#[pin_project]
pub struct WithStatus<F> {
    #[pin]
    inner: F,
    status: StatusCode,
}

impl<F> Future for WithStatus<F>
where
    F: Future<Output = Result<Response>>,
{
    type Output = Result<Response>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();
        let status = *this.status;
        this.inner.poll(cx).map_ok(|mut res| {
            *res.status_mut() = status;
            res
        })
    }
}

#[test]
fn status_is_overridden() {
    let res = futures::executor::block_on((StatusCode::CREATED, "made").respond()).unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    assert_eq!(
        res.headers()[header::CONTENT_TYPE],
        mime::TEXT_PLAIN_UTF_8.as_ref()
    );

    let ret: std::result::Result<(), crate::error::NotFound> = Err(crate::error::NotFound);
    let err = futures::executor::block_on(ret.respond()).unwrap_err();
    assert_eq!(err.to_string(), "Not Found");
}
