pub use anyhow::{Error, Result};

use crate::handler::Handler;
use crate::http::{Body, StatusCode};
use crate::request::Request;
use crate::response::{Responder, Response};

use futures::future::{self, BoxFuture, Ready};

pub trait CatchExt {
    type Value;
    type Error;
    fn catch<E>(self) -> Result<Result<Self::Value, E>, Self::Error>
    where
        E: std::error::Error + Send + Sync + 'static;
}

impl<T> CatchExt for Result<T> {
    type Value = T;
    type Error = Error;

    fn catch<E>(self) -> Result<Result<Self::Value, E>, Self::Error>
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        match self {
            Ok(value) => Ok(Ok(value)),
            Err(err) => match err.downcast::<E>() {
                Ok(e) => Ok(Err(e)),
                Err(err) => Err(err),
            },
        }
    }
}

/// Default router used when a chain has no fallback.
#[derive(Debug, Clone, Copy, Default, thiserror::Error)]
#[error("Not Found")]
pub struct NotFound;

impl From<NotFound> for Response {
    fn from(_: NotFound) -> Self {
        let status = StatusCode::NOT_FOUND;
        let body = Body::from("Not Found");
        Response::new(status, body)
    }
}

impl Responder for NotFound {
    type Future = Ready<Result<Response>>;

    fn respond(self) -> Self::Future {
        future::ready(Ok(self.into()))
    }
}

impl Handler for NotFound {
    fn handle<'t, 'a>(&'t self, _: Request) -> BoxFuture<'a, Result<Response>>
    where
        't: 'a,
        Self: 'a,
    {
        Box::pin(NotFound.respond())
    }
}

#[test]
fn catch_not_found() {
    let ret: Result<()> = Err(NotFound.into());
    assert!(matches!(ret.catch::<NotFound>(), Ok(Err(NotFound))));

    let ret: Result<()> = Err(anyhow::anyhow!("boom"));
    let err = ret.catch::<NotFound>().unwrap_err();
    assert_eq!(err.to_string(), "boom");

    let ret: Result<u8> = Ok(1);
    assert!(matches!(ret.catch::<NotFound>(), Ok(Ok(1))));
}
