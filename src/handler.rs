use crate::internal_prelude::*;
use crate::middleware::Middleware;

use std::sync::Arc;

pub trait Handler: Send + Sync {
    fn handle<'t, 'a>(&'t self, req: Request) -> BoxFuture<'a, Result<Response>>
    where
        't: 'a,
        Self: 'a;

    fn wrap<M>(self, m: M) -> Wrap<Self, M>
    where
        Self: Sized,
        M: Middleware,
    {
        Wrap { inner: self, m }
    }

    fn boxed(self) -> Box<dyn Handler>
    where
        Self: Sized + 'static,
    {
        Box::new(self)
    }

    fn shared(self) -> Arc<dyn Handler>
    where
        Self: Sized + 'static,
    {
        Arc::new(self)
    }
}

impl Handler for Box<dyn Handler> {
    fn handle<'t, 'a>(&'t self, req: Request) -> BoxFuture<'a, Result<Response>>
    where
        't: 'a,
        Self: 'a,
    {
        (**self).handle(req)
    }
}

impl Handler for Arc<dyn Handler> {
    fn handle<'t, 'a>(&'t self, req: Request) -> BoxFuture<'a, Result<Response>>
    where
        't: 'a,
        Self: 'a,
    {
        (**self).handle(req)
    }
}

pub struct Wrap<H, M> {
    inner: H,
    m: M,
}

impl<H, M> Handler for Wrap<H, M>
where
    H: Handler,
    M: Middleware,
{
    fn handle<'t, 'a>(&'t self, req: Request) -> BoxFuture<'a, Result<Response>>
    where
        't: 'a,
        Self: 'a,
    {
        self.m.handle(req, &self.inner)
    }
}
