use crate::handler::Handler;
use crate::internal_prelude::*;

use std::sync::Arc;

pub trait Middleware: Send + Sync {
    fn handle<'t, 'n, 'a>(
        &'t self,
        req: Request,
        next: &'n dyn Handler,
    ) -> BoxFuture<'a, Result<Response>>
    where
        't: 'a,
        'n: 'a,
        Self: 'a;

    fn shared(self) -> Arc<dyn Middleware>
    where
        Self: Sized + 'static,
    {
        Arc::new(self)
    }
}

impl Middleware for Arc<dyn Middleware> {
    fn handle<'t, 'n, 'a>(
        &'t self,
        req: Request,
        next: &'n dyn Handler,
    ) -> BoxFuture<'a, Result<Response>>
    where
        't: 'a,
        'n: 'a,
        Self: 'a,
    {
        (**self).handle(req, next)
    }
}
