use crate::handler::Handler;
use crate::middleware::Middleware;

use std::fmt;
use std::sync::Arc;

type ConstructorFn = dyn Fn(Box<dyn Handler>) -> Box<dyn Handler> + Send + Sync;

#[derive(Clone)]
pub struct Constructor {
    f: Arc<ConstructorFn>,
}

impl Constructor {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(Box<dyn Handler>) -> Box<dyn Handler> + Send + Sync + 'static,
    {
        Self { f: Arc::new(f) }
    }

    /// `factory` runs once per application: every handler gets its own middleware.
    pub fn middleware<F, M>(factory: F) -> Self
    where
        F: Fn() -> M + Send + Sync + 'static,
        M: Middleware + 'static,
    {
        Self::new(move |h| h.wrap(factory()).boxed())
    }

    /// Every handler built from the chain shares `m`.
    pub fn shared_middleware(m: Arc<dyn Middleware>) -> Self {
        Self::new(move |h| h.wrap(Arc::clone(&m)).boxed())
    }

    pub fn apply(&self, h: Box<dyn Handler>) -> Box<dyn Handler> {
        (self.f)(h)
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.f, &other.f)
    }
}

impl fmt::Debug for Constructor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Constructor").finish_non_exhaustive()
    }
}
