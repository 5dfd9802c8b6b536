use crate::internal_prelude::*;

use std::fmt;
use std::sync::Arc;

use tracing::warn;

type EndwareFn = dyn Fn(&Response, &RequestHead) -> Result<()> + Send + Sync;
type ErrorFn = dyn Fn(&Response, &RequestHead, &Error) + Send + Sync;

#[derive(Clone)]
pub struct Endware {
    f: Arc<EndwareFn>,
    on_error: Option<Arc<ErrorFn>>,
}

impl Endware {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Response, &RequestHead) + Send + Sync + 'static,
    {
        Self::fallible(move |res: &Response, head: &RequestHead| {
            f(res, head);
            Ok(())
        })
    }

    pub fn fallible<F>(f: F) -> Self
    where
        F: Fn(&Response, &RequestHead) -> Result<()> + Send + Sync + 'static,
    {
        Self {
            f: Arc::new(f),
            on_error: None,
        }
    }

    pub fn on_error<G>(self, g: G) -> Self
    where
        G: Fn(&Response, &RequestHead, &Error) + Send + Sync + 'static,
    {
        Self {
            f: self.f,
            on_error: Some(Arc::new(g)),
        }
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.f, &other.f)
    }

    pub(crate) fn run(&self, index: usize, res: &Response, head: &RequestHead, logging: bool) {
        let err = match (self.f)(res, head) {
            Ok(()) => return,
            Err(err) => err,
        };
        match self.on_error {
            Some(ref g) => g(res, head, &err),
            None if logging => warn!(
                index,
                method = %head.method(),
                path = head.path(),
                error = %err,
                "endware failed"
            ),
            None => {}
        }
    }
}

impl fmt::Debug for Endware {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Endware")
            .field("on_error", &self.on_error.is_some())
            .finish_non_exhaustive()
    }
}
