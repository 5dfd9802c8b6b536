use crate::constructor::Constructor;
use crate::endware::Endware;
use crate::error::NotFound;
use crate::functional::{handler, HandlerFn};
use crate::internal_prelude::*;

use std::fmt;
use std::sync::Arc;

use tracing::trace;

/// `Chain::new([m1, m2, m3]).then(Some(h))` is `m1(m2(m3(h)))`.
#[derive(Clone, Default)]
pub struct Chain {
    constructors: Vec<Constructor>,
    endware: Vec<Endware>,
    endware_logging: bool,
    fallback: Option<Arc<dyn Handler>>,
}

impl Chain {
    pub fn new(constructors: impl IntoIterator<Item = Constructor>) -> Self {
        Self {
            constructors: constructors.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn constructors(&self) -> &[Constructor] {
        &self.constructors
    }

    pub fn endware(&self) -> &[Endware] {
        &self.endware
    }

    pub fn is_empty(&self) -> bool {
        self.constructors.is_empty() && self.endware.is_empty()
    }

    /// `None` selects the default router: the [`fallback`](Self::fallback), or [`NotFound`].
    ///
    /// Constructors are applied on every call. Endware runs only when the
    /// terminal handler returns `Ok`; an `Err` skips it and propagates.
    pub fn then(&self, h: Option<Box<dyn Handler>>) -> Box<dyn Handler> {
        let terminal = match h {
            Some(h) => h,
            None => self.default_router(),
        };

        let mut h = if self.endware.is_empty() {
            terminal
        } else {
            Finish {
                terminal,
                endware: self.endware.clone(),
                logging: self.endware_logging,
            }
            .boxed()
        };

        for constructor in self.constructors.iter().rev() {
            h = constructor.apply(h);
        }

        trace!(
            constructors = self.constructors.len(),
            endware = self.endware.len(),
            "chain composed"
        );

        h
    }

    pub fn then_func<F>(&self, f: Option<F>) -> Box<dyn Handler>
    where
        F: 'static,
        HandlerFn<F>: Handler,
    {
        match f {
            Some(f) => self.then(Some(handler(f).boxed())),
            None => self.then(None),
        }
    }

    pub fn append(&self, constructors: impl IntoIterator<Item = Constructor>) -> Self {
        let mut new = self.clone();
        new.constructors.extend(constructors);
        new
    }

    pub fn append_endware(&self, endware: impl IntoIterator<Item = Endware>) -> Self {
        let mut new = self.clone();
        new.endware.extend(endware);
        new
    }

    /// Replaces the endware list. Use [`append_endware`](Self::append_endware) to add to it.
    pub fn after(&self, endware: impl IntoIterator<Item = Endware>) -> Self {
        Self {
            endware: endware.into_iter().collect(),
            ..self.clone()
        }
    }

    // logging and fallback stay those of `self`
    pub fn extend(&self, other: &Chain) -> Self {
        self.append(other.constructors.iter().cloned())
            .append_endware(other.endware.iter().cloned())
    }

    pub fn set_endware_logging(&self, enabled: bool) -> Self {
        Self {
            endware_logging: enabled,
            ..self.clone()
        }
    }

    pub fn fallback(&self, h: Arc<dyn Handler>) -> Self {
        Self {
            fallback: Some(h),
            ..self.clone()
        }
    }

    fn default_router(&self) -> Box<dyn Handler> {
        match self.fallback {
            Some(ref h) => Arc::clone(h).boxed(),
            None => NotFound.boxed(),
        }
    }
}

impl fmt::Debug for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chain")
            .field("constructors", &self.constructors.len())
            .field("endware", &self.endware.len())
            .field("endware_logging", &self.endware_logging)
            .field("fallback", &self.fallback.is_some())
            .finish()
    }
}

struct Finish {
    terminal: Box<dyn Handler>,
    endware: Vec<Endware>,
    logging: bool,
}

impl Handler for Finish {
    fn handle<'t, 'a>(&'t self, req: Request) -> BoxFuture<'a, Result<Response>>
    where
        't: 'a,
        Self: 'a,
    {
        Box::pin(async move {
            let head = RequestHead::capture(&req);
            let res = self.terminal.handle(req).await?;
            for (index, endware) in self.endware.iter().enumerate() {
                endware.run(index, &res, &head, self.logging);
            }
            Ok(res)
        })
    }
}

#[cfg(test)]
fn nop() -> Constructor {
    Constructor::new(|h| h)
}

#[cfg(test)]
fn silent() -> Endware {
    Endware::new(|_, _| {})
}

#[cfg(test)]
fn same<T>(lhs: &[T], rhs: &[T], eq: impl Fn(&T, &T) -> bool) -> bool {
    lhs.len() == rhs.len() && lhs.iter().zip(rhs).all(|(l, r)| eq(l, r))
}

#[test]
fn append_keeps_receiver() {
    let (m1, m2, m3) = (nop(), nop(), nop());

    let base = Chain::new(vec![m1.clone(), m2.clone()]);
    let ext = base.append(vec![m3.clone()]);

    assert!(same(base.constructors(), &[m1.clone(), m2.clone()], Constructor::ptr_eq));
    assert!(same(ext.constructors(), &[m1, m2, m3], Constructor::ptr_eq));
}

#[test]
fn append_is_associative() {
    let (x, y) = (nop(), nop());
    let base = Chain::new(vec![nop()]);

    let stepwise = base.append(vec![x.clone()]).append(vec![y.clone()]);
    let at_once = base.append(vec![x, y]);

    assert!(same(
        stepwise.constructors(),
        at_once.constructors(),
        Constructor::ptr_eq
    ));
}

#[test]
fn new_copies_input() {
    let mut input = vec![nop(), nop()];
    let chain = Chain::new(input.clone());
    input.push(nop());
    input.swap(0, 1);

    assert_eq!(chain.constructors().len(), 2);
    assert!(!chain.constructors()[0].ptr_eq(&input[0]));
    assert!(Chain::new(Vec::<Constructor>::new()).is_empty());
}

#[test]
fn after_replaces_endware() {
    let (e1, e2, e3) = (silent(), silent(), silent());
    let base = Chain::new(vec![nop()]);

    let replaced = base.after(vec![e1.clone(), e2.clone()]).after(vec![e3.clone()]);
    assert!(same(replaced.endware(), &[e3.clone()], Endware::ptr_eq));

    let appended = base
        .after(vec![e1.clone(), e2.clone()])
        .append_endware(vec![e3.clone()]);
    assert!(same(appended.endware(), &[e1, e2, e3], Endware::ptr_eq));

    assert!(base.endware().is_empty());
    assert_eq!(replaced.constructors().len(), 1);
}

#[test]
fn extend_appends_both_lists() {
    let (m1, m2, m3, m4) = (nop(), nop(), nop(), nop());
    let e1 = silent();

    let a = Chain::new(vec![m1.clone(), m2.clone()]);
    let b = Chain::new(vec![m3.clone(), m4.clone()]).after(vec![e1.clone()]);
    let c = a.extend(&b);

    assert!(same(c.constructors(), &[m1, m2, m3, m4], Constructor::ptr_eq));
    assert!(same(c.endware(), &[e1.clone()], Endware::ptr_eq));

    let e0 = silent();
    let d = a.after(vec![e0.clone()]).extend(&b);
    assert!(same(d.endware(), &[e0, e1], Endware::ptr_eq));
    assert_eq!(a.constructors().len(), 2);
    assert!(a.endware().is_empty());
}

#[test]
fn settings_survive_extension() {
    let chain = Chain::new(vec![nop()])
        .set_endware_logging(true)
        .fallback(NotFound.shared());
    let ext = chain.append(vec![nop()]).after(vec![silent()]);

    assert!(ext.endware_logging);
    assert!(ext.fallback.is_some());
    assert!(!Chain::default().endware_logging);
}
