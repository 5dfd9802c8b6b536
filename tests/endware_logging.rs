use nuclear_chain::error::NotFound;
use nuclear_chain::http::Body;
use nuclear_chain::prelude::*;

use std::fmt;
use std::sync::{Arc, Mutex};

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

type Warnings = Arc<Mutex<Vec<String>>>;

#[derive(Default)]
struct Fields {
    message: String,
    index: Option<u64>,
}

impl Visit for Fields {
    fn record_u64(&mut self, field: &Field, value: u64) {
        if field.name() == "index" {
            self.index = Some(value);
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{:?}", value);
        }
    }
}

struct CaptureWarnings(Warnings);

impl<S: Subscriber> Layer<S> for CaptureWarnings {
    fn on_event(&self, event: &Event<'_>, _: Context<'_, S>) {
        if *event.metadata().level() != Level::WARN {
            return;
        }
        let mut fields = Fields::default();
        event.record(&mut fields);
        let line = match fields.index {
            Some(index) => format!("{} index={}", fields.message, index),
            None => fields.message,
        };
        self.0.lock().unwrap().push(line);
    }
}

fn serve_once(logging: bool) -> Vec<String> {
    let warnings = Warnings::default();
    let subscriber = tracing_subscriber::registry().with(CaptureWarnings(warnings.clone()));

    let handled = Endware::fallible(|_, _| Err(anyhow::anyhow!("handled"))).on_error(|_, _, _| {});
    let unhandled = Endware::fallible(|_, _| Err(anyhow::anyhow!("unhandled")));

    let chain = Chain::default()
        .set_endware_logging(logging)
        .after(vec![Endware::new(|_, _| {}), handled, unhandled]);

    tracing::subscriber::with_default(subscriber, || {
        let h = chain.then(Some(NotFound.boxed()));
        let req = Request::from(hyper::Request::new(Body::empty()));
        futures::executor::block_on(h.handle(req)).unwrap();
    });

    let lines = warnings.lock().unwrap().clone();
    lines
}

#[test]
fn unhandled_failure_is_logged_when_enabled() {
    assert_eq!(serve_once(true), ["endware failed index=2"]);
}

#[test]
fn unhandled_failure_is_silent_by_default() {
    assert!(serve_once(false).is_empty());
}
