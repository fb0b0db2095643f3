//! Events mutate the application state one at a time, in the order they were
//! queued.

pub trait AppEvent {
    type App;
    fn apply(&self, app: &mut Self::App) -> Result<(), String>;
    /// Short human readable description, used for logging.
    fn describe(&self) -> String;
}

/// The EventQueue stores events until they are run against the app.
pub struct EventQueue<A> {
    queue: Vec<Box<dyn AppEvent<App = A>>>,
}

impl<A> EventQueue<A> {
    pub fn new() -> Self {
        Self { queue: Vec::new() }
    }

    pub fn queue_event(&mut self, event: Box<dyn AppEvent<App = A>>) {
        self.queue.push(event);
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Apply all queued events in FIFO order and return the number of events
    /// that failed. A failing event is logged and does not stop the
    /// remaining ones.
    pub fn run_events(&mut self, app: &mut A) -> usize {
        let mut failed = 0;
        for event in self.queue.drain(..) {
            log::debug!("running event '{}'", event.describe());
            if let Err(err) = event.apply(app) {
                log::error!("event '{}' failed: {}", event.describe(), err);
                failed += 1;
            }
        }
        failed
    }
}

impl<A> Default for EventQueue<A> {
    fn default() -> Self {
        Self::new()
    }
}
