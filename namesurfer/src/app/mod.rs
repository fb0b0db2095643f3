pub mod command;
pub mod config;
pub mod events;
pub mod session;
pub mod storage;

use rank_chart::{ChartLayout, Viewport};
use rank_data::RankStore;

use config::Config;
use session::Session;

/// State of the application: the dataset, the chart on display and the
/// messages waiting to be shown to the user.
pub struct NameSurfer {
    config: Config,
    store: RankStore,
    session: Session,
    messages: Vec<String>,
    should_quit: bool,
}

impl NameSurfer {
    pub fn new(config: Config, store: RankStore) -> Self {
        let session = Session::new(
            ChartLayout::new(config.layout.clone()),
            Viewport::new(config.width, config.height),
        );
        Self {
            config,
            store,
            session,
            messages: Vec::new(),
            should_quit: false,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn store(&self) -> &RankStore {
        &self.store
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub fn notify(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }

    pub fn take_messages(&mut self) -> Vec<String> {
        std::mem::take(&mut self.messages)
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}
