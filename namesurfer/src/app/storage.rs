//! Saving and restoring the display list and viewport of a `Session`.

use std::path::Path;

use app_core::storage::Storage;
use rank_data::RankStore;
use serde::{Deserialize, Serialize};

use super::session::Session;

// Records are not stored; names are resolved against the dataset again on
// load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionStorage {
    pub names: Vec<String>,
    pub width: f64,
    pub height: f64,
}

impl From<&Session> for SessionStorage {
    fn from(session: &Session) -> Self {
        let viewport = session.viewport();
        Self {
            names: session.names(),
            width: viewport.width,
            height: viewport.height,
        }
    }
}

pub fn save_json(session: &Session, path: Option<&Path>) -> Result<(), String> {
    Storage::new(SessionStorage::from(session)).save_json(path)
}

/// Replace the contents of `session` with the stored state. Names no longer
/// present in `store` are dropped with a warning.
pub fn load_json(session: &mut Session, store: &RankStore, path: Option<&Path>) -> Result<(), String> {
    let Storage::<SessionStorage> { state, .. } = Storage::load_json(path)?;
    session.clear();
    session.resize(state.width, state.height);
    for name in state.names.iter() {
        if !session.add_name(name, store) {
            log::warn!("stored name '{}' not found in dataset", name);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use rank_chart::{ChartLayout, Viewport};

    use super::*;

    #[test]
    fn test_session_round_trip() {
        let _ = env_logger::builder().is_test(true).try_init();
        let mut store = RankStore::new();
        store.load([
            "Eric 1 2 0 0 0 0 0 0 0 0 0",
            "Jean 1 5 0 10 0 0 0 0 0 0 0",
        ]);
        let mut session = Session::new(ChartLayout::default(), Viewport::new(640.0, 480.0));
        session.add_name("jean", &store);
        session.add_name("eric", &store);

        let path = std::env::temp_dir().join(format!(
            "namesurfer_session_test_{}.json",
            std::process::id()
        ));
        save_json(&session, Some(&path)).unwrap();

        let mut restored = Session::new(ChartLayout::default(), Viewport::new(1.0, 1.0));
        restored.add_name("eric", &store);
        load_json(&mut restored, &store, Some(&path)).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(restored.names(), vec!["Jean", "Eric"]);
        assert_eq!(restored.viewport(), Viewport::new(640.0, 480.0));
        assert_eq!(restored.primitives(), session.primitives());
    }
}
