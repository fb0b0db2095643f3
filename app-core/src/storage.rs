//! This module defines the `Storage` type which wraps any serializable app
//! state and provides methods to store/load it to/from a JSON file.

use serde::{Deserialize, Serialize};
use serde_json::{from_reader, to_writer_pretty};
use std::path::{Path, PathBuf};

use super::string_error::ErrorStringExt;

const STORAGE_FILE: &str = "./.namesurfer_session.json";
const STORAGE_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
pub struct Storage<S> {
    pub version: u32,
    pub state: S,
}

impl<S> Storage<S>
where
    for<'a> S: Serialize + Deserialize<'a>,
{
    pub fn new(state: S) -> Self {
        Self {
            version: STORAGE_VERSION,
            state,
        }
    }

    pub fn save_json(&self, input_path: Option<&Path>) -> Result<(), String> {
        let output_path = resolve_path(input_path);
        let file =
            std::fs::File::create(&output_path).err_to_string("could not open storage file")?;
        to_writer_pretty(file, &self).err_to_string("could not save app state to json")?;
        log::debug!("saved app state to file {:?}", output_path);
        Ok(())
    }

    pub fn load_json(input_path: Option<&Path>) -> Result<Storage<S>, String> {
        let input_path = resolve_path(input_path);
        let file = std::fs::File::open(&input_path).err_to_string("could not open storage file")?;
        let storage: Storage<S> =
            from_reader(file).err_to_string("could not load app state from storage file")?;
        if storage.version != STORAGE_VERSION {
            return Err(format!(
                "unsupported storage version {} (expected {})",
                storage.version, STORAGE_VERSION
            ));
        }
        log::debug!("loaded app state from file {:?}", input_path);
        Ok(storage)
    }
}

fn resolve_path(input_path: Option<&Path>) -> PathBuf {
    input_path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(STORAGE_FILE))
}
