use std::path::PathBuf;

use app_core::{event::AppEvent, string_error::ErrorStringExt};
use derive_new::new;
use rank_data::RankRecord;

use super::{
    storage::{load_json, save_json},
    NameSurfer,
};

/// Look up a name and add it to the chart.
#[derive(new)]
pub struct AddName {
    name: String,
}

impl AppEvent for AddName {
    type App = NameSurfer;

    fn apply(&self, app: &mut Self::App) -> Result<(), String> {
        if app.session.add_name(&self.name, &app.store) {
            let shown = app.session.records().len();
            app.notify(format!("graphing '{}' ({} on display)", self.name, shown));
        } else {
            // Not an error, the user may simply have mistyped.
            app.notify(format!("'{}' is not in the dataset", self.name));
        }
        Ok(())
    }

    fn describe(&self) -> String {
        format!("add name '{}'", self.name)
    }
}

#[derive(new)]
pub struct ClearChart {}

impl AppEvent for ClearChart {
    type App = NameSurfer;

    fn apply(&self, app: &mut Self::App) -> Result<(), String> {
        app.session_mut().clear();
        app.notify("chart cleared");
        Ok(())
    }

    fn describe(&self) -> String {
        "clear chart".to_string()
    }
}

#[derive(new)]
pub struct ResizeViewport {
    width: f64,
    height: f64,
}

impl AppEvent for ResizeViewport {
    type App = NameSurfer;

    fn apply(&self, app: &mut Self::App) -> Result<(), String> {
        if !(self.width > 0.0 && self.height > 0.0) {
            log::warn!(
                "viewport {}x{} is degenerate, the chart will be empty",
                self.width,
                self.height
            );
        }
        app.session_mut().resize(self.width, self.height);
        app.notify(format!("viewport is now {}x{}", self.width, self.height));
        Ok(())
    }

    fn describe(&self) -> String {
        format!("resize to {}x{}", self.width, self.height)
    }
}

/// Print the raw record of a name without adding it to the chart.
#[derive(new)]
pub struct ShowName {
    name: String,
}

impl AppEvent for ShowName {
    type App = NameSurfer;

    fn apply(&self, app: &mut Self::App) -> Result<(), String> {
        let message = match app.store().find(&self.name) {
            Some(record) => match record
                .best_rank()
                .and_then(|(decade, rank)| Some((RankRecord::decade_of(decade)?, rank)))
            {
                Some((year, rank)) => format!("{} (best: #{} in the {}s)", record, rank, year),
                None => format!("{} (never ranked)", record),
            },
            None => format!("'{}' is not in the dataset", self.name),
        };
        app.notify(message);
        Ok(())
    }

    fn describe(&self) -> String {
        format!("show name '{}'", self.name)
    }
}

/// List the names on display, or every name of the dataset with `dataset`.
#[derive(new)]
pub struct ListNames {
    dataset: bool,
}

impl AppEvent for ListNames {
    type App = NameSurfer;

    fn apply(&self, app: &mut Self::App) -> Result<(), String> {
        let message = if self.dataset {
            let names = app.store().names();
            if names.is_empty() {
                "the dataset is empty".to_string()
            } else {
                format!("{} names: {}", names.len(), names.join(", "))
            }
        } else {
            let names = app.session().names();
            if names.is_empty() {
                "nothing on display".to_string()
            } else {
                names.join(", ")
            }
        };
        app.notify(message);
        Ok(())
    }

    fn describe(&self) -> String {
        if self.dataset {
            "list dataset names".to_string()
        } else {
            "list names".to_string()
        }
    }
}

#[derive(new)]
pub struct ExportSvg {
    path: PathBuf,
}

impl AppEvent for ExportSvg {
    type App = NameSurfer;

    fn apply(&self, app: &mut Self::App) -> Result<(), String> {
        log::debug!("requested to save svg at '{:?}'", self.path);
        let raw = app.session().to_svg();
        std::fs::write(&self.path, raw).err_to_string("unable to write svg file")?;
        app.notify(format!("saved chart to {}", self.path.display()));
        Ok(())
    }

    fn describe(&self) -> String {
        format!("export svg to {:?}", self.path)
    }
}

#[derive(new)]
pub struct SaveSession {
    path: Option<PathBuf>,
}

impl AppEvent for SaveSession {
    type App = NameSurfer;

    fn apply(&self, app: &mut Self::App) -> Result<(), String> {
        save_json(app.session(), self.path.as_deref())?;
        app.notify("session saved");
        Ok(())
    }

    fn describe(&self) -> String {
        format!("save session to {:?}", self.path)
    }
}

#[derive(new)]
pub struct LoadSession {
    path: Option<PathBuf>,
}

impl AppEvent for LoadSession {
    type App = NameSurfer;

    fn apply(&self, app: &mut Self::App) -> Result<(), String> {
        load_json(&mut app.session, &app.store, self.path.as_deref())?;
        let shown = app.session.records().len();
        app.notify(format!("session loaded ({} on display)", shown));
        Ok(())
    }

    fn describe(&self) -> String {
        format!("load session from {:?}", self.path)
    }
}

#[derive(new)]
pub struct Quit {}

impl AppEvent for Quit {
    type App = NameSurfer;

    fn apply(&self, app: &mut Self::App) -> Result<(), String> {
        app.request_quit();
        Ok(())
    }

    fn describe(&self) -> String {
        "quit".to_string()
    }
}
