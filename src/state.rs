use std::path::PathBuf;

use crate::chart::figure::{Figure, build_figure};
use crate::chart::request::ChartRequest;
use crate::config::Config;
use crate::data::model::Table;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Persisted preferences.
    pub config: Config,

    /// Loaded table (None until user loads a file).
    pub table: Option<Table>,

    /// Path of the loaded file, shown in the top bar.
    pub source_path: Option<PathBuf>,

    /// Live chart selections as entered in the side panel.
    pub request: ChartRequest,

    /// Last successfully built figure.
    pub figure: Option<Figure>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let request = ChartRequest {
            kind: config.default_chart,
            ..Default::default()
        };
        Self {
            config,
            table: None,
            source_path: None,
            request,
            figure: None,
            status_message: None,
        }
    }

    /// Ingest a newly loaded table, replacing the previous one wholesale.
    ///
    /// Axis selections are kept; ones that no longer resolve against the
    /// new schema are rejected by the next validation.
    pub fn set_table(&mut self, path: PathBuf, table: Table) {
        self.table = Some(table);
        self.source_path = Some(path);
        self.status_message = None;
    }

    /// Validate the current request and dispatch it to a figure.
    ///
    /// On failure the error is logged and surfaced in the status line; the
    /// previous figure is left untouched.
    pub fn visualize(&mut self) {
        let Some(table) = &self.table else {
            self.status_message = Some("No file loaded.".to_string());
            return;
        };
        match self.request.validate(table) {
            Ok(validated) => {
                log::info!(
                    "plotting {} over x={:?} y={:?}",
                    self.request.kind.label(),
                    self.request.x_column,
                    self.request.y_column
                );
                self.figure = Some(build_figure(table, &validated));
                self.status_message = None;
            }
            Err(e) => {
                log::error!("cannot plot: {e}");
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }
}
