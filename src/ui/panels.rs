use eframe::egui::{self, Color32, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::chart::request::ChartKind;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(table) = &state.table {
            ui.label(format!(
                "{} rows × {} columns",
                table.len(),
                table.columns().len()
            ));
            if let Some(path) = &state.source_path {
                ui.label(RichText::new(path.display().to_string()).weak());
            }
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Left side panel – chart controls
// ---------------------------------------------------------------------------

/// Render the chart controls: graph type, axis columns, visualize button.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Chart");
    ui.separator();

    let columns: Vec<String> = match &state.table {
        Some(table) => table.columns().to_vec(),
        None => {
            ui.label("No file loaded.");
            return;
        }
    };

    ui.label("Graph Type:");
    egui::ComboBox::from_id_salt("graph_type")
        .selected_text(state.request.kind.label())
        .show_ui(ui, |ui: &mut Ui| {
            for kind in ChartKind::ALL {
                ui.selectable_value(&mut state.request.kind, kind, kind.label());
            }
        });

    ui.add_space(4.0);
    ui.label("X-axis Variable:");
    column_combo(ui, "x_axis", &mut state.request.x_column, &columns);

    ui.add_space(4.0);
    ui.label("Y-axis Variable:");
    column_combo(ui, "y_axis", &mut state.request.y_column, &columns);

    ui.add_space(8.0);
    if ui.button("Visualize").clicked() {
        state.visualize();
    }
}

fn column_combo(ui: &mut Ui, id: &str, selection: &mut String, columns: &[String]) {
    egui::ComboBox::from_id_salt(id)
        .selected_text(selection.clone())
        .show_ui(ui, |ui: &mut Ui| {
            for col in columns {
                if ui.selectable_label(selection == col, col).clicked() {
                    *selection = col.clone();
                }
            }
        });
}

// ---------------------------------------------------------------------------
// Bottom panel – data preview
// ---------------------------------------------------------------------------

/// Render a capped preview of the loaded table.
pub fn data_preview(ui: &mut Ui, state: &AppState) {
    let Some(table) = &state.table else {
        ui.label("No file loaded.");
        return;
    };
    let columns = table.columns();
    if columns.is_empty() {
        ui.label("Loaded table has no columns.");
        return;
    }
    if table.is_empty() {
        ui.label("Loaded table has no data rows.");
        return;
    }

    let n_rows = table.len().min(state.config.preview_rows);

    TableBuilder::new(ui)
        .striped(true)
        .columns(Column::auto().resizable(true), columns.len())
        .header(20.0, |mut header| {
            for col in columns {
                header.col(|ui| {
                    ui.strong(col);
                });
            }
        })
        .body(|body| {
            body.rows(18.0, n_rows, |mut row| {
                let row_idx = row.index();
                for col_idx in 0..columns.len() {
                    row.col(|ui| {
                        if let Some(cell) = table.cell(row_idx, col_idx) {
                            ui.label(cell.to_string());
                        }
                    });
                }
            });
        });

    if table.len() > n_rows {
        ui.weak(format!("… {} more rows", table.len() - n_rows));
    }
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let mut dialog = rfd::FileDialog::new()
        .set_title("Open table")
        .add_filter("Supported files", &["csv", "xlsx"])
        .add_filter("CSV", &["csv"])
        .add_filter("Excel", &["xlsx"]);
    if let Some(dir) = &state.config.last_open_dir {
        dialog = dialog.set_directory(dir);
    }

    let Some(path) = dialog.pick_file() else {
        return;
    };

    match crate::data::loader::load_file(&path) {
        Ok(table) => {
            log::info!(
                "Loaded {} rows with columns {:?}",
                table.len(),
                table.columns()
            );
            if let Some(dir) = path.parent() {
                state.config.last_open_dir = Some(dir.to_path_buf());
                if let Err(e) = state.config.save() {
                    log::warn!("could not save config: {e:#}");
                }
            }
            state.set_table(path, table);
        }
        Err(e) => {
            log::error!("Failed to load file: {e:#}");
            state.status_message = Some(format!("Error: {e:#}"));
        }
    }
}
