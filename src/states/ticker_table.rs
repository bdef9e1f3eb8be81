//! Ticker Table State
//!
//! GPUI entity around [`TickerTable`]. Owns the in-flight load so that
//! dropping the entity aborts the request.

use crate::constants::EXPORT_FILE_PREFIX;
use crate::domain::table::{LoadState, TickerTable};
use crate::domain::ticker::TickerField;
use crate::grid::PageSize;
use crate::helpers::{export_dir, format_file_stamp};
use crate::services::{run_in_tokio, spawn_fetch};
use crate::states::{TickerGlobalStore, UIEvent, i18n_format, i18n_status};
use gpui::{Context, EventEmitter, Task};
use tracing::{error, info};

/// Ticker table entity
pub struct TickerTableState {
    table: TickerTable,
    /// Pending ticker request
    load_task: Option<Task<()>>,
}

impl EventEmitter<UIEvent> for TickerTableState {}

impl TickerTableState {
    pub fn new(page_size: PageSize) -> Self {
        Self {
            table: TickerTable::with_page_size(page_size),
            load_task: None,
        }
    }

    // ==================== Getters ====================

    pub fn table(&self) -> &TickerTable {
        &self.table
    }

    pub fn load_state(&self) -> &LoadState {
        self.table.load_state()
    }

    // ==================== Loading ====================

    /// Fetch tickers unless a request is in flight or rows are loaded
    pub fn load(&mut self, cx: &mut Context<Self>) {
        if !self.table.begin_load() {
            return;
        }
        cx.notify();

        let client = cx.global::<TickerGlobalStore>().client().clone();
        let request = spawn_fetch(client);

        self.load_task = Some(cx.spawn(async move |handle, cx| {
            let result = request.await.and_then(|rows| rows);
            let _ = handle.update(cx, |this, cx| {
                this.load_task = None;
                this.table.finish_load(result);
                cx.notify();
            });
        }));
    }

    // ==================== Handlers ====================

    pub fn toggle_columns(&mut self, cx: &mut Context<Self>) {
        let visible = self.table.toggle_columns();
        info!(visible, "Toggled Symbol and Price Change columns");
        cx.notify();
    }

    pub fn change_page_size(&mut self, requested: &str, cx: &mut Context<Self>) {
        match self.table.change_page_size(requested) {
            Ok(size) => info!(page_size = size.get(), "Page size changed"),
            Err(e) => {
                error!(error = %e, "Rejected page size");
                cx.emit(UIEvent::error(e.to_string()));
            }
        }
        cx.notify();
    }

    pub fn apply_quick_filter(&mut self, text: &str, cx: &mut Context<Self>) {
        self.table.apply_quick_filter(text);
        cx.notify();
    }

    /// Floating filter input of a column
    pub fn set_column_filter(&mut self, field: TickerField, text: &str, cx: &mut Context<Self>) {
        self.table.grid_mut().set_column_filter(field, text);
        cx.notify();
    }

    pub fn sort_by(&mut self, field: TickerField, cx: &mut Context<Self>) {
        self.table.grid_mut().sort_by(field);
        cx.notify();
    }

    pub fn go_to_page(&mut self, page: usize, cx: &mut Context<Self>) {
        self.table.grid_mut().go_to_page(page);
        cx.notify();
    }

    pub fn next_page(&mut self, cx: &mut Context<Self>) {
        self.table.grid_mut().next_page();
        cx.notify();
    }

    pub fn previous_page(&mut self, cx: &mut Context<Self>) {
        self.table.grid_mut().previous_page();
        cx.notify();
    }

    /// Flip selection of one row and log the new selection
    pub fn toggle_row(&mut self, index: usize, cx: &mut Context<Self>) {
        self.table.grid_mut().toggle_selected(index);
        self.log_selection();
        cx.notify();
    }

    /// Select or clear every displayed row and log the new selection
    pub fn select_displayed(&mut self, selected: bool, cx: &mut Context<Self>) {
        self.table.grid_mut().set_displayed_selected(selected);
        self.log_selection();
        cx.notify();
    }

    fn log_selection(&self) {
        if let Err(e) = self.table.log_selection() {
            error!(error = %e, "Failed to log selection");
        }
    }

    /// Write the current view to a CSV file in the export directory
    pub fn export_csv(&mut self, cx: &mut Context<Self>) {
        let document = self.table.export_csv();
        let file_name = format!(
            "{EXPORT_FILE_PREFIX}-{}.csv",
            format_file_stamp(&chrono::Local::now())
        );

        cx.spawn(async move |handle, cx| {
            let rows = document.len();
            let result = run_in_tokio(async move {
                let dir = export_dir()?;
                document.write_to(&dir, &file_name).await
            })
            .await;

            let _ = handle.update(cx, |_this, cx| {
                let event = match result {
                    Ok(path) => {
                        let (rows, path) = (rows.to_string(), path.display().to_string());
                        UIEvent::info(i18n_format(
                            cx,
                            "status.exported",
                            &[("rows", rows.as_str()), ("path", path.as_str())],
                        ))
                    }
                    Err(e) => {
                        error!(error = %e, "CSV export failed");
                        UIEvent::error(format!("{}: {e}", i18n_status(cx, "export_failed")))
                    }
                };
                cx.emit(event);
            });
        })
        .detach();
    }
}
