use std::sync::mpsc::{self, Receiver, Sender};

use eframe::egui::{self, Color32, RichText};

use crate::api;
use equip_viz_common::{
    BackendConfig, ChartData, ClientState, EquipmentRecord, HistoryEntry, UploadResult,
};

pub struct DesktopApp {
    state: ClientState,
    config: BackendConfig,
    status: String,
    busy: bool,
    rx: Receiver<UiMessage>,
    tx: Sender<UiMessage>,
}

enum UiMessage {
    UploadDone {
        result: anyhow::Result<UploadResult>,
    },
    HistoryDone {
        result: anyhow::Result<Vec<HistoryEntry>>,
        silent: bool,
    },
    PdfDone {
        message: String,
    },
}

impl Default for DesktopApp {
    fn default() -> Self {
        let (tx, rx) = mpsc::channel();
        let config = api::backend_from_env();

        // 起動時に既存履歴を読み込む。バックエンド停止中でも黙って続行
        let startup_tx = tx.clone();
        let startup_config = config.clone();
        std::thread::spawn(move || {
            let result = api::fetch_history(&startup_config);
            let _ = startup_tx.send(UiMessage::HistoryDone {
                result,
                silent: true,
            });
        });

        Self {
            state: ClientState::default(),
            config,
            status: String::new(),
            busy: false,
            rx,
            tx,
        }
    }
}

impl DesktopApp {
    fn upload_csv(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV", &["csv"])
            .pick_file()
        else {
            return;
        };

        self.busy = true;
        self.status = format!("Uploading {}...", path.display());

        let tx = self.tx.clone();
        let config = self.config.clone();
        std::thread::spawn(move || {
            let result = api::upload_csv(&config, &path);
            let refresh = result.is_ok();
            let _ = tx.send(UiMessage::UploadDone { result });

            // アップロード成功後に履歴を更新する
            if refresh {
                let history = api::fetch_history(&config);
                let _ = tx.send(UiMessage::HistoryDone {
                    result: history,
                    silent: false,
                });
            }
        });
    }

    fn download_latest_pdf(&mut self) {
        // 履歴の先頭が最新（バックエンドが新しい順で返す）
        let Some(id) = self.state.history.first().map(|e| e.id) else {
            self.status = "No uploaded record found. Upload a file first.".to_string();
            return;
        };
        let Some(path) = rfd::FileDialog::new()
            .set_file_name(format!("report_{id}.pdf"))
            .save_file()
        else {
            return;
        };

        self.busy = true;
        self.status = format!("Downloading report #{id}...");

        let tx = self.tx.clone();
        let config = self.config.clone();
        std::thread::spawn(move || {
            let outcome = api::download_pdf(&config, id).and_then(|bytes| {
                std::fs::write(&path, &bytes)
                    .map(|_| bytes.len())
                    .map_err(Into::into)
            });
            let message = match outcome {
                Ok(len) => format!("PDF saved: {} ({len} bytes)", path.display()),
                Err(err) => format!("PDF download failed: {err}"),
            };
            let _ = tx.send(UiMessage::PdfDone { message });
        });
    }

    fn poll_messages(&mut self) {
        while let Ok(msg) = self.rx.try_recv() {
            match msg {
                UiMessage::UploadDone { result } => {
                    self.busy = false;
                    match result {
                        Ok(data) => {
                            self.state.upload_succeeded(data);
                            self.status = "Upload complete".to_string();
                        }
                        Err(err) => {
                            self.state.upload_failed();
                            self.status = format!("Upload failed: {err}");
                        }
                    }
                }
                UiMessage::HistoryDone { result, silent } => match result {
                    Ok(entries) => self.state.history_loaded(entries),
                    Err(err) => {
                        self.state.history_failed();
                        if !silent {
                            self.status = format!("Failed to load history: {err}");
                        }
                    }
                },
                UiMessage::PdfDone { message } => {
                    self.busy = false;
                    self.status = message;
                }
            }
        }
    }

    fn render_summary(&self, ui: &mut egui::Ui, dataset: &UploadResult) {
        ui.heading("Summary");
        egui::Grid::new("summary_grid")
            .striped(true)
            .min_col_width(120.0)
            .show(ui, |ui| {
                ui.label(RichText::new("Total Equipment").strong());
                ui.label(dataset.total_equipment.to_string());
                ui.end_row();
                ui.label(RichText::new("Average Flowrate").strong());
                ui.label(dataset.average_flowrate.to_string());
                ui.end_row();
                ui.label(RichText::new("Average Pressure").strong());
                ui.label(dataset.average_pressure.to_string());
                ui.end_row();
                ui.label(RichText::new("Average Temperature").strong());
                ui.label(dataset.average_temperature.to_string());
                ui.end_row();
            });
    }

    fn render_chart(&self, ui: &mut egui::Ui, chart: &ChartData) {
        ui.add_space(8.0);
        ui.heading("Equipment Type Distribution");

        let width = ui.available_width();
        let (rect, _) = ui.allocate_exact_size(egui::vec2(width, 180.0), egui::Sense::hover());
        let painter = ui.painter_at(rect);

        let max = chart.max_value().unwrap_or(0).max(1) as f32;
        let slots = chart.labels.len().max(1) as f32;
        let slot_width = rect.width() / slots;
        let bar_width = (slot_width * 0.6).min(80.0);
        let plot_bottom = rect.top() + rect.height() - 24.0;
        let plot_height = rect.height() - 48.0;

        for (i, (label, count)) in chart.labels.iter().zip(&chart.series).enumerate() {
            let h = (*count as f32 / max) * plot_height;
            let x = rect.left() + i as f32 * slot_width + (slot_width - bar_width) / 2.0;
            let bar = egui::Rect::from_min_max(
                egui::pos2(x, plot_bottom - h),
                egui::pos2(x + bar_width, plot_bottom),
            );
            painter.rect_filled(bar, 2.0, Color32::from_rgb(79, 156, 255));
            painter.text(
                egui::pos2(x + bar_width / 2.0, plot_bottom - h - 4.0),
                egui::Align2::CENTER_BOTTOM,
                count.to_string(),
                egui::FontId::proportional(12.0),
                Color32::from_gray(220),
            );
            painter.text(
                egui::pos2(x + bar_width / 2.0, plot_bottom + 4.0),
                egui::Align2::CENTER_TOP,
                label.as_str(),
                egui::FontId::proportional(12.0),
                Color32::from_gray(200),
            );
        }
    }

    fn render_table(&self, ui: &mut egui::Ui, records: &[EquipmentRecord]) {
        ui.add_space(8.0);
        ui.heading("Equipment");
        egui::Grid::new("equipment_grid")
            .striped(true)
            .min_col_width(80.0)
            .show(ui, |ui| {
                for header in ["Name", "Type", "Flowrate", "Pressure", "Temperature"] {
                    ui.label(RichText::new(header).strong());
                }
                ui.end_row();

                for record in records {
                    ui.label(record.name.as_str());
                    ui.label(record.equipment_type.as_str());
                    ui.label(record.flowrate.to_string());
                    ui.label(record.pressure.to_string());
                    ui.label(record.temperature.to_string());
                    ui.end_row();
                }
            });
    }

    fn render_history(&self, ui: &mut egui::Ui) {
        ui.heading("Last 5 Uploads");
        if self.state.history.is_empty() {
            ui.label("No uploads yet.");
            return;
        }

        egui::Grid::new("history_grid")
            .striped(true)
            .min_col_width(80.0)
            .show(ui, |ui| {
                for header in [
                    "ID",
                    "Filename",
                    "Total",
                    "Avg Flow",
                    "Avg Pressure",
                    "Avg Temp",
                    "Uploaded At",
                ] {
                    ui.label(RichText::new(header).strong());
                }
                ui.end_row();

                for entry in &self.state.history {
                    ui.label(entry.id.to_string());
                    ui.label(entry.filename.as_str());
                    ui.label(entry.total_equipment.to_string());
                    ui.label(entry.avg_flowrate.to_string());
                    ui.label(entry.avg_pressure.to_string());
                    ui.label(entry.avg_temperature.to_string());
                    ui.label(entry.uploaded_at.as_str());
                    ui.end_row();
                }
            });
    }
}

impl eframe::App for DesktopApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.busy {
            ctx.request_repaint();
        }
        self.poll_messages();

        egui::TopBottomPanel::top("top").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Chemical Equipment Visualizer");
                ui.separator();

                if ui
                    .add_enabled(!self.busy, egui::Button::new("Upload CSV"))
                    .clicked()
                {
                    self.upload_csv();
                }

                let has_history = !self.state.history.is_empty();
                if ui
                    .add_enabled(has_history && !self.busy, egui::Button::new("Download PDF (latest)"))
                    .clicked()
                {
                    self.download_latest_pdf();
                }

                if let Some(notice) = self.state.notice {
                    ui.label(
                        RichText::new(notice.message()).color(Color32::from_rgb(246, 196, 69)),
                    );
                }
                if !self.status.is_empty() {
                    ui.label(RichText::new(&self.status).color(Color32::from_gray(170)));
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                if let Some(dataset) = self.state.dataset.clone() {
                    self.render_summary(ui, &dataset);

                    let chart = ChartData::from_distribution(&dataset.equipment_type_distribution);
                    if !chart.is_empty() {
                        self.render_chart(ui, &chart);
                    }

                    self.render_table(ui, &dataset.table_data);
                } else {
                    ui.label("Upload a CSV of chemical equipment to see summary, chart and table.");
                }

                ui.add_space(12.0);
                ui.separator();
                self.render_history(ui);
            });
        });
    }
}
