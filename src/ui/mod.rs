// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 ResumeDrop contributors

//! Top-level egui application shell for the submission form.
//! Handles layout, drag-and-drop interception, and wiring to the MVU kernel.

pub mod components;

use std::time::Duration;

use eframe::egui;

use crate::mvu::{self, AppModel, Command, Msg, Section};
use crate::ui::components::{alerts, jobs, scores, upload};
use crate::utils::Debouncer;

/// Debounce applied to the job filter input before it reaches the list.
const FILTER_DEBOUNCE: Duration = Duration::from_millis(300);

/// Stateful egui application for the resume submission form.
pub struct ResumeDropApp {
    model: AppModel,
    inbox: Vec<Msg>,
    cmd_tx: crossbeam_channel::Sender<Command>,
    msg_rx: crossbeam_channel::Receiver<Msg>,
    filter_debounce: Debouncer<String>,
}

impl ResumeDropApp {
    pub fn new(anchor: Option<Section>) -> Self {
        let (cmd_tx, cmd_rx) = crossbeam_channel::unbounded::<Command>();
        let (msg_tx, msg_rx) = crossbeam_channel::unbounded::<Msg>();

        let threads = std::thread::available_parallelism()
            .map(|n| n.get().max(2))
            .unwrap_or(2);
        for _ in 0..threads {
            let cmd_rx = cmd_rx.clone();
            let msg_tx = msg_tx.clone();
            std::thread::spawn(move || {
                for cmd in cmd_rx.iter() {
                    let msg = mvu::run_command(cmd);
                    let _ = msg_tx.send(msg);
                }
            });
        }

        Self {
            model: AppModel::new(anchor),
            inbox: Vec::new(),
            cmd_tx,
            msg_rx,
            filter_debounce: Debouncer::new(FILTER_DEBOUNCE),
        }
    }
}

impl eframe::App for ResumeDropApp {
    /// Drives a single UI frame: drains worker messages, applies timers and
    /// drag state, updates the model, and renders the panels.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ensure_spacing(ctx);
        self.intercept_file_drag(ctx);

        // Pull messages produced by the command workers.
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.model.pending_commands = self.model.pending_commands.saturating_sub(1);
            self.inbox.push(msg);
        }

        // Alert timers run on the repaint clock; keep frames coming while
        // banners are up so auto-dismissal fires without input.
        let now = ctx.input(|i| i.time);
        if !self.model.alerts.is_empty() {
            self.inbox.push(Msg::Alerts(alerts::AlertsMsg::Tick { now }));
            ctx.request_repaint_after(Duration::from_millis(250));
        }

        if let Some(filter) = self.filter_debounce.poll() {
            self.inbox.push(Msg::Jobs(jobs::JobsMsg::ApplyFilter(filter)));
        }
        if self.filter_debounce.is_pending() {
            ctx.request_repaint_after(Duration::from_millis(50));
        }

        // Process pending messages until exhausted.
        let mut msgs = std::mem::take(&mut self.inbox);
        while let Some(msg) = msgs.pop() {
            // Filter keystrokes re-arm the debouncer on their way in; the
            // model still records the live text for the text box.
            if let Msg::Jobs(jobs::JobsMsg::FilterInputChanged(text)) = &msg {
                self.filter_debounce.schedule(text.clone());
            }
            let mut commands = Vec::new();
            mvu::update(&mut self.model, msg, &mut commands);
            for cmd in commands {
                if self.cmd_tx.send(cmd).is_ok() {
                    self.model.pending_commands += 1;
                }
            }
        }
        self.inbox = msgs;

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.heading("Resume Analyzer");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    self.render_theme_controls(ui);
                });
            });
            ui.add_space(4.0);
        });

        egui::TopBottomPanel::bottom("status_panel")
            .resizable(false)
            .show(ctx, |ui| {
                self.render_status(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(8.0);

            egui::ScrollArea::vertical().show(ui, |ui| {
                let alert_msgs = alerts::view(ui, &self.model.alerts);
                self.inbox.extend(alert_msgs.into_iter().map(Msg::Alerts));

                self.section_heading(ui, Section::Upload, "Resume");
                ui.add_space(4.0);
                let upload_msgs = upload::view(ui, &self.model.upload);
                self.inbox.extend(upload_msgs.into_iter().map(Msg::Upload));
                ui.add_space(12.0);

                self.section_heading(ui, Section::Jobs, "Job openings");
                ui.add_space(4.0);
                let job_msgs = jobs::view(ui, &self.model.jobs);
                self.inbox.extend(job_msgs.into_iter().map(Msg::Jobs));
                ui.add_space(12.0);

                self.section_heading(ui, Section::Results, "Match results");
                ui.add_space(4.0);
                let score_msgs = scores::view(ui, &self.model.scores);
                self.inbox.extend(score_msgs.into_iter().map(Msg::Scores));
                ui.add_space(8.0);
            });
        });
    }
}

impl ResumeDropApp {
    fn ensure_spacing(&self, ctx: &egui::Context) {
        ctx.style_mut(|style| {
            style.spacing.item_spacing = egui::vec2(6.0, 6.0);
        });
    }

    /// Mirror the window's file-hover state into the upload model and route
    /// dropped files into the same validation path as the picker.
    fn intercept_file_drag(&mut self, ctx: &egui::Context) {
        let hovering = ctx.input(|i| !i.raw.hovered_files.is_empty());
        if hovering != self.model.upload.drag_active() {
            self.inbox
                .push(Msg::Upload(upload::UploadMsg::DragStateChanged(hovering)));
        }

        let dropped: Vec<std::path::PathBuf> = ctx.input(|i| {
            i.raw
                .dropped_files
                .iter()
                .filter_map(|file| file.path.clone())
                .collect()
        });
        if !dropped.is_empty() {
            self.inbox
                .push(Msg::Upload(upload::UploadMsg::FilesPicked(dropped)));
        }
    }

    /// Render a section heading, scrolling it into view when it is the
    /// pending anchor target.
    fn section_heading(&mut self, ui: &mut egui::Ui, section: Section, title: &str) {
        let response = ui.heading(title);
        if self.model.pending_anchor == Some(section) {
            response.scroll_to_me(Some(egui::Align::TOP));
            self.inbox.push(Msg::AnchorConsumed);
        }
    }

    /// Renders the global theme preference switch.
    fn render_theme_controls(&mut self, ui: &mut egui::Ui) {
        ui.add_space(2.0);
        egui::widgets::global_theme_preference_switch(ui);
    }

    /// Render latest status message when present.
    fn render_status(&self, ui: &mut egui::Ui) {
        if let Some(text) = &self.model.status {
            let display = if self.model.pending_commands > 0 {
                format!("{}  ({} working…)", text, self.model.pending_commands)
            } else {
                text.to_string()
            };
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(display).color(egui::Color32::from_gray(68)));
                if self.model.pending_commands > 0 {
                    ui.add(egui::Spinner::new().size(14.0)).on_hover_text(format!(
                        "{} task(s) running in background",
                        self.model.pending_commands
                    ));
                }
            });
        }
    }
}
