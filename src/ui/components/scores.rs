// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 ResumeDrop contributors

//! Match-score bars with a collapse-then-grow reveal animation.

use std::collections::HashMap;

use eframe::egui;

use crate::models::job::{Job, MatchReport};

/// Delay between a bar first becoming visible and the start of its growth.
const REVEAL_DELAY_SECS: f64 = 0.1;
/// Time a bar takes to grow from zero to its captured target.
const GROW_SECS: f64 = 0.6;

/// Reveal bookkeeping for one bar. The captured target never changes and the
/// trigger never re-arms: scrolling away and back replays nothing.
#[derive(Clone, Debug, PartialEq)]
pub struct RevealBar {
    target: f32,
    started_at: Option<f64>,
}

impl RevealBar {
    pub fn new(target: f32) -> Self {
        Self {
            target: target.clamp(0.0, 1.0),
            started_at: None,
        }
    }

    pub fn started(&self) -> bool {
        self.started_at.is_some()
    }

    /// First-visibility trigger; later calls are ignored.
    pub fn mark_visible(&mut self, now: f64) {
        if self.started_at.is_none() {
            self.started_at = Some(now);
        }
    }

    /// Displayed fraction at `now`: zero until the delay elapses, then an
    /// ease-out growth to the captured target.
    pub fn fraction_at(&self, now: f64) -> f32 {
        let Some(started) = self.started_at else {
            return 0.0;
        };
        let elapsed = now - started - REVEAL_DELAY_SECS;
        if elapsed <= 0.0 {
            return 0.0;
        }
        let t = (elapsed / GROW_SECS).min(1.0) as f32;
        let eased = 1.0 - (1.0 - t) * (1.0 - t);
        self.target * eased
    }

    /// Whether the animation has finished and repaints can stop.
    pub fn settled(&self, now: f64) -> bool {
        self.started_at
            .is_some_and(|started| now - started >= REVEAL_DELAY_SECS + GROW_SECS)
    }
}

/// One row of the results list.
pub struct ScoreRow {
    pub job_id: String,
    pub label: String,
    /// Match score in percent (0-100).
    pub score: f32,
}

/// MVU state for the results section.
#[derive(Default)]
pub struct ScoresModel {
    resume: Option<String>,
    rows: Vec<ScoreRow>,
    reveals: HashMap<String, RevealBar>,
}

impl ScoresModel {
    pub fn rows(&self) -> &[ScoreRow] {
        &self.rows
    }

    pub fn resume(&self) -> Option<&str> {
        self.resume.as_deref()
    }

    pub fn reveal(&self, job_id: &str) -> Option<&RevealBar> {
        self.reveals.get(job_id)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ScoresMsg {
    RequestLoadReport,
    ReportLoaded(MatchReport),
    ReportFailed(String),
    ReportCancelled,
    /// A bar's first frame on screen.
    BarShown { job_id: String, now: f64 },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScoresCommand {
    PickReportFile,
}

/// User-facing events for the alert/status surfaces.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoresEvent {
    pub message: String,
    pub is_error: bool,
}

/// Apply a message to the scores model. `catalog` resolves job ids to titles.
pub fn update(
    model: &mut ScoresModel,
    msg: ScoresMsg,
    catalog: &[Job],
    cmds: &mut Vec<ScoresCommand>,
) -> Option<ScoresEvent> {
    match msg {
        ScoresMsg::RequestLoadReport => {
            cmds.push(ScoresCommand::PickReportFile);
            None
        }
        ScoresMsg::ReportLoaded(report) => {
            let count = report.scores.len();
            apply_report(model, report, catalog);
            Some(ScoresEvent {
                message: format!("Analysis report loaded: {count} match score(s)."),
                is_error: false,
            })
        }
        // A bad report leaves whatever was on screen untouched.
        ScoresMsg::ReportFailed(error) => Some(ScoresEvent {
            message: format!("Failed to load analysis report: {error}"),
            is_error: true,
        }),
        ScoresMsg::ReportCancelled => Some(ScoresEvent {
            message: "Report loading cancelled.".to_string(),
            is_error: false,
        }),
        ScoresMsg::BarShown { job_id, now } => {
            if let Some(reveal) = model.reveals.get_mut(&job_id) {
                reveal.mark_visible(now);
            }
            None
        }
    }
}

/// Replace the displayed report, resetting every bar's reveal state.
fn apply_report(model: &mut ScoresModel, report: MatchReport, catalog: &[Job]) {
    model.resume = report.resume;
    model.rows = report
        .scores
        .iter()
        .map(|entry| {
            let label = catalog
                .iter()
                .find(|job| job.id == entry.job_id)
                .map(|job| format!("{} ({})", job.title, job.company))
                .unwrap_or_else(|| format!("Job {}", entry.job_id));
            ScoreRow {
                job_id: entry.job_id.clone(),
                label,
                score: entry.score.clamp(0.0, 100.0),
            }
        })
        .collect();
    model.reveals = model
        .rows
        .iter()
        .map(|row| (row.job_id.clone(), RevealBar::new(row.score / 100.0)))
        .collect();
}

/// Render the results section and return any messages triggered by
/// interaction or first-visibility of a bar.
pub fn view(ui: &mut egui::Ui, model: &ScoresModel) -> Vec<ScoresMsg> {
    let now = ui.input(|i| i.time);
    let mut msgs = Vec::new();

    if ui
        .button(format!(
            "{} Load analysis report",
            egui_phosphor::regular::CHART_BAR
        ))
        .on_hover_text("Open a match report exported by the analyzer")
        .clicked()
    {
        msgs.push(ScoresMsg::RequestLoadReport);
    }

    ui.add_space(6.0);

    if model.rows().is_empty() {
        ui.label(
            egui::RichText::new("No analysis loaded yet.")
                .italics()
                .color(egui::Color32::from_gray(110)),
        );
        return msgs;
    }

    if let Some(resume) = model.resume() {
        ui.label(
            egui::RichText::new(format!("Match scores for \"{resume}\""))
                .small()
                .color(egui::Color32::from_gray(110)),
        );
        ui.add_space(4.0);
    }

    let mut animating = false;
    for row in model.rows() {
        ui.label(&row.label);
        let reveal = model.reveal(&row.job_id);
        let fraction = reveal
            .map(|bar| bar.fraction_at(now))
            .unwrap_or(row.score / 100.0);

        ui.horizontal(|ui| {
            let width = (ui.available_width() - 48.0).max(60.0);
            let response = ui.add(egui::ProgressBar::new(fraction).desired_width(width));
            ui.label(
                egui::RichText::new(format!("{:.0}%", row.score))
                    .small()
                    .color(egui::Color32::from_gray(110)),
            );

            if ui.is_rect_visible(response.rect)
                && reveal.is_some_and(|bar| !bar.started())
            {
                msgs.push(ScoresMsg::BarShown {
                    job_id: row.job_id.clone(),
                    now,
                });
            }
        });
        ui.add_space(4.0);

        animating |= reveal.is_some_and(|bar| bar.started() && !bar.settled(now));
    }

    if animating {
        ui.ctx().request_repaint();
    }

    msgs
}
