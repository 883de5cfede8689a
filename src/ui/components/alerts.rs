// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 ResumeDrop contributors

//! Transient alert banners stacked at the top of the content area.

use eframe::egui;

/// Seconds an alert stays visible before auto-dismissal.
const AUTO_DISMISS_SECS: f64 = 5.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertLevel {
    Info,
    Error,
}

/// One banner. `shown_at` is stamped by the first tick after the push so the
/// dismissal clock starts when the alert is actually on screen.
#[derive(Clone, Debug, PartialEq)]
pub struct Alert {
    id: u64,
    pub message: String,
    pub level: AlertLevel,
    shown_at: Option<f64>,
}

impl Alert {
    pub fn id(&self) -> u64 {
        self.id
    }
}

#[derive(Default)]
pub struct AlertsModel {
    alerts: Vec<Alert>,
    next_id: u64,
}

impl AlertsModel {
    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum AlertsMsg {
    Push { message: String, level: AlertLevel },
    Dismiss(u64),
    /// Frame-clock tick: stamps fresh alerts and expires old ones.
    Tick { now: f64 },
}

/// Apply a message to the alerts model.
pub fn update(model: &mut AlertsModel, msg: AlertsMsg) {
    match msg {
        AlertsMsg::Push { message, level } => {
            let id = model.next_id;
            model.next_id += 1;
            model.alerts.push(Alert {
                id,
                message,
                level,
                shown_at: None,
            });
        }
        AlertsMsg::Dismiss(id) => model.alerts.retain(|alert| alert.id != id),
        AlertsMsg::Tick { now } => {
            for alert in &mut model.alerts {
                if alert.shown_at.is_none() {
                    alert.shown_at = Some(now);
                }
            }
            model
                .alerts
                .retain(|alert| alert.shown_at.is_some_and(|t| now - t < AUTO_DISMISS_SECS));
        }
    }
}

/// Render the banner stack and return any messages triggered by interaction.
pub fn view(ui: &mut egui::Ui, model: &AlertsModel) -> Vec<AlertsMsg> {
    let mut msgs = Vec::new();

    for alert in model.alerts() {
        let visuals = ui.visuals().clone();
        let (icon, icon_color) = match alert.level {
            AlertLevel::Info => (egui_phosphor::regular::INFO, visuals.hyperlink_color),
            AlertLevel::Error => (egui_phosphor::regular::WARNING, visuals.error_fg_color),
        };

        egui::Frame::new()
            .fill(visuals.faint_bg_color)
            .stroke(visuals.window_stroke())
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new(icon).color(icon_color));
                    ui.label(&alert.message);
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui
                            .button(egui::RichText::new(egui_phosphor::regular::X))
                            .on_hover_text("Dismiss")
                            .clicked()
                        {
                            msgs.push(AlertsMsg::Dismiss(alert.id()));
                        }
                    });
                });
            });
        ui.add_space(4.0);
    }

    msgs
}

#[cfg(test)]
mod tests {
    use super::{AlertLevel, AlertsModel, AlertsMsg, update};

    fn push(model: &mut AlertsModel, message: &str, level: AlertLevel) {
        update(
            model,
            AlertsMsg::Push {
                message: message.into(),
                level,
            },
        );
    }

    #[test]
    fn first_tick_stamps_and_keeps_alert() {
        let mut model = AlertsModel::default();
        push(&mut model, "Saved", AlertLevel::Info);

        update(&mut model, AlertsMsg::Tick { now: 10.0 });

        assert_eq!(model.alerts().len(), 1);
    }

    #[test]
    fn alert_expires_after_five_seconds_on_screen() {
        let mut model = AlertsModel::default();
        push(&mut model, "Saved", AlertLevel::Info);

        update(&mut model, AlertsMsg::Tick { now: 10.0 });
        update(&mut model, AlertsMsg::Tick { now: 14.9 });
        assert_eq!(model.alerts().len(), 1, "still within the window");

        update(&mut model, AlertsMsg::Tick { now: 15.0 });
        assert!(model.is_empty());
    }

    // The clock starts at the stamping tick, not at the push.
    #[test]
    fn window_starts_at_first_tick_not_at_push() {
        let mut model = AlertsModel::default();
        push(&mut model, "Queued while hidden", AlertLevel::Info);

        update(&mut model, AlertsMsg::Tick { now: 100.0 });
        update(&mut model, AlertsMsg::Tick { now: 104.0 });

        assert_eq!(model.alerts().len(), 1);
    }

    #[test]
    fn manual_dismiss_removes_only_that_alert() {
        let mut model = AlertsModel::default();
        push(&mut model, "first", AlertLevel::Info);
        push(&mut model, "second", AlertLevel::Error);

        let first_id = model.alerts()[0].id();
        update(&mut model, AlertsMsg::Dismiss(first_id));

        assert_eq!(model.alerts().len(), 1);
        assert_eq!(model.alerts()[0].message, "second");
    }

    #[test]
    fn alerts_expire_independently() {
        let mut model = AlertsModel::default();
        push(&mut model, "early", AlertLevel::Info);
        update(&mut model, AlertsMsg::Tick { now: 0.0 });

        push(&mut model, "late", AlertLevel::Info);
        update(&mut model, AlertsMsg::Tick { now: 3.0 });

        update(&mut model, AlertsMsg::Tick { now: 6.0 });
        assert_eq!(model.alerts().len(), 1);
        assert_eq!(model.alerts()[0].message, "late");
    }
}
