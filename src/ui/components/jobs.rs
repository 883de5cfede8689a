// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 ResumeDrop contributors

//! Job selection cards with group helpers and debounced filtering.

use eframe::egui;

use crate::models::job::Job;

/// One catalog entry plus its checkbox state.
pub struct JobCard {
    pub job: Job,
    pub checked: bool,
}

/// MVU state for the job selection group.
#[derive(Default)]
pub struct JobsModel {
    cards: Vec<JobCard>,
    /// Live filter text as typed.
    filter_input: String,
    /// Filter actually applied to the list; trails the input by the shell's
    /// debounce.
    applied_filter: String,
}

impl JobsModel {
    pub fn from_catalog(jobs: Vec<Job>) -> Self {
        Self {
            cards: jobs
                .into_iter()
                .map(|job| JobCard {
                    job,
                    checked: false,
                })
                .collect(),
            ..Default::default()
        }
    }

    pub fn cards(&self) -> &[JobCard] {
        &self.cards
    }

    pub fn filter_input(&self) -> &str {
        &self.filter_input
    }

    pub fn selected_count(&self) -> usize {
        self.cards.iter().filter(|card| card.checked).count()
    }

    /// Whether a job passes the applied filter (title or company,
    /// case-insensitive). Filtering only hides cards; it never changes
    /// checkbox state.
    pub fn matches_filter(&self, job: &Job) -> bool {
        let needle = self.applied_filter.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        job.title.to_lowercase().contains(&needle)
            || job.company.to_lowercase().contains(&needle)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum JobsMsg {
    SetChecked { index: usize, checked: bool },
    SelectAll,
    ClearAll,
    FilterInputChanged(String),
    /// Debounced filter delivery from the shell.
    ApplyFilter(String),
}

/// Apply a message to the jobs model.
pub fn update(model: &mut JobsModel, msg: JobsMsg) {
    match msg {
        JobsMsg::SetChecked { index, checked } => {
            if let Some(card) = model.cards.get_mut(index) {
                card.checked = checked;
            }
        }
        JobsMsg::SelectAll => {
            for card in &mut model.cards {
                card.checked = true;
            }
        }
        JobsMsg::ClearAll => {
            for card in &mut model.cards {
                card.checked = false;
            }
        }
        JobsMsg::FilterInputChanged(text) => model.filter_input = text,
        JobsMsg::ApplyFilter(text) => model.applied_filter = text,
    }
}

/// Render the filter row, group controls, and job cards.
pub fn view(ui: &mut egui::Ui, model: &JobsModel) -> Vec<JobsMsg> {
    let mut msgs = Vec::new();

    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(egui_phosphor::regular::MAGNIFYING_GLASS));
        let mut filter = model.filter_input().to_string();
        if ui
            .add(
                egui::TextEdit::singleline(&mut filter)
                    .hint_text("Filter by title or company")
                    .desired_width(240.0),
            )
            .changed()
        {
            msgs.push(JobsMsg::FilterInputChanged(filter));
        }
    });

    ui.add_space(6.0);

    // Group controls sit directly above the checkbox group.
    ui.horizontal(|ui| {
        if ui
            .button(format!(
                "{} Select All",
                egui_phosphor::regular::CHECK_SQUARE
            ))
            .on_hover_text("Check every listed job")
            .clicked()
        {
            msgs.push(JobsMsg::SelectAll);
        }
        if ui
            .button(format!("{} Clear All", egui_phosphor::regular::SQUARE))
            .on_hover_text("Uncheck every listed job")
            .clicked()
        {
            msgs.push(JobsMsg::ClearAll);
        }
        ui.label(
            egui::RichText::new(format!(
                "{} of {} selected",
                model.selected_count(),
                model.cards().len()
            ))
            .small()
            .color(egui::Color32::from_gray(110)),
        );
    });

    ui.add_space(6.0);

    let mut visible = 0usize;
    for (index, card) in model.cards().iter().enumerate() {
        if !model.matches_filter(&card.job) {
            continue;
        }
        visible += 1;
        render_job_card(ui, index, card, &mut msgs);
        ui.add_space(6.0);
    }

    if visible == 0 {
        ui.label(
            egui::RichText::new("No jobs match the current filter.")
                .italics()
                .color(egui::Color32::from_gray(110)),
        );
    }

    msgs
}

/// One job card. The highlight border is derived from the checkbox state
/// every frame, so group operations and single toggles cannot disagree.
fn render_job_card(ui: &mut egui::Ui, index: usize, card: &JobCard, msgs: &mut Vec<JobsMsg>) {
    let visuals = ui.visuals().clone();
    let stroke = if card.checked {
        visuals.selection.stroke
    } else {
        visuals.window_stroke()
    };

    let frame = egui::Frame::new()
        .fill(visuals.panel_fill)
        .stroke(stroke)
        .inner_margin(10.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                let mut checked = card.checked;
                if ui.checkbox(&mut checked, "").changed() {
                    msgs.push(JobsMsg::SetChecked { index, checked });
                }
                ui.vertical(|ui| {
                    ui.horizontal(|ui| {
                        ui.label(egui::RichText::new(&card.job.title).strong());
                        ui.label(
                            egui::RichText::new(&card.job.company)
                                .color(egui::Color32::from_gray(130)),
                        );
                    });
                    ui.label(
                        egui::RichText::new(format!(
                            "{} | {}",
                            card.job.location, card.job.salary
                        ))
                        .small()
                        .color(egui::Color32::from_gray(110)),
                    );
                    ui.label(egui::RichText::new(&card.job.description).small());
                });
            });
        });

    frame.response.on_hover_text(&card.job.requirements);
}

#[cfg(test)]
mod tests {
    use super::{JobsModel, JobsMsg, update};
    use crate::models::job::Job;

    fn job(id: &str, title: &str, company: &str) -> Job {
        Job {
            id: id.into(),
            title: title.into(),
            company: company.into(),
            location: "Remote".into(),
            salary: "$1".into(),
            description: "desc".into(),
            requirements: "reqs".into(),
        }
    }

    fn model() -> JobsModel {
        JobsModel::from_catalog(vec![
            job("1", "Software Engineer", "Tech Corp"),
            job("2", "Data Scientist", "DataTech Solutions"),
            job("3", "Frontend Developer", "Creative Agency"),
        ])
    }

    #[test]
    fn select_all_checks_every_card() {
        let mut model = model();

        update(&mut model, JobsMsg::SelectAll);

        assert!(model.cards().iter().all(|card| card.checked));
        assert_eq!(model.selected_count(), 3);
    }

    #[test]
    fn clear_all_unchecks_every_card() {
        let mut model = model();
        update(&mut model, JobsMsg::SelectAll);

        update(&mut model, JobsMsg::ClearAll);

        assert!(model.cards().iter().all(|card| !card.checked));
        assert_eq!(model.selected_count(), 0);
    }

    #[test]
    fn toggle_updates_only_its_card() {
        let mut model = model();

        update(
            &mut model,
            JobsMsg::SetChecked {
                index: 1,
                checked: true,
            },
        );

        assert!(!model.cards()[0].checked);
        assert!(model.cards()[1].checked);
        assert!(!model.cards()[2].checked);
    }

    #[test]
    fn toggle_out_of_range_is_ignored() {
        let mut model = model();

        update(
            &mut model,
            JobsMsg::SetChecked {
                index: 99,
                checked: true,
            },
        );

        assert_eq!(model.selected_count(), 0);
    }

    #[test]
    fn filter_matches_title_and_company_case_insensitively() {
        let mut model = model();
        update(&mut model, JobsMsg::ApplyFilter("datatech".into()));

        let visible: Vec<&str> = model
            .cards()
            .iter()
            .filter(|card| model.matches_filter(&card.job))
            .map(|card| card.job.id.as_str())
            .collect();

        assert_eq!(visible, vec!["2"]);
    }

    #[test]
    fn filtering_preserves_checked_state() {
        let mut model = model();
        update(&mut model, JobsMsg::SelectAll);

        update(&mut model, JobsMsg::ApplyFilter("frontend".into()));
        update(&mut model, JobsMsg::ApplyFilter(String::new()));

        assert_eq!(model.selected_count(), 3);
    }

    // The live input only reaches the applied filter via ApplyFilter, which
    // the shell debounces.
    #[test]
    fn typed_input_does_not_filter_until_applied() {
        let mut model = model();

        update(&mut model, JobsMsg::FilterInputChanged("data".into()));

        assert_eq!(model.filter_input(), "data");
        assert!(
            model
                .cards()
                .iter()
                .all(|card| model.matches_filter(&card.job))
        );
    }
}
