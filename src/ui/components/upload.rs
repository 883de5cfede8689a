// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 ResumeDrop contributors

//! Resume picker with drag-and-drop and inline validation feedback.

use std::path::PathBuf;

use eframe::egui;

use crate::models::upload::{SelectedFile, validate};
use crate::utils::format_file_size;

/// Inline validation feedback shown next to the picker. A single slot:
/// setting it replaces whatever was there.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Feedback {
    pub message: String,
    pub is_error: bool,
}

/// MVU state for the upload zone.
#[derive(Default)]
pub struct UploadModel {
    selected: Option<SelectedFile>,
    feedback: Option<Feedback>,
    drag_active: bool,
}

impl UploadModel {
    pub fn selected(&self) -> Option<&SelectedFile> {
        self.selected.as_ref()
    }

    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    pub fn drag_active(&self) -> bool {
        self.drag_active
    }
}

/// Messages emitted by the upload view and the shell's drag interception.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UploadMsg {
    RequestPickFile,
    /// Paths from the file dialog or a drop. Empty means a cancelled pick.
    FilesPicked(Vec<PathBuf>),
    /// Metadata arrived from the inspection worker.
    FileInspected(SelectedFile),
    InspectFailed { name: String, error: String },
    DragStateChanged(bool),
}

/// Side-effectful commands run off the UI path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UploadCommand {
    PickFile,
    InspectFile { path: PathBuf },
}

/// User-facing events for the alert/status surfaces.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadEvent {
    pub message: String,
    pub is_error: bool,
}

/// Apply a message to the upload model. Returns a user-facing event when
/// relevant.
pub fn update(
    model: &mut UploadModel,
    msg: UploadMsg,
    cmds: &mut Vec<UploadCommand>,
) -> Option<UploadEvent> {
    match msg {
        UploadMsg::RequestPickFile => {
            cmds.push(UploadCommand::PickFile);
            None
        }
        UploadMsg::FilesPicked(paths) => {
            // Only the first file of a multi-drop is considered. No file at
            // all (cancelled dialog, empty drop) is a no-op.
            let Some(path) = paths.into_iter().next() else {
                return None;
            };
            cmds.push(UploadCommand::InspectFile { path });
            None
        }
        UploadMsg::FileInspected(file) => Some(apply_validation(model, file)),
        UploadMsg::InspectFailed { name, error } => {
            model.selected = None;
            let message = format!("Could not read \"{name}\": {error}");
            model.feedback = Some(Feedback {
                message: message.clone(),
                is_error: true,
            });
            Some(UploadEvent {
                message,
                is_error: true,
            })
        }
        UploadMsg::DragStateChanged(active) => {
            model.drag_active = active;
            None
        }
    }
}

/// Validate an inspected file and set selection plus the feedback slot.
fn apply_validation(model: &mut UploadModel, file: SelectedFile) -> UploadEvent {
    match validate(&file) {
        Err(rejection) => {
            // Invalid files are cleared so the form cannot submit them.
            model.selected = None;
            let message = rejection.to_string();
            model.feedback = Some(Feedback {
                message: message.clone(),
                is_error: true,
            });
            UploadEvent {
                message,
                is_error: true,
            }
        }
        Ok(()) => {
            let message = format!("File \"{}\" is ready for upload.", file.name);
            model.feedback = Some(Feedback {
                message: message.clone(),
                is_error: false,
            });
            model.selected = Some(file);
            UploadEvent {
                message,
                is_error: false,
            }
        }
    }
}

/// Render the drop zone and return any messages triggered by interaction.
pub fn view(ui: &mut egui::Ui, model: &UploadModel) -> Vec<UploadMsg> {
    let mut msgs = Vec::new();

    let visuals = ui.visuals().clone();
    let (fill, stroke) = if model.drag_active() {
        // Files hovering the window: light the zone up.
        (
            visuals.selection.bg_fill.linear_multiply(0.2),
            visuals.selection.stroke,
        )
    } else {
        (visuals.panel_fill, visuals.window_stroke())
    };

    egui::Frame::new()
        .fill(fill)
        .stroke(stroke)
        .inner_margin(16.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new(egui_phosphor::regular::UPLOAD_SIMPLE)
                        .size(28.0)
                        .color(egui::Color32::from_gray(140)),
                );
                ui.add_space(4.0);
                ui.label("Drag and drop your resume here");
                ui.label(
                    egui::RichText::new("PDF or TXT, up to 16 MB")
                        .small()
                        .color(egui::Color32::from_gray(110)),
                );
                ui.add_space(6.0);
                if ui
                    .button(format!(
                        "{} Browse files",
                        egui_phosphor::regular::FOLDER_OPEN
                    ))
                    .on_hover_text("Select a resume from disk")
                    .clicked()
                {
                    msgs.push(UploadMsg::RequestPickFile);
                }
            });
        });

    if let Some(file) = model.selected() {
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(file_icon(&file.mime)));
            ui.label(&file.name)
                .on_hover_text(file.path.display().to_string());
            ui.label(
                egui::RichText::new(format!(
                    "{} | {}",
                    format_file_size(file.size),
                    file.mime
                ))
                .small()
                .color(egui::Color32::from_gray(110)),
            );
        });
    }

    if let Some(feedback) = model.feedback() {
        let color = if feedback.is_error {
            ui.visuals().error_fg_color
        } else {
            egui::Color32::from_rgb(67, 160, 71)
        };
        ui.add_space(4.0);
        ui.label(egui::RichText::new(&feedback.message).small().color(color));
    }

    msgs
}

/// Phosphor icon for the accepted resume types.
fn file_icon(mime: &str) -> &'static str {
    match mime {
        "application/pdf" => egui_phosphor::regular::FILE_PDF,
        "text/plain" => egui_phosphor::regular::FILE_TXT,
        _ => egui_phosphor::regular::FILE,
    }
}
