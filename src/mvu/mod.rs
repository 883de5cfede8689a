// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 ResumeDrop contributors

//! Root Model-View-Update kernel wiring component state, messages, and commands.

use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::models::job::{self, Job};
use crate::models::upload::SelectedFile;
use crate::ui::components::alerts::{self, AlertLevel, AlertsModel, AlertsMsg};
use crate::ui::components::jobs::{self as jobs_component, JobsModel, JobsMsg};
use crate::ui::components::scores::{self, ScoresCommand, ScoresModel, ScoresMsg};
use crate::ui::components::upload::{self, UploadCommand, UploadModel, UploadMsg};

/// Sections addressable by the startup fragment argument.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Upload,
    Jobs,
    Results,
}

impl Section {
    /// Parse a fragment identifier; the leading `#` is optional and unknown
    /// names resolve to nothing.
    pub fn from_fragment(raw: &str) -> Option<Self> {
        match raw.trim().trim_start_matches('#') {
            "upload" => Some(Self::Upload),
            "jobs" => Some(Self::Jobs),
            "results" => Some(Self::Results),
            _ => None,
        }
    }
}

/// Top-level application state.
pub struct AppModel {
    /// Published job catalog, shared by the selection and results sections.
    pub catalog: Vec<Job>,
    /// Resume picker state.
    pub upload: UploadModel,
    /// Job selection state.
    pub jobs: JobsModel,
    /// Match-score display state.
    pub scores: ScoresModel,
    /// Transient banner state.
    pub alerts: AlertsModel,
    /// Section to scroll into view once rendered.
    pub pending_anchor: Option<Section>,
    /// Latest status message to display.
    pub status: Option<String>,
    /// Count of queued background commands.
    pub pending_commands: usize,
}

impl AppModel {
    pub fn new(anchor: Option<Section>) -> Self {
        let catalog = job::load_catalog().unwrap_or_else(|err| {
            log::error!("job catalog unavailable: {err:#}");
            Vec::new()
        });
        log::info!("job catalog loaded with {} jobs", catalog.len());

        let mut model = Self {
            jobs: JobsModel::from_catalog(catalog.clone()),
            catalog,
            upload: UploadModel::default(),
            scores: ScoresModel::default(),
            alerts: AlertsModel::default(),
            pending_anchor: anchor,
            status: None,
            pending_commands: 0,
        };

        if model.catalog.is_empty() {
            surface_event(
                &mut model,
                "Job catalog could not be loaded.".to_string(),
                true,
            );
        }

        model
    }
}

/// Application messages routed through the update function.
#[derive(Clone, Debug, PartialEq)]
pub enum Msg {
    Upload(UploadMsg),
    Jobs(JobsMsg),
    Scores(ScoresMsg),
    Alerts(AlertsMsg),
    /// The pending anchor's section was scrolled into view.
    AnchorConsumed,
}

/// Commands represent side-effects executed between frames.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    PickResumeFile,
    InspectFile { path: PathBuf },
    PickReportFile,
}

/// Update the application model and enqueue commands.
pub fn update(model: &mut AppModel, msg: Msg, cmds: &mut Vec<Command>) {
    match msg {
        Msg::Upload(m) => {
            let mut upload_cmds = Vec::new();
            if let Some(event) = upload::update(&mut model.upload, m, &mut upload_cmds) {
                surface_event(model, event.message, event.is_error);
            }
            for c in upload_cmds {
                match c {
                    UploadCommand::PickFile => cmds.push(Command::PickResumeFile),
                    UploadCommand::InspectFile { path } => {
                        cmds.push(Command::InspectFile { path })
                    }
                }
            }
        }
        Msg::Jobs(m) => jobs_component::update(&mut model.jobs, m),
        Msg::Scores(m) => {
            let mut score_cmds = Vec::new();
            if let Some(event) =
                scores::update(&mut model.scores, m, &model.catalog, &mut score_cmds)
            {
                surface_event(model, event.message, event.is_error);
            }
            for c in score_cmds {
                match c {
                    ScoresCommand::PickReportFile => cmds.push(Command::PickReportFile),
                }
            }
        }
        Msg::Alerts(m) => alerts::update(&mut model.alerts, m),
        Msg::AnchorConsumed => model.pending_anchor = None,
    }
}

/// Execute a command on a worker thread and return the resulting message.
pub fn run_command(cmd: Command) -> Msg {
    match cmd {
        Command::PickResumeFile => {
            let file = rfd::FileDialog::new()
                .set_title("Select resume")
                .add_filter("Resume files", &["pdf", "txt"])
                .add_filter("All files", &["*"])
                .pick_file();
            Msg::Upload(UploadMsg::FilesPicked(file.into_iter().collect()))
        }
        Command::InspectFile { path } => match inspect_file(&path) {
            Ok(file) => Msg::Upload(UploadMsg::FileInspected(file)),
            Err(err) => {
                log::warn!("failed to inspect {}: {err:#}", path.display());
                Msg::Upload(UploadMsg::InspectFailed {
                    name: display_name(&path),
                    error: err.to_string(),
                })
            }
        },
        Command::PickReportFile => {
            let file = rfd::FileDialog::new()
                .set_title("Load analysis report")
                .add_filter("JSON", &["json"])
                .pick_file();

            match file {
                Some(path) => match std::fs::read_to_string(&path) {
                    Ok(content) => match job::parse_report(&content) {
                        Ok(report) => Msg::Scores(ScoresMsg::ReportLoaded(report)),
                        Err(err) => Msg::Scores(ScoresMsg::ReportFailed(err.to_string())),
                    },
                    Err(err) => Msg::Scores(ScoresMsg::ReportFailed(format!(
                        "Failed to read report file: {err}"
                    ))),
                },
                None => Msg::Scores(ScoresMsg::ReportCancelled),
            }
        }
    }
}

/// Gather the metadata validation needs without touching file contents.
fn inspect_file(path: &Path) -> anyhow::Result<SelectedFile> {
    let metadata = std::fs::metadata(path)
        .with_context(|| format!("reading metadata for {}", path.display()))?;
    Ok(SelectedFile::new(path.to_path_buf(), metadata.len()))
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

/// Update status/alert surfaces consistently for user feedback.
fn surface_event(model: &mut AppModel, message: String, is_error: bool) {
    let level = if is_error {
        AlertLevel::Error
    } else {
        AlertLevel::Info
    };
    alerts::update(
        &mut model.alerts,
        AlertsMsg::Push {
            message: message.clone(),
            level,
        },
    );
    model.status = Some(message);
}
