// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 ResumeDrop contributors

//! MVU components composing the submission form.

pub mod alerts;
pub mod jobs;
pub mod scores;
pub mod upload;
