// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 ResumeDrop contributors

//! Application entry point wiring egui/eframe to launch the submission form.

use crate::mvu::Section;
use crate::ui::ResumeDropApp;
use eframe::egui;
use egui_phosphor::Variant;

/// Bootstrap the desktop application and run the main egui event loop.
pub fn run() -> eframe::Result<()> {
    // Register Phosphor icon font.
    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, Variant::Regular);

    // The first argument plays the role of the page's fragment identifier:
    // `resumedrop '#results'` scrolls to the results section once it renders.
    // Unknown section names are ignored.
    let anchor = std::env::args().nth(1).as_deref().and_then(Section::from_fragment);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 700.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "ResumeDrop",
        options,
        Box::new(move |cc| {
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(ResumeDropApp::new(anchor)))
        }),
    )
}
