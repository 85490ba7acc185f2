use egui::{Color32, RichText};

use crate::content::{Content, Section};
use crate::island::{IslandStatus, Stage};
use crate::settings::Settings;

/// Snapshot of the island state shown by the overlay.
pub struct IslandReadout<'a> {
    pub angle: f32,
    pub normalized_angle: f32,
    pub speed: f32,
    pub stage: Option<Stage>,
    pub is_rotating: bool,
    pub stage_changes: u32,
    pub status: &'a IslandStatus,
}

pub struct Ui {
    content: Content,
}

impl Ui {
    pub fn new(content: Content) -> Self {
        Self { content }
    }

    /// Draw the overlay. Returns which settings groups changed as
    /// (ui, display) so the caller can persist them.
    pub fn show(
        &mut self,
        ctx: &egui::Context,
        readout: &IslandReadout,
        settings: &mut Settings,
    ) -> (bool, bool) {
        let show_hint = settings.display.show_hint;
        let before = (
            settings.ui.show_about,
            settings.ui.show_projects,
            settings.ui.show_contact,
            settings.ui.show_debug,
        );

        egui::TopBottomPanel::top("nav_bar").show(ctx, |ui| {
            ui.horizontal_wrapped(|ui| {
                ui.label(RichText::new("🏝 Portfolio").strong());
                ui.separator();
                ui.toggle_value(&mut settings.ui.show_about, "About");
                ui.toggle_value(&mut settings.ui.show_projects, "Projects");
                ui.toggle_value(&mut settings.ui.show_contact, "Contact");
                ui.separator();
                ui.toggle_value(&mut settings.ui.show_debug, "Debug");
            });
        });

        if let Some(section) = self.show_stage_card(ctx, readout) {
            match section {
                Section::About => settings.ui.show_about = true,
                Section::Projects => settings.ui.show_projects = true,
                Section::Contact => settings.ui.show_contact = true,
            }
        }

        if settings.display.show_hint && readout.stage_changes == 0 {
            egui::Area::new(egui::Id::new("explore_hint"))
                .anchor(egui::Align2::CENTER_BOTTOM, egui::vec2(0.0, -24.0))
                .interactable(false)
                .show(ctx, |ui| {
                    ui.label(
                        RichText::new("Drag or use ← → to explore")
                            .color(Color32::WHITE)
                            .size(16.0),
                    );
                });
        }

        egui::Window::new("About")
            .open(&mut settings.ui.show_about)
            .default_width(420.0)
            .show(ctx, |ui| self.show_about(ui));

        egui::Window::new("Projects")
            .open(&mut settings.ui.show_projects)
            .default_width(420.0)
            .show(ctx, |ui| self.show_projects(ui));

        egui::Window::new("Contact")
            .open(&mut settings.ui.show_contact)
            .show(ctx, |ui| {
                for social in &self.content.social_links {
                    ui.hyperlink_to(&social.name, &social.link);
                }
            });

        egui::Window::new("Debug")
            .open(&mut settings.ui.show_debug)
            .show(ctx, |ui| {
                show_debug(ui, readout);
                ui.separator();
                ui.checkbox(&mut settings.display.show_hint, "Show explore hint");
            });

        let after = (
            settings.ui.show_about,
            settings.ui.show_projects,
            settings.ui.show_contact,
            settings.ui.show_debug,
        );
        (before != after, show_hint != settings.display.show_hint)
    }

    /// Card for the current stage; returns the section its button asks for.
    fn show_stage_card(&self, ctx: &egui::Context, readout: &IslandReadout) -> Option<Section> {
        let card = self.content.stage_card(readout.stage?)?;
        let mut requested = None;

        egui::Area::new(egui::Id::new("stage_card"))
            .anchor(egui::Align2::CENTER_TOP, egui::vec2(0.0, 56.0))
            .show(ctx, |ui| {
                egui::Frame::popup(ui.style()).show(ui, |ui| {
                    ui.set_max_width(360.0);
                    ui.label(RichText::new(&card.text).size(16.0));
                    if let Some(section) = card.link {
                        let label = card.link_label.as_deref().unwrap_or("More");
                        if ui.button(format!("{label} →")).clicked() {
                            requested = Some(section);
                        }
                    }
                });
            });

        requested
    }

    fn show_about(&self, ui: &mut egui::Ui) {
        ui.heading("Skills");
        ui.horizontal_wrapped(|ui| {
            for skill in &self.content.skills {
                let text = match &skill.kind {
                    Some(kind) => format!("{} · {}", skill.name, kind),
                    None => skill.name.clone(),
                };
                ui.label(RichText::new(text).monospace());
            }
        });

        ui.separator();
        ui.heading("Experience");
        for experience in &self.content.experiences {
            let accent = accent_color(experience.accent.as_deref());
            ui.colored_label(accent, RichText::new(&experience.title).strong());
            ui.label(format!("{}, {}", experience.company, experience.date));
            for point in &experience.points {
                ui.label(format!("• {point}"));
            }
            ui.add_space(6.0);
        }
    }

    fn show_projects(&self, ui: &mut egui::Ui) {
        for project in &self.content.projects {
            ui.group(|ui| {
                let color = theme_color(project.theme.as_deref());
                ui.label(RichText::new(&project.name).strong().color(color));
                ui.label(&project.description);
                ui.hyperlink_to("Live link", &project.link);
            });
        }
    }
}

fn accent_color(accent: Option<&str>) -> Color32 {
    accent
        .and_then(|hex| Color32::from_hex(hex).ok())
        .unwrap_or(Color32::LIGHT_BLUE)
}

fn theme_color(theme: Option<&str>) -> Color32 {
    match theme {
        Some("red") => Color32::from_rgb(0xe6, 0x6a, 0x6a),
        Some("yellow") => Color32::from_rgb(0xe6, 0xc2, 0x4c),
        Some("blue") => Color32::from_rgb(0x5a, 0x9b, 0xe6),
        Some("green") => Color32::from_rgb(0x6a, 0xc2, 0x7a),
        _ => Color32::LIGHT_GRAY,
    }
}

fn show_debug(ui: &mut egui::Ui, readout: &IslandReadout) {
    egui::Grid::new("island_debug").num_columns(2).show(ui, |ui| {
        ui.label("Angle");
        ui.label(format!("{:.3} rad", readout.angle));
        ui.end_row();

        ui.label("Normalized");
        ui.label(format!("{:.3} rad", readout.normalized_angle));
        ui.end_row();

        ui.label("Speed");
        ui.label(format!("{:.4} rad/frame", readout.speed));
        ui.end_row();

        ui.label("Stage");
        ui.label(match readout.stage {
            Some(stage) => stage.number().to_string(),
            None => "none".to_string(),
        });
        ui.end_row();

        ui.label("Rotating");
        ui.label(readout.is_rotating.to_string());
        ui.end_row();

        ui.label("Island");
        ui.label(match readout.status {
            IslandStatus::NotLoaded => "not loaded".to_string(),
            IslandStatus::Loading => "loading…".to_string(),
            IslandStatus::Loaded { triangles } => format!("{triangles} triangles"),
            IslandStatus::Error(e) => format!("fallback ({e})"),
        });
        ui.end_row();
    });
}
