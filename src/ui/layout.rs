use crate::app::{AppAction, QuizApp};
use egui::{CentralPanel, Context, Frame, RichText, TextEdit, Ui, Visuals};

pub fn top_panel(app: &mut QuizApp, ctx: &Context) {
    egui::TopBottomPanel::top("menu_panel").show(ctx, |ui| {
        if app.is_in_quiz() {
            ui.horizontal_centered(|ui| {
                if ui.button("⬅ Назад").on_hover_text("Назад към въпросите").clicked() {
                    app.dispatch(AppAction::BackToSearch);
                }
            });
            return;
        }

        if !app.is_searching() {
            return;
        }

        ui.vertical_centered(|ui| {
            ui.add_space(6.0);
            ui.heading(RichText::new(&app.config.window_title).strong());
            ui.add_space(4.0);

            let mut text = app.search.query().to_owned();
            let edit = TextEdit::singleline(&mut text)
                .hint_text("Търси въпроси...")
                .desired_width(ui.available_width().min(480.0));
            if ui.add(edit).changed() {
                app.dispatch(AppAction::SearchChanged(text));
            }
            ui.add_space(4.0);

            // Barra de anclas: 1, 50, 100... y los inicios de capítulo
            let anchors = app.navigation_anchors();
            ui.horizontal_wrapped(|ui| {
                for anchor in anchors {
                    let label = if app.is_section_anchor(anchor) {
                        RichText::new(anchor.to_string()).italics()
                    } else {
                        RichText::new(anchor.to_string())
                    };
                    if ui
                        .small_button(label)
                        .on_hover_text(format!("Отиди на въпрос {anchor}"))
                        .clicked()
                    {
                        app.dispatch(AppAction::JumpTo(anchor));
                    }
                }
            });
            ui.add_space(4.0);
        });
    });
}

pub fn bottom_panel(ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!("v{}", env!("CARGO_PKG_VERSION")));
            // ----------- BOTONES DE TEMA -----------
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("🌙 Тъмна тема").clicked() {
                    ctx.set_visuals(Visuals::dark());
                }
                if ui.button("☀ Светла тема").clicked() {
                    ctx.set_visuals(Visuals::light());
                }
            });
        });
    });
}

/// Panel centrado tanto vertical como horizontalmente,
/// con un tamaño de contenido máximo y un bloque interior `inner`.
pub fn centered_panel(ctx: &Context, est_height: f32, max_width: f32, inner: impl FnOnce(&mut Ui)) {
    CentralPanel::default().show(ctx, |ui| {
        let extra = ((ui.available_height() - est_height) / 2.0).max(0.0);
        ui.add_space(extra);
        ui.vertical_centered(|ui| {
            Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(16, 16))
                .show(ui, |ui| {
                    let w = ui.available_width().min(max_width);
                    ui.set_width(w);
                    inner(ui);
                });
        });
        ui.add_space(extra);
    });
}
