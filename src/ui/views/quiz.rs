use crate::QuizApp;
use crate::app::AppAction;
use crate::model::AnswerOption;
use crate::ui::helpers::answer_button;
use crate::ui::layout::centered_panel;
use egui::{Button, Context, RichText};

pub fn ui_quiz(app: &mut QuizApp, ctx: &Context) {
    let mut pending: Option<AppAction> = None;

    let Some(session) = app.session() else {
        return;
    };
    let progress = app.quiz_progress_label().unwrap_or_default();

    centered_panel(ctx, 460.0, 720.0, |ui| {
        let panel_width = ui.available_width();
        let question = session.current();
        let answered = session.is_answered();

        ui.vertical_centered(|ui| {
            ui.label(RichText::new(progress).weak());
            ui.add_space(6.0);
            ui.heading(&question.text);
            if let Some(path) = question.image_path() {
                ui.label(RichText::new(format!("🖼 {path}")).small().weak());
            }
            ui.add_space(12.0);

            for option in AnswerOption::ALL {
                let text = question.answers.get(option);
                if text.is_empty() {
                    continue;
                }
                if answer_button(ui, text, panel_width, session.option_state(option), answered) {
                    pending = Some(AppAction::OptionSelected(option));
                }
                ui.add_space(6.0);
            }

            if answered {
                ui.add_space(10.0);
                let label = if session.is_last() {
                    "Приключи теста"
                } else {
                    "Следващ въпрос"
                };
                if ui.add_sized([panel_width / 2.0, 36.0], Button::new(label)).clicked() {
                    pending = Some(AppAction::Advance);
                }
                ui.label(RichText::new(format!("№ {}", question.id)).small().weak());
            }

            if !app.message.is_empty() {
                ui.add_space(8.0);
                ui.label(&app.message);
            }
        });
    });

    if let Some(action) = pending {
        app.dispatch(action);
    }
}
