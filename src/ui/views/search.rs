use crate::QuizApp;
use crate::app::AppAction;
use crate::selection::QuizSource;
use crate::ui::helpers::{answer_line, big_list_button};
use egui::{Align, Button, CentralPanel, Color32, Context, RichText, ScrollArea};

pub fn ui_search(app: &mut QuizApp, ctx: &Context) {
    let scroll_target = app.take_scroll_target();
    let mut pending: Vec<AppAction> = Vec::new();

    CentralPanel::default().show(ctx, |ui| {
        let max_width = 760.0;
        let content_width = ui.available_width().min(max_width);
        let button_h = 32.0;
        let button_w = 180.0;

        if !app.message.is_empty() {
            ui.label(RichText::new(&app.message).color(Color32::YELLOW).strong());
            ui.add_space(6.0);
        }

        // Filtro por sección (vuelve a pulsar para quitarlo)
        ui.horizontal_wrapped(|ui| {
            for info in app.section_buttons() {
                let button = Button::new(&info.title)
                    .selected(info.selected)
                    .min_size(egui::vec2(button_w, button_h));
                if ui.add(button).clicked() {
                    pending.push(AppAction::SectionToggled(info.idx));
                }
            }
        });
        ui.add_space(6.0);

        // Tests aleatorios, temáticos y por sección
        ui.horizontal_wrapped(|ui| {
            for length in [app.config.quiz_length, app.config.short_quiz_length] {
                let clicked = ui
                    .add_sized(
                        [button_w, button_h],
                        Button::new(format!("Тест {length} въпроса")).fill(Color32::DARK_GREEN),
                    )
                    .on_hover_text(format!("Примерен тест от {length} случайни въпроса"))
                    .clicked();
                if clicked {
                    pending.push(AppAction::StartQuiz(QuizSource::Random { length }));
                }
            }
            for theme in app.theme_buttons() {
                if ui
                    .add_sized([button_w, button_h], Button::new(theme.label()))
                    .on_hover_text(theme.tooltip())
                    .clicked()
                {
                    pending.push(AppAction::StartQuiz(QuizSource::Theme(theme.idx)));
                }
            }
            for info in app.section_buttons() {
                if big_list_button(ui, info.label(), button_w, button_h, info.count > 0) {
                    pending.push(AppAction::StartQuiz(QuizSource::Section(info.idx)));
                }
            }
        });
        ui.add_space(6.0);

        let toggle_label = if app.show_answers {
            "🙈 Скрий отговорите"
        } else {
            "👁 Покажи отговорите"
        };
        if ui.button(toggle_label).on_hover_text("Клавиш A").clicked() {
            pending.push(AppAction::ToggleAnswers);
        }
        ui.separator();

        let questions = app.filtered_questions();
        if questions.is_empty() {
            ui.label("Няма нищо намерено!");
            return;
        }

        ScrollArea::vertical().auto_shrink([false; 2]).show(ui, |ui| {
            ui.set_width(content_width);
            for q in questions {
                let title = ui
                    .push_id(q.anchor(), |ui| {
                        ui.label(RichText::new(format!("{}. {}", q.id, q.text)).strong())
                    })
                    .inner;
                if scroll_target == Some(q.id) {
                    title.scroll_to_me(Some(Align::TOP));
                }
                if let Some(path) = q.image_path() {
                    ui.label(RichText::new(format!("🖼 {path}")).small().weak());
                }
                for (option, text) in q.answers.iter().filter(|(_, t)| !t.is_empty()) {
                    let highlight = app.show_answers && q.is_correct(option);
                    answer_line(ui, option.label(), text, highlight);
                }
                ui.add_space(10.0);
            }
        });
    });

    for action in pending {
        app.dispatch(action);
    }
}
