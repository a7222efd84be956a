use crate::QuizApp;
use crate::app::AppAction;
use crate::ui::layout::centered_panel;
use egui::{Button, Color32, Context, RichText};

pub fn ui_results(app: &mut QuizApp, ctx: &Context) {
    let Some(result) = app.result().cloned() else {
        return;
    };
    let mut pending: Option<AppAction> = None;

    centered_panel(ctx, 260.0, 420.0, |ui| {
        let button_width = ui.available_width() * 0.8;
        let button_height = 36.0;

        ui.vertical_centered(|ui| {
            ui.heading("Готово!");
            ui.add_space(10.0);
            ui.label(RichText::new(format!("Точки: {} / {}", result.score, result.total)).size(20.0));

            if result.is_perfect() {
                ui.add_space(6.0);
                ui.label(
                    RichText::new("🎉 Без нито една грешка!")
                        .color(Color32::YELLOW)
                        .strong(),
                );
            } else {
                ui.add_space(6.0);
                let ids: Vec<String> = result.wrong_ids.iter().map(u32::to_string).collect();
                ui.label(RichText::new(format!("Сбъркани: {}", ids.join(", "))).weak());
            }

            ui.add_space(20.0);
            if ui
                .add_sized([button_width, button_height], Button::new("Започни отначало"))
                .clicked()
            {
                pending = Some(AppAction::Restart);
            }

            if result.has_mistakes() {
                ui.add_space(12.0);
                if ui
                    .add_sized(
                        [button_width, button_height],
                        Button::new("Повтори сбърканите въпроси"),
                    )
                    .clicked()
                {
                    pending = Some(AppAction::RepeatWrong);
                }
            }
        });
    });

    if let Some(action) = pending {
        app.dispatch(action);
    }
}
