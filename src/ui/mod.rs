mod helpers;
pub mod layout;
pub mod views;

use crate::app::{AppAction, AppMode, QuizApp};
use eframe::{App, Frame};
use egui::{Context, Key};
use layout::{bottom_panel, top_panel};

impl App for QuizApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // Tecla "A" fuera de un campo de texto: mostrar/ocultar respuestas
        if self.is_searching()
            && !ctx.wants_keyboard_input()
            && ctx.input(|i| i.key_pressed(Key::A))
        {
            self.dispatch(AppAction::ToggleAnswers);
        }

        // PANEL SUPERIOR: buscador o botón "Назад"
        top_panel(self, ctx);

        // PANEL INFERIOR TEMA OSCURO O CLARO
        bottom_panel(ctx);

        // Dispatch por modo a las vistas
        match self.mode {
            AppMode::Search => views::search::ui_search(self, ctx),
            AppMode::Quiz(_) => views::quiz::ui_quiz(self, ctx),
            AppMode::Results { .. } => views::results::ui_results(self, ctx),
        }
    }
}
