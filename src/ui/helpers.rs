// src/ui/helpers.rs
use crate::session::OptionState;
use egui::{Button, Color32, RichText, Ui, Vec2};

pub fn big_list_button(ui: &mut Ui, label: String, width: f32, height: f32, enabled: bool) -> bool {
    ui.add_enabled(enabled, Button::new(label).min_size(Vec2::new(width, height)))
        .clicked()
}

/// Botón de respuesta coloreado según el estado tras contestar.
/// Una vez respondida la pregunta, los botones quedan deshabilitados.
pub fn answer_button(ui: &mut Ui, text: &str, width: f32, state: OptionState, answered: bool) -> bool {
    let mut button = Button::new(RichText::new(text).size(16.0))
        .min_size(Vec2::new(width, 44.0))
        .wrap();
    button = match state {
        OptionState::Correct => button.fill(Color32::DARK_GREEN),
        OptionState::Incorrect => button.fill(Color32::DARK_RED),
        OptionState::Neutral => button,
    };
    ui.add_enabled(!answered, button).clicked()
}

/// Línea de respuesta en la lista de búsqueda; la correcta se resalta si se piden respuestas.
pub fn answer_line(ui: &mut Ui, letter: &str, text: &str, highlight: bool) {
    let line = RichText::new(format!("{letter}: {text}"));
    if highlight {
        ui.label(line.strong().color(Color32::from_rgb(60, 170, 90)));
    } else {
        ui.label(line);
    }
}
