// src/data.rs

use crate::error::DataError;
use crate::model::{Question, QuestionBank, Section, ThemeQuiz};
use serde::de::DeserializeOwned;

const QUESTIONS_YAML: &str = include_str!("data/questions.yaml");
const SECTIONS_YAML: &str = include_str!("data/sections.yaml");
const THEMES_YAML: &str = include_str!("data/themes.yaml");

fn parse<T: DeserializeOwned>(file: &'static str, text: &str) -> Result<T, DataError> {
    serde_yaml::from_str(text).map_err(|source| DataError::Yaml { file, source })
}

/// Construye y valida el banco a partir de los tres YAML (preguntas, secciones, temas).
pub fn parse_bank(questions: &str, sections: &str, themes: &str) -> Result<QuestionBank, DataError> {
    let questions: Vec<Question> = parse("questions.yaml", questions)?;
    let sections: Vec<Section> = parse("sections.yaml", sections)?;
    let themes: Vec<ThemeQuiz> = parse("themes.yaml", themes)?;

    let bank = QuestionBank::new(questions, sections, themes);
    bank.validate()?;
    log::info!(
        "banco cargado: {} preguntas, {} secciones, {} temas",
        bank.len(),
        bank.sections().len(),
        bank.themes().len()
    );
    Ok(bank)
}

/// Carga el banco de preguntas embebido en el binario
pub fn read_bank_embedded() -> Result<QuestionBank, DataError> {
    parse_bank(QUESTIONS_YAML, SECTIONS_YAML, THEMES_YAML)
}
