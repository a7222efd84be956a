// src/config.rs

use serde::{Deserialize, Serialize};

use crate::error::DataError;

/// Ajustes del quiz. Se leen del YAML embebido; lo que falte toma el valor por defecto.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct QuizConfig {
    pub window_title: String,
    /// Test aleatorio largo (examen completo).
    pub quiz_length: usize,
    pub short_quiz_length: usize,
    /// Cada cuántas preguntas hay un ancla en la barra de navegación.
    pub navigation_step: u32,
    /// Anclas extra (inicio de capítulos largos).
    pub extra_anchors: Vec<u32>,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            window_title: "Листовки ВВП".to_owned(),
            quiz_length: 60,
            short_quiz_length: 20,
            navigation_step: 50,
            extra_anchors: vec![184, 329],
        }
    }
}

impl QuizConfig {
    pub fn from_yaml(text: &str) -> Result<Self, DataError> {
        serde_yaml::from_str(text).map_err(|source| DataError::Yaml {
            file: "config.yaml",
            source,
        })
    }

    pub fn embedded() -> Result<Self, DataError> {
        Self::from_yaml(include_str!("data/config.yaml"))
    }
}
