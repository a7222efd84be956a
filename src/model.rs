use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::DataError;
use crate::search::QuestionRange;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum AnswerOption {
    A,
    B,
    C,
    D,
}

impl AnswerOption {
    pub const ALL: [AnswerOption; 4] = [
        AnswerOption::A,
        AnswerOption::B,
        AnswerOption::C,
        AnswerOption::D,
    ];

    pub fn label(self) -> &'static str {
        match self {
            AnswerOption::A => "A",
            AnswerOption::B => "B",
            AnswerOption::C => "C",
            AnswerOption::D => "D",
        }
    }
}

/// Textos de las cuatro respuestas. Alguna puede venir vacía en el banco.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AnswerTexts {
    #[serde(default)]
    pub a: String,
    #[serde(default)]
    pub b: String,
    #[serde(default)]
    pub c: String,
    #[serde(default)]
    pub d: String,
}

impl AnswerTexts {
    pub fn get(&self, option: AnswerOption) -> &str {
        match option {
            AnswerOption::A => &self.a,
            AnswerOption::B => &self.b,
            AnswerOption::C => &self.c,
            AnswerOption::D => &self.d,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (AnswerOption, &str)> {
        AnswerOption::ALL.into_iter().map(move |o| (o, self.get(o)))
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: u32,
    pub text: String,
    #[serde(default)]
    pub image: Option<String>,
    pub answers: AnswerTexts,
    pub correct: AnswerOption,
}

impl Question {
    pub fn is_correct(&self, option: AnswerOption) -> bool {
        self.correct == option
    }

    /// Ancla estable para navegar directamente a la pregunta.
    pub fn anchor(&self) -> String {
        format!("question-{}", self.id)
    }

    pub fn image_path(&self) -> Option<String> {
        self.image.as_ref().map(|img| format!("question_images/{img}"))
    }
}

/// Acepta `#question-42` o `question-42`.
pub fn parse_anchor(hash: &str) -> Option<u32> {
    hash.trim_start_matches('#')
        .strip_prefix("question-")?
        .parse()
        .ok()
}

/// Rango contiguo (inclusivo) de ids, p.ej. un capítulo.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: String,
    pub start: u32,
    pub end: u32,
}

impl Section {
    pub fn range(&self) -> QuestionRange {
        QuestionRange::new(self.start, self.end)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ThemeQuiz {
    pub title: String,
    pub question_ids: Vec<u32>,
}

/// Resultado de mapear una lista de ids a preguntas.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Resolved {
    pub questions: Vec<Question>,
    pub missing: Vec<u32>,
}

#[derive(Debug, Clone, Default)]
pub struct QuestionBank {
    questions: Vec<Question>,
    sections: Vec<Section>,
    themes: Vec<ThemeQuiz>,
}

impl QuestionBank {
    pub fn new(questions: Vec<Question>, sections: Vec<Section>, themes: Vec<ThemeQuiz>) -> Self {
        Self {
            questions,
            sections,
            themes,
        }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn themes(&self) -> &[ThemeQuiz] {
        &self.themes
    }

    pub fn get(&self, id: u32) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    /// `[1, N]`, con N el tamaño del banco.
    pub fn full_range(&self) -> QuestionRange {
        QuestionRange::new(1, self.questions.len() as u32)
    }

    pub fn section_questions(&self, section: &Section) -> Vec<&Question> {
        let range = section.range();
        self.questions
            .iter()
            .filter(|q| range.contains(q.id))
            .collect()
    }

    /// Mantiene el orden de `ids`. Los ids que no existen van a `missing`
    /// en lugar de sustituirse por otra pregunta.
    pub fn resolve_ids(&self, ids: &[u32]) -> Resolved {
        let mut resolved = Resolved::default();
        for &id in ids {
            match self.get(id) {
                Some(q) => resolved.questions.push(q.clone()),
                None => resolved.missing.push(id),
            }
        }
        resolved
    }

    pub fn validate(&self) -> Result<(), DataError> {
        if self.questions.is_empty() {
            return Err(DataError::EmptyBank);
        }

        let mut seen = HashSet::new();
        for q in &self.questions {
            if !seen.insert(q.id) {
                return Err(DataError::DuplicateId(q.id));
            }
        }

        for section in &self.sections {
            for id in [section.start, section.end] {
                if !seen.contains(&id) {
                    return Err(DataError::UnknownSectionBound {
                        section: section.title.clone(),
                        id,
                    });
                }
            }
        }

        for theme in &self.themes {
            if let Some(&id) = theme.question_ids.iter().find(|id| !seen.contains(id)) {
                return Err(DataError::UnknownThemeQuestion {
                    theme: theme.title.clone(),
                    id,
                });
            }
        }

        Ok(())
    }
}
