use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::HashSet;

use crate::error::SessionError;
use crate::model::{Question, QuestionBank};
use crate::session::SessionResult;

/// De dónde salen las preguntas de un test.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizSource {
    /// Muestra aleatoria de todo el banco.
    Random { length: usize },
    /// Todas las preguntas de una sección, barajadas.
    Section(usize),
    /// Lista curada de un test temático, en su orden.
    Theme(usize),
    /// Las preguntas falladas de un test anterior, en su orden.
    RepeatWrong(Vec<u32>),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct QuizPlan {
    pub questions: Vec<Question>,
    /// Ids pedidos que no existen en el banco.
    pub missing: Vec<u32>,
}

/// Baraja (Fisher–Yates) y se queda con las primeras `len`.
pub fn random_sample<R: Rng + ?Sized>(pool: &[Question], len: usize, rng: &mut R) -> Vec<Question> {
    let mut shuffled = pool.to_vec();
    shuffled.shuffle(rng);
    shuffled.truncate(len);
    shuffled
}

/// Quita ids repetidos conservando la primera aparición.
pub(crate) fn unique_ids(ids: &[u32]) -> Vec<u32> {
    let mut seen = HashSet::new();
    ids.iter().copied().filter(|id| seen.insert(*id)).collect()
}

pub fn build_questions<R: Rng + ?Sized>(
    bank: &QuestionBank,
    source: &QuizSource,
    rng: &mut R,
) -> Result<QuizPlan, SessionError> {
    let plan = match source {
        QuizSource::Random { length } => QuizPlan {
            questions: random_sample(bank.questions(), *length, rng),
            missing: Vec::new(),
        },
        QuizSource::Section(idx) => {
            let section = bank
                .sections()
                .get(*idx)
                .ok_or_else(|| SessionError::UnknownSource(format!("sección {idx}")))?;
            let pool: Vec<Question> = bank
                .section_questions(section)
                .into_iter()
                .cloned()
                .collect();
            let len = pool.len();
            QuizPlan {
                questions: random_sample(&pool, len, rng),
                missing: Vec::new(),
            }
        }
        QuizSource::Theme(idx) => {
            let theme = bank
                .themes()
                .get(*idx)
                .ok_or_else(|| SessionError::UnknownSource(format!("tema {idx}")))?;
            let resolved = bank.resolve_ids(&unique_ids(&theme.question_ids));
            QuizPlan {
                questions: resolved.questions,
                missing: resolved.missing,
            }
        }
        QuizSource::RepeatWrong(ids) => {
            let resolved = bank.resolve_ids(&unique_ids(ids));
            QuizPlan {
                questions: resolved.questions,
                missing: resolved.missing,
            }
        }
    };
    Ok(plan)
}

/// Preguntas del test anterior que se fallaron, en el orden en que aparecieron.
pub fn repeat_wrong(previous: &[Question], result: &SessionResult) -> Vec<Question> {
    previous
        .iter()
        .filter(|q| result.wrong_ids.contains(&q.id))
        .cloned()
        .collect()
}
