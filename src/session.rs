use std::collections::HashSet;

use crate::error::SessionError;
use crate::model::{AnswerOption, Question};

/// Resultado final de una sesión; se produce una sola vez, al avanzar desde la última pregunta.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionResult {
    pub score: usize,
    pub total: usize,
    pub wrong_ids: Vec<u32>,
}

impl SessionResult {
    pub fn is_perfect(&self) -> bool {
        self.score == self.total
    }

    pub fn has_mistakes(&self) -> bool {
        !self.wrong_ids.is_empty()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Advance {
    /// Nuevo índice de la pregunta actual.
    Next(usize),
    Finished(SessionResult),
}

/// Cómo pintar un botón de respuesta tras contestar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionState {
    Neutral,
    Correct,
    Incorrect,
}

#[derive(Clone, Debug)]
pub struct QuizSession {
    questions: Vec<Question>,
    current_index: usize,
    selected: Option<AnswerOption>,
    answered: bool,
    finished: bool,
    score: usize,
    wrong_ids: Vec<u32>,
}

impl QuizSession {
    /// Un test sin preguntas es un error de configuración: nunca se entra en él.
    /// Tampoco se admiten ids repetidos, para que cada fallo cuente una sola vez.
    pub fn new(questions: Vec<Question>) -> Result<Self, SessionError> {
        if questions.is_empty() {
            return Err(SessionError::EmptyQuiz);
        }
        let mut seen = HashSet::new();
        if let Some(dup) = questions.iter().find(|q| !seen.insert(q.id)) {
            return Err(SessionError::DuplicateQuestion(dup.id));
        }
        Ok(Self {
            questions,
            current_index: 0,
            selected: None,
            answered: false,
            finished: false,
            score: 0,
            wrong_ids: Vec::new(),
        })
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn current(&self) -> &Question {
        &self.questions[self.current_index]
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn selected(&self) -> Option<AnswerOption> {
        self.selected
    }

    pub fn is_answered(&self) -> bool {
        self.answered
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn is_last(&self) -> bool {
        self.current_index + 1 == self.questions.len()
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn wrong_ids(&self) -> &[u32] {
        &self.wrong_ids
    }

    /// Preguntas respondidas hasta ahora (siempre `score + fallos`).
    pub fn answered(&self) -> usize {
        self.score + self.wrong_ids.len()
    }

    /// Registra la respuesta a la pregunta actual. Devuelve si ha sido correcta.
    pub fn select_option(&mut self, option: AnswerOption) -> Result<bool, SessionError> {
        if self.finished {
            return Err(SessionError::Finished);
        }
        if self.answered {
            return Err(SessionError::AlreadyAnswered);
        }

        self.selected = Some(option);
        self.answered = true;

        let question = &self.questions[self.current_index];
        let correct = question.is_correct(option);
        if correct {
            self.score += 1;
        } else {
            self.wrong_ids.push(question.id);
        }
        Ok(correct)
    }

    pub fn advance(&mut self) -> Result<Advance, SessionError> {
        if self.finished {
            return Err(SessionError::Finished);
        }
        if !self.answered {
            return Err(SessionError::NotAnswered);
        }

        if self.is_last() {
            self.finished = true;
            return Ok(Advance::Finished(self.result()));
        }

        self.current_index += 1;
        self.selected = None;
        self.answered = false;
        Ok(Advance::Next(self.current_index))
    }

    fn result(&self) -> SessionResult {
        SessionResult {
            score: self.score,
            total: self.questions.len(),
            wrong_ids: self.wrong_ids.clone(),
        }
    }

    pub fn option_state(&self, option: AnswerOption) -> OptionState {
        if !self.answered {
            return OptionState::Neutral;
        }
        if self.current().is_correct(option) {
            OptionState::Correct
        } else if self.selected == Some(option) {
            OptionState::Incorrect
        } else {
            OptionState::Neutral
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::question;

    fn abc_session() -> QuizSession {
        QuizSession::new(vec![
            question(1, AnswerOption::A),
            question(2, AnswerOption::B),
            question(3, AnswerOption::C),
        ])
        .unwrap()
    }

    #[test]
    fn empty_quiz_is_rejected() {
        assert_eq!(QuizSession::new(Vec::new()).unwrap_err(), SessionError::EmptyQuiz);
    }

    #[test]
    fn repeated_question_is_rejected() {
        let q7 = question(7, AnswerOption::A);
        assert_eq!(
            QuizSession::new(vec![q7.clone(), question(8, AnswerOption::B), q7]).unwrap_err(),
            SessionError::DuplicateQuestion(7)
        );
    }

    #[test]
    fn answering_a_three_times_gives_one_point() {
        let mut session = abc_session();

        assert_eq!(session.select_option(AnswerOption::A), Ok(true));
        assert_eq!(session.advance(), Ok(Advance::Next(1)));
        assert_eq!(session.select_option(AnswerOption::A), Ok(false));
        assert_eq!(session.advance(), Ok(Advance::Next(2)));
        assert_eq!(session.select_option(AnswerOption::A), Ok(false));

        let result = match session.advance() {
            Ok(Advance::Finished(result)) => result,
            other => panic!("esperaba fin de test, llegó {other:?}"),
        };
        assert_eq!(
            result,
            SessionResult {
                score: 1,
                total: 3,
                wrong_ids: vec![2, 3],
            }
        );
        assert!(session.is_finished());
        assert!(!result.is_perfect());
        assert!(result.has_mistakes());
    }

    #[test]
    fn double_answer_is_rejected_without_touching_state() {
        let mut session = abc_session();
        session.select_option(AnswerOption::D).unwrap();
        assert_eq!(
            session.select_option(AnswerOption::A),
            Err(SessionError::AlreadyAnswered)
        );
        assert_eq!(session.selected(), Some(AnswerOption::D));
        assert_eq!(session.score(), 0);
        assert_eq!(session.wrong_ids(), [1]);
    }

    #[test]
    fn advance_requires_an_answer() {
        let mut session = abc_session();
        assert_eq!(session.advance(), Err(SessionError::NotAnswered));
        assert_eq!(session.current_index(), 0);
    }

    #[test]
    fn finished_session_rejects_everything() {
        let mut session = QuizSession::new(vec![question(9, AnswerOption::B)]).unwrap();
        session.select_option(AnswerOption::B).unwrap();
        assert!(matches!(session.advance(), Ok(Advance::Finished(r)) if r.is_perfect()));
        assert_eq!(session.advance(), Err(SessionError::Finished));
        assert_eq!(session.select_option(AnswerOption::A), Err(SessionError::Finished));
    }

    #[test]
    fn score_plus_mistakes_equals_answered_at_every_step() {
        let questions: Vec<Question> = (1..=20)
            .map(|id| question(id, AnswerOption::ALL[(id % 4) as usize]))
            .collect();
        let mut session = QuizSession::new(questions).unwrap();
        let mut answered = 0;

        loop {
            assert_eq!(session.score() + session.wrong_ids().len(), answered);
            let pick = AnswerOption::ALL[session.current_index() * 7 % 4];
            session.select_option(pick).unwrap();
            answered += 1;
            assert_eq!(session.answered(), answered);

            match session.advance().unwrap() {
                Advance::Next(idx) => {
                    assert_eq!(idx, answered);
                    assert!(!session.is_answered());
                    assert_eq!(session.selected(), None);
                }
                Advance::Finished(result) => {
                    assert_eq!(result.score + result.wrong_ids.len(), result.total);
                    assert_eq!(result.total, 20);
                    break;
                }
            }
        }
    }

    #[test]
    fn option_state_marks_correct_and_wrong_choice() {
        let mut session = abc_session();
        assert_eq!(session.option_state(AnswerOption::A), OptionState::Neutral);

        session.select_option(AnswerOption::C).unwrap();
        assert_eq!(session.option_state(AnswerOption::A), OptionState::Correct);
        assert_eq!(session.option_state(AnswerOption::C), OptionState::Incorrect);
        assert_eq!(session.option_state(AnswerOption::B), OptionState::Neutral);
    }
}
