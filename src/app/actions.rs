use super::*;
use crate::error::SessionError;
use crate::selection::{QuizPlan, build_questions, repeat_wrong};
use crate::session::Advance;
use rand::Rng;

impl QuizApp {
    /// Punto único de entrada de los eventos de la interfaz.
    pub fn dispatch(&mut self, action: AppAction) {
        match action {
            AppAction::SearchChanged(text) => self.cambiar_busqueda(text),
            AppAction::SectionToggled(idx) => self.alternar_seccion(idx),
            AppAction::ToggleAnswers => self.show_answers = !self.show_answers,
            AppAction::StartQuiz(source) => self.start_quiz(source),
            AppAction::OptionSelected(option) => self.select_option(option),
            AppAction::Advance => self.advance(),
            AppAction::BackToSearch => self.volver_a_busqueda(),
            AppAction::Restart => self.reiniciar(),
            AppAction::RepeatWrong => self.repetir_falladas(),
            AppAction::JumpTo(id) => self.jump_to(id),
        }
    }

    pub fn start_quiz(&mut self, source: QuizSource) {
        self.start_quiz_with(source, &mut rand::rng());
    }

    /// Igual que `start_quiz` pero con el generador dado (tests con semilla).
    pub fn start_quiz_with<R: Rng + ?Sized>(&mut self, source: QuizSource, rng: &mut R) {
        match build_questions(&self.bank, &source, rng) {
            Ok(plan) => self.enter_quiz(plan),
            Err(err) => {
                log::warn!("no se pudo preparar el test {source:?}: {err}");
                self.message = format!("⚠ {err}");
            }
        }
    }

    fn enter_quiz(&mut self, plan: QuizPlan) {
        self.message.clear();
        if !plan.missing.is_empty() {
            log::warn!("ids de pregunta inexistentes: {:?}", plan.missing);
            self.message = format!("⚠ Липсващи въпроси: {:?}", plan.missing);
        }

        let total = plan.questions.len();
        match QuizSession::new(plan.questions) {
            Ok(session) => {
                log::info!("empieza un test de {total} preguntas");
                self.mode = AppMode::Quiz(session);
            }
            Err(SessionError::EmptyQuiz) => {
                log::warn!("test vacío, seguimos en la búsqueda");
                self.message = "Няма намерени въпроси.".to_owned();
                self.mode = AppMode::Search;
            }
            Err(err) => {
                log::warn!("no se pudo crear el test: {err}");
                self.message = format!("⚠ {err}");
            }
        }
    }

    pub fn select_option(&mut self, option: AnswerOption) {
        let AppMode::Quiz(session) = &mut self.mode else {
            log::warn!("respuesta {option:?} fuera de un test");
            return;
        };
        let id = session.current().id;
        match session.select_option(option) {
            Ok(correct) => log::debug!("pregunta {id}: {option:?} correcta={correct}"),
            Err(err) => log::warn!("respuesta ignorada en la pregunta {id}: {err}"),
        }
    }

    pub fn advance(&mut self) {
        let AppMode::Quiz(session) = &mut self.mode else {
            return;
        };
        match session.advance() {
            Ok(Advance::Next(idx)) => log::debug!("pregunta {} de {}", idx + 1, session.len()),
            Ok(Advance::Finished(result)) => {
                log::info!(
                    "test terminado: {}/{} ({} falladas)",
                    result.score,
                    result.total,
                    result.wrong_ids.len()
                );
                let questions = session.questions().to_vec();
                self.mode = AppMode::Results { result, questions };
            }
            Err(err) => log::warn!("avance ignorado: {err}"),
        }
    }

    /// Nuevo test solo con las falladas, en el orden del test anterior.
    pub fn repetir_falladas(&mut self) {
        let AppMode::Results { result, questions } = &self.mode else {
            return;
        };
        let plan = QuizPlan {
            questions: repeat_wrong(questions, result),
            missing: Vec::new(),
        };
        self.enter_quiz(plan);
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::app;
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn answer_all(app: &mut QuizApp, pick: AnswerOption) {
        while app.is_in_quiz() {
            app.dispatch(AppAction::OptionSelected(pick));
            app.dispatch(AppAction::Advance);
        }
    }

    #[test]
    fn theme_quiz_runs_to_results_and_repeats_wrong_in_order() {
        let mut app = app();
        app.dispatch(AppAction::StartQuiz(QuizSource::Theme(0)));
        let order: Vec<u32> = app.session().unwrap().questions().iter().map(|q| q.id).collect();
        assert_eq!(order, [3, 10, 5]);

        // 3 y 5 son A, 10 es B
        answer_all(&mut app, AnswerOption::A);
        let result = app.result().unwrap().clone();
        assert_eq!(result.score, 2);
        assert_eq!(result.total, 3);
        assert_eq!(result.wrong_ids, [10]);

        app.dispatch(AppAction::RepeatWrong);
        let retry: Vec<u32> = app.session().unwrap().questions().iter().map(|q| q.id).collect();
        assert_eq!(retry, [10]);
    }

    #[test]
    fn random_quiz_uses_requested_length() {
        let mut app = app();
        let mut rng = StdRng::seed_from_u64(11);
        let length = app.config.short_quiz_length;
        app.start_quiz_with(QuizSource::Random { length }, &mut rng);
        assert_eq!(app.session().unwrap().len(), 4);
    }

    #[test]
    fn advance_before_answer_is_ignored() {
        let mut app = app();
        app.dispatch(AppAction::StartQuiz(QuizSource::Theme(0)));
        app.dispatch(AppAction::Advance);
        let session = app.session().unwrap();
        assert_eq!(session.current_index(), 0);
        assert!(!session.is_answered());
    }

    #[test]
    fn second_answer_does_not_change_score() {
        let mut app = app();
        app.dispatch(AppAction::StartQuiz(QuizSource::Theme(0)));
        app.dispatch(AppAction::OptionSelected(AnswerOption::B));
        app.dispatch(AppAction::OptionSelected(AnswerOption::A));
        let session = app.session().unwrap();
        assert_eq!(session.score(), 0);
        assert_eq!(session.wrong_ids(), [3]);
    }

    #[test]
    fn empty_repeat_stays_in_search_with_message() {
        let mut app = app();
        app.dispatch(AppAction::StartQuiz(QuizSource::RepeatWrong(vec![500])));
        assert!(app.is_searching());
        assert!(!app.message.is_empty());
    }

    #[test]
    fn unknown_theme_keeps_search_mode() {
        let mut app = app();
        app.dispatch(AppAction::StartQuiz(QuizSource::Theme(9)));
        assert!(app.is_searching());
        assert!(app.message.contains("tema 9"));
    }

    #[test]
    fn perfect_run_has_nothing_to_repeat() {
        let mut app = app();
        app.dispatch(AppAction::StartQuiz(QuizSource::RepeatWrong(vec![1, 3])));
        answer_all(&mut app, AnswerOption::A);
        assert!(app.result().unwrap().is_perfect());
        app.dispatch(AppAction::RepeatWrong);
        assert!(app.is_searching());
    }
}
