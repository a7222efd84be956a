use crate::model::{Question, Section};

/// Rango inclusivo `[start, end]` de ids de pregunta.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuestionRange {
    pub start: u32,
    pub end: u32,
}

impl QuestionRange {
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, id: u32) -> bool {
        self.start <= id && id <= self.end
    }
}

/// Una pregunta encaja si el id (como texto), el enunciado o cualquiera de
/// las cuatro respuestas contiene `query`, sin distinguir mayúsculas.
pub fn matches_query(question: &Question, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    if question.id.to_string().contains(query) {
        return true;
    }
    let needle = query.to_lowercase();
    question.text.to_lowercase().contains(&needle)
        || question
            .answers
            .iter()
            .any(|(_, text)| text.to_lowercase().contains(&needle))
}

/// Vista filtrada del banco. Se recalcula entera cada vez; respeta el orden del banco.
pub fn filter<'a>(questions: &'a [Question], query: &str, range: QuestionRange) -> Vec<&'a Question> {
    questions
        .iter()
        .filter(|q| range.contains(q.id) && matches_query(q, query))
        .collect()
}

/// Texto de búsqueda y rango activo de la vista de búsqueda.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchState {
    query: String,
    range: QuestionRange,
    full: QuestionRange,
}

impl SearchState {
    pub fn new(full: QuestionRange) -> Self {
        Self {
            query: String::new(),
            range: full,
            full,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn range(&self) -> QuestionRange {
        self.range
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn is_section_selected(&self, section: &Section) -> bool {
        self.range == section.range()
    }

    /// Pulsar la sección ya activa vuelve al banco completo `[1, N]`.
    pub fn toggle_section(&mut self, section: &Section) {
        if self.is_section_selected(section) {
            self.range = self.full;
        } else {
            self.range = section.range();
        }
    }

    pub fn reset(&mut self) {
        self.query.clear();
    }

    pub fn results<'a>(&self, questions: &'a [Question]) -> Vec<&'a Question> {
        filter(questions, &self.query, self.range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::{bank, question};
    use crate::model::AnswerOption;

    fn ids(questions: &[&Question]) -> Vec<u32> {
        questions.iter().map(|q| q.id).collect()
    }

    #[test]
    fn empty_query_returns_whole_range_in_bank_order() {
        let bank = bank(12);
        let found = filter(bank.questions(), "", QuestionRange::new(3, 6));
        assert_eq!(ids(&found), [3, 4, 5, 6]);
    }

    #[test]
    fn id_matches_as_decimal_substring() {
        let bank = bank(25);
        let found = filter(bank.questions(), "12", bank.full_range());
        assert_eq!(ids(&found), [12]);
        let found = filter(bank.questions(), "2", QuestionRange::new(1, 13));
        assert_eq!(ids(&found), [2, 12]);
    }

    #[test]
    fn text_and_answers_match_case_insensitively() {
        let mut q = question(1, AnswerOption::A);
        q.text = "Señal de BALIZA".into();
        let mut other = question(2, AnswerOption::A);
        other.answers.d = "Luz Verde Intermitente".into();
        let questions = vec![q, other, question(3, AnswerOption::A)];
        let range = QuestionRange::new(1, 3);

        assert_eq!(ids(&filter(&questions, "baliza", range)), [1]);
        assert_eq!(ids(&filter(&questions, "VERDE", range)), [2]);
        assert!(filter(&questions, "inexistente", range).is_empty());
    }

    /// Banco sin dígitos en los textos: así el id solo encaja por el id.
    fn wordy_questions() -> Vec<Question> {
        (1..=40)
            .map(|id| {
                let mut q = question(id, AnswerOption::A);
                q.text = if id % 3 == 0 {
                    "Luz ROJA en la proa".into()
                } else {
                    "Señal acústica".into()
                };
                q.answers.a = "Babor".into();
                q.answers.b = "Estribor".into();
                q.answers.c = if id % 5 == 0 { "Ancla echada".into() } else { "Navegación".into() };
                q.answers.d = "Remolque".into();
                q
            })
            .collect()
    }

    fn contains_in_some_field(q: &Question, query: &str) -> bool {
        let needle = query.to_lowercase();
        [
            q.id.to_string(),
            q.text.to_lowercase(),
            q.answers.a.to_lowercase(),
            q.answers.b.to_lowercase(),
            q.answers.c.to_lowercase(),
            q.answers.d.to_lowercase(),
        ]
        .iter()
        .any(|field| field.contains(&needle))
    }

    #[test]
    fn id_only_and_option_only_hits() {
        let questions = wordy_questions();
        let range = QuestionRange::new(5, 31);

        assert_eq!(ids(&filter(&questions, "3", range)), [13, 23, 30, 31]);
        assert_eq!(ids(&filter(&questions, "ANCLA", range)), [5, 10, 15, 20, 25, 30]);
        assert_eq!(
            ids(&filter(&questions, "roja", range)),
            [6, 9, 12, 15, 18, 21, 24, 27, 30]
        );
    }

    #[test]
    fn every_match_satisfies_query_and_range_exactly_once() {
        let questions = wordy_questions();
        let range = QuestionRange::new(5, 31);
        for query in ["", "1", "3", "babor", "ESTRIBOR", "señal", "echada", "zzz"] {
            let found = filter(&questions, query, range);
            let expected: Vec<u32> = (range.start..=range.end)
                .filter(|&id| contains_in_some_field(&questions[id as usize - 1], query))
                .collect();
            assert_eq!(ids(&found), expected, "query {query:?}");
        }
    }

    #[test]
    fn toggling_a_section_twice_restores_full_range() {
        let bank = bank(30);
        let section = Section {
            title: "Capítulo 2".into(),
            start: 11,
            end: 20,
        };
        let mut state = SearchState::new(bank.full_range());

        state.toggle_section(&section);
        assert!(state.is_section_selected(&section));
        assert_eq!(state.range(), QuestionRange::new(11, 20));

        state.toggle_section(&section);
        assert!(!state.is_section_selected(&section));
        assert_eq!(state.range(), QuestionRange::new(1, 30));
    }

    #[test]
    fn selecting_another_section_switches_range() {
        let first = Section {
            title: "1".into(),
            start: 1,
            end: 5,
        };
        let second = Section {
            title: "2".into(),
            start: 6,
            end: 9,
        };
        let mut state = SearchState::new(QuestionRange::new(1, 9));
        state.toggle_section(&first);
        state.toggle_section(&second);
        assert!(state.is_section_selected(&second));
        assert!(!state.is_section_selected(&first));
    }

    #[test]
    fn reset_clears_query_but_keeps_range() {
        let section = Section {
            title: "1".into(),
            start: 1,
            end: 5,
        };
        let mut state = SearchState::new(QuestionRange::new(1, 9));
        state.set_query("luz");
        state.toggle_section(&section);
        state.reset();
        assert_eq!(state.query(), "");
        assert_eq!(state.range(), section.range());
    }
}
