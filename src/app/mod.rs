use crate::config::QuizConfig;
use crate::data::read_bank_embedded;
use crate::error::DataError;
use crate::model::{AnswerOption, Question, QuestionBank};
use crate::search::SearchState;
use crate::selection::QuizSource;
use crate::session::{QuizSession, SessionResult};

// Submódulos
pub mod actions;
pub mod navigation;
pub mod view_models;

pub use view_models::{SectionButton, ThemeButton};

/// Pantalla activa. El test en curso vive aquí y se descarta al salir de él.
#[derive(Clone, Debug, Default)]
pub enum AppMode {
    #[default]
    Search,
    Quiz(QuizSession),
    Results {
        result: SessionResult,
        // preguntas del test terminado, para repetir las falladas
        questions: Vec<Question>,
    },
}

/// Todo lo que la interfaz puede pedir. Las vistas solo emiten acciones;
/// el estado cambia únicamente en `QuizApp::dispatch`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppAction {
    SearchChanged(String),
    SectionToggled(usize),
    ToggleAnswers,
    StartQuiz(QuizSource),
    OptionSelected(AnswerOption),
    Advance,
    BackToSearch,
    Restart,
    RepeatWrong,
    JumpTo(u32),
}

pub struct QuizApp {
    pub bank: QuestionBank,
    pub config: QuizConfig,
    pub search: SearchState,
    pub mode: AppMode,
    pub show_answers: bool,
    pub message: String,
    /// Ancla pendiente de desplazar en la lista de búsqueda.
    pub scroll_to: Option<u32>,
}

impl QuizApp {
    pub fn new(bank: QuestionBank, config: QuizConfig) -> Self {
        let search = SearchState::new(bank.full_range());
        Self {
            bank,
            config,
            search,
            mode: AppMode::Search,
            show_answers: true,
            message: String::new(),
            scroll_to: None,
        }
    }

    /// Banco y ajustes embebidos en el binario.
    pub fn load_embedded() -> Result<Self, DataError> {
        let bank = read_bank_embedded()?;
        let config = QuizConfig::embedded()?;
        Ok(Self::new(bank, config))
    }

    pub fn is_searching(&self) -> bool {
        matches!(self.mode, AppMode::Search)
    }

    pub fn is_in_quiz(&self) -> bool {
        matches!(self.mode, AppMode::Quiz(_))
    }

    pub fn session(&self) -> Option<&QuizSession> {
        match &self.mode {
            AppMode::Quiz(session) => Some(session),
            _ => None,
        }
    }

    pub fn result(&self) -> Option<&SessionResult> {
        match &self.mode {
            AppMode::Results { result, .. } => Some(result),
            _ => None,
        }
    }

    pub fn filtered_questions(&self) -> Vec<&Question> {
        self.search.results(self.bank.questions())
    }
}
