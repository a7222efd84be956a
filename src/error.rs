use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("no hay preguntas para este test")]
    EmptyQuiz,

    #[error("la pregunta actual ya tiene respuesta")]
    AlreadyAnswered,

    #[error("hay que responder antes de avanzar")]
    NotAnswered,

    #[error("el test ya ha terminado")]
    Finished,

    #[error("la pregunta {0} aparece más de una vez en el test")]
    DuplicateQuestion(u32),

    #[error("origen de test desconocido: {0}")]
    UnknownSource(String),
}

#[derive(Debug, Error)]
pub enum DataError {
    #[error("no se pudo parsear {file}: {source}")]
    Yaml {
        file: &'static str,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("el banco de preguntas está vacío")]
    EmptyBank,

    #[error("id de pregunta duplicado: {0}")]
    DuplicateId(u32),

    #[error("la sección «{section}» apunta a la pregunta inexistente {id}")]
    UnknownSectionBound { section: String, id: u32 },

    #[error("el test temático «{theme}» apunta a la pregunta inexistente {id}")]
    UnknownThemeQuestion { theme: String, id: u32 },
}
