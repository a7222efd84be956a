// src/app/view_models.rs

use super::*;
use crate::selection::unique_ids;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionButton {
    pub idx: usize,
    pub title: String,
    pub count: usize,
    pub selected: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeButton {
    pub idx: usize,
    pub title: String,
    pub count: usize,
}

impl SectionButton {
    pub fn label(&self) -> String {
        format!("{} ({})", self.title, self.count)
    }
}

impl ThemeButton {
    pub fn label(&self) -> String {
        format!("{} ({})", self.title, self.count)
    }

    pub fn tooltip(&self) -> String {
        format!("Тест по тема: {} ( {} въпроса )", self.title, self.count)
    }
}

impl QuizApp {
    pub fn section_buttons(&self) -> Vec<SectionButton> {
        self.bank
            .sections()
            .iter()
            .enumerate()
            .map(|(idx, section)| SectionButton {
                idx,
                title: section.title.clone(),
                count: self.bank.section_questions(section).len(),
                selected: self.search.is_section_selected(section),
            })
            .collect()
    }

    pub fn theme_buttons(&self) -> Vec<ThemeButton> {
        self.bank
            .themes()
            .iter()
            .enumerate()
            .map(|(idx, theme)| ThemeButton {
                idx,
                title: theme.title.clone(),
                // lo mismo que tendrá el test: sin repetidos ni ids inexistentes
                count: self
                    .bank
                    .resolve_ids(&unique_ids(&theme.question_ids))
                    .questions
                    .len(),
            })
            .collect()
    }

    /// 1, cada múltiplo de `navigation_step` menor que N y las anclas extra; solo ids existentes.
    pub fn navigation_anchors(&self) -> Vec<u32> {
        let n = self.bank.len() as u32;
        let step = self.config.navigation_step.max(1);
        let mut anchors: Vec<u32> = std::iter::once(1)
            .chain((1..).map(|i| i * step).take_while(|&a| a < n))
            .chain(self.config.extra_anchors.iter().copied())
            .filter(|&a| self.bank.get(a).is_some())
            .collect();
        anchors.sort_unstable();
        anchors.dedup();
        anchors
    }

    /// Las anclas que no son múltiplo del paso se pintan distinto (inicio de capítulo).
    pub fn is_section_anchor(&self, anchor: u32) -> bool {
        anchor != 1 && anchor % self.config.navigation_step.max(1) != 0
    }

    /// "Въпрос 3 / 20"
    pub fn quiz_progress_label(&self) -> Option<String> {
        self.session()
            .map(|s| format!("Въпрос {} / {}", s.current_index() + 1, s.len()))
    }
}
