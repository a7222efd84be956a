use super::*;

impl QuizApp {
    /// Escribir en el buscador siempre devuelve a la vista de búsqueda.
    pub fn cambiar_busqueda(&mut self, text: String) {
        self.search.set_query(text);
        if !self.is_searching() {
            self.volver_a_busqueda();
        }
    }

    pub fn alternar_seccion(&mut self, idx: usize) {
        match self.bank.sections().get(idx) {
            Some(section) => self.search.toggle_section(section),
            None => log::warn!("sección {idx} inexistente"),
        }
    }

    /// Abandona el test en curso sin más efectos.
    pub fn volver_a_busqueda(&mut self) {
        if self.is_in_quiz() {
            log::info!("test abandonado");
        }
        self.mode = AppMode::Search;
    }

    pub fn reiniciar(&mut self) {
        self.search.reset();
        self.message.clear();
        self.mode = AppMode::Search;
    }

    pub fn jump_to(&mut self, id: u32) {
        if self.bank.get(id).is_none() {
            log::warn!("ancla a pregunta inexistente {id}");
            return;
        }
        // si el rango activo la oculta, se vuelve al banco completo
        if !self.search.range().contains(id) {
            let selected = self
                .bank
                .sections()
                .iter()
                .position(|s| self.search.is_section_selected(s));
            if let Some(idx) = selected {
                self.alternar_seccion(idx);
            }
        }
        self.mode = AppMode::Search;
        self.scroll_to = Some(id);
    }

    /// El ancla pendiente, una sola vez.
    pub fn take_scroll_target(&mut self) -> Option<u32> {
        self.scroll_to.take()
    }
}
