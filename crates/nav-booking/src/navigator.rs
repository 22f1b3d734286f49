//! Capa de UI del asistente: pide el step al controlador, le da su input a la
//! fábrica y presenta la página.
use log::debug;
use nav_core::{FlowController, StepDefinition};

use crate::errors::BookingError;
use crate::inputs::BookingInputs;
use crate::pages::Page;
use crate::presenter::Presenter;
use crate::steps::BookingStep;

pub struct Navigator<P: Presenter> {
    flow: FlowController<BookingStep>,
    inputs: BookingInputs,
    presenter: P,
    tapped: bool,
}

impl<P: Presenter> Navigator<P> {
    pub fn new(flow: FlowController<BookingStep>, inputs: BookingInputs, presenter: P) -> Self {
        Self { flow,
               inputs,
               presenter,
               tapped: false }
    }

    /// Presenta la página inicial. Solo vale antes del primer tap: `start` no
    /// mueve el cursor, así que después mostraría una página que no es la
    /// del step actual.
    pub fn start(&mut self) -> Result<Page, BookingError> {
        if self.tapped {
            return Err(BookingError::AlreadyStarted(self.flow.current().id().to_string()));
        }
        let page = self.flow.start().present(&self.inputs);
        self.show(page)
    }

    /// Botón "siguiente", opcionalmente saltando a `skip_to`.
    pub fn did_tap_next(&mut self, skip_to: Option<&BookingStep>) -> Result<Page, BookingError> {
        self.tapped = true;
        let page = self.flow.advance(skip_to)?.present(&self.inputs);
        self.show(page)
    }

    /// Salto por id (p. ej. desde un enlace o la línea de comandos).
    pub fn did_tap_skip(&mut self, step_id: &str) -> Result<Page, BookingError> {
        self.tapped = true;
        let page = self.flow.skip_to(step_id)?.present(&self.inputs);
        self.show(page)
    }

    fn show(&mut self, page: Page) -> Result<Page, BookingError> {
        debug!("show flow_id={} cursor={} step={}",
               self.flow.flow_id(),
               self.flow.cursor(),
               self.flow.current().id());
        self.presenter.present(&page)?;
        Ok(page)
    }

    pub fn flow(&self) -> &FlowController<BookingStep> {
        &self.flow
    }

    pub fn inputs(&self) -> &BookingInputs {
        &self.inputs
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn into_presenter(self) -> P {
        self.presenter
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presenter::RecordingPresenter;

    fn navigator() -> Navigator<RecordingPresenter> {
        let flow = FlowController::new(BookingStep::standard_flow()).unwrap();
        Navigator::new(flow, BookingInputs::default(), RecordingPresenter::default())
    }

    #[test]
    fn start_presents_search_with_its_input() {
        let mut nav = navigator();
        let page = nav.start().unwrap();
        assert_eq!(page.step_id(), "search");
        assert_eq!(nav.presenter().step_ids(), vec!["search"]);
    }

    #[test]
    fn rejected_skip_presents_nothing() {
        let mut nav = navigator();
        nav.start().unwrap();
        assert!(matches!(nav.did_tap_skip("refund"), Err(BookingError::Flow(_))));
        assert_eq!(nav.presenter().pages.len(), 1);
        assert_eq!(nav.flow().cursor(), 0);
    }

    #[test]
    fn start_after_a_tap_is_refused() {
        let mut nav = navigator();
        nav.start().unwrap();
        nav.did_tap_skip("payment").unwrap();

        let err = nav.start().unwrap_err();
        assert!(matches!(&err, BookingError::AlreadyStarted(step) if step == "payment"));
        assert_eq!(nav.presenter().step_ids(), vec!["search", "payment"]);
        assert_eq!(nav.flow().cursor(), 2);
    }

    #[test]
    fn start_can_repeat_before_any_tap() {
        let mut nav = navigator();
        nav.start().unwrap();
        nav.start().unwrap();
        assert_eq!(nav.presenter().step_ids(), vec!["search", "search"]);
    }
}
