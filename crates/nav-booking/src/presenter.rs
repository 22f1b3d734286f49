use log::info;

use crate::errors::BookingError;
use crate::pages::Page;

/// Destino de las páginas construidas (la "pantalla").
pub trait Presenter {
    fn present(&mut self, page: &Page) -> Result<(), BookingError>;
}

impl<P: Presenter + ?Sized> Presenter for &mut P {
    fn present(&mut self, page: &Page) -> Result<(), BookingError> {
        (**self).present(page)
    }
}

/// Imprime cada página como una línea JSON en stdout.
#[derive(Debug, Default)]
pub struct StdoutPresenter;

impl Presenter for StdoutPresenter {
    fn present(&mut self, page: &Page) -> Result<(), BookingError> {
        let line = serde_json::to_string(page)?;
        info!("present step={}", page.step_id());
        println!("{line}");
        Ok(())
    }
}

/// Guarda las páginas en memoria.
#[derive(Debug, Default)]
pub struct RecordingPresenter {
    pub pages: Vec<Page>,
}

impl RecordingPresenter {
    pub fn step_ids(&self) -> Vec<&'static str> {
        self.pages.iter().map(Page::step_id).collect()
    }
}

impl Presenter for RecordingPresenter {
    fn present(&mut self, page: &Page) -> Result<(), BookingError> {
        self.pages.push(page.clone());
        Ok(())
    }
}
