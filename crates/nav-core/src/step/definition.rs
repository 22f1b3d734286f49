/// Trait que define un Step del flujo.
///
/// Dos steps con el mismo `id` son el mismo step a efectos de navegación,
/// aunque lleven fábricas distintas.
pub trait StepDefinition {
    /// Identificador estable y único dentro del Flow.
    fn id(&self) -> &str;

    /// Nombre opcional amigable.
    fn name(&self) -> &str {
        self.id()
    }
}

impl StepDefinition for String {
    fn id(&self) -> &str {
        self
    }
}

impl StepDefinition for &'static str {
    fn id(&self) -> &str {
        self
    }
}
