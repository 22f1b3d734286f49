use std::any::type_name;
use std::fmt;
use std::sync::Arc;

/// Fábrica tipada de un step: convierte el input propio de la variante en una
/// página (`P`).
///
/// El tipo de entrada queda fijado en compilación, así que invocar la fábrica
/// con un input de otro tipo no compila. Clonar comparte el mismo closure.
pub struct Initializer<I, P> {
    f: Arc<dyn Fn(I) -> P + Send + Sync>,
}

impl<I, P> Initializer<I, P> {
    pub fn new<F>(f: F) -> Self
        where F: Fn(I) -> P + Send + Sync + 'static
    {
        Self { f: Arc::new(f) }
    }

    /// Invoca la fábrica con el input de la variante.
    #[inline]
    pub fn call(&self, input: I) -> P {
        (self.f)(input)
    }
}

impl<I, P> Clone for Initializer<I, P> {
    fn clone(&self) -> Self {
        Self { f: Arc::clone(&self.f) }
    }
}

impl<I, P> fmt::Debug for Initializer<I, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Initializer<{} -> {}>", type_name::<I>(), type_name::<P>())
    }
}
