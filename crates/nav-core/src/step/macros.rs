//! Macro para declarar un enum de steps tipados sin boilerplate.
//!
//! Exportada en la raíz del crate:
//!   use nav_core::flow_steps;
//!
//! ```ignore
//! flow_steps! {
//!     pub enum WizardStep -> Page {
//!         Search = "search": Vec<String>,
//!         Payment = "payment": String,
//!     }
//! }
//! ```
//!
//! Cada variante lleva un `Initializer<Input, Page>`. La igualdad, el hash y
//! `Debug` se derivan sólo del id.

#[macro_export]
macro_rules! flow_steps {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident -> $page:ty {
            $( $(#[$vmeta:meta])* $variant:ident = $id:literal : $input:ty ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant($crate::step::Initializer<$input, $page>), )+
        }

        impl $name {
            /// Ids declarados, en orden de declaración.
            pub const IDS: &'static [&'static str] = &[$($id),+];
        }

        impl $crate::step::StepDefinition for $name {
            fn id(&self) -> &str {
                match self {
                    $( $name::$variant(_) => $id, )+
                }
            }
        }

        impl ::core::cmp::PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                $crate::step::StepDefinition::id(self) == $crate::step::StepDefinition::id(other)
            }
        }

        impl ::core::cmp::Eq for $name {}

        impl ::core::hash::Hash for $name {
            fn hash<H: ::core::hash::Hasher>(&self, state: &mut H) {
                ::core::hash::Hash::hash($crate::step::StepDefinition::id(self), state);
            }
        }

        impl ::core::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.debug_tuple(stringify!($name))
                 .field(&$crate::step::StepDefinition::id(self))
                 .finish()
            }
        }
    };
}
