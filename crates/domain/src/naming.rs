//! The "fully named" capability.
//!
//! Anything that can render a full, human-readable name implements
//! [`FullyNamed`]. Implementers are free to store the name directly
//! ([`Person`](crate::Person)) or derive it from other fields on every read
//! ([`Starship`](crate::Starship)).

use std::sync::Arc;

/// A type that can always produce its full name.
///
/// The accessor never fails. Derived implementations must recompute the
/// value on every call so the result reflects the current field values.
pub trait FullyNamed {
    fn full_name(&self) -> String;
}

impl<T: FullyNamed + ?Sized> FullyNamed for &T {
    fn full_name(&self) -> String {
        (**self).full_name()
    }
}

impl<T: FullyNamed + ?Sized> FullyNamed for Box<T> {
    fn full_name(&self) -> String {
        (**self).full_name()
    }
}

impl<T: FullyNamed + ?Sized> FullyNamed for Arc<T> {
    fn full_name(&self) -> String {
        (**self).full_name()
    }
}
