//! The contract every holdable variant implements.
//!
//! `Capability` itself only carries the two operations a variant must provide.
//! The type-erasure plumbing the casts rely on lives in [`Erased`], which is
//! blanket-implemented for every `'static` type so variants cannot get it
//! wrong.

use crate::stage::Stage;
use std::any::{Any, type_name};
use std::rc::Rc;

/// Common interface of everything a [`Parrot`](crate::Parrot) can mimic.
pub trait Capability: Erased {
    /// Emit this variant's signal, repeated `n` times, onto `stage`.
    fn perform(&self, n: usize, stage: &mut dyn Stage);

    /// A new, independently owned instance of the same concrete type.
    ///
    /// Must be total and must not share mutable state with `self`; the
    /// holder's deep copy is built on it.
    fn duplicate(&self) -> Box<dyn Capability>;
}

/// `Any` views of a capability. Implemented for all `'static` types.
pub trait Erased: Any {
    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    fn into_any_rc(self: Rc<Self>) -> Rc<dyn Any>;

    fn into_any_box(self: Box<Self>) -> Box<dyn Any>;

    /// Fully qualified name of the concrete type.
    fn variant_name(&self) -> &'static str;
}

// Only sized types get the blanket impl, so `dyn Capability` keeps dispatching
// to the concrete type's vtable entries.
impl<T: Any> Erased for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn into_any_rc(self: Rc<Self>) -> Rc<dyn Any> {
        self
    }

    fn into_any_box(self: Box<Self>) -> Box<dyn Any> {
        self
    }

    fn variant_name(&self) -> &'static str {
        type_name::<T>()
    }
}

/// Last path segment of a type name, for log lines.
pub(crate) fn short_name(full: &str) -> &str {
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}
