//! The polymorphic holder.
//!
//! A `Parrot` owns one type-erased [`Capability`] behind an `Rc` and is itself
//! a capability, delegating to whatever it mimics. Copies are always deep
//! (through [`Capability::duplicate`]); the only way to alias the held
//! instance is to ask for it with [`Parrot::as_shared`].
//!
//! All casts go through one check, `Rc<dyn Any>::downcast`, and differ only in
//! how they report a mismatch:
//!
//! | method          | on mismatch               |
//! |-----------------|---------------------------|
//! | `as_shared`     | `None`                    |
//! | `as_optional`   | absent [`Maybe`]          |
//! | `as_value`      | [`ParrotError::InvalidCast`] |

use crate::capability::{Capability, Erased, short_name};
use crate::error::{ParrotError, Result};
use crate::maybe::Maybe;
use crate::stage::{Stage, Utterance};
use std::any::type_name;
use std::fmt;
use std::rc::Rc;

/// Voice and sound used when a silent parrot is asked to perform.
pub const SILENT_VOICE: &str = "parrot";
pub const SILENT_SOUND: &str = "...?";

#[derive(Default)]
pub struct Parrot {
    internal: Option<Rc<dyn Capability>>,
}

impl Parrot {
    /// An empty parrot. Same as `Parrot::default()`.
    pub fn silent() -> Self {
        Self::default()
    }

    /// Wrap an independent duplicate of `source`.
    ///
    /// The parrot never aliases the caller's object; later changes to
    /// `source` are not seen through the parrot.
    pub fn mimic(source: &dyn Capability) -> Self {
        Self::from_duplicate(source.duplicate())
    }

    fn from_duplicate(duplicate: Box<dyn Capability>) -> Self {
        tracing::trace!(
            variant = short_name(Erased::variant_name(&*duplicate)),
            "parrot mimics"
        );
        Self {
            internal: Some(Rc::from(duplicate)),
        }
    }

    /// Move the held instance out, leaving `self` silent.
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }

    pub fn is_silent(&self) -> bool {
        self.internal.is_none()
    }

    /// Type name of the held instance, `None` when silent.
    pub fn variant_name(&self) -> Option<&'static str> {
        self.internal
            .as_deref()
            .map(|internal| Erased::variant_name(internal))
    }

    /// Whether the held instance is exactly a `V`.
    pub fn is<V: Capability>(&self) -> bool {
        self.downcast_ref::<V>().is_some()
    }

    /// Checked downcast sharing ownership with this parrot.
    ///
    /// Returns `None` when silent or when the held instance is not a `V`.
    /// Holding on to the returned `Rc` disables [`Parrot::downcast_mut`] until it
    /// is dropped.
    pub fn as_shared<V: Capability>(&self) -> Option<Rc<V>> {
        let internal = Rc::clone(self.internal.as_ref()?);
        let shared = <dyn Capability as Erased>::into_any_rc(internal)
            .downcast::<V>()
            .ok();
        if shared.is_none() {
            self.log_mismatch::<V>();
        }
        shared
    }

    /// Checked downcast returning an independent copy wrapped in [`Maybe`].
    pub fn as_optional<V: Capability + Clone>(&self) -> Maybe<V> {
        self.as_shared::<V>()
            .map(|shared| V::clone(&shared))
            .into()
    }

    /// Checked downcast returning an independent copy, or `InvalidCast`.
    ///
    /// Only capabilities qualify as `V`; `Rc<_>` and `Maybe<_>` results are
    /// reached through [`Parrot::as_shared`] and [`Parrot::as_optional`].
    pub fn as_value<V: Capability + Clone>(&self) -> Result<V> {
        match self.as_shared::<V>() {
            Some(shared) => Ok(V::clone(&shared)),
            None => Err(self.invalid_cast::<V>()),
        }
    }

    /// Borrow the held instance as a `V` without touching the reference count.
    pub fn downcast_ref<V: Capability>(&self) -> Option<&V> {
        let internal = self.internal.as_deref()?;
        Erased::as_any(internal).downcast_ref::<V>()
    }

    /// Mutable access to the held instance.
    ///
    /// `None` when silent, when the type does not match, or while a pointer
    /// from [`Parrot::as_shared`] is still alive.
    pub fn downcast_mut<V: Capability>(&mut self) -> Option<&mut V> {
        let internal = Rc::get_mut(self.internal.as_mut()?)?;
        Erased::as_any_mut(internal).downcast_mut::<V>()
    }

    /// Consume the parrot and return its instance as a `V`.
    ///
    /// Moves the instance out when this parrot is its only owner and clones it
    /// otherwise. On mismatch the parrot is dropped and `InvalidCast` returned.
    pub fn into_variant<V: Capability + Clone>(self) -> Result<V> {
        let Some(shared) = self.as_shared::<V>() else {
            return Err(self.invalid_cast::<V>());
        };
        drop(self);
        Ok(Rc::try_unwrap(shared).unwrap_or_else(|shared| V::clone(&shared)))
    }

    fn invalid_cast<V: Capability>(&self) -> ParrotError {
        ParrotError::InvalidCast {
            requested: type_name::<V>(),
            held: self.variant_name(),
        }
    }

    fn log_mismatch<V: Capability>(&self) {
        tracing::debug!(
            requested = short_name(type_name::<V>()),
            held = self.variant_name().map(short_name).unwrap_or("nothing"),
            "parrot cast did not match"
        );
    }
}

impl Clone for Parrot {
    fn clone(&self) -> Self {
        match self.internal.as_deref() {
            Some(internal) => Self::from_duplicate(internal.duplicate()),
            None => Self::silent(),
        }
    }
}

impl Capability for Parrot {
    fn perform(&self, n: usize, stage: &mut dyn Stage) {
        match self.internal.as_deref() {
            Some(internal) => internal.perform(n, stage),
            None => stage.emit(Utterance::new(SILENT_VOICE, SILENT_SOUND, n)),
        }
    }

    fn duplicate(&self) -> Box<dyn Capability> {
        Box::new(self.clone())
    }
}

impl fmt::Debug for Parrot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Parrot")
            .field("variant", &self.variant_name().map(short_name))
            .finish()
    }
}
