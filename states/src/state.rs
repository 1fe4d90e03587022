use std::any::Any;
use std::fmt::Debug;

/// A value stored in [`StateCtx`](crate::StateCtx), keyed by its concrete type.
///
/// Implementors only forward `as_any`/`as_any_mut` to `self`; the context uses them
/// to hand typed references back to callers.
pub trait State: Any + Send + Debug {
    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Human readable name used in logs and errors.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
