//! Method dispatch by name

/// A value exposing methods that can be called by name.
///
/// Implementations return `None` when they have no method called `method`;
/// callers decide how that is reported.
pub trait Invoke {
    type Arg;
    type Output;

    /// Call `method` with `args`
    fn invoke(&self, method: &str, args: &[Self::Arg]) -> Option<Self::Output>;

    /// Short description of this value used in error messages
    fn kind(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
