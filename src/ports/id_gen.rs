//! ID generator port for producing unique task identifiers.

/// Generates unique identifiers for newly created tasks.
///
/// Abstracting ID generation keeps the board mutators deterministic and
/// lets tests substitute a predictable sequence.
pub trait IdGenerator: Send + Sync {
    /// Generates a new unique identifier string.
    fn generate_id(&self) -> String;
}
