//! State machine trait for status enums.
//!
//! Gives lifecycle enums a common way to describe their transition graph and
//! to check a requested transition against it.

/// Trait for status enums that represent state machines.
///
/// Implementors describe their graph through `valid_transitions`; the
/// remaining methods are derived from it.
///
/// # Example
///
/// ```ignore
/// impl StateMachine for BookingStatus {
///     fn valid_transitions(&self) -> Vec<Self> {
///         match self {
///             Pending => vec![Confirmed, Cancelled],
///             Confirmed => vec![Completed, Cancelled],
///             Completed | Cancelled => vec![],
///         }
///     }
/// }
///
/// assert!(BookingStatus::Pending.can_transition_to(&BookingStatus::Confirmed));
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Returns all valid target states from current state.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Returns true if transition from self to target is valid.
    fn can_transition_to(&self, target: &Self) -> bool {
        self.valid_transitions().contains(target)
    }
}
