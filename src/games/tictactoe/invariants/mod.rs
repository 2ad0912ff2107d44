//! Board invariants, debug-asserted after every placement in
//! [`GameState::play`](super::GameState::play).

/// Property of a game state.
pub trait Invariant<S> {
    /// Whether the property holds.
    fn holds(state: &S) -> bool;

    /// Text reported when the property fails.
    fn description() -> &'static str;
}

/// A failed invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// What failed.
    pub description: String,
}

impl InvariantViolation {
    /// Records a failed invariant.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// Tuples of invariants checked in one pass, collecting every failure.
pub trait InvariantSet<S> {
    /// Checks each member; `Err` lists all that failed.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn collect<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn into_result(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        collect::<S, I1>(state, &mut violations);
        collect::<S, I2>(state, &mut violations);
        collect::<S, I3>(state, &mut violations);
        into_result(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        collect::<S, I1>(state, &mut violations);
        collect::<S, I2>(state, &mut violations);
        into_result(violations)
    }
}

pub mod balanced_marks;
pub mod known_keys;
pub mod turn_count;

pub use balanced_marks::BalancedMarksInvariant;
pub use known_keys::KnownKeysInvariant;
pub use turn_count::TurnCountInvariant;

/// Invariants checked after each placement.
pub type TicTacToeInvariants = (
    KnownKeysInvariant,
    TurnCountInvariant,
    BalancedMarksInvariant,
);
