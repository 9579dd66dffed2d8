//! First-class invariants for xiangqi.
//!
//! Invariants are logical properties that must hold throughout a game.
//! They are checked after every committed move in debug builds and when a
//! game is built from a custom position.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples of two to four invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns every violation, not just the first.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$inv::holds(state) {
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);

pub mod generals_present;
pub mod piece_allotment;
pub mod turn_parity;
pub mod zone_confinement;

pub use generals_present::GeneralsPresentInvariant;
pub use piece_allotment::PieceAllotmentInvariant;
pub use turn_parity::TurnParityInvariant;
pub use zone_confinement::ZoneConfinementInvariant;

/// All xiangqi invariants as a composable set.
pub type XiangqiInvariants = (
    GeneralsPresentInvariant,
    TurnParityInvariant,
    PieceAllotmentInvariant,
    ZoneConfinementInvariant,
);
