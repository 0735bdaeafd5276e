//! Computes commissions for a batch of operations.
//!
//! Fee schedule: the three commission formulas and their shared
//! percentage/rounding primitives.
//! Process: a single in-order pass over the batch, keeping a per-account
//! history so individual withdrawals can be taxed against a rolling
//! weekly allowance.

pub mod fees;
pub mod operation;
pub mod process;

// Using named types doesn't provide any compiler help, but it helps a lot with
// readability.
// Consider the following, when creating the history HashMap:
// (1) history: HashMap<u64, Vec<Operation>>
// (2) history: HashMap<AccountId, Vec<Operation>>
// Implementation (1) would most likely need comments, and could be confusing.
// Implementation (2) is self-explanatory.
// Besides, maintenance is easier: changing account ids e.g. from u64 to String is trivial.
pub type AccountId = u64;

// I decided to use a decimal library instead of the built-in f64 type, to be
// safer when dealing with money, and making the decimal precision easier to
// deal with.
pub type Amount = rust_decimal::Decimal;
const CENT_PRECISION: u32 = 2;
