//! Leave-request lifecycle for the Dayflow engine.
//!
//! Submission builds a pending request with a computed inclusive day
//! count; approval and rejection are the only transitions and both are
//! terminal.

mod ledger;

pub use ledger::{
    DecisionOutcome, LeaveDecision, LeaveDraft, days_inclusive, decide, submit,
};
