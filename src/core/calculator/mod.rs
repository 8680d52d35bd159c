//! Pure derivations over the entry collection.
//!
//! Everything here is a function of its inputs — the entry list and an
//! explicit reference date — with no access to the store or the system
//! clock, so the calendar, streak and statistics views are deterministic
//! under test.

pub mod calendar;
pub mod energy;
pub mod monthly;
pub mod stats;
pub mod streak;
