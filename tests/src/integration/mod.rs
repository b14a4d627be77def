//! # End-to-End Flows
//!
//! Full conversion and administration scenarios against the in-memory
//! adapters.

pub mod administration;
