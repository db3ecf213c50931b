//! Generative claim checking.
//!
//! A claim is a predicate plus the specifiers that generate its arguments.
//! The [`Registry`] runs each claim for a configurable number of trials with
//! freshly drawn arguments and records whether the predicate held every time.

pub mod args;
pub mod claim;
pub mod config;
pub mod engine;
pub mod error;
pub mod group;
pub mod hooks;
pub mod registry;
pub mod report;
pub mod specifier;
pub mod specifiers;

pub use args::Args;
pub use claim::{Claim, ClaimResult, Outcome, Verdict};
pub use claimcheck_value::{Generator, Record, Value};
pub use config::HarnessConfig;
pub use error::HarnessError;
pub use group::Group;
pub use registry::{Registry, DEFAULT_GROUP};
pub use report::{ClaimReport, GroupReport, Summary};
pub use specifier::Specifier;
