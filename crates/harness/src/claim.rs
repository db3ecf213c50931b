use std::fmt;
use std::rc::Rc;

use claimcheck_value::Value;
use rand::RngCore;
use serde::Serialize;

use crate::args::Args;
use crate::error::HarnessError;
use crate::specifier::Specifier;

/// The predicate of a claim, after its return type has been normalized.
pub type Predicate = Rc<dyn Fn(&Args) -> Result<Value, HarnessError>>;

/// Convenience return type for fallible predicates.
pub type ClaimResult = Result<bool, HarnessError>;

/// Result slot of a claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Untested,
    Pass,
    Fail,
}

impl Verdict {
    pub fn from_pass(pass: bool) -> Self {
        if pass { Verdict::Pass } else { Verdict::Fail }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Untested => "untested",
            Verdict::Pass => "pass",
            Verdict::Fail => "fail",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Anything a predicate or hook may return.
///
/// A trial passes only when the predicate's outcome is exactly
/// `Value::Bool(true)`; `()` and every other value count as a failed trial.
pub trait Outcome {
    fn into_value(self) -> Result<Value, HarnessError>;
}

impl Outcome for bool {
    fn into_value(self) -> Result<Value, HarnessError> {
        Ok(Value::Bool(self))
    }
}

impl Outcome for Value {
    fn into_value(self) -> Result<Value, HarnessError> {
        Ok(self)
    }
}

impl Outcome for () {
    fn into_value(self) -> Result<Value, HarnessError> {
        Ok(Value::Unit)
    }
}

impl<T: Outcome> Outcome for Result<T, HarnessError> {
    fn into_value(self) -> Result<Value, HarnessError> {
        self.and_then(Outcome::into_value)
    }
}

/// A named predicate bound to its argument specifiers.
///
/// A claim registered through [`crate::Registry::claim`] remembers its group,
/// whose hooks apply when it runs. A claim built with [`Claim::new`] belongs
/// to no group and runs with the global hooks only.
#[derive(Clone)]
pub struct Claim {
    name: String,
    group: Option<String>,
    predicate: Predicate,
    specifiers: Vec<Specifier>,
    result: Verdict,
}

impl Claim {
    pub fn new<F, R>(
        name: impl Into<String>,
        predicate: F,
        specifiers: impl IntoIterator<Item = Specifier>,
    ) -> Self
    where
        F: Fn(&Args) -> R + 'static,
        R: Outcome,
    {
        Claim {
            name: name.into(),
            group: None,
            predicate: Rc::new(move |args: &Args| predicate(args).into_value()),
            specifiers: specifiers.into_iter().collect(),
            result: Verdict::Untested,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn group(&self) -> Option<&str> {
        self.group.as_deref()
    }

    pub(crate) fn set_group(&mut self, group: impl Into<String>) {
        self.group = Some(group.into());
    }

    pub fn specifiers(&self) -> &[Specifier] {
        &self.specifiers
    }

    pub fn result(&self) -> Verdict {
        self.result
    }

    pub(crate) fn set_result(&mut self, verdict: Verdict) {
        self.result = verdict;
    }

    /// Resolve every specifier once, in order.
    pub fn resolve_args(&self, rng: &mut dyn RngCore) -> Args {
        Args::new(self.specifiers.iter().map(|s| s.resolve(rng)).collect())
    }

    /// Invoke the predicate once with already-resolved arguments.
    pub fn evaluate(&self, args: &Args) -> Result<Value, HarnessError> {
        (self.predicate)(args)
    }
}

impl fmt::Debug for Claim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Claim")
            .field("name", &self.name)
            .field("group", &self.group)
            .field("specifiers", &self.specifiers.len())
            .field("result", &self.result)
            .finish()
    }
}
