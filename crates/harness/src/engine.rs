use log::trace;
use rand::RngCore;

use crate::claim::Claim;
use crate::error::HarnessError;
use crate::hooks::HookTable;

/// Runs the trials of one claim against a registry's hooks and random source.
pub struct Engine<'a> {
    setups: &'a HookTable,
    teardowns: &'a HookTable,
    rng: &'a mut dyn RngCore,
    repetitions: u32,
}

impl<'a> Engine<'a> {
    pub fn new(
        setups: &'a HookTable,
        teardowns: &'a HookTable,
        rng: &'a mut dyn RngCore,
        repetitions: u32,
    ) -> Self {
        Engine { setups, teardowns, rng, repetitions }
    }

    /// Run `repetitions` trials of `claim` in the hook scope of `group`.
    /// With no group only the global hooks run.
    ///
    /// Every trial runs even after a failure, so hook and predicate side
    /// effects are observed exactly `repetitions` times. An error from a
    /// hook or the predicate stops the run immediately.
    pub fn run(&mut self, group: Option<&str>, claim: &Claim) -> Result<bool, HarnessError> {
        let mut pass = true;
        for trial in 0..self.repetitions {
            let args = claim.resolve_args(&mut *self.rng);
            self.setups.run_for(group)?;
            let outcome = claim.evaluate(&args)?;
            self.teardowns.run_for(group)?;

            let held = outcome.is_true();
            trace!(
                "{}/{}: trial {trial} {} with {:?}",
                group.unwrap_or("-"),
                claim.name(),
                if held { "held" } else { "failed" },
                args.values()
            );
            if !held {
                pass = false;
            }
        }
        Ok(pass)
    }
}
