use claimcheck_value::Value;
use log::{debug, info};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::args::Args;
use crate::claim::{Claim, Outcome, Verdict};
use crate::config::HarnessConfig;
use crate::engine::Engine;
use crate::error::HarnessError;
use crate::group::Group;
use crate::hooks::{hook, HookScope, HookTable, Phase};
use crate::report::{GroupReport, Summary};
use crate::specifier::Specifier;

/// Name of the group that always exists and receives claims until another
/// group is selected.
pub const DEFAULT_GROUP: &str = "nogroup";

/// Owns every group of claims, the hook tables and the random source.
///
/// ```
/// use claimcheck::{Registry, Verdict};
/// use claimcheck::specifiers::integer_range;
///
/// let mut registry = Registry::new();
/// registry
///     .group("arithmetic")
///     .claim("addition commutes", |args| -> claimcheck::ClaimResult {
///         let (a, b) = (args.int(0)?, args.int(1)?);
///         Ok(a + b == b + a)
///     }, vec![integer_range(-50, 50), integer_range(-50, 50)]);
///
/// registry.check(None).unwrap();
/// let raw = registry.raw(Some("arithmetic")).unwrap();
/// assert_eq!(raw[0].claims[0].verdict, Verdict::Pass);
/// ```
pub struct Registry {
    groups: Vec<Group>,
    active: String,
    repetitions: u32,
    setups: HookTable,
    teardowns: HookTable,
    rng: ChaCha20Rng,
    seed: u64,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    /// Registry with the default config and a fresh random seed.
    pub fn new() -> Self {
        Self::build(HarnessConfig::default())
    }

    /// Registry from a validated config.
    pub fn with_config(config: HarnessConfig) -> Result<Self, HarnessError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: HarnessConfig) -> Self {
        let seed = config.seed.unwrap_or_else(rand::random);
        Registry {
            groups: vec![Group::new(DEFAULT_GROUP)],
            active: DEFAULT_GROUP.to_string(),
            repetitions: config.repetitions,
            setups: HookTable::new(Phase::Setup),
            teardowns: HookTable::new(Phase::Teardown),
            rng: ChaCha20Rng::seed_from_u64(seed),
            seed,
        }
    }

    // --- Registration ---

    /// Append an untested claim to the active group.
    pub fn claim<F, R>(
        &mut self,
        name: impl Into<String>,
        predicate: F,
        specifiers: impl IntoIterator<Item = Specifier>,
    ) -> &mut Self
    where
        F: Fn(&Args) -> R + 'static,
        R: Outcome,
    {
        let mut claim = Claim::new(name, predicate, specifiers);
        let active = self.active.clone();
        claim.set_group(active.as_str());
        let index = self.ensure_group(&active);
        self.groups[index].push(claim);
        self
    }

    /// Make `name` the active group, creating it if needed.
    pub fn group(&mut self, name: impl Into<String>) -> &mut Self {
        let name = name.into();
        self.ensure_group(&name);
        self.active = name;
        self
    }

    /// Set the number of trials per claim.
    pub fn reps(&mut self, repetitions: u32) -> Result<&mut Self, HarnessError> {
        if repetitions == 0 {
            return Err(HarnessError::InvalidRepetitions(repetitions));
        }
        self.repetitions = repetitions;
        Ok(self)
    }

    /// Register the global setup hook, replacing any previous one.
    pub fn setup<F, R>(&mut self, callback: F) -> &mut Self
    where
        F: Fn() -> R + 'static,
        R: Outcome,
    {
        self.setups.set(HookScope::Global, hook(callback));
        self
    }

    /// Register the setup hook for one group, replacing any previous one.
    pub fn setup_group<F, R>(&mut self, group: impl Into<String>, callback: F) -> &mut Self
    where
        F: Fn() -> R + 'static,
        R: Outcome,
    {
        self.setups.set(HookScope::Group(group.into()), hook(callback));
        self
    }

    /// Register the global teardown hook, replacing any previous one.
    pub fn teardown<F, R>(&mut self, callback: F) -> &mut Self
    where
        F: Fn() -> R + 'static,
        R: Outcome,
    {
        self.teardowns.set(HookScope::Global, hook(callback));
        self
    }

    /// Register the teardown hook for one group, replacing any previous one.
    pub fn teardown_group<F, R>(&mut self, group: impl Into<String>, callback: F) -> &mut Self
    where
        F: Fn() -> R + 'static,
        R: Outcome,
    {
        self.teardowns.set(HookScope::Group(group.into()), hook(callback));
        self
    }

    /// Empty one group, or with `None` reset groups, cursor and hooks.
    ///
    /// The repetition count and random source survive a full clear.
    pub fn clear(&mut self, group: Option<&str>) -> Result<&mut Self, HarnessError> {
        match group {
            Some(name) => {
                let index = self.require_group(name)?;
                self.groups[index].clear();
            }
            None => {
                self.groups = vec![Group::new(DEFAULT_GROUP)];
                self.active = DEFAULT_GROUP.to_string();
                self.setups.clear();
                self.teardowns.clear();
            }
        }
        Ok(self)
    }

    // --- Execution ---

    /// Run every claim of one group, or of all groups in creation order, and
    /// store the verdicts.
    ///
    /// A hook or predicate error aborts the check; claims not reached yet keep
    /// their previous verdict.
    pub fn check(&mut self, group: Option<&str>) -> Result<&mut Self, HarnessError> {
        let indices: Vec<usize> = match group {
            Some(name) => vec![self.require_group(name)?],
            None => (0..self.groups.len()).collect(),
        };
        info!(
            "checking {} group(s), {} repetition(s) per claim, seed {}",
            indices.len(),
            self.repetitions,
            self.seed
        );
        for index in indices {
            self.check_group(index)?;
        }
        let summary = self.summary();
        info!(
            "check finished: {} passed, {} failed, {} untested",
            summary.passed, summary.failed, summary.untested
        );
        Ok(self)
    }

    fn check_group(&mut self, index: usize) -> Result<(), HarnessError> {
        let Registry { groups, setups, teardowns, rng, repetitions, .. } = self;
        let mut engine = Engine::new(setups, teardowns, rng, *repetitions);
        let (name, claims) = groups[index].parts_mut();
        for claim in claims.iter_mut() {
            let pass = engine.run(Some(name), claim).map_err(|source| HarnessError::Aborted {
                group: name.to_string(),
                claim: claim.name().to_string(),
                source: Box::new(source),
            })?;
            let verdict = Verdict::from_pass(pass);
            debug!("{name}/{}: {verdict}", claim.name());
            claim.set_result(verdict);
        }
        Ok(())
    }

    /// Run the trials of a claim without storing a verdict.
    ///
    /// Hooks of the claim's own group apply, along with the global hooks,
    /// regardless of which group is active.
    pub fn test(&mut self, claim: &Claim) -> Result<bool, HarnessError> {
        let mut engine = Engine::new(
            &self.setups,
            &self.teardowns,
            &mut self.rng,
            self.repetitions,
        );
        engine.run(claim.group(), claim)
    }

    /// Draw one value from a specifier using this registry's random source.
    pub fn resolve(&mut self, specifier: &Specifier) -> Value {
        specifier.resolve(&mut self.rng)
    }

    // --- Results ---

    /// `(group, [(claim, verdict)])` for one group, or for all groups.
    pub fn raw(&self, group: Option<&str>) -> Result<Vec<GroupReport>, HarnessError> {
        match group {
            Some(name) => {
                let index = self.require_group(name)?;
                Ok(vec![self.groups[index].report()])
            }
            None => Ok(self.groups.iter().map(Group::report).collect()),
        }
    }

    pub fn summary(&self) -> Summary {
        let reports: Vec<GroupReport> = self.groups.iter().map(Group::report).collect();
        Summary::from_reports(&reports)
    }

    // --- Inspection ---

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn claims(&self, group: &str) -> Result<&[Claim], HarnessError> {
        let index = self.require_group(group)?;
        Ok(self.groups[index].claims())
    }

    pub fn active_group(&self) -> &str {
        &self.active
    }

    pub fn repetitions(&self) -> u32 {
        self.repetitions
    }

    /// Seed the random source was created from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn setups(&self) -> &HookTable {
        &self.setups
    }

    pub fn teardowns(&self) -> &HookTable {
        &self.teardowns
    }

    fn group_index(&self, name: &str) -> Option<usize> {
        self.groups.iter().position(|g| g.name() == name)
    }

    fn require_group(&self, name: &str) -> Result<usize, HarnessError> {
        self.group_index(name)
            .ok_or_else(|| HarnessError::UnknownGroup(name.to_string()))
    }

    fn ensure_group(&mut self, name: &str) -> usize {
        match self.group_index(name) {
            Some(index) => index,
            None => {
                self.groups.push(Group::new(name));
                self.groups.len() - 1
            }
        }
    }
}
