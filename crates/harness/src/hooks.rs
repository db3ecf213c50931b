use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use crate::claim::Outcome;
use crate::error::HarnessError;

/// A zero-argument procedure run around every trial.
pub type Hook = Rc<dyn Fn() -> Result<(), HarnessError>>;

/// Wrap a user callback as a hook. Any value it returns is discarded.
pub fn hook<F, R>(f: F) -> Hook
where
    F: Fn() -> R + 'static,
    R: Outcome,
{
    Rc::new(move || f().into_value().map(|_| ()))
}

/// Which claims a hook applies to.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum HookScope {
    /// Every claim, regardless of group.
    Global,
    /// Claims of one group.
    Group(String),
}

impl fmt::Display for HookScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HookScope::Global => write!(f, "global"),
            HookScope::Group(name) => write!(f, "group `{name}`"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Setup,
    Teardown,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Setup => write!(f, "setup"),
            Phase::Teardown => write!(f, "teardown"),
        }
    }
}

/// One hook per scope for a single phase.
pub struct HookTable {
    phase: Phase,
    global: Option<Hook>,
    groups: BTreeMap<String, Hook>,
}

impl HookTable {
    pub fn new(phase: Phase) -> Self {
        HookTable {
            phase,
            global: None,
            groups: BTreeMap::new(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Register a hook, replacing any previous hook for the same scope.
    /// Returns true if a hook was replaced.
    pub fn set(&mut self, scope: HookScope, hook: Hook) -> bool {
        match scope {
            HookScope::Global => self.global.replace(hook).is_some(),
            HookScope::Group(name) => self.groups.insert(name, hook).is_some(),
        }
    }

    pub fn get(&self, scope: &HookScope) -> Option<&Hook> {
        match scope {
            HookScope::Global => self.global.as_ref(),
            HookScope::Group(name) => self.groups.get(name),
        }
    }

    pub fn len(&self) -> usize {
        self.groups.len() + usize::from(self.global.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&mut self) {
        self.global = None;
        self.groups.clear();
    }

    /// Run the hook for `group` (if any), then the global hook (if any).
    pub fn run_for(&self, group: Option<&str>) -> Result<(), HarnessError> {
        if let Some((group, hook)) = group.and_then(|g| self.groups.get_key_value(g)) {
            hook().map_err(|source| HarnessError::Hook {
                phase: self.phase,
                scope: HookScope::Group(group.to_string()),
                source: Box::new(source),
            })?;
        }
        if let Some(hook) = &self.global {
            hook().map_err(|source| HarnessError::Hook {
                phase: self.phase,
                scope: HookScope::Global,
                source: Box::new(source),
            })?;
        }
        Ok(())
    }
}

impl fmt::Debug for HookTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HookTable")
            .field("phase", &self.phase)
            .field("global", &self.global.is_some())
            .field("groups", &self.groups.keys().collect::<Vec<_>>())
            .finish()
    }
}
