use crate::claim::Claim;
use crate::report::{ClaimReport, GroupReport};

/// An ordered collection of claims sharing a name and hook scope.
#[derive(Debug, Clone)]
pub struct Group {
    name: String,
    claims: Vec<Claim>,
}

impl Group {
    pub fn new(name: impl Into<String>) -> Self {
        Group {
            name: name.into(),
            claims: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn claims(&self) -> &[Claim] {
        &self.claims
    }

    pub fn len(&self) -> usize {
        self.claims.len()
    }

    pub fn is_empty(&self) -> bool {
        self.claims.is_empty()
    }

    pub(crate) fn push(&mut self, claim: Claim) {
        self.claims.push(claim);
    }

    pub(crate) fn clear(&mut self) {
        self.claims.clear();
    }

    /// Split borrow: the name for hook lookup, the claims for result updates.
    pub(crate) fn parts_mut(&mut self) -> (&str, &mut [Claim]) {
        (&self.name, &mut self.claims)
    }

    pub fn report(&self) -> GroupReport {
        GroupReport {
            name: self.name.clone(),
            claims: self
                .claims
                .iter()
                .map(|c| ClaimReport {
                    name: c.name().to_string(),
                    verdict: c.result(),
                })
                .collect(),
        }
    }
}
