//! Ordered first-match rule tables.
//!
//! A `RuleTable` holds an ordered list of `Rule`s and one unconditional
//! fallback. Rules are tested in declaration order; the first whose predicate
//! holds builds the result and no later rule is consulted. If nothing
//! matches, the fallback builds the result, so evaluation never fails.
//!
//! Keyword sets across rules overlap, so declaration order is the
//! tie-breaker and must not be rearranged.

use tracing::debug;

use triage_core::normalize::NormalizedSymptoms;

/// Decides whether a rule applies.
pub type Predicate<C> = fn(&NormalizedSymptoms, &C) -> bool;

/// Builds the rule's result once it has matched.
pub type Builder<C, O> = fn(&NormalizedSymptoms, &C) -> O;

/// One entry in a rule table.
///
/// `C` is the side input every rule sees besides the symptoms (patient
/// facts for risk, the severity band for treatment).
pub struct Rule<C, O> {
    /// Stable identifier used in logs and tests.
    pub id: &'static str,

    /// Human-readable explanation of what the rule covers.
    pub description: &'static str,

    predicate: Predicate<C>,
    build: Builder<C, O>,
}

impl<C, O> Rule<C, O> {
    pub fn new(
        id: &'static str,
        description: &'static str,
        predicate: Predicate<C>,
        build: Builder<C, O>,
    ) -> Self {
        Self {
            id,
            description,
            predicate,
            build,
        }
    }

    /// A rule whose predicate always holds. Used as a table's fallback.
    pub fn always(id: &'static str, description: &'static str, build: Builder<C, O>) -> Self {
        Self::new(id, description, |_, _| true, build)
    }

    pub fn matches(&self, symptoms: &NormalizedSymptoms, input: &C) -> bool {
        (self.predicate)(symptoms, input)
    }

    pub fn build(&self, symptoms: &NormalizedSymptoms, input: &C) -> O {
        (self.build)(symptoms, input)
    }
}

impl<C, O> std::fmt::Debug for Rule<C, O> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("id", &self.id)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

/// An ordered list of rules ending in an unconditional fallback.
#[derive(Debug)]
pub struct RuleTable<C, O> {
    name: &'static str,
    rules: Vec<Rule<C, O>>,
    fallback: Rule<C, O>,
}

impl<C, O> RuleTable<C, O> {
    pub fn new(name: &'static str, rules: Vec<Rule<C, O>>, fallback: Rule<C, O>) -> Self {
        Self {
            name,
            rules,
            fallback,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The ordered rules, without the fallback.
    pub fn rules(&self) -> &[Rule<C, O>] {
        &self.rules
    }

    pub fn fallback(&self) -> &Rule<C, O> {
        &self.fallback
    }

    /// Find the rule that decides `symptoms`: the first match, or the
    /// fallback if none matches.
    pub fn select(&self, symptoms: &NormalizedSymptoms, input: &C) -> &Rule<C, O> {
        self.rules
            .iter()
            .find(|rule| rule.matches(symptoms, input))
            .unwrap_or(&self.fallback)
    }

    /// Evaluate the table: select the deciding rule and build its result.
    pub fn evaluate(&self, symptoms: &NormalizedSymptoms, input: &C) -> O {
        let rule = self.select(symptoms, input);
        debug!(
            table = self.name,
            rule_id = rule.id,
            mean_severity = symptoms.mean_severity,
            max_severity = symptoms.max_severity,
            "rule matched"
        );
        rule.build(symptoms, input)
    }
}
