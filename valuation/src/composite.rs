//! Valuations of a whole pattern, partitioned by component.

use crate::{
    MatchEngine, ScValuations, ValuationConfig, ValuationError, ValuationResult, ValuationsBase,
};
use std::collections::{BTreeMap, HashSet};
use std::fmt;
use tracing::{debug, trace, warn};
use xpm_core::{VarKey, Variable, Variables};

/// Valuations of a pattern, one [`ScValuations`] per connected component.
///
/// The components' variable sets partition `variables`: every variable of
/// the pattern is owned by exactly one component, and no component is left
/// without variables. The joint binding set is the Cartesian product of the
/// components' rows.
///
/// Like [`ScValuations`], equality and ordering compare variable sets.
#[derive(Debug, Clone)]
pub struct Valuations {
    variables: Variables,
    components: BTreeMap<VarKey, ScValuations>,
    config: ValuationConfig,
}

/// Valuations cached per pattern key.
pub type ValuationsMap<K> = BTreeMap<K, Valuations>;

impl Valuations {
    /// Build the valuations of `pattern` over `corpus`.
    pub fn build<E: MatchEngine>(
        engine: &E,
        pattern: &E::Pattern,
        corpus: &E::Corpus,
    ) -> ValuationResult<Self> {
        Self::build_with(ValuationConfig::default(), engine, pattern, corpus)
    }

    /// Build with an explicit configuration.
    ///
    /// Queries the engine once per component pattern.
    pub fn build_with<E: MatchEngine>(
        config: ValuationConfig,
        engine: &E,
        pattern: &E::Pattern,
        corpus: &E::Corpus,
    ) -> ValuationResult<Self> {
        let variables = engine.variables(pattern);
        let mut components = Vec::new();

        for component in engine.component_patterns(pattern) {
            let satset = engine
                .satisfying_set(&component, corpus)
                .map_err(ValuationError::engine)?;
            let scv = ScValuations::new(engine.variables(&component), satset)?;
            trace!(
                variables = %scv.variables(),
                rows = scv.row_count(),
                "component valuations"
            );
            components.push(scv);
        }

        let valuations = Self::from_parts_with(config, variables, components)?;
        debug!(
            variables = valuations.variable_count(),
            components = valuations.component_count(),
            "built valuations"
        );
        Ok(valuations)
    }

    /// Assemble from a variable set and its components, without querying
    /// any engine. Components without variables are dropped.
    pub fn from_parts(
        variables: Variables,
        components: impl IntoIterator<Item = ScValuations>,
    ) -> ValuationResult<Self> {
        Self::from_parts_with(ValuationConfig::default(), variables, components)
    }

    /// Assemble with an explicit configuration.
    pub fn from_parts_with(
        config: ValuationConfig,
        variables: Variables,
        components: impl IntoIterator<Item = ScValuations>,
    ) -> ValuationResult<Self> {
        let mut by_key = BTreeMap::new();
        for scv in components {
            if scv.is_empty() {
                continue;
            }
            let key = scv.variables().key();
            if by_key.insert(key, scv).is_some() {
                return Err(ValuationError::broken_partition(
                    "two components share the same variables",
                ));
            }
        }

        let valuations = Self {
            variables,
            components: by_key,
            config,
        };
        if config.check_partition {
            valuations.validate()?;
        }
        Ok(valuations)
    }

    /// Eliminate the first variable.
    pub fn erase_front(&self) -> ValuationResult<Self> {
        let var = self.front_variable()?;
        self.erase(var)
    }

    /// Eliminate `var`.
    ///
    /// Only the component owning `var` is rebuilt; a component left without
    /// variables is dropped. A variable this valuation does not have yields
    /// an unchanged copy, or an error under strict elimination.
    pub fn erase(&self, var: &Variable) -> ValuationResult<Self> {
        if !self.variables.contains(var) {
            if self.config.strict_elimination {
                warn!(variable = %var, "refusing to eliminate unknown variable");
                return Err(ValuationError::unknown_variable(var));
            }
            return Ok(self.clone());
        }

        let variables = self.variables.without(var);
        let components = self
            .components
            .iter()
            .filter_map(|(key, scv)| {
                if !scv.contains_variable(var) {
                    return Some((key.clone(), scv.clone()));
                }
                let reduced = scv.erase(var);
                (!reduced.is_empty()).then(|| (reduced.variables().key(), reduced))
            })
            .collect();

        let reduced = Self {
            variables,
            components,
            config: self.config,
        };
        debug!(
            variable = %var,
            remaining = reduced.variable_count(),
            components = reduced.component_count(),
            "eliminated variable"
        );
        if self.config.check_partition {
            reduced.validate()?;
        }
        Ok(reduced)
    }

    /// The component that owns `var`.
    pub fn get_scvaluations(&self, var: &Variable) -> ValuationResult<&ScValuations> {
        self.components
            .values()
            .find(|scv| scv.contains_variable(var))
            .ok_or_else(|| {
                warn!(variable = %var, "no component holds variable");
                ValuationError::missing_component(var)
            })
    }

    /// Components in canonical key order.
    pub fn components(&self) -> impl Iterator<Item = &ScValuations> {
        self.components.values()
    }

    /// Number of components.
    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    /// Size of the joint binding set: the product of the components' row
    /// counts. `None` on overflow.
    pub fn joint_count(&self) -> Option<u128> {
        self.components
            .values()
            .try_fold(1u128, |acc, scv| acc.checked_mul(scv.row_count() as u128))
    }

    /// Successive `erase_front` results, down to no variables.
    pub fn eliminations(&self) -> Eliminations {
        Eliminations {
            current: Some(self.clone()),
        }
    }

    pub fn config(&self) -> ValuationConfig {
        self.config
    }

    /// Check that the components partition the variable set.
    pub fn validate(&self) -> ValuationResult<()> {
        let mut owned = HashSet::new();
        for scv in self.components.values() {
            if scv.is_empty() {
                return Err(self.partition_error("component without variables".to_string()));
            }
            for var in scv.variables() {
                if !self.variables.contains(var) {
                    return Err(self.partition_error(format!(
                        "component {} holds foreign variable {}",
                        scv.variables(),
                        var
                    )));
                }
                if !owned.insert(var) {
                    return Err(
                        self.partition_error(format!("{} is held by two components", var))
                    );
                }
            }
        }
        if let Some(var) = self.variables.iter().find(|v| !owned.contains(v)) {
            return Err(self.partition_error(format!("no component holds {}", var)));
        }
        Ok(())
    }

    fn partition_error(&self, message: String) -> ValuationError {
        warn!(variables = %self.variables, %message, "broken partition");
        ValuationError::broken_partition(message)
    }

    fn fmt_indented(&self, f: &mut fmt::Formatter<'_>, indent: &str) -> fmt::Result {
        writeln!(f, "{}variables: {}", indent, self.variables)?;
        writeln!(f, "{}size = {}", indent, self.components.len())?;
        let nested = format!("{}  ", indent);
        for (i, scv) in self.components.values().enumerate() {
            writeln!(f, "{}scvaluations [{}]:", indent, i)?;
            scv.fmt_indented(f, &nested)?;
        }
        Ok(())
    }
}

impl ValuationsBase for Valuations {
    fn variables(&self) -> &Variables {
        &self.variables
    }
}

impl PartialEq for Valuations {
    fn eq(&self, other: &Self) -> bool {
        self.variables == other.variables
    }
}

impl Eq for Valuations {}

impl PartialOrd for Valuations {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Valuations {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.variables.cmp(&other.variables)
    }
}

impl fmt::Display for Valuations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_indented(f, "")
    }
}

/// Render a [`ValuationsMap`] for diagnostics.
pub fn render_map<K: fmt::Display>(map: &ValuationsMap<K>) -> String {
    struct Entry<'a>(&'a Valuations);

    impl fmt::Display for Entry<'_> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            self.0.fmt_indented(f, "  ")
        }
    }

    let mut out = format!("size = {}\n", map.len());
    for (i, (key, valuations)) in map.iter().enumerate() {
        out.push_str(&format!("pattern [{}]: {}\n", i, key));
        out.push_str(&format!("valuations [{}]:\n{}", i, Entry(valuations)));
    }
    out
}

/// Iterator over the chain of `erase_front` snapshots.
///
/// Stops after the snapshot with no variables, or after the first error.
pub struct Eliminations {
    current: Option<Valuations>,
}

impl Iterator for Eliminations {
    type Item = ValuationResult<Valuations>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current.take()?;
        if current.is_empty() {
            return None;
        }
        match current.erase_front() {
            Ok(next) => {
                self.current = Some(next.clone());
                Some(Ok(next))
            }
            Err(e) => Some(Err(e)),
        }
    }
}
