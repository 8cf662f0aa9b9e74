//! Assertion types and builders for verifying valuation snapshots.

use xpm_core::{Tuple, Variable};
use xpm_valuation::{ScValuations, Valuations, ValuationsBase};

use crate::error::{ScenarioError, ScenarioResult};

/// A complete assertion for one snapshot.
#[derive(Default)]
pub struct Assertion {
    // Shape assertions
    pub variables: Option<Vec<String>>,
    pub components: Option<usize>,
    pub joint: Option<u128>,
    pub empty: Option<bool>,

    // Per-component assertions, keyed by a member variable
    pub rows: Vec<(String, usize)>,
    pub owners: Vec<(String, Vec<String>)>,
    pub tuples: Vec<(String, Vec<Tuple>)>,
    pub missing: Vec<String>,

    // Error assertions
    pub error: Option<String>,
    pub error_pattern: Option<String>,

    // Custom assertion function
    #[allow(clippy::type_complexity)]
    pub custom: Option<Box<dyn Fn(&Valuations) -> bool + Send + Sync>>,
}

impl std::fmt::Debug for Assertion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Assertion")
            .field("variables", &self.variables)
            .field("components", &self.components)
            .field("joint", &self.joint)
            .field("empty", &self.empty)
            .field("rows", &self.rows)
            .field("owners", &self.owners)
            .field("missing", &self.missing)
            .field("error", &self.error)
            .field("custom", &self.custom.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

impl Assertion {
    /// Create a new empty assertion.
    pub fn new() -> Self {
        Self::default()
    }

    /// Verify the assertion against a step result.
    pub fn verify(&self, step: &str, result: &Result<Valuations, String>) -> ScenarioResult<()> {
        if let Some(ref expected_error) = self.error {
            return match result {
                Err(msg) if msg.contains(expected_error) => Ok(()),
                Err(msg) => Err(ScenarioError::assertion_failed(
                    step,
                    format!(
                        "expected error containing '{}', got: {}",
                        expected_error, msg
                    ),
                )),
                Ok(_) => Err(ScenarioError::assertion_failed(
                    step,
                    format!(
                        "expected error containing '{}', but step succeeded",
                        expected_error
                    ),
                )),
            };
        }

        if let Some(ref pattern) = self.error_pattern {
            let re = regex_lite::Regex::new(pattern).map_err(|e| {
                ScenarioError::assertion_failed(step, format!("invalid regex pattern: {}", e))
            })?;
            return match result {
                Err(msg) if re.is_match(msg) => Ok(()),
                Err(msg) => Err(ScenarioError::assertion_failed(
                    step,
                    format!("expected error matching '{}', got: {}", pattern, msg),
                )),
                Ok(_) => Err(ScenarioError::assertion_failed(
                    step,
                    format!("expected error matching '{}', but step succeeded", pattern),
                )),
            };
        }

        let valuations = result
            .as_ref()
            .map_err(|msg| ScenarioError::assertion_failed(step, format!("step failed: {}", msg)))?;

        if let Some(ref custom) = self.custom {
            if !custom(valuations) {
                return Err(ScenarioError::assertion_failed(
                    step,
                    "custom assertion failed",
                ));
            }
        }

        self.verify_shape(step, valuations)?;
        self.verify_components(step, valuations)
    }

    fn verify_shape(&self, step: &str, valuations: &Valuations) -> ScenarioResult<()> {
        if let Some(ref expected) = self.variables {
            let actual: Vec<&str> = valuations.variables().iter().map(Variable::name).collect();
            if actual != *expected {
                return Err(ScenarioError::assertion_failed(
                    step,
                    format!("expected variables {:?}, got {:?}", expected, actual),
                ));
            }
        }

        if let Some(expected) = self.components {
            let actual = valuations.component_count();
            if actual != expected {
                return Err(ScenarioError::assertion_failed(
                    step,
                    format!("expected {} components, got {}", expected, actual),
                ));
            }
        }

        if let Some(expected) = self.joint {
            match valuations.joint_count() {
                Some(actual) if actual == expected => {}
                Some(actual) => {
                    return Err(ScenarioError::assertion_failed(
                        step,
                        format!("expected {} joint valuations, got {}", expected, actual),
                    ))
                }
                None => {
                    return Err(ScenarioError::assertion_failed(
                        step,
                        format!("expected {} joint valuations, count overflowed", expected),
                    ))
                }
            }
        }

        if let Some(expected) = self.empty {
            if valuations.is_empty() != expected {
                return Err(ScenarioError::assertion_failed(
                    step,
                    if expected {
                        format!("expected no variables, got {}", valuations.variables())
                    } else {
                        "expected variables, got none".to_string()
                    },
                ));
            }
        }

        Ok(())
    }

    fn verify_components(&self, step: &str, valuations: &Valuations) -> ScenarioResult<()> {
        for (var, expected) in &self.rows {
            let actual = owner(step, valuations, var)?.row_count();
            if actual != *expected {
                return Err(ScenarioError::assertion_failed(
                    step,
                    format!("expected {} rows for ${}, got {}", expected, var, actual),
                ));
            }
        }

        for (var, expected) in &self.owners {
            let component = owner(step, valuations, var)?;
            let actual: Vec<&str> = component.variables().iter().map(Variable::name).collect();
            if actual != *expected {
                return Err(ScenarioError::assertion_failed(
                    step,
                    format!(
                        "expected ${} in component {:?}, got {:?}",
                        var, expected, actual
                    ),
                ));
            }
        }

        for (var, expected) in &self.tuples {
            let component = owner(step, valuations, var)?;
            let mut actual = component.rows().to_vec();
            let mut expected = expected.clone();
            actual.sort();
            expected.sort();
            if actual != expected {
                return Err(ScenarioError::assertion_failed(
                    step,
                    format!(
                        "expected rows {:?} for ${}, got {:?}",
                        expected, var, actual
                    ),
                ));
            }
        }

        for var in &self.missing {
            if valuations.get_scvaluations(&Variable::new(var)).is_ok() {
                return Err(ScenarioError::assertion_failed(
                    step,
                    format!("expected no component for ${}", var),
                ));
            }
        }

        Ok(())
    }
}

fn owner<'v>(step: &str, valuations: &'v Valuations, var: &str) -> ScenarioResult<&'v ScValuations> {
    valuations
        .get_scvaluations(&Variable::new(var))
        .map_err(|e| ScenarioError::assertion_failed(step, e.to_string()))
}

/// Builder for assertions.
#[derive(Default)]
pub struct AssertionBuilder {
    assertion: Assertion,
}

impl AssertionBuilder {
    /// Create a new assertion builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Expect exactly these variables, in order (bare names).
    pub fn variables(mut self, names: &[&str]) -> Self {
        self.assertion.variables = Some(names.iter().map(|s| s.to_string()).collect());
        self
    }

    /// Expect this many components.
    pub fn components(mut self, n: usize) -> Self {
        self.assertion.components = Some(n);
        self
    }

    /// Expect this many joint valuations (product of component row counts).
    pub fn joint(mut self, n: u128) -> Self {
        self.assertion.joint = Some(n);
        self
    }

    /// Expect no variables left.
    pub fn empty(mut self) -> Self {
        self.assertion.empty = Some(true);
        self
    }

    /// Expect at least one variable left.
    pub fn not_empty(mut self) -> Self {
        self.assertion.empty = Some(false);
        self
    }

    /// Expect the component holding `var` to have `n` rows.
    pub fn rows(mut self, var: &str, n: usize) -> Self {
        self.assertion.rows.push((var.to_string(), n));
        self
    }

    /// Expect `var` to share a component with exactly `members`, in order.
    pub fn component(mut self, var: &str, members: &[&str]) -> Self {
        self.assertion.owners.push((
            var.to_string(),
            members.iter().map(|s| s.to_string()).collect(),
        ));
        self
    }

    /// Expect the component holding `var` to have exactly these rows, in any order.
    pub fn tuples(mut self, var: &str, rows: Vec<Tuple>) -> Self {
        self.assertion.tuples.push((var.to_string(), rows));
        self
    }

    /// Expect no component to hold `var`.
    pub fn missing(mut self, var: &str) -> Self {
        self.assertion.missing.push(var.to_string());
        self
    }

    /// Expect an error containing the given message.
    pub fn error(mut self, msg: &str) -> Self {
        self.assertion.error = Some(msg.to_string());
        self
    }

    /// Expect an error matching the given regex.
    pub fn error_matching(mut self, pattern: &str) -> Self {
        self.assertion.error_pattern = Some(pattern.to_string());
        self
    }

    /// Add a custom assertion function.
    pub fn custom<F>(mut self, f: F) -> Self
    where
        F: Fn(&Valuations) -> bool + Send + Sync + 'static,
    {
        self.assertion.custom = Some(Box::new(f));
        self
    }

    /// Build the assertion.
    pub fn build(self) -> Assertion {
        self.assertion
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use xpm_core::{tuple, Value};
    use xpm_pattern::{parse_corpus, parse_pattern};
    use xpm_valuation::PatternEngine;

    fn snapshot() -> Result<Valuations, String> {
        let corpus = parse_corpus("edge(1, 2). edge(2, 3). tag(red).").unwrap();
        let pattern = parse_pattern("edge($a, $b), tag($t)").unwrap();
        Valuations::build(&PatternEngine::new(), &pattern, &corpus).map_err(|e| e.to_string())
    }

    #[test]
    fn test_shape_assertions() {
        let assertion = AssertionBuilder::new()
            .variables(&["a", "b", "t"])
            .components(2)
            .joint(2)
            .not_empty()
            .build();
        assert!(assertion.verify("s", &snapshot()).is_ok());

        let wrong = AssertionBuilder::new().components(3).build();
        assert!(wrong.verify("s", &snapshot()).is_err());
    }

    #[test]
    fn test_component_assertions() {
        let assertion = AssertionBuilder::new()
            .component("b", &["a", "b"])
            .rows("t", 1)
            .tuples(
                "a",
                vec![
                    tuple![Value::Int(2), Value::Int(3)],
                    tuple![Value::Int(1), Value::Int(2)],
                ],
            )
            .missing("z")
            .build();
        assert!(assertion.verify("s", &snapshot()).is_ok());
    }

    #[test]
    fn test_error_assertions() {
        let failed: Result<Valuations, String> = Err("Valuation has no variables".into());

        let assertion = AssertionBuilder::new().error("no variables").build();
        assert!(assertion.verify("s", &failed).is_ok());
        assert!(assertion.verify("s", &snapshot()).is_err());

        let assertion = AssertionBuilder::new().error_matching("^Valuation .* variables$").build();
        assert!(assertion.verify("s", &failed).is_ok());

        let plain = AssertionBuilder::new().build();
        assert!(plain.verify("s", &failed).is_err());
    }

    #[test]
    fn test_custom_assertion() {
        let assertion = AssertionBuilder::new()
            .custom(|v| v.components().all(|c| !c.has_no_rows()))
            .build();
        assert!(assertion.verify("s", &snapshot()).is_ok());
    }
}
