use crate::domain::error::PageRankConfigError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// How rank held by vertices without outgoing edges is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DanglingPolicy {
    /// Dangling rank is dropped each iteration; totals can fall below 1.
    #[default]
    Leak,
    /// Dangling rank is spread evenly over every vertex.
    Redistribute,
    /// A dangling vertex behaves as if it had a single edge to itself.
    SelfLoop,
}

impl DanglingPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            DanglingPolicy::Leak => "leak",
            DanglingPolicy::Redistribute => "redistribute",
            DanglingPolicy::SelfLoop => "self-loop",
        }
    }
}

impl fmt::Display for DanglingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DanglingPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "leak" => Ok(DanglingPolicy::Leak),
            "redistribute" => Ok(DanglingPolicy::Redistribute),
            "self-loop" => Ok(DanglingPolicy::SelfLoop),
            other => Err(format!(
                "unknown dangling policy: {other} (expected leak, redistribute or self-loop)"
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageRankConfig {
    /// Probability of following an outgoing edge instead of teleporting.
    pub damping: f64,
    /// Iteration stops once the sum of squared rank deltas drops below this.
    pub tolerance: f64,
    pub max_iterations: usize,
    pub dangling: DanglingPolicy,
}

impl Default for PageRankConfig {
    fn default() -> Self {
        Self {
            damping: 0.85,
            tolerance: 1e-6,
            max_iterations: 1000,
            dangling: DanglingPolicy::Leak,
        }
    }
}

impl PageRankConfig {
    pub fn validate(&self) -> Result<(), PageRankConfigError> {
        if !(0.0..1.0).contains(&self.damping) {
            return Err(PageRankConfigError::Damping(self.damping));
        }
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(PageRankConfigError::Tolerance(self.tolerance));
        }
        if self.max_iterations == 0 {
            return Err(PageRankConfigError::MaxIterations);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageRankResult {
    pub ranks: Vec<f64>,
    pub iterations: usize,
    /// False when `max_iterations` ran out first; `ranks` then holds the last iterate.
    pub converged: bool,
    /// Sum of squared deltas of the final iteration.
    pub residual: f64,
    /// Policy the solver applied to vertices without outgoing edges.
    pub dangling: DanglingPolicy,
}

impl PageRankResult {
    pub fn total(&self) -> f64 {
        self.ranks.iter().sum()
    }
}
