//! Weighted-probability callback execution.
//!
//! A [`Rand`] owns its own [`ProbabilityTable`] and [`RandomSource`]; there is
//! no process-wide table. Named ratios are looked up explicitly through
//! [`Rand::invoke`].

use std::collections::BTreeMap;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::defaults::PeachConfig;
use crate::error::{Error, Result};
use crate::utils::validation;

/// `times` used when the caller has no opinion.
pub const DEFAULT_TIMES: u32 = 1;

/// Chance that an action fires on one trial: `numerator / denominator`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ratio {
    pub numerator: u32,
    pub denominator: u32,
}

impl Ratio {
    /// Build a ratio, ordering the pair so the numerator is the smaller value.
    ///
    /// Rejects equal values (a certainty is not a probability) and zero.
    pub fn new(numerator: u32, denominator: u32) -> Result<Self> {
        if numerator == denominator {
            return Err(Error::validation_invalid_argument(
                "numerator",
                "Numerator and denominator can't be the same",
                Some(format!("{}/{}", numerator, denominator)),
                None,
            ));
        }

        let ratio = Self {
            numerator: numerator.min(denominator),
            denominator: numerator.max(denominator),
        };

        if ratio.numerator == 0 {
            return Err(Error::validation_invalid_argument(
                "numerator",
                "Probability terms must be greater than zero",
                Some(format!("{}/{}", numerator, denominator)),
                None,
            ));
        }

        Ok(ratio)
    }
}

/// Name → ratio lookup, seeded with the built-in ratios.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbabilityTable {
    entries: BTreeMap<String, Ratio>,
}

impl Default for ProbabilityTable {
    fn default() -> Self {
        let entries = [
            ("notAlways", 24, 25),
            ("frequently", 2, 3),
            ("sometimes", 1, 4),
            ("rarely", 1, 10),
            ("veryRarely", 1, 25),
        ]
        .into_iter()
        .map(|(name, numerator, denominator)| {
            (
                name.to_string(),
                Ratio {
                    numerator,
                    denominator,
                },
            )
        })
        .collect();

        Self { entries }
    }
}

impl ProbabilityTable {
    /// A table with no ratios at all.
    pub fn empty() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Add or overwrite a named ratio. The name is stored exactly as given.
    pub fn register(&mut self, name: &str, numerator: u32, denominator: u32) -> Result<Ratio> {
        validation::require_non_empty(name, "name", "Probability name cannot be empty")?;
        let ratio = Ratio::new(numerator, denominator)?;
        self.entries.insert(name.to_string(), ratio);
        Ok(ratio)
    }

    pub fn get(&self, name: &str) -> Result<Ratio> {
        self.entries
            .get(name)
            .copied()
            .ok_or_else(|| Error::probability_unknown_name(name, self.names()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn names(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }
}

/// Source of uniformly distributed integers.
pub trait RandomSource {
    /// Uniform integer in `low..=high`.
    fn between(&mut self, low: u32, high: u32) -> u32;
}

/// Draws from the thread-local generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn between(&mut self, low: u32, high: u32) -> u32 {
        rand::thread_rng().gen_range(low..=high)
    }
}

/// Adapts any `rand` generator, e.g. a seeded `StdRng`.
#[derive(Debug, Clone)]
pub struct RngSource<R>(pub R);

impl<R: Rng> RandomSource for RngSource<R> {
    fn between(&mut self, low: u32, high: u32) -> u32 {
        self.0.gen_range(low..=high)
    }
}

pub struct Rand<S: RandomSource = ThreadRandom> {
    table: ProbabilityTable,
    source: S,
}

impl Rand<ThreadRandom> {
    pub fn new() -> Self {
        Self::with_source(ProbabilityTable::default(), ThreadRandom)
    }

    /// Built-in ratios plus every ratio from the config file.
    pub fn from_config(config: &PeachConfig) -> Result<Self> {
        let mut rand = Self::new();
        for (name, ratio) in &config.probabilities {
            rand.register_probability(name, ratio.numerator, ratio.denominator)?;
        }
        Ok(rand)
    }
}

impl Default for Rand<ThreadRandom> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: RandomSource> Rand<S> {
    pub fn with_source(table: ProbabilityTable, source: S) -> Self {
        Self { table, source }
    }

    pub fn table(&self) -> &ProbabilityTable {
        &self.table
    }

    pub fn register_probability(&mut self, name: &str, numerator: u32, denominator: u32) -> Result<()> {
        let ratio = self.table.register(name, numerator, denominator)?;
        log_status!(
            "rand",
            "Registered '{}' as {}/{}",
            name,
            ratio.numerator,
            ratio.denominator
        );
        Ok(())
    }

    /// Run `action` with the named probability, over `times + 1` independent trials.
    ///
    /// The extra trial is long-standing behavior: `times = 1` rolls twice.
    pub fn invoke<F>(&mut self, name: &str, mut action: F, times: u32) -> Result<()>
    where
        F: FnMut(),
    {
        let ratio = self.table.get(name)?;

        for _ in 0..=times {
            if self.source.between(1, ratio.denominator) <= ratio.numerator {
                action();
            }
        }

        Ok(())
    }
}
