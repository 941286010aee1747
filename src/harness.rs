//! Reliability harness: error injection and outcome bookkeeping.
//!
//! The harness is a collaborator of the codec, not part of it: it drives
//! encode, corrupts the codeword with a configurable error pattern, runs a
//! chosen decoding strategy and classifies what happened. Classification
//! is an explicit returned value - the decoders' typed errors are mapped
//! into [`TrialOutcome`], never inferred from panics.
//!
//! All randomness lives here. Trials are deterministic given a base seed:
//! each trial derives its own RNG from the seed and the trial index, which
//! also makes the batches embarrassingly parallel - the only shared state
//! is the immutable [`BchCode`].

use crate::code::BchCode;
use crate::decoder::{AlgebraicDecoder, Decoder, ShiftDecoder};
use crate::error::{Error, Result};
use crate::poly::{BitPoly, BitPolySlice};
use log::debug;
use rand::{thread_rng, Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use rayon::prelude::*;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// How an injected error writes the targeted bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corruption {
    /// XOR the bit: always a real error
    Flip,
    /// Force the bit high: an error only where the codeword carried 0
    SetHigh,
    /// Force the bit low: an error only where the codeword carried 1
    SetLow,
}

/// How the targeted positions are placed within the codeword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placement {
    /// Distinct uniformly random positions
    Scattered,
    /// A contiguous run from a random start, wrapping around the end
    Burst,
}

/// Which decoding strategy a trial exercises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// The heuristic rotation-search decoder
    Shift,
    /// The syndrome / Berlekamp-Massey / Chien pipeline
    Algebraic,
}

/// Classification of a single encode-corrupt-decode trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrialOutcome {
    /// The decoder returned the original message
    Success,
    /// The decoder rejected the word as uncorrectable
    Unfixable,
    /// The decoder accepted but returned a different message - a silent
    /// miscorrection, detectable only by this external comparison
    Mismatch,
    /// The encoder produced a word that failed validation; expected never
    EncodingFault,
}

/// Pseudorandom source for messages and error patterns.
#[derive(Debug, Clone)]
pub struct ErrorInjector {
    rng: ChaCha20Rng,
}

impl ErrorInjector {
    /// Injector seeded from the thread-local generator.
    pub fn new() -> Self {
        Self::from_seed(thread_rng().gen::<u64>())
    }

    /// Injector with a fixed seed, for reproducible patterns.
    pub fn from_seed(seed: u64) -> Self {
        ErrorInjector {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    /// Draw a uniformly random `k`-bit message.
    pub fn random_message(&mut self, k: usize) -> BitPoly {
        (0..k).map(|_| self.rng.gen_bool(0.5)).collect()
    }

    /// Draw `weight` error positions in `[0, n)` under the given placement.
    ///
    /// Scattered positions are distinct; a burst is a contiguous run that
    /// wraps modulo `n`, so its positions are distinct as long as
    /// `weight <= n`.
    pub fn positions(&mut self, n: usize, placement: Placement, weight: usize) -> Vec<usize> {
        match placement {
            Placement::Scattered => {
                let mut positions: Vec<usize> = Vec::with_capacity(weight);
                while positions.len() < weight {
                    let candidate = self.rng.gen_range(0..n);
                    if !positions.contains(&candidate) {
                        positions.push(candidate);
                    }
                }
                positions
            }
            Placement::Burst => {
                let start = self.rng.gen_range(0..n);
                (0..weight).map(|offset| (start + offset) % n).collect()
            }
        }
    }

    /// Corrupt a copy of the codeword with `weight` errors.
    pub fn corrupt(
        &mut self,
        codeword: &BitPolySlice,
        placement: Placement,
        corruption: Corruption,
        weight: usize,
    ) -> BitPoly {
        let mut received = codeword.to_bitvec();
        for index in self.positions(codeword.len(), placement, weight) {
            let value = match corruption {
                Corruption::Flip => !received[index],
                Corruption::SetHigh => true,
                Corruption::SetLow => false,
            };
            received.set(index, value);
        }
        received
    }
}

impl Default for ErrorInjector {
    fn default() -> Self {
        Self::new()
    }
}

/// One test scenario: an error shape at a fixed weight, repeated.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Scenario {
    /// Human-readable scenario family name
    pub name: String,
    /// Where the errors land
    pub placement: Placement,
    /// How the errored bits are written
    pub corruption: Corruption,
    /// Number of targeted positions per trial
    pub weight: usize,
    /// Number of trials to run
    pub trials: usize,
    /// Decoding strategy under test
    pub strategy: Strategy,
}

impl Scenario {
    /// Label used in reports: scenario family plus error weight.
    pub fn label(&self) -> String {
        format!("{} errors: {}", self.name, self.weight)
    }
}

/// Per-outcome counters for one scenario.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScenarioReport {
    /// Trials where the original message came back
    pub success: usize,
    /// Trials the decoder rejected
    pub unfixable: usize,
    /// Trials the decoder silently miscorrected
    pub fixed_incorrectly: usize,
    /// Trials where encoding itself failed validation
    pub encoding_error: usize,
}

impl ScenarioReport {
    fn record(&mut self, outcome: TrialOutcome) {
        match outcome {
            TrialOutcome::Success => self.success += 1,
            TrialOutcome::Unfixable => self.unfixable += 1,
            TrialOutcome::Mismatch => self.fixed_incorrectly += 1,
            TrialOutcome::EncodingFault => self.encoding_error += 1,
        }
    }

    /// Total number of recorded trials.
    pub fn total(&self) -> usize {
        self.success + self.unfixable + self.fixed_incorrectly + self.encoding_error
    }
}

/// Batch driver running scenarios against a shared code context.
#[derive(Debug, Clone)]
pub struct ReliabilityHarness<'a> {
    code: &'a BchCode,
    base_seed: u64,
}

impl<'a> ReliabilityHarness<'a> {
    /// Harness with a random base seed.
    pub fn new(code: &'a BchCode) -> Self {
        Self::with_seed(code, thread_rng().gen::<u64>())
    }

    /// Harness with a fixed base seed; every trial derives from it, so
    /// the whole suite is reproducible.
    pub fn with_seed(code: &'a BchCode, base_seed: u64) -> Self {
        ReliabilityHarness { code, base_seed }
    }

    /// Run one trial: encode a random message, corrupt it, decode,
    /// compare.
    ///
    /// # Errors
    ///
    /// Propagates any decoder error other than
    /// [`Error::Unfixable`](crate::error::Error::Unfixable) - those
    /// signal bugs in the harness or the codec, not outcomes to tally.
    pub fn run_trial(
        &self,
        scenario: &Scenario,
        injector: &mut ErrorInjector,
    ) -> Result<TrialOutcome> {
        let message = injector.random_message(self.code.data_length());
        let encoded = self.code.encode(&message)?;
        if !self.code.validate(&encoded)? {
            return Ok(TrialOutcome::EncodingFault);
        }

        let received = injector.corrupt(
            &encoded,
            scenario.placement,
            scenario.corruption,
            scenario.weight,
        );

        let decoded = match scenario.strategy {
            Strategy::Shift => ShiftDecoder::new(self.code).decode(&received),
            Strategy::Algebraic => AlgebraicDecoder::new(self.code).decode(&received),
        };

        match decoded {
            Ok(recovered) if recovered == message => Ok(TrialOutcome::Success),
            Ok(_) => Ok(TrialOutcome::Mismatch),
            Err(Error::Unfixable) => Ok(TrialOutcome::Unfixable),
            Err(other) => Err(other),
        }
    }

    /// Run a full scenario, distributing trials across the rayon pool.
    ///
    /// Each trial seeds its own injector from the base seed, the scenario
    /// identity and the trial index, so results do not depend on how the
    /// pool schedules them.
    pub fn run_scenario(&self, scenario: &Scenario) -> Result<ScenarioReport> {
        let scenario_seed = self.scenario_seed(scenario);

        let outcomes = (0..scenario.trials)
            .into_par_iter()
            .map(|trial| {
                let mut injector =
                    ErrorInjector::from_seed(scenario_seed.wrapping_add(trial as u64));
                self.run_trial(scenario, &mut injector)
            })
            .collect::<Result<Vec<TrialOutcome>>>()?;

        let mut report = ScenarioReport::default();
        for outcome in outcomes {
            report.record(outcome);
        }

        debug!(
            "{}: {} success, {} unfixable, {} mismatched over {} trials",
            scenario.label(),
            report.success,
            report.unfixable,
            report.fixed_incorrectly,
            report.total()
        );
        Ok(report)
    }

    /// Run every scenario in order, pairing each label with its report.
    pub fn run_suite(&self, scenarios: &[Scenario]) -> Result<Vec<(String, ScenarioReport)>> {
        scenarios
            .iter()
            .map(|scenario| Ok((scenario.label(), self.run_scenario(scenario)?)))
            .collect()
    }

    fn scenario_seed(&self, scenario: &Scenario) -> u64 {
        let mut hasher = DefaultHasher::new();
        scenario.hash(&mut hasher);
        self.base_seed ^ hasher.finish()
    }
}

/// The standard scenario suite: scattered flips plus the three burst
/// shapes, at every weight up to one past the design bound and one far
/// beyond it.
pub fn default_suite(strategy: Strategy, trials: usize) -> Vec<Scenario> {
    let weights = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 30];
    let families = [
        ("Random errors", Placement::Scattered, Corruption::Flip),
        ("Burst high errors", Placement::Burst, Corruption::SetHigh),
        ("Burst low errors", Placement::Burst, Corruption::SetLow),
        ("Burst flip errors", Placement::Burst, Corruption::Flip),
    ];

    let mut scenarios = Vec::with_capacity(families.len() * weights.len());
    for (name, placement, corruption) in families {
        for weight in weights {
            scenarios.push(Scenario {
                name: name.to_string(),
                placement,
                corruption,
                weight,
                trials,
                strategy,
            });
        }
    }
    scenarios
}
