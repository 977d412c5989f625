//! Consistent-matrix synthesis - bounded blending of user and reference judgments.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::{
    AnalysisError, ComparisonMatrix, ConsistencyEvaluator, ConsistencyMetrics,
    CR_ACCEPTANCE_THRESHOLD,
};

/// Default bound on synthesis attempts.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 100;

/// Tunables for the synthesis search.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SynthesisPolicy {
    /// Candidates with CR below this value are accepted.
    pub cr_threshold: f64,
    /// Upper bound on candidate generations before giving up.
    pub max_attempts: u32,
}

impl Default for SynthesisPolicy {
    fn default() -> Self {
        Self {
            cr_threshold: CR_ACCEPTANCE_THRESHOLD,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

/// A successfully synthesized matrix with its metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynthesisOutcome {
    pub matrix: ComparisonMatrix,
    pub metrics: ConsistencyMetrics,
    /// Number of candidates generated, including the accepted one.
    pub attempts: u32,
}

/// Where a blended cell's value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CellSource {
    Editable,
    Reference,
}

/// Synthesis of an acceptably consistent matrix from a user-edited matrix
/// and an externally supplied reference matrix.
pub struct MatrixSynthesizer;

impl MatrixSynthesizer {
    /// Searches for a fully-populated reciprocal matrix close to the user's
    /// judgments with CR below the policy threshold.
    ///
    /// # Algorithm
    /// Each attempt walks every off-diagonal cell and picks a source:
    /// editable values are preferred until N - 1 cells are taken, then
    /// reference values until N cells are taken, then the source is chosen
    /// uniformly at random. The mirror cell always receives the
    /// scale-snapped reciprocal of the chosen value, never an independently
    /// drawn one. An unset editable cell falls back to the reference and
    /// counts against the reference quota. The candidate is accepted when
    /// its CR falls below the threshold.
    ///
    /// Randomness comes solely from the injected `rng`, so a seeded
    /// generator makes the search reproducible.
    ///
    /// # Errors
    /// - `DimensionMismatch` when the two matrices differ in dimension.
    /// - `IncompleteMatrix` when the reference has unset cells.
    /// - `ConsistencyUnattainable` when no candidate within
    ///   `max_attempts` is acceptable; carries the lowest-CR candidate.
    /// - Evaluation errors for dimensions outside the RI table.
    pub fn synthesize<R: Rng>(
        editable: &ComparisonMatrix,
        reference: &ComparisonMatrix,
        policy: &SynthesisPolicy,
        rng: &mut R,
    ) -> Result<SynthesisOutcome, AnalysisError> {
        let n = editable.dimension();
        if reference.dimension() != n {
            return Err(AnalysisError::DimensionMismatch {
                left: n,
                right: reference.dimension(),
            });
        }
        if !reference.is_complete() {
            return Err(AnalysisError::IncompleteMatrix);
        }

        let mut best: Option<(ComparisonMatrix, ConsistencyMetrics)> = None;

        for attempt in 1..=policy.max_attempts {
            let candidate = Self::blend(editable, reference, rng);
            let metrics = ConsistencyEvaluator::evaluate(&candidate)?;
            trace!(attempt, cr = metrics.cr, "evaluated candidate matrix");

            if metrics.cr < policy.cr_threshold {
                debug!(attempt, cr = metrics.cr, "synthesized consistent matrix");
                return Ok(SynthesisOutcome {
                    matrix: candidate,
                    metrics,
                    attempts: attempt,
                });
            }

            if best.as_ref().map_or(true, |(_, m)| metrics.cr < m.cr) {
                best = Some((candidate, metrics));
            }
        }

        // max_attempts >= 1 guarantees at least one candidate was kept.
        let (matrix, metrics) = best.ok_or(AnalysisError::ConsistencyUnattainable {
            best: Box::new(editable.clone()),
            best_cr: f64::INFINITY,
            threshold: policy.cr_threshold,
            attempts: policy.max_attempts,
        })?;

        debug!(
            attempts = policy.max_attempts,
            best_cr = metrics.cr,
            "synthesis exhausted attempt budget"
        );
        Err(AnalysisError::ConsistencyUnattainable {
            best: Box::new(matrix),
            best_cr: metrics.cr,
            threshold: policy.cr_threshold,
            attempts: policy.max_attempts,
        })
    }

    /// Builds one candidate by allocating each off-diagonal cell to a source.
    fn blend<R: Rng>(
        editable: &ComparisonMatrix,
        reference: &ComparisonMatrix,
        rng: &mut R,
    ) -> ComparisonMatrix {
        let n = editable.dimension();
        let mut candidate = editable.clone();
        let mut editable_taken = 0usize;
        let mut reference_taken = 0usize;

        for i in 0..n {
            for j in 0..n {
                if i == j {
                    continue;
                }

                let preferred = if editable_taken < n.saturating_sub(1) {
                    CellSource::Editable
                } else if reference_taken < n {
                    CellSource::Reference
                } else if rng.gen_bool(0.5) {
                    CellSource::Editable
                } else {
                    CellSource::Reference
                };

                // Reference matrices are complete by precondition.
                let reference_value = reference.get(i, j).unwrap_or(1.0);
                let (value, source) = match preferred {
                    CellSource::Editable => match editable.get(i, j) {
                        Some(value) => (value, CellSource::Editable),
                        None => (reference_value, CellSource::Reference),
                    },
                    CellSource::Reference => (reference_value, CellSource::Reference),
                };

                match source {
                    CellSource::Editable => editable_taken += 1,
                    CellSource::Reference => reference_taken += 1,
                }
                candidate.set_blended(i, j, value);
            }
        }

        candidate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn consistent_reference(n: usize, weights: &[f64]) -> ComparisonMatrix {
        let rows: Vec<Vec<f64>> = (0..n)
            .map(|i| (0..n).map(|j| weights[i] / weights[j]).collect())
            .collect();
        ComparisonMatrix::from_rows(rows).unwrap()
    }

    fn cyclic_matrix() -> ComparisonMatrix {
        let mut matrix = ComparisonMatrix::new(3);
        matrix.set_judgment(0, 1, 9.0).unwrap();
        matrix.set_judgment(1, 2, 9.0).unwrap();
        matrix.set_judgment(2, 0, 9.0).unwrap();
        matrix
    }

    #[test]
    fn consistent_inputs_succeed_on_first_attempt() {
        // Ratio weights whose pairwise quotients all land on the scale.
        let weights = [8.0, 4.0, 2.0, 1.0];
        let reference = consistent_reference(4, &weights);

        let mut editable = ComparisonMatrix::new(4);
        for i in 0..4 {
            for j in (i + 1)..4 {
                editable.set_judgment(i, j, weights[i] / weights[j]).unwrap();
            }
        }

        let mut rng = StdRng::seed_from_u64(7);
        let outcome = MatrixSynthesizer::synthesize(
            &editable,
            &reference,
            &SynthesisPolicy::default(),
            &mut rng,
        )
        .unwrap();

        assert_eq!(outcome.attempts, 1);
        assert!(outcome.metrics.is_acceptable());
        assert!(outcome.matrix.is_complete());
    }

    #[test]
    fn unset_editable_cells_fall_back_to_reference() {
        let reference = consistent_reference(3, &[0.5, 0.3, 0.2]);
        let editable = ComparisonMatrix::new(3);

        let mut rng = StdRng::seed_from_u64(11);
        let outcome = MatrixSynthesizer::synthesize(
            &editable,
            &reference,
            &SynthesisPolicy::default(),
            &mut rng,
        )
        .unwrap();

        assert!(outcome.matrix.is_complete());
        assert!(outcome.metrics.cr < CR_ACCEPTANCE_THRESHOLD);
    }

    #[test]
    fn identical_inconsistent_sources_exhaust_the_budget() {
        // Editable and reference are the same intransitive cycle, so every
        // blend reproduces it and no attempt can succeed.
        let editable = cyclic_matrix();
        let reference = cyclic_matrix();

        let policy = SynthesisPolicy {
            cr_threshold: CR_ACCEPTANCE_THRESHOLD,
            max_attempts: 25,
        };
        let mut rng = StdRng::seed_from_u64(3);
        let result = MatrixSynthesizer::synthesize(&editable, &reference, &policy, &mut rng);

        match result {
            Err(AnalysisError::ConsistencyUnattainable {
                best,
                best_cr,
                attempts,
                ..
            }) => {
                assert_eq!(attempts, 25);
                assert!(best_cr >= CR_ACCEPTANCE_THRESHOLD);
                assert!(best.is_complete());
            }
            other => panic!("Expected ConsistencyUnattainable, got {:?}", other),
        }
    }

    #[test]
    fn five_by_five_search_terminates_within_bound() {
        let reference = consistent_reference(5, &[0.35, 0.05, 0.15, 0.3, 0.15]);
        let editable = cyclic_five();

        let mut rng = StdRng::seed_from_u64(19);
        let result = MatrixSynthesizer::synthesize(
            &editable,
            &reference,
            &SynthesisPolicy::default(),
            &mut rng,
        );

        match result {
            Ok(outcome) => {
                assert!(outcome.attempts <= DEFAULT_MAX_ATTEMPTS);
                assert!(outcome.metrics.cr < CR_ACCEPTANCE_THRESHOLD);
            }
            Err(AnalysisError::ConsistencyUnattainable { attempts, .. }) => {
                assert_eq!(attempts, DEFAULT_MAX_ATTEMPTS);
            }
            Err(other) => panic!("Unexpected error: {:?}", other),
        }
    }

    fn cyclic_five() -> ComparisonMatrix {
        let mut matrix = ComparisonMatrix::new(5);
        for i in 0..5 {
            let j = (i + 1) % 5;
            matrix.set_judgment(i, j, 9.0).unwrap();
        }
        for i in 0..5 {
            for j in (i + 1)..5 {
                if matrix.get(i, j).is_none() {
                    matrix.set_judgment(i, j, 1.0).unwrap();
                }
            }
        }
        matrix
    }

    #[test]
    fn seeded_rng_makes_synthesis_reproducible() {
        let reference = consistent_reference(3, &[0.6, 0.3, 0.1]);
        let editable = cyclic_matrix();
        let policy = SynthesisPolicy::default();

        let run = |seed: u64| {
            let mut rng = StdRng::seed_from_u64(seed);
            MatrixSynthesizer::synthesize(&editable, &reference, &policy, &mut rng)
        };

        match (run(42), run(42)) {
            (Ok(a), Ok(b)) => assert_eq!(a, b),
            (Err(_), Err(_)) => {}
            _ => panic!("Same seed produced different outcomes"),
        }
    }

    #[test]
    fn synthesize_leaves_inputs_untouched() {
        let reference = consistent_reference(3, &[0.5, 0.3, 0.2]);
        let mut editable = ComparisonMatrix::new(3);
        editable.set_judgment(0, 1, 5.0).unwrap();
        let editable_before = editable.clone();
        let reference_before = reference.clone();

        let mut rng = StdRng::seed_from_u64(1);
        let _ = MatrixSynthesizer::synthesize(
            &editable,
            &reference,
            &SynthesisPolicy::default(),
            &mut rng,
        );

        assert_eq!(editable, editable_before);
        assert_eq!(reference, reference_before);
    }

    #[test]
    fn mismatched_dimensions_are_rejected() {
        let editable = ComparisonMatrix::new(4);
        let reference = consistent_reference(3, &[0.5, 0.3, 0.2]);

        let mut rng = StdRng::seed_from_u64(0);
        let result = MatrixSynthesizer::synthesize(
            &editable,
            &reference,
            &SynthesisPolicy::default(),
            &mut rng,
        );
        assert!(matches!(
            result,
            Err(AnalysisError::DimensionMismatch { left: 4, right: 3 })
        ));
    }

    #[test]
    fn incomplete_reference_is_rejected() {
        let editable = ComparisonMatrix::new(3);
        let reference = ComparisonMatrix::new(3);

        let mut rng = StdRng::seed_from_u64(0);
        let result = MatrixSynthesizer::synthesize(
            &editable,
            &reference,
            &SynthesisPolicy::default(),
            &mut rng,
        );
        assert!(matches!(result, Err(AnalysisError::IncompleteMatrix)));
    }

    #[test]
    fn default_policy_uses_standard_threshold_and_bound() {
        let policy = SynthesisPolicy::default();
        assert_eq!(policy.cr_threshold, CR_ACCEPTANCE_THRESHOLD);
        assert_eq!(policy.max_attempts, DEFAULT_MAX_ATTEMPTS);
    }
}
