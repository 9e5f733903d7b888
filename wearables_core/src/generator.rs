//! Lazy, seeded producer of wearable reading rows.
//!
//! The generator owns its RNG; two generators built from the same
//! [`GenerationParams`] with a seed yield identical rows. The PCG64 stream
//! is fixed across `rand_pcg` releases.

use crate::types::{GenerationParams, ReadingRow, HRV_RANGE, RESTING_HR_RANGE, STEPS_RANGE};
use chrono::NaiveDate;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;

/// Finite iterator over synthesized reading rows.
pub struct RowGenerator {
    params: GenerationParams,
    rng: Pcg64,
    current: NaiveDate,
    /// Days elapsed since `start_date` within the current cycle
    offset: u64,
    remaining: u64,
}

impl RowGenerator {
    pub fn new(params: GenerationParams) -> Self {
        tracing::debug!(
            "Row generator: {} rows from {} (seed {:?}, cycle {} days)",
            params.rows,
            params.start_date,
            params.seed,
            params.cycle_days
        );

        Self {
            rng: seeded_rng(params.seed),
            current: params.start_date,
            offset: 0,
            remaining: params.rows,
            params,
        }
    }

    /// Rewind to the first row.
    ///
    /// With a seed the replayed stream is identical; without one a fresh
    /// entropy-seeded stream is drawn.
    pub fn restart(&mut self) {
        self.rng = seeded_rng(self.params.seed);
        self.current = self.params.start_date;
        self.offset = 0;
        self.remaining = self.params.rows;
    }

    fn advance_date(&mut self) {
        self.offset += 1;

        let cycle = self.params.cycle_days;
        if cycle > 0 && self.offset >= cycle {
            self.offset = 0;
            self.current = self.params.start_date;
            return;
        }

        // GenerationParams caps the visited span at 9999-12-31
        match self.current.succ_opt() {
            Some(next) => self.current = next,
            None => debug_assert!(false, "date advanced past {}", self.current),
        }
    }
}

fn seeded_rng(seed: Option<u64>) -> Pcg64 {
    match seed {
        Some(seed) => Pcg64::seed_from_u64(seed),
        None => Pcg64::from_entropy(),
    }
}

impl Iterator for RowGenerator {
    type Item = ReadingRow;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        // Draw order is part of the reproducibility contract
        let steps = self.rng.gen_range(STEPS_RANGE);
        let hrv = self.rng.gen_range(HRV_RANGE);
        let resting_hr = self.rng.gen_range(RESTING_HR_RANGE);

        let row = ReadingRow {
            date: self.current,
            steps,
            hrv,
            resting_hr,
        };
        self.advance_date();
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.remaining).unwrap_or(usize::MAX);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for RowGenerator {}
