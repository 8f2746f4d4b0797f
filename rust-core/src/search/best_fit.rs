use log::{debug, trace};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::config::{DEFAULT_GRANULARITY, DEFAULT_K_MAX, STRETCH_TOLERANCE};
use crate::error::{ensure_positive, HexFitError, Result};
use crate::interfaces::Orientation;
use crate::lattice::{
    evaluate_drift, stretch_from_pitches, DriftScore, LatticeSpec, QuantizedPitches,
    StretchScore, StrokeWidth,
};
use crate::search::size_interval::SizeInterval;

/// Knobs shared by every candidate evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchParams {
    pub orientation: Orientation,
    pub stroke_width: StrokeWidth,
    /// Width step of the sweep, in pixels.
    pub granularity: f64,
    /// Quality reported for a pitch that never drifts.
    pub k_max: u32,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            orientation: Orientation::default(),
            stroke_width: StrokeWidth::default(),
            granularity: DEFAULT_GRANULARITY,
            k_max: DEFAULT_K_MAX,
        }
    }
}

impl SearchParams {
    pub fn validate(&self) -> Result<()> {
        ensure_positive(self.granularity, "search granularity")?;
        if self.k_max == 0 {
            return Err(HexFitError::InvalidSize(
                "drift cap must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Parity shift of the rendered origin, applied when scoring drift.
    pub fn phase(&self) -> f64 {
        self.stroke_width.parity_shift()
    }
}

/// One evaluated lattice size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub lattice: LatticeSpec,
    pub drift: DriftScore,
    pub stretch: StretchScore,
    pub pitches: QuantizedPitches,
}

impl Candidate {
    pub fn width(&self) -> f64 {
        self.lattice.width()
    }

    pub fn quality(&self) -> u32 {
        self.drift.quality()
    }
}

/// Score a single lattice under the search parameters.
pub fn evaluate_candidate(lattice: LatticeSpec, params: &SearchParams) -> Result<Candidate> {
    let phase = params.phase();
    let pitches = QuantizedPitches::new(&lattice);
    let stretch = stretch_from_pitches(&pitches)?;
    let drift = evaluate_drift(&lattice, phase, params.k_max);
    Ok(Candidate {
        lattice,
        drift,
        stretch,
        pitches,
    })
}

/// Order two candidates best first: higher quality, then smaller |stretch|,
/// then larger width.
pub fn rank_candidates(a: &Candidate, b: &Candidate) -> Ordering {
    b.quality()
        .cmp(&a.quality())
        .then_with(|| {
            let (sa, sb) = (a.stretch.magnitude(), b.stretch.magnitude());
            if (sa - sb).abs() <= STRETCH_TOLERANCE {
                Ordering::Equal
            } else {
                sa.total_cmp(&sb)
            }
        })
        .then_with(|| b.width().total_cmp(&a.width()))
}

/// Evaluate every width the interval samples, dropping sizes that cannot be
/// rendered or that drift within a single repeat.
///
/// The returned candidates are in sweep order.
pub fn sweep_candidates(interval: &SizeInterval, params: &SearchParams) -> Result<Vec<Candidate>> {
    interval.validate()?;
    params.validate()?;

    let widths = interval.sample_widths(params.granularity)?;
    debug!(
        "Sweeping {} widths in [{}, {}] ({}, stroke {})",
        widths.len(),
        interval.min_width,
        interval.max_width,
        params.orientation,
        params.stroke_width.get()
    );

    #[cfg(feature = "parallel")]
    let evaluated: Vec<Option<Candidate>> = widths
        .par_iter()
        .map(|&width| usable_candidate(width, params))
        .collect();
    #[cfg(not(feature = "parallel"))]
    let evaluated: Vec<Option<Candidate>> = widths
        .iter()
        .map(|&width| usable_candidate(width, params))
        .collect();

    Ok(evaluated.into_iter().flatten().collect())
}

fn usable_candidate(width: f64, params: &SearchParams) -> Option<Candidate> {
    let candidate = LatticeSpec::from_width(width, params.orientation)
        .and_then(|lattice| evaluate_candidate(lattice, params));
    match candidate {
        Ok(c) if c.quality() >= 1 => Some(c),
        Ok(c) => {
            trace!("Width {} rejected: quality {}", width, c.quality());
            None
        }
        Err(e) => {
            trace!("Width {} rejected: {}", width, e);
            None
        }
    }
}

/// Find the best lattice width in the interval.
///
/// With the exact-width sentinel the apothem is `min_width / 2` and nothing
/// is swept.
pub fn best_fit(interval: &SizeInterval, params: &SearchParams) -> Result<Candidate> {
    let candidates = sweep_candidates(interval, params)?;
    let best = candidates
        .into_iter()
        .min_by(rank_candidates)
        .ok_or_else(|| {
            HexFitError::DegenerateResult(format!(
                "no width in [{}, {}] keeps one pixel of alignment over a single hexagon",
                interval.min_width, interval.max_width
            ))
        })?;
    debug!(
        "Best fit: width {} quality {} stretch {}",
        best.width(),
        best.quality(),
        best.stretch
    );
    Ok(best)
}
