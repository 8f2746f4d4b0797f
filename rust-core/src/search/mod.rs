// Search module: Best-fit search of a hexagon size over a width interval
// This module sweeps candidate widths and ranks them by drift quality, stretch and size

// ======================== MODULE DECLARATIONS ========================
pub mod best_fit;
pub mod size_interval;

// Test modules
mod _tests_best_fit;

// ======================== SEARCH INPUTS ========================
pub use size_interval::SizeInterval; // struct - (min_width, max_width), max_width == 0 means exact width
pub use best_fit::SearchParams;      // struct - orientation, stroke width, granularity, k_max (serde, Default)

// ======================== CANDIDATES & RANKING ========================
pub use best_fit::{
    Candidate,          // struct - lattice with its drift, stretch and realized pitches
    best_fit,           // fn(interval: &SizeInterval, params: &SearchParams) -> Result<Candidate>
    evaluate_candidate, // fn(lattice: LatticeSpec, params: &SearchParams) -> Result<Candidate>
    rank_candidates,    // fn(a: &Candidate, b: &Candidate) -> Ordering - best first
    sweep_candidates,   // fn(interval: &SizeInterval, params: &SearchParams) -> Result<Vec<Candidate>>
};
