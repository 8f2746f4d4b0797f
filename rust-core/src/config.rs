// Constants

// Tolerances
pub const PITCH_TOLERANCE: f64 = 1e-9; // Fractional pitch error treated as an exact fit
pub const STRETCH_TOLERANCE: f64 = 1e-9; // Stretch values (in %) closer than this are a tie
pub const SPAN_TOLERANCE: f64 = 1e-9; // Slack for ceil/floor on spans and sweep steps

// Search defaults
pub const DEFAULT_K_MAX: u32 = 1000; // Drift cap reported for an exact pitch
pub const DEFAULT_GRANULARITY: f64 = 0.5; // Width step of the sweep, in pixels
pub const DEFAULT_STROKE_WIDTH: u32 = 2;
pub const DEFAULT_MIN_WIDTH: f64 = 30.0;
pub const DEFAULT_MAX_WIDTH: f64 = 90.0;
pub const MAX_SWEEP_STEPS: usize = 1_000_000; // Longest sweep a granularity may request

// Layout
pub const MAX_PREALLOCATED_CENTERS: usize = 1 << 16; // Capacity reserved up front when listing centers

// Sample sheet
pub const DEFAULT_SAMPLE_COUNT: usize = 6;
pub const MAX_SAMPLE_COUNT: usize = 25;
pub const LABEL_FONT_SCALE: f64 = 24.0; // Font size per 500 px of cell
pub const LABEL_FONT_BASE: f64 = 6.0;
