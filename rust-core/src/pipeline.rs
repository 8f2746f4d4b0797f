// Pipeline: from a size interval and a target image to a planned hexagon grid

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::layout::canvas_extent::{plan_extent, CanvasExtent, ExtentMode, Margins, PixelSize};
use crate::layout::sample_sheet::SampleLabel;
use crate::lattice::{DriftScore, LatticeSpec, StretchScore};
use crate::search::{best_fit, Candidate, SearchParams, SizeInterval};

/// Everything needed to fit one hexagon grid onto one image.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridRequest {
    pub interval: SizeInterval,
    #[serde(default)]
    pub params: SearchParams,
    #[serde(default)]
    pub margins: Margins,
    pub target: PixelSize,
    #[serde(default)]
    pub extent_mode: ExtentMode,
}

/// The chosen lattice with its scores and planned extent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BestFitResult {
    pub lattice: LatticeSpec,
    pub quality: u32,
    pub drift: DriftScore,
    pub stretch: StretchScore,
    pub extent: CanvasExtent,
}

impl BestFitResult {
    pub fn from_candidate(candidate: &Candidate, extent: CanvasExtent) -> Self {
        Self {
            lattice: candidate.lattice,
            quality: candidate.quality(),
            drift: candidate.drift,
            stretch: candidate.stretch,
            extent,
        }
    }

    pub fn width(&self) -> f64 {
        self.lattice.width()
    }

    pub fn label(&self) -> SampleLabel {
        SampleLabel {
            width: self.width(),
            quality: self.quality,
            stretch: self.stretch,
        }
    }
}

/// Search the interval, then size the canvas for the winner.
///
/// The stroke allowance is added to the caller's margins before planning.
pub fn fit_grid(request: &GridRequest) -> Result<BestFitResult> {
    request.target.validate()?;
    let candidate = best_fit(&request.interval, &request.params)?;

    let stroke = request.params.stroke_width;
    let margins = request.margins.with_stroke_allowance(stroke);
    debug!("Planning extent for {} with margins {:?}", request.target, margins);
    let extent = plan_extent(
        &candidate.lattice,
        stroke,
        &margins,
        request.target,
        request.extent_mode,
    )?;

    info!(
        "Fitted width {} (quality {}, stretch {}): {} x {} hexagons on {}x{}",
        candidate.width(),
        candidate.quality(),
        candidate.stretch,
        extent.columns,
        extent.rows,
        extent.width,
        extent.height
    );
    Ok(BestFitResult::from_candidate(&candidate, extent))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HexFitError;
    use crate::interfaces::Orientation;
    use crate::lattice::StrokeWidth;
    use approx::assert_relative_eq;
    use nalgebra::Vector2;

    fn request(interval: SizeInterval, mode: ExtentMode) -> GridRequest {
        GridRequest {
            interval,
            params: SearchParams::default(),
            margins: Margins::default(),
            target: PixelSize::new(200, 150).unwrap(),
            extent_mode: mode,
        }
    }

    #[test]
    fn test_exact_width_auto_extent() {
        let req = request(SizeInterval::exact(20.0).unwrap(), ExtentMode::Auto);
        let result = fit_grid(&req).unwrap();

        assert_eq!(result.width(), 20.0);
        assert_eq!(result.quality, 2);
        // Stroke 2 keeps one pixel free at every edge
        assert_eq!(result.extent.size(), PixelSize::new(192, 143).unwrap());
        assert_eq!(result.extent.origin, Vector2::new(4.0, 3.0));
        assert!(!result.extent.clipped);
    }

    #[test]
    fn test_fixed_target_holds_the_stroked_lattice() {
        let req = request(SizeInterval::exact(20.0).unwrap(), ExtentMode::Fixed);
        let extent = fit_grid(&req).unwrap().extent;

        assert_eq!(extent.size(), req.target);
        assert!(!extent.clipped);
        assert!(extent.bounds().contains_box(&extent.lattice_bounds()));
        assert_eq!((extent.columns, extent.rows), (9, 8));
    }

    #[test]
    fn test_odd_stroke_keeps_whole_pixel_pitches() {
        let mut req = request(SizeInterval::exact(20.0).unwrap(), ExtentMode::Auto);
        req.params.stroke_width = StrokeWidth::new(3).unwrap();
        let result = fit_grid(&req).unwrap();

        assert_eq!(result.quality, 3);
        assert_relative_eq!(result.extent.pitches.primary, 20.0);
        assert_relative_eq!(result.extent.pitches.secondary, 17.0);
        assert_eq!(result.extent.first_center, Vector2::new(11.5, 12.5));
        assert_eq!(result.extent.size(), PixelSize::new(193, 144).unwrap());
    }

    #[test]
    fn test_sweep_picks_thirty_and_fills_fixed_target() {
        let req = request(SizeInterval::new(20.0, 60.0).unwrap(), ExtentMode::Fixed);
        let result = fit_grid(&req).unwrap();

        assert_eq!(result.width(), 30.0);
        assert_eq!(result.quality, 50);
        assert_eq!(result.extent.width, 200);
        assert_eq!(result.extent.height, 150);
        assert_eq!((result.extent.columns, result.extent.rows), (6, 5));
        assert_relative_eq!(result.extent.pitches.primary, 30.0);
        assert_relative_eq!(result.extent.pitches.secondary, 26.0);
    }

    #[test]
    fn test_label_of_result() {
        let req = request(SizeInterval::new(20.0, 60.0).unwrap(), ExtentMode::Fixed);
        let label = fit_grid(&req).unwrap().label();
        assert_eq!(label.to_string(), "width  :30\nstretch:+0.07%\nquality:50");
    }

    #[test]
    fn test_flat_top_orientation_is_carried() {
        let mut req = request(SizeInterval::exact(20.0).unwrap(), ExtentMode::Fixed);
        req.params.orientation = Orientation::FlatTop;
        let result = fit_grid(&req).unwrap();
        assert_eq!(result.extent.orientation, Orientation::FlatTop);
        assert_eq!(result.lattice.orientation(), Orientation::FlatTop);
    }

    #[test]
    fn test_zero_target_is_rejected() {
        let mut req = request(SizeInterval::exact(20.0).unwrap(), ExtentMode::Fixed);
        req.target = PixelSize {
            width: 0,
            height: 150,
        };
        assert!(matches!(fit_grid(&req), Err(HexFitError::InvalidSize(_))));
    }

    #[test]
    fn test_request_from_json_uses_defaults() {
        let json = r#"{
            "interval": {"min_width": 20.0, "max_width": 0.0},
            "target": {"width": 200, "height": 150}
        }"#;
        let req: GridRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.params, SearchParams::default());
        assert_eq!(req.margins, Margins::default());
        assert_eq!(req.extent_mode, ExtentMode::Fixed);
        assert_eq!(fit_grid(&req).unwrap().quality, 2);
    }
}
