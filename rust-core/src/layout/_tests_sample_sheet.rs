#[cfg(test)]
mod _tests_sample_sheet {
    use super::super::canvas_extent::PixelSize;
    use super::super::sample_sheet::{compose_sample_sheet, square_fill, SheetGrid, SheetRequest};
    use crate::error::HexFitError;
    use crate::search::{SearchParams, SizeInterval};
    use approx::assert_relative_eq;
    use nalgebra::Vector2;

    fn request(min: f64, max: f64, granularity: f64, count: usize) -> SheetRequest {
        SheetRequest {
            interval: SizeInterval::new(min, max).unwrap(),
            sheet: PixelSize::new(1000, 600).unwrap(),
            sample_count: count,
            params: SearchParams {
                granularity,
                ..SearchParams::default()
            },
        }
    }

    #[test]
    fn test_square_fill() {
        let grid = |cell_size, rows, columns| SheetGrid {
            cell_size,
            rows,
            columns,
        };
        assert_eq!(square_fill(1000, 600, 6), grid(300, 2, 3));
        assert_eq!(square_fill(500, 500, 4), grid(250, 2, 2));
        assert_eq!(square_fill(300, 200, 1), grid(200, 1, 1));
        assert_eq!(square_fill(1000, 600, 5), grid(300, 2, 3));
    }

    #[test]
    fn test_top_samples_sorted_by_width() {
        let sheet = compose_sample_sheet(&request(20.0, 60.0, 0.5, 6)).unwrap();

        let widths: Vec<f64> = sheet.cells.iter().map(|c| c.result.width()).collect();
        assert_eq!(widths, vec![22.0, 30.0, 37.0, 45.0, 52.0, 60.0]);
        let qualities: Vec<u32> = sheet.cells.iter().map(|c| c.label.quality).collect();
        assert_eq!(qualities, vec![18, 50, 22, 33, 29, 24]);
    }

    #[test]
    fn test_sheet_geometry() {
        let sheet = compose_sample_sheet(&request(20.0, 60.0, 0.5, 6)).unwrap();

        assert_eq!(sheet.grid.cell_size, 300);
        assert_eq!(sheet.background, PixelSize::new(900, 600).unwrap());
        assert_eq!(sheet.separator_width, 4);

        let origins: Vec<Vector2<f64>> = sheet.cells.iter().map(|c| c.bounds.min).collect();
        assert_eq!(origins[0], Vector2::new(0.0, 0.0));
        assert_eq!(origins[2], Vector2::new(600.0, 0.0));
        assert_eq!(origins[3], Vector2::new(0.0, 300.0));
        assert_eq!(origins[5], Vector2::new(600.0, 300.0));
        for (i, a) in sheet.cells.iter().enumerate() {
            for b in &sheet.cells[i + 1..] {
                assert!(!a.bounds.overlaps(&b.bounds));
            }
        }
    }

    #[test]
    fn test_cell_lattice_overflows_its_cell() {
        let sheet = compose_sample_sheet(&request(20.0, 60.0, 0.5, 6)).unwrap();
        let cell = &sheet.cells[1];
        let extent = &cell.result.extent;

        // 22 px of overflow less one pixel of stroke allowance on each side
        assert_eq!(extent.size(), PixelSize::new(300, 300).unwrap());
        assert_eq!(cell.extent_origin(), Vector2::new(300.0, 0.0));
        assert_eq!((extent.columns, extent.rows), (10, 12));
        assert!(extent.clipped);

        let lattice = cell.lattice_bounds();
        assert_eq!(lattice.min, Vector2::new(292.0, -10.0));
        assert_eq!(lattice.max, Vector2::new(607.0, 310.0));
        assert!(!cell.bounds.contains_box(&lattice));
        assert_eq!(cell.clip_region(), Some(cell.bounds));

        // Only the outer hexagons are cut; every center stays in the cell
        let visible = cell.visible_centers();
        assert_eq!(visible.len(), 120);
        assert_eq!(visible, cell.centers());
        assert!(visible.iter().all(|c| cell.bounds.contains(*c)));
    }

    #[test]
    fn test_labels() {
        let sheet = compose_sample_sheet(&request(20.0, 60.0, 0.5, 6)).unwrap();
        let first = &sheet.cells[0];

        assert_eq!(
            first.label.to_string(),
            "width  :22\nstretch:-0.3%\nquality:18"
        );
        assert_eq!(first.label_anchor, Vector2::new(10.0, 10.0));
        assert_eq!(sheet.cells[4].label_anchor, Vector2::new(310.0, 310.0));
        assert_relative_eq!(first.font_size, 20.4);
    }

    #[test]
    fn test_sample_count_clamped_to_candidates() {
        let sheet = compose_sample_sheet(&request(20.0, 24.0, 1.0, 10)).unwrap();

        assert_eq!(sheet.cells.len(), 5);
        assert_eq!(sheet.grid, SheetGrid {
            cell_size: 300,
            rows: 2,
            columns: 3,
        });
        let widths: Vec<f64> = sheet.cells.iter().map(|c| c.result.width()).collect();
        assert_eq!(widths, vec![20.0, 21.0, 22.0, 23.0, 24.0]);
    }

    #[test]
    fn test_invalid_requests() {
        for count in [0, 26] {
            let result = compose_sample_sheet(&request(20.0, 60.0, 0.5, count));
            assert!(matches!(result, Err(HexFitError::InvalidSize(_))));
        }

        let mut exact = request(20.0, 60.0, 0.5, 6);
        exact.interval = SizeInterval::exact(20.0).unwrap();
        assert!(matches!(
            compose_sample_sheet(&exact),
            Err(HexFitError::InvalidInterval(_))
        ));

        let mut tiny = request(20.0, 60.0, 0.5, 6);
        tiny.sheet = PixelSize::new(2, 2).unwrap();
        assert!(matches!(
            compose_sample_sheet(&tiny),
            Err(HexFitError::DegenerateResult(_))
        ));
    }
}
