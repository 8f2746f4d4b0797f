// Layout module: Canvas extents and sample-sheet composition
// This module turns a chosen lattice into pixel extents, repeat counts and tiled sheet cells

// ======================== MODULE DECLARATIONS ========================
pub mod bounding_box;
pub mod canvas_extent;
pub mod sample_sheet;

mod _tests_sample_sheet;

// ======================== GEOMETRIC UTILITIES ========================
pub use bounding_box::BoundingBox2D; // struct - axis-aligned pixel rectangle (sheet cells, clip regions)
// BoundingBox2D impl methods:
//   new(min: Vector2<f64>, max: Vector2<f64>) -> Self          - creates box from corners
//   from_origin_size(origin: Vector2<f64>, w: f64, h: f64) -> Self - creates box from top-left and size
//   contains(&self, point) / contains_box(&self, other) -> bool - inclusive containment
//   overlaps(&self, other) -> bool                              - interiors overlap (shared edges do not)
//   clip_to(&self, other) -> Option<BoundingBox2D>              - shared region
//   translate(&self, offset: Vector2<f64>) -> Self              - same box moved by an offset

// ======================== CANVAS EXTENT PLANNING ========================
pub use canvas_extent::{
    CanvasExtent, // struct - extent, repeat counts, first center and realized pitches
    ExtentMode,   // enum - Fixed (the target) or Auto (cropped to the lattice span plus margins)
    GridGuide,    // struct - image-grid spacing and offset on hexagon centers
    Margins,      // struct - signed top/right/bottom/left insets
    PixelSize,    // struct - positive width x height
    plan_extent,  // fn(lattice, stroke, margins, target, mode) -> Result<CanvasExtent>
};
// CanvasExtent impl methods:
//   size(&self) -> PixelSize; hexagon_count(&self) -> u64; is_empty(&self) -> bool
//   centers(&self) -> Vec<Vector2<f64>>                         - every hexagon center, row by row
//   lattice_bounds(&self) / bounds(&self) -> BoundingBox2D      - drawn lattice box / extent box
//   grid_guide(&self) -> GridGuide                              - host image grid on the centers

// ======================== SAMPLE SHEET ========================
pub use sample_sheet::{
    SampleCell,           // struct - cell bounds, result, label and label placement
    SampleLabel,          // struct - width / stretch / quality text
    SampleSheet,          // struct - grid, cells, background and separator width
    SheetGrid,            // struct - cell size, rows, columns
    SheetRequest,         // struct - interval, sheet size, sample count, search params
    compose_sample_sheet, // fn(request: &SheetRequest) -> Result<SampleSheet>
    square_fill,          // fn(width: u32, height: u32, count: usize) -> SheetGrid
};
// SampleCell impl methods:
//   extent_origin(&self) -> Vector2<f64>                        - extent top-left in sheet coordinates
//   centers(&self) -> Vec<Vector2<f64>>                         - lattice centers in sheet coordinates
//   visible_centers(&self) -> Vec<Vector2<f64>>                 - centers left after clipping to the cell
//   lattice_bounds(&self) -> BoundingBox2D                      - whole lattice box in sheet coordinates
//   clip_region(&self) -> Option<BoundingBox2D>                 - part of the lattice drawn in the cell
