//! End-to-end scenarios: world-coordinate boxes through projection and tiling.

use tilecut::prelude::*;

/// A UTM-like raster: 0.6 m ground resolution, north-up (negative y scale).
fn utm_raster(width: u32, height: u32) -> RasterMeta {
    RasterMeta::new(
        width,
        height,
        AffineTransform::new(0.6, 0.0, 547000.0, 0.0, -0.6, 4186000.0),
    )
}

#[test]
fn four_way_split_through_the_full_pipeline() {
    // World box chosen to project onto pixel box [400, 400, 600, 600] of a
    // 1024x1024 raster with 512x512 tiles.
    let raster = utm_raster(1024, 1024);
    let boxes = vec![WorldBox::new(
        547000.0 + 400.0 * 0.6,
        4186000.0 - 600.0 * 0.6,
        547000.0 + 600.0 * 0.6,
        4186000.0 - 400.0 * 0.6,
    )
    .with_label("tree")
    .with_height(35.0)];

    let outcome = annotate_raster(&raster, &boxes, &PipelineOptions::default()).unwrap();

    assert!(outcome.skipped.is_empty());
    assert_eq!(outcome.tiles.len(), 4);

    let record = outcome.tiles.get(TileId::new(1, 1)).unwrap();
    assert_eq!(record.tile.bounds, PixelBounds::new(512, 512, 1024, 1024));
    assert_eq!(record.boxes.len(), 1);
    let local = &record.boxes[0];
    assert_eq!(local.bounds(), PixelBounds::new(0, 0, 88, 88));
    assert_eq!(local.label.as_deref(), Some("tree"));
    assert_eq!(local.height, Some(35.0));

    let top_left = outcome.tiles.get(TileId::new(0, 0)).unwrap();
    assert_eq!(
        top_left.boxes[0].bounds(),
        PixelBounds::new(400, 400, 512, 512)
    );
}

#[test]
fn raster_narrower_than_one_tile_reports_empty() {
    let _ = env_logger::builder().is_test(true).try_init();

    let raster = utm_raster(300, 1024);
    let boxes = vec![WorldBox::new(547010.0, 4185900.0, 547050.0, 4185950.0)];

    let outcome = annotate_raster(&raster, &boxes, &PipelineOptions::default()).unwrap();
    assert!(outcome.tiles.is_empty());
    assert!(outcome.skipped.is_empty());
}

#[test]
fn sign_flip_yields_normalized_pixel_boxes() {
    let raster = utm_raster(1024, 1024);
    // min_y < max_y in world space
    let world = WorldBox::new(547100.0, 4185800.0, 547150.0, 4185900.0);
    assert!(world.is_valid());

    let pixel = project(&world, &raster.transform).unwrap();
    assert!(pixel.min_y <= pixel.max_y);
    // the higher world y maps to the smaller row index
    assert_eq!(pixel.min_y, ((4185900.0f64 - 4186000.0) / -0.6).round() as i64);
}

#[test]
fn identity_transform_preserves_coordinates() {
    let world = WorldBox::new(12.0, 34.0, 56.0, 78.0);
    let pixel = project(&world, &AffineTransform::identity()).unwrap();

    assert_eq!(
        (pixel.min_x, pixel.min_y, pixel.max_x, pixel.max_y),
        (12, 34, 56, 78)
    );
}

#[test]
fn boundary_touching_box_is_not_annotated() {
    let raster = RasterMeta::new(1024, 1024, AffineTransform::identity());
    // Projects exactly onto the x = 512 grid line with zero-width overlap
    // into tile (0, 0).
    let boxes = vec![WorldBox::new(512.0, 100.0, 600.0, 200.0)];

    let outcome = annotate_raster(&raster, &boxes, &PipelineOptions::default()).unwrap();
    assert!(outcome.tiles.get(TileId::new(0, 0)).is_none());
    assert!(outcome.tiles.get(TileId::new(0, 1)).is_some());
}

#[test]
fn mixed_batch_keeps_going_and_reports_failures() {
    let raster = RasterMeta::new(2048, 2048, AffineTransform::identity());
    let boxes = vec![
        WorldBox::new(100.0, 100.0, 200.0, 200.0).with_label("a"),
        WorldBox::new(900.0, 100.0, 300.0, 200.0).with_label("bad"), // min > max
        // interior of tile (2, 2); the 1536 grid lines are not crossed
        WorldBox::new(1500.0, 1500.0, 1530.0, 1530.0).with_label("b"),
    ];

    let outcome = annotate_raster(&raster, &boxes, &PipelineOptions::default()).unwrap();

    assert_eq!(outcome.skipped.len(), 1);
    assert_eq!(outcome.skipped[0].index, 1);
    assert_eq!(outcome.tiles.box_count(), 2);
    assert!(outcome.tiles.get(TileId::new(2, 2)).is_some());

    let labels: Vec<&str> = outcome
        .tiles
        .records()
        .flat_map(|r| r.boxes.iter().filter_map(|b| b.label.as_deref()))
        .collect();
    assert_eq!(labels, vec!["a", "b"]);
}

#[test]
fn straddling_box_counts_once_per_intersected_tile() {
    let raster = RasterMeta::new(2048, 2048, AffineTransform::identity());
    // crosses the 1536 grid line on both axes
    let boxes = vec![WorldBox::new(1500.0, 1500.0, 1600.0, 1600.0).with_label("b")];

    let outcome = annotate_raster(&raster, &boxes, &PipelineOptions::default()).unwrap();

    assert_eq!(outcome.tiles.len(), 4);
    assert_eq!(outcome.tiles.box_count(), 4);
    for (row, col) in [(2, 2), (2, 3), (3, 2), (3, 3)] {
        let record = outcome.tiles.get(TileId::new(row, col)).unwrap();
        assert_eq!(record.boxes.len(), 1);
        assert_eq!(record.boxes[0].label.as_deref(), Some("b"));
    }
}

#[test]
fn world_extent_round_trips_through_projection() {
    let raster = utm_raster(1024, 768);
    let extent = raster.world_extent().unwrap();

    let pixel = project(&extent, &raster.transform).unwrap();
    assert_eq!(pixel.bounds(), PixelBounds::new(0, 0, 1024, 768));
}

#[test]
fn annotations_serialize_for_downstream_writers() {
    let raster = RasterMeta::new(1024, 1024, AffineTransform::identity());
    let boxes = vec![WorldBox::new(10.0, 10.0, 20.0, 20.0).with_label("tree")];

    let outcome = annotate_raster(&raster, &boxes, &PipelineOptions::default()).unwrap();
    let record = outcome.tiles.get(TileId::new(0, 0)).unwrap();

    // Downstream annotation writers consume whole tile records as plain data.
    let json = serde_json::to_string(record).unwrap();
    let parsed: TileRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(&parsed, record);
}

#[test]
fn repeated_invocations_are_independent() {
    let raster = RasterMeta::new(1024, 1024, AffineTransform::identity());
    let boxes = vec![WorldBox::new(400.0, 400.0, 600.0, 600.0)];
    let options = PipelineOptions::default();

    let first = annotate_raster(&raster, &boxes, &options).unwrap();
    let second = annotate_raster(&raster, &boxes, &options).unwrap();
    assert_eq!(first, second);
}
