use egui::Color32;
use image::{Rgba, RgbaImage};
use raster_paint::{CanvasError, Document, Pen, Point, ToolController, ToolMode, io};

// Helper to create a document with a few strokes of different colors on it
fn create_test_document() -> Document {
    let mut doc = Document::new(64, 48).unwrap();
    let mut tools = ToolController::new(ToolMode::Pen, Pen::new(Color32::RED, 4));

    tools.on_press(Point::new(5, 5), &mut doc);
    tools.on_move(Point::new(50, 40), &mut doc);
    tools.on_release(&mut doc);

    tools.select_tool(ToolMode::Rectangle);
    tools.set_pen_color(Color32::from_rgb(10, 200, 30));
    tools.on_press(Point::new(20, 4), &mut doc);
    tools.on_move(Point::new(60, 30), &mut doc);
    tools.on_release(&mut doc);

    doc
}

#[test]
fn test_save_then_open_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("image.png");
    let doc = create_test_document();

    doc.save(&path).unwrap();

    let mut fresh = Document::new(64, 48).unwrap();
    fresh.open(&path).unwrap();
    assert_eq!(fresh.canvas().bitmap(), doc.canvas().bitmap());
    // Opening is undoable
    assert_eq!(fresh.history().len(), 2);
}

#[test]
fn test_open_composites_without_resizing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("small.png");
    RgbaImage::from_pixel(10, 5, Rgba([0, 0, 255, 255]))
        .save(&path)
        .unwrap();

    let mut doc = Document::new(30, 30).unwrap();
    doc.open(&path).unwrap();

    let canvas = doc.canvas();
    assert_eq!(canvas.size(), (30, 30));
    assert_eq!(canvas.pixel_at(Point::new(9, 4)).unwrap(), Color32::BLUE);
    assert_eq!(canvas.pixel_at(Point::new(10, 4)).unwrap(), Color32::WHITE);
    assert_eq!(canvas.pixel_at(Point::new(0, 5)).unwrap(), Color32::WHITE);
}

#[test]
fn test_larger_image_is_clipped() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("large.png");
    RgbaImage::from_pixel(80, 80, Rgba([0, 0, 0, 255]))
        .save(&path)
        .unwrap();

    let mut doc = Document::new(20, 10).unwrap();
    doc.open(&path).unwrap();

    assert_eq!(doc.canvas().size(), (20, 10));
    assert!(doc.canvas().bitmap().pixels().all(|p| p.0 == [0, 0, 0, 255]));
}

#[test]
fn test_open_garbage_leaves_canvas_alone() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.png");
    std::fs::write(&path, b"definitely not a png").unwrap();

    let mut doc = create_test_document();
    let before = doc.canvas().snapshot();
    let history_len = doc.history().len();

    let err = doc.open(&path).unwrap_err();
    assert!(matches!(err, CanvasError::DecodeFailure { .. }));
    assert!(err.to_string().contains("broken.png"));
    assert_eq!(doc.canvas().bitmap(), &before);
    assert_eq!(doc.history().len(), history_len);
}

#[test]
fn test_save_failure_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing_dir").join("image.png");
    let doc = Document::new(8, 8).unwrap();

    let err = doc.save(&path).unwrap_err();
    assert!(matches!(err, CanvasError::EncodeFailure { .. }));
}

#[test]
fn test_default_save_path_in_working_dir() {
    let path = io::default_save_path();
    assert_eq!(path.parent(), std::env::current_dir().ok().as_deref());
}

#[test]
fn test_translucent_pixels_save_as_straight_alpha() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("translucent.png");
    let translucent = Color32::from_rgba_unmultiplied(255, 0, 0, 128);

    let mut doc = Document::new(12, 12).unwrap();
    let mut tools = ToolController::new(ToolMode::Bucket, Pen::new(translucent, 2));
    tools.on_press(Point::new(6, 6), &mut doc);
    tools.on_release(&mut doc);
    doc.save(&path).unwrap();

    let saved = image::open(&path).unwrap().to_rgba8();
    let pixel = saved.get_pixel(6, 6).0;
    assert_eq!(pixel, translucent.to_srgba_unmultiplied());
    assert_eq!(pixel[3], 128);
    // Full intensity red, not the premultiplied value
    assert!(pixel[0] >= 254, "saved red channel was {}", pixel[0]);
    assert_eq!(&pixel[1..3], &[0, 0]);

    // Reading the file back yields the same straight pixels
    assert_eq!(io::load(&path).unwrap(), saved);
}
