use egui::Color32;
use raster_paint::{Document, Pen, PixelCanvas, Point, ToolController, ToolMode, flood_fill};

fn color_at(canvas: &PixelCanvas, x: i32, y: i32) -> Color32 {
    canvas.pixel_at(Point::new(x, y)).unwrap()
}

// 100x100 white canvas with a closed black box from (60,60) to (90,90)
fn create_boxed_canvas() -> PixelCanvas {
    let mut canvas = PixelCanvas::new(100, 100).unwrap();
    let border = Pen::new(Color32::BLACK, 2);
    canvas.draw_rect(Point::new(60, 60), Point::new(90, 90), &border);
    canvas
}

#[test]
fn test_fill_stops_at_closed_border() {
    let mut canvas = create_boxed_canvas();
    let pen = Pen::new(Color32::RED, 2);

    flood_fill(&mut canvas, Point::new(50, 50), Color32::WHITE, &pen).unwrap();

    assert_eq!(color_at(&canvas, 50, 50), Color32::RED);
    assert_eq!(color_at(&canvas, 0, 0), Color32::RED);
    assert_eq!(color_at(&canvas, 99, 99), Color32::RED);
    // Inside the box nothing leaked
    assert_eq!(color_at(&canvas, 75, 75), Color32::WHITE);
    assert_eq!(color_at(&canvas, 62, 62), Color32::WHITE);
    // The border itself is untouched
    assert_eq!(color_at(&canvas, 60, 75), Color32::BLACK);
}

#[test]
fn test_fill_covers_exactly_the_component() {
    let mut canvas = create_boxed_canvas();
    let before = canvas.snapshot();
    let pen = Pen::new(Color32::RED, 2);

    let painted = flood_fill(&mut canvas, Point::new(75, 75), Color32::WHITE, &pen).unwrap();

    let mut changed = 0;
    for (x, y, pixel) in canvas.bitmap().enumerate_pixels() {
        let old = before.get_pixel(x, y);
        if pixel != old {
            changed += 1;
            // Everything repainted was white and lies strictly inside the box
            assert_eq!(old.0, Color32::WHITE.to_array());
            assert!((61..90).contains(&x) && (61..90).contains(&y));
        }
    }
    assert_eq!(changed, painted);
    assert_eq!(color_at(&canvas, 20, 20), Color32::WHITE);
}

#[test]
fn test_fill_is_idempotent() {
    let mut canvas = create_boxed_canvas();
    let pen = Pen::new(Color32::RED, 2);

    flood_fill(&mut canvas, Point::new(10, 10), Color32::WHITE, &pen).unwrap();
    let once = canvas.snapshot();

    let painted = flood_fill(&mut canvas, Point::new(10, 10), Color32::RED, &pen).unwrap();
    assert_eq!(painted, 0);
    assert_eq!(canvas.bitmap(), &once);
}

#[test]
fn test_bucket_tool_fill_scenario() {
    let mut doc = Document::new(100, 100).unwrap();
    let border = Pen::new(Color32::BLACK, 2);
    doc.canvas_mut()
        .draw_rect(Point::new(10, 10), Point::new(30, 30), &border);
    doc.commit();

    let mut tools = ToolController::new(ToolMode::Bucket, Pen::new(Color32::RED, 6));
    tools.on_press(Point::new(50, 50), &mut doc);
    tools.on_release(&mut doc);

    let canvas = doc.canvas();
    assert_eq!(color_at(canvas, 50, 50), Color32::RED);
    assert_eq!(color_at(canvas, 5, 95), Color32::RED);
    assert_eq!(color_at(canvas, 20, 20), Color32::WHITE);
    assert_eq!(doc.history().len(), 3);

    // Undo brings back the unfilled canvas
    doc.undo();
    assert_eq!(color_at(doc.canvas(), 50, 50), Color32::WHITE);
}
