use egui::Color32;
use raster_paint::{Document, HISTORY_CAP, Point, ToolController};

// Helper to run one complete pen gesture (press, one move, release)
fn scribble(tools: &mut ToolController, doc: &mut Document, row: i32) {
    tools.on_press(Point::new(1, row), doc);
    tools.on_move(Point::new(8, row), doc);
    tools.on_release(doc);
}

#[test]
fn test_history_grows_until_cap() {
    let mut doc = Document::new(32, 32).unwrap();
    let mut tools = ToolController::default();
    assert_eq!(doc.history().len(), 1);

    for n in 1..=9 {
        scribble(&mut tools, &mut doc, n as i32 * 3 % 32);
        assert_eq!(doc.history().len(), n + 1);
    }

    for _ in 0..5 {
        scribble(&mut tools, &mut doc, 30);
        assert_eq!(doc.history().len(), HISTORY_CAP);
    }
}

#[test]
fn test_evicted_states_are_unreachable() {
    let mut doc = Document::new(40, 40).unwrap();
    let mut tools = ToolController::default();

    // Twelve gestures on separate rows; the blank baseline and the first
    // two strokes fall out of the window
    for n in 0..12 {
        scribble(&mut tools, &mut doc, 2 + n * 3);
    }
    for _ in 0..20 {
        doc.undo();
    }

    let canvas = doc.canvas();
    assert_eq!(canvas.pixel_at(Point::new(4, 2)).unwrap(), Color32::BLACK);
    assert_eq!(canvas.pixel_at(Point::new(4, 5)).unwrap(), Color32::BLACK);
    assert_eq!(canvas.pixel_at(Point::new(4, 8)).unwrap(), Color32::BLACK);
    assert_eq!(canvas.pixel_at(Point::new(4, 11)).unwrap(), Color32::WHITE);
}

#[test]
fn test_undo_restores_previous_gesture() {
    let mut doc = Document::new(20, 20).unwrap();
    let mut tools = ToolController::default();

    scribble(&mut tools, &mut doc, 4);
    let after_first = doc.canvas().snapshot();
    scribble(&mut tools, &mut doc, 12);
    assert_ne!(doc.canvas().bitmap(), &after_first);

    assert!(doc.undo());
    assert_eq!(doc.canvas().bitmap(), &after_first);
}

#[test]
fn test_undo_is_idempotent_at_floor() {
    let mut doc = Document::new(20, 20).unwrap();
    let blank = doc.canvas().snapshot();
    let mut tools = ToolController::default();

    scribble(&mut tools, &mut doc, 5);
    assert!(doc.undo());
    assert_eq!(doc.canvas().bitmap(), &blank);

    for _ in 0..3 {
        assert!(!doc.undo());
        assert_eq!(doc.canvas().bitmap(), &blank);
        assert_eq!(doc.history().len(), 1);
    }
}
