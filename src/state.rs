use crate::canvas::{Bitmap, Point};
use crate::tools::ToolMode;

/// Where the pointer gesture state machine currently is.
///
/// ```text
///            press             release
///   Idle ───────────► Dragging ───────► Idle (commit)
///    ▲                  │   ▲
///    │ bucket no-op     └───┘ move
///    └──────────────────┘
/// ```
#[derive(Debug, Clone, Default)]
pub enum GestureState {
    /// No button held
    #[default]
    Idle,
    /// A press has started a gesture that release will commit
    Dragging {
        /// Tool the gesture started with; it keeps it until release
        mode: ToolMode,
        /// Press position, advanced along the stroke by the pen
        start: Point,
        /// Bitmap before the press, kept for the rectangle preview
        original: Option<Bitmap>,
    },
}

impl GestureState {
    pub fn is_dragging(&self) -> bool {
        matches!(self, GestureState::Dragging { .. })
    }

    /// The tool driving the gesture in progress
    pub fn gesture_mode(&self) -> Option<ToolMode> {
        match self {
            GestureState::Dragging { mode, .. } => Some(*mode),
            GestureState::Idle => None,
        }
    }
}
