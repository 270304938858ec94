use ratatui::layout::{Constraint, Layout, Rect};

/// Screen regions for one frame.
pub struct WidgetAreas {
    pub input: Rect,
    /// Everything between the input field and the footer.
    pub body: Rect,
    /// Top slice of the body holding the results panel; zero-height while
    /// the panel is retracted.
    pub results: Rect,
    pub footer: Rect,
}

/// Splits the frame and sizes the results panel from the motion scale.
///
/// The panel's height is the fraction (scale_y - 1) / 4 of the body, so
/// the neutral scale 1.0 collapses it and the settled scale 5.0 fills
/// the space under the input field.
pub fn widget_areas(frame: Rect, scale_y: f32) -> WidgetAreas {
    let [input, body, footer] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(frame);

    let fraction = ((scale_y - 1.0) / 4.0).clamp(0.0, 1.0);
    let height = (f32::from(body.height) * fraction).round() as u16;
    let results = Rect {
        height: height.min(body.height),
        ..body
    };

    WidgetAreas {
        input,
        body,
        results,
        footer,
    }
}
