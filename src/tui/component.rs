use ratatui::Frame;
use ratatui::layout::Rect;

/// A reusable UI component.
///
/// Components follow the props pattern: they receive data via struct
/// fields and render to a `Frame` within a given `Rect`. They hold no
/// reference to application state and never mutate it; the whole tree is
/// rebuilt from state on every draw.
///
/// # Mutability
///
/// The `render` method takes `&mut self` so stateful components can
/// update presentation caches (e.g. scroll offsets) during the render
/// pass, aligning with Ratatui's `StatefulWidget` pattern.
pub trait Component {
    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}
