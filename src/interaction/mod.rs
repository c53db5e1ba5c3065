mod picker;
mod selection;
mod viewport;

pub use picker::AnalyticPicker;
pub use selection::SelectionController;
pub use viewport::Viewport;
