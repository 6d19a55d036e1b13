pub mod navigation;
pub mod renderer;
pub mod style;
pub mod test_mode;

pub use navigation::NavKey;
pub use renderer::{draw_frame, render_frame};
pub use style::UiStyle;
