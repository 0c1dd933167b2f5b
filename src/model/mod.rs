pub mod interval;
pub mod task;
pub mod view_mode;
pub mod window;

pub use interval::{DateInterval, PixelInterval};
pub use task::Task;
pub use view_mode::ViewMode;
pub use window::TimelineWindow;
