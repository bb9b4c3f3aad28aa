//! Presentational pieces of the conversion page. Each renders to plain
//! text and holds no state of its own.

mod input;
mod progress_bar;
mod text;

pub use input::Input;
pub use progress_bar::ProgressBar;
pub use text::Text;
