//! Console output and interactive selection for the command-line caller.

pub mod picker;
pub mod renderer;
pub mod settings;

pub use picker::pick_from_list;
pub use renderer::Renderer;
