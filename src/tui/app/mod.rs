mod capture;
mod menu;
mod shiny;
mod state;

pub use capture::{CaptureField, CaptureForm};
pub use shiny::ShinyForm;
pub use state::{AppState, EntryError, InputAction, Scene};
