mod errors;
mod options;
mod tello;
mod flight;

pub use errors::{TelloError, Result};
pub use options::TelloOptions;
pub use tello::{Tello, Disconnected, Connected};
pub use flight::{setup, setup_with, simple_flight_path};
