//! Pulse Console
//!
//! Headless host for the Pulse Player controller. Commands are read one per
//! line, playback runs on a simulated clock and every render is printed.
//!
//! This library exposes the session for testing purposes.

pub mod command;
pub mod session;
pub mod simulated;
pub mod view;

pub use command::{Command, CommandError};
pub use session::{Flow, Session, SessionError, SessionOptions, StatusReport};
pub use simulated::{PathFile, SimulatedHandle};
pub use view::ConsoleView;
