//! A terminal front end for `reversi-core`.
//!
//! [`Session`] plays one game over any buffered reader and writer, so the
//! binary wires it to stdin and stdout while tests feed it scripted input.

pub mod config;
pub mod session;

pub use config::SessionConfig;
pub use session::{Request, Session, SessionEnd, Summary};
