mod config;
mod session;

pub use config::SimConfig;
pub use session::{ContrastiveSession, DescentSession, NetworkSession};
