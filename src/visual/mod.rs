pub mod contrastive;
pub mod descent;
pub mod network;
pub mod palette;

pub use contrastive::ContrastivePlugin;
pub use descent::DescentPlugin;
pub use network::NetworkPlugin;
