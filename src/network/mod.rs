mod builder;
mod edge;
mod node;
mod pulse;
mod sampler;
mod scenario;

pub use builder::build_edges;
pub use edge::{Edge, EdgeSet};
pub use node::{NetworkNode, NodeId, NodeStatus};
pub use pulse::PulseClock;
pub use sampler::{SamplerConfig, sample};
pub use scenario::{PoisonScenario, ScenarioPhase};
