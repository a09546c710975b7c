pub mod connected;
pub mod distances;
pub mod random;

pub use connected::{is_connected, Connected};
pub use distances::Distances;
pub use random::{generate, random_connected_graph, random_graph, RandomParams};
