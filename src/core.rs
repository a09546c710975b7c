pub mod edge;
pub mod error;
pub mod facts;
pub(crate) mod matrix;
pub mod vertex;

pub use edge::Edge;
pub use error::{AddEdgeError, AddEdgeErrorKind, CreateError};
pub use vertex::Vertex;
