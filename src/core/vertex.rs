use std::fmt;

/// A vertex of a [`Graph`](crate::graph::Graph).
///
/// The identity of a vertex is its position in the vertex sequence of the
/// graph. The label and the color are free for the caller to change, the
/// eccentricity is maintained by
/// [`calculate_graph_eccentricities`](crate::graph::Graph::calculate_graph_eccentricities).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex {
    id: usize,
    label: String,
    color: Option<u32>,
    eccentricity: Option<usize>,
}

impl Vertex {
    pub(crate) fn new(id: usize) -> Self {
        Self {
            id,
            label: id.to_string(),
            color: None,
            eccentricity: None,
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    pub fn color(&self) -> Option<u32> {
        self.color
    }

    pub fn set_color(&mut self, color: Option<u32>) {
        self.color = color;
    }

    /// Maximum shortest-path distance from this vertex to any other vertex.
    ///
    /// Returns `None` if the eccentricities were not calculated yet, or if
    /// the vertex cannot reach all other vertices.
    pub fn eccentricity(&self) -> Option<usize> {
        self.eccentricity
    }

    pub(crate) fn set_eccentricity(&mut self, eccentricity: Option<usize>) {
        self.eccentricity = eccentricity;
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.id, self.label)?;

        if let Some(color) = self.color {
            write!(f, " color={color}")?;
        }

        if let Some(eccentricity) = self.eccentricity {
            write!(f, " ecc={eccentricity}")?;
        }

        Ok(())
    }
}
