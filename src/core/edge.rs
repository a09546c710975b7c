use std::{
    fmt,
    hash::{Hash, Hasher},
};

/// An edge between two vertices, identified by their indices.
///
/// Unless the edge is directional, `(u, v)` and `(v, u)` denote the same
/// edge, both for equality and for hashing. Weight and color are
/// annotations and do not take part in the comparison.
#[derive(Debug, Clone, Copy)]
pub struct Edge {
    v1: usize,
    v2: usize,
    weight: Option<i64>,
    color: Option<u32>,
    directional: bool,
}

impl Edge {
    pub fn new(v1: usize, v2: usize) -> Self {
        Self {
            v1,
            v2,
            weight: None,
            color: None,
            directional: false,
        }
    }

    pub fn directed(src: usize, dst: usize) -> Self {
        Self {
            directional: true,
            ..Self::new(src, dst)
        }
    }

    #[must_use]
    pub fn with_weight(self, weight: i64) -> Self {
        Self {
            weight: Some(weight),
            ..self
        }
    }

    #[must_use]
    pub fn with_color(self, color: u32) -> Self {
        Self {
            color: Some(color),
            ..self
        }
    }

    pub fn endpoints(&self) -> (usize, usize) {
        (self.v1, self.v2)
    }

    pub fn weight(&self) -> Option<i64> {
        self.weight
    }

    pub fn color(&self) -> Option<u32> {
        self.color
    }

    pub fn is_directional(&self) -> bool {
        self.directional
    }

    pub fn is_loop(&self) -> bool {
        self.v1 == self.v2
    }

    // Smaller endpoint first, unless the order matters.
    fn key(&self) -> (usize, usize, bool) {
        if self.directional || self.v1 <= self.v2 {
            (self.v1, self.v2, self.directional)
        } else {
            (self.v2, self.v1, self.directional)
        }
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl From<(usize, usize)> for Edge {
    fn from((v1, v2): (usize, usize)) -> Self {
        Self::new(v1, v2)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let line = if self.directional { "->" } else { "--" };
        write!(f, "{} {} {}", self.v1, line, self.v2)?;

        if let Some(weight) = self.weight {
            write!(f, " w={weight}")?;
        }

        if let Some(color) = self.color {
            write!(f, " color={color}")?;
        }

        Ok(())
    }
}
