//! Dense square matrices indexed by vertex pairs.

use std::fmt;

use bitvec::vec::BitVec;

fn linear_len(order: usize) -> usize {
    order * order
}

fn index(row: usize, col: usize, order: usize) -> usize {
    debug_assert!(row < order && col < order);
    row * order + col
}

/// Square matrix of presence flags.
#[derive(Clone, PartialEq, Eq)]
pub struct BitMatrix {
    data: BitVec,
    order: usize,
}

impl BitMatrix {
    pub fn new(order: usize) -> Self {
        let len = linear_len(order);
        let mut data = BitVec::with_capacity(len);
        data.resize(len, false);

        Self { data, order }
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.data[index(row, col, self.order)]
    }

    /// Sets the entry and returns its previous value.
    pub fn set(&mut self, row: usize, col: usize, value: bool) -> bool {
        let i = index(row, col, self.order);
        let prev = self.data[i];
        self.data.set(i, value);
        prev
    }

    pub fn row_count(&self, row: usize) -> usize {
        let start = index(row, 0, self.order);
        self.data[start..start + self.order].count_ones()
    }

    pub fn count(&self) -> usize {
        self.data.count_ones()
    }
}

impl fmt::Debug for BitMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            writeln!(f, "BitMatrix {{")?;
            for row in 0..self.order {
                write!(f, "    ")?;
                for col in 0..self.order {
                    if col > 0 {
                        write!(f, " ")?;
                    }

                    write!(f, "{}", self.contains(row, col) as usize)?;
                }
                writeln!(f)?;
            }
            writeln!(f, "}}")
        } else {
            f.debug_struct("BitMatrix")
                .field("data", &self.data)
                .field("order", &self.order)
                .finish()
        }
    }
}

/// Square matrix of optional values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix<T> {
    data: Vec<Option<T>>,
    order: usize,
}

impl<T> Matrix<T> {
    pub fn new(order: usize) -> Self {
        let len = linear_len(order);
        let mut data = Vec::with_capacity(len);
        data.resize_with(len, || None);

        Self { data, order }
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.data[index(row, col, self.order)].as_ref()
    }

    pub fn insert(&mut self, row: usize, col: usize, value: T) -> Option<T> {
        self.data[index(row, col, self.order)].replace(value)
    }

    pub fn clear(&mut self) {
        self.data.iter_mut().for_each(|value| *value = None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_row_major() {
        assert_eq!(index(0, 0, 5), 0);
        assert_eq!(index(0, 4, 5), 4);
        assert_eq!(index(1, 0, 5), 5);
        assert_eq!(index(4, 4, 5), linear_len(5) - 1);
    }

    #[test]
    fn bit_matrix_basic() {
        let mut matrix = BitMatrix::new(3);

        assert!(!matrix.set(0, 2, true));
        assert!(matrix.set(0, 2, true));
        matrix.set(0, 1, true);
        matrix.set(2, 0, true);

        assert!(matrix.contains(0, 2));
        assert!(!matrix.contains(2, 1));
        assert_eq!(matrix.row_count(0), 2);
        assert_eq!(matrix.row_count(1), 0);
        assert_eq!(matrix.count(), 3);
    }

    #[test]
    fn bit_matrix_debug_alternate() {
        let mut matrix = BitMatrix::new(2);
        matrix.set(0, 1, true);

        assert_eq!(
            format!("{matrix:#?}"),
            "BitMatrix {\n    0 1\n    0 0\n}\n"
        );
    }

    #[test]
    fn matrix_basic() {
        let mut matrix = Matrix::new(2);

        assert_eq!(matrix.get(1, 0), None);
        assert_eq!(matrix.insert(1, 0, 3), None);
        assert_eq!(matrix.insert(1, 0, 4), Some(3));
        assert_eq!(matrix.get(1, 0), Some(&4));
        assert_eq!(matrix.get(0, 1), None);

        matrix.clear();
        assert_eq!(matrix.get(1, 0), None);
    }
}
