//! Dense complex admittance matrix and stamping primitives.

use std::fmt;

use num_complex::Complex64;

/// Square complex matrix Y, stored row-major.
///
/// For a network of N nodes the matrix has dimension N + 1; the last
/// row/column belongs to the voltage-source constraint.
#[derive(Debug, Clone, PartialEq)]
pub struct AdmittanceMatrix {
    data: Vec<Complex64>,
    size: usize,
}

impl AdmittanceMatrix {
    /// Create a `size` x `size` matrix of complex zeros.
    pub fn zeros(size: usize) -> Self {
        Self {
            data: vec![Complex64::new(0.0, 0.0); size * size],
            size,
        }
    }

    /// Matrix dimension.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Index of the augmentation row/column.
    pub fn augmentation_index(&self) -> usize {
        self.size.saturating_sub(1)
    }

    /// Get matrix element at (row, col).
    pub fn get(&self, row: usize, col: usize) -> Complex64 {
        self.data[row * self.size + col]
    }

    /// Set matrix element at (row, col).
    pub fn set(&mut self, row: usize, col: usize, value: Complex64) {
        self.data[row * self.size + col] = value;
    }

    /// Add to matrix element at (row, col).
    pub fn add(&mut self, row: usize, col: usize, value: Complex64) {
        self.data[row * self.size + col] += value;
    }

    /// Borrow one row.
    pub fn row(&self, row: usize) -> &[Complex64] {
        &self.data[row * self.size..(row + 1) * self.size]
    }

    /// Row-major cells.
    pub fn as_slice(&self) -> &[Complex64] {
        &self.data
    }

    /// Stamp an admittance Y between nodes n1 and n2:
    ///   A[n1,n1] += Y
    ///   A[n2,n2] += Y
    ///   A[n1,n2] -= Y
    ///   A[n2,n1] -= Y
    pub fn stamp_admittance(&mut self, n1: usize, n2: usize, y: Complex64) {
        self.add(n1, n1, y);
        self.add(n2, n2, y);
        self.add(n1, n2, -y);
        self.add(n2, n1, -y);
    }

    /// Stamp only the off-diagonal pair of a two-terminal admittance.
    pub fn stamp_mutual(&mut self, n1: usize, n2: usize, y: Complex64) {
        self.add(n1, n2, -y);
        self.add(n2, n1, -y);
    }

    /// Whether A[i,j] and A[j,i] agree within `tolerance` everywhere.
    pub fn is_symmetric(&self, tolerance: f64) -> bool {
        (0..self.size).all(|i| {
            (i + 1..self.size).all(|j| (self.get(i, j) - self.get(j, i)).norm() <= tolerance)
        })
    }
}

impl fmt::Display for AdmittanceMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.size {
            let cells: Vec<String> = self
                .row(i)
                .iter()
                .map(|c| format!("{:.6e}{:+.6e}j", c.re, c.im))
                .collect();
            writeln!(f, "[{}]", cells.join(", "))?;
        }
        Ok(())
    }
}
