// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use std::fmt;
use std::fmt::Write as _;

use crate::hash;
use crate::matrix::EntryIter;
use crate::matrix::MatrixValue;

/// Default extent of the dense grid produced by the `Display` impl.
const DEFAULT_RENDER_EXTENT: i64 = 10;

/// A stored non-zero cell.
#[derive(Debug, Clone, Copy)]
pub(super) struct Entry<V> {
    pub(super) row: i64,
    pub(super) col: i64,
    pub(super) value: V,
}

/// Sparse 2D matrix storing only non-zero cells.
///
/// Cells live in a fixed table of [`hash::NUM_BUCKETS`] collision chains,
/// indexed by the Cantor pairing of their coordinates. Within a chain the
/// most recently created entry comes first; removal unlinks an entry without
/// reordering the survivors. The bucket count never changes for the lifetime
/// of the matrix.
///
/// At most one entry exists per `(row, col)` pair, and an entry exists if
/// and only if its value is non-zero.
#[derive(Debug)]
pub struct SparseMatrix<V: MatrixValue = f64> {
    buckets: Vec<Vec<Entry<V>>>,
    num_nonzero: usize,
}

impl<V: MatrixValue> SparseMatrix<V> {
    /// Creates an empty matrix.
    pub fn new() -> Self {
        Self {
            buckets: vec![Vec::new(); hash::NUM_BUCKETS],
            num_nonzero: 0,
        }
    }

    /// Writes `value` at `(row, col)`.
    ///
    /// A non-zero value creates the entry or overwrites an existing one in
    /// place. Zero removes the entry if present; setting an already-zero
    /// cell to zero is a silent no-op. Never fails.
    pub fn set(&mut self, row: i64, col: i64, value: V) {
        let index = hash::bucket_index(row, col);
        let chain = &mut self.buckets[index];
        let found = chain.iter().position(|e| e.row == row && e.col == col);

        if value.is_zero() {
            if let Some(pos) = found {
                chain.remove(pos);
                self.num_nonzero -= 1;
            }
        } else if let Some(pos) = found {
            chain[pos].value = value;
        } else {
            // New entries go to the chain head.
            chain.insert(0, Entry { row, col, value });
            self.num_nonzero += 1;
        }
    }

    /// Returns the value at `(row, col)`, or zero if the cell is absent.
    ///
    /// Absence is not an error; it is the definition of a zero cell.
    pub fn get(&self, row: i64, col: i64) -> V {
        self.buckets[hash::bucket_index(row, col)]
            .iter()
            .find(|e| e.row == row && e.col == col)
            .map(|e| e.value)
            .unwrap_or_else(V::zero)
    }

    /// Returns the number of stored (non-zero) cells in O(1).
    pub fn num_nonzero(&self) -> usize {
        self.num_nonzero
    }

    /// Returns true if no cell is non-zero.
    pub fn is_empty(&self) -> bool {
        self.num_nonzero == 0
    }

    /// Removes every entry, leaving an empty matrix.
    pub fn clear(&mut self) {
        for chain in &mut self.buckets {
            chain.clear();
        }
        self.num_nonzero = 0;
    }

    /// Returns an iterator over all stored `(row, col, value)` triples.
    ///
    /// Order is deterministic for a given matrix state (bucket index
    /// ascending, then chain head to tail) but not sorted by row or column.
    /// The iterator borrows the matrix, so the matrix cannot be mutated
    /// while one is live.
    pub fn iter(&self) -> EntryIter<'_, V> {
        EntryIter::new(self)
    }

    /// Builds the transposed matrix.
    ///
    /// Every source entry `(row, col, value)` becomes `(col, row, value)`
    /// in the result. The source is not mutated, and the result holds the
    /// same number of entries: swapping coordinates is injective, so no
    /// two source entries can land on the same cell.
    pub fn transpose(&self) -> Self {
        let mut result = Self::new();
        for (row, col, value) in self.iter() {
            result.set(col, row, value);
        }
        result
    }

    /// Takes the contents, leaving `self` as a valid empty matrix.
    ///
    /// The bucket storage is transferred in O(1); no entry is re-allocated.
    pub fn take(&mut self) -> Self {
        Self {
            buckets: std::mem::replace(&mut self.buckets, vec![Vec::new(); hash::NUM_BUCKETS]),
            num_nonzero: std::mem::take(&mut self.num_nonzero),
        }
    }

    /// Renders a dense grid view of the cells in `[0, max_rows) x
    /// [0, max_cols)`, one tab-separated line per row, preceded by a banner
    /// with the non-zero count. Intended for debugging.
    pub fn render(&self, max_rows: i64, max_cols: i64) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "SparseMatrix with {} non-zero elements:", self.num_nonzero);
        for i in 0..max_rows {
            for j in 0..max_cols {
                let _ = write!(out, "{}\t", self.get(i, j));
            }
            out.push('\n');
        }
        out
    }

    pub(super) fn chain(&self, index: usize) -> &[Entry<V>] {
        &self.buckets[index]
    }
}

impl<V: MatrixValue> Default for SparseMatrix<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: MatrixValue> Clone for SparseMatrix<V> {
    /// Element-wise reconstruction: the clone owns independent storage and
    /// later mutation of either matrix leaves the other untouched.
    fn clone(&self) -> Self {
        let mut copy = Self::new();
        for (row, col, value) in self.iter() {
            copy.set(row, col, value);
        }
        copy
    }
}

impl<V: MatrixValue> fmt::Display for SparseMatrix<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(DEFAULT_RENDER_EXTENT, DEFAULT_RENDER_EXTENT))
    }
}
