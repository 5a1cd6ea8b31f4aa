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

use crate::error::Error;
use crate::error::ErrorKind;
use crate::hash;
use crate::matrix::MatrixValue;
use crate::matrix::SparseMatrix;

/// Cursor over the stored entries of a [`SparseMatrix`].
///
/// Walks the table bucket by bucket, each chain head to tail, visiting every
/// entry exactly once. The cursor state is the current bucket index and the
/// position within that bucket's chain; two cursors over the same matrix
/// state compare equal exactly when those agree, and all exhausted cursors
/// compare equal.
///
/// Besides the [`Iterator`] impl, the cursor can be driven manually with
/// [`EntryIter::current`] and [`EntryIter::advance`]; dereferencing an
/// exhausted cursor is the one fallible operation in this crate.
#[derive(Debug, Clone, Copy)]
pub struct EntryIter<'a, V: MatrixValue> {
    matrix: &'a SparseMatrix<V>,
    bucket: usize,
    pos: usize,
}

impl<'a, V: MatrixValue> EntryIter<'a, V> {
    pub(super) fn new(matrix: &'a SparseMatrix<V>) -> Self {
        let mut iter = Self {
            matrix,
            bucket: 0,
            pos: 0,
        };
        iter.settle();
        iter
    }

    /// Skips forward to the next stored entry, or to the terminal state.
    ///
    /// Keeps `pos == 0` whenever a bucket boundary is crossed, so the
    /// terminal state is always exactly `(NUM_BUCKETS, 0)`.
    fn settle(&mut self) {
        while self.bucket < hash::NUM_BUCKETS && self.pos >= self.matrix.chain(self.bucket).len() {
            self.bucket += 1;
            self.pos = 0;
        }
    }

    /// Returns the `(row, col, value)` triple under the cursor.
    ///
    /// # Errors
    ///
    /// Fails with [`ErrorKind::IteratorOutOfRange`] if the cursor is
    /// exhausted.
    pub fn current(&self) -> Result<(i64, i64, V), Error> {
        if self.is_exhausted() {
            return Err(Error::new(
                ErrorKind::IteratorOutOfRange,
                "dereferenced an exhausted entry iterator",
            )
            .with_context("bucket", self.bucket));
        }
        let entry = &self.matrix.chain(self.bucket)[self.pos];
        Ok((entry.row, entry.col, entry.value))
    }

    /// Steps the cursor to the next entry. No-op once exhausted.
    pub fn advance(&mut self) {
        if !self.is_exhausted() {
            self.pos += 1;
            self.settle();
        }
    }

    /// Returns true once every entry has been visited.
    pub fn is_exhausted(&self) -> bool {
        self.bucket >= hash::NUM_BUCKETS
    }
}

impl<V: MatrixValue> PartialEq for EntryIter<'_, V> {
    fn eq(&self, other: &Self) -> bool {
        self.bucket == other.bucket && self.pos == other.pos
    }
}

impl<V: MatrixValue> Iterator for EntryIter<'_, V> {
    type Item = (i64, i64, V);

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.current().ok()?;
        self.advance();
        Some(item)
    }
}
