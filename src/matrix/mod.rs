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

//! Sparse coordinate matrix backed by a fixed-size chained hash table.
//!
//! [`SparseMatrix`] stores one entry per non-zero cell. Writing a non-zero
//! value creates or overwrites the entry; writing zero removes it. Reading
//! any absent cell yields zero. The table keeps a running count of stored
//! entries, so [`SparseMatrix::num_nonzero`] is O(1).
//!
//! # Usage
//!
//! ```rust
//! # use sparsematrix::SparseMatrix;
//! let mut matrix = SparseMatrix::new();
//! matrix.set(1, 1, 2.0);
//! matrix.set(2, 2, 3.0);
//! matrix.set(1, 1, 0.0); // removes the entry
//! assert_eq!(matrix.num_nonzero(), 1);
//!
//! let triples: Vec<(i64, i64, f64)> = matrix.iter().collect();
//! assert_eq!(triples, vec![(2, 2, 3.0)]);
//! ```
//!
//! Iteration order follows internal hash order (bucket index ascending,
//! then chain head to tail). It is deterministic for a given matrix state
//! but unrelated to numeric row/column order.

mod iter;
mod table;
mod value;

pub use self::iter::EntryIter;
pub use self::table::SparseMatrix;
pub use self::value::MatrixValue;
