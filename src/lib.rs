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

//! A sparse 2D matrix that stores only non-zero entries.
//!
//! Entries are addressed by `(row, col)` integer coordinate pairs and kept in
//! a fixed-size hash table with per-bucket collision chains, giving average
//! O(1) access, insertion, and deletion. Cells that were never written, or
//! that were written back to zero, occupy no storage at all.
//!
//! # Usage
//!
//! ```rust
//! # use sparsematrix::SparseMatrix;
//! let mut matrix = SparseMatrix::new();
//! matrix.set(0, 0, 1.0);
//! matrix.set(5, 10, 4.0);
//! assert_eq!(matrix.get(5, 10), 4.0);
//! assert_eq!(matrix.get(3, 3), 0.0);
//! assert_eq!(matrix.num_nonzero(), 2);
//!
//! let transposed = matrix.transpose();
//! assert_eq!(transposed.get(10, 5), 4.0);
//! ```

pub mod error;
pub mod hash;
pub mod matrix;

pub use self::matrix::EntryIter;
pub use self::matrix::MatrixValue;
pub use self::matrix::SparseMatrix;
