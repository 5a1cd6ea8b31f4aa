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

//! Coordinate hashing for the sparse matrix bucket table.

/// Number of hash buckets. A prime, to reduce systematic collisions
/// from the pairing function.
pub const NUM_BUCKETS: usize = 997;

/// Maps a `(row, col)` coordinate pair to a single combined key using the
/// Cantor pairing function `k = (row + col) * (row + col + 1) / 2 + col`.
///
/// Coordinates are reinterpreted as `u64` and all arithmetic wraps, so
/// negative coordinates are accepted and hash deterministically. For
/// very large magnitudes the combined key wraps around; distinct pairs
/// may then share a key, which the bucket chains absorb like any other
/// collision.
#[inline]
pub fn pair(row: i64, col: i64) -> u64 {
    let k1 = row as u64;
    let k2 = col as u64;
    let sum = k1.wrapping_add(k2);
    (sum.wrapping_mul(sum.wrapping_add(1)) / 2).wrapping_add(k2)
}

/// Returns the bucket index for a coordinate pair.
#[inline]
pub fn bucket_index(row: i64, col: i64) -> usize {
    (pair(row, col) % NUM_BUCKETS as u64) as usize
}
