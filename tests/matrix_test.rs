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

use sparsematrix::SparseMatrix;

#[test]
fn test_empty() {
    let matrix = SparseMatrix::<f64>::new();
    assert!(matrix.is_empty());
    assert_eq!(matrix.num_nonzero(), 0);
    assert_eq!(matrix.get(0, 0), 0.0);
    assert_eq!(matrix.get(123, 456), 0.0);
}

#[test]
fn test_basic_set_and_get() {
    let mut matrix = SparseMatrix::new();
    matrix.set(0, 0, 1.0);
    matrix.set(1, 1, 2.0);
    matrix.set(2, 2, 3.0);
    matrix.set(5, 10, 4.0);
    matrix.set(10, 5, 5.0);

    assert_eq!(matrix.get(0, 0), 1.0);
    assert_eq!(matrix.get(1, 1), 2.0);
    assert_eq!(matrix.get(2, 2), 3.0);
    assert_eq!(matrix.get(5, 10), 4.0);
    assert_eq!(matrix.get(10, 5), 5.0);
    assert_eq!(matrix.get(3, 3), 0.0);
    assert_eq!(matrix.num_nonzero(), 5);
}

#[test]
fn test_setting_zero_removes_cell() {
    let mut matrix = SparseMatrix::new();
    matrix.set(0, 0, 1.0);
    matrix.set(1, 1, 2.0);
    matrix.set(2, 2, 3.0);
    matrix.set(5, 10, 4.0);
    matrix.set(10, 5, 5.0);
    assert_eq!(matrix.num_nonzero(), 5);

    matrix.set(1, 1, 0.0);
    assert_eq!(matrix.get(1, 1), 0.0);
    assert_eq!(matrix.num_nonzero(), 4);

    // The other cells are unaffected.
    assert_eq!(matrix.get(0, 0), 1.0);
    assert_eq!(matrix.get(5, 10), 4.0);
}

#[test]
fn test_latest_write_wins() {
    let mut matrix = SparseMatrix::new();
    matrix.set(7, 7, 1.0);
    matrix.set(7, 7, 2.0);
    matrix.set(7, 7, 3.0);
    assert_eq!(matrix.get(7, 7), 3.0);
    assert_eq!(matrix.num_nonzero(), 1);
}

#[test]
fn test_count_tracks_inserts_and_removes() {
    let mut matrix = SparseMatrix::new();
    for i in 0..100 {
        matrix.set(i, 2 * i, (i + 1) as f64);
        assert_eq!(matrix.num_nonzero(), (i + 1) as usize);
    }
    for i in 0..50 {
        matrix.set(i, 2 * i, 0.0);
    }
    assert_eq!(matrix.num_nonzero(), 50);

    // Removing an absent cell changes nothing.
    matrix.set(0, 0, 0.0);
    assert_eq!(matrix.num_nonzero(), 50);
}

#[test]
fn test_many_entries_in_one_bucket() {
    // With 997 buckets, 3000 diagonal entries force chains of length >= 3.
    let mut matrix = SparseMatrix::new();
    for i in 0..3000 {
        matrix.set(i, i, i as f64 + 0.5);
    }
    assert_eq!(matrix.num_nonzero(), 3000);
    for i in 0..3000 {
        assert_eq!(matrix.get(i, i), i as f64 + 0.5);
    }

    for i in (0..3000).step_by(2) {
        matrix.set(i, i, 0.0);
    }
    assert_eq!(matrix.num_nonzero(), 1500);
    for i in 0..3000 {
        let expected = if i % 2 == 0 { 0.0 } else { i as f64 + 0.5 };
        assert_eq!(matrix.get(i, i), expected);
    }
}

#[test]
fn test_negative_coordinates_roundtrip() {
    let mut matrix = SparseMatrix::new();
    matrix.set(-10, 20, 1.0);
    matrix.set(20, -10, 2.0);
    assert_eq!(matrix.get(-10, 20), 1.0);
    assert_eq!(matrix.get(20, -10), 2.0);

    matrix.set(-10, 20, 0.0);
    assert_eq!(matrix.get(-10, 20), 0.0);
    assert_eq!(matrix.num_nonzero(), 1);
}

#[test]
fn test_render_grid() {
    let mut matrix = SparseMatrix::new();
    matrix.set(0, 1, 2.5);
    matrix.set(2, 0, -1.0);

    let rendered = matrix.render(3, 2);
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines[0], "SparseMatrix with 2 non-zero elements:");
    assert_eq!(lines[1], "0\t2.5\t");
    assert_eq!(lines[2], "0\t0\t");
    assert_eq!(lines[3], "-1\t0\t");
}
