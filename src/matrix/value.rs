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

/// Numeric cell types supported by the sparse matrix.
///
/// The zero of the type is the implicit value of every absent cell; storing
/// it removes the cell instead.
pub trait MatrixValue: Copy + PartialEq + fmt::Display + 'static {
    /// Returns the additive identity.
    fn zero() -> Self;

    /// Returns true if the value equals the additive identity.
    fn is_zero(self) -> bool;
}

macro_rules! impl_matrix_value {
    ($name:ty) => {
        impl MatrixValue for $name {
            #[inline(always)]
            fn zero() -> Self {
                0.0
            }

            #[inline(always)]
            fn is_zero(self) -> bool {
                self == 0.0
            }
        }
    };
}

impl_matrix_value!(f64);
impl_matrix_value!(f32);
