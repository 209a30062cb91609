/*
 * Licensed to the Apache Software Foundation (ASF) under one
 * or more contributor license agreements.  See the NOTICE file
 * distributed with this work for additional information
 * regarding copyright ownership.  The ASF licenses this file
 * to you under the Apache License, Version 2.0 (the
 * "License"); you may not use this file except in compliance
 * with the License.  You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing,
 * software distributed under the License is distributed on an
 * "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
 * KIND, either express or implied.  See the License for the
 * specific language governing permissions and limitations
 * under the License.
 */

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{Weight, INF_TOKEN, WEIGHT_ZERO};

/// The length of a path, or `Unreachable` if there is no such path. `Unreachable` is
/// greater than any finite distance.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Distance {
    Finite(Weight),
    Unreachable,
}

impl Distance {
    pub fn zero() -> Self {
        Distance::Finite(WEIGHT_ZERO)
    }

    pub fn is_finite(&self) -> bool {
        match self {
            Distance::Finite(_) => true,
            Distance::Unreachable => false,
        }
    }

    pub fn weight(&self) -> Option<Weight> {
        match *self {
            Distance::Finite(w) => Some(w),
            Distance::Unreachable => None,
        }
    }

    /// Length of the path that continues this one with `other`. Unreachable if either part
    /// is unreachable. A sum that does not fit into `Weight` saturates to `Unreachable`
    /// instead of wrapping around.
    pub fn concat(self, other: Distance) -> Distance {
        match (self, other) {
            (Distance::Finite(a), Distance::Finite(b)) => match a.checked_add(b) {
                Some(sum) => Distance::Finite(sum),
                None => {
                    warn!(
                        "Sum of weights {} and {} overflows, treating it as unreachable",
                        a, b
                    );
                    Distance::Unreachable
                }
            },
            _ => Distance::Unreachable,
        }
    }
}

impl From<Weight> for Distance {
    fn from(weight: Weight) -> Self {
        Distance::Finite(weight)
    }
}

impl PartialOrd for Distance {
    fn partial_cmp(&self, other: &Distance) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Distance {
    fn cmp(&self, other: &Distance) -> Ordering {
        match (self, other) {
            (Distance::Finite(a), Distance::Finite(b)) => a.cmp(b),
            (Distance::Finite(_), Distance::Unreachable) => Ordering::Less,
            (Distance::Unreachable, Distance::Finite(_)) => Ordering::Greater,
            (Distance::Unreachable, Distance::Unreachable) => Ordering::Equal,
        }
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Distance::Finite(w) => write!(f, "{}", w),
            Distance::Unreachable => write!(f, "{}", INF_TOKEN),
        }
    }
}

impl FromStr for Distance {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == INF_TOKEN {
            Ok(Distance::Unreachable)
        } else {
            s.parse::<Weight>().map(Distance::Finite)
        }
    }
}
