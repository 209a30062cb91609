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

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::constants::Weight;
use crate::distance::Distance;
use crate::error::{Error, Result};
use crate::matrix::Graph;

pub struct GeneratorParams {
    /// weights are drawn uniformly from [0, max_weight)
    pub max_weight: Weight,
    /// drawn weights larger than max_weight * density become unreachable, so roughly this
    /// share of all entries will be edges. Must be in [0, 1).
    pub density: f64,
    /// whether to set the diagonal to zero rather than drawing it like any other entry
    pub zero_diagonal: bool,
}

impl GeneratorParams {
    pub fn new(density: f64) -> Self {
        GeneratorParams {
            density,
            ..Default::default()
        }
    }

    fn validate(&self) -> Result<()> {
        if !(self.density >= 0.0 && self.density < 1.0) {
            return Err(Error::InvalidDensity(self.density));
        }
        if self.max_weight < 1 {
            return Err(Error::InvalidMaxWeight(self.max_weight));
        }
        Ok(())
    }
}

impl Default for GeneratorParams {
    fn default() -> Self {
        GeneratorParams {
            max_weight: 1_000_000_000,
            density: 0.75,
            zero_diagonal: true,
        }
    }
}

/// Builds a random graph with the given number of nodes, drawing all weights from `rng`
pub fn random<R: Rng>(rng: &mut R, num_nodes: usize, params: &GeneratorParams) -> Result<Graph> {
    params.validate()?;
    let threshold = params.max_weight as f64 * params.density;
    let mut graph = Graph::new(num_nodes);
    for i in 0..num_nodes {
        for j in 0..num_nodes {
            if i == j && params.zero_diagonal {
                continue;
            }
            let weight = rng.gen_range(0, params.max_weight);
            let value = if weight as f64 > threshold {
                Distance::Unreachable
            } else {
                Distance::Finite(weight)
            };
            graph.set(i, j, value);
        }
    }
    Ok(graph)
}

/// Like `random()`, but uses a fresh random number generator created from the given seed.
/// The same seed always yields the same graph.
pub fn random_with_seed(num_nodes: usize, params: &GeneratorParams, seed: u64) -> Result<Graph> {
    debug!("creating random number generator with seed: {}", seed);
    let mut rng = StdRng::seed_from_u64(seed);
    random(&mut rng, num_nodes, params)
}
