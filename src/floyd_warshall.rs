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

use crate::constants::NodeId;
use crate::distance::Distance;
use crate::matrix::{DistanceMatrix, Graph};

/// Calculates the shortest distances between all pairs of nodes.
///
/// Negative edge weights are allowed, but negative cycles are not detected: for every node
/// on such a cycle the resulting distance to itself will be negative, and distances of paths
/// running through the cycle are not meaningful.
pub struct FloydWarshall {
    num_nodes: usize,
    matrix: DistanceMatrix,
}

impl FloydWarshall {
    pub fn new(num_nodes: usize) -> Self {
        FloydWarshall {
            num_nodes,
            matrix: DistanceMatrix::new(num_nodes),
        }
    }

    /// Runs the relaxation on a private copy of the given graph. The graph itself is not
    /// modified.
    pub fn prepare(&mut self, graph: &Graph) {
        assert_eq!(
            graph.get_num_nodes(),
            self.num_nodes,
            "graph has invalid number of nodes"
        );
        debug!("running Floyd-Warshall for {} nodes", self.num_nodes);
        self.matrix = graph.clone();
        let n = self.num_nodes;
        let dist = self.matrix.cells_mut();
        // k must be the outermost loop: after iteration k, dist holds the shortest distances
        // using only intermediate nodes from 0..=k
        for k in 0..n {
            for i in 0..n {
                for j in 0..n {
                    let weight_ik = dist[i * n + k];
                    let weight_kj = dist[k * n + j];
                    if !weight_ik.is_finite() || !weight_kj.is_finite() {
                        continue;
                    }
                    let candidate = weight_ik.concat(weight_kj);
                    let idx = i * n + j;
                    if candidate < dist[idx] {
                        dist[idx] = candidate;
                    }
                }
            }
        }
    }

    pub fn calc_weight(&self, source: NodeId, target: NodeId) -> Distance {
        self.matrix.get(source, target)
    }

    pub fn get_distances(&self) -> &DistanceMatrix {
        &self.matrix
    }

    pub fn into_distances(self) -> DistanceMatrix {
        self.matrix
    }
}
