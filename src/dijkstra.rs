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

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::constants::{NodeId, Weight};
use crate::distance::Distance;
use crate::matrix::Graph;

/// Single source shortest distances, only used to cross-check the all-pairs results.
/// Requires non-negative weights.
pub struct Dijkstra {
    num_nodes: usize,
    weights: Vec<Distance>,
    settled: Vec<bool>,
    // min-heap ordered by (weight, node)
    heap: BinaryHeap<Reverse<(Weight, NodeId)>>,
}

impl Dijkstra {
    pub fn new(num_nodes: usize) -> Self {
        Dijkstra {
            num_nodes,
            weights: vec![Distance::Unreachable; num_nodes],
            settled: vec![false; num_nodes],
            heap: BinaryHeap::new(),
        }
    }

    /// Calculates the distances from `start` to all nodes
    pub fn calc_weights(&mut self, graph: &Graph, start: NodeId) -> &[Distance] {
        assert_eq!(
            graph.get_num_nodes(),
            self.num_nodes,
            "given graph has invalid node count"
        );
        assert!(start < self.num_nodes, "invalid start node");
        self.heap.clear();
        self.weights.iter_mut().for_each(|w| *w = Distance::Unreachable);
        self.settled.iter_mut().for_each(|s| *s = false);

        self.weights[start] = Distance::zero();
        self.heap.push(Reverse((0, start)));
        while let Some(Reverse((curr_weight, curr_node))) = self.heap.pop() {
            if self.settled[curr_node] {
                // there is no decrease key operation, so we have to skip duplicates here
                continue;
            }
            self.settled[curr_node] = true;
            for (adj, edge) in graph.row(curr_node).iter().enumerate() {
                let edge_weight: Weight = match edge.weight() {
                    Some(w) => w,
                    None => continue,
                };
                assert!(edge_weight >= 0, "negative weights are not supported");
                let weight = curr_weight + edge_weight;
                if Distance::Finite(weight) < self.weights[adj] {
                    self.weights[adj] = Distance::Finite(weight);
                    self.heap.push(Reverse((weight, adj)));
                }
            }
        }
        &self.weights
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calc_weights() {
        // 0 -> 1 -> 2
        // |         ^
        // '---------'
        let mut g = Graph::new(4);
        g.set_edge(0, 1, 2);
        g.set_edge(1, 2, 3);
        g.set_edge(0, 2, 9);
        let mut dijkstra = Dijkstra::new(4);
        let weights = dijkstra.calc_weights(&g, 0).to_vec();
        assert_eq!(
            vec![
                Distance::Finite(0),
                Distance::Finite(2),
                Distance::Finite(5),
                Distance::Unreachable
            ],
            weights
        );
        let weights = dijkstra.calc_weights(&g, 2).to_vec();
        assert_eq!(Distance::Unreachable, weights[0]);
        assert_eq!(Distance::Finite(0), weights[2]);
    }

    #[test]
    fn nodes_with_equal_weights() {
        // 1 and 2 are both settled with weight 4, 3 is reached through either of them
        let mut g = Graph::new(4);
        g.set_edge(0, 1, 4);
        g.set_edge(0, 2, 4);
        g.set_edge(1, 3, 2);
        g.set_edge(2, 3, 1);
        let mut dijkstra = Dijkstra::new(4);
        let weights = dijkstra.calc_weights(&g, 0).to_vec();
        assert_eq!(Distance::Finite(4), weights[1]);
        assert_eq!(Distance::Finite(4), weights[2]);
        assert_eq!(Distance::Finite(5), weights[3]);
    }
}
