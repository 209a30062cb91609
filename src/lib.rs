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

#[macro_use]
extern crate log;

pub use crate::constants::*;
pub use crate::distance::Distance;
pub use crate::error::{Error, Result};
pub use crate::floyd_warshall::FloydWarshall;
pub use crate::generator::{random, random_with_seed, GeneratorParams};
pub use crate::matrix::{DistanceMatrix, Graph, Matrix};
pub use crate::printer::{print_matrix, write_matrix};

mod constants;
#[cfg(test)]
mod dijkstra;
mod distance;
mod error;
mod floyd_warshall;
mod generator;
mod matrix;
mod printer;

/// Calculates the shortest distances between all pairs of nodes of the given graph. The
/// graph is left untouched. Negative cycles are not detected, see `FloydWarshall`.
pub fn calc_distances(graph: &Graph) -> DistanceMatrix {
    let mut fw = FloydWarshall::new(graph.get_num_nodes());
    fw.prepare(graph);
    fw.into_distances()
}

/// Reads a graph from a text file, see `Matrix::from_file` for the format
pub fn load_graph(filename: &str) -> Result<Graph> {
    Matrix::from_file(filename)
}
