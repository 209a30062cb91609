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

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, ErrorKind, Write};

use serde::{Deserialize, Serialize};

use crate::constants::{NodeId, Weight};
use crate::distance::Distance;
use crate::error::{Error, Result};
use crate::printer;

/// A dense square matrix holding one `Distance` for every ordered pair of nodes. Used both
/// for input graphs (direct edge weights) and for computed shortest distances.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Matrix {
    num_nodes: usize,
    cells: Vec<Distance>,
}

/// Direct edge weights, `Unreachable` where there is no edge
pub type Graph = Matrix;
/// Shortest path distances, `Unreachable` where there is no path
pub type DistanceMatrix = Matrix;

impl Matrix {
    /// Creates a graph without any edges, i.e. all entries are unreachable except for the
    /// diagonal which is zero.
    pub fn new(num_nodes: usize) -> Self {
        let mut matrix = Matrix::filled(num_nodes, Distance::Unreachable);
        for node in 0..num_nodes {
            matrix.set(node, node, Distance::zero());
        }
        matrix
    }

    pub fn filled(num_nodes: usize, value: Distance) -> Self {
        Matrix {
            num_nodes,
            cells: vec![value; num_nodes * num_nodes],
        }
    }

    /// Builds a matrix from its rows. Fails if the rows do not form a square matrix.
    pub fn from_rows(rows: Vec<Vec<Distance>>) -> Result<Self> {
        let num_nodes = rows.len();
        let mut cells = Vec::with_capacity(num_nodes * num_nodes);
        for (index, row) in rows.into_iter().enumerate() {
            if row.len() != num_nodes {
                return Err(Error::NonSquare {
                    row: index,
                    expected: num_nodes,
                    found: row.len(),
                });
            }
            cells.extend(row);
        }
        Ok(Matrix { num_nodes, cells })
    }

    /// Reads a matrix from a text file, using the following format:
    /// one line per row, containing whitespace separated entries that are either `INF` or
    /// a (possibly negative) integer. All rows must have as many entries as there are rows.
    /// Blank lines are ignored.
    pub fn from_file(filename: &str) -> Result<Self> {
        let file = File::open(filename).map_err(|e| Error::io(filename, e))?;
        Matrix::read_from(BufReader::new(file)).map_err(|e| match e {
            Error::Io { source, .. } => Error::io(filename, source),
            e => e,
        })
    }

    /// Like `from_file`, but reads from any buffered reader
    pub fn read_from<R: BufRead>(reader: R) -> Result<Self> {
        let mut rows: Vec<Vec<Distance>> = Vec::new();
        let mut last_line = 0;
        for (index, line) in reader.lines().enumerate() {
            let s = line.map_err(|e| match e.kind() {
                ErrorKind::InvalidData => {
                    Error::malformed(index + 1, format!("line is not valid UTF-8: {}", e))
                }
                _ => Error::io("<input>", e),
            })?;
            last_line = index + 1;
            if s.trim().is_empty() {
                debug!("Skipping blank line {}", index + 1);
                continue;
            }
            let row = Matrix::read_row_line(index, &s)?;
            if let Some(first) = rows.first() {
                if row.len() != first.len() {
                    return Err(Error::malformed(
                        index + 1,
                        format!(
                            "row has {} entries, but previous rows have {}",
                            row.len(),
                            first.len()
                        ),
                    ));
                }
            }
            rows.push(row);
        }
        if let Some(first) = rows.first() {
            if first.len() != rows.len() {
                return Err(Error::malformed(
                    last_line,
                    format!(
                        "matrix is not square: found {} rows with {} entries each",
                        rows.len(),
                        first.len()
                    ),
                ));
            }
        }
        Matrix::from_rows(rows)
    }

    fn read_row_line(index: usize, line: &str) -> Result<Vec<Distance>> {
        line.split_whitespace()
            .map(|token| {
                token.parse::<Distance>().map_err(|e| {
                    Error::malformed(index + 1, format!("invalid entry '{}': {}", token, e))
                })
            })
            .collect()
    }

    /// Writes the matrix to a text file, using the same format `from_file` reads
    pub fn to_file(&self, filename: &str) -> Result<()> {
        let file = File::create(filename).map_err(|e| Error::io(filename, e))?;
        let mut f = BufWriter::new(file);
        printer::write_matrix(&mut f, self)
            .and_then(|_| f.flush())
            .map_err(|e| Error::io(filename, e))
    }

    pub fn get_num_nodes(&self) -> usize {
        self.num_nodes
    }

    pub fn is_empty(&self) -> bool {
        self.num_nodes == 0
    }

    pub fn get(&self, from: NodeId, to: NodeId) -> Distance {
        self.cells[self.index(from, to)]
    }

    pub fn set(&mut self, from: NodeId, to: NodeId, value: Distance) {
        let idx = self.index(from, to);
        self.cells[idx] = value;
    }

    /// Sets the weight of the direct edge from `from` to `to`
    pub fn set_edge(&mut self, from: NodeId, to: NodeId, weight: Weight) {
        self.set(from, to, Distance::Finite(weight));
    }

    pub fn remove_edge(&mut self, from: NodeId, to: NodeId) {
        self.set(from, to, Distance::Unreachable);
    }

    pub fn row(&self, node: NodeId) -> &[Distance] {
        assert!(node < self.num_nodes, "invalid node: {}", node);
        &self.cells[node * self.num_nodes..(node + 1) * self.num_nodes]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Distance]> {
        // chunks() panics for a chunk size of zero
        self.cells.chunks(self.num_nodes.max(1))
    }

    pub fn to_rows(&self) -> Vec<Vec<Distance>> {
        self.rows().map(|r| r.to_vec()).collect()
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Distance] {
        &mut self.cells
    }

    fn index(&self, from: NodeId, to: NodeId) -> usize {
        assert!(
            from < self.num_nodes && to < self.num_nodes,
            "invalid entry: ({}, {}), number of nodes: {}",
            from,
            to,
            self.num_nodes
        );
        from * self.num_nodes + to
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.rows() {
            writeln!(f, "{}", printer::format_row(row))?;
        }
        Ok(())
    }
}

impl fmt::Debug for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self)
    }
}
