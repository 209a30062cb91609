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

use std::io::{self, Write};

use crate::distance::Distance;
use crate::matrix::Matrix;

/// Formats a single matrix row: entries separated by a single space, `INF` for unreachable
/// entries.
pub fn format_row(row: &[Distance]) -> String {
    row.iter()
        .map(|d| d.to_string())
        .collect::<Vec<String>>()
        .join(" ")
}

/// Writes the matrix row by row, one line per row
pub fn write_matrix<W: Write>(out: &mut W, matrix: &Matrix) -> io::Result<()> {
    for row in matrix.rows() {
        writeln!(out, "{}", format_row(row))?;
    }
    Ok(())
}

/// Prints the matrix to stdout
pub fn print_matrix(matrix: &Matrix) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_matrix(&mut handle, matrix)
}
