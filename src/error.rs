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

use thiserror::Error;

use crate::constants::Weight;

#[derive(Error, Debug)]
pub enum Error {
    #[error("could not access file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed input in line {line}: {reason}")]
    MalformedInput { line: usize, reason: String },
    #[error("matrix must be square, but row {row} has {found} entries instead of {expected}")]
    NonSquare {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("density must be in [0, 1), but was {0}")]
    InvalidDensity(f64),
    #[error("maximum weight must be positive, but was {0}")]
    InvalidMaxWeight(Weight),
}

impl Error {
    pub(crate) fn io(path: &str, source: std::io::Error) -> Self {
        Error::Io {
            path: String::from(path),
            source,
        }
    }

    pub(crate) fn malformed(line: usize, reason: String) -> Self {
        Error::MalformedInput { line, reason }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
