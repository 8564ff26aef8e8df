// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Artifact files: raw bytes, optional CRC-32 check, JSON decode.
//!
//! Structural validation happens inside deserialisation (`CsrMatrix` and
//! `TermModel` refuse to exist in a malformed state), so a file that decodes
//! is already well-formed on its own. Cross-file checks live in `Corpus::new`.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::LoadError;
use crate::sparse::CsrMatrix;
use crate::types::Document;

/// `<domain>_index.json`: the term matrix and its document table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexArtifact {
    pub matrix: CsrMatrix,
    pub documents: Vec<Document>,
}

/// Read a file, verifying its CRC-32 when `expected` is given.
pub fn read_bytes(path: &Path, expected: Option<u32>) -> Result<Vec<u8>, LoadError> {
    let bytes = fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    if let Some(expected) = expected {
        let actual = crc32fast::hash(&bytes);
        if actual != expected {
            return Err(LoadError::Checksum {
                path: path.to_path_buf(),
                expected,
                actual,
            });
        }
    }

    Ok(bytes)
}

/// Read and decode a JSON artifact.
pub fn read_json<T: DeserializeOwned>(path: &Path, expected: Option<u32>) -> Result<T, LoadError> {
    let bytes = read_bytes(path, expected)?;
    serde_json::from_slice(&bytes).map_err(|source| LoadError::Json {
        path: path.to_path_buf(),
        source,
    })
}
