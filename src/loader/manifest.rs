// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! `manifest.json`: which files hold each domain's model and index.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::LoadError;
use crate::types::Domain;

/// The only manifest layout this crate reads.
pub const MANIFEST_VERSION: u32 = 1;

/// Artifact directory table of contents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    pub version: u32,
    /// Where unknown domain selectors go. `None` rejects them.
    #[serde(default)]
    pub fallback_domain: Option<Domain>,
    pub corpora: BTreeMap<Domain, CorpusEntry>,
}

/// File names (relative to the artifact directory) for one corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorpusEntry {
    pub model: PathBuf,
    pub index: PathBuf,
    /// CRC-32 of the model file bytes, checked when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_crc32: Option<u32>,
    /// CRC-32 of the index file bytes, checked when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index_crc32: Option<u32>,
}

impl CorpusEntry {
    /// Entry using the conventional `<domain>_model.json` / `<domain>_index.json` names.
    pub fn conventional(domain: Domain) -> Self {
        Self {
            model: PathBuf::from(format!("{}_model.json", domain)),
            index: PathBuf::from(format!("{}_index.json", domain)),
            model_crc32: None,
            index_crc32: None,
        }
    }
}

impl Manifest {
    /// Parse a manifest file and check its version.
    pub fn read(path: &Path) -> Result<Self, LoadError> {
        let manifest: Manifest = super::artifact::read_json(path, None)?;
        if manifest.version != MANIFEST_VERSION {
            return Err(LoadError::UnsupportedVersion(manifest.version));
        }
        Ok(manifest)
    }

    /// The entry for `domain`, which every manifest must carry.
    pub fn entry(&self, domain: Domain) -> Result<&CorpusEntry, LoadError> {
        self.corpora
            .get(&domain)
            .ok_or(LoadError::MissingDomain(domain))
    }
}
