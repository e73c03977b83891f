//! Corpus walking and per-file graph building.
//!
//! Enumerates note files under one or more directories, derives each
//! file's document identity from its path and feeds it to a [`Parser`],
//! accumulating every document into one shared graph.

mod alias;

pub use alias::path_to_alias;

use chrono::{DateTime, Utc};
use ignore::WalkBuilder;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::config::CorpusConfig;
use crate::error::GraphError;
use crate::graph::NoteGraph;
use crate::markdown::Parser;

/// Collect all note files under `dirs`.
///
/// Files are sorted within each directory and the per-directory lists are
/// concatenated in the order the directories were given.
pub fn collect_documents(dirs: &[PathBuf], config: &CorpusConfig) -> Vec<PathBuf> {
    let mut all = Vec::new();

    for dir in dirs {
        let walker = WalkBuilder::new(dir)
            .hidden(!config.include_hidden)
            .git_ignore(config.respect_gitignore)
            .build();

        let mut found: Vec<PathBuf> = walker
            .flatten()
            .map(|entry| entry.into_path())
            .filter(|path| path.is_file() && has_extension(path, &config.extensions))
            .collect();
        found.sort();
        all.extend(found);
    }

    all
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|ext| extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
        .unwrap_or(false)
}

/// A document that could not be added to the graph.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentFailure {
    pub path: PathBuf,
    /// Failure kind, see [`GraphError::kind`].
    pub kind: &'static str,
    pub message: String,
}

/// Outcome of indexing a corpus.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CorpusStats {
    /// Documents parsed without error.
    pub documents: usize,
    /// Documents that failed, in processing order.
    pub failures: Vec<DocumentFailure>,
    /// Total bytes of document text read.
    pub total_size: u64,
    pub last_updated: Option<DateTime<Utc>>,
}

impl CorpusStats {
    pub fn failed(&self) -> usize {
        self.failures.len()
    }
}

/// Feeds corpus files through a parser into a shared graph.
pub struct CorpusIndexer {
    parser: Arc<dyn Parser>,
    config: CorpusConfig,
}

impl CorpusIndexer {
    pub fn new(parser: Arc<dyn Parser>, config: CorpusConfig) -> Self {
        Self { parser, config }
    }

    /// Document identity for a file.
    pub fn identity_for(&self, path: &Path) -> String {
        path_to_alias(path, &self.config.namespace_marker)
    }

    /// Read one file and add its edges to `graph`. Returns bytes read.
    pub fn index_file(&self, path: &Path, graph: &mut NoteGraph) -> Result<u64, GraphError> {
        let content = fs::read_to_string(path).map_err(|e| GraphError::io(path, e))?;
        let identity = self.identity_for(path);
        debug!(
            path = %path.display(),
            format = self.parser.format_name(),
            "indexing {}",
            identity
        );
        self.parser.parse_into(&identity, &content, graph)?;
        Ok(content.len() as u64)
    }

    /// Index every path into `graph`, calling `on_file` after each one.
    ///
    /// With `continue_on_error` a failing document is logged and recorded
    /// in the stats; otherwise the first failure is returned. Either way,
    /// edges written before a failure stay in the graph.
    pub fn index_all<F>(
        &self,
        paths: &[PathBuf],
        graph: &mut NoteGraph,
        mut on_file: F,
    ) -> Result<CorpusStats, GraphError>
    where
        F: FnMut(&Path),
    {
        let mut stats = CorpusStats::default();

        for path in paths {
            let result = self.index_file(path, graph);
            on_file(path);

            match result {
                Ok(size) => {
                    stats.documents += 1;
                    stats.total_size += size;
                }
                Err(e) if self.config.continue_on_error => {
                    warn!(path = %path.display(), kind = e.kind(), "Failed to parse: {}", e);
                    stats.failures.push(DocumentFailure {
                        path: path.clone(),
                        kind: e.kind(),
                        message: e.to_string(),
                    });
                }
                Err(e) => return Err(e),
            }
        }

        stats.last_updated = Some(Utc::now());
        info!(
            documents = stats.documents,
            failed = stats.failed(),
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "indexed corpus"
        );

        Ok(stats)
    }
}
