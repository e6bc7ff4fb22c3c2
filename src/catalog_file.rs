//! Catalog snapshot files.
//!
//! A snapshot is a JSONL file: one header line, one line per movie, and a
//! footer with totals. Files ending in `.br` are Brotli-compressed. Snapshots
//! let the GUI browse a previously fetched (or generated) catalog with no
//! network access.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Read, Write};

use anyhow::{anyhow, Context, Result};
use brotli::enc::BrotliEncoderParams;
use brotli::{CompressorWriter, Decompressor};
use serde::{Deserialize, Serialize};

use crate::traits::{Genre, Movie};
use crate::virtual_catalog::VirtualCatalog;

/// Current snapshot format version.
pub const SNAPSHOT_VERSION: &str = "1.0";

#[derive(Debug, Clone, Serialize, Deserialize)]
struct SnapshotHeader {
    version: String,
    name: String,
    genres: Vec<Genre>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct SnapshotFooter {
    total_movies: usize,
}

#[derive(Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum SnapshotLine {
    Header(SnapshotHeader),
    Movie(Movie),
    Footer(SnapshotFooter),
}

/// Streaming writer for catalog snapshot files.
///
/// Compression is selected by the file name: paths ending in `.br` are
/// Brotli-encoded at quality 6, which roughly halves typical snapshots.
pub struct SnapshotWriter {
    writer: Box<dyn Write>,
    movie_count: usize,
    header_written: bool,
}

impl SnapshotWriter {
    pub fn create(path: &str) -> Result<Self> {
        let file = File::create(path).with_context(|| format!("Failed to create file: {}", path))?;

        let writer: Box<dyn Write> = if path.ends_with(".br") {
            let params = BrotliEncoderParams {
                quality: 6,
                lgwin: 22,
                ..Default::default()
            };
            Box::new(CompressorWriter::with_params(BufWriter::new(file), 4096, &params))
        } else {
            Box::new(BufWriter::new(file))
        };

        Ok(Self {
            writer,
            movie_count: 0,
            header_written: false,
        })
    }

    fn write_line(&mut self, line: &SnapshotLine) -> Result<()> {
        serde_json::to_writer(&mut self.writer, line)?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    /// Writes the header line. Must be called exactly once, first.
    pub fn write_header(&mut self, name: &str, genres: Vec<Genre>) -> Result<()> {
        anyhow::ensure!(!self.header_written, "Snapshot header already written");
        self.header_written = true;
        self.write_line(&SnapshotLine::Header(SnapshotHeader {
            version: SNAPSHOT_VERSION.to_string(),
            name: name.to_string(),
            genres,
        }))
    }

    pub fn write_movie(&mut self, movie: &Movie) -> Result<()> {
        anyhow::ensure!(self.header_written, "Snapshot header must precede movies");
        self.movie_count += 1;
        self.write_line(&SnapshotLine::Movie(movie.clone()))
    }

    /// Writes the footer and flushes. The writer is consumed: a footer is
    /// terminal.
    pub fn finish(mut self) -> Result<usize> {
        let total = self.movie_count;
        self.write_line(&SnapshotLine::Footer(SnapshotFooter { total_movies: total }))?;
        self.writer.flush()?;
        Ok(total)
    }
}

/// Reads a snapshot file into a ready-to-use catalog source.
///
/// The result is a `VirtualCatalog` wrapping the loaded movie list, so
/// loaded snapshots page and search exactly like generated ones.
pub fn load_snapshot(path: &str) -> Result<VirtualCatalog> {
    let file = File::open(path).with_context(|| format!("Failed to open file: {}", path))?;

    let reader: Box<dyn Read> = if path.ends_with(".br") {
        Box::new(Decompressor::new(file, 4096))
    } else {
        Box::new(file)
    };

    let mut name = String::new();
    let mut movies: Vec<Movie> = Vec::new();
    let mut footer: Option<SnapshotFooter> = None;
    let mut saw_header = false;

    for (line_no, line) in BufReader::new(reader).lines().enumerate() {
        let line = line.with_context(|| format!("Failed to read line {} of {}", line_no + 1, path))?;
        if line.trim().is_empty() {
            continue;
        }
        let parsed: SnapshotLine = serde_json::from_str(&line)
            .with_context(|| format!("Malformed snapshot line {} in {}", line_no + 1, path))?;

        match parsed {
            SnapshotLine::Header(header) => {
                anyhow::ensure!(!saw_header, "Duplicate snapshot header in {}", path);
                anyhow::ensure!(
                    header.version == SNAPSHOT_VERSION,
                    "Unsupported snapshot version {} (expected {})",
                    header.version,
                    SNAPSHOT_VERSION
                );
                saw_header = true;
                name = header.name;
            }
            SnapshotLine::Movie(movie) => {
                anyhow::ensure!(saw_header, "Movie line before header in {}", path);
                movies.push(movie);
            }
            SnapshotLine::Footer(f) => {
                footer = Some(f);
                break;
            }
        }
    }

    if !saw_header {
        return Err(anyhow!("{} is not a catalog snapshot (no header line)", path));
    }

    if let Some(footer) = footer {
        anyhow::ensure!(
            footer.total_movies == movies.len(),
            "Snapshot {} is truncated: footer says {} movies, found {}",
            path,
            footer.total_movies,
            movies.len()
        );
    } else {
        tracing::warn!(path, movies = movies.len(), "snapshot has no footer, loading anyway");
    }

    let display_name = if name.is_empty() {
        format!("Snapshot ({})", path)
    } else {
        name
    };
    Ok(VirtualCatalog::from_movies(display_name, movies))
}
