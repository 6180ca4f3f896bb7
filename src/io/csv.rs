//! Construct a graph from an edge list in a csv file, dump core and truss numbers to csv.
//!
//! Edge files are those of the Snap collection (<https://snap.stanford.edu/data/index.html>)
//! or of Konect: one edge per line, two vertex ids first, possibly followed by fields we ignore (weights, timestamps).
//! Lines beginning with # or % are comments.
//! Edges are taken as undirected, a self-loop makes the load fail.

use std::fs::OpenOptions;
use std::io::BufReader;
use std::path::Path;

use anyhow::{anyhow, Context};

use csv::{ReaderBuilder, WriterBuilder};
use serde::Serialize;

use crate::structure::cores::report::Report;
use crate::structure::graph::{GraphStore, Vertex};

/// delimiters tried in turn by [graph_from_csv_guess_delim]
pub const DELIMITERS: [u8; 3] = [b'\t', b',', b' '];

/// loads an undirected graph from an edge list with the given delimiter
pub fn graph_from_csv(filepath: &Path, delim: u8) -> anyhow::Result<GraphStore> {
    //
    let file = OpenOptions::new()
        .read(true)
        .open(filepath)
        .with_context(|| format!("graph_from_csv could not open file {:?}", filepath.as_os_str()))?;
    let mut rdr = ReaderBuilder::new()
        .delimiter(delim)
        .has_headers(false)
        .flexible(true)
        .comment(Some(b'#'))
        .from_reader(BufReader::new(file));
    //
    let mut graph = GraphStore::with_capacity(10_000);
    let mut nb_record = 0;
    let mut nb_duplicated = 0;
    for result in rdr.records() {
        let record = result?;
        let line = record.position().map_or(0, |p| p.line());
        // repeated blanks give empty fields
        let mut fields = record.iter().map(|f| f.trim()).filter(|f| !f.is_empty());
        let first = match fields.next() {
            Some(f) if !f.starts_with('%') => f,
            _ => continue,
        };
        let second = fields
            .next()
            .ok_or_else(|| anyhow!("line {} : expecting at least 2 fields", line))?;
        let u = first
            .parse::<Vertex>()
            .with_context(|| format!("line {} : could not parse vertex {:?}", line, first))?;
        let v = second
            .parse::<Vertex>()
            .with_context(|| format!("line {} : could not parse vertex {:?}", line, second))?;
        if !graph.add_edge(u, v).with_context(|| format!("line {}", line))? {
            nb_duplicated += 1;
        }
        nb_record += 1;
        if log::log_enabled!(log::Level::Trace) {
            log::trace!("{:?}", record);
        }
    }
    log::info!(
        "graph_from_csv {:?} nb records : {}, nb_vertices : {}, nb_edges : {}, duplicated edges : {}",
        filepath.as_os_str(),
        nb_record,
        graph.nb_vertices(),
        graph.nb_edges(),
        nb_duplicated
    );
    Ok(graph)
} // end of graph_from_csv

/// tries each of [DELIMITERS] and returns the graph with the delimiter that worked
pub fn graph_from_csv_guess_delim(filepath: &Path) -> anyhow::Result<(GraphStore, u8)> {
    let mut last_err = anyhow!("no delimiter tried");
    for delim in DELIMITERS {
        log::info!("trying reading {:?} with delimiter {:?}", filepath, delim as char);
        match graph_from_csv(filepath, delim) {
            Ok(graph) => return Ok((graph, delim)),
            Err(e) => {
                log::debug!("delimiter {:?} failed : {:#}", delim as char, e);
                last_err = e;
            }
        }
    }
    Err(last_err.context(format!("could not read {:?} with any delimiter", filepath)))
} // end of graph_from_csv_guess_delim

#[derive(Serialize)]
struct CoreRecord {
    vertex: Vertex,
    core: u32,
}

#[derive(Serialize)]
struct TrussRecord {
    source: Vertex,
    target: Vertex,
    truss: u32,
}

/// dumps (vertex, core) lines with a header, returns the number of records
pub fn dump_cores_csv(report: &Report, filepath: &Path) -> anyhow::Result<usize> {
    let mut wtr = WriterBuilder::new()
        .from_path(filepath)
        .with_context(|| format!("dump_cores_csv could not create {:?}", filepath))?;
    let mut nb_record = 0;
    for (vertex, core) in report.cores() {
        wtr.serialize(CoreRecord { vertex, core })?;
        nb_record += 1;
    }
    wtr.flush()?;
    log::info!("dump_cores_csv wrote {} records in {:?}", nb_record, filepath);
    Ok(nb_record)
} // end of dump_cores_csv

/// dumps (source, target, truss) lines with a header, returns the number of records
pub fn dump_truss_csv(report: &Report, filepath: &Path) -> anyhow::Result<usize> {
    let mut wtr = WriterBuilder::new()
        .from_path(filepath)
        .with_context(|| format!("dump_truss_csv could not create {:?}", filepath))?;
    let mut nb_record = 0;
    for (edge, truss) in report.trusses() {
        wtr.serialize(TrussRecord {
            source: edge.source(),
            target: edge.target(),
            truss,
        })?;
        nb_record += 1;
    }
    wtr.flush()?;
    log::info!("dump_truss_csv wrote {} records in {:?}", nb_record, filepath);
    Ok(nb_record)
} // end of dump_truss_csv

//=========================================================================

// end of mod tests
