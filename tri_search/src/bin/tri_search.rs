/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) 2026 Triangulation Search Contributors. All Rights Reserved.
 */
//! The minimal CLI surface of §6: `tri_search <in-file> <out-file>`.
//!
//! `in-file` holds a decimal seed count, then `maxHeight` (the simplex-count
//! ceiling `K`), then that many whitespace-separated seed signatures.
//! Argument parsing is `std::env::args()` positional reads, matching the
//! donor workspace's own binaries — no `clap`/`argh` dependency appears
//! anywhere in the retrieved pack. Only the "search" mode of §6's mode list
//! is implemented here; stats/correctness/timing modes are out of scope
//! (§1).

use std::error::Error;
use std::fmt;
use std::fs;
use std::io::stdout;
use std::sync::Arc;

use tri_manifold::Dim;
use tri_search::bfs::{BfsNode, ChannelTransport};
use tri_search::config::SearchConfig;

/// Number of worker threads for the single simulated node this binary runs
/// (§6.1: "runs the search-mode BFS of §4.5 as a single simulated node
/// (`N = 1`)"). Fixed rather than read from the environment, matching the
/// donor's own binaries, none of which read a thread-count knob.
const WORKER_THREADS: usize = 4;

#[derive(Debug)]
struct UsageError;

impl fmt::Display for UsageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "usage: tri_search <in-file> <out-file>")
    }
}

impl Error for UsageError {}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if let Err(e) = run(&args) {
        eprintln!("tri_search: {e}");
        std::process::exit(1);
    }
}

fn run(args: &[String]) -> Result<(), Box<dyn Error>> {
    if args.len() != 3 {
        return Err(Box::new(UsageError));
    }
    let input = fs::read_to_string(&args[1])?;
    let mut tokens = input.split_whitespace();

    let count: usize = tokens
        .next()
        .ok_or("in-file is missing the seed count")?
        .parse()?;
    let ceiling: usize = tokens
        .next()
        .ok_or("in-file is missing maxHeight")?
        .parse()?;
    let seeds: Vec<String> = tokens.by_ref().map(str::to_string).take(count).collect();
    if seeds.len() != count {
        return Err("in-file ends before the declared seed count".into());
    }

    let dim = infer_dim(&seeds)?;
    let config = SearchConfig::single_node(dim, ceiling, seeds);
    let transport = Arc::new(ChannelTransport::new(1));
    let node = BfsNode::new(config, transport, Box::new(stdout()));
    let report = node.run(WORKER_THREADS)?;

    let mut signatures = report.seen;
    signatures.sort();

    let mut out = format!("{}\n", signatures.len());
    for sig in &signatures {
        out.push_str(sig);
        out.push('\n');
    }
    fs::write(&args[2], out)?;
    Ok(())
}

/// `spec.md`'s file format has no explicit dimension field (the abstract
/// triangulation collaborator of §6 is dimension-agnostic by construction;
/// only the concrete decoder needs to commit to one). This binary resolves
/// that by attempting to decode the first seed as a D=3 signature, falling
/// back to D=4 on failure — recorded as a resolved open question in
/// `DESIGN.md` rather than left to guesswork at every call site.
fn infer_dim(seeds: &[String]) -> Result<Dim, Box<dyn Error>> {
    let Some(first) = seeds.first() else {
        return Ok(Dim::Three);
    };
    if tri_manifold::Triangulation::from_signature(Dim::Three, first).is_ok() {
        Ok(Dim::Three)
    } else if tri_manifold::Triangulation::from_signature(Dim::Four, first).is_ok() {
        Ok(Dim::Four)
    } else {
        Err(format!("seed signature {first:?} decodes under neither D=3 nor D=4").into())
    }
}
