//! an executable computing core and truss decompositions of a graph given as an edge list
//! example usage:
//! kdecomp --csv "ca-GrQc.txt" --mode all --dump grqc
//! kdecomp --csv "karate.csv" --delim "," --mode truss
//!
//!  mode is core, truss or all (default). With --dump, core numbers go to prefix_cores.csv and
//!  truss numbers to prefix_truss.csv.
//!  Without --delim, tab, comma and space are tried in turn.

use std::path::Path;

use anyhow::anyhow;
use clap::{Arg, ArgMatches, Command};

use graphcores::prelude::*;

fn parse_delim(matches: &ArgMatches) -> anyhow::Result<Option<u8>> {
    match matches.value_of("delim") {
        Some("\\t") | Some("tab") => Ok(Some(b'\t')),
        Some(str) => {
            let bytes = str.as_bytes();
            if bytes.len() == 1 {
                Ok(Some(bytes[0]))
            } else {
                Err(anyhow!("delimiter must be a single character, got {:?}", str))
            }
        }
        None => Ok(None),
    }
} // end of parse_delim

fn run(matches: &ArgMatches) -> anyhow::Result<()> {
    //
    let fname = matches
        .value_of("csvfile")
        .ok_or_else(|| anyhow!("expecting a csv file"))?;
    log::info!("input file : {:?}", fname);
    let path = Path::new(fname);
    //
    let mode = match matches.value_of("mode") {
        Some(str) => str.parse::<Mode>()?,
        None => Mode::All,
    };
    let dump_name = matches.value_of("dump").map(String::from);
    let output = Output::new(mode, &dump_name);
    //
    let graph = match parse_delim(matches)? {
        Some(delim) => graph_from_csv(path, delim)?,
        None => graph_from_csv_guess_delim(path)?.0,
    };
    println!(
        "graph : nb_vertices : {}, nb_edges : {}",
        graph.nb_vertices(),
        graph.nb_edges()
    );
    //
    let report = match output.get_mode() {
        Mode::Core => core_decompose(&graph)?,
        Mode::Truss => truss_decompose(&graph)?,
        Mode::All => decompose_all(&graph)?,
    };
    if mode.with_cores() {
        println!("max core : {}", report.max_core());
    }
    if mode.with_truss() {
        println!("max truss : {}", report.max_truss());
    }
    //
    if dump_name.is_some() {
        if mode.with_cores() {
            dump_cores_csv(&report, &output.get_cores_path())?;
        }
        if mode.with_truss() {
            dump_truss_csv(&report, &output.get_truss_path())?;
        }
    }
    Ok(())
} // end of run

pub fn main() {
    //
    let _ = env_logger::builder().try_init();
    log::info!("logger initialized");
    //
    let matches = Command::new("kdecomp")
        .arg_required_else_help(true)
        .arg(
            Arg::new("csvfile")
                .long("csv")
                .takes_value(true)
                .required(true)
                .help("expecting a csv file"),
        )
        .arg(
            Arg::new("delim")
                .long("delim")
                .takes_value(true)
                .required(false)
                .help("field delimiter, a single character or \"tab\", default is to guess"),
        )
        .arg(
            Arg::new("mode")
                .long("mode")
                .takes_value(true)
                .required(false)
                .help("specify \"core\", \"truss\" or \"all\""),
        )
        .arg(
            Arg::new("dump")
                .long("dump")
                .takes_value(true)
                .required(false)
                .help("prefix of csv files receiving core and truss numbers"),
        )
        .get_matches();
    //
    if let Err(e) = run(&matches) {
        log::error!("kdecomp failed : {:?}", e);
        eprintln!("kdecomp failed : {:#}", e);
        std::process::exit(1);
    }
} // end of main
