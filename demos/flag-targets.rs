// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

/// An example showing long options that set flags rather than being
/// returned, mixed with long options that behave like short ones.
use std::cell::Cell;
use std::env;
use std::process::exit;

use longopt::{GetOpt, LongOpt, Need, ParseResult, Result, ShortSpec};

const VERBOSE: i32 = 1;
const QUIET: i32 = 0;

fn usage(prog: &str, table: &[LongOpt]) {
    println!("USAGE:\n    {} [FLAGS]\n\nFLAGS:", prog);

    for opt in table.iter().take_while(|opt| !opt.is_end()) {
        println!("    {}", opt);
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let verbosity = Cell::new(QUIET);

    let table = [
        LongOpt::new("verbose").flag(&verbosity).value(VERBOSE),
        LongOpt::new("quiet").flag(&verbosity).value(QUIET),
        LongOpt::new("name").needs(Need::Argument).short('n'),
        LongOpt::new("help").short('h'),
        LongOpt::END,
    ];

    let mut argv: Vec<String> = env::args().collect();
    let prog = argv.first().cloned().unwrap_or_default();
    let mut getopt = GetOpt::new();

    let mut name = None;

    for parsed in getopt.options(&mut argv, ShortSpec::new("hn:"), &table) {
        let parsed = parsed?;

        // "-n" and "--name" (and "-h" and "--help") share a code.
        let code = parsed.result.code();

        match parsed.result {
            ParseResult::FlagSet => (),
            _ if code == 'n' as i32 => name = parsed.value,
            _ if code == 'h' as i32 => {
                usage(&prog, &table);
                return Ok(());
            }
            ParseResult::Invalid(failure) => {
                eprintln!("ERROR: {}", failure);
                exit(1);
            }
            other => unreachable!("unexpected result: {:?}", other),
        }
    }

    println!("INFO: verbose: {}", verbosity.get() == VERBOSE);
    println!("INFO: name: {:?}", name);
    println!("INFO: long option index: {:?}", getopt.long_index());

    Ok(())
}
