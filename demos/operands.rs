// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

/// An example showing options intermingled with positional arguments
/// ("operands"), which are available once all options have been parsed.
///
/// Run with `RUST_LOG=longopt=trace` to see the arguments being reordered.
use std::env;
use std::process::exit;

use longopt::{GetOpt, LongOpt, Need, ParseResult, Result, ShortSpec};

const LEVEL: i32 = 1000;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let table = [LongOpt::new("level").needs(Need::Argument).value(LEVEL)];

    let mut argv: Vec<String> = env::args().collect();
    let mut getopt = GetOpt::new();

    println!("INFO: before: {:?}", argv);

    loop {
        let result = getopt.parse_next(&mut argv, ShortSpec::new("ad"), &table)?;

        match result {
            ParseResult::Done => break,
            ParseResult::Invalid(failure) => {
                if let Some(msg) = getopt.report(&argv, &failure) {
                    eprintln!("{}", msg);
                }

                exit(1);
            }
            ParseResult::Long(LEVEL) => {
                println!("INFO: level: {:?}", getopt.optarg(&argv));
            }
            other => println!("INFO: option: {:?} (code {})", other, other.code()),
        }
    }

    println!("INFO: after: {:?}", argv);

    for (i, operand) in getopt.operands(&argv).iter().enumerate() {
        println!("INFO: operand {}: {:?}", i, operand);
    }

    Ok(())
}
