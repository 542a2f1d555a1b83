// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

/// A simple example showing short options, with and without arguments.
use std::env;
use std::process::exit;

use longopt::{GetOpt, ParseResult, Result, ShortSpec};

/// Record of the options seen on the command-line.
#[derive(Clone, Debug, Default)]
struct Seen {
    // Let's keep track of the number of times particular options are
    // specified on the command-line.
    a_count: usize,
    b_count: usize,
    d_count: usize,
    v_count: usize,

    // Option arguments, in order.
    values: Vec<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut argv: Vec<String> = env::args().collect();

    // Support "-a <value>", "-b <value>", and the "-d" and "-v" flags.
    let short = ShortSpec::new("a:b:dv");

    let mut getopt = GetOpt::new();
    let mut seen = Seen::default();

    loop {
        match getopt.parse_next(&mut argv, short, &[])? {
            ParseResult::Short(c @ 'a') | ParseResult::Short(c @ 'b') => {
                if c == 'a' {
                    seen.a_count += 1;
                } else {
                    seen.b_count += 1;
                }

                if let Some(value) = getopt.optarg(&argv) {
                    seen.values.push(value.into());
                }
            }
            ParseResult::Short('d') => seen.d_count += 1,
            ParseResult::Short('v') => seen.v_count += 1,
            ParseResult::Invalid(failure) => {
                if let Some(msg) = getopt.report(&argv, &failure) {
                    eprintln!("{}", msg);
                }

                eprintln!("supported options: {}", short.as_str());

                exit(1);
            }
            ParseResult::Done => break,
            other => unreachable!("unexpected result: {:?}", other),
        }
    }

    println!("INFO: seen: {:?}", seen);
    println!("INFO: operands: {:?}", getopt.operands(&argv));

    Ok(())
}
