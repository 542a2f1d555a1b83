// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

#![deny(missing_docs)]
#![forbid(unsafe_code)]

//! GNU-style short and long option parsing, `getopt_long(3)` style.
//!
//! This crate is for programs that want the classic "call until done"
//! option parsing loop, including argument permutation, without relying
//! on a C library providing `getopt_long()`.
//!
//! ---
//!
//! Table of contents:
//!
//! * [Overview](#overview)
//! * [Quickstart](#quickstart)
//! * [Examples](#examples)
//! * [Details](#details)
//! * [Limitations](#limitations)
//!
//! ---
//!
//! # Overview
//!
//! Options are described by a short option specification ([ShortSpec]) and
//! a table of long options ([LongOpt]). A [GetOpt] value holds the state of
//! one parsing session over a single argument vector. Each call to
//! [GetOpt::parse_next] returns the next option found as a [ParseResult].
//!
//! # Quickstart
//!
//! 1. Describe the short options.
//!
//!    A letter followed by `:` requires an argument.
//!
//!    ```rust
//!    # use longopt::ShortSpec;
//!    #
//!    // Support "-d", "-v" and "-a <value>".
//!    let short = ShortSpec::new("da:v");
//!    ```
//!
//! 1. Describe the long options, if any.
//!
//!    ```rust
//!    # use longopt::{LongOpt, Need};
//!    #
//!    let long = [
//!        // "--verbose" is reported as if it were "-v".
//!        LongOpt::new("verbose").short('v'),
//!        // "--level <value>" is reported as 1000.
//!        LongOpt::new("level").needs(Need::Argument).value(1000),
//!    ];
//!    ```
//!
//! 1. Create a [GetOpt] and call [GetOpt::parse_next] until it returns
//!    [ParseResult::Done]:
//!
//!    ```rust
//!    # use longopt::{GetOpt, LongOpt, Need, ParseResult, ShortSpec};
//!    #
//!    # fn main() -> longopt::Result<()> {
//!    # let long = [LongOpt::new("verbose").short('v')];
//!    let mut argv: Vec<String> = vec!["prog".into(), "file".into(), "-d".into()];
//!
//!    let mut getopt = GetOpt::new();
//!
//!    loop {
//!        match getopt.parse_next(&mut argv, ShortSpec::new("da:v"), &long)? {
//!            ParseResult::Short('d') => println!("-d"),
//!            ParseResult::Done => break,
//!            other => println!("{:?}", other),
//!        }
//!    }
//!
//!    assert_eq!(getopt.operands(&argv), &["file".to_string()]);
//!    # Ok(())
//!    # }
//!    ```
//!
//! # Examples
//!
//! Long options can store a value in a flag rather than returning it, and
//! options may appear after the non-option arguments:
//!
//! ```rust
//! use std::cell::Cell;
//!
//! use longopt::{GetOpt, LongOpt, Need, ParseResult, ShortSpec};
//!
//! fn main() -> longopt::Result<()> {
//!     let verbose = Cell::new(0);
//!
//!     let long = [
//!         LongOpt::new("verbose").flag(&verbose).value(1),
//!         LongOpt::new("output").needs(Need::Argument).short('o'),
//!         LongOpt::END,
//!     ];
//!
//!     let mut argv = vec!["prog", "in.txt", "--verbose", "-o", "out.txt"];
//!
//!     let mut getopt = GetOpt::new();
//!     let mut output = None;
//!
//!     for parsed in getopt.options(&mut argv, ShortSpec::new("o:"), &long) {
//!         let parsed = parsed?;
//!
//!         match parsed.result {
//!             ParseResult::Short('o') => output = parsed.value,
//!             ParseResult::FlagSet => (),
//!             ParseResult::Invalid(failure) => panic!("{}", failure),
//!             _ => unreachable!(),
//!         }
//!     }
//!
//!     assert_eq!(verbose.get(), 1);
//!     assert_eq!(output.as_deref(), Some("out.txt"));
//!     assert_eq!(getopt.operands(&argv), &["in.txt"]);
//!
//!     Ok(())
//! }
//! ```
//!
//! For further examples, try out the programs in the `demos/` directory:
//!
//! ```bash
//! $ cargo run --example simple -- -d file -a foo -dv
//! $ cargo run --example flag-targets -- --verbose --name bob
//! $ RUST_LOG=longopt=trace cargo run --example operands -- one -a two --level 3 three
//! ```
//!
//! # Details
//!
//! - `argv[0]` is the program name and is never looked at.
//! - An argument starting with `-` (but not `--`) contains one or more short
//!   options. Flags can be clustered: `-abc` is the same as `-a -b -c`.
//! - An option requiring an argument takes the _next_ argument, whatever it
//!   looks like: with `"a:"`, `-a -b` gives `-a` the value `-b`.
//! - An argument starting with `--` is a long option, matched exactly
//!   against the [LongOpt] table in order.
//! - Options may appear anywhere on the command line. Each option found is
//!   moved in front of the non-option arguments preceding it, so that once
//!   [ParseResult::Done] is returned, the remaining arguments
//!   ([GetOpt::operands]) are the non-option arguments in their original
//!   order.
//! - The strings themselves are never modified.
//! - Failures are reported as [ParseResult::Invalid]. Its
//!   [ParseResult::code] is always `'?'`, but the [Failure] says what went
//!   wrong. The failing argument is not skipped.
//! - The parser never writes anything. Use [GetOpt::report] to format a
//!   diagnostic message, which honours [GetOpt::opterr].
//! - Parsing is logged with [`tracing`](https://crates.io/crates/tracing)
//!   at `debug` and `trace` level.
//!
//! # Limitations
//!
//! These are deliberate; the parser implements the narrower contract of
//! the `getopt_long()` replacements it mirrors.
//!
//! - Long options cannot be abbreviated (`--verb` does not match `--verbose`).
//! - Long option values must be separate arguments: `--level 3` works,
//!   `--level=3` is an unknown option.
//! - Options with optional arguments are not supported.
//! - `--` is not treated as the end of the options.
//! - An option requiring an argument cannot be clustered (`-da foo` is valid
//!   if only `a` takes an argument, `-ad foo` is not).
//! - A lone `-` is treated as an (unknown) option.

mod error;
mod getopt;
mod options;
mod scan;

pub use error::{Error, Failure, Result, INVALID_CODE};

pub use getopt::{GetOpt, Options, ParseResult, Parsed, DONE_CODE, FLAG_SET_CODE};

pub use options::{LongOpt, Need, ShortSpec};
