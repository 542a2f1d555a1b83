// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use std::borrow::Cow;
use std::iter;

use tracing::debug;

use crate::error::{Failure, Result, INVALID_CODE};
use crate::options::{entries, LongOpt, Need, ShortSpec};
use crate::scan::{self, Nearest};

const OPT_PREFIX: char = '-';
const LONG_OPT_PREFIX: &str = "--";

/// Value returned by [ParseResult::code] once all options have been parsed.
pub const DONE_CODE: i32 = -1;

/// Value returned by [ParseResult::code] when a long option stored its value
/// in a flag.
pub const FLAG_SET_CODE: i32 = 0;

/// Outcome of a single call to [GetOpt::parse_next].
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseResult {
    /// A short option (`-c`) was found.
    Short(char),
    /// A long option without a flag was found. Contains [LongOpt::value].
    Long(i32),
    /// A long option with a flag was found and its value stored there.
    FlagSet,
    /// The option at the cursor could not be handled.
    Invalid(Failure),
    /// There are no more options.
    Done,
}

impl ParseResult {
    /// Returns the `getopt_long(3)` return value for the result.
    ///
    /// All failures map to [INVALID_CODE].
    pub fn code(&self) -> i32 {
        match self {
            ParseResult::Short(c) => *c as i32,
            ParseResult::Long(value) => *value,
            ParseResult::FlagSet => FLAG_SET_CODE,
            ParseResult::Invalid(_) => INVALID_CODE,
            ParseResult::Done => DONE_CODE,
        }
    }

    /// Returns `true` if there are no more options to parse.
    pub fn is_done(&self) -> bool {
        *self == ParseResult::Done
    }
}

/// State for one parsing session over an argument vector.
///
/// This plays the role of the `optind`, `optarg`, `opterr` and `optopt`
/// globals used by `getopt_long(3)`. Use one value per argument vector.
///
/// Options may appear anywhere: each option found is moved in front of any
/// non-option arguments that preceded it, so that once parsing is done all
/// the non-option arguments ("operands") are at the end of the vector, in
/// their original order.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GetOpt {
    /// Index of the next argument to look at. Zero until the first call.
    index: usize,

    /// Bytes of the current cluster already consumed (after the dash), so
    /// for `-abc` this is 1 once `a` has been handled.
    offset: usize,

    /// Non-option arguments moved to the end by the last permutation that
    /// have not been put back yet (see [GetOpt::settle]).
    pending: usize,

    /// Index of the last option argument consumed.
    optarg: Option<usize>,

    opterr: bool,

    /// Last short option that failed.
    optopt: Option<char>,

    /// Table position of the last long option found.
    long_index: Option<usize>,

    /// Index of the first non-option argument, set when parsing is done.
    operands_start: Option<usize>,
}

impl Default for GetOpt {
    fn default() -> Self {
        GetOpt {
            index: 0,
            offset: 0,
            pending: 0,
            optarg: None,
            opterr: true,
            optopt: None,
            long_index: None,
            operands_start: None,
        }
    }
}

impl GetOpt {
    /// Create a new parser for a fresh parsing session.
    pub fn new() -> Self {
        GetOpt::default()
    }

    /// Disable diagnostics (see [GetOpt::report]).
    pub fn quiet(self) -> Self {
        GetOpt {
            opterr: false,
            ..self
        }
    }

    /// Start a new parsing session. The diagnostics setting is kept.
    pub fn reset(&mut self) {
        *self = GetOpt {
            opterr: self.opterr,
            ..Default::default()
        };
    }

    /// Index of the next argument to be parsed (`optind`).
    pub fn index(&self) -> usize {
        self.index
    }

    /// The value of the last option argument consumed (`optarg`).
    ///
    /// `argv` must be the vector being parsed.
    pub fn optarg<'v, S: AsRef<str>>(&self, argv: &'v [S]) -> Option<&'v str> {
        self.optarg.and_then(|i| argv.get(i)).map(AsRef::as_ref)
    }

    /// The last short option that could not be handled (`optopt`).
    pub fn optopt(&self) -> Option<char> {
        self.optopt
    }

    /// Returns `true` if diagnostics are enabled (`opterr`).
    pub fn opterr(&self) -> bool {
        self.opterr
    }

    /// Enable or disable diagnostics.
    pub fn set_opterr(&mut self, opterr: bool) {
        self.opterr = opterr;
    }

    /// Position in the long option table of the last long option found
    /// (`longindex`).
    pub fn long_index(&self) -> Option<usize> {
        self.long_index
    }

    /// The non-option arguments. Empty until [ParseResult::Done] has been
    /// returned.
    pub fn operands<'v, S>(&self, argv: &'v [S]) -> &'v [S] {
        self.operands_start
            .and_then(|start| argv.get(start..))
            .unwrap_or(&[])
    }

    /// Format a diagnostic for `failure` in the style of `getopt(3)`, or
    /// return [None] if diagnostics are disabled.
    ///
    /// The parser itself never prints anything.
    pub fn report<S: AsRef<str>>(&self, argv: &[S], failure: &Failure) -> Option<String> {
        if !self.opterr {
            return None;
        }

        let prog: &str = argv.first().map(|s| s.as_ref()).unwrap_or("");

        Some(format!("{}: {}", prog, failure))
    }

    /// Parse the next option in `argv`.
    ///
    /// `argv[0]` is the program name and is never parsed. Call repeatedly
    /// until [ParseResult::Done] is returned, which will then be returned
    /// for all further calls until [GetOpt::reset] is called.
    ///
    /// # Notes
    ///
    /// - A failed option is not skipped: calling again will report the same
    ///   failure.
    /// - The strings in `argv` are never modified, but their order may be.
    ///
    /// # Errors
    ///
    /// Only fails if the arguments cannot be reordered, which is fatal.
    pub fn parse_next<S: AsRef<str>>(
        &mut self,
        argv: &mut Vec<S>,
        short: ShortSpec,
        long: &[LongOpt],
    ) -> Result<ParseResult> {
        if self.index == 0 {
            self.index = 1;
            self.offset = 0;
        }

        let start = self.index;

        let nearest = match argv.get(start..) {
            Some([current, rest @ ..]) => {
                let current = self.current(current.as_ref());
                let tokens = iter::once(&*current).chain(rest.iter().map(|s| s.as_ref()));

                let (short_offset, long_offset) = scan::scan(tokens);

                scan::nearest(short_offset, long_offset)
            }
            _ => None,
        };

        let nearest = match nearest {
            Some(nearest) => nearest,
            None => return Ok(self.finish(argv.len())),
        };

        let skipped = nearest.offset();

        if skipped > 0 {
            debug_assert_eq!(self.offset, 0);

            scan::permute(argv, start, skipped)?;

            self.pending = skipped;
        }

        let result = match nearest {
            Nearest::Short(_) => self.parse_short(argv, short),
            Nearest::Long(_) => self.parse_long(argv, long),
        };

        // A cluster still being consumed needs the arguments following it
        // left where they are.
        if self.pending > 0 && self.offset == 0 {
            let pending = self.pending;

            self.pending = 0;
            self.settle(argv, start, pending)?;
        }

        debug!(index = self.index, ?result, "parsed option");

        Ok(result)
    }

    /// Iterate over the remaining options in `argv`.
    ///
    /// Iteration stops when there are no more options, after the first
    /// [ParseResult::Invalid] or after an error.
    pub fn options<'a, S: AsRef<str>>(
        &'a mut self,
        argv: &'a mut Vec<S>,
        short: ShortSpec<'a>,
        long: &'a [LongOpt<'a>],
    ) -> Options<'a, S> {
        Options {
            getopt: self,
            argv,
            short,
            long,
            finished: false,
        }
    }

    /// The argument at the cursor with any consumed cluster letters removed
    /// (`-abc` is seen as `-bc` once `a` has been handled).
    fn current<'v>(&self, token: &'v str) -> Cow<'v, str> {
        if self.offset == 0 {
            return Cow::Borrowed(token);
        }

        let rest = token.get(1 + self.offset..).unwrap_or_default();

        Cow::Owned(format!("{}{}", OPT_PREFIX, rest))
    }

    fn finish(&mut self, len: usize) -> ParseResult {
        if self.operands_start.is_none() {
            self.operands_start = Some(self.index.min(len));
        }

        self.index = len;
        self.offset = 0;
        self.pending = 0;

        debug!(index = self.index, "no more options");

        ParseResult::Done
    }

    /// Put the non-option arguments moved out of the way by the last
    /// permutation back directly after the arguments just consumed, so that
    /// operands keep their original order.
    fn settle<S>(&self, argv: &mut Vec<S>, start: usize, skipped: usize) -> Result<()> {
        let len = argv.len();

        let from = self.index.max(start + 1);

        // The skipped arguments were consumed as an option argument.
        if from + skipped > len {
            return Ok(());
        }

        scan::permute(argv, from, len - skipped - from)
    }

    fn fail(&mut self, letter: Option<char>, failure: Failure) -> ParseResult {
        if letter.is_some() {
            self.optopt = letter;
        }

        debug!(index = self.index, %failure, "invalid option");

        ParseResult::Invalid(failure)
    }

    fn parse_short<S: AsRef<str>>(&mut self, argv: &[S], short: ShortSpec) -> ParseResult {
        let token = self.current(argv[self.index].as_ref());

        let mut chars = token.chars().skip(1);

        let letter = match chars.next() {
            Some(letter) => letter,
            None => return self.fail(None, Failure::UnknownOption(token.into_owned())),
        };

        let clustered = chars.next().is_some();

        let needs = match short.lookup(letter) {
            Some(needs) => needs,
            None => {
                return self.fail(
                    Some(letter),
                    Failure::UnknownOption(format!("{}{}", OPT_PREFIX, letter)),
                )
            }
        };

        match needs {
            Need::Argument if clustered => {
                self.fail(Some(letter), Failure::ClusteredArgument(letter))
            }
            Need::Argument => {
                let value = self.index + 1;

                self.offset = 0;

                if value < argv.len() {
                    self.optarg = Some(value);
                    self.index += 2;

                    ParseResult::Short(letter)
                } else {
                    self.optarg = None;
                    self.index = argv.len();

                    self.fail(
                        Some(letter),
                        Failure::MissingArgument(format!("{}{}", OPT_PREFIX, letter)),
                    )
                }
            }
            Need::Nothing if clustered => {
                self.offset += letter.len_utf8();

                ParseResult::Short(letter)
            }
            Need::Nothing => {
                self.index += 1;
                self.offset = 0;

                ParseResult::Short(letter)
            }
        }
    }

    fn parse_long<S: AsRef<str>>(&mut self, argv: &[S], long: &[LongOpt]) -> ParseResult {
        let token = self.current(argv[self.index].as_ref());

        let name = token.get(LONG_OPT_PREFIX.len()..).unwrap_or_default();

        let (position, opt) = match entries(long).find(|(_, opt)| opt.name == name) {
            Some(found) => found,
            None => return self.fail(None, Failure::UnknownOption(token.into_owned())),
        };

        if opt.needs == Need::Argument {
            let value = self.index + 1;

            if value >= argv.len() {
                return self.fail(None, Failure::MissingArgument(token.into_owned()));
            }

            self.optarg = Some(value);
            self.index += 2;
        } else {
            self.index += 1;
        }

        self.offset = 0;
        self.long_index = Some(position);

        match opt.flag {
            Some(flag) => {
                flag.set(opt.value);

                ParseResult::FlagSet
            }
            None => ParseResult::Long(opt.value),
        }
    }
}

/// An option found by [Options].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Parsed {
    /// What was found.
    pub result: ParseResult,
    /// The option argument, if the option consumed one.
    pub value: Option<String>,
}

/// Iterator returned by [GetOpt::options].
#[derive(Debug)]
pub struct Options<'a, S> {
    getopt: &'a mut GetOpt,
    argv: &'a mut Vec<S>,
    short: ShortSpec<'a>,
    long: &'a [LongOpt<'a>],
    finished: bool,
}

impl<'a, S: AsRef<str>> Iterator for Options<'a, S> {
    type Item = Result<Parsed>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let before = self.getopt.optarg;

        let result = match self.getopt.parse_next(self.argv, self.short, self.long) {
            Ok(result) => result,
            Err(e) => {
                self.finished = true;
                return Some(Err(e));
            }
        };

        match result {
            ParseResult::Done => {
                self.finished = true;
                return None;
            }
            ParseResult::Invalid(_) => self.finished = true,
            _ => (),
        }

        let value = match self.getopt.optarg {
            Some(i) if self.getopt.optarg != before => {
                self.argv.get(i).map(|s| s.as_ref().to_string())
            }
            _ => None,
        };

        Some(Ok(Parsed { result, value }))
    }
}
