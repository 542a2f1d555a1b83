// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use std::cell::Cell;
use std::fmt;

const LONG_OPT_PREFIX: &str = "--";

/// Character that follows a letter in a [ShortSpec] if that option needs an
/// argument.
const NEEDS_ARG_MARKER: char = ':';

/// Used to specify whether an option is a "stand-alone" flag option
/// (needs no value), or whether it requires an option argument.
#[derive(Debug, PartialEq, PartialOrd, Eq, Ord, Clone, Copy)]
pub enum Need {
    /// Option is stand-alone (no argument required).
    Nothing,
    /// Option needs an argument.
    Argument,
}

impl Default for Need {
    fn default() -> Self {
        Need::Nothing
    }
}

/// Description of a single long option (`--name`).
///
/// This is the equivalent of `struct option` in `getopt_long(3)`. A table of
/// these is passed to [crate::GetOpt::parse_next]. An entry with an empty
/// name ([LongOpt::END]) ends the table: entries after it are never matched.
///
/// # Note
///
/// - All members are public for convenience.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct LongOpt<'a> {
    /// Name of the option without the leading `--`. Matched exactly
    /// (case-sensitive, no abbreviations).
    pub name: &'a str,
    /// Whether the option is a flag or requires an argument.
    pub needs: Need,
    /// If set, [LongOpt::value] is stored here when the option is found and
    /// the parser reports [crate::ParseResult::FlagSet] rather than
    /// the value.
    pub flag: Option<&'a Cell<i32>>,
    /// Value returned (or stored in [LongOpt::flag]) when the option is found.
    pub value: i32,
}

impl<'a> LongOpt<'a> {
    /// Table terminator.
    pub const END: Self = LongOpt {
        name: "",
        needs: Need::Nothing,
        flag: None,
        value: 0,
    };

    /// Create a new long option description.
    pub fn new(name: &'a str) -> Self {
        LongOpt {
            name,
            ..Default::default()
        }
    }

    /// Specify the requirement for the option.
    pub fn needs(self, needs: Need) -> Self {
        LongOpt { needs, ..self }
    }

    /// Specify where to store the value rather than returning it.
    pub fn flag(self, flag: &'a Cell<i32>) -> Self {
        LongOpt {
            flag: Some(flag),
            ..self
        }
    }

    /// Specify the value associated with the option.
    pub fn value(self, value: i32) -> Self {
        LongOpt { value, ..self }
    }

    /// Specify a short option letter as the value, so that `--name` is
    /// reported the same way as `-c`.
    pub fn short(self, c: char) -> Self {
        self.value(c as i32)
    }

    /// Returns `true` for the table terminator.
    pub fn is_end(&self) -> bool {
        self.name.is_empty()
    }
}

impl fmt::Display for LongOpt<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let value = if self.needs == Need::Argument {
            " <value>"
        } else {
            ""
        };

        write!(f, "{}{}{}", LONG_OPT_PREFIX, self.name, value)
    }
}

/// Iterate over the entries of a long option table up to (but excluding) the
/// first [LongOpt::END].
pub(crate) fn entries<'t, 'a>(
    table: &'t [LongOpt<'a>],
) -> impl Iterator<Item = (usize, &'t LongOpt<'a>)> {
    table.iter().enumerate().take_while(|(_, opt)| !opt.is_end())
}

/// Short option specification in `getopt(3)` "optstring" format.
///
/// Each character is an option letter. A letter followed by `:` requires an
/// argument. For example `"ab:c"` allows `-a`, `-b <value>` and `-c`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ShortSpec<'a>(&'a str);

impl<'a> ShortSpec<'a> {
    /// Create a new short option specification.
    pub fn new(spec: &'a str) -> Self {
        ShortSpec(spec)
    }

    /// Returns the specification text.
    pub fn as_str(&self) -> &'a str {
        self.0
    }

    /// Determine if `letter` is a recognised option, and if so whether it
    /// requires an argument.
    ///
    /// The first occurrence of the letter is used. The `:` marker itself is
    /// never an option.
    pub fn lookup(&self, letter: char) -> Option<Need> {
        if letter == NEEDS_ARG_MARKER {
            return None;
        }

        let pos = self.0.find(letter)?;
        let rest = &self.0[pos + letter.len_utf8()..];

        if rest.starts_with(NEEDS_ARG_MARKER) {
            Some(Need::Argument)
        } else {
            Some(Need::Nothing)
        }
    }
}

impl<'a> From<&'a str> for ShortSpec<'a> {
    fn from(spec: &'a str) -> Self {
        ShortSpec::new(spec)
    }
}
