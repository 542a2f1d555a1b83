// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use tracing::trace;

use crate::error::{Error, Result};

const OPT_PREFIX: char = '-';
const LONG_OPT_PREFIX: &str = "--";

/// Returns `true` if `token` looks like one or more short options (`-a`,
/// `-abc`).
///
/// # Notes
///
/// - A lone `-` is also considered a short option token, even though it
///   has no option letter. It is rejected later as an unknown option.
pub(crate) fn is_short_option(token: &str) -> bool {
    let mut chars = token.chars();

    chars.next() == Some(OPT_PREFIX) && chars.next() != Some(OPT_PREFIX)
}

/// Returns `true` if `token` looks like a long option (`--name`).
pub(crate) fn is_long_option(token: &str) -> bool {
    token.starts_with(LONG_OPT_PREFIX)
}

/// The option token closest to the cursor, with its distance from it.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub(crate) enum Nearest {
    Short(usize),
    Long(usize),
}

impl Nearest {
    /// Distance of the option token from the cursor.
    pub(crate) fn offset(&self) -> usize {
        match *self {
            Nearest::Short(offset) | Nearest::Long(offset) => offset,
        }
    }
}

/// Find the offsets of the first short option token and the first long
/// option token in `tokens`.
pub(crate) fn scan<'t, I>(tokens: I) -> (Option<usize>, Option<usize>)
where
    I: IntoIterator<Item = &'t str>,
{
    let mut short = None;
    let mut long = None;

    for (i, token) in tokens.into_iter().enumerate() {
        if short.is_none() && is_short_option(token) {
            short = Some(i);
        } else if long.is_none() && is_long_option(token) {
            long = Some(i);
        }

        if short.is_some() && long.is_some() {
            break;
        }
    }

    trace!(?short, ?long, "scanned for options");

    (short, long)
}

/// Pick whichever option token is closer. Returns [None] if there are no
/// options left.
pub(crate) fn nearest(short: Option<usize>, long: Option<usize>) -> Option<Nearest> {
    match (short, long) {
        (None, None) => None,
        (Some(s), None) => Some(Nearest::Short(s)),
        (None, Some(l)) => Some(Nearest::Long(l)),
        (Some(s), Some(l)) => {
            // A token cannot be both.
            debug_assert_ne!(s, l);

            if s < l {
                Some(Nearest::Short(s))
            } else {
                Some(Nearest::Long(l))
            }
        }
    }
}

/// Move the `count` non-option arguments starting at `start` to the end of
/// `argv` so that the option following them ends up at `start`.
///
/// The order of the moved arguments is preserved, as is the order of the
/// arguments that follow them. At least one argument (the option) must
/// follow the moved block.
pub(crate) fn permute<S>(argv: &mut Vec<S>, start: usize, count: usize) -> Result<()> {
    if count == 0 {
        return Ok(());
    }

    let len = argv.len();

    let end = match start.checked_add(count) {
        Some(end) if end < len => end,
        _ => return Err(Error::Permute { start, count, len }),
    };

    let mut scratch: Vec<S> = Vec::new();

    scratch
        .try_reserve_exact(count)
        .map_err(|_| Error::Alloc { len: count })?;

    scratch.extend(argv.drain(start..end));

    // Only reuses the capacity just released by drain().
    argv.extend(scratch);

    debug_assert_eq!(argv.len(), len);

    trace!(start, count, len, "moved non-option arguments to the end");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        #[derive(Debug)]
        struct TestData<'a> {
            token: &'a str,
            short: bool,
            long: bool,
        }

        let tests = &[
            TestData {
                token: "",
                short: false,
                long: false,
            },
            TestData {
                token: "foo",
                short: false,
                long: false,
            },
            TestData {
                token: " -a",
                short: false,
                long: false,
            },
            TestData {
                token: "-a",
                short: true,
                long: false,
            },
            TestData {
                token: "-abc",
                short: true,
                long: false,
            },
            TestData {
                token: "-a-",
                short: true,
                long: false,
            },
            TestData {
                // Lone dash
                token: "-",
                short: true,
                long: false,
            },
            TestData {
                token: "--",
                short: false,
                long: true,
            },
            TestData {
                token: "--verbose",
                short: false,
                long: true,
            },
            TestData {
                token: "---",
                short: false,
                long: true,
            },
            TestData {
                token: "-人",
                short: true,
                long: false,
            },
        ];

        for (i, d) in tests.iter().enumerate() {
            let msg = format!("test[{}]: {:?}", i, d);

            assert_eq!(is_short_option(d.token), d.short, "{}", msg);
            assert_eq!(is_long_option(d.token), d.long, "{}", msg);
        }
    }

    #[test]
    fn test_scan() {
        #[derive(Debug)]
        struct TestData<'a> {
            tokens: Vec<&'a str>,
            short: Option<usize>,
            long: Option<usize>,
        }

        let tests = &[
            TestData {
                tokens: vec![],
                short: None,
                long: None,
            },
            TestData {
                tokens: vec!["file"],
                short: None,
                long: None,
            },
            TestData {
                tokens: vec!["-a"],
                short: Some(0),
                long: None,
            },
            TestData {
                tokens: vec!["file", "--verbose"],
                short: None,
                long: Some(1),
            },
            TestData {
                tokens: vec!["file", "--verbose", "x", "-a", "-b"],
                short: Some(3),
                long: Some(1),
            },
            TestData {
                tokens: vec!["-a", "--b", "--c"],
                short: Some(0),
                long: Some(1),
            },
        ];

        for (i, d) in tests.iter().enumerate() {
            let msg = format!("test[{}]: {:?}", i, d);

            let (short, long) = scan(d.tokens.iter().copied());

            let msg = format!("{}, short: {:?}, long: {:?}", msg, short, long);

            assert_eq!(short, d.short, "{}", msg);
            assert_eq!(long, d.long, "{}", msg);
        }
    }

    #[test]
    fn test_nearest() {
        assert_eq!(nearest(None, None), None);
        assert_eq!(nearest(Some(2), None), Some(Nearest::Short(2)));
        assert_eq!(nearest(None, Some(0)), Some(Nearest::Long(0)));
        assert_eq!(nearest(Some(1), Some(3)), Some(Nearest::Short(1)));
        assert_eq!(nearest(Some(3), Some(1)), Some(Nearest::Long(1)));
        assert_eq!(nearest(Some(0), Some(4)).map(|n| n.offset()), Some(0));
    }

    #[test]
    fn test_permute() {
        #[derive(Debug)]
        struct TestData<'a> {
            argv: Vec<&'a str>,
            start: usize,
            count: usize,
            result: Result<()>,
            expected: Vec<&'a str>,
        }

        let tests = &[
            TestData {
                argv: vec!["prog", "-a"],
                start: 1,
                count: 0,
                result: Ok(()),
                expected: vec!["prog", "-a"],
            },
            TestData {
                argv: vec!["prog", "file1", "-a", "file2"],
                start: 1,
                count: 1,
                result: Ok(()),
                expected: vec!["prog", "-a", "file2", "file1"],
            },
            TestData {
                // Moved block longer than the trailing block
                argv: vec!["prog", "a", "b", "c", "-x"],
                start: 1,
                count: 3,
                result: Ok(()),
                expected: vec!["prog", "-x", "a", "b", "c"],
            },
            TestData {
                // Moved block shorter than the trailing block
                argv: vec!["prog", "a", "-x", "b", "-y", "c"],
                start: 1,
                count: 1,
                result: Ok(()),
                expected: vec!["prog", "-x", "b", "-y", "c", "a"],
            },
            TestData {
                argv: vec!["prog", "-d", "a", "b", "--level", "3"],
                start: 2,
                count: 2,
                result: Ok(()),
                expected: vec!["prog", "-d", "--level", "3", "a", "b"],
            },
            TestData {
                // Nothing would be left at the cursor
                argv: vec!["prog", "a", "b"],
                start: 1,
                count: 2,
                result: Err(Error::Permute {
                    start: 1,
                    count: 2,
                    len: 3,
                }),
                expected: vec!["prog", "a", "b"],
            },
            TestData {
                argv: vec!["prog", "a"],
                start: usize::MAX,
                count: 1,
                result: Err(Error::Permute {
                    start: usize::MAX,
                    count: 1,
                    len: 2,
                }),
                expected: vec!["prog", "a"],
            },
        ];

        for (i, d) in tests.iter().enumerate() {
            let msg = format!("test[{}]: {:?}", i, d);

            let mut argv = d.argv.clone();

            let result = permute(&mut argv, d.start, d.count);

            let msg = format!("{}, result: {:?}, argv: {:?}", msg, result, argv);

            assert_eq!(result, d.result, "{}", msg);
            assert_eq!(argv, d.expected, "{}", msg);
        }
    }
}
