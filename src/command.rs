//! A line-oriented command interpreter driving an [`AvlTree`] of integer keys.
//!
//! Each line holds an operator, optionally followed by a key:
//!
//! | Line      | Action                                         |
//! |-----------|------------------------------------------------|
//! | `i <key>` | Insert `key`                                   |
//! | `d <key>` | Delete `key`                                   |
//! | `t`       | Print the in-order traversal, i.e. `[1, 2, 3]` |
//! | `s`       | Print the tree structure (see [`Show`])        |
//! | `m`       | Print the maximum and minimum keys             |
//!
//! A blank line (or the end of input) stops the interpreter. Lines that fail
//! to parse are reported and skipped.
//!
//! [`Show`]: crate::Show

use std::{
    io::{self, BufRead, Write},
    num::ParseIntError,
    str::FromStr,
};

use thiserror::Error;

use crate::{show::OrNone, AvlTree};

/// The key type of trees driven by a [`Command`].
pub type Key = i64;

/// Errors parsing a [`Command`] from a line of input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseCommandError {
    /// The line contains no tokens.
    #[error("no operator given")]
    Empty,

    /// The first token is not a known operator.
    #[error("Unexpected operator: {0}.")]
    UnknownOperator(String),

    /// An operator requiring a key was given none.
    #[error("Missing key for operator: {0}.")]
    MissingKey(String),

    /// The key token is not an integer.
    #[error("Invalid key {key:?}: {source}.")]
    InvalidKey {
        /// The offending token.
        key: String,
        /// The underlying integer parse failure.
        source: ParseIntError,
    },
}

/// A single interpreter command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Insert the key.
    Insert(Key),
    /// Delete the key.
    Delete(Key),
    /// Print all keys in ascending order.
    Traverse,
    /// Print the tree structure.
    Show,
    /// Print the largest and smallest key.
    MaxMin,
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.split_whitespace();
        let op = tokens.next().ok_or(ParseCommandError::Empty)?;

        Ok(match op {
            "i" => Self::Insert(parse_key(op, tokens.next())?),
            "d" => Self::Delete(parse_key(op, tokens.next())?),
            "t" => Self::Traverse,
            "s" => Self::Show,
            "m" => Self::MaxMin,
            _ => return Err(ParseCommandError::UnknownOperator(op.to_string())),
        })
    }
}

fn parse_key(op: &str, token: Option<&str>) -> Result<Key, ParseCommandError> {
    let token = token.ok_or_else(|| ParseCommandError::MissingKey(op.to_string()))?;
    token.parse().map_err(|source| ParseCommandError::InvalidKey {
        key: token.to_string(),
        source,
    })
}

impl Command {
    /// Apply this command to `tree`, writing any output to `out`.
    pub fn apply<W>(self, tree: &mut AvlTree<Key>, out: &mut W) -> io::Result<()>
    where
        W: Write,
    {
        match self {
            Self::Insert(key) => {
                tree.insert(key);
            }
            Self::Delete(key) => {
                tree.remove(&key);
            }
            Self::Traverse => writeln!(out, "{:?}", tree.traverse())?,
            Self::Show => write!(out, "{}", tree.show())?,
            Self::MaxMin => {
                writeln!(out, "{} {}", OrNone(tree.max()), OrNone(tree.min()))?;
            }
        }

        Ok(())
    }
}

/// Read commands from `input` until a blank line or the end of input,
/// applying each to an initially empty tree and writing output to `out`.
///
/// Returns the resulting tree.
pub fn run<R, W>(input: R, mut out: W) -> io::Result<AvlTree<Key>>
where
    R: BufRead,
    W: Write,
{
    let mut tree = AvlTree::new();

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            break;
        }

        match line.parse::<Command>() {
            Ok(cmd) => cmd.apply(&mut tree, &mut out)?,
            Err(e) => writeln!(out, "{e}")?,
        }
    }

    out.flush()?;
    Ok(tree)
}
