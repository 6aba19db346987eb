//! Interactive driver for an [`AvlTree`](avltree::AvlTree) of integer keys.
//!
//! Reads commands from stdin until a blank line; see [`avltree::command`].

use std::io;

fn main() -> io::Result<()> {
    avltree::command::run(io::stdin().lock(), io::stdout().lock())?;
    Ok(())
}
