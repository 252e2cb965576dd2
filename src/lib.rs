pub mod archive;
pub mod detection;
pub mod error;
pub mod extraction;
pub mod prelude;
pub mod session;

use std::path::Path;

use crate::{archive::open_all, prelude::Result, session::SessionReport};

/// Open every archive, then run one interactive session over them on
/// the process' stdin and stdout.
pub fn repack<I, P>(paths: I) -> Result<SessionReport>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let archives = open_all(paths)?;

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();

    session::Session::new(archives).run(stdin.lock(), stdout.lock())
}
