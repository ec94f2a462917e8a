use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum StoneError {
    #[error("cannot open input file `{}`", path.display())]
    #[diagnostic(
        code(day11::input_unavailable),
        help("pass the path of the puzzle input as the first argument")
    )]
    InputUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
