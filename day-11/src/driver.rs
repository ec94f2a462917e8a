use std::fmt;
use std::path::Path;

use tracing::info;

use crate::blink::run_blinks;
use crate::error::StoneError;
use crate::parser;

pub const PART1_BLINKS: usize = 25;
/// Blinks run after part 1, continuing from its stones.
pub const PART2_BLINKS: usize = 25;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    pub part1: u64,
    pub part2: u64,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Part 1: {}", self.part1)?;
        write!(f, "Part 2: {}", self.part2)
    }
}

/// Reads the raw input bytes. Only I/O failures are errors; content is
/// never rejected here.
pub fn read_input(path: impl AsRef<Path>) -> Result<Vec<u8>, StoneError> {
    let path = path.as_ref();
    std::fs::read(path).map_err(|source| StoneError::InputUnavailable {
        path: path.to_path_buf(),
        source,
    })
}

#[tracing::instrument(skip(input))]
pub fn process(input: &[u8]) -> Report {
    process_rounds(input, PART1_BLINKS, PART2_BLINKS)
}

/// Runs `first` blinks and reports, then `second` more on the same stones.
#[tracing::instrument(skip(input))]
pub fn process_rounds(input: &[u8], first: usize, second: usize) -> Report {
    let stones = parser::parse(input);
    info!(
        distinct = stones.occupied(),
        population = stones.total(),
        "parsed stones"
    );

    let stones = run_blinks(stones, first);
    let part1 = stones.total();
    info!(blinks = first, part1, "part 1");

    let stones = run_blinks(stones, second);
    let part2 = stones.total();
    info!(blinks = first + second, part2, "part 2");

    Report { part1, part2 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use miette::IntoDiagnostic;
    use rstest::rstest;

    #[test_log::test]
    fn test_process() {
        let report = process(b"125 17");
        assert_eq!(55312, report.part1);
        assert!(report.part2 >= report.part1);
    }

    #[rstest]
    #[case("125 17", 6, 19, 22, 55312)]
    #[case("125 17", 0, 0, 2, 2)]
    #[case("0", 1, 1, 1, 1)]
    #[case("0", 2, 1, 1, 2)]
    #[case("", 25, 25, 0, 0)]
    fn test_process_rounds(
        #[case] input: &str,
        #[case] first: usize,
        #[case] second: usize,
        #[case] part1: u64,
        #[case] part2: u64,
    ) {
        assert_eq!(
            Report { part1, part2 },
            process_rounds(input.as_bytes(), first, second)
        );
    }

    #[test]
    fn test_trailing_garbage_is_ignored() {
        assert_eq!(
            process_rounds(b"125 17", 6, 0),
            process_rounds(b"125 17\nnot a stone 42", 6, 0)
        );
    }

    #[test]
    fn test_non_utf8_input_file() -> miette::Result<()> {
        let path = std::env::temp_dir().join(format!("day11_non_utf8_{}.txt", std::process::id()));
        std::fs::write(&path, b"125 17\n\xff\xfe garbage").into_diagnostic()?;

        let input = read_input(&path);
        std::fs::remove_file(&path).into_diagnostic()?;

        let report = process_rounds(&input?, 25, 0);
        assert_eq!(55312, report.part1);
        Ok(())
    }

    #[test]
    fn test_report_output() {
        let report = Report {
            part1: 55312,
            part2: 65601038650482,
        };
        assert_eq!(
            "Part 1: 55312\nPart 2: 65601038650482",
            report.to_string()
        );
    }

    #[test]
    fn test_missing_input() {
        let error = read_input("does/not/exist.txt").unwrap_err();
        assert!(matches!(error, StoneError::InputUnavailable { .. }));
        assert!(error.to_string().contains("does/not/exist.txt"));
    }
}
