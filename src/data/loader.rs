use std::fs::File;
use std::io::{BufRead, BufReader};
use std::num::ParseIntError;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::model::{Dataset, Sample};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Why a results file could not be turned into a [`Dataset`].
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file is missing or could not be read.
    #[error("cannot read {}", .path.display())]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// A line is not three integers. `line` is 1-based.
    #[error("line {line}: malformed sample")]
    Parse {
        line: usize,
        #[source]
        kind: ParseErrorKind,
    },
}

#[derive(Debug, Error)]
pub enum ParseErrorKind {
    #[error("expected 3 fields, found {found}")]
    TokenCount { found: usize },
    #[error("'{token}' is not an integer")]
    InvalidInteger {
        token: String,
        #[source]
        source: ParseIntError,
    },
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load a results file: one `<grain_size> <time_taken> <task_count>` per line.
///
/// The file handle lives only for the duration of this call. Any bad line
/// fails the whole load; nothing is skipped and no partial dataset escapes.
pub fn load(path: &Path) -> Result<Dataset, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::FileNotFound {
        path: path.to_path_buf(),
        source,
    })?;
    let dataset = parse_reader(BufReader::new(file), path)?;

    log::debug!("parsed {} samples from {}", dataset.len(), path.display());
    Ok(dataset)
}

/// Parse samples from any buffered reader. `path` only names the source in
/// read errors.
///
/// `\n`, `\r\n` and a lone `\r` all end a line. A final line terminator
/// does not start another line.
pub fn parse_reader<R: BufRead>(mut reader: R, path: &Path) -> Result<Dataset, LoadError> {
    let unreadable = |source: std::io::Error| LoadError::FileNotFound {
        path: path.to_path_buf(),
        source,
    };

    let mut dataset = Dataset::new();
    let mut line_no = 0;
    let mut chunk = String::new();
    loop {
        chunk.clear();
        if reader.read_line(&mut chunk).map_err(unreadable)? == 0 {
            break;
        }
        for line in split_lines(&chunk) {
            line_no += 1;
            dataset.push(parse_line(line, line_no)?);
        }
    }
    Ok(dataset)
}

/// Same as [`parse_reader`], over text already in memory.
#[cfg(test)]
pub fn parse_str(text: &str) -> Result<Dataset, LoadError> {
    parse_reader(text.as_bytes(), Path::new("<inline>"))
}

// ---------------------------------------------------------------------------
// Line parser
// ---------------------------------------------------------------------------

/// Lines inside one `\n`-terminated chunk; a lone `\r` also ends a line.
fn split_lines(chunk: &str) -> std::str::Split<'_, char> {
    let chunk = chunk.strip_suffix('\n').unwrap_or(chunk);
    let chunk = chunk.strip_suffix('\r').unwrap_or(chunk);
    chunk.split('\r')
}

fn parse_line(line: &str, line_no: usize) -> Result<Sample, LoadError> {
    let fail = |kind: ParseErrorKind| LoadError::Parse {
        line: line_no,
        kind,
    };

    let tokens: Vec<&str> = line.split_whitespace().collect();
    let [grain_size, time_taken, task_count] = tokens[..] else {
        return Err(fail(ParseErrorKind::TokenCount {
            found: tokens.len(),
        }));
    };

    let int = |token: &str| {
        token.parse::<i64>().map_err(|source| {
            fail(ParseErrorKind::InvalidInteger {
                token: token.to_string(),
                source,
            })
        })
    };

    Ok(Sample::new(int(grain_size)?, int(time_taken)?, int(task_count)?))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;
    use crate::data::model::Metric;

    fn write_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    fn load_text(contents: &str) -> Result<Dataset, LoadError> {
        let file = write_file(contents);
        load(file.path())
    }

    fn triples(ds: &Dataset) -> Vec<(i64, i64, i64)> {
        ds.samples()
            .map(|s| (s.grain_size, s.time_taken, s.task_count))
            .collect()
    }

    #[test]
    fn loads_reference_scenario() {
        let file = write_file("1 100 50\n2 80 25\n4 60 12\n");
        let ds = load(file.path()).unwrap();
        assert_eq!(triples(&ds), vec![(1, 100, 50), (2, 80, 25), (4, 60, 12)]);
    }

    #[test]
    fn round_trips_synthetic_triples_in_file_order() {
        // Unsorted on purpose: file order must be kept.
        let input: Vec<(i64, i64, i64)> = (1..=40)
            .rev()
            .map(|g| (g * 10, 1_000_000 / g, (1200 / g) * (1200 / g)))
            .collect();
        let text: String = input
            .iter()
            .map(|&(g, t, c)| format!("{g} {t} {c}\n"))
            .collect();

        let file = write_file(&text);
        let ds = load(file.path()).unwrap();

        assert_eq!(ds.len(), input.len());
        assert_eq!(triples(&ds), input);
    }

    #[test]
    fn empty_file_is_empty_dataset() {
        let file = write_file("");
        let ds = load(file.path()).unwrap();
        assert!(ds.is_empty());
        assert!(ds.column(Metric::GrainSize).is_empty());
        assert!(ds.column(Metric::TimeTaken).is_empty());
        assert!(ds.column(Metric::TaskCount).is_empty());
    }

    #[test]
    fn missing_file_is_file_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("grain_size_times.txt");

        let err = load(&path).unwrap_err();
        match err {
            LoadError::FileNotFound { path: p, source } => {
                assert_eq!(p, path);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("expected FileNotFound, got {other:?}"),
        }
    }

    #[test]
    fn two_tokens_fail_the_whole_load() {
        let file = write_file("1 100 50\n10 20\n4 60 12\n");
        let err = load(file.path()).unwrap_err();
        assert!(matches!(
            err,
            LoadError::Parse {
                line: 2,
                kind: ParseErrorKind::TokenCount { found: 2 }
            }
        ));
    }

    #[test]
    fn non_integer_token_fails() {
        let err = load_text("10 20 abc\n").unwrap_err();
        match err {
            LoadError::Parse {
                line: 1,
                kind: ParseErrorKind::InvalidInteger { token, .. },
            } => assert_eq!(token, "abc"),
            other => panic!("expected InvalidInteger, got {other:?}"),
        }
    }

    #[test]
    fn fractional_time_is_not_an_integer() {
        let err = load_text("10 1234.5 16\n").unwrap_err();
        assert!(matches!(
            err,
            LoadError::Parse {
                kind: ParseErrorKind::InvalidInteger { .. },
                ..
            }
        ));
    }

    #[test]
    fn four_tokens_fail() {
        let err = load_text("1 2 3 4").unwrap_err();
        assert!(matches!(
            err,
            LoadError::Parse {
                kind: ParseErrorKind::TokenCount { found: 4 },
                ..
            }
        ));
    }

    #[test]
    fn blank_line_is_a_parse_error() {
        let err = load_text("1 100 50\n\n2 80 25\n").unwrap_err();
        assert!(matches!(
            err,
            LoadError::Parse {
                line: 2,
                kind: ParseErrorKind::TokenCount { found: 0 }
            }
        ));
    }

    #[test]
    fn tolerates_surrounding_whitespace_and_crlf() {
        let ds = load_text("  1\t100   50  \r\n2 80 25\r\n").unwrap();
        assert_eq!(triples(&ds), vec![(1, 100, 50), (2, 80, 25)]);
    }

    #[test]
    fn missing_trailing_newline_is_fine() {
        let ds = load_text("1 100 50\n2 80 25").unwrap();
        assert_eq!(ds.len(), 2);
    }

    #[test]
    fn error_messages_name_the_line() {
        let err = load_text("1 2 3\nx 2 3\n").unwrap_err();
        assert_eq!(err.to_string(), "line 2: malformed sample");
        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(source.to_string(), "'x' is not an integer");
    }

    #[test]
    fn lone_carriage_return_ends_a_line() {
        let ds = load_text("1 100 50\r2 80 25\r").unwrap();
        assert_eq!(triples(&ds), vec![(1, 100, 50), (2, 80, 25)]);
    }

    #[test]
    fn mixed_line_endings() {
        let ds = load_text("1 100 50\r\n2 80 25\r4 60 12\n8 40 6").unwrap();
        assert_eq!(
            triples(&ds),
            vec![(1, 100, 50), (2, 80, 25), (4, 60, 12), (8, 40, 6)]
        );
    }

    #[test]
    fn doubled_carriage_return_is_a_blank_line() {
        let err = load_text("1 100 50\r\r2 80 25\n").unwrap_err();
        assert!(matches!(
            err,
            LoadError::Parse {
                line: 2,
                kind: ParseErrorKind::TokenCount { found: 0 }
            }
        ));
    }

    #[test]
    fn invalid_utf8_is_unreadable() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"1 100 50\n\xff\xfe 2 3\n").unwrap();
        file.flush().unwrap();

        let err = load(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::FileNotFound { .. }));
    }

    #[test]
    fn in_memory_reader_matches_file() {
        let text = "1 100 50\n2 80 25\n4 60 12\n";
        assert_eq!(parse_str(text).unwrap(), load_text(text).unwrap());
    }
}
