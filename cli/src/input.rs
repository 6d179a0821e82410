use std::io::BufRead;

use thiserror::Error;

/// Rejections raised at the parsing boundary. The partitioner itself is
/// total; everything malformed stops here.
#[derive(Debug, Error)]
pub enum ParseInputError {
    #[error("failed to read input")]
    Io(#[from] std::io::Error),
    #[error("missing stone count line")]
    MissingCount,
    #[error("missing stone weights line")]
    MissingWeights,
    #[error("invalid stone count {0:?}")]
    BadCount(String),
    #[error("invalid stone weight {0:?}")]
    BadWeight(String),
    #[error("declared {declared} stones but found {found}")]
    CountMismatch { declared: usize, found: usize },
}

#[derive(Debug)]
pub struct Input {
    pub stones: Vec<u32>,
}

/// Reads the two-line judge format: a stone count, then that many
/// whitespace-separated weights.
pub fn gather_input<R: BufRead>(mut reader: R) -> Result<Input, ParseInputError> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(ParseInputError::MissingCount);
    }
    let declared: usize = line
        .trim()
        .parse()
        .map_err(|_| ParseInputError::BadCount(line.trim().to_owned()))?;

    line.clear();
    if reader.read_line(&mut line)? == 0 && declared != 0 {
        // A count of zero may legitimately end the input right here.
        return Err(ParseInputError::MissingWeights);
    }

    let stones = line
        .split_whitespace()
        .map(|token| {
            token
                .parse::<u32>()
                .map_err(|_| ParseInputError::BadWeight(token.to_owned()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    if stones.len() != declared {
        return Err(ParseInputError::CountMismatch {
            declared,
            found: stones.len(),
        });
    }

    Ok(Input { stones })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_judge_format() {
        let input = gather_input("4\n1 6 11 5\n".as_bytes()).unwrap();
        assert_eq!(input.stones, vec![1, 6, 11, 5]);
    }

    #[test]
    fn tolerates_extra_whitespace_and_no_trailing_newline() {
        let input = gather_input("3\n  10\t20  30".as_bytes()).unwrap();
        assert_eq!(input.stones, vec![10, 20, 30]);
    }

    #[test]
    fn accepts_an_empty_set() {
        assert_eq!(gather_input("0\n\n".as_bytes()).unwrap().stones, vec![]);
        assert_eq!(gather_input("0\n".as_bytes()).unwrap().stones, vec![]);
    }

    #[test]
    fn rejects_missing_lines() {
        assert!(matches!(
            gather_input("".as_bytes()),
            Err(ParseInputError::MissingCount)
        ));
        assert!(matches!(
            gather_input("5\n".as_bytes()),
            Err(ParseInputError::MissingWeights)
        ));
    }

    #[test]
    fn rejects_bad_tokens() {
        assert!(matches!(
            gather_input("x\n1 2\n".as_bytes()),
            Err(ParseInputError::BadCount(_))
        ));
        assert!(matches!(
            gather_input("2\n1 two\n".as_bytes()),
            Err(ParseInputError::BadWeight(_))
        ));
        // Negative weights are not in the domain.
        assert!(matches!(
            gather_input("1\n-3\n".as_bytes()),
            Err(ParseInputError::BadWeight(_))
        ));
    }

    #[test]
    fn rejects_count_mismatch() {
        let err = gather_input("3\n1 2\n".as_bytes()).unwrap_err();
        match err {
            ParseInputError::CountMismatch { declared, found } => {
                assert_eq!((declared, found), (3, 2));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
