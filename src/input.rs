use std::path::Path;

use crate::error::ConvictionResult;
use crate::models::Candidate;

pub fn load_candidates(csv_path: &Path) -> ConvictionResult<Vec<Candidate>> {
    let reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(csv_path)?;
    read_candidates(reader)
}

fn read_candidates<R: std::io::Read>(mut reader: csv::Reader<R>) -> ConvictionResult<Vec<Candidate>> {
    let mut candidates = Vec::new();

    for result in reader.deserialize::<Candidate>() {
        let candidate = result?;
        if candidate.symbol.is_empty() {
            tracing::warn!(raw_score = candidate.raw_score, "skipping row without a symbol");
            continue;
        }
        candidates.push(candidate);
    }

    tracing::debug!(count = candidates.len(), "loaded candidates");
    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_rows_with_and_without_notes() {
        let file = write_csv("symbol,raw_score,note\nNVDA,113,earnings beat\nAMD, 90 ,\n");

        let candidates = load_candidates(file.path()).unwrap();
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].symbol, "NVDA");
        assert_eq!(candidates[0].raw_score, 113.0);
        assert_eq!(candidates[0].note, "earnings beat");
        assert_eq!(candidates[1].raw_score, 90.0);
        assert_eq!(candidates[1].note, "");
    }

    #[test]
    fn note_column_is_optional() {
        let file = write_csv("symbol,raw_score\nPLTR,-4.5\n");

        let candidates = load_candidates(file.path()).unwrap();
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].raw_score, -4.5);
    }

    #[test]
    fn skips_rows_without_symbol() {
        let file = write_csv("symbol,raw_score\n,50\nSPY,60\n");

        let candidates = load_candidates(file.path()).unwrap();
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].symbol, "SPY");
    }

    #[test]
    fn non_numeric_score_is_a_csv_error() {
        let file = write_csv("symbol,raw_score\nQQQ,high\n");

        let err = load_candidates(file.path()).unwrap_err();
        assert!(matches!(err, crate::error::ConvictionError::Csv(_)));
    }

    #[test]
    fn missing_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_candidates(&dir.path().join("absent.csv")).is_err());
    }
}
