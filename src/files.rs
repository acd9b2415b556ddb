use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::Result;

/// Write the whole payload to `path`, creating or truncating the file.
///
/// Text callers pass `str::as_bytes`. There is no partial-write
/// recovery; a failure mid-write leaves a corrupt or incomplete file.
pub async fn save_file(path: impl AsRef<Path>, data: impl AsRef<[u8]>) -> Result<()> {
    tokio::fs::write(path, data).await?;
    Ok(())
}

/// Read the whole file at `path` as raw bytes.
pub async fn load_file(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    Ok(tokio::fs::read(path).await?)
}

/// Read the whole file at `path` as UTF-8 text.
pub async fn load_text(path: impl AsRef<Path>) -> Result<String> {
    Ok(tokio::fs::read_to_string(path).await?)
}

/// Snapshot `value` to disk as an opaque serialized blob.
///
/// Must stay synchronous: running this on the async scheduler could
/// interleave with another writer to the same path and corrupt the blob.
/// Call it from the owning thread, not through [`crate::run_blocking`].
pub fn serialize<T: Serialize>(value: &T, path: impl AsRef<Path>) -> Result<()> {
    let bytes = serde_json::to_vec(value)?;
    std::fs::write(path, bytes)?;
    Ok(())
}

/// Read back a blob written by [`serialize`].
///
/// Fails if the file is absent, truncated, or does not decode into `T`.
pub async fn deserialize<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let bytes = load_file(path).await?;
    Ok(serde_json::from_slice(&bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use serde::Deserialize;
    use std::collections::HashMap;

    #[tokio::test]
    async fn save_then_load_round_trips_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page.html");

        save_file(&path, "<html>tile grid</html>").await.unwrap();
        let loaded = load_text(&path).await.unwrap();
        assert_eq!(loaded, "<html>tile grid</html>");
    }

    #[tokio::test]
    async fn save_then_load_round_trips_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("payload.bin");
        let payload = vec![0u8, 159, 146, 150, 255];

        save_file(&path, &payload).await.unwrap();
        let loaded = load_file(&path).await.unwrap();
        assert_eq!(loaded, payload);
    }

    #[tokio::test]
    async fn load_missing_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_file(dir.path().join("absent.bin")).await;
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct SolverState {
        attempts: u32,
        tiles: Vec<String>,
        scores: HashMap<String, Vec<f64>>,
    }

    #[tokio::test]
    async fn serialize_then_deserialize_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.blob");

        let mut scores = HashMap::new();
        scores.insert("crosswalk".to_string(), vec![0.91, 0.12]);
        scores.insert("bus".to_string(), vec![0.05]);
        let state = SolverState {
            attempts: 3,
            tiles: vec!["0.jpg".to_string(), "4.jpg".to_string()],
            scores,
        };

        serialize(&state, &path).unwrap();
        let restored: SolverState = deserialize(&path).await.unwrap();
        assert_eq!(restored, state);
    }

    #[tokio::test]
    async fn deserialize_truncated_blob_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.blob");

        let state = SolverState {
            attempts: 1,
            tiles: vec!["1.jpg".to_string()],
            scores: HashMap::new(),
        };
        serialize(&state, &path).unwrap();

        // Chop the blob in half.
        let bytes = std::fs::read(&path).unwrap();
        std::fs::write(&path, &bytes[..bytes.len() / 2]).unwrap();

        let result: Result<SolverState> = deserialize(&path).await;
        assert!(matches!(result, Err(Error::Serialize(_))));
    }

    #[tokio::test]
    async fn deserialize_incompatible_blob_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.blob");

        serialize(&vec![1, 2, 3], &path).unwrap();
        let result: Result<SolverState> = deserialize(&path).await;
        assert!(matches!(result, Err(Error::Serialize(_))));
    }
}
