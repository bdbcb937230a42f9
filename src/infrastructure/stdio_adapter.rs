use anyhow::{Context, Result};
use tokio::fs;
use tokio::io::{self, AsyncReadExt, AsyncWriteExt};

/// Path value that selects stdin / stdout instead of a file.
pub const STDIO_PATH: &str = "-";

pub async fn read_source(path: &str) -> Result<String> {
    if path == STDIO_PATH {
        let mut raw = String::new();
        io::stdin()
            .read_to_string(&mut raw)
            .await
            .context("reading stdin")?;
        return Ok(raw);
    }
    fs::read_to_string(path)
        .await
        .with_context(|| format!("reading {path}"))
}

pub async fn write_sink(path: Option<&str>, bytes: &[u8]) -> Result<()> {
    match path {
        Some(p) if p != STDIO_PATH => fs::write(p, bytes)
            .await
            .with_context(|| format!("writing {p}")),
        _ => {
            let mut out = io::stdout();
            out.write_all(bytes).await.context("writing stdout")?;
            out.flush().await.context("flushing stdout")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn write_then_read_file_round_trip() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("graph.txt");
        let path = path.to_str().expect("utf-8 path");

        write_sink(Some(path), b"hdr\n0\n0\n").await.expect("write");
        let raw = read_source(path).await.expect("read");
        assert_eq!(raw, "hdr\n0\n0\n");
    }

    #[tokio::test]
    async fn read_source_names_missing_file() {
        let err = read_source("/definitely/not/here.txt").await.unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.txt"));
    }
}
