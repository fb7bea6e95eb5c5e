//! Flat text file I/O: newline-separated rows.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

/// Read `path` and split it into rows.
///
/// Each row loses its trailing `\n` and any `\r` before it. A final newline
/// does not produce an empty last row.
pub fn read_lines(path: &Path) -> io::Result<Vec<Vec<u8>>> {
    let data = std::fs::read(path)?;
    Ok(split_lines(&data))
}

/// Split raw file bytes into rows without line terminators.
pub fn split_lines(data: &[u8]) -> Vec<Vec<u8>> {
    if data.is_empty() {
        return Vec::new();
    }
    let body = data.strip_suffix(b"\n").unwrap_or(data);
    body.split(|&b| b == b'\n')
        .map(|line| {
            let mut end = line.len();
            while end > 0 && matches!(line[end - 1], b'\r' | b'\n') {
                end -= 1;
            }
            line[..end].to_vec()
        })
        .collect()
}

/// Create or truncate `path` and write `bytes`. Returns the byte count.
pub fn write_file(path: &Path, bytes: &[u8]) -> io::Result<usize> {
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;
    file.write_all(bytes)?;
    file.flush()?;
    Ok(bytes.len())
}
