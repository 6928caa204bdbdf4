/// Common test helper functions

use std::fs;
use std::io::Read;

/// Verify that a file contains `pattern` repeated from offset 0
pub fn verify_pattern(path: &std::path::Path, pattern: &[u8]) -> std::io::Result<bool> {
    let mut file = fs::File::open(path)?;
    let mut buffer = vec![0u8; 4096];
    let mut offset = 0usize;

    loop {
        let bytes_read = file.read(&mut buffer)?;
        if bytes_read == 0 {
            break;
        }

        for &byte in &buffer[..bytes_read] {
            if byte != pattern[offset % pattern.len()] {
                return Ok(false);
            }
            offset += 1;
        }
    }

    Ok(true)
}

/// Verify an in-memory image against `pattern`, reporting the first mismatch
pub fn first_pattern_mismatch(data: &[u8], pattern: &[u8]) -> Option<usize> {
    data.iter()
        .enumerate()
        .find(|(i, &byte)| byte != pattern[i % pattern.len()])
        .map(|(i, _)| i)
}

/// Calculate Shannon entropy of a file
pub fn calculate_file_entropy(path: &std::path::Path) -> std::io::Result<f64> {
    let buffer = fs::read(path)?;
    Ok(sayonara_shred::crypto::calculate_entropy(&buffer))
}

