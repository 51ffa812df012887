use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// How much of a file is inspected.
const SNIFF_LEN: u64 = 1024;

/// Reads the start of `path` and classifies it.
///
/// # Errors
/// Returns an error if the file cannot be opened or read.
pub fn is_binary(path: &Path) -> io::Result<bool> {
    let mut sample = Vec::with_capacity(SNIFF_LEN as usize);
    File::open(path)?.take(SNIFF_LEN).read_to_end(&mut sample)?;
    Ok(looks_binary(&sample))
}

/// Heuristic over a file prefix.
///
/// Empty input, any NUL byte, or invalid UTF-8 is binary. So is a sample in
/// which more than a tenth of the characters are control characters other
/// than tab, line feed, carriage return, form feed and escape. A multi-byte
/// character cut off at the end of the sample is ignored.
#[must_use]
pub fn looks_binary(sample: &[u8]) -> bool {
    if sample.is_empty() || sample.contains(&0) {
        return true;
    }

    let text = match std::str::from_utf8(sample) {
        Ok(text) => text,
        Err(e) if e.error_len().is_none() => {
            std::str::from_utf8(&sample[..e.valid_up_to()]).unwrap_or_default()
        }
        Err(_) => return true,
    };

    let (total, control) = text.chars().fold((0usize, 0usize), |(total, control), c| {
        let suspicious = c.is_control() && !matches!(c, '\t' | '\n' | '\r' | '\x0c' | '\x1b');
        (total + 1, control + usize::from(suspicious))
    });

    control * 10 > total
}

#[cfg(test)]
#[path = "binary_tests.rs"]
mod tests;
