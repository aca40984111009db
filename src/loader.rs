use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::warn;

use crate::error::Result;

/// Returned by [`load_raw_text_data`] when the requested file does not exist.
pub const SAMPLE_TEXT: &str = "
I bought a new laptop yesterday. It's very fast and efficient!
The price was $999.99, but I got a 10% discount.
I'm really happy with my purchase. Isn't technology amazing?
";

/// Read a UTF-8 text file, substituting [`SAMPLE_TEXT`] if it is missing.
///
/// Other I/O failures (permissions, invalid UTF-8, ...) are returned as errors.
pub fn load_raw_text_data<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    match fs::read_to_string(path) {
        Ok(text) => Ok(text),
        Err(err) if err.kind() == ErrorKind::NotFound => {
            warn!(path = %path.display(), "file not found, using sample text");
            Ok(SAMPLE_TEXT.to_string())
        }
        Err(err) => Err(err.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::io::Write;

    #[test]
    fn test_reads_existing_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "hello corpus").unwrap();
        assert_eq!(load_raw_text_data(file.path()).unwrap(), "hello corpus");
    }

    #[test]
    fn test_missing_file_falls_back_to_sample() {
        let dir = tempfile::tempdir().unwrap();
        let text = load_raw_text_data(dir.path().join("nope.txt")).unwrap();
        assert_eq!(text, SAMPLE_TEXT);
    }

    #[test]
    fn test_invalid_utf8_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0xff, 0xfe, 0x00]).unwrap();
        assert!(matches!(load_raw_text_data(file.path()), Err(Error::Io(_))));
    }
}
