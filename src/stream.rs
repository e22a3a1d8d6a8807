//! Chunked copying from source files into an output stream

use std::io::{Read, Write};
use std::path::Path;

use crate::error::{
    Result,
    fs::{output_failed, read_failed},
};

const CHUNK_SIZE: usize = 8192;

/// Copy `reader` into `out` in fixed-size chunks.
///
/// Read failures are reported against `origin`; write failures are reported as
/// output errors. Returns the number of bytes copied.
pub fn copy_source<R, W>(origin: &Path, reader: &mut R, out: &mut W) -> Result<u64>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    let mut buffer = [0u8; CHUNK_SIZE];
    let mut total = 0u64;

    loop {
        let bytes_read = match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(read_failed(origin, e)),
        };

        out.write_all(&buffer[..bytes_read])
            .map_err(output_failed)?;
        total += bytes_read as u64;
    }

    Ok(total)
}

/// Write a fixed fragment to `out`
pub fn write_fragment<W: Write + ?Sized>(out: &mut W, fragment: &[u8]) -> Result<()> {
    out.write_all(fragment).map_err(output_failed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AssetError;
    use std::io;

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::other("disk vanished"))
        }
    }

    struct ClosedWriter;

    impl Write for ClosedWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "peer closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_copy_source_copies_everything() {
        let data: Vec<u8> = (0..20_000u32).map(|i| (i % 251) as u8).collect();
        let mut out = Vec::new();
        let copied = copy_source(Path::new("big.bin"), &mut data.as_slice(), &mut out).unwrap();
        assert_eq!(copied, data.len() as u64);
        assert_eq!(out, data);
    }

    #[test]
    fn test_copy_source_read_error_names_origin() {
        let mut out = Vec::new();
        let err = copy_source(Path::new("app/scripts/main.js"), &mut FailingReader, &mut out)
            .unwrap_err();
        assert!(matches!(err, AssetError::FileReadFailed { .. }));
        assert!(err.to_string().contains("app/scripts/main.js"));
        assert!(err.to_string().contains("disk vanished"));
    }

    #[test]
    fn test_copy_source_write_error_is_output_error() {
        let err = copy_source(Path::new("a.js"), &mut &b"abc"[..], &mut ClosedWriter).unwrap_err();
        assert!(matches!(err, AssetError::OutputFailed { .. }));
    }
}
