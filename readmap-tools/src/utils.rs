//! Line reading helpers for aligner output

use readmap_core::ReadmapResult;
use std::io::{BufRead, Split};

/// Lines of a reader with non-UTF-8 bytes decoded lossily and the line
/// terminator (`\n` or `\r\n`) stripped
pub(crate) struct LossyLines<R> {
    inner: Split<R>,
}

impl<R: BufRead> Iterator for LossyLines<R> {
    type Item = ReadmapResult<String>;

    fn next(&mut self) -> Option<Self::Item> {
        let line = self.inner.next()?;
        Some(line.map_err(Into::into).map(|mut bytes| {
            if bytes.last() == Some(&b'\r') {
                bytes.pop();
            }
            String::from_utf8_lossy(&bytes).into_owned()
        }))
    }
}

pub(crate) fn read_lines_lossy<R: BufRead>(reader: R) -> LossyLines<R> {
    LossyLines {
        inner: reader.split(b'\n'),
    }
}
