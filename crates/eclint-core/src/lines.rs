//! Terminator-preserving line splitting.
//!
//! Unlike [`std::io::BufRead::lines`], records keep their `\r`, `\n` or
//! `\r\n` terminator so the rules can inspect it, and the last record of the
//! stream is flagged so the final-newline rule knows where the file ends.

use std::io::{self, Read};

const CR: u8 = b'\r';
const LF: u8 = b'\n';

/// Size of each read from the underlying source.
const CHUNK_SIZE: usize = 8 * 1024;

/// Outcome of one attempt to cut a record from the front of a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Split {
    /// A record of the given length, terminator included.
    Record(usize),
    /// A terminator-less record spanning the whole remaining buffer.
    Final(usize),
    /// The buffer ends on an undecidable byte; read more input first.
    NeedMore,
    /// The stream is exhausted and nothing is left.
    End,
}

/// Cuts the next record from the front of `data`.
///
/// `at_eof` tells whether `data` holds all the remaining input. A `\r` as the
/// very last byte of a non-final buffer is never guessed at: the next byte may
/// be the `\n` of a `\r\n` pair.
#[must_use]
pub fn split_line(data: &[u8], at_eof: bool) -> Split {
    for (i, &byte) in data.iter().enumerate() {
        match byte {
            CR => {
                return match data.get(i + 1) {
                    Some(&LF) => Split::Record(i + 2),
                    Some(_) => Split::Record(i + 1),
                    None if at_eof => Split::Record(i + 1),
                    None => Split::NeedMore,
                };
            }
            LF => return Split::Record(i + 1),
            _ => {}
        }
    }

    if !at_eof {
        Split::NeedMore
    } else if data.is_empty() {
        Split::End
    } else {
        Split::Final(data.len())
    }
}

/// One record of the input stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// Zero-based ordinal of the record.
    pub index: usize,
    /// Raw bytes, terminator included.
    pub bytes: Vec<u8>,
    /// Whether the bytes consumed so far equal the declared stream size.
    pub is_final: bool,
}

impl Line {
    /// Creates a line record.
    #[must_use]
    pub fn new(index: usize, bytes: impl Into<Vec<u8>>, is_final: bool) -> Self {
        Self {
            index,
            bytes: bytes.into(),
            is_final,
        }
    }

    /// Returns the bytes without the terminator.
    #[must_use]
    pub fn content(&self) -> &[u8] {
        &self.bytes[..self.bytes.len() - self.terminator_len()]
    }

    /// Returns the terminator bytes, empty for a terminator-less record.
    #[must_use]
    pub fn terminator(&self) -> &[u8] {
        &self.bytes[self.bytes.len() - self.terminator_len()..]
    }

    /// Whether the record ends with `\r`, `\n` or `\r\n`.
    #[must_use]
    pub fn has_terminator(&self) -> bool {
        self.terminator_len() > 0
    }

    fn terminator_len(&self) -> usize {
        match self.bytes.as_slice() {
            [.., CR, LF] => 2,
            [.., CR] | [.., LF] => 1,
            _ => 0,
        }
    }
}

/// Streams a reader into [`Line`] records.
///
/// Each record is copied out of the internal buffer, so records stay valid
/// while the reader keeps going. The first read error is yielded once and
/// ends the iteration.
pub struct LineReader<R> {
    reader: R,
    buf: Vec<u8>,
    start: usize,
    at_eof: bool,
    done: bool,
    index: usize,
    consumed: u64,
    total_size: u64,
}

impl<R: Read> LineReader<R> {
    /// Wraps `reader`, whose full length is `total_size` bytes.
    pub fn new(reader: R, total_size: u64) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            start: 0,
            at_eof: false,
            done: false,
            index: 0,
            consumed: 0,
            total_size,
        }
    }

    fn fill(&mut self) -> io::Result<()> {
        if self.start > 0 {
            self.buf.drain(..self.start);
            self.start = 0;
        }

        let len = self.buf.len();
        self.buf.resize(len + CHUNK_SIZE, 0);
        loop {
            match self.reader.read(&mut self.buf[len..]) {
                Ok(0) => {
                    self.buf.truncate(len);
                    self.at_eof = true;
                    return Ok(());
                }
                Ok(n) => {
                    self.buf.truncate(len + n);
                    return Ok(());
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => {
                    self.buf.truncate(len);
                    return Err(e);
                }
            }
        }
    }

    fn emit(&mut self, len: usize) -> Line {
        let bytes = self.buf[self.start..self.start + len].to_vec();
        self.start += len;
        self.consumed += len as u64;

        let line = Line::new(self.index, bytes, self.consumed == self.total_size);
        self.index += 1;
        line
    }
}

impl<R: Read> Iterator for LineReader<R> {
    type Item = io::Result<Line>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        loop {
            match split_line(&self.buf[self.start..], self.at_eof) {
                Split::Record(len) | Split::Final(len) => return Some(Ok(self.emit(len))),
                Split::End => {
                    self.done = true;
                    return None;
                }
                Split::NeedMore => {
                    if let Err(e) = self.fill() {
                        self.done = true;
                        return Some(Err(e));
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Hands out at most one byte per read.
    struct Trickle<'a>(&'a [u8]);

    impl Read for Trickle<'_> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            match self.0.split_first() {
                Some((&b, rest)) if !buf.is_empty() => {
                    buf[0] = b;
                    self.0 = rest;
                    Ok(1)
                }
                _ => Ok(0),
            }
        }
    }

    /// Yields its bytes, then fails.
    struct Broken<'a>(&'a [u8]);

    impl Read for Broken<'_> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.0.is_empty() {
                return Err(io::Error::new(io::ErrorKind::Other, "disk on fire"));
            }
            let n = self.0.len().min(buf.len());
            buf[..n].copy_from_slice(&self.0[..n]);
            self.0 = &self.0[n..];
            Ok(n)
        }
    }

    fn collect(input: &[u8]) -> Vec<Line> {
        LineReader::new(input, input.len() as u64)
            .collect::<io::Result<Vec<_>>>()
            .unwrap()
    }

    fn records(input: &[u8]) -> Vec<Vec<u8>> {
        collect(input).into_iter().map(|l| l.bytes).collect()
    }

    #[test]
    fn split_keeps_terminators() {
        assert_eq!(split_line(b"ab\ncd", true), Split::Record(3));
        assert_eq!(split_line(b"ab\r\ncd", true), Split::Record(4));
        assert_eq!(split_line(b"ab\rcd", true), Split::Record(3));
    }

    #[test]
    fn split_requests_more_on_trailing_cr() {
        assert_eq!(split_line(b"ab\r", false), Split::NeedMore);
        assert_eq!(split_line(b"ab\r", true), Split::Record(3));
    }

    #[test]
    fn split_handles_end_of_stream() {
        assert_eq!(split_line(b"ab", false), Split::NeedMore);
        assert_eq!(split_line(b"ab", true), Split::Final(2));
        assert_eq!(split_line(b"", true), Split::End);
    }

    #[test]
    fn mixed_terminators_are_preserved() {
        let input = b"one\r\ntwo\nthree\rfour\n\n\r\rlast";
        let lines = records(input);
        assert_eq!(
            lines,
            vec![
                b"one\r\n".to_vec(),
                b"two\n".to_vec(),
                b"three\r".to_vec(),
                b"four\n".to_vec(),
                b"\n".to_vec(),
                b"\r".to_vec(),
                b"\r".to_vec(),
                b"last".to_vec(),
            ]
        );
        assert_eq!(lines.concat(), input.to_vec());
    }

    #[test]
    fn concatenation_reproduces_input() {
        let inputs: [&[u8]; 6] = [
            b"",
            b"\n",
            b"\r\n\r\n",
            b"a\rb\nc\r\nd",
            b"no terminator",
            b"\r\r\n\n\r",
        ];
        for input in inputs {
            assert_eq!(records(input).concat(), input.to_vec(), "input {input:?}");
        }
    }

    #[test]
    fn crlf_split_across_reads_stays_one_record() {
        let input = b"ab\r\ncd\r\n";
        let lines: Vec<Line> = LineReader::new(Trickle(input), input.len() as u64)
            .collect::<io::Result<_>>()
            .unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].bytes, b"ab\r\n");
        assert_eq!(lines[1].bytes, b"cd\r\n");
        assert!(lines[1].is_final);
    }

    #[test]
    fn final_record_is_flagged_once() {
        let lines = collect(b"a\nb\nc");
        let finals: Vec<usize> = lines
            .iter()
            .filter(|l| l.is_final)
            .map(|l| l.index)
            .collect();
        assert_eq!(finals, vec![2]);
    }

    #[test]
    fn final_flag_follows_declared_size() {
        let input = b"a\nb\n";
        let lines: Vec<Line> = LineReader::new(&input[..], 2)
            .collect::<io::Result<_>>()
            .unwrap();
        assert!(lines[0].is_final);
        assert!(!lines[1].is_final);
    }

    #[test]
    fn indices_are_monotonic() {
        let indices: Vec<usize> = collect(b"a\nb\r\nc\rd").iter().map(|l| l.index).collect();
        assert_eq!(indices, vec![0, 1, 2, 3]);
    }

    #[test]
    fn empty_input_has_no_records() {
        assert!(collect(b"").is_empty());
    }

    #[test]
    fn read_error_surfaces_once() {
        let mut reader = LineReader::new(Broken(b"ok\npartial"), 100);
        assert_eq!(reader.next().unwrap().unwrap().bytes, b"ok\n");
        assert!(reader.next().unwrap().is_err());
        assert!(reader.next().is_none());
    }

    #[test]
    fn line_parts() {
        let line = Line::new(0, b"text\r\n".to_vec(), false);
        assert_eq!(line.content(), b"text");
        assert_eq!(line.terminator(), b"\r\n");
        assert!(line.has_terminator());

        let last = Line::new(1, b"tail".to_vec(), true);
        assert_eq!(last.content(), b"tail");
        assert!(last.terminator().is_empty());
        assert!(!last.has_terminator());
    }
}
