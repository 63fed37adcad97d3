//! Character sources the lexer pulls from.
//!
//! A source hands out one character at a time and can show the next one
//! without consuming it. That single character of lookahead is all the
//! lexer ever needs.

use std::{
    collections::VecDeque,
    io::{self, BufReader, Read},
    rc::Rc,
};

use crate::{errors::errors::Error, Position};

pub trait CharSource {
    /// Returns the next character without consuming it, `None` once exhausted.
    fn peek(&mut self) -> Result<Option<char>, Error>;

    /// Consumes and returns the next character, `None` once exhausted.
    fn bump(&mut self) -> Result<Option<char>, Error>;

    /// Byte offset of the next unread character.
    fn offset(&self) -> u32;
}

/// An in-memory source over a string.
pub struct StrSource<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> StrSource<'a> {
    pub fn new(source: &'a str) -> Self {
        StrSource { source, pos: 0 }
    }

    pub fn remainder(&self) -> &'a str {
        &self.source[self.pos..]
    }
}

impl CharSource for StrSource<'_> {
    fn peek(&mut self) -> Result<Option<char>, Error> {
        Ok(self.remainder().chars().next())
    }

    fn bump(&mut self) -> Result<Option<char>, Error> {
        let next = self.remainder().chars().next();
        if let Some(c) = next {
            self.pos += c.len_utf8();
        }

        Ok(next)
    }

    fn offset(&self) -> u32 {
        self.pos as u32
    }
}

/// A source over any byte reader, decoded as UTF-8 one character at a
/// time. A byte that does not start a valid sequence reads as
/// `char::REPLACEMENT_CHARACTER` and only that one byte is consumed.
pub struct ReadSource<R: Read> {
    reader: BufReader<R>,
    pending: VecDeque<u8>,
    peeked: Option<Option<(char, u32)>>,
    pos: u32,
    file: Rc<String>,
}

impl<R: Read> ReadSource<R> {
    pub fn new(reader: R, file: Rc<String>) -> Self {
        ReadSource {
            reader: BufReader::new(reader),
            pending: VecDeque::new(),
            peeked: None,
            pos: 0,
            file,
        }
    }

    fn read_byte(&mut self) -> Result<Option<u8>, Error> {
        if let Some(byte) = self.pending.pop_front() {
            return Ok(Some(byte));
        }

        let mut buf = [0u8; 1];

        loop {
            match self.reader.read(&mut buf) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(buf[0])),
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => {
                    return Err(Error::unreadable(
                        &err,
                        Position(self.pos, Rc::clone(&self.file)),
                    ))
                }
            }
        }
    }

    /// Decodes the next character and its length in bytes.
    fn read_char(&mut self) -> Result<Option<(char, u32)>, Error> {
        let Some(lead) = self.read_byte()? else {
            return Ok(None);
        };

        let width = match lead {
            0x00..=0x7f => return Ok(Some((char::from(lead), 1))),
            0xc2..=0xdf => 2,
            0xe0..=0xef => 3,
            0xf0..=0xf4 => 4,
            _ => return Ok(Some((char::REPLACEMENT_CHARACTER, 1))),
        };

        let mut bytes = vec![lead];
        while bytes.len() < width {
            match self.read_byte()? {
                Some(byte) if (0x80..=0xbf).contains(&byte) => bytes.push(byte),
                Some(byte) => {
                    self.pending.push_front(byte);
                    break;
                }
                None => break,
            }
        }

        let decoded = std::str::from_utf8(&bytes)
            .ok()
            .and_then(|s| s.chars().next());
        match decoded {
            Some(c) if bytes.len() == width => Ok(Some((c, width as u32))),
            _ => {
                // Only the lead byte is consumed, the rest is read again
                for byte in bytes.drain(1..).rev() {
                    self.pending.push_front(byte);
                }
                Ok(Some((char::REPLACEMENT_CHARACTER, 1)))
            }
        }
    }
}

impl<R: Read> CharSource for ReadSource<R> {
    fn peek(&mut self) -> Result<Option<char>, Error> {
        if self.peeked.is_none() {
            self.peeked = Some(self.read_char()?);
        }

        Ok(self.peeked.flatten().map(|(c, _)| c))
    }

    fn bump(&mut self) -> Result<Option<char>, Error> {
        let next = match self.peeked.take() {
            Some(next) => next,
            None => self.read_char()?,
        };

        if let Some((_, width)) = next {
            self.pos += width;
        }

        Ok(next.map(|(c, _)| c))
    }

    fn offset(&self) -> u32 {
        self.pos
    }
}
