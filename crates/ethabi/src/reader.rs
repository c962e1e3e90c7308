use num_bigint::BigUint;
use num_traits::ToPrimitive;
use crate::writer::WORD_SIZE;
use crate::Error;

/// Decoding options.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Accept a trailing byte string that was encoded without its padding.
    pub allow_loose: bool,
}

/// Cursor over an immutable word aligned buffer.
#[derive(Clone, Debug)]
pub struct Reader<'a> {
    data: &'a [u8],
    allow_loose: bool,
    consumed: usize,
}

impl<'a> Reader<'a> {
    pub fn new(data: &'a [u8], allow_loose: bool) -> Self {
        Self { data, allow_loose, consumed: 0 }
    }

    pub fn with_options(data: &'a [u8], options: &DecodeOptions) -> Self {
        Self::new(data, options.allow_loose)
    }

    pub fn allow_loose(&self) -> bool {
        self.allow_loose
    }

    pub fn data(&self) -> Vec<u8> {
        self.data.to_vec()
    }

    pub fn data_length(&self) -> usize {
        self.data.len()
    }

    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// A fresh reader whose origin is `offset` bytes past the current cursor.
    pub fn sub_reader(&self, offset: usize) -> Result<Reader<'a>, Error> {
        let begin = self.consumed.checked_add(offset)
            .filter(|begin| *begin <= self.data.len())
            .ok_or_else(|| Error::overrun("data out-of-bounds", self.data, self.consumed.saturating_add(offset)))?;

        Ok(Reader::new(&self.data[begin..], self.allow_loose))
    }

    fn peek_bytes(&self, length: usize, loose: bool) -> Result<&'a [u8], Error> {
        let available = self.data.len() - self.consumed;
        let mut aligned = length.div_ceil(WORD_SIZE).saturating_mul(WORD_SIZE);

        if aligned > available {
            if loose && self.allow_loose && length <= available {
                log::trace!("loose read of {} bytes at {} (aligned {})", length, self.consumed, aligned);
                aligned = length;
            } else {
                return Err(Error::overrun("data out-of-bounds", self.data, self.consumed.saturating_add(aligned)));
            }
        }

        Ok(&self.data[self.consumed..self.consumed + aligned])
    }

    /// Reads `length` bytes, consuming the word padding that follows them.
    pub fn read_bytes(&mut self, length: usize, loose: bool) -> Result<&'a [u8], Error> {
        let bytes = self.peek_bytes(length, loose)?;
        self.consumed += bytes.len();
        Ok(&bytes[..length])
    }

    pub fn read_value(&mut self) -> Result<BigUint, Error> {
        let word = self.read_bytes(WORD_SIZE, false)?;
        Ok(BigUint::from_bytes_be(word))
    }

    pub fn read_index(&mut self) -> Result<usize, Error> {
        let value = self.read_value()?;
        value.to_usize().ok_or_else(|| Error::NumericFault {
            operation: "read_index",
            reason: format!("0x{:x} does not fit an index", value),
        })
    }
}
