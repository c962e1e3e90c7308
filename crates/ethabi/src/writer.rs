use num_bigint::BigUint;
use crate::Error;

pub const WORD_SIZE: usize = 32;

const PADDING: [u8; WORD_SIZE] = [0u8; WORD_SIZE];

/// Token for a word reserved by [`Writer::write_updatable_value`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct UpdatableWord(usize);

/// Append-only buffer of word aligned chunks.
#[derive(Clone, Debug, Default)]
pub struct Writer {
    chunks: Vec<Vec<u8>>,
    length: usize,
}

impl Writer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    pub fn data(&self) -> Vec<u8> {
        self.chunks.concat()
    }

    fn write_data(&mut self, data: Vec<u8>) -> usize {
        let length = data.len();
        self.chunks.push(data);
        self.length += length;
        length
    }

    /// Appends the other writer's content as a single chunk. Its content is
    /// already word aligned, so no padding is added.
    pub fn append_writer(&mut self, writer: &Writer) -> usize {
        self.write_data(writer.data())
    }

    /// Appends `bytes` right-padded with zeros to the next word boundary.
    pub fn write_bytes(&mut self, bytes: &[u8]) -> usize {
        if bytes.is_empty() {
            return 0;
        }

        let mut data = bytes.to_vec();
        let remainder = data.len() % WORD_SIZE;
        if remainder != 0 {
            data.extend_from_slice(&PADDING[remainder..]);
        }
        self.write_data(data)
    }

    /// Appends `value` as one big-endian word.
    pub fn write_value(&mut self, value: &BigUint) -> Result<usize, Error> {
        let word = to_word(value)?;
        Ok(self.write_data(word))
    }

    /// Reserves one zero word to be filled in later with [`Writer::update`].
    pub fn write_updatable_value(&mut self) -> UpdatableWord {
        let index = self.chunks.len();
        self.write_data(PADDING.to_vec());
        UpdatableWord(index)
    }

    pub fn update(&mut self, word: UpdatableWord, value: &BigUint) -> Result<(), Error> {
        let UpdatableWord(index) = word;
        let chunk = self.chunks.get_mut(index).ok_or_else(|| Error::InvalidArgument {
            argument: "updatable word",
            reason: format!("no reserved word at chunk {}", index),
        })?;
        *chunk = to_word(value)?;
        Ok(())
    }
}

fn to_word(value: &BigUint) -> Result<Vec<u8>, Error> {
    let bytes = value.to_bytes_be();
    if bytes.len() > WORD_SIZE {
        return Err(Error::BufferOverrun {
            reason: "value out-of-bounds",
            length: WORD_SIZE,
            offset: bytes.len(),
            buffer: bytes,
        });
    }

    let mut word = Vec::with_capacity(WORD_SIZE);
    word.extend_from_slice(&PADDING[bytes.len()..]);
    word.extend_from_slice(&bytes);
    Ok(word)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_write_value() {
        let mut writer = Writer::new();
        assert_eq!(writer.write_value(&0xFEEDFACE_u32.into()).unwrap(), 32);
        assert_eq!(
            writer.data(),
            hex::decode("00000000000000000000000000000000000000000000000000000000FEEDFACE").unwrap(),
        );
    }

    #[test]
    fn test_write_zero_value() {
        let mut writer = Writer::new();
        writer.write_value(&BigUint::from(0_u8)).unwrap();
        assert_eq!(writer.data(), vec![0u8; 32]);
    }

    #[test]
    fn test_write_value_out_of_bounds() {
        let mut writer = Writer::new();
        let value = BigUint::from(1_u8) << 256;
        let error = writer.write_value(&value).unwrap_err();
        assert!(error.is_buffer_overrun());
        assert!(writer.is_empty());
    }

    #[test]
    fn test_write_bytes_padding() {
        let mut writer = Writer::new();
        assert_eq!(writer.write_bytes(b"ab"), 32);
        assert_eq!(
            writer.data(),
            hex::decode("6162000000000000000000000000000000000000000000000000000000000000").unwrap(),
        );

        assert_eq!(writer.write_bytes(&[0x11; 32]), 32);
        assert_eq!(writer.write_bytes(&[0x22; 33]), 64);
        assert_eq!(writer.write_bytes(&[]), 0);
        assert_eq!(writer.len(), 128);
    }

    #[test]
    fn test_updatable_value() {
        let mut writer = Writer::new();
        writer.write_value(&1_u8.into()).unwrap();
        let word = writer.write_updatable_value();
        writer.write_value(&3_u8.into()).unwrap();
        assert_eq!(writer.len(), 96);

        writer.update(word, &0x40_u8.into()).unwrap();
        assert_eq!(
            writer.data(),
            hex::decode(concat!(
                "0000000000000000000000000000000000000000000000000000000000000001",
                "0000000000000000000000000000000000000000000000000000000000000040",
                "0000000000000000000000000000000000000000000000000000000000000003",
            )).unwrap(),
        );
    }

    #[test]
    fn test_append_writer() {
        let mut inner = Writer::new();
        inner.write_value(&7_u8.into()).unwrap();
        inner.write_bytes(b"xyz");

        let mut writer = Writer::new();
        writer.write_value(&1_u8.into()).unwrap();
        assert_eq!(writer.append_writer(&inner), 64);
        assert_eq!(writer.len(), 96);
        assert_eq!(&writer.data()[32..], inner.data().as_slice());
    }

    proptest! {
        #[test]
        fn write_bytes_is_word_aligned(bytes in prop::collection::vec(any::<u8>(), 0..200)) {
            let mut writer = Writer::new();
            let written = writer.write_bytes(&bytes);
            let expected = (bytes.len() + WORD_SIZE - 1) / WORD_SIZE * WORD_SIZE;
            prop_assert_eq!(written, expected);
            prop_assert_eq!(writer.len(), expected);
            prop_assert_eq!(&writer.data()[..bytes.len()], bytes.as_slice());
        }

        #[test]
        fn write_value_is_one_word(value in any::<u128>()) {
            let mut writer = Writer::new();
            prop_assert_eq!(writer.write_value(&value.into()).unwrap(), WORD_SIZE);
            prop_assert_eq!(writer.len(), WORD_SIZE);
        }
    }
}
