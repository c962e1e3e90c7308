use num_bigint::BigUint;
use crate::codec::{sealed, AbiType};
use crate::writer::WORD_SIZE;
use crate::{Error, Reader, Value, Writer};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixedBytesCodec {
    size: usize,
    name: String,
}

impl FixedBytesCodec {
    pub fn new(size: usize) -> Self {
        assert!(size > 0 && size <= WORD_SIZE, "bytes size should be 1, 2, ..., 32");
        Self { size, name: format!("bytes{}", size) }
    }
}

impl AbiType for FixedBytesCodec {
    fn name(&self) -> &str { &self.name }
    fn type_signature(&self) -> &str { &self.name }
    fn is_dynamic(&self) -> bool { false }
    fn default_value(&self) -> Value { Value::Bytes(vec![0u8; self.size]) }
}

impl sealed::Encoder for FixedBytesCodec {
    fn encode_frame(&self, writer: &mut Writer, value: &Value) -> Result<usize, Error> {
        let bytes = value.as_bytes()?;
        if bytes.len() != self.size {
            return Err(Error::InvalidArgument {
                argument: "value",
                reason: format!("incorrect data length {} for {}", bytes.len(), self.name),
            });
        }
        Ok(writer.write_bytes(bytes))
    }
}

impl sealed::Decoder for FixedBytesCodec {
    fn decode_frame(&self, reader: &mut Reader) -> Result<Value, Error> {
        let bytes = reader.read_bytes(self.size, false)?;
        Ok(Value::Bytes(bytes.to_vec()))
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DynamicBytesCodec;

/// Length word followed by the padded payload.
pub(crate) fn write_payload(writer: &mut Writer, bytes: &[u8]) -> Result<usize, Error> {
    let length = writer.write_value(&BigUint::from(bytes.len()))?;
    Ok(length + writer.write_bytes(bytes))
}

/// Payloads that end the buffer may lack their padding; loose readers
/// accept them.
pub(crate) fn read_payload<'a>(reader: &mut Reader<'a>) -> Result<&'a [u8], Error> {
    let length = reader.read_index()?;
    reader.read_bytes(length, true)
}

impl AbiType for DynamicBytesCodec {
    fn name(&self) -> &str { "bytes" }
    fn type_signature(&self) -> &str { "bytes" }
    fn is_dynamic(&self) -> bool { true }
    fn default_value(&self) -> Value { Value::Bytes(Vec::new()) }
}

impl sealed::Encoder for DynamicBytesCodec {
    fn encode_frame(&self, writer: &mut Writer, value: &Value) -> Result<usize, Error> {
        write_payload(writer, value.as_bytes()?)
    }
}

impl sealed::Decoder for DynamicBytesCodec {
    fn decode_frame(&self, reader: &mut Reader) -> Result<Value, Error> {
        Ok(Value::Bytes(read_payload(reader)?.to_vec()))
    }
}
