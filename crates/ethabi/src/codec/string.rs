use crate::codec::{sealed, AbiType};
use crate::codec::bytes::{read_payload, write_payload};
use crate::{Error, Reader, Value, Writer};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct StringCodec;

impl AbiType for StringCodec {
    fn name(&self) -> &str { "string" }
    fn type_signature(&self) -> &str { "string" }
    fn is_dynamic(&self) -> bool { true }
    fn default_value(&self) -> Value { Value::String(String::new()) }
}

impl sealed::Encoder for StringCodec {
    fn encode_frame(&self, writer: &mut Writer, value: &Value) -> Result<usize, Error> {
        let string = value.as_string()?;
        write_payload(writer, string.as_bytes())
    }
}

impl sealed::Decoder for StringCodec {
    fn decode_frame(&self, reader: &mut Reader) -> Result<Value, Error> {
        let bytes = read_payload(reader)?;
        Ok(Value::String(String::from_utf8(bytes.to_vec())?))
    }
}
