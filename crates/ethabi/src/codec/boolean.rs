use num_bigint::BigUint;
use num_traits::Zero;
use crate::codec::{sealed, AbiType};
use crate::{Error, Reader, Value, Writer};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BooleanCodec;

impl AbiType for BooleanCodec {
    fn name(&self) -> &str { "bool" }
    fn type_signature(&self) -> &str { "bool" }
    fn is_dynamic(&self) -> bool { false }
    fn default_value(&self) -> Value { Value::Boolean(false) }
}

impl sealed::Encoder for BooleanCodec {
    fn encode_frame(&self, writer: &mut Writer, value: &Value) -> Result<usize, Error> {
        let boolean = value.as_boolean()?;
        writer.write_value(&BigUint::from(*boolean as u8))
    }
}

impl sealed::Decoder for BooleanCodec {
    fn decode_frame(&self, reader: &mut Reader) -> Result<Value, Error> {
        let value = reader.read_value()?;
        Ok(Value::Boolean(!value.is_zero()))
    }
}
