use num_bigint::BigUint;
use crate::codec::{sealed, AbiType, Codec};
use crate::codec::pack::{pack, unpack};
use crate::writer::WORD_SIZE;
use crate::{Error, Reader, Value, Writer};

pub struct FixedArrayCodec {
    signature: String,
    size: usize,
    dynamic: bool,
    codec: Box<dyn Codec>
}

impl FixedArrayCodec {
    pub fn new(size: usize, codec: Box<dyn Codec>) -> Self {
        let signature = format!("{}[{}]", codec.type_signature(), size);
        let dynamic = codec.is_dynamic();
        Self { signature, size, dynamic, codec }
    }

    fn coders(&self) -> Vec<&dyn Codec> {
        vec![self.codec.as_ref(); self.size]
    }
}

impl AbiType for FixedArrayCodec {
    fn name(&self) -> &str { "array" }
    fn type_signature(&self) -> &str { &self.signature }
    fn is_dynamic(&self) -> bool { self.dynamic }
    fn default_value(&self) -> Value {
        Value::array(vec![self.codec.default_value(); self.size])
    }
}

impl sealed::Encoder for FixedArrayCodec {
    fn encode_frame(&self, writer: &mut Writer, value: &Value) -> Result<usize, Error> {
        let values = value.as_sequence()?;

        if values.len() != self.size {
            return Err(Error::InvalidArgument {
                argument: "value",
                reason: format!("expected {} items for {}, got {}", self.size, self.signature, values.len()),
            });
        }

        pack(writer, &self.coders(), value)
    }
}

impl sealed::Decoder for FixedArrayCodec {
    fn decode_frame(&self, reader: &mut Reader) -> Result<Value, Error> {
        Ok(Value::Array(unpack(reader, &self.coders())?))
    }
}


pub struct DynamicArrayCodec {
    signature: String,
    codec: Box<dyn Codec>,
}

impl DynamicArrayCodec {
    pub fn new(codec: Box<dyn Codec>) -> Self {
        let signature = format!("{}[]", codec.type_signature());
        Self { signature, codec }
    }
}

impl AbiType for DynamicArrayCodec {
    fn name(&self) -> &str { "array" }
    fn type_signature(&self) -> &str { &self.signature }
    fn is_dynamic(&self) -> bool { true }
    fn default_value(&self) -> Value { Value::array(Vec::new()) }
}

impl sealed::Encoder for DynamicArrayCodec {
    fn encode_frame(&self, writer: &mut Writer, value: &Value) -> Result<usize, Error> {
        let values = value.as_sequence()?;

        let length = writer.write_value(&BigUint::from(values.len()))?;
        let coders = vec![self.codec.as_ref(); values.len()];
        Ok(length + pack(writer, &coders, value)?)
    }
}


impl sealed::Decoder for DynamicArrayCodec {
    fn decode_frame(&self, reader: &mut Reader) -> Result<Value, Error> {
        let count = reader.read_index()?;

        // every element takes at least one word
        let total = count.checked_mul(WORD_SIZE).unwrap_or(usize::MAX);
        if total > reader.data_length() {
            return Err(Error::BufferOverrun {
                reason: "insufficient data length",
                buffer: reader.data(),
                length: reader.data_length(),
                offset: total,
            });
        }

        let coders = vec![self.codec.as_ref(); count];
        Ok(Value::Array(unpack(reader, &coders)?))
    }
}
