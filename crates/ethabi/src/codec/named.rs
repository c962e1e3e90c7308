use crate::codec::sealed::{self, Decoder as _, Encoder as _};
use crate::codec::{AbiType, Codec};
use crate::{Error, Reader, Value, Writer};

/// Binds a parameter name to a coder. Decoded tuples expose the field
/// under this name, and tuples can be encoded from [`Value::Object`].
pub struct NamedCodec {
    local_name: String,
    codec: Box<dyn Codec>,
}

impl NamedCodec {
    pub fn new(local_name: &str, codec: Box<dyn Codec>) -> Self {
        Self { local_name: local_name.to_string(), codec }
    }
}

impl AbiType for NamedCodec {
    fn name(&self) -> &str { self.codec.name() }
    fn type_signature(&self) -> &str { self.codec.type_signature() }
    fn local_name(&self) -> Option<&str> { Some(&self.local_name) }
    fn is_dynamic(&self) -> bool { self.codec.is_dynamic() }
    fn default_value(&self) -> Value { self.codec.default_value() }
}

impl sealed::Encoder for NamedCodec {
    fn encode_frame(&self, writer: &mut Writer, value: &Value) -> Result<usize, Error> {
        self.codec.encode_frame(writer, value)
    }
}

impl sealed::Decoder for NamedCodec {
    fn decode_frame(&self, reader: &mut Reader) -> Result<Value, Error> {
        self.codec.decode_frame(reader)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{Decoder, Encoder, StringCodec, UIntCodec};

    #[test]
    fn test_named_codec_delegates() {
        let codec = NamedCodec::new("memo", Box::new(StringCodec));
        assert_eq!(codec.name(), "string");
        assert_eq!(codec.local_name(), Some("memo"));
        assert!(codec.is_dynamic());

        let value = Value::String("hello".to_string());
        let bytes = codec.encode(&value).unwrap();
        assert_eq!(bytes, StringCodec.encode(&value).unwrap());
        assert_eq!(codec.decode(&bytes).unwrap(), value);

        assert_eq!(UIntCodec::new(8).local_name(), None);
    }
}
