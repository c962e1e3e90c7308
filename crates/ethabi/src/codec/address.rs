use crate::codec::{sealed, AbiType};
use crate::writer::WORD_SIZE;
use crate::{Error, Reader, Value, Writer};

const ADDRESS_SIZE: usize = 20;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct AddressCodec;

impl AbiType for AddressCodec {
    fn name(&self) -> &str { "address" }
    fn type_signature(&self) -> &str { "address" }
    fn is_dynamic(&self) -> bool { false }
    fn default_value(&self) -> Value { Value::Address("0".repeat(2 * ADDRESS_SIZE)) }
}

impl sealed::Decoder for AddressCodec {
    fn decode_frame(&self, reader: &mut Reader) -> Result<Value, Error> {
        let frame = reader.read_bytes(WORD_SIZE, false)?;
        let (padding, address) = frame.split_at(WORD_SIZE - ADDRESS_SIZE);
        if padding.iter().any(|&byte| byte != 0) {
            return Err(Error::NumericFault {
                operation: "decode address",
                reason: format!("0x{} exceeds {} bytes", hex::encode(frame), ADDRESS_SIZE),
            });
        }
        Ok(Value::Address(hex::encode(address)))
    }
}

impl sealed::Encoder for AddressCodec {
    fn encode_frame(&self, writer: &mut Writer, value: &Value) -> Result<usize, Error> {
        let address = value.as_address()?;
        let address = address.strip_prefix("0x").unwrap_or(address);
        let bytes = hex::decode(address)?;
        if bytes.len() != ADDRESS_SIZE {
            return Err(Error::InvalidArgument {
                argument: "address",
                reason: format!("expected {} bytes, got {}", ADDRESS_SIZE, bytes.len()),
            });
        }

        let mut word = Vec::with_capacity(WORD_SIZE);
        word.extend_from_slice(&[0u8; WORD_SIZE - ADDRESS_SIZE]);
        word.extend_from_slice(&bytes);
        Ok(writer.write_bytes(&word))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{Encoder, Decoder};

    #[test]
    fn test_address_encoder() {
        let bytes = hex::decode(concat!(
            "000000000000000000000000FEEDFACEFEEDFACEFEEDFACEFEEDFACEFEEDFACE",
        )).unwrap();
        assert_eq!(AddressCodec.encode(&Value::Address("feedfacefeedfacefeedfacefeedfacefeedface".to_string())).unwrap(), bytes);
    }

    #[test]
    fn test_address_decoder() {
        let bytes = hex::decode(concat!(
            "000000000000000000000000FEEDFACEFEEDFACEFEEDFACEFEEDFACEFEEDFACE",
        )).unwrap();
        assert_eq!(AddressCodec.decode(&bytes).unwrap(), Value::Address("feedfacefeedfacefeedfacefeedfacefeedface".to_string()));
    }

    #[test]
    fn test_address_decoder_dirty_padding() {
        let bytes = hex::decode(concat!(
            "000000000000000000000001FEEDFACEFEEDFACEFEEDFACEFEEDFACEFEEDFACE",
        )).unwrap();
        assert!(matches!(AddressCodec.decode(&bytes), Err(Error::NumericFault { .. })));
    }

    #[test]
    fn test_address_encoder_bad_length() {
        let value = Value::Address("feedface".to_string());
        assert!(matches!(AddressCodec.encode(&value), Err(Error::InvalidArgument { .. })));
    }
}
