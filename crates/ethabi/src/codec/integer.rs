use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{One, Zero};
use crate::codec::{sealed, AbiType};
use crate::writer::WORD_SIZE;
use crate::{Error, Reader, Value, Writer};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IntCodec {
    size: usize,
    name: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UIntCodec {
    size: usize,
    name: String,
}

fn check_size(size: usize) {
    assert!(size > 0 && size <= 256 && size % 8 == 0, "integer size should be 8, 16, 24, ..., 256");
}

impl IntCodec {
    pub fn new(size: usize) -> Self {
        check_size(size);
        Self { size, name: format!("int{}", size) }
    }
}

impl UIntCodec {
    pub fn new(size: usize) -> Self {
        check_size(size);
        Self { size, name: format!("uint{}", size) }
    }
}

fn out_of_bounds(value: &dyn std::fmt::Display, name: &str) -> Error {
    Error::NumericFault {
        operation: "encode",
        reason: format!("{} is out-of-bounds for {}", value, name),
    }
}

impl AbiType for IntCodec {
    fn name(&self) -> &str { &self.name }
    fn type_signature(&self) -> &str { &self.name }
    fn is_dynamic(&self) -> bool { false }
    fn default_value(&self) -> Value { Value::Int(BigInt::zero()) }
}

impl AbiType for UIntCodec {
    fn name(&self) -> &str { &self.name }
    fn type_signature(&self) -> &str { &self.name }
    fn is_dynamic(&self) -> bool { false }
    fn default_value(&self) -> Value { Value::UInt(BigUint::zero()) }
}

impl sealed::Encoder for IntCodec {
    fn encode_frame(&self, writer: &mut Writer, value: &Value) -> Result<usize, Error> {
        let value = value.as_int()?;

        let bound = BigInt::one() << (self.size - 1);
        if value >= &bound || value < &-&bound {
            return Err(out_of_bounds(value, &self.name));
        }

        // two's complement over the whole word
        let word = match value.sign() {
            Sign::Minus => (BigInt::one() << (8 * WORD_SIZE)) + value,
            _ => value.clone(),
        };
        let (_, magnitude) = word.into_parts();
        writer.write_value(&magnitude)
    }
}

impl sealed::Decoder for IntCodec {
    fn decode_frame(&self, reader: &mut Reader) -> Result<Value, Error> {
        let frame = reader.read_bytes(WORD_SIZE, false)?;
        let begin = WORD_SIZE - self.size / 8;
        Ok(Value::Int(BigInt::from_signed_bytes_be(&frame[begin..])))
    }
}

impl sealed::Encoder for UIntCodec {
    fn encode_frame(&self, writer: &mut Writer, value: &Value) -> Result<usize, Error> {
        let value = value.as_uint()?;
        if value.bits() > self.size as u64 {
            return Err(out_of_bounds(value, &self.name));
        }
        writer.write_value(value)
    }
}

impl sealed::Decoder for UIntCodec {
    fn decode_frame(&self, reader: &mut Reader) -> Result<Value, Error> {
        let frame = reader.read_bytes(WORD_SIZE, false)?;
        let begin = WORD_SIZE - self.size / 8;
        Ok(Value::UInt(BigUint::from_bytes_be(&frame[begin..])))
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{Decoder, Encoder};

    #[test]
    fn test_uint_decoder() {
        let bytes = hex::decode("DEADC0DEDEADC0DEDEADC0DEDEADC0DEDEADC0DEDEADC0DEDEADC0DEFEEDFACE").unwrap();
        assert_eq!(UIntCodec::new(8).decode(&bytes).unwrap(), Value::UInt(0xCE_u8.into()));

        let bytes = hex::decode("DEADC0DEDEADC0DEDEADC0DEDEADC0DEDEADC0DEDEADC0DEDEADC0DE0000FACE").unwrap();
        assert_eq!(UIntCodec::new(16).decode(&bytes).unwrap(), Value::UInt(0xFACE_u16.into()));

        let bytes = hex::decode("DEADC0DEDEADC0DEDEADC0DEDEADC0DEDEADC0DEDEADC0DEDEADC0DEFEEDFACE").unwrap();
        assert_eq!(UIntCodec::new(32).decode(&bytes).unwrap(), Value::UInt(0xFEEDFACE_u32.into()));

        let bytes = hex::decode("DEADC0DEDEADC0DEDEADC0DEDEADC0DEDEADC0DEDEADC0DEFEEDFACEFEEDFACE").unwrap();
        assert_eq!(UIntCodec::new(64).decode(&bytes).unwrap(), Value::UInt(0xFEEDFACEFEEDFACE_u64.into()));

        let bytes = hex::decode("DEADC0DEDEADC0DEDEADC0DEDEADC0DEFEEDFACEFEEDFACEFEEDFACEFEEDFACE").unwrap();
        assert_eq!(UIntCodec::new(128).decode(&bytes).unwrap(), Value::UInt(0xFEEDFACEFEEDFACEFEEDFACEFEEDFACE_u128.into()));
    }

    #[test]
    fn test_int_decoder() {
        let bytes = hex::decode("00000000000000000000000000000000000000000000000000000000000000FF").unwrap();
        assert_eq!(IntCodec::new(8).decode(&bytes).unwrap(), Value::Int(BigInt::from(-1)));

        let bytes = hex::decode("000000000000000000000000000000000000000000000000000000000000FFFF").unwrap();
        assert_eq!(IntCodec::new(16).decode(&bytes).unwrap(), Value::Int(BigInt::from(-1)));

        let bytes = hex::decode("000000000000000000000000000000000000000000000000FFFFFFFFFFFFFFFF").unwrap();
        assert_eq!(IntCodec::new(64).decode(&bytes).unwrap(), Value::Int(BigInt::from(-1)));

        let bytes = hex::decode("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF80").unwrap();
        assert_eq!(IntCodec::new(256).decode(&bytes).unwrap(), Value::Int(BigInt::from(-128)));

        let bytes = hex::decode("000000000000000000000000000000000000000000000000000000000000007F").unwrap();
        assert_eq!(IntCodec::new(8).decode(&bytes).unwrap(), Value::Int(BigInt::from(127)));
    }

    #[test]
    fn test_uint_encoder() {
        let bytes = hex::decode("00000000000000000000000000000000000000000000000000000000FEEDFACE").unwrap();
        assert_eq!(
            UIntCodec::new(256).encode(&Value::UInt(0xFEEDFACE_u32.into())).unwrap(),
            bytes
        );
    }

    #[test]
    fn test_int_encoder() {
        let bytes = hex::decode("00000000000000000000000000000000000000000000000000000000FEEDFACE").unwrap();
        assert_eq!(
            IntCodec::new(256).encode(&Value::Int(0xFEEDFACE_u32.into())).unwrap(),
            bytes
        );

        let bytes = hex::decode("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF").unwrap();
        assert_eq!(IntCodec::new(8).encode(&Value::Int(BigInt::from(-1))).unwrap(), bytes);
    }

    #[test]
    fn test_out_of_bounds_encoder() {
        assert!(UIntCodec::new(8).encode(&Value::UInt(255_u32.into())).is_ok());
        assert!(UIntCodec::new(8).encode(&Value::UInt(256_u32.into())).is_err());

        assert!(IntCodec::new(8).encode(&Value::Int(BigInt::from(-128))).is_ok());
        assert!(IntCodec::new(8).encode(&Value::Int(BigInt::from(-129))).is_err());
        assert!(matches!(
            IntCodec::new(8).encode(&Value::Int(BigInt::from(128))),
            Err(Error::NumericFault { operation: "encode", .. })
        ));

        assert_eq!(UIntCodec::new(8).encode(&Value::Boolean(true)), Err(Error::InvalidData));
    }

    #[test]
    fn test_int_round_trip() {
        let codec = IntCodec::new(32);
        for value in [i32::MIN as i64, -1, 0, 1, i32::MAX as i64] {
            let value = Value::Int(value.into());
            let bytes = codec.encode(&value).unwrap();
            assert_eq!(codec.decode(&bytes).unwrap(), value);
        }
    }
}
