use crate::{DecodeOptions, Error, Reader, Value, Writer};

/// Static description of a coder node.
pub trait AbiType: Send + Sync {
    /// Wire name, e.g. `uint256`, `bytes`, `tuple`, `array`.
    fn name(&self) -> &str;

    /// Fully expanded type, e.g. `(uint256,bytes)` or `uint32[2]`.
    fn type_signature(&self) -> &str;

    /// Parameter name bound in the signature, if any.
    fn local_name(&self) -> Option<&str> { None }

    fn is_dynamic(&self) -> bool;

    fn default_value(&self) -> Value;
}

pub(crate) mod sealed {
    use super::*;

    pub trait Encoder: AbiType {
        fn encode_frame(&self, writer: &mut Writer, value: &Value) -> Result<usize, Error>;
    }

    pub trait Decoder: AbiType {
        fn decode_frame(&self, reader: &mut Reader) -> Result<Value, Error>;
    }
}

pub trait Encoder: sealed::Encoder {
    fn encode(&self, value: &Value) -> Result<Vec<u8>, Error> {
        let mut writer = Writer::new();
        self.encode_frame(&mut writer, value)?;
        Ok(writer.data())
    }
}

pub trait Decoder: sealed::Decoder {
    fn decode(&self, bytes: &[u8]) -> Result<Value, Error> {
        self.decode_with(bytes, &DecodeOptions::default())
    }

    fn decode_with(&self, bytes: &[u8], options: &DecodeOptions) -> Result<Value, Error> {
        let mut reader = Reader::with_options(bytes, options);
        self.decode_frame(&mut reader)
    }
}

pub trait Codec: Encoder + Decoder {}

impl<T: sealed::Decoder + ?Sized> Decoder for T {}
impl<T: sealed::Encoder + ?Sized> Encoder for T {}
impl<T: Encoder + Decoder + ?Sized> Codec for T {}
