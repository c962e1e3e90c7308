use crate::codec::{sealed, AbiType, Codec};
use crate::codec::pack::{pack, unpack};
use crate::result::Slot;
use crate::{AbiResult, Error, Reader, Value, Writer};

pub struct TupleCodec {
    signature: String,
    dynamic: bool,
    codecs: Vec<Box<dyn Codec>>,
}

impl TupleCodec {
    pub fn new(codecs: Vec<Box<dyn Codec>>) -> Self {
        let names = codecs.iter().map(|codec| codec.type_signature()).collect::<Vec<_>>();
        let signature = format!("({})", names.join(","));
        let dynamic = codecs.iter().any(|codec| codec.is_dynamic());
        Self { signature, dynamic, codecs }
    }

    fn coders(&self) -> Vec<&dyn Codec> {
        self.codecs.iter().map(|codec| codec.as_ref()).collect()
    }
}

impl AbiType for TupleCodec {
    fn name(&self) -> &str { "tuple" }
    fn type_signature(&self) -> &str { &self.signature }
    fn is_dynamic(&self) -> bool { self.dynamic }

    fn default_value(&self) -> Value {
        let slots = self.codecs.iter().map(|codec| Slot::Value(codec.default_value())).collect();
        let names = self.codecs.iter().map(|codec| codec.local_name().map(str::to_string)).collect();
        Value::Tuple(AbiResult::with_names(slots, names))
    }
}

impl sealed::Encoder for TupleCodec {
    fn encode_frame(&self, writer: &mut Writer, value: &Value) -> Result<usize, Error> {
        pack(writer, &self.coders(), value)
    }
}

impl sealed::Decoder for TupleCodec {
    fn decode_frame(&self, reader: &mut Reader) -> Result<Value, Error> {
        Ok(Value::Tuple(unpack(reader, &self.coders())?))
    }
}
