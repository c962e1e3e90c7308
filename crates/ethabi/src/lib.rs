extern crate hex;
extern crate log;
extern crate num_bigint;
extern crate num_traits;
#[macro_use]
extern crate thiserror;

pub use codec::{AbiType, Codec, Decoder, Encoder};
pub use codec::{
    AddressCodec,
    BooleanCodec,
    DynamicArrayCodec,
    DynamicBytesCodec,
    FixedArrayCodec,
    FixedBytesCodec,
    IntCodec,
    NamedCodec,
    StringCodec,
    TupleCodec,
    UIntCodec,
};
pub use error::{Accessor, Error};
pub use reader::{DecodeOptions, Reader};
pub use result::{check_result_errors, AbiResult, ResultError, Slot};
pub use value::Value;
pub use writer::{UpdatableWord, Writer, WORD_SIZE};

mod codec;
mod error;
mod reader;
mod result;
mod value;
mod writer;
