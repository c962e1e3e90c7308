pub(crate) use codec::sealed;

pub use codec::{AbiType, Codec, Encoder, Decoder};
pub use address::AddressCodec;
pub use array::{FixedArrayCodec, DynamicArrayCodec};
pub use boolean::BooleanCodec;
pub use bytes::{DynamicBytesCodec, FixedBytesCodec};
pub use integer::{IntCodec, UIntCodec};
pub use named::NamedCodec;
pub use string::StringCodec;
pub use tuple::TupleCodec;

mod codec;
mod address;
mod array;
mod boolean;
mod bytes;
mod integer;
mod named;
mod pack;
mod string;
mod tuple;
