use std::collections::BTreeMap;
use num_bigint::{BigInt, BigUint};
use crate::{AbiResult, Error};

#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Address(String),
    Boolean(bool),
    Int(BigInt),
    UInt(BigUint),
    Bytes(Vec<u8>),
    String(String),
    Array(AbiResult),
    Tuple(AbiResult),
    /// Tuple fields keyed by parameter name, accepted by tuple encoders.
    Object(BTreeMap<String, Value>),
}

impl Value {
    /// 20-byte address from hex, with or without a `0x` prefix.
    pub fn address(address: &str) -> Result<Value, Error> {
        let digits = address.strip_prefix("0x").unwrap_or(address);
        let bytes = hex::decode(digits)?;
        if bytes.len() != 20 {
            return Err(Error::InvalidArgument {
                argument: "address",
                reason: format!("expected 20 bytes, got {}", bytes.len()),
            });
        }
        Ok(Value::Address(hex::encode(bytes)))
    }

    pub fn array(values: Vec<Value>) -> Value {
        Value::Array(values.into())
    }

    pub fn tuple(values: Vec<Value>) -> Value {
        Value::Tuple(values.into())
    }

    pub fn as_address(&self) -> Result<&str, Error> {
        match self {
            Value::Address(address) => Ok(address),
            _ => Err(Error::InvalidData),
        }
    }

    pub fn as_int(&self) -> Result<&BigInt, Error> {
        match self {
            Value::Int(int) => Ok(int),
            _ => Err(Error::InvalidData),
        }
    }

    pub fn as_uint(&self) -> Result<&BigUint, Error> {
        match self {
            Value::UInt(uint) => Ok(uint),
            _ => Err(Error::InvalidData),
        }
    }

    pub fn as_bytes(&self) -> Result<&[u8], Error> {
        match self {
            Value::Bytes(bytes) => Ok(bytes),
            _ => Err(Error::InvalidData),
        }
    }

    pub fn as_string(&self) -> Result<&str, Error> {
        match self {
            Value::String(string) => Ok(string),
            _ => Err(Error::InvalidData),
        }
    }

    pub fn as_array(&self) -> Result<&AbiResult, Error> {
        match self {
            Value::Array(array) => Ok(array),
            _ => Err(Error::InvalidData),
        }
    }

    pub fn as_tuple(&self) -> Result<&AbiResult, Error> {
        match self {
            Value::Tuple(tuple) => Ok(tuple),
            _ => Err(Error::InvalidData),
        }
    }

    /// Either positional form, array or tuple.
    pub fn as_sequence(&self) -> Result<&AbiResult, Error> {
        match self {
            Value::Array(values) | Value::Tuple(values) => Ok(values),
            _ => Err(Error::InvalidData),
        }
    }

    pub fn as_object(&self) -> Result<&BTreeMap<String, Value>, Error> {
        match self {
            Value::Object(object) => Ok(object),
            _ => Err(Error::InvalidData),
        }
    }

    pub fn as_boolean(&self) -> Result<&bool, Error> {
        match self {
            Value::Boolean(boolean) => Ok(boolean),
            _ => Err(Error::InvalidData),
        }
    }
}
