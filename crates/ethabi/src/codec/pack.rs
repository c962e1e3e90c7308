//! Head/tail layout shared by tuples and arrays.
//!
//! Static fields are written in place in the head. A dynamic field takes
//! a single head word holding the byte offset, from the start of the
//! region, of its payload in the tail.

use std::collections::HashSet;
use num_bigint::BigUint;
use crate::codec::sealed::{Decoder as _, Encoder as _};
use crate::codec::{AbiType, Codec};
use crate::result::Slot;
use crate::{AbiResult, Error, Reader, Value, Writer};

fn arrange<'v>(coders: &[&dyn Codec], value: &'v Value) -> Result<Vec<&'v Value>, Error> {
    match value {
        Value::Object(object) => {
            let mut seen = HashSet::new();
            coders.iter().map(|coder| {
                let name = coder.local_name().ok_or_else(|| Error::InvalidArgument {
                    argument: "value",
                    reason: "cannot encode object for signature with missing names".to_string(),
                })?;
                if !seen.insert(name) {
                    return Err(Error::InvalidArgument {
                        argument: "value",
                        reason: format!("cannot encode object for signature with duplicate name {:?}", name),
                    });
                }
                object.get(name).ok_or_else(|| Error::InvalidArgument {
                    argument: "value",
                    reason: format!("missing value for {:?}", name),
                })
            }).collect()
        }
        _ => value.as_sequence()?.iter().collect(),
    }
}

pub(crate) fn pack(writer: &mut Writer, coders: &[&dyn Codec], value: &Value) -> Result<usize, Error> {
    let values = arrange(coders, value)?;
    if values.len() != coders.len() {
        return Err(Error::InvalidArgument {
            argument: "value",
            reason: format!("types/value length mismatch ({} types, {} values)", coders.len(), values.len()),
        });
    }

    let mut head = Writer::new();
    let mut tail = Writer::new();
    let mut pointers = Vec::new();

    for (coder, value) in coders.iter().zip(values) {
        if coder.is_dynamic() {
            let offset = tail.len();
            coder.encode_frame(&mut tail, value)?;
            pointers.push((head.write_updatable_value(), offset));
        } else {
            coder.encode_frame(&mut head, value)?;
        }
    }

    let head_size = head.len();
    for (word, offset) in pointers {
        head.update(word, &BigUint::from(head_size + offset))?;
    }

    Ok(writer.append_writer(&head) + writer.append_writer(&tail))
}

/// Decodes one value per coder. A failing field is kept in its slot and
/// raised when accessed; running out of data aborts the whole region.
pub(crate) fn unpack(reader: &mut Reader, coders: &[&dyn Codec]) -> Result<AbiResult, Error> {
    let base = reader.sub_reader(0)?;

    let mut slots = Vec::with_capacity(coders.len());
    let mut names = Vec::with_capacity(coders.len());

    for coder in coders {
        let decoded = if coder.is_dynamic() {
            let offset = reader.read_index()?;
            base.sub_reader(offset)
                .and_then(|mut tail| coder.decode_frame(&mut tail))
        } else {
            coder.decode_frame(reader)
        };

        let slot = match decoded {
            Ok(value) => Slot::Value(value),
            Err(error) if error.is_buffer_overrun() => return Err(error),
            Err(error) => {
                log::debug!("deferring {} error for {:?}: {}", coder.type_signature(), coder.local_name(), error);
                Slot::Error(error)
            }
        };

        slots.push(slot);
        names.push(coder.local_name().map(str::to_string));
    }

    Ok(AbiResult::with_names(slots, names))
}
