//! Flat weight array serialization.
//!
//! # Binary Format
//!
//! ```text
//! [Element Count: i32 native-endian]
//! [Values: count * f32 native-endian, in sequence order]
//! ```
//!
//! Total length is exactly `4 + 4*count` bytes. There is no magic number,
//! version field, checksum, or trailer.
//!
//! # Byte Order
//!
//! Both the count and the values are written in the byte order of the
//! producing machine, for compatibility with files written by existing
//! producers. Files are therefore not portable between hosts of differing
//! endianness.

use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind, Read, Write};
use std::path::Path;

use byteorder::{NativeEndian, ReadBytesExt, WriteBytesExt};

use crate::error::{Result, WeightStoreError};

/// Serialize weights to a writer.
///
/// Writes the element count followed by each value as a raw 4-byte
/// IEEE-754 single, preserving sequence order and bit patterns.
pub fn write<W: Write>(writer: &mut W, values: &[f32]) -> Result<()> {
    let count = i32::try_from(values.len())
        .map_err(|_| WeightStoreError::InvalidCount(values.len() as i64))?;
    writer.write_i32::<NativeEndian>(count)?;
    for &value in values {
        writer.write_f32::<NativeEndian>(value)?;
    }
    Ok(())
}

/// Deserialize weights from a reader.
///
/// Reads the declared element count, then exactly that many values.
/// A negative count is rejected as [`WeightStoreError::InvalidCount`];
/// a payload shorter than the count implies is reported as
/// [`WeightStoreError::Truncated`], never returned as a short vector.
pub fn read<R: Read>(reader: &mut R) -> Result<Vec<f32>> {
    let header = reader.read_i32::<NativeEndian>()?;
    if header < 0 {
        return Err(WeightStoreError::InvalidCount(i64::from(header)));
    }
    let declared = header as usize;

    let mut values = Vec::with_capacity(declared);
    for index in 0..declared {
        match reader.read_f32::<NativeEndian>() {
            Ok(value) => values.push(value),
            Err(e) if e.kind() == ErrorKind::UnexpectedEof => {
                return Err(WeightStoreError::Truncated {
                    declared,
                    read: index,
                });
            }
            Err(e) => return Err(e.into()),
        }
    }
    Ok(values)
}

/// Save weights to a file.
///
/// The file is created if missing and truncated if present, so a second
/// save fully replaces the first. After a successful return the file is
/// exactly `4 + 4*values.len()` bytes long.
pub fn save<P: AsRef<Path>>(path: P, values: &[f32]) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write(&mut writer, values)?;
    writer.flush()?;
    Ok(())
}

/// Load weights from a file previously written by [`save`] or a
/// compatible external producer.
///
/// The file's self-declared count is trusted; callers that know the
/// expected shape validate it against their own dimensions.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Vec<f32>> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    read(&mut reader)
}
