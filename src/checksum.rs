//! CRC checksums over byte slices and file contents
//!
//! CRC-32 uses polynomial `0x04C11DB7` MSB-first with a zero initial value
//! and no final xor. CRC-16 is the XMODEM variant (`0x1021`, zero initial
//! value). Both can be continued across chunks by feeding the previous
//! result back into the `_update` functions.

use std::fs;

use crate::error::{PathError, Result};
use crate::file::File;
use crate::io::fill_buffer;

const CRC32_POLY: u32 = 0x04C1_1DB7;
const CRC16_POLY: u16 = 0x1021;

const CRC32_TABLE: [u32; 256] = crc32_table();
const CRC16_TABLE: [u16; 256] = crc16_table();

const fn crc32_table() -> [u32; 256] {
    let mut table = [0u32; 256];
    let mut i = 0;
    while i < 256 {
        let mut crc = (i as u32) << 24;
        let mut bit = 0;
        while bit < 8 {
            crc = if crc & 0x8000_0000 != 0 {
                (crc << 1) ^ CRC32_POLY
            } else {
                crc << 1
            };
            bit += 1;
        }
        table[i] = crc;
        i += 1;
    }
    table
}

const fn crc16_table() -> [u16; 256] {
    let mut table = [0u16; 256];
    let mut i = 0;
    while i < 256 {
        let mut crc = (i as u16) << 8;
        let mut bit = 0;
        while bit < 8 {
            crc = if crc & 0x8000 != 0 {
                (crc << 1) ^ CRC16_POLY
            } else {
                crc << 1
            };
            bit += 1;
        }
        table[i] = crc;
        i += 1;
    }
    table
}

pub fn crc32_update(crc: u32, data: &[u8]) -> u32 {
    data.iter().fold(crc, |crc, &byte| {
        (crc << 8) ^ CRC32_TABLE[usize::from((crc >> 24) as u8 ^ byte)]
    })
}

/// # Examples
/// ```
/// assert_eq!(file_utils::crc32(b"Some test text"), 1_749_825_379);
/// ```
pub fn crc32(data: &[u8]) -> u32 {
    crc32_update(0, data)
}

pub fn crc16_update(crc: u16, data: &[u8]) -> u16 {
    data.iter().fold(crc, |crc, &byte| {
        (crc << 8) ^ CRC16_TABLE[usize::from((crc >> 8) as u8 ^ byte)]
    })
}

/// # Examples
/// ```
/// assert_eq!(file_utils::crc16(b"Some test text"), 36_064);
/// ```
pub fn crc16(data: &[u8]) -> u16 {
    crc16_update(0, data)
}

/// Streams `file` through `buffer`, folding each chunk with `update`
fn fold_file<T>(file: &File, buffer: &mut [u8], init: T, update: fn(T, &[u8]) -> T) -> Result<T> {
    if file.is_empty() {
        return Err(PathError::EmptyPath);
    }
    if buffer.is_empty() {
        return Err(PathError::ValidationFailed {
            message: "checksum buffer must not be empty".to_string(),
        });
    }
    let mut handle =
        fs::File::open(file.as_path()).map_err(|err| PathError::io(file.path(), err))?;
    let mut acc = init;
    loop {
        let read = fill_buffer(&mut handle, buffer).map_err(|err| PathError::io(file.path(), err))?;
        if read == 0 {
            break;
        }
        acc = update(acc, &buffer[..read]);
    }
    Ok(acc)
}

/// CRC-32 of the file content, read through `buffer`
pub fn file_checksum_crc32(file: &File, buffer: &mut [u8]) -> Result<u32> {
    fold_file(file, buffer, 0, crc32_update)
}

/// CRC-16 of the file content, read through `buffer`
pub fn file_checksum_crc16(file: &File, buffer: &mut [u8]) -> Result<u16> {
    fold_file(file, buffer, 0, crc16_update)
}
