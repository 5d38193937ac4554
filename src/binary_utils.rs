/// Little-endian field writers used when patching spliced templates.
///
/// Offsets come from the fixed layout table, so an out of range write is a layout bug
/// and panics rather than being skipped.
pub fn write_u32(data: &mut [u8], value: u32, pos: usize) {
    data[pos..pos + 4].copy_from_slice(&value.to_le_bytes());
}

pub fn write_u64(data: &mut [u8], value: u64, pos: usize) {
    data[pos..pos + 8].copy_from_slice(&value.to_le_bytes());
}

#[cfg(test)]
pub fn read_u32(data: &[u8], pos: usize) -> u32 {
    u32::from_le_bytes([data[pos], data[pos + 1], data[pos + 2], data[pos + 3]])
}

#[cfg(test)]
pub fn read_u64(data: &[u8], pos: usize) -> u64 {
    let mut buf = [0u8; 8];
    buf.copy_from_slice(&data[pos..pos + 8]);
    u64::from_le_bytes(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_little_endian() {
        let mut data = [0u8; 12];
        write_u32(&mut data, 0x1122_3344, 0);
        write_u64(&mut data, 0x0102_0304_0506_0708, 4);

        assert_eq!(&data[..4], &[0x44, 0x33, 0x22, 0x11]);
        assert_eq!(
            &data[4..],
            &[0x08, 0x07, 0x06, 0x05, 0x04, 0x03, 0x02, 0x01]
        );
        assert_eq!(read_u32(&data, 0), 0x1122_3344);
        assert_eq!(read_u64(&data, 4), 0x0102_0304_0506_0708);
    }

    #[test]
    #[should_panic]
    fn write_past_end_panics() {
        let mut data = [0u8; 6];
        write_u32(&mut data, 1, 4);
    }
}
