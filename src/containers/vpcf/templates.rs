//! Byte templates for a minimal dry-erase particle system resource.
//!
//! `HEADER_TEMPLATE` is everything in front of the compressed KV3 payload: the
//! resource header, the block table, RERL, REDI and the first 0x24 bytes of DATA. All
//! three path slots are empty, so the only bytes at each slot are the terminators.
//!
//! `DATA_TEMPLATE` is the decompressed KV3 body. Its string table ends with the empty
//! string used as the `m_hTexture` resource reference.

pub const HEADER_TEMPLATE: &[u8] = &[
    // resource header: file size, header version 12, type version, block offset, block count
    0x00, 0x00, 0x00, 0x00, 0x0c, 0x00, 0x00, 0x00, 0x08, 0x00, 0x00, 0x00, 0x03, 0x00, 0x00, 0x00,
    // block table: RERL, REDI, DATA (tag, relative offset, size)
    0x52, 0x45, 0x52, 0x4c, 0x20, 0x00, 0x00, 0x00, 0x1d, 0x00, 0x00, 0x00, 0x52, 0x45, 0x44, 0x49,
    0x31, 0x00, 0x00, 0x00, 0xce, 0x00, 0x00, 0x00, 0x44, 0x41, 0x54, 0x41, 0xf3, 0x00, 0x00, 0x00,
    0x28, 0x00, 0x00, 0x00,
    // RERL: entry list offset and count, resource id, name offset
    0x08, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x04, 0x00, 0x00, 0x00,
    // RERL: texture path terminator and padding
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // REDI: seven (offset, count) list headers
    0x38, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x52, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x82, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x9e, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // REDI: input dependency (related file, search path, crc, flags)
    0x10, 0x00, 0x00, 0x00, 0x0d, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // REDI: related file and search path terminators
    0x00, 0x00,
    // REDI: empty dependency lists
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00,
    // DATA: KV3 magic, LZ4 block encoding and generic format GUIDs
    0x56, 0x4b, 0x56, 0x03, 0x8a, 0x34, 0x47, 0x68, 0xa1, 0x63, 0x5c, 0x4f, 0xa1, 0x97, 0x53, 0x80,
    0x6f, 0xd9, 0xb1, 0x19, 0x7c, 0x16, 0x12, 0x74, 0xe9, 0x06, 0x98, 0x46, 0xaf, 0xf2, 0xe6, 0x3e,
    0xb5, 0x90, 0x37, 0xe7,
];

pub const DATA_TEMPLATE: &[u8] = &[
    // string count
    0x10, 0x00, 0x00, 0x00,
    // string table
    0x5f, 0x63, 0x6c, 0x61, 0x73, 0x73, 0x00, 0x43, 0x50, 0x61, 0x72, 0x74, 0x69, 0x63, 0x6c, 0x65,
    0x53, 0x79, 0x73, 0x74, 0x65, 0x6d, 0x44, 0x65, 0x66, 0x69, 0x6e, 0x69, 0x74, 0x69, 0x6f, 0x6e,
    0x00, 0x6d, 0x5f, 0x6e, 0x4d, 0x61, 0x78, 0x50, 0x61, 0x72, 0x74, 0x69, 0x63, 0x6c, 0x65, 0x73,
    0x00, 0x6d, 0x5f, 0x52, 0x65, 0x6e, 0x64, 0x65, 0x72, 0x65, 0x72, 0x73, 0x00, 0x43, 0x5f, 0x4f,
    0x50, 0x5f, 0x52, 0x65, 0x6e, 0x64, 0x65, 0x72, 0x53, 0x70, 0x72, 0x69, 0x74, 0x65, 0x73, 0x00,
    0x6d, 0x5f, 0x68, 0x54, 0x65, 0x78, 0x74, 0x75, 0x72, 0x65, 0x00, 0x6d, 0x5f, 0x4f, 0x70, 0x65,
    0x72, 0x61, 0x74, 0x6f, 0x72, 0x73, 0x00, 0x43, 0x5f, 0x4f, 0x50, 0x5f, 0x42, 0x61, 0x73, 0x69,
    0x63, 0x4d, 0x6f, 0x76, 0x65, 0x6d, 0x65, 0x6e, 0x74, 0x00, 0x6d, 0x5f, 0x49, 0x6e, 0x69, 0x74,
    0x69, 0x61, 0x6c, 0x69, 0x7a, 0x65, 0x72, 0x73, 0x00, 0x43, 0x5f, 0x49, 0x4e, 0x49, 0x54, 0x5f,
    0x52, 0x61, 0x6e, 0x64, 0x6f, 0x6d, 0x4c, 0x69, 0x66, 0x65, 0x54, 0x69, 0x6d, 0x65, 0x00, 0x6d,
    0x5f, 0x66, 0x4c, 0x69, 0x66, 0x65, 0x74, 0x69, 0x6d, 0x65, 0x4d, 0x69, 0x6e, 0x00, 0x6d, 0x5f,
    0x66, 0x4c, 0x69, 0x66, 0x65, 0x74, 0x69, 0x6d, 0x65, 0x4d, 0x61, 0x78, 0x00, 0x6d, 0x5f, 0x45,
    0x6d, 0x69, 0x74, 0x74, 0x65, 0x72, 0x73, 0x00, 0x43, 0x5f, 0x4f, 0x50, 0x5f, 0x49, 0x6e, 0x73,
    0x74, 0x61, 0x6e, 0x74, 0x61, 0x6e, 0x65, 0x6f, 0x75, 0x73, 0x45, 0x6d, 0x69, 0x74, 0x74, 0x65,
    0x72, 0x00, 0x6d, 0x5f, 0x6e, 0x50, 0x61, 0x72, 0x74, 0x69, 0x63, 0x6c, 0x65, 0x73, 0x54, 0x6f,
    0x45, 0x6d, 0x69, 0x74, 0x00,
    // m_hTexture path terminator
    0x00,
    // object stream
    0x09, 0x06, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x06, 0x01, 0x00, 0x00, 0x00, 0x02, 0x00,
    0x00, 0x00, 0x03, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x03, 0x00, 0x00, 0x00, 0x08,
    0x01, 0x00, 0x00, 0x00, 0x09, 0x02, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x06, 0x04, 0x00,
    0x00, 0x00, 0x05, 0x00, 0x00, 0x00, 0x86, 0x01, 0x0f, 0x00, 0x00, 0x00, 0x06, 0x00, 0x00, 0x00,
    0x08, 0x01, 0x00, 0x00, 0x00, 0x09, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x06, 0x07,
    0x00, 0x00, 0x00, 0x08, 0x00, 0x00, 0x00, 0x08, 0x01, 0x00, 0x00, 0x00, 0x09, 0x03, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x06, 0x09, 0x00, 0x00, 0x00, 0x0a, 0x00, 0x00, 0x00, 0x05, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x20, 0xac, 0x40, 0x0b, 0x00, 0x00, 0x00, 0x05, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x20, 0xac, 0x40, 0x0c, 0x00, 0x00, 0x00, 0x08, 0x01, 0x00, 0x00, 0x00, 0x09, 0x02, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x06, 0x0d, 0x00, 0x00, 0x00, 0x0e, 0x00, 0x00, 0x00, 0x03,
    0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // trailer
    0xcc, 0xdd, 0xee, 0xff,
];
