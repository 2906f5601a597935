//! Machine code injected into the extended code region at 0x3480000. These are
//! opaque MIPS payloads; the hooks that jump into them live in
//! [`super::tables::CODE_HOOKS`].

pub const PROGRESSIVE_ITEM_TEXT: &[u8] = &[
    0x90, 0x45, 0x00, 0x03, 0x31, 0x4A, 0x00, 0x00, 0x25, 0x4A, 0x00, 0x4F,
    0x15, 0x45, 0x00, 0x08, 0x31, 0x4A, 0x00, 0x00, 0x3C, 0x0B, 0x80, 0x12,
    0x91, 0x6B, 0xA6, 0x4D, 0x25, 0x4A, 0x00, 0xFF, 0x15, 0x4B, 0x00, 0x03,
    0x31, 0x4A, 0x00, 0x00, 0x30, 0xA5, 0x00, 0x00, 0x24, 0xA5, 0x00, 0x36,
    0x25, 0x4A, 0x00, 0x5A, 0x15, 0x45, 0x00, 0x0C, 0x31, 0x4A, 0x00, 0x00,
    0x3C, 0x0B, 0x80, 0x12, 0x91, 0x6B, 0xA6, 0x73, 0x31, 0x6B, 0x00, 0x18,
    0x15, 0x4B, 0x00, 0x03, 0x25, 0x4A, 0x00, 0x08, 0x30, 0xA5, 0x00, 0x00,
    0x24, 0xA5, 0x00, 0x58, 0x15, 0x4B, 0x00, 0x03, 0x31, 0x4A, 0x00, 0x00,
    0x30, 0xA5, 0x00, 0x00, 0x24, 0xA5, 0x00, 0x59, 0x25, 0x4A, 0x00, 0x5C,
    0x15, 0x45, 0x00, 0x0C, 0x31, 0x4A, 0x00, 0x00, 0x3C, 0x0B, 0x80, 0x12,
    0x91, 0x6B, 0xA6, 0x73, 0x31, 0x6B, 0x00, 0xC0, 0x15, 0x4B, 0x00, 0x03,
    0x25, 0x4A, 0x00, 0x40, 0x30, 0xA5, 0x00, 0x00, 0x24, 0xA5, 0x00, 0x79,
    0x15, 0x4B, 0x00, 0x03, 0x31, 0x4A, 0x00, 0x00, 0x30, 0xA5, 0x00, 0x00,
    0x24, 0xA5, 0x00, 0x5B, 0x25, 0x4A, 0x00, 0xCE, 0x15, 0x45, 0x00, 0x08,
    0x31, 0x4A, 0x00, 0x00, 0x3C, 0x0B, 0x80, 0x12, 0x91, 0x6B, 0xA6, 0x72,
    0x31, 0x6B, 0x00, 0x06, 0x15, 0x4B, 0x00, 0x03, 0x31, 0x4A, 0x00, 0x00,
    0x30, 0xA5, 0x00, 0x00, 0x24, 0xA5, 0x00, 0xCD, 0x25, 0x4A, 0x00, 0x5F,
    0x15, 0x45, 0x00, 0x08, 0x31, 0x4A, 0x00, 0x00, 0x3C, 0x0B, 0x80, 0x12,
    0x91, 0x6B, 0xA6, 0x72, 0x31, 0x6B, 0x00, 0x30, 0x15, 0x4B, 0x00, 0x03,
    0x31, 0x4A, 0x00, 0x00, 0x30, 0xA5, 0x00, 0x00, 0x24, 0xA5, 0x00, 0x5E,
    0x25, 0x4A, 0x00, 0x90, 0x15, 0x45, 0x00, 0x09, 0x31, 0x4A, 0x00, 0x00,
    0x3C, 0x0B, 0x80, 0x12, 0x91, 0x6B, 0xA6, 0x71, 0x31, 0x6B, 0x00, 0x06,
    0x25, 0x4A, 0x00, 0x04, 0x15, 0x4B, 0x00, 0x03, 0x31, 0x4A, 0x00, 0x00,
    0x30, 0xA5, 0x00, 0x00, 0x24, 0xA5, 0x00, 0x91, 0x25, 0x4A, 0x00, 0xA7,
    0x15, 0x45, 0x00, 0x09, 0x31, 0x4A, 0x00, 0x00, 0x3C, 0x0B, 0x80, 0x12,
    0x91, 0x6B, 0xA6, 0x71, 0x31, 0x6B, 0x00, 0x30, 0x25, 0x4A, 0x00, 0x20,
    0x15, 0x4B, 0x00, 0x03, 0x31, 0x4A, 0x00, 0x00, 0x30, 0xA5, 0x00, 0x00,
    0x24, 0xA5, 0x00, 0xA8, 0x25, 0x4A, 0x00, 0x6C, 0x15, 0x45, 0x00, 0x0C,
    0x31, 0x4A, 0x00, 0x00, 0x3C, 0x0B, 0x80, 0x12, 0x91, 0x6B, 0xA6, 0x72,
    0x31, 0x6B, 0x00, 0xC0, 0x15, 0x4B, 0x00, 0x03, 0x25, 0x4A, 0x00, 0x40,
    0x30, 0xA5, 0x00, 0x00, 0x24, 0xA5, 0x00, 0x30, 0x15, 0x4B, 0x00, 0x03,
    0x31, 0x4A, 0x00, 0x00, 0x30, 0xA5, 0x00, 0x00, 0x24, 0xA5, 0x00, 0x07,
    0x25, 0x4A, 0x00, 0x57, 0x15, 0x45, 0x00, 0x0C, 0x31, 0x4A, 0x00, 0x00,
    0x3C, 0x0B, 0x80, 0x12, 0x91, 0x6B, 0xA6, 0x73, 0x31, 0x6B, 0x00, 0x03,
    0x15, 0x4B, 0x00, 0x03, 0x25, 0x4A, 0x00, 0x01, 0x30, 0xA5, 0x00, 0x00,
    0x24, 0xA5, 0x00, 0x31, 0x15, 0x4B, 0x00, 0x03, 0x31, 0x4A, 0x00, 0x00,
    0x30, 0xA5, 0x00, 0x00, 0x24, 0xA5, 0x00, 0x56, 0x03, 0xE0, 0x00, 0x08,
];

pub const PROGRESSIVE_ITEM_IDS: &[u8] = &[
    0x00, 0x00, 0x00, 0x00, 0x31, 0x4A, 0x00, 0x00, 0x25, 0x4A, 0x00, 0x0B,
    0x15, 0x45, 0x00, 0x08, 0x31, 0x4A, 0x00, 0x00, 0x3C, 0x0B, 0x80, 0x12,
    0x91, 0x6B, 0xA6, 0x4D, 0x25, 0x4A, 0x00, 0xFF, 0x15, 0x4B, 0x00, 0x03,
    0x31, 0x4A, 0x00, 0x00, 0x30, 0xA5, 0x00, 0x00, 0x24, 0xA5, 0x00, 0x0A,
    0x25, 0x4A, 0x00, 0x4F, 0x15, 0x45, 0x00, 0x0C, 0x31, 0x4A, 0x00, 0x00,
    0x3C, 0x0B, 0x80, 0x12, 0x91, 0x6B, 0xA6, 0x73, 0x31, 0x6B, 0x00, 0x18,
    0x15, 0x4B, 0x00, 0x03, 0x25, 0x4A, 0x00, 0x08, 0x30, 0xA5, 0x00, 0x00,
    0x24, 0xA5, 0x00, 0x4D, 0x15, 0x4B, 0x00, 0x03, 0x31, 0x4A, 0x00, 0x00,
    0x30, 0xA5, 0x00, 0x00, 0x24, 0xA5, 0x00, 0x4E, 0x25, 0x4A, 0x00, 0x52,
    0x15, 0x45, 0x00, 0x0C, 0x31, 0x4A, 0x00, 0x00, 0x3C, 0x0B, 0x80, 0x12,
    0x91, 0x6B, 0xA6, 0x73, 0x31, 0x6B, 0x00, 0xC0, 0x15, 0x4B, 0x00, 0x03,
    0x25, 0x4A, 0x00, 0x40, 0x30, 0xA5, 0x00, 0x00, 0x24, 0xA5, 0x00, 0x50,
    0x15, 0x4B, 0x00, 0x03, 0x31, 0x4A, 0x00, 0x00, 0x30, 0xA5, 0x00, 0x00,
    0x24, 0xA5, 0x00, 0x51, 0x25, 0x4A, 0x00, 0x54, 0x15, 0x45, 0x00, 0x08,
    0x31, 0x4A, 0x00, 0x00, 0x3C, 0x0B, 0x80, 0x12, 0x91, 0x6B, 0xA6, 0x72,
    0x31, 0x6B, 0x00, 0x06, 0x15, 0x4B, 0x00, 0x03, 0x31, 0x4A, 0x00, 0x00,
    0x30, 0xA5, 0x00, 0x00, 0x24, 0xA5, 0x00, 0x53, 0x25, 0x4A, 0x00, 0x57,
    0x15, 0x45, 0x00, 0x08, 0x31, 0x4A, 0x00, 0x00, 0x3C, 0x0B, 0x80, 0x12,
    0x91, 0x6B, 0xA6, 0x72, 0x31, 0x6B, 0x00, 0x30, 0x15, 0x4B, 0x00, 0x03,
    0x31, 0x4A, 0x00, 0x00, 0x30, 0xA5, 0x00, 0x00, 0x24, 0xA5, 0x00, 0x56,
    0x25, 0x4A, 0x00, 0x98, 0x15, 0x45, 0x00, 0x09, 0x31, 0x4A, 0x00, 0x00,
    0x3C, 0x0B, 0x80, 0x12, 0x91, 0x6B, 0xA6, 0x71, 0x31, 0x6B, 0x00, 0x06,
    0x25, 0x4A, 0x00, 0x04, 0x15, 0x4B, 0x00, 0x03, 0x31, 0x4A, 0x00, 0x00,
    0x30, 0xA5, 0x00, 0x00, 0x24, 0xA5, 0x00, 0x99, 0x25, 0x4A, 0x00, 0x9A,
    0x15, 0x45, 0x00, 0x09, 0x31, 0x4A, 0x00, 0x00, 0x3C, 0x0B, 0x80, 0x12,
    0x91, 0x6B, 0xA6, 0x71, 0x31, 0x6B, 0x00, 0x30, 0x25, 0x4A, 0x00, 0x20,
    0x15, 0x4B, 0x00, 0x03, 0x31, 0x4A, 0x00, 0x00, 0x30, 0xA5, 0x00, 0x00,
    0x24, 0xA5, 0x00, 0x9B, 0x25, 0x4A, 0x00, 0x49, 0x15, 0x45, 0x00, 0x0C,
    0x31, 0x4A, 0x00, 0x00, 0x3C, 0x0B, 0x80, 0x12, 0x91, 0x6B, 0xA6, 0x72,
    0x31, 0x6B, 0x00, 0xC0, 0x15, 0x4B, 0x00, 0x03, 0x25, 0x4A, 0x00, 0x40,
    0x30, 0xA5, 0x00, 0x00, 0x24, 0xA5, 0x00, 0x06, 0x15, 0x4B, 0x00, 0x03,
    0x31, 0x4A, 0x00, 0x00, 0x30, 0xA5, 0x00, 0x00, 0x24, 0xA5, 0x00, 0x48,
    0x25, 0x4A, 0x00, 0x4C, 0x15, 0x45, 0x00, 0x0C, 0x31, 0x4A, 0x00, 0x00,
    0x3C, 0x0B, 0x80, 0x12, 0x91, 0x6B, 0xA6, 0x73, 0x31, 0x6B, 0x00, 0x03,
    0x15, 0x4B, 0x00, 0x03, 0x25, 0x4A, 0x00, 0x01, 0x30, 0xA5, 0x00, 0x00,
    0x24, 0xA5, 0x00, 0x03, 0x15, 0x4B, 0x00, 0x03, 0x31, 0x4A, 0x00, 0x00,
    0x30, 0xA5, 0x00, 0x00, 0x24, 0xA5, 0x00, 0x4B, 0x08, 0x01, 0xBF, 0x73,
];

pub const PROGRESSIVE_ITEM_GRAPHICS: &[u8] = &[
    0x80, 0x43, 0x00, 0x02, 0x31, 0x4A, 0x00, 0x00, 0x25, 0x4A, 0x00, 0x2E,
    0x15, 0x43, 0x00, 0x08, 0x31, 0x4A, 0x00, 0x00, 0x3C, 0x0B, 0x80, 0x12,
    0x91, 0x6B, 0xA6, 0x4D, 0x25, 0x4A, 0x00, 0xFF, 0x15, 0x4B, 0x00, 0x03,
    0x31, 0x4A, 0x00, 0x00, 0x30, 0x63, 0x00, 0x00, 0x24, 0x63, 0x00, 0x2D,
    0x25, 0x4A, 0x00, 0x1A, 0x15, 0x43, 0x00, 0x0C, 0x31, 0x4A, 0x00, 0x00,
    0x3C, 0x0B, 0x80, 0x12, 0x91, 0x6B, 0xA6, 0x73, 0x31, 0x6B, 0x00, 0x18,
    0x15, 0x4B, 0x00, 0x03, 0x25, 0x4A, 0x00, 0x08, 0x30, 0x63, 0x00, 0x00,
    0x24, 0x63, 0x00, 0x18, 0x15, 0x4B, 0x00, 0x03, 0x31, 0x4A, 0x00, 0x00,
    0x30, 0x63, 0x00, 0x00, 0x24, 0x63, 0x00, 0x19, 0x25, 0x4A, 0x00, 0x4A,
    0x15, 0x43, 0x00, 0x0C, 0x31, 0x4A, 0x00, 0x00, 0x3C, 0x0B, 0x80, 0x12,
    0x91, 0x6B, 0xA6, 0x73, 0x31, 0x6B, 0x00, 0xC0, 0x15, 0x4B, 0x00, 0x03,
    0x25, 0x4A, 0x00, 0x40, 0x30, 0x63, 0x00, 0x00, 0x24, 0x63, 0x00, 0x58,
    0x15, 0x4B, 0x00, 0x03, 0x31, 0x4A, 0x00, 0x00, 0x30, 0x63, 0x00, 0x00,
    0x24, 0x63, 0x00, 0x49, 0x25, 0x4A, 0x00, 0x2B, 0x15, 0x43, 0x00, 0x08,
    0x31, 0x4A, 0x00, 0x00, 0x3C, 0x0B, 0x80, 0x12, 0x91, 0x6B, 0xA6, 0x72,
    0x31, 0x6B, 0x00, 0x06, 0x15, 0x4B, 0x00, 0x03, 0x31, 0x4A, 0x00, 0x00,
    0x30, 0x63, 0x00, 0x00, 0x24, 0x63, 0x00, 0x2A, 0x25, 0x4A, 0x00, 0x23,
    0x15, 0x43, 0x00, 0x08, 0x31, 0x4A, 0x00, 0x00, 0x3C, 0x0B, 0x80, 0x12,
    0x91, 0x6B, 0xA6, 0x72, 0x31, 0x6B, 0x00, 0x30, 0x15, 0x4B, 0x00, 0x03,
    0x31, 0x4A, 0x00, 0x00, 0x30, 0x63, 0x00, 0x00, 0x24, 0x63, 0x00, 0x22,
    0x25, 0x4A, 0x00, 0x73, 0x15, 0x43, 0x00, 0x0C, 0x31, 0x4A, 0x00, 0x00,
    0x3C, 0x0B, 0x80, 0x12, 0x91, 0x6B, 0xA6, 0x72, 0x31, 0x6B, 0x00, 0xC0,
    0x15, 0x4B, 0x00, 0x03, 0x25, 0x4A, 0x00, 0x40, 0x30, 0x63, 0x00, 0x00,
    0x24, 0x63, 0x00, 0x33, 0x15, 0x4B, 0x00, 0x03, 0x31, 0x4A, 0x00, 0x00,
    0x30, 0x63, 0x00, 0x00, 0x24, 0x63, 0x00, 0x6C, 0x25, 0x4A, 0x00, 0x17,
    0x15, 0x43, 0x00, 0x0C, 0x31, 0x4A, 0x00, 0x00, 0x3C, 0x0B, 0x80, 0x12,
    0x91, 0x6B, 0xA6, 0x73, 0x31, 0x6B, 0x00, 0x03, 0x15, 0x4B, 0x00, 0x03,
    0x25, 0x4A, 0x00, 0x01, 0x30, 0x63, 0x00, 0x00, 0x24, 0x63, 0x00, 0x35,
    0x15, 0x4B, 0x00, 0x03, 0x31, 0x4A, 0x00, 0x00, 0x30, 0x63, 0x00, 0x00,
    0x24, 0x63, 0x00, 0x16, 0x08, 0x0E, 0x27, 0x2B,
];

pub const PROGRESSIVE_ITEM_OBJECTS: &[u8] = &[
    0x31, 0x4A, 0x00, 0x00, 0x25, 0x4A, 0x01, 0x2D, 0x15, 0x45, 0x00, 0x08,
    0x31, 0x4A, 0x00, 0x00, 0x3C, 0x0B, 0x80, 0x12, 0x91, 0x6B, 0xA6, 0x73,
    0x31, 0x6B, 0x00, 0xC0, 0x15, 0x4B, 0x00, 0x03, 0x25, 0x4A, 0x00, 0x00,
    0x30, 0xA5, 0x00, 0x00, 0x24, 0xA5, 0x01, 0x47, 0x25, 0x4A, 0x01, 0x7B,
    0x15, 0x45, 0x00, 0x08, 0x31, 0x4A, 0x00, 0x00, 0x3C, 0x0B, 0x80, 0x12,
    0x91, 0x6B, 0xA6, 0x72, 0x31, 0x6B, 0x00, 0xC0, 0x15, 0x4B, 0x00, 0x03,
    0x25, 0x4A, 0x00, 0x00, 0x30, 0xA5, 0x00, 0x00, 0x24, 0xA5, 0x00, 0xE7,
    0x25, 0x4A, 0x00, 0xBE, 0x15, 0x45, 0x00, 0x08, 0x31, 0x4A, 0x00, 0x00,
    0x3C, 0x0B, 0x80, 0x12, 0x91, 0x6B, 0xA6, 0x73, 0x31, 0x6B, 0x00, 0x03,
    0x15, 0x4B, 0x00, 0x03, 0x25, 0x4A, 0x00, 0x00, 0x30, 0xA5, 0x00, 0x00,
    0x24, 0xA5, 0x00, 0xE9, 0x08, 0x0E, 0x46, 0x43,
];

pub const INITIAL_SAVE_FILE: &[u8] = &[
    0xA2, 0x28, 0x80, 0x20, 0x24, 0x05, 0x80, 0x02, 0x24, 0x0F, 0x00, 0x84,
    0x24, 0x18, 0x00, 0x01, 0x24, 0x19, 0x00, 0x08, 0x24, 0x08, 0x00, 0x80,
    0xA6, 0x25, 0x00, 0xD8, 0xA2, 0x2F, 0x00, 0xDA, 0xA2, 0x38, 0x01, 0x65,
    0xA2, 0x39, 0x09, 0xB6, 0xA2, 0x28, 0x0A, 0x24, 0xA2, 0x38, 0x0A, 0xCE,
    0xA2, 0x28, 0x0A, 0xCF, 0xA2, 0x28, 0x0A, 0xE8, 0x24, 0x05, 0x00, 0x20,
    0xA2, 0x25, 0x0B, 0x3F, 0xA2, 0x28, 0x0E, 0xDC, 0xA2, 0x25, 0x0E, 0xDD,
    0xA2, 0x25, 0x0E, 0xED, 0xA2, 0x38, 0x0E, 0xF9, 0xA2, 0x25, 0x00, 0xA7,
    0xA2, 0x28, 0x0E, 0xE0, 0xA2, 0x38, 0x02, 0x0E, 0x24, 0x05, 0x01, 0xFF,
    0x24, 0x0F, 0x01, 0xFB, 0x24, 0x18, 0x07, 0xFF, 0x24, 0x19, 0x00, 0x04,
    0x24, 0x08, 0x00, 0x30, 0xA6, 0x25, 0x0E, 0xE2, 0xA6, 0x2F, 0x0E, 0xE8,
    0xA6, 0x38, 0x0E, 0xEA, 0xA2, 0x28, 0x0E, 0xE7, 0xA2, 0x39, 0x0F, 0x1A,
    0x24, 0x08, 0x10, 0x20, 0x24, 0x19, 0x00, 0x2C, 0x24, 0x18, 0x00, 0x49,
    0x24, 0x0F, 0x00, 0x02, 0x24, 0x05, 0x00, 0x40, 0xA6, 0x28, 0x0E, 0xD4,
    0xA2, 0x39, 0x00, 0x81, 0xA2, 0x38, 0x00, 0xF6, 0xA2, 0x2F, 0x00, 0x3F,
    0xA2, 0x25, 0x0A, 0x42, 0x92, 0x25, 0x0E, 0xDC, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0xA2, 0x25, 0x0E, 0xDC, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x03, 0xE0, 0x00, 0x08,
];
