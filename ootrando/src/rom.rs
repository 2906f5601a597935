use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anyhow::{ensure, Result};
use hashbrown::HashSet;
use log::warn;

use crate::error::PatchError;
use crate::settings::ChecksumPolicy;

/// MD5 of the unmodified JP 1.0 release, decompressed.
pub const BASE_ROM_MD5: &str = "03a63945398191337e896e5771f77173";
/// MD5 of the image the patch tables were written against.
pub const RANDOMIZER_BASE_MD5: &str = "dc5840f0d1ef7b51009c5625a054b3dd";

/// Size of the decompressed image the patch tables address.
pub const ROM_SIZE: usize = 0x400_0000;

pub const BASE_ROM_NAME: &str = "Zelda no Densetsu - Toki no Ocarina (Japan) (v1.0), decompressed";

#[derive(Clone, Debug)]
pub struct Rom {
    pub data: Vec<u8>,
    track_touched: bool,
    touched: HashSet<usize>,
}

impl Rom {
    pub fn new(data: Vec<u8>) -> Self {
        Rom {
            data,
            track_touched: false,
            touched: HashSet::new(),
        }
    }

    pub fn enable_tracking(&mut self) {
        self.track_touched = true;
        self.touched.clear();
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read(path).map_err(|source| PatchError::Io {
            path: path.to_owned(),
            source,
        })?;
        Ok(Rom::new(data))
    }

    // The image goes to a sibling temporary file first so that a failed write
    // never leaves a truncated ROM at `path`.
    pub fn save(&self, path: &Path) -> Result<()> {
        let mut tmp_name: OsString = path.as_os_str().to_owned();
        tmp_name.push(".tmp");
        let tmp_path = PathBuf::from(tmp_name);
        if let Err(source) = std::fs::write(&tmp_path, &self.data) {
            let _ = std::fs::remove_file(&tmp_path);
            return Err(PatchError::Io {
                path: tmp_path,
                source,
            }
            .into());
        }
        if let Err(source) = std::fs::rename(&tmp_path, path) {
            let _ = std::fs::remove_file(&tmp_path);
            return Err(PatchError::Io {
                path: path.to_owned(),
                source,
            }
            .into());
        }
        Ok(())
    }

    fn check_bounds(&self, addr: usize, width: usize) -> Result<()> {
        ensure!(
            addr.checked_add(width).is_some_and(|end| end <= self.data.len()),
            PatchError::AddressOutOfRange {
                addr,
                width,
                len: self.data.len(),
            }
        );
        Ok(())
    }

    pub fn read_u8(&self, addr: usize) -> Result<isize> {
        self.check_bounds(addr, 1)?;
        Ok(self.data[addr] as isize)
    }

    pub fn read_u16(&self, addr: usize) -> Result<isize> {
        self.check_bounds(addr, 2)?;
        let b0 = self.data[addr] as isize;
        let b1 = self.data[addr + 1] as isize;
        Ok(b0 | b1 << 8)
    }

    pub fn read_u32(&self, addr: usize) -> Result<isize> {
        self.check_bounds(addr, 4)?;
        let b0 = self.data[addr] as isize;
        let b1 = self.data[addr + 1] as isize;
        let b2 = self.data[addr + 2] as isize;
        let b3 = self.data[addr + 3] as isize;
        Ok(b0 | b1 << 8 | b2 << 16 | b3 << 24)
    }

    pub fn read_n(&self, addr: usize, n: usize) -> Result<&[u8]> {
        self.check_bounds(addr, n)?;
        Ok(&self.data[addr..(addr + n)])
    }

    pub fn write_u8(&mut self, addr: usize, x: isize) -> Result<()> {
        self.check_bounds(addr, 1)?;
        ensure!(
            (0..=0xFF).contains(&x),
            PatchError::ValueOutOfRange {
                addr,
                value: x,
                width: 1
            }
        );
        self.data[addr] = x as u8;
        if self.track_touched {
            self.touched.insert(addr);
        }
        Ok(())
    }

    // Stored low byte first. The value is masked to 16 bits, so -1 is stored as FF FF.
    pub fn write_u16(&mut self, addr: usize, x: isize) -> Result<()> {
        self.check_bounds(addr, 2)?;
        let x = x & 0xFFFF;
        self.write_u8(addr, x & 0xFF)?;
        self.write_u8(addr + 1, x >> 8)?;
        Ok(())
    }

    // Same as `write_u16` with a 32-bit mask.
    pub fn write_u32(&mut self, addr: usize, x: isize) -> Result<()> {
        self.check_bounds(addr, 4)?;
        let x = x & 0xFFFF_FFFF;
        self.write_u8(addr, x & 0xFF)?;
        self.write_u8(addr + 1, (x >> 8) & 0xFF)?;
        self.write_u8(addr + 2, (x >> 16) & 0xFF)?;
        self.write_u8(addr + 3, x >> 24)?;
        Ok(())
    }

    pub fn write_n(&mut self, addr: usize, x: &[u8]) -> Result<()> {
        self.check_bounds(addr, x.len())?;
        for (i, &b) in x.iter().enumerate() {
            self.write_u8(addr + i, b as isize)?;
        }
        Ok(())
    }

    // Returns a list of [start, end) ranges.
    #[allow(clippy::mut_range_bound)]
    pub fn get_modified_ranges(&self) -> Vec<(usize, usize)> {
        let mut addresses: Vec<usize> = self.touched.iter().copied().collect();
        addresses.sort();
        let mut ranges: Vec<(usize, usize)> = vec![];

        let mut i = 0;
        'r: while i < addresses.len() {
            for j in i..addresses.len() - 1 {
                if addresses[j + 1] != addresses[j] + 1 {
                    ranges.push((addresses[i], addresses[j] + 1));
                    i = j + 1;
                    continue 'r;
                }
            }
            ranges.push((addresses[i], addresses[addresses.len() - 1] + 1));
            break;
        }
        assert!(ranges.iter().map(|x| x.1 - x.0).sum::<usize>() == addresses.len());
        ranges
    }

    pub fn md5_hex(&self) -> String {
        crypto_hash::hex_digest(crypto_hash::Algorithm::MD5, &self.data)
    }

    /// Compares the image digest against the two reference digests. A mismatch
    /// against the base release is only ever a warning; a mismatch against the
    /// randomizer base is an error under [`ChecksumPolicy::Enforce`].
    pub fn verify_checksum(&self, policy: ChecksumPolicy) -> Result<()> {
        if policy == ChecksumPolicy::Disabled {
            return Ok(());
        }
        check_digest(&self.md5_hex(), policy)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct DigestMatch {
    base: bool,
    randomizer_base: bool,
}

fn compare_digest(digest: &str) -> DigestMatch {
    DigestMatch {
        base: digest == BASE_ROM_MD5,
        randomizer_base: digest == RANDOMIZER_BASE_MD5,
    }
}

fn check_digest(digest: &str, policy: ChecksumPolicy) -> Result<()> {
    let matched = compare_digest(digest);
    if !matched.base {
        warn!(
            "Supplied base ROM (MD5 {digest}) does not match the known MD5 for the JP 1.0 release; \
             it may not be a recognized base image. Will try to patch anyway."
        );
    }
    if !matched.randomizer_base {
        let err = PatchError::Checksum {
            expected: RANDOMIZER_BASE_MD5.to_string(),
            actual: digest.to_string(),
            message: format!(
                "provided base ROM is unsuitable for patching, please provide a \"{BASE_ROM_NAME}\" image"
            ),
        };
        if policy == ChecksumPolicy::Enforce {
            return Err(err.into());
        }
        warn!("{err}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn error_kind(err: &anyhow::Error) -> &PatchError {
        err.downcast_ref::<PatchError>().unwrap()
    }

    #[test]
    fn write_u16_low_byte_first() -> Result<()> {
        let mut rom = Rom::new(vec![0; 8]);
        rom.write_u16(2, 0x1234)?;
        assert_eq!(rom.data, vec![0, 0, 0x34, 0x12, 0, 0, 0, 0]);
        assert_eq!(rom.read_u16(2)?, 0x1234);

        // Values wider than 16 bits are masked.
        rom.write_u16(0, 0x5ABCD)?;
        assert_eq!(rom.read_u16(0)?, 0xABCD);
        Ok(())
    }

    #[test]
    fn write_u32_low_byte_first() -> Result<()> {
        let mut rom = Rom::new(vec![0; 6]);
        rom.write_u32(1, 0x8012_D2A0)?;
        assert_eq!(rom.data, vec![0, 0xA0, 0xD2, 0x12, 0x80, 0]);
        assert_eq!(rom.read_u32(1)?, 0x8012_D2A0);
        Ok(())
    }

    #[test]
    fn write_out_of_bounds() {
        let mut rom = Rom::new(vec![0; 4]);
        let err = rom.write_u8(4, 1).unwrap_err();
        assert!(matches!(
            error_kind(&err),
            PatchError::AddressOutOfRange {
                addr: 4,
                width: 1,
                len: 4
            }
        ));
        let err = rom.write_u16(3, 1).unwrap_err();
        assert!(matches!(
            error_kind(&err),
            PatchError::AddressOutOfRange { width: 2, .. }
        ));
        let err = rom.write_n(2, &[1, 2, 3]).unwrap_err();
        assert!(matches!(
            error_kind(&err),
            PatchError::AddressOutOfRange { width: 3, .. }
        ));
        assert!(rom.write_u8(usize::MAX, 0).is_err());
        // A failed multi-byte write leaves the buffer untouched.
        assert_eq!(rom.data, vec![0; 4]);
    }

    #[test]
    fn write_u8_rejects_wide_values() {
        let mut rom = Rom::new(vec![0; 4]);
        let err = rom.write_u8(0, 0x100).unwrap_err();
        assert!(matches!(
            error_kind(&err),
            PatchError::ValueOutOfRange {
                addr: 0,
                value: 0x100,
                width: 1
            }
        ));
        assert!(rom.write_u8(0, -1).is_err());
        assert!(rom.write_u8(0, 0xFF).is_ok());
    }

    #[test]
    fn wide_writes_mask_negative_values() -> Result<()> {
        let mut rom = Rom::new(vec![0; 8]);
        rom.write_u16(0, -1)?;
        rom.write_u32(4, -2)?;
        assert_eq!(rom.data, vec![0xFF, 0xFF, 0, 0, 0xFE, 0xFF, 0xFF, 0xFF]);
        assert_eq!(rom.read_u16(0)?, 0xFFFF);
        assert_eq!(rom.read_u32(4)?, 0xFFFF_FFFE);
        Ok(())
    }

    #[test]
    fn modified_ranges() -> Result<()> {
        let mut rom = Rom::new(vec![0; 32]);
        rom.write_u8(0, 1)?;
        rom.enable_tracking();
        rom.write_n(4, &[1, 2, 3])?;
        rom.write_u16(7, 0xFFFF)?;
        rom.write_u8(20, 0)?;
        assert_eq!(rom.get_modified_ranges(), vec![(4, 9), (20, 21)]);
        Ok(())
    }

    #[test]
    fn save_and_load() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("out.z64");
        let rom = Rom::new((0..=255).collect());
        rom.save(&path)?;
        let loaded = Rom::load(&path)?;
        assert_eq!(loaded.data, rom.data);
        assert!(!dir.path().join("out.z64.tmp").exists());
        Ok(())
    }

    #[test]
    fn load_missing_file() {
        let err = Rom::load(Path::new("no/such/rom.z64")).unwrap_err();
        match error_kind(&err) {
            PatchError::Io { path, .. } => assert_eq!(path, Path::new("no/such/rom.z64")),
            e => panic!("unexpected error {e}"),
        }
    }

    #[test]
    fn save_to_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.z64");
        let err = Rom::new(vec![1, 2, 3]).save(&path).unwrap_err();
        assert!(matches!(error_kind(&err), PatchError::Io { .. }));
    }

    #[test]
    fn checksum_policies() {
        let rom = Rom::new(vec![]);
        assert_eq!(rom.md5_hex(), "d41d8cd98f00b204e9800998ecf8427e");
        assert!(rom.verify_checksum(ChecksumPolicy::Disabled).is_ok());
        assert!(rom.verify_checksum(ChecksumPolicy::Warn).is_ok());
        let err = rom.verify_checksum(ChecksumPolicy::Enforce).unwrap_err();
        match error_kind(&err) {
            PatchError::Checksum {
                expected, actual, ..
            } => {
                assert_eq!(expected, RANDOMIZER_BASE_MD5);
                assert_eq!(actual, "d41d8cd98f00b204e9800998ecf8427e");
            }
            e => panic!("unexpected error {e}"),
        }
    }

    #[test]
    fn digest_comparison() {
        assert_eq!(
            compare_digest(BASE_ROM_MD5),
            DigestMatch {
                base: true,
                randomizer_base: false
            }
        );
        assert_eq!(
            compare_digest(RANDOMIZER_BASE_MD5),
            DigestMatch {
                base: false,
                randomizer_base: true
            }
        );
        assert_eq!(
            compare_digest("d41d8cd98f00b204e9800998ecf8427e"),
            DigestMatch {
                base: false,
                randomizer_base: false
            }
        );
    }

    #[test]
    fn digest_policy() {
        assert!(check_digest(RANDOMIZER_BASE_MD5, ChecksumPolicy::Enforce).is_ok());
        assert!(check_digest(RANDOMIZER_BASE_MD5, ChecksumPolicy::Warn).is_ok());
        // The unmodified release is recognized but is not what the tables target.
        assert!(check_digest(BASE_ROM_MD5, ChecksumPolicy::Warn).is_ok());
        let err = check_digest(BASE_ROM_MD5, ChecksumPolicy::Enforce).unwrap_err();
        match error_kind(&err) {
            PatchError::Checksum { actual, message, .. } => {
                assert_eq!(actual, BASE_ROM_MD5);
                assert!(message.contains(BASE_ROM_NAME));
            }
            e => panic!("unexpected error {e}"),
        }
    }
}
