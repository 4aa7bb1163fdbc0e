extern crate crc;
use super::program::{Program, PROGRAM_SPACE};
use crate::error;
use crate::lang::Error;
use crc::crc32;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

type Result<T> = std::result::Result<T, Error>;

/// Number of program slots.
pub const STORED_PROGRAMS: usize = 4;
/// Program memory followed by its CRC-32.
pub const IMAGE_LEN: usize = PROGRAM_SPACE + 4;

/// ## Program store
///
/// Nonvolatile program slots kept as files in one directory. Every
/// slot holds the whole program memory followed by a little endian
/// CRC-32 so a damaged slot is never run.
#[derive(Debug, Clone)]
pub struct ProgramStore {
    dir: PathBuf,
}

impl ProgramStore {
    pub fn new<P: AsRef<Path>>(dir: P) -> ProgramStore {
        ProgramStore {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self, slot: usize) -> Result<PathBuf> {
        if slot >= STORED_PROGRAMS {
            return Err(error!(BadStoreNumber; format!("{}", slot)));
        }
        Ok(self.dir.join(format!("program{}.ubp", slot)))
    }

    pub fn save(&self, slot: usize, program: &Program) -> Result<()> {
        let path = self.path(slot)?;
        let image = program.image();
        let mut bytes = Vec::with_capacity(IMAGE_LEN);
        bytes.extend_from_slice(&image);
        bytes.extend_from_slice(&crc32::checksum_ieee(&image).to_le_bytes());
        fs::create_dir_all(&self.dir).map_err(io_error)?;
        fs::write(&path, bytes).map_err(io_error)?;
        log::info!("saved {} bytes to {}", program.len(), path.display());
        Ok(())
    }

    pub fn load(&self, slot: usize) -> Result<Program> {
        let path = self.path(slot)?;
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(error) => {
                return match error.kind() {
                    ErrorKind::NotFound => {
                        Err(error!(FileNotFound; path.display().to_string()))
                    }
                    _ => Err(io_error(error)),
                }
            }
        };
        if bytes.len() != IMAGE_LEN {
            return Err(error!(DiskIoError; format!("BAD LENGTH {}", bytes.len())));
        }
        let (image, sum) = bytes.split_at(PROGRAM_SPACE);
        let mut stored = [0; 4];
        stored.copy_from_slice(sum);
        if crc32::checksum_ieee(image) != u32::from_le_bytes(stored) {
            return Err(error!(DiskIoError; "BAD CHECKSUM"));
        }
        Ok(Program::from_bytes(image))
    }

    pub fn is_stored(&self, slot: usize) -> bool {
        match self.path(slot) {
            Ok(path) => path.is_file(),
            Err(_) => false,
        }
    }
}

fn io_error(error: std::io::Error) -> Error {
    error!(DiskIoError; error.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    fn temp_store(name: &str) -> ProgramStore {
        let dir = std::env::temp_dir().join(format!("ubasic-store-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        ProgramStore::new(dir)
    }

    #[test]
    fn test_save_load() {
        let store = temp_store("save");
        let program = Program::from_source("print 'hi'\nend\n").unwrap();
        assert!(!store.is_stored(1));
        store.save(1, &program).unwrap();
        assert!(store.is_stored(1));
        assert_eq!(store.load(1).unwrap(), program);
        assert_eq!(fs::read(store.path(1).unwrap()).unwrap().len(), IMAGE_LEN);
    }

    #[test]
    fn test_missing_and_bad_slot() {
        let store = temp_store("missing");
        assert!(store.load(0).unwrap_err().is(ErrorCode::FileNotFound));
        assert!(store.load(4).unwrap_err().is(ErrorCode::BadStoreNumber));
        assert!(store
            .save(7, &Program::new())
            .unwrap_err()
            .is(ErrorCode::BadStoreNumber));
    }

    #[test]
    fn test_corrupt_slot() {
        let store = temp_store("corrupt");
        store.save(2, &Program::from_source("end\n").unwrap()).unwrap();
        let path = store.path(2).unwrap();
        let mut bytes = fs::read(&path).unwrap();
        bytes[0] = b'x';
        fs::write(&path, &bytes).unwrap();
        assert!(store.load(2).unwrap_err().is(ErrorCode::DiskIoError));
        fs::write(&path, &bytes[..10]).unwrap();
        assert!(store.load(2).unwrap_err().is(ErrorCode::DiskIoError));
    }
}
