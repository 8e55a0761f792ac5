// src/delivery/mod.rs
//! Selection & delivery: turns a chosen template into a downloadable payload
//! and saves payloads into the download directory.

use std::{
    fs::{self, File, OpenOptions},
    io::{self, Read, Write},
    path::{Path, PathBuf},
};

use tracing::{info, warn};

use crate::{
    config::Config,
    error::AppError,
    fs::{mime_for, scan},
};

/// A file ready to hand to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payload {
    /// File name, echoed back unchanged
    pub file_name: String,
    /// Content type derived from the extension
    pub mime: &'static str,
    /// Full file contents
    pub bytes: Vec<u8>,
}

/// Reads templates out of the configured directory.
#[derive(Debug, Clone)]
pub struct DeliveryService {
    config: Config,
}

impl DeliveryService {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Current selectable entries.
    pub fn entries(&self) -> Vec<String> {
        scan(&self.config.template_dir, &self.config)
    }

    /// Read `file_name` from the template directory.
    ///
    /// Every call re-reads the file; nothing is cached between deliveries.
    pub fn deliver(&self, file_name: &str) -> Result<Payload, AppError> {
        let path = self.config.template_dir.join(file_name);

        let bytes = read_all(&path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                warn!(file = file_name, path = %path.display(), "selected file disappeared");
                AppError::SelectedFileMissing {
                    file_name: file_name.to_string(),
                    path: path.clone(),
                }
            } else {
                warn!(file = file_name, error = %source, "failed to read selected file");
                AppError::DeliveryIo {
                    file_name: file_name.to_string(),
                    source,
                }
            }
        })?;

        info!(file = file_name, size = bytes.len(), "prepared download");
        Ok(Payload {
            file_name: file_name.to_string(),
            mime: mime_for(file_name),
            bytes,
        })
    }
}

fn read_all(path: &Path) -> io::Result<Vec<u8>> {
    let mut file = File::open(path)?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)?;
    Ok(bytes)
}

/// Write `payload` into `download_dir`, returning the path written.
///
/// An existing file is never overwritten: `name.xlsx` becomes
/// `name (1).xlsx`, `name (2).xlsx` and so on.
pub fn save_payload(payload: &Payload, download_dir: &Path) -> Result<PathBuf, AppError> {
    let io_err = |source| AppError::DeliveryIo {
        file_name: payload.file_name.clone(),
        source,
    };

    fs::create_dir_all(download_dir).map_err(io_err)?;

    let mut attempt = 0u32;
    loop {
        let target = download_dir.join(numbered_name(&payload.file_name, attempt));
        match OpenOptions::new().write(true).create_new(true).open(&target) {
            Ok(file) => {
                write_or_discard(file, &target, &payload.bytes).map_err(io_err)?;
                info!(path = %target.display(), "saved download");
                return Ok(target);
            }
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => attempt += 1,
            Err(e) => return Err(io_err(e)),
        }
    }
}

/// Write `bytes` through `writer`; on failure remove the half-written `target`.
fn write_or_discard(mut writer: impl Write, target: &Path, bytes: &[u8]) -> io::Result<()> {
    let result = writer.write_all(bytes).and_then(|()| writer.flush());
    drop(writer);

    if let Err(e) = result {
        if let Err(rm) = fs::remove_file(target) {
            warn!(path = %target.display(), error = %rm, "could not remove partial download");
        }
        return Err(e);
    }
    Ok(())
}

/// `report.xlsx` with n = 2 becomes `report (2).xlsx`; n = 0 is unchanged.
fn numbered_name(file_name: &str, n: u32) -> String {
    if n == 0 {
        return file_name.to_string();
    }
    match file_name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => format!("{stem} ({n}).{ext}"),
        _ => format!("{file_name} ({n})"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::{XLSX_MIME, XLS_MIME};
    use tempfile::TempDir;

    fn service(dir: &TempDir) -> DeliveryService {
        DeliveryService::new(Config::new(dir.path(), dir.path().join("out")))
    }

    #[test]
    fn delivers_exact_bytes() {
        let dir = TempDir::new().unwrap();
        let bytes = vec![0x50, 0x4b, 0x03, 0x04, 0x00, 0xff];
        fs::write(dir.path().join("report.xlsx"), &bytes).unwrap();

        let payload = service(&dir).deliver("report.xlsx").unwrap();
        assert_eq!(payload.file_name, "report.xlsx");
        assert_eq!(payload.mime, XLSX_MIME);
        assert_eq!(payload.bytes, bytes);
    }

    #[test]
    fn redelivery_rereads_the_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a.xls");
        fs::write(&path, b"one").unwrap();
        let svc = service(&dir);

        assert_eq!(svc.deliver("a.xls").unwrap().bytes, b"one");
        fs::write(&path, b"two").unwrap();
        let again = svc.deliver("a.xls").unwrap();
        assert_eq!(again.bytes, b"two");
        assert_eq!(again.mime, XLS_MIME);
    }

    #[test]
    fn missing_file_is_reported_by_name() {
        let dir = TempDir::new().unwrap();
        match service(&dir).deliver("gone.xlsx") {
            Err(AppError::SelectedFileMissing { file_name, path }) => {
                assert_eq!(file_name, "gone.xlsx");
                assert_eq!(path, dir.path().join("gone.xlsx"));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn directory_in_place_of_file_is_generic_error() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("odd.xlsx")).unwrap();

        let err = service(&dir).deliver("odd.xlsx").unwrap_err();
        assert!(matches!(err, AppError::DeliveryIo { .. }));
    }

    #[test]
    fn save_never_overwrites() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("out");
        let payload = Payload {
            file_name: "report.xlsx".into(),
            mime: XLSX_MIME,
            bytes: b"abc".to_vec(),
        };

        let first = save_payload(&payload, &out).unwrap();
        let second = save_payload(&payload, &out).unwrap();

        assert_eq!(first, out.join("report.xlsx"));
        assert_eq!(second, out.join("report (1).xlsx"));
        assert_eq!(fs::read(&second).unwrap(), b"abc");
    }

    struct DiskFull;

    impl Write for DiskFull {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "no space left on device"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn failed_write_leaves_no_partial_file() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("report.xlsx");
        fs::write(&target, b"ab").unwrap();

        let err = write_or_discard(DiskFull, &target, b"abc").unwrap_err();
        assert_eq!(err.to_string(), "no space left on device");
        assert!(!target.exists());
    }

    #[test]
    fn successful_write_keeps_file() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("report.xlsx");
        let file = File::create(&target).unwrap();

        write_or_discard(file, &target, b"abc").unwrap();
        assert_eq!(fs::read(&target).unwrap(), b"abc");
    }

    #[test]
    fn numbering_keeps_extension() {
        assert_eq!(numbered_name("a.xlsx", 0), "a.xlsx");
        assert_eq!(numbered_name("a.b.xls", 3), "a.b (3).xls");
        assert_eq!(numbered_name("noext", 1), "noext (1)");
        assert_eq!(numbered_name(".xlsx", 1), ".xlsx (1)");
    }
}
