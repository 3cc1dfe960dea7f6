//! Files, read and written through their handle or mapped in memory.

decl_handle! {
    /// Handle to an open file.
    Hfile: "HFILE" => windows::Win32::Foundation::HANDLE
}

decl_handle! {
    /// Handle to a file mapping object.
    Hfilemap: "HFILEMAP" => windows::Win32::Foundation::HANDLE
}

/// How [`File::open`] and [`FileMapped::open`] open a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileAccess {
    /// The file must exist; it's opened for reading only.
    ExistingReadOnly,
    /// The file must exist; it's opened for reading and writing.
    ExistingReadWrite,
    /// The file is created if it doesn't exist, and opened for reading and
    /// writing.
    OpenOrCreateReadWrite,
}

impl FileAccess {
    pub const fn is_writable(self) -> bool {
        !matches!(self, Self::ExistingReadOnly)
    }

    pub const fn creates(self) -> bool {
        matches!(self, Self::OpenOrCreateReadWrite)
    }
}

#[cfg(windows)]
pub use self::native::*;

#[cfg(windows)]
mod native {
    use std::os::windows::ffi::OsStrExt;
    use std::path::Path;

    use windows::core::PCWSTR;
    use windows::Win32::Foundation::HANDLE;
    use windows::Win32::Storage::FileSystem::{
        CreateFileW, GetFileSizeEx, ReadFile, SetEndOfFile, SetFilePointerEx, WriteFile,
        FILE_ATTRIBUTE_NORMAL, FILE_BEGIN, FILE_SHARE_READ, OPEN_ALWAYS, OPEN_EXISTING,
    };
    use windows::Win32::System::Memory::{
        CreateFileMappingW, MapViewOfFile, UnmapViewOfFile, FILE_MAP_READ, FILE_MAP_WRITE,
        MEMORY_MAPPED_VIEW_ADDRESS, PAGE_READONLY, PAGE_READWRITE,
    };

    use super::{FileAccess, Hfile, Hfilemap};
    use crate::co;
    use crate::error::SysResult;
    use crate::kernel::funcs::get_last_error;
    use crate::kernel::process::CloseHandleGuard;

    const GENERIC_READ: u32 = 0x8000_0000;
    const GENERIC_WRITE: u32 = 0x4000_0000;

    fn wide_path(path: &Path) -> Vec<u16> {
        path.as_os_str().encode_wide().chain(std::iter::once(0)).collect()
    }

    /// An open file, closed when dropped.
    ///
    /// # Example
    /// ```no_run
    /// use safewin::{File, FileAccess};
    ///
    /// let f = File::open("C:\\Temp\\notes.txt", FileAccess::OpenOrCreateReadWrite)?;
    /// f.erase_and_write(b"first line\r\n")?;
    /// assert_eq!(f.read_all()?, b"first line\r\n");
    /// # Ok::<_, safewin::co::SysError>(())
    /// ```
    #[derive(Debug)]
    pub struct File {
        hfile: CloseHandleGuard<Hfile>,
        access: FileAccess,
    }

    impl File {
        /// `CreateFile`. Other processes may read the file while it's open.
        pub fn open(path: impl AsRef<Path>, access: FileAccess) -> SysResult<File> {
            let wpath = wide_path(path.as_ref());
            let desired = if access.is_writable() {
                GENERIC_READ | GENERIC_WRITE
            } else {
                GENERIC_READ
            };
            let disposition = if access.creates() { OPEN_ALWAYS } else { OPEN_EXISTING };

            let handle = unsafe {
                CreateFileW(
                    PCWSTR(wpath.as_ptr()),
                    desired,
                    FILE_SHARE_READ,
                    None,
                    disposition,
                    FILE_ATTRIBUTE_NORMAL,
                    HANDLE::default(),
                )?
            };
            Ok(File {
                hfile: unsafe { CloseHandleGuard::new(Hfile::from(handle)) },
                access,
            })
        }

        /// Returns the underlying handle, still owned by the object.
        pub fn hfile(&self) -> Hfile {
            *self.hfile
        }

        pub fn access(&self) -> FileAccess {
            self.access
        }

        /// `GetFileSizeEx`.
        pub fn size(&self) -> SysResult<u64> {
            let mut size = 0i64;
            unsafe { GetFileSizeEx(HANDLE::from(self.hfile()), &mut size)? };
            Ok(size as u64)
        }

        /// `SetFilePointerEx`: moves the pointer to `offset` from the
        /// beginning.
        pub fn set_pointer(&self, offset: u64) -> SysResult<()> {
            unsafe { SetFilePointerEx(HANDLE::from(self.hfile()), offset as i64, None, FILE_BEGIN)? };
            Ok(())
        }

        /// `ReadFile`: reads from the current pointer, returning how many bytes
        /// were read. Zero means the end of the file.
        pub fn read(&self, buf: &mut [u8]) -> SysResult<usize> {
            let mut read = 0u32;
            unsafe { ReadFile(HANDLE::from(self.hfile()), Some(buf), Some(&mut read), None)? };
            Ok(read as usize)
        }

        /// Reads the whole file, from the beginning.
        pub fn read_all(&self) -> SysResult<Vec<u8>> {
            self.set_pointer(0)?;
            let mut buf = vec![0u8; self.size()? as usize];
            let mut total = 0;
            while total < buf.len() {
                match self.read(&mut buf[total..])? {
                    0 => break,
                    n => total += n,
                }
            }
            buf.truncate(total);
            Ok(buf)
        }

        /// `WriteFile`: writes all the bytes at the current pointer.
        pub fn write(&self, data: &[u8]) -> SysResult<()> {
            let mut written = 0u32;
            unsafe { WriteFile(HANDLE::from(self.hfile()), Some(data), Some(&mut written), None)? };
            if written as usize != data.len() {
                return Err(co::SysError::WRITE_FAULT);
            }
            Ok(())
        }

        /// `SetEndOfFile`: truncates or extends the file to `size` bytes, and
        /// leaves the pointer at the end.
        pub fn resize(&self, size: u64) -> SysResult<()> {
            self.set_pointer(size)?;
            unsafe { SetEndOfFile(HANDLE::from(self.hfile()))? };
            Ok(())
        }

        /// Replaces the whole content of the file.
        pub fn erase_and_write(&self, data: &[u8]) -> SysResult<()> {
            self.resize(0)?;
            self.write(data)
        }
    }

    /// A file mapped in memory, whose content is seen as a slice.
    ///
    /// Empty files are not mapped, and give an empty slice.
    #[derive(Debug)]
    pub struct FileMapped {
        view: *mut u8,
        size: usize,
        hmap: Option<CloseHandleGuard<Hfilemap>>,
        file: File,
    }

    impl FileMapped {
        /// Opens and maps the whole file.
        pub fn open(path: impl AsRef<Path>, access: FileAccess) -> SysResult<FileMapped> {
            let file = File::open(path, access)?;
            let size = file.size()? as usize;
            if size == 0 {
                return Ok(FileMapped {
                    view: std::ptr::null_mut(),
                    size,
                    hmap: None,
                    file,
                });
            }

            let (protect, map_access) = if access.is_writable() {
                (PAGE_READWRITE, FILE_MAP_READ | FILE_MAP_WRITE)
            } else {
                (PAGE_READONLY, FILE_MAP_READ)
            };
            let hmap = unsafe {
                CreateFileMappingW(HANDLE::from(file.hfile()), None, protect, 0, 0, PCWSTR::null())?
            };
            let hmap = unsafe { CloseHandleGuard::new(Hfilemap::from(hmap)) };

            let view = unsafe { MapViewOfFile(HANDLE::from(*hmap), map_access, 0, 0, 0) };
            if view.Value.is_null() {
                return Err(get_last_error());
            }
            Ok(FileMapped {
                view: view.Value as *mut u8,
                size,
                hmap: Some(hmap),
                file,
            })
        }

        /// The underlying file.
        pub fn file(&self) -> &File {
            &self.file
        }

        pub fn size(&self) -> usize {
            self.size
        }

        /// The mapped content.
        pub fn as_slice(&self) -> &[u8] {
            if self.view.is_null() {
                return &[];
            }
            unsafe { std::slice::from_raw_parts(self.view, self.size) }
        }

        /// The mapped content, writable; `None` if the file was opened
        /// read-only.
        pub fn as_mut_slice(&mut self) -> Option<&mut [u8]> {
            if !self.file.access().is_writable() {
                return None;
            }
            if self.view.is_null() {
                return Some(&mut []);
            }
            Some(unsafe { std::slice::from_raw_parts_mut(self.view, self.size) })
        }
    }

    impl Drop for FileMapped {
        fn drop(&mut self) {
            if self.view.is_null() {
                return;
            }
            let addr = MEMORY_MAPPED_VIEW_ADDRESS {
                Value: self.view as *mut std::ffi::c_void,
            };
            if let Err(e) = unsafe { UnmapViewOfFile(addr) } {
                tracing::error!(error = %co::SysError::from(e), "Failed to unmap file view");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_flags() {
        assert!(!FileAccess::ExistingReadOnly.is_writable());
        assert!(FileAccess::ExistingReadWrite.is_writable());
        assert!(!FileAccess::ExistingReadWrite.creates());
        assert!(FileAccess::OpenOrCreateReadWrite.creates());
    }

    #[cfg(windows)]
    #[test]
    fn test_file_write_read_resize() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.bin");

        let f = File::open(&path, FileAccess::OpenOrCreateReadWrite).unwrap();
        f.erase_and_write(b"hello, world").unwrap();
        assert_eq!(f.size().unwrap(), 12);
        assert_eq!(f.read_all().unwrap(), b"hello, world");

        f.resize(5).unwrap();
        assert_eq!(f.read_all().unwrap(), b"hello");
    }

    #[cfg(windows)]
    #[test]
    fn test_open_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = File::open(dir.path().join("nope.txt"), FileAccess::ExistingReadOnly).unwrap_err();
        assert_eq!(err, crate::co::SysError::FILE_NOT_FOUND);
    }

    #[cfg(windows)]
    #[test]
    fn test_mapped_read_and_write() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mapped.txt");
        std::fs::write(&path, b"abcdef").unwrap();

        {
            let mut mapped = FileMapped::open(&path, FileAccess::ExistingReadWrite).unwrap();
            assert_eq!(mapped.as_slice(), b"abcdef");
            mapped.as_mut_slice().unwrap()[0] = b'X';
        }
        assert_eq!(std::fs::read(&path).unwrap(), b"Xbcdef");

        let mut ro = FileMapped::open(&path, FileAccess::ExistingReadOnly).unwrap();
        assert!(ro.as_mut_slice().is_none());
        assert_eq!(ro.size(), 6);
    }

    #[cfg(windows)]
    #[test]
    fn test_mapped_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.txt");
        std::fs::write(&path, b"").unwrap();

        let mapped = FileMapped::open(&path, FileAccess::ExistingReadOnly).unwrap();
        assert!(mapped.as_slice().is_empty());
    }
}
