//! Reading and writing INI files.
//!
//! ```
//! use safewin::ini::Ini;
//!
//! let mut ini = Ini::parse_str("[window]\r\nwidth=800\r\n")?;
//! assert_eq!(ini.value("Window", "WIDTH"), Some("800"));
//!
//! ini.set_value("window", "height", "600");
//! assert_eq!(ini.serialize(), "[window]\r\nwidth=800\r\nheight=600\r\n");
//! # Ok::<_, safewin::ParseError>(())
//! ```

use std::path::Path;

use crate::error::{ErrResult, ParseError};
use crate::kernel::WString;
#[cfg(windows)]
use crate::kernel::{File, FileAccess, FileMapped};

/// A `key=value` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IniEntry {
    pub key: String,
    pub value: String,
}

/// A `[name]` section and the entries below it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IniSection {
    pub name: String,
    pub entries: Vec<IniEntry>,
}

impl IniSection {
    fn entry_mut(&mut self, key: &str) -> Option<&mut IniEntry> {
        self.entries.iter_mut().find(|e| e.key.eq_ignore_ascii_case(key))
    }
}

/// An INI document. Sections and entries keep their file order.
///
/// Lookups ignore ASCII case, like `GetPrivateProfileString`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ini {
    pub sections: Vec<IniSection>,
}

impl Ini {
    /// Parses INI text.
    ///
    /// Blank lines and lines starting with `;` or `#` are skipped. Entries
    /// before the first section belong nowhere and are dropped with a
    /// warning.
    pub fn parse_str(text: &str) -> Result<Self, ParseError> {
        let mut sections: Vec<IniSection> = Vec::new();

        for (idx, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
                continue;
            }

            if let Some(name) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
                sections.push(IniSection {
                    name: name.trim().to_owned(),
                    entries: Vec::new(),
                });
                continue;
            }

            let Some((key, value)) = line.split_once('=') else {
                return Err(ParseError::Ini {
                    line: idx + 1,
                    text: raw.to_owned(),
                });
            };

            match sections.last_mut() {
                Some(section) => section.entries.push(IniEntry {
                    key: key.trim().to_owned(),
                    value: value.trim().to_owned(),
                }),
                None => tracing::warn!(line = idx + 1, "INI entry outside of any section ignored"),
            }
        }

        Ok(Self { sections })
    }

    /// Reads and parses an INI file, decoding it with
    /// [`WString::parse`](crate::WString::parse).
    ///
    /// On Windows the file is mapped in memory with
    /// [`FileMapped`](crate::FileMapped).
    pub fn parse_from_file(path: impl AsRef<Path>) -> ErrResult<Self> {
        #[cfg(windows)]
        let text = {
            let mapped = FileMapped::open(path, FileAccess::ExistingReadOnly)?;
            WString::parse(mapped.as_slice())?.to_string()
        };
        #[cfg(not(windows))]
        let text = WString::parse(&std::fs::read(path.as_ref())?)?.to_string();

        Ok(Self::parse_str(&text)?)
    }

    /// Serializes to text with CRLF line breaks and a blank line between
    /// sections.
    pub fn serialize(&self) -> String {
        let mut out = String::new();
        for (i, section) in self.sections.iter().enumerate() {
            if i > 0 {
                out.push_str("\r\n");
            }
            out.push('[');
            out.push_str(&section.name);
            out.push_str("]\r\n");
            for entry in &section.entries {
                out.push_str(&entry.key);
                out.push('=');
                out.push_str(&entry.value);
                out.push_str("\r\n");
            }
        }
        out
    }

    /// Writes the serialized text to a file, as UTF-8, replacing its
    /// content. The file is created if needed.
    pub fn serialize_to_file(&self, path: impl AsRef<Path>) -> ErrResult<()> {
        let text = self.serialize();
        #[cfg(windows)]
        File::open(path, FileAccess::OpenOrCreateReadWrite)?.erase_and_write(text.as_bytes())?;
        #[cfg(not(windows))]
        std::fs::write(path, text)?;
        Ok(())
    }

    /// Returns the section with the given name.
    pub fn section(&self, name: &str) -> Option<&IniSection> {
        self.sections.iter().find(|s| s.name.eq_ignore_ascii_case(name))
    }

    /// Returns the value of the key in the section.
    pub fn value(&self, section: &str, key: &str) -> Option<&str> {
        self.section(section)?
            .entries
            .iter()
            .find(|e| e.key.eq_ignore_ascii_case(key))
            .map(|e| e.value.as_str())
    }

    /// Sets the value of the key, appending the section and the entry if
    /// they don't exist yet.
    pub fn set_value(&mut self, section: &str, key: &str, value: &str) {
        let idx = match self
            .sections
            .iter()
            .position(|s| s.name.eq_ignore_ascii_case(section))
        {
            Some(idx) => idx,
            None => {
                self.sections.push(IniSection {
                    name: section.to_owned(),
                    entries: Vec::new(),
                });
                self.sections.len() - 1
            }
        };

        let sec = &mut self.sections[idx];
        match sec.entry_mut(key) {
            Some(entry) => entry.value = value.to_owned(),
            None => sec.entries.push(IniEntry {
                key: key.to_owned(),
                value: value.to_owned(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
; settings
orphan=1

[Main]
  name = My App
path=C:\\Program Files\\app

# second
[Colors]
fg=black
bg=
";

    #[test]
    fn test_parse_sections_and_entries() {
        let ini = Ini::parse_str(SAMPLE).unwrap();
        assert_eq!(ini.sections.len(), 2);
        assert_eq!(ini.value("main", "NAME"), Some("My App"));
        assert_eq!(ini.value("Main", "path"), Some("C:\\Program Files\\app"));
        assert_eq!(ini.value("colors", "bg"), Some(""));
        assert_eq!(ini.value("colors", "missing"), None);
        assert_eq!(ini.value("nowhere", "orphan"), None);
    }

    #[test]
    fn test_parse_error_reports_line() {
        let err = Ini::parse_str("[a]\nx=1\nbogus\n").unwrap_err();
        assert_eq!(
            err,
            ParseError::Ini {
                line: 3,
                text: "bogus".to_owned()
            }
        );
    }

    #[test]
    fn test_set_value_creates_and_updates() {
        let mut ini = Ini::default();
        ini.set_value("A", "k", "1");
        ini.set_value("a", "K", "2");
        ini.set_value("B", "z", "3");
        assert_eq!(ini.sections.len(), 2);
        assert_eq!(ini.value("A", "k"), Some("2"));
        assert_eq!(ini.serialize(), "[A]\r\nk=2\r\n\r\n[B]\r\nz=3\r\n");
    }

    #[test]
    fn test_file_roundtrip_utf16() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cfg.ini");

        // UTF-16 LE with BOM, as Notepad used to save.
        let mut bytes = vec![0xff, 0xfe];
        for ch in "[Über]\r\nkey=välue\r\n".encode_utf16() {
            bytes.extend_from_slice(&ch.to_le_bytes());
        }
        std::fs::write(&path, bytes).unwrap();

        let mut ini = Ini::parse_from_file(&path).unwrap();
        assert_eq!(ini.value("Über", "key"), Some("välue"));

        ini.set_value("Über", "other", "x");
        ini.serialize_to_file(&path).unwrap();
        let again = Ini::parse_from_file(&path).unwrap();
        assert_eq!(again, ini);
    }

    #[test]
    fn test_file_rewrite_truncates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("short.ini");
        std::fs::write(&path, "[a]\r\nkey=a much longer value than the next one\r\n").unwrap();

        let mut ini = Ini::parse_from_file(&path).unwrap();
        ini.set_value("a", "key", "v");
        ini.serialize_to_file(&path).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[a]\r\nkey=v\r\n");
    }

    #[test]
    fn test_empty_and_missing_files() {
        let dir = tempfile::tempdir().unwrap();
        let empty = dir.path().join("empty.ini");
        std::fs::write(&empty, b"").unwrap();
        assert!(Ini::parse_from_file(&empty).unwrap().sections.is_empty());

        assert!(Ini::parse_from_file(dir.path().join("missing.ini")).is_err());
    }
}
