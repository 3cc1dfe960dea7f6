//! Registry keys, as [`Hkey`] methods.

use std::ffi::c_void;

decl_handle! {
    /// Handle to a registry key.
    Hkey: "HKEY" => windows::Win32::System::Registry::HKEY
}

// Predefined keys are sign-extended 32-bit values.
const fn predefined(n: u32) -> Hkey {
    Hkey(n as i32 as isize as *mut c_void)
}

impl Hkey {
    pub const CLASSES_ROOT: Hkey = predefined(0x8000_0000);
    pub const CURRENT_USER: Hkey = predefined(0x8000_0001);
    pub const LOCAL_MACHINE: Hkey = predefined(0x8000_0002);
    pub const USERS: Hkey = predefined(0x8000_0003);
    pub const CURRENT_CONFIG: Hkey = predefined(0x8000_0005);
}

#[cfg(windows)]
pub use self::native::*;

#[cfg(windows)]
mod native {
    use std::ops::Deref;

    use windows::core::PCWSTR;
    use windows::Win32::Foundation::WIN32_ERROR;
    use windows::Win32::System::Registry::{
        RegCloseKey, RegCreateKeyExW, RegDeleteTreeW, RegDeleteValueW, RegOpenKeyExW,
        RegQueryValueExW, RegSetValueExW, HKEY, REG_CREATED_NEW_KEY, REG_CREATE_KEY_DISPOSITION,
        REG_OPTION_NON_VOLATILE, REG_SAM_FLAGS, REG_VALUE_TYPE,
    };

    use super::Hkey;
    use crate::advapi::RegistryValue;
    use crate::co;
    use crate::error::SysResult;
    use crate::kernel::WString;

    fn reg_result(err: WIN32_ERROR) -> SysResult<()> {
        match co::SysError::from(err.0) {
            co::SysError::SUCCESS => Ok(()),
            e => Err(e),
        }
    }

    fn pcwstr_opt(s: Option<&WString>) -> PCWSTR {
        s.map_or(PCWSTR::null(), |w| PCWSTR(w.as_ptr()))
    }

    /// An open registry key, closed with `RegCloseKey` when dropped.
    #[derive(Debug)]
    pub struct RegCloseKeyGuard {
        hkey: Hkey,
    }

    impl Drop for RegCloseKeyGuard {
        fn drop(&mut self) {
            if let Err(e) = reg_result(unsafe { RegCloseKey(HKEY::from(self.hkey)) }) {
                tracing::error!(error = %e, "Failed to close {}", self.hkey);
            }
        }
    }

    impl Deref for RegCloseKeyGuard {
        type Target = Hkey;

        fn deref(&self) -> &Hkey {
            &self.hkey
        }
    }

    impl RegCloseKeyGuard {
        /// Gives up ownership; the key is no longer closed automatically.
        pub fn leak(self) -> Hkey {
            let hkey = self.hkey;
            std::mem::forget(self);
            hkey
        }
    }

    impl Hkey {
        /// `RegOpenKeyEx`.
        ///
        /// # Example
        /// ```no_run
        /// use safewin::{co, Hkey, RegistryValue};
        ///
        /// let key = Hkey::CURRENT_USER.reg_open_key_ex(
        ///     Some("Control Panel\\Desktop"),
        ///     co::Key::READ,
        /// )?;
        /// if let RegistryValue::Sz(wallpaper) = key.reg_query_value_ex(Some("Wallpaper"))? {
        ///     println!("{wallpaper}");
        /// }
        /// # Ok::<_, co::SysError>(())
        /// ```
        pub fn reg_open_key_ex(
            &self,
            sub_key: Option<&str>,
            access: co::Key,
        ) -> SysResult<RegCloseKeyGuard> {
            let sub_key = sub_key.map(WString::from_str);
            let mut hkey = HKEY::default();
            reg_result(unsafe {
                RegOpenKeyExW(
                    HKEY::from(*self),
                    pcwstr_opt(sub_key.as_ref()),
                    0,
                    REG_SAM_FLAGS(access.bits()),
                    &mut hkey,
                )
            })?;
            Ok(RegCloseKeyGuard { hkey: hkey.into() })
        }

        /// `RegCreateKeyEx`: opens the key, creating it if needed. The
        /// `bool` tells whether it was created.
        pub fn reg_create_key_ex(
            &self,
            sub_key: &str,
            access: co::Key,
        ) -> SysResult<(RegCloseKeyGuard, bool)> {
            let sub_key = WString::from_str(sub_key);
            let mut hkey = HKEY::default();
            let mut disposition = REG_CREATE_KEY_DISPOSITION::default();
            reg_result(unsafe {
                RegCreateKeyExW(
                    HKEY::from(*self),
                    PCWSTR(sub_key.as_ptr()),
                    0,
                    PCWSTR::null(),
                    REG_OPTION_NON_VOLATILE,
                    REG_SAM_FLAGS(access.bits()),
                    None,
                    &mut hkey,
                    Some(&mut disposition),
                )
            })?;
            Ok((
                RegCloseKeyGuard { hkey: hkey.into() },
                disposition == REG_CREATED_NEW_KEY,
            ))
        }

        /// `RegQueryValueEx`: reads a value, `None` being the default one.
        ///
        /// The size is queried first; if the value grows between the two
        /// calls, the read is retried.
        pub fn reg_query_value_ex(&self, value_name: Option<&str>) -> SysResult<RegistryValue> {
            let value_name = value_name.map(WString::from_str);
            loop {
                let mut reg_type = REG_VALUE_TYPE::default();
                let mut size = 0u32;
                reg_result(unsafe {
                    RegQueryValueExW(
                        HKEY::from(*self),
                        pcwstr_opt(value_name.as_ref()),
                        None,
                        Some(&mut reg_type),
                        None,
                        Some(&mut size),
                    )
                })?;

                let mut buf = vec![0u8; size as usize];
                match reg_result(unsafe {
                    RegQueryValueExW(
                        HKEY::from(*self),
                        pcwstr_opt(value_name.as_ref()),
                        None,
                        Some(&mut reg_type),
                        Some(buf.as_mut_ptr()),
                        Some(&mut size),
                    )
                }) {
                    Err(co::SysError::MORE_DATA) => continue,
                    res => res?,
                }
                buf.truncate(size as usize);
                return RegistryValue::from_raw(co::Reg::from(reg_type.0), &buf);
            }
        }

        /// `RegSetValueEx`: writes a value, `None` being the default one.
        pub fn reg_set_value_ex(
            &self,
            value_name: Option<&str>,
            value: &RegistryValue,
        ) -> SysResult<()> {
            let value_name = value_name.map(WString::from_str);
            let data = value.to_raw();
            reg_result(unsafe {
                RegSetValueExW(
                    HKEY::from(*self),
                    pcwstr_opt(value_name.as_ref()),
                    0,
                    REG_VALUE_TYPE(value.reg_type().raw()),
                    Some(&data),
                )
            })
        }

        /// `RegDeleteValue`.
        pub fn reg_delete_value(&self, value_name: Option<&str>) -> SysResult<()> {
            let value_name = value_name.map(WString::from_str);
            reg_result(unsafe { RegDeleteValueW(HKEY::from(*self), pcwstr_opt(value_name.as_ref())) })
        }

        /// `RegDeleteTree`: deletes the subkey with all its values and
        /// subkeys. With `None`, empties this key instead.
        pub fn reg_delete_tree(&self, sub_key: Option<&str>) -> SysResult<()> {
            let sub_key = sub_key.map(WString::from_str);
            reg_result(unsafe { RegDeleteTreeW(HKEY::from(*self), pcwstr_opt(sub_key.as_ref())) })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predefined_keys() {
        assert_eq!(Hkey::CURRENT_USER.0 as isize, 0xffff_ffff_8000_0001_u64 as i64 as isize);
        assert_ne!(Hkey::LOCAL_MACHINE, Hkey::USERS);
        assert!(crate::Handle::as_opt(Hkey::CLASSES_ROOT).is_some());
    }

    #[cfg(windows)]
    #[test]
    fn test_open_and_missing_keys() {
        use crate::co;

        let software = Hkey::CURRENT_USER
            .reg_open_key_ex(Some("Software"), co::Key::READ)
            .unwrap();
        let err = software
            .reg_open_key_ex(Some("safewin.no.such.key"), co::Key::READ)
            .unwrap_err();
        assert_eq!(err, co::SysError::FILE_NOT_FOUND);
    }

    #[cfg(windows)]
    #[test]
    fn test_values_in_a_scratch_key() {
        use crate::advapi::RegistryValue;
        use crate::co;

        let path = format!("Software\\safewin.test.{}", std::process::id());
        let (key, created) = Hkey::CURRENT_USER
            .reg_create_key_ex(&path, co::Key::ALL_ACCESS)
            .unwrap();
        assert!(created);

        let values = [
            ("count", RegistryValue::Dword(42)),
            ("name", RegistryValue::Sz("safewin".to_owned())),
            ("list", RegistryValue::MultiSz(vec!["a".to_owned(), "bc".to_owned()])),
        ];
        for (name, value) in &values {
            key.reg_set_value_ex(Some(name), value).unwrap();
        }
        for (name, value) in &values {
            assert_eq!(&key.reg_query_value_ex(Some(name)).unwrap(), value);
        }

        key.reg_delete_value(Some("count")).unwrap();
        assert_eq!(
            key.reg_query_value_ex(Some("count")).unwrap_err(),
            co::SysError::FILE_NOT_FOUND
        );

        drop(key);
        Hkey::CURRENT_USER.reg_delete_tree(Some(&path)).unwrap();
        let (key, created) = Hkey::CURRENT_USER
            .reg_create_key_ex(&path, co::Key::READ)
            .unwrap();
        assert!(created);
        drop(key);
        Hkey::CURRENT_USER.reg_delete_tree(Some(&path)).unwrap();
    }
}
