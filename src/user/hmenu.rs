//! Menu functions, as [`Hmenu`] methods.

use windows::core::PCWSTR;
use windows::Win32::Foundation::{HWND, RECT};
use windows::Win32::UI::WindowsAndMessaging::{
    AppendMenuW, CheckMenuItem, CreateMenu, CreatePopupMenu, DestroyMenu, EnableMenuItem,
    GetMenuItemCount, TrackPopupMenu, HMENU, MENU_ITEM_FLAGS, TRACK_POPUP_MENU_FLAGS,
};

use crate::co;
use crate::error::SysResult;
use crate::kernel::{get_last_error, WString};
use crate::user::funcs::clear_last_error;
use crate::user::handles::{Hmenu, Hwnd};
use crate::user::structs::Point;

impl Hmenu {
    /// `CreateMenu`: an empty menu bar. Destroyed along with the window it's
    /// attached to, otherwise call [`destroy_menu`](Hmenu::destroy_menu).
    pub fn create_menu() -> SysResult<Hmenu> {
        Ok(unsafe { CreateMenu()? }.into())
    }

    /// `CreatePopupMenu`.
    pub fn create_popup_menu() -> SysResult<Hmenu> {
        Ok(unsafe { CreatePopupMenu()? }.into())
    }

    /// `AppendMenu`.
    ///
    /// `id` is the command ID, or the submenu handle for [`co::Mf::POPUP`].
    /// `text` is ignored by separators.
    pub fn append_menu(self, flags: co::Mf, id: usize, text: Option<&str>) -> SysResult<()> {
        let text = text.map(WString::from_str);
        let ptext = text.as_ref().map_or(PCWSTR::null(), |t| PCWSTR(t.as_ptr()));
        unsafe { AppendMenuW(HMENU::from(self), MENU_ITEM_FLAGS(flags.bits()), id, ptext)? };
        Ok(())
    }

    /// `DestroyMenu`.
    pub fn destroy_menu(self) -> SysResult<()> {
        unsafe { DestroyMenu(HMENU::from(self))? };
        Ok(())
    }

    /// `GetMenuItemCount`.
    pub fn get_menu_item_count(self) -> SysResult<u32> {
        match unsafe { GetMenuItemCount(HMENU::from(self)) } {
            -1 => Err(get_last_error()),
            n => Ok(n as u32),
        }
    }

    /// `EnableMenuItem`, with [`co::Mf::ENABLED`], [`co::Mf::GRAYED`] or
    /// [`co::Mf::DISABLED`], plus [`co::Mf::BYPOSITION`] when `item` is a
    /// position. Returns the previous state.
    pub fn enable_menu_item(self, item: u32, flags: co::Mf) -> SysResult<co::Mf> {
        let ret = unsafe { EnableMenuItem(HMENU::from(self), item, MENU_ITEM_FLAGS(flags.bits())) };
        match ret.0 {
            -1 => Err(co::SysError::NOT_FOUND),
            prev => Ok(co::Mf::from_bits_retain(prev as u32)),
        }
    }

    /// `CheckMenuItem`, with [`co::Mf::CHECKED`] or [`co::Mf::UNCHECKED`].
    /// Returns the previous state.
    pub fn check_menu_item(self, item: u32, flags: co::Mf) -> SysResult<co::Mf> {
        match unsafe { CheckMenuItem(HMENU::from(self), item, flags.bits()) } {
            u32::MAX => Err(co::SysError::NOT_FOUND),
            prev => Ok(co::Mf::from_bits_retain(prev)),
        }
    }

    /// `TrackPopupMenu`, at screen coordinates.
    ///
    /// With [`co::Tpm::RETURNCMD`], returns the chosen command ID, zero if
    /// the menu was dismissed. Otherwise the command is sent to `owner` as
    /// [`WM_COMMAND`](crate::msg::wm::Command) and zero is returned.
    pub fn track_popup_menu(self, flags: co::Tpm, pos: Point, owner: Hwnd) -> SysResult<u32> {
        clear_last_error();
        let ret = unsafe {
            TrackPopupMenu(
                HMENU::from(self),
                TRACK_POPUP_MENU_FLAGS(flags.bits()),
                pos.x,
                pos.y,
                0,
                HWND::from(owner),
                None::<*const RECT>,
            )
        };
        match ret.0 {
            0 => match get_last_error() {
                co::SysError::SUCCESS => Ok(0),
                err => Err(err),
            },
            cmd if flags.contains(co::Tpm::RETURNCMD) => Ok(cmd as u32),
            _ => Ok(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_popup_menu() {
        let sub = Hmenu::create_popup_menu().unwrap();
        sub.append_menu(co::Mf::STRING, 201, Some("&Inner")).unwrap();

        let menu = Hmenu::create_popup_menu().unwrap();
        menu.append_menu(co::Mf::STRING, 101, Some("&Open")).unwrap();
        menu.append_menu(co::Mf::SEPARATOR, 0, None).unwrap();
        menu.append_menu(co::Mf::POPUP, sub.0 as usize, Some("&More")).unwrap();
        assert_eq!(menu.get_menu_item_count().unwrap(), 3);

        let prev = menu.check_menu_item(101, co::Mf::CHECKED).unwrap();
        assert!(!prev.contains(co::Mf::CHECKED));
        let prev = menu.check_menu_item(101, co::Mf::UNCHECKED).unwrap();
        assert!(prev.contains(co::Mf::CHECKED));

        menu.enable_menu_item(101, co::Mf::GRAYED).unwrap();
        assert_eq!(
            menu.enable_menu_item(999, co::Mf::GRAYED).unwrap_err(),
            co::SysError::NOT_FOUND
        );

        // Destroys the submenu too.
        menu.destroy_menu().unwrap();
    }

    #[test]
    fn test_item_count_of_invalid_menu() {
        assert!(Hmenu::default().get_menu_item_count().is_err());
    }
}
