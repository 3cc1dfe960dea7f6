//! Window message identifiers.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

const_type! {
    /// Window message identifier, the `WM_*` constants.
    ///
    /// `Display` prints the native name, e.g. `WM_PAINT`, `WM_USER+3` or
    /// `WM_APP+1`; the same forms are accepted by `FromStr`.
    Wm: u32;
    NULL 0x0000
    CREATE 0x0001
    DESTROY 0x0002
    MOVE 0x0003
    SIZE 0x0005
    ACTIVATE 0x0006
    SETFOCUS 0x0007
    KILLFOCUS 0x0008
    ENABLE 0x000a
    SETREDRAW 0x000b
    SETTEXT 0x000c
    GETTEXT 0x000d
    GETTEXTLENGTH 0x000e
    PAINT 0x000f
    CLOSE 0x0010
    QUERYENDSESSION 0x0011
    QUIT 0x0012
    QUERYOPEN 0x0013
    ERASEBKGND 0x0014
    SYSCOLORCHANGE 0x0015
    ENDSESSION 0x0016
    SHOWWINDOW 0x0018
    SETTINGCHANGE 0x001a
    ACTIVATEAPP 0x001c
    CANCELMODE 0x001f
    SETCURSOR 0x0020
    MOUSEACTIVATE 0x0021
    CHILDACTIVATE 0x0022
    GETMINMAXINFO 0x0024
    NEXTDLGCTL 0x0028
    DRAWITEM 0x002b
    MEASUREITEM 0x002c
    DELETEITEM 0x002d
    SETFONT 0x0030
    GETFONT 0x0031
    WINDOWPOSCHANGING 0x0046
    WINDOWPOSCHANGED 0x0047
    NOTIFY 0x004e
    HELP 0x0053
    CONTEXTMENU 0x007b
    STYLECHANGING 0x007c
    STYLECHANGED 0x007d
    GETICON 0x007f
    SETICON 0x0080
    NCCREATE 0x0081
    NCDESTROY 0x0082
    NCCALCSIZE 0x0083
    NCHITTEST 0x0084
    NCPAINT 0x0085
    NCACTIVATE 0x0086
    GETDLGCODE 0x0087
    KEYDOWN 0x0100
    KEYUP 0x0101
    CHAR 0x0102
    DEADCHAR 0x0103
    SYSKEYDOWN 0x0104
    SYSKEYUP 0x0105
    SYSCHAR 0x0106
    SYSDEADCHAR 0x0107
    INITDIALOG 0x0110
    COMMAND 0x0111
    SYSCOMMAND 0x0112
    TIMER 0x0113
    HSCROLL 0x0114
    VSCROLL 0x0115
    INITMENU 0x0116
    INITMENUPOPUP 0x0117
    MENUSELECT 0x011f
    ENTERIDLE 0x0121
    MENURBUTTONUP 0x0122
    MENUDRAG 0x0123
    UNINITMENUPOPUP 0x0125
    MENUCOMMAND 0x0126
    CTLCOLORMSGBOX 0x0132
    CTLCOLOREDIT 0x0133
    CTLCOLORLISTBOX 0x0134
    CTLCOLORBTN 0x0135
    CTLCOLORDLG 0x0136
    CTLCOLORSCROLLBAR 0x0137
    CTLCOLORSTATIC 0x0138
    /// Originally `MN_GETHMENU`.
    MN_GETHMENU 0x01e1
    MOUSEMOVE 0x0200
    LBUTTONDOWN 0x0201
    LBUTTONUP 0x0202
    LBUTTONDBLCLK 0x0203
    RBUTTONDOWN 0x0204
    RBUTTONUP 0x0205
    RBUTTONDBLCLK 0x0206
    MBUTTONDOWN 0x0207
    MBUTTONUP 0x0208
    MBUTTONDBLCLK 0x0209
    MOUSEWHEEL 0x020a
    XBUTTONDOWN 0x020b
    XBUTTONUP 0x020c
    XBUTTONDBLCLK 0x020d
    MOUSEHWHEEL 0x020e
    PARENTNOTIFY 0x0210
    ENTERMENULOOP 0x0211
    EXITMENULOOP 0x0212
    SIZING 0x0214
    CAPTURECHANGED 0x0215
    MOVING 0x0216
    ENTERSIZEMOVE 0x0231
    EXITSIZEMOVE 0x0232
    DROPFILES 0x0233
    MOUSEHOVER 0x02a1
    MOUSELEAVE 0x02a3
    DPICHANGED 0x02e0
    CUT 0x0300
    COPY 0x0301
    PASTE 0x0302
    CLEAR 0x0303
    UNDO 0x0304
    HOTKEY 0x0312
    PRINT 0x0317
    APPCOMMAND 0x0319
    THEMECHANGED 0x031a
    CLIPBOARDUPDATE 0x031d
    GETTITLEBARINFOEX 0x033f
    /// First private message of a window class.
    USER 0x0400
    /// First private message of an application.
    APP 0x8000
}

/// Name → value lookup, built once on first parse.
static WM_BY_NAME: Lazy<HashMap<&'static str, u32>> =
    Lazy::new(|| Wm::NAMES.iter().copied().collect());

impl Wm {
    /// Returns `WM_USER + offset`.
    pub const fn user(offset: u32) -> Self {
        Self(Self::USER.0 + offset)
    }

    /// Returns `WM_APP + offset`.
    pub const fn app(offset: u32) -> Self {
        Self(Self::APP.0 + offset)
    }

    /// Tells whether this is a message private to a window class, in the
    /// `WM_USER..WM_APP` range.
    pub const fn is_user(self) -> bool {
        self.0 >= Self::USER.0 && self.0 < Self::APP.0
    }

    /// Tells whether this is a message private to an application, in the
    /// `WM_APP..0xC000` range.
    pub const fn is_app(self) -> bool {
        self.0 >= Self::APP.0 && self.0 < 0xc000
    }

    /// Tells whether this is a message registered at run time with
    /// `RegisterWindowMessage`.
    pub const fn is_registered(self) -> bool {
        self.0 >= 0xc000 && self.0 <= 0xffff
    }
}

impl fmt::Display for Wm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = self.name() {
            return write!(f, "WM_{}", name);
        }
        if self.is_user() {
            write!(f, "WM_USER+{}", self.0 - Self::USER.0)
        } else if self.is_app() {
            write!(f, "WM_APP+{}", self.0 - Self::APP.0)
        } else {
            write!(f, "WM_{:#06x}", self.0)
        }
    }
}

impl FromStr for Wm {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || ParseError::UnknownName(s.to_owned());
        let name = s.trim();
        let name = name.strip_prefix("WM_").unwrap_or(name);

        if let Some((base, offset)) = name.split_once('+') {
            let offset: u32 = offset.trim().parse().map_err(|_| bad())?;
            return match base.trim() {
                "USER" if offset < Self::APP.0 - Self::USER.0 => Ok(Self::user(offset)),
                "APP" if offset < 0xc000 - Self::APP.0 => Ok(Self::app(offset)),
                _ => Err(bad()),
            };
        }

        if let Some(hex) = name.strip_prefix("0x") {
            return u32::from_str_radix(hex, 16).map(Self).map_err(|_| bad());
        }

        WM_BY_NAME.get(name).map(|v| Self(*v)).ok_or_else(bad)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_known_names() {
        assert_eq!(Wm::PAINT.to_string(), "WM_PAINT");
        assert_eq!(Wm::MN_GETHMENU.to_string(), "WM_MN_GETHMENU");
        assert_eq!(Wm::USER.to_string(), "WM_USER");
    }

    #[test]
    fn test_display_private_ranges() {
        assert_eq!(Wm::user(3).to_string(), "WM_USER+3");
        assert_eq!(Wm::app(1).to_string(), "WM_APP+1");
        assert_eq!(Wm::from(0xc123).to_string(), "WM_0xc123");
        assert!(Wm::from(0xc123).is_registered());
    }

    #[test]
    fn test_parse_accepts_display_forms() {
        for wm in [Wm::CLOSE, Wm::LBUTTONDOWN, Wm::user(10), Wm::app(7), Wm::from(0xc010)] {
            let parsed: Wm = wm.to_string().parse().unwrap();
            assert_eq!(parsed, wm);
        }
        assert_eq!("COMMAND".parse::<Wm>().unwrap(), Wm::COMMAND);
    }

    #[test]
    fn test_next_dlg_ctl_name() {
        assert_eq!(Wm::NEXTDLGCTL.raw(), 0x0028);
        assert_eq!(Wm::NEXTDLGCTL.name(), Some("NEXTDLGCTL"));
        assert_eq!(Wm::NEXTDLGCTL.to_string(), "WM_NEXTDLGCTL");
        assert_eq!("WM_NEXTDLGCTL".parse::<Wm>().unwrap(), Wm::NEXTDLGCTL);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!("WM_NOT_A_MESSAGE".parse::<Wm>().is_err());
        assert!("WM_USER+99999".parse::<Wm>().is_err());
    }

    #[test]
    fn test_debug_uses_type_prefix() {
        assert_eq!(format!("{:?}", Wm::TIMER), "Wm::TIMER");
        assert_eq!(format!("{:?}", Wm::from(0x0401)), "Wm(0x401)");
    }
}
