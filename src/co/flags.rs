//! Bitflag constants.
//!
//! Every type keeps unknown bits: build values from raw integers with
//! `from_bits_retain`, so nothing the system sends is lost.

use bitflags::bitflags;

bitflags! {
    /// Virtual key and mouse button state, the `MK_*` constants.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Mk: u16 {
        const LBUTTON = 0x0001;
        const RBUTTON = 0x0002;
        const SHIFT = 0x0004;
        const CONTROL = 0x0008;
        const MBUTTON = 0x0010;
        const XBUTTON1 = 0x0020;
        const XBUTTON2 = 0x0040;
        const _ = !0;
    }
}

bitflags! {
    /// [`WM_ENDSESSION`](crate::msg::wm::EndSession) reasons, the `ENDSESSION_*`
    /// constants. An empty value means shutdown or restart.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct EndSession: u32 {
        const CLOSEAPP = 0x0000_0001;
        const CRITICAL = 0x4000_0000;
        const LOGOFF = 0x8000_0000;
        const _ = !0;
    }
}

bitflags! {
    /// [`WM_GETDLGCODE`](crate::msg::wm::GetDlgCode) return flags, the `DLGC_*`
    /// constants.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Dlgc: u32 {
        const WANTARROWS = 0x0001;
        const WANTTAB = 0x0002;
        const WANTALLKEYS = 0x0004;
        const WANTMESSAGE = 0x0004;
        const HASSETSEL = 0x0008;
        const DEFPUSHBUTTON = 0x0010;
        const UNDEFPUSHBUTTON = 0x0020;
        const RADIOBUTTON = 0x0040;
        const WANTCHARS = 0x0080;
        const STATIC = 0x0100;
        const BUTTON = 0x2000;
        const _ = !0;
    }
}

bitflags! {
    /// Menu item flags, the `MF_*` constants.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Mf: u32 {
        const STRING = 0x0000;
        const ENABLED = 0x0000;
        const UNCHECKED = 0x0000;
        const BYCOMMAND = 0x0000;
        const GRAYED = 0x0001;
        const DISABLED = 0x0002;
        const BITMAP = 0x0004;
        const CHECKED = 0x0008;
        const POPUP = 0x0010;
        const MENUBARBREAK = 0x0020;
        const MENUBREAK = 0x0040;
        const HILITE = 0x0080;
        const OWNERDRAW = 0x0100;
        const BYPOSITION = 0x0400;
        const SEPARATOR = 0x0800;
        const DEFAULT = 0x1000;
        const SYSMENU = 0x2000;
        const RIGHTJUSTIFY = 0x4000;
        const MOUSESELECT = 0x8000;
        const _ = !0;
    }
}

bitflags! {
    /// [`WM_NCCALCSIZE`](crate::msg::wm::NcCalcSize) return flags, the `WVR_*`
    /// constants.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Wvr: u32 {
        const ALIGNTOP = 0x0010;
        const ALIGNLEFT = 0x0020;
        const ALIGNBOTTOM = 0x0040;
        const ALIGNRIGHT = 0x0080;
        const HREDRAW = 0x0100;
        const VREDRAW = 0x0200;
        const REDRAW = 0x0300;
        const VALIDRECTS = 0x0400;
        const _ = !0;
    }
}

bitflags! {
    /// Window styles, the `WS_*` constants.
    #[repr(transparent)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Ws: u32 {
        const OVERLAPPED = 0x0000_0000;
        const POPUP = 0x8000_0000;
        const CHILD = 0x4000_0000;
        const MINIMIZE = 0x2000_0000;
        const VISIBLE = 0x1000_0000;
        const DISABLED = 0x0800_0000;
        const CLIPSIBLINGS = 0x0400_0000;
        const CLIPCHILDREN = 0x0200_0000;
        const MAXIMIZE = 0x0100_0000;
        const CAPTION = 0x00c0_0000;
        const BORDER = 0x0080_0000;
        const DLGFRAME = 0x0040_0000;
        const VSCROLL = 0x0020_0000;
        const HSCROLL = 0x0010_0000;
        const SYSMENU = 0x0008_0000;
        const THICKFRAME = 0x0004_0000;
        const GROUP = 0x0002_0000;
        const TABSTOP = 0x0001_0000;
        const MINIMIZEBOX = 0x0002_0000;
        const MAXIMIZEBOX = 0x0001_0000;
        const OVERLAPPEDWINDOW = 0x00cf_0000;
        const POPUPWINDOW = 0x8088_0000;
        const _ = !0;
    }
}

bitflags! {
    /// Extended window styles, the `WS_EX_*` constants.
    #[repr(transparent)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct WsEx: u32 {
        const DLGMODALFRAME = 0x0000_0001;
        const NOPARENTNOTIFY = 0x0000_0004;
        const TOPMOST = 0x0000_0008;
        const ACCEPTFILES = 0x0000_0010;
        const TRANSPARENT = 0x0000_0020;
        const MDICHILD = 0x0000_0040;
        const TOOLWINDOW = 0x0000_0080;
        const WINDOWEDGE = 0x0000_0100;
        const CLIENTEDGE = 0x0000_0200;
        const CONTEXTHELP = 0x0000_0400;
        const RIGHT = 0x0000_1000;
        const RTLREADING = 0x0000_2000;
        const LEFTSCROLLBAR = 0x0000_4000;
        const CONTROLPARENT = 0x0001_0000;
        const STATICEDGE = 0x0002_0000;
        const APPWINDOW = 0x0004_0000;
        const LAYERED = 0x0008_0000;
        const COMPOSITED = 0x0200_0000;
        const NOACTIVATE = 0x0800_0000;
        const OVERLAPPEDWINDOW = 0x0000_0300;
        const _ = !0;
    }
}

bitflags! {
    /// `MessageBox` flags, the `MB_*` constants. Button sets and icons are
    /// small enumerations packed into bit ranges; combine one of each.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Mb: u32 {
        const OK = 0x0000_0000;
        const OKCANCEL = 0x0000_0001;
        const ABORTRETRYIGNORE = 0x0000_0002;
        const YESNOCANCEL = 0x0000_0003;
        const YESNO = 0x0000_0004;
        const RETRYCANCEL = 0x0000_0005;
        const CANCELTRYCONTINUE = 0x0000_0006;
        const ICONERROR = 0x0000_0010;
        const ICONQUESTION = 0x0000_0020;
        const ICONWARNING = 0x0000_0030;
        const ICONINFORMATION = 0x0000_0040;
        const DEFBUTTON2 = 0x0000_0100;
        const DEFBUTTON3 = 0x0000_0200;
        const SYSTEMMODAL = 0x0000_1000;
        const TASKMODAL = 0x0000_2000;
        const HELP = 0x0000_4000;
        const SETFOREGROUND = 0x0001_0000;
        const TOPMOST = 0x0004_0000;
        const _ = !0;
    }
}

bitflags! {
    /// `SetWindowPos` flags, the `SWP_*` constants.
    #[repr(transparent)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Swp: u32 {
        const NOSIZE = 0x0001;
        const NOMOVE = 0x0002;
        const NOZORDER = 0x0004;
        const NOREDRAW = 0x0008;
        const NOACTIVATE = 0x0010;
        const FRAMECHANGED = 0x0020;
        const SHOWWINDOW = 0x0040;
        const HIDEWINDOW = 0x0080;
        const NOCOPYBITS = 0x0100;
        const NOOWNERZORDER = 0x0200;
        const NOSENDCHANGING = 0x0400;
        const DEFERERASE = 0x2000;
        const ASYNCWINDOWPOS = 0x4000;
        const _ = !0;
    }
}

bitflags! {
    /// `PeekMessage` flags, the `PM_*` constants.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Pm: u32 {
        const NOREMOVE = 0x0000;
        const REMOVE = 0x0001;
        const NOYIELD = 0x0002;
        const _ = !0;
    }
}

bitflags! {
    /// `TrackPopupMenu` flags, the `TPM_*` constants.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Tpm: u32 {
        const LEFTALIGN = 0x0000;
        const TOPALIGN = 0x0000;
        const RIGHTBUTTON = 0x0002;
        const CENTERALIGN = 0x0004;
        const RIGHTALIGN = 0x0008;
        const VCENTERALIGN = 0x0010;
        const BOTTOMALIGN = 0x0020;
        const NONOTIFY = 0x0080;
        const RETURNCMD = 0x0100;
        const _ = !0;
    }
}

bitflags! {
    /// Window class styles, the `CS_*` constants.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Cs: u32 {
        const VREDRAW = 0x0001;
        const HREDRAW = 0x0002;
        const DBLCLKS = 0x0008;
        const OWNDC = 0x0020;
        const CLASSDC = 0x0040;
        const PARENTDC = 0x0080;
        const NOCLOSE = 0x0200;
        const SAVEBITS = 0x0800;
        const GLOBALCLASS = 0x4000;
        const DROPSHADOW = 0x0002_0000;
        const _ = !0;
    }
}

bitflags! {
    /// `CoInitializeEx` concurrency model, the `COINIT_*` constants.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct CoInit: u32 {
        const MULTITHREADED = 0x0;
        const APARTMENTTHREADED = 0x2;
        const DISABLE_OLE1DDE = 0x4;
        const SPEED_OVER_MEMORY = 0x8;
        const _ = !0;
    }
}

bitflags! {
    /// COM class contexts, the `CLSCTX_*` constants.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ClsCtx: u32 {
        const INPROC_SERVER = 0x01;
        const INPROC_HANDLER = 0x02;
        const LOCAL_SERVER = 0x04;
        const REMOTE_SERVER = 0x10;
        const ALL = 0x17;
        const _ = !0;
    }
}

bitflags! {
    /// Process access rights, the `PROCESS_*` constants.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ProcessAccess: u32 {
        const TERMINATE = 0x0001;
        const CREATE_THREAD = 0x0002;
        const VM_OPERATION = 0x0008;
        const VM_READ = 0x0010;
        const VM_WRITE = 0x0020;
        const DUP_HANDLE = 0x0040;
        const QUERY_INFORMATION = 0x0400;
        const QUERY_LIMITED_INFORMATION = 0x1000;
        const SYNCHRONIZE = 0x0010_0000;
        const ALL_ACCESS = 0x001f_ffff;
        const _ = !0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_bits_survive() {
        let mk = Mk::from_bits_retain(0x8001);
        assert!(mk.contains(Mk::LBUTTON));
        assert_eq!(mk.bits(), 0x8001);
    }

    #[test]
    fn test_composite_styles() {
        let ws = Ws::CAPTION | Ws::SYSMENU | Ws::THICKFRAME | Ws::MINIMIZEBOX | Ws::MAXIMIZEBOX;
        assert_eq!(ws, Ws::OVERLAPPEDWINDOW);
        assert!(Ws::POPUPWINDOW.contains(Ws::POPUP | Ws::BORDER | Ws::SYSMENU));
    }

    #[test]
    fn test_zero_valued_flags() {
        assert!(Mf::STRING.is_empty());
        assert_eq!((Mf::BYPOSITION | Mf::GRAYED).bits(), 0x0401);
        assert_eq!(EndSession::default().bits(), 0);
    }
}
