//! Ordinary constants of the window manager.

const_ordinary! {
    /// [`WM_ACTIVATE`](crate::msg::wm::Activate) activation state, the `WA_*`
    /// constants.
    Wa: u16;
    INACTIVE 0
    ACTIVE 1
    CLICKACTIVE 2
}

const_ordinary! {
    /// [`WM_APPCOMMAND`](crate::msg::wm::AppCommand) commands, the
    /// `APPCOMMAND_*` constants.
    AppCmd: u16;
    BROWSER_BACKWARD 1
    BROWSER_FORWARD 2
    BROWSER_REFRESH 3
    BROWSER_STOP 4
    BROWSER_SEARCH 5
    BROWSER_FAVORITES 6
    BROWSER_HOME 7
    VOLUME_MUTE 8
    VOLUME_DOWN 9
    VOLUME_UP 10
    MEDIA_NEXTTRACK 11
    MEDIA_PREVIOUSTRACK 12
    MEDIA_STOP 13
    MEDIA_PLAY_PAUSE 14
    LAUNCH_MAIL 15
    LAUNCH_MEDIA_SELECT 16
    LAUNCH_APP1 17
    LAUNCH_APP2 18
    BASS_DOWN 19
    BASS_BOOST 20
    BASS_UP 21
    TREBLE_DOWN 22
    TREBLE_UP 23
    MICROPHONE_VOLUME_MUTE 24
    MICROPHONE_VOLUME_DOWN 25
    MICROPHONE_VOLUME_UP 26
    HELP 27
    FIND 28
    NEW 29
    OPEN 30
    CLOSE 31
    SAVE 32
    PRINT 33
    UNDO 34
    REDO 35
    COPY 36
    CUT 37
    PASTE 38
    REPLY_TO_MAIL 39
    FORWARD_MAIL 40
    SEND_MAIL 41
    SPELL_CHECK 42
    MEDIA_PLAY 46
    MEDIA_PAUSE 47
    MEDIA_RECORD 48
    MEDIA_FAST_FORWARD 49
    MEDIA_REWIND 50
    MEDIA_CHANNEL_UP 51
    MEDIA_CHANNEL_DOWN 52
}

const_ordinary! {
    /// [`WM_APPCOMMAND`](crate::msg::wm::AppCommand) input device, the
    /// `FAPPCOMMAND_*` constants.
    AppCmdDevice: u16;
    KEY 0
    OEM 0x1000
    MOUSE 0x8000
}

impl AppCmdDevice {
    /// Bits of the high word of `lParam` occupied by the device.
    pub const MASK: u16 = 0xf000;
}

const_ordinary! {
    /// [`WM_COMMAND`](crate::msg::wm::Command) notification source.
    CmdCode: u16;
    MENU 0
    ACCELERATOR 1
}

const_ordinary! {
    /// [`WM_ENTERIDLE`](crate::msg::wm::EnterIdle) source, the `MSGF_*`
    /// constants.
    Msgf: u8;
    DIALOGBOX 0
    MENU 2
    SCROLLBAR 5
    NEXTWINDOW 6
}

const_ordinary! {
    /// Scroll bar requests, the `SB_*` constants of
    /// [`WM_HSCROLL`](crate::msg::wm::HScroll) and
    /// [`WM_VSCROLL`](crate::msg::wm::VScroll).
    SbReq: u16;
    LINEUP 0
    LINELEFT 0
    LINEDOWN 1
    LINERIGHT 1
    PAGEUP 2
    PAGELEFT 2
    PAGEDOWN 3
    PAGERIGHT 3
    THUMBPOSITION 4
    THUMBTRACK 5
    TOP 6
    LEFT 6
    BOTTOM 7
    RIGHT 7
    ENDSCROLL 8
}

const_ordinary! {
    /// Virtual key codes, the `VK_*` constants.
    Vk: u16;
    LBUTTON 0x01
    RBUTTON 0x02
    CANCEL 0x03
    MBUTTON 0x04
    XBUTTON1 0x05
    XBUTTON2 0x06
    BACK 0x08
    TAB 0x09
    CLEAR 0x0c
    RETURN 0x0d
    SHIFT 0x10
    CONTROL 0x11
    MENU 0x12
    PAUSE 0x13
    CAPITAL 0x14
    ESCAPE 0x1b
    SPACE 0x20
    PRIOR 0x21
    NEXT 0x22
    END 0x23
    HOME 0x24
    LEFT 0x25
    UP 0x26
    RIGHT 0x27
    DOWN 0x28
    SNAPSHOT 0x2c
    INSERT 0x2d
    DELETE 0x2e
    HELP 0x2f
    CHAR_0 0x30
    CHAR_1 0x31
    CHAR_2 0x32
    CHAR_3 0x33
    CHAR_4 0x34
    CHAR_5 0x35
    CHAR_6 0x36
    CHAR_7 0x37
    CHAR_8 0x38
    CHAR_9 0x39
    CHAR_A 0x41
    CHAR_B 0x42
    CHAR_C 0x43
    CHAR_D 0x44
    CHAR_E 0x45
    CHAR_F 0x46
    CHAR_G 0x47
    CHAR_H 0x48
    CHAR_I 0x49
    CHAR_J 0x4a
    CHAR_K 0x4b
    CHAR_L 0x4c
    CHAR_M 0x4d
    CHAR_N 0x4e
    CHAR_O 0x4f
    CHAR_P 0x50
    CHAR_Q 0x51
    CHAR_R 0x52
    CHAR_S 0x53
    CHAR_T 0x54
    CHAR_U 0x55
    CHAR_V 0x56
    CHAR_W 0x57
    CHAR_X 0x58
    CHAR_Y 0x59
    CHAR_Z 0x5a
    LWIN 0x5b
    RWIN 0x5c
    APPS 0x5d
    SLEEP 0x5f
    NUMPAD0 0x60
    NUMPAD1 0x61
    NUMPAD2 0x62
    NUMPAD3 0x63
    NUMPAD4 0x64
    NUMPAD5 0x65
    NUMPAD6 0x66
    NUMPAD7 0x67
    NUMPAD8 0x68
    NUMPAD9 0x69
    MULTIPLY 0x6a
    ADD 0x6b
    SEPARATOR 0x6c
    SUBTRACT 0x6d
    DECIMAL 0x6e
    DIVIDE 0x6f
    F1 0x70
    F2 0x71
    F3 0x72
    F4 0x73
    F5 0x74
    F6 0x75
    F7 0x76
    F8 0x77
    F9 0x78
    F10 0x79
    F11 0x7a
    F12 0x7b
    NUMLOCK 0x90
    SCROLL 0x91
    LSHIFT 0xa0
    RSHIFT 0xa1
    LCONTROL 0xa2
    RCONTROL 0xa3
    LMENU 0xa4
    RMENU 0xa5
    VOLUME_MUTE 0xad
    VOLUME_DOWN 0xae
    VOLUME_UP 0xaf
    MEDIA_NEXT_TRACK 0xb0
    MEDIA_PREV_TRACK 0xb1
    MEDIA_STOP 0xb2
    MEDIA_PLAY_PAUSE 0xb3
}

const_ordinary! {
    /// [`WM_MENUDRAG`](crate::msg::wm::MenuDrag) return value, the `MND_*`
    /// constants.
    Mnd: u8;
    CONTINUE 0
    ENDMENU 1
}

const_ordinary! {
    /// Hit test results, the `HT*` constants of
    /// [`WM_NCHITTEST`](crate::msg::wm::NcHitTest).
    Ht: i16;
    ERROR (-2)
    TRANSPARENT (-1)
    NOWHERE 0
    CLIENT 1
    CAPTION 2
    SYSMENU 3
    GROWBOX 4
    SIZE 4
    MENU 5
    HSCROLL 6
    VSCROLL 7
    MINBUTTON 8
    MAXBUTTON 9
    LEFT 10
    RIGHT 11
    TOP 12
    TOPLEFT 13
    TOPRIGHT 14
    BOTTOM 15
    BOTTOMLEFT 16
    BOTTOMRIGHT 17
    BORDER 18
    CLOSE 20
    HELP 21
}

const_ordinary! {
    /// [`WM_PARENTNOTIFY`](crate::msg::wm::ParentNotify) events.
    Wmpn: u16;
    CREATE 0x0001
    DESTROY 0x0002
    LBUTTONDOWN 0x0201
    MBUTTONDOWN 0x0207
    RBUTTONDOWN 0x0204
    XBUTTONDOWN 0x020b
    POINTERDOWN 0x0246
}

const_ordinary! {
    /// [`WM_SETICON`](crate::msg::wm::SetIcon) icon size, the `ICON_*`
    /// constants.
    IconSize: u8;
    SMALL 0
    BIG 1
    SMALL2 2
}

const_ordinary! {
    /// [`WM_SHOWWINDOW`](crate::msg::wm::ShowWindow) status, the `SW_*`
    /// constants of the message.
    SwStatus: u8;
    SHOWN 0
    PARENTCLOSING 1
    OTHERZOOM 2
    PARENTOPENING 3
    OTHERUNZOOM 4
}

const_ordinary! {
    /// [`WM_SIZE`](crate::msg::wm::Size) request, the `SIZE_*` constants.
    SizeReq: u8;
    RESTORED 0
    MINIMIZED 1
    MAXIMIZED 2
    MAXSHOW 3
    MAXHIDE 4
}

const_ordinary! {
    /// [`WM_SIZING`](crate::msg::wm::Sizing) edge, the `WMSZ_*` constants.
    Wmsz: u8;
    LEFT 1
    RIGHT 2
    TOP 3
    TOPLEFT 4
    TOPRIGHT 5
    BOTTOM 6
    BOTTOMLEFT 7
    BOTTOMRIGHT 8
}

const_ordinary! {
    /// Which style changed, in
    /// [`WM_STYLECHANGED`](crate::msg::wm::StyleChanged).
    GwlChange: i8;
    STYLE (-16)
    EXSTYLE (-20)
}

const_ordinary! {
    /// System commands, the `SC_*` constants.
    Sc: u32;
    SIZE 0xf000
    MOVE 0xf010
    MINIMIZE 0xf020
    MAXIMIZE 0xf030
    NEXTWINDOW 0xf040
    PREVWINDOW 0xf050
    CLOSE 0xf060
    VSCROLL 0xf070
    HSCROLL 0xf080
    MOUSEMENU 0xf090
    KEYMENU 0xf100
    RESTORE 0xf120
    TASKLIST 0xf130
    SCREENSAVE 0xf140
    HOTKEY 0xf150
    DEFAULT 0xf160
    MONITORPOWER 0xf170
    CONTEXTHELP 0xf180
}

const_ordinary! {
    /// `ShowWindow` commands, the `SW_*` constants.
    Sw: i32;
    HIDE 0
    SHOWNORMAL 1
    SHOWMINIMIZED 2
    SHOWMAXIMIZED 3
    SHOWNOACTIVATE 4
    SHOW 5
    MINIMIZE 6
    SHOWMINNOACTIVE 7
    SHOWNA 8
    RESTORE 9
    SHOWDEFAULT 10
    FORCEMINIMIZE 11
}

const_ordinary! {
    /// Dialog box command IDs, the `ID*` constants, also returned by
    /// `MessageBox`.
    DlgId: u16;
    OK 1
    CANCEL 2
    ABORT 3
    RETRY 4
    IGNORE 5
    YES 6
    NO 7
    CLOSE 8
    HELP 9
    TRYAGAIN 10
    CONTINUE 11
}

const_ordinary! {
    /// `GetSystemMetrics` indexes, the `SM_*` constants.
    Sm: i32;
    CXSCREEN 0
    CYSCREEN 1
    CXVSCROLL 2
    CYHSCROLL 3
    CYCAPTION 4
    CXBORDER 5
    CYBORDER 6
    CXICON 11
    CYICON 12
    CXCURSOR 13
    CYCURSOR 14
    CYMENU 15
    CXFULLSCREEN 16
    CYFULLSCREEN 17
    MOUSEPRESENT 19
    CXMIN 28
    CYMIN 29
    CXDOUBLECLK 36
    CYDOUBLECLK 37
    CXSMICON 49
    CYSMICON 50
    CXVIRTUALSCREEN 78
    CYVIRTUALSCREEN 79
    CMONITORS 80
    REMOTESESSION 0x1000
}

const_ordinary! {
    /// Hook types, the `WH_*` constants.
    Wh: i32;
    MSGFILTER (-1)
    JOURNALRECORD 0
    JOURNALPLAYBACK 1
    KEYBOARD 2
    GETMESSAGE 3
    CALLWNDPROC 4
    CBT 5
    SYSMSGFILTER 6
    MOUSE 7
    DEBUG 9
    SHELL 10
    FOREGROUNDIDLE 11
    CALLWNDPROCRET 12
    KEYBOARD_LL 13
    MOUSE_LL 14
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aliases_share_first_name() {
        assert_eq!(SbReq::LINELEFT, SbReq::LINEUP);
        assert_eq!(SbReq::RIGHT.name(), Some("BOTTOM"));
        assert_eq!(Ht::SIZE.name(), Some("GROWBOX"));
    }

    #[test]
    fn test_negative_values() {
        assert_eq!(Ht::ERROR.raw(), -2);
        assert_eq!(Wh::MSGFILTER.to_string(), "-1");
        assert_eq!(format!("{:?}", GwlChange::EXSTYLE), "GwlChange::EXSTYLE");
    }

    #[test]
    fn test_unknown_value_formatting() {
        let vk = Vk::from(0xff);
        assert_eq!(vk.name(), None);
        assert_eq!(format!("{:?}", vk), "Vk(0xff)");
        assert_eq!(format!("{:#06x}", Vk::F1), "0x0070");
        assert_eq!(Sc::CLOSE.to_string(), "61536");
    }
}
