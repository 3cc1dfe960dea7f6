//! Registry constants.

use bitflags::bitflags;

const_ordinary! {
    /// Registry value type, the `REG_*` constants.
    Reg: u32;
    NONE 0
    SZ 1
    EXPAND_SZ 2
    BINARY 3
    DWORD 4
    DWORD_BIG_ENDIAN 5
    LINK 6
    MULTI_SZ 7
    QWORD 11
}

bitflags! {
    /// Registry key access rights, the `KEY_*` constants.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Key: u32 {
        const QUERY_VALUE = 0x0001;
        const SET_VALUE = 0x0002;
        const CREATE_SUB_KEY = 0x0004;
        const ENUMERATE_SUB_KEYS = 0x0008;
        const NOTIFY = 0x0010;
        const WOW64_64KEY = 0x0100;
        const WOW64_32KEY = 0x0200;
        const READ = 0x2_0019;
        const WRITE = 0x2_0006;
        const ALL_ACCESS = 0xf_003f;
        const _ = !0;
    }
}
