//! Drag and drop of files, as [`Hdrop`] methods.

use windows::Win32::UI::Shell::{DragFinish, DragQueryFileW, HDROP};

use crate::kernel::WString;
use crate::user::handles::Hdrop;

impl Hdrop {
    /// `DragQueryFile`: paths of all dropped files.
    ///
    /// # Example
    /// ```no_run
    /// use safewin::{msg::wm, Hdrop};
    ///
    /// fn on_drop_files(p: wm::DropFiles) {
    ///     for path in p.hdrop.drag_query_files() {
    ///         println!("{}", path);
    ///     }
    ///     p.hdrop.drag_finish();
    /// }
    /// ```
    pub fn drag_query_files(self) -> Vec<String> {
        let count = unsafe { DragQueryFileW(HDROP::from(self), u32::MAX, None) };
        (0..count)
            .map(|i| {
                let len = unsafe { DragQueryFileW(HDROP::from(self), i, None) };
                let mut buf = WString::new_alloc_buf(len as usize + 1);
                unsafe { DragQueryFileW(HDROP::from(self), i, Some(buf.as_mut_slice())) };
                buf.to_string()
            })
            .collect()
    }

    /// `DragFinish`: releases the memory of the drop. The handle can't be
    /// used afterwards.
    pub fn drag_finish(self) {
        unsafe { DragFinish(HDROP::from(self)) }
    }
}
