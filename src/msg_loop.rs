//! Message loop utilities.
//!
//! Windows, hooks and timers only work while their thread pumps messages.

use std::sync::atomic::{AtomicU32, Ordering};

use crate::co;
use crate::error::SysResult;
use crate::kernel::get_current_thread_id;
use crate::msg::WndMsg;
use crate::user::{
    dispatch_message, get_message, peek_message, post_thread_message, translate_message, Hwnd,
    Msg,
};

/// Thread running [`run_message_loop`], zero when none is.
static LOOP_THREAD_ID: AtomicU32 = AtomicU32::new(0);

/// Returns the ID of the thread running [`run_message_loop`].
pub fn loop_thread_id() -> Option<u32> {
    match LOOP_THREAD_ID.load(Ordering::SeqCst) {
        0 => None,
        id => Some(id),
    }
}

/// Runs the message loop until `WM_QUIT` is received, and returns its exit
/// code.
///
/// The thread is recorded so [`post_quit_message_to_loop`] can stop the
/// loop from anywhere.
///
/// # Example
/// ```no_run
/// // Create windows or install hooks first.
/// let exit_code = safewin::run_message_loop()?;
/// std::process::exit(exit_code);
/// # Ok::<_, safewin::co::SysError>(())
/// ```
pub fn run_message_loop() -> SysResult<i32> {
    let thread_id = get_current_thread_id();
    LOOP_THREAD_ID.store(thread_id, Ordering::SeqCst);

    tracing::debug!(thread_id, "Message loop starting");

    let mut msg = Msg::default();
    let result = loop {
        match get_message(&mut msg, None, 0, 0) {
            Ok(true) => {
                translate_message(&msg);
                dispatch_message(&msg);
            }
            Ok(false) => break Ok(msg.wparam as i32),
            Err(e) => break Err(e),
        }
    };

    let _ = LOOP_THREAD_ID.compare_exchange(thread_id, 0, Ordering::SeqCst, Ordering::SeqCst);

    match result {
        Ok(exit_code) => tracing::debug!(exit_code, "Message loop exited"),
        Err(e) => tracing::error!(error = %e, "Message loop failed"),
    }
    result
}

/// Posts `WM_QUIT` to the thread running [`run_message_loop`].
///
/// Unlike [`post_quit_message`](crate::post_quit_message), this can be
/// called from any thread, e.g. a Ctrl+C handler.
pub fn post_quit_message_to_loop(exit_code: i32) {
    let Some(thread_id) = loop_thread_id() else {
        tracing::warn!("No message loop running, cannot post quit message");
        return;
    };

    match post_thread_message(thread_id, WndMsg::new(co::Wm::QUIT, exit_code as usize, 0)) {
        Ok(()) => tracing::debug!(exit_code, thread_id, "Posted quit message to loop thread"),
        Err(e) => tracing::error!(error = %e, "Failed to post quit message to loop thread"),
    }
}

/// Options of [`pump_pending`].
#[derive(Debug, Clone, Copy)]
pub struct PumpOptions {
    /// Only messages of this window and its children; `None` for all the
    /// messages of the thread.
    pub hwnd: Option<Hwnd>,
    /// First message of the range; both zero means all messages.
    pub msg_filter_min: u32,
    pub msg_filter_max: u32,
    /// Whether to call `TranslateMessage`, which generates `WM_CHAR` from
    /// keystrokes.
    pub translate: bool,
}

impl Default for PumpOptions {
    fn default() -> Self {
        Self {
            hwnd: None,
            msg_filter_min: 0,
            msg_filter_max: 0,
            translate: true,
        }
    }
}

/// Dispatches the messages already queued, without waiting for new ones.
///
/// Returns the exit code if `WM_QUIT` was pulled from the queue; the caller
/// should then stop.
pub fn pump_pending(opts: &PumpOptions) -> Option<i32> {
    let mut msg = Msg::default();
    while peek_message(
        &mut msg,
        opts.hwnd,
        opts.msg_filter_min,
        opts.msg_filter_max,
        co::Pm::REMOVE,
    ) {
        if msg.message == co::Wm::QUIT {
            return Some(msg.wparam as i32);
        }
        if opts.translate {
            translate_message(&msg);
        }
        dispatch_message(&msg);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pump_pending_stops_at_quit() {
        crate::post_thread_message(get_current_thread_id(), WndMsg::new(co::Wm::app(5), 0, 0))
            .unwrap();
        crate::post_quit_message(4);
        assert_eq!(pump_pending(&PumpOptions::default()), Some(4));
        assert_eq!(pump_pending(&PumpOptions::default()), None);
    }

    #[test]
    fn test_loop_quits_from_another_thread() {
        let worker = std::thread::spawn(|| {
            while loop_thread_id().is_none() {
                std::thread::sleep(std::time::Duration::from_millis(5));
            }
            post_quit_message_to_loop(3);
        });

        // Makes sure the queue exists before the worker posts to it.
        let mut msg = Msg::default();
        peek_message(&mut msg, None, 0, 0, co::Pm::NOREMOVE);

        assert_eq!(run_message_loop().unwrap(), 3);
        worker.join().unwrap();
        assert_eq!(loop_thread_id(), None);
    }
}
