//! Opens a window, reports mouse clicks in its title bar, and quits when
//! closed or on Ctrl+C.
//!
//! ```text
//! RUST_LOG=safewin=debug cargo run --example hello_window
//! ```

#[cfg(windows)]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    use safewin::msg::{wm, MsgSendRecv, WndMsg};
    use safewin::{co, Hinstance, Hwnd, Point, Size, WndClassEx};

    extern "system" fn wnd_proc(hwnd: Hwnd, msg: co::Wm, wparam: usize, lparam: isize) -> isize {
        let generic = WndMsg::new(msg, wparam, lparam);
        match msg {
            co::Wm::LBUTTONDOWN => {
                let p = unsafe { wm::LButtonDown::from_generic_wm(generic) };
                let title = format!("Clicked at {}, {}", p.coords.x, p.coords.y);
                if let Err(e) = hwnd.set_window_text(&title) {
                    tracing::error!(error = %e, "Failed to set title");
                }
                0
            }
            co::Wm::DESTROY => {
                safewin::post_quit_message(0);
                0
            }
            _ => hwnd.def_window_proc(generic),
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("safewin=debug")),
        )
        .init();

    let hinstance = Hinstance::get_module_handle(None)?;
    let wcx = WndClassEx {
        style: co::Cs::HREDRAW | co::Cs::VREDRAW,
        wnd_proc,
        hinstance,
        class_name: "safewin.demo.hello".to_owned(),
        ..Default::default()
    };
    safewin::register_class_ex(&wcx)?;

    let hwnd = Hwnd::create_window_ex(
        co::WsEx::empty(),
        &wcx.class_name,
        Some("Hello, safewin"),
        co::Ws::OVERLAPPEDWINDOW | co::Ws::VISIBLE,
        Point::new(100, 100),
        Size::new(480, 320),
        None,
        None,
        hinstance,
        None,
    )?;
    tracing::info!(?hwnd, "Window created");

    ctrlc::set_handler(|| {
        println!("\nShutdown signal received...");
        safewin::post_quit_message_to_loop(130);
    })?;

    let exit_code = safewin::run_message_loop()?;
    tracing::info!(exit_code, "Bye");
    Ok(())
}

#[cfg(not(windows))]
fn main() {
    println!("This demo needs Windows.");
}
