//! Exit handling: signal handlers and terminal restore.

use crate::cli::quiet;

/// Put the tty back in cooked mode with echo.
fn restore_termios() {
    unsafe {
        let mut termios: libc::termios = std::mem::zeroed();
        if libc::tcgetattr(libc::STDIN_FILENO, &mut termios) == 0 {
            termios.c_oflag |= libc::OPOST | libc::ONLCR;
            termios.c_lflag |= libc::ICANON | libc::ECHO | libc::ISIG;
            libc::tcsetattr(libc::STDIN_FILENO, libc::TCSANOW, &termios);
        }
    }
}

/// Registered with atexit - runs on any normal or signalled exit.
extern "C" fn cleanup_on_exit() {
    restore_termios();
    // Escape codes only when stdout is a terminal (not when piping the password)
    if quiet::stdout_is_tty() {
        const SEQ: &[u8] = b"\x1b[0m\x1b[?25h";
        unsafe {
            libc::write(
                libc::STDOUT_FILENO,
                SEQ.as_ptr() as *const libc::c_void,
                SEQ.len(),
            );
        }
    }
}

/// SIGINT/SIGTERM/SIGHUP - exit, atexit does the cleanup.
extern "C" fn signal_handler(_: libc::c_int) {
    unsafe { libc::exit(130) }
}

/// Call early in main().
pub fn install_handlers() {
    unsafe {
        libc::atexit(cleanup_on_exit);
        for sig in [libc::SIGINT, libc::SIGTERM, libc::SIGHUP] {
            libc::signal(sig, signal_handler as *const () as libc::sighandler_t);
        }
    }
}

/// Keep the generated password out of core dumps.
#[cfg(target_os = "linux")]
pub fn disable_core_dumps() {
    unsafe { libc::prctl(libc::PR_SET_DUMPABLE, 0) };
}

#[cfg(not(target_os = "linux"))]
pub fn disable_core_dumps() {}

pub fn reset_terminal() {
    restore_termios();
}
