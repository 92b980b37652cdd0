//! Maps the abstract thread priority range onto the platform's scheduler.
//!
//! Only ever called from inside the thread being adjusted.

use std::io;

use crate::thread::NORM_PRIORITY;

#[cfg(any(target_os = "linux", target_os = "android"))]
mod priority {
    use libc::{setpriority, syscall, SYS_gettid, PRIO_PROCESS};
    use std::io;

    use super::nice_value;

    pub fn set_current_thread_priority(priority: i32) -> io::Result<()> {
        // no Linux, PRIO_PROCESS com um tid afeta só aquela thread
        unsafe {
            let tid = syscall(SYS_gettid) as libc::id_t;
            if setpriority(PRIO_PROCESS, tid, nice_value(priority)) != 0 {
                return Err(io::Error::last_os_error());
            }
        }
        Ok(())
    }
}

#[cfg(target_os = "windows")]
mod priority {
    use std::io;
    use winapi::um::processthreadsapi::{GetCurrentThread, SetThreadPriority};
    use winapi::um::winbase::{
        THREAD_PRIORITY_ABOVE_NORMAL, THREAD_PRIORITY_BELOW_NORMAL, THREAD_PRIORITY_HIGHEST,
        THREAD_PRIORITY_LOWEST, THREAD_PRIORITY_NORMAL,
    };

    pub fn set_current_thread_priority(priority: i32) -> io::Result<()> {
        let level = match priority {
            i32::MIN..=2 => THREAD_PRIORITY_LOWEST,
            3..=4 => THREAD_PRIORITY_BELOW_NORMAL,
            5 => THREAD_PRIORITY_NORMAL,
            6..=7 => THREAD_PRIORITY_ABOVE_NORMAL,
            _ => THREAD_PRIORITY_HIGHEST,
        };

        unsafe {
            if SetThreadPriority(GetCurrentThread(), level as i32) == 0 {
                return Err(io::Error::last_os_error());
            }
        }
        Ok(())
    }
}

#[cfg(not(any(target_os = "linux", target_os = "android", target_os = "windows")))]
mod priority {
    use std::io;

    pub fn set_current_thread_priority(_priority: i32) -> io::Result<()> {
        Err(io::Error::new(
            io::ErrorKind::Unsupported,
            "setting thread priority is not supported on this platform",
        ))
    }
}

/// Nice value for a priority: NORM maps to 0, each step away moves two nice levels.
#[allow(dead_code)]
fn nice_value(priority: i32) -> i32 {
    (NORM_PRIORITY - priority) * 2
}

/// Applies `priority` to the calling OS thread.
pub fn set_current_thread_priority(priority: i32) -> io::Result<()> {
    priority::set_current_thread_priority(priority)
}

/// Applies `priority` to the calling thread, logging instead of failing.
pub(crate) fn apply_to_current_thread(priority: i32) {
    match set_current_thread_priority(priority) {
        Ok(()) => tracing::debug!(priority, "thread priority applied"),
        Err(e) if e.kind() == io::ErrorKind::Unsupported => {
            tracing::debug!(priority, "thread priority not applied: {}", e)
        }
        Err(e) => tracing::warn!(priority, "failed to set thread priority: {}", e),
    }
}
