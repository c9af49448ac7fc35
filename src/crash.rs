//! Deliberate abnormal termination

use std::ptr;

/// Write through a null pointer.
///
/// Release builds die with a segmentation fault. Builds with debug UB checks
/// enabled abort on the null precondition before the write happens. Either
/// way the process has no exit code and produces no stdout.
pub fn null_dereference() -> ! {
    let target: *mut i32 = ptr::null_mut();
    // SAFETY: unsound on purpose, this write must fault.
    unsafe {
        ptr::write_volatile(target, 0);
    }
    // Not reached once the write faults.
    std::process::abort()
}
