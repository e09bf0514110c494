//! Platform-specific process bootstrap.

/// Application identity under which toasts are grouped on Windows.
pub const APP_USER_MODEL_ID: &str = "ForwardNotifier.Receiver";

/// Register an explicit AppUserModelID for this process.
///
/// Without this, Windows attributes toasts to the shell host instead of the
/// receiver. Registration failure only affects toast grouping, so the call
/// is fire-and-forget.
#[cfg(windows)]
pub fn register_app_identity() {
    use windows_sys::Win32::UI::Shell::SetCurrentProcessExplicitAppUserModelID;

    let wide: Vec<u16> = APP_USER_MODEL_ID
        .encode_utf16()
        .chain(std::iter::once(0))
        .collect();

    unsafe {
        SetCurrentProcessExplicitAppUserModelID(wide.as_ptr());
    }
}

#[cfg(not(windows))]
pub fn register_app_identity() {}
