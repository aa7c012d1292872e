/// Called by the print shortcut script when `window.print()` throws.
#[tauri::command]
pub fn report_print_failure(reason: String) {
    tracing::error!(%reason, "print failed");
}
