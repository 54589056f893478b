// 密码弹窗

mod dialog;
mod state;

pub use dialog::render_password_dialog_overlay;
pub use state::PasswordDialogState;
