// 上传表单

mod form;
mod state;

pub use form::render_upload_form;
pub use state::UploadFormState;
