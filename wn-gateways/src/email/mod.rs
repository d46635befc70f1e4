mod send_to_json_file;
mod sendmail;

pub use self::{send_to_json_file::SendToJsonFile, sendmail::Sendmail};
