mod handler;
mod model;


pub use handler::{get_by_account, get_by_uid, register, update_avatar};
