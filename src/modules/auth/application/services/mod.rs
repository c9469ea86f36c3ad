pub mod allow_list;
pub mod session_token;
