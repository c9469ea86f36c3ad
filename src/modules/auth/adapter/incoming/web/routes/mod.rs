pub mod callback;
pub mod login;
pub mod logout;
pub mod pages;
pub mod session;
