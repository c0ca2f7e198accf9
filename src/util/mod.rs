pub mod clipboard;
pub mod url;
