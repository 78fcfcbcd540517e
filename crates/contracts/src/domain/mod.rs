pub mod a001_post;
pub mod a002_tool;
pub mod a003_creator;
pub mod common;
