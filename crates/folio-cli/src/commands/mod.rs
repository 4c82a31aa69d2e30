pub mod build;
pub mod list;
pub mod run;
pub mod show;
pub mod theme;
