pub mod assignments;
pub mod core;
pub mod dashboard;
pub mod session;
pub mod submissions;
pub mod theme;
