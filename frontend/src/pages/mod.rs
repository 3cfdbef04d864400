pub mod dashboard;
pub mod splash;
