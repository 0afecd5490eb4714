pub mod editor;
pub mod employee;
pub mod error;
pub mod form;
pub mod platform;
pub mod reference;
pub mod route;
