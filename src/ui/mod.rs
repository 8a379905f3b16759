pub mod form;
pub mod gesture;
pub mod message;
pub mod state;
