pub mod email;
pub mod fun;
pub mod serve;
