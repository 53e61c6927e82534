pub mod http;
pub mod resend;
pub mod together;
