pub mod resend;
pub mod together;
