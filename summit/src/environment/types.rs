use summit_core_contact_impl::ContactFeatureServiceImpl;
use summit_core_fun_impl::FunFeatureServiceImpl;
use summit_email_impl::EmailServiceImpl;
use summit_extern_impl::{resend::ResendApiServiceImpl, together::TogetherApiServiceImpl};

// API
pub type RestServer = summit_api_rest::RestServer<ContactFeature, FunFeature>;

// Extern
pub type ResendApi = ResendApiServiceImpl;
pub type TogetherApi = TogetherApiServiceImpl;

// Email
pub type Email = EmailServiceImpl<ResendApi>;

// Core
pub type ContactFeature = ContactFeatureServiceImpl<Email>;
pub type FunFeature = FunFeatureServiceImpl<TogetherApi>;
