use std::sync::Arc;

use anyhow::Context;
use summit_config::Config;
use summit_core_contact_impl::ContactFeatureConfig;
use summit_core_fun_impl::FunFeatureConfig;
use summit_extern_impl::{
    http::HttpClient, resend::ResendApiServiceConfig, together::TogetherApiServiceConfig,
};
use types::{ContactFeature, Email, FunFeature, ResendApi, RestServer, TogetherApi};

pub mod types;

/// Provides a fully wired instance of `T`.
pub trait Provides<T> {
    fn provide(&self) -> T;
}

/// Holds the provider clients and feature configs built from [`Config`].
///
/// Clients which need a secret that has not been configured are `None`. The
/// features report this to their callers instead of refusing to start.
#[derive(Debug, Clone)]
pub struct Provider {
    email: Option<Email>,
    together_api: Option<TogetherApi>,
    contact_feature_config: ContactFeatureConfig,
    fun_feature_config: FunFeatureConfig,
}

impl Provider {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        Ok(Self {
            email: email(config)?,
            together_api: together_api(config)?,
            contact_feature_config: ContactFeatureConfig {
                recipient: config.contact.recipient.clone().map(Arc::new),
            },
            fun_feature_config: FunFeatureConfig {
                model: config.fun.model.as_str().into(),
                temperature: config.fun.temperature,
                max_tokens: config.fun.max_tokens,
            },
        })
    }
}

impl Provides<Option<Email>> for Provider {
    fn provide(&self) -> Option<Email> {
        self.email.clone()
    }
}

impl Provides<Option<TogetherApi>> for Provider {
    fn provide(&self) -> Option<TogetherApi> {
        self.together_api.clone()
    }
}

impl Provides<ContactFeature> for Provider {
    fn provide(&self) -> ContactFeature {
        ContactFeature::new(self.provide(), self.contact_feature_config.clone())
    }
}

impl Provides<FunFeature> for Provider {
    fn provide(&self) -> FunFeature {
        FunFeature::new(self.provide(), self.fun_feature_config.clone())
    }
}

impl Provides<RestServer> for Provider {
    fn provide(&self) -> RestServer {
        RestServer::new(self.provide(), self.provide())
    }
}

/// Returns `None` unless both the api key and the sender are configured.
fn email(config: &Config) -> anyhow::Result<Option<Email>> {
    let email = &config.email;
    let (Some(api_key), Some(from)) = (&email.api_key, &email.from) else {
        return Ok(None);
    };

    let http =
        HttpClient::new(Some(*email.timeout)).context("Failed to build http client for resend")?;
    let resend_api = ResendApi::new(
        ResendApiServiceConfig {
            endpoint: email.endpoint.clone().into(),
            api_key: api_key.clone().into(),
        },
        http,
    );

    Ok(Some(Email::new(resend_api, from.clone())))
}

fn together_api(config: &Config) -> anyhow::Result<Option<TogetherApi>> {
    let fun = &config.fun;
    let Some(api_key) = &fun.api_key else {
        return Ok(None);
    };

    let http =
        HttpClient::new(Some(*fun.timeout)).context("Failed to build http client for together")?;

    Ok(Some(TogetherApi::new(
        TogetherApiServiceConfig {
            endpoint: fun.endpoint.clone().into(),
            api_key: api_key.clone().into(),
        },
        http,
    )))
}
