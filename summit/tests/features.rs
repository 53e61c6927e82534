use std::{ffi::OsString, path::Path, sync::Arc};

use summit::environment::{
    types::{ContactFeature, FunFeature},
    Provider, Provides,
};
use summit_config::Config;
use summit_core_contact_contracts::{ContactFeatureService, ContactSendMessageError};
use summit_core_fun_contracts::{FunAskError, FunFeatureService};
use summit_models::{
    contact::{
        ContactMessageContent, ContactName, ContactOrganization, ContactPersona, ContactRegion,
        ContactSubmission,
    },
    fun::{FunQuestion, FunQuestions},
};
use summit_testing::resend::{ReceivedEmail, ResendOutbox, SEND_ROUTE};
use summit_utils::assert_matches;

const RESEND_API_KEY: &str = "re_test";
const TOGETHER_API_KEY: &str = "together_test";

#[tokio::test]
async fn contact_sends_email() {
    let (config, outbox) = setup(RESEND_API_KEY).await;
    let sut: ContactFeature = Provider::new(&config).unwrap().provide();

    sut.send_message(submission(None)).await.unwrap();

    assert_eq!(
        outbox.emails().await,
        [ReceivedEmail {
            from: "Summit Connect <noreply@summit.test>".into(),
            to: vec!["sales@summit.test".into()],
            subject: "Summit Connect — oem — Analytical Engines".into(),
            text: "Name: Ada Lovelace\nEmail: ada@example.com\nOrg: Analytical Engines\n\
                   Region: EU\nPersona: oem\n\nMessage:\nWe would like a demo."
                .into(),
            reply_to: Some("ada@example.com".into()),
        }]
    );
}

#[tokio::test]
async fn contact_honeypot_sends_nothing() {
    let (config, outbox) = setup(RESEND_API_KEY).await;
    let sut: ContactFeature = Provider::new(&config).unwrap().provide();

    sut.send_message(submission(Some("bot"))).await.unwrap();

    assert!(outbox.emails().await.is_empty());
}

#[tokio::test]
async fn contact_invalid_api_key() {
    let (config, outbox) = setup("re_wrong").await;
    let sut: ContactFeature = Provider::new(&config).unwrap().provide();

    let result = sut.send_message(submission(None)).await;

    assert_matches!(result, Err(ContactSendMessageError::Send));
    assert!(outbox.emails().await.is_empty());
}

#[tokio::test]
async fn fun_answers() {
    let config = setup_together(TOGETHER_API_KEY).await;
    let sut: FunFeature = Provider::new(&config).unwrap().provide();

    let answer = sut.ask(questions("Why?", "Flying cars")).await.unwrap();

    assert_eq!(
        answer,
        "Q1: Why?\nQ2: Flying cars\nPlease answer both thoughtfully."
    );
}

#[tokio::test]
async fn fun_rate_limited() {
    let config = setup_together(TOGETHER_API_KEY).await;
    let sut: FunFeature = Provider::new(&config).unwrap().provide();

    let result = sut.ask(questions("rate-limit", "")).await;

    assert_matches!(
        result,
        Err(FunAskError::Upstream { status: 429, message }) if message == "rate limited"
    );
}

#[tokio::test]
async fn fun_invalid_api_key() {
    let config = setup_together("together_wrong").await;
    let sut: FunFeature = Provider::new(&config).unwrap().provide();

    let result = sut.ask(questions("Why?", "")).await;

    assert_matches!(
        result,
        Err(FunAskError::Upstream { status: 401, message }) if message == "Invalid API key provided"
    );
}

#[tokio::test]
async fn fun_not_configured() {
    let config = load(&[]);
    let sut: FunFeature = Provider::new(&config).unwrap().provide();

    let result = sut.ask(questions("Why?", "")).await;

    assert_matches!(result, Err(FunAskError::NotConfigured));
}

fn load(vars: &[(&str, &str)]) -> Config {
    summit_config::load_with_env(&[] as &[&Path], |key| {
        vars.iter()
            .find(|&&(k, _)| k == key)
            .map(|&(_, v)| OsString::from(v))
    })
    .unwrap()
}

async fn setup(api_key: &str) -> (Config, Arc<ResendOutbox>) {
    let outbox = Arc::<ResendOutbox>::default();
    let base_url = summit_testing::spawn(summit_testing::resend::router(
        RESEND_API_KEY.into(),
        Arc::clone(&outbox),
    ))
    .await
    .unwrap();

    let mut config = load(&[
        ("RESEND_API_KEY", api_key),
        ("CONTACT_FROM", "Summit Connect <noreply@summit.test>"),
        ("CONTACT_TO", "sales@summit.test"),
    ]);
    config.email.endpoint = base_url.join(SEND_ROUTE.trim_start_matches('/')).unwrap();

    (config, outbox)
}

async fn setup_together(api_key: &str) -> Config {
    let base_url = summit_testing::spawn(summit_testing::together::router(
        TOGETHER_API_KEY.into(),
    ))
    .await
    .unwrap();

    let mut config = load(&[("TOGETHER_API_KEY", api_key)]);
    config.fun.endpoint = base_url
        .join(summit_testing::together::CHAT_COMPLETIONS_ROUTE.trim_start_matches('/'))
        .unwrap();

    config
}

fn submission(honeypot: Option<&str>) -> ContactSubmission {
    ContactSubmission {
        name: ContactName::try_new("Ada Lovelace".to_owned()).unwrap(),
        email: "ada@example.com".parse().unwrap(),
        org: ContactOrganization::try_new("Analytical Engines".to_owned()).unwrap(),
        region: ContactRegion::try_new("EU".to_owned()).unwrap(),
        persona: ContactPersona::Oem,
        message: ContactMessageContent::try_new("We would like a demo.".to_owned()).unwrap(),
        honeypot: honeypot.map(Into::into),
    }
}

fn questions(universe_question: &str, idea_awake: &str) -> FunQuestions {
    FunQuestions {
        universe_question: FunQuestion::new(universe_question.to_owned()),
        idea_awake: FunQuestion::new(idea_awake.to_owned()),
    }
}
