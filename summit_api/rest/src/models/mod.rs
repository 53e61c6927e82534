use serde::Serialize;

pub mod contact;
pub mod fun;

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub ok: bool,
    pub error: String,
}

impl ApiError {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            error: error.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ApiOk {
    pub ok: bool,
}
