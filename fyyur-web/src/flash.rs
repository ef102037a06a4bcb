//! One-shot notices carried across a redirect
//!
//! A handler pushes messages onto [`Flash`] and either renders a page, which
//! shows every pending message and clears the cookie, or redirects, which
//! stores the messages in the `fyyur_flash` cookie for the next rendered
//! page. The cookie value is percent-encoded JSON.

use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::request::Parts;
use axum::http::StatusCode;
use axum::response::{AppendHeaders, Html, IntoResponse, Redirect, Response};
use cookie::{Cookie, SameSite};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use tracing::{debug, warn};

pub const FLASH_COOKIE: &str = "fyyur_flash";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashLevel {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashMessage {
    pub level: FlashLevel,
    pub text: String,
}

/// Pending notices for the current request
#[derive(Debug, Default)]
pub struct Flash {
    messages: Vec<FlashMessage>,
    /// The request carried a flash cookie that must be cleared
    carried: bool,
}

impl Flash {
    pub fn success(&mut self, text: impl Into<String>) {
        self.messages.push(FlashMessage {
            level: FlashLevel::Success,
            text: text.into(),
        });
    }

    pub fn error(&mut self, text: impl Into<String>) {
        self.messages.push(FlashMessage {
            level: FlashLevel::Error,
            text: text.into(),
        });
    }

    pub fn messages(&self) -> &[FlashMessage] {
        &self.messages
    }

    /// Render a page that displays (and thereby consumes) every pending message
    pub fn render<F>(self, status: StatusCode, page: F) -> Response
    where
        F: FnOnce(&[FlashMessage]) -> String,
    {
        let body = Html(page(&self.messages));
        if self.carried {
            (status, AppendHeaders([(SET_COOKIE, removal_cookie())]), body).into_response()
        } else {
            (status, body).into_response()
        }
    }

    /// Redirect (303), carrying pending messages to the next rendered page
    pub fn redirect(self, to: &str) -> Response {
        if self.messages.is_empty() {
            if self.carried {
                return (AppendHeaders([(SET_COOKIE, removal_cookie())]), Redirect::to(to)).into_response();
            }
            return Redirect::to(to).into_response();
        }
        (AppendHeaders([(SET_COOKIE, encode_messages(&self.messages))]), Redirect::to(to)).into_response()
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Flash
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let mut flash = Flash::default();
        for header in parts.headers.get_all(COOKIE) {
            let Ok(header) = header.to_str() else {
                continue;
            };
            for cookie in Cookie::split_parse_encoded(header.to_owned()).filter_map(Result::ok) {
                if cookie.name() != FLASH_COOKIE {
                    continue;
                }
                flash.carried = true;
                match decode_messages(cookie.value()) {
                    Some(messages) => flash.messages.extend(messages),
                    None => debug!("Discarding unreadable flash cookie"),
                }
            }
        }
        Ok(flash)
    }
}

fn flash_cookie(value: String) -> Cookie<'static> {
    Cookie::build((FLASH_COOKIE, value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}

/// `Set-Cookie` value holding `messages`
pub fn encode_messages(messages: &[FlashMessage]) -> String {
    let json = serde_json::to_string(messages).unwrap_or_else(|e| {
        warn!("Dropping {} flash message(s): {}", messages.len(), e);
        "[]".to_string()
    });
    flash_cookie(json).encoded().to_string()
}

/// Messages stored in a (decoded) cookie value; `None` if malformed
pub fn decode_messages(value: &str) -> Option<Vec<FlashMessage>> {
    serde_json::from_str(value).ok()
}

fn removal_cookie() -> String {
    let mut cookie = flash_cookie(String::new());
    cookie.make_removal();
    cookie.to_string()
}
