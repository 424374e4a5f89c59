//! In-memory [`Transport`] for unit tests.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;

use super::model::{FanKind, Page};
use crate::auth::{SecretToken, Session, SessionCookie};
use crate::error::FanError;
use crate::transport::{Fields, Transport};

pub(crate) const EMPTY_BATCH: &str = "for (;;);{'payload':{'data':[]}}";

/// One recorded request.
#[derive(Debug, Clone)]
pub(crate) struct RecordedCall {
    pub(crate) method: &'static str,
    pub(crate) path: String,
    pub(crate) fields: Vec<(String, String)>,
}

impl RecordedCall {
    pub(crate) fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Serves scripted batches keyed by (kind, offset); unscripted offsets are empty.
#[derive(Default)]
pub(crate) struct ScriptedTransport {
    batches: HashMap<(FanKind, usize), String>,
    failures: HashSet<(FanKind, usize)>,
    pages: HashMap<String, String>,
    endless: bool,
    calls: Mutex<Vec<RecordedCall>>,
}

impl ScriptedTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Scripts `count` records at `offset`, with ids `<kind>-<offset + i>`.
    pub(crate) fn with_batch(mut self, kind: FanKind, offset: usize, count: usize) -> Self {
        self.batches
            .insert((kind, offset), batch_body(kind, offset, count));
        self
    }

    pub(crate) fn with_failure(mut self, kind: FanKind, offset: usize) -> Self {
        self.failures.insert((kind, offset));
        self
    }

    pub(crate) fn with_page_html(mut self, name: &str, html: &str) -> Self {
        self.pages.insert(name.to_string(), html.to_string());
        self
    }

    /// Every unscripted offset returns one record.
    pub(crate) fn endless(mut self) -> Self {
        self.endless = true;
        self
    }

    pub(crate) fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().map(|calls| calls.clone()).unwrap_or_default()
    }

    pub(crate) fn offsets(&self, kind: FanKind) -> Vec<usize> {
        self.calls()
            .iter()
            .filter(|call| call.field("query_edge_key") == Some(kind.endpoint_key()))
            .filter_map(|call| call.field("offset").and_then(|offset| offset.parse().ok()))
            .collect()
    }

    pub(crate) fn limits(&self) -> Vec<usize> {
        self.calls()
            .iter()
            .filter_map(|call| call.field("limit").and_then(|limit| limit.parse().ok()))
            .collect()
    }

    fn record(&self, method: &'static str, path: &str, fields: Fields<'_>) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(RecordedCall {
                method,
                path: path.to_string(),
                fields: fields
                    .iter()
                    .map(|(name, value)| ((*name).to_string(), value.clone()))
                    .collect(),
            });
        }
    }
}

fn batch_body(kind: FanKind, offset: usize, count: usize) -> String {
    let records: Vec<String> = (offset..offset + count)
        .map(|n| {
            format!(
                "{{'profile':{{'id':'{kind}-{n}','name':'User {n}'}},'timestamp':{}}}",
                1_500_000_000 + n
            )
        })
        .collect();
    format!("for (;;);{{'payload':{{'data':[{}]}}}}", records.join(","))
}

fn kind_from_key(key: Option<&str>) -> Option<FanKind> {
    FanKind::ALL
        .into_iter()
        .find(|kind| Some(kind.endpoint_key()) == key)
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn get(
        &self,
        _session: &Session,
        path: &str,
        query: Fields<'_>,
    ) -> Result<String, FanError> {
        self.record("GET", path, query);
        self.pages
            .get(path)
            .cloned()
            .ok_or_else(|| FanError::transport(format!("scripted:{path}"), "HTTP 404"))
    }

    async fn post(
        &self,
        _session: &Session,
        path: &str,
        form: Fields<'_>,
    ) -> Result<String, FanError> {
        self.record("POST", path, form);
        let call = self.calls().pop();
        let kind = call
            .as_ref()
            .and_then(|call| kind_from_key(call.field("query_edge_key")))
            .ok_or_else(|| FanError::transport(format!("scripted:{path}"), "unknown edge key"))?;
        let offset: usize = call
            .as_ref()
            .and_then(|call| call.field("offset"))
            .and_then(|offset| offset.parse().ok())
            .unwrap_or_default();

        if self.failures.contains(&(kind, offset)) {
            return Err(FanError::transport(
                format!("scripted:{path}"),
                "connection reset",
            ));
        }
        if let Some(body) = self.batches.get(&(kind, offset)) {
            return Ok(body.clone());
        }
        if self.endless {
            return Ok(batch_body(kind, offset, 1));
        }
        Ok(EMPTY_BATCH.to_string())
    }
}

pub(crate) fn test_session() -> Session {
    Session::new(
        "100001",
        SecretToken::new("secret-token"),
        vec![SessionCookie::new("c_user", "100001")],
    )
}

pub(crate) fn test_page() -> Page {
    Page {
        id: "987654321".to_string(),
        name: "mypage".to_string(),
    }
}
