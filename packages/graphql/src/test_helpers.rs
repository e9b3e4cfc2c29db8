use async_graphql::Request;
use chrono::NaiveDate;
use services::{FixedClock, SimulatedGateway};
use std::sync::Arc;

use crate::{build_schema, PortalSchema};

pub type TestSchema = PortalSchema;

pub fn create_test_schema() -> TestSchema {
    let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
    build_schema(SimulatedGateway::new(), Arc::new(FixedClock(today)))
}

/// Opens a form and returns its session id.
pub async fn open_form(schema: &TestSchema, kind: &str) -> String {
    let query = format!("mutation {{ openForm(kind: {}) {{ sessionId }} }}", kind);
    let res = schema.execute(Request::new(query)).await;
    let data = res.data.into_json().unwrap();
    data["openForm"]["sessionId"].as_str().unwrap().to_string()
}

pub async fn change_text(schema: &TestSchema, session_id: &str, field: &str, text: &str) {
    let query = format!(
        r#"mutation {{ changeField(sessionId: "{}", field: "{}", value: {{ text: "{}" }}) {{
            ... on FormView {{ sessionId }}
        }} }}"#,
        session_id, field, text
    );
    let res = schema.execute(Request::new(query)).await;
    assert!(res.errors.is_empty(), "{:?}", res.errors);
}
