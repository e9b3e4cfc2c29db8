use async_graphql::{Context, Object, Result};
use services::PasswordStrength;
use uuid::Uuid;

use crate::types::{FormView, PasswordStrengthView};
use crate::utilities::FormSessions;

#[derive(Default)]
pub struct FormQueries;

#[Object]
impl FormQueries {
    /// Current render state of an open form, if the session exists
    async fn form(&self, ctx: &Context<'_>, session_id: Uuid) -> Result<Option<FormView>> {
        let sessions = ctx.data::<FormSessions>()?;
        Ok(sessions
            .snapshot(&session_id)
            .map(|snapshot| FormView::new(session_id, snapshot)))
    }

    /// Strength meter for a candidate password
    async fn password_strength(&self, password: String) -> PasswordStrengthView {
        PasswordStrength::of(&password).into()
    }
}

#[cfg(test)]
mod tests {
    use crate::test_helpers::*;
    use async_graphql::Request;

    #[tokio::test]
    async fn test_password_strength_query() {
        let schema = create_test_schema();
        let query = r#"{ passwordStrength(password: "Abc1") { score maxScore label } }"#;

        let res = schema.execute(Request::new(query)).await;
        let data = res.data.into_json().unwrap();

        assert_eq!(data["passwordStrength"]["score"], 3);
        assert_eq!(data["passwordStrength"]["maxScore"], 5);
        assert_eq!(data["passwordStrength"]["label"], "Good");
    }

    #[tokio::test]
    async fn test_unknown_session_is_null() {
        let schema = create_test_schema();
        let query = r#"{ form(sessionId: "00000000-0000-0000-0000-000000000000") { kind } }"#;

        let res = schema.execute(Request::new(query)).await;
        assert!(res.errors.is_empty());
        let data = res.data.into_json().unwrap();

        assert!(data["form"].is_null());
    }
}
