use serde::Deserialize;

/// Validation message shown next to a missing required field.
pub const REQUIRED_FIELD_ERROR: &str = "This field is required.";

/// The login form exactly as the browser posts it. `remember_me` is a
/// checkbox, so the field is simply absent when unchecked.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginSubmission {
    #[serde(default)]
    pub openid: Option<String>,
    #[serde(default)]
    pub remember_me: Option<String>,
}

/// A login submission that passed validation.
#[derive(Debug, Clone)]
pub struct LoginForm {
    pub openid: String,
    pub remember_me: bool,
}

impl LoginSubmission {
    /// The submitted identifier, for echoing back into the form field.
    pub fn openid_value(&self) -> &str {
        self.openid.as_deref().unwrap_or("")
    }

    pub fn remember_me_value(&self) -> bool {
        checkbox_checked(self.remember_me.as_deref())
    }

    /// The only rule is that `openid` must be non-blank. Errors come back as
    /// display strings ready for the template.
    pub fn validate(&self) -> Result<LoginForm, Vec<String>> {
        let openid = self.openid_value().trim();
        if openid.is_empty() {
            return Err(vec![REQUIRED_FIELD_ERROR.to_string()]);
        }
        Ok(LoginForm {
            openid: openid.to_string(),
            remember_me: self.remember_me_value(),
        })
    }
}

/// Browsers send checkboxes as presence with an arbitrary value ("on" by
/// default); "false" and "0" count as unchecked for hand-built clients.
fn checkbox_checked(value: Option<&str>) -> bool {
    match value {
        Some(value) => !value.is_empty() && value != "false" && value != "0",
        None => false,
    }
}
