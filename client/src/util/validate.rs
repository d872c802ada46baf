//! Structural form validation for the login and registration screens.
//!
//! Validation runs before any credential comparison and reports errors
//! per-field; a submission with any structural error never reaches the
//! credential check.

#[cfg(test)]
#[path = "validate_test.rs"]
mod tests;

/// Minimum password length accepted by both forms.
pub const PASSWORD_MIN_LEN: usize = 8;
/// Minimum username length accepted at registration.
pub const USERNAME_MIN_LEN: usize = 3;

/// Loose well-formedness check for an email address: one `@` with a
/// non-empty local part and a dotted, non-empty domain, no whitespace.
pub fn is_valid_email(raw: &str) -> bool {
    if raw.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = raw.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && !tld.is_empty()
}

/// Per-field errors for the login form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginErrors {
    pub email: Option<&'static str>,
    pub password: Option<&'static str>,
}

impl LoginErrors {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }
}

/// Validate the login form fields.
pub fn validate_login(email: &str, password: &str) -> LoginErrors {
    LoginErrors {
        email: (!is_valid_email(email)).then_some("Invalid email address."),
        password: (password.len() < PASSWORD_MIN_LEN)
            .then_some("Password must be at least 8 characters."),
    }
}

/// Per-field errors for the registration form. A password/confirmation
/// mismatch is attributed to the confirmation field, not the password.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterErrors {
    pub username: Option<&'static str>,
    pub email: Option<&'static str>,
    pub password: Option<&'static str>,
    pub confirm_password: Option<&'static str>,
}

impl RegisterErrors {
    pub fn is_empty(&self) -> bool {
        self.username.is_none()
            && self.email.is_none()
            && self.password.is_none()
            && self.confirm_password.is_none()
    }
}

/// Validate the registration form fields.
pub fn validate_register(
    username: &str,
    email: &str,
    password: &str,
    confirm_password: &str,
) -> RegisterErrors {
    let confirm_error = if confirm_password.len() < PASSWORD_MIN_LEN {
        Some("Please confirm your password.")
    } else if password != confirm_password {
        Some("Passwords do not match.")
    } else {
        None
    };

    RegisterErrors {
        username: (username.trim().len() < USERNAME_MIN_LEN)
            .then_some("Username must be at least 3 characters."),
        email: (!is_valid_email(email)).then_some("Invalid email address."),
        password: (password.len() < PASSWORD_MIN_LEN)
            .then_some("Password must be at least 8 characters."),
        confirm_password: confirm_error,
    }
}
