use crate::backend::SetupRequest;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AccountField {
    Email,
    Name,
    Password,
}

pub const ACCOUNT_FIELDS: [AccountField; 3] =
    [AccountField::Email, AccountField::Name, AccountField::Password];

impl AccountField {
    pub fn as_str(self) -> &'static str {
        match self {
            AccountField::Email => "email",
            AccountField::Name => "name",
            AccountField::Password => "password",
        }
    }

    pub fn label_key(self) -> &'static str {
        match self {
            AccountField::Email => "login.email",
            AccountField::Name => "login.name",
            AccountField::Password => "login.password",
        }
    }

    pub fn placeholder_key(self) -> &'static str {
        match self {
            AccountField::Email => "login.emailPlaceholder",
            AccountField::Name => "login.namePlaceholder",
            AccountField::Password => "login.passwordPlaceholder",
        }
    }
}

impl std::fmt::Display for AccountField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Administrator credentials being typed into the install form.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct AccountDraft {
    pub email: String,
    pub name: String,
    pub password: String,
}

impl std::fmt::Debug for AccountDraft {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccountDraft")
            .field("email", &self.email)
            .field("name", &self.name)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl AccountDraft {
    pub fn new(email: &str, name: &str, password: &str) -> Self {
        Self {
            email: email.to_string(),
            name: name.to_string(),
            password: password.to_string(),
        }
    }

    pub fn value(&self, field: AccountField) -> &str {
        match field {
            AccountField::Email => &self.email,
            AccountField::Name => &self.name,
            AccountField::Password => &self.password,
        }
    }

    pub fn value_mut(&mut self, field: AccountField) -> &mut String {
        match field {
            AccountField::Email => &mut self.email,
            AccountField::Name => &mut self.name,
            AccountField::Password => &mut self.password,
        }
    }

    pub fn push_char(&mut self, field: AccountField, ch: char) {
        self.value_mut(field).push(ch);
    }

    pub fn pop_char(&mut self, field: AccountField) {
        self.value_mut(field).pop();
    }

    pub fn to_setup_request(&self) -> SetupRequest {
        SetupRequest {
            email: self.email.clone(),
            name: self.name.clone(),
            password: self.password.clone(),
        }
    }
}
