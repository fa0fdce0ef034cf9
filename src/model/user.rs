use crate::error::AppError;
use crate::service::{required_email, required_text, ValidationRules};
use serde::{Deserialize, Serialize};

/// A student account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub user_id: i64,
    pub nisn: String,
    pub nama: String,
    pub kelas: String,
    pub no_telepon: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub nisn: String,
    pub nama: String,
    pub kelas: String,
    pub no_telepon: String,
    pub email: String,
}

impl NewUser {
    pub fn with_id(self, user_id: i64) -> User {
        User {
            user_id,
            nisn: self.nisn,
            nama: self.nama,
            kelas: self.kelas,
            no_telepon: self.no_telepon,
            email: self.email,
        }
    }
}

/// Body of `POST /api/users`.
#[derive(Debug, Default, Deserialize)]
pub struct UserInput {
    pub nisn: Option<String>,
    pub nama: Option<String>,
    pub kelas: Option<String>,
    pub no_telepon: Option<String>,
    pub email: Option<String>,
}

impl UserInput {
    pub fn validate(self, rules: &ValidationRules) -> Result<NewUser, AppError> {
        let nisn = if rules.nisn_requires_email {
            required_email("nisn", self.nisn)?
        } else {
            required_text("nisn", self.nisn)?
        };
        Ok(NewUser {
            nisn,
            nama: required_text("nama", self.nama)?,
            kelas: required_text("kelas", self.kelas)?,
            no_telepon: required_text("no_telepon", self.no_telepon)?,
            email: required_email("email", self.email)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> UserInput {
        UserInput {
            nisn: Some("a@b.com".into()),
            nama: Some("Ann".into()),
            kelas: Some("10A".into()),
            no_telepon: Some("0812".into()),
            email: Some("a@b.com".into()),
        }
    }

    #[test]
    fn nisn_rule_follows_configuration() {
        let plain = UserInput {
            nisn: Some("0051234567".into()),
            ..input()
        };
        let err = plain.validate(&ValidationRules::default()).unwrap_err();
        assert_eq!(err.to_string(), "nisn must be a valid email");

        let relaxed = ValidationRules {
            nisn_requires_email: false,
        };
        let plain = UserInput {
            nisn: Some("0051234567".into()),
            ..input()
        };
        assert_eq!(plain.validate(&relaxed).unwrap().nisn, "0051234567");
    }

    #[test]
    fn email_is_always_checked() {
        let bad = UserInput {
            email: Some("not-an-email".into()),
            ..input()
        };
        let relaxed = ValidationRules {
            nisn_requires_email: false,
        };
        assert!(bad.validate(&relaxed).is_err());
    }
}
