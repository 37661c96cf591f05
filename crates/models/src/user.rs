use serde::{Deserialize, Serialize};

/// Account role from the seed document. Any string other than
/// `"administrator"` maps to `Standard`, matching the source data shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Administrator,
    Standard,
}

impl From<String> for Role {
    fn from(s: String) -> Self {
        if s == "administrator" {
            Role::Administrator
        } else {
            Role::Standard
        }
    }
}

impl From<Role> for String {
    fn from(r: Role) -> Self {
        match r {
            Role::Administrator => "administrator".into(),
            Role::Standard => "standard".into(),
        }
    }
}

/// Login account, loaded once at startup and never mutated.
///
/// The password is plaintext because this gate is a presentation-layer
/// placeholder, not an authentication system. A real deployment must
/// delegate credential handling to a trusted backend service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub password: String,
    pub role: Role,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_role_string_is_standard() {
        let u: User = serde_json::from_str(
            r#"{"username":"ana","password":"x","role":"editor"}"#,
        )
        .expect("parse");
        assert_eq!(u.role, Role::Standard);
    }

    #[test]
    fn administrator_role_round_trips() {
        let u: User = serde_json::from_str(
            r#"{"username":"admin","password":"admin123","role":"administrator"}"#,
        )
        .expect("parse");
        assert_eq!(u.role, Role::Administrator);
        let json = serde_json::to_string(&u).expect("serialize");
        assert!(json.contains("\"administrator\""));
    }
}
