//! Environment-driven settings. Defaults live in code; a `.env` file is
//! honored when present.

/// What to do when deleting a Customer with orders or a Product with
/// associations. From env `DELETE_POLICY`, default `restrict`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeletePolicy {
    /// Refuse the delete with 400 while references exist.
    Restrict,
    /// Remove referencing rows in the same transaction, then the entity.
    Cascade,
}

impl DeletePolicy {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "restrict" => Some(DeletePolicy::Restrict),
            "cascade" => Some(DeletePolicy::Cascade),
            _ => None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Settings {
    pub database_url: String,
    pub bind_addr: String,
    pub delete_policy: DeletePolicy,
}

impl Settings {
    /// Read settings from the environment (and `.env` if present).
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "postgres://localhost/orderhouse".into());
        let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());
        let delete_policy = match std::env::var("DELETE_POLICY") {
            Ok(raw) => DeletePolicy::parse(&raw).unwrap_or_else(|| {
                tracing::warn!("unknown DELETE_POLICY '{}', using restrict", raw);
                DeletePolicy::Restrict
            }),
            Err(_) => DeletePolicy::Restrict,
        };
        Settings {
            database_url,
            bind_addr,
            delete_policy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_policy() {
        assert_eq!(DeletePolicy::parse("restrict"), Some(DeletePolicy::Restrict));
        assert_eq!(DeletePolicy::parse("CASCADE"), Some(DeletePolicy::Cascade));
        assert_eq!(DeletePolicy::parse("drop"), None);
    }
}
