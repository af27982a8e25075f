use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identity of the caller as asserted by the token issuer.
/// Only used for ownership comparison and filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for UserId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl From<UserId> for Uuid {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_uuid() {
        let raw = Uuid::new_v4();
        let id = UserId::from(raw);

        assert_eq!(id.value(), raw);
        assert_eq!(Uuid::from(id), raw);
        assert_eq!(id.to_string(), raw.to_string());
    }

    #[test]
    fn serializes_as_bare_uuid() {
        let raw = Uuid::new_v4();
        let json = serde_json::to_value(UserId::from(raw)).unwrap();

        assert_eq!(json, serde_json::json!(raw.to_string()));
    }
}
