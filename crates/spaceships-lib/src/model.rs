use serde::{Deserialize, Serialize};

/// A spaceship record as stored in the `spaceships` table.
///
/// The serde renames pin the wire format to `{"ID": <int>, "Name": <string>}`
/// for compatibility with existing consumers. The `Default` value
/// (`{id: 0, name: ""}`) is what the service returns for by-id lookups while
/// the feature gate is closed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spaceship {
    /// Store-assigned primary key.
    #[serde(rename = "ID")]
    pub id: i64,

    /// Free-form display name.
    #[serde(rename = "Name")]
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_wire_field_names() {
        let ship = Spaceship {
            id: 1,
            name: "Enterprise".to_string(),
        };
        let json = serde_json::to_string(&ship).unwrap();
        assert_eq!(json, r#"{"ID":1,"Name":"Enterprise"}"#);
    }

    #[test]
    fn deserializes_from_wire_field_names() {
        let ship: Spaceship = serde_json::from_str(r#"{"ID":2,"Name":"Falcon"}"#).unwrap();
        assert_eq!(ship.id, 2);
        assert_eq!(ship.name, "Falcon");
    }

    #[test]
    fn default_is_the_zero_valued_record() {
        let ship = Spaceship::default();
        assert_eq!(ship.id, 0);
        assert_eq!(ship.name, "");
    }
}
