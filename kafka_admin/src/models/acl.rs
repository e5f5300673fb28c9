use serde::Serialize;
use serde_json::{json, Value};

/// Matches every value of an enum-like ACL field.
pub const ANY: &str = "any";

/// ACL filter for listing and deleting, and the binding to create.
///
/// `resource_type`, `pattern_type`, `operation` and `permission` default to
/// [`ANY`]. Unset optional fields are not sent at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AclRequest {
    pub resource_type: String,
    pub resource_name: Option<String>,
    pub pattern_type: String,
    pub principal: Option<String>,
    pub host: Option<String>,
    pub operation: String,
    pub permission: String,
}

impl Default for AclRequest {
    fn default() -> Self {
        Self {
            resource_type: ANY.to_owned(),
            resource_name: None,
            pattern_type: ANY.to_owned(),
            principal: None,
            host: None,
            operation: ANY.to_owned(),
            permission: ANY.to_owned(),
        }
    }
}

impl AclRequest {
    /// The proxy only accepts uppercase enum tokens on write paths.
    pub fn uppercased(&self) -> Self {
        Self {
            resource_type: self.resource_type.to_uppercase(),
            pattern_type: self.pattern_type.to_uppercase(),
            operation: self.operation.to_uppercase(),
            permission: self.permission.to_uppercase(),
            ..self.clone()
        }
    }

    pub(crate) fn to_query(&self) -> Vec<(String, String)> {
        let mut query = vec![
            ("resource_type".to_owned(), self.resource_type.clone()),
            ("pattern_type".to_owned(), self.pattern_type.clone()),
            ("operation".to_owned(), self.operation.clone()),
            ("permission".to_owned(), self.permission.clone()),
        ];
        let optional = [
            ("resource_name", &self.resource_name),
            ("principal", &self.principal),
            ("host", &self.host),
        ];
        for (name, value) in optional {
            if let Some(value) = value {
                query.push((name.to_owned(), value.clone()));
            }
        }
        query
    }

    pub(crate) fn to_body(&self) -> Value {
        let mut body = json!({
            "resource_type": self.resource_type,
            "pattern_type": self.pattern_type,
            "operation": self.operation,
            "permission": self.permission,
        });
        let optional = [
            ("resource_name", &self.resource_name),
            ("principal", &self.principal),
            ("host", &self.host),
        ];
        for (name, value) in optional {
            if let Some(value) = value {
                body[name] = Value::String(value.clone());
            }
        }
        body
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AclEntry {
    pub resource_type: String,
    pub resource_name: String,
    pub pattern_type: String,
    pub principal: String,
    pub host: String,
    pub operation: String,
    pub permission: String,
}
