//! Archive INFO manifest types
//!
//! The INFO document is a JSON object mapping archive source directory names
//! to the list of services provisioned from that batch. All descriptor
//! fields are optional in the wire format; absent fields default to the
//! empty string / false.

use serde::{Deserialize, Serialize};

/// One archive entry: the services that receive this batch's certificate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchiveEntry {
    pub services: Vec<ServiceDescriptor>,
}

/// One destination for a certificate file set
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceDescriptor {
    /// Human-readable label, used for progress lines only
    #[serde(default)]
    pub display_name: String,

    /// Selects the package certificate root instead of the system root
    #[serde(rename = "isPkg", default)]
    pub is_pkg: bool,

    /// First path segment under the chosen root
    #[serde(default)]
    pub subscriber: String,

    /// Second path segment, the service's own certificate folder
    #[serde(default)]
    pub service: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_fields_take_documented_defaults() {
        let descriptor: ServiceDescriptor = serde_json::from_str("{}").unwrap();
        assert_eq!(descriptor.display_name, "");
        assert!(!descriptor.is_pkg);
        assert_eq!(descriptor.subscriber, "");
        assert_eq!(descriptor.service, "");
    }

    #[test]
    fn is_pkg_uses_wire_name() {
        let descriptor: ServiceDescriptor =
            serde_json::from_str(r#"{"isPkg": true, "service": "mail"}"#).unwrap();
        assert!(descriptor.is_pkg);
        assert_eq!(descriptor.service, "mail");
    }

    #[test]
    fn entry_requires_services_list() {
        let err = serde_json::from_str::<ArchiveEntry>(r#"{"other": []}"#);
        assert!(err.is_err());
    }
}
