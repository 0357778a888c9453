//! SIP trunk records
//!
//! Trunks are plain in-memory records. Nothing here talks to a carrier.

use serde::{Deserialize, Serialize};

/// SIP transport protocol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Transport {
    #[default]
    Udp,
    Tcp,
    Tls,
}

impl Transport {
    pub const ALL: [Transport; 3] = [Transport::Udp, Transport::Tcp, Transport::Tls];

    pub fn default_port(&self) -> u16 {
        match self {
            Transport::Udp | Transport::Tcp => 5060,
            Transport::Tls => 5061,
        }
    }

    /// Label used in transport pickers, e.g. "TLS (port 5061)"
    pub fn option_label(&self) -> String {
        format!("{} (port {})", self, self.default_port())
    }

    pub fn color_class(&self) -> &str {
        match self {
            Transport::Tls => "bg-blue-100 text-blue-700 border border-blue-200",
            Transport::Tcp => "bg-gray-100 text-gray-600 border border-gray-200",
            Transport::Udp => "bg-orange-100 text-orange-700 border border-orange-200",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.to_uppercase().as_str() {
            "UDP" => Some(Transport::Udp),
            "TCP" => Some(Transport::Tcp),
            "TLS" => Some(Transport::Tls),
            _ => None,
        }
    }
}

impl std::fmt::Display for Transport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Transport::Udp => write!(f, "UDP"),
            Transport::Tcp => write!(f, "TCP"),
            Transport::Tls => write!(f, "TLS"),
        }
    }
}

/// How the carrier connects to the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrunkMode {
    /// Carrier registers with generated SIP credentials
    Registered,
    /// Carrier is identified by fixed IP / FQDN
    Static,
}

impl TrunkMode {
    pub fn display_name(&self) -> &str {
        match self {
            TrunkMode::Registered => "Registered",
            TrunkMode::Static => "Static IP / FQDN",
        }
    }

    pub fn badge_label(&self) -> &str {
        match self {
            TrunkMode::Registered => "Registered",
            TrunkMode::Static => "Static IP",
        }
    }

    pub fn color_class(&self) -> &str {
        match self {
            TrunkMode::Registered => "bg-td-purple-light text-td-purple border border-td-purple-border",
            TrunkMode::Static => "bg-blue-100 text-blue-700 border border-blue-200",
        }
    }
}

/// Lifecycle status. No code path transitions it after creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrunkStatus {
    #[default]
    Pending,
    Active,
    Suspended,
    Deleted,
}

impl TrunkStatus {
    pub fn display_name(&self) -> &str {
        match self {
            TrunkStatus::Pending => "Pending",
            TrunkStatus::Active => "Active",
            TrunkStatus::Suspended => "Suspended",
            TrunkStatus::Deleted => "Deleted",
        }
    }

    pub fn color_class(&self) -> &str {
        match self {
            TrunkStatus::Active => "bg-green-100 text-green-700 border border-green-200",
            TrunkStatus::Pending => "bg-yellow-100 text-yellow-700 border border-yellow-200",
            TrunkStatus::Suspended => "bg-red-100 text-red-700 border border-red-200",
            TrunkStatus::Deleted => "bg-gray-100 text-gray-600 border border-gray-200",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Trunk {
    pub id: String,
    pub name: String,
    /// Region id; matched against the catalog by string only
    pub region: String,
    pub mode: TrunkMode,
    pub transports: Vec<Transport>,
    #[serde(rename = "endpointCount")]
    pub endpoint_count: u32,
    pub status: TrunkStatus,
    /// OPTIONS keepalive
    pub options: bool,
    pub acl: Vec<String>,
}

impl Trunk {
    pub fn endpoint_label(&self) -> String {
        if self.endpoint_count == 1 {
            "1 endpoint".to_string()
        } else {
            format!("{} endpoints", self.endpoint_count)
        }
    }
}

/// Draft handed to the trunk store. The store assigns the id and ignores `status`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewTrunk {
    pub name: String,
    pub region: String,
    pub mode: TrunkMode,
    pub transports: Vec<Transport>,
    #[serde(rename = "endpointCount")]
    pub endpoint_count: u32,
    #[serde(default)]
    pub status: TrunkStatus,
    pub options: bool,
    pub acl: Vec<String>,
}

impl NewTrunk {
    pub fn into_trunk(self, id: String) -> Trunk {
        Trunk {
            id,
            name: self.name,
            region: self.region,
            mode: self.mode,
            transports: self.transports,
            endpoint_count: self.endpoint_count,
            status: TrunkStatus::Pending,
            options: self.options,
            acl: self.acl,
        }
    }
}

/// Trunks present when the console first loads
pub fn seed_trunks() -> Vec<Trunk> {
    vec![
        Trunk {
            id: "trunk-001".to_string(),
            name: "Carrier-Primary".to_string(),
            region: "eu2".to_string(),
            mode: TrunkMode::Static,
            transports: vec![Transport::Tls],
            endpoint_count: 2,
            status: TrunkStatus::Active,
            options: true,
            acl: vec!["185.60.10.0/24".to_string()],
        },
        Trunk {
            id: "trunk-002".to_string(),
            name: "Backup-US".to_string(),
            region: "us1".to_string(),
            mode: TrunkMode::Registered,
            transports: vec![Transport::Udp, Transport::Tcp],
            endpoint_count: 3,
            status: TrunkStatus::Active,
            options: false,
            acl: vec![],
        },
        Trunk {
            id: "trunk-003".to_string(),
            name: "APAC-Trunk".to_string(),
            region: "ap1".to_string(),
            mode: TrunkMode::Static,
            transports: vec![Transport::Tcp],
            endpoint_count: 1,
            status: TrunkStatus::Pending,
            options: true,
            acl: vec![],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_ports_and_labels() {
        assert_eq!(Transport::Udp.default_port(), 5060);
        assert_eq!(Transport::Tcp.default_port(), 5060);
        assert_eq!(Transport::Tls.default_port(), 5061);
        assert_eq!(Transport::Tls.option_label(), "TLS (port 5061)");
        assert_eq!(Transport::parse("tcp"), Some(Transport::Tcp));
        assert_eq!(Transport::parse("sctp"), None);
    }

    #[test]
    fn test_trunk_serializes_with_wire_names() {
        let trunk = seed_trunks().remove(1);
        let json = serde_json::to_value(&trunk).unwrap();

        assert_eq!(json["endpointCount"], 3);
        assert_eq!(json["mode"], "registered");
        assert_eq!(json["status"], "active");
        assert_eq!(json["transports"], serde_json::json!(["UDP", "TCP"]));
    }

    #[test]
    fn test_into_trunk_forces_pending() {
        let draft = NewTrunk {
            name: "X".to_string(),
            region: "us1".to_string(),
            mode: TrunkMode::Registered,
            transports: vec![Transport::Udp],
            endpoint_count: 1,
            status: TrunkStatus::Suspended,
            options: false,
            acl: vec![],
        };
        let trunk = draft.into_trunk("trunk-1".to_string());
        assert_eq!(trunk.status, TrunkStatus::Pending);
        assert_eq!(trunk.id, "trunk-1");
    }

    #[test]
    fn test_endpoint_label_pluralization() {
        let mut trunk = seed_trunks().remove(2);
        assert_eq!(trunk.endpoint_label(), "1 endpoint");
        trunk.endpoint_count = 4;
        assert_eq!(trunk.endpoint_label(), "4 endpoints");
    }
}
