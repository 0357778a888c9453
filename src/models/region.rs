//! Region catalog
//!
//! Static reference data describing where trunks terminate. Immutable for the
//! lifetime of the process.

use serde::Serialize;

/// DNS SRV entry advertised for a region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SrvRecord {
    /// Service/protocol label, e.g. "_sip._udp"
    pub proto: &'static str,
    pub host: &'static str,
    pub target: &'static str,
    pub port: u16,
}

impl SrvRecord {
    pub fn name(&self) -> String {
        format!("{}.{}", self.proto, self.host)
    }

    pub fn target_addr(&self) -> String {
        format!("{}:{}", self.target, self.port)
    }

    pub fn display(&self) -> String {
        format!("{}  \u{2192}  {}", self.name(), self.target_addr())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Region {
    pub id: &'static str,
    pub label: &'static str,
    pub short_label: &'static str,
    pub flag: &'static str,
    pub srv: &'static [SrvRecord],
    pub media_ips: &'static [&'static str],
    pub rtp_ports: &'static str,
    /// Host carriers register against in registered mode
    pub sbc_host: &'static str,
}

impl Region {
    /// All SRV records, one per line, as copied from the region card
    pub fn srv_summary(&self) -> String {
        self.srv
            .iter()
            .map(SrvRecord::display)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

macro_rules! srv_set {
    ($id:literal) => {
        &[
            SrvRecord {
                proto: "_sip._udp",
                host: concat!($id, ".sip.talkdesk.com"),
                target: concat!("sbc-", $id, "-01.sip.talkdesk.com"),
                port: 5060,
            },
            SrvRecord {
                proto: "_sip._tcp",
                host: concat!($id, ".sip.talkdesk.com"),
                target: concat!("sbc-", $id, "-01.sip.talkdesk.com"),
                port: 5060,
            },
            SrvRecord {
                proto: "_sips._tcp",
                host: concat!($id, ".sip.talkdesk.com"),
                target: concat!("sbc-", $id, "-01.sip.talkdesk.com"),
                port: 5061,
            },
        ]
    };
}

pub static REGIONS: &[Region] = &[
    Region {
        id: "eu2",
        label: "eu2 \u{2014} Europe (Frankfurt)",
        short_label: "Europe",
        flag: "\u{1F1E9}\u{1F1EA}",
        srv: srv_set!("eu2"),
        media_ips: &["185.20.144.0/24", "185.20.145.0/24"],
        rtp_ports: "10000\u{2013}20000",
        sbc_host: "sbc-eu2-01.sip.talkdesk.com",
    },
    Region {
        id: "us1",
        label: "us1 \u{2014} United States (N. Virginia)",
        short_label: "United States",
        flag: "\u{1F1FA}\u{1F1F8}",
        srv: srv_set!("us1"),
        media_ips: &["34.192.0.0/24", "34.193.0.0/24"],
        rtp_ports: "10000\u{2013}20000",
        sbc_host: "sbc-us1-01.sip.talkdesk.com",
    },
    Region {
        id: "sa1",
        label: "sa1 \u{2014} South America (S\u{e3}o Paulo)",
        short_label: "South America",
        flag: "\u{1F1E7}\u{1F1F7}",
        srv: srv_set!("sa1"),
        media_ips: &["177.71.144.0/24", "177.71.145.0/24"],
        rtp_ports: "10000\u{2013}20000",
        sbc_host: "sbc-sa1-01.sip.talkdesk.com",
    },
    Region {
        id: "ap1",
        label: "ap1 \u{2014} Asia Pacific (Singapore)",
        short_label: "Asia Pacific",
        flag: "\u{1F1F8}\u{1F1EC}",
        srv: srv_set!("ap1"),
        media_ips: &["13.228.0.0/24", "13.229.0.0/24"],
        rtp_ports: "10000\u{2013}20000",
        sbc_host: "sbc-ap1-01.sip.talkdesk.com",
    },
];

/// Every region in display order
pub fn all_regions() -> &'static [Region] {
    REGIONS
}

pub fn find_region(id: &str) -> Option<&'static Region> {
    REGIONS.iter().find(|r| r.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_region() {
        let region = find_region("sa1").unwrap();
        assert_eq!(region.short_label, "South America");
        assert_eq!(region.sbc_host, "sbc-sa1-01.sip.talkdesk.com");

        assert!(find_region("xx9").is_none());
        assert!(find_region("").is_none());
    }

    #[test]
    fn test_catalog_order() {
        let ids: Vec<&str> = all_regions().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["eu2", "us1", "sa1", "ap1"]);
    }

    #[test]
    fn test_srv_summary_format() {
        let region = find_region("eu2").unwrap();
        let summary = region.srv_summary();
        let lines: Vec<&str> = summary.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "_sip._udp.eu2.sip.talkdesk.com  \u{2192}  sbc-eu2-01.sip.talkdesk.com:5060"
        );
        assert!(lines[2].starts_with("_sips._tcp."));
        assert!(lines[2].ends_with(":5061"));
    }
}
