//! Fake SIP credentials for registered-mode trunks
//!
//! Cosmetic only. The generator is seedable so tests get reproducible output.

use std::collections::HashSet;

use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::Serialize;

const PASSWORD_CHARSET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const PASSWORD_LEN: usize = 16;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Credential {
    /// 1-based endpoint number
    pub id: u32,
    pub username: String,
    pub password: String,
}

impl Credential {
    /// "username:password", as copied from a credential row
    pub fn pair(&self) -> String {
        format!("{}:{}", self.username, self.password)
    }
}

#[derive(Debug, Clone)]
pub struct CredentialGenerator {
    rng: StdRng,
}

impl CredentialGenerator {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seed from the wall clock. Good enough for placeholder credentials.
    pub fn from_clock() -> Self {
        let now = chrono::Utc::now();
        let seed = now
            .timestamp_nanos_opt()
            .unwrap_or_else(|| now.timestamp_millis()) as u64;
        Self::seeded(seed)
    }

    /// Produce `count` credentials with distinct usernames for `region`.
    pub fn generate(&mut self, region: &str, count: usize) -> Vec<Credential> {
        let mut seen = HashSet::with_capacity(count);
        let mut credentials = Vec::with_capacity(count);

        for i in 0..count {
            let username = loop {
                let candidate = format!("tdtrunk-{}-{:06x}", region, self.rng.gen_range(0..0x100_0000u32));
                if seen.insert(candidate.clone()) {
                    break candidate;
                }
            };

            credentials.push(Credential {
                id: i as u32 + 1,
                username,
                password: self.password(),
            });
        }

        credentials
    }

    fn password(&mut self) -> String {
        (0..PASSWORD_LEN)
            .map(|_| PASSWORD_CHARSET[self.rng.gen_range(0..PASSWORD_CHARSET.len())] as char)
            .collect()
    }
}

/// CSV export with an `Endpoint,Username,Password` header
pub fn credentials_csv(credentials: &[Credential]) -> String {
    std::iter::once("Endpoint,Username,Password".to_string())
        .chain(
            credentials
                .iter()
                .map(|c| format!("{},{},{}", c.id, c.username, c.password)),
        )
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_output() {
        let a = CredentialGenerator::seeded(42).generate("eu2", 5);
        let b = CredentialGenerator::seeded(42).generate("eu2", 5);
        assert_eq!(a, b);

        let c = CredentialGenerator::seeded(43).generate("eu2", 5);
        assert_ne!(a, c);
    }

    #[test]
    fn test_generate_shape() {
        let creds = CredentialGenerator::seeded(7).generate("us1", 20);
        assert_eq!(creds.len(), 20);

        let usernames: HashSet<&str> = creds.iter().map(|c| c.username.as_str()).collect();
        assert_eq!(usernames.len(), 20);

        for (i, cred) in creds.iter().enumerate() {
            assert_eq!(cred.id, i as u32 + 1);
            let suffix = cred.username.strip_prefix("tdtrunk-us1-").unwrap();
            assert_eq!(suffix.len(), 6);
            assert!(suffix.chars().all(|c| c.is_ascii_hexdigit()));
            assert_eq!(cred.password.len(), 16);
            assert!(cred
                .password
                .chars()
                .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
        }
    }

    #[test]
    fn test_generate_zero() {
        assert!(CredentialGenerator::seeded(1).generate("ap1", 0).is_empty());
    }

    #[test]
    fn test_credentials_csv() {
        let creds = vec![
            Credential { id: 1, username: "tdtrunk-eu2-aaaaaa".into(), password: "p1".into() },
            Credential { id: 2, username: "tdtrunk-eu2-bbbbbb".into(), password: "p2".into() },
        ];
        assert_eq!(
            credentials_csv(&creds),
            "Endpoint,Username,Password\n1,tdtrunk-eu2-aaaaaa,p1\n2,tdtrunk-eu2-bbbbbb,p2"
        );
        assert_eq!(credentials_csv(&[]), "Endpoint,Username,Password");
        assert_eq!(creds[0].pair(), "tdtrunk-eu2-aaaaaa:p1");
    }

    #[test]
    fn test_clock_seeded_generator() {
        let creds = CredentialGenerator::from_clock().generate("ap1", 3);
        let ids: Vec<u32> = creds.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert!(creds.iter().all(|c| c.username.starts_with("tdtrunk-ap1-")));
    }
}
