// HitMapper - core/filter.rs
//
// Client-address filter applied to extracted records.
// Core layer: pure logic, no I/O.

use crate::core::model::AccessRecord;
use crate::util::constants;

/// Accepts records whose `ip` field contains a fixed address as a substring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IpFilter {
    target: &'static str,
}

impl IpFilter {
    pub const fn new(target: &'static str) -> Self {
        Self { target }
    }

    pub fn target(&self) -> &'static str {
        self.target
    }

    /// True if `ip` contains the target address anywhere.
    pub fn matches_ip(&self, ip: &str) -> bool {
        ip.contains(self.target)
    }

    pub fn matches(&self, record: &AccessRecord<'_>) -> bool {
        self.matches_ip(record.ip)
    }
}

impl Default for IpFilter {
    fn default() -> Self {
        Self::new(constants::TARGET_IP)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_targets_constant() {
        assert_eq!(IpFilter::default().target(), "10.99.99.186");
    }

    #[test]
    fn test_exact_match() {
        assert!(IpFilter::default().matches_ip("10.99.99.186"));
    }

    #[test]
    fn test_substring_match() {
        let filter = IpFilter::default();
        assert!(filter.matches_ip("10.99.99.1860"));
        assert!(filter.matches_ip("ip=10.99.99.186"));
    }

    #[test]
    fn test_non_match() {
        let filter = IpFilter::default();
        assert!(!filter.matches_ip("127.0.0.1"));
        assert!(!filter.matches_ip("10.99.99.18"));
        assert!(!filter.matches_ip(""));
    }
}
