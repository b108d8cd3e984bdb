//! Prefix key normalization and candidate-key derivation
//!
//! The Wireshark manufacturer registry records vendor blocks at three
//! granularities: classic 24-bit OUIs (`FC:D2:B6`), and finer 28- or
//! 36-bit blocks written with a CIDR-style suffix (`FC:D2:B6:00/28`).
//! Both are collapsed into a single string-key shape - complete octets
//! plus at most one trailing hex digit standing for a 4-bit partial
//! octet - so that lookups are plain exact map probes instead of bit
//! masking. The trade-off is that only the 28- and 36-bit sub-octet
//! granularities are representable; anything else passes through as the
//! bare address and will only ever match exactly.

/// Normalize a registry prefix specifier into a lookup key.
///
/// A specifier without a `/` suffix is already a full-octet key and is
/// used as-is. `/28` keeps the first three octets and appends the first
/// hex digit of octet four; `/36` keeps the first four octets and
/// appends the first hex digit of octet five:
///
/// ```text
/// FC:D2:B6:00/28    -> FC:D2:B6:0
/// 8C:1F:64:DC:70/36 -> 8C:1F:64:DC:7
/// ```
///
/// Keys are ASCII-uppercased. Unknown bit counts fall back to the
/// address portion unchanged - a known limitation inherited from the
/// registry's two sub-octet granularities. A specifier too short to
/// carry its partial octet falls back the same way rather than aborting
/// the scan.
pub(crate) fn normalize(spec: &str) -> String {
    let Some((addr, bits)) = spec.split_once('/') else {
        return spec.to_ascii_uppercase();
    };

    let octets: Vec<&str> = addr.split(':').collect();
    let keep = match bits {
        "28" => 3,
        "36" => 4,
        _ => return addr.to_ascii_uppercase(),
    };

    match partial_key(&octets, keep) {
        Some(key) => key.to_ascii_uppercase(),
        None => addr.to_ascii_uppercase(),
    }
}

/// Candidate lookup keys for a queried address, most specific first.
///
/// The address is uppercased, split on `:`, and empty segments are
/// dropped (tolerating a trailing colon). Each segment-count tier probes
/// from the longest representable prefix down:
///
/// - 5+ segments: 36-bit, then 28-bit, then 24-bit key
/// - 4 segments: 28-bit, then 24-bit key
/// - 3 segments: 24-bit key only
/// - fewer: no candidates
pub(crate) fn candidate_keys(addr: &str) -> Vec<String> {
    let addr = addr.to_ascii_uppercase();
    let segments: Vec<&str> = addr.split(':').filter(|s| !s.is_empty()).collect();

    let mut keys = Vec::with_capacity(3);
    if segments.len() >= 5 {
        keys.extend(partial_key(&segments, 4));
    }
    if segments.len() >= 4 {
        keys.extend(partial_key(&segments, 3));
    }
    if segments.len() >= 3 {
        keys.push(segments[..3].join(":"));
    }
    keys
}

/// Build the partial-octet key `seg[0]:..:seg[n-1]:d` where `d` is the
/// leading hex digit of `seg[n]`. None when `seg[n]` is missing or empty.
fn partial_key(segments: &[&str], n: usize) -> Option<String> {
    let nibble = segments.get(n)?.chars().next()?;
    let mut key = segments[..n].join(":");
    key.push(':');
    key.push(nibble);
    Some(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_octet_specifier_is_unchanged() {
        assert_eq!(normalize("00:00:00"), "00:00:00");
        assert_eq!(normalize("8C:1F:64:DC"), "8C:1F:64:DC");
    }

    #[test]
    fn normalize_is_idempotent() {
        let once = normalize("FC:D2:B6:00/28");
        assert_eq!(normalize(&once), once);
        let once = normalize("00:00:00");
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn bits_28_keeps_three_octets_and_a_nibble() {
        assert_eq!(normalize("FC:D2:B6:00/28"), "FC:D2:B6:0");
        assert_eq!(normalize("FC:D2:B6:A0/28"), "FC:D2:B6:A");
    }

    #[test]
    fn bits_36_keeps_four_octets_and_a_nibble() {
        assert_eq!(normalize("8C:1F:64:DC:70/36"), "8C:1F:64:DC:7");
    }

    #[test]
    fn keys_are_uppercased() {
        assert_eq!(normalize("fc:d2:b6:a0/28"), "FC:D2:B6:A");
        assert_eq!(normalize("ab:cd:ef"), "AB:CD:EF");
    }

    #[test]
    fn unknown_bit_count_passes_the_address_through() {
        assert_eq!(normalize("AA:BB:CC:DD/30"), "AA:BB:CC:DD");
        assert_eq!(normalize("AA:BB:CC:DD:EE:FF/40"), "AA:BB:CC:DD:EE:FF");
    }

    #[test]
    fn short_specifier_falls_back_instead_of_panicking() {
        assert_eq!(normalize("AA:BB:CC/28"), "AA:BB:CC");
        assert_eq!(normalize("AA:BB:CC:/28"), "AA:BB:CC:");
        assert_eq!(normalize("AA:BB:CC:DD/36"), "AA:BB:CC:DD");
    }

    #[test]
    fn five_segments_probe_all_three_tiers() {
        let keys = candidate_keys("8C:1F:64:DC:71:22");
        assert_eq!(
            keys,
            vec!["8C:1F:64:DC:7", "8C:1F:64:D", "8C:1F:64"]
        );
    }

    #[test]
    fn four_segments_probe_two_tiers() {
        let keys = candidate_keys("FC:D2:B6:20");
        assert_eq!(keys, vec!["FC:D2:B6:2", "FC:D2:B6"]);
    }

    #[test]
    fn three_segments_probe_the_oui_only() {
        assert_eq!(candidate_keys("00:00:00"), vec!["00:00:00"]);
    }

    #[test]
    fn short_addresses_have_no_candidates() {
        assert!(candidate_keys("AA:BB").is_empty());
        assert!(candidate_keys("AA").is_empty());
        assert!(candidate_keys("").is_empty());
    }

    #[test]
    fn trailing_colon_is_tolerated() {
        assert_eq!(candidate_keys("AA:BB:CC:"), vec!["AA:BB:CC"]);
    }

    #[test]
    fn query_segments_are_uppercased() {
        let keys = candidate_keys("fc:d2:b6:20:11:22");
        assert_eq!(keys, vec!["FC:D2:B6:20:1", "FC:D2:B6:2", "FC:D2:B6"]);
    }
}
