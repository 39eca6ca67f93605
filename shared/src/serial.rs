//! Ticket serial generation
//!
//! Serials are human-readable and sortable: `FG-YYYYMMDD-HHMMSS-XXXX`.
//! Date and time come from the local wall clock; the 4-char base-36
//! suffix adds 36^4 (~1.68M) combinations per second bucket, which is
//! collision-resistant at shop-floor batch sizes but not a cryptographic
//! uniqueness guarantee.

use rand::Rng;

/// "FG" for Finished Good
pub const DEFAULT_SERIAL_PREFIX: &str = "FG";

const BASE36: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const SUFFIX_LEN: usize = 4;

/// Generate a ticket serial: `PREFIX-YYYYMMDD-HHMMSS-XXXX`
///
/// Stateless: a function of the current local time plus randomness.
/// Called once per ticket, never reused.
pub fn generate_serial(prefix: &str) -> String {
    let now = chrono::Local::now();

    let mut rng = rand::thread_rng();
    let suffix: String = (0..SUFFIX_LEN)
        .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
        .collect();

    format!("{}-{}-{}-{}", prefix, now.format("%Y%m%d"), now.format("%H%M%S"), suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serial_shape() {
        let serial = generate_serial(DEFAULT_SERIAL_PREFIX);
        let fields: Vec<&str> = serial.split('-').collect();

        assert_eq!(fields.len(), 4);
        assert_eq!(fields[0], "FG");
        assert_eq!(fields[1].len(), 8);
        assert!(fields[1].chars().all(|c| c.is_ascii_digit()));
        assert_eq!(fields[2].len(), 6);
        assert!(fields[2].chars().all(|c| c.is_ascii_digit()));
        assert_eq!(fields[3].len(), 4);
        assert!(
            fields[3]
                .chars()
                .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase())
        );
    }

    #[test]
    fn test_custom_prefix() {
        let serial = generate_serial("WIP");
        assert!(serial.starts_with("WIP-"));
    }

    #[test]
    fn test_successive_serials_differ() {
        // Same second bucket, so distinctness rests on the random suffix.
        let batch: Vec<String> = (0..20).map(|_| generate_serial("FG")).collect();
        let mut unique = batch.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), batch.len());
    }
}
