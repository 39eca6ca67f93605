//! Seed catalog for offline fallback
//!
//! Fixed reference data returned when the backend is unreachable. Not
//! required to match remote data; it only has to satisfy the same type
//! contract so the rest of the pipeline keeps working.

use shared::models::{Part, Runner};

const PART_IMAGE_BASE: &str = "https://cdn.example.com/parts";
const AVATAR_BASE: &str = "https://cdn.example.com/avatars";

fn part(id: &str, name: &str, part_no: &str, model: &str, std_packing: u32) -> Part {
    Part {
        id: id.to_string(),
        name: name.to_string(),
        part_no: part_no.to_string(),
        model: model.to_string(),
        image_url: format!("{}/{}.jpg", PART_IMAGE_BASE, id),
        std_packing,
    }
}

/// Deterministic part catalog for offline operation
pub fn parts() -> Vec<Part> {
    vec![
        part("p1", "Gear Assembly", "GA-1042", "M-AX", 10),
        part("p2", "Control Panel", "CP-221B", "M-BRX", 5),
        part("p3", "Cooling Fan", "CF-7810", "M-ECO", 20),
        part("p4", "Sensor Module", "SM-500", "M-PRO", 15),
        part("p5", "Drive Belt", "DB-92", "M-AX", 25),
        part("p6", "Valve Body", "VB-300", "M-HYD", 8),
    ]
}

const RUNNER_NAMES: [&str; 24] = [
    "Aisyah", "Daniel", "Farid", "Mei Lin", "Prakash", "Rina", "Amir", "Sofia", "Kenji", "Hana",
    "Miguel", "Priya", "Omar", "Nurul", "Ivan", "Sara", "Jae", "Lila", "Yusuf", "Elena", "Chen",
    "Maya", "Arif", "Grace",
];

/// Deterministic runner roster for offline operation
pub fn runners() -> Vec<Runner> {
    RUNNER_NAMES
        .iter()
        .enumerate()
        .map(|(i, name)| Runner {
            id: format!("r{}", i + 1),
            name: name.to_string(),
            avatar_url: Some(format!("{}/r{}.jpg", AVATAR_BASE, i + 1)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_is_stable() {
        assert_eq!(parts(), parts());
        assert_eq!(runners(), runners());
    }

    #[test]
    fn test_catalog_ids_are_unique() {
        let parts = parts();
        assert_eq!(parts.len(), 6);
        let mut ids: Vec<&str> = parts.iter().map(|p| p.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 6);

        let runners = runners();
        assert_eq!(runners.len(), 24);
        assert_eq!(runners[0].name, "Aisyah");
        let mut ids: Vec<&str> = runners.iter().map(|r| r.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 24);
    }

    #[test]
    fn test_std_packing_is_positive() {
        assert!(parts().iter().all(|p| p.std_packing >= 1));
    }
}
