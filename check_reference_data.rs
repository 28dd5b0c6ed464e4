use scamguard::normalization::normalize_name;
use scamguard::{ReferenceData, Settings};
use std::collections::HashMap;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let data_dir = std::env::args().nth(1).unwrap_or_else(|| "data".to_string());
    let config_path = std::env::args()
        .nth(2)
        .unwrap_or_else(|| Settings::default_path().to_string());

    println!("🧪 Checking reference data in {}", data_dir);

    let settings = Settings::load_or_default(&config_path)?;
    println!("✅ Settings loaded from {}", config_path);
    println!("   Enabled: {}", settings.enabled);
    println!("   Block high risk: {}", settings.block_high_risk);
    println!("   Sensitivity: {}", settings.sensitivity);

    let data = ReferenceData::load_from_dir(&data_dir);
    println!("✅ Reference data loaded");
    println!("   Blacklisted domains: {}", data.blacklisted_domains().len());
    println!("   Official identities: {}", data.official_identities().len());
    println!("   Scam phrases: {}", data.scam_phrases().len());

    // Two identities sharing a normalized name make exact matching order-dependent
    let mut owners: HashMap<String, &str> = HashMap::new();
    let mut collisions = 0;
    for identity in data.official_identities() {
        for name in identity.all_names() {
            let normalized = normalize_name(name);
            if normalized.is_empty() {
                println!("⚠️  '{}' ({}) normalizes to nothing", name, identity.canonical_name);
                continue;
            }
            if let Some(owner) = owners.get(&normalized).copied() {
                if owner != identity.canonical_name {
                    println!(
                        "⚠️  '{}' collides with an identity of {} after normalization",
                        name, owner
                    );
                    collisions += 1;
                }
            } else {
                owners.insert(normalized, identity.canonical_name.as_str());
            }
        }
    }

    if collisions == 0 {
        println!("✅ No normalized name collisions");
    }

    Ok(())
}
