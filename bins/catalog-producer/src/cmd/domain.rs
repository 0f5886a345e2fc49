use std::ops::Range;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use producer_api::{epoch_timestamp, PartitionedRecord};

// ═══════════════════════════════════════════════════════════════
//  Catalog
// ═══════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Item {
    pub name: &'static str,
    pub value: u32,
}

pub const CATALOG: [Item; 3] = [
    Item { name: "biscoito", value: 5 },
    Item { name: "leite", value: 30 },
    Item { name: "sorvete", value: 25 },
];

/// Simulated client ids, half-open.
pub const CLIENT_IDS: Range<u32> = 0..50;

// ═══════════════════════════════════════════════════════════════
//  Record
// ═══════════════════════════════════════════════════════════════

/// One simulated purchase. Field order is the wire key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseRecord {
    pub timestamp: String,
    #[serde(rename = "clientId")]
    pub client_id: u32,
    pub name: String,
    pub value: u32,
}

impl PartitionedRecord for PurchaseRecord {
    fn partition_key(&self) -> &str {
        &self.timestamp
    }
}

// ═══════════════════════════════════════════════════════════════
//  Sampler
// ═══════════════════════════════════════════════════════════════

pub struct Sampler {
    rng: StdRng,
}

impl Sampler {
    /// Deterministic when `seed` is set, otherwise seeded from the OS.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }

    pub fn sample_client(&mut self) -> u32 {
        self.rng.gen_range(CLIENT_IDS)
    }

    pub fn sample_item(&mut self) -> Item {
        CATALOG[self.rng.gen_range(0..CATALOG.len())]
    }

    /// Purchase stamped with the current wall-clock second.
    pub fn next_record(&mut self) -> PurchaseRecord {
        let client_id = self.sample_client();
        let item = self.sample_item();
        PurchaseRecord {
            timestamp: epoch_timestamp(),
            client_id,
            name: item.name.to_string(),
            value: item.value,
        }
    }
}
