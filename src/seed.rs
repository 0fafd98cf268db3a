//! Produce the 32-bit seeds that drive [`crate::mt::Mt19937`].
//!
//! A seed is either given explicitly with [`manual_seed`] or derived with
//! [`automatic_seed`], which asks the OS for true randomness and falls back to
//! [`fallback_seed`] when none is available.
use std::hash::{DefaultHasher, Hash, Hasher};
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use rand::{rngs::OsRng, RngCore};
use tracing::{debug, warn};

/// wall-clock seconds are reduced modulo this before being truncated to 32 bits
const SECONDS_MODULUS: u64 = 10_000_000_000;

static FALLBACK_CALLS: AtomicU32 = AtomicU32::new(0);

/// How a seed should be obtained.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Seeder {
    /// `{0}` is used as the seed, see [`manual_seed`].
    Manual(u32),
    /// The seed is drawn with [`automatic_seed`].
    Automatic,
}

impl Seeder {
    pub fn seed(&self) -> u32 {
        match self {
            Seeder::Manual(value) => manual_seed(*value),
            Seeder::Automatic => automatic_seed(),
        }
    }
}

/// Returns `value` as is.
pub fn manual_seed(value: u32) -> u32 {
    value
}

/// Draws a seed from the OS entropy source, e.g. `getrandom(2)` on Linux.
///
/// If the source cannot deliver any randomness, the seed is computed with
/// [`fallback_seed`] instead, so this function always returns.
pub fn automatic_seed() -> u32 {
    let mut bytes = [0u8; 4];
    match OsRng.try_fill_bytes(&mut bytes) {
        Ok(()) => {
            debug!("seeding from the OS entropy source");
            u32::from_le_bytes(bytes)
        }
        Err(e) => {
            warn!("OS entropy source unavailable ({}), using a fallback seed", e);
            fallback_seed()
        }
    }
}

fn hash32(value: impl Hash) -> u32 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    let h = hasher.finish();
    (h ^ (h >> 32)) as u32
}

/// Combines a few weakly random signals into a seed.
///
/// The signals are the wall clock, a monotonic clock reading, the process ID
/// and a process-wide call counter, all XOR-ed together.
///
/// > **Warning**
/// > the result is easy to predict and must not be used for anything related
/// > to security.
pub fn fallback_seed() -> u32 {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    let seconds = (now.as_secs() % SECONDS_MODULUS) as u32;
    let calls = FALLBACK_CALLS.fetch_add(1, Ordering::Relaxed);

    let seed = seconds
        ^ now.subsec_nanos()
        ^ hash32(Instant::now())
        ^ hash32(std::process::id())
        ^ hash32(calls);
    debug!("fallback seed #{}: {}", calls, seed);

    seed
}
