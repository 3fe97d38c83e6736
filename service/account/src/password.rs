//! Stretched blake3 password hashes stored as `<rounds>$<salt hex>$<hash hex>`.
use rand::Rng;

const KEY_CONTEXT: &str = "service-desk 2024-03-01 password hash";
/// Keyed blake3 rounds applied on top of the salted derivation.
const ROUNDS: u32 = 50_000;
const MAX_ROUNDS: u32 = 10_000_000;

pub fn hash_password(password: &str) -> String {
    let salt: [u8; 16] = rand::thread_rng().gen();
    let salt = salt.iter().map(|b| format!("{b:02x}")).collect::<String>();
    let hash = stretched_hash(&salt, password, ROUNDS);
    format!("{ROUNDS}${salt}${}", hash.to_hex())
}

pub fn verify_password(password: &str, stored: &str) -> bool {
    let mut parts = stored.splitn(3, '$');
    let (Some(rounds), Some(salt), Some(hash)) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    let Some(rounds) = rounds
        .parse::<u32>()
        .ok()
        .filter(|rounds| (1..=MAX_ROUNDS).contains(rounds))
    else {
        return false;
    };
    let Ok(expected) = blake3::Hash::from_hex(hash) else {
        return false;
    };
    // `Hash` equality is constant time
    stretched_hash(salt, password, rounds) == expected
}

fn stretched_hash(salt: &str, password: &str, rounds: u32) -> blake3::Hash {
    let mut material = Vec::with_capacity(salt.len() + password.len());
    material.extend_from_slice(salt.as_bytes());
    material.extend_from_slice(password.as_bytes());
    let key = blake3::derive_key(KEY_CONTEXT, &material);
    let mut hash = blake3::keyed_hash(&key, password.as_bytes());
    for _ in 1..rounds {
        hash = blake3::keyed_hash(&key, hash.as_bytes());
    }
    hash
}
