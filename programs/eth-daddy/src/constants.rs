pub const SEED_REGISTRY: &[u8] = b"registry";
pub const SEED_DOMAIN: &[u8] = b"domain";
