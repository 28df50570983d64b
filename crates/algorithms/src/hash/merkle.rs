//! Merkle root over 32-byte hashes
//!
//! Used for aggregate hashes: each level pairs adjacent nodes and hashes them
//! with the schema's short hash. An odd node at the end of a level is paired
//! with itself.

use nemcrypt_api::constants::SHORT_HASH_SIZE;

use super::sign_schema::SignSchema;

/// Accumulates leaf hashes and computes their Merkle root
#[derive(Debug, Clone)]
pub struct MerkleHashBuilder {
    schema: SignSchema,
    hashes: Vec<[u8; SHORT_HASH_SIZE]>,
}

impl MerkleHashBuilder {
    pub fn new(schema: SignSchema) -> Self {
        Self {
            schema,
            hashes: Vec::new(),
        }
    }

    /// Append one leaf
    pub fn update(&mut self, component: [u8; SHORT_HASH_SIZE]) -> &mut Self {
        self.hashes.push(component);
        self
    }

    pub fn len(&self) -> usize {
        self.hashes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hashes.is_empty()
    }

    /// The root hash
    ///
    /// Zero leaves give 32 zero bytes; a single leaf is its own root.
    pub fn root_hash(&self) -> [u8; SHORT_HASH_SIZE] {
        if self.hashes.is_empty() {
            return [0u8; SHORT_HASH_SIZE];
        }

        let mut level = self.hashes.clone();
        while level.len() > 1 {
            level = level
                .chunks(2)
                .map(|pair| {
                    let left = &pair[0];
                    let right = pair.get(1).unwrap_or(left);
                    self.schema.hash_short(&[left, right])
                })
                .collect();
        }

        level[0]
    }
}
