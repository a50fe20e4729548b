//! The canonical list of blocks every tracer is sampled against.
//!
//! Each entry pairs a block number with a short slug naming the notable
//! transaction content of that block on the reference chain. Fixture
//! filenames embed an entry's position in this list, so the catalog is
//! append-only: reordering or deleting entries invalidates every
//! previously generated fixture tree.

/// One block to trace, with a slug describing why it is interesting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockEntry {
    /// Block number as a `0x`-prefixed hex quantity.
    pub id: &'static str,
    pub label: &'static str,
}

const BLOCKS: &[BlockEntry] = &[
    BlockEntry { id: "0x0", label: "genesis" },
    BlockEntry { id: "0x1", label: "empty" },
    BlockEntry { id: "0x2", label: "simple-transfer" },
    BlockEntry { id: "0x3", label: "self-destruct-contract" },
    BlockEntry { id: "0x4", label: "set-contract-storage" },
    BlockEntry { id: "0x5", label: "clear-storage" },
    BlockEntry { id: "0x6", label: "self-destruct-send-funds" },
    BlockEntry { id: "0x7", label: "increment-bytes" },
    BlockEntry { id: "0x8", label: "call-one-level-deep" },
    BlockEntry { id: "0x9", label: "call-multi-level-deep" },
    BlockEntry { id: "0xa", label: "callcode-one-level" },
    BlockEntry { id: "0xb", label: "delegate-call-one-level-deep" },
    BlockEntry { id: "0xc", label: "sequence-memory" },
    BlockEntry { id: "0xd", label: "MSTORE" },
    BlockEntry { id: "0xe", label: "increment-storage" },
    BlockEntry { id: "0xf", label: "logs" },
    BlockEntry { id: "0x10", label: "halts" },
    BlockEntry { id: "0x11", label: "push-swap" },
    BlockEntry { id: "0x12", label: "memory-read-revert" },
    BlockEntry { id: "0x13", label: "self-destruct" },
    BlockEntry { id: "0x14", label: "create-create2" },
    BlockEntry { id: "0x15", label: "set-and-clean-storage" },
    BlockEntry { id: "0x16", label: "set-and-clean-storage" },
    BlockEntry { id: "0x17", label: "static-call-one-level-deep" },
    BlockEntry { id: "0x18", label: "static-call-multiple-level-deeep" },
    BlockEntry { id: "0x19", label: "erc20-contract-transfer" },
    BlockEntry { id: "0x1a", label: "call-one-level-gas-refund" },
    BlockEntry { id: "0x1b", label: "self-destruct-send-self" },
    BlockEntry { id: "0x1c", label: "self-destruct-sender" },
    BlockEntry { id: "0x1d", label: "stack-underflow" },
    BlockEntry { id: "0x1e", label: "0g0v0_Istanbul" },
    BlockEntry { id: "0x1f", label: "precompile" },
    BlockEntry { id: "0x20", label: "contract-creation-fails-level-1" },
    BlockEntry { id: "0x21", label: "stack-underflow" },
    BlockEntry { id: "0x22", label: "failed-create-operations" },
];

/// The catalog, in generation order. The same sequence is returned on
/// every call.
pub fn entries() -> &'static [BlockEntry] {
    BLOCKS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinals_are_stable() {
        let entries = entries();
        assert_eq!(entries.len(), 35);
        assert_eq!(entries[0], BlockEntry { id: "0x0", label: "genesis" });
        assert_eq!(entries[19], BlockEntry { id: "0x13", label: "self-destruct" });
        assert_eq!(
            entries[34],
            BlockEntry { id: "0x22", label: "failed-create-operations" }
        );
    }

    #[test]
    fn ids_are_hex_quantities() {
        for entry in entries() {
            let digits = entry.id.strip_prefix("0x").expect("missing 0x prefix");
            assert!(
                u64::from_str_radix(digits, 16).is_ok(),
                "unparseable block id {}",
                entry.id
            );
        }
    }
}
