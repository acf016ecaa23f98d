use std::collections::HashMap;

use slotmap::{DefaultKey, SlotMap};

use super::HandleKind;
use crate::error::{BridgeError, Result};

/// Encodes a handle as the integer passed across the host boundary.
#[inline]
pub fn to_host_id<K: HandleKind>(handle: K) -> u64 {
    handle.serial()
}

/// Decodes a host integer. Any value is accepted; ids no table issued simply
/// fail to resolve.
#[inline]
pub fn from_host_id<K: HandleKind>(id: u64) -> K {
    K::from_serial(id)
}

/// Arena mapping handles of kind `K` to objects.
///
/// Objects live in a dense slot map whose freed slots are reused. Handles are
/// serial numbers kept apart from slots, so reuse never shows through them.
///
/// Invariants:
/// - every issued handle is greater than all handles issued before it
/// - a handle is issued once; after `remove` it never resolves again
#[derive(Debug)]
pub struct HandleTable<K: HandleKind, V> {
    slots: SlotMap<DefaultKey, (K, V)>,
    index: HashMap<K, DefaultKey>,
    next_serial: u64,
}

impl<K: HandleKind, V> Default for HandleTable<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: HandleKind, V> HandleTable<K, V> {
    pub fn new() -> Self {
        Self {
            slots: SlotMap::new(),
            index: HashMap::new(),
            next_serial: 1,
        }
    }

    /// Stores `object` under a fresh handle.
    pub fn insert(&mut self, object: V) -> K {
        let handle = K::from_serial(self.next_serial);
        self.next_serial += 1;

        let slot = self.slots.insert((handle, object));
        self.index.insert(handle, slot);
        log::trace!("{} handle {} created", K::KIND, to_host_id(handle));
        handle
    }

    /// Returns the object, or `None` if the handle is unknown or removed.
    #[inline]
    pub fn get(&self, handle: K) -> Option<&V> {
        let slot = self.index.get(&handle)?;
        self.slots.get(*slot).map(|(_, object)| object)
    }

    /// Checked lookup used by bridge operations.
    pub fn resolve(&self, handle: K) -> Result<&V> {
        self.get(handle).ok_or_else(|| {
            log::warn!("{} handle {} does not resolve", K::KIND, to_host_id(handle));
            BridgeError::StaleHandle {
                kind: K::KIND,
                host_id: to_host_id(handle),
            }
        })
    }

    /// Clears the slot and returns the object it held.
    pub fn remove(&mut self, handle: K) -> Option<V> {
        let slot = self.index.remove(&handle)?;
        let (_, object) = self.slots.remove(slot)?;
        log::trace!("{} handle {} removed", K::KIND, to_host_id(handle));
        Some(object)
    }

    #[inline]
    pub fn contains(&self, handle: K) -> bool {
        self.index.contains_key(&handle)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Removes every entry, yielding the objects so they can be released.
    /// Serials keep counting from where they were.
    pub fn drain(&mut self) -> impl Iterator<Item = (K, V)> + '_ {
        self.index.clear();
        self.slots.drain().map(|(_, entry)| entry)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::handle::{BufferHandle, ProgramHandle};

    #[test]
    fn fresh_handles_are_strictly_increasing() {
        let mut table: HandleTable<ProgramHandle, &str> = HandleTable::new();
        let ids: Vec<u64> = (0..64).map(|_| to_host_id(table.insert("p"))).collect();
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn handles_keep_increasing_after_slot_reuse() {
        let mut table: HandleTable<BufferHandle, char> = HandleTable::new();
        let a = table.insert('a');
        let b = table.insert('b');
        table.remove(a);
        let c = table.insert('c');
        let d = table.insert('d');

        let ids = [a, b, c, d].map(to_host_id);
        assert!(ids.windows(2).all(|w| w[0] < w[1]), "ids: {ids:?}");
        assert_eq!(table.get(c), Some(&'c'));
        assert_eq!(table.get(d), Some(&'d'));
    }

    #[test]
    fn handles_stay_unique_across_slot_reuse() {
        let mut table: HandleTable<BufferHandle, u32> = HandleTable::new();
        let mut seen = HashSet::new();
        for round in 0..16 {
            let a = table.insert(round);
            let b = table.insert(round + 100);
            assert!(seen.insert(to_host_id(a)));
            assert!(seen.insert(to_host_id(b)));
            table.remove(a);
        }
    }

    #[test]
    fn get_after_remove_returns_nothing() {
        let mut table: HandleTable<BufferHandle, u32> = HandleTable::new();
        let h = table.insert(7);
        assert_eq!(table.get(h), Some(&7));
        assert_eq!(table.remove(h), Some(7));
        assert_eq!(table.get(h), None);
        assert_eq!(table.remove(h), None);
    }

    #[test]
    fn stale_handle_is_not_remapped_to_new_occupant() {
        let mut table: HandleTable<BufferHandle, u32> = HandleTable::new();
        let old = table.insert(1);
        table.remove(old);
        let new = table.insert(2);
        assert_ne!(old, new);
        assert_eq!(table.get(old), None);
        assert_eq!(table.get(new), Some(&2));
    }

    #[test]
    fn unissued_ids_never_resolve() {
        let mut table: HandleTable<BufferHandle, u32> = HandleTable::new();
        let issued = to_host_id(table.insert(2));

        for id in [issued + 1, issued + (1 << 32), issued | (1 << 32), u64::MAX] {
            assert_eq!(table.get(from_host_id::<BufferHandle>(id)), None, "id {id:#x}");
        }
        assert_eq!(table.get(from_host_id(issued)), Some(&2));
    }

    #[test]
    fn resolve_reports_kind_and_id() {
        let mut table: HandleTable<ProgramHandle, u32> = HandleTable::new();
        let h = table.insert(3);
        table.remove(h);
        match table.resolve(h) {
            Err(BridgeError::StaleHandle { kind, host_id }) => {
                assert_eq!(kind, "program");
                assert_eq!(host_id, to_host_id(h));
            }
            other => panic!("expected stale handle, got {other:?}"),
        }
    }

    #[test]
    fn host_ids_round_trip() {
        let mut table: HandleTable<BufferHandle, u32> = HandleTable::new();
        let h = table.insert(9);
        let back: BufferHandle = from_host_id(to_host_id(h));
        assert_eq!(table.get(back), Some(&9));
    }

    #[test]
    fn host_id_zero_never_resolves() {
        let mut table: HandleTable<BufferHandle, u32> = HandleTable::new();
        table.insert(1);
        assert!(table.get(from_host_id(0)).is_none());
        assert_ne!(to_host_id(table.insert(2)), 0);
    }

    #[test]
    fn drain_empties_table() {
        let mut table: HandleTable<BufferHandle, u32> = HandleTable::new();
        let first = table.insert(1);
        table.insert(2);
        let drained: Vec<u32> = table.drain().map(|(_, v)| v).collect();
        assert_eq!(drained.len(), 2);
        assert!(table.is_empty());
        assert!(!table.contains(first));
        assert!(to_host_id(table.insert(3)) > 2);
    }
}
