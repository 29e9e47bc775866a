//! Slot arena with a free list and per-slot generations.
//!
//! Both lists store their nodes here and link them by slot index. Freed slots
//! are threaded onto a free list and reused; each reuse bumps the slot's
//! generation so a handle taken before the free no longer resolves.

#[derive(Debug, Clone)]
enum Entry<N> {
    Occupied(N),
    Free { next_free: Option<usize> },
}

#[derive(Debug, Clone)]
struct Slot<N> {
    generation: u32,
    entry: Entry<N>,
}

#[derive(Debug, Clone)]
pub(crate) struct Arena<N> {
    slots: Vec<Slot<N>>,
    free_head: Option<usize>,
    len: usize,
}

impl<N> Arena<N> {
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_head: None,
            len: 0,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Stores `node`, reusing a free slot when one exists.
    ///
    /// Returns the slot index and its current generation.
    pub(crate) fn insert(&mut self, node: N) -> (usize, u32) {
        self.len += 1;
        if let Some(index) = self.free_head {
            let slot = &mut self.slots[index];
            if let Entry::Free { next_free } = slot.entry {
                self.free_head = next_free;
            }
            slot.entry = Entry::Occupied(node);
            return (index, slot.generation);
        }

        let index = self.slots.len();
        self.slots.push(Slot {
            generation: 0,
            entry: Entry::Occupied(node),
        });
        (index, 0)
    }

    /// Frees the slot at `index`, returning its node.
    pub(crate) fn remove(&mut self, index: usize) -> Option<N> {
        let slot = self.slots.get_mut(index)?;
        if !matches!(slot.entry, Entry::Occupied(_)) {
            return None;
        }
        let entry = core::mem::replace(
            &mut slot.entry,
            Entry::Free {
                next_free: self.free_head,
            },
        );
        slot.generation = slot.generation.wrapping_add(1);
        self.free_head = Some(index);
        self.len -= 1;
        match entry {
            Entry::Occupied(node) => Some(node),
            Entry::Free { .. } => None,
        }
    }

    pub(crate) fn get(&self, index: usize) -> Option<&N> {
        match &self.slots.get(index)?.entry {
            Entry::Occupied(node) => Some(node),
            Entry::Free { .. } => None,
        }
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut N> {
        match &mut self.slots.get_mut(index)?.entry {
            Entry::Occupied(node) => Some(node),
            Entry::Free { .. } => None,
        }
    }

    /// Generation of an occupied slot.
    pub(crate) fn generation(&self, index: usize) -> Option<u32> {
        let slot = self.slots.get(index)?;
        match slot.entry {
            Entry::Occupied(_) => Some(slot.generation),
            Entry::Free { .. } => None,
        }
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free_head = None;
        self.len = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn freed_slots_are_reused_with_new_generation() {
        let mut arena = Arena::new();
        let (a, gen_a) = arena.insert("a");
        let (b, _) = arena.insert("b");
        assert_eq!(arena.len(), 2);

        assert_eq!(arena.remove(a), Some("a"));
        assert_eq!(arena.remove(a), None);
        assert_eq!(arena.get(a), None);

        let (c, gen_c) = arena.insert("c");
        assert_eq!(c, a);
        assert_ne!(gen_c, gen_a);
        assert_eq!(arena.get(b), Some(&"b"));
        assert_eq!(arena.generation(c), Some(gen_c));
        assert_eq!(arena.len(), 2);
    }

    #[test]
    fn free_list_is_lifo() {
        let mut arena = Arena::new();
        let indices: Vec<usize> = (0..4).map(|i| arena.insert(i).0).collect();
        arena.remove(indices[1]);
        arena.remove(indices[3]);

        assert_eq!(arena.insert(10).0, indices[3]);
        assert_eq!(arena.insert(11).0, indices[1]);
        assert_eq!(arena.insert(12).0, 4);
    }
}
