use crate::{composition::Composition, element::ElementStore, error::PrinceError};

/// A composition whose parts index into element bags, carrying the keyspace it addresses.
#[derive(Clone, Debug)]
pub struct Chain {
    /// The ordered part lengths, e.g. `(1, 2, 1)` for a length-4 password made of three elements.
    pub parts: Composition,
    /// `∏ |Bag(p_i)|`, the number of distinct passwords this chain can produce.
    pub ks_cnt: u128,
    /// The next index within this chain to emit; `ks_pos == ks_cnt` means fully drained.
    pub ks_pos: u128,
}

impl Chain {
    /// Builds a chain for `parts`, computing its keyspace against `store`.
    ///
    /// Returns `None` if any part's bag is empty (the chain is not valid, per §4.2).
    pub fn build(parts: Composition, store: &ElementStore) -> Result<Option<Self>, PrinceError> {
        let mut ks_cnt: u128 = 1;

        for &part in &parts {
            let n = store.bag_len(part);
            if n == 0 {
                return Ok(None);
            }

            ks_cnt = ks_cnt
                .checked_mul(n as u128)
                .ok_or(PrinceError::Overflow)?;
        }

        Ok(Some(Chain {
            parts,
            ks_cnt,
            ks_pos: 0,
        }))
    }

    /// Materializes the password at keyspace index `t` by mixed-radix decomposition.
    ///
    /// `t` must be in `[0, ks_cnt)`. For each part length `p_i` in order, the element
    /// `Bag(p_i)[t mod |Bag(p_i)|]` is emitted and `t` is divided by `|Bag(p_i)|`; concatenating
    /// the emitted elements forms a password of the chain's target length.
    pub fn materialize(&self, mut t: u128, store: &ElementStore) -> Vec<u8> {
        let mut password = Vec::with_capacity(self.parts.iter().map(|&p| p as usize).sum());

        for &part in &self.parts {
            let bag = store.bag(part);
            let n = bag.len() as u128;
            let idx = (t % n) as usize;
            password.extend_from_slice(&bag[idx]);
            t /= n;
        }

        password
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;
    use crate::composition::Composition;

    fn store_with(words: &[&[u8]]) -> ElementStore {
        let mut store = ElementStore::new();
        for word in words {
            store.insert(word);
        }
        store
    }

    #[test]
    fn empty_part_bag_invalidates_chain() {
        let store = store_with(&[b"a", b"b"]);
        let parts = Composition::from_iter([2]);

        assert!(Chain::build(parts, &store).unwrap().is_none());
    }

    #[test]
    fn keyspace_is_product_of_bag_sizes() {
        let store = store_with(&[b"a", b"b", b"cd"]);
        let parts = Composition::from_iter([1, 1]);

        let chain = Chain::build(parts, &store).unwrap().unwrap();
        assert_eq!(4, chain.ks_cnt);
    }

    #[test]
    fn materialize_is_a_bijection_onto_all_tuples() {
        let store = store_with(&[b"a", b"b", b"cd", b"ef"]);
        let parts = Composition::from_iter([1, 2]);

        let chain = Chain::build(parts, &store).unwrap().unwrap();
        assert_eq!(4, chain.ks_cnt);

        let passwords: Vec<Vec<u8>> = (0..chain.ks_cnt)
            .map(|t| chain.materialize(t, &store))
            .collect();

        let unique = passwords.iter().cloned().unique().count();
        assert_eq!(chain.ks_cnt as usize, unique);

        for password in &passwords {
            assert_eq!(3, password.len());
        }
    }

    #[test]
    fn ks_pos_starts_at_zero() {
        let store = store_with(&[b"a", b"b"]);
        let parts = Composition::from_iter([1]);

        let chain = Chain::build(parts, &store).unwrap().unwrap();
        assert_eq!(0, chain.ks_pos);
        assert_eq!(2, chain.ks_cnt);
    }
}
