use crate::chain::Chain;

/// The chains targeting a specific password length, sorted ascending by `ks_cnt`
/// (stable, so ties keep their generation order).
#[derive(Clone, Debug, Default)]
pub struct LengthBucket {
    pub chains: Vec<Chain>,
    /// Index of the next non-drained chain in `chains`.
    pub chains_pos: usize,
}

impl LengthBucket {
    pub fn new(mut chains: Vec<Chain>) -> Self {
        chains.sort_by(|a, b| a.ks_cnt.cmp(&b.ks_cnt));

        Self {
            chains,
            chains_pos: 0,
        }
    }

    pub fn total_ks_cnt(&self) -> u128 {
        self.chains.iter().map(|c| c.ks_cnt).sum()
    }
}

/// Computes the order in which target lengths are visited within a pass: descending by
/// `|Bag(L)|`, stable by ascending `L` on ties.
pub fn length_order(lengths: &[(u8, usize)]) -> Vec<u8> {
    let mut order: Vec<(u8, usize)> = lengths.to_vec();
    order.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    order.into_iter().map(|(len, _)| len).collect()
}
