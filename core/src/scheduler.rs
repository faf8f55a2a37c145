use std::ops::ControlFlow;

use rayon::prelude::*;

use crate::{
    bucket::{length_order, LengthBucket},
    chain::Chain,
    composition::CompositionIter,
    config::PrinceConfig,
    distribution::quota,
    element::ElementStore,
    error::{PrinceError, PrinceResult},
    sink::CandidateSink,
    L_MAX,
};

/// Builds every valid chain targeting `len`, filtered by the chain's part-count bounds.
fn chains_for_length(
    len: u8,
    config: &PrinceConfig,
    store: &ElementStore,
) -> PrinceResult<Vec<Chain>> {
    let mut chains = Vec::new();

    for parts in CompositionIter::new(len) {
        let k = parts.len() as u8;
        if k < config.elem_cnt_min || k > config.elem_cnt_max {
            continue;
        }

        if let Some(chain) = Chain::build(parts, store)? {
            chains.push(chain);
        }
    }

    Ok(chains)
}

/// The candidate-generation engine: owns the element store, the per-length chain buckets, and
/// the scheduler's monotonic progress counters.
pub struct PrinceEngine {
    store: ElementStore,
    config: PrinceConfig,
    /// Indexed by length, `1..=L_MAX`; index `0` is unused.
    buckets: Vec<LengthBucket>,
    order: Vec<u8>,
    /// The true cardinality of the full enumeration, unaffected by `limit`.
    full_ks_cnt: u128,
    /// The effective bound the scheduling loop runs to: `min(full_ks_cnt, skip + limit)` when
    /// `limit != 0`, else `full_ks_cnt`. Capping this value instead of special-casing `limit` in
    /// the loop keeps the loop identical to the unsliced case.
    total_ks_cnt: u128,
    total_ks_pos: u128,
}

impl PrinceEngine {
    /// Builds every chain bucket for `config.pw_min..=config.pw_max`, computes `total_ks_cnt`,
    /// and validates `skip`/`limit` against it.
    ///
    /// Per-length chain generation and keyspace computation are independent and are
    /// parallelized with `rayon`; the scheduler created from the result still runs
    /// single-threaded.
    pub fn setup(store: ElementStore, config: PrinceConfig) -> PrinceResult<Self> {
        let lengths: Vec<u8> = (config.pw_min..=config.pw_max).collect();

        let built: Vec<(u8, Vec<Chain>)> = lengths
            .par_iter()
            .map(|&len| -> PrinceResult<(u8, Vec<Chain>)> {
                Ok((len, chains_for_length(len, &config, &store)?))
            })
            .collect::<PrinceResult<Vec<_>>>()?;

        let mut buckets = vec![LengthBucket::default(); L_MAX as usize + 1];
        for (len, chains) in built {
            tracing::debug!(len, chains = chains.len(), "built chain bucket");
            buckets[len as usize] = LengthBucket::new(chains);
        }

        let full_ks_cnt: u128 = buckets.iter().map(LengthBucket::total_ks_cnt).sum();
        tracing::debug!(total_ks_cnt = full_ks_cnt, "computed total keyspace");

        config.validate_slice(full_ks_cnt)?;

        // cap the loop's working bound at skip + limit, matching the original princeprocessor's
        // approach of shrinking total_ks_cnt once a limit is set instead of special-casing it.
        let total_ks_cnt = if config.limit == 0 {
            full_ks_cnt
        } else {
            config.skip + config.limit
        };

        let bag_sizes: Vec<(u8, usize)> = lengths
            .iter()
            .map(|&len| (len, store.bag_len(len)))
            .collect();
        let order = length_order(&bag_sizes);

        Ok(Self {
            store,
            config,
            buckets,
            order,
            full_ks_cnt,
            total_ks_cnt,
            total_ks_pos: 0,
        })
    }

    /// The true number of candidates across every chain, unaffected by `limit`.
    pub fn total_ks_cnt(&self) -> u128 {
        self.full_ks_cnt
    }

    /// The scheduler's current progress; equals `total_ks_cnt` once enumeration is complete.
    pub fn total_ks_pos(&self) -> u128 {
        self.total_ks_pos
    }

    /// The keyspace carried by each configured target length, in `pw_min..=pw_max` order.
    pub fn length_breakdown(&self) -> Vec<(u8, u128)> {
        (self.config.pw_min..=self.config.pw_max)
            .map(|len| (len, self.buckets[len as usize].total_ks_cnt()))
            .collect()
    }

    /// Runs the scheduler to completion (or until the sink requests a stop), handing every
    /// emitted candidate to `sink` in order.
    ///
    /// Global positions `< skip` are suppressed; emission stops once `limit` candidates (or the
    /// full remaining keyspace, if `limit == 0`) have been produced.
    pub fn run(&mut self, sink: &mut impl CandidateSink) -> ControlFlow<()> {
        while self.total_ks_pos < self.total_ks_cnt {
            for &len in &self.order.clone() {
                let outs_cnt = quota(len, self.config.wl_dist_len, &self.store);
                let mut outs_pos: u64 = 0;

                while outs_pos < outs_cnt {
                    let bucket = &mut self.buckets[len as usize];
                    if bucket.chains_pos == bucket.chains.len() {
                        break;
                    }

                    let chain_idx = bucket.chains_pos;
                    let iter = {
                        let chain = &bucket.chains[chain_idx];
                        (chain.ks_cnt - chain.ks_pos)
                            .min(self.total_ks_cnt - self.total_ks_pos)
                            .min((outs_cnt - outs_pos) as u128)
                    };

                    let batch_start = self.total_ks_pos;
                    let chain_ks_pos = bucket.chains[chain_idx].ks_pos;

                    // skip gating: suppress emission entirely below `skip`, or start mid-batch.
                    if batch_start + iter > self.config.skip {
                        let offset = self.config.skip.saturating_sub(batch_start);
                        let emit_start = chain_ks_pos + offset;
                        let emit_end = chain_ks_pos + iter;

                        for t in emit_start..emit_end {
                            let password = bucket.chains[chain_idx].materialize(t, &self.store);
                            if sink.accept(&password).is_break() {
                                // advance past every index this chain has visited so far in the
                                // batch, emitted or suppressed by skip, so a resume via `skip`
                                // never replays a candidate already handed to the sink.
                                let consumed = t + 1 - chain_ks_pos;
                                let chain = &mut bucket.chains[chain_idx];
                                chain.ks_pos += consumed;
                                if chain.ks_pos == chain.ks_cnt {
                                    bucket.chains_pos += 1;
                                }
                                self.total_ks_pos += consumed;
                                return ControlFlow::Break(());
                            }
                        }
                    }

                    let chain = &mut bucket.chains[chain_idx];
                    chain.ks_pos += iter;
                    if chain.ks_pos == chain.ks_cnt {
                        bucket.chains_pos += 1;
                    }

                    outs_pos += iter as u64;
                    self.total_ks_pos += iter;

                    if self.total_ks_pos == self.total_ks_cnt {
                        return ControlFlow::Continue(());
                    }
                }
            }
        }

        ControlFlow::Continue(())
    }
}
