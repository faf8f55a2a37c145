use crate::{error::PrinceError, L_MAX};

/// The default minimum number of elements a chain may compose.
pub const DEFAULT_ELEM_CNT_MIN: u8 = 1;

/// The default maximum number of elements a chain may compose.
pub const DEFAULT_ELEM_CNT_MAX: u8 = 8;

/// A builder for a [`PrinceConfig`].
#[derive(Clone, Debug)]
pub struct PrinceConfigBuilder {
    pw_min: u8,
    pw_max: u8,
    elem_cnt_min: u8,
    elem_cnt_max: u8,
    wl_dist_len: bool,
    skip: u128,
    limit: u128,
}

impl Default for PrinceConfigBuilder {
    fn default() -> Self {
        Self {
            pw_min: 1,
            pw_max: L_MAX,
            elem_cnt_min: DEFAULT_ELEM_CNT_MIN,
            elem_cnt_max: DEFAULT_ELEM_CNT_MAX,
            wl_dist_len: false,
            skip: 0,
            limit: 0,
        }
    }
}

impl PrinceConfigBuilder {
    /// Creates a new builder with the PRINCE defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the minimum target password length.
    pub fn pw_min(mut self, pw_min: u8) -> Self {
        self.pw_min = pw_min;
        self
    }

    /// Sets the maximum target password length.
    pub fn pw_max(mut self, pw_max: u8) -> Self {
        self.pw_max = pw_max;
        self
    }

    /// Sets the minimum number of elements a chain may compose.
    pub fn elem_cnt_min(mut self, elem_cnt_min: u8) -> Self {
        self.elem_cnt_min = elem_cnt_min;
        self
    }

    /// Sets the maximum number of elements a chain may compose.
    pub fn elem_cnt_max(mut self, elem_cnt_max: u8) -> Self {
        self.elem_cnt_max = elem_cnt_max;
        self
    }

    /// Sets whether the length distribution is derived from the input instead of the default.
    pub fn wl_dist_len(mut self, wl_dist_len: bool) -> Self {
        self.wl_dist_len = wl_dist_len;
        self
    }

    /// Sets the number of global keyspace positions to suppress before the first emission.
    pub fn skip(mut self, skip: u128) -> Self {
        self.skip = skip;
        self
    }

    /// Sets the maximum number of candidates to emit. `0` means unlimited.
    pub fn limit(mut self, limit: u128) -> Self {
        self.limit = limit;
        self
    }

    /// Validates the bounds in isolation (everything that doesn't require `total_ks_cnt`)
    /// and builds a [`PrinceConfig`].
    ///
    /// `skip`/`limit` are re-checked against `total_ks_cnt` once it is known, by
    /// [`crate::scheduler::PrinceEngine::setup`].
    pub fn build(self) -> Result<PrinceConfig, PrinceError> {
        if !(1..=L_MAX).contains(&self.pw_min) {
            return Err(PrinceError::Configuration("pw_min must be in [1, L_MAX]"));
        }
        if !(1..=L_MAX).contains(&self.pw_max) {
            return Err(PrinceError::Configuration("pw_max must be in [1, L_MAX]"));
        }
        if self.pw_min > self.pw_max {
            return Err(PrinceError::Configuration("pw_min must be <= pw_max"));
        }
        if self.elem_cnt_min < 1 {
            return Err(PrinceError::Configuration("elem_cnt_min must be >= 1"));
        }
        if self.elem_cnt_min > self.elem_cnt_max {
            return Err(PrinceError::Configuration(
                "elem_cnt_min must be <= elem_cnt_max",
            ));
        }
        if self.elem_cnt_max > self.pw_max {
            return Err(PrinceError::Configuration(
                "elem_cnt_max must be <= pw_max",
            ));
        }

        Ok(PrinceConfig {
            pw_min: self.pw_min,
            pw_max: self.pw_max,
            elem_cnt_min: self.elem_cnt_min,
            elem_cnt_max: self.elem_cnt_max,
            wl_dist_len: self.wl_dist_len,
            skip: self.skip,
            limit: self.limit,
        })
    }
}

/// The validated, immutable configuration consumed by setup.
#[derive(Clone, Copy, Debug)]
pub struct PrinceConfig {
    pub pw_min: u8,
    pub pw_max: u8,
    pub elem_cnt_min: u8,
    pub elem_cnt_max: u8,
    pub wl_dist_len: bool,
    pub skip: u128,
    pub limit: u128,
}

impl PrinceConfig {
    /// Checks `skip`/`limit` against the now-known `total_ks_cnt`.
    pub(crate) fn validate_slice(&self, total_ks_cnt: u128) -> Result<(), PrinceError> {
        if self.skip > total_ks_cnt {
            return Err(PrinceError::Configuration("skip must be <= total_ks_cnt"));
        }
        if self.limit != 0 && self.skip + self.limit > total_ks_cnt {
            return Err(PrinceError::Configuration(
                "skip + limit must be <= total_ks_cnt",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(PrinceConfigBuilder::new().build().is_ok());
    }

    #[test]
    fn rejects_pw_min_greater_than_pw_max() {
        let err = PrinceConfigBuilder::new()
            .pw_min(5)
            .pw_max(3)
            .build()
            .unwrap_err();
        assert!(matches!(err, PrinceError::Configuration(_)));
    }

    #[test]
    fn rejects_elem_cnt_max_greater_than_pw_max() {
        let err = PrinceConfigBuilder::new()
            .pw_max(4)
            .elem_cnt_max(8)
            .build()
            .unwrap_err();
        assert!(matches!(err, PrinceError::Configuration(_)));
    }

    #[test]
    fn rejects_out_of_range_bounds() {
        assert!(PrinceConfigBuilder::new().pw_min(0).build().is_err());
        assert!(PrinceConfigBuilder::new()
            .pw_max(L_MAX + 1)
            .build()
            .is_err());
    }

    #[test]
    fn validate_slice_rejects_skip_past_total() {
        let config = PrinceConfigBuilder::new().skip(100).build().unwrap();
        assert!(config.validate_slice(10).is_err());
    }

    #[test]
    fn validate_slice_rejects_limit_overrun() {
        let config = PrinceConfigBuilder::new()
            .skip(5)
            .limit(10)
            .build()
            .unwrap();
        assert!(config.validate_slice(10).is_err());
        assert!(config.validate_slice(15).is_ok());
    }
}
