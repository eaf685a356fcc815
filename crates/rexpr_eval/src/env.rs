//! Evaluation environment.

use rexpr_value::Value;

use crate::params::{NoParams, Params};
use crate::random::RandomSource;

static NO_PARAMS: NoParams = NoParams;
static PER_THREAD: RandomSource = RandomSource::PerThread;

/// Everything an expression reads from outside its own tree.
///
/// Borrowed, cheap to copy, and shareable: several threads may evaluate the
/// same tree against the same environment at once.
#[derive(Copy, Clone)]
pub struct EvalEnv<'a> {
    params: &'a dyn Params,
    random: &'a RandomSource,
}

impl<'a> EvalEnv<'a> {
    pub fn new(params: &'a dyn Params, random: &'a RandomSource) -> Self {
        EvalEnv { params, random }
    }

    /// Environment over `params` using per-thread randomness.
    pub fn with_params(params: &'a dyn Params) -> Self {
        EvalEnv::new(params, &PER_THREAD)
    }

    /// Environment with no parameters bound.
    pub fn empty() -> EvalEnv<'static> {
        EvalEnv::new(&NO_PARAMS, &PER_THREAD)
    }

    /// Replace the random source.
    #[must_use]
    pub fn with_random(self, random: &'a RandomSource) -> Self {
        EvalEnv { random, ..self }
    }

    /// Resolve a parameter; unbound names are `Null`.
    #[inline]
    pub fn param(&self, name: &str) -> Value {
        self.params.get(name)
    }

    #[inline]
    pub fn random(&self) -> &'a RandomSource {
        self.random
    }
}

impl Default for EvalEnv<'static> {
    fn default() -> Self {
        EvalEnv::empty()
    }
}
