//! Thread-safe handle over a [`HopfieldNetwork`].
//!
//! Recalls take the read lock and may run in parallel; training takes the
//! write lock and excludes every other call.

use crate::error::{HopfieldError, Result};
use crate::network::{HopfieldNetwork, Recall, RecallConfig};
use crate::pattern::Pattern;
use std::sync::{Arc, RwLock};

/// Cloneable, shareable network handle.
#[derive(Clone, Debug)]
pub struct SharedNetwork {
    inner: Arc<RwLock<HopfieldNetwork>>,
}

impl SharedNetwork {
    pub fn new(network: HopfieldNetwork) -> Self {
        Self {
            inner: Arc::new(RwLock::new(network)),
        }
    }

    pub fn size(&self) -> Result<usize> {
        self.read(|net| Ok(net.size()))
    }

    /// Retrain under the write lock.
    pub fn train(&self, patterns: &[Pattern]) -> Result<()> {
        let mut net = self.inner.write().map_err(|_| HopfieldError::LockPoisoned)?;
        net.train(patterns)
    }

    /// Recall under the read lock.
    pub fn recall(&self, query: &Pattern, max_iterations: usize) -> Result<Pattern> {
        self.read(|net| net.recall(query, max_iterations))
    }

    pub fn recall_traced(&self, query: &Pattern, config: &RecallConfig) -> Result<Recall> {
        self.read(|net| net.recall_traced(query, config))
    }

    /// Run `f` with shared access to the network.
    pub fn read<T>(&self, f: impl FnOnce(&HopfieldNetwork) -> Result<T>) -> Result<T> {
        let net = self.inner.read().map_err(|_| HopfieldError::LockPoisoned)?;
        f(&net)
    }
}

impl From<HopfieldNetwork> for SharedNetwork {
    fn from(network: HopfieldNetwork) -> Self {
        Self::new(network)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    fn stripes(n: usize, period: usize) -> Pattern {
        Pattern::from_data((0..n).map(|i| if (i / period) % 2 == 0 { 1 } else { -1 }).collect())
            .unwrap()
    }

    #[test]
    fn test_parallel_recall() {
        // Periods 1, 2 and 4 over 16 cells are mutually orthogonal.
        let patterns = vec![stripes(16, 1), stripes(16, 2), stripes(16, 4)];
        let shared = SharedNetwork::new(HopfieldNetwork::new(16).unwrap());
        shared.train(&patterns).unwrap();

        let handles: Vec<_> = patterns
            .iter()
            .cloned()
            .map(|p| {
                let shared = shared.clone();
                thread::spawn(move || shared.recall(&p, 10).map(|r| r == p))
            })
            .collect();

        for handle in handles {
            assert!(handle.join().unwrap().unwrap());
        }
        assert_eq!(shared.size().unwrap(), 16);
    }

    #[test]
    fn test_train_errors_propagate() {
        let shared: SharedNetwork = HopfieldNetwork::new(4).unwrap().into();
        assert!(matches!(shared.train(&[]), Err(HopfieldError::EmptyInput(_))));
        assert!(!shared.read(|net| Ok(net.is_trained())).unwrap());
    }
}
