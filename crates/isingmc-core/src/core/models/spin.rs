use std::ops::Index;

pub const SPIN_UP: i8 = 1;
pub const SPIN_DOWN: i8 = -1;

/// One assignment of a value to every spin, in spin-index order.
///
/// Samplers only ever produce `+1` and `-1`. Values are stored as raw `i8` so that
/// configurations assembled elsewhere can still be represented; the encoder is the
/// place where out-of-domain values are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SpinConfiguration {
    values: Vec<i8>,
}

impl SpinConfiguration {
    pub fn new(values: Vec<i8>) -> Self {
        Self { values }
    }

    /// A configuration of `len` spins all set to `value`.
    pub fn uniform(len: usize, value: i8) -> Self {
        Self {
            values: vec![value; len],
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<i8> {
        self.values.get(index).copied()
    }

    #[inline]
    pub fn values(&self) -> &[i8] {
        &self.values
    }

    pub fn iter(&self) -> impl Iterator<Item = i8> + '_ {
        self.values.iter().copied()
    }

    pub fn into_values(self) -> Vec<i8> {
        self.values
    }
}

impl Index<usize> for SpinConfiguration {
    type Output = i8;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.values[index]
    }
}

impl From<Vec<i8>> for SpinConfiguration {
    fn from(values: Vec<i8>) -> Self {
        Self::new(values)
    }
}

impl FromIterator<i8> for SpinConfiguration {
    fn from_iter<I: IntoIterator<Item = i8>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_fills_every_position() {
        let config = SpinConfiguration::uniform(4, SPIN_DOWN);
        assert_eq!(config.len(), 4);
        assert!(config.iter().all(|s| s == SPIN_DOWN));
    }

    #[test]
    fn get_returns_none_past_the_end() {
        let config = SpinConfiguration::new(vec![1, -1]);
        assert_eq!(config.get(1), Some(-1));
        assert_eq!(config.get(2), None);
        assert_eq!(config[0], 1);
    }

    #[test]
    fn collects_from_iterator_in_order() {
        let config: SpinConfiguration = [1i8, -1, -1].into_iter().collect();
        assert_eq!(config.values(), &[1, -1, -1]);
        assert_eq!(config.into_values(), vec![1, -1, -1]);
    }

    #[test]
    fn default_is_empty() {
        assert!(SpinConfiguration::default().is_empty());
    }
}
