/// Fixed-length bit field stored least-significant-bit first.
///
/// Bit `i` lives at bit `i % 8` of byte `i / 8`. Bits past `len` in the last
/// byte are always zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitSet {
    bytes: Vec<u8>,
    len: usize,
}

impl BitSet {
    pub fn new(len: usize) -> Self {
        Self {
            bytes: vec![0; len.div_ceil(8)],
            len,
        }
    }

    /// Wraps already packed bytes. Returns `None` when the byte count does not
    /// match `len` or a padding bit is set.
    pub fn from_bytes(bytes: Vec<u8>, len: usize) -> Option<Self> {
        if bytes.len() != len.div_ceil(8) {
            return None;
        }
        let bits = Self { bytes, len };
        (bits.padding() == 0).then_some(bits)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Sets bit `index`, returning `true` if it was previously clear.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    pub fn insert(&mut self, index: usize) -> bool {
        assert!(index < self.len, "bit {index} outside field of {}", self.len);
        let mask = 1 << (index % 8);
        let byte = &mut self.bytes[index / 8];
        let already_present = (*byte & mask) != 0;
        *byte |= mask;
        !already_present
    }

    pub fn contains(&self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        (self.bytes[index / 8] & (1 << (index % 8))) != 0
    }

    pub fn count_ones(&self) -> usize {
        self.bytes.iter().map(|b| b.count_ones() as usize).sum()
    }

    /// Indices of set bits in ascending order.
    pub fn ones(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.len).filter(|&i| self.contains(i))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Set bits beyond `len` in the trailing byte.
    fn padding(&self) -> u8 {
        let used = self.len % 8;
        match self.bytes.last() {
            Some(&last) if used != 0 => last & !((1u8 << used) - 1),
            _ => 0,
        }
    }
}
