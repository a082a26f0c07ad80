use crate::bit_set::BitSet;
use crate::error::{FixtureError, Result};
use crate::select::ActiveSet;

/// Packs `active` into `ceil(total_cnt / 8)` bytes, least significant bit
/// first. Unused high bits of the last byte stay zero.
pub fn pack(active: &ActiveSet, total_cnt: usize) -> Result<Vec<u8>> {
    if let Some(index) = active.max().filter(|&max| max >= total_cnt) {
        return Err(FixtureError::OutOfRange { index, total_cnt });
    }

    let mut bits = BitSet::new(total_cnt);
    for index in active.iter() {
        bits.insert(index);
    }
    Ok(bits.into_bytes())
}

/// Recovers the active positions from a packed mask of `total_cnt` bits.
pub fn unpack(bytes: &[u8], total_cnt: usize) -> Result<ActiveSet> {
    let expected = total_cnt.div_ceil(8);
    if bytes.len() != expected {
        return Err(FixtureError::InvalidParameters(format!(
            "{total_cnt} bits pack into {expected} bytes, got {}",
            bytes.len()
        )));
    }

    match BitSet::from_bytes(bytes.to_vec(), total_cnt) {
        Some(bits) => Ok(bits.ones().collect()),
        None => {
            // Length matched, so a padding bit must be set.
            let index = (total_cnt..expected * 8)
                .find(|&i| bytes[i / 8] & (1 << (i % 8)) != 0)
                .unwrap_or(total_cnt);
            Err(FixtureError::OutOfRange { index, total_cnt })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_set_is_all_padding() {
        assert_eq!(pack(&ActiveSet::new(), 9).unwrap(), vec![0x00, 0x00]);
    }

    #[test]
    fn first_and_last_bit_of_a_byte() {
        let active: ActiveSet = [0, 7].into_iter().collect();
        assert_eq!(pack(&active, 8).unwrap(), vec![0x81]);
    }

    #[test]
    fn bits_cross_byte_boundaries() {
        let active: ActiveSet = [3, 8, 11, 16].into_iter().collect();
        assert_eq!(pack(&active, 17).unwrap(), vec![0x08, 0x09, 0x01]);
    }

    #[test]
    fn zero_length_field() {
        assert!(pack(&ActiveSet::new(), 0).unwrap().is_empty());
        assert!(unpack(&[], 0).unwrap().is_empty());
    }

    #[test]
    fn out_of_range_index_fails() {
        let active: ActiveSet = [2, 8].into_iter().collect();
        assert!(matches!(
            pack(&active, 8),
            Err(FixtureError::OutOfRange {
                index: 8,
                total_cnt: 8
            })
        ));
    }

    #[test]
    fn unpack_reverses_pack() {
        let active: ActiveSet = [0, 5, 9, 12].into_iter().collect();
        let bytes = pack(&active, 13).unwrap();
        assert_eq!(unpack(&bytes, 13).unwrap(), active);
    }

    #[test]
    fn unpack_rejects_wrong_length() {
        assert!(matches!(
            unpack(&[0xff], 9),
            Err(FixtureError::InvalidParameters(_))
        ));
    }

    #[test]
    fn unpack_rejects_set_padding() {
        assert!(matches!(
            unpack(&[0x00, 0x04], 9),
            Err(FixtureError::OutOfRange {
                index: 10,
                total_cnt: 9
            })
        ));
    }
}
