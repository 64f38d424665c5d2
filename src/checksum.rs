//! Fletcher-8 frame checksum.
//!
//! The two checksum bytes close every UBX frame. They run over the
//! class, id, length and payload bytes, i.e. frame bytes `[2, len-2)`.

/// Computes the running Fletcher-8 pair over `bytes`.
pub fn fletcher8(bytes: &[u8]) -> (u8, u8) {
    let (mut ck_a, mut ck_b) = (0u8, 0u8);
    for byte in bytes {
        ck_a = ck_a.wrapping_add(*byte);
        ck_b = ck_b.wrapping_add(ck_a);
    }
    (ck_a, ck_b)
}

/// Verifies the trailing checksum pair of a complete `frame`,
/// `frame.len()` being the total frame length (8 at minimum).
pub fn verify(frame: &[u8]) -> bool {
    let len = frame.len();
    if len < 8 {
        return false;
    }
    let (ck_a, ck_b) = fletcher8(&frame[2..len - 2]);
    ck_a == frame[len - 2] && ck_b == frame[len - 1]
}

/// Patches the trailing checksum pair of a complete `frame`.
pub fn seal(frame: &mut [u8]) {
    let len = frame.len();
    let (ck_a, ck_b) = fletcher8(&frame[2..len - 2]);
    frame[len - 2] = ck_a;
    frame[len - 1] = ck_b;
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn sealed_frames_verify() {
        for payload_len in [0_usize, 1, 8, 100] {
            let mut frame = vec![0xB5, 0x62, 0x06, 0x01];
            frame.push((payload_len & 0xFF) as u8);
            frame.push((payload_len >> 8) as u8);
            frame.extend((0..payload_len).map(|i| (i * 7) as u8));
            frame.extend([0, 0]);

            seal(&mut frame);
            assert!(verify(&frame), "sealed frame must verify");
        }
    }

    #[test]
    fn single_bit_flips_rejected() {
        let mut frame = vec![0xB5, 0x62, 0x05, 0x01, 0x02, 0x00, 0x12, 0x34, 0, 0];
        seal(&mut frame);
        assert!(verify(&frame));

        for byte in 2..frame.len() {
            for bit in 0..8 {
                let mut corrupted = frame.clone();
                corrupted[byte] ^= 1 << bit;
                assert!(
                    !verify(&corrupted),
                    "flip of byte {} bit {} must be rejected",
                    byte,
                    bit
                );
            }
        }
    }

    #[test]
    fn runt_frames_rejected() {
        assert!(!verify(&[0xB5, 0x62, 0x00, 0x00, 0x00]));
    }
}
