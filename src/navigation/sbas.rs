//! SBAS long message capture.
//!
//! The decoder does not interpret the augmentation payload: it
//! validates and time tags the 250-bit message, then publishes it as
//! [super::SbasMessage] for the augmentation layer.

use crate::{
    bytes::read_u32,
    crc::crc24q,
    decoder::{Decoder, Status},
    errors::DecodeError,
    navigation::SbasMessage,
    time::{gpst_week_tow, seconds},
};

use log::trace;

impl Decoder {
    /// UBX-RXM-SFRBX SBAS payload: eight byte-swapped words, captured
    /// with the time of reception minus one second.
    pub(crate) fn decode_sbas_frame(&mut self, prn: u8, offset: usize) -> Result<Status, DecodeError> {
        let frame = self.frame();
        if frame.len() < offset + 34 {
            return Err(DecodeError::PayloadUnderflow {
                len: frame.len(),
                expected: offset + 34,
            });
        }

        let time = match self.time {
            Some(time) => time,
            None => {
                trace!("sbas S{}: message before first time fix", prn);
                return Ok(Status::NeedMore);
            },
        };

        // undo the per chunk byte swapping
        let mut payload = [0_u8; 29];
        for (index, byte) in payload.iter_mut().enumerate() {
            let word = index / 4;
            *byte = frame[offset + word * 4 + 3 - index % 4];
        }
        payload[28] &= 0xC0;

        let (week, tow_s) = gpst_week_tow(time - seconds(1.0));

        self.sbas = Some(SbasMessage {
            prn,
            week,
            tow_s: tow_s.round() as u32,
            payload,
        });
        Ok(Status::SbasMessage)
    }

    /// UBX-RXM-SFRB SBAS payload: eight 32-bit words carrying the
    /// 250-bit message, closed by its own CRC-24Q.
    pub(crate) fn decode_sbas_legacy(&mut self, prn: u8) -> Result<Status, DecodeError> {
        let time = match self.time {
            Some(time) => time,
            None => {
                trace!("sbas S{}: message before first time fix", prn);
                return Ok(Status::NeedMore);
            },
        };

        let frame = self.frame();
        let mut words = [0_u32; 8];
        for (index, word) in words.iter_mut().enumerate() {
            *word = read_u32(frame, 8 + 4 * index);
        }

        let mut payload = [0_u8; 29];
        for word in 0..7 {
            for byte in 0..4 {
                payload[word * 4 + byte] = (words[word] >> ((3 - byte) * 8)) as u8;
            }
        }
        payload[28] = ((words[7] >> 18) as u8) & 0xC0;

        // realign the 226 message bits against the trailing CRC
        let mut aligned = [0_u8; 29];
        aligned[0] = payload[0] >> 6;
        for index in (1..29).rev() {
            aligned[index] = (payload[index] >> 6) | (payload[index - 1] << 2);
        }
        if crc24q(&aligned, 0) != words[7] & 0xFF_FFFF {
            trace!("sbas S{}: message crc error", prn);
            return Ok(Status::NeedMore);
        }

        let (week, tow_s) = gpst_week_tow(time);

        self.sbas = Some(SbasMessage {
            prn,
            week,
            tow_s: tow_s.round() as u32,
            payload,
        });
        Ok(Status::SbasMessage)
    }
}
