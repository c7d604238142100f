//! CRC-16/XMODEM, the checksum strkey embeds in every encoded address.

/// Computes CRC-16/XMODEM over `data`: polynomial 0x1021, initial value 0,
/// no final xor.
pub(crate) fn crc16_xmodem(data: &[u8]) -> u16 {
    let mut crc: u16 = 0;
    for &byte in data {
        crc ^= (byte as u16) << 8;
        for _ in 0..8 {
            crc = if crc & 0x8000 != 0 {
                (crc << 1) ^ 0x1021
            } else {
                crc << 1
            };
        }
    }
    crc
}

#[cfg(test)]
mod tests {
    use super::crc16_xmodem;

    #[test]
    fn crc16_xmodem_check_value() {
        // The standard check value for CRC-16/XMODEM.
        assert_eq!(crc16_xmodem(b"123456789"), 0x31c3);
    }

    #[test]
    fn crc16_xmodem_empty_input_is_zero() {
        assert_eq!(crc16_xmodem(&[]), 0);
    }

    #[test]
    fn crc16_xmodem_zero_contract_frame() {
        let mut frame = [0u8; 33];
        frame[0] = 0x10;
        assert_eq!(crc16_xmodem(&frame), 0x5cc8);
    }
}
