mod common;

mod test_scenarios {
    use crate::common;
    use bitball::BitVector16;

    #[test]
    fn all_bits_clear() {
        let bits = BitVector16::new();
        assert_eq!(0, bits.unsigned_value());
        assert_eq!(0, bits.signed_value());
        assert_eq!("0000 0000 0000 0000", bits.binary_string());
        assert_eq!("0x0000", bits.hex_string());
    }

    #[test]
    fn only_lsb() {
        let bits = common::vector_from_toggles(&[15]);
        assert_eq!(1, bits.unsigned_value());
        assert_eq!(1, bits.signed_value());
        assert_eq!("0000 0000 0000 0001", bits.binary_string());
        assert_eq!("0x0001", bits.hex_string());
    }

    #[test]
    fn only_msb() {
        let bits = common::vector_from_toggles(&[0]);
        assert_eq!(32768, bits.unsigned_value());
        assert_eq!(-32768, bits.signed_value());
        assert_eq!("0x8000", bits.hex_string());
    }

    #[test]
    fn all_bits_set() {
        let all: Vec<usize> = (0..16).collect();
        let mut bits = common::vector_from_toggles(&all);
        assert_eq!(65535, bits.unsigned_value());
        assert_eq!(-1, bits.signed_value());
        assert_eq!("0xFFFF", bits.hex_string());

        bits.toggle(0).unwrap();
        assert_eq!(32767, bits.unsigned_value());
        assert_eq!(32767, bits.signed_value());
    }

    #[test]
    fn value_0x1234() {
        let bits = common::vector_from_toggles(&[3, 6, 10, 11, 13]);
        assert_eq!("0001 0010 0011 0100", bits.binary_string());
        assert_eq!(4660, bits.unsigned_value());
        assert_eq!(4660, bits.signed_value());
        assert_eq!("0x1234", bits.hex_string());
    }
}

mod test_properties {
    use crate::common;
    use bitball::BitVector16;

    #[test]
    fn toggle_is_an_involution() {
        for bits in common::all_vectors().step_by(97) {
            for index in 0..16 {
                let mut toggled = bits.clone();
                toggled.toggle(index).unwrap();
                assert_ne!(bits, toggled);
                toggled.toggle(index).unwrap();
                assert_eq!(bits, toggled);
            }
        }
    }

    #[test]
    fn readouts_are_well_formed() {
        for bits in common::all_vectors() {
            assert!(common::is_binary_readout(&bits.binary_string()));
            assert!(common::is_hex_readout(&bits.hex_string()));
        }
    }

    #[test]
    fn binary_readout_round_trips() {
        for bits in common::all_vectors() {
            let parsed: BitVector16 = bits.binary_string().parse().unwrap();
            assert_eq!(bits, parsed);
        }
    }

    #[test]
    fn signed_matches_twos_complement() {
        for bits in common::all_vectors() {
            let unsigned = bits.unsigned_value();
            assert_eq!(i32::from(unsigned as i16), bits.signed_value());
            let msb = bits.bits()[0];
            let expected = if msb { i32::from(unsigned) - 65536 } else { i32::from(unsigned) };
            assert_eq!(expected, bits.signed_value());
        }
    }

    #[test]
    fn weights_follow_lamp_position() {
        for index in 0..16 {
            let bits = common::vector_from_toggles(&[index]);
            assert_eq!(1u16 << (15 - index), bits.unsigned_value());
        }
    }
}

mod test_page {
    use crate::common;
    use bitball::scripted::ScriptedMainloopBuilder;
    use bitball::mainloop::{Mainloop, MainloopBuilder};
    use bitball::{BitBallInput, BitBallState, DisplayMode, Error};

    #[test]
    fn switching_mode_keeps_the_lamps() {
        let mut page = common::page_after(&[
            BitBallInput::ToggleBit(0),
            BitBallInput::ToggleBit(15),
        ]);
        let before = page.bits().clone();

        page.handle_input(BitBallInput::SelectMode(DisplayMode::Signed))
            .unwrap();
        assert_eq!(&before, page.bits());
        assert_eq!(-32767, page.readouts().decimal);

        page.handle_input(BitBallInput::SelectMode(DisplayMode::Unsigned))
            .unwrap();
        assert_eq!(32769, page.readouts().decimal);
        assert_eq!("0x8001", page.readouts().hex);
    }

    #[test]
    fn out_of_range_toggle_is_reported() {
        let mut page = BitBallState::new();
        match page.handle_input(BitBallInput::ToggleBit(16)) {
            Err(Error::OutOfRange { index, size }) => {
                assert_eq!(16, index);
                assert_eq!(16, size);
            }
            other => panic!("expected OutOfRange, got {:?}", other),
        }
    }

    #[test]
    fn scripted_page_output() {
        let mut mainloop = ScriptedMainloopBuilder {
            inputs: vec![
                BitBallInput::ToggleBit(3),
                BitBallInput::ToggleBit(6),
                BitBallInput::ToggleBit(10),
                BitBallInput::ToggleBit(11),
                BitBallInput::ToggleBit(13),
            ],
            writer: Vec::new(),
        }
        .init()
        .unwrap();

        let mut page = BitBallState::with_mode(DisplayMode::Signed);
        mainloop.mainloop(&mut page).unwrap();

        let output = String::from_utf8(mainloop.into_writer()).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!("  bitball", lines[0]);
        assert_eq!("  ( ) ( ) ( ) (*) ( ) ( ) (*) ( )", lines[2]);
        assert_eq!("  ( ) ( ) (*) (*) ( ) (*) ( ) ( )  <- LSB", lines[3]);
        assert!(lines.contains(&"  Binary      : 0001 0010 0011 0100"));
        assert!(lines.contains(&"  Decimal     : 4660"));
        assert!(lines.contains(&"  Hexadecimal : 0x1234"));
        assert!(lines.contains(&"  [*signed*]  [ unsigned ]"));
    }
}
