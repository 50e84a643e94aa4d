use bitball::{BitBallInput, BitBallState, BitVector16};

/// Builds a vector by toggling the given lamps on a fresh one.
pub fn vector_from_toggles(indices: &[usize]) -> BitVector16 {
    let mut bits = BitVector16::new();
    for index in indices {
        bits.toggle(*index).unwrap();
    }
    bits
}

/// Every one of the 65536 configurations, in value order.
pub fn all_vectors() -> impl Iterator<Item = BitVector16> {
    (0..=u16::MAX).map(BitVector16::from)
}

pub fn page_after(inputs: &[BitBallInput]) -> BitBallState {
    let mut page = BitBallState::new();
    for input in inputs {
        page.handle_input(*input).unwrap();
    }
    page
}

pub fn is_binary_readout(s: &str) -> bool {
    let groups: Vec<&str> = s.split(' ').collect();
    s.len() == 19
        && groups.len() == 4
        && groups
            .iter()
            .all(|group| group.len() == 4 && group.chars().all(|c| c == '0' || c == '1'))
}

pub fn is_hex_readout(s: &str) -> bool {
    s.len() == 6
        && s.starts_with("0x")
        && s[2..]
            .chars()
            .all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c))
}
