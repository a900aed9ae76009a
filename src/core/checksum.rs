use crate::domain::model::IdentityNumber;

/// Computes the 10th and 11th digits from the first nine.
///
/// The 10th digit is `(odd * 7 - even) mod 10` where `odd` sums positions
/// 1, 3, 5, 7, 9 and `even` sums 2, 4, 6, 8 (1-based). The difference can be
/// negative, so the modulo is floored into `0..=9`. The 11th digit is the sum
/// of the first ten digits mod 10.
pub fn checksum_digits(prefix: &[u8; 9]) -> (u8, u8) {
    let odd: i32 = prefix.iter().step_by(2).map(|&d| i32::from(d)).sum();
    let even: i32 = prefix.iter().skip(1).step_by(2).map(|&d| i32::from(d)).sum();

    let tenth = (odd * 7 - even).rem_euclid(10) as u8;
    let eleventh = ((odd + even + i32::from(tenth)) % 10) as u8;

    (tenth, eleventh)
}

/// True only for 11 ASCII digits, first non-zero, with both check digits correct.
/// Never panics; malformed input is simply `false`.
pub fn validate_checksum(identity_number: &str) -> bool {
    IdentityNumber::parse(identity_number).is_some_and(|number| number.has_valid_checksum())
}
