/// Uppercases using Turkish rules: dotted `i` becomes `İ` and dotless `ı`
/// becomes `I`. Everything else follows the Unicode default mapping.
///
/// The directory service compares names in this form, so ASCII or default
/// Unicode uppercasing produces silent mismatches for names containing `i`.
pub fn to_turkish_uppercase(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            'i' => output.push('İ'),
            'ı' => output.push('I'),
            other => output.extend(other.to_uppercase()),
        }
    }
    output
}
