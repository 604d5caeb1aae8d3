pub type Score = f32;

/// Round to `places` decimal places with ties going to the even digit,
/// matching the banker's rounding the score contract requires.
pub fn round_to(value: Score, places: u32) -> Score {
    let factor = 10f32.powi(places as i32);
    (value * factor).round_ties_even() / factor
}
