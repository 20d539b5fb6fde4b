/// Characters per "word" in the usual typing-speed convention.
pub const CHARS_PER_WORD: f64 = 5.0;

/// Words per minute for `chars` correct characters typed in `secs` seconds.
///
/// Zero elapsed time yields 0 rather than dividing by zero.
pub fn calculate_wpm(chars: usize, secs: u64) -> u32 {
    if secs == 0 {
        return 0;
    }

    let minutes = secs as f64 / 60.0;
    let words = chars as f64 / CHARS_PER_WORD;

    (words / minutes).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wpm_one_minute() {
        assert_eq!(calculate_wpm(100, 60), 20);
    }

    #[test]
    fn test_wpm_zero_chars() {
        assert_eq!(calculate_wpm(0, 12), 0);
    }

    #[test]
    fn test_wpm_zero_seconds() {
        assert_eq!(calculate_wpm(250, 0), 0);
        assert_eq!(calculate_wpm(0, 0), 0);
    }

    #[test]
    fn test_wpm_rounds_to_nearest() {
        // 8 chars in 1s = 96 wpm exactly
        assert_eq!(calculate_wpm(8, 1), 96);
        // 7 chars in 10s = 8.4 wpm
        assert_eq!(calculate_wpm(7, 10), 8);
        // 9 chars in 20s = 5.4 wpm
        assert_eq!(calculate_wpm(9, 20), 5);
        // 11 chars in 12s = 11 wpm
        assert_eq!(calculate_wpm(11, 12), 11);
        // 13 chars in 12s = 13 wpm
        assert_eq!(calculate_wpm(13, 12), 13);
        // 14 chars in 5s = 33.6 wpm
        assert_eq!(calculate_wpm(14, 5), 34);
    }
}
