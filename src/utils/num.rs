//! Integer parity checks.

pub fn is_even(value: i64) -> bool {
    value % 2 == 0
}

pub fn is_odd(value: i64) -> bool {
    !is_even(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_evens() {
        assert!(is_even(0));
        assert!(is_even(2));
        assert!(!is_even(3));
        assert!(is_even(33333390));
        assert!(is_even(-4));
    }

    #[test]
    fn detects_odds() {
        assert!(!is_odd(0));
        assert!(is_odd(1));
        assert!(is_odd(3333339));
        assert!(is_odd(-3));
    }
}
