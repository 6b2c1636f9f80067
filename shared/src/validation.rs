//! Input validation functions
//!
//! Custom validators shared by the backend service layer. The
//! `validator` crate handles derive-based checks; everything with a
//! domain-specific range lives here.

use rust_decimal::Decimal;

/// Validate email format
pub fn validate_email(email: &str) -> Result<(), String> {
    if email.is_empty() {
        return Err("Email cannot be empty".to_string());
    }
    if email.len() > 255 {
        return Err("Email too long".to_string());
    }
    let email_regex = regex_lite::Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
    if !email_regex.is_match(email) {
        return Err("Invalid email format".to_string());
    }
    Ok(())
}

/// Validate password strength
pub fn validate_password(password: &str) -> Result<(), String> {
    if password.len() < 8 {
        return Err("Password must be at least 8 characters".to_string());
    }
    if password.len() > 128 {
        return Err("Password too long".to_string());
    }
    Ok(())
}

/// Validate workout duration in minutes
pub fn validate_workout_duration(minutes: i32) -> Result<(), String> {
    if minutes < 1 {
        return Err("Duration must be at least 1 minute".to_string());
    }
    if minutes > 600 {
        return Err("Duration cannot exceed 10 hours".to_string());
    }
    Ok(())
}

/// Validate a hydration entry amount in millilitres
pub fn validate_hydration_amount(amount_ml: i32) -> Result<(), String> {
    if amount_ml < 1 {
        return Err("Amount must be positive".to_string());
    }
    if amount_ml > 5000 {
        return Err("Amount cannot exceed 5000 ml per entry".to_string());
    }
    Ok(())
}

/// Validate a caffeine entry amount in milligrams
pub fn validate_caffeine_amount(amount_mg: i32) -> Result<(), String> {
    if amount_mg < 1 {
        return Err("Amount must be positive".to_string());
    }
    if amount_mg > 1000 {
        return Err("Amount cannot exceed 1000 mg per entry".to_string());
    }
    Ok(())
}

/// Validate sleep quality score (1-10)
pub fn validate_sleep_quality(score: i32) -> Result<(), String> {
    if !(1..=10).contains(&score) {
        return Err("Sleep quality must be between 1 and 10".to_string());
    }
    Ok(())
}

/// Validate heart rate (bpm)
pub fn validate_heart_rate(bpm: i32) -> Result<(), String> {
    if bpm < 20 {
        return Err("Heart rate too low".to_string());
    }
    if bpm > 300 {
        return Err("Heart rate too high".to_string());
    }
    Ok(())
}

/// Validate a macro gram value
pub fn validate_macro_grams(value: Decimal) -> Result<(), String> {
    if value < Decimal::ZERO {
        return Err("Macro value cannot be negative".to_string());
    }
    if value > Decimal::from(10_000) {
        return Err("Macro value unreasonably high".to_string());
    }
    Ok(())
}

/// Validate a calorie count
pub fn validate_calories(calories: i32) -> Result<(), String> {
    if calories < 0 {
        return Err("Calories cannot be negative".to_string());
    }
    if calories > 50_000 {
        return Err("Calorie value unreasonably high".to_string());
    }
    Ok(())
}

/// Validate an item quantity against its serving size
pub fn validate_quantity(quantity: Decimal, serving_size: Decimal) -> Result<(), String> {
    if serving_size <= Decimal::ZERO {
        return Err("Serving size must be positive".to_string());
    }
    if quantity <= Decimal::ZERO {
        return Err("Quantity must be positive".to_string());
    }
    Ok(())
}

/// Validate a non-empty, bounded name field
pub fn validate_name(name: &str, max_len: usize) -> Result<(), String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err("Name cannot be empty".to_string());
    }
    if trimmed.len() > max_len {
        return Err(format!("Name cannot exceed {} characters", max_len));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_validate_email() {
        assert!(validate_email("test@example.com").is_ok());
        assert!(validate_email("user.name@domain.co.uk").is_ok());
        assert!(validate_email("").is_err());
        assert!(validate_email("invalid").is_err());
        assert!(validate_email("no@dot").is_err());
        assert!(validate_email("spaces in@email.com").is_err());
    }

    #[test]
    fn test_validate_password() {
        assert!(validate_password("password123").is_ok());
        assert!(validate_password("12345678").is_ok());
        assert!(validate_password("short").is_err());
        assert!(validate_password(&"a".repeat(129)).is_err());
    }

    #[test]
    fn test_validate_workout_duration() {
        assert!(validate_workout_duration(1).is_ok());
        assert!(validate_workout_duration(45).is_ok());
        assert!(validate_workout_duration(600).is_ok());
        assert!(validate_workout_duration(0).is_err());
        assert!(validate_workout_duration(601).is_err());
    }

    #[test]
    fn test_validate_hydration_amount() {
        assert!(validate_hydration_amount(250).is_ok());
        assert!(validate_hydration_amount(5000).is_ok());
        assert!(validate_hydration_amount(0).is_err());
        assert!(validate_hydration_amount(5001).is_err());
    }

    #[test]
    fn test_validate_caffeine_amount() {
        assert!(validate_caffeine_amount(95).is_ok());
        assert!(validate_caffeine_amount(1000).is_ok());
        assert!(validate_caffeine_amount(0).is_err());
        assert!(validate_caffeine_amount(1001).is_err());
    }

    #[test]
    fn test_validate_sleep_quality() {
        assert!(validate_sleep_quality(1).is_ok());
        assert!(validate_sleep_quality(10).is_ok());
        assert!(validate_sleep_quality(0).is_err());
        assert!(validate_sleep_quality(11).is_err());
    }

    #[test]
    fn test_validate_heart_rate() {
        assert!(validate_heart_rate(60).is_ok());
        assert!(validate_heart_rate(180).is_ok());
        assert!(validate_heart_rate(10).is_err());
        assert!(validate_heart_rate(350).is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(Decimal::from(150), Decimal::from(100)).is_ok());
        assert!(validate_quantity(Decimal::ZERO, Decimal::from(100)).is_err());
        assert!(validate_quantity(Decimal::from(150), Decimal::ZERO).is_err());
        assert!(validate_quantity(Decimal::from(150), Decimal::from(-1)).is_err());
    }

    #[test]
    fn test_validate_name() {
        assert!(validate_name("Overnight oats", 100).is_ok());
        assert!(validate_name("  ", 100).is_err());
        assert!(validate_name(&"x".repeat(101), 100).is_err());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_valid_duration_range(minutes in 1i32..=600) {
            prop_assert!(validate_workout_duration(minutes).is_ok());
        }

        #[test]
        fn prop_invalid_duration_above_max(minutes in 601i32..10_000) {
            prop_assert!(validate_workout_duration(minutes).is_err());
        }

        #[test]
        fn prop_valid_hydration_range(ml in 1i32..=5000) {
            prop_assert!(validate_hydration_amount(ml).is_ok());
        }

        #[test]
        fn prop_valid_caffeine_range(mg in 1i32..=1000) {
            prop_assert!(validate_caffeine_amount(mg).is_ok());
        }

        #[test]
        fn prop_valid_heart_rate_range(bpm in 20i32..=300) {
            prop_assert!(validate_heart_rate(bpm).is_ok());
        }

        #[test]
        fn prop_password_length_valid(len in 8usize..=128) {
            let password: String = (0..len).map(|_| 'a').collect();
            prop_assert!(validate_password(&password).is_ok());
        }

        #[test]
        fn prop_nonneg_macro_grams_valid(cents in 0i64..=1_000_000) {
            let value = Decimal::new(cents, 2);
            prop_assert!(validate_macro_grams(value).is_ok());
        }
    }
}
