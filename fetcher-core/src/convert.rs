pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_points() {
        assert_eq!(celsius_to_fahrenheit(0.0), 32.0);
        assert_eq!(celsius_to_fahrenheit(100.0), 212.0);
        assert_eq!(celsius_to_fahrenheit(-40.0), -40.0);
    }

    #[test]
    fn parsed_value_formats_stably() {
        let first = format!("{:.2}", celsius_to_fahrenheit("25.3".parse().unwrap()));
        let second = format!("{:.2}", celsius_to_fahrenheit("25.3".parse().unwrap()));
        assert_eq!(first, "77.54");
        assert_eq!(first, second);
    }
}
