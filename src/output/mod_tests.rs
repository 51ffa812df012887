use super::*;

#[test]
fn color_mode_defaults_to_auto() {
    assert_eq!(ColorMode::default(), ColorMode::Auto);
}

#[test]
fn default_stats_are_ok() {
    assert!(RunStats::default().is_ok());
}
