use super::*;

fn names(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|s| (*s).to_owned()).collect()
}

#[test]
fn swatches_normalize_theme_names() {
    let out = swatches(&names(&["green", "theme-blue", "dark orange"]));
    let tokens: Vec<_> = out.iter().map(|s| s.token.as_str()).collect();
    assert_eq!(tokens, ["theme-green", "theme-blue", "theme-dark-orange"]);
    assert_eq!(out[2].label, "dark-orange");
    assert_eq!(out[1].class, "theme-swatch swatch-blue");
}

#[test]
fn swatches_drop_duplicates_after_normalization() {
    let out = swatches(&names(&["green", "theme-green", " green "]));
    assert_eq!(out.len(), 1);
}

#[test]
fn blank_theme_name_becomes_default_swatch() {
    let out = swatches(&names(&[""]));
    assert_eq!(out[0].token, ThemeToken::default().as_str());
}

#[test]
fn mode_buttons_match_mode_tokens() {
    for (token, _) in MODES {
        let mode = ModeToken::parse(token);
        assert_eq!(mode.as_str(), token);
        assert!(mode.button_id().starts_with("btn-"));
    }
}

#[test]
fn default_font_size_is_inside_slider_range() {
    let pct = FontSize::default().percent();
    assert!((FONT_MIN..=FONT_MAX).contains(&pct));
    assert_eq!((pct - FONT_MIN) % FONT_STEP, 0);
}
