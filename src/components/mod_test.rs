use super::*;
use crate::config::UiConfig;

#[test]
fn config_block_round_trips_through_from_json() {
    let html = config_block(r#"{"timing":{"loading_ms":10}}"#);
    let start = html.find('>').map_or(0, |i| i + 1);
    let end = html.rfind("</script>").unwrap_or(html.len());
    let config = UiConfig::from_json(&html[start..end]).unwrap();
    assert_eq!(config.timing.loading_ms, 10);
    assert!(html.contains(r#"id="admin-ui-config""#));
}

#[test]
fn config_block_cannot_close_its_script() {
    let html = config_block(r#"{"messages":{"select_rank":"</script><b>"}}"#);
    assert_eq!(html.matches("</script>").count(), 1);
    assert!(html.ends_with("</script>"));
}
