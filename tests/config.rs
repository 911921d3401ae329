use std::time::Duration;

use ui_checks::BrowserSession;

#[test]
fn builder_defaults() {
    let config = BrowserSession::builder().build_config();

    assert!(config.headless);
    assert_eq!(config.viewport_width, 1920);
    assert_eq!(config.viewport_height, 1080);
    assert!(config.chrome_path.is_none());
    assert_eq!(config.default_timeout, Duration::from_secs(30));
}

#[test]
fn builder_overrides() {
    let config = BrowserSession::builder()
        .headless(false)
        .viewport(1280, 800)
        .chrome_path("/usr/bin/chromium")
        .timeout(Duration::from_secs(5))
        .build_config();

    assert!(!config.headless);
    assert_eq!(config.viewport_width, 1280);
    assert_eq!(config.viewport_height, 800);
    assert_eq!(config.chrome_path.as_deref(), Some("/usr/bin/chromium"));
    assert_eq!(config.default_timeout, Duration::from_secs(5));
}
