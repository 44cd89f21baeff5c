use luckydraw_shared::DrawConfig;

/// Settings baked into this build of the page.
///
/// `LUCKYDRAW_ACCESS_CODE` and `LUCKYDRAW_FORM_ENDPOINT` may be set when
/// compiling to replace the built-in code and form endpoint.
pub fn draw_config() -> DrawConfig {
    let mut config = DrawConfig::default();
    if let Some(code) = option_env!("LUCKYDRAW_ACCESS_CODE") {
        config = config.with_access_code(code);
    }
    if let Some(endpoint) = option_env!("LUCKYDRAW_FORM_ENDPOINT") {
        config = config.with_form_endpoint(endpoint);
    }
    config
}
