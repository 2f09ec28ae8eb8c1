//! Speech Markup - SSML 请求体
//!
//! 把回复文本包进 `<speak><voice name="...">...</voice></speak>`

/// 构建 SSML 请求体
///
/// 文本和音色名都会做 XML 转义，回复里的 `<`、`&` 等字符不会破坏请求结构
pub fn build_ssml(voice: &str, text: &str) -> String {
    format!(
        "<speak><voice name=\"{}\">{}</voice></speak>",
        escape_xml(voice),
        escape_xml(text)
    )
}

/// XML 转义
pub fn escape_xml(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
