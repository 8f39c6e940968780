//! HTMLヘルパー
//!
//! バックエンドやフォーム由来の文字列を埋め込む前のエスケープ処理と、
//! ページ全体の組み立て

/// HTML特殊文字をエスケープする
///
/// 外部由来の文字列は信頼しない。マークアップへ埋め込む前に必ず通す。
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// ページ全体を組み立てる
///
/// `style` と `body` は呼び出し側が生成した信頼済みマークアップに限る。
/// 外部由来の文字列は呼び出し側で [`escape`] を通してから `body` に含めること。
pub fn page(title: &str, style: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>{title}</title>\n\
         <style>{style}</style>\n\
         </head>\n\
         <body>\n\
         {body}\n\
         </body>\n\
         </html>\n",
        title = escape(title),
        style = style,
        body = body,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_replaces_special_characters() {
        assert_eq!(
            escape("<script>alert('x')</script>"),
            "&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"
        );
        assert_eq!(escape("a & b"), "a &amp; b");
        assert_eq!(escape("say \"hi\""), "say &quot;hi&quot;");
    }

    #[test]
    fn test_escape_passes_plain_text_through() {
        assert_eq!(escape("Alice"), "Alice");
        assert_eq!(escape("✅ healthy"), "✅ healthy");
        assert_eq!(escape(""), "");
    }

    #[test]
    fn test_page_escapes_title_but_trusts_body() {
        let html = page("<t>", "body { margin: 0; }", "<h1>hello</h1>");
        assert!(html.contains("<title>&lt;t&gt;</title>"));
        assert!(html.contains("<h1>hello</h1>"));
        assert!(html.contains("body { margin: 0; }"));
        assert!(html.starts_with("<!DOCTYPE html>"));
    }
}
