//! HTMLページ組み立て
//!
//! ランディングページと登録完了ページ。ユーザーやストア由来の文字列は
//! 必ずエスケープしてから埋め込む。

use subdash_common::html;

const PAGE_STYLE: &str = "\
body { font-family: Arial, sans-serif; background: linear-gradient(135deg, #667eea, #764ba2); \
color: white; text-align: center; padding: 50px; } \
input, button { padding: 10px; border-radius: 5px; border: none; margin: 5px; } \
button { background: white; color: #764ba2; font-weight: bold; cursor: pointer; } \
a { color: #ffffff; font-weight: bold; text-decoration: underline; }";

/// ランディングページ
///
/// ストアのステータス行、現在の購読者数、登録フォームを表示する。
pub fn home(service_name: &str, store_status: &str, count: i64) -> String {
    let body = format!(
        "<h1>👋 Welcome to {name}</h1>\n\
         <p>{status}</p>\n\
         <p>📄 Total Subscribers: {count}</p>\n\
         <form action=\"/register\" method=\"POST\">\n\
         <input name=\"name\" placeholder=\"Enter Your Name\" required />\n\
         <input name=\"email\" type=\"email\" placeholder=\"Enter Your Email\" required />\n\
         <button type=\"submit\">Subscribe</button>\n\
         </form>\n\
         <br>\n\
         <a href=\"/users\">🔍 View all users</a>",
        name = html::escape(service_name),
        status = html::escape(store_status),
        count = count,
    );
    html::page(service_name, PAGE_STYLE, &body)
}

/// 登録完了ページ
pub fn success(name: &str) -> String {
    let body = format!(
        "<h2>✅ Thank you, <b>{}</b>! You're subscribed!</h2>\n\
         <a href=\"/\">⬅️ Back</a>",
        html::escape(name),
    );
    html::page("Subscribed", PAGE_STYLE, &body)
}
