//! プレゼンター
//!
//! 集約結果をHTMLページへ変換する純粋関数。バックエンド由来の文字列は
//! すべてエスケープし、信頼済みマークアップはこのモジュール自身が
//! 生成したものに限る。

use subdash_common::html;
use subdash_common::protocol::UserListing;

use crate::probe::{ProbeOutcome, ServiceReport};

const PAGE_STYLE: &str = "\
body { font-family: Arial, sans-serif; background: #f5f5f5; padding: 20px; } \
.service { background: white; border-radius: 10px; padding: 20px; margin-bottom: 20px; \
box-shadow: 0 0 10px rgba(0,0,0,0.1); } \
h2 { color: #333; } \
.status { font-weight: bold; margin-bottom: 10px; } \
.error { color: #b00020; }";

/// ダッシュボードページ全体を描画する
///
/// 集約結果の順序をそのまま保ち、1件につき1セクションを出力する。
pub fn render_dashboard(reports: &[ServiceReport]) -> String {
    let mut body = String::from("<h1>📊 Microservices Dashboard</h1>\n");
    for report in reports {
        body.push_str(&render_service(report));
    }
    html::page("Microservices Dashboard", PAGE_STYLE, &body)
}

/// バックエンド1件分のセクションを描画する
fn render_service(report: &ServiceReport) -> String {
    format!(
        "<div class=\"service\">\n\
         <h2>{name}</h2>\n\
         <p class=\"status\">{status}</p>\n\
         <div>{users}</div>\n\
         </div>\n",
        name = html::escape(&report.name),
        status = html::escape(report.status.display_text()),
        users = render_users(&report.users),
    )
}

/// 一覧取得結果をセクション内のマークアップへ変換する
fn render_users(outcome: &ProbeOutcome) -> String {
    match outcome {
        ProbeOutcome::Ok { body } => match serde_json::from_str::<UserListing>(body) {
            Ok(listing) => render_listing(&listing),
            // 構造化契約に従わない本文はプレーンテキスト扱いで表示する
            Err(_) => format!("<pre>{}</pre>", html::escape(body)),
        },
        ProbeOutcome::Failed { failure } => {
            format!("<p class=\"error\">{}</p>", html::escape(&failure.detail))
        }
    }
}

fn render_listing(listing: &UserListing) -> String {
    let mut out = format!("<p>📄 {} subscribers</p>\n<ul>\n", listing.count);
    for user in &listing.users {
        out.push_str(&format!(
            "<li><b>{}</b> &ndash; {}</li>\n",
            html::escape(&user.name),
            html::escape(&user.email),
        ));
    }
    out.push_str("</ul>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::{FailureKind, ProbeFailure};
    use subdash_common::types::Subscriber;

    fn report(name: &str, status: ProbeOutcome, users: ProbeOutcome) -> ServiceReport {
        ServiceReport {
            name: name.to_string(),
            status,
            users,
        }
    }

    fn failure(kind: FailureKind, detail: &str) -> ProbeOutcome {
        ProbeOutcome::failed(ProbeFailure {
            kind,
            detail: detail.to_string(),
        })
    }

    #[test]
    fn test_one_section_per_report_in_order() {
        let listing = serde_json::to_string(&UserListing::empty()).unwrap();
        let reports = vec![
            report("Node.js", ProbeOutcome::ok("OK"), ProbeOutcome::ok(listing.as_str())),
            report("Python", ProbeOutcome::ok("OK"), ProbeOutcome::ok(listing.as_str())),
            report("Go", ProbeOutcome::ok("OK"), ProbeOutcome::ok(listing.as_str())),
        ];

        let html = render_dashboard(&reports);

        assert_eq!(html.matches("<div class=\"service\">").count(), 3);
        let node = html.find("<h2>Node.js</h2>").unwrap();
        let python = html.find("<h2>Python</h2>").unwrap();
        let go = html.find("<h2>Go</h2>").unwrap();
        assert!(node < python && python < go);
    }

    #[test]
    fn test_structured_listing_is_rendered() {
        let listing = UserListing::new(vec![
            Subscriber::new("Alice", "alice@x.com", "svc-a"),
            Subscriber::new("Bob", "bob@x.com", "svc-a"),
        ]);
        let body = serde_json::to_string(&listing).unwrap();
        let reports = vec![report("A", ProbeOutcome::ok("OK"), ProbeOutcome::ok(body))];

        let html = render_dashboard(&reports);

        assert!(html.contains("📄 2 subscribers"));
        assert!(html.contains("<li><b>Alice</b> &ndash; alice@x.com</li>"));
        assert!(html.contains("<li><b>Bob</b> &ndash; bob@x.com</li>"));
    }

    #[test]
    fn test_backend_strings_are_escaped() {
        let listing = UserListing::new(vec![Subscriber::new(
            "<script>alert('x')</script>",
            "<b>bold</b>@x.com",
            "svc-a",
        )]);
        let body = serde_json::to_string(&listing).unwrap();
        let reports = vec![report(
            "<img src=x>",
            ProbeOutcome::ok("<script>evil()</script>"),
            ProbeOutcome::ok(body),
        )];

        let html = render_dashboard(&reports);

        assert!(!html.contains("<script>"));
        assert!(!html.contains("<img src=x>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("&lt;img src=x&gt;"));
    }

    #[test]
    fn test_failure_markers_are_shown() {
        let reports = vec![report(
            "Dead",
            failure(FailureKind::Transport, "❌ unreachable: connection refused"),
            failure(FailureKind::Transport, "❌ no data: connection refused"),
        )];

        let html = render_dashboard(&reports);

        assert!(html.contains("❌ unreachable: connection refused"));
        assert!(html.contains("❌ no data: connection refused"));
        assert!(html.contains("class=\"error\""));
    }

    #[test]
    fn test_unparseable_users_body_falls_back_to_text() {
        let reports = vec![report(
            "A",
            ProbeOutcome::ok("OK"),
            ProbeOutcome::ok("<h2>legacy markup</h2>"),
        )];

        let html = render_dashboard(&reports);

        // 旧式のマークアップ本文も生のままは埋め込まない
        assert!(html.contains("<pre>&lt;h2&gt;legacy markup&lt;/h2&gt;</pre>"));
        assert!(!html.contains("<h2>legacy markup</h2>"));
    }

    #[test]
    fn test_empty_result_set_renders_heading_only() {
        let html = render_dashboard(&[]);
        assert!(html.contains("📊 Microservices Dashboard"));
        assert!(!html.contains("<div class=\"service\">"));
    }
}
