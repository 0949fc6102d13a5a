use field_diff::{render_html, DiffResult, DiffSpan, TextDiff};

#[test]
fn test_pretty_html_insertion() {
    let html = TextDiff::pretty_html("The quick fox", "The quick brown fox");
    insta::assert_snapshot!(html, @r#"<span>The quick </span><ins style="background:#e6ffe6;">brown </ins><span>fox</span>"#);
}

#[test]
fn test_pretty_html_deletion() {
    let html = TextDiff::pretty_html("Self-paced course", "");
    insta::assert_snapshot!(html, @r#"<del style="background:#ffe6e6;">Self-paced course</del>"#);
}

#[test]
fn test_markup_in_content_is_escaped() {
    let html = TextDiff::pretty_html("", "<script>alert(1)</script>");
    insta::assert_snapshot!(html, @r#"<ins style="background:#e6ffe6;">&lt;script&gt;alert(1)&lt;/script&gt;</ins>"#);
}

#[test]
fn test_every_operation_rendered() {
    let diff = DiffResult::new(vec![
        DiffSpan::equal("a & b"),
        DiffSpan::delete("<i>"),
        DiffSpan::insert("\"c\""),
    ]);
    insta::assert_snapshot!(render_html(&diff), @r#"<span>a &amp; b</span><del style="background:#ffe6e6;">&lt;i&gt;</del><ins style="background:#e6ffe6;">&quot;c&quot;</ins>"#);
}
