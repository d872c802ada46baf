use super::*;

#[tokio::test]
async fn listing_has_the_two_sample_rows() {
    let Json(rows) = list_templates().await;
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].id, 1);
    assert_eq!(rows[0].name, "Sample Template 1");
    assert_eq!(rows[1].id, 2);
    assert_eq!(rows[1].name, "Sample Template 2");
}

#[tokio::test]
async fn detail_echoes_the_requested_id() {
    let Json(body) = get_template(Path("42".to_owned())).await;
    assert_eq!(body["id"], "42");
    assert_eq!(body["name"], "Sample Template 42");
}

#[tokio::test]
async fn detail_accepts_non_numeric_ids() {
    // No validation exists; any path segment is echoed verbatim.
    let Json(body) = get_template(Path("abc".to_owned())).await;
    assert_eq!(body["id"], "abc");
}
