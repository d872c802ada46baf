use super::*;

#[tokio::test]
async fn listing_message_names_the_user() {
    let Json(body) = list_documents(Path("user-7".to_owned())).await;
    assert_eq!(body["message"], "Placeholder for documents of user user-7");
}

#[tokio::test]
async fn creation_message_names_the_user() {
    let Json(body) = create_document(Path("user-7".to_owned())).await;
    assert_eq!(
        body["message"],
        "Placeholder for creating a new document for user user-7"
    );
}
