use super::*;

/// Tests creating a biome and reading it back by name.
///
/// Expected: 201, then 200 with empty images and posts
#[tokio::test]
async fn creates_and_gets_biome() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let uploads = tempfile::tempdir().unwrap();

    let (status, _) = send(
        app(db, &uploads),
        json_request(
            Method::POST,
            "/biome",
            json!({
                "name": "Pampa",
                "introduction": "Campos do sul",
                "generalCharacteristics": "Relevo suave",
                "naturalResources": "Pastagens naturais",
                "environmentalProblems": "Arenização",
                "conservation": "Poucas unidades de conservação"
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) =
        send(app(db, &uploads), empty_request(Method::GET, "/biome/Pampa")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Pampa");
    assert_eq!(body["images"], json!([]));
    assert_eq!(body["posts"], json!([]));
}

/// Tests creating a biome with a name that is already used.
///
/// Expected: 409
#[tokio::test]
async fn rejects_duplicate_biome_name() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let uploads = tempfile::tempdir().unwrap();

    let existing = factory::create_biome(db).await.unwrap();

    let (status, body) = send(
        app(db, &uploads),
        json_request(
            Method::POST,
            "/biome",
            json!({
                "name": existing.name,
                "introduction": "a",
                "generalCharacteristics": "b",
                "naturalResources": "c",
                "environmentalProblems": "d",
                "conservation": "e"
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body["error"].is_string());
}

/// Tests deleting a biome.
///
/// Expected: 204 with an empty body, then 404 by name
#[tokio::test]
async fn deletes_biome_with_no_content() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let uploads = tempfile::tempdir().unwrap();

    let biome = factory::create_biome(db).await.unwrap();

    let (status, body) = send(
        app(db, &uploads),
        json_request(Method::DELETE, "/biomes/", json!({ "id": biome.id })),
    )
    .await;

    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let uri = format!("/biome/{}", biome.name.replace(' ', "%20"));
    let (status, _) = send(app(db, &uploads), empty_request(Method::GET, &uri)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

/// Tests searching biomes without sending a body.
///
/// Expected: 400 with an `error` message
#[tokio::test]
async fn search_without_body_is_bad_request() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let uploads = tempfile::tempdir().unwrap();

    let (status, body) = send(app(db, &uploads), empty_request(Method::GET, "/biomes/")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}
